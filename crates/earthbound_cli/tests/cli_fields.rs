use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

use earthbound_core::save::character::{PartyMember, RollingStat};
use earthbound_core::save::SaveRecord;
use serde_json::Value;

fn sample_record() -> SaveRecord {
    let mut record = SaveRecord {
        player_name: "Ness".to_string(),
        pet_name: "King".to_string(),
        favorite_food: "Steak".to_string(),
        favorite_thing: "Rockin".to_string(),
        money: 4_286,
        atm: 50_000,
        ..SaveRecord::default()
    };
    record.party[0] = PartyMember {
        name: "Ness".to_string(),
        level: 23,
        hp: RollingStat {
            value: 183,
            rolling_value: 183,
        },
        ..PartyMember::default()
    };
    record.event_flags[764] = true;
    record
}

fn write_fixture(label: &str) -> PathBuf {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = std::env::temp_dir().join(format!("earthbound-se-{label}-{stamp}.srm"));
    fs::write(&path, sample_record().encode().expect("fixture encodes")).expect("fixture writes");
    path
}

fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_earthbound-se"))
        .args(args)
        .output()
        .expect("binary runs")
}

#[test]
fn field_mode_prints_key_value_pairs() {
    let fixture = write_fixture("fields");
    let output = run_cli(&[fixture.to_str().unwrap(), "--name", "--money", "--flags-set"]);
    let _ = fs::remove_file(&fixture);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(stdout.contains("name=Ness"));
    assert!(stdout.contains("money=4286"));
    assert!(stdout.contains("flags_set=1"));
}

#[test]
fn json_mode_emits_the_full_document() {
    let fixture = write_fixture("json");
    let output = run_cli(&[fixture.to_str().unwrap(), "--json"]);
    let _ = fs::remove_file(&fixture);

    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(json["player_name"], "Ness");
    assert_eq!(json["party"][0]["level"], 23);
    assert_eq!(json["event_flags_set"], 1);
}

#[test]
fn edits_write_a_new_save_file() {
    let fixture = write_fixture("edit-in");
    let out_path = std::env::temp_dir().join(format!(
        "earthbound-se-edit-out-{}.srm",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos()
    ));

    let output = run_cli(&[
        fixture.to_str().unwrap(),
        "--set-money",
        "9999",
        "--set-flag",
        "10=1",
        "--output",
        out_path.to_str().unwrap(),
    ]);
    assert!(output.status.success());

    let edited = fs::read(&out_path).expect("edited save exists");
    let record = SaveRecord::decode(&edited).expect("edited save decodes");
    assert_eq!(record.money, 9_999);
    assert!(record.event_flags[10]);
    assert!(record.event_flags[764], "untouched flags survive the edit");
    assert_eq!(record.player_name, "Ness");

    let _ = fs::remove_file(&fixture);
    let _ = fs::remove_file(&out_path);
}

#[test]
fn edit_flags_without_output_are_a_usage_error() {
    let fixture = write_fixture("usage");
    let output = run_cli(&[fixture.to_str().unwrap(), "--set-money", "1"]);
    let _ = fs::remove_file(&fixture);

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn garbage_input_fails_with_a_parse_error() {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = std::env::temp_dir().join(format!("earthbound-se-garbage-{stamp}.srm"));
    fs::write(&path, vec![0u8; 64]).expect("writes");

    let output = run_cli(&[path.to_str().unwrap()]);
    let _ = fs::remove_file(&path);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("Error parsing save file"));
}
