use earthbound_core::core_api::{CoreErrorCode, Engine};
use earthbound_core::save::character::{EquipmentChangeableStat, PartyMember, RollingStat};
use earthbound_core::save::types::SAVE_LENGTH;
use earthbound_core::save::SaveRecord;

fn sample_bytes() -> Vec<u8> {
    let mut record = SaveRecord {
        player_name: "Ness".to_string(),
        pet_name: "King".to_string(),
        favorite_food: "Steak".to_string(),
        favorite_thing: "Rockin".to_string(),
        money: 1_234,
        atm: 50_000,
        ..SaveRecord::default()
    };

    record.party[0] = PartyMember {
        name: "Ness".to_string(),
        level: 10,
        experience: 5_000,
        hp: RollingStat {
            value: 90,
            rolling_value: 90,
        },
        ..PartyMember::default()
    };
    record.party[0].stats[0] = EquipmentChangeableStat {
        value: 30,
        base_value: 24,
    };
    record.party[0].inventory.slots[0] = 0x01; // Cracked bat
    record.party[0].inventory.equips[0] = 1;

    record.event_flags[7] = true;
    record.event_flags[1000] = true;

    record.encode().expect("sample encodes")
}

#[test]
fn open_bytes_builds_a_snapshot() {
    let session = Engine::new().open_bytes(sample_bytes()).expect("opens");
    let snapshot = session.snapshot();

    assert_eq!(snapshot.player_name, "Ness");
    assert_eq!(snapshot.pet_name, "King");
    assert_eq!(snapshot.favorite_thing, "Rockin");
    assert_eq!(snapshot.money, 1_234);
    assert_eq!(snapshot.atm, 50_000);
    assert_eq!(snapshot.text_speed, "Medium");
    assert_eq!(snapshot.event_flags_set, 2);

    let ness = &snapshot.party[0];
    assert_eq!(ness.name, "Ness");
    assert_eq!(ness.level, 10);
    assert!(ness.conscious);
    assert_eq!(ness.stats[0].value, 30);
    assert_eq!(ness.stats[0].bonus, 6);
    assert_eq!(ness.inventory.len(), 1);
    assert_eq!(ness.inventory[0].name.as_deref(), Some("Cracked bat"));
    assert_eq!(ness.equips[0].name.as_deref(), Some("Cracked bat"));
}

#[test]
fn open_bytes_rejects_garbage() {
    let err = Engine::new().open_bytes(vec![0u8; 64]).unwrap_err();
    assert_eq!(err.code, CoreErrorCode::Parse);
}

#[test]
fn open_bytes_rejects_a_record_with_invalid_settings() {
    // Right length, but every byte zero: the text-speed byte is outside its
    // enum range, so the whole record is rejected.
    let err = Engine::new().open_bytes(vec![0u8; SAVE_LENGTH]).unwrap_err();
    assert_eq!(err.code, CoreErrorCode::Parse);
}

#[test]
fn edits_roundtrip_through_to_bytes() {
    let mut session = Engine::new().open_bytes(sample_bytes()).expect("opens");

    session.set_money(9_999);
    session.set_player_name("Picky").expect("fits");
    session.set_event_flag(0, true).expect("in range");
    session.set_member_level(0, 42).expect("valid slot");
    session.set_member_hp(0, 250).expect("valid slot");

    let bytes = session.to_bytes().expect("encodes");
    let reopened = Engine::new().open_bytes(bytes).expect("reopens");
    let snapshot = reopened.snapshot();

    assert_eq!(snapshot.money, 9_999);
    assert_eq!(snapshot.player_name, "Picky");
    assert_eq!(snapshot.event_flags_set, 3);
    assert_eq!(snapshot.party[0].level, 42);
    assert_eq!(snapshot.party[0].hp.value, 250);
    assert_eq!(snapshot.party[0].hp.rolling_value, 250);
}

#[test]
fn set_member_stat_preserves_the_equipment_bonus() {
    let mut session = Engine::new().open_bytes(sample_bytes()).expect("opens");

    session.set_member_stat(0, 0, 50).expect("valid");
    let stat = &session.snapshot().party[0].stats[0];
    assert_eq!(stat.value, 50);
    assert_eq!(stat.base, 44);
    assert_eq!(stat.bonus, 6);
}

#[test]
fn invalid_edits_are_rejected() {
    let mut session = Engine::new().open_bytes(sample_bytes()).expect("opens");

    let err = session.set_pet_name("Snickers").unwrap_err();
    assert_eq!(err.code, CoreErrorCode::InvalidInput);

    let err = session.set_event_flag(1640, true).unwrap_err();
    assert_eq!(err.code, CoreErrorCode::InvalidInput);

    let err = session.set_member_level(4, 1).unwrap_err();
    assert_eq!(err.code, CoreErrorCode::InvalidInput);

    let err = session.set_favorite_thing("Rockin'").unwrap_err();
    assert_eq!(err.code, CoreErrorCode::InvalidInput);
}

#[test]
fn snapshot_serializes_to_json() {
    let session = Engine::new().open_bytes(sample_bytes()).expect("opens");
    let json = serde_json::to_value(session.snapshot()).expect("serializes");

    assert_eq!(json["player_name"], "Ness");
    assert_eq!(json["party"][0]["stats"][0]["name"], "Offense");
}
