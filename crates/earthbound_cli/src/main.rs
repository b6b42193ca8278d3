use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use earthbound_core::core_api::{Engine, Session};
use earthbound_render::{snapshot_json, text_summary, JsonStyle, TextStyle};
use serde_json::{Map as JsonMap, Value as JsonValue};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(value_name = "SAVE.SRM")]
    path: PathBuf,
    #[arg(long)]
    name: bool,
    #[arg(long)]
    pet: bool,
    #[arg(long)]
    food: bool,
    #[arg(long)]
    thing: bool,
    #[arg(long)]
    money: bool,
    #[arg(long)]
    atm: bool,
    #[arg(long)]
    timer: bool,
    #[arg(long)]
    location: bool,
    #[arg(long)]
    settings: bool,
    #[arg(long)]
    party: bool,
    #[arg(long)]
    escargo: bool,
    #[arg(long = "flags-set")]
    flags_set: bool,
    #[arg(long)]
    json: bool,
    #[arg(long = "set-name")]
    set_name: Option<String>,
    #[arg(long = "set-pet")]
    set_pet: Option<String>,
    #[arg(long = "set-food")]
    set_food: Option<String>,
    #[arg(long = "set-thing")]
    set_thing: Option<String>,
    #[arg(long = "set-money")]
    set_money: Option<u32>,
    #[arg(long = "set-atm")]
    set_atm: Option<u32>,
    #[arg(long = "set-timer")]
    set_timer: Option<u32>,
    /// Set an event flag, e.g. --set-flag 764=1. May be repeated.
    #[arg(long = "set-flag", value_name = "INDEX=0|1")]
    set_flag: Vec<String>,
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Default, Clone, Copy)]
struct FieldSelection {
    name: bool,
    pet: bool,
    food: bool,
    thing: bool,
    money: bool,
    atm: bool,
    timer: bool,
    location: bool,
    settings: bool,
    party: bool,
    escargo: bool,
    flags_set: bool,
}

impl FieldSelection {
    fn from_cli(cli: &Cli) -> Self {
        Self {
            name: cli.name,
            pet: cli.pet,
            food: cli.food,
            thing: cli.thing,
            money: cli.money,
            atm: cli.atm,
            timer: cli.timer,
            location: cli.location,
            settings: cli.settings,
            party: cli.party,
            escargo: cli.escargo,
            flags_set: cli.flags_set,
        }
    }

    fn is_field_mode(&self) -> bool {
        self.name
            || self.pet
            || self.food
            || self.thing
            || self.money
            || self.atm
            || self.timer
            || self.location
            || self.settings
            || self.party
            || self.escargo
            || self.flags_set
    }

    fn selected_pairs(&self, session: &Session) -> Vec<(&'static str, String)> {
        let snapshot = session.snapshot();
        let mut out = Vec::new();

        if self.name {
            out.push(("name", snapshot.player_name.clone()));
        }
        if self.pet {
            out.push(("pet", snapshot.pet_name.clone()));
        }
        if self.food {
            out.push(("food", snapshot.favorite_food.clone()));
        }
        if self.thing {
            out.push(("thing", snapshot.favorite_thing.clone()));
        }
        if self.money {
            out.push(("money", snapshot.money.to_string()));
        }
        if self.atm {
            out.push(("atm", snapshot.atm.to_string()));
        }
        if self.timer {
            out.push(("timer", snapshot.timer.to_string()));
        }
        if self.location {
            out.push((
                "location",
                format!("{},{}", snapshot.location.x, snapshot.location.y),
            ));
            out.push((
                "exit_mouse",
                format!(
                    "{},{}",
                    snapshot.exit_mouse_location.x, snapshot.exit_mouse_location.y
                ),
            ));
        }
        if self.settings {
            out.push(("text_speed", snapshot.text_speed.clone()));
            out.push(("sound", snapshot.sound_setting.clone()));
            out.push(("window", snapshot.window_flavor.clone()));
        }
        if self.party {
            for member in &snapshot.party {
                if member.name.is_empty() {
                    continue;
                }
                out.push((
                    "party",
                    format!(
                        "{} Lv{} HP{} PP{} [{}]",
                        member.name,
                        member.level,
                        member.hp.value,
                        member.pp.value,
                        member.permanent_status
                    ),
                ));
            }
        }
        if self.escargo {
            for entry in &snapshot.escargo_express {
                let name = entry
                    .name
                    .clone()
                    .unwrap_or_else(|| format!("item 0x{:02X}", entry.item));
                out.push(("escargo", format!("slot {}: {}", entry.slot, name)));
            }
        }
        if self.flags_set {
            out.push(("flags_set", snapshot.event_flags_set.to_string()));
        }

        out
    }

    fn selected_json(&self, session: &Session) -> JsonMap<String, JsonValue> {
        let snapshot = session.snapshot();
        let full = snapshot_json(snapshot, JsonStyle::CanonicalV1);
        let mut out = JsonMap::new();

        let mut take = |key: &str| {
            if let Some(value) = full.get(key) {
                out.insert(key.to_string(), value.clone());
            }
        };

        if self.name {
            take("player_name");
        }
        if self.pet {
            take("pet_name");
        }
        if self.food {
            take("favorite_food");
        }
        if self.thing {
            take("favorite_thing");
        }
        if self.money {
            take("money");
        }
        if self.atm {
            take("atm");
        }
        if self.timer {
            take("timer");
        }
        if self.location {
            take("location");
            take("exit_mouse_location");
        }
        if self.settings {
            take("text_speed");
            take("sound_setting");
            take("window_flavor");
        }
        if self.party {
            take("party");
        }
        if self.escargo {
            take("escargo_express");
        }
        if self.flags_set {
            take("event_flags_set");
        }

        out
    }
}

fn main() {
    let cli = Cli::parse();
    let fields = FieldSelection::from_cli(&cli);

    let flag_edits = cli
        .set_flag
        .iter()
        .map(|raw| parse_flag_edit(raw))
        .collect::<Result<Vec<_>, _>>()
        .unwrap_or_else(|message: String| {
            eprintln!("{message}");
            process::exit(2);
        });

    let has_edits = cli.set_name.is_some()
        || cli.set_pet.is_some()
        || cli.set_food.is_some()
        || cli.set_thing.is_some()
        || cli.set_money.is_some()
        || cli.set_atm.is_some()
        || cli.set_timer.is_some()
        || !flag_edits.is_empty();

    if has_edits && cli.output.is_none() {
        eprintln!("--set-* flags require --output <PATH>");
        process::exit(2);
    }
    if !has_edits && cli.output.is_some() {
        eprintln!("--output requires at least one --set-* flag");
        process::exit(2);
    }

    let bytes = fs::read(&cli.path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {e}", cli.path.display());
        process::exit(1);
    });

    let engine = Engine::new();
    let mut session = engine.open_bytes(bytes).unwrap_or_else(|e| {
        eprintln!("Error parsing save file: {}", cli.path.display());
        eprintln!("  {}", e);
        process::exit(1);
    });

    if let Some(name) = &cli.set_name {
        session.set_player_name(name).unwrap_or_else(|e| {
            eprintln!("Error applying name edit: {e}");
            process::exit(1);
        });
    }
    if let Some(pet) = &cli.set_pet {
        session.set_pet_name(pet).unwrap_or_else(|e| {
            eprintln!("Error applying pet name edit: {e}");
            process::exit(1);
        });
    }
    if let Some(food) = &cli.set_food {
        session.set_favorite_food(food).unwrap_or_else(|e| {
            eprintln!("Error applying favorite food edit: {e}");
            process::exit(1);
        });
    }
    if let Some(thing) = &cli.set_thing {
        session.set_favorite_thing(thing).unwrap_or_else(|e| {
            eprintln!("Error applying favorite thing edit: {e}");
            process::exit(1);
        });
    }
    if let Some(money) = cli.set_money {
        session.set_money(money);
    }
    if let Some(atm) = cli.set_atm {
        session.set_atm(atm);
    }
    if let Some(timer) = cli.set_timer {
        session.set_timer(timer);
    }
    for (index, value) in flag_edits {
        session.set_event_flag(index, value).unwrap_or_else(|e| {
            eprintln!("Error applying event flag edit: {e}");
            process::exit(1);
        });
    }

    if has_edits {
        let out_path = cli.output.as_ref().expect("checked above");
        let edited_bytes = session.to_bytes().unwrap_or_else(|e| {
            eprintln!("Error creating modified save bytes: {e}");
            process::exit(1);
        });
        fs::write(out_path, edited_bytes).unwrap_or_else(|e| {
            eprintln!("Error writing {}: {e}", out_path.display());
            process::exit(1);
        });
    }

    if cli.json {
        let json = if fields.is_field_mode() {
            JsonValue::Object(fields.selected_json(&session))
        } else {
            snapshot_json(session.snapshot(), JsonStyle::CanonicalV1)
        };
        let rendered = serde_json::to_string_pretty(&json).unwrap_or_else(|e| {
            eprintln!("Error rendering JSON output: {e}");
            process::exit(1);
        });
        println!("{rendered}");
        return;
    }

    if fields.is_field_mode() {
        for (key, value) in fields.selected_pairs(&session) {
            println!("{key}={value}");
        }
        return;
    }

    if cli.output.is_some() {
        let out_path = cli.output.as_ref().expect("checked above");
        println!("Wrote edited save to {}", out_path.display());
        return;
    }

    print!("{}", text_summary(session.snapshot(), TextStyle::SaveMenu));
}

fn parse_flag_edit(raw: &str) -> Result<(usize, bool), String> {
    let (index, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("invalid --set-flag value '{raw}', expected INDEX=0|1"))?;
    let index: usize = index
        .parse()
        .map_err(|_| format!("invalid event flag index '{index}'"))?;
    let value = match value {
        "0" => false,
        "1" => true,
        other => return Err(format!("invalid event flag value '{other}', expected 0 or 1")),
    };
    Ok((index, value))
}
