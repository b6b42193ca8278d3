use std::fmt::Write as _;

use earthbound_core::core_api::{InventoryEntry, PartyMemberSummary, Snapshot};
use earthbound_core::save::types::EVENT_FLAG_COUNT;
use serde_json::{Map as JsonMap, Value as JsonValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    #[default]
    CanonicalV1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextStyle {
    #[default]
    SaveMenu,
}

/// Render the full snapshot as an ordered JSON document. Key order is part
/// of the canonical style, hence the manual map building.
pub fn snapshot_json(snapshot: &Snapshot, style: JsonStyle) -> JsonValue {
    match style {
        JsonStyle::CanonicalV1 => canonical_v1_json(snapshot),
    }
}

fn canonical_v1_json(snapshot: &Snapshot) -> JsonValue {
    let mut out = JsonMap::new();

    out.insert(
        "player_name".to_string(),
        JsonValue::String(snapshot.player_name.clone()),
    );
    out.insert(
        "pet_name".to_string(),
        JsonValue::String(snapshot.pet_name.clone()),
    );
    out.insert(
        "favorite_food".to_string(),
        JsonValue::String(snapshot.favorite_food.clone()),
    );
    out.insert(
        "favorite_thing".to_string(),
        JsonValue::String(snapshot.favorite_thing.clone()),
    );
    out.insert("money".to_string(), JsonValue::from(snapshot.money));
    out.insert("atm".to_string(), JsonValue::from(snapshot.atm));
    out.insert("timer".to_string(), JsonValue::from(snapshot.timer));
    out.insert(
        "text_speed".to_string(),
        JsonValue::String(snapshot.text_speed.clone()),
    );
    out.insert(
        "sound_setting".to_string(),
        JsonValue::String(snapshot.sound_setting.clone()),
    );
    out.insert(
        "window_flavor".to_string(),
        JsonValue::String(snapshot.window_flavor.clone()),
    );
    out.insert(
        "location".to_string(),
        point_json(snapshot.location.x, snapshot.location.y),
    );
    out.insert(
        "exit_mouse_location".to_string(),
        point_json(snapshot.exit_mouse_location.x, snapshot.exit_mouse_location.y),
    );
    out.insert(
        "escargo_express".to_string(),
        inventory_json(&snapshot.escargo_express),
    );
    out.insert(
        "party".to_string(),
        JsonValue::Array(snapshot.party.iter().map(member_json).collect()),
    );
    out.insert(
        "event_flags_set".to_string(),
        JsonValue::from(snapshot.event_flags_set),
    );

    JsonValue::Object(out)
}

fn point_json(x: u16, y: u16) -> JsonValue {
    let mut m = JsonMap::new();
    m.insert("x".to_string(), JsonValue::from(x));
    m.insert("y".to_string(), JsonValue::from(y));
    JsonValue::Object(m)
}

fn rolling_json(value: u16, rolling_value: u16) -> JsonValue {
    let mut m = JsonMap::new();
    m.insert("value".to_string(), JsonValue::from(value));
    m.insert("rolling_value".to_string(), JsonValue::from(rolling_value));
    JsonValue::Object(m)
}

fn inventory_json(entries: &[InventoryEntry]) -> JsonValue {
    JsonValue::Array(
        entries
            .iter()
            .map(|entry| {
                let mut m = JsonMap::new();
                m.insert("slot".to_string(), JsonValue::from(entry.slot));
                m.insert("item".to_string(), JsonValue::from(entry.item));
                m.insert(
                    "name".to_string(),
                    match &entry.name {
                        Some(name) => JsonValue::String(name.clone()),
                        None => JsonValue::Null,
                    },
                );
                JsonValue::Object(m)
            })
            .collect(),
    )
}

fn member_json(member: &PartyMemberSummary) -> JsonValue {
    let mut m = JsonMap::new();
    m.insert("slot".to_string(), JsonValue::from(member.slot));
    m.insert("name".to_string(), JsonValue::String(member.name.clone()));
    m.insert("level".to_string(), JsonValue::from(member.level));
    m.insert("experience".to_string(), JsonValue::from(member.experience));
    m.insert("hp".to_string(), rolling_json(member.hp.value, member.hp.rolling_value));
    m.insert("pp".to_string(), rolling_json(member.pp.value, member.pp.rolling_value));
    m.insert(
        "permanent_status".to_string(),
        JsonValue::String(member.permanent_status.clone()),
    );
    m.insert(
        "possession_status".to_string(),
        JsonValue::String(member.possession_status.clone()),
    );
    m.insert("conscious".to_string(), JsonValue::Bool(member.conscious));
    m.insert(
        "stats".to_string(),
        JsonValue::Array(
            member
                .stats
                .iter()
                .map(|stat| {
                    let mut s = JsonMap::new();
                    s.insert("name".to_string(), JsonValue::String(stat.name.clone()));
                    s.insert("value".to_string(), JsonValue::from(stat.value));
                    s.insert("base".to_string(), JsonValue::from(stat.base));
                    s.insert("bonus".to_string(), JsonValue::from(stat.bonus));
                    JsonValue::Object(s)
                })
                .collect(),
        ),
    );
    m.insert("inventory".to_string(), inventory_json(&member.inventory));
    m.insert(
        "equips".to_string(),
        JsonValue::Array(
            member
                .equips
                .iter()
                .map(|equip| {
                    let mut e = JsonMap::new();
                    e.insert(
                        "slot".to_string(),
                        JsonValue::String(equip.slot_name.clone()),
                    );
                    e.insert(
                        "item".to_string(),
                        match equip.item {
                            Some(item) => JsonValue::from(item),
                            None => JsonValue::Null,
                        },
                    );
                    e.insert(
                        "name".to_string(),
                        match &equip.name {
                            Some(name) => JsonValue::String(name.clone()),
                            None => JsonValue::Null,
                        },
                    );
                    JsonValue::Object(e)
                })
                .collect(),
        ),
    );
    JsonValue::Object(m)
}

/// Render a save summary sheet in the style of the in-game save menu.
pub fn text_summary(snapshot: &Snapshot, style: TextStyle) -> String {
    match style {
        TextStyle::SaveMenu => save_menu_sheet(snapshot),
    }
}

fn save_menu_sheet(snapshot: &Snapshot) -> String {
    let mut out = String::new();

    let _ = writeln!(out);
    let _ = writeln!(out, "{:^60}", "EARTHBOUND");
    let _ = writeln!(out, "{:^60}", "SAVED GAME RECORD");
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "  Name: {:<24}Pet: {:<9}Food: {}",
        snapshot.player_name, snapshot.pet_name, snapshot.favorite_food
    );
    let _ = writeln!(out, "  Favorite thing: PSI {}", snapshot.favorite_thing);
    let _ = writeln!(
        out,
        "  Money: ${:<14}ATM: ${}",
        format_number_with_commas(snapshot.money),
        format_number_with_commas(snapshot.atm)
    );
    let _ = writeln!(
        out,
        "  Text: {}  Sound: {}  Windows: {}",
        snapshot.text_speed, snapshot.sound_setting, snapshot.window_flavor
    );
    let _ = writeln!(
        out,
        "  Location: ({}, {})  Exit mouse: ({}, {})",
        snapshot.location.x,
        snapshot.location.y,
        snapshot.exit_mouse_location.x,
        snapshot.exit_mouse_location.y
    );
    let _ = writeln!(out);

    for member in &snapshot.party {
        if member.name.is_empty() {
            continue;
        }
        let _ = writeln!(
            out,
            "  {}. {:<6}Lv {:<4}HP {:>3}  PP {:>3}  [{}]",
            member.slot + 1,
            member.name,
            member.level,
            member.hp.value,
            member.pp.value,
            member.permanent_status
        );
        let mut stat_line = String::from("     ");
        for stat in &member.stats {
            let _ = write!(stat_line, " {} {}", stat.name, stat.value);
        }
        let _ = writeln!(out, "{stat_line}");
        for entry in &member.inventory {
            match &entry.name {
                Some(name) => {
                    let _ = writeln!(out, "      - {name}");
                }
                None => {
                    let _ = writeln!(out, "      - item 0x{:02X}", entry.item);
                }
            }
        }
    }

    let _ = writeln!(
        out,
        "  Event flags set: {} / {}",
        snapshot.event_flags_set, EVENT_FLAG_COUNT
    );

    out
}

fn format_number_with_commas(n: u32) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}
