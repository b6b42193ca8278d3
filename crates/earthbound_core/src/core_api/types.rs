use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocationEntry {
    pub x: u16,
    pub y: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RollingEntry {
    pub value: u16,
    pub rolling_value: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatEntry {
    pub index: usize,
    pub name: String,
    pub value: u8,
    pub base: u8,
    /// Equipment contribution: `value - base`, recomputed.
    pub bonus: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InventoryEntry {
    pub slot: usize,
    pub item: u8,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EquipEntry {
    pub slot_name: String,
    pub item: Option<u8>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartyMemberSummary {
    pub slot: usize,
    pub name: String,
    pub level: u8,
    pub experience: u32,
    pub hp: RollingEntry,
    pub pp: RollingEntry,
    pub permanent_status: String,
    pub possession_status: String,
    pub conscious: bool,
    pub stats: Vec<StatEntry>,
    pub inventory: Vec<InventoryEntry>,
    pub equips: Vec<EquipEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Snapshot {
    pub player_name: String,
    pub pet_name: String,
    pub favorite_food: String,
    pub favorite_thing: String,
    pub money: u32,
    pub atm: u32,
    pub escargo_express: Vec<InventoryEntry>,
    pub location: LocationEntry,
    pub exit_mouse_location: LocationEntry,
    pub timer: u32,
    pub text_speed: String,
    pub sound_setting: String,
    pub window_flavor: String,
    pub party: Vec<PartyMemberSummary>,
    pub event_flags_set: usize,
}
