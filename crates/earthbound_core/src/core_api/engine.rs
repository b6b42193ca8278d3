use crate::save::character::PartyMember;
use crate::save::inventory::EMPTY_SLOT;
use crate::save::types::{
    EQUIP_SLOT_NAMES, EVENT_FLAG_COUNT, FAVORITE_THING_WIDTH, NAME_WIDTH, PARTY_SIZE,
    PLAYER_NAME_WIDTH, STAT_NAMES,
};
use crate::save::SaveRecord;
use crate::text;

use super::error::{CoreError, CoreErrorCode};
use super::types::{
    EquipEntry, InventoryEntry, LocationEntry, PartyMemberSummary, RollingEntry, Snapshot,
    StatEntry,
};
use super::well_known_items;

#[derive(Debug, Default, Clone, Copy)]
pub struct Engine;

/// An opened save record plus its display snapshot. Setters keep the two in
/// sync; front ends read the snapshot and never touch raw offsets.
#[derive(Debug)]
pub struct Session {
    record: SaveRecord,
    snapshot: Snapshot,
}

impl Engine {
    pub fn new() -> Self {
        Self
    }

    pub fn open_bytes<B: AsRef<[u8]>>(&self, bytes: B) -> Result<Session, CoreError> {
        let record = SaveRecord::decode(bytes.as_ref()).map_err(|e| {
            CoreError::new(CoreErrorCode::Parse, format!("failed to parse save: {e}"))
        })?;
        Ok(Session::from_record(record))
    }
}

impl Session {
    pub fn from_record(record: SaveRecord) -> Self {
        let snapshot = build_snapshot(&record);
        Self { record, snapshot }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn record(&self) -> &SaveRecord {
        &self.record
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, CoreError> {
        self.record.encode().map_err(|e| {
            CoreError::new(CoreErrorCode::Encode, format!("failed to encode save: {e}"))
        })
    }

    pub fn set_player_name(&mut self, name: &str) -> Result<(), CoreError> {
        validate_text(name, PLAYER_NAME_WIDTH, "player name")?;
        self.record.player_name = name.to_string();
        self.refresh();
        Ok(())
    }

    pub fn set_pet_name(&mut self, name: &str) -> Result<(), CoreError> {
        validate_text(name, NAME_WIDTH, "pet name")?;
        self.record.pet_name = name.to_string();
        self.refresh();
        Ok(())
    }

    pub fn set_favorite_food(&mut self, food: &str) -> Result<(), CoreError> {
        validate_text(food, NAME_WIDTH, "favorite food")?;
        self.record.favorite_food = food.to_string();
        self.refresh();
        Ok(())
    }

    pub fn set_favorite_thing(&mut self, thing: &str) -> Result<(), CoreError> {
        text::encode_favorite_thing(thing, FAVORITE_THING_WIDTH, "favorite thing")
            .map_err(|e| CoreError::new(CoreErrorCode::InvalidInput, e.to_string()))?;
        self.record.favorite_thing = thing.to_string();
        self.refresh();
        Ok(())
    }

    pub fn set_money(&mut self, money: u32) {
        self.record.money = money;
        self.refresh();
    }

    pub fn set_atm(&mut self, atm: u32) {
        self.record.atm = atm;
        self.refresh();
    }

    pub fn set_timer(&mut self, timer: u32) {
        self.record.timer = timer;
        self.refresh();
    }

    pub fn set_event_flag(&mut self, index: usize, value: bool) -> Result<(), CoreError> {
        if index >= EVENT_FLAG_COUNT {
            return Err(CoreError::new(
                CoreErrorCode::InvalidInput,
                format!("invalid event flag index {index}, expected 0..{EVENT_FLAG_COUNT}"),
            ));
        }
        self.record.event_flags[index] = value;
        self.refresh();
        Ok(())
    }

    pub fn set_member_level(&mut self, slot: usize, level: u8) -> Result<(), CoreError> {
        self.member_mut(slot)?.level = level;
        self.refresh();
        Ok(())
    }

    pub fn set_member_experience(&mut self, slot: usize, experience: u32) -> Result<(), CoreError> {
        self.member_mut(slot)?.experience = experience;
        self.refresh();
        Ok(())
    }

    /// Set a member's HP. The rolling value is set to match so the new value
    /// shows immediately instead of scrolling from the old one.
    pub fn set_member_hp(&mut self, slot: usize, hp: u16) -> Result<(), CoreError> {
        let member = self.member_mut(slot)?;
        member.hp.value = hp;
        member.hp.rolling_value = hp;
        self.refresh();
        Ok(())
    }

    pub fn set_member_pp(&mut self, slot: usize, pp: u16) -> Result<(), CoreError> {
        let member = self.member_mut(slot)?;
        member.pp.value = pp;
        member.pp.rolling_value = pp;
        self.refresh();
        Ok(())
    }

    /// Set a stat's current value, keeping the equipment bonus by moving the
    /// base value in step.
    pub fn set_member_stat(
        &mut self,
        slot: usize,
        stat_index: usize,
        value: u8,
    ) -> Result<(), CoreError> {
        if stat_index >= STAT_NAMES.len() {
            return Err(CoreError::new(
                CoreErrorCode::InvalidInput,
                format!("invalid stat index {stat_index}, expected 0..{}", STAT_NAMES.len()),
            ));
        }
        let member = self.member_mut(slot)?;
        let stat = &mut member.stats[stat_index];
        let bonus = stat.difference();
        stat.value = value;
        stat.base_value = value.wrapping_sub(bonus);
        self.refresh();
        Ok(())
    }

    fn member_mut(&mut self, slot: usize) -> Result<&mut PartyMember, CoreError> {
        if slot >= PARTY_SIZE {
            return Err(CoreError::new(
                CoreErrorCode::InvalidInput,
                format!("invalid party slot {slot}, expected 0..{PARTY_SIZE}"),
            ));
        }
        Ok(&mut self.record.party[slot])
    }

    fn refresh(&mut self) {
        self.snapshot = build_snapshot(&self.record);
    }
}

fn validate_text(text: &str, width: usize, field: &'static str) -> Result<(), CoreError> {
    text::encode_padded(text, width, field)
        .map(|_| ())
        .map_err(|e| CoreError::new(CoreErrorCode::InvalidInput, e.to_string()))
}

fn build_snapshot(record: &SaveRecord) -> Snapshot {
    Snapshot {
        player_name: record.player_name.clone(),
        pet_name: record.pet_name.clone(),
        favorite_food: record.favorite_food.clone(),
        favorite_thing: record.favorite_thing.clone(),
        money: record.money,
        atm: record.atm,
        escargo_express: occupied_slots(&record.escargo_express.slots),
        location: LocationEntry {
            x: record.location.x,
            y: record.location.y,
        },
        exit_mouse_location: LocationEntry {
            x: record.exit_mouse_location.x,
            y: record.exit_mouse_location.y,
        },
        timer: record.timer,
        text_speed: record.text_speed.as_str().to_string(),
        sound_setting: record.sound_setting.as_str().to_string(),
        window_flavor: record.window_flavor.as_str().to_string(),
        party: record
            .party
            .iter()
            .enumerate()
            .map(|(slot, member)| summarize_member(slot, member))
            .collect(),
        event_flags_set: record.event_flags_set(),
    }
}

fn summarize_member(slot: usize, member: &PartyMember) -> PartyMemberSummary {
    PartyMemberSummary {
        slot,
        name: member.name.clone(),
        level: member.level,
        experience: member.experience,
        hp: RollingEntry {
            value: member.hp.value,
            rolling_value: member.hp.rolling_value,
        },
        pp: RollingEntry {
            value: member.pp.value,
            rolling_value: member.pp.rolling_value,
        },
        permanent_status: member.permanent_status.as_str().to_string(),
        possession_status: member.possession_status.as_str().to_string(),
        conscious: member.conscious(),
        stats: member
            .stats
            .iter()
            .enumerate()
            .map(|(index, stat)| StatEntry {
                index,
                name: STAT_NAMES[index].to_string(),
                value: stat.value,
                base: stat.base_value,
                bonus: stat.difference(),
            })
            .collect(),
        inventory: occupied_slots(&member.inventory.slots),
        equips: EQUIP_SLOT_NAMES
            .iter()
            .enumerate()
            .map(|(equip_slot, slot_name)| {
                let item = member.inventory.equipped_item(equip_slot);
                EquipEntry {
                    slot_name: (*slot_name).to_string(),
                    item,
                    name: item.and_then(|id| well_known_items::lookup(id).map(str::to_string)),
                }
            })
            .collect(),
    }
}

fn occupied_slots(slots: &[u8]) -> Vec<InventoryEntry> {
    slots
        .iter()
        .enumerate()
        .filter(|&(_, &item)| item != EMPTY_SLOT)
        .map(|(slot, &item)| InventoryEntry {
            slot,
            item,
            name: well_known_items::lookup(item).map(str::to_string),
        })
        .collect()
}
