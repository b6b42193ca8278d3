use crate::error::SaveError;
use crate::reader::SaveReader;
use crate::writer::SaveWriter;

use super::types::{EQUIP_SLOT_COUNT, ESCARGO_CAPACITY, PLAYER_INVENTORY_CAPACITY};

/// Slot value meaning "no item".
pub const EMPTY_SLOT: u8 = 0;

/// A party member's goods: a fixed run of item slots followed by the four
/// equip-slot indices. An equip index references a slot in the same
/// inventory (1-based in the game's usage), 0 meaning nothing equipped.
/// Whether the referenced item is actually equippable is game logic and not
/// checked here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerInventory {
    pub slots: [u8; PLAYER_INVENTORY_CAPACITY],
    pub equips: [u8; EQUIP_SLOT_COUNT],
}

impl Default for PlayerInventory {
    fn default() -> Self {
        Self {
            slots: [EMPTY_SLOT; PLAYER_INVENTORY_CAPACITY],
            equips: [0; EQUIP_SLOT_COUNT],
        }
    }
}

impl PlayerInventory {
    pub fn item_count(&self) -> usize {
        self.slots.iter().filter(|&&slot| slot != EMPTY_SLOT).count()
    }

    /// The item occupying an equip slot, if any.
    pub fn equipped_item(&self, equip_slot: usize) -> Option<u8> {
        let index = *self.equips.get(equip_slot)? as usize;
        if index == 0 {
            return None;
        }
        let item = *self.slots.get(index - 1)?;
        (item != EMPTY_SLOT).then_some(item)
    }
}

/// Parcel storage held by Escargo Express.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EscargoExpressInventory {
    pub slots: [u8; ESCARGO_CAPACITY],
}

impl Default for EscargoExpressInventory {
    fn default() -> Self {
        Self {
            slots: [EMPTY_SLOT; ESCARGO_CAPACITY],
        }
    }
}

impl EscargoExpressInventory {
    pub fn item_count(&self) -> usize {
        self.slots.iter().filter(|&&slot| slot != EMPTY_SLOT).count()
    }
}

pub fn write_player_inventory(w: &mut SaveWriter, inventory: &PlayerInventory) {
    w.write_bytes(&inventory.slots);
    w.write_bytes(&inventory.equips);
}

pub fn read_player_inventory(r: &mut SaveReader<'_>) -> Result<PlayerInventory, SaveError> {
    let slots = r.read_array("inventory slots")?;
    let equips = r.read_array("equip slots")?;
    Ok(PlayerInventory { slots, equips })
}

pub fn write_escargo_express(w: &mut SaveWriter, inventory: &EscargoExpressInventory) {
    w.write_bytes(&inventory.slots);
}

pub fn read_escargo_express(r: &mut SaveReader<'_>) -> Result<EscargoExpressInventory, SaveError> {
    let slots = r.read_array("escargo express slots")?;
    Ok(EscargoExpressInventory { slots })
}
