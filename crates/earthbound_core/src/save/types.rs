// Save record constants. One record is SAVE_LENGTH bytes; the named offsets
// (Escargo Express region, flag table) are fixed properties of the format.

use crate::text::PSI_PREFIX;

/// In-game limit on the player's name.
pub const PLAYER_NAME_WIDTH: usize = 24;
/// Pet name and favorite food share the short text width.
pub const NAME_WIDTH: usize = 6;
/// Name-entry limit for party members.
pub const PARTY_NAME_WIDTH: usize = 5;
/// The favorite-thing field stores the composite "PSI " + text + " ".
pub const FAVORITE_THING_WIDTH: usize = PSI_PREFIX.len() + NAME_WIDTH + 1;

pub const PARTY_SIZE: usize = 4;
pub const STAT_COUNT: usize = 6;
pub const EVENT_FLAG_COUNT: usize = 1640;
pub const EVENT_FLAG_BYTES: usize = (EVENT_FLAG_COUNT + 7) / 8;

pub const PLAYER_INVENTORY_CAPACITY: usize = 14;
pub const EQUIP_SLOT_COUNT: usize = 4;
/// Capacity of the Escargo Express parcel storage.
pub const ESCARGO_CAPACITY: usize = 36;

// Fixed offsets within the record.
pub const HEADER_RESERVED_LEN: usize = 0x2C;
pub const PLAYER_NAME_OFFSET: usize = 0x2C;
pub const PET_NAME_OFFSET: usize = PLAYER_NAME_OFFSET + PLAYER_NAME_WIDTH;
pub const FAVORITE_FOOD_OFFSET: usize = PET_NAME_OFFSET + NAME_WIDTH;
pub const RESERVED_FOOD_GAP_LEN: usize = 4;
pub const FAVORITE_THING_OFFSET: usize =
    FAVORITE_FOOD_OFFSET + NAME_WIDTH + RESERVED_FOOD_GAP_LEN;
pub const MONEY_OFFSET: usize = FAVORITE_THING_OFFSET + FAVORITE_THING_WIDTH;
pub const ATM_OFFSET: usize = MONEY_OFFSET + 4;
/// Unknown data sits between the bank balance and the Escargo Express
/// region; the gap length keeps the storage offset at its known value.
pub const RESERVED_BANK_GAP_LEN: usize = ESCARGO_EXPRESS_OFFSET - (ATM_OFFSET + 4);
/// Location where Escargo Express data is kept.
pub const ESCARGO_EXPRESS_OFFSET: usize = 0x76;
pub const PARTY_OFFSET: usize = ESCARGO_EXPRESS_OFFSET + ESCARGO_CAPACITY + 4 + 4 + 1 + 1 + 4 + 1;

/// One encoded party member: name, level, experience, HP/PP pairs, the two
/// status bytes, the 12-byte stat block, and the 18-byte inventory.
pub const PARTY_MEMBER_LEN: usize =
    PARTY_NAME_WIDTH + 1 + 4 + 4 + 4 + 1 + 1 + 2 * STAT_COUNT
        + PLAYER_INVENTORY_CAPACITY + EQUIP_SLOT_COUNT;

/// The party count and ordering fields are somewhere in this tail; until
/// their offsets are pinned down the whole region is preserved verbatim.
pub const PARTY_TAIL_LEN: usize = FLAG_OFFSET - (PARTY_OFFSET + PARTY_SIZE * PARTY_MEMBER_LEN);

/// Start of the event-flag table.
pub const FLAG_OFFSET: usize = 0x433;
pub const SAVE_LENGTH: usize = FLAG_OFFSET + EVENT_FLAG_BYTES;

// --- Display name tables ---

pub const STAT_NAMES: [&str; STAT_COUNT] = [
    "Offense",
    "Defense",
    "Speed",
    "Guts",
    "Luck",
    "Vitality",
];

pub const EQUIP_SLOT_NAMES: [&str; EQUIP_SLOT_COUNT] = [
    "Weapon",
    "Body",
    "Arms",
    "Other",
];
