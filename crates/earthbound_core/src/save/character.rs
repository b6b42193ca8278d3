use crate::error::{LayoutError, SaveError};
use crate::reader::SaveReader;
use crate::text;
use crate::writer::SaveWriter;

use super::inventory::{self, PlayerInventory};
use super::types::{PARTY_NAME_WIDTH, STAT_COUNT};

/// A stat whose displayed value trails the true value (the HP/PP meters
/// scroll toward `value` rather than jumping). Both fields are stored; the
/// codec does not model the convergence itself.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RollingStat {
    pub value: u16,
    pub rolling_value: u16,
}

/// A stat that equipment can raise above its base value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EquipmentChangeableStat {
    pub value: u8,
    pub base_value: u8,
}

impl EquipmentChangeableStat {
    /// The equipment contribution. Always recomputed, never stored; an
    /// equipment penalty can legitimately push `value` below `base_value`,
    /// so the subtraction wraps rather than treating that as a codec error.
    pub fn difference(&self) -> u8 {
        self.value.wrapping_sub(self.base_value)
    }
}

/// Lasting status effect. Apart from `Normal`, lower-numbered effects take
/// precedence in-game: a paralyzed character cannot catch a cold, while a
/// nauseous one can still be paralyzed. The codec stores the byte verbatim
/// and leaves that rule to the game.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PermanentStatusEffect {
    #[default]
    Normal,
    Unconsciousness,
    Diamondization,
    Paralysis,
    Nausea,
    Poison,
    Sunstroke,
    Cold,
}

impl PermanentStatusEffect {
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Normal),
            1 => Some(Self::Unconsciousness),
            2 => Some(Self::Diamondization),
            3 => Some(Self::Paralysis),
            4 => Some(Self::Nausea),
            5 => Some(Self::Poison),
            6 => Some(Self::Sunstroke),
            7 => Some(Self::Cold),
            _ => None,
        }
    }

    pub fn raw(&self) -> u8 {
        *self as u8
    }

    pub fn as_str(&self) -> &'static str {
        match *self {
            Self::Normal => "Normal",
            Self::Unconsciousness => "Unconsciousness",
            Self::Diamondization => "Diamondization",
            Self::Paralysis => "Paralysis",
            Self::Nausea => "Nausea",
            Self::Poison => "Poison",
            Self::Sunstroke => "Sunstroke",
            Self::Cold => "Cold",
        }
    }
}

/// Secondary status, orthogonal to [`PermanentStatusEffect`], with the same
/// lower-number-wins precedence rule among its nonzero values.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PossessionStatus {
    #[default]
    Normal,
    Mushroomization,
    Possession,
}

impl PossessionStatus {
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Normal),
            1 => Some(Self::Mushroomization),
            2 => Some(Self::Possession),
            _ => None,
        }
    }

    pub fn raw(&self) -> u8 {
        *self as u8
    }

    pub fn as_str(&self) -> &'static str {
        match *self {
            Self::Normal => "Normal",
            Self::Mushroomization => "Mushroomization",
            Self::Possession => "Possession",
        }
    }
}

/// One party slot. All four slots are always present in the record; an
/// inactive slot is a zeroed member (the count/order fields are part of the
/// preserved tail region, see `ReservedRegions::party_tail`).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PartyMember {
    pub name: String,
    pub level: u8,
    pub experience: u32,
    pub hp: RollingStat,
    pub pp: RollingStat,
    pub permanent_status: PermanentStatusEffect,
    pub possession_status: PossessionStatus,
    /// Offense, Defense, Speed, Guts, Luck, Vitality — see
    /// [`super::types::STAT_NAMES`].
    pub stats: [EquipmentChangeableStat; STAT_COUNT],
    pub inventory: PlayerInventory,
}

impl PartyMember {
    /// Whether this member takes turns in battle.
    pub fn conscious(&self) -> bool {
        self.permanent_status != PermanentStatusEffect::Unconsciousness
    }
}

// --- Stat block codec ---
//
// The stat region is structure-of-arrays: all six current values, then all
// six base values. The original serializer produced this shape with
// forward/backward seeks per stat; buffering the two runs is equivalent and
// keeps the cursor strictly advancing.

pub fn write_stat_block(
    w: &mut SaveWriter,
    stats: &[EquipmentChangeableStat],
) -> Result<(), SaveError> {
    if stats.len() != STAT_COUNT {
        return Err(LayoutError::UnexpectedStatCount {
            expected: STAT_COUNT,
            actual: stats.len(),
        }
        .into());
    }
    for stat in stats {
        w.write_u8(stat.value);
    }
    for stat in stats {
        w.write_u8(stat.base_value);
    }
    Ok(())
}

pub fn read_stat_block(
    r: &mut SaveReader<'_>,
) -> Result<[EquipmentChangeableStat; STAT_COUNT], SaveError> {
    let values: [u8; STAT_COUNT] = r.read_array("stat values")?;
    let base_values: [u8; STAT_COUNT] = r.read_array("stat base values")?;

    let mut stats = [EquipmentChangeableStat::default(); STAT_COUNT];
    for (stat, (&value, &base_value)) in stats.iter_mut().zip(values.iter().zip(&base_values)) {
        *stat = EquipmentChangeableStat { value, base_value };
    }
    Ok(stats)
}

// --- Party member codec ---

pub fn write_party_member(w: &mut SaveWriter, member: &PartyMember) -> Result<(), SaveError> {
    w.write_bytes(&text::encode_padded(
        &member.name,
        PARTY_NAME_WIDTH,
        "party member name",
    )?);
    w.write_u8(member.level);
    w.write_u32(member.experience);
    w.write_u16(member.hp.value);
    w.write_u16(member.hp.rolling_value);
    w.write_u16(member.pp.value);
    w.write_u16(member.pp.rolling_value);
    w.write_u8(member.permanent_status.raw());
    w.write_u8(member.possession_status.raw());
    write_stat_block(w, &member.stats)?;
    inventory::write_player_inventory(w, &member.inventory);
    Ok(())
}

pub fn read_party_member(r: &mut SaveReader<'_>) -> Result<PartyMember, SaveError> {
    let name = text::decode_padded(
        r.read_bytes("party member name", PARTY_NAME_WIDTH)?,
        "party member name",
    )?;
    let level = r.read_u8("party member level")?;
    let experience = r.read_u32("party member experience")?;
    let hp = RollingStat {
        value: r.read_u16("hp")?,
        rolling_value: r.read_u16("hp rolling value")?,
    };
    let pp = RollingStat {
        value: r.read_u16("pp")?,
        rolling_value: r.read_u16("pp rolling value")?,
    };

    let status_offset = r.position();
    let status_raw = r.read_u8("permanent status effect")?;
    let permanent_status =
        PermanentStatusEffect::from_raw(status_raw).ok_or(LayoutError::InvalidEnumValue {
            field: "permanent status effect",
            offset: status_offset,
            value: status_raw,
        })?;

    let possession_offset = r.position();
    let possession_raw = r.read_u8("possession status")?;
    let possession_status =
        PossessionStatus::from_raw(possession_raw).ok_or(LayoutError::InvalidEnumValue {
            field: "possession status",
            offset: possession_offset,
            value: possession_raw,
        })?;

    let stats = read_stat_block(r)?;
    let inventory = inventory::read_player_inventory(r)?;

    Ok(PartyMember {
        name,
        level,
        experience,
        hp,
        pp,
        permanent_status,
        possession_status,
        stats,
        inventory,
    })
}
