pub mod character;
pub mod flags;
pub mod inventory;
pub mod types;

use crate::error::{LayoutError, SaveError};
use crate::reader::SaveReader;
use crate::text;
use crate::writer::SaveWriter;

use character::PartyMember;
use inventory::EscargoExpressInventory;
use types::{
    EVENT_FLAG_BYTES, EVENT_FLAG_COUNT, FAVORITE_THING_WIDTH, HEADER_RESERVED_LEN, NAME_WIDTH,
    PARTY_SIZE, PARTY_TAIL_LEN, PLAYER_NAME_WIDTH, RESERVED_BANK_GAP_LEN, RESERVED_FOOD_GAP_LEN,
    SAVE_LENGTH,
};

/// An overworld position.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: u16,
    pub y: u16,
}

impl Point {
    fn read(r: &mut SaveReader<'_>, field: &'static str) -> Result<Self, LayoutError> {
        Ok(Self {
            x: r.read_u16(field)?,
            y: r.read_u16(field)?,
        })
    }

    fn write(&self, w: &mut SaveWriter) {
        w.write_u16(self.x);
        w.write_u16(self.y);
    }
}

/// The speed at which in-game text scrolls.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TextSpeed {
    Fast = 1,
    #[default]
    Medium = 2,
    Slow = 3,
}

impl TextSpeed {
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            1 => Some(Self::Fast),
            2 => Some(Self::Medium),
            3 => Some(Self::Slow),
            _ => None,
        }
    }

    pub fn raw(&self) -> u8 {
        *self as u8
    }

    pub fn as_str(&self) -> &'static str {
        match *self {
            Self::Fast => "Fast",
            Self::Medium => "Medium",
            Self::Slow => "Slow",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SoundSetting {
    #[default]
    Stereo = 1,
    Mono = 2,
}

impl SoundSetting {
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            1 => Some(Self::Stereo),
            2 => Some(Self::Mono),
            _ => None,
        }
    }

    pub fn raw(&self) -> u8 {
        *self as u8
    }

    pub fn as_str(&self) -> &'static str {
        match *self {
            Self::Stereo => "Stereo",
            Self::Mono => "Mono",
        }
    }
}

/// Appearance of text windows while all party members are alive.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WindowFlavor {
    #[default]
    Plain = 1,
    Mint = 2,
    Strawberry = 3,
    Banana = 4,
    Peanut = 5,
}

impl WindowFlavor {
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            1 => Some(Self::Plain),
            2 => Some(Self::Mint),
            3 => Some(Self::Strawberry),
            4 => Some(Self::Banana),
            5 => Some(Self::Peanut),
            _ => None,
        }
    }

    pub fn raw(&self) -> u8 {
        *self as u8
    }

    pub fn as_str(&self) -> &'static str {
        match *self {
            Self::Plain => "Plain",
            Self::Mint => "Mint",
            Self::Strawberry => "Strawberry",
            Self::Banana => "Banana",
            Self::Peanut => "Peanut",
        }
    }
}

/// Unknown format regions, captured byte-for-byte at decode and re-emitted
/// unchanged at encode. Owning the bytes makes round-trip preservation a
/// field of the record instead of a side effect of stream positioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservedRegions {
    /// Everything before the player name.
    pub header: [u8; HEADER_RESERVED_LEN],
    /// Gap between favorite food and favorite thing.
    pub food_gap: [u8; RESERVED_FOOD_GAP_LEN],
    /// Gap between the bank balance and the Escargo Express region.
    pub bank_gap: [u8; RESERVED_BANK_GAP_LEN],
    /// Tail of the party region; holds the still-unmapped party count and
    /// ordering fields.
    pub party_tail: [u8; PARTY_TAIL_LEN],
}

impl Default for ReservedRegions {
    fn default() -> Self {
        Self {
            header: [0; HEADER_RESERVED_LEN],
            food_gap: [0; RESERVED_FOOD_GAP_LEN],
            bank_gap: [0; RESERVED_BANK_GAP_LEN],
            party_tail: [0; PARTY_TAIL_LEN],
        }
    }
}

/// One decoded save record.
///
/// The record owns every byte of its `SAVE_LENGTH`-byte file form:
/// `decode(encode(record))` reproduces the record field-for-field, and
/// decode followed by encode reproduces the buffer byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRecord {
    pub player_name: String,
    pub pet_name: String,
    pub favorite_food: String,
    /// Stored as the bare text; the "PSI " prefix and trailing space are
    /// added by the codec on encode and stripped on decode.
    pub favorite_thing: String,
    pub money: u32,
    /// Balance in the ATM. The game is known to misbehave above $9,999,999,
    /// but that is its business, not the codec's.
    pub atm: u32,
    pub escargo_express: EscargoExpressInventory,
    pub location: Point,
    /// Where the Exit Mouse heads when used.
    pub exit_mouse_location: Point,
    pub text_speed: TextSpeed,
    pub sound_setting: SoundSetting,
    pub timer: u32,
    pub window_flavor: WindowFlavor,
    pub party: [PartyMember; PARTY_SIZE],
    /// Exactly [`types::EVENT_FLAG_COUNT`] entries; enforced at encode.
    pub event_flags: Vec<bool>,
    pub reserved: ReservedRegions,
}

impl Default for SaveRecord {
    fn default() -> Self {
        Self {
            player_name: String::new(),
            pet_name: String::new(),
            favorite_food: String::new(),
            favorite_thing: String::new(),
            money: 0,
            atm: 0,
            escargo_express: EscargoExpressInventory::default(),
            location: Point::default(),
            exit_mouse_location: Point::default(),
            text_speed: TextSpeed::default(),
            sound_setting: SoundSetting::default(),
            timer: 0,
            window_flavor: WindowFlavor::default(),
            party: Default::default(),
            event_flags: vec![false; EVENT_FLAG_COUNT],
            reserved: ReservedRegions::default(),
        }
    }
}

impl SaveRecord {
    /// Decode a complete record buffer. All-or-nothing: any failure rejects
    /// the whole record rather than returning a half-populated one.
    pub fn decode(buf: &[u8]) -> Result<Self, SaveError> {
        if buf.len() < SAVE_LENGTH {
            return Err(LayoutError::TruncatedBuffer {
                field: "save record",
                offset: 0,
                needed: SAVE_LENGTH,
                available: buf.len(),
            }
            .into());
        }
        if buf.len() > SAVE_LENGTH {
            return Err(LayoutError::LengthMismatch {
                context: "save record",
                expected: SAVE_LENGTH,
                actual: buf.len(),
            }
            .into());
        }

        let mut r = SaveReader::new(buf);

        let header = r.read_array("reserved header")?;
        let player_name = text::decode_padded(
            r.read_bytes("player name", PLAYER_NAME_WIDTH)?,
            "player name",
        )?;
        let pet_name = text::decode_padded(r.read_bytes("pet name", NAME_WIDTH)?, "pet name")?;
        let favorite_food = text::decode_padded(
            r.read_bytes("favorite food", NAME_WIDTH)?,
            "favorite food",
        )?;
        let food_gap = r.read_array("reserved gap after favorite food")?;
        let favorite_thing = text::decode_favorite_thing(
            r.read_bytes("favorite thing", FAVORITE_THING_WIDTH)?,
            "favorite thing",
        )?;
        let money = r.read_u32("money")?;
        let atm = r.read_u32("atm balance")?;
        let bank_gap = r.read_array("reserved gap after atm balance")?;
        let escargo_express = inventory::read_escargo_express(&mut r)?;
        let location = Point::read(&mut r, "location")?;
        let exit_mouse_location = Point::read(&mut r, "exit mouse location")?;

        let text_speed = read_enum(&mut r, "text speed", TextSpeed::from_raw)?;
        let sound_setting = read_enum(&mut r, "sound setting", SoundSetting::from_raw)?;
        let timer = r.read_u32("timer")?;
        let window_flavor = read_enum(&mut r, "window flavor", WindowFlavor::from_raw)?;

        let mut party: [PartyMember; PARTY_SIZE] = Default::default();
        for member in &mut party {
            *member = character::read_party_member(&mut r)?;
        }

        let party_tail = r.read_array("reserved party tail")?;
        let flag_bytes = r.read_bytes("event flags", EVENT_FLAG_BYTES)?;
        let event_flags = flags::unpack_event_flags(flag_bytes, EVENT_FLAG_COUNT);

        if r.remaining() != 0 {
            return Err(LayoutError::LengthMismatch {
                context: "save record decode",
                expected: SAVE_LENGTH,
                actual: SAVE_LENGTH - r.remaining(),
            }
            .into());
        }

        Ok(Self {
            player_name,
            pet_name,
            favorite_food,
            favorite_thing,
            money,
            atm,
            escargo_express,
            location,
            exit_mouse_location,
            text_speed,
            sound_setting,
            timer,
            window_flavor,
            party,
            event_flags,
            reserved: ReservedRegions {
                header,
                food_gap,
                bank_gap,
                party_tail,
            },
        })
    }

    /// Encode into a fresh `SAVE_LENGTH`-byte buffer. Fails wholesale if any
    /// field cannot be represented; callers commit the buffer only on
    /// success.
    pub fn encode(&self) -> Result<Vec<u8>, SaveError> {
        if self.event_flags.len() != EVENT_FLAG_COUNT {
            return Err(LayoutError::UnexpectedFlagCount {
                expected: EVENT_FLAG_COUNT,
                actual: self.event_flags.len(),
            }
            .into());
        }

        let mut w = SaveWriter::with_capacity(SAVE_LENGTH);

        w.write_bytes(&self.reserved.header);
        w.write_bytes(&text::encode_padded(
            &self.player_name,
            PLAYER_NAME_WIDTH,
            "player name",
        )?);
        w.write_bytes(&text::encode_padded(&self.pet_name, NAME_WIDTH, "pet name")?);
        w.write_bytes(&text::encode_padded(
            &self.favorite_food,
            NAME_WIDTH,
            "favorite food",
        )?);
        w.write_bytes(&self.reserved.food_gap);
        w.write_bytes(&text::encode_favorite_thing(
            &self.favorite_thing,
            FAVORITE_THING_WIDTH,
            "favorite thing",
        )?);
        w.write_u32(self.money);
        w.write_u32(self.atm);
        w.write_bytes(&self.reserved.bank_gap);
        inventory::write_escargo_express(&mut w, &self.escargo_express);
        self.location.write(&mut w);
        self.exit_mouse_location.write(&mut w);
        w.write_u8(self.text_speed.raw());
        w.write_u8(self.sound_setting.raw());
        w.write_u32(self.timer);
        w.write_u8(self.window_flavor.raw());
        for member in &self.party {
            character::write_party_member(&mut w, member)?;
        }
        w.write_bytes(&self.reserved.party_tail);
        w.write_bytes(&flags::pack_event_flags(&self.event_flags));

        Ok(w.finish("save record", SAVE_LENGTH)?)
    }

    /// How many event flags are currently set.
    pub fn event_flags_set(&self) -> usize {
        self.event_flags.iter().filter(|&&flag| flag).count()
    }
}

fn read_enum<T>(
    r: &mut SaveReader<'_>,
    field: &'static str,
    from_raw: fn(u8) -> Option<T>,
) -> Result<T, SaveError> {
    let offset = r.position();
    let raw = r.read_u8(field)?;
    from_raw(raw).ok_or_else(|| {
        LayoutError::InvalidEnumValue {
            field,
            offset,
            value: raw,
        }
        .into()
    })
}
