use crate::error::LayoutError;
use crate::save::types::{
    ATM_OFFSET, ESCARGO_CAPACITY, ESCARGO_EXPRESS_OFFSET, EVENT_FLAG_BYTES, FAVORITE_FOOD_OFFSET,
    FAVORITE_THING_OFFSET, FAVORITE_THING_WIDTH, FLAG_OFFSET, HEADER_RESERVED_LEN, MONEY_OFFSET,
    NAME_WIDTH, PARTY_MEMBER_LEN, PARTY_OFFSET, PARTY_SIZE, PARTY_TAIL_LEN, PET_NAME_OFFSET,
    PLAYER_NAME_OFFSET, PLAYER_NAME_WIDTH, RESERVED_BANK_GAP_LEN, RESERVED_FOOD_GAP_LEN,
    SAVE_LENGTH,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub start: usize,
    pub end: usize,
}

impl ByteRange {
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Every top-level field of the save record, in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    ReservedHeader,
    PlayerName,
    PetName,
    FavoriteFood,
    ReservedFoodGap,
    FavoriteThing,
    Money,
    Atm,
    ReservedBankGap,
    EscargoExpress,
    Location,
    ExitMouseLocation,
    TextSpeed,
    SoundSetting,
    Timer,
    WindowFlavor,
    Party,
    ReservedPartyTail,
    EventFlags,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLayout {
    pub id: FieldId,
    pub range: ByteRange,
}

#[derive(Debug, Clone)]
pub struct SaveLayout {
    pub record_len: usize,
    pub fields: Vec<FieldLayout>,
}

impl SaveLayout {
    /// Reject layouts with gaps, overlaps, or coverage short of the record
    /// length. The assembler walks fields in order, so any hole here means a
    /// field would be decoded at the wrong offset.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let mut expected = 0usize;
        for field in &self.fields {
            if field.range.start != expected || field.range.end < field.range.start {
                return Err(LayoutError::LengthMismatch {
                    context: "field layout",
                    expected,
                    actual: field.range.start,
                });
            }
            expected = field.range.end;
        }

        if expected != self.record_len {
            return Err(LayoutError::LengthMismatch {
                context: "field layout coverage",
                expected: self.record_len,
                actual: expected,
            });
        }

        Ok(())
    }

    pub fn field(&self, id: FieldId) -> Option<ByteRange> {
        self.fields
            .iter()
            .find(|field| field.id == id)
            .map(|field| field.range)
    }
}

/// The canonical record layout. Offsets are format constants; this table is
/// the single place where they are strung together, and `validate` proves
/// the arithmetic contiguous.
pub fn record_layout() -> SaveLayout {
    let mut fields = Vec::new();
    let mut push = |id: FieldId, start: usize, len: usize| {
        fields.push(FieldLayout {
            id,
            range: ByteRange {
                start,
                end: start + len,
            },
        });
    };

    push(FieldId::ReservedHeader, 0, HEADER_RESERVED_LEN);
    push(FieldId::PlayerName, PLAYER_NAME_OFFSET, PLAYER_NAME_WIDTH);
    push(FieldId::PetName, PET_NAME_OFFSET, NAME_WIDTH);
    push(FieldId::FavoriteFood, FAVORITE_FOOD_OFFSET, NAME_WIDTH);
    push(
        FieldId::ReservedFoodGap,
        FAVORITE_FOOD_OFFSET + NAME_WIDTH,
        RESERVED_FOOD_GAP_LEN,
    );
    push(FieldId::FavoriteThing, FAVORITE_THING_OFFSET, FAVORITE_THING_WIDTH);
    push(FieldId::Money, MONEY_OFFSET, 4);
    push(FieldId::Atm, ATM_OFFSET, 4);
    push(FieldId::ReservedBankGap, ATM_OFFSET + 4, RESERVED_BANK_GAP_LEN);
    push(FieldId::EscargoExpress, ESCARGO_EXPRESS_OFFSET, ESCARGO_CAPACITY);
    push(FieldId::Location, ESCARGO_EXPRESS_OFFSET + ESCARGO_CAPACITY, 4);
    push(
        FieldId::ExitMouseLocation,
        ESCARGO_EXPRESS_OFFSET + ESCARGO_CAPACITY + 4,
        4,
    );
    let settings = ESCARGO_EXPRESS_OFFSET + ESCARGO_CAPACITY + 8;
    push(FieldId::TextSpeed, settings, 1);
    push(FieldId::SoundSetting, settings + 1, 1);
    push(FieldId::Timer, settings + 2, 4);
    push(FieldId::WindowFlavor, settings + 6, 1);
    push(FieldId::Party, PARTY_OFFSET, PARTY_SIZE * PARTY_MEMBER_LEN);
    push(
        FieldId::ReservedPartyTail,
        PARTY_OFFSET + PARTY_SIZE * PARTY_MEMBER_LEN,
        PARTY_TAIL_LEN,
    );
    push(FieldId::EventFlags, FLAG_OFFSET, EVENT_FLAG_BYTES);

    SaveLayout {
        record_len: SAVE_LENGTH,
        fields,
    }
}
