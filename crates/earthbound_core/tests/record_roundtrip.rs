use earthbound_core::error::{EncodingError, LayoutError, SaveError};
use earthbound_core::save::character::{
    EquipmentChangeableStat, PartyMember, PermanentStatusEffect, PossessionStatus, RollingStat,
};
use earthbound_core::save::types::{
    FAVORITE_THING_OFFSET, FAVORITE_THING_WIDTH, FLAG_OFFSET, PARTY_MEMBER_LEN, PARTY_NAME_WIDTH,
    PARTY_OFFSET, PLAYER_NAME_OFFSET, SAVE_LENGTH,
};
use earthbound_core::save::{Point, SaveRecord, SoundSetting, TextSpeed, WindowFlavor};
use earthbound_core::text;

fn stat(value: u8, base_value: u8) -> EquipmentChangeableStat {
    EquipmentChangeableStat { value, base_value }
}

fn ness() -> PartyMember {
    PartyMember {
        name: "Ness".to_string(),
        level: 23,
        experience: 31_842,
        hp: RollingStat {
            value: 183,
            rolling_value: 155,
        },
        pp: RollingStat {
            value: 64,
            rolling_value: 64,
        },
        permanent_status: PermanentStatusEffect::Normal,
        possession_status: PossessionStatus::Normal,
        stats: [
            stat(47, 39),
            stat(35, 21),
            stat(18, 18),
            stat(22, 22),
            stat(14, 14),
            stat(29, 29),
        ],
        ..PartyMember::default()
    }
}

fn sample_record() -> SaveRecord {
    let mut record = SaveRecord {
        player_name: "Ness".to_string(),
        pet_name: "King".to_string(),
        favorite_food: "Steak".to_string(),
        favorite_thing: "Rockin".to_string(),
        money: 4_286,
        atm: 1_000_000,
        location: Point { x: 3_160, y: 4_456 },
        exit_mouse_location: Point { x: 100, y: 228 },
        text_speed: TextSpeed::Fast,
        sound_setting: SoundSetting::Mono,
        timer: 86_400,
        window_flavor: WindowFlavor::Mint,
        ..SaveRecord::default()
    };

    record.party[0] = ness();
    record.party[1] = PartyMember {
        name: "Paula".to_string(),
        level: 19,
        hp: RollingStat {
            value: 102,
            rolling_value: 102,
        },
        permanent_status: PermanentStatusEffect::Cold,
        ..PartyMember::default()
    };
    record.party[0].inventory.slots[0] = 0x09; // Legendary bat
    record.party[0].inventory.slots[1] = 0x42;
    record.party[0].inventory.equips[0] = 1;

    record.escargo_express.slots[0] = 0x44;
    record.escargo_express.slots[35] = 0x4F;

    for index in [0, 2, 8, 13, 500, 1639] {
        record.event_flags[index] = true;
    }

    record.reserved.header[0] = 0xDE;
    record.reserved.party_tail[100] = 0x77;

    record
}

#[test]
fn roundtrip_preserves_every_field() {
    let record = sample_record();
    let bytes = record.encode().expect("encodes");
    assert_eq!(bytes.len(), SAVE_LENGTH);

    let decoded = SaveRecord::decode(&bytes).expect("decodes");
    assert_eq!(decoded, record);
}

#[test]
fn reserved_regions_survive_a_read_modify_write_cycle() {
    let mut bytes = sample_record().encode().expect("encodes");

    // Scribble over every reserved region as a hostile original would look:
    // unknown data the codec has no model for.
    for (offset, value) in [(0x00, 0xAA), (0x2B, 0x17), (0x50, 0x99), (0x70, 0x3C), (0x200, 0x5B)]
    {
        bytes[offset] = value;
    }

    let decoded = SaveRecord::decode(&bytes).expect("decodes");
    let reencoded = decoded.encode().expect("re-encodes");
    assert_eq!(reencoded, bytes, "reserved bytes must be re-emitted verbatim");
}

#[test]
fn player_name_is_padded_to_field_width() {
    let bytes = sample_record().encode().expect("encodes");
    let name_field = &bytes[PLAYER_NAME_OFFSET..PLAYER_NAME_OFFSET + 24];

    let expected = text::encode_padded("Ness", 24, "player name").expect("encodes");
    assert_eq!(name_field, expected.as_slice());
    // 4 characters, 20 pad bytes.
    assert!(name_field[4..].iter().all(|&b| b == text::PAD_BYTE));
}

#[test]
fn favorite_thing_is_stored_with_prefix_and_trailing_space() {
    let bytes = sample_record().encode().expect("encodes");
    let field = &bytes[FAVORITE_THING_OFFSET..FAVORITE_THING_OFFSET + FAVORITE_THING_WIDTH];

    let expected = text::encode_padded("PSI Rockin ", FAVORITE_THING_WIDTH, "favorite thing")
        .expect("encodes");
    assert_eq!(field, expected.as_slice());
}

#[test]
fn favorite_thing_over_width_fails_wholesale() {
    let record = SaveRecord {
        favorite_thing: "Rockin'".to_string(),
        ..sample_record()
    };
    let err = record.encode().unwrap_err();
    assert_eq!(
        err,
        SaveError::Encoding(EncodingError::TooLong {
            field: "favorite thing",
            max: FAVORITE_THING_WIDTH,
            actual: FAVORITE_THING_WIDTH + 1,
        })
    );
}

#[test]
fn event_flags_pack_low_bit_first_at_the_flag_offset() {
    let mut record = SaveRecord::default();
    record.event_flags[0] = true;
    record.event_flags[2] = true;
    record.event_flags[8] = true;

    let bytes = record.encode().expect("encodes");
    assert_eq!(bytes[FLAG_OFFSET], 0b0000_0101);
    assert_eq!(bytes[FLAG_OFFSET + 1], 0b0000_0001);
}

#[test]
fn wrong_flag_count_is_rejected_at_encode() {
    let mut record = sample_record();
    record.event_flags.truncate(100);

    let err = record.encode().unwrap_err();
    assert_eq!(
        err,
        SaveError::Layout(LayoutError::UnexpectedFlagCount {
            expected: 1640,
            actual: 100,
        })
    );
}

#[test]
fn truncated_buffer_is_rejected() {
    let mut bytes = sample_record().encode().expect("encodes");
    bytes.truncate(128);

    let err = SaveRecord::decode(&bytes).unwrap_err();
    assert_eq!(
        err,
        SaveError::Layout(LayoutError::TruncatedBuffer {
            field: "save record",
            offset: 0,
            needed: SAVE_LENGTH,
            available: 128,
        })
    );
}

#[test]
fn oversized_buffer_is_rejected() {
    let mut bytes = sample_record().encode().expect("encodes");
    bytes.push(0);

    let err = SaveRecord::decode(&bytes).unwrap_err();
    assert_eq!(
        err,
        SaveError::Layout(LayoutError::LengthMismatch {
            context: "save record",
            expected: SAVE_LENGTH,
            actual: SAVE_LENGTH + 1,
        })
    );
}

#[test]
fn out_of_range_status_byte_fails_decode() {
    let mut bytes = sample_record().encode().expect("encodes");

    // Permanent status of party slot 0: after name, level, experience, HP
    // and PP pairs.
    let status_offset = PARTY_OFFSET + PARTY_NAME_WIDTH + 1 + 4 + 4 + 4;
    bytes[status_offset] = 8;

    let err = SaveRecord::decode(&bytes).unwrap_err();
    assert_eq!(
        err,
        SaveError::Layout(LayoutError::InvalidEnumValue {
            field: "permanent status effect",
            offset: status_offset,
            value: 8,
        })
    );
}

#[test]
fn out_of_range_setting_byte_fails_decode() {
    let mut bytes = sample_record().encode().expect("encodes");

    let layout = earthbound_core::layout::record_layout();
    let text_speed = layout
        .field(earthbound_core::layout::FieldId::TextSpeed)
        .expect("text speed in layout");
    bytes[text_speed.start] = 0;

    let err = SaveRecord::decode(&bytes).unwrap_err();
    assert_eq!(
        err,
        SaveError::Layout(LayoutError::InvalidEnumValue {
            field: "text speed",
            offset: text_speed.start,
            value: 0,
        })
    );
}

#[test]
fn decoding_is_all_or_nothing() {
    // A record that fails at the very last field must not hand back a
    // partially-populated record: decode returns Err, full stop.
    let mut bytes = sample_record().encode().expect("encodes");
    let status_offset = PARTY_OFFSET + 3 * PARTY_MEMBER_LEN + PARTY_NAME_WIDTH + 1 + 4 + 4 + 4 + 1;
    bytes[status_offset] = 9; // possession status of the last member

    assert!(SaveRecord::decode(&bytes).is_err());
}
