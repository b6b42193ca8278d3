use earthbound_core::layout::{record_layout, FieldId};
use earthbound_core::save::types::{
    ESCARGO_EXPRESS_OFFSET, EVENT_FLAG_BYTES, FLAG_OFFSET, PARTY_MEMBER_LEN, PARTY_SIZE,
    SAVE_LENGTH,
};

#[test]
fn layout_is_contiguous_and_covers_the_record() {
    let layout = record_layout();
    layout.validate().expect("valid layout");
    assert_eq!(layout.record_len, SAVE_LENGTH);
}

#[test]
fn named_format_offsets_hold() {
    let layout = record_layout();

    let escargo = layout.field(FieldId::EscargoExpress).expect("escargo field");
    assert_eq!(escargo.start, ESCARGO_EXPRESS_OFFSET);
    assert_eq!(escargo.start, 0x76);

    let flags = layout.field(FieldId::EventFlags).expect("flag field");
    assert_eq!(flags.start, FLAG_OFFSET);
    assert_eq!(flags.start, 0x433);
    assert_eq!(flags.len(), EVENT_FLAG_BYTES);
    assert_eq!(flags.len(), 205);

    assert_eq!(SAVE_LENGTH, 0x500);
}

#[test]
fn field_widths_match_the_format_constants() {
    let layout = record_layout();

    assert_eq!(layout.field(FieldId::PlayerName).unwrap().len(), 24);
    assert_eq!(layout.field(FieldId::PetName).unwrap().len(), 6);
    assert_eq!(layout.field(FieldId::FavoriteFood).unwrap().len(), 6);
    assert_eq!(layout.field(FieldId::FavoriteThing).unwrap().len(), 11);
    assert_eq!(
        layout.field(FieldId::Party).unwrap().len(),
        PARTY_SIZE * PARTY_MEMBER_LEN
    );
}
