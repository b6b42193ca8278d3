//! Built-in item name table for display resolution of inventory slot bytes.
//!
//! These are the well-known item IDs the editor references directly; the
//! full game table has 253 entries and slots holding an ID outside this
//! subset simply render without a name.

struct WellKnownItem {
    id: u8,
    name: &'static str,
}

#[rustfmt::skip]
const WELL_KNOWN_ITEMS: &[WellKnownItem] = &[
    // Bats
    WellKnownItem { id: 0x01, name: "Cracked bat" },
    WellKnownItem { id: 0x02, name: "Tee ball bat" },
    WellKnownItem { id: 0x03, name: "Sand lot bat" },
    WellKnownItem { id: 0x04, name: "Minor league bat" },
    WellKnownItem { id: 0x05, name: "Mr. Baseball bat" },
    WellKnownItem { id: 0x06, name: "Big league bat" },
    WellKnownItem { id: 0x07, name: "Hall of fame bat" },
    WellKnownItem { id: 0x08, name: "Magicant bat" },
    WellKnownItem { id: 0x09, name: "Legendary bat" },
    WellKnownItem { id: 0x0A, name: "Gutsy bat" },
    WellKnownItem { id: 0x0B, name: "Casey bat" },

    // Fry pans
    WellKnownItem { id: 0x0C, name: "Fry pan" },
    WellKnownItem { id: 0x0D, name: "Thick fry pan" },
    WellKnownItem { id: 0x0E, name: "Deluxe fry pan" },
    WellKnownItem { id: 0x0F, name: "Chef's fry pan" },
    WellKnownItem { id: 0x10, name: "French fry pan" },
    WellKnownItem { id: 0x11, name: "Magic fry pan" },
    WellKnownItem { id: 0x12, name: "Holy fry pan" },

    // Guns
    WellKnownItem { id: 0x13, name: "Pop gun" },
    WellKnownItem { id: 0x14, name: "Stun gun" },
    WellKnownItem { id: 0x15, name: "Toy air gun" },
    WellKnownItem { id: 0x16, name: "Magnum air gun" },
    WellKnownItem { id: 0x17, name: "Zip gun" },
    WellKnownItem { id: 0x18, name: "Laser gun" },
    WellKnownItem { id: 0x19, name: "Hyper beam" },
    WellKnownItem { id: 0x1A, name: "Crusher beam" },
    WellKnownItem { id: 0x1B, name: "Spectrum beam" },
    WellKnownItem { id: 0x1C, name: "Death ray" },
    WellKnownItem { id: 0x1D, name: "Baddest beam" },
    WellKnownItem { id: 0x1E, name: "Moon beam gun" },
    WellKnownItem { id: 0x1F, name: "Gaia beam" },

    // Body gear
    WellKnownItem { id: 0x20, name: "Travel charm" },
    WellKnownItem { id: 0x21, name: "Great charm" },
    WellKnownItem { id: 0x22, name: "Crystal charm" },
    WellKnownItem { id: 0x23, name: "Rabbit's foot" },
    WellKnownItem { id: 0x24, name: "Flame pendant" },
    WellKnownItem { id: 0x25, name: "Rain pendant" },
    WellKnownItem { id: 0x26, name: "Night pendant" },
    WellKnownItem { id: 0x27, name: "Sea pendant" },
    WellKnownItem { id: 0x28, name: "Star pendant" },
    WellKnownItem { id: 0x29, name: "Cloak of kings" },

    // Arm gear
    WellKnownItem { id: 0x2A, name: "Cheap bracelet" },
    WellKnownItem { id: 0x2B, name: "Copper bracelet" },
    WellKnownItem { id: 0x2C, name: "Silver bracelet" },
    WellKnownItem { id: 0x2D, name: "Gold bracelet" },
    WellKnownItem { id: 0x2E, name: "Platinum band" },
    WellKnownItem { id: 0x2F, name: "Diamond band" },
    WellKnownItem { id: 0x30, name: "Pixie's bracelet" },
    WellKnownItem { id: 0x31, name: "Cherub's band" },
    WellKnownItem { id: 0x32, name: "Goddess band" },
    WellKnownItem { id: 0x33, name: "Bracer of kings" },

    // Other gear
    WellKnownItem { id: 0x34, name: "Baseball cap" },
    WellKnownItem { id: 0x35, name: "Holmes hat" },
    WellKnownItem { id: 0x36, name: "Mr. Baseball cap" },
    WellKnownItem { id: 0x37, name: "Hard hat" },
    WellKnownItem { id: 0x38, name: "Ribbon" },
    WellKnownItem { id: 0x39, name: "Red ribbon" },
    WellKnownItem { id: 0x3A, name: "Goddess ribbon" },
    WellKnownItem { id: 0x3B, name: "Coin of slumber" },
    WellKnownItem { id: 0x3C, name: "Coin of defense" },
    WellKnownItem { id: 0x3D, name: "Lucky coin" },
    WellKnownItem { id: 0x3E, name: "Talisman coin" },
    WellKnownItem { id: 0x3F, name: "Shiny coin" },
    WellKnownItem { id: 0x40, name: "Souvenir coin" },
    WellKnownItem { id: 0x41, name: "Diadem of kings" },

    // Food
    WellKnownItem { id: 0x42, name: "Cookie" },
    WellKnownItem { id: 0x43, name: "Bag of fries" },
    WellKnownItem { id: 0x44, name: "Hamburger" },
    WellKnownItem { id: 0x45, name: "Boiled egg" },
    WellKnownItem { id: 0x46, name: "Fresh egg" },
    WellKnownItem { id: 0x47, name: "Picnic lunch" },
    WellKnownItem { id: 0x48, name: "Pasta di Summers" },
    WellKnownItem { id: 0x49, name: "Pizza" },
    WellKnownItem { id: 0x4A, name: "Chef's special" },
    WellKnownItem { id: 0x4B, name: "Large pizza" },
    WellKnownItem { id: 0x4C, name: "PSI caramel" },
    WellKnownItem { id: 0x4D, name: "Magic truffle" },
    WellKnownItem { id: 0x4E, name: "Brain food lunch" },
    WellKnownItem { id: 0x4F, name: "Rock candy" },
    WellKnownItem { id: 0x50, name: "Croissant" },
    WellKnownItem { id: 0x51, name: "Bread roll" },
    WellKnownItem { id: 0x52, name: "Pak of bubble gum" },
    WellKnownItem { id: 0x53, name: "Jar of Fly Honey" },
    WellKnownItem { id: 0x54, name: "Can of fruit juice" },
    WellKnownItem { id: 0x55, name: "Royal iced tea" },
    WellKnownItem { id: 0x56, name: "Protein drink" },
    WellKnownItem { id: 0x57, name: "Kraken soup" },
    WellKnownItem { id: 0x58, name: "Bottle of water" },
    WellKnownItem { id: 0x59, name: "Cold remedy" },
    WellKnownItem { id: 0x5A, name: "Vial of serum" },
    WellKnownItem { id: 0x5B, name: "IQ capsule" },
    WellKnownItem { id: 0x5C, name: "Guts capsule" },
    WellKnownItem { id: 0x5D, name: "Speed capsule" },
    WellKnownItem { id: 0x5E, name: "Vital capsule" },
    WellKnownItem { id: 0x5F, name: "Luck capsule" },

    // Key and battle items
    WellKnownItem { id: 0x69, name: "Franklin badge" },
    WellKnownItem { id: 0x6A, name: "Teddy bear" },
    WellKnownItem { id: 0x6B, name: "Super plush bear" },
    WellKnownItem { id: 0x6C, name: "Broken machine" },
    WellKnownItem { id: 0x7E, name: "Bicycle" },
    WellKnownItem { id: 0x84, name: "Pencil eraser" },
    WellKnownItem { id: 0x8D, name: "Sound stone" },
    WellKnownItem { id: 0x92, name: "Bottle rocket" },
    WellKnownItem { id: 0x93, name: "Big bottle rocket" },
    WellKnownItem { id: 0x94, name: "Multi bottle rocket" },
    WellKnownItem { id: 0xA1, name: "Exit mouse" },
    WellKnownItem { id: 0xB3, name: "For sale sign" },
];

/// Look up a well-known item by its slot byte. Returns the display name if
/// the ID is in the table.
pub fn lookup(id: u8) -> Option<&'static str> {
    WELL_KNOWN_ITEMS
        .iter()
        .find(|item| item.id == id)
        .map(|item| item.name)
}
