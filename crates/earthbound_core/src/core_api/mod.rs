mod engine;
mod error;
mod types;
pub mod well_known_items;

pub use engine::{Engine, Session};
pub use error::{CoreError, CoreErrorCode};
pub use types::{
    EquipEntry, InventoryEntry, LocationEntry, PartyMemberSummary, RollingEntry, Snapshot,
    StatEntry,
};
