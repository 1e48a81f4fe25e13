pub mod entry;
pub mod entry_kind;
pub mod location;
pub mod month;
pub mod settings;
pub mod summary;
pub mod team;
