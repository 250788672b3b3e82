//! Material file validation and update

pub mod path;
pub mod update;

pub use update::MaterialUpdater;
