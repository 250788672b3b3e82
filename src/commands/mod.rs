//! Command implementations for the update-material CLI

pub mod update;
