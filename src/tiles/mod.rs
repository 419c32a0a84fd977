// src/tiles/mod.rs
//! Tile records, roster asset, and the spawn/transition systems.

mod core;
mod plugin;
mod roster;
mod systems;

pub use self::core::{parse_money, TileIndex, TileRecord, WealthBand};
pub use self::plugin::{
    ActiveLayout, RosterHandle, SelectedTile, TileRecords, TileTargets, TilesPlugin, TilesSettings,
};
pub use self::roster::{RosterLoadError, TileRoster};
