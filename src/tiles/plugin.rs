// src/tiles/plugin.rs
//! Tiles plugin wiring (glue).
//! - Roster asset/loader
//! - Settings + active-layout + target resources
//! - Spawn + transition systems

use bevy::prelude::*;

use super::core::TileRecord;
use super::roster::{RosterAssetPlugin, TileRoster};
use super::systems::{
    advance_transitions, pick_tile_on_click, retarget_on_layout_change, spawn_tiles_when_ready,
};
use crate::layout::{LayoutKind, LayoutTargets};
use crate::state::AppState;

/// Where the roster lives, how many tiles to show, and how they move.
#[derive(Resource, Clone)]
pub struct TilesSettings {
    pub roster_path: String,
    /// Record cap; the table holds 20 x 10 by default.
    pub max_tiles: usize,
    /// Seed for the initial scatter and the per-tile transition stagger.
    pub scatter_seed: u64,
    /// Half-extent of the random initial scatter cube.
    pub scatter_extent: f32,
    /// Base transition time in seconds; each tile adds a random stagger
    /// of up to the same amount.
    pub transition_secs: f32,
}

impl Default for TilesSettings {
    fn default() -> Self {
        Self {
            roster_path: "tiles/demo.roster.ron".to_string(),
            max_tiles: 200,
            scatter_seed: 1337,
            scatter_extent: 2000.0,
            transition_secs: 2.0,
        }
    }
}

/// Handle to the loaded TileRoster asset.
#[derive(Resource, Default)]
pub struct RosterHandle(pub Handle<TileRoster>);

/// Which layout the tiles are currently headed toward.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActiveLayout(pub LayoutKind);

impl Default for ActiveLayout {
    fn default() -> Self {
        Self(LayoutKind::Table)
    }
}

/// Target sequences for the spawned tile count, one per layout kind.
/// Recomputed whenever the tile count changes, never mutated in place.
#[derive(Resource, Default)]
pub struct TileTargets(pub LayoutTargets);

/// The capped records backing the spawned tiles, index-aligned with
/// `TileIndex` (and so with every target sequence).
#[derive(Resource, Default)]
pub struct TileRecords(pub Vec<TileRecord>);

/// Which tile the user last clicked, if any.
#[derive(Resource, Default, Clone, Copy, PartialEq, Eq)]
pub struct SelectedTile(pub Option<usize>);

pub struct TilesPlugin;

impl Plugin for TilesPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RosterAssetPlugin)
            .init_resource::<TilesSettings>()
            .init_resource::<RosterHandle>()
            .init_resource::<ActiveLayout>()
            .init_resource::<TileTargets>()
            .init_resource::<TileRecords>()
            .init_resource::<SelectedTile>()
            .add_systems(Startup, load_roster)
            .add_systems(
                Update,
                spawn_tiles_when_ready.run_if(in_state(AppState::Loading)),
            )
            .add_systems(
                Update,
                (
                    pick_tile_on_click,
                    retarget_on_layout_change,
                    advance_transitions.after(retarget_on_layout_change),
                )
                    .run_if(in_state(AppState::Viewing)),
            );
    }
}

/// Startup: request loading the roster, store the handle.
fn load_roster(
    mut handle: ResMut<RosterHandle>,
    settings: Res<TilesSettings>,
    assets: Res<AssetServer>,
) {
    if handle.0.is_strong() {
        return;
    }
    handle.0 = assets.load(settings.roster_path.as_str());
    info!(
        "Tiles: loading roster from '{}', scatter_seed={}",
        settings.roster_path, settings.scatter_seed
    );
}
