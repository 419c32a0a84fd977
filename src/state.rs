// src/state.rs

use bevy::prelude::*;

/// Loading: waiting for the roster asset; Viewing: tiles are live.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppState {
    #[default]
    Loading,
    Viewing,
}
