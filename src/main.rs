use bevy::prelude::*;

mod input;
mod layout;
mod setup;
mod state;
mod tiles;
mod ui;

// re-export the bits we actually need in main
use input::{camera_controller, layout_hotkeys_system, pan_input_system, PanInput};
use layout::LayoutConfig;
use state::AppState;
use tiles::TilesPlugin;
use ui::{
    despawn_loading_overlay, refresh_layout_hud, refresh_tile_detail_hud, show_roster_load_failure,
    spawn_layout_hud, spawn_loading_overlay,
};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "tessella".to_string(),
                ..default()
            }),
            ..default()
        }))
        // tiles: roster asset, spawn, transitions
        .add_plugins(TilesPlugin)
        .insert_resource(ClearColor(Color::srgb(0.02, 0.02, 0.05)))
        // init resources & app state
        .init_resource::<PanInput>()
        .init_resource::<LayoutConfig>()
        .init_state::<AppState>()
        // camera
        .add_systems(Startup, (setup::setup, spawn_loading_overlay))
        // surface roster load failures on the overlay
        .add_systems(
            Update,
            show_roster_load_failure.run_if(in_state(AppState::Loading)),
        )
        // loading overlay swaps for the HUDs once tiles are live
        .add_systems(OnExit(AppState::Loading), (despawn_loading_overlay, spawn_layout_hud))
        // input + camera + HUDs each frame
        .add_systems(
            Update,
            (
                pan_input_system,
                camera_controller,
                layout_hotkeys_system,
                refresh_layout_hud,
                refresh_tile_detail_hud,
            )
                .run_if(in_state(AppState::Viewing)),
        )
        .run();
}
