use bevy::asset::LoadState;
use bevy::prelude::*;
use bevy::ui::BackgroundColor;

use crate::layout::LayoutKind;
use crate::tiles::{ActiveLayout, RosterHandle, SelectedTile, TileRecords, TilesSettings};

#[derive(Component)]
pub struct LoadingOverlay;

#[derive(Component)]
pub struct LoadingStatusText;

#[derive(Component)]
pub struct LayoutHud;

#[derive(Component)]
pub struct TileDetailHud;

pub fn spawn_loading_overlay(mut commands: Commands) {
    commands.spawn((
        // Fullscreen dark overlay while the roster loads
        Node {
            position_type: PositionType::Absolute,
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            ..default()
        },
        BackgroundColor(Color::linear_rgba(0.0, 0.0, 0.0, 0.7)),
        LoadingOverlay,
    ))
    .with_children(|parent| {
        parent.spawn((
            Text::new("Loading roster…"),
            TextFont {
                font_size: 48.0,
                ..default()
            },
            TextLayout::new_with_justify(JustifyText::Center),
            TextColor(Color::WHITE),
            LoadingStatusText,
        ));
    });
}

pub fn despawn_loading_overlay(
    mut commands: Commands,
    query: Query<Entity, With<LoadingOverlay>>,
) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
}

/// Update (Loading): if the roster asset fails, say so on the overlay
/// instead of spinning forever.
pub fn show_roster_load_failure(
    assets: Res<AssetServer>,
    handle: Res<RosterHandle>,
    settings: Res<TilesSettings>,
    mut texts: Query<&mut Text, With<LoadingStatusText>>,
    mut reported: Local<bool>,
) {
    if *reported {
        return;
    }
    if let Some(LoadState::Failed(err)) = assets.get_load_state(&handle.0) {
        *reported = true;
        warn!("Tiles: roster '{}' failed to load: {}", settings.roster_path, err);
        for mut text in &mut texts {
            text.0 = format!("Failed to load roster '{}' (see log)", settings.roster_path);
        }
    }
}

pub fn spawn_layout_hud(mut commands: Commands, active: Res<ActiveLayout>) {
    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(12.0),
            left: Val::Px(12.0),
            ..default()
        },
        Text::new(hud_text(active.0)),
        TextFont {
            font_size: 20.0,
            ..default()
        },
        TextColor(Color::WHITE),
        LayoutHud,
    ));

    // Detail line for the clicked tile, along the bottom edge
    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(12.0),
            left: Val::Px(12.0),
            ..default()
        },
        Text::new(DETAIL_HINT),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        TextColor(Color::WHITE),
        TileDetailHud,
    ));
}

pub fn refresh_layout_hud(
    active: Res<ActiveLayout>,
    mut huds: Query<&mut Text, With<LayoutHud>>,
) {
    if !active.is_changed() {
        return;
    }
    for mut text in &mut huds {
        text.0 = hud_text(active.0);
    }
}

pub fn refresh_tile_detail_hud(
    selected: Res<SelectedTile>,
    records: Res<TileRecords>,
    mut huds: Query<&mut Text, With<TileDetailHud>>,
) {
    if !selected.is_changed() {
        return;
    }
    let line = match selected.0.and_then(|i| records.0.get(i).map(|r| (i, r))) {
        Some((index, record)) => record.summary(index),
        None => DETAIL_HINT.to_string(),
    };
    for mut text in &mut huds {
        text.0 = line.clone();
    }
}

const DETAIL_HINT: &str = "click a tile for details";

fn hud_text(kind: LayoutKind) -> String {
    format!(
        "layout: {}    [1] table  [2] sphere  [3] helix  [4] grid  [5] pyramid",
        kind.label()
    )
}
