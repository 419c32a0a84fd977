// src/tiles/systems.rs
//! Spawning tiles from the roster and easing them between layouts.

use bevy::prelude::*;
use bevy::window::{PrimaryWindow, Window};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::core::{parse_money, TileIndex, WealthBand};
use super::plugin::{
    ActiveLayout, RosterHandle, SelectedTile, TileRecords, TileTargets, TilesSettings,
};
use super::roster::TileRoster;
use crate::layout::{generate_all, LayoutConfig};
use crate::state::AppState;

/// Tile quad footprint in world units (matches the 140 x 180 layout pitch
/// with a small gutter).
pub const TILE_WIDTH: f32 = 120.0;
pub const TILE_HEIGHT: f32 = 160.0;

/// Click-pick radius around a tile's center: half the quad diagonal.
pub const PICK_RADIUS: f32 = 100.0;

/// In-flight interpolation from a captured start transform toward the
/// tile's target in the active layout.
#[derive(Component, Clone, Copy, Debug)]
pub struct Transition {
    pub from_translation: Vec3,
    pub from_rotation: Quat,
    pub duration: f32,
    pub elapsed: f32,
}

impl Transition {
    fn starting_at(transform: &Transform, duration: f32) -> Self {
        Self {
            from_translation: transform.translation,
            from_rotation: transform.rotation,
            duration: duration.max(1e-3),
            elapsed: 0.0,
        }
    }
}

/// Exponential ease-in-out over t in [0, 1].
fn ease_expo_in_out(t: f32) -> f32 {
    if t <= 0.0 {
        0.0
    } else if t >= 1.0 {
        1.0
    } else if t < 0.5 {
        0.5 * 2.0_f32.powf(20.0 * t - 10.0)
    } else {
        1.0 - 0.5 * 2.0_f32.powf(-20.0 * t + 10.0)
    }
}

fn tile_material(band: WealthBand) -> StandardMaterial {
    StandardMaterial {
        base_color: band.color(),
        unlit: true,
        double_sided: true,
        cull_mode: None,
        alpha_mode: AlphaMode::Blend,
        ..default()
    }
}

/// Update (Loading): once the roster asset resolves, spawn one tile per
/// capped record at a scattered position, compute all layout targets for
/// that count, and hand the app to the viewer state.
pub fn spawn_tiles_when_ready(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    rosters: Res<Assets<TileRoster>>,
    handle: Res<RosterHandle>,
    settings: Res<TilesSettings>,
    config: Res<LayoutConfig>,
    active: Res<ActiveLayout>,
    mut targets: ResMut<TileTargets>,
    mut records: ResMut<TileRecords>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let Some(roster) = rosters.get(&handle.0) else {
        return;
    };

    let count = roster.records.len().min(settings.max_tiles);
    if count < roster.records.len() {
        warn!(
            "Tiles: roster has {} records, showing the first {}",
            roster.records.len(),
            count
        );
    }

    targets.0 = generate_all(&config, count);
    records.0 = roster.records.iter().take(count).cloned().collect();

    let mesh = meshes.add(Rectangle::new(TILE_WIDTH, TILE_HEIGHT));
    let band_materials = [
        (WealthBand::High, materials.add(tile_material(WealthBand::High))),
        (WealthBand::Medium, materials.add(tile_material(WealthBand::Medium))),
        (WealthBand::Low, materials.add(tile_material(WealthBand::Low))),
    ];
    let material_for = |band: WealthBand| -> Handle<StandardMaterial> {
        band_materials
            .iter()
            .find(|(b, _)| *b == band)
            .map(|(_, h)| h.clone())
            .unwrap_or_else(|| band_materials[0].1.clone())
    };

    // Stable per seed: the scatter cloud and stagger repeat run to run.
    let mut rng = ChaCha8Rng::seed_from_u64(settings.scatter_seed);
    let extent = settings.scatter_extent;

    for (i, record) in roster.records.iter().take(count).enumerate() {
        let band = WealthBand::for_value(parse_money(&record.net_worth));

        let start = Transform::from_translation(Vec3::new(
            rng.random_range(-extent..extent),
            rng.random_range(-extent..extent),
            rng.random_range(-extent..extent),
        ));
        let duration = settings.transition_secs + rng.random::<f32>() * settings.transition_secs;

        commands.spawn((
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material_for(band)),
            start,
            TileIndex(i),
            Transition::starting_at(&start, duration),
        ));
    }

    info!(
        "Tiles: spawned {} tiles, heading to the {} layout",
        count,
        active.0.label()
    );
    next_state.set(AppState::Viewing);
}

/// Index of the tile center nearest to the ray, within the pick radius.
fn closest_tile_to_ray(
    origin: Vec3,
    dir: Vec3,
    tiles: impl Iterator<Item = (usize, Vec3)>,
) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (index, center) in tiles {
        let t = (center - origin).dot(dir).max(0.0);
        let miss = (origin + dir * t).distance(center);
        if miss <= PICK_RADIUS && best.is_none_or(|(_, d)| miss < d) {
            best = Some((index, miss));
        }
    }
    best.map(|(index, _)| index)
}

/// Update: on left-click, cast a ray from the cursor and select the tile
/// nearest to it; a click into empty space clears the selection.
pub fn pick_tile_on_click(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    tiles: Query<(&TileIndex, &GlobalTransform)>,
    mut selected: ResMut<SelectedTile>,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = windows.single() else { return; };
    let Some(cursor) = window.cursor_position() else { return; };
    let Ok((camera, cam_transform)) = cameras.single() else { return; };
    let Ok(ray) = camera.viewport_to_world(cam_transform, cursor) else { return; };

    let picked = closest_tile_to_ray(
        ray.origin,
        *ray.direction,
        tiles.iter().map(|(index, tf)| (index.0, tf.translation())),
    );
    if selected.0 != picked {
        selected.0 = picked;
    }
}

/// Update: when the active layout changes, restart every tile's transition
/// from wherever it currently is.
pub fn retarget_on_layout_change(
    mut commands: Commands,
    active: Res<ActiveLayout>,
    settings: Res<TilesSettings>,
    tiles: Query<(Entity, &Transform), With<TileIndex>>,
) {
    if !active.is_changed() || active.is_added() {
        return;
    }

    // Stable per (seed, layout) so repeated switches replay the same stagger.
    let mix = settings.scatter_seed
        ^ ((active.0 as u64) << 32)
        ^ 0xA5A5_5A5A_D3F0_1234u64;
    let mut rng = ChaCha8Rng::seed_from_u64(mix);

    info!("Tiles: transitioning to the {} layout", active.0.label());
    for (entity, transform) in &tiles {
        let duration = settings.transition_secs + rng.random::<f32>() * settings.transition_secs;
        commands
            .entity(entity)
            .insert(Transition::starting_at(transform, duration));
    }
}

/// Update: ease every transitioning tile toward its target in the active
/// layout; snap and retire the transition when it completes.
pub fn advance_transitions(
    mut commands: Commands,
    time: Res<Time>,
    active: Res<ActiveLayout>,
    targets: Res<TileTargets>,
    mut tiles: Query<(Entity, &mut Transform, &mut Transition, &TileIndex)>,
) {
    let dt = time.delta_secs();
    let sequence = targets.0.get(active.0);

    for (entity, mut transform, mut transition, index) in &mut tiles {
        let Some(target) = sequence.get(index.0) else {
            continue;
        };

        transition.elapsed += dt;
        let t = ease_expo_in_out((transition.elapsed / transition.duration).min(1.0));

        transform.translation = transition.from_translation.lerp(target.translation, t);
        transform.rotation = transition.from_rotation.slerp(target.rotation, t);

        if transition.elapsed >= transition.duration {
            transform.translation = target.translation;
            transform.rotation = target.rotation;
            commands.entity(entity).remove::<Transition>();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_hits_its_endpoints() {
        assert_eq!(ease_expo_in_out(0.0), 0.0);
        assert_eq!(ease_expo_in_out(1.0), 1.0);
        assert!((ease_expo_in_out(0.5) - 0.5).abs() < 1e-4);
    }

    #[test]
    fn easing_is_monotonic() {
        let mut prev = 0.0;
        for step in 0..=100 {
            let t = step as f32 / 100.0;
            let eased = ease_expo_in_out(t);
            assert!(eased >= prev, "dip at t={}", t);
            assert!((0.0..=1.0).contains(&eased));
            prev = eased;
        }
    }

    #[test]
    fn transition_duration_never_zero() {
        let tr = Transition::starting_at(&Transform::IDENTITY, 0.0);
        assert!(tr.duration > 0.0);
    }

    #[test]
    fn ray_picks_the_nearest_tile() {
        // Camera on +Z looking down -Z; tile 1 sits on the ray, tile 0 is
        // off to the side but still within the pick radius.
        let centers = [
            (0usize, Vec3::new(90.0, 0.0, 0.0)),
            (1usize, Vec3::ZERO),
            (2usize, Vec3::new(0.0, 500.0, 0.0)),
        ];
        let picked = closest_tile_to_ray(
            Vec3::new(0.0, 0.0, 3000.0),
            Vec3::NEG_Z,
            centers.iter().copied(),
        );
        assert_eq!(picked, Some(1));
    }

    #[test]
    fn ray_misses_outside_the_pick_radius() {
        let centers = [(0usize, Vec3::new(500.0, 0.0, 0.0))];
        let picked = closest_tile_to_ray(
            Vec3::new(0.0, 0.0, 3000.0),
            Vec3::NEG_Z,
            centers.iter().copied(),
        );
        assert_eq!(picked, None);
    }

    #[test]
    fn tiles_behind_the_ray_origin_are_not_picked() {
        let centers = [(0usize, Vec3::new(0.0, 0.0, 4000.0))];
        let picked = closest_tile_to_ray(
            Vec3::new(0.0, 0.0, 3000.0),
            Vec3::NEG_Z,
            centers.iter().copied(),
        );
        assert_eq!(picked, None);
    }
}
