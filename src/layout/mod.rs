// src/layout/mod.rs
//! Deterministic layout generation: five spatial arrangements for N tiles.
//!
//! Everything in this module is pure geometry over the layout parameters
//! and the tile count, with no ECS or asset dependence. The same inputs
//! always produce bit-identical target sequences.

use bevy::prelude::*;

mod config;
mod grid;
mod helix;
mod pyramid;
mod sphere;
mod table;

pub use config::LayoutConfig;
pub use grid::{GridLayout, GridParams};
pub use helix::{HelixLayout, HelixParams};
pub use pyramid::{PyramidLayout, PyramidParams};
pub use sphere::{SphereLayout, SphereParams};
pub use table::{TableLayout, TableParams};

/// One computed placement: where a tile sits and which way it faces.
/// A tile's front surface is its local -Z (Bevy's forward direction).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Target {
    pub translation: Vec3,
    pub rotation: Quat,
}

impl Target {
    /// Placement facing the fixed forward axis (no rotation).
    #[inline]
    pub fn frontal(translation: Vec3) -> Self {
        Self { translation, rotation: Quat::IDENTITY }
    }

    /// Placement whose front points from `translation` toward `focus`.
    /// Safe when the view direction is parallel to +Y (sphere poles).
    #[inline]
    pub fn facing(translation: Vec3, focus: Vec3) -> Self {
        let rotation = Transform::from_translation(translation)
            .looking_at(focus, Vec3::Y)
            .rotation;
        Self { translation, rotation }
    }
}

/// Named layout selection identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayoutKind {
    Table,
    Sphere,
    Helix,
    Grid,
    Pyramid,
}

impl LayoutKind {
    pub const ALL: [LayoutKind; 5] = [
        LayoutKind::Table,
        LayoutKind::Sphere,
        LayoutKind::Helix,
        LayoutKind::Grid,
        LayoutKind::Pyramid,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LayoutKind::Table => "table",
            LayoutKind::Sphere => "sphere",
            LayoutKind::Helix => "helix",
            LayoutKind::Grid => "grid",
            LayoutKind::Pyramid => "pyramid",
        }
    }
}

/// Strategy that deterministically produces one target per tile index.
pub trait LayoutStrategy {
    /// Must return exactly `count` targets, identical for identical inputs.
    fn targets(&self, count: usize) -> Vec<Target>;
}

/// All five target sequences for one tile count, index-aligned with the
/// caller's tiles (target `i` belongs to tile `i`).
#[derive(Clone, Debug, Default)]
pub struct LayoutTargets {
    pub table: Vec<Target>,
    pub sphere: Vec<Target>,
    pub helix: Vec<Target>,
    pub grid: Vec<Target>,
    pub pyramid: Vec<Target>,
}

impl LayoutTargets {
    pub fn get(&self, kind: LayoutKind) -> &[Target] {
        match kind {
            LayoutKind::Table => &self.table,
            LayoutKind::Sphere => &self.sphere,
            LayoutKind::Helix => &self.helix,
            LayoutKind::Grid => &self.grid,
            LayoutKind::Pyramid => &self.pyramid,
        }
    }
}

/// Compute every layout for `count` tiles.
///
/// Recomputed from scratch whenever the tile count changes; the result is
/// a plain value the caller holds for the session.
pub fn generate_all(config: &LayoutConfig, count: usize) -> LayoutTargets {
    LayoutTargets {
        table: TableLayout::new(config.table).targets(count),
        sphere: SphereLayout::new(config.sphere).targets(count),
        helix: HelixLayout::new(config.helix).targets(count),
        grid: GridLayout::new(config.grid).targets(count),
        pyramid: PyramidLayout::new(config.pyramid).targets(count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(t: &Target) -> [u32; 7] {
        [
            t.translation.x.to_bits(),
            t.translation.y.to_bits(),
            t.translation.z.to_bits(),
            t.rotation.x.to_bits(),
            t.rotation.y.to_bits(),
            t.rotation.z.to_bits(),
            t.rotation.w.to_bits(),
        ]
    }

    #[test]
    fn every_kind_returns_exactly_n() {
        let config = LayoutConfig::default();
        for n in [0usize, 1, 2, 3, 7, 199, 200, 421] {
            let all = generate_all(&config, n);
            for kind in LayoutKind::ALL {
                assert_eq!(all.get(kind).len(), n, "{} at n={}", kind.label(), n);
            }
        }
    }

    #[test]
    fn zero_count_is_empty_not_an_error() {
        let all = generate_all(&LayoutConfig::default(), 0);
        for kind in LayoutKind::ALL {
            assert!(all.get(kind).is_empty());
        }
    }

    #[test]
    fn generation_is_bit_exact() {
        let config = LayoutConfig::default();
        let a = generate_all(&config, 137);
        let b = generate_all(&config, 137);
        for kind in LayoutKind::ALL {
            for (x, y) in a.get(kind).iter().zip(b.get(kind)) {
                assert_eq!(bits(x), bits(y), "{} diverged", kind.label());
            }
        }
    }

    #[test]
    fn frontal_kinds_use_identity_rotation() {
        let all = generate_all(&LayoutConfig::default(), 60);
        for kind in [LayoutKind::Table, LayoutKind::Grid] {
            for t in all.get(kind) {
                assert_eq!(t.rotation, Quat::IDENTITY);
            }
        }
    }

    #[test]
    fn kind_labels_are_stable() {
        let labels: Vec<&str> = LayoutKind::ALL.iter().map(|k| k.label()).collect();
        assert_eq!(labels, ["table", "sphere", "helix", "grid", "pyramid"]);
    }

    #[test]
    fn facing_points_front_at_focus() {
        let t = Target::facing(Vec3::new(100.0, 0.0, 0.0), Vec3::new(200.0, 0.0, 0.0));
        let forward = t.rotation * Vec3::NEG_Z;
        assert!(forward.dot(Vec3::X) > 0.999);
    }

    #[test]
    fn facing_handles_vertical_view_direction() {
        // Looking straight down +/-Y must not produce NaN rotations.
        for p in [Vec3::new(0.0, 900.0, 0.0), Vec3::new(0.0, -900.0, 0.0)] {
            let t = Target::facing(p, p * 2.0);
            assert!(t.rotation.is_finite());
            let forward = t.rotation * Vec3::NEG_Z;
            assert!(forward.dot(p.normalize()) > 0.999);
        }
    }
}
