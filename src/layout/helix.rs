// src/layout/helix.rs
//! Double-helix arrangement: two interleaved strands around the Y axis,
//! each tile facing outward from the axis.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::{LayoutStrategy, Target};

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct HelixParams {
    pub radius: f32,
    /// Radians advanced per strand pair.
    pub angle_step: f32,
    /// Vertical drop per strand pair.
    pub y_step: f32,
    /// Vertical offset of the whole helix (keeps it roughly centered).
    pub y_offset: f32,
    /// Half the vertical gap between the two strands of a pair.
    pub strand_separation: f32,
}

impl Default for HelixParams {
    fn default() -> Self {
        Self {
            radius: 900.0,
            angle_step: 0.45,
            y_step: 18.0,
            y_offset: 450.0,
            strand_separation: 6.0,
        }
    }
}

pub struct HelixLayout {
    params: HelixParams,
}

impl HelixLayout {
    pub fn new(params: HelixParams) -> Self {
        Self { params }
    }
}

impl LayoutStrategy for HelixLayout {
    fn targets(&self, count: usize) -> Vec<Target> {
        let p = self.params;

        let mut out = Vec::with_capacity(count);
        for i in 0..count {
            let pair = (i / 2) as f32;
            let strand = i % 2;

            // The second strand winds half a turn out of phase.
            let angle = pair * p.angle_step
                + if strand == 1 { std::f32::consts::PI } else { 0.0 };

            let x = angle.sin() * p.radius;
            let z = angle.cos() * p.radius;
            let sep = if strand == 0 { p.strand_separation } else { -p.strand_separation };
            let y = -(pair * p.y_step) + p.y_offset + sep;

            let translation = Vec3::new(x, y, z);
            // Outward from the central axis, level with the tile.
            out.push(Target::facing(translation, Vec3::new(x * 2.0, y, z * 2.0)));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> HelixLayout {
        HelixLayout::new(HelixParams::default())
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-2
    }

    #[test]
    fn exact_count_including_empty() {
        assert!(layout().targets(0).is_empty());
        assert_eq!(layout().targets(1).len(), 1);
        assert_eq!(layout().targets(200).len(), 200);
    }

    #[test]
    fn points_sit_on_the_cylinder() {
        for t in layout().targets(120) {
            let r = Vec2::new(t.translation.x, t.translation.z).length();
            assert!(approx(r, 900.0), "radius {} off the cylinder", r);
        }
    }

    #[test]
    fn strand_pairs_are_phase_opposed() {
        let t = layout().targets(40);
        for pair in 0..20 {
            let a = t[2 * pair].translation;
            let b = t[2 * pair + 1].translation;

            // sin/cos flip sign under a PI phase shift.
            assert!(approx(b.x, -a.x));
            assert!(approx(b.z, -a.z));

            // Same pair differs vertically by exactly twice the separation.
            assert!(approx(a.y - b.y, 2.0 * 6.0));
        }
    }

    #[test]
    fn strands_descend_by_y_step() {
        let t = layout().targets(6);
        assert!(approx(t[0].translation.y - t[2].translation.y, 18.0));
        assert!(approx(t[1].translation.y - t[3].translation.y, 18.0));
    }

    #[test]
    fn orientation_is_outward_from_axis() {
        for t in layout().targets(64) {
            let forward = t.rotation * Vec3::NEG_Z;
            let outward = Vec3::new(t.translation.x, 0.0, t.translation.z).normalize();
            assert!(forward.dot(outward) > 0.999, "inward-facing tile at {:?}", t.translation);
        }
    }
}
