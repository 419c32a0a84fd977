// src/layout/sphere.rs
//! Spiral distribution of N tiles over a sphere, each facing outward.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::{LayoutStrategy, Target};

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SphereParams {
    pub radius: f32,
}

impl Default for SphereParams {
    fn default() -> Self {
        Self { radius: 900.0 }
    }
}

pub struct SphereLayout {
    params: SphereParams,
}

impl SphereLayout {
    pub fn new(params: SphereParams) -> Self {
        Self { params }
    }
}

impl LayoutStrategy for SphereLayout {
    fn targets(&self, count: usize) -> Vec<Target> {
        let radius = self.params.radius;
        let n = count as f32;

        let mut out = Vec::with_capacity(count);
        for i in 0..count {
            // Polar angle from the +Y pole, azimuth spiraled so the points
            // spread near-uniformly. At count == 1 this degenerates to the
            // -Y pole, which is the documented single-tile placement.
            let phi = (-1.0 + 2.0 * i as f32 / n).acos();
            let theta = (n * std::f32::consts::PI).sqrt() * phi;

            let sin_phi = phi.sin();
            let translation = Vec3::new(
                sin_phi * theta.sin(),
                phi.cos(),
                sin_phi * theta.cos(),
            ) * radius;

            // Face directly away from the sphere's center.
            out.push(Target::facing(translation, translation * 2.0));
        }
        out
    }
}
