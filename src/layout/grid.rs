// src/layout/grid.rs
//! 3D lattice arrangement (default 5 x 4 x 10), frontal facing.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::{LayoutStrategy, Target};

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct GridParams {
    pub x: u32,
    pub y: u32,
    pub z: u32,
    pub x_spacing: f32,
    pub y_spacing: f32,
    pub z_spacing: f32,
}

impl Default for GridParams {
    fn default() -> Self {
        Self { x: 5, y: 4, z: 10, x_spacing: 400.0, y_spacing: 300.0, z_spacing: 500.0 }
    }
}

pub struct GridLayout {
    params: GridParams,
}

impl GridLayout {
    pub fn new(params: GridParams) -> Self {
        Self {
            params: GridParams {
                x: params.x.max(1),
                y: params.y.max(1),
                z: params.z.max(1),
                ..params
            },
        }
    }
}

impl LayoutStrategy for GridLayout {
    fn targets(&self, count: usize) -> Vec<Target> {
        let p = self.params;
        let (nx, ny, nz) = (p.x as usize, p.y as usize, p.z as usize);
        let half = Vec3::new(
            (nx as f32 - 1.0) / 2.0,
            (ny as f32 - 1.0) / 2.0,
            (nz as f32 - 1.0) / 2.0,
        );

        let mut out = Vec::with_capacity(count);
        for i in 0..count {
            let xi = (i % nx) as f32;
            let yi = ((i / nx) % ny) as f32;
            // Wraps past x*y*z capacity; overlapping cells are accepted.
            let zi = ((i / (nx * ny)) % nz) as f32;

            out.push(Target::frontal(Vec3::new(
                (xi - half.x) * p.x_spacing,
                (half.y - yi) * p.y_spacing,
                (zi - half.z) * p.z_spacing,
            )));
        }
        out
    }
}
