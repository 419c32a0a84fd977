// src/layout/pyramid.rs
//! N tiles spread evenly over the four faces of a regular tetrahedron,
//! each tile facing outward along its face's normal.
//!
//! Points come from a centroid-biased barycentric lattice on each face,
//! subdivided just far enough to cover the per-face budget, then evenly
//! subsampled back down to the requested count.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::{LayoutStrategy, Target};

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct PyramidParams {
    pub edge_length: f32,
}

impl Default for PyramidParams {
    fn default() -> Self {
        Self { edge_length: 1800.0 }
    }
}

pub struct PyramidLayout {
    params: PyramidParams,
}

impl PyramidLayout {
    pub fn new(params: PyramidParams) -> Self {
        Self { params }
    }
}

/// Vertex-index triples for the four triangular faces.
const FACES: [[usize; 3]; 4] = [[0, 1, 2], [0, 3, 1], [0, 2, 3], [1, 3, 2]];

/// Regular tetrahedron with the requested edge length, centroid at origin.
fn tetrahedron_vertices(edge_length: f32) -> [Vec3; 4] {
    // Alternate corners of a cube; pairwise distance is 2*sqrt(2) pre-scale.
    let s = edge_length / (2.0 * 2.0_f32.sqrt());
    [
        Vec3::new(1.0, 1.0, 1.0) * s,
        Vec3::new(1.0, -1.0, -1.0) * s,
        Vec3::new(-1.0, 1.0, -1.0) * s,
        Vec3::new(-1.0, -1.0, 1.0) * s,
    ]
}

/// Unit normal of a face, flipped if needed so it points away from the
/// tetrahedron centroid (the origin).
fn outward_normal(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    let n = (b - a).cross(c - a).normalize();
    let face_centroid = (a + b + c) / 3.0;
    if n.dot(face_centroid) < 0.0 { -n } else { n }
}

/// Lattice points per face at subdivision level `n`.
fn per_face_points(n: usize) -> usize {
    n * (n + 1) / 2 + (n + 1)
}

/// Smallest subdivision level whose per-face budget reaches `needed`.
fn subdivision_level(needed: usize) -> usize {
    let mut n = 1;
    while per_face_points(n) < needed {
        n += 1;
    }
    n
}

impl LayoutStrategy for PyramidLayout {
    fn targets(&self, count: usize) -> Vec<Target> {
        if count == 0 {
            return Vec::new();
        }

        let verts = tetrahedron_vertices(self.params.edge_length);
        let level = subdivision_level(count.div_ceil(4));
        let denom = (level + 1) as f32;

        // Centroid-biased barycentric lattice over every face, paired with
        // the face's outward normal.
        let mut points = Vec::with_capacity(4 * per_face_points(level));
        for face in FACES {
            let (a, b, c) = (verts[face[0]], verts[face[1]], verts[face[2]]);
            let normal = outward_normal(a, b, c);

            for i in 0..=level {
                for j in 0..=(level - i) {
                    let u = (i as f32 + 1.0 / 3.0) / denom;
                    let v = (j as f32 + 1.0 / 3.0) / denom;
                    let w = 1.0 - u - v;
                    if w < 0.0 {
                        continue;
                    }
                    points.push((a * u + b * v + c * w, normal));
                }
            }
        }

        let total = points.len();
        let mut out = Vec::with_capacity(count);
        if total > count {
            // Even-stride subsample so the survivors stay spread across all
            // four faces instead of truncating the last one.
            let stride = total as f32 / count as f32;
            for i in 0..count {
                let idx = ((i as f32 * stride).floor() as usize).min(total - 1);
                let (p, normal) = points[idx];
                out.push(Target::facing(p, p + normal));
            }
        } else {
            for &(p, normal) in &points {
                out.push(Target::facing(p, p + normal));
            }
            // Subdivision always covers `count`; keep a defined placement
            // if it ever does not.
            while out.len() < count {
                out.push(Target::frontal(Vec3::ZERO));
            }
        }
        out
    }
}
