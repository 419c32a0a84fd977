// src/layout/table.rs
//! Flat table arrangement (default 20 columns x 10 rows), frontal facing.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::{LayoutStrategy, Target};

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct TableParams {
    pub cols: u32,
    pub rows: u32,
    pub x_spacing: f32,
    pub y_spacing: f32,
}

impl Default for TableParams {
    fn default() -> Self {
        Self { cols: 20, rows: 10, x_spacing: 140.0, y_spacing: 180.0 }
    }
}

pub struct TableLayout {
    params: TableParams,
}

impl TableLayout {
    pub fn new(params: TableParams) -> Self {
        Self { params: TableParams { cols: params.cols.max(1), ..params } }
    }
}

impl LayoutStrategy for TableLayout {
    fn targets(&self, count: usize) -> Vec<Target> {
        let TableParams { cols, rows, x_spacing, y_spacing } = self.params;
        let cols = cols as usize;
        let half_cols = cols as f32 / 2.0 - 0.5;
        let half_rows = rows as f32 / 2.0 - 0.5;

        let mut out = Vec::with_capacity(count);
        for i in 0..count {
            let col = (i % cols) as f32;
            // Indices past cols*rows keep walking downward; the sheet is
            // centered for the configured extent, not clamped to it.
            let row = (i / cols) as f32;

            out.push(Target::frontal(Vec3::new(
                (col - half_cols) * x_spacing,
                (half_rows - row) * y_spacing,
                0.0,
            )));
        }
        out
    }
}
