// src/layout/config.rs
//! All layout parameters gathered into one explicit, serde-able value.
//!
//! The generators take their parameters as arguments rather than reading
//! module-level constants, so they stay independently testable.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::grid::GridParams;
use super::helix::HelixParams;
use super::pyramid::PyramidParams;
use super::sphere::SphereParams;
use super::table::TableParams;

/// Parameters for all five layout kinds. Fixed for the process lifetime;
/// never derived from tile data.
#[derive(Resource, Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub table: TableParams,
    pub sphere: SphereParams,
    pub helix: HelixParams,
    pub grid: GridParams,
    pub pyramid: PyramidParams,
}
