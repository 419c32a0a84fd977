// src/tiles/roster.rs
//! Data-driven tile roster + RON asset loader.

use bevy::asset::{io::Reader, AssetLoader, LoadContext};
use bevy::prelude::*;

use super::core::TileRecord;

// ---------- Public plugin to register asset+loader ----------

pub struct RosterAssetPlugin;

impl Plugin for RosterAssetPlugin {
    fn build(&self, app: &mut App) {
        app.init_asset::<TileRoster>()
            .register_asset_loader(RosterLoader);
    }
}

// ---------- Runtime roster asset ----------

/// Ordered record list; index in this vector is the tile index.
#[derive(Asset, TypePath, Clone, Debug)]
pub struct TileRoster {
    pub records: Vec<TileRecord>,
}

// ---------- Asset loader for `.roster.ron` ----------

#[derive(Default)]
pub struct RosterLoader;

impl AssetLoader for RosterLoader {
    type Asset = TileRoster;
    type Settings = ();
    type Error = RosterLoadError;

    fn extensions(&self) -> &[&str] {
        &["roster.ron"]
    }

    async fn load(
        &self,
        reader: &mut dyn Reader,
        _settings: &Self::Settings,
        _load_context: &mut LoadContext<'_>,
    ) -> Result<Self::Asset, Self::Error> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).await?;
        parse_roster(&bytes)
    }
}

fn parse_roster(bytes: &[u8]) -> Result<TileRoster, RosterLoadError> {
    let records: Vec<TileRecord> =
        ron::de::from_bytes(bytes).map_err(|e| RosterLoadError::Ron(e.to_string()))?;
    Ok(TileRoster { records })
}

// ---------- Loader errors ----------

#[derive(thiserror::Error, Debug)]
pub enum RosterLoadError {
    #[error("I/O while reading roster: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON parse error: {0}")]
    Ron(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_record_list() {
        let roster = parse_roster(
            br#"[
                (name: "Amara Osei", age: Some(34), country: "GH", interest: "Cycling", net_worth: "$245,000"),
                (name: "Wei Lin Tan", net_worth: "$182,500"),
            ]"#,
        )
        .unwrap();
        assert_eq!(roster.records.len(), 2);
        assert_eq!(roster.records[1].name, "Wei Lin Tan");
        assert_eq!(roster.records[1].age, None);
    }

    #[test]
    fn malformed_ron_reports_a_parse_error() {
        let err = parse_roster(b"not a roster").unwrap_err();
        assert!(matches!(err, RosterLoadError::Ron(_)));
        assert!(err.to_string().contains("RON parse error"));
    }
}
