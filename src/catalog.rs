//! Level catalog loading and validation
//!
//! The wire format is the level file's JSON: an array of levels, each an
//! array of `[x, y, w, h, type]` platform tuples. Everything is validated
//! here, before the game loop starts; the sim itself never sees a malformed
//! platform.

use std::fs;
use std::path::Path;

use rand::Rng;
use serde::Deserialize;
use thiserror::Error;

use crate::sim::level::{Level, Platform, PlatformKind};

/// Errors surfaced while loading the level catalog. All of them are fatal at
/// startup.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read level catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("level catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("level catalog contains no levels")]
    Empty,
    #[error("level {level}, platform {index}: unknown platform type {code}")]
    UnknownPlatformType {
        level: usize,
        index: usize,
        code: i64,
    },
}

/// One platform as it appears on the wire: `[x, y, w, h, type]`
#[derive(Debug, Deserialize)]
struct RawPlatform(f32, f32, f32, f32, i64);

/// The fixed set of pre-authored levels
#[derive(Debug, Clone, PartialEq)]
pub struct LevelCatalog {
    levels: Vec<Level>,
}

impl LevelCatalog {
    /// Load and validate a catalog from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    /// Parse and validate a catalog from a JSON string
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: Vec<Vec<RawPlatform>> = serde_json::from_str(json)?;
        let mut levels = Vec::with_capacity(raw.len());
        for (level_idx, raw_level) in raw.into_iter().enumerate() {
            let mut platforms = Vec::with_capacity(raw_level.len());
            for (index, RawPlatform(x, y, w, h, code)) in raw_level.into_iter().enumerate() {
                let kind = PlatformKind::from_code(code).ok_or(
                    CatalogError::UnknownPlatformType {
                        level: level_idx,
                        index,
                        code,
                    },
                )?;
                platforms.push(Platform::new(x, y, w, h, kind));
            }
            levels.push(Level::new(platforms));
        }
        Self::from_levels(levels)
    }

    /// Build a catalog from already-constructed levels
    pub fn from_levels(levels: Vec<Level>) -> Result<Self, CatalogError> {
        if levels.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { levels })
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn level(&self, index: usize) -> &Level {
        &self.levels[index]
    }

    /// Pick a random level index
    pub fn pick<R: Rng>(&self, rng: &mut R) -> usize {
        rng.random_range(0..self.levels.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_parse_valid_catalog() {
        let json = r#"[
            [[400, 480, 160, 48, 0], [700, 400, 160, 48, 1]],
            [[620, 380, 64, 120, 2]],
            []
        ]"#;
        let catalog = LevelCatalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.level(0).platforms.len(), 2);
        assert_eq!(
            catalog.level(0).platforms[0].kind,
            PlatformKind::Normal {
                allow_bottom_hit: true
            }
        );
        assert_eq!(
            catalog.level(0).platforms[1].kind,
            PlatformKind::Normal {
                allow_bottom_hit: false
            }
        );
        assert_eq!(catalog.level(1).platforms[0].kind, PlatformKind::Bounce);
        // A level with no platforms is allowed
        assert!(catalog.level(2).platforms.is_empty());
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(matches!(
            LevelCatalog::from_json("[]"),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn test_unknown_platform_type_rejected() {
        let json = "[[[0, 0, 10, 10, 0], [5, 5, 10, 10, 9]]]";
        match LevelCatalog::from_json(json) {
            Err(CatalogError::UnknownPlatformType { level, index, code }) => {
                assert_eq!(level, 0);
                assert_eq!(index, 1);
                assert_eq!(code, 9);
            }
            other => panic!("expected UnknownPlatformType, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            LevelCatalog::from_json("[[[1, 2, 3]]]"),
            Err(CatalogError::Json(_))
        ));
        assert!(matches!(
            LevelCatalog::from_json("not json"),
            Err(CatalogError::Json(_))
        ));
    }

    #[test]
    fn test_pick_stays_in_bounds() {
        let catalog = LevelCatalog::from_json("[[], [], []]").unwrap();
        let mut rng = Pcg32::seed_from_u64(1);
        for _ in 0..100 {
            assert!(catalog.pick(&mut rng) < catalog.len());
        }
    }
}
