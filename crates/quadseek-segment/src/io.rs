//! JSON configuration for segmentation + search.

use quadseek_core::SearchParams;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::SegmentParams;

#[derive(thiserror::Error, Debug)]
pub enum SegmentIoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Everything needed to go from a color frame to a centroid.
///
/// Missing sections fall back to their defaults, so `{}` is a valid file.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectConfig {
    pub segment: SegmentParams,
    pub search: SearchParams,
}

impl DetectConfig {
    /// Load a JSON config from disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, SegmentIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this config to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), SegmentIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
