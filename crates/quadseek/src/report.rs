use quadseek_core::{Centroid, Region, SearchParams, SearchResult, SearchStep};
use serde::{Deserialize, Serialize};

/// Serializable summary of one detection run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionReport {
    #[serde(default)]
    pub image_path: Option<String>,
    pub width: usize,
    pub height: usize,
    pub centroid: Centroid,
    /// False when the mask held no more than `min_mass` foreground pixels.
    /// `centroid` is still the converged search position in that case.
    pub detected: bool,
    pub mass: u64,
    pub terminal: Region,
    pub steps: Vec<SearchStep>,
}

impl DetectionReport {
    pub fn from_search(
        width: usize,
        height: usize,
        result: SearchResult,
        params: &SearchParams,
    ) -> Self {
        Self {
            image_path: None,
            width,
            height,
            centroid: result.centroid,
            detected: result.mass > params.min_mass,
            mass: result.mass,
            terminal: result.terminal,
            steps: result.steps,
        }
    }

    pub fn with_image_path(mut self, path: impl Into<String>) -> Self {
        self.image_path = Some(path.into());
        self
    }

    /// `x,y`, the plain output format of the command-line tool.
    pub fn xy(&self) -> String {
        format!("{},{}", self.centroid.x, self.centroid.y)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
