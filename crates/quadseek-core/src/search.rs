//! Quadrant-descent centroid search.
//!
//! Starting from an initial region, each step scores the four quadrants and
//! keeps the half of each axis that belongs to the heaviest one. The loop
//! stops as soon as the region is narrower or shorter than
//! [`TERMINAL_SPAN`](crate::TERMINAL_SPAN) pixels and reports its midpoint.
//!
//! Every step roughly halves both sides, so the number of steps is bounded
//! by `ceil(log2(max(width, height)))`.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::error::CentroidError;
use crate::mask::Mask;
use crate::quadrant::{score_unchecked, Quadrant, QuadrantScores};
use crate::region::Region;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Estimated object position in mask pixel coordinates.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Centroid {
    pub x: usize,
    pub y: usize,
}

impl Centroid {
    fn midpoint_of(region: Region) -> Self {
        let (x, y) = region.midpoint();
        Self { x, y }
    }
}

/// One region update of the descent.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SearchStep {
    /// Region that was scored.
    pub region: Region,
    pub scores: QuadrantScores,
    pub winner: Quadrant,
}

/// Full outcome of one search run.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub centroid: Centroid,
    /// Region that satisfied the terminal test.
    pub terminal: Region,
    /// Region updates in the order they happened.
    pub steps: Vec<SearchStep>,
    /// Foreground count of the initial region.
    pub mass: u64,
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    /// `detect` reports nothing unless the initial region holds more than
    /// this many foreground pixels.
    pub min_mass: u64,
}

#[derive(Clone, Debug, Default)]
pub struct CentroidSearch {
    params: SearchParams,
}

impl CentroidSearch {
    pub fn new(params: SearchParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Search the whole mask.
    pub fn search<M: Mask + ?Sized>(&self, mask: &M) -> Result<SearchResult, CentroidError> {
        mask.validate()?;
        Ok(descend(mask, Region::full(mask.width(), mask.height())))
    }

    /// Search starting from a caller-supplied region.
    pub fn search_in<M: Mask + ?Sized>(
        &self,
        mask: &M,
        region: Region,
    ) -> Result<SearchResult, CentroidError> {
        mask.validate()?;
        region.validate_within(mask.width(), mask.height())?;
        Ok(descend(mask, region))
    }

    /// Like [`search`](Self::search), but `None` when the mask carries no
    /// more than `min_mass` foreground pixels.
    pub fn detect<M: Mask + ?Sized>(&self, mask: &M) -> Result<Option<Centroid>, CentroidError> {
        let result = self.search(mask)?;
        if result.mass <= self.params.min_mass {
            debug!(
                "no object: mass {} <= min_mass {}",
                result.mass, self.params.min_mass
            );
            return Ok(None);
        }
        Ok(Some(result.centroid))
    }
}

/// Approximate centroid of the foreground over the full mask extent.
///
/// Always yields a coordinate for a valid mask; an empty mask converges to
/// the top-left corner.
pub fn find_centroid<M: Mask + ?Sized>(mask: &M) -> Result<Centroid, CentroidError> {
    CentroidSearch::default()
        .search(mask)
        .map(|res| res.centroid)
}

pub fn find_centroid_in<M: Mask + ?Sized>(
    mask: &M,
    region: Region,
) -> Result<Centroid, CentroidError> {
    CentroidSearch::default()
        .search_in(mask, region)
        .map(|res| res.centroid)
}

#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(mask), fields(w = start.width(), h = start.height()))
)]
fn descend<M: Mask + ?Sized>(mask: &M, start: Region) -> SearchResult {
    let mut region = start;
    let mut steps = Vec::new();

    while !region.is_terminal() {
        let scores = score_unchecked(mask, region);
        let winner = scores.winner();
        trace!("scores {:?} in {:?}", scores.as_array(), region);
        steps.push(SearchStep {
            region,
            scores,
            winner,
        });
        region = region.quadrant(winner);
        debug!("step {}: {:?} -> {:?}", steps.len(), winner, region);
    }

    let mass = match steps.first() {
        Some(first) => first.scores.total(),
        None => score_unchecked(mask, start).total(),
    };

    SearchResult {
        centroid: Centroid::midpoint_of(region),
        terminal: region,
        steps,
        mass,
    }
}
