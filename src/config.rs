use crate::coordinate::Coordinate;
use crate::error::TerrainError;
use crate::observer::FrontierObserver;
use crate::path::PathResult;
use crate::search;
use crate::solver::SearchKind;
use crate::terrain::{TerrainModel, DEFAULT_DESERT_WEIGHT, DEFAULT_FOREST_WEIGHT};

pub const DEFAULT_COLUMNS: i32 = 40;
pub const DEFAULT_ROWS: i32 = 30;

/// Everything a grid session needs to run a search: the grid size, the terrain weights, the
/// endpoints and the algorithm. Defaults to a 40x30 grid searched corner to corner.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchParameters {
    pub columns: i32,
    pub rows: i32,
    pub start: Coordinate,
    pub end: Coordinate,
    pub kind: SearchKind,
    pub forest_weight: f64,
    pub desert_weight: f64,
}

impl Default for SearchParameters {
    fn default() -> SearchParameters {
        SearchParameters {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            start: Coordinate::new(0, 0),
            end: Coordinate::new(DEFAULT_COLUMNS - 1, DEFAULT_ROWS - 1),
            kind: SearchKind::Unweighted,
            forest_weight: DEFAULT_FOREST_WEIGHT,
            desert_weight: DEFAULT_DESERT_WEIGHT,
        }
    }
}

impl SearchParameters {
    /// An empty terrain of the configured size and weights.
    pub fn terrain(&self) -> Result<TerrainModel, TerrainError> {
        let mut terrain = TerrainModel::new(self.columns, self.rows)?;
        self.apply_weights(&mut terrain)?;
        Ok(terrain)
    }

    /// Copies the configured weights onto an existing terrain. Nothing is changed if either
    /// weight is invalid.
    pub fn apply_weights(&self, terrain: &mut TerrainModel) -> Result<(), TerrainError> {
        let mut updated = terrain.clone();
        updated.set_forest_weight(self.forest_weight)?;
        updated.set_desert_weight(self.desert_weight)?;
        *terrain = updated;
        Ok(())
    }

    /// Runs the configured search on `terrain`.
    pub fn run<O>(&self, terrain: &TerrainModel, observer: &mut O) -> PathResult
    where
        O: FrontierObserver + ?Sized,
    {
        search(terrain, self.kind, self.start, self.end, observer)
    }
}
