use crate::coordinate::Coordinate;
use crate::error::{EndpointIssue, SearchError, TerrainError};
use crate::neighbors::neighbors;
use crate::path::Path;
use core::fmt;
use fxhash::FxHashSet;
use log::warn;
use petgraph::unionfind::UnionFind;

/// Cost of entering an unmarked, passable cell.
pub const DEFAULT_WEIGHT: f64 = 1.0;
pub const DEFAULT_FOREST_WEIGHT: f64 = 2.0;
pub const DEFAULT_DESERT_WEIGHT: f64 = 3.0;
/// Largest number of cells a terrain may hold.
pub const MAX_CELLS: usize = 1 << 26;

/// What a cell looks like to an editor or renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tile {
    Open,
    Barrier,
    /// First kind of slow terrain.
    Forest,
    /// Second kind of slow terrain, overrides [Tile::Forest] when a cell is marked as both.
    Desert,
}

impl Tile {
    pub fn symbol(&self) -> char {
        match self {
            Tile::Open => '.',
            Tile::Barrier => '#',
            Tile::Forest => 'F',
            Tile::Desert => 'D',
        }
    }
    pub fn from_symbol(symbol: char) -> Option<Tile> {
        match symbol {
            '.' => Some(Tile::Open),
            '#' => Some(Tile::Barrier),
            'F' => Some(Tile::Forest),
            'D' => Some(Tile::Desert),
            _ => None,
        }
    }
}

/// [TerrainModel] holds the grid bounds and the three sets of marked cells: barriers, which can
/// not be entered, and the two kinds of slow terrain. The sets are not kept disjoint; a cell in
/// both slow terrain sets costs the desert weight.
///
/// Like the grid it is built on, it also tracks connected components of passable cells using a
/// [UnionFind] structure. Placing a barrier may split a component, which flags the components as
/// dirty until [update](Self::update) or [generate_components](Self::generate_components) runs.
#[derive(Clone, Debug)]
pub struct TerrainModel {
    columns: i32,
    rows: i32,
    barriers: FxHashSet<Coordinate>,
    forest: FxHashSet<Coordinate>,
    desert: FxHashSet<Coordinate>,
    forest_weight: f64,
    desert_weight: f64,
    components: UnionFind<usize>,
    components_dirty: bool,
}

impl TerrainModel {
    pub fn new(columns: i32, rows: i32) -> Result<TerrainModel, TerrainError> {
        if columns <= 0 || rows <= 0 {
            return Err(TerrainError::InvalidDimensions { columns, rows });
        }
        match (columns as usize).checked_mul(rows as usize) {
            Some(cells) if cells <= MAX_CELLS => {}
            _ => return Err(TerrainError::TooLarge { columns, rows }),
        }
        let mut terrain = TerrainModel {
            columns,
            rows,
            barriers: FxHashSet::default(),
            forest: FxHashSet::default(),
            desert: FxHashSet::default(),
            forest_weight: DEFAULT_FOREST_WEIGHT,
            desert_weight: DEFAULT_DESERT_WEIGHT,
            components: UnionFind::new(0),
            components_dirty: false,
        };
        terrain.generate_components();
        Ok(terrain)
    }

    /// Builds a terrain from rows of tile symbols, the first line being row 0. Symbols are
    /// `.` (open), `#` (barrier), `F` (forest) and `D` (desert); blank lines are skipped.
    pub fn from_ascii(layout: &str) -> Result<TerrainModel, TerrainError> {
        let lines: Vec<&str> = layout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let width = lines.first().map_or(0, |line| line.chars().count());
        if width == 0 {
            return Err(TerrainError::EmptyLayout);
        }
        let mut terrain = TerrainModel::new(width as i32, lines.len() as i32)?;
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(TerrainError::RaggedLayout {
                    line: row,
                    expected: width,
                    found,
                });
            }
            for (column, symbol) in line.chars().enumerate() {
                let tile = Tile::from_symbol(symbol).ok_or(TerrainError::UnknownTile {
                    line: row,
                    column,
                    tile: symbol,
                })?;
                terrain.mark(Coordinate::new(column as i32, row as i32), tile);
            }
        }
        terrain.update();
        Ok(terrain)
    }

    pub fn columns(&self) -> i32 {
        self.columns
    }
    pub fn rows(&self) -> i32 {
        self.rows
    }
    pub fn forest_weight(&self) -> f64 {
        self.forest_weight
    }
    pub fn desert_weight(&self) -> f64 {
        self.desert_weight
    }

    pub fn in_bounds(&self, c: &Coordinate) -> bool {
        (0..self.columns).contains(&c.column()) && (0..self.rows).contains(&c.row())
    }
    /// Only consults the barrier set, bounds are checked separately.
    pub fn is_passable(&self, c: &Coordinate) -> bool {
        !self.barriers.contains(c)
    }
    pub fn can_move_to(&self, c: &Coordinate) -> bool {
        self.in_bounds(c) && self.is_passable(c)
    }

    /// Weight of entering `c`. Only the destination cell contributes to the cost of a step.
    pub fn cost(&self, c: &Coordinate) -> f64 {
        let mut weight = DEFAULT_WEIGHT;
        if self.forest.contains(c) {
            weight = self.forest_weight;
        }
        if self.desert.contains(c) {
            weight = self.desert_weight;
        }
        weight
    }

    /// The sum of step costs along the path, endpoints included.
    pub fn path_cost(&self, path: &Path) -> f64 {
        path.cells().skip(1).map(|c| self.cost(&c)).sum()
    }

    pub fn terrain_at(&self, c: &Coordinate) -> Tile {
        if self.barriers.contains(c) {
            Tile::Barrier
        } else if self.desert.contains(c) {
            Tile::Desert
        } else if self.forest.contains(c) {
            Tile::Forest
        } else {
            Tile::Open
        }
    }

    /// Checks that a search could start or end at `c`.
    pub fn validate_endpoint(&self, c: &Coordinate) -> Result<(), SearchError> {
        let reason = if !self.in_bounds(c) {
            EndpointIssue::OutOfBounds
        } else if !self.is_passable(c) {
            EndpointIssue::Barrier
        } else {
            return Ok(());
        };
        Err(SearchError::InvalidEndpoint {
            endpoint: *c,
            reason,
        })
    }

    pub fn set_forest_weight(&mut self, weight: f64) -> Result<(), TerrainError> {
        self.forest_weight = checked_weight(Tile::Forest, weight)?;
        Ok(())
    }
    pub fn set_desert_weight(&mut self, weight: f64) -> Result<(), TerrainError> {
        self.desert_weight = checked_weight(Tile::Desert, weight)?;
        Ok(())
    }

    /// Returns whether `c` was newly marked.
    pub fn mark_barrier(&mut self, c: Coordinate) -> bool {
        let inserted = self.barriers.insert(c);
        if inserted && self.in_bounds(&c) {
            // May split a component
            self.components_dirty = true;
        }
        inserted
    }
    pub fn mark_forest(&mut self, c: Coordinate) -> bool {
        self.forest.insert(c)
    }
    pub fn mark_desert(&mut self, c: Coordinate) -> bool {
        self.desert.insert(c)
    }
    /// Marks `c` as `tile`. Marking as [Tile::Open] is the same as [unmark](Self::unmark).
    pub fn mark(&mut self, c: Coordinate, tile: Tile) {
        match tile {
            Tile::Open => self.unmark(c),
            Tile::Barrier => {
                self.mark_barrier(c);
            }
            Tile::Forest => {
                self.mark_forest(c);
            }
            Tile::Desert => {
                self.mark_desert(c);
            }
        }
    }

    /// Removes `c` from every terrain set. Joins the components around a removed barrier.
    pub fn unmark(&mut self, c: Coordinate) {
        self.forest.remove(&c);
        self.desert.remove(&c);
        if self.barriers.remove(&c) && self.in_bounds(&c) {
            let ix = self.get_ix(&c);
            for n in neighbors(self, c) {
                let n_ix = self.get_ix(&n);
                self.components.union(ix, n_ix);
            }
        }
    }

    pub fn clear_all(&mut self) {
        self.barriers.clear();
        self.forest.clear();
        self.desert.clear();
        self.generate_components();
    }

    fn get_ix(&self, c: &Coordinate) -> usize {
        c.row() as usize * self.columns as usize + c.column() as usize
    }

    /// Retrieves the component id a given in-bounds [Coordinate] belongs to.
    pub fn get_component(&self, c: &Coordinate) -> usize {
        self.components.find(self.get_ix(c))
    }

    /// Checks if start and goal are passable and on the same component. Only exact after
    /// [update](Self::update) has run since the last barrier was placed.
    pub fn reachable(&self, start: &Coordinate, goal: &Coordinate) -> bool {
        if self.components_dirty {
            warn!("Reachability queried on dirty components");
        }
        self.can_move_to(start)
            && self.can_move_to(goal)
            && self
                .components
                .equiv(self.get_ix(start), self.get_ix(goal))
    }
    pub fn unreachable(&self, start: &Coordinate, goal: &Coordinate) -> bool {
        !self.reachable(start, goal)
    }

    pub fn components_dirty(&self) -> bool {
        self.components_dirty
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up passable grid neighbours.
    pub fn generate_components(&mut self) {
        self.components = UnionFind::new(self.columns as usize * self.rows as usize);
        self.components_dirty = false;
        for column in 0..self.columns {
            for row in 0..self.rows {
                let c = Coordinate::new(column, row);
                if !self.is_passable(&c) {
                    continue;
                }
                let ix = self.get_ix(&c);
                for n in [c.offset(1, 0), c.offset(0, 1)].into_iter().flatten() {
                    if self.can_move_to(&n) {
                        let n_ix = self.get_ix(&n);
                        self.components.union(ix, n_ix);
                    }
                }
            }
        }
    }
}

fn checked_weight(terrain: Tile, weight: f64) -> Result<f64, TerrainError> {
    if !weight.is_finite() || weight <= 0.0 {
        return Err(TerrainError::InvalidWeight { terrain, weight });
    }
    if weight < DEFAULT_WEIGHT {
        warn!(
            "{:?} weight {} is below {}, heuristic search may return suboptimal paths",
            terrain, weight, DEFAULT_WEIGHT
        );
    }
    Ok(weight)
}

/// Writes the layout accepted by [TerrainModel::from_ascii].
impl fmt::Display for TerrainModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.rows {
            let line = (0..self.columns)
                .map(|column| self.terrain_at(&Coordinate::new(column, row)).symbol())
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
