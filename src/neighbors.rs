use crate::coordinate::Coordinate;
use crate::terrain::TerrainModel;
use smallvec::SmallVec;

/// Offsets in east, west, north, south order. North is the increasing row direction.
const NEUMANN_OFFSETS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// The von Neumann neighbourhood of `c` before any filtering. Cells with an even coordinate sum
/// list their neighbours in reverse (south, north, west, east) so that searches alternate
/// between horizontal and vertical steps, which straightens the paths that are found.
/// Neighbours past the edge of the `i32` range are left out.
pub fn neighborhood_points(c: Coordinate) -> SmallVec<[Coordinate; 4]> {
    let mut points = NEUMANN_OFFSETS
        .iter()
        .filter_map(|&(dc, dr)| c.offset(dc, dr))
        .collect::<SmallVec<[Coordinate; 4]>>();
    // Low bits agree exactly when the coordinate sum is even
    if (c.column() ^ c.row()) & 1 == 0 {
        points.reverse();
    }
    points
}

/// The in-bounds, passable neighbours of `c`, in the order searches expand them.
pub fn neighbors(terrain: &TerrainModel, c: Coordinate) -> SmallVec<[Coordinate; 4]> {
    neighborhood_points(c)
        .into_iter()
        .filter(|p| terrain.in_bounds(p))
        .filter(|p| terrain.is_passable(p))
        .collect()
}
