use grid_search::{search, Coordinate, FrontierEvent, ObserverSignal, SearchKind, TerrainModel};

// In this example a path is found on a 5x4 grid with shape
//  _____
// |S..F.|
// |.#FD.|
// |.#...|
// |...#E|
//  _____
// where
// - # marks a barrier
// - F marks forest and D desert, which are slower to cross
// - S marks the start
// - E marks the end
//
// Every algorithm is run and the frontier changes are counted as they are reported.

fn main() {
    let terrain = TerrainModel::from_ascii(
        "
        ...F.
        .#FD.
        .#...
        ...#.
        ",
    )
    .unwrap();
    println!("{}", terrain);
    let start = Coordinate::new(0, 0);
    let end = Coordinate::new(4, 3);
    for kind in SearchKind::ALL {
        let mut added = 0;
        let mut removed = 0;
        let mut observer = |event: FrontierEvent| {
            match event {
                FrontierEvent::Added(_) => added += 1,
                FrontierEvent::Removed(_) => removed += 1,
            }
            ObserverSignal::Continue
        };
        let path = search(&terrain, kind, start, end, &mut observer).unwrap();
        println!(
            "{}: {} (cost {}, {} added, {} removed)",
            kind,
            path,
            terrain.path_cost(&path),
            added,
            removed
        );
    }
}
