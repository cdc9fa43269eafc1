use std::env;

use liblife::GridSnapshot;

fn main() {
    let path = env::args().skip(1).collect::<Vec<_>>().join(" ");
    let snapshot = GridSnapshot::load(&path).expect("Couldn't load grid snapshot");
    let grid = snapshot.restore().expect("Couldn't restore grid snapshot");

    println!(
        "{}x{} cells, generation {}, rule {}, {} alive",
        grid.rows(),
        grid.columns(),
        grid.generation(),
        grid.rules(),
        grid.live_cell_count(),
    );
    println!("{grid}");
}
