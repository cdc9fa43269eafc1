//! End-to-end checks of the public engine surface: seeding patterns,
//! advancing generations, swapping rules, and persisting grids to disk.

use std::{env, fs, path::PathBuf, process};

use liblife::snapshot::{load_rules, save_rules};
use liblife::{GameError, Grid, GridSnapshot, Rules};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn scratch_path(name: &str) -> PathBuf {
    env::temp_dir().join(format!("liblife_{}_{name}", process::id()))
}

fn live_positions(grid: &Grid) -> Vec<(usize, usize)> {
    grid.enumerate_cells()
        .filter(|&(_, alive)| alive)
        .map(|(pos, _)| (pos.row, pos.column))
        .collect()
}

#[test]
fn test_glider_travels_diagonally() {
    let mut grid = Grid::new(8, 8).unwrap();
    for pos in [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)] {
        grid.set_alive(pos, true).unwrap();
    }

    // A glider advances one cell down-right every four generations.
    for _ in 0..4 {
        grid.tick();
    }

    assert_eq!(grid.generation(), 4);
    assert_eq!(
        live_positions(&grid),
        vec![(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)]
    );
}

#[test]
fn test_snapshot_survives_the_filesystem() {
    let mut grid = Grid::with_rules(6, 9, Rules::highlife()).unwrap();
    grid.randomize(&mut StdRng::seed_from_u64(11));
    grid.tick();
    grid.tick();

    let path = scratch_path("snapshot.json");
    GridSnapshot::capture(&grid).save(&path).unwrap();

    let restored = GridSnapshot::load(&path).unwrap().restore().unwrap();
    let _ = fs::remove_file(&path);

    assert_eq!(restored, grid);
    assert_eq!(restored.generation(), 2);
    assert_eq!(*restored.rules(), Rules::highlife());
}

#[test]
fn test_rules_move_between_grids_through_a_file() {
    let rules: Rules = "B3678/S34678".parse().unwrap();

    let path = scratch_path("rules.json");
    save_rules(&rules, &path).unwrap();

    let mut grid = Grid::new(4, 4).unwrap();
    grid.set_rules(load_rules(&path).unwrap());
    let _ = fs::remove_file(&path);

    assert_eq!(*grid.rules(), Rules::day_and_night());
}

#[test]
fn test_loading_a_missing_snapshot_reports_io() {
    let path = scratch_path("does_not_exist.json");

    let err = GridSnapshot::load(&path).unwrap_err();
    assert!(matches!(err, GameError::Io(_)));
}

#[test]
fn test_a_saved_session_resumes_in_lockstep() {
    let mut grid = Grid::new(12, 12).unwrap();
    grid.randomize(&mut StdRng::seed_from_u64(9));
    for _ in 0..10 {
        grid.tick();
    }

    let path = scratch_path("session.json");
    GridSnapshot::capture(&grid).save(&path).unwrap();
    let mut resumed = GridSnapshot::load(&path).unwrap().restore().unwrap();
    let _ = fs::remove_file(&path);

    assert_eq!(resumed, grid);

    for _ in 0..5 {
        grid.tick();
        resumed.tick();
    }
    assert_eq!(resumed, grid);
    assert_eq!(resumed.generation(), 15);
}
