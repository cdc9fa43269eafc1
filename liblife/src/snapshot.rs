use std::fs;
use std::path::Path;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};
use crate::grid::Grid;
use crate::rules::Rules;

/// A complete description of a grid, sufficient to rebuild it without any
/// other input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridSnapshot {
    pub rows: usize,
    pub columns: usize,
    pub generation: u64,
    pub rules: Rules,

    /// Cell states in `[row][column]` order.
    pub status: Vec<Vec<bool>>,
}

impl GridSnapshot {
    pub fn capture(grid: &Grid) -> Self {
        let status = (0..grid.rows())
            .map(|row| {
                (0..grid.columns())
                    .map(|column| grid.is_alive((row, column)))
                    .collect()
            })
            .collect_vec();

        Self {
            rows: grid.rows(),
            columns: grid.columns(),
            generation: grid.generation(),
            rules: *grid.rules(),
            status,
        }
    }

    /// Turns the snapshot back into a live grid, validating that the status
    /// matrix agrees with the declared dimensions.
    pub fn restore(self) -> GameResult<Grid> {
        if self.status.len() != self.rows {
            return Err(GameError::MalformedSnapshot(format!(
                "declared {} rows, status carries {}",
                self.rows,
                self.status.len(),
            )));
        }

        if let Some((row, cells)) = self
            .status
            .iter()
            .find_position(|row_cells| row_cells.len() != self.columns)
        {
            return Err(GameError::MalformedSnapshot(format!(
                "declared {} columns, status row {} carries {}",
                self.columns,
                row,
                cells.len(),
            )));
        }

        let cells = self.status.into_iter().flatten().collect();
        Grid::from_parts(self.rows, self.columns, self.generation, self.rules, cells)
    }

    pub fn to_json(&self) -> GameResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> GameResult<Self> {
        serde_json::from_str(json).map_err(|error| GameError::MalformedSnapshot(error.to_string()))
    }

    pub fn save<P>(&self, path: P) -> GameResult<()>
    where
        P: AsRef<Path>,
    {
        let serialized = self.to_json()?;

        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        fs::write(path, serialized)?;

        Ok(())
    }

    pub fn load<P>(path: P) -> GameResult<Self>
    where
        P: AsRef<Path>,
    {
        let serialized = fs::read_to_string(path)?;
        Self::from_json(&serialized)
    }
}

/// Rule tables travel on their own too, so a preset can move between grids.
pub fn rules_to_json(rules: &Rules) -> GameResult<String> {
    Ok(serde_json::to_string_pretty(rules)?)
}

pub fn rules_from_json(json: &str) -> GameResult<Rules> {
    serde_json::from_str(json).map_err(|error| GameError::MalformedSnapshot(error.to_string()))
}

pub fn save_rules<P>(rules: &Rules, path: P) -> GameResult<()>
where
    P: AsRef<Path>,
{
    let serialized = rules_to_json(rules)?;

    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    fs::write(path, serialized)?;

    Ok(())
}

pub fn load_rules<P>(path: P) -> GameResult<Rules>
where
    P: AsRef<Path>,
{
    let serialized = fs::read_to_string(path)?;
    rules_from_json(&serialized)
}
