use std::fmt;

use rand::Rng;

use crate::error::{GameError, GameResult};
use crate::pos::Position;
use crate::rules::Rules;

/// Offsets of the Moore neighborhood: the eight cells around a position,
/// diagonals included, the position itself excluded.
const NEIGHBOR_OFFSETS: [[isize; 2]; 8] = [
    [-1, -1],
    [-1, 0],
    [-1, 1],
    [0, -1],
    [0, 1],
    [1, -1],
    [1, 0],
    [1, 1],
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    generation: u64,
    rules: Rules,
    cells: Vec<bool>,
}

impl Grid {
    /// A grid of dead cells at generation 0, using the classical rule.
    pub fn new(rows: usize, columns: usize) -> GameResult<Self> {
        Self::with_rules(rows, columns, Rules::default())
    }

    pub fn with_rules(rows: usize, columns: usize, rules: Rules) -> GameResult<Self> {
        if rows == 0 || columns == 0 {
            return Err(GameError::InvalidDimensions { rows, columns });
        }

        Ok(Self {
            rows,
            columns,
            generation: 0,
            rules,
            cells: vec![false; rows * columns],
        })
    }

    /// Rebuilds a grid from persisted parts. Dimensions are validated as in
    /// `with_rules`; the cell vector has to match them exactly.
    pub(crate) fn from_parts(
        rows: usize,
        columns: usize,
        generation: u64,
        rules: Rules,
        cells: Vec<bool>,
    ) -> GameResult<Self> {
        let mut grid = Self::with_rules(rows, columns, rules)?;

        if cells.len() != grid.cells.len() {
            return Err(GameError::MalformedSnapshot(format!(
                "a {rows}x{columns} grid holds {} cells, snapshot carries {}",
                grid.cells.len(),
                cells.len(),
            )));
        }

        grid.generation = generation;
        grid.cells = cells;
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Completed tick count since this grid was created. Only `tick` moves
    /// it, always forward.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Swaps the rule set; cells and generation stay put.
    pub fn set_rules(&mut self, rules: Rules) {
        self.rules = rules;
    }

    pub fn invert_rules(&mut self) {
        self.rules.invert();
    }

    /// Whether the cell at `pos` is alive. Positions outside the grid read
    /// as dead instead of failing, and the boundary does not wrap around.
    pub fn is_alive<P>(&self, pos: P) -> bool
    where
        P: Into<Position>,
    {
        self.pos_to_index(pos)
            .map(|index| self.cells[index])
            .unwrap_or(false)
    }

    pub fn set_alive<P>(&mut self, pos: P, alive: bool) -> GameResult<()>
    where
        P: Into<Position>,
    {
        let pos = pos.into();
        let index = self
            .pos_to_index(pos)
            .ok_or_else(|| self.out_of_bounds(pos))?;

        self.cells[index] = alive;
        Ok(())
    }

    pub fn toggle<P>(&mut self, pos: P) -> GameResult<()>
    where
        P: Into<Position>,
    {
        let pos = pos.into();
        let index = self
            .pos_to_index(pos)
            .ok_or_else(|| self.out_of_bounds(pos))?;

        self.cells[index] = !self.cells[index];
        Ok(())
    }

    /// Live cells among the eight Moore neighbors of `pos`. Neighbors
    /// beyond the boundary count as dead.
    pub fn live_neighbor_count<P>(&self, pos: P) -> usize
    where
        P: Into<Position>,
    {
        let pos = pos.into();

        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&[delta_row, delta_column]| pos.offset(delta_row, delta_column))
            .filter(|&neighbor| self.is_alive(neighbor))
            .count()
    }

    /// Advances the simulation by one generation.
    ///
    /// Every next state is derived from the pre-tick cells: a live cell
    /// consults the survival table and a dead cell the birth table, both at
    /// the cell's live-neighbor count. The replacement happens wholesale,
    /// so no cell ever sees a half-updated neighborhood.
    pub fn tick(&mut self) {
        self.generation += 1;

        let next_cells = self
            .enumerate_cells()
            .map(|(pos, alive)| self.next_state(pos, alive))
            .collect();

        self.cells = next_cells;
    }

    fn next_state(&self, pos: Position, alive: bool) -> bool {
        let live_neighbors = self.live_neighbor_count(pos);

        if alive {
            self.rules.survives_at(live_neighbors)
        } else {
            self.rules.born_at(live_neighbors)
        }
    }

    pub fn live_cell_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Kills every cell. The generation counter keeps its value.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Sets every cell independently, alive or dead with probability 1/2.
    pub fn randomize<R>(&mut self, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        for cell in &mut self.cells {
            *cell = rng.random_bool(0.5);
        }
    }

    pub fn invert(&mut self) {
        for cell in &mut self.cells {
            *cell = !*cell;
        }
    }

    pub fn enumerate_cells(&self) -> impl Iterator<Item = (Position, bool)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, &alive)| (self.index_to_pos(index), alive))
    }

    fn pos_to_index<P>(&self, pos: P) -> Option<usize>
    where
        P: Into<Position>,
    {
        let Position { row, column } = pos.into();

        if row >= self.rows {
            return None;
        }

        if column >= self.columns {
            return None;
        }

        Some(row * self.columns + column)
    }

    fn index_to_pos(&self, index: usize) -> Position {
        Position {
            row: index / self.columns,
            column: index % self.columns,
        }
    }

    fn out_of_bounds(&self, pos: Position) -> GameError {
        GameError::OutOfBounds {
            row: pos.row,
            column: pos.column,
            rows: self.rows,
            columns: self.columns,
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                writeln!(f)?;
            }

            for column in 0..self.columns {
                let glyph = if self.is_alive((row, column)) { '#' } else { '.' };
                write!(f, "{glyph}")?;
            }
        }

        Ok(())
    }
}
