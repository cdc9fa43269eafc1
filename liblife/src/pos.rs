#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    /// Shifts this position by a signed delta, or `None` when the result
    /// would land before row or column zero.
    pub fn offset(self, delta_row: isize, delta_column: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(delta_row)?,
            column: self.column.checked_add_signed(delta_column)?,
        })
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, column): (usize, usize)) -> Self {
        Self { row, column }
    }
}

impl From<[usize; 2]> for Position {
    fn from(value: [usize; 2]) -> Self {
        Self {
            row: value[0],
            column: value[1],
        }
    }
}

impl From<Position> for [usize; 2] {
    fn from(value: Position) -> Self {
        [value.row, value.column]
    }
}
