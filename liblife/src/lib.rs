pub use error::{GameError, GameResult};
pub use grid::Grid;
pub use pos::Position;
pub use rules::{RULE_TABLE_LEN, Rules};
pub use snapshot::GridSnapshot;

pub mod error;
pub mod grid;
pub mod pos;
pub mod rules;
pub mod snapshot;
