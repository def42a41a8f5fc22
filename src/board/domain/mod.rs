//! Domain model for work boards.

mod board;
mod ids;

pub use board::{Board, PersistedBoardData};
pub use ids::BoardId;
