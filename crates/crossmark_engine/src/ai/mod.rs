//! Computer opponent.
//!
//! [`Difficulty`] selects a policy; [`AiPlanner`] carries it out against a
//! board snapshot. Search lives in [`minimax`] and never touches the
//! caller's board.

mod difficulty;
pub mod minimax;
mod planner;

pub use difficulty::Difficulty;
pub use planner::AiPlanner;
