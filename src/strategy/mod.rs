//! The [`StrategySolver`] that mimics human approaches to sudoku solving,
//! and the [`Strategy`] library it draws its deductions from.
//!
//! All strategies are pure candidate eliminators; entering digits is the job
//! of the singles pass the solver runs between strategy sweeps. Because
//! eliminations can only shrink candidate sets, the strategies are safe to
//! apply in any order.

pub(crate) mod board;
mod singles;
mod solver;
mod strategies;

pub use self::solver::StrategySolver;
pub use self::strategies::Strategy;
