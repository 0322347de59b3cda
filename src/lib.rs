//! Brute-force synthesis of feed-forward Boolean logic circuits.
//!
//! Given a layered topology (an input width, zero or more hidden widths, an
//! output width), a truth table, and a palette of allowed two-input gate
//! families, [`solve`] enumerates candidate circuits under symmetry-breaking
//! combinatorics and returns the first one that realizes the truth table,
//! honoring don't-care output bits. This is not a Boolean minimizer: it does
//! not optimize gate count, depth, or fan-in beyond the pruning described in
//! [`layer`].

pub mod activation;
pub mod circuit;
pub mod combinatorics;
pub mod error;
pub mod format;
pub mod gate;
pub mod layer;
pub mod truth_table;

pub use circuit::{solve, Circuit};
pub use error::SolveError;
pub use gate::{Gate, Mode};
pub use layer::Layer;
pub use truth_table::{Entry, TruthTable};
