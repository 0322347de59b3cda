//! Error type returned by [`crate::solve`].

use std::fmt;

/// Failure modes for [`crate::solve`]. All variants are programmer errors in
/// the caller's topology request; a circuit simply not existing is `Ok(None)`,
/// never an `Err`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    /// `layer_sizes` had fewer than two entries (no room for both an input
    /// and an output layer).
    InvalidLayerSizes,
    /// `layer_sizes[index]` was zero.
    ZeroWidthLayer {
        index: usize,
    },
    /// The sum of all layer widths exceeds the 64 bits available in one
    /// activation row.
    WidthOverflow {
        total: usize,
    },
    /// The mixed-radix product of per-layer combination counts overflowed
    /// `u64` while the layer builders were assembled.
    CandidateCountOverflow,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::InvalidLayerSizes => {
                write!(f, "layer_sizes must name at least an input and an output layer")
            }
            SolveError::ZeroWidthLayer { index } => {
                write!(f, "layer_sizes[{index}] is zero; every layer needs at least one gate")
            }
            SolveError::WidthOverflow { total } => {
                write!(f, "summed layer widths ({total}) exceed the 64-bit activation row")
            }
            SolveError::CandidateCountOverflow => {
                write!(f, "the candidate count overflowed while assembling layer builders")
            }
        }
    }
}

impl std::error::Error for SolveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_are_non_empty() {
        let errors = [
            SolveError::InvalidLayerSizes,
            SolveError::ZeroWidthLayer { index: 2 },
            SolveError::WidthOverflow { total: 70 },
            SolveError::CandidateCountOverflow,
        ];
        for err in errors {
            assert!(!err.to_string().is_empty());
        }
    }
}
