//! Truth table ingestion: the desired input/output mapping `solve` searches
//! for, plus CSV loading.

use std::fs;
use std::path::Path;

/// One row of a truth table: the input bits presented to the circuit, the
/// output bits it must produce, and which of those output bits are
/// unconstrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub input_bits: u64,
    pub output_bits: u64,
    pub dont_care_bits: u64,
}

/// A full truth table: the rows a synthesized circuit must satisfy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TruthTable {
    pub entries: Vec<Entry>,
}

impl TruthTable {
    pub fn new(entries: Vec<Entry>) -> Self {
        TruthTable { entries }
    }

    /// Loads a CSV file: the first line is a header and is discarded: each
    /// remaining non-empty line holds 1 to 3 comma-separated unsigned
    /// decimal fields (`input_bits[,output_bits[,dont_care_bits]]`), missing
    /// trailing fields defaulting to zero.
    ///
    /// An unopenable file yields an empty table rather than an error or
    /// panic, matching the collaborator contract this module fulfils; the
    /// condition is logged at `warn` so the silence is at least observable.
    pub fn read_csv(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) => {
                log::warn!("could not open truth table csv {}: {err}", path.display());
                return TruthTable::default();
            }
        };

        let mut lines = contents.lines();
        lines.next(); // header

        let entries = lines
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| parse_row(line))
            .collect();

        TruthTable { entries }
    }
}

fn parse_row(line: &str) -> Option<Entry> {
    let mut fields = line.split(',').map(|f| f.trim());
    let input_bits = fields.next()?.parse().ok()?;
    let output_bits = fields.next().map(|f| f.parse().ok()).unwrap_or(Some(0))?;
    let dont_care_bits = fields.next().map(|f| f.parse().ok()).unwrap_or(Some(0))?;
    Some(Entry { input_bits, output_bits, dont_care_bits })
}
