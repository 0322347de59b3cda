//! The packed per-row activation cache shared by the search driver and the
//! output-layer constructor.
//!
//! Each row packs, from bit 0 upward: the truth table's input bits, then
//! every hidden gate's output at its assigned bit position, then (once
//! computed) the truth table's output bits at the output layer's offset.
//! A parallel don't-care mask records which output-offset bits are
//! unconstrained for that row.

use crate::layer::Layer;
use crate::truth_table::TruthTable;

/// The activation state for every row of a truth table against a fixed
/// (possibly partial) set of hidden layers.
#[derive(Debug, Clone)]
pub struct Activation {
    pub rows: Vec<u64>,
    pub dont_care: Vec<u64>,
}

/// Computes a gate's output from the activation row as it stands so far.
/// Gates only ever read bits at positions below their own layer's
/// `gate_offset`, so row state from earlier layers (already finalized) is
/// all that's needed.
fn gate_bit(row: u64, layer: &Layer, gate_index: usize) -> u64 {
    let value = layer.gates[gate_index].evaluate(row) as u64;
    value << (layer.gate_offset + gate_index as u32)
}

/// Recomputes the full activation cache from scratch: seeds each row with
/// its input bits, evaluates every hidden layer in order, then folds in the
/// truth table's output bits and don't-care mask at `output_offset`.
pub fn compute(hidden_layers: &[Layer], truth_table: &TruthTable, output_offset: u32) -> Activation {
    let mut rows = Vec::with_capacity(truth_table.entries.len());
    let mut dont_care = Vec::with_capacity(truth_table.entries.len());

    for entry in &truth_table.entries {
        let mut row = entry.input_bits;
        for layer in hidden_layers {
            for gate_index in 0..layer.width() {
                row |= gate_bit(row, layer, gate_index);
            }
        }
        row |= entry.output_bits << output_offset;
        rows.push(row);
        dont_care.push(entry.dont_care_bits << output_offset);
    }

    Activation { rows, dont_care }
}

/// Recomputes hidden-layer bits from `hidden_layers[from_layer..]` onward,
/// leaving earlier bits and the stored don't-care mask untouched. The
/// caller is responsible for knowing this leaves the cache exact only when
/// no layer before `from_layer` actually changed; see the search driver for
/// the documented (intentionally imprecise for deep stacks) refresh policy.
pub fn update(hidden_layers: &[Layer], cache: &mut Activation, from_layer: usize) {
    for layer in &hidden_layers[from_layer..] {
        let clear_mask = !(((1u64 << layer.width()) - 1) << layer.gate_offset);
        for row in &mut cache.rows {
            *row &= clear_mask;
            for gate_index in 0..layer.width() {
                *row |= gate_bit(*row, layer, gate_index);
            }
        }
    }
}
