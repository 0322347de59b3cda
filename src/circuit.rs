//! Circuit assembly: the mixed-radix search driver over hidden-layer
//! combinations and the positional output-layer constructor.

use crate::activation::{self, Activation};
use crate::error::SolveError;
use crate::gate::{Gate, Mode};
use crate::layer::{build_hidden_layer, Layer, LayerBuilder};
use crate::truth_table::TruthTable;

/// A complete layered circuit: exactly one input layer, zero or more hidden
/// layers, and exactly one output layer, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Circuit {
    pub layers: Vec<Layer>,
}

impl Circuit {
    pub fn input_layer(&self) -> &Layer {
        self.layers.first().expect("a circuit always has an input layer")
    }

    pub fn output_layer(&self) -> &Layer {
        self.layers.last().expect("a circuit always has an output layer")
    }

    pub fn hidden_layers(&self) -> &[Layer] {
        &self.layers[1..self.layers.len() - 1]
    }

    /// Evaluates the circuit end to end on one input row, returning the
    /// activation row with every gate's output folded in (output bits land
    /// at the output layer's `gate_offset`).
    pub fn evaluate(&self, input_bits: u64) -> u64 {
        let mut row = input_bits;
        for layer in &self.layers[1..] {
            for (gate_index, gate) in layer.gates.iter().enumerate() {
                let value = gate.evaluate(row) as u64;
                row |= value << (layer.gate_offset + gate_index as u32);
            }
        }
        row
    }

    /// Extracts just the output bits from a full evaluation.
    pub fn evaluate_outputs(&self, input_bits: u64) -> u64 {
        let output = self.output_layer();
        (self.evaluate(input_bits) >> output.gate_offset) & ((1u64 << output.width()) - 1)
    }
}

fn build_input_layer(width: usize) -> Layer {
    Layer { gates: vec![Gate { input_mask: 0, mode: Mode::In }; width], input_offset: 0, gate_offset: 0 }
}

/// Searches for a circuit matching `layer_sizes` (input width, zero or more
/// hidden widths, output width) that realizes `truth_table` under the
/// allowed `modes`. Returns the first circuit found in the driver's
/// deterministic traversal order, or `Ok(None)` if none exists.
pub fn solve(layer_sizes: &[usize], truth_table: &TruthTable, modes: &[Mode], balanced: bool) -> Result<Option<Circuit>, SolveError> {
    if layer_sizes.len() < 2 {
        return Err(SolveError::InvalidLayerSizes);
    }
    for (index, &width) in layer_sizes.iter().enumerate() {
        if width == 0 {
            return Err(SolveError::ZeroWidthLayer { index });
        }
    }
    let total: usize = layer_sizes.iter().sum();
    if total > 64 {
        return Err(SolveError::WidthOverflow { total });
    }

    let mut sorted_modes: Vec<Mode> = modes.to_vec();
    sorted_modes.sort_by_key(|m| m.code());
    sorted_modes.dedup();
    if sorted_modes.is_empty() {
        log::info!("solve called with an empty mode palette; no circuit can be built");
        return Ok(None);
    }

    // offsets[i] = cumulative width of layer_sizes[0..i]; this is also
    // layer i's gate_offset (layer 0, the input layer, has gate_offset 0).
    let mut offsets = Vec::with_capacity(layer_sizes.len() + 1);
    offsets.push(0u32);
    for &width in layer_sizes {
        offsets.push(offsets.last().unwrap() + width as u32);
    }

    let num_hidden = layer_sizes.len() - 2;
    let builders: Vec<LayerBuilder> = (0..num_hidden)
        .map(|j| {
            let gate_offset = offsets[j + 1];
            let input_offset = if balanced { offsets[j] } else { 0 };
            build_hidden_layer(layer_sizes[j + 1], input_offset, gate_offset, &sorted_modes, balanced)
        })
        .collect();

    for (j, builder) in builders.iter().enumerate() {
        log::debug!("hidden layer {j}: {} admissible layouts after pruning", builder.layers.len());
        if builder.layers.is_empty() {
            log::info!("hidden layer {j} has no admissible layouts; no circuit can be built");
            return Ok(None);
        }
    }

    let radices: Vec<u64> = builders.iter().map(|b| b.layers.len() as u64).collect();
    let total_candidates: u64 = radices.iter().try_fold(1u64, |acc, &r| acc.checked_mul(r)).ok_or(SolveError::CandidateCountOverflow)?;
    log::info!("searching {total_candidates} candidate hidden circuits");

    let output_gate_offset = offsets[layer_sizes.len() - 1];
    let output_input_offset = if balanced { offsets[layer_sizes.len() - 2] } else { 0 };
    let output_width = *layer_sizes.last().unwrap();

    let input_layer = build_input_layer(layer_sizes[0]);
    let last_radix = radices.last().copied().unwrap_or(1);
    let mut cache: Option<Activation> = None;

    for candidate in 0..total_candidates {
        let hidden_layers = decode_hidden_layers(candidate, &radices, &builders);

        if let Some(existing) = cache.as_mut() {
            let from_layer = if candidate % last_radix == 0 { 0 } else { num_hidden.saturating_sub(1) };
            activation::update(&hidden_layers, existing, from_layer);
        } else {
            cache = Some(activation::compute(&hidden_layers, truth_table, output_gate_offset));
        }

        let cache_ref = cache.as_ref().unwrap();
        if let Some(output_gates) = construct_output_layer(cache_ref, output_gate_offset, output_input_offset, output_width, &sorted_modes) {
            let mut layers = Vec::with_capacity(layer_sizes.len());
            layers.push(input_layer);
            layers.extend(hidden_layers);
            layers.push(Layer { gates: output_gates, input_offset: output_input_offset, gate_offset: output_gate_offset });
            log::info!("found a satisfying circuit after {} candidates", candidate + 1);
            return Ok(Some(Circuit { layers }));
        }
    }

    log::info!("exhausted all {total_candidates} candidates; no circuit found");
    Ok(None)
}

fn decode_hidden_layers(candidate: u64, radices: &[u64], builders: &[LayerBuilder]) -> Vec<Layer> {
    let mut indices = vec![0usize; radices.len()];
    let mut remainder = candidate;
    for j in (0..radices.len()).rev() {
        indices[j] = (remainder % radices[j]) as usize;
        remainder /= radices[j];
    }
    indices.iter().zip(builders).map(|(&idx, builder)| builder.layers[idx].clone()).collect()
}

/// Builds an output layer matching the truth table against the finalized
/// hidden activations in `cache`, or returns `None` if no assignment of
/// `(input_mask, mode)` per output gate can satisfy every row.
///
/// Each output gate is chosen independently and positionally: ascending
/// input masks are tried first, and for each mask all six compute modes are
/// evaluated simultaneously via an 8-bit option set, narrowed row by row.
fn construct_output_layer(cache: &Activation, gate_offset: u32, input_offset: u32, width: usize, sorted_modes: &[Mode]) -> Option<Vec<Gate>> {
    let allowed: u8 = sorted_modes.iter().fold(0u8, |acc, m| acc | (1 << m.code()));

    let mask_inc = 1u64 << input_offset;
    let mask_top = 1u64 << gate_offset;

    let mut gates = Vec::with_capacity(width);
    for g in 0..width {
        let p_g = gate_offset + g as u32;
        let mut chosen = None;
        let mut input_mask = mask_inc;

        while input_mask < mask_top {
            let mut mode_options = allowed;

            for (row, &dont_care) in cache.rows.iter().zip(&cache.dont_care) {
                if dont_care & (1 << p_g) != 0 {
                    continue;
                }

                let masked = row & input_mask;
                let and_bit = (masked == input_mask) as u8;
                let or_bit = (masked != 0) as u8;
                let xor_bit = (masked.count_ones() % 2 == 1) as u8;
                let mut mode_activations =
                    (and_bit << Mode::And.code()) | (or_bit << Mode::Or.code()) | (xor_bit << Mode::Xor.code());
                mode_activations |= (!mode_activations) << 4;

                let target = ((row >> p_g) & 1) as u8;
                mode_options &= if target == 1 { mode_activations } else { !mode_activations };

                if mode_options == 0 {
                    break;
                }
            }

            if mode_options != 0 {
                let code = mode_options.trailing_zeros() as u8;
                let mode = Mode::from_code(code).expect("mode_options only ever has valid mode-code bits set");
                chosen = Some((input_mask, mode));
                break;
            }

            input_mask += mask_inc;
        }

        match chosen {
            Some((mask, mode)) => gates.push(Gate { input_mask: mask, mode }),
            None => return None,
        }
    }

    Some(gates)
}
