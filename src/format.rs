//! Human-readable circuit rendering.

use std::fmt;

use crate::circuit::Circuit;
use crate::gate::Gate;
use crate::layer::Layer;

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>5}_{}", self.input_mask, self.mode.short_name())
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ ")?;
        for (i, gate) in self.gates.iter().enumerate() {
            if i > 0 {
                write!(f, "\t")?;
            }
            write!(f, "{gate}")?;
        }
        write!(f, " ]")
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, layer) in self.layers.iter().enumerate() {
            writeln!(f, "layer {i}: {layer}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::Mode;

    #[test]
    fn gate_format_matches_fixed_width_layout() {
        let gate = Gate { input_mask: 3, mode: Mode::Xor };
        assert_eq!(gate.to_string(), "    3_XOR ");
    }

    #[test]
    fn layer_wraps_gates_with_tabs() {
        let layer = Layer {
            gates: vec![Gate { input_mask: 1, mode: Mode::And }, Gate { input_mask: 2, mode: Mode::Or }],
            input_offset: 0,
            gate_offset: 2,
        };
        assert_eq!(layer.to_string(), "[     1_AND \t    2_OR   ]");
    }

    #[test]
    fn circuit_labels_each_layer_in_order() {
        let circuit = Circuit {
            layers: vec![
                Layer { gates: vec![Gate { input_mask: 0, mode: Mode::In }], input_offset: 0, gate_offset: 0 },
                Layer { gates: vec![Gate { input_mask: 1, mode: Mode::Nand }], input_offset: 0, gate_offset: 1 },
            ],
        };
        let rendered = circuit.to_string();
        assert!(rendered.starts_with("layer 0:"));
        assert!(rendered.contains("layer 1:"));
    }
}
