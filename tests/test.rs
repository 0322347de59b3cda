use boolsynth::{solve, Entry, Mode, SolveError, TruthTable};

fn table(rows: &[(u64, u64, u64)]) -> TruthTable {
    TruthTable::new(rows.iter().map(|&(i, o, d)| Entry { input_bits: i, output_bits: o, dont_care_bits: d }).collect())
}

fn assert_matches_table(circuit: &boolsynth::Circuit, table: &TruthTable) {
    for entry in &table.entries {
        let actual = circuit.evaluate_outputs(entry.input_bits);
        let mismatch = (actual ^ entry.output_bits) & !entry.dont_care_bits;
        assert_eq!(mismatch, 0, "row {:?} produced {actual:#b}", entry);
    }
}

#[test]
fn identity_circuit_end_to_end() {
    let t = table(&[(0, 0, 0), (1, 1, 0)]);
    let circuit = solve(&[1, 1], &t, &[Mode::And], false).unwrap().expect("identity is satisfiable");
    assert_matches_table(&circuit, &t);
}

#[test]
fn not_via_nand_end_to_end() {
    let t = table(&[(0, 1, 0), (1, 0, 0)]);
    let circuit = solve(&[1, 1], &t, &[Mode::Nand], false).unwrap().expect("NOT via NAND is satisfiable");
    assert_matches_table(&circuit, &t);
}

#[test]
fn two_bit_xor_end_to_end() {
    let t = table(&[(0b00, 0, 0), (0b01, 1, 0), (0b10, 1, 0), (0b11, 0, 0)]);
    let circuit = solve(&[2, 1], &t, &[Mode::Xor], false).unwrap().expect("xor-2 is satisfiable");
    assert_matches_table(&circuit, &t);
}

#[test]
fn half_adder_end_to_end() {
    let t = table(&[(0b00, 0b00, 0), (0b01, 0b01, 0), (0b10, 0b01, 0), (0b11, 0b10, 0)]);
    let circuit = solve(&[2, 2], &t, &[Mode::And, Mode::Xor], false).unwrap().expect("half adder is satisfiable");
    assert_matches_table(&circuit, &t);
}

#[test]
fn dont_care_bit_is_honored() {
    let t = table(&[(0, 0, 1), (1, 0, 0)]);
    let circuit = solve(&[1, 1], &t, &[Mode::And], false).unwrap().expect("don't-care row is always satisfiable");
    assert_matches_table(&circuit, &t);
}

#[test]
fn unsatisfiable_topology_yields_no_circuit() {
    let t = table(&[(0, 1, 0), (1, 1, 0)]);
    assert!(solve(&[1, 1], &t, &[Mode::And], false).unwrap().is_none());
}

#[test]
fn rejects_layer_sizes_with_no_room_for_input_and_output() {
    let t = table(&[]);
    assert_eq!(solve(&[4], &t, &[Mode::And], false), Err(SolveError::InvalidLayerSizes));
}

#[test]
fn rejects_zero_width_hidden_layer() {
    let t = table(&[]);
    assert_eq!(solve(&[2, 0, 1], &t, &[Mode::And], false), Err(SolveError::ZeroWidthLayer { index: 1 }));
}

#[test]
fn deeper_stack_exercises_incremental_cache_update() {
    // [3,2,2,1]: two hidden layers, so the search driver must exercise both
    // the fast (last-layer-only) and slow (full-refresh) incremental update
    // paths described for the activation cache.
    let t = table(&[
        (0b000, 0, 0),
        (0b001, 1, 0),
        (0b010, 1, 0),
        (0b011, 0, 0),
        (0b100, 1, 0),
        (0b101, 0, 0),
        (0b110, 0, 0),
        (0b111, 1, 0),
    ]);
    let circuit = solve(&[3, 2, 2, 1], &t, &[Mode::And, Mode::Xor], false).unwrap().expect("3-input parity is satisfiable");
    assert_matches_table(&circuit, &t);
}
