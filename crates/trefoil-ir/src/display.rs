//! ASCII lane rendering of circuits.
//!
//! Renders one lane per qubit, one column per circuit layer, in the spirit
//! of the usual terminal circuit drawings:
//!
//! ```text
//! code[0]: ─X──●──●──░──────░──●──●──⊕──M─
//! code[1]: ────⊕──│──░──X───░──⊕──│──●────
//! code[2]: ───────⊕──░──────░─────⊕──●────
//! ```
//!
//! Conditioned gates carry their condition inline (`X if syn==1`), which
//! keeps the renderer purely qubit-lane based.

use rustc_hash::FxHashMap;
use std::fmt;

use crate::circuit::Circuit;
use crate::gate::{Gate, StandardGate};
use crate::instruction::InstructionKind;
use crate::qubit::{ClbitId, QubitId};

/// A rendered circuit diagram.
///
/// Produced by [`Circuit::diagram`]; displays as one text line per qubit.
pub struct TextDiagram {
    lines: Vec<String>,
}

impl TextDiagram {
    /// Render a circuit into a lane diagram.
    pub fn render(circuit: &Circuit) -> Self {
        Renderer::new(circuit).run()
    }

    /// The rendered lines, one per qubit lane.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl fmt::Display for TextDiagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

struct Renderer<'a> {
    circuit: &'a Circuit,
    /// Qubit id to lane row.
    rows: FxHashMap<QubitId, usize>,
    /// Next free column per lane row.
    levels: Vec<usize>,
    /// Next free column per classical wire.
    clbit_levels: FxHashMap<ClbitId, usize>,
    /// Cell contents keyed by (row, column).
    cells: FxHashMap<(usize, usize), String>,
    num_columns: usize,
}

impl<'a> Renderer<'a> {
    fn new(circuit: &'a Circuit) -> Self {
        let rows: FxHashMap<_, _> = circuit
            .qubits()
            .iter()
            .enumerate()
            .map(|(row, q)| (q.id, row))
            .collect();
        let levels = vec![0; circuit.num_qubits()];
        Self {
            circuit,
            rows,
            levels,
            clbit_levels: FxHashMap::default(),
            cells: FxHashMap::default(),
            num_columns: 0,
        }
    }

    fn run(mut self) -> TextDiagram {
        for (_, inst) in self.circuit.dag().topological_ops() {
            let op_rows: Vec<usize> = inst.qubits.iter().map(|q| self.rows[q]).collect();
            if op_rows.is_empty() {
                continue;
            }

            // Multi-qubit gates occupy the whole span so their vertical
            // connector never crosses an unrelated gate in the same column.
            let spans = match inst.kind {
                InstructionKind::Gate(_) => {
                    let lo = *op_rows.iter().min().unwrap_or(&0);
                    let hi = *op_rows.iter().max().unwrap_or(&0);
                    (lo..=hi).collect::<Vec<_>>()
                }
                _ => op_rows.clone(),
            };

            let column = self.claim_column(&spans, &inst.clbits);

            match &inst.kind {
                InstructionKind::Gate(gate) => {
                    self.place_gate(gate, &op_rows, &spans, column);
                }
                InstructionKind::Measure => {
                    for &row in &op_rows {
                        self.cells.insert((row, column), "M".into());
                    }
                }
                InstructionKind::Reset => {
                    for &row in &op_rows {
                        self.cells.insert((row, column), "|0⟩".into());
                    }
                }
                InstructionKind::Barrier => {
                    for &row in &op_rows {
                        self.cells.insert((row, column), "░".into());
                    }
                }
            }
        }
        self.emit()
    }

    /// Reserve the first column free on every spanned lane and wire.
    fn claim_column(&mut self, spans: &[usize], clbits: &[ClbitId]) -> usize {
        let mut column = 0;
        for &row in spans {
            column = column.max(self.levels[row]);
        }
        for clbit in clbits {
            column = column.max(self.clbit_levels.get(clbit).copied().unwrap_or(0));
        }
        for &row in spans {
            self.levels[row] = column + 1;
        }
        for &clbit in clbits {
            self.clbit_levels.insert(clbit, column + 1);
        }
        self.num_columns = self.num_columns.max(column + 1);
        column
    }

    fn place_gate(&mut self, gate: &Gate, op_rows: &[usize], spans: &[usize], column: usize) {
        let symbols = gate_symbols(gate.kind);
        for (&row, &symbol) in op_rows.iter().zip(symbols.iter()) {
            let mut text = symbol.to_string();
            if let Some(cond) = &gate.condition {
                // Annotate the target lane only.
                if row == *op_rows.last().unwrap_or(&row) {
                    text = format!("{symbol} if {cond}");
                }
            }
            self.cells.insert((row, column), text);
        }
        // Vertical connector through lanes the gate spans but does not touch.
        for &row in spans {
            if !op_rows.contains(&row) {
                self.cells.insert((row, column), "│".into());
            }
        }
    }

    fn emit(self) -> TextDiagram {
        let labels: Vec<String> = self
            .circuit
            .qubits()
            .iter()
            .map(|q| format!("{q}: "))
            .collect();
        let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

        let mut widths = vec![1usize; self.num_columns];
        for ((_, column), text) in &self.cells {
            widths[*column] = widths[*column].max(text.chars().count());
        }

        let lines = labels
            .into_iter()
            .enumerate()
            .map(|(row, label)| {
                let mut line = format!("{label:<label_width$}");
                for (column, &width) in widths.iter().enumerate() {
                    line.push('─');
                    match self.cells.get(&(row, column)) {
                        Some(text) => {
                            line.push_str(text);
                            for _ in text.chars().count()..width {
                                line.push('─');
                            }
                        }
                        None => {
                            for _ in 0..width {
                                line.push('─');
                            }
                        }
                    }
                }
                line.push('─');
                line
            })
            .collect();

        TextDiagram { lines }
    }
}

/// Per-operand lane symbols for a gate, operand order.
fn gate_symbols(gate: StandardGate) -> &'static [&'static str] {
    match gate {
        StandardGate::I => &["I"],
        StandardGate::X => &["X"],
        StandardGate::Y => &["Y"],
        StandardGate::Z => &["Z"],
        StandardGate::H => &["H"],
        StandardGate::S => &["S"],
        StandardGate::Sdg => &["Sdg"],
        StandardGate::CX => &["●", "⊕"],
        StandardGate::CY => &["●", "Y"],
        StandardGate::CZ => &["●", "●"],
        StandardGate::Swap => &["╳", "╳"],
        StandardGate::CCX => &["●", "●", "⊕"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bell_diagram() {
        let circuit = Circuit::bell().unwrap();
        let diagram = circuit.diagram();

        assert_eq!(diagram.lines().len(), 2);
        let top = &diagram.lines()[0];
        let bottom = &diagram.lines()[1];
        assert!(top.contains('H'));
        assert!(top.contains('●'));
        assert!(top.contains('M'));
        assert!(bottom.contains('⊕'));
        assert!(bottom.contains('M'));
    }

    #[test]
    fn test_lanes_share_column_widths() {
        let circuit = Circuit::bell().unwrap();
        let diagram = circuit.diagram();
        let lens: Vec<usize> = diagram
            .lines()
            .iter()
            .map(|l| l.chars().count())
            .collect();
        assert!(lens.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_connector_spans_middle_lane() {
        // CCX with controls on the outer lanes must draw a connector or a
        // symbol on every lane in the span.
        let mut circuit = Circuit::with_size("t", 3, 0);
        circuit
            .ccx(QubitId(2), QubitId(1), QubitId(0))
            .unwrap();
        let diagram = circuit.diagram();

        assert!(diagram.lines()[0].contains('⊕'));
        assert!(diagram.lines()[1].contains('●'));
        assert!(diagram.lines()[2].contains('●'));
    }

    #[test]
    fn test_conditioned_gate_annotation() {
        let mut circuit = Circuit::new("t");
        let q = circuit.add_qreg("code", 1);
        let syn = circuit.add_creg("syn", 2);
        circuit.measure(q[0], syn[0]).unwrap();
        circuit.x_if(q[0], "syn", 3).unwrap();

        let diagram = circuit.diagram();
        assert!(diagram.lines()[0].contains("X if syn==3"));
    }

    #[test]
    fn test_register_labels() {
        let mut circuit = Circuit::new("t");
        circuit.add_qreg("code", 2);
        circuit.add_qubit();

        let diagram = circuit.diagram();
        assert!(diagram.lines()[0].starts_with("code[0]:"));
        assert!(diagram.lines()[2].starts_with("q2:"));
    }
}
