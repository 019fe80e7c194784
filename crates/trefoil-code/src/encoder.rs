//! Logical state encoding for the 3-qubit repetition code.

use trefoil_ir::{Circuit, QubitId};

use crate::error::CodeResult;

/// Number of data qubits in the repetition code block.
pub const BLOCK_SIZE: usize = 3;

/// Encode a logical basis state across a 3-qubit block.
///
/// Prepares `|000⟩` or `|111⟩`: an X on the first block qubit when
/// `value` is true, then two CNOTs fanning it out to the other two.
/// Applied to an already uniform triple, the fan-out CNOTs leave the
/// encoded value unchanged.
pub fn encode(circuit: &mut Circuit, block: &[QubitId; BLOCK_SIZE], value: bool) -> CodeResult<()> {
    if value {
        circuit.x(block[0])?;
    }
    circuit.cx(block[0], block[1])?;
    circuit.cx(block[0], block[2])?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block_circuit() -> (Circuit, [QubitId; BLOCK_SIZE]) {
        let mut circuit = Circuit::new("encode_test");
        let q = circuit.add_qreg("code", BLOCK_SIZE as u32);
        (circuit, [q[0], q[1], q[2]])
    }

    #[test]
    fn test_encode_zero_is_fanout_only() {
        let (mut circuit, block) = block_circuit();
        encode(&mut circuit, &block, false).unwrap();

        // No X, just the two CNOTs.
        assert_eq!(circuit.dag().num_ops(), 2);
        let names: Vec<_> = circuit
            .dag()
            .topological_ops()
            .map(|(_, inst)| inst.name().to_string())
            .collect();
        assert_eq!(names, vec!["cx", "cx"]);
    }

    #[test]
    fn test_encode_one_prepends_x() {
        let (mut circuit, block) = block_circuit();
        encode(&mut circuit, &block, true).unwrap();

        assert_eq!(circuit.dag().num_ops(), 3);
        let first = circuit.dag().topological_ops().next().unwrap().1.clone();
        assert_eq!(first.name(), "x");
        assert_eq!(first.qubits, vec![block[0]]);
    }

    #[test]
    fn test_encode_twice_builds_cleanly() {
        let (mut circuit, block) = block_circuit();
        encode(&mut circuit, &block, true).unwrap();
        encode(&mut circuit, &block, false).unwrap();

        assert_eq!(circuit.dag().num_ops(), 5);
        circuit.dag().verify_integrity().unwrap();
    }
}
