//! Deliberate single bit-flip injection.

use trefoil_ir::{Circuit, QubitId};

use crate::encoder::BLOCK_SIZE;
use crate::error::{CodeError, CodeResult};

/// Inject a single bit-flip fault into the code block.
///
/// Applies one X gate to the block qubit at `position`. Returns
/// [`CodeError::PositionOutOfRange`] when `position` does not address a
/// block qubit; the circuit is left untouched in that case.
pub fn inject_bit_flip(
    circuit: &mut Circuit,
    block: &[QubitId; BLOCK_SIZE],
    position: usize,
) -> CodeResult<()> {
    let qubit = *block
        .get(position)
        .ok_or(CodeError::PositionOutOfRange {
            position,
            block_size: BLOCK_SIZE,
        })?;
    circuit.x(qubit)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block_circuit() -> (Circuit, [QubitId; BLOCK_SIZE]) {
        let mut circuit = Circuit::new("inject_test");
        let q = circuit.add_qreg("code", BLOCK_SIZE as u32);
        (circuit, [q[0], q[1], q[2]])
    }

    #[test]
    fn test_inject_targets_requested_qubit() {
        for position in 0..BLOCK_SIZE {
            let (mut circuit, block) = block_circuit();
            inject_bit_flip(&mut circuit, &block, position).unwrap();

            let (_, inst) = circuit.dag().topological_ops().next().unwrap();
            assert_eq!(inst.name(), "x");
            assert_eq!(inst.qubits, vec![block[position]]);
        }
    }

    #[test]
    fn test_inject_out_of_range() {
        let (mut circuit, block) = block_circuit();
        let result = inject_bit_flip(&mut circuit, &block, 3);

        assert!(matches!(
            result,
            Err(CodeError::PositionOutOfRange {
                position: 3,
                block_size: 3
            })
        ));
        // Failed injection leaves the circuit empty.
        assert_eq!(circuit.dag().num_ops(), 0);
    }
}
