//! Direct majority-vote correction (no ancillas).

use trefoil_ir::{Circuit, QubitId};

use crate::encoder::{BLOCK_SIZE, encode};
use crate::error::CodeResult;
use crate::injector::inject_bit_flip;

/// Apply the direct correction sequence to a code block.
///
/// Two CNOTs copy the parity of the first qubit onto the other two, then
/// a Toffoli flips the first qubit back when both others disagree with
/// it. After this, the first block qubit carries the majority vote of
/// the triple, which undoes any single bit-flip.
pub fn apply_direct_correction(
    circuit: &mut Circuit,
    block: &[QubitId; BLOCK_SIZE],
) -> CodeResult<()> {
    circuit.cx(block[0], block[1])?;
    circuit.cx(block[0], block[2])?;
    circuit.ccx(block[1], block[2], block[0])?;
    Ok(())
}

/// Build the complete direct-correction demonstration circuit.
///
/// Encodes the logical `value` across a `code` register, optionally
/// injects a bit-flip at `error` position, corrects by majority vote,
/// and measures the first code qubit into a single `out` bit. Barriers
/// separate the encode / fault / correct stages.
pub fn direct_correction_circuit(value: bool, error: Option<usize>) -> CodeResult<Circuit> {
    let mut circuit = Circuit::new("bitflip_direct");
    let q = circuit.add_qreg("code", BLOCK_SIZE as u32);
    let out = circuit.add_creg("out", 1);
    let block = [q[0], q[1], q[2]];

    encode(&mut circuit, &block, value)?;
    circuit.barrier_all()?;

    if let Some(position) = error {
        inject_bit_flip(&mut circuit, &block, position)?;
        circuit.barrier_all()?;
    }

    apply_direct_correction(&mut circuit, &block)?;
    circuit.measure(block[0], out[0])?;

    Ok(circuit)
}
