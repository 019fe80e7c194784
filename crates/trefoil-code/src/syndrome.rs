//! Ancilla-based syndrome extraction and classically-conditioned correction.
//!
//! Two ancillas pick up the pairwise parities of the code block:
//! `a0 = q0 ⊕ q1` and `a1 = q1 ⊕ q2`. Measuring them yields a two-bit
//! syndrome that locates any single bit-flip without touching the data.

use std::fmt;

use trefoil_ir::{Circuit, ClbitId, QubitId};

use crate::encoder::{BLOCK_SIZE, encode};
use crate::error::CodeResult;
use crate::injector::inject_bit_flip;

/// Number of ancilla qubits used for syndrome extraction.
pub const NUM_ANCILLAS: usize = 2;

/// Bit-string positions of the syndrome register in the full
/// ancilla-based circuit, for marginalizing counts per register.
pub const SYNDROME_BITS: [usize; NUM_ANCILLAS] = [0, 1];

/// Bit-string positions of the output register in the full
/// ancilla-based circuit.
pub const OUTPUT_BITS: [usize; BLOCK_SIZE] = [2, 3, 4];

/// A decoded error syndrome.
///
/// The decision table, with the syndrome register read as a
/// little-endian integer:
///
/// | value | bits (s0 s1) | meaning      |
/// |-------|--------------|--------------|
/// | 0     | 00           | no error     |
/// | 1     | 10           | flip qubit 0 |
/// | 3     | 11           | flip qubit 1 |
/// | 2     | 01           | flip qubit 2 |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Syndrome {
    /// Both parities agree: no single-qubit error.
    Clean,
    /// Only `q0 ⊕ q1` tripped: qubit 0 flipped.
    Qubit0,
    /// Both parities tripped: qubit 1 flipped.
    Qubit1,
    /// Only `q1 ⊕ q2` tripped: qubit 2 flipped.
    Qubit2,
}

impl Syndrome {
    /// Decode a measured syndrome register value.
    ///
    /// Returns `None` for values outside the two-bit range.
    pub fn decode(value: u64) -> Option<Self> {
        match value {
            0 => Some(Syndrome::Clean),
            1 => Some(Syndrome::Qubit0),
            3 => Some(Syndrome::Qubit1),
            2 => Some(Syndrome::Qubit2),
            _ => None,
        }
    }

    /// The syndrome register value this syndrome corresponds to.
    pub fn value(&self) -> u64 {
        match self {
            Syndrome::Clean => 0,
            Syndrome::Qubit0 => 1,
            Syndrome::Qubit1 => 3,
            Syndrome::Qubit2 => 2,
        }
    }

    /// The block position that needs a corrective flip, if any.
    pub fn position(&self) -> Option<usize> {
        match self {
            Syndrome::Clean => None,
            Syndrome::Qubit0 => Some(0),
            Syndrome::Qubit1 => Some(1),
            Syndrome::Qubit2 => Some(2),
        }
    }
}

impl fmt::Display for Syndrome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position() {
            None => write!(f, "no error"),
            Some(p) => write!(f, "bit-flip on qubit {p}"),
        }
    }
}

/// Entangle the ancillas with the block parities and measure them.
///
/// CX q0→a0, CX q1→a0, CX q1→a1, CX q2→a1, then each ancilla is
/// measured into its syndrome bit.
pub fn apply_syndrome_extraction(
    circuit: &mut Circuit,
    block: &[QubitId; BLOCK_SIZE],
    ancillas: &[QubitId; NUM_ANCILLAS],
    syndrome_bits: &[ClbitId; NUM_ANCILLAS],
) -> CodeResult<()> {
    circuit.cx(block[0], ancillas[0])?;
    circuit.cx(block[1], ancillas[0])?;
    circuit.cx(block[1], ancillas[1])?;
    circuit.cx(block[2], ancillas[1])?;
    circuit.measure(ancillas[0], syndrome_bits[0])?;
    circuit.measure(ancillas[1], syndrome_bits[1])?;
    Ok(())
}

/// Apply the classically-conditioned corrective flips.
///
/// One X per block qubit, each conditioned on the syndrome register
/// holding that qubit's decision-table value. At most one fires per shot.
pub fn apply_syndrome_correction(
    circuit: &mut Circuit,
    block: &[QubitId; BLOCK_SIZE],
    register: &str,
) -> CodeResult<()> {
    for syndrome in [Syndrome::Qubit0, Syndrome::Qubit1, Syndrome::Qubit2] {
        let position = syndrome.position().unwrap_or(0);
        circuit.x_if(block[position], register, syndrome.value())?;
    }
    Ok(())
}

/// Build the complete syndrome-correction demonstration circuit.
///
/// Registers: `code[3]` data, `anc[2]` ancillas; clbits `syn[2]` then
/// `out[3]`. Encodes `value`, optionally injects a flip, extracts and
/// measures the syndrome, applies the conditioned corrections, and
/// measures the code block into `out`.
pub fn syndrome_correction_circuit(value: bool, error: Option<usize>) -> CodeResult<Circuit> {
    let mut circuit = Circuit::new("bitflip_syndrome");
    let q = circuit.add_qreg("code", BLOCK_SIZE as u32);
    let a = circuit.add_qreg("anc", NUM_ANCILLAS as u32);
    let syn = circuit.add_creg("syn", NUM_ANCILLAS as u32);
    let out = circuit.add_creg("out", BLOCK_SIZE as u32);

    let block = [q[0], q[1], q[2]];
    let ancillas = [a[0], a[1]];
    let syndrome_bits = [syn[0], syn[1]];

    encode(&mut circuit, &block, value)?;
    circuit.barrier_all()?;

    if let Some(position) = error {
        inject_bit_flip(&mut circuit, &block, position)?;
        circuit.barrier_all()?;
    }

    apply_syndrome_extraction(&mut circuit, &block, &ancillas, &syndrome_bits)?;
    apply_syndrome_correction(&mut circuit, &block, "syn")?;
    circuit.barrier(block)?;

    for (qubit, clbit) in block.iter().zip(&out) {
        circuit.measure(*qubit, *clbit)?;
    }

    Ok(circuit)
}
