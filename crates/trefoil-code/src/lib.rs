//! Trefoil 3-Qubit Bit-Flip Code
//!
//! Circuit builders for the 3-qubit repetition code protecting one
//! logical qubit against a single bit-flip. Two correction strategies
//! are provided:
//!
//! - **Direct correction**: parity CNOTs plus a Toffoli take the
//!   majority vote on the data qubits themselves, no ancillas.
//! - **Syndrome correction**: two ancillas measure the pairwise
//!   parities, and corrective X gates conditioned on the measured
//!   syndrome register restore the data non-destructively.
//!
//! Both undo any single flip. Two simultaneous flips defeat the code:
//! the majority vote goes the wrong way and the logical value is
//! corrupted deterministically.
//!
//! # Example
//!
//! ```
//! use trefoil_code::{Syndrome, syndrome_correction_circuit};
//!
//! // Encode |1⟩, flip qubit 1, extract and correct.
//! let circuit = syndrome_correction_circuit(true, Some(1))?;
//! assert_eq!(circuit.num_qubits(), 5);
//!
//! // A flip on qubit 1 trips both parity checks.
//! assert_eq!(Syndrome::decode(3), Some(Syndrome::Qubit1));
//! # Ok::<(), trefoil_code::CodeError>(())
//! ```

pub mod direct;
pub mod encoder;
pub mod error;
pub mod injector;
pub mod syndrome;

pub use direct::{apply_direct_correction, direct_correction_circuit};
pub use encoder::{BLOCK_SIZE, encode};
pub use error::{CodeError, CodeResult};
pub use injector::inject_bit_flip;
pub use syndrome::{
    NUM_ANCILLAS, OUTPUT_BITS, SYNDROME_BITS, Syndrome, apply_syndrome_correction,
    apply_syndrome_extraction, syndrome_correction_circuit,
};
