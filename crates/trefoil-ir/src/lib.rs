//! Trefoil Circuit Intermediate Representation
//!
//! This crate provides the core data structures for representing quantum
//! circuits in Trefoil: fixed-topology circuits with measurement and
//! classically-conditioned gates, as used by the 3-qubit bit-flip code.
//!
//! # Overview
//!
//! The circuit IR uses a DAG (Directed Acyclic Graph) representation
//! internally. Classical bits are wires of that DAG just like qubits, which
//! is how measure-then-conditionally-gate control flow stays well ordered
//! without any dedicated control-flow construct. The high-level [`Circuit`]
//! API provides a convenient builder pattern.
//!
//! # Core Components
//!
//! - **Qubits and Classical Bits**: [`QubitId`], [`ClbitId`], with named
//!   register membership on [`Qubit`] / [`Clbit`]
//! - **Gates**: [`StandardGate`] plus [`ClassicalCondition`] for
//!   classically-conditioned application
//! - **Instructions**: [`Instruction`] combining gates with their operands
//! - **DAG**: [`CircuitDag`] for the internal graph representation
//! - **Circuit**: [`Circuit`] high-level builder API
//! - **Rendering**: [`TextDiagram`] ASCII lane diagrams
//!
//! # Example: Building a Bell State
//!
//! ```rust
//! use trefoil_ir::{Circuit, QubitId};
//!
//! // Create a new circuit with 2 qubits and 2 classical bits
//! let mut circuit = Circuit::with_size("bell_state", 2, 2);
//!
//! // Build the Bell state: |00⟩ → (|00⟩ + |11⟩)/√2
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//! circuit.measure_all().unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 2);
//! assert!(circuit.depth() >= 2);
//! ```
//!
//! # Example: Classical Feedback
//!
//! ```rust
//! use trefoil_ir::Circuit;
//!
//! let mut circuit = Circuit::new("feedback");
//! let q = circuit.add_qreg("code", 1);
//! let syn = circuit.add_creg("syn", 1);
//!
//! // Measure, then flip only in shots where syn == 1.
//! circuit.measure(q[0], syn[0]).unwrap();
//! circuit.x_if(q[0], "syn", 1).unwrap();
//! ```

pub mod circuit;
pub mod dag;
pub mod display;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod qubit;

pub use circuit::Circuit;
pub use dag::{CircuitDag, DagEdge, DagNode, NodeIndex, WireId};
pub use display::TextDiagram;
pub use error::{IrError, IrResult};
pub use gate::{ClassicalCondition, Gate, StandardGate};
pub use instruction::{Instruction, InstructionKind};
pub use qubit::{Clbit, ClbitId, Qubit, QubitId};
