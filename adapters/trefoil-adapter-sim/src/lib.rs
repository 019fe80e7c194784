//! Trefoil Local Statevector Simulator
//!
//! This crate provides a local quantum simulator for the bit-flip code
//! demos. It uses exact statevector simulation with mid-circuit
//! measurement, so classically-conditioned corrections behave the way
//! they would on hardware with fast feedback.
//!
//! # Features
//!
//! - **Exact simulation**: full statevector representation
//! - **Mid-circuit measurement**: Born-rule sampling with collapse
//! - **Classical feedback**: gates conditioned on measured registers
//! - **Deterministic replay**: seedable random source per backend
//!
//! # Performance
//!
//! | Qubits | Memory | Simulation Speed |
//! |--------|--------|------------------|
//! | 5 | ~512 B | Instant |
//! | 10 | ~16 KB | Instant |
//! | 15 | ~512 KB | Fast |
//! | 20 | ~16 MB | Moderate |
//!
//! # Example
//!
//! ```ignore
//! use trefoil_adapter_sim::SimulatorBackend;
//! use trefoil_hal::Backend;
//! use trefoil_ir::Circuit;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = SimulatorBackend::new();
//!
//!     let circuit = Circuit::bell()?;
//!     let job_id = backend.submit(&circuit, 1000).await?;
//!     let result = backend.wait(&job_id).await?;
//!
//!     // Expect ~50% |00⟩ and ~50% |11⟩
//!     println!("Results: {}", result.counts);
//!
//!     Ok(())
//! }
//! ```

mod classical;
mod simulator;
mod statevector;

pub use classical::ClassicalState;
pub use simulator::SimulatorBackend;
pub use statevector::Statevector;
