//! Backend capability introspection.
//!
//! Describes what a backend can do: qubit count, shot budget, and the
//! supported gate set. [`crate::Backend::validate`] compares circuits
//! against these before submission.

use serde::{Deserialize, Serialize};

/// The set of gate operations a backend supports (OpenQASM 3 naming).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateSet {
    gates: Vec<String>,
}

impl GateSet {
    /// Create a gate set from gate names.
    pub fn new(gates: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let mut gates: Vec<String> = gates.into_iter().map(Into::into).collect();
        gates.sort();
        gates.dedup();
        Self { gates }
    }

    /// Check whether a gate name is supported.
    pub fn contains(&self, name: &str) -> bool {
        self.gates.binary_search_by(|g| g.as_str().cmp(name)).is_ok()
    }

    /// Iterate over the supported gate names.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.gates.iter().map(String::as_str)
    }

    /// Number of supported gates.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Check whether the gate set is empty.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }
}

/// Capabilities of a quantum backend.
///
/// Cached at backend construction; [`crate::Backend::capabilities`] returns
/// a reference without I/O.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    /// Maximum number of qubits.
    pub num_qubits: u32,
    /// Maximum number of shots per job.
    pub max_shots: u32,
    /// Whether this backend is a simulator.
    pub is_simulator: bool,
    /// Supported gate operations.
    pub gate_set: GateSet,
}

impl Capabilities {
    /// Capabilities of a local statevector simulator.
    pub fn simulator(num_qubits: u32) -> Self {
        Self {
            num_qubits,
            max_shots: 1_000_000,
            is_simulator: true,
            gate_set: GateSet::new([
                "id", "x", "y", "z", "h", "s", "sdg", "cx", "cy", "cz", "swap", "ccx",
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_set_membership() {
        let gates = GateSet::new(["x", "cx", "ccx", "x"]);
        assert_eq!(gates.len(), 3); // deduplicated
        assert!(gates.contains("cx"));
        assert!(!gates.contains("rz"));
    }

    #[test]
    fn test_simulator_capabilities() {
        let caps = Capabilities::simulator(20);
        assert!(caps.is_simulator);
        assert_eq!(caps.num_qubits, 20);
        assert!(caps.gate_set.contains("ccx"));
        assert!(caps.gate_set.contains("h"));
    }
}
