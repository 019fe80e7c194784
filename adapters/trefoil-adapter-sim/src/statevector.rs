//! Statevector simulation engine.
//!
//! Dense statevector with bit-mask gate kernels. Measurement is a proper
//! mid-circuit operation: sample the Born distribution for one qubit,
//! collapse, renormalize. This is what makes classically-conditioned
//! corrections meaningful — the syndrome bits exist before the circuit ends.

use num_complex::Complex64;
use rand::Rng;
use rand::rngs::StdRng;

use trefoil_ir::StandardGate;

/// A statevector representing a quantum state.
pub struct Statevector {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: usize,
}

impl Statevector {
    /// Create a new statevector initialized to |0...0⟩.
    pub fn new(num_qubits: usize) -> Self {
        let size = 1 << num_qubits;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); size];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self {
            amplitudes,
            num_qubits,
        }
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Apply a standard gate to specific qubits.
    ///
    /// `qubits` are bit positions into the statevector index, with
    /// qubit 0 as the least significant bit.
    pub fn apply_gate(&mut self, gate: StandardGate, qubits: &[usize]) {
        match gate {
            StandardGate::I => {}
            StandardGate::X => self.apply_x(qubits[0]),
            StandardGate::Y => self.apply_y(qubits[0]),
            StandardGate::Z => self.apply_z(qubits[0]),
            StandardGate::H => self.apply_h(qubits[0]),
            StandardGate::S => self.apply_phase(qubits[0], Complex64::new(0.0, 1.0)),
            StandardGate::Sdg => self.apply_phase(qubits[0], Complex64::new(0.0, -1.0)),
            StandardGate::CX => self.apply_cx(qubits[0], qubits[1]),
            StandardGate::CY => self.apply_cy(qubits[0], qubits[1]),
            StandardGate::CZ => self.apply_cz(qubits[0], qubits[1]),
            StandardGate::Swap => self.apply_swap(qubits[0], qubits[1]),
            StandardGate::CCX => self.apply_ccx(qubits[0], qubits[1], qubits[2]),
        }
    }

    // =========================================================================
    // Single-qubit gate implementations
    // =========================================================================

    fn apply_x(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                let j = i | mask;
                self.amplitudes.swap(i, j);
            }
        }
    }

    fn apply_y(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        let i_val = Complex64::new(0.0, 1.0);
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                let j = i | mask;
                let tmp = self.amplitudes[i];
                self.amplitudes[i] = -i_val * self.amplitudes[j];
                self.amplitudes[j] = i_val * tmp;
            }
        }
    }

    fn apply_z(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        for i in 0..(1 << self.num_qubits) {
            if i & mask != 0 {
                self.amplitudes[i] = -self.amplitudes[i];
            }
        }
    }

    fn apply_h(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = sqrt2_inv * (a + b);
                self.amplitudes[j] = sqrt2_inv * (a - b);
            }
        }
    }

    fn apply_phase(&mut self, qubit: usize, phase: Complex64) {
        let mask = 1 << qubit;
        for i in 0..(1 << self.num_qubits) {
            if i & mask != 0 {
                self.amplitudes[i] *= phase;
            }
        }
    }

    // =========================================================================
    // Two-qubit gate implementations
    // =========================================================================

    fn apply_cx(&mut self, control: usize, target: usize) {
        let ctrl_mask = 1 << control;
        let tgt_mask = 1 << target;
        for i in 0..(1 << self.num_qubits) {
            if (i & ctrl_mask != 0) && (i & tgt_mask == 0) {
                let j = i | tgt_mask;
                self.amplitudes.swap(i, j);
            }
        }
    }

    fn apply_cy(&mut self, control: usize, target: usize) {
        let ctrl_mask = 1 << control;
        let tgt_mask = 1 << target;
        let i_val = Complex64::new(0.0, 1.0);
        for i in 0..(1 << self.num_qubits) {
            if (i & ctrl_mask != 0) && (i & tgt_mask == 0) {
                let j = i | tgt_mask;
                let tmp = self.amplitudes[i];
                self.amplitudes[i] = -i_val * self.amplitudes[j];
                self.amplitudes[j] = i_val * tmp;
            }
        }
    }

    fn apply_cz(&mut self, control: usize, target: usize) {
        let ctrl_mask = 1 << control;
        let tgt_mask = 1 << target;
        for i in 0..(1 << self.num_qubits) {
            if (i & ctrl_mask != 0) && (i & tgt_mask != 0) {
                self.amplitudes[i] = -self.amplitudes[i];
            }
        }
    }

    fn apply_swap(&mut self, q1: usize, q2: usize) {
        let mask1 = 1 << q1;
        let mask2 = 1 << q2;
        for i in 0..(1 << self.num_qubits) {
            let b1 = (i & mask1) != 0;
            let b2 = (i & mask2) != 0;
            if b1 && !b2 {
                let j = (i & !mask1) | mask2;
                self.amplitudes.swap(i, j);
            }
        }
    }

    // =========================================================================
    // Three-qubit gate implementations
    // =========================================================================

    fn apply_ccx(&mut self, c1: usize, c2: usize, target: usize) {
        let c1_mask = 1 << c1;
        let c2_mask = 1 << c2;
        let tgt_mask = 1 << target;
        for i in 0..(1 << self.num_qubits) {
            if (i & c1_mask != 0) && (i & c2_mask != 0) && (i & tgt_mask == 0) {
                let j = i | tgt_mask;
                self.amplitudes.swap(i, j);
            }
        }
    }

    // =========================================================================
    // Measurement
    // =========================================================================

    /// Probability of measuring |1⟩ on a qubit.
    pub fn probability_of_one(&self, qubit: usize) -> f64 {
        let mask = 1 << qubit;
        self.amplitudes
            .iter()
            .enumerate()
            .filter(|(i, _)| i & mask != 0)
            .map(|(_, amp)| amp.norm_sqr())
            .sum()
    }

    /// Measure a single qubit: sample its outcome, collapse the state
    /// onto the observed branch, and renormalize.
    pub fn measure(&mut self, qubit: usize, rng: &mut StdRng) -> bool {
        let mask = 1 << qubit;
        let p1 = self.probability_of_one(qubit);
        let outcome = rng.r#gen::<f64>() < p1;

        let keep_prob = if outcome { p1 } else { 1.0 - p1 };
        // Rounding can leave keep_prob at 0 only when the sampled branch
        // has no amplitude, and the comparison above never selects it.
        let norm = keep_prob.sqrt().max(f64::MIN_POSITIVE);

        for (i, amp) in self.amplitudes.iter_mut().enumerate() {
            if ((i & mask) != 0) == outcome {
                *amp /= norm;
            } else {
                *amp = Complex64::new(0.0, 0.0);
            }
        }

        outcome
    }

    /// Reset a qubit to |0⟩ by measuring it and flipping if needed.
    pub fn reset(&mut self, qubit: usize, rng: &mut StdRng) {
        if self.measure(qubit, rng) {
            self.apply_x(qubit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn approx_eq(a: Complex64, b: Complex64) -> bool {
        (a - b).norm() < 1e-10
    }

    #[test]
    fn test_initial_state() {
        let sv = Statevector::new(2);
        assert!(approx_eq(sv.amplitudes[0], Complex64::new(1.0, 0.0)));
        assert!(approx_eq(sv.amplitudes[1], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes[2], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes[3], Complex64::new(0.0, 0.0)));
    }

    #[test]
    fn test_hadamard() {
        let mut sv = Statevector::new(1);
        sv.apply_gate(StandardGate::H, &[0]);

        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        assert!(approx_eq(sv.amplitudes[0], Complex64::new(sqrt2_inv, 0.0)));
        assert!(approx_eq(sv.amplitudes[1], Complex64::new(sqrt2_inv, 0.0)));
    }

    #[test]
    fn test_bell_state() {
        let mut sv = Statevector::new(2);
        sv.apply_gate(StandardGate::H, &[0]);
        sv.apply_gate(StandardGate::CX, &[0, 1]);

        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        assert!(approx_eq(sv.amplitudes[0], Complex64::new(sqrt2_inv, 0.0)));
        assert!(approx_eq(sv.amplitudes[1], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes[2], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes[3], Complex64::new(sqrt2_inv, 0.0)));
    }

    #[test]
    fn test_encode_one_is_all_ones() {
        // X on q0 then fan out: |111⟩
        let mut sv = Statevector::new(3);
        sv.apply_gate(StandardGate::X, &[0]);
        sv.apply_gate(StandardGate::CX, &[0, 1]);
        sv.apply_gate(StandardGate::CX, &[0, 2]);

        assert!(approx_eq(sv.amplitudes[0b111], Complex64::new(1.0, 0.0)));
        assert!((sv.probability_of_one(0) - 1.0).abs() < 1e-10);
        assert!((sv.probability_of_one(1) - 1.0).abs() < 1e-10);
        assert!((sv.probability_of_one(2) - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_ccx_majority_vote() {
        // |110⟩: both controls set flip the target.
        let mut sv = Statevector::new(3);
        sv.apply_gate(StandardGate::X, &[1]);
        sv.apply_gate(StandardGate::X, &[2]);
        sv.apply_gate(StandardGate::CCX, &[1, 2, 0]);

        assert!(approx_eq(sv.amplitudes[0b111], Complex64::new(1.0, 0.0)));
    }

    #[test]
    fn test_measure_deterministic_state() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut sv = Statevector::new(1);
        sv.apply_gate(StandardGate::X, &[0]);

        assert!(sv.measure(0, &mut rng));
        // State stays |1⟩ after collapse.
        assert!(approx_eq(sv.amplitudes[1], Complex64::new(1.0, 0.0)));
    }

    #[test]
    fn test_measure_collapses_entangled_pair() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let mut sv = Statevector::new(2);
            sv.apply_gate(StandardGate::H, &[0]);
            sv.apply_gate(StandardGate::CX, &[0, 1]);

            let first = sv.measure(0, &mut rng);
            let second = sv.measure(1, &mut rng);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_measure_is_repeatable() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut sv = Statevector::new(1);
        sv.apply_gate(StandardGate::H, &[0]);

        let first = sv.measure(0, &mut rng);
        for _ in 0..10 {
            assert_eq!(sv.measure(0, &mut rng), first);
        }
    }

    #[test]
    fn test_reset_leaves_zero() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut sv = Statevector::new(1);
        sv.apply_gate(StandardGate::H, &[0]);
        sv.reset(0, &mut rng);

        assert!(approx_eq(sv.amplitudes[0], Complex64::new(1.0, 0.0)));
        assert!(sv.probability_of_one(0) < 1e-10);
    }
}
