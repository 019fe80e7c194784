//! Per-shot classical bit storage.

use rustc_hash::FxHashMap;

use trefoil_ir::{Clbit, ClbitId};

/// The classical bits of one shot in flight.
///
/// Measurements write into it, conditioned gates read whole registers out
/// of it, and at the end of the shot it renders the bit-string that gets
/// counted. Bit-strings put clbit 0 leftmost.
pub struct ClassicalState {
    /// Clbit metadata in ascending id order.
    clbits: Vec<Clbit>,
    /// Position of each clbit id in `clbits` / `bits`.
    positions: FxHashMap<ClbitId, usize>,
    /// Current bit values, aligned with `clbits`.
    bits: Vec<bool>,
}

impl ClassicalState {
    /// Create a fresh all-zero classical state for a circuit's clbits.
    pub fn new(clbits: &[Clbit]) -> Self {
        let mut clbits: Vec<Clbit> = clbits.to_vec();
        clbits.sort_by_key(|c| c.id.0);
        let positions = clbits
            .iter()
            .enumerate()
            .map(|(pos, c)| (c.id, pos))
            .collect();
        let bits = vec![false; clbits.len()];
        Self {
            clbits,
            positions,
            bits,
        }
    }

    /// Store a measurement outcome. Unknown clbits are ignored.
    pub fn set(&mut self, clbit: ClbitId, value: bool) {
        if let Some(&pos) = self.positions.get(&clbit) {
            self.bits[pos] = value;
        }
    }

    /// Read a single bit.
    pub fn get(&self, clbit: ClbitId) -> bool {
        self.positions
            .get(&clbit)
            .map(|&pos| self.bits[pos])
            .unwrap_or(false)
    }

    /// Read a named register as a little-endian integer.
    ///
    /// Bit `i` of the register contributes `2^i`. Bits outside any register
    /// never contribute. An unknown register name reads as 0, matching a
    /// condition that can never fire.
    pub fn register_value(&self, register: &str) -> u64 {
        let mut value = 0u64;
        for (clbit, &bit) in self.clbits.iter().zip(&self.bits) {
            if bit && clbit.in_register(register) {
                value |= 1 << clbit.index.unwrap_or(0);
            }
        }
        value
    }

    /// Render all bits as a string with clbit 0 leftmost.
    pub fn to_bitstring(&self) -> String {
        self.bits.iter().map(|&b| if b { '1' } else { '0' }).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn syndrome_layout() -> Vec<Clbit> {
        let mut clbits = vec![];
        for i in 0..2 {
            clbits.push(Clbit::with_register(ClbitId(i), "syn", i));
        }
        for i in 0..3 {
            clbits.push(Clbit::with_register(ClbitId(2 + i), "out", i));
        }
        clbits
    }

    #[test]
    fn test_set_and_get() {
        let mut state = ClassicalState::new(&syndrome_layout());
        assert!(!state.get(ClbitId(0)));

        state.set(ClbitId(0), true);
        assert!(state.get(ClbitId(0)));
        assert!(!state.get(ClbitId(1)));
    }

    #[test]
    fn test_register_value_little_endian() {
        let mut state = ClassicalState::new(&syndrome_layout());
        state.set(ClbitId(1), true); // syn[1]

        assert_eq!(state.register_value("syn"), 2);
        assert_eq!(state.register_value("out"), 0);

        state.set(ClbitId(0), true); // syn[0]
        assert_eq!(state.register_value("syn"), 3);
    }

    #[test]
    fn test_register_value_ignores_other_registers() {
        let mut state = ClassicalState::new(&syndrome_layout());
        state.set(ClbitId(2), true); // out[0]
        state.set(ClbitId(3), true); // out[1]
        state.set(ClbitId(4), true); // out[2]

        assert_eq!(state.register_value("out"), 7);
        assert_eq!(state.register_value("syn"), 0);
        assert_eq!(state.register_value("missing"), 0);
    }

    #[test]
    fn test_bitstring_clbit_zero_leftmost() {
        let mut state = ClassicalState::new(&syndrome_layout());
        state.set(ClbitId(0), true);
        state.set(ClbitId(4), true);

        assert_eq!(state.to_bitstring(), "10001");
    }
}
