//! End-to-end runs of the bit-flip code circuits on the simulator.

use trefoil_adapter_sim::SimulatorBackend;
use trefoil_code::{
    OUTPUT_BITS, SYNDROME_BITS, apply_direct_correction, direct_correction_circuit, encode,
    inject_bit_flip, syndrome_correction_circuit,
};
use trefoil_hal::{Backend, ExecutionResult};
use trefoil_ir::Circuit;

const SHOTS: u32 = 1000;

async fn run(circuit: &Circuit) -> ExecutionResult {
    let backend = SimulatorBackend::with_seed(97);
    let job_id = backend.submit(circuit, SHOTS).await.unwrap();
    backend.result(&job_id).await.unwrap()
}

#[tokio::test]
async fn direct_correction_fixes_every_single_flip() {
    for value in [false, true] {
        let expected = if value { "1" } else { "0" };
        for error in [None, Some(0), Some(1), Some(2)] {
            let circuit = direct_correction_circuit(value, error).unwrap();
            let result = run(&circuit).await;

            assert_eq!(
                result.counts.get(expected),
                u64::from(SHOTS),
                "value={value} error={error:?}"
            );
            assert_eq!(result.counts.len(), 1);
        }
    }
}

#[tokio::test]
async fn syndrome_correction_fixes_every_single_flip() {
    // Syndrome bits (s0 s1) per the decision table.
    let cases = [(None, "00"), (Some(0), "10"), (Some(1), "11"), (Some(2), "01")];

    for value in [false, true] {
        let expected_output = if value { "111" } else { "000" };
        for (error, expected_syndrome) in cases {
            let circuit = syndrome_correction_circuit(value, error).unwrap();
            let result = run(&circuit).await;

            let syndrome = result.counts.marginal(&SYNDROME_BITS);
            let output = result.counts.marginal(&OUTPUT_BITS);

            assert_eq!(
                syndrome.get(expected_syndrome),
                u64::from(SHOTS),
                "value={value} error={error:?}"
            );
            assert_eq!(
                output.get(expected_output),
                u64::from(SHOTS),
                "value={value} error={error:?}"
            );
        }
    }
}

#[tokio::test]
async fn end_to_end_flip_of_qubit_one() {
    // Encode |1⟩, flip qubit 1, correct both ways, 1000 shots each.
    let direct = direct_correction_circuit(true, Some(1)).unwrap();
    let result = run(&direct).await;
    assert_eq!(result.counts.get("1"), u64::from(SHOTS));

    let syndrome = syndrome_correction_circuit(true, Some(1)).unwrap();
    let result = run(&syndrome).await;
    assert_eq!(result.counts.marginal(&SYNDROME_BITS).get("11"), u64::from(SHOTS));
    assert_eq!(result.counts.marginal(&OUTPUT_BITS).get("111"), u64::from(SHOTS));
}

#[tokio::test]
async fn double_flip_defeats_the_majority_vote() {
    // Known limitation: two simultaneous flips outvote the good qubit,
    // so the corrected logical value is wrong, deterministically.
    let mut circuit = Circuit::new("double_fault");
    let q = circuit.add_qreg("code", 3);
    let out = circuit.add_creg("out", 1);
    let block = [q[0], q[1], q[2]];

    encode(&mut circuit, &block, true).unwrap();
    inject_bit_flip(&mut circuit, &block, 0).unwrap();
    inject_bit_flip(&mut circuit, &block, 1).unwrap();
    apply_direct_correction(&mut circuit, &block).unwrap();
    circuit.measure(block[0], out[0]).unwrap();

    let result = run(&circuit).await;
    assert_eq!(result.counts.get("0"), u64::from(SHOTS));
    assert_eq!(result.counts.get("1"), 0);
}

#[tokio::test]
async fn independent_encodings_agree() {
    // Two independent preparations of the same logical value both
    // collapse to the same uniform triple in every shot.
    let build = || {
        let mut circuit = Circuit::new("encode_only");
        let q = circuit.add_qreg("code", 3);
        let out = circuit.add_creg("out", 3);
        let block = [q[0], q[1], q[2]];
        encode(&mut circuit, &block, true).unwrap();
        for (qubit, clbit) in block.iter().zip(&out) {
            circuit.measure(*qubit, *clbit).unwrap();
        }
        circuit
    };

    let first = run(&build()).await;
    let second = run(&build()).await;

    assert_eq!(first.counts.get("111"), u64::from(SHOTS));
    assert_eq!(first.counts, second.counts);
}

#[tokio::test]
async fn bell_pair_is_perfectly_correlated() {
    let circuit = Circuit::bell().unwrap();
    let backend = SimulatorBackend::with_seed(5);
    let job_id = backend.submit(&circuit, 1024).await.unwrap();
    let result = backend.result(&job_id).await.unwrap();

    assert_eq!(result.counts.get("00") + result.counts.get("11"), 1024);
    assert_eq!(result.counts.get("01") + result.counts.get("10"), 0);
    // Both branches actually occur.
    assert!(result.counts.get("00") > 0);
    assert!(result.counts.get("11") > 0);
}
