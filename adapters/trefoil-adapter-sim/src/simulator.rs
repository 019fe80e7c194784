//! Simulator backend implementation.

use async_trait::async_trait;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rustc_hash::FxHashMap;
use std::sync::{Arc, Mutex};
use std::time::Instant;
use tracing::{debug, instrument};
use uuid::Uuid;

use trefoil_hal::{
    Backend, BackendAvailability, BackendConfig, BackendFactory, Capabilities, Counts,
    ExecutionResult, HalError, HalResult, Job, JobId, JobStatus, ValidationResult,
};
use trefoil_ir::{Circuit, InstructionKind, QubitId};

use crate::classical::ClassicalState;
use crate::statevector::Statevector;

/// Job data for the simulator.
struct SimJob {
    job: Job,
    result: Option<ExecutionResult>,
}

/// Local statevector simulator backend.
///
/// Each shot runs the circuit front to back on a fresh statevector,
/// performing measurements mid-circuit and evaluating classical gate
/// conditions against the bits measured so far. The backend owns its
/// random source, so a seeded backend replays identical shot sequences.
pub struct SimulatorBackend {
    /// Backend configuration.
    config: BackendConfig,
    /// Cached capabilities.
    capabilities: Capabilities,
    /// Active jobs.
    jobs: Arc<Mutex<FxHashMap<String, SimJob>>>,
    /// Random source shared by all shots.
    rng: Mutex<StdRng>,
}

impl SimulatorBackend {
    /// Create a new simulator backend with default settings.
    pub fn new() -> Self {
        Self::with_max_qubits(20)
    }

    /// Create a simulator with custom max qubits.
    pub fn with_max_qubits(max_qubits: u32) -> Self {
        Self {
            config: BackendConfig::new("statevector"),
            capabilities: Capabilities::simulator(max_qubits),
            jobs: Arc::new(Mutex::new(FxHashMap::default())),
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Create a simulator with a fixed random seed.
    ///
    /// Two seeded backends given the same circuits and shot counts produce
    /// identical counts.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            config: BackendConfig::new("statevector"),
            capabilities: Capabilities::simulator(20),
            jobs: Arc::new(Mutex::new(FxHashMap::default())),
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Run simulation synchronously.
    #[instrument(skip(self, circuit), fields(circuit = circuit.name()))]
    fn run_simulation(&self, circuit: &Circuit, shots: u32) -> ExecutionResult {
        let start = Instant::now();

        let num_qubits = circuit.num_qubits();
        debug!(num_qubits, shots, "starting simulation");

        // Statevector bit position for each qubit id.
        let qubit_pos: FxHashMap<QubitId, usize> = circuit
            .qubits()
            .iter()
            .enumerate()
            .map(|(pos, q)| (q.id, pos))
            .collect();

        let instructions: Vec<_> = circuit
            .dag()
            .topological_ops()
            .map(|(_, inst)| inst.clone())
            .collect();

        debug!(num_instructions = instructions.len(), "circuit flattened");

        let mut counts = Counts::new();
        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        for _ in 0..shots {
            let mut sv = Statevector::new(num_qubits);
            let mut classical = ClassicalState::new(circuit.clbits());

            for inst in &instructions {
                match &inst.kind {
                    InstructionKind::Gate(gate) => {
                        if let Some(cond) = &gate.condition {
                            if classical.register_value(&cond.register) != cond.value {
                                continue;
                            }
                        }
                        let qubits: Vec<usize> = inst
                            .qubits
                            .iter()
                            .filter_map(|q| qubit_pos.get(q).copied())
                            .collect();
                        sv.apply_gate(gate.kind, &qubits);
                    }
                    InstructionKind::Measure => {
                        for (qubit, clbit) in inst.qubits.iter().zip(&inst.clbits) {
                            if let Some(&pos) = qubit_pos.get(qubit) {
                                let bit = sv.measure(pos, &mut rng);
                                classical.set(*clbit, bit);
                            }
                        }
                    }
                    InstructionKind::Reset => {
                        for qubit in &inst.qubits {
                            if let Some(&pos) = qubit_pos.get(qubit) {
                                sv.reset(pos, &mut rng);
                            }
                        }
                    }
                    InstructionKind::Barrier => {}
                }
            }

            counts.record(classical.to_bitstring());
        }

        let elapsed = start.elapsed();
        debug!(?elapsed, "simulation completed");

        ExecutionResult::new(counts, shots).with_execution_time(elapsed.as_millis() as u64)
    }
}

impl Default for SimulatorBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Backend for SimulatorBackend {
    fn name(&self) -> &str {
        &self.config.name
    }

    fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    async fn availability(&self) -> HalResult<BackendAvailability> {
        Ok(BackendAvailability::always_available())
    }

    async fn validate(&self, circuit: &Circuit) -> HalResult<ValidationResult> {
        let mut reasons = vec![];

        if circuit.num_qubits() > self.capabilities.num_qubits as usize {
            reasons.push(format!(
                "circuit has {} qubits but the simulator supports {}",
                circuit.num_qubits(),
                self.capabilities.num_qubits
            ));
        }

        let mut unsupported: Vec<&str> = circuit
            .dag()
            .topological_ops()
            .filter_map(|(_, inst)| inst.as_gate())
            .map(|gate| gate.name())
            .filter(|name| !self.capabilities.gate_set.contains(name))
            .collect();
        unsupported.sort_unstable();
        unsupported.dedup();

        if !reasons.is_empty() {
            return Ok(ValidationResult::Invalid { reasons });
        }
        if !unsupported.is_empty() {
            return Ok(ValidationResult::RequiresTranspilation {
                details: format!("unsupported gates: {}", unsupported.join(", ")),
            });
        }
        Ok(ValidationResult::Valid)
    }

    #[instrument(skip(self, circuit), fields(circuit = circuit.name()))]
    async fn submit(&self, circuit: &Circuit, shots: u32) -> HalResult<JobId> {
        if shots == 0 {
            return Err(HalError::InvalidShots("shots must be at least 1".into()));
        }
        if shots > self.capabilities.max_shots {
            return Err(HalError::InvalidShots(format!(
                "{} shots exceeds the maximum of {}",
                shots, self.capabilities.max_shots
            )));
        }
        if circuit.num_qubits() > self.capabilities.num_qubits as usize {
            return Err(HalError::CircuitTooLarge(format!(
                "circuit has {} qubits but the simulator supports {}",
                circuit.num_qubits(),
                self.capabilities.num_qubits
            )));
        }
        match self.validate(circuit).await? {
            ValidationResult::Valid => {}
            other => return Err(HalError::InvalidCircuit(other.to_string())),
        }

        let job_id = JobId::new(Uuid::new_v4().to_string());
        let job = Job::new(job_id.clone(), shots).with_backend(&self.config.name);

        {
            let mut jobs = self
                .jobs
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            jobs.insert(job_id.0.clone(), SimJob { job, result: None });
        }

        debug!(%job_id, "submitted job");

        // Shots are cheap at this scale, so run inline and mark the job
        // complete before submit() returns.
        let result = self.run_simulation(circuit, shots);

        {
            let mut jobs = self
                .jobs
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            if let Some(sim_job) = jobs.get_mut(&job_id.0) {
                sim_job.result = Some(result);
                sim_job.job = sim_job.job.clone().with_status(JobStatus::Completed);
            }
        }

        Ok(job_id)
    }

    async fn status(&self, job_id: &JobId) -> HalResult<JobStatus> {
        let jobs = self
            .jobs
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        jobs.get(&job_id.0)
            .map(|j| j.job.status.clone())
            .ok_or_else(|| HalError::JobNotFound(job_id.0.clone()))
    }

    async fn result(&self, job_id: &JobId) -> HalResult<ExecutionResult> {
        let jobs = self
            .jobs
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        jobs.get(&job_id.0)
            .and_then(|j| j.result.clone())
            .ok_or_else(|| HalError::JobNotFound(job_id.0.clone()))
    }

    async fn cancel(&self, job_id: &JobId) -> HalResult<()> {
        let mut jobs = self
            .jobs
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if let Some(sim_job) = jobs.get_mut(&job_id.0) {
            if !sim_job.job.status.is_terminal() {
                sim_job.job = sim_job.job.clone().with_status(JobStatus::Cancelled);
            }
            Ok(())
        } else {
            Err(HalError::JobNotFound(job_id.0.clone()))
        }
    }
}

impl BackendFactory for SimulatorBackend {
    fn from_config(config: BackendConfig) -> HalResult<Self> {
        let max_qubits = config
            .extra
            .get("max_qubits")
            .and_then(serde_json::Value::as_u64)
            .map_or(20, |v| v as u32);
        let rng = match config.extra.get("seed").and_then(serde_json::Value::as_u64) {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            config,
            capabilities: Capabilities::simulator(max_qubits),
            jobs: Arc::new(Mutex::new(FxHashMap::default())),
            rng: Mutex::new(rng),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trefoil_ir::QubitId;

    #[tokio::test]
    async fn test_simulator_capabilities() {
        let backend = SimulatorBackend::new();
        let caps = backend.capabilities();

        assert!(caps.is_simulator);
        assert_eq!(caps.num_qubits, 20);
        assert!(caps.gate_set.contains("ccx"));
    }

    #[tokio::test]
    async fn test_simulator_availability() {
        let backend = SimulatorBackend::new();
        let avail = backend.availability().await.unwrap();
        assert!(avail.is_available);
    }

    #[tokio::test]
    async fn test_simulator_bell_state() {
        let backend = SimulatorBackend::new();

        let circuit = Circuit::bell().unwrap();
        let job_id = backend.submit(&circuit, 1000).await.unwrap();

        let status = backend.status(&job_id).await.unwrap();
        assert!(status.is_success());

        let result = backend.result(&job_id).await.unwrap();
        assert_eq!(result.shots, 1000);

        // Bell state should produce only 00 and 11
        let counts = &result.counts;
        assert_eq!(counts.get("00") + counts.get("11"), 1000);
        assert_eq!(counts.get("01") + counts.get("10"), 0);
    }

    #[tokio::test]
    async fn test_simulator_ghz_state() {
        let backend = SimulatorBackend::new();

        let circuit = Circuit::ghz(3).unwrap();
        let job_id = backend.submit(&circuit, 1000).await.unwrap();

        let result = backend.result(&job_id).await.unwrap();

        let counts = &result.counts;
        assert_eq!(counts.get("000") + counts.get("111"), 1000);
    }

    #[tokio::test]
    async fn test_conditioned_gate_fires_on_register_value() {
        // Measure a |1⟩ qubit into "m", then flip the second qubit only
        // when m == 1. Both output bits must read 1 every shot.
        let backend = SimulatorBackend::new();

        let mut circuit = Circuit::new("feedback");
        let q = circuit.add_qreg("q", 2);
        circuit.add_creg("m", 1);
        circuit.add_creg("out", 1);
        let m = circuit.creg("m").unwrap();
        let out = circuit.creg("out").unwrap();

        circuit.x(q[0]).unwrap();
        circuit.measure(q[0], m[0]).unwrap();
        circuit.x_if(q[1], "m", 1).unwrap();
        circuit.measure(q[1], out[0]).unwrap();

        let job_id = backend.submit(&circuit, 200).await.unwrap();
        let result = backend.result(&job_id).await.unwrap();

        assert_eq!(result.counts.get("11"), 200);
    }

    #[tokio::test]
    async fn test_conditioned_gate_skipped_on_mismatch() {
        // "m" stays 0, so the conditioned flip never fires.
        let backend = SimulatorBackend::new();

        let mut circuit = Circuit::new("no_feedback");
        let q = circuit.add_qreg("q", 2);
        circuit.add_creg("m", 1);
        circuit.add_creg("out", 1);
        let m = circuit.creg("m").unwrap();
        let out = circuit.creg("out").unwrap();

        circuit.measure(q[0], m[0]).unwrap();
        circuit.x_if(q[1], "m", 1).unwrap();
        circuit.measure(q[1], out[0]).unwrap();

        let job_id = backend.submit(&circuit, 100).await.unwrap();
        let result = backend.result(&job_id).await.unwrap();

        assert_eq!(result.counts.get("00"), 100);
    }

    #[tokio::test]
    async fn test_seeded_backends_agree() {
        let circuit = Circuit::bell().unwrap();

        let a = SimulatorBackend::with_seed(12345);
        let b = SimulatorBackend::with_seed(12345);

        let job_a = a.submit(&circuit, 500).await.unwrap();
        let job_b = b.submit(&circuit, 500).await.unwrap();

        let result_a = a.result(&job_a).await.unwrap();
        let result_b = b.result(&job_b).await.unwrap();

        assert_eq!(result_a.counts, result_b.counts);
    }

    #[tokio::test]
    async fn test_simulator_too_many_qubits() {
        let backend = SimulatorBackend::with_max_qubits(5);

        let circuit = Circuit::with_size("test", 10, 0);
        let result = backend.submit(&circuit, 100).await;

        assert!(matches!(result, Err(HalError::CircuitTooLarge(_))));
    }

    #[tokio::test]
    async fn test_simulator_rejects_zero_shots() {
        let backend = SimulatorBackend::new();
        let circuit = Circuit::bell().unwrap();

        let result = backend.submit(&circuit, 0).await;
        assert!(matches!(result, Err(HalError::InvalidShots(_))));
    }

    #[tokio::test]
    async fn test_validate_oversized_circuit() {
        let backend = SimulatorBackend::with_max_qubits(2);
        let circuit = Circuit::with_size("big", 4, 0);

        let validation = backend.validate(&circuit).await.unwrap();
        assert!(!validation.is_valid());
    }

    #[tokio::test]
    async fn test_status_unknown_job() {
        let backend = SimulatorBackend::new();
        let result = backend.status(&JobId::new("nope")).await;
        assert!(matches!(result, Err(HalError::JobNotFound(_))));
    }

    #[tokio::test]
    async fn test_wait_returns_completed_result() {
        let backend = SimulatorBackend::new();
        let mut circuit = Circuit::with_size("flip", 1, 1);
        circuit.x(QubitId(0)).unwrap();
        circuit.measure_all().unwrap();

        let job_id = backend.submit(&circuit, 50).await.unwrap();
        let result = backend.wait(&job_id).await.unwrap();

        assert_eq!(result.counts.get("1"), 50);
    }

    #[tokio::test]
    async fn test_from_config_honors_extras() {
        let config = BackendConfig::new("statevector")
            .with_extra("max_qubits", serde_json::json!(8))
            .with_extra("seed", serde_json::json!(7));
        let backend = SimulatorBackend::from_config(config).unwrap();

        assert_eq!(backend.capabilities().num_qubits, 8);
    }
}
