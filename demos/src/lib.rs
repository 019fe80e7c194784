//! Trefoil Demo Suite
//!
//! Demonstrations of the 3-qubit bit-flip code on the local statevector
//! simulator:
//!
//! - **Direct correction**: majority vote on the data qubits via CNOTs
//!   and a Toffoli
//! - **Syndrome correction**: ancilla parity measurement with
//!   classically-conditioned corrective flips
//! - **Bell pair**: entanglement baseline without error correction
//!
//! Each binary prints the circuit diagram, runs it on the simulator, and
//! reports the measured counts.

use console::style;

/// Print a demo header.
pub fn print_header(title: &str) {
    println!();
    println!("{}", style("═".repeat(60)).cyan());
    println!("{}", style(format!("  {title}")).cyan().bold());
    println!("{}", style("═".repeat(60)).cyan());
    println!();
}

/// Print a demo section.
pub fn print_section(title: &str) {
    println!();
    println!("{}", style(format!("▶ {title}")).green().bold());
    println!("{}", style("─".repeat(40)).dim());
}

/// Print a result line.
pub fn print_result(label: &str, value: impl std::fmt::Display) {
    println!("  {} {}", style(format!("{label}:")).dim(), value);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("ℹ").blue(), message);
}

/// Initialize logging for a demo binary.
///
/// Verbose mode turns on debug-level simulator tracing.
pub fn init_logging(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
