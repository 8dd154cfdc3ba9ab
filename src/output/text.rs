//! Human-readable text output

use crate::config::validator::ResolvedSearch;
use crate::coordinator::SearchOutcome;
use crate::polynomial::presets::Preset;
use crate::util::time::{calculate_rate, format_duration, format_number, format_rate};
use crate::worker::lane::StrideLane;
use num_bigint::BigInt;

const RULE: &str = "═══════════════════════════════════════════════════════════";

/// Print the search parameters before launching workers
pub fn print_header(search: &ResolvedSearch) {
    println!("Search:");
    println!("  Polynomial: {}", search.polynomial);
    println!("  Source:     {}", describe_source(&search.label));
    println!("  Degree:     {}", search.polynomial.degree());
    println!("  Target:     {} root(s)", search.target);

    let counts: Vec<String> = search.worker_counts.iter().map(|c| c.to_string()).collect();
    println!("  Workers:    {}", counts.join(", "));

    match search.timeout {
        Some(timeout) => println!("  Timeout:    {}", format_duration(timeout)),
        None => println!("  Timeout:    none"),
    }
    println!();
}

/// Print how the candidate space is split among `workers` workers
pub fn print_partition(workers: usize) {
    println!("Partition ({} workers):", workers);
    for lane in (0..workers).filter_map(|id| StrideLane::new(id, workers)) {
        let preview: Vec<String> = lane.preview(3).iter().map(|n| n.to_string()).collect();
        println!(
            "  W{}: n = {}, ... (stride {})",
            lane.worker_id(),
            preview.join(", "),
            lane.stride()
        );
    }
    println!();
}

/// Print the result of a single search
pub fn print_outcome(outcome: &SearchOutcome) {
    println!("{}", RULE);
    println!("                 SEARCH RESULTS ({} workers)", outcome.workers);
    println!("{}", RULE);
    println!();

    println!("Roots: {}", format_roots(&outcome.roots));
    println!("Found: {} / {}", outcome.roots.len(), outcome.target);
    if !outcome.completed {
        println!("Status: cancelled before the target was reached");
    }
    println!("Elapsed Time: {:.3}s", outcome.elapsed.as_secs_f64());
    println!();

    let total = outcome.stats.aggregate();
    let rate = calculate_rate(total.candidates_tested(), outcome.elapsed);
    println!("Evaluations:");
    println!(
        "  Total: {} candidates - {} evals/s",
        format_number(total.candidates_tested()),
        format_rate(rate)
    );
    println!();

    println!("Per Worker:");
    for stats in outcome.stats.per_worker() {
        println!(
            "  W{:<3} {:>14} candidates  {:>2} root(s)  {}",
            stats.worker_id,
            format_number(stats.candidates_tested()),
            stats.roots_found(),
            format_duration(stats.elapsed())
        );
    }
    println!();
    println!("{}", RULE);
}

/// Print one line per run when several worker counts were searched
pub fn print_sweep_summary(outcomes: &[SearchOutcome]) {
    if outcomes.len() < 2 {
        return;
    }

    println!();
    println!("Sweep Summary:");
    for outcome in outcomes {
        println!(
            "  {:>3} workers: {:>10}  roots {}{}",
            outcome.workers,
            format_duration(outcome.elapsed),
            format_roots(&outcome.sorted_roots()),
            if outcome.completed { "" } else { " (cancelled)" }
        );
    }
}

/// Label plus the preset description, when the label names a preset
pub fn describe_source(label: &str) -> String {
    match Preset::from_name(label) {
        Some(preset) => format!("{} - {}", preset, preset.description()),
        None => label.to_string(),
    }
}

/// Format roots as a bracketed list with explicit signs
pub fn format_roots(roots: &[BigInt]) -> String {
    let items: Vec<String> = roots.iter().map(crate::worker::lane::signed).collect();
    format!("[{}]", items.join(", "))
}
