//! CLI to Config conversion utilities

use anyhow::{Context, Result};

/// Parse a duration string (e.g., "60s", "5m", "1h") to seconds
pub fn parse_duration(s: &str) -> Result<u64> {
    let s = s.trim().to_lowercase();

    let (num_str, multiplier) = if s.ends_with("sec") || s.ends_with('s') {
        (s.trim_end_matches("sec").trim_end_matches('s'), 1u64)
    } else if s.ends_with("min") || s.ends_with('m') {
        (s.trim_end_matches("min").trim_end_matches('m'), 60)
    } else if s.ends_with("hr") || s.ends_with('h') {
        (s.trim_end_matches("hr").trim_end_matches('h'), 3600)
    } else {
        (s.as_str(), 1)
    };

    let num: u64 = num_str
        .parse()
        .with_context(|| format!("Invalid duration format: {}", s))?;

    num.checked_mul(multiplier)
        .with_context(|| format!("Duration out of range: {}", s))
}

/// Parse a comma-separated list of worker counts (e.g., "1,2,4")
pub fn parse_worker_list(s: &str) -> Result<Vec<usize>> {
    let counts = s
        .split(',')
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .map(|field| {
            field
                .parse::<usize>()
                .with_context(|| format!("Invalid worker count: {}", field))
        })
        .collect::<Result<Vec<_>>>()?;

    if counts.is_empty() {
        anyhow::bail!("Worker list is empty");
    }
    Ok(counts)
}
