//! Sequential runner: filter the registry, load inputs, time each part

use crate::cache::InputCache;
use crate::cli::Selection;
use aoc_registry::{PARTS, SolutionEntry, SolutionRegistry};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Result from a single successfully executed part
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: String,
    pub elapsed: Duration,
}

impl ExecutionResult {
    /// Wall-clock time of the part in fractional milliseconds
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// Where the runner gets puzzle inputs from
pub trait InputSource {
    /// Deterministic location of the input for `year`/`day`
    fn input_path(&self, year: u16, day: u8) -> PathBuf;

    /// Return the input stored at `path`, acquiring it first if needed
    fn input(&self, year: u16, day: u8, path: &Path) -> Option<String>;
}

impl InputSource for InputCache {
    fn input_path(&self, year: u16, day: u8) -> PathBuf {
        self.cache_path(year, day)
    }

    fn input(&self, year: u16, day: u8, path: &Path) -> Option<String> {
        self.ensure(year, day, path)
            .inspect_err(|e| warn!(year, day, error = %e, "could not get input"))
            .ok()
    }
}

/// Run every registry entry that passes `selection`, in registry order
///
/// An entry whose input is unavailable is skipped with a warning; a part that
/// returns an error is skipped the same way. Neither stops the run.
pub fn run(
    selection: &Selection,
    registry: &SolutionRegistry,
    inputs: &impl InputSource,
) -> Vec<ExecutionResult> {
    let mut results = Vec::new();

    for entry in registry
        .iter()
        .filter(|e| selection.matches(e.year, e.day))
    {
        let path = inputs.input_path(entry.year, entry.day);
        let Some(input) = inputs.input(entry.year, entry.day, &path) else {
            warn!(
                year = entry.year,
                day = entry.day,
                "skipping year {} day {}",
                entry.year,
                entry.day
            );
            continue;
        };

        for part in PARTS
            .into_iter()
            .filter(|&p| selection.includes_part(p))
        {
            if let Some(result) = run_part(entry, part, &input) {
                results.push(result);
            }
        }
    }

    results
}

/// Time a single part; `None` if the solution reported an error
fn run_part(entry: &SolutionEntry, part: u8, input: &str) -> Option<ExecutionResult> {
    let (year, day) = (entry.year, entry.day);

    let start = Instant::now();
    let answer = entry.solve(part, input);
    let elapsed = start.elapsed();

    match answer {
        Ok(answer) => {
            let result = ExecutionResult {
                year,
                day,
                part,
                answer,
                elapsed,
            };
            debug!(year, day, part, elapsed_ms = result.elapsed_ms(), "solved");
            Some(result)
        }
        Err(e) => {
            warn!(year, day, part, error = %e, "solution failed");
            None
        }
    }
}
