//! Per-tick data recording
//!
//! Collects one row of aggregate counters per simulated day and
//! flushes the whole series to a CSV file when the run ends. The
//! simulation loop itself never touches the filesystem.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::error::Result;
use crate::simulation::tick::DaySummary;

#[derive(Debug, Clone, Copy)]
struct Row {
    day: u32,
    infected: usize,
    deaths: usize,
    ever_infected: usize,
}

/// Accumulates the per-day counter series for one run
#[derive(Debug, Default)]
pub struct Recorder {
    rows: Vec<Row>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the day's counters.
    pub fn record(&mut self, summary: &DaySummary) {
        self.rows.push(Row {
            day: summary.day,
            infected: summary.active,
            deaths: summary.dead,
            ever_infected: summary.ever_infected,
        });
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Write the series as CSV with a header row.
    pub fn save_csv(&self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        let mut out = BufWriter::new(file);

        writeln!(out, "day,infected,deaths,ever_infected")?;
        for row in &self.rows {
            writeln!(
                out,
                "{},{},{},{}",
                row.day, row.infected, row.deaths, row.ever_infected
            )?;
        }
        out.flush()?;
        Ok(())
    }
}
