//! # Progress reporting
//!
//! The launcher emits a `ProgressRecord` for the founding population, for
//! every accepted generation and once at the end. Where the records go is up
//! to the `ReportSink` handed to the run.
//!
//! ```rust
//! use boatga::evolution::report::{MemorySink, ProgressRecord, ReportSink, ReportTag};
//!
//! let mut sink = MemorySink::default();
//! let record = ProgressRecord {
//!     tag: ReportTag::Improvement,
//!     best_id: 12,
//!     fitness: 1234.5678,
//!     density: 0.891,
//!     area: 100012.5,
//!     generation: 3,
//! };
//! sink.report(&record).unwrap();
//! assert_eq!(sink.records()[0].to_line(), "[>] 12 1234,57 0,89 100012.5 3");
//! ```

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{BoatError, Result};
use crate::individual::Individual;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ReportTag {
    Initial,
    Improvement,
    Final,
}

impl ReportTag {
    pub fn symbol(&self) -> &'static str {
        match self {
            ReportTag::Initial => "i",
            ReportTag::Improvement => ">",
            ReportTag::Final => "!",
        }
    }
}

/// A snapshot of the best individual at one point of a run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProgressRecord {
    pub tag: ReportTag,
    pub best_id: u64,
    pub fitness: f64,
    pub density: f64,
    pub area: f64,
    pub generation: usize,
}

impl ProgressRecord {
    /// Snapshots a scored individual.
    ///
    /// # Errors
    ///
    /// Returns `BoatError::Other` if the individual carries no metrics.
    pub fn from_individual(tag: ReportTag, best: &Individual) -> Result<Self> {
        let metrics = best.metrics().ok_or_else(|| {
            BoatError::Other(format!("Individual {} has not been scored", best.id()))
        })?;
        Ok(Self {
            tag,
            best_id: best.id(),
            fitness: metrics.fitness,
            density: metrics.density,
            area: metrics.area,
            generation: best.generation(),
        })
    }

    /// Renders `[tag] id fitness density area generation`, with fitness and
    /// density rounded to two decimals and written with a decimal comma.
    pub fn to_line(&self) -> String {
        format!(
            "[{}] {} {} {} {} {}",
            self.tag.symbol(),
            self.best_id,
            decimal_comma(self.fitness),
            decimal_comma(self.density),
            self.area,
            self.generation
        )
    }
}

fn decimal_comma(value: f64) -> String {
    format!("{:.2}", value).replace('.', ",")
}

/// Receives progress records from a run.
pub trait ReportSink {
    fn report(&mut self, record: &ProgressRecord) -> Result<()>;
}

impl<F> ReportSink for F
where
    F: FnMut(&ProgressRecord),
{
    fn report(&mut self, record: &ProgressRecord) -> Result<()> {
        self(record);
        Ok(())
    }
}

/// Sends every record to two sinks, the first one first.
#[derive(Debug, Clone, Default)]
pub struct Tee<A, B> {
    pub first: A,
    pub second: B,
}

impl<A, B> Tee<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A, B> ReportSink for Tee<A, B>
where
    A: ReportSink,
    B: ReportSink,
{
    fn report(&mut self, record: &ProgressRecord) -> Result<()> {
        self.first.report(record)?;
        self.second.report(record)
    }
}

/// Logs each record as an `info` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl ReportSink for TracingSink {
    fn report(&mut self, record: &ProgressRecord) -> Result<()> {
        tracing::info!(
            tag = record.tag.symbol(),
            best = record.best_id,
            fitness = record.fitness,
            density = record.density,
            area = record.area,
            generation = record.generation,
            "{}",
            record.to_line()
        );
        Ok(())
    }
}

/// Appends one line per record to a log file.
#[derive(Debug)]
pub struct FileSink {
    file: File,
}

impl FileSink {
    /// Opens `path` for appending, creating it if needed.
    pub fn append<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self { file })
    }
}

impl ReportSink for FileSink {
    fn report(&mut self, record: &ProgressRecord) -> Result<()> {
        writeln!(self.file, "{}", record.to_line())?;
        Ok(())
    }
}

/// Keeps every record in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    records: Vec<ProgressRecord>,
}

impl MemorySink {
    pub fn records(&self) -> &[ProgressRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<ProgressRecord> {
        self.records
    }
}

impl ReportSink for MemorySink {
    fn report(&mut self, record: &ProgressRecord) -> Result<()> {
        self.records.push(record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(tag: ReportTag) -> ProgressRecord {
        ProgressRecord {
            tag,
            best_id: 4,
            fitness: 10.006,
            density: 1.0,
            area: 250.0,
            generation: 0,
        }
    }

    #[test]
    fn test_line_format() {
        assert_eq!(record(ReportTag::Initial).to_line(), "[i] 4 10,01 1,00 250 0");
        assert_eq!(record(ReportTag::Final).to_line(), "[!] 4 10,01 1,00 250 0");
    }

    #[test]
    fn test_closure_and_tee() {
        let mut seen = Vec::new();
        {
            let mut sink = Tee::new(MemorySink::default(), |r: &ProgressRecord| seen.push(r.tag));
            sink.report(&record(ReportTag::Initial)).unwrap();
            sink.report(&record(ReportTag::Improvement)).unwrap();
            assert_eq!(sink.first.records().len(), 2);
        }
        assert_eq!(seen, vec![ReportTag::Initial, ReportTag::Improvement]);
    }

    #[test]
    fn test_file_sink_appends() {
        let path = std::env::temp_dir().join(format!("boatga-report-{}.txt", std::process::id()));
        let _ = std::fs::remove_file(&path);

        FileSink::append(&path)
            .unwrap()
            .report(&record(ReportTag::Initial))
            .unwrap();
        FileSink::append(&path)
            .unwrap()
            .report(&record(ReportTag::Final))
            .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(contents, "[i] 4 10,01 1,00 250 0\n[!] 4 10,01 1,00 250 0\n");
    }

    #[test]
    fn test_unscored_individual_has_no_record() {
        let individual = Individual::new(1, Vec::new(), 0);
        assert!(ProgressRecord::from_individual(ReportTag::Initial, &individual).is_err());
    }
}
