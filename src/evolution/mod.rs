pub mod builder;
pub mod challenge;
pub mod launcher;
pub mod options;
pub mod report;

pub use builder::EvolutionLauncherBuilder;
pub use challenge::{Challenge, FitnessFormula};
pub use launcher::{EvolutionLauncher, EvolutionResult, EvolutionState, Termination};
pub use options::{EvolutionOptions, EvolutionOptionsBuilder};
pub use report::{FileSink, MemorySink, ProgressRecord, ReportSink, ReportTag, Tee, TracingSink};
