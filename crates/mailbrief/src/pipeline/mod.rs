pub mod error;
pub mod progress;
pub mod runner;

pub use error::PipelineError;
pub use progress::{NoopProgress, ProcessPhase, ProgressEvent, ProgressReporter, TracingProgress};
pub use runner::{EmailPipeline, ProcessOutcome};
