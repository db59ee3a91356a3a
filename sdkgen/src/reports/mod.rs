//! Report data structures for commands.
//!
//! Operations build reports, commands render them to an [`Output`] target.

mod check;
mod endpoints;
mod generate;
mod output;

pub use check::CheckReport;
pub use endpoints::{EndpointEntry, EndpointsReport};
pub use generate::{
    GenerateReport, GenerationResult, PreviewFile, PreviewResult, TargetReport, WrittenResult,
};
pub use output::{Report, TerminalOutput};
