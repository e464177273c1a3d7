//! site_monitor library: declarative DNS and HTTP health checks
//!
//! This library reads site descriptors from JSON or YAML sources and verifies
//! each one against the live network: forward resolution, reverse DNS, MX
//! records and HTTP responses. Every failure is collected into a single list;
//! the run never stops early.
//!
//! # Example
//!
//! ```no_run
//! use site_monitor::{run_checks, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     files: vec![std::path::PathBuf::from("sites.yaml")],
//!     max_concurrency: 8,
//!     ..Default::default()
//! };
//!
//! let report = run_checks(config).await?;
//! println!("{} problems found", report.errors.len());
//! std::process::exit(report.exit_code());
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod checks;
pub mod config;
pub mod dispatch;
pub mod dns;
pub mod error_handling;
pub mod initialization;
mod run;
pub mod site;
mod utils;

// Re-export public API
pub use checks::{CheckContext, CheckKind};
pub use config::{Config, LogFormat, LogLevel};
pub use dispatch::{dispatch_entry, EntryOutcome};
pub use dns::{DnsLookup, HickoryLookup};
pub use error_handling::{ConfigLoadError, DispatchError, ErrorSink, LookupError};
pub use run::{load_source, parse_document, run_checks, run_sources, RunReport, SourceFormat};
pub use site::SiteEntry;
pub use utils::TimingStats;
