//! Shared tracing setup for the prospect binaries.
//!
//! Everything goes to stderr so log lines never interleave with rendered
//! chat output on stdout.
//!
//! # Quick Start
//!
//! ```no_run
//! use prospect_observability::ObservabilityConfig;
//!
//! let config = ObservabilityConfig::new("prospect-cli").with_log_level("debug");
//! prospect_observability::init(config)?;
//!
//! tracing::info!("client started");
//! # Ok::<(), prospect_observability::ObservabilityError>(())
//! ```
//!
//! # Environment Variables
//!
//! - `PROSPECT_LOG` or `RUST_LOG` - Log level filter

pub mod config;
pub mod error;
pub mod telemetry;

pub use config::ObservabilityConfig;
pub use error::ObservabilityError;
pub use telemetry::{init, init_from_env};
