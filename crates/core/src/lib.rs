pub mod audit;
pub mod check;
pub mod config;
pub mod error;
pub mod loader;
pub mod logging;
pub mod model;
pub mod report;

pub use audit::{AuditOptions, AuditReport, Auditor, audit};
pub use check::MissingCheck;
pub use config::MissingCheckOptions;
pub use error::{DocscopeError, Result};
pub use report::{AuditLogger, LogLevel, MemoryLogger, TracingLogger};
