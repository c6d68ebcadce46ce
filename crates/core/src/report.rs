use std::fmt;
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        })
    }
}

/// Sink for every line the missing check reports.
pub trait AuditLogger {
    fn log(&self, message: &str, level: LogLevel);
}

/// Forwards report lines to `tracing` under the `missing_check` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl AuditLogger for TracingLogger {
    fn log(&self, message: &str, level: LogLevel) {
        match level {
            LogLevel::Info => tracing::info!(target: "missing_check", "{}", message),
            LogLevel::Warn => tracing::warn!(target: "missing_check", "{}", message),
            LogLevel::Error => tracing::error!(target: "missing_check", "{}", message),
        }
    }
}

/// Keeps report lines in memory, for embedding hosts and tests.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    lines: Mutex<Vec<(LogLevel, String)>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<(LogLevel, String)> {
        self.lines
            .lock()
            .map(|l| l.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    pub fn messages_at(&self, level: LogLevel) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m)
            .collect()
    }
}

impl AuditLogger for MemoryLogger {
    fn log(&self, message: &str, level: LogLevel) {
        let mut lines = self
            .lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        lines.push((level, message.to_string()));
    }
}

impl<L: AuditLogger + ?Sized> AuditLogger for &L {
    fn log(&self, message: &str, level: LogLevel) {
        (**self).log(message, level)
    }
}
