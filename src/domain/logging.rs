use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Log levels, ordered by severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    #[display(fmt = "TRACE")]
    Trace = 0,
    #[display(fmt = "DEBUG")]
    Debug = 1,
    #[display(fmt = " INFO")]
    Info = 2,
    #[display(fmt = " WARN")]
    Warn = 3,
    #[display(fmt = "ERROR")]
    Error = 4,
}

impl LogLevel {
    /// DEBUG for debug builds, INFO for release builds.
    pub fn for_build() -> Self {
        if cfg!(debug_assertions) { LogLevel::Debug } else { LogLevel::Info }
    }
}

/// Layer and subsystem that produced a log line
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum LogComponent {
    #[display(fmt = "DOM:{}", _0)]
    Domain(&'static str),
    #[display(fmt = "APP:{}", _0)]
    Application(&'static str),
    #[display(fmt = "INF:{}", _0)]
    Infrastructure(&'static str),
    #[display(fmt = "PRE:{}", _0)]
    Presentation(&'static str),
}

/// Structured log entry
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: u64,
    pub level: LogLevel,
    pub component: LogComponent,
    pub message: String,
    pub metadata: Option<String>,
}

impl LogEntry {
    pub fn new(level: LogLevel, component: LogComponent, message: &str) -> Self {
        Self {
            timestamp: get_time_provider().current_timestamp(),
            level,
            component,
            message: message.to_string(),
            metadata: None,
        }
    }

    pub fn with_metadata(mut self, metadata: &str) -> Self {
        self.metadata = Some(metadata.to_string());
        self
    }

    /// `[time] LEVEL COMPONENT | message[ | metadata]`
    pub fn render(&self, formatted_time: &str) -> String {
        match &self.metadata {
            Some(metadata) => format!(
                "[{}] {} {} | {} | {}",
                formatted_time, self.level, self.component, self.message, metadata
            ),
            None => format!(
                "[{}] {} {} | {}",
                formatted_time, self.level, self.component, self.message
            ),
        }
    }
}

/// Clock used to stamp log entries and events
pub trait TimeProvider: Send + Sync {
    fn current_timestamp(&self) -> u64;
    fn format_timestamp(&self, timestamp: u64) -> String;
}

/// Sink for structured log entries
pub trait Logger: Send + Sync {
    fn log(&self, entry: LogEntry);

    fn debug(&self, component: LogComponent, message: &str) {
        self.log(LogEntry::new(LogLevel::Debug, component, message));
    }

    fn info(&self, component: LogComponent, message: &str) {
        self.log(LogEntry::new(LogLevel::Info, component, message));
    }

    fn warn(&self, component: LogComponent, message: &str) {
        self.log(LogEntry::new(LogLevel::Warn, component, message));
    }

    fn error(&self, component: LogComponent, message: &str) {
        self.log(LogEntry::new(LogLevel::Error, component, message));
    }
}

use std::sync::OnceLock;
static GLOBAL_LOGGER: OnceLock<Box<dyn Logger + Sync + Send>> = OnceLock::new();
static GLOBAL_TIME_PROVIDER: OnceLock<Box<dyn TimeProvider + Sync + Send>> = OnceLock::new();

/// Install the global logger. Only the first call wins.
pub fn init_logger(logger: Box<dyn Logger + Sync + Send>) {
    let _ = GLOBAL_LOGGER.set(logger);
}

/// Install the global time provider. Only the first call wins.
pub fn init_time_provider(time_provider: Box<dyn TimeProvider + Sync + Send>) {
    let _ = GLOBAL_TIME_PROVIDER.set(time_provider);
}

pub fn get_logger() -> &'static dyn Logger {
    GLOBAL_LOGGER.get().map(|logger| logger.as_ref()).unwrap_or(&NoOpLogger)
}

pub fn get_time_provider() -> &'static dyn TimeProvider {
    GLOBAL_TIME_PROVIDER
        .get()
        .map(|provider| provider.as_ref())
        .unwrap_or(&SequenceTimeProvider)
}

struct NoOpLogger;

impl Logger for NoOpLogger {
    fn log(&self, _entry: LogEntry) {}
}

/// Monotonic counter standing in for a clock outside the browser
struct SequenceTimeProvider;

impl TimeProvider for SequenceTimeProvider {
    fn current_timestamp(&self) -> u64 {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        COUNTER.fetch_add(1, Ordering::SeqCst)
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        format!("{:06}", timestamp)
    }
}

#[macro_export]
macro_rules! log_debug {
    ($component:expr, $($arg:tt)*) => {
        #[cfg(debug_assertions)]
        {
            $crate::domain::logging::get_logger().debug($component, &format!($($arg)*));
        }
    };
}

#[macro_export]
macro_rules! log_info {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::get_logger().info($component, &format!($($arg)*));
    };
}

#[macro_export]
macro_rules! log_warn {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::get_logger().warn($component, &format!($($arg)*));
    };
}

#[macro_export]
macro_rules! log_error {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::get_logger().error($component, &format!($($arg)*));
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_includes_metadata_when_present() {
        let entry = LogEntry {
            timestamp: 0,
            level: LogLevel::Warn,
            component: LogComponent::Infrastructure("Clipboard"),
            message: "copy failed".to_string(),
            metadata: None,
        };
        assert_eq!(entry.render("00:00:00.000"), "[00:00:00.000]  WARN INF:Clipboard | copy failed");

        let entry = entry.with_metadata("text=42");
        assert_eq!(
            entry.render("00:00:00.000"),
            "[00:00:00.000]  WARN INF:Clipboard | copy failed | text=42"
        );
    }

    #[test]
    fn levels_are_ordered_by_severity() {
        assert!(LogLevel::Error > LogLevel::Warn);
        assert!(LogLevel::Debug < LogLevel::Info);
    }
}
