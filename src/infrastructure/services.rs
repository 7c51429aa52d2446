use crate::config::{AppConfig, CONFIG_ELEMENT_ID};
use crate::domain::catalog::Quantity;
use crate::domain::logging::{LogEntry, LogLevel, Logger, TimeProvider};

/// Logger writing to the browser console
pub struct ConsoleLogger {
    min_level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    pub fn accepts(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, entry: LogEntry) {
        if !self.accepts(entry.level) {
            return;
        }
        let formatted = entry.render(&BrowserTimeProvider.format_timestamp(entry.timestamp));
        match entry.level {
            LogLevel::Trace | LogLevel::Debug => {
                gloo::console::debug!(formatted);
            }
            LogLevel::Info => {
                gloo::console::info!(formatted);
            }
            LogLevel::Warn => {
                gloo::console::warn!(formatted);
            }
            LogLevel::Error => {
                gloo::console::error!(formatted);
            }
        }
    }
}

/// Wall clock backed by `Date.now()`
#[derive(Default)]
pub struct BrowserTimeProvider;

impl BrowserTimeProvider {
    pub fn new() -> Self {
        Self
    }
}

impl TimeProvider for BrowserTimeProvider {
    fn current_timestamp(&self) -> u64 {
        js_sys::Date::now() as u64
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        let date = js_sys::Date::new(&(timestamp as f64).into());
        format!(
            "{:02}:{:02}:{:02}.{:03}",
            date.get_hours(),
            date.get_minutes(),
            date.get_seconds(),
            date.get_milliseconds()
        )
    }
}

/// Sample quantity drawn from `Math.random()`
pub fn random_sample_quantity(_index: usize) -> Quantity {
    Quantity::from_unit_sample(js_sys::Math::random())
}

/// Reads page overrides from the config element, falling back to defaults
/// when the element is missing or malformed.
pub fn load_page_config() -> AppConfig {
    let raw = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    match raw {
        Some(json) => AppConfig::from_json(&json).unwrap_or_else(|err| {
            // Logger is not installed yet at this point.
            gloo::console::warn!(format!("{}, using defaults", err));
            AppConfig::default()
        }),
        None => AppConfig::default(),
    }
}
