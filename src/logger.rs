//! Console Logger
//!
//! `log` backend that forwards records to the browser console.

use log::{Level, LevelFilter, Log, Metadata, Record};

struct ConsoleLogger {
    level: Level,
}

static LOGGER: ConsoleLogger = ConsoleLogger { level: Level::Debug };

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record.level(), record.target(), &record.args().to_string());
        let line = wasm_bindgen::JsValue::from_str(&line);
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::log_1(&line),
        }
    }

    fn flush(&self) {}
}

/// `[LEVEL target] message`, with the crate prefix stripped from the target
fn format_record(level: Level, target: &str, message: &str) -> String {
    let target = target.strip_prefix("fourth_wish_ui::").unwrap_or(target);
    format!("[{} {}] {}", level, target, message)
}

/// Install the console logger. Safe to call more than once.
pub fn init() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Debug);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_record_strips_crate_prefix() {
        let line = format_record(Level::Info, "fourth_wish_ui::api::item", "Loaded 3 items");
        assert_eq!(line, "[INFO api::item] Loaded 3 items");
    }

    #[test]
    fn test_format_record_keeps_foreign_target() {
        let line = format_record(Level::Warn, "reqwest", "slow");
        assert_eq!(line, "[WARN reqwest] slow");
    }
}
