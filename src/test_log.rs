//! Warning capture for tests that count user-visible warnings

use std::sync::{Mutex, Once};

static WARNINGS: Mutex<Vec<String>> = Mutex::new(Vec::new());

struct WarningCapture;

impl log::Log for WarningCapture {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::Level::Warn
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut warnings) = WARNINGS.lock() {
                warnings.push(record.args().to_string());
            }
        }
    }

    fn flush(&self) {}
}

/// Number of warnings logged so far that mention `needle`.
///
/// Installs the capturing logger on first use. Callers pick a needle no
/// other test logs.
pub fn warnings_about(needle: &str) -> usize {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        static LOGGER: WarningCapture = WarningCapture;
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(log::LevelFilter::Warn);
    });
    WARNINGS
        .lock()
        .map(|w| w.iter().filter(|m| m.contains(needle)).count())
        .unwrap_or(0)
}
