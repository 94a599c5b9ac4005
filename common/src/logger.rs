use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
}

impl Logger {
    fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        println!(
            "{}",
            format_entry(&timestamp, self.prefix.as_deref(), file, line, message)
        );
    }
}

/// `[timestamp][prefix][file:line] message`, with the prefix block omitted when unset.
pub fn format_entry(
    timestamp: &str,
    prefix: Option<&str>,
    file: &str,
    line: u32,
    message: &str,
) -> String {
    let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
    match prefix {
        Some(prefix) => format!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message),
        None => format!("[{}][{}:{}] {}", timestamp, file_name, line, message),
    }
}

pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix));
}

pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    } else {
        eprintln!("Logger not initialized! Call init_logger() first.");
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_entry_with_prefix() {
        let entry = format_entry("2026-01-02 03:04:05", Some("Desktop"), "src/ui/app.rs", 42, "hello");
        assert_eq!(entry, "[2026-01-02 03:04:05][Desktop][app.rs:42] hello");
    }

    #[test]
    fn test_format_entry_without_prefix_strips_windows_path() {
        let entry = format_entry("ts", None, "src\\games\\board.rs", 7, "placed");
        assert_eq!(entry, "[ts][board.rs:7] placed");
    }
}
