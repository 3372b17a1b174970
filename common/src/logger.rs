use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Info,
    Debug,
}

pub struct Logger {
    prefix: Option<String>,
    verbose: bool,
}

impl Logger {
    fn new(prefix: Option<String>, verbose: bool) -> Self {
        Self { prefix, verbose }
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level == LogLevel::Info || self.verbose
    }

    pub fn format(&self, file: &str, line: u32, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        if let Some(ref prefix) = self.prefix {
            format!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message)
        } else {
            format!("[{}][{}:{}] {}", timestamp, file_name, line, message)
        }
    }

    pub fn log(&self, level: LogLevel, file: &str, line: u32, message: &str) {
        if self.enabled(level) {
            eprintln!("{}", self.format(file, line, message));
        }
    }
}

/// Later calls are ignored; the first configuration wins.
pub fn init_logger(prefix: Option<String>, verbose: bool) {
    LOGGER.get_or_init(|| Logger::new(prefix, verbose));
}

/// No-op until [`init_logger`] has been called.
pub fn log(level: LogLevel, file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(level, file, line, message);
    }
}

pub fn debug_enabled() -> bool {
    LOGGER.get().is_some_and(|logger| logger.enabled(LogLevel::Debug))
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::LogLevel::Info, file!(), line!(), &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        if $crate::logger::debug_enabled() {
            $crate::logger::log($crate::logger::LogLevel::Debug, file!(), line!(), &format!($($arg)*))
        }
    };
}
