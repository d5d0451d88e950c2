//! 人間向けログ（LogRecord → stderr に要点のみ出力）
//!
//! `-v` 指定時のトラブルシュート用。fields の全量は出さず要点のみ（巨大化防止）。

use crate::error::Error;
use crate::ports::outbound::{Log, LogLevel, LogRecord};

const FIELDS_SUMMARY_MAX: usize = 400;

/// fields の要点だけを短い文字列にする
fn fields_summary(record: &LogRecord) -> String {
    let Some(fields) = record.fields.as_ref().filter(|f| !f.is_empty()) else {
        return String::new();
    };
    let s = fields
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join(" ");
    if s.len() <= FIELDS_SUMMARY_MAX {
        return s;
    }
    let truncated = s.chars().take(FIELDS_SUMMARY_MAX).collect::<String>();
    format!("{}... (len={})", truncated, s.len())
}

/// 1 行に整形する（`[cmdrun] info: command finished exit_code=0 ...`）
pub fn format_line(record: &LogRecord) -> String {
    let summary = fields_summary(record);
    if summary.is_empty() {
        format!("[cmdrun] {}: {}", record.level.as_str(), record.message)
    } else {
        format!(
            "[cmdrun] {}: {} {}",
            record.level.as_str(),
            record.message,
            summary
        )
    }
}

/// stderr へ整形して出力する Log 実装
///
/// `max_level` より詳細なレコードは捨てる。
#[derive(Debug, Clone)]
pub struct StderrLog {
    max_level: LogLevel,
}

impl StderrLog {
    pub fn new(max_level: LogLevel) -> Self {
        Self { max_level }
    }
}

impl Default for StderrLog {
    fn default() -> Self {
        Self::new(LogLevel::Debug)
    }
}

impl Log for StderrLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        if record.level <= self.max_level {
            eprintln!("{}", format_line(record));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_without_fields() {
        let rec = LogRecord::new(LogLevel::Warn, "log file unavailable");
        assert_eq!(format_line(&rec), "[cmdrun] warn: log file unavailable");
    }

    #[test]
    fn test_format_line_with_fields() {
        let rec = LogRecord::new(LogLevel::Info, "command finished")
            .field("exit_code", 42)
            .field("outcome", "exited");
        assert_eq!(
            format_line(&rec),
            "[cmdrun] info: command finished exit_code=42 outcome=\"exited\""
        );
    }

    #[test]
    fn test_long_fields_are_truncated() {
        let rec = LogRecord::new(LogLevel::Debug, "command started")
            .field("command", "x".repeat(1000));
        let line = format_line(&rec);
        assert!(line.contains("... (len="), "{}", line);
        assert!(line.len() < 600);
    }
}
