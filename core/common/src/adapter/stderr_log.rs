//! 人間向けログ（LogRecord → stderr に 1 行）
//!
//! -v / --verbose のときだけ配線する。fields は JSON のまま後ろに付ける。

use crate::error::Error;
use crate::ports::outbound::{Log, LogLevel, LogRecord};
use std::io::Write;
use std::sync::Arc;

/// stderr へ整形して出力する Log 実装
#[derive(Debug, Clone)]
pub struct StderrLog {
    max_level: LogLevel,
}

impl StderrLog {
    /// max_level より詳細なレコードは捨てる（Debug を渡すと全件）
    pub fn new(max_level: LogLevel) -> Self {
        Self { max_level }
    }
}

/// 1 レコードを人間向けの 1 行にする
pub fn format_line(record: &LogRecord) -> String {
    let mut line = format!("[{}]", record.level.as_str());
    if let Some(ref kind) = record.kind {
        line.push_str(&format!(" {}:", kind));
    }
    line.push(' ');
    line.push_str(&record.message);
    if let Some(ref fields) = record.fields {
        if let Ok(s) = serde_json::to_string(fields) {
            line.push(' ');
            line.push_str(&s);
        }
    }
    line
}

impl Log for StderrLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        if record.level > self.max_level {
            return Ok(());
        }
        let mut err = std::io::stderr().lock();
        writeln!(err, "{}", format_line(record)).map_err(|e| Error::io_msg(e.to_string()))
    }
}

/// 複数の Log へ同じレコードを流す
///
/// 1 つが失敗しても残りには書き、最初のエラーを返す。
pub struct TeeLog {
    sinks: Vec<Arc<dyn Log>>,
}

impl TeeLog {
    pub fn new(sinks: Vec<Arc<dyn Log>>) -> Self {
        Self { sinks }
    }
}

impl Log for TeeLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        let mut first_err = None;
        for sink in &self.sinks {
            if let Err(e) = sink.log(record) {
                first_err.get_or_insert(e);
            }
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::MemoryLog;

    #[test]
    fn test_format_line() {
        let rec = LogRecord::new(LogLevel::Warn, "fetch failed")
            .kind("fetch")
            .field("identifier", "missingno");
        assert_eq!(
            format_line(&rec),
            r#"[warn] fetch: fetch failed {"identifier":"missingno"}"#
        );
    }

    #[test]
    fn test_format_line_minimal() {
        let rec = LogRecord::new(LogLevel::Info, "started");
        assert_eq!(format_line(&rec), "[info] started");
    }

    #[test]
    fn test_tee_writes_to_all() {
        let a = Arc::new(MemoryLog::new());
        let b = Arc::new(MemoryLog::new());
        let tee = TeeLog::new(vec![a.clone(), b.clone()]);
        tee.log(&LogRecord::new(LogLevel::Info, "x")).unwrap();
        assert_eq!(a.records().len(), 1);
        assert_eq!(b.records().len(), 1);
    }

    #[test]
    fn test_stderr_log_filters_level() {
        let log = StderrLog::new(LogLevel::Error);
        // Debug は捨てられるだけで成功扱い
        assert!(log.log(&LogRecord::new(LogLevel::Debug, "quiet")).is_ok());
    }
}
