//! テスト用: LogRecord をメモリに溜める Log 実装
//!
//! 他クレートのテストからも使えるよう test-util feature で公開する。

use crate::error::Error;
use crate::ports::outbound::{Log, LogRecord};
use std::sync::Mutex;

/// メモリに溜める Log 実装（テスト用）
#[derive(Debug, Default)]
pub struct MemoryLog {
    records: Mutex<Vec<LogRecord>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<LogRecord> {
        self.records
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    /// message が一致するレコード数
    pub fn count_message(&self, message: &str) -> usize {
        self.records()
            .iter()
            .filter(|r| r.message == message)
            .count()
    }
}

impl Log for MemoryLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        self.records
            .lock()
            .map_err(|e| Error::io_msg(e.to_string()))?
            .push(record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::LogLevel;

    #[test]
    fn test_memory_log() {
        let log = MemoryLog::new();
        log.log(&LogRecord::new(LogLevel::Debug, "a")).unwrap();
        log.log(&LogRecord::new(LogLevel::Debug, "a")).unwrap();
        log.log(&LogRecord::new(LogLevel::Debug, "b")).unwrap();
        assert_eq!(log.records().len(), 3);
        assert_eq!(log.count_message("a"), 2);
    }
}
