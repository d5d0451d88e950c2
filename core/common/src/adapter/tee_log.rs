//! 複数の Log へ同じレコードを配る Log 実装

use crate::error::Error;
use crate::ports::outbound::{Log, LogRecord};
use std::sync::Arc;

/// すべての sink に書き出し、最初に失敗したエラーを返す（残りの sink には書き続ける）
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
