use thiserror::Error;

/**
 * Any of these aborts the whole run before a single report line is
 * printed. There is deliberately no recovery path: a partial report
 * with some months missing is worse than no report.
 */
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("cannot read sales data: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed record on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("date '{0}' falls outside the January-March reporting window")]
    MonthOutOfWindow(String),
}
