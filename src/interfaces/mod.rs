// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod report_handler;

pub use report_handler::{
    FanOutHandler, LoggingReportHandler, NoOpReportHandler, RecordingHandler, ReportEvent,
    ReportHandler,
};
