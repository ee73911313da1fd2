//! Events Layer - 故障日志
//!
//! EventLogPort 的 tracing 实现

mod tracing_log;

pub use tracing_log::TracingEventLog;
