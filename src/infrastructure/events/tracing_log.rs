//! Tracing Event Log
//!
//! 把注入的日志转发到 tracing，时间戳由 subscriber 负责

use crate::application::ports::EventLogPort;

/// 以 ERROR 级别写入 tracing 的事件日志
#[derive(Debug, Clone, Default)]
pub struct TracingEventLog {
    component: &'static str,
}

impl TracingEventLog {
    pub fn new(component: &'static str) -> Self {
        Self { component }
    }
}

impl EventLogPort for TracingEventLog {
    fn log(&self, message: &str) {
        tracing::error!(component = self.component, "{}", message);
    }
}

