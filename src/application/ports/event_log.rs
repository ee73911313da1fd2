//! Event Log Port - 注入式日志
//!
//! 组件通过构造函数拿到日志实现，不直接改写全局输出

/// Event Log Port
pub trait EventLogPort: Send + Sync {
    /// 记录一条故障信息（时间戳由实现负责）
    fn log(&self, message: &str);
}
