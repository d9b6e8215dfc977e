//! 错误类型
//!
//! 定义配置阶段与运行阶段的错误分类。

use thiserror::Error;

/// 配置错误：在任何 tick 执行之前出现，直接终止整个运行。
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown port {port:?} on component {component:?}")]
    UnknownPort { component: String, port: String },

    #[error("port {port:?} on component {component:?} is already bound")]
    PortBound { component: String, port: String },

    #[error("unknown component {0:?} in topology")]
    UnknownComponent(String),

    #[error("duplicate component name {0:?} in topology")]
    DuplicateComponent(String),

    #[error("unknown element kind {0:?}")]
    UnknownKind(String),

    #[error("mandatory parameter {0:?} is missing")]
    MissingParam(String),

    #[error("parameter {key:?} has invalid value {value:?}")]
    BadParam { key: String, value: String },

    #[error("mandatory slot {0:?} has no populated entries")]
    EmptySlot(String),

    #[error("invalid clock rate {0:?}")]
    BadRate(String),

    #[error("invalid link latency {0:?}")]
    BadLatency(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// 仿真运行错误。
#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// 内核状态机被以错误的顺序驱动（例如未配置就运行）。
    #[error("kernel is in state {actual:?}, expected {expected:?}")]
    State {
        expected: &'static str,
        actual: &'static str,
    },
}
