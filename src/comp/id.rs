//! 标识符类型
//!
//! 定义组件实例的唯一标识符。由构建器在构造期分配，此后不可变。

/// 组件标识符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(pub usize);
