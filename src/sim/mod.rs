//! 仿真核心模块
//!
//! 此模块包含 tick 驱动仿真的核心组件：仿真时间、时钟注册表、
//! 终止投票注册表和仿真内核。

// 子模块声明
mod clock;
mod kernel;
mod tick;
mod vote;

// 重新导出公共接口
pub use clock::{ClockHandle, ClockRegistry};
pub use kernel::{Kernel, KernelStats, SimState};
pub use tick::Tick;
pub use vote::VoteRegistry;
