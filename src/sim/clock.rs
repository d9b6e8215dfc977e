//! 时钟注册表
//!
//! 定义周期性调度源：每个注册项绑定一个组件和一个周期（tick 数），
//! 同一周期内的处理器按注册顺序依次触发。

use crate::comp::ComponentId;
use crate::sim::Tick;
use tracing::{debug, trace};

/// 时钟注册句柄，由 [`ClockRegistry::register`] 返回。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockHandle(usize);

#[derive(Debug)]
struct ClockEntry {
    component: ComponentId,
    /// 周期（tick 数）。周期为 p 的时钟在 cycle % p == 0 时触发。
    period: u64,
    active: bool,
}

/// 时钟注册表：注册顺序即同一 tick 内的触发顺序。
#[derive(Debug, Default)]
pub struct ClockRegistry {
    entries: Vec<ClockEntry>,
}

impl ClockRegistry {
    /// 注册一个组件的时钟处理器。
    pub fn register(&mut self, component: ComponentId, period: u64) -> ClockHandle {
        let handle = ClockHandle(self.entries.len());
        debug!(?component, period, handle = handle.0, "注册时钟处理器");
        self.entries.push(ClockEntry {
            component,
            period: period.max(1),
            active: true,
        });
        handle
    }

    /// 注销一个处理器。组件本身继续存在，只是不再收到 tick。
    pub fn unregister(&mut self, handle: ClockHandle) {
        if let Some(entry) = self.entries.get_mut(handle.0) {
            trace!(handle = handle.0, "注销时钟处理器");
            entry.active = false;
        }
    }

    /// 计算在给定 cycle 到期的处理器，按注册顺序返回。
    pub fn due_handlers(&self, cycle: Tick) -> Vec<(ClockHandle, ComponentId)> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.active && cycle.0 % e.period == 0)
            .map(|(i, e)| (ClockHandle(i), e.component))
            .collect()
    }

    /// 是否还有任何活跃的注册项。
    pub fn any_active(&self) -> bool {
        self.entries.iter().any(|e| e.active)
    }

    pub fn is_active(&self, handle: ClockHandle) -> bool {
        self.entries.get(handle.0).is_some_and(|e| e.active)
    }
}
