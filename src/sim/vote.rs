//! 终止投票注册表
//!
//! 主组件（primary component）注册后默认投"不要结束"；只有当所有
//! 主组件都翻转为"可以结束"时，内核才允许运行终止。标志一旦置真
//! 便不再被内核复位（单调性）。

use crate::comp::ComponentId;
use tracing::{debug, warn};

/// 主组件投票注册表。
#[derive(Debug, Default)]
pub struct VoteRegistry {
    // 保持注册顺序，便于确定性的调试输出。
    entries: Vec<(ComponentId, bool)>,
}

impl VoteRegistry {
    /// 注册一个主组件。初始标志为 false（"不要结束"）。
    pub fn register_primary(&mut self, component: ComponentId) {
        if self.entries.iter().any(|(id, _)| *id == component) {
            warn!(?component, "组件重复注册为主组件，忽略");
            return;
        }
        debug!(?component, "注册主组件");
        self.entries.push((component, false));
    }

    /// 组件宣布自己的完成条件已满足。未注册的组件投票会被忽略。
    pub fn ok_to_end(&mut self, component: ComponentId) {
        match self.entries.iter_mut().find(|(id, _)| *id == component) {
            Some((_, flag)) => {
                if !*flag {
                    debug!(?component, "主组件投票：可以结束");
                }
                *flag = true;
            }
            None => warn!(?component, "非主组件尝试投票，忽略"),
        }
    }

    /// 是否所有主组件都已同意结束。没有主组件时返回 false，
    /// 由内核用其它条件（时钟全部注销、tick 上限）判定结束。
    pub fn all_ok(&self) -> bool {
        !self.entries.is_empty() && self.entries.iter().all(|(_, flag)| *flag)
    }

    pub fn has_primaries(&self) -> bool {
        !self.entries.is_empty()
    }

    pub fn is_ok(&self, component: ComponentId) -> bool {
        self.entries
            .iter()
            .any(|(id, flag)| *id == component && *flag)
    }
}
