//! 子组件与插槽
//!
//! 子组件通过命名、编号的插槽挂到父组件上，拥有自己的链路。来自
//! 该链路的事件经推送交付进入父组件的消息处理器（显式消息传递，
//! 不持有指向父组件的回调指针）。插槽可以稀疏填充；父组件按索引
//! 升序访问已填充的项。

use crate::comp::event::Event;
use crate::comp::params::Params;
use crate::error::ConfigError;
use crate::link::{LinkTable, Ports};
use crate::sim::Tick;
use std::collections::{BTreeMap, HashMap};

/// 子组件接口：以插槽索引和参数初始化、发送事件（可带过滤）、
/// 跟随父组件推进一个时钟 tick。
pub trait SubComponent: Send {
    /// 初始化：领取自己的链路端口。与组件的构造不同，必须显式调用。
    fn start(
        &mut self,
        slot: usize,
        params: &Params,
        ports: &mut Ports,
        links: &mut LinkTable,
    ) -> Result<(), ConfigError>;

    /// 经自己的链路发送事件。实现可以按内容过滤；丢弃不是错误。
    fn send(&mut self, ev: Box<dyn Event>, now: Tick, links: &mut LinkTable);

    /// 由父组件的时钟处理器逐 tick 驱动。
    fn tick(&mut self, _cycle: Tick, _links: &mut LinkTable) {}
}

/// 插槽中的一项：子组件类型与参数。
#[derive(Debug, Clone)]
pub struct SlotEntry {
    pub kind: String,
    pub params: Params,
}

/// 一个命名插槽的稀疏填充表。
#[derive(Debug, Clone, Default)]
pub struct SlotInfo {
    entries: BTreeMap<usize, SlotEntry>,
}

impl SlotInfo {
    pub fn populate(&mut self, index: usize, kind: impl Into<String>, params: Params) {
        self.entries.insert(
            index,
            SlotEntry {
                kind: kind.into(),
                params,
            },
        );
    }

    pub fn is_populated(&self, index: usize) -> bool {
        self.entries.contains_key(&index)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_populated(&self) -> Option<usize> {
        self.entries.keys().next_back().copied()
    }

    /// 已填充的索引，升序。
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.keys().copied()
    }

    pub fn get(&self, index: usize) -> Option<&SlotEntry> {
        self.entries.get(&index)
    }
}

/// 组件全部插槽：插槽名 -> 填充表。
pub type SlotMap = HashMap<String, SlotInfo>;
