//! 装配体
//!
//! 持有全部组件与链路表。组件被派发时暂时取出，避免 `&mut self`
//! 与 `&mut component` 的重叠借用。

use std::fmt;

use crate::comp::component::Component;
use crate::comp::id::ComponentId;
use crate::link::LinkTable;

/// 装配体：组件容器 + 链路表。
#[derive(Default)]
pub struct Assembly {
    components: Vec<Option<Box<dyn Component>>>,
    pub links: LinkTable,
}

impl fmt::Debug for Assembly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Assembly")
            .field("components", &self.components.len())
            .field("links", &self.links)
            .finish()
    }
}

impl Assembly {
    pub fn new() -> Assembly {
        Assembly::default()
    }

    /// 下一个待分配的组件标识符（即插入位置）。
    pub fn next_id(&self) -> ComponentId {
        ComponentId(self.components.len())
    }

    /// 插入一个组件。组件的 id 必须与 [`Assembly::next_id`] 一致。
    pub fn insert(&mut self, comp: Box<dyn Component>) -> ComponentId {
        let id = comp.id();
        assert_eq!(id, self.next_id(), "component id must match slot");
        self.components.push(Some(comp));
        id
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// 暂时取出一个组件用于派发，用完必须放回。
    pub fn take(&mut self, idx: usize) -> Box<dyn Component> {
        self.components[idx].take().expect("component exists")
    }

    pub fn put_back(&mut self, idx: usize, comp: Box<dyn Component>) {
        debug_assert!(self.components[idx].is_none());
        self.components[idx] = Some(comp);
    }

    /// 只读访问（测试与报告用）。
    pub fn get(&self, id: ComponentId) -> Option<&dyn Component> {
        self.components
            .get(id.0)
            .and_then(|c| c.as_deref())
    }
}
