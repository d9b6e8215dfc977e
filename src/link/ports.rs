//! 端口映射
//!
//! 构建器为每个组件准备一张端口表（端口名 -> 链路端点），组件在
//! 构造期调用 `connect` 领取句柄。未知端口名或重复领取都是致命的
//! 配置错误。

use crate::comp::ComponentId;
use crate::error::ConfigError;
use crate::link::link::{DeliveryMode, LinkHandle, LinkId};
use crate::link::table::LinkTable;
use std::collections::HashMap;

#[derive(Debug)]
struct PortEntry {
    link: LinkId,
    side: u8,
    bound: bool,
}

/// 组件的端口映射。
#[derive(Debug)]
pub struct Ports {
    component: ComponentId,
    component_name: String,
    entries: HashMap<String, PortEntry>,
}

impl Ports {
    pub fn new(component: ComponentId, component_name: impl Into<String>) -> Ports {
        Ports {
            component,
            component_name: component_name.into(),
            entries: HashMap::new(),
        }
    }

    /// 构建器登记一个端口到链路端点的映射。同名端口重复登记是
    /// 配置错误（拓扑把两条链路接到了同一个端口上）。
    pub fn declare(&mut self, port: &str, link: LinkId, side: u8) -> Result<(), ConfigError> {
        if self.entries.contains_key(port) {
            return Err(ConfigError::PortBound {
                component: self.component_name.clone(),
                port: port.to_string(),
            });
        }
        self.entries.insert(
            port.to_string(),
            PortEntry {
                link,
                side,
                bound: false,
            },
        );
        Ok(())
    }

    /// 拓扑是否给这个端口接了链路。组件用它区分"可选端口没接"
    /// （正常）与"领取了不存在的端口"（配置错误）。
    pub fn is_declared(&self, port: &str) -> bool {
        self.entries.contains_key(port)
    }

    /// 领取端口的轮询端句柄。配置期调用一次。
    pub fn connect(&mut self, links: &mut LinkTable, port: &str) -> Result<LinkHandle, ConfigError> {
        self.connect_mode(links, port, DeliveryMode::Poll)
    }

    /// 领取端口的推送端句柄：到期事件会推送给所属组件的消息处理器。
    pub fn connect_push(
        &mut self,
        links: &mut LinkTable,
        port: &str,
    ) -> Result<LinkHandle, ConfigError> {
        self.connect_mode(links, port, DeliveryMode::Push)
    }

    fn connect_mode(
        &mut self,
        links: &mut LinkTable,
        port: &str,
        mode: DeliveryMode,
    ) -> Result<LinkHandle, ConfigError> {
        let entry = self
            .entries
            .get_mut(port)
            .ok_or_else(|| ConfigError::UnknownPort {
                component: self.component_name.clone(),
                port: port.to_string(),
            })?;
        if entry.bound {
            return Err(ConfigError::PortBound {
                component: self.component_name.clone(),
                port: port.to_string(),
            });
        }
        entry.bound = true;
        links.bind(
            entry.link,
            entry.side,
            self.component,
            &self.component_name,
            port,
            mode,
        )
    }
}
