//! 链路表
//!
//! 集中持有所有链路，提供发送、轮询接收与推送排空。发送方与接收方
//! 通过端点句柄访问，第三方无法向链路入队。

use crate::comp::{ComponentId, Event};
use crate::error::ConfigError;
use crate::link::link::{DeliveryMode, Endpoint, InFlight, Link, LinkHandle, LinkId};
use crate::sim::Tick;
use tracing::{debug, trace};

/// 链路统计信息
#[derive(Debug, Default, Clone, Copy)]
pub struct LinkStats {
    pub sent_events: u64,
    pub delivered_events: u64,
}

/// 链路表
#[derive(Debug, Default)]
pub struct LinkTable {
    links: Vec<Link>,
    pub stats: LinkStats,
}

impl LinkTable {
    /// 新建一条链路，端点待绑定。
    pub fn add_link(&mut self, latency: Tick) -> LinkId {
        let id = LinkId(self.links.len());
        debug!(?id, ?latency, "创建链路");
        self.links.push(Link::new(id, latency));
        id
    }

    /// 绑定链路的一端。每端只能绑定一次。
    pub(crate) fn bind(
        &mut self,
        link: LinkId,
        side: u8,
        component: ComponentId,
        component_name: &str,
        port: &str,
        mode: DeliveryMode,
    ) -> Result<LinkHandle, ConfigError> {
        let l = self.links.get_mut(link.0).expect("link exists");
        let slot = &mut l.ends[side as usize];
        if slot.is_some() {
            return Err(ConfigError::PortBound {
                component: component_name.to_string(),
                port: port.to_string(),
            });
        }
        *slot = Some(Endpoint {
            component,
            port: port.to_string(),
            mode,
        });
        trace!(?link, side, ?component, port, ?mode, "绑定链路端点");
        Ok(LinkHandle::new(link, side))
    }

    /// 发送事件：入队到对端方向，交付 tick = now + latency。
    /// 事件所有权随之转移。
    pub fn send(&mut self, handle: LinkHandle, ev: Box<dyn Event>, now: Tick) {
        let l = &mut self.links[handle.link.0];
        let due = now.saturating_add(l.latency);
        trace!(link = ?handle.link, from_side = handle.side, ?due, "发送事件");
        self.stats.sent_events += 1;
        l.queues[opposite(handle.side) as usize].push_back(InFlight { due, ev });
    }

    /// 非阻塞轮询：返回最老的已到期事件，没有则返回 None（这不是错误）。
    pub fn recv(&mut self, handle: LinkHandle, now: Tick) -> Option<Box<dyn Event>> {
        let l = &mut self.links[handle.link.0];
        let q = &mut l.queues[handle.side as usize];
        if q.front().is_some_and(|f| f.due <= now) {
            let item = q.pop_front().expect("front then pop");
            self.stats.delivered_events += 1;
            trace!(link = ?handle.link, side = handle.side, "轮询取得事件");
            Some(item.ev)
        } else {
            None
        }
    }

    /// 取出所有到期且接收端为推送模式的事件，按链路编号及入队顺序
    /// 返回（确定性交付顺序）。
    pub fn drain_pushed(&mut self, now: Tick) -> Vec<(ComponentId, LinkHandle, Box<dyn Event>)> {
        let mut out = Vec::new();
        for l in &mut self.links {
            for side in 0..2u8 {
                let Some(end) = &l.ends[side as usize] else {
                    continue;
                };
                if end.mode != DeliveryMode::Push {
                    continue;
                }
                let owner = end.component;
                let q = &mut l.queues[side as usize];
                while q.front().is_some_and(|f| f.due <= now) {
                    let item = q.pop_front().expect("front then pop");
                    self.stats.delivered_events += 1;
                    trace!(link = ?l.id, port = %end.port, "推送到期事件");
                    out.push((owner, LinkHandle::new(l.id, side), item.ev));
                }
            }
        }
        out
    }

    /// 链路对端的组件（若已绑定）。用于 `setup()` 阶段的对等发现。
    pub fn peer_of(&self, handle: LinkHandle) -> Option<ComponentId> {
        self.links[handle.link.0].ends[opposite(handle.side) as usize]
            .as_ref()
            .map(|e| e.component)
    }

    pub fn latency(&self, link: LinkId) -> Tick {
        self.links[link.0].latency
    }

    /// 指定端点上仍在途的事件数。
    pub fn in_flight(&self, handle: LinkHandle) -> usize {
        self.links[handle.link.0].queues[handle.side as usize].len()
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

fn opposite(side: u8) -> u8 {
    1 - side
}
