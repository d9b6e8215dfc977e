//! 奇偶过滤元素
//!
//! 父组件在强制插槽 `slot_` 里装若干过滤子组件；每个 tick 驱动全部
//! 已填充插槽并发出一个负载递增的计数事件。子组件只放行偶数负载，
//! 奇数负载带跟踪日志静默丢弃——丢弃是正常的过滤行为，不是错误，
//! 也不影响终止投票。子组件链路的来件经推送交付进入父组件的消息
//! 处理器，在那里计数并在到达上限时投票。

use crate::comp::component::Component;
use crate::comp::event::{CountEvent, Event, downcast_event};
use crate::comp::id::ComponentId;
use crate::comp::params::Params;
use crate::comp::registry::{ElementDoc, ParamDoc, PortDoc, Registry, SlotDoc};
use crate::comp::subcomp::{SlotMap, SubComponent};
use crate::error::ConfigError;
use crate::link::{LinkHandle, LinkTable, Ports};
use crate::sim::{Kernel, Tick};
use tracing::{debug, info, trace};

pub const COMPONENT_DOC: ElementDoc = ElementDoc {
    kind: "even_odd",
    version: [1, 0, 0],
    description: "Drives filtering sub-components in slot_, counts deliveries",
    params: &[
        ParamDoc {
            name: "clock",
            description: "Component clock rate",
            default: "1GHz",
        },
        ParamDoc {
            name: "clockTicks",
            description: "Number of delivered events before ending",
            default: "5",
        },
    ],
    ports: &[],
    slots: &[SlotDoc {
        name: "slot_",
        description: "Slot to hold filtering connection sub-components",
        kind: "even_odd_filter",
    }],
};

pub const FILTER_DOC: ElementDoc = ElementDoc {
    kind: "even_odd_filter",
    version: [1, 0, 0],
    description: "Connection sub-component forwarding only even payloads",
    params: &[],
    ports: &[PortDoc {
        name: "slot_<n>",
        description: "Message port, bound per populated slot index",
    }],
    slots: &[],
};

/// 奇偶过滤子组件：拥有一条链路，按负载奇偶性决定是否转发。
pub struct EvenOddFilter {
    parent: ComponentId,
    slot: usize,
    link: Option<LinkHandle>,
}

impl EvenOddFilter {
    /// 子组件工厂。
    pub fn create(parent: ComponentId) -> Box<dyn SubComponent> {
        debug!(?parent, "构造过滤子组件");
        Box::new(EvenOddFilter {
            parent,
            slot: 0,
            link: None,
        })
    }

    pub fn handle(&self) -> Option<LinkHandle> {
        self.link
    }
}

impl SubComponent for EvenOddFilter {
    fn start(
        &mut self,
        slot: usize,
        _params: &Params,
        ports: &mut Ports,
        links: &mut LinkTable,
    ) -> Result<(), ConfigError> {
        trace!(parent = ?self.parent, slot, "初始化过滤子组件");
        self.slot = slot;
        // 推送模式：来件直接进父组件的消息处理器。
        self.link = Some(ports.connect_push(links, &format!("slot_{slot}"))?);
        Ok(())
    }

    fn send(&mut self, ev: Box<dyn Event>, now: Tick, links: &mut LinkTable) {
        let Some(link) = self.link else {
            return;
        };
        match downcast_event::<CountEvent>(ev) {
            Some(count) if count.payload % 2 == 0 => {
                info!(
                    parent = ?self.parent,
                    slot = self.slot,
                    payload = count.payload,
                    "负载为偶数，发送"
                );
                links.send(link, count, now);
            }
            Some(count) => {
                info!(
                    parent = ?self.parent,
                    slot = self.slot,
                    payload = count.payload,
                    "负载为奇数，丢弃"
                );
            }
            None => {
                trace!(parent = ?self.parent, slot = self.slot, "非计数事件，丢弃");
            }
        }
    }

    fn tick(&mut self, cycle: Tick, _links: &mut LinkTable) {
        trace!(parent = ?self.parent, slot = self.slot, cycle = cycle.0, "子组件 tick");
    }
}

/// 奇偶过滤父组件。
pub struct EvenOddComponent {
    id: ComponentId,
    name: String,
    clock_ticks: u64,
    send_count: u64,
    recv_count: u64,
    slots: Vec<(usize, Box<dyn SubComponent>)>,
}

impl EvenOddComponent {
    /// 组件工厂。`slot_` 是强制插槽：没有任何填充项即致命配置错误。
    pub fn build(
        id: ComponentId,
        name: &str,
        params: &Params,
        ports: &mut Ports,
        slots: &SlotMap,
        registry: &Registry,
        links: &mut LinkTable,
        kernel: &mut Kernel,
    ) -> Result<Box<dyn Component>, ConfigError> {
        let clock = params.find_str("clock", "1GHz");
        let clock_ticks = params.find_u64("clockTicks", 5)?;
        debug!(component = name, clock, clock_ticks, "读取组件参数");

        let info = slots.get("slot_").filter(|s| !s.is_empty());
        let Some(info) = info else {
            return Err(ConfigError::EmptySlot("slot_".to_string()));
        };

        // 按索引升序构造已填充插槽的子组件，跳过空洞。
        let mut built = Vec::new();
        for idx in info.indices() {
            let entry = info.get(idx).expect("populated index");
            debug!(component = name, slot = idx, kind = %entry.kind, "装配插槽");
            let mut sub = registry.subcomponent_factory(&entry.kind)?(id);
            sub.start(idx, &entry.params, ports, links)?;
            built.push((idx, sub));
        }
        info!(component = name, slots = built.len(), "插槽装配完成");

        let period = Tick::parse_rate(&clock)?;
        kernel.clocks.register(id, period);
        kernel.votes.register_primary(id);

        Ok(Box::new(EvenOddComponent {
            id,
            name: name.to_string(),
            clock_ticks,
            send_count: 0,
            recv_count: 0,
            slots: built,
        }))
    }

    pub fn recv_count(&self) -> u64 {
        self.recv_count
    }
}

impl Component for EvenOddComponent {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    #[tracing::instrument(skip(self, _kernel, links), fields(component = %self.name, cycle = cycle.0))]
    fn tick(&mut self, cycle: Tick, _kernel: &mut Kernel, links: &mut LinkTable) -> bool {
        trace!("进入时钟处理器");
        for (_, sub) in &mut self.slots {
            sub.tick(cycle, links);
            self.send_count += 1;
            sub.send(Box::new(CountEvent::new(self.send_count)), cycle, links);
        }
        trace!("离开时钟处理器");
        false
    }

    fn on_message(
        &mut self,
        handle: LinkHandle,
        _ev: Box<dyn Event>,
        kernel: &mut Kernel,
        _links: &mut LinkTable,
    ) {
        trace!(component = %self.name, ?handle, "进入消息处理器");
        self.recv_count += 1;
        if self.recv_count >= self.clock_ticks {
            info!(component = %self.name, count = self.recv_count, "收满，投票同意结束");
            kernel.votes.ok_to_end(self.id);
        }
        trace!(component = %self.name, "离开消息处理器");
    }

    fn finish(&mut self) {
        info!(
            component = %self.name,
            sent = self.send_count,
            received = self.recv_count,
            "奇偶组件报告"
        );
    }
}
