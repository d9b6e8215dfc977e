//! 计数组件
//!
//! 最小的教学组件：注册一个时钟和主组件身份，每个 tick 轮询
//! `port_b`；收到事件就递增计数、和 `clockTicks` 上限比较，到达上限
//! 时投票同意结束，随后把收到的事件原样转发到 `port_a`。轮询为空
//! 是正常情况，当个 tick 什么都不发。

use crate::comp::component::Component;
use crate::comp::event::CountEvent;
use crate::comp::id::ComponentId;
use crate::comp::params::Params;
use crate::comp::registry::{ElementDoc, ParamDoc, PortDoc, Registry};
use crate::comp::subcomp::SlotMap;
use crate::error::ConfigError;
use crate::link::{LinkHandle, LinkTable, Ports};
use crate::sim::{Kernel, Tick};
use tracing::{debug, info, trace};

/// 计数组件
pub struct CountingComponent {
    id: ComponentId,
    name: String,
    clock_ticks: u64,
    tick_count: u64,
    port_a: Option<LinkHandle>,
    port_b: Option<LinkHandle>,
}

impl CountingComponent {
    pub const DOC: ElementDoc = ElementDoc {
        kind: "counting",
        version: [1, 0, 0],
        description: "Clocked counting element: polls port_b, forwards on port_a",
        params: &[
            ParamDoc {
                name: "clock",
                description: "Component clock rate",
                default: "1GHz",
            },
            ParamDoc {
                name: "clockTicks",
                description: "Number of received events before ending",
                default: "10",
            },
        ],
        ports: &[
            PortDoc {
                name: "port_a",
                description: "Send side",
            },
            PortDoc {
                name: "port_b",
                description: "Polled receive side",
            },
        ],
        slots: &[],
    };

    /// 组件工厂。领取两个端口、注册时钟与主组件身份。
    pub fn build(
        id: ComponentId,
        name: &str,
        params: &Params,
        ports: &mut Ports,
        _slots: &SlotMap,
        _registry: &Registry,
        links: &mut LinkTable,
        kernel: &mut Kernel,
    ) -> Result<Box<dyn Component>, ConfigError> {
        let clock = params.find_str("clock", "1GHz");
        let clock_ticks = params.find_u64("clockTicks", 10)?;
        debug!(component = name, clock, clock_ticks, "读取组件参数");

        // 端口可以不接线（链的端点组件）；接了线就必须领取成功。
        let port_a = if ports.is_declared("port_a") {
            Some(ports.connect(links, "port_a")?)
        } else {
            None
        };
        let port_b = if ports.is_declared("port_b") {
            Some(ports.connect(links, "port_b")?)
        } else {
            None
        };

        let period = Tick::parse_rate(&clock)?;
        kernel.clocks.register(id, period);
        kernel.votes.register_primary(id);
        info!(component = name, ?id, period, "计数组件构造完成");

        Ok(Box::new(CountingComponent {
            id,
            name: name.to_string(),
            clock_ticks,
            tick_count: 0,
            port_a,
            port_b,
        }))
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}

impl Component for CountingComponent {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    /// 在 `port_a` 上播种一个初始事件，让一对互联的计数组件能够
    /// 开始往返转发。构造期链路尚未接全，所以放在 setup 里。
    fn setup(&mut self, kernel: &mut Kernel, links: &mut LinkTable) {
        let Some(port_a) = self.port_a else {
            debug!(component = %self.name, "port_a 未接线，不播种");
            return;
        };
        if let Some(peer) = links.peer_of(port_a) {
            debug!(component = %self.name, ?peer, "发现对端，播种初始事件");
        }
        links.send(port_a, Box::new(CountEvent::new(0)), kernel.now());
    }

    #[tracing::instrument(skip(self, kernel, links), fields(component = %self.name, cycle = cycle.0))]
    fn tick(&mut self, cycle: Tick, kernel: &mut Kernel, links: &mut LinkTable) -> bool {
        trace!("进入时钟处理器");
        let mut done = false;

        match self.port_b.and_then(|p| links.recv(p, cycle)) {
            None => {
                debug!("链路上没有可取的事件");
            }
            Some(ev) => {
                // 先记账再转发：计数、终止判断在前，发送在后。
                self.tick_count += 1;
                done = self.tick_count == self.clock_ticks;
                info!(
                    count = self.tick_count,
                    of = self.clock_ticks,
                    "收到事件，计数递增"
                );
                if done {
                    info!("到达计数上限，投票同意结束");
                    kernel.votes.ok_to_end(self.id);
                }
                if let Some(port_a) = self.port_a {
                    links.send(port_a, ev, cycle);
                }
            }
        }

        trace!("离开时钟处理器");
        done
    }

    fn finish(&mut self) {
        info!(
            component = %self.name,
            received = self.tick_count,
            "计数组件报告"
        );
    }
}
