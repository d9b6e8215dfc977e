//! 链路类型
//!
//! 定义连接恰好两个端点的链路：每个方向一条 FIFO 在途队列，
//! 单向传播时延以 tick 计。端点在配置期绑定一次，此后不可变。

use crate::comp::{ComponentId, Event};
use crate::sim::Tick;
use std::collections::VecDeque;

/// 链路标识符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LinkId(pub usize);

/// 链路端点句柄：命名链路的某一端。只有成功 `connect` 之后才存在，
/// 因此"连接前轮询"无从表达。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LinkHandle {
    pub link: LinkId,
    pub(crate) side: u8,
}

impl LinkHandle {
    pub(crate) fn new(link: LinkId, side: u8) -> LinkHandle {
        LinkHandle { link, side }
    }
}

/// 端点的交付方式。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryMode {
    /// 非阻塞轮询（`recv`）。
    Poll,
    /// 到期时推送给所属组件的消息处理器，先于同 tick 的时钟处理器。
    Push,
}

#[derive(Debug)]
pub(crate) struct Endpoint {
    pub(crate) component: ComponentId,
    pub(crate) port: String,
    pub(crate) mode: DeliveryMode,
}

#[derive(Debug)]
pub(crate) struct InFlight {
    pub(crate) due: Tick,
    pub(crate) ev: Box<dyn Event>,
}

/// 链路：恰好两个端点，每个方向一条 FIFO 在途队列。
#[derive(Debug)]
pub struct Link {
    pub id: LinkId,
    pub latency: Tick,
    pub(crate) ends: [Option<Endpoint>; 2],
    /// queues[side] 保存飞向该端的事件。
    pub(crate) queues: [VecDeque<InFlight>; 2],
}

impl Link {
    pub(crate) fn new(id: LinkId, latency: Tick) -> Link {
        Link {
            id,
            latency,
            ends: [None, None],
            queues: [VecDeque::new(), VecDeque::new()],
        }
    }
}
