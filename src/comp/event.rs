//! 事件类型
//!
//! 定义链路上交换的事件。事件是只移动（move-only）的：`send` 消耗
//! 事件对象，交付把所有权还给接收方，因此"重复发送已发出的事件"
//! 在类型层面不可表达。

use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;

/// 事件：不可变消息负载。每个具体事件类型提供稳定的编解码对
/// （跨边界序列化契约钩子；进程内交换不经过它）。
pub trait Event: Any + Send + fmt::Debug {
    fn as_any(&self) -> &dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    /// 稳定编码。字节布局由具体事件类型约定（这里用 JSON）。
    fn encode(&self) -> serde_json::Result<Vec<u8>>;
}

/// 将事件向下转型为具体类型，转型失败时丢弃事件。
pub fn downcast_event<T: Event>(ev: Box<dyn Event>) -> Option<Box<T>> {
    ev.into_any().downcast::<T>().ok()
}

/// 携带一个计数负载的事件。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountEvent {
    pub payload: u64,
}

impl CountEvent {
    pub fn new(payload: u64) -> CountEvent {
        CountEvent { payload }
    }

    /// 与 [`Event::encode`] 配对的稳定解码。
    pub fn decode(bytes: &[u8]) -> serde_json::Result<CountEvent> {
        serde_json::from_slice(bytes)
    }
}

impl Event for CountEvent {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    fn encode(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }
}
