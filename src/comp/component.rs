//! 组件 trait
//!
//! 定义仿真实体接口。组件在配置期构造一次，存活整个运行，随仿真
//! 拆除销毁。时钟处理器与消息处理器总是运行到完成，互不交错。

use crate::comp::event::Event;
use crate::comp::id::ComponentId;
use crate::link::{LinkHandle, LinkTable};
use crate::sim::{Kernel, Tick};

/// 组件接口
pub trait Component: Send {
    /// 获取组件标识符
    fn id(&self) -> ComponentId;

    /// 获取组件名称
    fn name(&self) -> &str;

    /// 所有组件构造完毕、所有链路接好之后、首个 tick 之前调用一次。
    /// 适合放构造期做不了的跨组件初始化（例如对等发现）。
    fn setup(&mut self, _kernel: &mut Kernel, _links: &mut LinkTable) {}

    /// 时钟处理器。返回 true 表示请求停止监听本时钟注册。
    fn tick(&mut self, cycle: Tick, kernel: &mut Kernel, links: &mut LinkTable) -> bool;

    /// 推送模式链路的到期事件交付处理器。事件所有权移交给组件。
    fn on_message(
        &mut self,
        _handle: LinkHandle,
        _ev: Box<dyn Event>,
        _kernel: &mut Kernel,
        _links: &mut LinkTable,
    ) {
    }

    /// 最后一个 tick 之后调用一次，纯报告用途。签名上拿不到链路表，
    /// 因此无法再收发事件。
    fn finish(&mut self) {}
}
