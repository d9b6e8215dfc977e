//! 链路模块
//!
//! 此模块包含链路抽象：有界有序的双端通道、链路表和端口绑定。

// 子模块声明
mod link;
mod ports;
mod table;

// 重新导出公共接口
pub use link::{DeliveryMode, Link, LinkHandle, LinkId};
pub use ports::Ports;
pub use table::{LinkStats, LinkTable};
