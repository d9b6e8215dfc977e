//! 拓扑模块
//!
//! 此模块包含外部拓扑描述（JSON）、从描述到装配体的构建器，
//! 以及程序化的链式拓扑生成。

// 子模块声明
mod build;
mod line;
mod spec;

// 重新导出公共接口
pub use build::{build, load};
pub use line::{LineOpts, line_spec};
pub use spec::{ComponentSpec, EndpointSpec, LinkSpec, SlotEntrySpec, TopologySpec};
