//! 组件模块
//!
//! 此模块包含组件模型：组件与子组件 trait、事件、参数、装配体、
//! 元素注册表以及具体示例元素（计数组件、奇偶过滤子组件）。

// 子模块声明
mod assembly;
mod component;
mod counting;
mod even_odd;
mod event;
mod id;
mod params;
mod registry;
mod subcomp;

// 重新导出公共接口
pub use assembly::Assembly;
pub use component::Component;
pub use counting::CountingComponent;
pub use even_odd::{EvenOddComponent, EvenOddFilter};
pub use event::{CountEvent, Event, downcast_event};
pub use id::ComponentId;
pub use params::Params;
pub use registry::{ElementDoc, ParamDoc, PortDoc, Registry, SlotDoc};
pub use subcomp::{SlotEntry, SlotInfo, SlotMap, SubComponent};
