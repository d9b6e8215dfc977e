//! 拓扑描述
//!
//! 外部声明：存在哪些组件、端口如何成对连成链路、插槽如何填充。
//! 在配置期消费一次，此后不再变化。

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopologySpec {
    pub schema_version: u32,
    pub components: Vec<ComponentSpec>,
    #[serde(default)]
    pub links: Vec<LinkSpec>,
    /// 外部强加的 tick 上限。
    #[serde(default)]
    pub max_ticks: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentSpec {
    pub name: String,
    /// 注册表中的元素类型名。
    pub kind: String,
    #[serde(default)]
    pub params: HashMap<String, String>,
    #[serde(default)]
    pub slots: Vec<SlotEntrySpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotEntrySpec {
    pub slot: String,
    pub index: usize,
    pub kind: String,
    #[serde(default)]
    pub params: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkSpec {
    #[serde(default)]
    pub name: Option<String>,
    /// 单向传播时延，如 "5ns"。
    pub latency: String,
    pub a: EndpointSpec,
    pub b: EndpointSpec,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointSpec {
    pub component: String,
    pub port: String,
}
