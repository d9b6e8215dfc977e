//! 链式拓扑生成
//!
//! 生成 n 个计数组件首尾相连的拓扑描述：c_i 的 port_a 接 c_{i+1}
//! 的 port_b，闭环时最后一个接回第一个。闭环保证每个组件都能收到
//! 事件并达到自己的计数上限。

use crate::topo::spec::{ComponentSpec, EndpointSpec, LinkSpec, TopologySpec};
use std::collections::HashMap;

/// 链式拓扑配置选项
#[derive(Debug, Clone)]
pub struct LineOpts {
    pub n: usize,
    pub clock: String,
    pub clock_ticks: u64,
    pub latency: String,
    /// 是否把链的尾部接回头部（闭环）。
    pub close_ring: bool,
    pub max_ticks: Option<u64>,
}

impl Default for LineOpts {
    fn default() -> Self {
        Self {
            n: 4,
            clock: "1GHz".to_string(),
            clock_ticks: 10,
            latency: "5ns".to_string(),
            close_ring: true,
            max_ticks: None,
        }
    }
}

/// 生成链式拓扑描述。
pub fn line_spec(opts: &LineOpts) -> TopologySpec {
    let params: HashMap<String, String> = [
        ("clock".to_string(), opts.clock.clone()),
        ("clockTicks".to_string(), opts.clock_ticks.to_string()),
    ]
    .into_iter()
    .collect();

    let components = (0..opts.n)
        .map(|i| ComponentSpec {
            name: format!("c{i}"),
            kind: "counting".to_string(),
            params: params.clone(),
            slots: Vec::new(),
        })
        .collect();

    let mut links = Vec::new();
    let pairs = if opts.close_ring { opts.n } else { opts.n.saturating_sub(1) };
    for i in 0..pairs {
        let next = (i + 1) % opts.n;
        links.push(LinkSpec {
            name: Some(format!("link{i}")),
            latency: opts.latency.clone(),
            a: EndpointSpec {
                component: format!("c{i}"),
                port: "port_a".to_string(),
            },
            b: EndpointSpec {
                component: format!("c{next}"),
                port: "port_b".to_string(),
            },
        });
    }

    TopologySpec {
        schema_version: 1,
        components,
        links,
        max_ticks: opts.max_ticks,
    }
}
