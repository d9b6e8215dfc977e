//! 拓扑构建器
//!
//! 把外部拓扑描述变成装配体：创建链路、登记端口映射、按声明顺序
//! 构造组件。任何配置错误都在第一个 tick 之前浮出并终止整个构建。

use crate::comp::{Assembly, ComponentId, Params, Registry, SlotMap};
use crate::error::ConfigError;
use crate::link::Ports;
use crate::sim::{Kernel, Tick};
use crate::topo::spec::TopologySpec;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// 从 JSON 文件读取拓扑描述。
pub fn load(path: &Path) -> Result<TopologySpec, ConfigError> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// 从拓扑描述构建内核与装配体。
pub fn build(spec: &TopologySpec, registry: &Registry) -> Result<(Kernel, Assembly), ConfigError> {
    info!(
        schema = spec.schema_version,
        components = spec.components.len(),
        links = spec.links.len(),
        "构建拓扑"
    );

    let mut kernel = Kernel::new();
    let mut assembly = Assembly::new();

    // 组件标识符按声明顺序分配，这个顺序同时决定 setup/finish 顺序。
    let mut ids: HashMap<&str, ComponentId> = HashMap::new();
    for (i, c) in spec.components.iter().enumerate() {
        if ids.insert(&c.name, ComponentId(i)).is_some() {
            return Err(ConfigError::DuplicateComponent(c.name.clone()));
        }
    }

    let mut port_maps: Vec<Ports> = spec
        .components
        .iter()
        .enumerate()
        .map(|(i, c)| Ports::new(ComponentId(i), &c.name))
        .collect();

    for l in &spec.links {
        let latency = Tick::parse_latency(&l.latency)?;
        let id_a = *ids
            .get(l.a.component.as_str())
            .ok_or_else(|| ConfigError::UnknownComponent(l.a.component.clone()))?;
        let id_b = *ids
            .get(l.b.component.as_str())
            .ok_or_else(|| ConfigError::UnknownComponent(l.b.component.clone()))?;

        let link = assembly.links.add_link(latency);
        debug!(
            link = ?link,
            a = %format!("{}.{}", l.a.component, l.a.port),
            b = %format!("{}.{}", l.b.component, l.b.port),
            ?latency,
            "登记链路端口"
        );
        port_maps[id_a.0].declare(&l.a.port, link, 0)?;
        port_maps[id_b.0].declare(&l.b.port, link, 1)?;
    }

    for (i, c) in spec.components.iter().enumerate() {
        let id = ComponentId(i);
        let params: Params = c.params.clone().into();

        let mut slot_map = SlotMap::new();
        for s in &c.slots {
            slot_map.entry(s.slot.clone()).or_default().populate(
                s.index,
                s.kind.clone(),
                s.params.clone().into(),
            );
        }

        debug!(component = %c.name, kind = %c.kind, "构造组件");
        let factory = registry.component_factory(&c.kind)?;
        let comp = factory(
            id,
            &c.name,
            &params,
            &mut port_maps[i],
            &slot_map,
            registry,
            &mut assembly.links,
            &mut kernel,
        )?;
        assembly.insert(comp);
    }

    if let Some(max) = spec.max_ticks {
        kernel.set_max_ticks(max);
    }

    info!("拓扑构建完成");
    Ok((kernel, assembly))
}
