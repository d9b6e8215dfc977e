//! 奇偶过滤仿真
//!
//! 两个奇偶组件各在 slot_ 的 0 号位装一个过滤子组件，两个子组件的
//! 链路对接。每个 tick 双方各发一个负载递增的计数事件，子组件只放
//! 行偶数负载；收满 clockTicks 个事件后投票结束。

use clap::Parser;
use std::collections::HashMap;
use ticksim_rs::comp::Registry;
use ticksim_rs::topo::{self, ComponentSpec, EndpointSpec, LinkSpec, SlotEntrySpec, TopologySpec};

#[derive(Debug, Parser)]
#[command(name = "even_odd", about = "奇偶过滤仿真：子组件只转发偶数负载")]
struct Args {
    /// 每个组件收到多少个事件后投票结束
    #[arg(long, default_value_t = 5)]
    clock_ticks: u64,
    /// 组件时钟频率
    #[arg(long, default_value = "1GHz")]
    clock: String,
    /// 单向链路传播时延
    #[arg(long, default_value = "5ns")]
    latency: String,
    /// tick 上限（保险丝）
    #[arg(long, default_value_t = 1_000_000)]
    max_ticks: u64,
}

fn main() {
    // 初始化 tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    let args = Args::parse();

    let params: HashMap<String, String> = [
        ("clock".to_string(), args.clock.clone()),
        ("clockTicks".to_string(), args.clock_ticks.to_string()),
    ]
    .into_iter()
    .collect();

    let component = |name: &str| ComponentSpec {
        name: name.to_string(),
        kind: "even_odd".to_string(),
        params: params.clone(),
        slots: vec![SlotEntrySpec {
            slot: "slot_".to_string(),
            index: 0,
            kind: "even_odd_filter".to_string(),
            params: HashMap::new(),
        }],
    };

    let spec = TopologySpec {
        schema_version: 1,
        components: vec![component("component0"), component("component1")],
        links: vec![LinkSpec {
            name: Some("link0".to_string()),
            latency: args.latency.clone(),
            a: EndpointSpec {
                component: "component0".to_string(),
                port: "slot_0".to_string(),
            },
            b: EndpointSpec {
                component: "component1".to_string(),
                port: "slot_0".to_string(),
            },
        }],
        max_ticks: Some(args.max_ticks),
    };

    let registry = Registry::builtin();
    let (mut kernel, mut assembly) = match topo::build(&spec, &registry) {
        Ok(built) => built,
        Err(e) => {
            eprintln!("configuration error: {e}");
            std::process::exit(1);
        }
    };

    let stats = match kernel.run(&mut assembly) {
        Ok(stats) => stats,
        Err(e) => {
            eprintln!("simulation error: {e}");
            std::process::exit(1);
        }
    };

    println!(
        "done @ tick {}, state={:?}, handlers={}, pushed={}, sent={}",
        kernel.now().0,
        kernel.state(),
        stats.handler_invocations,
        stats.pushed_events,
        assembly.links.stats.sent_events
    );
}
