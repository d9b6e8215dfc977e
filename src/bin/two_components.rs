//! 双组件仿真
//!
//! 两个计数组件通过两条链路互发事件：c0.port_a -> c1.port_b，
//! c1.port_a -> c0.port_b。各自收满 clockTicks 个事件后投票结束。

use clap::Parser;
use std::collections::HashMap;
use ticksim_rs::comp::Registry;
use ticksim_rs::topo::{self, ComponentSpec, EndpointSpec, LinkSpec, TopologySpec};

#[derive(Debug, Parser)]
#[command(name = "two_components", about = "双组件仿真：两个计数组件互发事件")]
struct Args {
    /// 每个组件收到多少个事件后投票结束
    #[arg(long, default_value_t = 3)]
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

    let link = |name: &str, from: &str, to: &str| LinkSpec {
        name: Some(name.to_string()),
        latency: args.latency.clone(),
        a: EndpointSpec {
            component: from.to_string(),
            port: "port_a".to_string(),
        },
        b: EndpointSpec {
            component: to.to_string(),
            port: "port_b".to_string(),
        },
    };

    let spec = TopologySpec {
        schema_version: 1,
        components: vec![
            ComponentSpec {
                name: "component0".to_string(),
                kind: "counting".to_string(),
                params: params.clone(),
                slots: Vec::new(),
            },
            ComponentSpec {
                name: "component1".to_string(),
                kind: "counting".to_string(),
                params,
                slots: Vec::new(),
            },
        ],
        links: vec![
            link("link0", "component0", "component1"),
            link("link1", "component1", "component0"),
        ],
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
        "done @ tick {}, state={:?}, handlers={}, delivered={}",
        kernel.now().0,
        kernel.state(),
        stats.handler_invocations,
        assembly.links.stats.delivered_events
    );
}
