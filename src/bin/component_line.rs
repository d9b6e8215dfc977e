//! 链式拓扑仿真
//!
//! n 个计数组件首尾相连成环（或开链），事件沿环转发。

use clap::Parser;
use ticksim_rs::comp::Registry;
use ticksim_rs::topo::{self, LineOpts, line_spec};

#[derive(Debug, Parser)]
#[command(name = "component_line", about = "链式拓扑仿真：n 个计数组件串联")]
struct Args {
    /// 组件数量
    #[arg(long, default_value_t = 4)]
    n: usize,
    /// 每个组件收到多少个事件后投票结束
    #[arg(long, default_value_t = 10)]
    clock_ticks: u64,
    /// 组件时钟频率
    #[arg(long, default_value = "1GHz")]
    clock: String,
    /// 单向链路传播时延
    #[arg(long, default_value = "5ns")]
    latency: String,
    /// 不闭环（开链：首尾组件的闲置端口不接线）
    #[arg(long)]
    open: bool,
    /// tick 上限（保险丝）
    #[arg(long, default_value_t = 10_000_000)]
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

    let spec = line_spec(&LineOpts {
        n: args.n,
        clock: args.clock.clone(),
        clock_ticks: args.clock_ticks,
        latency: args.latency.clone(),
        close_ring: !args.open,
        max_ticks: Some(args.max_ticks),
    });

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
