//! 拓扑文件仿真
//!
//! 读取 JSON 拓扑描述文件，构建装配体并运行仿真。
//! `--list` 打印注册表中全部元素的声明表。

use clap::Parser;
use std::path::PathBuf;
use ticksim_rs::comp::Registry;
use ticksim_rs::topo::{self, TopologySpec};

#[derive(Debug, Parser)]
#[command(name = "topology_sim", about = "运行 JSON 拓扑描述的 tick 仿真")]
struct Args {
    /// 拓扑描述文件（JSON）
    #[arg(long, required_unless_present = "list")]
    topology: Option<PathBuf>,

    /// 覆盖拓扑文件中的 tick 上限
    #[arg(long)]
    max_ticks: Option<u64>,

    /// 打印注册表中全部元素后退出
    #[arg(long)]
    list: bool,
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
    let registry = Registry::builtin();

    if args.list {
        for doc in registry.docs() {
            println!(
                "{} v{}.{}.{} - {}",
                doc.kind, doc.version[0], doc.version[1], doc.version[2], doc.description
            );
            for p in doc.params {
                println!("  param {} (default {:?}): {}", p.name, p.default, p.description);
            }
            for p in doc.ports {
                println!("  port {}: {}", p.name, p.description);
            }
            for s in doc.slots {
                println!("  slot {} [{}]: {}", s.name, s.kind, s.description);
            }
        }
        return;
    }

    let path = args.topology.expect("clap enforces --topology without --list");
    let mut spec: TopologySpec = match topo::load(&path) {
        Ok(spec) => spec,
        Err(e) => {
            eprintln!("failed to load {}: {e}", path.display());
            std::process::exit(1);
        }
    };
    if args.max_ticks.is_some() {
        spec.max_ticks = args.max_ticks;
    }

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
        "done @ tick {}, state={:?}, ticks={}, handlers={}, pushed={}, sent={}, delivered={}",
        kernel.now().0,
        kernel.state(),
        stats.ticks_run,
        stats.handler_invocations,
        stats.pushed_events,
        assembly.links.stats.sent_events,
        assembly.links.stats.delivered_events
    );
}
