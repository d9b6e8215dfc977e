//! 仿真内核
//!
//! 驱动全局 tick 的状态机：`Configuring -> Running -> Draining ->
//! Finished`。每个 tick 先把到期的推送事件交付给所属组件，再按注册
//! 顺序触发到期的时钟处理器；当所有主组件都投票同意后进入排空阶段，
//! 按构造顺序调用每个组件的 `finish()`。

use crate::comp::Assembly;
use crate::error::SimError;
use crate::sim::clock::ClockRegistry;
use crate::sim::tick::Tick;
use crate::sim::vote::VoteRegistry;
use tracing::{debug, info, trace, warn};

/// 内核状态机状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimState {
    Configuring,
    Running,
    Draining,
    Finished,
}

impl SimState {
    fn name(self) -> &'static str {
        match self {
            SimState::Configuring => "Configuring",
            SimState::Running => "Running",
            SimState::Draining => "Draining",
            SimState::Finished => "Finished",
        }
    }
}

/// 运行统计。
#[derive(Debug, Default, Clone, Copy)]
pub struct KernelStats {
    pub ticks_run: u64,
    pub handler_invocations: u64,
    pub pushed_events: u64,
}

/// 仿真内核：全局 tick 计数器、时钟注册表与终止投票注册表的唯一属主。
#[derive(Debug)]
pub struct Kernel {
    cycle: Tick,
    state: SimState,
    pub clocks: ClockRegistry,
    pub votes: VoteRegistry,
    max_ticks: Option<u64>,
    pub stats: KernelStats,
}

impl Default for Kernel {
    fn default() -> Kernel {
        Kernel::new()
    }
}

impl Kernel {
    pub fn new() -> Kernel {
        Kernel {
            cycle: Tick::ZERO,
            state: SimState::Configuring,
            clocks: ClockRegistry::default(),
            votes: VoteRegistry::default(),
            max_ticks: None,
            stats: KernelStats::default(),
        }
    }

    /// 当前全局 tick。组件可读，不可写。
    pub fn now(&self) -> Tick {
        self.cycle
    }

    pub fn state(&self) -> SimState {
        self.state
    }

    /// 外部强加的 tick 上限，防止无主组件且无人投票时死循环。
    pub fn set_max_ticks(&mut self, max: u64) {
        self.max_ticks = Some(max);
    }

    /// 结束配置阶段：按构造顺序调用每个组件的 `setup()`，然后进入
    /// `Running`。此后拓扑不再变化。
    pub fn start(&mut self, assembly: &mut Assembly) -> Result<(), SimError> {
        self.expect_state(SimState::Configuring)?;
        info!(components = assembly.len(), "配置完成，初始化组件");

        for idx in 0..assembly.len() {
            let mut comp = assembly.take(idx);
            trace!(component = %comp.name(), "setup");
            comp.setup(self, &mut assembly.links);
            assembly.put_back(idx, comp);
        }

        self.state = SimState::Running;
        Ok(())
    }

    /// 运行仿真直到终止条件满足。尚在配置阶段时会先执行 [`Kernel::start`]。
    pub fn run(&mut self, assembly: &mut Assembly) -> Result<KernelStats, SimError> {
        if self.state() == SimState::Configuring {
            self.start(assembly)?;
        }
        self.expect_state(SimState::Running)?;
        info!("▶️  仿真开始运行");

        while self.state() == SimState::Running {
            self.cycle = Tick(self.cycle.0 + 1);
            self.stats.ticks_run += 1;
            trace!(cycle = self.cycle.0, "推进全局 tick");

            self.deliver_pushed(assembly);
            self.fire_clocks(assembly);

            if self.votes.all_ok() {
                debug!(cycle = self.cycle.0, "所有主组件同意结束");
                self.drain(assembly);
            } else if !self.votes.has_primaries() && !self.clocks.any_active() {
                debug!(cycle = self.cycle.0, "无主组件且所有时钟已注销");
                self.drain(assembly);
            } else if self.max_ticks.is_some_and(|max| self.cycle.0 >= max) {
                warn!(cycle = self.cycle.0, "到达 tick 上限，强制结束");
                self.drain(assembly);
            }
        }

        info!(
            ticks = self.stats.ticks_run,
            handlers = self.stats.handler_invocations,
            pushed = self.stats.pushed_events,
            "✅ 仿真完成"
        );
        Ok(self.stats)
    }

    /// 推送交付阶段：按链路编号顺序取出所有到期的推送事件，交给
    /// 所属组件的消息处理器。先于本 tick 的任何时钟处理器执行。
    fn deliver_pushed(&mut self, assembly: &mut Assembly) {
        let due = assembly.links.drain_pushed(self.cycle);
        for (owner, handle, ev) in due {
            self.stats.pushed_events += 1;
            trace!(?owner, ?handle, "推送交付事件");
            let mut comp = assembly.take(owner.0);
            comp.on_message(handle, ev, self, &mut assembly.links);
            assembly.put_back(owner.0, comp);
        }
    }

    /// 时钟触发阶段：按注册顺序触发到期处理器；处理器返回 true
    /// 表示请求停止监听，对应注册项随即被注销。
    fn fire_clocks(&mut self, assembly: &mut Assembly) {
        let due = self.clocks.due_handlers(self.cycle);
        for (handle, owner) in due {
            self.stats.handler_invocations += 1;
            let mut comp = assembly.take(owner.0);
            let done = comp.tick(self.cycle, self, &mut assembly.links);
            assembly.put_back(owner.0, comp);
            if done {
                debug!(?owner, "处理器请求停止监听");
                self.clocks.unregister(handle);
            }
        }
    }

    /// 排空阶段：按构造顺序调用每个组件的 `finish()` 恰好一次。
    /// `finish` 的签名不提供链路访问，纯报告用途。
    fn drain(&mut self, assembly: &mut Assembly) {
        self.state = SimState::Draining;
        info!(cycle = self.cycle.0, "进入排空阶段");

        for idx in 0..assembly.len() {
            let mut comp = assembly.take(idx);
            comp.finish();
            assembly.put_back(idx, comp);
        }

        self.state = SimState::Finished;
    }

    fn expect_state(&self, expected: SimState) -> Result<(), SimError> {
        let actual = self.state();
        if actual != expected {
            return Err(SimError::State {
                expected: expected.name(),
                actual: actual.name(),
            });
        }
        Ok(())
    }
}
