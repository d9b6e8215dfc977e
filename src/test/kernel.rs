use crate::comp::{Assembly, Component, ComponentId};
use crate::link::LinkTable;
use crate::sim::{Kernel, SimState, Tick};
use std::sync::{Arc, Mutex};

/// Probe component logging every tick invocation; deregisters its
/// clock once stop_after is reached.
struct Probe {
    id: ComponentId,
    name: String,
    stop_after: u64,
    vote_at: Option<u64>,
    log: Arc<Mutex<Vec<(u64, usize)>>>,
}

impl Component for Probe {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn tick(&mut self, cycle: Tick, kernel: &mut Kernel, _links: &mut LinkTable) -> bool {
        self.log.lock().expect("log lock").push((cycle.0, self.id.0));
        if self.vote_at.is_some_and(|at| cycle.0 >= at) {
            kernel.votes.ok_to_end(self.id);
        }
        cycle.0 >= self.stop_after
    }
}

fn probe(
    id: usize,
    stop_after: u64,
    vote_at: Option<u64>,
    log: &Arc<Mutex<Vec<(u64, usize)>>>,
) -> Box<Probe> {
    Box::new(Probe {
        id: ComponentId(id),
        name: format!("probe{id}"),
        stop_after,
        vote_at,
        log: Arc::clone(log),
    })
}

#[test]
fn handlers_fire_in_registration_order_within_a_tick() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut kernel = Kernel::new();
    let mut assembly = Assembly::new();

    assembly.insert(probe(0, 2, None, &log));
    assembly.insert(probe(1, 2, None, &log));
    kernel.clocks.register(ComponentId(0), 1);
    kernel.clocks.register(ComponentId(1), 1);

    kernel.run(&mut assembly).expect("run");

    assert_eq!(
        &*log.lock().expect("log lock"),
        &[(1, 0), (1, 1), (2, 0), (2, 1)]
    );
    assert_eq!(kernel.state(), SimState::Finished);
}

#[test]
fn run_without_primaries_ends_when_all_handlers_deactivate() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut kernel = Kernel::new();
    let mut assembly = Assembly::new();

    assembly.insert(probe(0, 3, None, &log));
    assembly.insert(probe(1, 5, None, &log));
    kernel.clocks.register(ComponentId(0), 1);
    kernel.clocks.register(ComponentId(1), 1);

    let stats = kernel.run(&mut assembly).expect("run");

    // Component 0 deregisters at tick 3, component 1 runs to tick 5.
    assert_eq!(kernel.now(), Tick(5));
    assert_eq!(stats.ticks_run, 5);
    assert_eq!(stats.handler_invocations, 3 + 5);
}

#[test]
fn primaries_gate_termination_until_every_vote_is_in() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut kernel = Kernel::new();
    let mut assembly = Assembly::new();

    assembly.insert(probe(0, u64::MAX, Some(2), &log));
    assembly.insert(probe(1, u64::MAX, Some(4), &log));
    kernel.clocks.register(ComponentId(0), 1);
    kernel.clocks.register(ComponentId(1), 1);
    kernel.votes.register_primary(ComponentId(0));
    kernel.votes.register_primary(ComponentId(1));

    kernel.run(&mut assembly).expect("run");

    // Component 0 votes at tick 2 and its flag stays set; the run only
    // ends at the tick boundary where component 1 votes too.
    assert!(kernel.votes.is_ok(ComponentId(0)));
    assert_eq!(kernel.now(), Tick(4));
    assert_eq!(kernel.state(), SimState::Finished);
}

#[test]
fn max_ticks_ceiling_ends_a_run_that_never_votes() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut kernel = Kernel::new();
    let mut assembly = Assembly::new();

    assembly.insert(probe(0, u64::MAX, None, &log));
    kernel.clocks.register(ComponentId(0), 1);
    kernel.votes.register_primary(ComponentId(0));
    kernel.set_max_ticks(7);

    let stats = kernel.run(&mut assembly).expect("run");
    assert_eq!(kernel.now(), Tick(7));
    assert_eq!(stats.ticks_run, 7);
    assert_eq!(kernel.state(), SimState::Finished);
}

#[test]
fn slower_clock_rate_fires_on_period_boundaries_only() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut kernel = Kernel::new();
    let mut assembly = Assembly::new();

    assembly.insert(probe(0, 6, None, &log));
    kernel.clocks.register(ComponentId(0), 2);

    kernel.run(&mut assembly).expect("run");
    assert_eq!(&*log.lock().expect("log lock"), &[(2, 0), (4, 0), (6, 0)]);
}

#[test]
fn finish_is_pure_reporting() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut kernel = Kernel::new();
    let mut assembly = Assembly::new();

    assembly.insert(probe(0, 2, None, &log));
    kernel.clocks.register(ComponentId(0), 1);
    kernel.run(&mut assembly).expect("run");

    let ticks_before = kernel.stats.ticks_run;
    let mut comp = assembly.take(0);
    comp.finish();
    comp.finish();
    assembly.put_back(0, comp);

    assert_eq!(kernel.state(), SimState::Finished);
    assert_eq!(kernel.now(), Tick(2));
    assert_eq!(kernel.stats.ticks_run, ticks_before);
    assert_eq!(log.lock().expect("log lock").len(), 2);
}

#[test]
fn running_a_finished_kernel_is_a_state_error() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut kernel = Kernel::new();
    let mut assembly = Assembly::new();

    assembly.insert(probe(0, 1, None, &log));
    kernel.clocks.register(ComponentId(0), 1);

    kernel.run(&mut assembly).expect("first run");
    assert!(kernel.run(&mut assembly).is_err());
}
