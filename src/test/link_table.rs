use crate::comp::{ComponentId, CountEvent, Event, downcast_event};
use crate::error::ConfigError;
use crate::link::{LinkHandle, LinkTable, Ports};
use crate::sim::Tick;

fn two_ended_link(latency: Tick) -> (LinkTable, LinkHandle, LinkHandle) {
    let mut links = LinkTable::default();
    let link = links.add_link(latency);

    let mut ports_a = Ports::new(ComponentId(0), "a");
    ports_a.declare("out", link, 0).expect("declare");
    let mut ports_b = Ports::new(ComponentId(1), "b");
    ports_b.declare("in", link, 1).expect("declare");

    let ha = ports_a.connect(&mut links, "out").expect("connect a");
    let hb = ports_b.connect(&mut links, "in").expect("connect b");
    (links, ha, hb)
}

fn payload(ev: Box<dyn Event>) -> u64 {
    downcast_event::<CountEvent>(ev).expect("count event").payload
}

#[test]
fn events_arrive_in_send_order_exactly_once() {
    let (mut links, ha, hb) = two_ended_link(Tick(3));

    links.send(ha, Box::new(CountEvent::new(1)), Tick(1));
    links.send(ha, Box::new(CountEvent::new(2)), Tick(1));
    links.send(ha, Box::new(CountEvent::new(3)), Tick(2));

    assert!(links.recv(hb, Tick(3)).is_none());

    assert_eq!(payload(links.recv(hb, Tick(4)).expect("first")), 1);
    assert_eq!(payload(links.recv(hb, Tick(4)).expect("second")), 2);
    assert!(links.recv(hb, Tick(4)).is_none());

    assert_eq!(payload(links.recv(hb, Tick(5)).expect("third")), 3);
    assert!(links.recv(hb, Tick(5)).is_none());
    assert_eq!(links.stats.sent_events, 3);
    assert_eq!(links.stats.delivered_events, 3);
}

#[test]
fn delivery_tick_is_at_least_send_tick_plus_latency() {
    let (mut links, ha, hb) = two_ended_link(Tick(5));

    links.send(ha, Box::new(CountEvent::new(9)), Tick(10));
    for now in 10..15 {
        assert!(links.recv(hb, Tick(now)).is_none(), "early at {now}");
    }
    assert!(links.recv(hb, Tick(15)).is_some());
}

#[test]
fn directions_are_independent_queues() {
    let (mut links, ha, hb) = two_ended_link(Tick(1));

    links.send(ha, Box::new(CountEvent::new(1)), Tick(1));
    links.send(hb, Box::new(CountEvent::new(2)), Tick(1));

    assert_eq!(payload(links.recv(hb, Tick(2)).expect("toward b")), 1);
    assert_eq!(payload(links.recv(ha, Tick(2)).expect("toward a")), 2);
}

#[test]
fn empty_poll_is_absence_not_error() {
    let (mut links, _ha, hb) = two_ended_link(Tick(1));
    assert!(links.recv(hb, Tick(100)).is_none());
    assert_eq!(links.stats.delivered_events, 0);
}

#[test]
fn peer_of_reports_opposite_endpoint() {
    let (links, ha, hb) = two_ended_link(Tick(1));
    assert_eq!(links.peer_of(ha), Some(ComponentId(1)));
    assert_eq!(links.peer_of(hb), Some(ComponentId(0)));
}

#[test]
fn connect_unknown_port_is_a_configuration_error() {
    let mut links = LinkTable::default();
    let link = links.add_link(Tick(1));
    let mut ports = Ports::new(ComponentId(0), "a");
    ports.declare("out", link, 0).expect("declare");

    let err = ports.connect(&mut links, "typo").expect_err("unknown port");
    assert!(matches!(err, ConfigError::UnknownPort { .. }));
}

#[test]
fn double_connect_is_a_configuration_error() {
    let mut links = LinkTable::default();
    let link = links.add_link(Tick(1));
    let mut ports = Ports::new(ComponentId(0), "a");
    ports.declare("out", link, 0).expect("declare");

    ports.connect(&mut links, "out").expect("first connect");
    let err = ports.connect(&mut links, "out").expect_err("second connect");
    assert!(matches!(err, ConfigError::PortBound { .. }));
}

#[test]
fn declaring_two_links_on_one_port_is_a_configuration_error() {
    let mut links = LinkTable::default();
    let l0 = links.add_link(Tick(1));
    let l1 = links.add_link(Tick(1));
    let mut ports = Ports::new(ComponentId(0), "a");
    ports.declare("out", l0, 0).expect("declare");
    let err = ports.declare("out", l1, 0).expect_err("port reused");
    assert!(matches!(err, ConfigError::PortBound { .. }));
}

#[test]
fn count_event_encode_decode_round_trips() {
    let ev = CountEvent::new(42);
    let bytes = ev.encode().expect("encode");
    assert_eq!(CountEvent::decode(&bytes).expect("decode"), ev);
}
