use crate::comp::Registry;
use crate::error::ConfigError;
use crate::topo::{self, LineOpts, TopologySpec, line_spec};

fn parse(json: &str) -> TopologySpec {
    serde_json::from_str(json).expect("valid topology json")
}

#[test]
fn topology_json_parses_with_defaults() {
    let spec = parse(
        r#"
{
    "schema_version": 1,
    "components": [
        { "name": "c0", "kind": "counting" },
        { "name": "c1", "kind": "counting", "params": { "clockTicks": "3" } }
    ]
}
        "#,
    );

    assert_eq!(spec.schema_version, 1);
    assert_eq!(spec.components.len(), 2);
    assert!(spec.components[0].params.is_empty());
    assert!(spec.components[0].slots.is_empty());
    assert!(spec.links.is_empty());
    assert_eq!(spec.max_ticks, None);
}

#[test]
fn topology_json_round_trips() {
    let spec = line_spec(&LineOpts::default());
    let text = serde_json::to_string(&spec).expect("serialize");
    let back: TopologySpec = serde_json::from_str(&text).expect("deserialize");

    assert_eq!(back.components.len(), spec.components.len());
    assert_eq!(back.links.len(), spec.links.len());
    assert_eq!(back.links[0].latency, spec.links[0].latency);
}

#[test]
fn unknown_component_kind_fails_configuration() {
    let registry = Registry::builtin();
    let spec = parse(
        r#"
{ "schema_version": 1, "components": [ { "name": "c0", "kind": "frobnicator" } ] }
        "#,
    );
    let err = topo::build(&spec, &registry).expect_err("unknown kind");
    assert!(matches!(err, ConfigError::UnknownKind(_)));
}

#[test]
fn link_to_unknown_component_fails_configuration() {
    let registry = Registry::builtin();
    let spec = parse(
        r#"
{
    "schema_version": 1,
    "components": [ { "name": "c0", "kind": "counting" } ],
    "links": [ {
        "latency": "5ns",
        "a": { "component": "c0", "port": "port_a" },
        "b": { "component": "ghost", "port": "port_b" }
    } ]
}
        "#,
    );
    let err = topo::build(&spec, &registry).expect_err("unknown component");
    assert!(matches!(err, ConfigError::UnknownComponent(_)));
}

#[test]
fn duplicate_component_names_fail_configuration() {
    let registry = Registry::builtin();
    let spec = parse(
        r#"
{
    "schema_version": 1,
    "components": [
        { "name": "c0", "kind": "counting" },
        { "name": "c0", "kind": "counting" }
    ]
}
        "#,
    );
    let err = topo::build(&spec, &registry).expect_err("duplicate name");
    assert!(matches!(err, ConfigError::DuplicateComponent(_)));
}

#[test]
fn bad_latency_string_fails_configuration() {
    let registry = Registry::builtin();
    let spec = parse(
        r#"
{
    "schema_version": 1,
    "components": [
        { "name": "c0", "kind": "counting" },
        { "name": "c1", "kind": "counting" }
    ],
    "links": [ {
        "latency": "soon",
        "a": { "component": "c0", "port": "port_a" },
        "b": { "component": "c1", "port": "port_b" }
    } ]
}
        "#,
    );
    let err = topo::build(&spec, &registry).expect_err("bad latency");
    assert!(matches!(err, ConfigError::BadLatency(_)));
}

#[test]
fn two_links_on_one_port_fail_configuration() {
    let registry = Registry::builtin();
    let spec = parse(
        r#"
{
    "schema_version": 1,
    "components": [
        { "name": "c0", "kind": "counting" },
        { "name": "c1", "kind": "counting" }
    ],
    "links": [
        {
            "latency": "5ns",
            "a": { "component": "c0", "port": "port_a" },
            "b": { "component": "c1", "port": "port_b" }
        },
        {
            "latency": "5ns",
            "a": { "component": "c0", "port": "port_a" },
            "b": { "component": "c1", "port": "port_a" }
        }
    ]
}
        "#,
    );
    let err = topo::build(&spec, &registry).expect_err("port reused");
    assert!(matches!(err, ConfigError::PortBound { .. }));
}

#[test]
fn line_spec_open_chain_has_one_fewer_link() {
    let ring = line_spec(&LineOpts {
        n: 4,
        ..LineOpts::default()
    });
    assert_eq!(ring.links.len(), 4);

    let open = line_spec(&LineOpts {
        n: 4,
        close_ring: false,
        ..LineOpts::default()
    });
    assert_eq!(open.links.len(), 3);
}
