use crate::comp::Params;
use crate::error::ConfigError;

#[test]
fn defaulted_lookups_never_fail() {
    let mut params = Params::new();
    params.insert("clock", "500MHz");

    assert_eq!(params.find_str("clock", "1GHz"), "500MHz");
    assert_eq!(params.find_str("missing", "1GHz"), "1GHz");
    assert_eq!(params.find_u64("clockTicks", 10).expect("default"), 10);
}

#[test]
fn present_but_unparsable_value_is_a_configuration_error() {
    let mut params = Params::new();
    params.insert("clockTicks", "many");

    let err = params.find_u64("clockTicks", 10).expect_err("bad value");
    assert!(matches!(err, ConfigError::BadParam { .. }));
}

#[test]
fn mandatory_lookup_fails_loudly_when_missing() {
    let params = Params::new();
    let err = params.find_mandatory_str("clock").expect_err("missing");
    assert!(matches!(err, ConfigError::MissingParam(_)));

    let err = params.find_mandatory_u64("clockTicks").expect_err("missing");
    assert!(matches!(err, ConfigError::MissingParam(_)));
}

#[test]
fn mandatory_lookup_succeeds_when_present() {
    let params: Params = [("clockTicks", "3")].into_iter().collect();
    assert_eq!(params.find_mandatory_u64("clockTicks").expect("present"), 3);
}
