use crate::comp::ComponentId;
use crate::sim::VoteRegistry;

#[test]
fn registration_starts_as_do_not_end() {
    let mut votes = VoteRegistry::default();
    assert!(!votes.has_primaries());
    assert!(!votes.all_ok());

    votes.register_primary(ComponentId(0));
    assert!(votes.has_primaries());
    assert!(!votes.all_ok());
    assert!(!votes.is_ok(ComponentId(0)));
}

#[test]
fn all_ok_requires_every_primary() {
    let mut votes = VoteRegistry::default();
    votes.register_primary(ComponentId(0));
    votes.register_primary(ComponentId(1));

    votes.ok_to_end(ComponentId(0));
    assert!(!votes.all_ok());

    votes.ok_to_end(ComponentId(1));
    assert!(votes.all_ok());
}

#[test]
fn ok_to_end_is_monotonic_and_idempotent() {
    let mut votes = VoteRegistry::default();
    votes.register_primary(ComponentId(0));

    votes.ok_to_end(ComponentId(0));
    votes.ok_to_end(ComponentId(0));
    assert!(votes.is_ok(ComponentId(0)));
    assert!(votes.all_ok());
}

#[test]
fn non_primary_vote_is_ignored() {
    let mut votes = VoteRegistry::default();
    votes.register_primary(ComponentId(0));

    votes.ok_to_end(ComponentId(7));
    assert!(!votes.all_ok());
}

#[test]
fn duplicate_registration_is_ignored() {
    let mut votes = VoteRegistry::default();
    votes.register_primary(ComponentId(0));
    votes.ok_to_end(ComponentId(0));

    // Re-registering must not reset the flag.
    votes.register_primary(ComponentId(0));
    assert!(votes.all_ok());
}
