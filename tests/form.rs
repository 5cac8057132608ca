use landing_wasm::form::{validate, Phase};

#[test]
fn validation_trims_and_requires_an_at_sign() {
    assert_eq!(validate("  a@b.com  "), Some("a@b.com"));
    assert_eq!(validate("a@b.com"), Some("a@b.com"));

    assert_eq!(validate(""), None);
    assert_eq!(validate("   "), None);
    assert_eq!(validate("not-an-email"), None);

    // deliberately weak: anything with an '@' passes, the store decides
    assert_eq!(validate("@"), Some("@"));
    assert_eq!(validate("a@"), Some("a@"));
}

#[test]
fn idle_is_the_only_enabled_phase() {
    assert!(!Phase::Idle.disabled());
    assert!(Phase::Submitting.disabled());
    assert!(Phase::Success.disabled());
    assert!(Phase::Failure.disabled());
}

#[test]
fn button_presentation_per_phase() {
    assert_eq!(Phase::Idle.label(), "Join Waitlist");
    assert_eq!(Phase::Submitting.label(), "Join Waitlist");
    assert_eq!(Phase::Success.label(), "Added \u{2713}");
    assert_eq!(Phase::Failure.label(), "Error!");

    assert_eq!(Phase::Idle.color(), None);
    assert_eq!(Phase::Submitting.color(), None);
    assert_eq!(Phase::Success.color(), Some("#4CAF50"));
    assert_eq!(Phase::Failure.color(), Some("#FF4444"));

    // dimmed from submit until the revert window closes
    assert_eq!(Phase::Idle.opacity(), "1");
    assert_eq!(Phase::Submitting.opacity(), "0.7");
    assert_eq!(Phase::Success.opacity(), "0.7");
    assert_eq!(Phase::Failure.opacity(), "0.7");
}

#[test]
fn lifecycle_starts_idle() {
    assert_eq!(Phase::default(), Phase::Idle);
}
