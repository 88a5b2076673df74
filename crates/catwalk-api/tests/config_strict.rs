#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use catwalk_api::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
server:
  listen: "0.0.0.0:8080"
throttle:
  working_hourz: { open_hour: 9, close_hour: 18 } # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.listen, "0.0.0.0:8080");
    // Default throttle carries the cats scope.
    assert_eq!(cfg.throttle.scopes[0].name, "low_request");
    assert_eq!(cfg.throttle.working_hours.close_hour, 24);
}

#[test]
fn rejects_wrong_version() {
    let bad = r#"
version: 2
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn rejects_inverted_working_hours() {
    let bad = r#"
version: 1
throttle:
  working_hours: { open_hour: 18, close_hour: 9 }
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn rejects_duplicate_scope_names() {
    let bad = r#"
version: 1
throttle:
  scopes:
    - { name: "low_request", budget: 5 }
    - { name: "low_request", budget: 7 }
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(err.to_string().contains("duplicate throttle scope"));
}

#[test]
fn rejects_zero_budget() {
    let bad = r#"
version: 1
throttle:
  scopes:
    - { name: "low_request", budget: 0 }
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn rejects_duplicate_tickets() {
    let bad = r#"
version: 1
auth:
  tickets:
    - { ticket: "t1", username: "alice" }
    - { ticket: "t1", username: "bob" }
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(err.to_string().contains("duplicate auth ticket"));
}
