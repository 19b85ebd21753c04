#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use shutter_core::ShutterError;
use shutter_server::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
server:
  listen: "0.0.0.0:8080"
  outputz_dir: "/tmp/out" # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(matches!(err, ShutterError::Config(_)));
}

#[test]
fn ok_minimal_config() {
    let ok = "version: 1\n";
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.listen, "0.0.0.0:8080");
    assert_eq!(cfg.server.default_image, "/app/images/sample.jpg");
    assert_eq!(cfg.server.output_dir, "/app/output");
}

#[test]
fn rejects_unsupported_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert!(err.to_string().contains("version"));
}

#[test]
fn rejects_unparseable_listen() {
    let bad = r#"
version: 1
server:
  listen: "not-an-addr"
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(matches!(err, ShutterError::Config(_)));
}

#[test]
fn rejects_empty_output_dir() {
    let bad = r#"
version: 1
server:
  output_dir: ""
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(err.to_string().contains("output_dir"));
}
