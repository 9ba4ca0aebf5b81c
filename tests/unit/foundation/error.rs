use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        RimeError::config("x")
            .to_string()
            .contains("configuration error:")
    );
    assert!(RimeError::render("x").to_string().contains("render error:"));
    assert!(RimeError::encode("x").to_string().contains("encode error:"));
}

#[test]
fn io_error_names_the_path() {
    let err = RimeError::io("/nope/textures", std::io::Error::other("denied"));
    let msg = err.to_string();
    assert!(msg.contains("/nope/textures"));
    assert!(msg.contains("denied"));
}

#[test]
fn only_config_errors_are_recoverable() {
    assert!(!RimeError::config("bad style").is_fatal());
    assert!(RimeError::render("x").is_fatal());
    assert!(RimeError::encode("x").is_fatal());
    assert!(RimeError::io("p", std::io::Error::other("x")).is_fatal());
}

#[test]
fn every_variant_is_built_by_its_helper() {
    let all = [
        RimeError::config("c"),
        RimeError::render("r"),
        RimeError::io("p", std::io::Error::other("i")),
        RimeError::encode("e"),
    ];
    for err in &all {
        let fatal = match err {
            RimeError::Config(_) => false,
            RimeError::Render(_) | RimeError::Io { .. } | RimeError::Encode(_) => true,
        };
        assert_eq!(err.is_fatal(), fatal, "{err}");
    }
}

#[test]
fn io_error_exposes_its_source() {
    use std::error::Error as _;
    let err = RimeError::io("assets", std::io::Error::other("boom"));
    assert_eq!(err.source().map(|s| s.to_string()), Some("boom".to_string()));
}
