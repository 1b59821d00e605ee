use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SpringError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        SpringError::config("x")
            .to_string()
            .contains("config error:")
    );
    assert!(
        SpringError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SpringError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
