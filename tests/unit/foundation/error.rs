use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        MoodError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        MoodError::embedding("x")
            .to_string()
            .contains("embedding failure:")
    );
    assert!(
        MoodError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert!(MoodError::render("x").to_string().contains("render error:"));
}

#[test]
fn not_initialized_names_the_provider() {
    let err = MoodError::not_initialized("hashing");
    assert_eq!(
        err.to_string(),
        "embedding provider 'hashing' is not initialized"
    );
}

#[test]
fn degenerate_vector_reports_lengths() {
    let err = MoodError::DegenerateVector { len_a: 5, len_b: 8 };
    assert!(err.to_string().contains("len 5 vs 8"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = MoodError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
