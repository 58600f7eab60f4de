use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        PackError::invalid_descriptor("x")
            .to_string()
            .contains("invalid descriptor:")
    );
    assert!(
        PackError::no_admissible_layout("x")
            .to_string()
            .contains("no admissible layout:")
    );
    assert!(
        PackError::invalid_options("x")
            .to_string()
            .contains("invalid options:")
    );
    assert!(
        PackError::discovery("x")
            .to_string()
            .contains("discovery error:")
    );
}

#[test]
fn degenerate_layout_reports_dimensions() {
    let err = PackError::DegenerateLayout {
        columns: 0,
        rows: 7,
    };
    assert_eq!(err.to_string(), "degenerate layout: 0x7 is not admissible");
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = PackError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
