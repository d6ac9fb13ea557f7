use super::*;

#[test]
fn constructor_helpers_map_to_variants() {
    assert!(matches!(
        TinselError::validation("x"),
        TinselError::Validation(_)
    ));
    assert!(matches!(TinselError::asset("x"), TinselError::Asset(_)));
    assert!(matches!(TinselError::export("x"), TinselError::Export(_)));
    assert!(matches!(TinselError::serde("x"), TinselError::Serde(_)));
}

#[test]
fn display_includes_category_prefix() {
    assert_eq!(
        TinselError::validation("bad input").to_string(),
        "validation error: bad input"
    );
    assert_eq!(
        TinselError::export("ffmpeg died").to_string(),
        "export error: ffmpeg died"
    );
}

#[test]
fn anyhow_errors_wrap_transparently() {
    let e: TinselError = anyhow::anyhow!("io exploded").into();
    assert_eq!(e.to_string(), "io exploded");
}
