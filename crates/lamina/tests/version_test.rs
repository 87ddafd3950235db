#[test]
fn version_matches_cargo_pkg_version() {
    assert_eq!(lamina::VERSION, env!("CARGO_PKG_VERSION"));
    assert!(!lamina::VERSION.is_empty());
}
