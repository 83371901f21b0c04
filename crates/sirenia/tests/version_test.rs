#[test]
fn version_matches_cargo_pkg_version() {
    assert_eq!(sirenia::VERSION, env!("CARGO_PKG_VERSION"));
    assert!(!sirenia::VERSION.is_empty());
}
