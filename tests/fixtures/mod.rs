use std::path::PathBuf;

pub fn get_test_fixture_path(language: &str, fixture_name: Option<&str>) -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(language);
    match fixture_name {
        Some(name) => dir.join(name),
        None => dir,
    }
}
