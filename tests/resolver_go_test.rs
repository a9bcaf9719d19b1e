//! Go resolver e2e tests
//!
//! Resolves fixture files at given lines and checks the produced patterns.
//! Fixtures: tests/fixtures/go/

mod fixtures;

use fixtures::get_test_fixture_path;
use gotest_pattern::{find_test_pattern, MissReason, Mode, Resolution, Resolver, ResolverConfig};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

fn resolve(fixture: &str, line: usize, mode: Mode) -> (String, bool) {
    let path = get_test_fixture_path("go", Some(fixture));
    find_test_pattern(&path, line, mode)
        .unwrap_or_else(|e| panic!("Failed to resolve {fixture}:{line}: {e}"))
}

fn assert_resolves(fixture: &str, cases: &[(&str, usize, Mode, &str, bool)]) {
    for (name, line, mode, want, want_found) in cases {
        let (got, found) = resolve(fixture, *line, *mode);
        assert_eq!(found, *want_found, "{name}: found");
        assert_eq!(got, *want, "{name}: pattern");
    }
}

// =============================================================================
// example_test.go
// =============================================================================

#[test]
fn test_cursor_mode() {
    assert_resolves(
        "example_test.go",
        &[
            ("top-level func body", 6, Mode::Cursor, "^TestSimple$", true),
            ("on func signature", 5, Mode::Cursor, "^TestSimple$", true),
            ("on closing brace", 7, Mode::Cursor, "^TestSimple$", true),
            ("in subA", 11, Mode::Cursor, "^TestWithSub$/^subA$", true),
            ("in subB", 14, Mode::Cursor, "^TestWithSub$/^subB$", true),
            ("on t.Run line (subA)", 10, Mode::Cursor, "^TestWithSub$/^subA$", true),
            ("nested inner", 21, Mode::Cursor, "^TestNested$/^outer$/^inner$", true),
            ("nested outer line", 19, Mode::Cursor, "^TestNested$/^outer$", true),
            ("outer closing line", 23, Mode::Cursor, "^TestNested$/^outer$", true),
            ("variable subtest", 29, Mode::Cursor, "^TestVarSubtest$/.*", true),
            ("before variable subtest", 27, Mode::Cursor, "^TestVarSubtest$", true),
            ("outside any test", 1, Mode::Cursor, "", false),
            ("between tests", 8, Mode::Cursor, "", false),
        ],
    );
}

#[test]
fn test_table_driven_rows() {
    assert_resolves(
        "example_test.go",
        &[
            ("unkeyed first row", 38, Mode::Cursor, "^TestTableUnkeyed$/^first_case$", true),
            ("unkeyed second row", 39, Mode::Cursor, "^TestTableUnkeyed$/^second_case$", true),
            ("keyed first row", 53, Mode::Cursor, "^TestTableKeyed$/^keyed_first$", true),
            ("keyed second row", 54, Mode::Cursor, "^TestTableKeyed$/^keyed_second$", true),
            ("struct type field", 35, Mode::Cursor, "^TestTableUnkeyed$", true),
            ("loop dispatch", 42, Mode::Cursor, "^TestTableUnkeyed$/.*", true),
        ],
    );
}

#[test]
fn test_func_mode() {
    assert_resolves(
        "example_test.go",
        &[
            ("ignores subtests", 11, Mode::Func, "^TestWithSub$", true),
            ("ignores table rows", 38, Mode::Func, "^TestTableUnkeyed$", true),
            ("simple", 6, Mode::Func, "^TestSimple$", true),
            ("outside any test", 3, Mode::Func, "", false),
        ],
    );
}

#[test]
fn test_file_mode() {
    let (pattern, found) = resolve("example_test.go", 1, Mode::File);
    assert!(found);
    assert_eq!(
        pattern,
        "^(TestSimple|TestWithSub|TestNested|TestVarSubtest|TestTableUnkeyed|TestTableKeyed)$"
    );
}

#[test]
fn test_file_mode_ignores_line() {
    assert_eq!(
        resolve("example_test.go", 1, Mode::File),
        resolve("example_test.go", 500, Mode::File)
    );
}

#[test]
fn test_resolution_is_idempotent() {
    for line in 1..=62 {
        for mode in [Mode::Cursor, Mode::Func, Mode::File] {
            assert_eq!(
                resolve("example_test.go", line, mode),
                resolve("example_test.go", line, mode),
                "line {line} mode {mode}"
            );
        }
    }
}

#[test]
fn test_every_line_inside_a_test_is_found() {
    let path = get_test_fixture_path("go", Some("example_test.go"));
    let source = fs::read_to_string(&path).unwrap();
    let mut resolver = Resolver::new().unwrap();
    let ranges = [(5, 7), (9, 16), (18, 24), (26, 31), (33, 46), (48, 61)];

    for line in 1..=source.lines().count() {
        let inside = ranges.iter().any(|(s, e)| *s <= line && line <= *e);
        let resolution = resolver.resolve_source(&source, line, Mode::Cursor);
        assert_eq!(resolution.found(), inside, "line {line}");
        if !inside {
            assert_eq!(resolution.pattern(), "", "line {line}");
        }
    }
}

// =============================================================================
// table_test.go
// =============================================================================

#[test]
fn test_extended_table_shapes() {
    assert_resolves(
        "table_test.go",
        &[
            ("map table key", 17, Mode::Cursor, "^TestMapTable$/^zero_value$", true),
            ("map table second key", 18, Mode::Cursor, "^TestMapTable$/^one$", true),
            ("address-of row", 29, Mode::Cursor, "^TestTypedRows$/^pointer_row$", true),
            ("elided row", 30, Mode::Cursor, "^TestTypedRows$/^elided_row$", true),
            ("raw string name", 50, Mode::Cursor, "^TestRawName$/^raw_name$", true),
            ("benchmark not a test", 55, Mode::Cursor, "", false),
        ],
    );
}

#[test]
fn test_table_inside_subtest_keeps_subtest() {
    assert_resolves(
        "table_test.go",
        &[
            ("row under group", 40, Mode::Cursor, "^TestNestedTable$/^group$", true),
            ("computed name", 43, Mode::Cursor, "^TestNestedTable$/^group$/.*", true),
        ],
    );
}

#[test]
fn test_benchmark_prefix_config() {
    let path = get_test_fixture_path("go", Some("table_test.go"));
    let config = ResolverConfig {
        test_prefix: "Benchmark".to_string(),
        ..ResolverConfig::default()
    };
    let mut resolver = Resolver::with_config(config).unwrap();

    let resolution = resolver.resolve_file(&path, 55, Mode::Cursor).unwrap();
    assert_eq!(resolution.pattern(), "^BenchmarkSkipped$/^bench_case$");

    let resolution = resolver.resolve_file(&path, 1, Mode::File).unwrap();
    assert_eq!(resolution.pattern(), "^(BenchmarkSkipped)$");
}

// =============================================================================
// failure modes
// =============================================================================

#[test]
fn test_no_tests_in_file() {
    let path = get_test_fixture_path("go", Some("no_tests.go"));
    let mut resolver = Resolver::new().unwrap();

    let resolution = resolver.resolve_file(&path, 1, Mode::File).unwrap();
    assert_eq!(resolution, Resolution::NoTestsInFile);
    assert_eq!(resolution.into_parts(), (String::new(), true));

    let resolution = resolver.resolve_file(&path, 4, Mode::Cursor).unwrap();
    assert_eq!(resolution, Resolution::NotFound(MissReason::LineNotInTest));
}

#[test]
fn test_syntax_error_is_not_found() {
    let path = get_test_fixture_path("go", Some("broken_test.go"));
    for mode in [Mode::Cursor, Mode::Func, Mode::File] {
        let (pattern, found) = find_test_pattern(&path, 6, mode).unwrap();
        assert!(!found, "mode {mode}");
        assert_eq!(pattern, "");
    }
}

#[test]
fn test_missing_file_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing_test.go");
    let err = find_test_pattern(&path, 1, Mode::Cursor).unwrap_err();
    assert!(err.to_string().contains("file not found"));
}

#[test]
fn test_literal_names_are_not_escaped() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("meta_test.go");
    fs::write(
        &path,
        "package meta\n\nimport \"testing\"\n\nfunc TestMeta(t *testing.T) {\n\tt.Run(\"a.b (c)\", func(t *testing.T) {\n\t})\n}\n",
    )
    .unwrap();

    let (pattern, found) = find_test_pattern(&path, 6, Mode::Cursor).unwrap();
    assert!(found);
    assert_eq!(pattern, "^TestMeta$/^a.b_(c)$");
}

#[test]
fn test_byte_escapes_decode_to_runtime_name() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("escape_test.go");
    fs::write(
        &path,
        "package escape\n\nimport \"testing\"\n\nfunc TestX(t *testing.T) {\n\tt.Run(\"caf\\xc3\\xa9\", func(t *testing.T) {\n\t})\n}\n",
    )
    .unwrap();

    let (pattern, found) = find_test_pattern(&path, 6, Mode::Cursor).unwrap();
    assert!(found);
    assert_eq!(pattern, "^TestX$/^café$");
}
