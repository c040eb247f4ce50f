//! End-to-end tests for the tsemit command-line driver.

use clap::Parser;
use std::fs;
use tempfile::TempDir;
use tsemit::cli::args::CliArgs;
use tsemit::cli::driver;

const CLASS_TREE: &str = r#"[
    {"keyword": "class"},
    {"space": " "},
    {"symbol": {"text": "Point"}},
    {"space": " "},
    {"block": {
        "multiLine": true,
        "statements": [
            {"comment": "// point"},
            {"sequence": [
                {"property": "x"}, {"punctuation": ":"}, {"space": " "},
                {"keyword": "number"}, {"trailingSemicolon": ";"}
            ]},
            {"sequence": [
                {"property": "y"}, {"punctuation": ":"}, {"space": " "},
                {"keyword": "number"}, {"trailingSemicolon": ";"}
            ]}
        ]
    }}
]"#;

fn write_tree(dir: &TempDir, contents: &str) -> String {
    let path = dir.path().join("tree.json");
    fs::write(&path, contents).expect("write tree");
    path.to_string_lossy().into_owned()
}

fn run_with(argv: &[&str]) -> anyhow::Result<String> {
    let args = CliArgs::try_parse_from(argv)?;
    driver::run(&args)
}

#[test]
fn renders_multi_line_tree_from_file() {
    let dir = TempDir::new().unwrap();
    let input = write_tree(&dir, CLASS_TREE);

    let output = run_with(&["tsemit", &input]).unwrap();
    assert_eq!(
        output,
        "class Point {\n    // point\n    x: number;\n    y: number;\n}\n"
    );
}

#[test]
fn renders_single_line_without_comments() {
    let dir = TempDir::new().unwrap();
    let input = write_tree(&dir, CLASS_TREE);

    let output = run_with(&["tsemit", &input, "--single-line"]).unwrap();
    assert_eq!(output, "class Point { x: number; y: number; }\n");
}

#[test]
fn honours_new_line_and_indent_width() {
    let dir = TempDir::new().unwrap();
    let input = write_tree(&dir, CLASS_TREE);

    let output = run_with(&[
        "tsemit",
        &input,
        "--new-line",
        "crlf",
        "--indent-width",
        "2",
        "--remove-comments",
    ])
    .unwrap();
    assert_eq!(
        output,
        "class Point {\r\n  x: number;\r\n  y: number;\r\n}\n"
    );
}

#[test]
fn appends_stats_as_json() {
    let dir = TempDir::new().unwrap();
    let input = write_tree(&dir, CLASS_TREE);

    let output = run_with(&["tsemit", &input, "--stats", "--remove-comments"]).unwrap();
    let mut lines = output.lines();
    let stats_line = lines.next_back().unwrap();
    let stats: serde_json::Value = serde_json::from_str(stats_line).unwrap();

    let text = "class Point {\n    x: number;\n    y: number;\n}";
    assert_eq!(stats["textPos"], text.len());
    assert_eq!(stats["line"], 3);
    assert_eq!(stats["column"], 1);
    assert_eq!(stats["end"]["line"], 3);
    assert_eq!(stats["end"]["character"], 1);
}

#[test]
fn missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.json");
    let missing = missing.to_string_lossy().into_owned();

    let err = run_with(&["tsemit", &missing]).unwrap_err();
    assert!(format!("{err:#}").contains("absent.json"));
}

#[test]
fn invalid_tree_is_an_error() {
    let dir = TempDir::new().unwrap();
    let input = write_tree(&dir, r#"{"notANode": 1}"#);

    let err = run_with(&["tsemit", &input]).unwrap_err();
    assert!(format!("{err:#}").contains("not a valid emit tree"));
}
