//! Printing emit trees decoded from their JSON form.

use tsemit_common::SymbolId;
use tsemit_printer::{EmitNode, print_node, print_node_single_line};

fn parse(json: &str) -> EmitNode {
    serde_json::from_str(json).expect("valid emit tree")
}

const CLASS_TREE: &str = r#"{
    "sequence": [
        {"keyword": "class"},
        {"space": " "},
        {"symbol": {"text": "Point", "symbol": 12}},
        {"space": " "},
        {"block": {
            "multiLine": true,
            "statements": [
                {"comment": "// coordinates"},
                {"sequence": [
                    {"property": "x"},
                    {"punctuation": ":"},
                    {"space": " "},
                    {"keyword": "number"},
                    {"trailingSemicolon": ";"}
                ]},
                {"sequence": [
                    {"property": "label"},
                    {"operator": "="},
                    {"stringLiteral": "\"origin\""},
                    {"trailingSemicolon": ";"}
                ]}
            ]
        }}
    ]
}"#;

#[test]
fn test_decode_leaf_variants() {
    assert_eq!(parse(r#"{"keyword": "let"}"#), EmitNode::keyword("let"));
    assert_eq!(parse(r#""line""#), EmitNode::Line);
    assert_eq!(parse(r#""forcedLine""#), EmitNode::ForcedLine);
    assert_eq!(
        parse(r#"{"symbol": {"text": "A", "symbol": 3}}"#),
        EmitNode::symbol("A", Some(SymbolId(3)))
    );
    assert_eq!(
        parse(r#"{"symbol": {"text": "A"}}"#),
        EmitNode::symbol("A", None)
    );
    assert_eq!(
        parse(r#"{"block": {"statements": []}}"#),
        EmitNode::block(vec![], false)
    );
}

#[test]
fn test_encode_matches_decode() {
    let tree = parse(CLASS_TREE);
    let json = serde_json::to_string(&tree).unwrap();
    assert_eq!(parse(&json), tree);
}

#[test]
fn test_print_class_tree_multi_line() {
    let tree = parse(CLASS_TREE);
    assert_eq!(
        print_node(&tree),
        "class Point {\n    // coordinates\n    x: number;\n    label=\"origin\";\n}"
    );
}

#[test]
fn test_print_class_tree_single_line() {
    let tree = parse(CLASS_TREE);
    assert_eq!(
        print_node_single_line(&tree),
        "class Point { x: number; label=\"origin\"; }"
    );
}

#[test]
fn test_unknown_variant_is_rejected() {
    let result: Result<EmitNode, _> = serde_json::from_str(r#"{"bogus": "x"}"#);
    assert!(result.is_err());
}
