//! End-to-end parsing of type tree files.

use std::fs;

use tempfile::TempDir;
use tessera_ir::{Classification, TypeNode};
use tessera_manifest::{ConfigFile, Error, TypeTree};

#[test]
fn test_project_layout_round_trip() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("tessera.toml"),
        r#"
        [generator]
        input = "model/types.json"
        max_depth = 3
        "#,
    )
    .unwrap();
    fs::create_dir_all(temp.path().join("model")).unwrap();
    fs::write(
        temp.path().join("model/types.json"),
        r#"[
            {
                "name": "Person",
                "classification": "Class",
                "children": [
                    { "name": "Age", "classification": "Property", "type": "int", },
                    { "name": "Name", "classification": "Property", "type": "string", },
                ],
            },
            { "name": "Marker", "classification": "Interface" },
        ]"#,
    )
    .unwrap();

    let config = ConfigFile::open(temp.path().join("tessera.toml")).unwrap();
    let max_depth = config.config().generator.max_depth;
    let tree = TypeTree::open_with_limit(config.input_path(), max_depth).unwrap();

    let roots = tree.roots();
    assert_eq!(roots.len(), 2);
    assert_eq!(roots[0].kind(), Classification::Class);
    assert_eq!(roots[1].kind(), Classification::Other("Interface".into()));
    assert_eq!(
        roots[0].children,
        vec![
            TypeNode::new("Age", "Property").with_type("int"),
            TypeNode::new("Name", "Property").with_type("string"),
        ]
    );
    assert_eq!(tree.node_count(), 4);
}

#[test]
fn test_configured_depth_limit_applies() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("context.json");
    fs::write(
        &path,
        r#"[{ "Name": "A", "Classification": "Class", "Children": [
            { "Name": "B", "Classification": "Class", "Children": [
                { "Name": "C", "Classification": "Property" }
            ] }
        ] }]"#,
    )
    .unwrap();

    assert!(TypeTree::open_with_limit(&path, 3).is_ok());

    let err = TypeTree::open_with_limit(&path, 2).unwrap_err();
    match *err {
        Error::TooDeep {
            location, limit, ..
        } => {
            assert_eq!(limit, 2);
            assert_eq!(location, "[0].Children[0].Children[0]");
        }
        other => panic!("expected depth error, got {:?}", other),
    }
}

#[test]
fn test_malformed_tree_reports_file_and_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("context.json");
    fs::write(
        &path,
        r#"[{ "Name": "Person", "Classification": "Class", "Children": [42] }]"#,
    )
    .unwrap();

    let err = TypeTree::open(&path).unwrap_err();
    assert!(err.is_input_error());
    assert_eq!(
        err.to_string(),
        "invalid type node at [0].Children[0]: expected an object, found a number"
    );
}
