//! End-to-end generation passes: type tree text + template directory → document.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use std::fs;

use tempfile::TempDir;
use tessera_codegen::{
    DiagnosticCode, DirectorySource, Document, DocumentSink, FileSink, GeneratedDocument,
    MemorySource, Renderer, Severity, TemplateKinds, TemplateRepository, WriteResult,
};
use tessera_manifest::parse_tree;

const CLASS_TEMPLATE: &str = "public class {Name} { {Children} }";
const PROPERTY_TEMPLATE: &str = "public {Type} {Name} { get; set; }";

fn builtin_templates() -> MemorySource {
    MemorySource::new()
        .with("class-template.tmpl", CLASS_TEMPLATE)
        .with("property-template.tmpl", PROPERTY_TEMPLATE)
}

fn generate(tree: &str, repo: &TemplateRepository) -> GeneratedDocument {
    let roots = parse_tree(tree, "context.json").expect("Failed to parse type tree");
    Document::new(Renderer::new(repo))
        .assemble(&roots)
        .expect("Failed to assemble document")
}

#[test]
fn test_person_document() {
    let repo = TemplateRepository::load(&builtin_templates(), TemplateKinds::new());
    let doc = generate(
        r#"[
            {
                "Name": "Person",
                "Classification": "Class",
                "Children": [
                    { "Name": "Age", "Classification": "Property", "Type": "int" },
                    { "Name": "FullName", "Classification": "Property", "Type": "string" },
                ]
            }
        ]"#,
        &repo,
    );

    insta::assert_snapshot!(
        doc.content,
        @"using System;namespace SourceGenerator{public class Person { public int Age { get; set; }public string FullName { get; set; } }}"
    );
    assert!(doc.diagnostics.is_empty());
}

#[test]
fn test_nested_classes_and_multiple_roots() {
    let repo = TemplateRepository::load(&builtin_templates(), TemplateKinds::new());
    let doc = generate(
        r#"[
            { "Name": "Order", "Classification": "Class", "Children": [
                { "Name": "Line", "Classification": "Class", "Children": [
                    { "Name": "Qty", "Classification": "Property", "Type": "int" }
                ] },
                { "Name": "Id", "Classification": "Property", "Type": "Guid" }
            ] },
            { "Name": "Customer", "Classification": "Class" }
        ]"#,
        &repo,
    );

    insta::assert_snapshot!(
        doc.content,
        @"using System;namespace SourceGenerator{public class Order { public class Line { public int Qty { get; set; } }public Guid Id { get; set; } }public class Customer {  }}"
    );
    assert_eq!(doc.root_count, 2);
}

#[test]
fn test_unrecognized_and_unavailable_are_distinguished() {
    let kinds = TemplateKinds::new().with("Enum", "enum-template.tmpl");
    let repo = TemplateRepository::load(&builtin_templates(), kinds);
    let doc = generate(
        r#"[
            { "Name": "Color", "Classification": "Enum" },
            { "Name": "Shape", "Classification": "Interface" },
            { "Name": "Point", "Classification": "Class", "Children": [
                { "Name": "X", "Classification": "Property" }
            ] }
        ]"#,
        &repo,
    );

    assert_eq!(
        doc.content,
        "using System;namespace SourceGenerator{public class Point { public {Type} X { get; set; } }}"
    );

    let unavailable: Vec<_> = doc
        .diagnostics
        .with_code(DiagnosticCode::TemplateUnavailable)
        .collect();
    assert_eq!(unavailable.len(), 1);
    assert_eq!(unavailable[0].severity, Severity::Warning);
    assert_eq!(unavailable[0].location.as_deref(), Some("Color"));

    let unrecognized: Vec<_> = doc
        .diagnostics
        .with_code(DiagnosticCode::UnrecognizedClassification)
        .collect();
    assert_eq!(unrecognized.len(), 1);
    assert_eq!(unrecognized[0].severity, Severity::Info);
    assert_eq!(unrecognized[0].location.as_deref(), Some("Shape"));
}

#[test]
fn test_directory_templates_and_file_output() {
    let temp = TempDir::new().unwrap();
    let templates = temp.path().join("templates");
    fs::create_dir_all(&templates).unwrap();
    fs::write(templates.join("class-template.tmpl"), CLASS_TEMPLATE).unwrap();
    fs::write(templates.join("property-template.tmpl"), PROPERTY_TEMPLATE).unwrap();

    let repo = TemplateRepository::load(&DirectorySource::new(&templates), TemplateKinds::new());
    let doc = generate(
        r#"[{ "name": "Age", "classification": "Property", "type": "int" }]"#,
        &repo,
    );

    let out = temp.path().join("gen").join("Source.cs");
    let mut sink = FileSink::new(&out);
    assert_eq!(sink.emit(&doc).unwrap(), WriteResult::Written);
    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        "using System;namespace SourceGenerator{public int Age { get; set; }}"
    );

    // A second identical pass leaves the file alone.
    let again = generate(
        r#"[{ "name": "Age", "classification": "Property", "type": "int" }]"#,
        &repo,
    );
    assert_eq!(again, doc);
    assert_eq!(sink.emit(&again).unwrap(), WriteResult::Unchanged);
}

#[test]
fn test_missing_template_directory_skips_everything() {
    let temp = TempDir::new().unwrap();
    let repo = TemplateRepository::load(
        &DirectorySource::new(temp.path().join("nope")),
        TemplateKinds::new(),
    );
    let doc = generate(
        r#"[{ "Name": "Person", "Classification": "Class" }]"#,
        &repo,
    );

    assert_eq!(doc.content, "using System;namespace SourceGenerator{}");
    assert_eq!(doc.diagnostics.warning_count(), 1);
}

#[test]
fn test_empty_tree_yields_scaffold() {
    let repo = TemplateRepository::load(&builtin_templates(), TemplateKinds::new());
    let doc = generate("[]", &repo);
    insta::assert_snapshot!(doc.content, @"using System;namespace SourceGenerator{}");
}
