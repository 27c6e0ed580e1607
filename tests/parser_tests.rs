use laygrade::{error::GradeError, layout::Parser};
use uuid::Uuid;

const SOLUTION: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<LinearLayout xmlns:android="http://schemas.android.com/apk/res/android"
    android:layout_width="match_parent"
    android:layout_height="match_parent"
    android:gravity="center">
    <TextView
        android:layout_width="wrap_content"
        android:layout_height="wrap_content"
        android:text="Hi Android"
        android:textSize="24sp"
        android:textStyle="bold" />
</LinearLayout>"#;

#[test]
fn parses_wellformed_layout() {
    let parser = Parser::new(SOLUTION.to_string()).expect("layout should parse");
    assert_eq!(parser.root().tag, "LinearLayout");
    assert_eq!(parser.root().children.len(), 1);
    assert_eq!(parser.root().children[0].tag, "TextView");
}

#[test]
fn namespaced_attribute_resolves() {
    let parser = Parser::new(SOLUTION.to_string()).expect("layout should parse");
    assert_eq!(parser.root().attr("layout_width"), Some("match_parent"));
    assert_eq!(parser.root().children[0].attr("text"), Some("Hi Android"));
}

#[test]
fn bare_attribute_resolves_as_alias() {
    let source = r#"<LinearLayout layout_width="match_parent">
    <TextView text="Hi Android" />
</LinearLayout>"#;

    let parser = Parser::new(source.to_string()).expect("layout should parse");
    assert_eq!(parser.root().attr("layout_width"), Some("match_parent"));
    assert_eq!(parser.root().children[0].attr("text"), Some("Hi Android"));
}

#[test]
fn namespaced_key_wins_over_bare() {
    let source = r#"<LinearLayout xmlns:android="http://schemas.android.com/apk/res/android">
    <TextView android:text="Hi Android" text="shadowed" />
</LinearLayout>"#;

    let parser = Parser::new(source.to_string()).expect("layout should parse");
    assert_eq!(parser.root().children[0].attr("text"), Some("Hi Android"));
}

#[test]
fn absent_attribute_is_none() {
    let parser = Parser::new(SOLUTION.to_string()).expect("layout should parse");
    assert_eq!(parser.root().attr("orientation"), None);
}

#[test]
fn walk_yields_document_order() {
    let source = r#"<FrameLayout>
    <LinearLayout>
        <TextView text="first" />
    </LinearLayout>
    <TextView text="second" />
</FrameLayout>"#;

    let parser = Parser::new(source.to_string()).expect("layout should parse");
    let tags: Vec<&str> = parser.root().walk().map(|e| e.tag.as_str()).collect();
    assert_eq!(tags, vec![
        "FrameLayout",
        "LinearLayout",
        "TextView",
        "TextView"
    ]);

    let first = parser
        .root()
        .find_first("TextView")
        .expect("a TextView should exist");
    assert_eq!(first.attr("text"), Some("first"));
}

#[test]
fn malformed_markup_is_a_parse_error() {
    let err = Parser::new("<LinearLayout".to_string()).unwrap_err();
    assert!(matches!(err, GradeError::Parse { .. }));
    assert!(err.to_string().contains("XML parsing failed"));
}

#[test]
fn missing_file_is_not_found() {
    let path = std::env::temp_dir().join(format!("laygrade-missing-{}", Uuid::new_v4()));
    let err = Parser::load(&path).unwrap_err();
    assert!(matches!(err, GradeError::NotFound { .. }));
    assert!(err.to_string().contains("not found"));
}

#[test]
fn load_reads_from_disk() {
    let root = std::env::temp_dir().join(format!("laygrade-parser-{}", Uuid::new_v4()));
    std::fs::create_dir_all(&root).expect("create temp root");
    let file = root.join("activity_main.xml");
    std::fs::write(&file, SOLUTION).expect("write layout");

    let parser = Parser::load(&file).expect("layout should load");
    assert_eq!(parser.root().tag, "LinearLayout");
    assert_eq!(parser.code(), SOLUTION);

    let _ = std::fs::remove_dir_all(root);
}
