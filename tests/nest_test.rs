//! Integration tests for nesting flattened errors.

use form_resolver::{flatten_issues, to_nest_errors, Issue, IssuePath, Issues};
use serde_json::{json, Value};

#[test]
fn test_flattened_union_nests_by_path() {
    let lines = IssuePath::root().push_field("order").push_field("lines");
    let union = Issue::union(
        lines.push_index(0),
        "Invalid input",
        vec![
            vec![Issue::new(
                lines.push_index(0).push_field("sku"),
                "invalid_string",
                "Unknown SKU",
            )],
            vec![Issue::new(lines.push_index(0).push_field("qty"), "too_small", "At least 1")],
        ],
    );
    let issues = Issues::from_vec(vec![
        union,
        Issue::new(lines.push_index(2).push_field("qty"), "too_big", "At most 99"),
    ])
    .unwrap();

    let flat = flatten_issues(&issues, false).unwrap();
    let nested = Value::Object(to_nest_errors(&flat));

    assert_eq!(
        nested,
        json!({
            "order": {
                "lines": [
                    {
                        "type": "invalid_string",
                        "message": "Unknown SKU",
                        "sku": {"type": "invalid_string", "message": "Unknown SKU"},
                        "qty": {"type": "too_small", "message": "At least 1"}
                    },
                    null,
                    {"qty": {"type": "too_big", "message": "At most 99"}}
                ]
            }
        })
    );
}

#[test]
fn test_collected_types_survive_nesting() {
    let email = IssuePath::root().push_field("contact").push_field("email");
    let issues = Issues::from_vec(vec![
        Issue::new(email.clone(), "too_small", "Required"),
        Issue::new(email, "invalid_string", "Invalid email"),
    ])
    .unwrap();

    let nested = Value::Object(to_nest_errors(&flatten_issues(&issues, true).unwrap()));

    assert_eq!(
        nested["contact"]["email"]["types"],
        json!({"too_small": "Required", "invalid_string": "Invalid email"})
    );
}

#[test]
fn test_root_union_with_index_and_field_branches_keeps_both() {
    let items = IssuePath::from_field("a");
    let union = Issue::union(
        IssuePath::root(),
        "Invalid input",
        vec![
            vec![Issue::new(items.push_index(0), "too_small", "First entry required")],
            vec![Issue::new(items.push_field("b"), "invalid_type", "Expected object")],
        ],
    );

    let flat = flatten_issues(&Issues::single(union), false).unwrap();
    let nested = Value::Object(to_nest_errors(&flat));

    assert_eq!(
        nested["a"],
        json!({
            "0": {"type": "too_small", "message": "First entry required"},
            "b": {"type": "invalid_type", "message": "Expected object"}
        })
    );
    assert_eq!(nested[""]["message"], json!("First entry required"));
}
