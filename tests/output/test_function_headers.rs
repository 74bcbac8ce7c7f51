// Tests for `In function '...':` headers and their suppression.
use sarifdump_core::SarifLog;
use sarifdump_output::gcc::GccFormatter;
use sarifdump_output::ResultFormatter;
use serde_json::json;

use crate::common::{location, sarif_log};

fn render_results(results: serde_json::Value) -> String {
    let log: SarifLog = serde_json::from_value(sarif_log(results)).unwrap();
    let mut out = Vec::new();
    GccFormatter::new("").write_document(&log, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_header_printed_once_per_function_run() {
    let out = render_results(json!([
        { "message": { "text": "one" }, "locations": [location(Some("parse"), "p.c", 10, None)] },
        { "message": { "text": "two" }, "locations": [location(Some("parse"), "p.c", 12, None)] },
        { "message": { "text": "three" }, "locations": [location(Some("emit"), "p.c", 40, None)] }
    ]));
    assert_eq!(
        out,
        "In function 'parse':\np.c:10: one\np.c:12: two\nIn function 'emit':\np.c:40: three\n"
    );
}

#[test]
fn test_header_reappears_after_leaving_function() {
    let out = render_results(json!([
        { "message": { "text": "a" }, "locations": [location(Some("f"), "x.c", 1, None)] },
        { "message": { "text": "b" }, "locations": [location(Some("g"), "x.c", 2, None)] },
        { "message": { "text": "c" }, "locations": [location(Some("f"), "x.c", 3, None)] }
    ]));
    assert_eq!(out.matches("In function 'f':").count(), 2);
    assert_eq!(out.matches("In function 'g':").count(), 1);
}

#[test]
fn test_result_without_logical_location_keeps_context() {
    let out = render_results(json!([
        { "message": { "text": "a" }, "locations": [location(Some("f"), "x.c", 1, None)] },
        { "message": { "text": "b" }, "locations": [location(None, "x.c", 2, None)] },
        { "message": { "text": "c" }, "locations": [location(Some("f"), "x.c", 3, None)] }
    ]));
    assert_eq!(out, "In function 'f':\nx.c:1: a\nx.c:2: b\nx.c:3: c\n");
}

#[test]
fn test_equality_is_over_the_whole_record() {
    let loc = |decorated: &str, line: u64| {
        json!({
            "logicalLocations": [{
                "kind": "function",
                "fullyQualifiedName": "add",
                "decoratedName": decorated
            }],
            "physicalLocation": {
                "artifactLocation": { "uri": "m.cc" },
                "region": { "startLine": line }
            }
        })
    };
    let out = render_results(json!([
        { "message": { "text": "int overload" }, "locations": [loc("_Z3addii", 1)] },
        { "message": { "text": "double overload" }, "locations": [loc("_Z3adddd", 5)] }
    ]));
    assert_eq!(out.matches("In function 'add':").count(), 2);
}

#[test]
fn test_non_function_kinds_print_nothing() {
    let out = render_results(json!([{
        "message": { "text": "m" },
        "locations": [{
            "logicalLocations": [ { "kind": "module", "fullyQualifiedName": "net" } ]
        }]
    }]));
    assert_eq!(out, "m\n");
}

#[test]
fn test_state_does_not_leak_between_formatters() {
    let log: SarifLog = serde_json::from_value(sarif_log(json!([
        { "message": { "text": "a" }, "locations": [location(Some("f"), "x.c", 1, None)] }
    ])))
    .unwrap();

    for _ in 0..2 {
        let mut out = Vec::new();
        GccFormatter::new("").write_document(&log, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "In function 'f':\nx.c:1: a\n");
    }
}
