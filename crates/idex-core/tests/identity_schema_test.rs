//! Integration test: identity payload parsing and local validation —
//! verifies that a schema-conformant response round-trips with no coercion
//! and that every malformed shape is a hard failure.
//!
//! ## Scenarios
//! 1. Well-formed document parses with byte-identical fields.
//! 2. Leading/trailing whitespace around the body is tolerated.
//! 3. Absent optional fields default to empty strings.
//! 4. Missing mandatory top-level fields are rejected.
//! 5. Assets without title/url, blank name/summary, unknown category: rejected.
//! 6. Non-JSON bodies are rejected with the malformed-payload message.

use idex_core::{IdentityCategory, IdentityResult, MediaAsset, PaperAsset};
use serde_json::json;

const FULL_DOCUMENT: &str = r#"{
    "name": "Voyager 1",
    "category": "Object",
    "summary": "Voyager 1 is a space probe launched by NASA in 1977. It is the most distant human-made object from Earth.",
    "papers": [
        {
            "title": "The Voyager Interstellar Mission",
            "url": "https://example.org/vim.pdf",
            "source": "JPL",
            "snippet": "Overview of the extended mission."
        }
    ],
    "images": [
        { "title": "Golden Record", "url": "https://example.org/record.jpg", "platform": "NASA Gallery" }
    ],
    "videos": [
        { "title": "Pale Blue Dot", "url": "https://example.org/pbd", "platform": "YouTube" }
    ]
}"#;

#[test]
fn well_formed_document_round_trips_byte_identical() {
    let result = IdentityResult::from_json_text(FULL_DOCUMENT).expect("parse");

    assert_eq!(result.name, "Voyager 1");
    assert_eq!(result.category, IdentityCategory::Object);
    assert_eq!(
        result.summary,
        "Voyager 1 is a space probe launched by NASA in 1977. It is the most distant human-made object from Earth."
    );
    assert_eq!(
        result.papers,
        vec![PaperAsset {
            title: "The Voyager Interstellar Mission".to_string(),
            url: "https://example.org/vim.pdf".to_string(),
            source: "JPL".to_string(),
            snippet: "Overview of the extended mission.".to_string(),
        }]
    );
    assert_eq!(
        result.images,
        vec![MediaAsset {
            title: "Golden Record".to_string(),
            url: "https://example.org/record.jpg".to_string(),
            platform: "NASA Gallery".to_string(),
        }]
    );
    assert_eq!(result.videos.len(), 1);

    // No dropped or coerced fields: re-serialization matches the source document.
    let reserialized = serde_json::to_value(&result).expect("serialize");
    let original: serde_json::Value = serde_json::from_str(FULL_DOCUMENT).expect("source json");
    assert_eq!(reserialized, original);
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    let wrapped = format!("\n  {}  \n", FULL_DOCUMENT);
    assert!(IdentityResult::from_json_text(&wrapped).is_ok());
}

#[test]
fn absent_optional_fields_default_to_empty_strings() {
    let doc = json!({
        "name": "X",
        "category": "Person",
        "summary": "S.",
        "papers": [{ "title": "T", "url": "http://a" }],
        "images": [{ "title": "I", "url": "http://b" }],
        "videos": []
    });
    let result = IdentityResult::from_json_text(&doc.to_string()).expect("parse");
    assert_eq!(result.papers[0].source, "");
    assert_eq!(result.papers[0].snippet, "");
    assert_eq!(result.images[0].platform, "");
}

#[test]
fn missing_top_level_collection_is_rejected() {
    // "videos" absent: sequences may be empty but never absent.
    let doc = json!({
        "name": "X",
        "category": "Person",
        "summary": "S.",
        "papers": [],
        "images": []
    });
    let err = IdentityResult::from_json_text(&doc.to_string()).unwrap_err();
    assert!(err.message.starts_with("Malformed identity payload"));
}

#[test]
fn asset_without_url_is_rejected() {
    let doc = json!({
        "name": "X",
        "category": "Place",
        "summary": "S.",
        "papers": [{ "title": "T", "url": "  " }],
        "images": [],
        "videos": []
    });
    let err = IdentityResult::from_json_text(&doc.to_string()).unwrap_err();
    assert!(err.message.contains("mandatory title or url"));
}

#[test]
fn blank_name_or_summary_is_rejected() {
    let blank_name = json!({
        "name": " ",
        "category": "Place",
        "summary": "S.",
        "papers": [], "images": [], "videos": []
    });
    assert!(IdentityResult::from_json_text(&blank_name.to_string()).is_err());

    let blank_summary = json!({
        "name": "X",
        "category": "Place",
        "summary": "",
        "papers": [], "images": [], "videos": []
    });
    assert!(IdentityResult::from_json_text(&blank_summary.to_string()).is_err());
}

#[test]
fn unknown_category_is_rejected() {
    let doc = json!({
        "name": "X",
        "category": "Concept",
        "summary": "S.",
        "papers": [], "images": [], "videos": []
    });
    assert!(IdentityResult::from_json_text(&doc.to_string()).is_err());
}

#[test]
fn non_json_body_is_rejected() {
    let err = IdentityResult::from_json_text("I could not find that identity.").unwrap_err();
    assert!(err.message.starts_with("Malformed identity payload"));
}
