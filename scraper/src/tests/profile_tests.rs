use super::fixtures::profile_html;
use crate::profile::{inspect_profile, ProfileStats};

#[test]
fn test_counts_body_text_nodes() {
    let stats = inspect_profile(&profile_html(3, None));
    assert_eq!(stats.body_text_nodes, 3);
    assert!(!stats.has_birth_marker);

    // th and td of the info box add two more
    let stats = inspect_profile(&profile_html(3, Some("Born")));
    assert_eq!(stats.body_text_nodes, 5);
    assert!(stats.has_birth_marker);
}

#[test]
fn test_whitespace_text_nodes_count() {
    let html = "<html><body><div class=\"mw-body-content\"><p>One</p> <p>Two</p></div></body></html>";
    assert_eq!(inspect_profile(html).body_text_nodes, 3);
}

#[test]
fn test_body_class_must_match_exactly() {
    let html = r#"
    <html><body>
        <div class="mw-body-content mw-content-ltr"><p>One</p><p>Two</p></div>
    </body></html>
    "#;
    assert_eq!(inspect_profile(html).body_text_nodes, 0);
}

#[test]
fn test_nested_body_divs_are_not_double_counted() {
    let html = r#"<html><body><div class="mw-body-content"><p>One</p><div class="mw-body-content"><p>Two</p></div></div></body></html>"#;
    assert_eq!(inspect_profile(html).body_text_nodes, 2);
}

#[test]
fn test_birth_markers() {
    assert!(inspect_profile(&profile_html(1, Some("Born:"))).has_birth_marker);
    assert!(inspect_profile(&profile_html(1, Some("Date of birth"))).has_birth_marker);
    // Only an exact text node counts
    assert!(!inspect_profile(&profile_html(1, Some("Born in Ulm"))).has_birth_marker);
    assert!(!inspect_profile(&profile_html(1, Some("Died"))).has_birth_marker);
}

#[test]
fn test_birth_marker_outside_a_biography_infobox() {
    let html = r#"
    <html><body>
        <table class="infobox"><tr><th>Born</th><td>1879</td></tr></table>
        <table class="wikitable"><tr><th>Born</th></tr></table>
    </body></html>
    "#;
    assert!(!inspect_profile(html).has_birth_marker);

    let html = r#"<html><body><table class="infobox vcard plainlist"><tr><th>Born</th></tr></table></body></html>"#;
    assert!(inspect_profile(html).has_birth_marker);
}

#[test]
fn test_short_profile_is_excluded_even_with_marker() {
    let stats = ProfileStats {
        body_text_nodes: 3249,
        has_birth_marker: true,
    };
    assert!(!stats.is_kept(3250));

    let stats = ProfileStats {
        body_text_nodes: 3250,
        has_birth_marker: true,
    };
    assert!(stats.is_kept(3250));

    let stats = ProfileStats {
        body_text_nodes: 10_000,
        has_birth_marker: false,
    };
    assert!(!stats.is_kept(3250));
}
