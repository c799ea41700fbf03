use std::collections::HashSet;

use scraper::{ElementRef, Html, Selector};

/// Exact `class` values of the biography info boxes that carry a birth row.
pub const INFOBOX_CLASSES: [&str; 4] = [
    "infobox vcard plainlist",
    "infobox vcard",
    "infobox biography vcard",
    "infobox bordered vcard",
];

pub const BIRTH_MARKERS: [&str; 3] = ["Born", "Born:", "Date of birth"];

const BODY_CLASS: &str = "mw-body-content";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileStats {
    /// Text nodes (whitespace-only ones included) inside the main body.
    pub body_text_nodes: usize,
    pub has_birth_marker: bool,
}

impl ProfileStats {
    pub fn is_kept(&self, min_body_text_nodes: usize) -> bool {
        self.body_text_nodes >= min_body_text_nodes && self.has_birth_marker
    }
}

pub fn inspect_profile(html: &str) -> ProfileStats {
    let document = Html::parse_document(html);

    let body_selector = exact_class_selector("div", &[BODY_CLASS]);
    let infobox_selector = exact_class_selector("table", &INFOBOX_CLASSES);

    let body_text_nodes = count_text_nodes(document.select(&body_selector));
    let has_birth_marker = document.select(&infobox_selector).any(|table| {
        table
            .text()
            .any(|text| BIRTH_MARKERS.iter().any(|marker| text == *marker))
    });

    ProfileStats {
        body_text_nodes,
        has_birth_marker,
    }
}

// Nested matches must not count the same node twice.
fn count_text_nodes<'a>(roots: impl Iterator<Item = ElementRef<'a>>) -> usize {
    let mut seen = HashSet::new();
    for root in roots {
        for node in root.descendants() {
            if node.value().is_text() {
                seen.insert(node.id());
            }
        }
    }
    seen.len()
}

fn exact_class_selector(tag: &str, classes: &[&str]) -> Selector {
    let css = classes
        .iter()
        .map(|class| format!("{}[class=\"{}\"]", tag, class))
        .collect::<Vec<_>>()
        .join(", ");
    Selector::parse(&css).expect("static selector")
}
