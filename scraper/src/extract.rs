use clap::ValueEnum;
use scraper::{ElementRef, Html, Selector};

use crate::calendar::DayId;
use crate::error::{CandidateShape, HarvestError, Result};

/// `id` of the heading that opens the births list on a day page.
pub const BIRTHS_SECTION_ID: &str = "Births";

/// Entries after the births list that the positional queries also pick up
/// (holidays, see-also links and the like).
pub const TRAILING_BOILERPLATE_ENTRIES: usize = 8;

/// How list items are located on a day page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[clap(rename_all = "lowercase")]
pub enum ExtractionMode {
    /// Only items between the "Births" heading and the next section heading
    #[default]
    Sectioned,
    /// Second `<ul>` of every parent, minus a fixed number of trailing entries
    Positional,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub name: String,
    pub link: String,
}

/// Names and links of one extraction shape, kept as parallel lists until aligned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateGroup {
    pub names: Vec<String>,
    pub links: Vec<String>,
}

impl CandidateGroup {
    fn push_anchor(&mut self, anchor: ElementRef) {
        let name = anchor.text().collect::<String>();
        if !name.is_empty() {
            self.names.push(name);
        }
        if let Some(href) = anchor.value().attr("href") {
            self.links.push(href.to_string());
        }
    }

    /// Apply the year-is-not-link cleaning to both lists.
    pub fn cleaned(self, trailing: usize) -> Self {
        CandidateGroup {
            names: clean_other_names(self.names, trailing),
            links: clean_other_links(self.links, trailing),
        }
    }

    /// Pair names with links, failing when the lists have drifted apart.
    pub fn align(self, day: &DayId, shape: CandidateShape) -> Result<Vec<Candidate>> {
        if self.names.len() != self.links.len() {
            return Err(HarvestError::Alignment {
                day: day.to_string(),
                shape,
                names: self.names.len(),
                links: self.links.len(),
            });
        }
        Ok(self
            .names
            .into_iter()
            .zip(self.links)
            .map(|(name, link)| Candidate { name, link })
            .collect())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateGroups {
    pub year_is_link: CandidateGroup,
    pub year_is_not_link: CandidateGroup,
}

impl CandidateGroups {
    /// Align each group on its own, then concatenate year-is-link entries first.
    pub fn align(self, day: &DayId) -> Result<Vec<Candidate>> {
        let mut candidates = self.year_is_link.align(day, CandidateShape::YearIsLink)?;
        candidates.extend(
            self.year_is_not_link
                .align(day, CandidateShape::YearIsNotLink)?,
        );
        Ok(candidates)
    }
}

pub fn day_page_url(base_url: &str, day: &DayId) -> String {
    format!("{}wiki/{}#{}", base_url, day, BIRTHS_SECTION_ID)
}

/// Plain concatenation. With the default base this yields a doubled slash
/// (`https://en.wikipedia.org//wiki/X`), which the site accepts.
pub fn resolve_link(base_url: &str, link: &str) -> String {
    format!("{}{}", base_url, link)
}

/// Pull both candidate groups out of a day page. The year-is-not-link group
/// comes back already cleaned.
pub fn extract_candidates(html: &str, mode: ExtractionMode) -> CandidateGroups {
    let document = Html::parse_document(html);

    match mode {
        ExtractionMode::Sectioned => {
            let mut groups = extract_births_section(&document);
            groups.year_is_not_link = groups.year_is_not_link.cleaned(0);
            groups
        }
        ExtractionMode::Positional => {
            let mut groups = extract_positional(&document);
            groups.year_is_not_link = groups
                .year_is_not_link
                .cleaned(TRAILING_BOILERPLATE_ENTRIES);
            groups
        }
    }
}

fn extract_births_section(document: &Html) -> CandidateGroups {
    let mut groups = CandidateGroups::default();
    let mut in_births = false;

    for node in document.root_element().descendants() {
        let Some(element) = ElementRef::wrap(node) else {
            continue;
        };
        match element.value().name() {
            "h2" => {
                if is_births_heading(element) {
                    in_births = true;
                } else if in_births {
                    break;
                }
            }
            "li" if in_births && parent_is_list(element) => {
                collect_list_item(element, &mut groups);
            }
            _ => {}
        }
    }

    groups
}

fn is_births_heading(heading: ElementRef) -> bool {
    // Older markup puts the id on a <span class="mw-headline"> inside the h2
    heading
        .descendants()
        .filter_map(ElementRef::wrap)
        .any(|el| el.value().id() == Some(BIRTHS_SECTION_ID))
}

fn parent_is_list(item: ElementRef) -> bool {
    item.parent()
        .and_then(ElementRef::wrap)
        .map_or(false, |parent| parent.value().name() == "ul")
}

fn collect_list_item(item: ElementRef, groups: &mut CandidateGroups) {
    let anchors: Vec<ElementRef> = item
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "a")
        .collect();

    let Some(first) = anchors.first() else {
        return;
    };

    if is_year(&first.text().collect::<String>()) {
        if let Some(person) = anchors.get(1) {
            groups.year_is_link.push_anchor(*person);
        }
    } else {
        groups.year_is_not_link.push_anchor(*first);
    }
}

/// `1879`, `AD 79` or `44 BC`.
pub fn is_year(text: &str) -> bool {
    let text = text.trim();
    let digits = text
        .strip_prefix("AD ")
        .or_else(|| text.strip_suffix(" BC"))
        .unwrap_or(text);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

fn extract_positional(document: &Html) -> CandidateGroups {
    let second_link = selector("ul:nth-of-type(2) li > a:nth-of-type(2)");
    let first_link = selector("ul:nth-of-type(2) li > a:nth-of-type(1)");

    let mut groups = CandidateGroups::default();
    for anchor in document.select(&second_link) {
        groups.year_is_link.push_anchor(anchor);
    }
    for anchor in document.select(&first_link) {
        groups.year_is_not_link.push_anchor(anchor);
    }
    groups
}

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector")
}

/// Drop stray year fragments (`1879`, `12th`), `AD ` years, and the last
/// `trailing` entries.
pub fn clean_other_names(names: Vec<String>, trailing: usize) -> Vec<String> {
    let mut kept: Vec<String> = names
        .into_iter()
        .filter(|name| !is_year_fragment(name))
        .filter(|name| !name.starts_with("AD "))
        .collect();
    kept.truncate(kept.len().saturating_sub(trailing));
    kept
}

fn is_year_fragment(name: &str) -> bool {
    name.chars().count() <= 4 && name.chars().next().map_or(false, |c| c.is_ascii_digit())
}

/// Link-side counterpart of [`clean_other_names`]: drop year pages
/// (`/wiki/1879`), footnote anchors, `AD` year pages, and the last `trailing`
/// entries.
pub fn clean_other_links(links: Vec<String>, trailing: usize) -> Vec<String> {
    let mut kept: Vec<String> = links
        .into_iter()
        .filter(|link| !is_year_page(link))
        .filter(|link| !link.starts_with('#') && !link.chars().skip(6).take(2).eq("AD".chars()))
        .collect();
    kept.truncate(kept.len().saturating_sub(trailing));
    kept
}

// Offset 6 is the first character after "/wiki/"
fn is_year_page(link: &str) -> bool {
    link.chars().count() <= 10 && link.chars().nth(6).map_or(false, |c| c.is_ascii_digit())
}
