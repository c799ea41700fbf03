use crate::extract::ExtractionMode;

pub const DEFAULT_BASE_URL: &str = "https://en.wikipedia.org/";

/// Profiles with fewer body text nodes than this are not "notable" enough.
pub const DEFAULT_MIN_BODY_TEXT_NODES: usize = 3250;

#[derive(Debug, Clone)]
pub struct HarvestConfig {
    /// Site root, with a trailing slash. Day pages live under `{base_url}wiki/`.
    pub base_url: String,
    pub min_body_text_nodes: usize,
    pub mode: ExtractionMode,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            min_body_text_nodes: DEFAULT_MIN_BODY_TEXT_NODES,
            mode: ExtractionMode::default(),
        }
    }
}
