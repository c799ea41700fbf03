use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::calendar::DayId;
use crate::config::HarvestConfig;
use crate::error::{HarvestError, Result};
use crate::extract::{
    day_page_url, extract_candidates, resolve_link, Candidate, CandidateGroup,
};
use crate::fetch::PageFetcher;
use crate::profile::inspect_profile;
use crate::table::{day_file_path, write_table, BirthdayRecord};

/// What a batch does when one day's name and link lists do not line up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MismatchPolicy {
    /// Stop the whole batch and return the error
    #[default]
    Abort,
    /// Log it, record the day as skipped and carry on
    Skip,
}

#[derive(Debug, Default)]
pub struct HarvestReport {
    pub written: Vec<PathBuf>,
    pub skipped: Vec<(DayId, HarvestError)>,
}

pub struct DayHarvester<F: PageFetcher> {
    fetcher: F,
    config: HarvestConfig,
}

impl<F: PageFetcher> DayHarvester<F> {
    pub fn new(fetcher: F, config: HarvestConfig) -> Self {
        Self { fetcher, config }
    }

    pub fn config(&self) -> &HarvestConfig {
        &self.config
    }

    /// Scrape one day page and return the people worth keeping.
    pub fn harvest_day(&self, day: &DayId) -> Result<Vec<BirthdayRecord>> {
        let url = day_page_url(&self.config.base_url, day);
        info!("Navigating to {}", url);

        let html = self.fetcher.fetch(&url)?;
        let groups = extract_candidates(&html, self.config.mode);

        dump_group("year-is-link", &groups.year_is_link);
        dump_group("year-is-not-link", &groups.year_is_not_link);

        let candidates = groups.align(day)?;
        let kept = self.keep_notable(&candidates)?;
        info!(
            "{}: kept {} of {} candidates",
            day,
            kept.len(),
            candidates.len()
        );

        let birthday = day.date();
        Ok(kept
            .into_iter()
            .map(|(candidate, url)| BirthdayRecord {
                name: candidate.name.clone(),
                url,
                string_date: day.to_string(),
                birthday,
            })
            .collect())
    }

    /// Fetch every candidate's profile and keep the ones that pass the body
    /// length and birth marker checks. Returns each kept candidate with its
    /// resolved URL, in candidate order.
    fn keep_notable<'a>(&self, candidates: &'a [Candidate]) -> Result<Vec<(&'a Candidate, String)>> {
        let mut kept = Vec::new();
        for candidate in candidates {
            let url = resolve_link(&self.config.base_url, &candidate.link);
            let stats = inspect_profile(&self.fetcher.fetch(&url)?);
            debug!(
                "{}: {} body text nodes, birth marker: {}",
                candidate.name, stats.body_text_nodes, stats.has_birth_marker
            );
            if stats.is_kept(self.config.min_body_text_nodes) {
                kept.push((candidate, url));
            }
        }
        Ok(kept)
    }

    /// Harvest one day and write `{out_dir}/{day}.csv`. Nothing is written if
    /// the harvest fails.
    pub fn harvest_and_write(&self, day: &DayId, out_dir: &Path) -> Result<PathBuf> {
        let records = self.harvest_day(day)?;
        let path = day_file_path(out_dir, day);
        write_table(&path, &records)?;
        info!("Wrote {} rows to {}", records.len(), path.display());
        Ok(path)
    }

    pub fn run(&self, days: &[DayId], out_dir: &Path, policy: MismatchPolicy) -> Result<HarvestReport> {
        let mut report = HarvestReport::default();
        for day in days {
            match self.harvest_and_write(day, out_dir) {
                Ok(path) => report.written.push(path),
                Err(e) if e.is_alignment() && policy == MismatchPolicy::Skip => {
                    warn!("Skipping {}: {}", day, e);
                    report.skipped.push((*day, e));
                }
                Err(e) => return Err(e),
            }
        }
        Ok(report)
    }
}

fn dump_group(label: &str, group: &CandidateGroup) {
    debug!(
        "{}: {} names, {} links",
        label,
        group.names.len(),
        group.links.len()
    );
    for (index, name) in group.names.iter().enumerate() {
        debug!("{} name {}: {}", label, index, name);
    }
    for (index, link) in group.links.iter().enumerate() {
        debug!("{} link {}: {}", label, index, link);
    }
}
