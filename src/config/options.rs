// src/config/options.rs
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::consts::*;
use crate::error::{Error, Result};
use crate::model::StatKind;
use crate::specs::layout::LayoutVersion;

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

impl AppOptions {
    /// Read a TOML file; missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        toml::from_str(&text).map_err(|source| Error::Config { path: path.to_path_buf(), source })
    }
}

/// How the page markup version is chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum LayoutChoice {
    /// Sniff each page.
    #[default]
    Auto,
    Current,
    Legacy,
}

impl LayoutChoice {
    pub fn fixed(self) -> Option<LayoutVersion> {
        match self {
            LayoutChoice::Auto => None,
            LayoutChoice::Current => Some(LayoutVersion::Current),
            LayoutChoice::Legacy => Some(LayoutVersion::Legacy),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScrapeOptions {
    pub league: u32,
    pub first_season: u16,
    pub last_season: u16,    // inclusive
    pub team_count: u32,     // teams are numbered 1..=team_count
    pub kinds: Vec<StatKind>,
    pub layout: LayoutChoice,
    pub base_url: String,
    pub cookie: Option<String>, // forwarded verbatim for private leagues
    pub timeout_secs: u64,
    pub store_dir: PathBuf,
    pub offline: bool,       // read pages from the store only
    pub keep_pages: bool,    // save every fetched page to the store
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            league: DEFAULT_LEAGUE,
            first_season: DEFAULT_FIRST_SEASON,
            last_season: DEFAULT_LAST_SEASON,
            team_count: DEFAULT_TEAM_COUNT,
            kinds: StatKind::ALL.to_vec(),
            layout: LayoutChoice::Auto,
            base_url: s!(BASE_URL),
            cookie: None,
            timeout_secs: TIMEOUT_SECS,
            store_dir: PathBuf::from(STORE_DIR).join(PAGES_SUBDIR),
            offline: false,
            keep_pages: false,
        }
    }
}

impl ScrapeOptions {
    pub fn seasons(&self) -> RangeInclusive<u16> {
        self.first_season..=self.last_season
    }

    pub fn teams(&self) -> RangeInclusive<u32> {
        1..=self.team_count
    }

    /// Requested kinds in canonical order (hitting before pitching), deduped.
    pub fn kinds(&self) -> Vec<StatKind> {
        let mut kinds = self.kinds.clone();
        kinds.sort_unstable();
        kinds.dedup();
        kinds
    }

    pub fn page_count(&self) -> usize {
        self.seasons().count() * self.teams().count() * self.kinds().len()
    }

    pub fn validate(&self) -> Result<()> {
        if self.first_season > self.last_season {
            return Err(Error::Options(format!(
                "first season {} is after last season {}",
                self.first_season, self.last_season
            )));
        }
        if self.team_count == 0 {
            return Err(Error::Options(s!("team count must be at least 1")));
        }
        if self.kinds.is_empty() {
            return Err(Error::Options(s!("no stat kinds selected")));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportOptions {
    pub out_dir: PathBuf,
    pub hitting_file: String,
    pub pitching_file: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            hitting_file: s!(DEFAULT_HITTING_FILE),
            pitching_file: s!(DEFAULT_PITCHING_FILE),
        }
    }
}

impl ExportOptions {
    pub fn out_path(&self, kind: StatKind) -> PathBuf {
        let name = match kind {
            StatKind::Hitting => &self.hitting_file,
            StatKind::Pitching => &self.pitching_file,
        };
        self.out_dir.join(name)
    }
}
