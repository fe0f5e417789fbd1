// src/model.rs
//! Typed shapes that flow from page extraction to the archive.

use std::fmt;
use std::ops::Deref;

use serde::Deserialize;

use crate::config::consts::{IDENTITY_COLS, IDENTITY_LABELS};

/// Which stat table a page shows. The site calls this the `filter` parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum StatKind {
    Hitting,
    Pitching,
}

impl StatKind {
    pub const ALL: [StatKind; 2] = [StatKind::Hitting, StatKind::Pitching];

    pub fn filter(self) -> u8 {
        match self {
            StatKind::Hitting => 1,
            StatKind::Pitching => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StatKind::Hitting => "hitting",
            StatKind::Pitching => "pitching",
        }
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One (league, season, fantasy team, stat kind) page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PageId {
    pub league: u32,
    pub season: u16,
    pub fantasy_team: u32,
    pub kind: StatKind,
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "league {} / {} / team {} / {}",
            self.league, self.season, self.fantasy_team, self.kind
        )
    }
}

/// Ordered, unique column names: six identity labels, then one per raw stat column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnLabels(Vec<String>);

impl ColumnLabels {
    /// Prepend the identity labels. Any stat label that collides with an
    /// earlier label gets a `_N` suffix (N from 2).
    pub fn with_stats<I>(stats: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut labels: Vec<String> = IDENTITY_LABELS.iter().map(|l| s!(*l)).collect();
        for label in stats {
            let unique = if labels.contains(&label) {
                let mut n = 2;
                loop {
                    let candidate = format!("{label}_{n}");
                    if !labels.contains(&candidate) {
                        break candidate;
                    }
                    n += 1;
                }
            } else {
                label
            };
            labels.push(unique);
        }
        Self(labels)
    }

    /// Stat labels only (everything after the identity columns).
    pub fn stat_labels(&self) -> &[String] {
        &self.0[IDENTITY_COLS..]
    }

    pub fn stat_count(&self) -> usize {
        self.0.len() - IDENTITY_COLS
    }
}

impl Deref for ColumnLabels {
    type Target = [String];
    fn deref(&self) -> &[String] {
        &self.0
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerIdentity {
    pub name: String,
    pub external_id: String,
    pub league_team: String,
    pub position: String,
}

/// A stat cell after typing: the site's "nothing recorded" marker, or a number.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StatCell {
    Sentinel,
    Number(f64),
}

impl StatCell {
    pub fn value(self) -> f64 {
        match self {
            StatCell::Sentinel => 0.0,
            StatCell::Number(v) => v,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlayerStatRow {
    pub identity: PlayerIdentity,
    pub season: u16,
    pub fantasy_team_id: u32,
    /// Aligned with `ColumnLabels::stat_labels()`.
    pub values: Vec<f64>,
}

/// All rows extracted from one page.
#[derive(Clone, Debug, PartialEq)]
pub struct StatTable {
    pub page: PageId,
    pub labels: ColumnLabels,
    pub rows: Vec<PlayerStatRow>,
}

impl StatTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_count(&self) -> usize {
        self.labels.len()
    }

    /// Stringly rows in label order, identity columns first.
    pub fn to_records(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| {
                let mut out = identity_cells(row);
                out.extend(row.values.iter().map(|v| crate::csv::format_value(*v)));
                out
            })
            .collect()
    }
}

/// The six identity cells of a row, in label order.
pub fn identity_cells(row: &PlayerStatRow) -> Vec<String> {
    let id = &row.identity;
    vec![
        id.name.clone(),
        id.external_id.clone(),
        row.season.to_string(),
        row.fantasy_team_id.to_string(),
        id.league_team.clone(),
        id.position.clone(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_start_with_identity_columns() {
        let labels = ColumnLabels::with_stats(vec![s!("AB"), s!("R")]);
        assert_eq!(&labels[..6], &IDENTITY_LABELS.map(String::from)[..]);
        assert_eq!(labels.stat_labels(), &[s!("AB"), s!("R")]);
        assert_eq!(labels.stat_count(), 2);
    }

    #[test]
    fn duplicate_labels_get_suffixes() {
        let labels = ColumnLabels::with_stats(vec![s!("HR"), s!("HR"), s!("HR"), s!("POS")]);
        assert_eq!(labels.stat_labels(), &[s!("HR"), s!("HR_2"), s!("HR_3"), s!("POS_2")]);
    }

    #[test]
    fn sentinel_is_zero() {
        assert_eq!(StatCell::Sentinel.value(), 0.0);
        assert_eq!(StatCell::Number(4.5).value(), 4.5);
    }

    #[test]
    fn page_id_display_names_everything() {
        let id = PageId { league: 4779, season: 2015, fantasy_team: 7, kind: StatKind::Pitching };
        assert_eq!(id.to_string(), "league 4779 / 2015 / team 7 / pitching");
    }
}
