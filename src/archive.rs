// src/archive.rs
//! Multi-page accumulation and the on-disk archive format.
//!
//! Stat columns differ between seasons (the site has added, split and dropped
//! columns over the years), so an archive does not assume one schema. Its stat
//! columns are the union of every page's labels in first-seen order, and a
//! row whose page lacked a column gets an empty cell there. Reading an archive
//! back turns those empty cells into `None`.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::config::consts::{IDENTITY_COLS, IDENTITY_LABELS};
use crate::csv::{format_value, parse_rows};
use crate::error::{Error, Result};
use crate::model::{PlayerIdentity, StatKind, StatTable, identity_cells};

/// Every page of one stat kind scraped during a run, in scrape order.
#[derive(Debug, Clone)]
pub struct StatArchive {
    kind: StatKind,
    tables: Vec<StatTable>,
    stat_labels: Vec<String>,
    index: HashMap<String, usize>,
}

impl StatArchive {
    pub fn new(kind: StatKind) -> Self {
        Self { kind, tables: Vec::new(), stat_labels: Vec::new(), index: HashMap::new() }
    }

    pub fn kind(&self) -> StatKind {
        self.kind
    }

    /// Append a page. No deduplication: re-pushing a page duplicates its rows.
    pub fn push(&mut self, table: StatTable) {
        if let Some(first) = self.tables.first() {
            if first.labels.stat_labels() != table.labels.stat_labels() {
                logw!(
                    "{}: stat columns differ from {} ({:?} vs {:?}); absent cells will be left empty",
                    table.page,
                    first.page,
                    table.labels.stat_labels(),
                    first.labels.stat_labels()
                );
            }
        }
        for label in table.labels.stat_labels() {
            if !self.index.contains_key(label) {
                self.index.insert(label.clone(), self.stat_labels.len());
                self.stat_labels.push(label.clone());
            }
        }
        self.tables.push(table);
    }

    pub fn pages(&self) -> usize {
        self.tables.len()
    }

    /// Total player rows across all pages.
    pub fn len(&self) -> usize {
        self.tables.iter().map(StatTable::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Identity labels followed by the union of stat labels.
    pub fn labels(&self) -> Vec<String> {
        IDENTITY_LABELS
            .iter()
            .map(|l| s!(*l))
            .chain(self.stat_labels.iter().cloned())
            .collect()
    }

    /// Header-aligned string rows, ready for CSV.
    pub fn to_records(&self) -> Vec<Vec<String>> {
        let width = IDENTITY_COLS + self.stat_labels.len();
        let mut out = Vec::with_capacity(self.len());

        for table in &self.tables {
            // where each of this page's stat columns lands in the union
            let slots: Vec<usize> = table
                .labels
                .stat_labels()
                .iter()
                .map(|l| IDENTITY_COLS + self.index[l])
                .collect();

            for row in &table.rows {
                let mut cells = identity_cells(row);
                cells.resize(width, s!());
                for (slot, v) in slots.iter().zip(&row.values) {
                    cells[*slot] = format_value(*v);
                }
                out.push(cells);
            }
        }
        out
    }
}

/// One row read back from an archive file.
#[derive(Debug, Clone, PartialEq)]
pub struct ArchiveRow {
    pub identity: PlayerIdentity,
    pub season: u16,
    pub fantasy_team_id: u32,
    /// Aligned with `LoadedArchive::stat_labels()`; `None` = column absent for this row's page.
    pub values: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadedArchive {
    pub labels: Vec<String>,
    pub rows: Vec<ArchiveRow>,
}

impl LoadedArchive {
    pub fn stat_labels(&self) -> &[String] {
        &self.labels[IDENTITY_COLS..]
    }

    /// Index into `ArchiveRow::values` for a stat label.
    pub fn stat_index(&self, label: &str) -> Option<usize> {
        self.stat_labels().iter().position(|l| l == label)
    }
}

/// Read an archive written by `file::export_archive`.
pub fn load_archive(path: &Path) -> Result<LoadedArchive> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let (labels, records) = parse_rows(BufReader::new(file))?;
    let bad = |detail: String| Error::Archive { path: path.to_path_buf(), detail };

    if labels.len() < IDENTITY_COLS || labels[..IDENTITY_COLS] != IDENTITY_LABELS {
        return Err(bad(format!("header does not start with {IDENTITY_LABELS:?}")));
    }

    let mut rows = Vec::with_capacity(records.len());
    for (i, rec) in records.into_iter().enumerate() {
        let line = i + 2; // header is line 1
        let season = rec[2]
            .parse()
            .map_err(|_| bad(format!("line {line}: bad YEAR {:?}", rec[2])))?;
        let fantasy_team_id = rec[3]
            .parse()
            .map_err(|_| bad(format!("line {line}: bad FANTASYTEAM {:?}", rec[3])))?;

        let mut values = Vec::with_capacity(rec.len() - IDENTITY_COLS);
        for (c, cell) in rec.iter().enumerate().skip(IDENTITY_COLS) {
            if cell.is_empty() {
                values.push(None);
                continue;
            }
            let v: f64 = cell
                .parse()
                .map_err(|_| bad(format!("line {line}, column {}: bad value {cell:?}", labels[c])))?;
            values.push(Some(v));
        }

        let mut cells = rec.into_iter();
        let mut next = || cells.next().unwrap_or_default();
        let (name, external_id) = (next(), next());
        let (_, _) = (next(), next()); // YEAR, FANTASYTEAM
        let (league_team, position) = (next(), next());

        rows.push(ArchiveRow {
            identity: PlayerIdentity { name, external_id, league_team, position },
            season,
            fantasy_team_id,
            values,
        });
    }

    logd!("loaded {} rows from {}", rows.len(), path.display());
    Ok(LoadedArchive { labels, rows })
}
