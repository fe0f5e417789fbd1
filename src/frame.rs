// src/frame.rs
//! Joins a page's labels and records into one `StatTable`.

use crate::core::page::StatPage;
use crate::error::ExtractError;
use crate::model::{ColumnLabels, PageId, PlayerIdentity, PlayerStatRow, StatTable};
use crate::specs::{Layout, LayoutVersion, extract_labels, extract_records};

/// Bind identities and stat rows to `labels`, broadcasting the page's season
/// and fantasy team to every row. Row order is preserved.
///
/// A width or height mismatch means an extractor bug, never a recoverable
/// page condition, and is reported as `ExtractError::Consistency`.
pub fn assemble(
    page: PageId,
    labels: ColumnLabels,
    identities: Vec<PlayerIdentity>,
    stats: Vec<Vec<f64>>,
) -> Result<StatTable, ExtractError> {
    let expected = labels.stat_count();
    let bad_width = stats.iter().find(|row| row.len() != expected);

    if identities.len() != stats.len() || bad_width.is_some() {
        return Err(ExtractError::Consistency {
            page,
            identities: identities.len(),
            rows: stats.len(),
            labels: expected,
            columns: bad_width.map_or(expected, Vec::len),
        });
    }

    let rows = identities
        .into_iter()
        .zip(stats)
        .map(|(identity, values)| PlayerStatRow {
            identity,
            season: page.season,
            fantasy_team_id: page.fantasy_team,
            values,
        })
        .collect();

    Ok(StatTable { page, labels, rows })
}

/// Full per-page pipeline: pick the layout, read labels and records, assemble.
pub fn build_table<P: StatPage>(page: &P, fixed: Option<LayoutVersion>) -> Result<StatTable, ExtractError> {
    let layout = Layout::resolve(page, fixed)?;
    let labels = extract_labels(page, &layout)?;
    let records = extract_records(page, &layout)?;
    assemble(*page.id(), labels, records.identities, records.stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StatKind;

    fn page_id() -> PageId {
        PageId { league: 4779, season: 2015, fantasy_team: 7, kind: StatKind::Hitting }
    }

    fn ident(n: u32) -> PlayerIdentity {
        PlayerIdentity {
            name: format!("Player {n}"),
            external_id: n.to_string(),
            league_team: s!("NYY"),
            position: s!("C"),
        }
    }

    fn labels(k: usize) -> ColumnLabels {
        ColumnLabels::with_stats((0..k).map(|i| format!("S{i}")))
    }

    #[test]
    fn three_rows_four_stats() {
        let stats = vec![vec![1.0, 2.0, 3.0, 4.0]; 3];
        let table = assemble(page_id(), labels(4), (1..=3).map(ident).collect(), stats).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.column_count(), 10);
        assert!(table.rows.iter().all(|r| r.fantasy_team_id == 7 && r.season == 2015));
        let records = table.to_records();
        assert!(records.iter().all(|r| r.len() == 10 && r[3] == "7" && r[2] == "2015"));
        assert_eq!(records[1][0], "Player 2");
    }

    #[test]
    fn height_mismatch_is_consistency_error() {
        let stats = vec![vec![1.0, 2.0]; 2];
        let err = assemble(page_id(), labels(2), (1..=3).map(ident).collect(), stats).unwrap_err();
        match err {
            ExtractError::Consistency { identities, rows, .. } => {
                assert_eq!((identities, rows), (3, 2));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn width_mismatch_is_consistency_error() {
        let stats = vec![vec![1.0, 2.0], vec![1.0, 2.0, 3.0]];
        let err = assemble(page_id(), labels(2), (1..=2).map(ident).collect(), stats).unwrap_err();
        assert!(matches!(err, ExtractError::Consistency { labels: 2, columns: 3, .. }));
    }

    #[test]
    fn empty_page_is_empty_table() {
        let table = assemble(page_id(), labels(5), Vec::new(), Vec::new()).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.column_count(), 11);
    }
}
