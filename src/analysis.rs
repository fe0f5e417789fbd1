// src/analysis.rs
//! Per-team stat leaders over an archive: who contributed most of one stat to
//! one fantasy team across every archived season.

use std::collections::HashMap;

use crate::archive::LoadedArchive;
use crate::csv::format_value;
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Leader {
    pub team: String,
    pub player: String,
    pub total: f64,
}

/// Sum `stat` per player id over the rows of `team_id`, largest first.
///
/// Absent cells count as zero. Ties keep the order players first appear in the
/// archive. A player is named by the first name seen for their id.
pub fn stat_leaders(
    archive: &LoadedArchive,
    stat: &str,
    team_id: u32,
    team_name: &str,
    n: usize,
) -> Result<Vec<Leader>> {
    let col = archive
        .stat_index(stat)
        .ok_or_else(|| Error::Analysis(format!("no stat column named {stat:?}")))?;

    // (first-seen name, running total), in first-seen order
    let mut totals: Vec<(String, f64)> = Vec::new();
    let mut slot: HashMap<&str, usize> = HashMap::new();

    for row in archive.rows.iter().filter(|r| r.fantasy_team_id == team_id) {
        let v = row.values[col].unwrap_or(0.0);
        let i = *slot.entry(row.identity.external_id.as_str()).or_insert_with(|| {
            totals.push((row.identity.name.clone(), 0.0));
            totals.len() - 1
        });
        totals[i].1 += v;
    }

    if totals.is_empty() {
        logw!("team {team_id} has no rows in the archive");
    }

    // stable sort keeps first-appearance order among equal totals
    totals.sort_by(|a, b| b.1.total_cmp(&a.1));
    totals.truncate(n);

    Ok(totals
        .into_iter()
        .map(|(player, total)| Leader { team: s!(team_name), player, total })
        .collect())
}

/// Header + rows for printing: TEAM, PLAYER, <stat>.
pub fn leaders_table(stat: &str, leaders: &[Leader]) -> (Vec<String>, Vec<Vec<String>>) {
    let headers = vec![s!("TEAM"), s!("PLAYER"), s!(stat)];
    let rows = leaders
        .iter()
        .map(|l| vec![l.team.clone(), l.player.clone(), format_value(l.total)])
        .collect();
    (headers, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::ArchiveRow;
    use crate::config::consts::IDENTITY_LABELS;
    use crate::model::PlayerIdentity;

    fn row(id: &str, name: &str, team: u32, season: u16, r: Option<f64>) -> ArchiveRow {
        ArchiveRow {
            identity: PlayerIdentity {
                name: s!(name),
                external_id: s!(id),
                league_team: s!("Bos"),
                position: s!("OF"),
            },
            season,
            fantasy_team_id: team,
            values: vec![Some(1.0), r],
        }
    }

    fn archive() -> LoadedArchive {
        let mut labels: Vec<String> = IDENTITY_LABELS.iter().map(|l| s!(*l)).collect();
        labels.extend([s!("AB"), s!("R")]);
        LoadedArchive {
            labels,
            rows: vec![
                row("1", "Ortiz", 7, 2007, Some(10.0)),
                row("2", "Ramirez", 7, 2007, Some(30.0)),
                row("3", "Lowell", 8, 2007, Some(99.0)),
                row("1", "David Ortiz", 7, 2008, Some(25.0)),
                row("4", "Youkilis", 7, 2008, None),
                row("5", "Pedroia", 7, 2008, Some(0.0)),
            ],
        }
    }

    #[test]
    fn sums_across_seasons_and_sorts() {
        let out = stat_leaders(&archive(), "R", 7, "Evil Empire", 10).unwrap();
        let names: Vec<&str> = out.iter().map(|l| l.player.as_str()).collect();
        assert_eq!(names, vec!["Ortiz", "Ramirez", "Youkilis", "Pedroia"]);
        assert_eq!(out[0].total, 35.0);
        assert!(out.iter().all(|l| l.team == "Evil Empire"));
    }

    #[test]
    fn top_n_only() {
        let out = stat_leaders(&archive(), "R", 7, "x", 1).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].player, "Ortiz");
    }

    #[test]
    fn other_teams_excluded() {
        let out = stat_leaders(&archive(), "R", 7, "x", 10).unwrap();
        assert!(out.iter().all(|l| l.player != "Lowell"));
    }

    #[test]
    fn unknown_stat_is_error() {
        assert!(matches!(stat_leaders(&archive(), "HR", 7, "x", 5), Err(Error::Analysis(_))));
        // identity labels are not stats
        assert!(stat_leaders(&archive(), "YEAR", 7, "x", 5).is_err());
    }

    #[test]
    fn table_has_stat_header() {
        let out = stat_leaders(&archive(), "R", 7, "EE", 2).unwrap();
        let (h, rows) = leaders_table("R", &out);
        assert_eq!(h, vec!["TEAM", "PLAYER", "R"]);
        assert_eq!(rows[1], vec!["EE", "Ramirez", "30"]);
    }
}
