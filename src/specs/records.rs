// src/specs/records.rs
use crate::config::consts::ZERO_SENTINEL;
use crate::core::page::{PageNode, StatPage};
use crate::error::ExtractError;
use crate::model::{PlayerIdentity, StatCell};

use super::identity::parse_name_cell;
use super::layout::Layout;

/// Per-player output of one page, row-aligned: `identities[i]` owns `stats[i]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Records {
    pub identities: Vec<PlayerIdentity>,
    pub stats: Vec<Vec<f64>>,
}

impl Records {
    pub fn len(&self) -> usize {
        self.identities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identities.is_empty()
    }
}

/// `--` means nothing recorded and reads as zero; anything else must be a
/// number. The site prints ratio stats with a zero denominator as `INF`, which
/// is kept as infinity.
pub fn parse_stat_cell(text: &str) -> Result<StatCell, String> {
    let t = text.trim();
    if t == ZERO_SENTINEL {
        return Ok(StatCell::Sentinel);
    }
    t.parse::<f64>()
        .map(StatCell::Number)
        .map_err(|_| s!("neither a number nor the zero marker"))
}

/// Walk every player row in page order. Cell 0 is the fused name cell, cell 1
/// a spacer, cells 2.. the stats. A page with no player rows is empty, not an
/// error.
///
/// Parse errors report the row index among player rows and the cell index
/// within the row (both from 0).
pub fn extract_records<P: StatPage>(page: &P, layout: &Layout) -> Result<Records, ExtractError> {
    let rows = page.find_all("tr", layout.player_row);
    let mut out = Records {
        identities: Vec::with_capacity(rows.len()),
        stats: Vec::with_capacity(rows.len()),
    };

    for (r, row) in rows.iter().enumerate() {
        let parse_err = |column: usize, text: &str, reason: String| ExtractError::Parse {
            page: *page.id(),
            row: r,
            column,
            text: s!(text),
            reason,
        };

        let cells = row.children();
        if cells.len() < 2 {
            let text = row.text();
            return Err(parse_err(0, &text, format!("player row has {} cells, expected at least 2", cells.len())));
        }

        // 1) identity
        let fused = cells[0].text();
        let parts = parse_name_cell(&fused).map_err(|reason| parse_err(0, &fused, reason))?;
        let external_id = layout
            .player_id
            .extract(row, &cells)
            .map_err(|reason| parse_err(0, &fused, reason))?;

        // 2) stats
        let mut values = Vec::with_capacity(cells.len() - 2);
        for (c, cell) in cells.iter().enumerate().skip(2) {
            let text = cell.text();
            let stat = parse_stat_cell(&text).map_err(|reason| parse_err(c, &text, reason))?;
            values.push(stat.value());
        }

        out.identities.push(PlayerIdentity {
            name: parts.name,
            external_id,
            league_team: parts.league_team,
            position: parts.position,
        });
        out.stats.push(values);
    }

    logd!("{}: {} player rows", page.id(), out.len());
    Ok(out)
}
