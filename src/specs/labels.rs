// src/specs/labels.rs
use crate::core::page::{PageNode, StatPage};
use crate::core::sanitize::{normalize_ws, strip_nbsp};
use crate::error::ExtractError;
use crate::model::ColumnLabels;

use super::layout::Layout;

/// Column labels for a stat page: the identity labels, then one label per stat
/// column read from the first sub-header row.
///
/// Header cell 0 heads the fused name cell and becomes `PLAYER`; cell 1 is a
/// decorative glyph and is skipped. Each remaining cell contributes the text of
/// its first child with NBSPs removed.
pub fn extract_labels<P: StatPage>(page: &P, layout: &Layout) -> Result<ColumnLabels, ExtractError> {
    let layout_err = |detail: String| ExtractError::Layout { page: *page.id(), detail };

    let rows = page.find_all("tr", layout.header_row);
    let header = rows
        .first()
        .ok_or_else(|| layout_err(format!("no <tr class=\"{}\"> header row", layout.header_row)))?;

    let cells = header.children();
    if cells.len() < 2 {
        return Err(layout_err(format!("header row has {} cells, expected at least 2", cells.len())));
    }

    let mut raw = Vec::with_capacity(cells.len() - 2);
    for (i, cell) in cells.iter().enumerate().skip(2) {
        let text = cell
            .first_child_text()
            .ok_or_else(|| layout_err(format!("header cell {i} is empty")))?;
        let label = normalize_ws(&strip_nbsp(&text));
        if label.is_empty() {
            return Err(layout_err(format!("header cell {i} has a blank label")));
        }
        raw.push(label);
    }

    let labels = ColumnLabels::with_stats(raw.iter().cloned());
    for (orig, got) in raw.iter().zip(labels.stat_labels()) {
        if orig != got {
            logw!("{}: duplicate stat label {orig:?} renamed to {got:?}", page.id());
        }
    }
    logd!("{}: {} stat labels {:?}", page.id(), labels.stat_count(), labels.stat_labels());

    Ok(labels)
}
