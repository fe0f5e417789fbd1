// src/specs/layout.rs
//! Markup versions of the stat page.
//!
//! The table classes have been stable, but the player id moved: older pages
//! put it on the name link (`<a playerid="...">`), newer pages on the row
//! itself (`<tr id="plyr30952">`). Everything version-specific lives here.

use crate::config::consts::{
    HEADER_ROW_CLASSES, NESTED_ID_ATTR, PLAYER_ROW_CLASS, ROW_ID_ATTR, ROW_ID_PREFIX,
};
use crate::core::page::{PageNode, StatPage};
use crate::error::ExtractError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutVersion {
    /// Id on the row: `<tr id="plyr{id}" class="pncPlayerRow ...">`.
    Current,
    /// Id on the first element of the name cell: `<a playerid="{id}">`.
    Legacy,
}

/// Where a row's external player id lives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerIdSource {
    RowAttr { attr: &'static str, prefix: &'static str },
    NestedAttr { attr: &'static str },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    pub version: LayoutVersion,
    /// Classes of the stat-name sub-header row.
    pub header_row: &'static str,
    /// Class of a player row.
    pub player_row: &'static str,
    pub player_id: PlayerIdSource,
}

impl Layout {
    pub fn for_version(version: LayoutVersion) -> Self {
        let player_id = match version {
            LayoutVersion::Current => PlayerIdSource::RowAttr { attr: ROW_ID_ATTR, prefix: ROW_ID_PREFIX },
            LayoutVersion::Legacy => PlayerIdSource::NestedAttr { attr: NESTED_ID_ATTR },
        };
        Self {
            version,
            header_row: HEADER_ROW_CLASSES,
            player_row: PLAYER_ROW_CLASS,
            player_id,
        }
    }

    /// Use `fixed` when given, otherwise sniff the page.
    pub fn resolve<P: StatPage>(page: &P, fixed: Option<LayoutVersion>) -> Result<Self, ExtractError> {
        let version = match fixed {
            Some(v) => v,
            None => LayoutVersion::detect(page)?,
        };
        Ok(Self::for_version(version))
    }
}

impl LayoutVersion {
    /// Decide from the first player row. A page without player rows has
    /// nothing to disambiguate and counts as `Current`.
    pub fn detect<P: StatPage>(page: &P) -> Result<Self, ExtractError> {
        let rows = page.find_all("tr", PLAYER_ROW_CLASS);
        let Some(first) = rows.first() else {
            return Ok(LayoutVersion::Current);
        };

        let row_id = first.attr(ROW_ID_ATTR).unwrap_or("");
        if row_id.len() > ROW_ID_PREFIX.len() && row_id.starts_with(ROW_ID_PREFIX) {
            return Ok(LayoutVersion::Current);
        }

        let nested = first
            .children()
            .first()
            .and_then(|cell| cell.children().into_iter().next())
            .is_some_and(|el| el.attr(NESTED_ID_ATTR).is_some());
        if nested {
            return Ok(LayoutVersion::Legacy);
        }

        Err(ExtractError::Layout {
            page: *page.id(),
            detail: format!(
                "first player row has neither {ROW_ID_ATTR}=\"{ROW_ID_PREFIX}…\" nor a nested {NESTED_ID_ATTR} attribute"
            ),
        })
    }
}

impl PlayerIdSource {
    /// Pull the id from a player row. `Err` carries a human-readable reason.
    pub fn extract<N: PageNode>(&self, row: &N, cells: &[N]) -> Result<String, String> {
        match *self {
            PlayerIdSource::RowAttr { attr, prefix } => {
                let raw = row.attr(attr).ok_or_else(|| format!("row has no {attr} attribute"))?;
                match raw.strip_prefix(prefix) {
                    Some(id) if !id.is_empty() => Ok(s!(id)),
                    _ => Err(format!("row {attr} {raw:?} lacks the {prefix:?} prefix")),
                }
            }
            PlayerIdSource::NestedAttr { attr } => {
                let first = cells
                    .first()
                    .and_then(|cell| cell.children().into_iter().next())
                    .ok_or_else(|| s!("name cell has no nested element"))?;
                match first.attr(attr) {
                    Some(id) if !id.trim().is_empty() => Ok(s!(id.trim())),
                    _ => Err(format!("name link has no {attr} attribute")),
                }
            }
        }
    }
}
