// src/specs/identity.rs
use crate::config::consts::NBSP;
use crate::core::sanitize::{strip_flag, strip_nbsp};

/// The parts of the fused name cell. The external id comes from elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameParts {
    pub name: String,
    pub league_team: String,
    pub position: String,
}

/// "Smith*, NYY\u{a0}SS,OF \u{a0}\u{a0}DTD" → ("Smith", "NYY", "SS")
///
/// - name: everything before the first comma, flag markers removed
/// - team: after the comma, up to the first NBSP
/// - position: primary (first listed) only; trailing annotation after a
///   double NBSP is dropped
pub fn parse_name_cell(fused: &str) -> Result<NameParts, String> {
    let (raw_name, rest) = fused
        .split_once(',')
        .ok_or_else(|| s!("no ',' between player name and team"))?;

    let name = strip_flag(raw_name);
    if name.is_empty() {
        return Err(s!("empty player name"));
    }

    let (team, positions) = rest
        .trim_start_matches(' ')
        .split_once(NBSP)
        .ok_or_else(|| s!("no non-breaking space between team and position"))?;

    let primary = positions.split(',').next().unwrap_or("");
    let primary = match primary.split_once("\u{a0}\u{a0}") {
        Some((head, _tail)) => head,
        None => primary,
    };

    Ok(NameParts {
        name,
        league_team: strip_nbsp(team).trim().to_string(),
        position: strip_nbsp(primary).trim().to_string(),
    })
}
