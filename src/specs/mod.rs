// src/specs/mod.rs
//! # Scraping "specs" module
//!
//! Page-specific knowledge of the league site's *active stats* page: where the
//! ground truth lives in the markup and how to read it.
//!
//! ## What lives here
//! - **Layout versions** (`layout`): row markers and where the player id sits,
//!   per markup generation, plus detection.
//! - **Label extraction** (`labels`): the sub-header row → `ColumnLabels`.
//! - **Record extraction** (`records`): player rows → identities + stat matrix.
//! - **Name-cell parsing** (`identity`): `"Smith*, NYY SS,OF"` → typed parts.
//!
//! ## What does **not** live here
//! - Fetching or caching pages (`core::net`, `store`).
//! - Joining labels and records into a table (`frame`), or merging tables
//!   across pages (`archive`).
//!
//! ## Conventions & invariants
//! - Every function takes the page explicitly (`&impl StatPage`); nothing reads
//!   ambient state.
//! - Labels and records are read independently from the same page and must
//!   agree in width; `frame::assemble` enforces it.
//! - Errors always carry the `PageId`; parse errors also carry row/column.
//!
//! ## Testing notes
//! Specs are tested offline against small HTML snippets parsed with
//! `HtmlStatPage`.
pub mod identity;
pub mod labels;
pub mod layout;
pub mod records;

pub use labels::extract_labels;
pub use layout::{Layout, LayoutVersion, PlayerIdSource};
pub use records::{Records, extract_records, parse_stat_cell};
