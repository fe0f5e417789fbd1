// src/runner.rs
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::{
    archive::StatArchive,
    config::options::{AppOptions, ScrapeOptions},
    core::net::{HttpSource, PageSource},
    core::page::HtmlStatPage,
    error::Result,
    file::{commit_staged, discard_staged, stage_archive},
    frame::build_table,
    model::{PageId, StatKind},
    progress::Progress,
    store::{PageStore, StoreSource},
};

/// Summary of what was produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
    pub pages: usize,
    pub rows: usize,
}

/// Pick where pages come from: the store when offline, the site otherwise.
pub fn source_for(opts: &ScrapeOptions) -> Result<Box<dyn PageSource>> {
    if opts.offline {
        logd!("offline: reading pages from {}", opts.store_dir.display());
        Ok(Box::new(StoreSource::new(PageStore::new(&opts.store_dir))))
    } else {
        Ok(Box::new(HttpSource::new(opts)?))
    }
}

/// Scrape every configured page, then write one archive per stat kind.
///
/// `store`, when given, receives a copy of every fetched page.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
/// The first error aborts the run before anything is written.
pub fn run(
    opts: &AppOptions,
    source: &mut dyn PageSource,
    store: Option<&PageStore>,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let scrape = &opts.scrape;
    scrape.validate()?;

    if let Some(p) = progress.as_deref_mut() {
        p.begin(scrape.page_count());
    }

    let result = collect(scrape, source, store, progress.as_deref_mut().map(|p| p as &mut dyn Progress));

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    let (archives, pages) = result?;

    /* ---------------- Export ---------------- */

    // all files are staged before any is committed
    let mut summary = RunSummary { pages, ..RunSummary::default() };
    let mut staged = Vec::with_capacity(archives.len());
    for (kind, archive) in &archives {
        if archive.pages() == 0 {
            continue;
        }
        let path = opts.export.out_path(*kind);
        match stage_archive(archive, &path) {
            Ok(part) => staged.push((part, path)),
            Err(e) => {
                discard_staged(staged.iter().map(|(part, _)| part.as_path()));
                return Err(e);
            }
        }
        summary.rows += archive.len();
    }
    for (part, path) in staged {
        commit_staged(&part, &path)?;
        summary.files_written.push(path);
    }

    logf!(
        "done: {} pages, {} rows, {} files",
        summary.pages,
        summary.rows,
        summary.files_written.len()
    );
    Ok(summary)
}

/* ---------------- Scrape loop ---------------- */

fn collect(
    scrape: &ScrapeOptions,
    source: &mut dyn PageSource,
    store: Option<&PageStore>,
    mut progress: Option<&mut dyn Progress>,
) -> Result<(BTreeMap<StatKind, StatArchive>, usize)> {
    let kinds = scrape.kinds();
    let mut archives: BTreeMap<StatKind, StatArchive> =
        kinds.iter().map(|k| (*k, StatArchive::new(*k))).collect();
    let fixed = scrape.layout.fixed();
    let mut pages = 0;

    for season in scrape.seasons() {
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("season {season}"));
        }
        for team in scrape.teams() {
            for kind in &kinds {
                let id = PageId { league: scrape.league, season, fantasy_team: team, kind: *kind };

                let html = source.fetch(&id)?;
                if let Some(store) = store {
                    store.save(&id, &html)?;
                }

                let page = HtmlStatPage::parse(id, &html);
                let table = build_table(&page, fixed).inspect_err(|e| loge!("{e}"))?;
                let rows = table.len();

                if let Some(archive) = archives.get_mut(kind) {
                    archive.push(table);
                }
                pages += 1;

                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(&id, rows);
                }
            }
        }
    }

    Ok((archives, pages))
}
