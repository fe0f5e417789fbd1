// src/progress.rs
use crate::model::PageId;

/// Lightweight progress reporting for a scrape run.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of pages the run will visit.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called after each page is extracted and added to its archive.
    fn item_done(&mut self, _page: &PageId, _rows: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Counts pages and reports through the log, one line per page.
#[derive(Default)]
pub struct LogProgress {
    total: usize,
    done: usize,
}

impl Progress for LogProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
        logf!("scraping {total} pages");
    }

    fn log(&mut self, msg: &str) {
        logf!("{msg}");
    }

    fn item_done(&mut self, page: &PageId, rows: usize) {
        self.done += 1;
        logf!("[{}/{}] {page}: {rows} rows", self.done, self.total);
    }
}
