// src/store.rs
//! On-disk page cache. One HTML file per page:
//! `{dir}/{league}/{season}/team_{team}_{kind}.html`.

use std::fs;
use std::path::PathBuf;

use crate::core::net::PageSource;
use crate::error::{Error, Result};
use crate::file::ensure_parent;
use crate::model::PageId;

#[derive(Clone, Debug)]
pub struct PageStore {
    dir: PathBuf,
}

impl PageStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, id: &PageId) -> PathBuf {
        self.dir
            .join(id.league.to_string())
            .join(id.season.to_string())
            .join(join!("team_", &id.fantasy_team.to_string(), "_", id.kind.as_str(), ".html"))
    }

    pub fn contains(&self, id: &PageId) -> bool {
        self.path_for(id).is_file()
    }

    pub fn load(&self, id: &PageId) -> Result<String> {
        let path = self.path_for(id);
        if !path.is_file() {
            return Err(Error::NotStored(path));
        }
        fs::read_to_string(&path).map_err(|e| Error::io(&path, e))
    }

    pub fn save(&self, id: &PageId, html: &str) -> Result<PathBuf> {
        let path = self.path_for(id);
        ensure_parent(&path)?;
        fs::write(&path, html).map_err(|e| Error::io(&path, e))?;
        logd!("stored {id} at {}", path.display());
        Ok(path)
    }
}

/// Serves pages from a `PageStore` only; never touches the network.
pub struct StoreSource {
    store: PageStore,
}

impl StoreSource {
    pub fn new(store: PageStore) -> Self {
        Self { store }
    }
}

impl PageSource for StoreSource {
    fn fetch(&mut self, id: &PageId) -> Result<String> {
        self.store.load(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StatKind;

    fn tmp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("fantasy_archive_store_{name}_{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    fn id() -> PageId {
        PageId { league: 4779, season: 2009, fantasy_team: 3, kind: StatKind::Pitching }
    }

    #[test]
    fn path_layout() {
        let store = PageStore::new("pages");
        assert_eq!(
            store.path_for(&id()),
            PathBuf::from("pages/4779/2009/team_3_pitching.html")
        );
    }

    #[test]
    fn save_then_load() {
        let store = PageStore::new(tmp_dir("roundtrip"));
        assert!(!store.contains(&id()));
        store.save(&id(), "<html>ok</html>").unwrap();
        assert!(store.contains(&id()));
        assert_eq!(store.load(&id()).unwrap(), "<html>ok</html>");
    }

    #[test]
    fn missing_page_is_not_stored() {
        let mut src = StoreSource::new(PageStore::new(tmp_dir("missing")));
        assert!(matches!(src.fetch(&id()), Err(Error::NotStored(_))));
    }
}
