// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::archive::StatArchive;
use crate::csv::write_rows;
use crate::error::{Error, Result};

/// Write an archive as CSV: union header, then one line per player row.
/// Parent directories are created. Returns the path written to.
pub fn export_archive(archive: &StatArchive, path: &Path) -> Result<PathBuf> {
    let part = stage_archive(archive, path)?;
    commit_staged(&part, path)?;
    Ok(path.to_path_buf())
}

/// Write the archive next to `path` as `<name>.part`. Nothing at `path` changes
/// until `commit_staged`.
pub fn stage_archive(archive: &StatArchive, path: &Path) -> Result<PathBuf> {
    let part = part_path(path);
    let rows = archive.to_records();
    if let Err(e) = write_table(&part, &archive.labels(), &rows) {
        if part.exists() {
            discard_staged([part.as_path()]);
        }
        return Err(e);
    }
    logd!("staged {} {} rows at {}", rows.len(), archive.kind(), part.display());
    Ok(part)
}

pub fn commit_staged(part: &Path, path: &Path) -> Result<()> {
    fs::rename(part, path).map_err(|e| Error::io(path, e))?;
    logf!("wrote {}", path.display());
    Ok(())
}

/// Best-effort removal of staged files after a failed export.
pub fn discard_staged<'a>(parts: impl IntoIterator<Item = &'a Path>) {
    for part in parts {
        if let Err(e) = fs::remove_file(part) {
            logw!("could not remove {}: {e}", part.display());
        }
    }
}

fn part_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".part");
    path.with_file_name(name)
}

/// Create/truncate `path` and write `headers` + `rows` to it.
pub fn write_table(path: &Path, headers: &[String], rows: &[Vec<String>]) -> Result<()> {
    ensure_parent(path)?;
    let file = File::create(path).map_err(|e| Error::io(path, e))?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    write_rows(&mut out, headers, rows)?;
    out.flush().map_err(|e| Error::io(path, e))?;
    Ok(())
}

pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::io(
            dir,
            std::io::Error::other("path exists but is not a directory"),
        ));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tmp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("fantasy_archive_file_{name}_{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn ensure_directory_creates_nested() {
        let dir = tmp_dir("nested").join("a").join("b");
        ensure_directory(&dir).unwrap();
        assert!(dir.is_dir());
        // idempotent
        ensure_directory(&dir).unwrap();
    }

    #[test]
    fn ensure_directory_rejects_file() {
        let dir = tmp_dir("isfile");
        fs::create_dir_all(&dir).unwrap();
        let f = dir.join("x.txt");
        fs::write(&f, "x").unwrap();
        assert!(ensure_directory(&f).is_err());
    }

    #[test]
    fn write_table_overwrites() {
        let path = tmp_dir("overwrite").join("out").join("t.csv");
        let h = vec![s!("A")];
        write_table(&path, &h, &[vec![s!("1")], vec![s!("2")]]).unwrap();
        write_table(&path, &h, &[vec![s!("3")]]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "A\n3\n");
    }

    #[test]
    fn staged_archive_appears_only_on_commit() {
        use crate::model::StatKind;

        let path = tmp_dir("stage").join("hit_indiv.csv");
        let archive = StatArchive::new(StatKind::Hitting);
        let part = stage_archive(&archive, &path).unwrap();
        assert_eq!(part, path.with_file_name("hit_indiv.csv.part"));
        assert!(part.is_file());
        assert!(!path.exists());

        commit_staged(&part, &path).unwrap();
        assert!(path.is_file());
        assert!(!part.exists());
    }
}
