use crate::db::log::ttlog_path;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::ui::messages::success;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database file to `dest_file`, or write it into a `.zip`
    /// next to it when `compress` is set. Returns the path actually written.
    ///
    /// The live database is only ever read.
    pub fn backup(db_path: &str, dest_file: &str, compress: bool, force: bool) -> AppResult<PathBuf> {
        let src = Path::new(db_path);
        let dest = Path::new(dest_file);

        // 1️⃣ Check DB exists
        if !src.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )
            .into());
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let final_target = if compress {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        };
        refuse_same_file(src, &final_target)?;
        ensure_writable(&final_target, force)?;

        // 3️⃣ Copy or compress straight from the database
        if compress {
            let entry_name = entry_name_for(src, dest)?;
            compress_into(src, &final_target, &entry_name)?;
            success(format!("📦 Compressed: {}", final_target.display()));
        } else {
            fs::copy(src, &final_target)?;
            success(format!("Backup created: {}", final_target.display()));
        }

        // 4️⃣ Log in DB
        ttlog_path(
            db_path,
            "backup",
            &final_target.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(final_target)
    }
}

/// Writing onto the database itself would truncate it.
fn refuse_same_file(src: &Path, target: &Path) -> AppResult<()> {
    if !target.exists() {
        return Ok(());
    }
    if fs::canonicalize(src)? == fs::canonicalize(target)? {
        return Err(AppError::Other(format!(
            "backup target is the database itself: {}",
            target.display()
        )));
    }
    Ok(())
}

/// Archive entry name: the requested file name, or the database's own name
/// when the request already points at a `.zip`.
fn entry_name_for(src: &Path, dest: &Path) -> AppResult<String> {
    let pick = if dest.extension().is_some_and(|e| e.eq_ignore_ascii_case("zip")) {
        src
    } else {
        dest
    };
    pick.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| AppError::Other(format!("invalid backup path: {}", pick.display())))
}

fn compress_into(src: &Path, zip_path: &Path, entry_name: &str) -> AppResult<()> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut f = fs::File::open(src)?;
    zip.start_file(entry_name, options)
        .map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::initialize::init_db;
    use rusqlite::Connection;
    use tempfile::TempDir;

    fn make_db(dir: &TempDir) -> String {
        let path = dir.path().join("src.sqlite").to_string_lossy().to_string();
        let conn = Connection::open(&path).unwrap();
        init_db(&conn).unwrap();
        conn.execute(
            "INSERT INTO work_records (timestamp, hours) VALUES ('2025-01-01 08:00:00', 8)",
            [],
        )
        .unwrap();
        path
    }

    #[test]
    fn plain_copy_is_a_working_database() {
        let dir = TempDir::new().unwrap();
        let db = make_db(&dir);
        let dest = dir.path().join("out").join("copy.sqlite");

        let written = BackupLogic::backup(&db, &dest.to_string_lossy(), false, true).unwrap();
        assert_eq!(written, dest);

        let conn = Connection::open(&dest).unwrap();
        let n: i64 = conn
            .query_row("SELECT COUNT(*) FROM work_records", [], |r| r.get(0))
            .unwrap();
        assert_eq!(n, 1);
    }

    #[test]
    fn compressed_backup_leaves_no_plain_copy() {
        let dir = TempDir::new().unwrap();
        let db = make_db(&dir);
        let dest = dir.path().join("copy.sqlite");

        let written = BackupLogic::backup(&db, &dest.to_string_lossy(), true, true).unwrap();
        assert_eq!(written.extension().unwrap(), "zip");
        assert!(written.exists());
        assert!(!dest.exists());
    }

    #[test]
    fn missing_database_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.sqlite");
        let dest = dir.path().join("copy.sqlite");
        assert!(
            BackupLogic::backup(&missing.to_string_lossy(), &dest.to_string_lossy(), false, true)
                .is_err()
        );
    }

    fn record_count(db: &str) -> i64 {
        Connection::open(db)
            .unwrap()
            .query_row("SELECT COUNT(*) FROM work_records", [], |r| r.get(0))
            .unwrap()
    }

    #[test]
    fn backup_onto_the_database_is_refused() {
        let dir = TempDir::new().unwrap();
        let db = make_db(&dir);

        assert!(BackupLogic::backup(&db, &db, false, true).is_err());
        assert_eq!(record_count(&db), 1);
    }

    #[test]
    fn zip_whose_name_is_the_database_is_refused() {
        let dir = TempDir::new().unwrap();
        let db = make_db(&dir);
        let zip_named = dir.path().join("live.zip");
        fs::rename(&db, &zip_named).unwrap();
        let zip_named = zip_named.to_string_lossy().to_string();

        assert!(BackupLogic::backup(&zip_named, &zip_named, true, true).is_err());
        assert_eq!(record_count(&zip_named), 1);
    }

    #[test]
    fn compressing_next_to_the_database_keeps_it() {
        let dir = TempDir::new().unwrap();
        let db = make_db(&dir);

        let written = BackupLogic::backup(&db, &db, true, true).unwrap();
        assert_eq!(written, dir.path().join("src.zip"));
        assert!(Path::new(&db).exists());
        assert_eq!(record_count(&db), 1);
    }

    #[test]
    fn zip_target_holds_the_whole_database() {
        let dir = TempDir::new().unwrap();
        let db = make_db(&dir);
        let db_len = fs::metadata(&db).unwrap().len();
        let dest = dir.path().join("out.zip");

        let written = BackupLogic::backup(&db, &dest.to_string_lossy(), true, true).unwrap();
        assert_eq!(written, dest);

        let mut archive = zip::ZipArchive::new(fs::File::open(&dest).unwrap()).unwrap();
        assert_eq!(archive.len(), 1);
        let entry = archive.by_index(0).unwrap();
        assert_eq!(entry.name(), "src.sqlite");
        assert_eq!(entry.size(), db_len);
    }
}
