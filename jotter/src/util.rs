use std::ffi::OsString;
use std::path::{Path, PathBuf};
use log::{error, trace};
use tokio::fs;
use tokio::io::{self, AsyncWriteExt};
use uuid::Uuid;

use crate::lib_constants::TMP_FILENAME_INFIX;
#[cfg(unix)] use crate::lib_constants::DATA_FILE_MODE;

pub trait StrExt: AsRef<str> {
    fn nonblank_to_some(&self) -> Option<String> {
        Some(self.as_ref().trim())
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
    }
}

impl<T: AsRef<str>> StrExt for T {}

/// Replaces `path` with `data` so that readers and crashes observe either
/// the old or the new contents. Returns once the new contents are on disk.
pub async fn write_file_atomically(
    path: &Path,
    data: impl AsRef<[u8]>,
    tmp_id: Uuid,
) -> io::Result<()> {
    let tmp_path = tmp_path(path, tmp_id);
    trace!(
        "writing \"{}\" through \"{}\"",
        path.display(),
        tmp_path.display(),
    );
    if let Err(e) = write_and_sync(&tmp_path, data.as_ref()).await {
        remove_tmp_file(&tmp_path).await;
        return Err(e)
    }
    if let Err(e) = fs::rename(&tmp_path, path).await {
        error!(
            "failed to rename tmp file \"{}\" to \"{}\": {e}",
            tmp_path.display(),
            path.display(),
        );
        remove_tmp_file(&tmp_path).await;
        return Err(e)
    }
    sync_parent_dir(path).await
}

fn tmp_path(path: &Path, tmp_id: Uuid) -> PathBuf {
    let mut file_name = path.file_name()
        .map(OsString::from)
        .unwrap_or_default();
    file_name.push(TMP_FILENAME_INFIX);
    file_name.push(tmp_id.hyphenated().to_string());
    path.with_file_name(file_name)
}

async fn write_and_sync(path: &Path, data: &[u8]) -> io::Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)] options.mode(DATA_FILE_MODE);
    let mut file = options.open(path).await?;
    file.write_all(data).await?;
    file.sync_all().await
}

async fn remove_tmp_file(tmp_path: &Path) {
    match fs::remove_file(tmp_path).await {
        Ok(()) => {},
        Err(e) if e.kind() == io::ErrorKind::NotFound => {},
        Err(e) => error!(
            "failed to remove tmp file \"{}\": {e}",
            tmp_path.display(),
        ),
    }
}

#[cfg(unix)]
async fn sync_parent_dir(path: &Path) -> io::Result<()> {
    match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => fs::File::open(parent).await?.sync_all().await,
        None => Ok(()),
    }
}

#[cfg(not(unix))]
async fn sync_parent_dir(_path: &Path) -> io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_fs::prelude::*;
    use assert_fs::TempDir;
    use super::*;

    #[test]
    fn nonblank() {
        assert_eq!("  a b ".nonblank_to_some(), Some("a b".into()));
        assert_eq!(" \t\n".nonblank_to_some(), None);
    }

    #[tokio::test]
    async fn replaces_file_contents() {
        let dir = TempDir::new().unwrap();
        let file = dir.child("notes.toml");
        file.write_str("old").unwrap();

        write_file_atomically(file.path(), "new", Uuid::new_v4()).await.unwrap();

        file.assert("new");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[tokio::test]
    async fn creates_missing_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.child("state.toml");

        write_file_atomically(file.path(), "x = 1", Uuid::new_v4()).await.unwrap();

        file.assert("x = 1");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn written_file_is_private() {
        use std::os::unix::fs::PermissionsExt;
        let dir = TempDir::new().unwrap();
        let file = dir.child("notes.toml");

        write_file_atomically(file.path(), "", Uuid::new_v4()).await.unwrap();

        let mode = std::fs::metadata(file.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o077, 0, "mode is {mode:o}");
    }

    #[tokio::test]
    async fn missing_directory_leaves_nothing_behind() {
        let dir = TempDir::new().unwrap();
        let file = dir.child("absent/notes.toml");

        let err = write_file_atomically(file.path(), "new", Uuid::new_v4())
            .await.expect_err("should fail");

        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
