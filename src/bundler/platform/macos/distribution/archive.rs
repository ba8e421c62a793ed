//! Zip archive creation from a staging directory.
//!
//! Entries are written in sorted order with a fixed timestamp, so the same
//! staged tree always yields the same archive bytes.

use crate::bundler::{Error, Result, error::ErrorExt};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use zip::{CompressionMethod, DateTime, ZipWriter, write::SimpleFileOptions};

/// Compresses `source_dir` into `archive_path`.
///
/// Entry names are rooted at the directory's own name, as `zip -r` run from
/// the parent directory would produce. Symlinks are stored as links and
/// unix permission bits are kept.
pub async fn zip_directory(source_dir: &Path, archive_path: &Path) -> Result<()> {
    let source_dir = source_dir.to_path_buf();
    let archive_path = archive_path.to_path_buf();

    tokio::task::spawn_blocking(move || write_archive(&source_dir, &archive_path))
        .await
        .map_err(|e| Error::GenericError(format!("Archive task panicked: {}", e)))?
}

fn write_archive(source_dir: &Path, archive_path: &Path) -> Result<()> {
    let root = source_dir
        .file_name()
        .ok_or_else(|| {
            Error::GenericError(format!("{} has no directory name", source_dir.display()))
        })?
        .to_string_lossy()
        .into_owned();
    let base = source_dir.parent().unwrap_or(Path::new("")).to_path_buf();

    let file = File::create(archive_path).fs_context("creating archive", archive_path)?;
    let mut zip = ZipWriter::new(BufWriter::new(file));

    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default());

    let walker = walkdir::WalkDir::new(source_dir)
        .follow_links(false)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry?;
        let name = entry_name(&base, entry.path())?;
        let mode = unix_mode(entry.path())?;
        let entry_options = options.unix_permissions(mode);

        if entry.file_type().is_symlink() {
            let target = std::fs::read_link(entry.path())
                .fs_context("reading symlink", entry.path())?;
            zip.add_symlink(name, target.to_string_lossy().into_owned(), entry_options)?;
        } else if entry.file_type().is_dir() {
            zip.add_directory(format!("{name}/"), entry_options)?;
        } else {
            zip.start_file(name, entry_options)?;
            let mut source =
                File::open(entry.path()).fs_context("opening file for archive", entry.path())?;
            std::io::copy(&mut source, &mut zip).fs_context("compressing file", entry.path())?;
        }
    }

    let mut writer = zip.finish()?;
    writer.flush().fs_context("writing archive", archive_path)?;

    log::debug!("Wrote {} (root {}/)", archive_path.display(), root);
    Ok(())
}

/// Archive entry name relative to `base`, always `/`-separated.
fn entry_name(base: &Path, path: &Path) -> Result<String> {
    let relative: PathBuf = path.strip_prefix(base)?.to_path_buf();
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Ok(parts.join("/"))
}

#[cfg(unix)]
fn unix_mode(path: &Path) -> Result<u32> {
    use std::os::unix::fs::PermissionsExt;
    let metadata = std::fs::symlink_metadata(path).fs_context("reading metadata", path)?;
    Ok(metadata.permissions().mode() & 0o7777)
}

#[cfg(not(unix))]
fn unix_mode(path: &Path) -> Result<u32> {
    let metadata = std::fs::symlink_metadata(path).fs_context("reading metadata", path)?;
    Ok(if metadata.is_dir() { 0o755 } else { 0o644 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn read_entries(archive: &Path) -> Vec<(String, String)> {
        let mut zip = zip::ZipArchive::new(File::open(archive).unwrap()).unwrap();
        let mut entries = Vec::new();
        for i in 0..zip.len() {
            let mut entry = zip.by_index(i).unwrap();
            let mut contents = String::new();
            if entry.is_file() {
                entry.read_to_string(&mut contents).unwrap();
            }
            entries.push((entry.name().to_string(), contents));
        }
        entries
    }

    #[tokio::test]
    async fn entries_are_rooted_at_staging_directory_name() {
        let temp = tempfile::tempdir().unwrap();
        let staging = temp.path().join("SkyTouch-1.0.0-macOS");
        std::fs::create_dir_all(staging.join("SkyTouch.app/Contents")).unwrap();
        std::fs::write(staging.join("SkyTouch.app/Contents/Info.plist"), "<plist/>").unwrap();
        std::fs::write(staging.join("README.txt"), "readme").unwrap();

        let archive = temp.path().join("SkyTouch-1.0.0-macOS.zip");
        zip_directory(&staging, &archive).await.unwrap();

        let entries = read_entries(&archive);
        let names: Vec<&str> = entries.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "SkyTouch-1.0.0-macOS/",
                "SkyTouch-1.0.0-macOS/README.txt",
                "SkyTouch-1.0.0-macOS/SkyTouch.app/",
                "SkyTouch-1.0.0-macOS/SkyTouch.app/Contents/",
                "SkyTouch-1.0.0-macOS/SkyTouch.app/Contents/Info.plist",
            ]
        );
        assert!(entries.contains(&(
            "SkyTouch-1.0.0-macOS/README.txt".to_string(),
            "readme".to_string()
        )));
    }

    #[tokio::test]
    async fn same_tree_yields_identical_archive_bytes() {
        let temp = tempfile::tempdir().unwrap();
        let staging = temp.path().join("pkg");
        std::fs::create_dir_all(staging.join("b")).unwrap();
        std::fs::write(staging.join("b/file"), "x".repeat(4096)).unwrap();
        std::fs::write(staging.join("a.txt"), "a").unwrap();

        let first = temp.path().join("first.zip");
        let second = temp.path().join("second.zip");
        zip_directory(&staging, &first).await.unwrap();
        zip_directory(&staging, &second).await.unwrap();

        assert_eq!(std::fs::read(first).unwrap(), std::fs::read(second).unwrap());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn keeps_executable_bit_and_symlinks() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempfile::tempdir().unwrap();
        let staging = temp.path().join("pkg");
        let macos = staging.join("SkyTouch.app/Contents/MacOS");
        std::fs::create_dir_all(&macos).unwrap();
        std::fs::write(macos.join("SkyTouch"), "#!/bin/sh\n").unwrap();
        std::fs::set_permissions(macos.join("SkyTouch"), std::fs::Permissions::from_mode(0o755))
            .unwrap();
        std::os::unix::fs::symlink("SkyTouch", macos.join("current")).unwrap();

        let archive = temp.path().join("pkg.zip");
        zip_directory(&staging, &archive).await.unwrap();

        let mut zip = zip::ZipArchive::new(File::open(&archive).unwrap()).unwrap();
        let exe = zip.by_name("pkg/SkyTouch.app/Contents/MacOS/SkyTouch").unwrap();
        assert_eq!(exe.unix_mode().unwrap() & 0o777, 0o755);
        drop(exe);

        let link = zip.by_name("pkg/SkyTouch.app/Contents/MacOS/current").unwrap();
        assert!(link.is_symlink());
    }
}
