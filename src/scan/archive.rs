//! Zip packaging of long-path files

use std::fs::{self, File};
use std::io;
use std::path::{Component, Path};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::report::partial_path;
use super::PathRecord;
use crate::core::CancelFlag;
use crate::error::{CheckError, Result};

/// Packages every file in `long` into a deflate zip at `zip_path`
///
/// Entries are named by their path relative to `source_root`. A member that
/// has vanished or cannot be read fails the whole archive: the partially
/// written zip is removed and nothing is left at `zip_path`. The same cleanup
/// happens when `cancel` is tripped, which is checked before every member.
///
/// Returns the number of entries written.
pub fn archive(
    long: &[PathRecord],
    source_root: &Path,
    zip_path: &Path,
    cancel: &CancelFlag,
) -> Result<usize> {
    let partial = partial_path(zip_path);

    let result = write_archive(long, source_root, &partial, cancel).and_then(|count| {
        fs::rename(&partial, zip_path)
            .map(|()| count)
            .map_err(|source| CheckError::WriteFailure {
                path: zip_path.to_path_buf(),
                source,
            })
    });

    match result {
        Ok(count) => {
            log::debug!("Archive: wrote {count} entries to {zip_path:?}");
            Ok(count)
        }
        Err(e) => {
            let _ = fs::remove_file(&partial);
            Err(e)
        }
    }
}

fn write_archive(
    long: &[PathRecord],
    source_root: &Path,
    partial: &Path,
    cancel: &CancelFlag,
) -> Result<usize> {
    let write_failure = |source| CheckError::WriteFailure {
        path: partial.to_path_buf(),
        source,
    };
    let archive_failure = |source| CheckError::ArchiveFailure {
        path: partial.to_path_buf(),
        source,
    };

    let file = File::create(partial).map_err(write_failure)?;
    let mut writer = ZipWriter::new(file);

    for record in long {
        if cancel.is_cancelled() {
            return Err(CheckError::Cancelled);
        }

        let member_failure = |source| CheckError::ArchiveMember {
            path: record.path.clone(),
            source,
        };
        let mut member = File::open(&record.path).map_err(member_failure)?;
        let size = member.metadata().map_err(member_failure)?.len();

        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .large_file(size >= u64::from(u32::MAX));
        let name = archive_name(&record.path, source_root);
        log::trace!("Archive: adding {name} ({size} bytes)");

        writer.start_file(name, options).map_err(archive_failure)?;
        io::copy(&mut member, &mut writer).map_err(write_failure)?;
    }

    let file = writer.finish().map_err(archive_failure)?;
    file.sync_all().map_err(write_failure)?;
    Ok(long.len())
}

/// Entry name for `path`: relative to `root`, components joined by `/`
///
/// Paths outside `root` keep their own normal components so the entry never
/// starts with a separator or drive prefix.
pub fn archive_name(path: &Path, root: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_archive_name_is_root_relative_with_forward_slashes() {
        let root = PathBuf::from("/data/project");
        let path = root.join("deep").join("nested").join("file.txt");
        assert_eq!(archive_name(&path, &root), "deep/nested/file.txt");
    }

    #[test]
    fn test_archive_name_outside_root_drops_prefix() {
        let name = archive_name(Path::new("/elsewhere/file.txt"), Path::new("/data"));
        assert_eq!(name, "elsewhere/file.txt");
    }

    #[test]
    fn test_archive_contains_members_byte_for_byte() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path();
        fs::create_dir_all(root.join("sub"))?;
        let binary: Vec<u8> = (0..=255u8).cycle().take(4096).collect();
        fs::write(root.join("sub").join("data.bin"), &binary)?;
        fs::write(root.join("notes.txt"), "hello")?;

        let long = vec![
            PathRecord::new(root.join("sub").join("data.bin")),
            PathRecord::new(root.join("notes.txt")),
        ];
        let zip_path = root.join("out.zip");

        assert_eq!(archive(&long, root, &zip_path, &CancelFlag::new())?, 2);

        let mut zip = zip::ZipArchive::new(File::open(&zip_path)?)?;
        assert_eq!(zip.len(), 2);

        let mut entry = zip.by_name("sub/data.bin")?;
        assert_eq!(entry.compression(), CompressionMethod::Deflated);
        let mut extracted = Vec::new();
        entry.read_to_end(&mut extracted)?;
        assert_eq!(extracted, binary);
        drop(entry);

        let mut text = String::new();
        zip.by_name("notes.txt")?.read_to_string(&mut text)?;
        assert_eq!(text, "hello");
        Ok(())
    }

    #[test]
    fn test_vanished_member_fails_whole_archive() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path();
        fs::write(root.join("present.txt"), "here")?;

        let long = vec![
            PathRecord::new(root.join("present.txt")),
            PathRecord::new(root.join("vanished.txt")),
        ];
        let zip_path = root.join("out.zip");

        let result = archive(&long, root, &zip_path, &CancelFlag::new());

        match result {
            Err(CheckError::ArchiveMember { path, .. }) => {
                assert!(path.ends_with("vanished.txt"));
            }
            other => panic!("expected ArchiveMember, got {other:?}"),
        }
        assert!(!zip_path.exists());
        assert!(!partial_path(&zip_path).exists());
        Ok(())
    }

    #[test]
    fn test_unwritable_destination_is_a_write_failure() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        fs::write(temp_dir.path().join("a.txt"), "a")?;
        let long = vec![PathRecord::new(temp_dir.path().join("a.txt"))];
        let zip_path = temp_dir.path().join("missing-dir").join("out.zip");

        let result = archive(&long, temp_dir.path(), &zip_path, &CancelFlag::new());

        assert!(matches!(result, Err(CheckError::WriteFailure { .. })));
        Ok(())
    }

    #[test]
    fn test_large_member_is_streamed_intact() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path();
        let member_path = root.join("big.bin");

        // 3 MiB plus a ragged tail, spanning many copy buffers
        let chunk: Vec<u8> = (0..=255u8).cycle().take(64 * 1024).collect();
        let mut file = File::create(&member_path)?;
        for i in 0..48u8 {
            let mut block = chunk.clone();
            block[0] = i;
            file.write_all(&block)?;
        }
        file.write_all(b"tail")?;
        drop(file);
        let expected = fs::read(&member_path)?;
        assert!(expected.len() > 1024 * 1024);

        let zip_path = root.join("out.zip");
        archive(
            &[PathRecord::new(member_path)],
            root,
            &zip_path,
            &CancelFlag::new(),
        )?;

        let mut zip = zip::ZipArchive::new(File::open(&zip_path)?)?;
        let mut entry = zip.by_name("big.bin")?;
        assert_eq!(entry.size(), expected.len() as u64);
        let mut extracted = Vec::new();
        entry.read_to_end(&mut extracted)?;
        assert!(extracted == expected);
        Ok(())
    }

    #[test]
    fn test_cancelled_archive_leaves_nothing_behind() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path();
        fs::write(root.join("a.txt"), "a")?;
        let long = vec![PathRecord::new(root.join("a.txt"))];
        let zip_path = root.join("out.zip");
        let cancel = CancelFlag::new();
        cancel.cancel();

        let result = archive(&long, root, &zip_path, &cancel);

        assert!(matches!(result, Err(CheckError::Cancelled)));
        assert!(!zip_path.exists());
        assert!(!partial_path(&zip_path).exists());
        Ok(())
    }
}
