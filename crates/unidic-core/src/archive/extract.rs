//! Unpack a validated zip into a directory.

use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::Path;

use super::error::ExtractionError;

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> ExtractionError + '_ {
    move |source| ExtractionError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Extracts every member of `archive_path` below `dest_dir`.
///
/// Members whose path would leave `dest_dir` (absolute paths, `..`) abort
/// the extraction. Returns the number of regular files written.
pub fn extract_all(archive_path: &Path, dest_dir: &Path) -> Result<usize, ExtractionError> {
    fs::create_dir_all(dest_dir).map_err(io_error(dest_dir))?;

    let file = File::open(archive_path).map_err(io_error(archive_path))?;
    let mut archive =
        zip::ZipArchive::new(BufReader::new(file)).map_err(|source| ExtractionError::Open {
            path: archive_path.to_path_buf(),
            source,
        })?;

    let mut files = 0usize;
    for index in 0..archive.len() {
        let mut member = archive
            .by_index(index)
            .map_err(|source| ExtractionError::Entry { index, source })?;
        let outpath = match member.enclosed_name() {
            Some(relative) => dest_dir.join(relative),
            None => {
                return Err(ExtractionError::UnsafePath {
                    name: member.name().to_string(),
                })
            }
        };

        if member.is_dir() {
            fs::create_dir_all(&outpath).map_err(io_error(&outpath))?;
            continue;
        }
        if let Some(parent) = outpath.parent() {
            fs::create_dir_all(parent).map_err(io_error(parent))?;
        }
        let mut out = File::create(&outpath).map_err(io_error(&outpath))?;
        io::copy(&mut member, &mut out).map_err(io_error(&outpath))?;
        files += 1;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Some(mode) = member.unix_mode() {
                fs::set_permissions(&outpath, fs::Permissions::from_mode(mode & 0o7777))
                    .map_err(io_error(&outpath))?;
            }
        }
    }

    tracing::debug!(files, "extracted {} into {}", archive_path.display(), dest_dir.display());
    Ok(files)
}
