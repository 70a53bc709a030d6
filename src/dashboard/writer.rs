use crate::error::DashboardError;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

#[cfg(unix)]
const PAGE_MODE: u32 = 0o644;

/// Replace `path` with `contents`, creating parent directories first. The
/// document is staged in a sibling temp file so a failed write leaves the
/// previous page in place.
pub fn write_report(path: &Path, contents: &str) -> Result<(), DashboardError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(|source| DashboardError::CreateOutputDir {
        path: parent.to_path_buf(),
        source,
    })?;

    let write_err = |source: std::io::Error| DashboardError::WriteOutput {
        path: path.to_path_buf(),
        source,
    };
    let mut temp = NamedTempFile::new_in(parent).map_err(write_err)?;
    temp.write_all(contents.as_bytes()).map_err(write_err)?;
    temp.flush().map_err(write_err)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // Served by a web server under another user; temp files start at 0600.
        temp.as_file()
            .set_permissions(fs::Permissions::from_mode(PAGE_MODE))
            .map_err(write_err)?;
    }

    temp.persist(path)
        .map_err(|err| DashboardError::PersistOutput {
            path: path.to_path_buf(),
            source: err.error,
        })?;
    Ok(())
}
