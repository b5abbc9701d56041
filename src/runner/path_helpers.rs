//! Path resolution helpers for the runner module.

use crate::cli::Cli;
use camino::Utf8PathBuf;
use miette::{Result, miette};

use super::RunnerError;

/// Determine the makefile path respecting the CLI's directory option.
///
/// # Errors
/// Returns an error when the CLI `file` or `directory` paths are not valid
/// UTF-8, or when the path has no file name.
///
/// # Examples
/// ```ignore
/// use crate::cli::Cli;
/// let path = resolve_makefile_path(&Cli::default()).expect("valid makefile path");
/// assert_eq!(path.as_str(), "makefile");
/// ```
pub(super) fn resolve_makefile_path(cli: &Cli) -> Result<Utf8PathBuf> {
    let file = Utf8PathBuf::from_path_buf(cli.file.clone())
        .map_err(|path| miette!("makefile path {} is not valid UTF-8", path.display()))?;
    let resolved = if let Some(dir) = &cli.directory {
        let base = Utf8PathBuf::from_path_buf(dir.clone())
            .map_err(|path| miette!("directory {} is not valid UTF-8", path.display()))?;
        base.join(&file)
    } else {
        file
    };
    if resolved.file_name().is_none() {
        return Err(miette!("makefile path `{resolved}` has no file name"));
    }
    Ok(resolved)
}

/// Fail with [`RunnerError::MakefileNotFound`] unless `path` is a file.
pub(super) fn ensure_makefile_exists(path: &Utf8PathBuf) -> Result<(), RunnerError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(RunnerError::MakefileNotFound {
            path: path.clone().into_std_path_buf(),
        })
    }
}
