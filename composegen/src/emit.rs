//! Rendering the document to YAML and writing it to disk.

use std::fs;
use std::io::Write;
use std::path::{is_separator, Path, PathBuf};

use tempfile::Builder;

use crate::descriptor::DocumentDescriptor;
use crate::error::{Error, Result};

/// Serializes the document as block-style YAML in insertion order.
///
/// # Errors
///
/// Returns [`Error::Serialization`] if the document cannot be represented.
///
/// # Examples
///
/// ```
/// use composegen::{emit, DocumentDescriptor, ServiceDescriptor, ServiceSource};
///
/// let mut doc = DocumentDescriptor::new("3.8");
/// doc.insert_service(ServiceDescriptor::new("web", ServiceSource::Image("nginx".into())).unwrap());
///
/// let yaml = emit::render(&doc).unwrap();
/// assert!(yaml.contains("services:\n  web:\n    image: nginx\n"));
/// ```
pub fn render(document: &DocumentDescriptor) -> Result<String> {
    Ok(serde_yaml::to_string(document)?)
}

/// Resolves where the output file goes.
///
/// A bare file name lands in `working_dir`; anything containing a path
/// separator (including a trailing one) is used as given.
///
/// # Examples
///
/// ```
/// use composegen::emit::resolve_output_path;
/// use std::path::Path;
///
/// let cwd = Path::new("/srv/app");
/// assert_eq!(resolve_output_path("compose.yml", cwd), Path::new("/srv/app/compose.yml"));
/// assert_eq!(resolve_output_path("deploy/compose.yml", cwd), Path::new("deploy/compose.yml"));
/// ```
#[must_use]
pub fn resolve_output_path(file_name: &str, working_dir: &Path) -> PathBuf {
    if file_name.chars().any(is_separator) {
        PathBuf::from(file_name)
    } else {
        working_dir.join(file_name)
    }
}

/// Writes `contents` to `path` via a temporary file in the same directory.
///
/// The temporary file is renamed over the target only after the full
/// contents are flushed, so the target is either untouched or complete.
/// A symlinked target is written through to the file it points at. An
/// existing target keeps its permissions; a new one gets the mode a plain
/// create would give it under the current umask.
///
/// # Errors
///
/// Returns [`Error::Write`] if any step fails.
pub fn write_document(path: &Path, contents: &str) -> Result<()> {
    let write_err = |source: std::io::Error| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let existing = fs::metadata(&target).ok().map(|meta| meta.permissions());

    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }

    let mut file = builder.tempfile_in(dir).map_err(write_err)?;
    if let Some(permissions) = existing {
        file.as_file().set_permissions(permissions).map_err(write_err)?;
    }
    file.write_all(contents.as_bytes()).map_err(write_err)?;
    file.as_file().sync_all().map_err(write_err)?;
    file.persist(&target).map_err(|e| write_err(e.error))?;

    log::debug!("wrote {} bytes to {}", contents.len(), target.display());
    Ok(())
}
