//! Document-root backed oracle.

use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};
use crate::oracle::ResourceOracle;

/// Answers probes with regular files below a document root.
///
/// The probe `/WEB-INF/content/hello.jsp` maps to
/// `<root>/WEB-INF/content/hello.jsp`. Directories never count as resources.
/// Probes containing `.` or `..` segments are refused with
/// [`Error::InvalidPath`] so a probe can never name a file outside the root.
///
/// # Examples
///
/// ```no_run
/// use convention::oracle::{FileSystemOracle, ResourceOracle};
///
/// let oracle = FileSystemOracle::open("~/site").unwrap();
/// if let Some(file) = oracle.exists("/index.html").unwrap() {
///     println!("found {}", file.display());
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSystemOracle {
    root: PathBuf,
}

impl FileSystemOracle {
    /// Use `root` as the document root without checking it.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Open a document root, expanding `~` and making it absolute.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory is needed but unknown, the
    /// root does not exist, or it is not a directory.
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = absolutize(&expand_tilde(root.as_ref())?)?;
        match fs::metadata(&root) {
            Ok(meta) if meta.is_dir() => Ok(Self { root }),
            Ok(_) => Err(Error::InvalidPath {
                path: root,
                reason: "document root is not a directory".to_string(),
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(Error::PathNotFound { path: root }),
            Err(e) if e.kind() == ErrorKind::PermissionDenied => {
                Err(Error::PermissionDenied { path: root })
            }
            Err(e) => Err(Error::Io(e)),
        }
    }

    /// The document root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a probe path onto a filesystem path below the root.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if a segment is `.`, `..`, or anything
    /// other than a plain file name.
    pub fn locate(&self, probe: &str) -> Result<PathBuf> {
        let mut located = self.root.clone();
        for segment in probe.split('/').filter(|s| !s.is_empty()) {
            let plain = Path::new(segment)
                .components()
                .all(|c| matches!(c, Component::Normal(_)));
            if !plain {
                return Err(Error::InvalidPath {
                    path: PathBuf::from(probe),
                    reason: format!("segment '{segment}' is not allowed in a resource path"),
                });
            }
            located.push(segment);
        }
        Ok(located)
    }
}

impl ResourceOracle for FileSystemOracle {
    type Handle = PathBuf;

    fn exists(&self, probe: &str) -> Result<Option<PathBuf>> {
        let candidate = self.locate(probe)?;
        match fs::metadata(&candidate) {
            Ok(meta) if meta.is_file() => Ok(Some(candidate)),
            Ok(_) => Ok(None),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) if e.kind() == ErrorKind::PermissionDenied => {
                Err(Error::PermissionDenied { path: candidate })
            }
            // A file standing where a directory should be
            Err(e) if e.kind() == ErrorKind::NotADirectory => Ok(None),
            Err(e) => Err(Error::oracle(probe, e)),
        }
    }
}

/// Expand a leading `~` or `~/` to the home directory.
fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let Some(path_str) = path.to_str() else {
        return Ok(path.to_path_buf());
    };
    if path_str != "~" && !path_str.starts_with("~/") {
        return Ok(path.to_path_buf());
    }

    let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Cannot determine home directory".to_string(),
    })?;
    Ok(match path_str.strip_prefix("~/") {
        Some(rest) => home.join(rest),
        None => home,
    })
}

fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn site() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("WEB-INF/content/admin")).unwrap();
        fs::write(dir.path().join("WEB-INF/content/hello.jsp"), "hello").unwrap();
        fs::write(dir.path().join("index.html"), "index").unwrap();
        dir
    }

    #[test]
    fn test_finds_regular_file() {
        let dir = site();
        let oracle = FileSystemOracle::open(dir.path()).unwrap();
        let found = oracle.exists("/WEB-INF/content/hello.jsp").unwrap();
        assert_eq!(found, Some(dir.path().join("WEB-INF/content/hello.jsp")));
    }

    #[test]
    fn test_missing_file_is_absent() {
        let dir = site();
        let oracle = FileSystemOracle::open(dir.path()).unwrap();
        assert_eq!(oracle.exists("/WEB-INF/content/hello.ftl").unwrap(), None);
        assert_eq!(oracle.exists("/no/such/dir/x.jsp").unwrap(), None);
    }

    #[test]
    fn test_directory_is_absent() {
        let dir = site();
        let oracle = FileSystemOracle::open(dir.path()).unwrap();
        assert_eq!(oracle.exists("/WEB-INF/content/admin").unwrap(), None);
    }

    #[test]
    fn test_file_used_as_directory_is_absent() {
        let dir = site();
        let oracle = FileSystemOracle::open(dir.path()).unwrap();
        assert_eq!(oracle.exists("/index.html/inner.jsp").unwrap(), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_loop_is_an_oracle_failure() {
        let dir = site();
        let looped = dir.path().join("loop");
        std::os::unix::fs::symlink(&looped, &looped).unwrap();
        let oracle = FileSystemOracle::open(dir.path()).unwrap();

        let err = oracle.exists("/loop/page.jsp").unwrap_err();
        assert!(matches!(err, Error::Oracle { ref probe, .. } if probe == "/loop/page.jsp"));
    }

    #[test]
    fn test_parent_segments_rejected() {
        let dir = site();
        let oracle = FileSystemOracle::open(dir.path()).unwrap();
        let err = oracle.exists("/WEB-INF/../../etc/passwd").unwrap_err();
        assert!(matches!(err, Error::InvalidPath { .. }));
        let err = oracle.exists("/./index.html").unwrap_err();
        assert!(matches!(err, Error::InvalidPath { .. }));
    }

    #[test]
    fn test_locate_ignores_empty_segments() {
        let oracle = FileSystemOracle::new("/srv/site");
        assert_eq!(
            oracle.locate("//a///b.jsp").unwrap(),
            PathBuf::from("/srv/site/a/b.jsp")
        );
    }

    #[test]
    fn test_open_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileSystemOracle::open(dir.path().join("missing")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_open_rejects_file_root() {
        let dir = site();
        let err = FileSystemOracle::open(dir.path().join("index.html")).unwrap_err();
        assert!(matches!(err, Error::InvalidPath { .. }));
    }

    #[test]
    fn test_expand_tilde_leaves_other_paths() {
        assert_eq!(
            expand_tilde(Path::new("/absolute")).unwrap(),
            PathBuf::from("/absolute")
        );
        assert_eq!(
            expand_tilde(Path::new("~user/x")).unwrap(),
            PathBuf::from("~user/x")
        );
    }
}
