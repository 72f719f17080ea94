//! Filesystem rules
//!
//! A missing entry is a rule violation. Any other failure to stat the path
//! (permission denied, a broken mount) is not silently accepted: it is
//! recorded as `failed to read file information for <field>: <cause>`.

use std::fs;
use std::io;
use std::path::Path;

use super::RuleError;
use crate::ValidationContext;

const MIB: u64 = 1024 * 1024;

/// The extension of `path` with its leading dot, or `""` if it has none.
fn dotted_extension(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}

fn size_limit(max_size: u64) -> String {
    if max_size >= MIB && max_size.is_multiple_of(MIB) {
        format!("{}MB", max_size / MIB)
    } else {
        format!("{max_size} bytes")
    }
}

impl ValidationContext {
    fn stat(&mut self, path: &Path, field: &str) -> Option<io::Result<fs::Metadata>> {
        match fs::metadata(path) {
            Err(err) if err.kind() != io::ErrorKind::NotFound => {
                let err = RuleError::Stat {
                    path: path.to_path_buf(),
                    source: err,
                };
                self.report(field, err, |err| {
                    format!("failed to read file information for {field}: {err}")
                });
                None
            }
            result => Some(result),
        }
    }

    /// Require something (file, directory, ...) to exist at `path`.
    ///
    /// Default message: `<field> must be a valid file path.`
    ///
    /// # Example
    ///
    /// ```rust
    /// use formcheck::ValidationContext;
    ///
    /// let mut ctx = ValidationContext::new();
    /// ctx.validate_file_path("/definitely/not/here.txt", "upload", "");
    /// assert_eq!(ctx.errors()[0].message(), "upload must be a valid file path.");
    /// ```
    pub fn validate_file_path(&mut self, path: impl AsRef<Path>, field: &str, err_msg: &str) {
        if let Some(Err(_)) = self.stat(path.as_ref(), field) {
            self.reject(field, err_msg, || format!("{field} must be a valid file path."));
        }
    }

    /// Require a regular file to exist at `path`.
    ///
    /// Unlike [`validate_file_path`](Self::validate_file_path), a directory
    /// does not pass.
    ///
    /// Default message: `<field> must be an existing file.`
    pub fn validate_file(&mut self, path: impl AsRef<Path>, field: &str, err_msg: &str) {
        match self.stat(path.as_ref(), field) {
            Some(Ok(meta)) if meta.is_file() => {}
            Some(_) => {
                self.reject(field, err_msg, || format!("{field} must be an existing file."));
            }
            None => {}
        }
    }

    /// Require the extension of `path` to be one of `allowed`.
    ///
    /// Entries in `allowed` include the dot (`".png"`) and match exactly.
    /// Only the name is inspected; the file does not have to exist.
    ///
    /// Default message: `<field> must have one of the extensions: [<allowed>].`
    ///
    /// # Example
    ///
    /// ```rust
    /// use formcheck::ValidationContext;
    ///
    /// let mut ctx = ValidationContext::new();
    /// ctx.validate_file_extension("avatar.gif", "avatar", &[".png", ".jpg"], "");
    /// assert_eq!(
    ///     ctx.errors()[0].message(),
    ///     "avatar must have one of the extensions: [.png, .jpg]."
    /// );
    /// ```
    pub fn validate_file_extension<S>(
        &mut self,
        path: impl AsRef<Path>,
        field: &str,
        allowed: &[S],
        err_msg: &str,
    ) where
        S: AsRef<str>,
    {
        let ext = dotted_extension(path.as_ref());
        if !allowed.iter().any(|candidate| candidate.as_ref() == ext) {
            self.reject(field, err_msg, || {
                let list: Vec<&str> = allowed.iter().map(|s| s.as_ref()).collect();
                format!("{field} must have one of the extensions: [{}].", list.join(", "))
            });
        }
    }

    /// Require the file at `path` to be at most `max_size` bytes.
    ///
    /// Failing to stat the file, including because it is missing, is
    /// recorded as its own error.
    ///
    /// Default message: `<field> must be at most <n>MB.` (or `<n> bytes`
    /// when `max_size` is not a whole number of MiB).
    pub fn validate_file_size(
        &mut self,
        path: impl AsRef<Path>,
        field: &str,
        max_size: u64,
        err_msg: &str,
    ) {
        let path = path.as_ref();
        match fs::metadata(path) {
            Ok(meta) if meta.len() > max_size => {
                self.reject(field, err_msg, || {
                    format!("{field} must be at most {}.", size_limit(max_size))
                });
            }
            Ok(_) => {}
            Err(source) => {
                let err = RuleError::Stat {
                    path: path.to_path_buf(),
                    source,
                };
                self.report(field, err, |err| {
                    format!("failed to read file information for {field}: {err}")
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile, TempDir};

    fn messages(ctx: &ValidationContext) -> Vec<&str> {
        ctx.errors().iter().map(|e| e.message()).collect()
    }

    #[test]
    fn test_file_path() {
        let file = NamedTempFile::new().unwrap();
        let mut ctx = ValidationContext::new();
        ctx.validate_file_path(file.path(), "Field1", "");
        assert!(!ctx.has_errors());

        ctx.validate_file_path("nonexistentfile.txt", "Field1", "");
        assert_eq!(messages(&ctx), ["Field1 must be a valid file path."]);
    }

    #[test]
    fn test_file_path_accepts_directories() {
        let dir = TempDir::new().unwrap();
        let mut ctx = ValidationContext::new();
        ctx.validate_file_path(dir.path(), "Field1", "");
        assert!(!ctx.has_errors());
    }

    #[test]
    fn test_file_rejects_directories() {
        let dir = TempDir::new().unwrap();
        let file = NamedTempFile::new_in(dir.path()).unwrap();
        let mut ctx = ValidationContext::new();
        ctx.validate_file(file.path(), "Field1", "");
        ctx.validate_file(dir.path(), "Field1", "");
        ctx.validate_file(dir.path().join("missing"), "Field1", "no such file");
        assert_eq!(messages(&ctx), ["Field1 must be an existing file.", "no such file"]);
    }

    #[test]
    fn test_file_extension() {
        let file = Builder::new().prefix("testfile").suffix(".txt").tempfile().unwrap();

        let mut ctx = ValidationContext::new();
        ctx.validate_file_extension(file.path(), "Field1", &[".txt", ".md"], "");
        assert!(!ctx.has_errors());

        ctx.validate_file_extension(file.path(), "Field1", &[".exe", ".bin"], "");
        assert_eq!(messages(&ctx), ["Field1 must have one of the extensions: [.exe, .bin]."]);
    }

    #[test]
    fn test_file_extension_without_dot() {
        let mut ctx = ValidationContext::new();
        ctx.validate_file_extension("Makefile", "f", &[".mk"], "");
        ctx.validate_file_extension("Makefile", "f", &[""], "");
        ctx.validate_file_extension("archive.tar.gz", "f", &[String::from(".gz")], "");
        assert_eq!(ctx.errors().len(), 1);
    }

    #[test]
    fn test_file_size() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0u8; 2048]).unwrap();
        file.flush().unwrap();

        let mut ctx = ValidationContext::new();
        ctx.validate_file_size(file.path(), "upload", 4096, "");
        ctx.validate_file_size(file.path(), "upload", 2048, "");
        assert!(!ctx.has_errors());

        ctx.validate_file_size(file.path(), "upload", 1024, "");
        assert_eq!(messages(&ctx), ["upload must be at most 1024 bytes."]);
    }

    #[test]
    fn test_file_size_limit_in_megabytes() {
        assert_eq!(size_limit(5 * MIB), "5MB");
        assert_eq!(size_limit(MIB + 1), "1048577 bytes");
        assert_eq!(size_limit(0), "0 bytes");
    }

    #[test]
    fn test_file_size_stat_failure_is_its_own_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("gone.bin");

        let mut ctx = ValidationContext::new();
        ctx.validate_file_size(&missing, "upload", 10, "too large");

        assert_eq!(ctx.errors().len(), 1);
        let message = ctx.errors()[0].message();
        assert!(message.starts_with("failed to read file information for upload: cannot stat"));
        assert!(!message.contains("too large"));
    }

    #[test]
    fn test_dotted_extension() {
        assert_eq!(dotted_extension(Path::new("a/b.png")), ".png");
        assert_eq!(dotted_extension(Path::new("noext")), "");
    }
}
