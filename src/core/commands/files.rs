use super::{ensure_vacant, file_name_of, CommandError, OperationResult, Router};
use crate::core::session::Session;
use crate::fs::{FsErrorKind, Gateway};

fn is_bare_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
}

impl<G: Gateway> Router<G> {
    pub(super) fn cat(&self, session: &Session, raw: &str) -> Result<OperationResult, CommandError> {
        let path = self.existing_file(session, raw)?;
        let bytes = self.gateway.read_file(&path)?;
        if bytes.is_empty() {
            return Ok(OperationResult::success(format!("'{}' is empty", path.display())));
        }

        let text = String::from_utf8_lossy(&bytes);
        let body: Vec<String> = text.lines().map(String::from).collect();
        let noun = if body.len() == 1 { "line" } else { "lines" };
        let status = format!("Read {} ({} {})", path.display(), body.len(), noun);
        Ok(OperationResult::success(status).with_body(body))
    }

    pub(super) fn add(&self, session: &Session, raw: &str) -> Result<OperationResult, CommandError> {
        let path = self.resolve(session, raw);
        ensure_vacant(&self.gateway, &path)?;
        self.gateway.create_file(&path)?;
        Ok(OperationResult::success(format!("Created {}", path.display())))
    }

    pub(super) fn rn(&self, session: &Session, raw: &str, new_name: &str) -> Result<OperationResult, CommandError> {
        if !is_bare_name(new_name) {
            return Err(CommandError::InvalidInput(format!(
                "'{}' is not a plain file name",
                new_name
            )));
        }

        let path = self.existing_file(session, raw)?;
        let target = match path.parent() {
            Some(parent) => parent.join(new_name),
            None => session.cwd().join(new_name),
        };
        ensure_vacant(&self.gateway, &target)?;
        self.gateway.rename(&path, &target)?;
        Ok(OperationResult::success(format!(
            "Renamed {} to {}",
            path.display(),
            new_name
        )))
    }

    pub(super) fn cp(&self, session: &Session, src: &str, dst: &str) -> Result<OperationResult, CommandError> {
        let source = self.existing_file(session, src)?;
        let target = self.destination(session, dst, file_name_of(&source)?)?;
        let bytes = self.gateway.copy_stream(&source, &target)?;
        Ok(OperationResult::success(format!(
            "Copied {} to {} ({} bytes)",
            source.display(),
            target.display(),
            bytes
        )))
    }

    pub(super) fn mv(&self, session: &Session, src: &str, dst: &str) -> Result<OperationResult, CommandError> {
        let source = self.existing_file(session, src)?;
        let target = self.destination(session, dst, file_name_of(&source)?)?;

        match self.gateway.rename(&source, &target) {
            Ok(()) => {}
            Err(err) if err.kind == FsErrorKind::CrossDevice => {
                tracing::debug!(from = %source.display(), to = %target.display(), "rename crossed devices, copying");
                self.gateway.copy_stream(&source, &target)?;
                self.gateway.delete_file(&source)?;
            }
            Err(err) => return Err(err.into()),
        }

        Ok(OperationResult::success(format!(
            "Moved {} to {}",
            source.display(),
            target.display()
        )))
    }

    pub(super) fn rm(&self, session: &Session, raw: &str) -> Result<OperationResult, CommandError> {
        let path = self.existing_file(session, raw)?;
        self.gateway.delete_file(&path)?;
        Ok(OperationResult::success(format!("Deleted {}", path.display())))
    }

    pub(super) fn hash(&self, session: &Session, raw: &str) -> Result<OperationResult, CommandError> {
        let path = self.existing_file(session, raw)?;
        let digest = self.gateway.digest(&path)?;
        Ok(OperationResult::success(digest))
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{run, setup};
    use super::super::{Outcome, Router};
    use super::is_bare_name;
    use crate::core::session::Session;
    use crate::fs::{DirEntry, FsError, FsErrorKind, Gateway, LocalFs, Stat};
    use crate::path::PathExpander;
    use std::fs;
    use std::path::{Path, PathBuf};

    /// Every rename crosses a device boundary; `delete_file` can be made to fail.
    #[derive(Default)]
    struct CrossDeviceFs {
        inner: LocalFs,
        deny_delete: bool,
    }

    impl Gateway for CrossDeviceFs {
        fn stat(&self, path: &Path) -> Result<Stat, FsError> {
            self.inner.stat(path)
        }
        fn read_file(&self, path: &Path) -> Result<Vec<u8>, FsError> {
            self.inner.read_file(path)
        }
        fn create_file(&self, path: &Path) -> Result<(), FsError> {
            self.inner.create_file(path)
        }
        fn rename(&self, from: &Path, _to: &Path) -> Result<(), FsError> {
            Err(FsError::new("rename", from, FsErrorKind::CrossDevice, "EXDEV"))
        }
        fn copy_stream(&self, from: &Path, to: &Path) -> Result<u64, FsError> {
            self.inner.copy_stream(from, to)
        }
        fn delete_file(&self, path: &Path) -> Result<(), FsError> {
            if self.deny_delete {
                return Err(FsError::new("delete", path, FsErrorKind::PermissionDenied, "denied"));
            }
            self.inner.delete_file(path)
        }
        fn digest(&self, path: &Path) -> Result<String, FsError> {
            self.inner.digest(path)
        }
        fn compress_stream(&self, from: &Path, to: &Path) -> Result<u64, FsError> {
            self.inner.compress_stream(from, to)
        }
        fn decompress_stream(&self, from: &Path, to: &Path) -> Result<u64, FsError> {
            self.inner.decompress_stream(from, to)
        }
        fn list_directory(&self, path: &Path) -> Result<Vec<DirEntry>, FsError> {
            self.inner.list_directory(path)
        }
        fn change_directory(&self, path: &Path) -> Result<PathBuf, FsError> {
            self.inner.change_directory(path)
        }
    }

    fn cross_device_setup(deny_delete: bool) -> (tempfile::TempDir, Session, Router<CrossDeviceFs>) {
        let dir = tempfile::tempdir().unwrap();
        let cwd = fs::canonicalize(dir.path()).unwrap();
        let gateway = CrossDeviceFs {
            deny_delete,
            ..CrossDeviceFs::default()
        };
        let router = Router::new(gateway).with_expander(PathExpander::with_home(&cwd));
        (dir, Session::new(cwd), router)
    }

    #[test]
    fn test_bare_names() {
        assert!(is_bare_name("log.txt"));
        assert!(!is_bare_name("../log.txt"));
        assert!(!is_bare_name("sub/log.txt"));
        assert!(!is_bare_name(".."));
    }

    #[test]
    fn test_cat_prints_lines() {
        let (dir, mut session, router) = setup();
        fs::write(dir.path().join("notes.txt"), "hello\nworld\n").unwrap();

        let result = run(&router, &mut session, "cat notes.txt");
        assert!(result.is_success());
        assert_eq!(result.body, vec!["hello", "world"]);
        assert!(result.message.starts_with("Read "));
        assert!(result.message.ends_with("notes.txt (2 lines)"));
    }

    #[test]
    fn test_cat_directory_fails() {
        let (dir, mut session, router) = setup();
        fs::create_dir(dir.path().join("d")).unwrap();
        assert_eq!(
            run(&router, &mut session, "cat d").outcome,
            Outcome::OperationFailure
        );
    }

    #[test]
    fn test_add_twice_keeps_content() {
        let (dir, mut session, router) = setup();
        let path = dir.path().join("new.txt");

        assert!(run(&router, &mut session, "add new.txt").is_success());
        fs::write(&path, b"keep me").unwrap();

        let second = run(&router, &mut session, "add new.txt");
        assert_eq!(second.outcome, Outcome::OperationFailure);
        assert!(second.message.contains("already exists"));
        assert_eq!(fs::read(&path).unwrap(), b"keep me");
    }

    #[test]
    fn test_rn_then_cat() {
        let (dir, mut session, router) = setup();
        fs::write(dir.path().join("f.txt"), "first draft").unwrap();

        assert!(run(&router, &mut session, "rn f.txt g.txt").is_success());
        assert!(!dir.path().join("f.txt").exists());
        assert_eq!(run(&router, &mut session, "cat g.txt").body, vec!["first draft"]);
    }

    #[test]
    fn test_rn_rejects_paths_and_collisions() {
        let (dir, mut session, router) = setup();
        fs::write(dir.path().join("a"), "a").unwrap();
        fs::write(dir.path().join("b"), "b").unwrap();

        assert_eq!(
            run(&router, &mut session, "rn a sub/c").outcome,
            Outcome::InvalidInput
        );
        assert_eq!(
            run(&router, &mut session, "rn a b").outcome,
            Outcome::OperationFailure
        );
        assert_eq!(
            run(&router, &mut session, "rn ghost c").outcome,
            Outcome::OperationFailure
        );
        assert_eq!(fs::read_to_string(dir.path().join("b")).unwrap(), "b");
    }

    #[test]
    fn test_cp_into_directory() {
        let (dir, mut session, router) = setup();
        fs::write(dir.path().join("src.txt"), "data").unwrap();
        fs::create_dir(dir.path().join("out")).unwrap();

        let result = run(&router, &mut session, "cp src.txt out");
        assert!(result.is_success(), "{}", result.message);
        assert_eq!(fs::read_to_string(dir.path().join("out/src.txt")).unwrap(), "data");
        assert!(dir.path().join("src.txt").exists());
    }

    #[test]
    fn test_cp_never_overwrites() {
        let (dir, mut session, router) = setup();
        fs::write(dir.path().join("a"), "new").unwrap();
        fs::write(dir.path().join("b"), "old").unwrap();

        assert_eq!(
            run(&router, &mut session, "cp a b").outcome,
            Outcome::OperationFailure
        );
        assert_eq!(fs::read_to_string(dir.path().join("b")).unwrap(), "old");
    }

    #[test]
    fn test_mv_across_directories() {
        let (dir, mut session, router) = setup();
        fs::write(dir.path().join("a.txt"), "moving").unwrap();
        fs::create_dir(dir.path().join("there")).unwrap();

        assert!(run(&router, &mut session, "mv a.txt there/b.txt").is_success());
        assert!(!dir.path().join("a.txt").exists());
        assert_eq!(
            fs::read_to_string(dir.path().join("there/b.txt")).unwrap(),
            "moving"
        );
    }

    #[test]
    fn test_rm_file_only() {
        let (dir, mut session, router) = setup();
        fs::write(dir.path().join("gone"), "").unwrap();
        fs::create_dir(dir.path().join("stays")).unwrap();

        assert!(run(&router, &mut session, "rm gone").is_success());
        assert!(!dir.path().join("gone").exists());
        assert_eq!(
            run(&router, &mut session, "rm stays").outcome,
            Outcome::OperationFailure
        );
        assert_eq!(
            run(&router, &mut session, "rm gone").outcome,
            Outcome::OperationFailure
        );
    }

    #[test]
    fn test_hash_is_stable_and_content_sensitive() {
        let (dir, mut session, router) = setup();
        let path = dir.path().join("h.bin");
        fs::write(&path, "one").unwrap();

        let first = run(&router, &mut session, "hash h.bin").message;
        let second = run(&router, &mut session, "hash h.bin").message;
        assert_eq!(first, second);
        assert_eq!(first.len(), 64);

        fs::write(&path, "two").unwrap();
        assert_ne!(run(&router, &mut session, "hash h.bin").message, first);
    }

    #[test]
    fn test_mv_falls_back_to_copy_across_devices() {
        let (dir, mut session, router) = cross_device_setup(false);
        fs::write(dir.path().join("a.bin"), b"far away").unwrap();

        let result = run(&router, &mut session, "mv a.bin b.bin");
        assert_eq!(result.outcome, Outcome::Success, "{}", result.message);
        assert!(!dir.path().join("a.bin").exists());
        assert_eq!(fs::read(dir.path().join("b.bin")).unwrap(), b"far away");
    }

    #[test]
    fn test_mv_fallback_reports_failed_delete() {
        let (dir, mut session, router) = cross_device_setup(true);
        fs::write(dir.path().join("a.bin"), b"stuck").unwrap();

        let result = run(&router, &mut session, "mv a.bin b.bin");
        assert_eq!(result.outcome, Outcome::OperationFailure);
        assert_eq!(fs::read(dir.path().join("a.bin")).unwrap(), b"stuck");
    }
}
