use super::{CommandError, OperationResult, Router};
use crate::core::session::Session;
use crate::fs::{EntryKind, Gateway};

impl<G: Gateway> Router<G> {
    pub(super) fn up(&self, session: &mut Session) -> Result<OperationResult, CommandError> {
        let Some(parent) = session.cwd().parent() else {
            return Ok(OperationResult::success(
                "Already at the filesystem root, cannot go higher",
            ));
        };

        let parent = self.gateway.change_directory(parent)?;
        session.change_dir(parent);
        Ok(OperationResult::success(format!(
            "Moved up to {}",
            session.cwd().display()
        )))
    }

    pub(super) fn cd(&self, session: &mut Session, target: &str) -> Result<OperationResult, CommandError> {
        let requested = self.resolve(session, target);
        let dir = self.gateway.change_directory(&requested)?;
        session.change_dir(dir);
        Ok(OperationResult::success(format!(
            "Working directory is now {}",
            session.cwd().display()
        )))
    }

    /// Directories first, then files; each group sorted by name.
    pub(super) fn ls(&self, session: &Session) -> Result<OperationResult, CommandError> {
        let mut entries = self.gateway.list_directory(session.cwd())?;
        entries.sort_by(|a, b| a.kind.cmp(&b.kind).then_with(|| a.name.cmp(&b.name)));

        let dirs = entries
            .iter()
            .filter(|e| e.kind == EntryKind::Directory)
            .count();
        let files = entries.len() - dirs;

        let body = entries
            .iter()
            .map(|e| format!("{:<9}  {}", e.kind.label(), e.name))
            .collect();

        Ok(OperationResult::success(format!("{} directories, {} files", dirs, files)).with_body(body))
    }

    pub(super) fn nwd(&self, session: &Session) -> OperationResult {
        OperationResult::success(format!("You are currently in {}", session.cwd().display()))
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{run, setup};
    use super::super::Outcome;
    use std::fs;
    use std::path::Path;

    #[test]
    fn test_cd_into_subdirectory() {
        let (dir, mut session, router) = setup();
        fs::create_dir(dir.path().join("inner")).unwrap();

        let result = run(&router, &mut session, "cd inner");
        assert!(result.is_success());
        assert!(session.cwd().ends_with("inner"));
    }

    #[test]
    fn test_cd_dotdot_is_canonicalized() {
        let (dir, mut session, router) = setup();
        fs::create_dir(dir.path().join("inner")).unwrap();
        let start = session.cwd().to_path_buf();

        run(&router, &mut session, "cd inner");
        run(&router, &mut session, "cd ..");
        assert_eq!(session.cwd(), start);
    }

    #[test]
    fn test_cd_to_missing_or_file_keeps_cwd() {
        let (dir, mut session, router) = setup();
        fs::write(dir.path().join("plain.txt"), b"x").unwrap();
        let before = session.cwd().to_path_buf();

        for line in ["cd nowhere", "cd plain.txt"] {
            let result = run(&router, &mut session, line);
            assert_eq!(result.outcome, Outcome::OperationFailure, "{}", line);
            assert_eq!(session.cwd(), before);
        }
    }

    #[test]
    fn test_up_reaches_root_then_stays() {
        let (_dir, mut session, router) = setup();

        let mut steps = 0;
        while session.cwd().parent().is_some() {
            assert!(run(&router, &mut session, "up").is_success());
            steps += 1;
            assert!(steps < 256);
        }

        let root = session.cwd().to_path_buf();
        for _ in 0..3 {
            let result = run(&router, &mut session, "up");
            assert!(result.is_success());
            assert!(result.message.contains("root"));
            assert_eq!(session.cwd(), root);
        }
        assert!(root.parent().is_none());
        assert!(Path::new(&root).is_absolute());
    }

    #[test]
    fn test_ls_groups_and_sorts() {
        let (dir, mut session, router) = setup();
        fs::create_dir(dir.path().join("zeta")).unwrap();
        fs::create_dir(dir.path().join("alpha")).unwrap();
        fs::write(dir.path().join("b.txt"), b"").unwrap();
        fs::write(dir.path().join(".hidden"), b"").unwrap();
        fs::write(dir.path().join("a.txt"), b"").unwrap();

        let result = run(&router, &mut session, "ls");
        assert!(result.is_success());
        assert_eq!(
            result.body,
            vec![
                "directory  alpha",
                "directory  zeta",
                "file       .hidden",
                "file       a.txt",
                "file       b.txt",
            ]
        );
        assert_eq!(result.message, "2 directories, 3 files");
    }

    #[test]
    fn test_nwd_reports_without_change() {
        let (_dir, mut session, router) = setup();
        let before = session.cwd().to_path_buf();
        let result = run(&router, &mut session, "nwd");
        assert!(result.message.contains(&before.display().to_string()));
        assert_eq!(session.cwd(), before);
    }
}
