use git2::{Repository, Signature};
use rangeshift::repo::Git2Repo;
use std::fs;
use tempfile::TempDir;

/// Throwaway git repository for integration tests.
///
/// Keeps a `git2::Repository` for low-level setup (writing commits) and
/// exposes [`git_repo()`][TestRepo::git_repo] to obtain a `Git2Repo` handle
/// for calling library functions under test.
pub struct TestRepo {
    pub _temp_dir: TempDir,
    pub repo: Repository,
}

impl TestRepo {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let repo = Repository::init(temp_dir.path()).unwrap();

        let mut config = repo.config().unwrap();
        config.set_str("user.name", "Test User").unwrap();
        config.set_str("user.email", "test@example.com").unwrap();

        Self {
            _temp_dir: temp_dir,
            repo,
        }
    }

    pub fn git_repo(&self) -> Git2Repo {
        Git2Repo::open(self._temp_dir.path().to_path_buf()).unwrap()
    }

    /// Write `content` to `path`, stage it and commit on HEAD.
    pub fn commit_file(&self, path: &str, content: &str, message: &str) -> git2::Oid {
        let file_path = self.repo.workdir().unwrap().join(path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&file_path, content).unwrap();

        let mut index = self.repo.index().unwrap();
        index.add_path(std::path::Path::new(path)).unwrap();
        index.write().unwrap();
        self.commit_index(message)
    }

    #[allow(dead_code)]
    pub fn delete_file(&self, path: &str, message: &str) -> git2::Oid {
        let file_path = self.repo.workdir().unwrap().join(path);
        fs::remove_file(&file_path).unwrap();

        let mut index = self.repo.index().unwrap();
        index.remove_path(std::path::Path::new(path)).unwrap();
        index.write().unwrap();
        self.commit_index(message)
    }

    fn commit_index(&self, message: &str) -> git2::Oid {
        let mut index = self.repo.index().unwrap();
        let tree_oid = index.write_tree().unwrap();
        let tree = self.repo.find_tree(tree_oid).unwrap();

        let sig = Signature::now("Test User", "test@example.com").unwrap();

        let parent_commit = match self.repo.head() {
            Ok(head) => Some(self.repo.find_commit(head.target().unwrap()).unwrap()),
            Err(_) => None,
        };
        let parents: Vec<&git2::Commit> = parent_commit.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .unwrap()
    }
}
