// Copyright 2026 Thomas Johannesson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use anyhow::{Context, Result};

use crate::Range;

use super::{range_from_hunk, ChangeSource};

/// Concrete git repository backed by `libgit2` via the `git2` crate.
///
/// Construct with [`Git2Repo::open`]; then use through the [`ChangeSource`] trait.
pub struct Git2Repo {
    inner: git2::Repository,
}

impl Git2Repo {
    /// Try to open a git repository by iteratively trying the given path and
    /// its parents until a repository root is found.
    pub fn open(mut path: std::path::PathBuf) -> Result<Self> {
        loop {
            if let Ok(repo) = git2::Repository::open(&path) {
                return Ok(Git2Repo { inner: repo });
            }
            if !path.pop() {
                anyhow::bail!("Could not find git repository root");
            }
        }
    }

    fn tree_of(&self, commit_ish: &str) -> Result<git2::Tree<'_>> {
        let object = self
            .inner
            .revparse_single(commit_ish)
            .context(format!("Failed to resolve '{}'", commit_ish))?;
        let commit = object
            .peel_to_commit()
            .context(format!("'{}' is not a commit", commit_ish))?;
        commit.tree().context("Failed to get commit tree")
    }
}

impl ChangeSource for Git2Repo {
    fn file_changes(&self, from: &str, to: &str, path: &str) -> Result<Vec<Range>> {
        let old_tree = self.tree_of(from)?;
        let new_tree = self.tree_of(to)?;

        // Zero context keeps every logical change in its own hunk
        let mut opts = git2::DiffOptions::new();
        opts.context_lines(0);
        opts.interhunk_lines(0);
        opts.pathspec(path);
        opts.disable_pathspec_match(true);

        let diff = self
            .inner
            .diff_tree_to_tree(Some(&old_tree), Some(&new_tree), Some(&mut opts))
            .context(format!("Failed to diff '{}' between '{}' and '{}'", path, from, to))?;

        let mut changes = Vec::new();
        for delta_idx in 0..diff.deltas().len() {
            let patch = git2::Patch::from_diff(&diff, delta_idx)?
                .context("Failed to extract patch from diff")?;

            for hunk_idx in 0..patch.num_hunks() {
                let (hunk_header, _num_lines) = patch.hunk(hunk_idx)?;
                changes.push(range_from_hunk(
                    hunk_header.old_start(),
                    hunk_header.old_lines(),
                    hunk_header.new_start(),
                    hunk_header.new_lines(),
                ));
            }
        }

        tracing::debug!(from, to, path, hunks = changes.len(), "diffed file");
        Ok(changes)
    }
}
