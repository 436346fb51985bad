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

// Repository access: where line diffs come from

mod git2_impl;

pub use git2_impl::Git2Repo;

use anyhow::Result;

use crate::compose::{transfer_line, try_compose};
use crate::Range;

/// Anything that can produce a zero-context line diff of one file between
/// two revisions.
pub trait ChangeSource {
    /// Diff `path` from revision `from` to revision `to`.
    ///
    /// Revisions are commit-ishes (branch, tag, or hash). The result is an
    /// ascending, non-overlapping sequence of [`Range`]s with 0-based
    /// half-open line spans.
    fn file_changes(&self, from: &str, to: &str, path: &str) -> Result<Vec<Range>>;
}

/// Convert a unified-diff hunk header into a 0-based half-open [`Range`].
///
/// Header starts are 1-based, except that a side with zero lines names the
/// line *after which* the change sits, which is already the 0-based
/// insertion point.
pub fn range_from_hunk(old_start: u32, old_lines: u32, new_start: u32, new_lines: u32) -> Range {
    let (left_start, left_end) = span_from_header(old_start, old_lines);
    let (right_start, right_end) = span_from_header(new_start, new_lines);
    Range::new(left_start, left_end, right_start, right_end)
}

fn span_from_header(start: u32, lines: u32) -> (usize, usize) {
    let start = start as usize;
    let lines = lines as usize;
    if lines == 0 {
        (start, start)
    } else {
        let start = start.saturating_sub(1);
        (start, start + lines)
    }
}

/// The two consecutive diffs of one file across revisions A -> B -> C.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeChain {
    /// A -> B.
    pub early: Vec<Range>,
    /// B -> C.
    pub later: Vec<Range>,
}

impl ChangeChain {
    /// Fetch both diffs of `path` from `source`.
    pub fn load(
        source: &dyn ChangeSource,
        base: &str,
        middle: &str,
        target: &str,
        path: &str,
    ) -> Result<Self> {
        let early = source.file_changes(base, middle, path)?;
        let later = source.file_changes(middle, target, path)?;
        tracing::debug!(
            path,
            early = early.len(),
            later = later.len(),
            "loaded change chain"
        );
        Ok(ChangeChain { early, later })
    }

    /// Approximate A -> C diff, skipping regions rewritten between B and C.
    ///
    /// The diffs come from outside the crate, so they are always validated.
    pub fn composed(&self) -> Result<Vec<Range>> {
        try_compose(&self.early, &self.later)
    }

    /// Carry a 0-based line of A through both diffs into C.
    ///
    /// `None` when either diff changed the line.
    pub fn transfer_line(&self, line: usize) -> Option<usize> {
        transfer_line(&self.early, line).and_then(|middle| transfer_line(&self.later, middle))
    }
}
