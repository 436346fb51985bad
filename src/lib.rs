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

// Core library for rangeshift: carry line ranges across two consecutive diffs

use std::fmt;

pub mod compose;
pub mod repo;

pub use compose::{check_changes, compose, transfer_line, try_compose};

/// One hunk of a line diff.
///
/// Maps the half-open, 0-based line span `[left_start, left_end)` of the
/// left-hand revision to `[right_start, right_end)` of the right-hand
/// revision. Either side may be empty: a pure insertion has
/// `left_start == left_end`, a pure deletion has `right_start == right_end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    pub left_start: usize,
    pub left_end: usize,
    pub right_start: usize,
    pub right_end: usize,
}

impl Range {
    pub fn new(left_start: usize, left_end: usize, right_start: usize, right_end: usize) -> Self {
        debug_assert!(
            left_start <= left_end && right_start <= right_end,
            "inverted range [{left_start}, {left_end}) -> [{right_start}, {right_end})"
        );
        Range {
            left_start,
            left_end,
            right_start,
            right_end,
        }
    }

    pub fn left_len(&self) -> usize {
        self.left_end - self.left_start
    }

    pub fn right_len(&self) -> usize {
        self.right_end - self.right_start
    }

    /// Net number of lines this hunk adds (negative when it removes lines).
    pub fn delta(&self) -> isize {
        self.right_len() as isize - self.left_len() as isize
    }

    /// True when neither side spans any line.
    pub fn is_empty(&self) -> bool {
        self.left_start == self.left_end && self.right_start == self.right_end
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}) -> [{}, {})",
            self.left_start, self.left_end, self.right_start, self.right_end
        )
    }
}
