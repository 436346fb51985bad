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

// === Range composition ===
//
// Given revisions A -> B -> C and the two line diffs A->B ("early") and
// B->C ("later"), approximate the A->C diff. Every early hunk keeps its
// A-side span; its B-side span is carried into C coordinates, except for
// the parts that a later hunk rewrote. Those parts are cut away rather than
// guessed at, so one early hunk may come out whole, split into several
// pieces, or not at all.
//
// The sweep is linear: a single peekable cursor walks the later hunks and
// is shared by all early hunks, and `shift` accumulates the net line delta
// of every later hunk the cursor has moved past.

use std::cmp::Ordering;

use anyhow::{bail, Context, Result};

use crate::Range;

/// Compose the A->B diff `early` with the B->C diff `later` into an
/// approximate A->C diff.
///
/// Both inputs must be ascending and non-overlapping (see
/// [`check_changes`]). Debug builds verify this and panic with a
/// description of the offending pair; release builds trust the caller and
/// give unspecified (but non-panicking) results for invalid input. Use
/// [`try_compose`] to validate unconditionally.
pub fn compose(early: &[Range], later: &[Range]) -> Vec<Range> {
    if cfg!(debug_assertions) {
        if let Err(err) = check_inputs(early, later) {
            panic!("{err:#}");
        }
    }

    compose_unchecked(early, later)
}

/// Like [`compose`], but always validates both inputs first.
pub fn try_compose(early: &[Range], later: &[Range]) -> Result<Vec<Range>> {
    check_inputs(early, later)?;
    Ok(compose_unchecked(early, later))
}

fn check_inputs(early: &[Range], later: &[Range]) -> Result<()> {
    check_changes(early).context("early changes")?;
    check_changes(later).context("later changes")?;
    Ok(())
}

/// Verify that `ranges` forms a well-formed diff.
///
/// Every range must have `start <= end` on both sides, and each adjacent
/// pair must be strictly ascending by start and non-overlapping, on both
/// sides. The error names the offending pair.
pub fn check_changes(ranges: &[Range]) -> Result<()> {
    for (index, range) in ranges.iter().enumerate() {
        if range.left_start > range.left_end || range.right_start > range.right_end {
            bail!("invalid change sequence: range #{index} {range} is inverted");
        }
    }

    for (index, pair) in ranges.windows(2).enumerate() {
        let (prev, next) = (&pair[0], &pair[1]);
        if prev.left_start >= next.left_start || prev.right_start >= next.right_start {
            bail!(
                "invalid change sequence: range #{index} {prev} and range #{} {next} are not in ascending order",
                index + 1
            );
        }
        if prev.left_end > next.left_start || prev.right_end > next.right_start {
            bail!(
                "invalid change sequence: range #{index} {prev} overlaps range #{} {next}",
                index + 1
            );
        }
    }

    Ok(())
}

fn compose_unchecked(early: &[Range], later: &[Range]) -> Vec<Range> {
    let mut composed = Vec::with_capacity(early.len());
    let mut later_iter = later.iter().peekable();
    let mut shift: isize = 0;

    for early_range in early {
        // Unconsumed tail of the early hunk, in B coordinates. Overlap tests
        // below always use the hunk's original bounds, not this tail.
        let mut start = early_range.right_start;
        let end = early_range.right_end;
        let mut consumed = false;

        while let Some(&later_range) = later_iter.peek() {
            if later_range.left_end <= early_range.right_start {
                shift += later_range.delta();
                later_iter.next();
            } else if later_range.left_start >= early_range.right_end {
                // Leave it under the cursor for the next early hunk.
                break;
            } else if later_range.left_start <= early_range.right_start {
                if later_range.left_end >= early_range.right_end {
                    consumed = true;
                    break;
                }
                start = later_range.left_end;
                shift += later_range.delta();
                later_iter.next();
            } else {
                // The untouched piece before the later hunk ends exactly
                // where that hunk starts in C.
                let right_start = shifted(start, shift);
                let right_end = later_range.right_start.max(right_start);
                composed.push(piece(early_range, right_start, right_end));

                match later_range.left_end.cmp(&early_range.right_end) {
                    Ordering::Less => {
                        start = later_range.left_end;
                        shift += later_range.delta();
                        later_iter.next();
                    }
                    Ordering::Equal => {
                        shift += later_range.delta();
                        later_iter.next();
                        consumed = true;
                        break;
                    }
                    Ordering::Greater => {
                        // The tail is ambiguous; the later hunk stays under
                        // the cursor since it reaches into what follows.
                        consumed = true;
                        break;
                    }
                }
            }
        }

        if !consumed && start <= end {
            composed.push(piece(early_range, shifted(start, shift), shifted(end, shift)));
        }
    }

    composed
}

fn piece(early_range: &Range, right_start: usize, right_end: usize) -> Range {
    let range = Range::new(
        early_range.left_start,
        early_range.left_end,
        right_start,
        right_end,
    );
    tracing::trace!(%range, "composed range");
    range
}

fn shifted(line: usize, shift: isize) -> usize {
    line.saturating_add_signed(shift)
}

/// Map a 0-based left-side `line` through `changes` to the right side.
///
/// Returns `None` when the line lies inside a changed hunk. A pure insertion
/// exactly at `line` lands before it, so the line moves down past the
/// inserted block.
pub fn transfer_line(changes: &[Range], line: usize) -> Option<usize> {
    let mut shift: isize = 0;

    for range in changes {
        if range.left_end <= line {
            shift += range.delta();
        } else if range.left_start <= line {
            return None;
        } else {
            break;
        }
    }

    Some(shifted(line, shift))
}
