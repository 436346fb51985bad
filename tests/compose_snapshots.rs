// Rendered composition output, checked with inline snapshots

use rangeshift::{compose, try_compose, Range};

fn render(ranges: &[Range]) -> String {
    ranges
        .iter()
        .map(Range::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_compose_three_hunks_through_three_later_changes() {
    // A->B: grow a header, rewrite a block, insert three lines.
    let early = [
        Range::new(0, 2, 0, 3),
        Range::new(10, 12, 11, 14),
        Range::new(20, 20, 22, 25),
    ];
    // B->C: insert two lines, drop one line, replace one with two.
    let later = [
        Range::new(5, 6, 5, 8),
        Range::new(12, 13, 14, 14),
        Range::new(23, 24, 24, 26),
    ];

    insta::assert_snapshot!(render(&compose(&early, &later)), @r"
    [0, 2) -> [0, 3)
    [10, 12) -> [13, 14)
    [10, 12) -> [14, 15)
    [20, 20) -> [23, 24)
    [20, 20) -> [26, 27)
    ");
}

#[test]
fn test_compose_later_change_swallowing_everything() {
    let early = [Range::new(3, 4, 3, 6), Range::new(8, 9, 10, 10)];
    let later = [Range::new(0, 20, 0, 1)];

    insta::assert_snapshot!(render(&compose(&early, &later)), @"");
}

#[test]
fn test_try_compose_error_message() {
    let early = [Range::new(5, 6, 5, 6), Range::new(1, 2, 1, 2)];

    let err = try_compose(&early, &[]).unwrap_err();

    insta::assert_snapshot!(
        format!("{err:#}"),
        @"early changes: invalid change sequence: range #0 [5, 6) -> [5, 6) and range #1 [1, 2) -> [1, 2) are not in ascending order"
    );
}
