//! Merge module - the slide-and-merge rule for one line
//!
//! A line is handed over already ordered in the direction of travel: index 0
//! is the edge the tiles slide towards. The scan keeps a `head` slot, the
//! front-most cell that has not been finalised yet:
//!
//! - zero cells are skipped
//! - an empty head takes the scanned tile
//! - an equal head absorbs it (doubling) and is then closed, so a merged tile
//!   never merges again in the same move
//! - a different head is closed and the tile moves into the next slot
//! - a pair of `1 << 31` tiles has no `u32` double, so it is treated like a
//!   different head and both tiles stay
//!
//! The result is compacted towards index 0 with trailing zeros.

/// Slide and merge `line` in place towards index 0.
///
/// Returns the score gained, i.e. the sum of every merged tile's new value.
/// Lines shorter than two cells are left untouched.
pub fn merge_line(line: &mut [u32]) -> u64 {
    let mut gained = 0u64;
    let mut head = 0usize;

    for i in 1..line.len() {
        let value = line[i];
        if value == 0 {
            continue;
        }

        if line[head] == 0 {
            line[head] = value;
            line[i] = 0;
        } else if let Some(doubled) = merged_value(line[head], value) {
            line[head] = doubled;
            gained += u64::from(doubled);
            line[i] = 0;
            head += 1;
        } else {
            head += 1;
            if head != i {
                line[head] = value;
                line[i] = 0;
            }
        }
    }

    gained
}

#[inline(always)]
fn merged_value(head: u32, value: u32) -> Option<u32> {
    if head == value {
        value.checked_mul(2)
    } else {
        None
    }
}
