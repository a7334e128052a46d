//! compression/prefix.rs
//! Longest common prefix between two lines.

/// Length in bytes of the longest common prefix of `a` and `b`.
///
/// The byte match is walked back to a character boundary, so the result is
/// always a valid slice index into both strings: `a[..k] == b[..k]`.
#[inline]
pub fn common_prefix_length(a: &str, b: &str) -> usize {
    let mut k = a
        .bytes()
        .zip(b.bytes())
        .take_while(|(x, y)| x == y)
        .count();

    // b[..k] equals a[..k], so a boundary in `a` is one in `b` too.
    while !a.is_char_boundary(k) {
        k -= 1;
    }
    k
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_strings_share_nothing() {
        assert_eq!(common_prefix_length("", ""), 0);
        assert_eq!(common_prefix_length("abc", ""), 0);
        assert_eq!(common_prefix_length("", "abc"), 0);
    }

    #[test]
    fn stops_at_first_difference() {
        assert_eq!(common_prefix_length("card", "car"), 3);
        assert_eq!(common_prefix_length("car", "cat"), 2);
        assert_eq!(common_prefix_length("applesauce", "apple pie"), 5);
        assert_eq!(common_prefix_length("same", "same"), 4);
    }

    #[test]
    fn never_splits_a_character() {
        // 'é' = C3 A9, 'è' = C3 A8: one shared byte, no shared character.
        assert_eq!(common_prefix_length("caé", "caè"), 2);
        assert_eq!(common_prefix_length("日本語", "日本人"), 6);
    }
}
