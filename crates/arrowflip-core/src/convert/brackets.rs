//! Bracket tables and depth-balanced matching.
//!
//! Matching is purely character based: brackets inside string literals,
//! template literals or comments are counted like any other.

use crate::error::ConvertError;

/// Closing character required by an opening body delimiter.
#[must_use]
pub fn closing_bracket(open: char) -> Option<char> {
    match open {
        '{' => Some('}'),
        '(' => Some(')'),
        _ => None,
    }
}

/// Swap a body delimiter for its counterpart in the other body form.
///
/// `(` and `{` swap, as do `)` and `}`.
#[must_use]
pub fn swap_bracket(c: char) -> Option<char> {
    match c {
        '(' => Some('{'),
        ')' => Some('}'),
        '{' => Some('('),
        '}' => Some(')'),
        _ => None,
    }
}

/// Find the byte index of the bracket closing the one at `open_idx`.
///
/// Nested pairs of the same kind are skipped; the other bracket kind is
/// ignored entirely.
pub fn find_matching(text: &str, open_idx: usize) -> Result<usize, ConvertError> {
    let unbalanced = |open| ConvertError::UnbalancedBrackets {
        open,
        offset: open_idx,
    };

    let rest = text.get(open_idx..).ok_or(unbalanced('?'))?;
    let open = rest.chars().next().ok_or(unbalanced('?'))?;
    let close = closing_bracket(open).ok_or(unbalanced(open))?;

    let mut depth = 0usize;
    for (i, c) in rest.char_indices() {
        if c == open {
            depth += 1;
        } else if c == close {
            depth -= 1;
            if depth == 0 {
                return Ok(open_idx + i);
            }
        }
    }

    Err(unbalanced(open))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_is_an_involution() {
        for c in ['(', ')', '{', '}'] {
            let swapped = swap_bracket(c).unwrap();
            assert_ne!(swapped, c);
            assert_eq!(swap_bracket(swapped), Some(c));
        }
        assert_eq!(swap_bracket('['), None);
    }

    #[test]
    fn test_closing_bracket() {
        assert_eq!(closing_bracket('{'), Some('}'));
        assert_eq!(closing_bracket('('), Some(')'));
        assert_eq!(closing_bracket('['), None);
    }

    #[test]
    fn test_find_matching_flat() {
        let text = "x => { a }";
        assert_eq!(find_matching(text, 5), Ok(9));
    }

    #[test]
    fn test_find_matching_skips_nested_pairs() {
        let text = "{ if (a) { b(); } else { c(); } }";
        assert_eq!(find_matching(text, 0), Ok(text.len() - 1));
        assert_eq!(find_matching(text, 9), Ok(16));
    }

    #[test]
    fn test_find_matching_ignores_other_kind() {
        let text = "( { ) } )";
        assert_eq!(find_matching(text, 0), Ok(4));
    }

    #[test]
    fn test_find_matching_after_multibyte_text() {
        let text = "/* ünïcödé */ => (é)";
        let open = text.find('(').unwrap();
        assert_eq!(find_matching(text, open), Ok(text.len() - 1));
    }

    #[test]
    fn test_find_matching_unbalanced() {
        let text = "{ { }";
        assert_eq!(
            find_matching(text, 0),
            Err(ConvertError::UnbalancedBrackets { open: '{', offset: 0 })
        );
    }

    #[test]
    fn test_find_matching_rejects_non_bracket() {
        assert!(find_matching("abc", 0).is_err());
        assert!(find_matching("abc", 3).is_err());
    }

    #[test]
    fn test_find_matching_rejects_out_of_range_offsets() {
        assert!(find_matching("(a)", 10).is_err());
        // Offset 1 falls inside the two-byte 'é'.
        assert!(find_matching("é(a)", 1).is_err());
    }
}
