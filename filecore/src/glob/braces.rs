//! Brace-group expansion.
//!
//! `c{at,ub}s` expands to `cats` and `cubs`. Expansion is purely textual:
//! the first complete group is split on its top-level commas, and each
//! result is expanded again, so nested and sequential groups multiply out.

use super::flags::GlobFlags;

/// Expands the brace groups of `pattern`, appending results to `out`.
///
/// Every intermediate pattern is appended as well as the fully expanded
/// ones, in depth-first order. A pattern whose first `{` is never closed
/// adds nothing. Unless `NOESCAPE` is set, a backslash hides the character
/// after it from the group scanner.
///
/// # Examples
///
/// ```
/// use filecore::glob::braces;
/// use filecore::GlobFlags;
///
/// let mut out = Vec::new();
/// braces("c{at,ub}s", GlobFlags::empty(), &mut out);
/// assert_eq!(out, ["cats", "cubs"]);
///
/// let mut out = Vec::new();
/// braces("{a", GlobFlags::empty(), &mut out);
/// assert!(out.is_empty());
/// ```
pub fn braces(pattern: &str, flags: GlobFlags, out: &mut Vec<String>) {
    let escape = flags.escapes();
    let bytes = pattern.as_bytes();

    let Some((lbrace, rbrace)) = find_group(bytes, escape) else {
        return;
    };

    // Group delimiters are ASCII, so every slice below lands on a char
    // boundary.
    let front = &pattern[..lbrace];
    let back = &pattern[rbrace + 1..];

    let mut pos = lbrace;
    while pos < rbrace {
        let mut nest = 0i32;
        pos += 1;
        let last = pos;

        while pos < rbrace && !(bytes[pos] == b',' && nest == 0) {
            match bytes[pos] {
                b'{' => nest += 1,
                b'}' => nest -= 1,
                _ => {}
            }
            if bytes[pos] == b'\\' && escape {
                pos += 1;
                if pos == rbrace {
                    break;
                }
            }
            pos += 1;
        }

        let alternative = &pattern[last..pos];
        let expanded = format!("{front}{alternative}{back}");
        out.push(expanded.clone());
        braces(&expanded, flags, out);
    }
}

/// Convenience wrapper returning a fresh vector.
#[must_use]
pub fn expand(pattern: &str, flags: GlobFlags) -> Vec<String> {
    let mut out = Vec::new();
    braces(pattern, flags, &mut out);
    out
}

/// Locates the first `{` and its matching `}`.
fn find_group(bytes: &[u8], escape: bool) -> Option<(usize, usize)> {
    let mut i = bytes.iter().position(|&b| b == b'{')?;
    let mut lbrace = None;
    let mut nest = 0i32;

    while i < bytes.len() {
        match bytes[i] {
            b'{' => {
                if nest == 0 {
                    lbrace = Some(i);
                }
                nest += 1;
            }
            b'}' => nest -= 1,
            _ => {}
        }

        if nest == 0 {
            return lbrace.map(|l| (l, i));
        }

        if bytes[i] == b'\\' && escape {
            i += 1;
        }
        i += 1;
    }
    None
}
