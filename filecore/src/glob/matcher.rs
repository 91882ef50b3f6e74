//! Matching of one concrete pattern (no brace groups) against a path.
//!
//! Without `PATHNAME` the whole path is one string and `/` is an ordinary
//! character. With it, pattern and path are matched segment by segment and
//! a `**/` prefix may swallow any number of leading path segments.

use super::flags::GlobFlags;

/// Matches `pattern` against `path`. Brace groups are literal here.
///
/// # Examples
///
/// ```
/// use filecore::glob::matches;
/// use filecore::GlobFlags;
///
/// assert!(matches("c*t", "c/a/b/t", GlobFlags::empty()));
/// assert!(!matches("c*t", "c/a/b/t", GlobFlags::PATHNAME));
/// assert!(matches("**/foo", "a/b/c/foo", GlobFlags::PATHNAME));
/// ```
#[must_use]
pub fn matches(pattern: &str, path: &str, flags: GlobFlags) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = path.chars().collect();
    let matcher = Matcher {
        pattern: &pattern,
        text: &text,
        escape: flags.escapes(),
        pathname: flags.pathname(),
        period: !flags.dotmatch(),
        casefold: flags.casefold(),
    };

    if matcher.pathname {
        matcher.match_segments()
    } else {
        matcher.match_from(0, 0).is_some()
    }
}

struct Matcher<'a> {
    pattern: &'a [char],
    text: &'a [char],
    escape: bool,
    pathname: bool,
    /// A leading `.` must be matched literally.
    period: bool,
    casefold: bool,
}

impl Matcher<'_> {
    fn is_end(&self, chars: &[char], i: usize) -> bool {
        match chars.get(i) {
            None => true,
            Some('/') => self.pathname,
            Some(_) => false,
        }
    }

    fn pattern_end(&self, p: usize) -> bool {
        self.is_end(self.pattern, p)
    }

    fn text_end(&self, s: usize) -> bool {
        self.is_end(self.text, s)
    }

    /// Skips a backslash that escapes the following pattern character.
    fn unescape(&self, p: usize) -> usize {
        if self.escape && self.pattern.get(p) == Some(&'\\') {
            p + 1
        } else {
            p
        }
    }

    fn fold(&self, c: char) -> char {
        if self.casefold {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }

    /// Matches from pattern index `p` and text index `s` up to the end of
    /// the current segment. On success returns where both cursors stopped.
    fn match_from(&self, mut p: usize, mut s: usize) -> Option<(usize, usize)> {
        if self.period
            && self.text.get(s) == Some(&'.')
            && self.pattern.get(self.unescape(p)) != Some(&'.')
        {
            return None;
        }

        // Pattern and text positions to resume from after the last `*`.
        let mut star: Option<(usize, usize)> = None;

        loop {
            match self.pattern.get(p) {
                Some('*') => {
                    while self.pattern.get(p) == Some(&'*') {
                        p += 1;
                    }
                    let after = self.unescape(p);
                    if self.pattern_end(after) {
                        return Some((after, s));
                    }
                    if self.text_end(s) {
                        return None;
                    }
                    star = Some((p, s));
                    continue;
                }
                Some('?') => {
                    if self.text_end(s) {
                        return None;
                    }
                    p += 1;
                    s += 1;
                    continue;
                }
                Some('[') => {
                    if self.text_end(s) {
                        return None;
                    }
                    if let Some(next) = self.bracket(p + 1, self.text[s]) {
                        p = next;
                        s += 1;
                        continue;
                    }
                }
                _ => {
                    p = self.unescape(p);
                    if self.text_end(s) {
                        return self.pattern_end(p).then_some((p, s));
                    }
                    if !self.pattern_end(p) && self.fold(self.pattern[p]) == self.fold(self.text[s]) {
                        p += 1;
                        s += 1;
                        continue;
                    }
                }
            }

            // Mismatch: let the last `*` absorb one more character.
            let (star_p, star_s) = star?;
            let resume = star_s + 1;
            star = Some((star_p, resume));
            p = star_p;
            s = resume;
        }
    }

    /// Matches a bracket expression starting just after `[` against `c`.
    ///
    /// Returns the pattern index after the closing `]`, or `None` when the
    /// class does not match or is unterminated.
    fn bracket(&self, mut p: usize, c: char) -> Option<usize> {
        let len = self.pattern.len();
        if p >= len {
            return None;
        }

        let negated = matches!(self.pattern[p], '!' | '^');
        if negated {
            p += 1;
        }

        let mut ok = false;
        loop {
            let &current = self.pattern.get(p)?;
            if current == ']' {
                break;
            }

            let mut t1 = p;
            if self.escape && current == '\\' {
                t1 += 1;
            }
            let &low = self.pattern.get(t1)?;
            p = t1 + 1;
            if p >= len {
                return None;
            }

            if self.pattern[p] == '-' && self.pattern.get(p + 1) != Some(&']') {
                let mut t2 = p + 1;
                if self.escape && self.pattern.get(t2) == Some(&'\\') {
                    t2 += 1;
                }
                let &high = self.pattern.get(t2)?;
                p = t2 + 1;

                if ok {
                    continue;
                }
                if low == c || high == c {
                    ok = true;
                    continue;
                }
                let folded = self.fold(c);
                if folded < self.fold(low) || folded > self.fold(high) {
                    continue;
                }
            } else {
                if ok {
                    continue;
                }
                if low == c {
                    ok = true;
                    continue;
                }
                if !self.casefold || self.fold(low) != self.fold(c) {
                    continue;
                }
            }
            ok = true;
        }

        (ok != negated).then_some(p + 1)
    }

    fn starts_globstar(&self, p: usize) -> bool {
        self.pattern.get(p..p + 3) == Some(&['*', '*', '/'][..])
    }

    fn skip_segment(&self, mut s: usize) -> usize {
        while s < self.text.len() && self.text[s] != '/' {
            s += 1;
        }
        s
    }

    /// Segment-wise matching used under `PATHNAME`.
    fn match_segments(&self) -> bool {
        let (mut p, mut s) = (0, 0);
        // Where a `**/` may retry from: pattern after it, text segment start.
        let mut globstar: Option<(usize, usize)> = None;

        loop {
            if self.starts_globstar(p) {
                while self.starts_globstar(p) {
                    p += 3;
                }
                globstar = Some((p, s));
            }

            if let Some((next_p, next_s)) = self.match_from(p, s) {
                p = next_p;
                s = self.skip_segment(next_s);
                let pattern_done = p >= self.pattern.len();
                let text_done = s >= self.text.len();
                if !pattern_done && !text_done {
                    p += 1;
                    s += 1;
                    continue;
                }
                if pattern_done && text_done {
                    return true;
                }
            }

            // Let `**/` consume one more text segment, unless it is hidden.
            let Some((retry_p, retry_s)) = globstar else {
                return false;
            };
            if self.period && self.text.get(retry_s) == Some(&'.') {
                return false;
            }
            let boundary = self.skip_segment(retry_s);
            if boundary >= self.text.len() {
                return false;
            }
            p = retry_p;
            s = boundary + 1;
            globstar = Some((retry_p, s));
        }
    }
}
