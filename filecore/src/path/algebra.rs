//! Pure string operations on slash-separated paths.
//!
//! Nothing in here touches the filesystem: every result depends only on the
//! input bytes (and the level argument of [`dirname_n`]). Only `/` is a
//! separator; everything else is opaque.

use crate::error::{Error, Result};

/// The one path separator.
pub const SEPARATOR: char = '/';

/// Returns the last component of `path`, optionally removing `suffix`.
///
/// Trailing separators are ignored. A path made only of separators yields
/// `"/"`. When `suffix` is `".*"` the extension (as defined by [`extname`])
/// is removed; any other suffix is removed only if it matches the end of the
/// component exactly and something would remain.
///
/// # Examples
///
/// ```
/// use filecore::path::basename;
///
/// assert_eq!(basename("/home/gumby/work/ruby.rb", None), "ruby.rb");
/// assert_eq!(basename("/home/gumby/work/ruby.rb", Some(".rb")), "ruby");
/// assert_eq!(basename("/home/gumby/work/ruby.rb", Some(".*")), "ruby");
/// assert_eq!(basename("dir/", None), "dir");
/// assert_eq!(basename("///", None), "/");
/// assert_eq!(basename("", None), "");
/// ```
#[must_use]
pub fn basename(path: &str, suffix: Option<&str>) -> String {
    let trimmed = path.trim_end_matches(SEPARATOR);
    if trimmed.is_empty() {
        return if path.is_empty() {
            String::new()
        } else {
            SEPARATOR.to_string()
        };
    }

    let base = match trimmed.rfind(SEPARATOR) {
        Some(pos) => &trimmed[pos + 1..],
        None => trimmed,
    };

    match suffix {
        None | Some("") => base.to_string(),
        Some(".*") => {
            let ext = extname(base);
            base[..base.len() - ext.len()].to_string()
        }
        Some(suffix) => match base.strip_suffix(suffix) {
            Some(stem) if !stem.is_empty() => stem.to_string(),
            _ => base.to_string(),
        },
    }
}

/// Returns everything but the last component of `path`.
///
/// Equivalent to `dirname_n(path, 1)`, which cannot fail.
///
/// # Examples
///
/// ```
/// use filecore::path::dirname;
///
/// assert_eq!(dirname("/home/gumby/work/ruby.rb"), "/home/gumby/work");
/// assert_eq!(dirname("ruby.rb"), ".");
/// assert_eq!(dirname("/"), "/");
/// assert_eq!(dirname("a//b/"), "a");
/// ```
#[must_use]
pub fn dirname(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }
    dirname_once(path).to_string()
}

/// Removes the final component `level` times.
///
/// A level of 0 returns the input unchanged. Once the components run out
/// the result is `"."` (or `"/"` for absolute paths).
///
/// # Errors
///
/// Returns `InvalidArgument` for a negative level.
///
/// # Examples
///
/// ```
/// use filecore::path::dirname_n;
///
/// assert_eq!(dirname_n("/a/b/c/d", 2).unwrap(), "/a/b");
/// assert_eq!(dirname_n("a/b", 0).unwrap(), "a/b");
/// assert_eq!(dirname_n("a/b", 5).unwrap(), ".");
/// assert!(dirname_n("a/b", -1).is_err());
/// ```
pub fn dirname_n(path: &str, level: i64) -> Result<String> {
    if level < 0 {
        return Err(Error::invalid(format!("negative level: {level}")));
    }

    let mut current = path.to_string();
    for _ in 0..level {
        if current.is_empty() {
            return Ok(".".to_string());
        }
        let next = dirname_once(&current);
        if next == current {
            break;
        }
        current = next.to_string();
    }
    Ok(current)
}

/// One step of [`dirname`] on a non-empty path.
fn dirname_once(path: &str) -> &str {
    let bytes = path.as_bytes();
    let root = bytes.iter().take_while(|&&b| b == b'/').count();
    // Several leading separators collapse onto the last of them.
    let start = root.saturating_sub(1);

    let end = last_separator_run(&bytes[root..]).map_or(root, |pos| root + pos);
    if end == 0 {
        return ".";
    }
    &path[start..end]
}

/// Index of the last run of separators that is followed by a component.
fn last_separator_run(bytes: &[u8]) -> Option<usize> {
    let mut last = None;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'/' {
            let run_start = i;
            while i < bytes.len() && bytes[i] == b'/' {
                i += 1;
            }
            if i < bytes.len() {
                last = Some(run_start);
            }
        } else {
            i += 1;
        }
    }
    last
}

/// Returns the extension of the final component, including its dot.
///
/// # Examples
///
/// ```
/// use filecore::path::extname;
///
/// assert_eq!(extname("test.rb"), ".rb");
/// assert_eq!(extname("a/b/d/test.rb"), ".rb");
/// assert_eq!(extname("foo."), ".");
/// assert_eq!(extname("test"), "");
/// assert_eq!(extname(".profile"), "");
/// assert_eq!(extname("a/..."), "");
/// ```
#[must_use]
pub fn extname(path: &str) -> String {
    let Some(dot) = path.rfind('.') else {
        return String::new();
    };

    let component_start = match path.rfind(SEPARATOR) {
        Some(slash) if dot < slash => return String::new(),
        Some(slash) => slash + 1,
        None => 0,
    };

    // A leading dot marks a hidden file, not an extension.
    if dot == component_start {
        return String::new();
    }

    if dot == path.len() - 1 {
        let component = &path[component_start..];
        if component.bytes().all(|b| b == b'.') {
            return String::new();
        }
        return ".".to_string();
    }

    path[dot..].to_string()
}

/// Splits `path` into `(dirname, basename)`.
///
/// # Examples
///
/// ```
/// use filecore::path::split;
///
/// assert_eq!(
///     split("/home/gumby/.profile"),
///     ("/home/gumby".to_string(), ".profile".to_string())
/// );
/// ```
#[must_use]
pub fn split(path: &str) -> (String, String) {
    (dirname(path), basename(path, None))
}

/// True iff `path` starts with the separator.
///
/// # Examples
///
/// ```
/// use filecore::path::is_absolute;
///
/// assert!(is_absolute("/usr/bin"));
/// assert!(!is_absolute("usr/bin"));
/// assert!(!is_absolute("~/bin"));
/// ```
#[must_use]
pub fn is_absolute(path: &str) -> bool {
    path.starts_with(SEPARATOR)
}
