//! Joining path fragments, including nested and shared sequences.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use crate::error::{Error, Result};
use crate::path::algebra::SEPARATOR;
use crate::path::types::check_nul;

/// A shared, mutable sequence of join arguments.
///
/// Sequences are reference counted so that callers can build structures
/// that contain themselves; [`join_args`] rejects those.
pub type JoinList = Rc<RefCell<Vec<JoinArg>>>;

/// One argument to [`join_args`].
#[derive(Debug, Clone)]
pub enum JoinArg {
    /// A path fragment.
    Path(String),
    /// A nested sequence, flattened recursively.
    List(JoinList),
}

impl JoinArg {
    /// Wraps `items` in a fresh shared sequence.
    #[must_use]
    pub fn list(items: Vec<JoinArg>) -> Self {
        Self::List(Rc::new(RefCell::new(items)))
    }
}

impl From<&str> for JoinArg {
    fn from(value: &str) -> Self {
        Self::Path(value.to_string())
    }
}

impl From<String> for JoinArg {
    fn from(value: String) -> Self {
        Self::Path(value)
    }
}

impl From<Vec<JoinArg>> for JoinArg {
    fn from(items: Vec<JoinArg>) -> Self {
        Self::list(items)
    }
}

impl From<&JoinList> for JoinArg {
    fn from(list: &JoinList) -> Self {
        Self::List(Rc::clone(list))
    }
}

/// Joins plain string fragments with single separators.
///
/// # Examples
///
/// ```
/// use filecore::path::join;
///
/// assert_eq!(join(&["usr", "mail", "gumby"]), "usr/mail/gumby");
/// assert_eq!(join(&["a/", "/b"]), "a/b");
/// assert_eq!(join(&["", "etc"]), "/etc");
/// assert_eq!(join(&[]), "");
/// ```
#[must_use]
pub fn join(parts: &[&str]) -> String {
    let mut iter = parts.iter();
    let Some(first) = iter.next() else {
        return String::new();
    };

    let mut joined = (*first).to_string();
    for part in iter {
        append_fragment(&mut joined, part);
    }
    joined
}

/// Joins arguments that may include nested sequences.
///
/// Each nested sequence is joined on its own first, then treated as one
/// fragment. A sequence that appears twice side by side is fine; one that
/// contains itself, directly or through another sequence, is not.
///
/// # Errors
///
/// Returns `RecursiveStructure` for self-containing sequences and
/// `InvalidArgument` for fragments with interior NUL bytes.
///
/// # Examples
///
/// ```
/// use filecore::path::{join_args, JoinArg};
///
/// let nested = JoinArg::list(vec!["b".into(), JoinArg::list(vec!["c".into()])]);
/// assert_eq!(join_args(&["a".into(), nested]).unwrap(), "a/b/c");
/// ```
pub fn join_args(args: &[JoinArg]) -> Result<String> {
    let mut active = HashSet::new();
    join_nested(args, &mut active)
}

fn join_nested(args: &[JoinArg], active: &mut HashSet<*const RefCell<Vec<JoinArg>>>) -> Result<String> {
    let mut joined: Option<String> = None;

    for arg in args {
        let fragment = match arg {
            JoinArg::Path(path) => {
                check_nul(path)?;
                path.clone()
            }
            JoinArg::List(list) => {
                let identity = Rc::as_ptr(list);
                if !active.insert(identity) {
                    return Err(Error::RecursiveStructure);
                }
                let inner = join_nested(&list.borrow(), active)?;
                active.remove(&identity);
                inner
            }
        };

        match joined.as_mut() {
            None => joined = Some(fragment),
            Some(acc) => append_fragment(acc, &fragment),
        }
    }

    Ok(joined.unwrap_or_default())
}

/// Appends `fragment` to `acc`, keeping exactly one separator between them.
fn append_fragment(acc: &mut String, fragment: &str) {
    if fragment.starts_with(SEPARATOR) {
        let kept = acc.trim_end_matches(SEPARATOR).len();
        acc.truncate(kept);
    } else if !acc.ends_with(SEPARATOR) {
        acc.push(SEPARATOR);
    }
    acc.push_str(fragment);
}
