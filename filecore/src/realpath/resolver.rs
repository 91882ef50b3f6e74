//! Symlink-resolving canonicalization.

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::path::normalize::expand_with;
use crate::path::types::check_nul;
use crate::path::{dirname, is_absolute, join, SEPARATOR};
use crate::realpath::RealpathStrategy;
use crate::stat::FileQuery;
use crate::sys::Syscalls;

/// Symlinks followed in one resolution before giving up.
pub const DEFAULT_MAX_SYMLINK_DEPTH: usize = 40;

/// Resolves paths to their canonical form by following symlinks.
///
/// Each call owns its own visited set; a symlink seen twice in one
/// resolution is a cycle and fails with `TooManySymlinks`.
///
/// # Examples
///
/// ```
/// use filecore::realpath::RealpathResolver;
/// use filecore::sys::PosixSyscalls;
///
/// let resolver = RealpathResolver::new(&PosixSyscalls);
/// assert_eq!(resolver.realpath("/", None).unwrap(), "/");
/// assert!(resolver.realpath("/no/such/file", None).unwrap_err().is_not_found());
/// ```
#[derive(Debug)]
pub struct RealpathResolver<'s, S: Syscalls + ?Sized> {
    sys: &'s S,
    strategy: RealpathStrategy,
    max_symlink_depth: usize,
}

impl<'s, S: Syscalls + ?Sized> RealpathResolver<'s, S> {
    /// Create a resolver using the component walk.
    #[must_use]
    pub fn new(sys: &'s S) -> Self {
        Self {
            sys,
            strategy: RealpathStrategy::default(),
            max_symlink_depth: DEFAULT_MAX_SYMLINK_DEPTH,
        }
    }

    /// Configure the resolution strategy used by [`realpath`](Self::realpath).
    ///
    /// # Examples
    ///
    /// ```
    /// use filecore::realpath::RealpathResolver;
    /// use filecore::sys::PosixSyscalls;
    /// use filecore::RealpathStrategy;
    ///
    /// let resolver = RealpathResolver::new(&PosixSyscalls)
    ///     .with_strategy(RealpathStrategy::Native);
    /// assert_eq!(resolver.strategy(), RealpathStrategy::Native);
    /// ```
    #[must_use]
    pub fn with_strategy(mut self, strategy: RealpathStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Configure how many symlinks one resolution may follow.
    #[must_use]
    pub fn with_max_symlink_depth(mut self, depth: usize) -> Self {
        self.max_symlink_depth = depth;
        self
    }

    /// The configured strategy.
    #[must_use]
    pub fn strategy(&self) -> RealpathStrategy {
        self.strategy
    }

    /// The canonical path of an existing file.
    ///
    /// Relative paths are expanded against `base` or the working directory
    /// first.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the result does not exist, `TooManySymlinks`
    /// on a cycle, and the classified OS error if a `readlink` or `stat`
    /// along the way fails.
    pub fn realpath(&self, path: &str, base: Option<&str>) -> Result<String> {
        let target = if is_absolute(path) {
            check_nul(path)?;
            path.to_string()
        } else {
            expand_with(self.sys, path, base, true)?
        };

        let real = match self.strategy {
            RealpathStrategy::Walk => self.walk(&target, None)?,
            RealpathStrategy::Native => match self.sys.realpath_native(&target) {
                Ok(real) => real,
                Err(e) if e.raw_os_error() == Some(libc::ENOSYS) => {
                    log::debug!("native realpath unavailable, walking {target}");
                    self.walk(&target, None)?
                }
                Err(e) => return Err(Error::from_io(e, &target)),
            },
        };

        if !FileQuery::new(self.sys).exists(&real)? {
            return Err(Error::NotFound { path: real });
        }
        Ok(real)
    }

    /// Like [`realpath`](Self::realpath), but the last component need not
    /// exist. Its parent must be a directory.
    ///
    /// Always uses the component walk.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the parent of the result is not a directory,
    /// `TooManySymlinks` on a cycle, and the classified OS error for
    /// failing calls.
    pub fn realdirpath(&self, path: &str, base: Option<&str>) -> Result<String> {
        let real = self.walk(path, base)?;
        let parent = dirname(&real);
        if !FileQuery::new(self.sys).is_directory(&parent)? {
            return Err(Error::NotFound { path: real });
        }
        Ok(real)
    }

    /// Resolves symlinks one component at a time without checking that the
    /// result exists.
    ///
    /// # Errors
    ///
    /// Returns `TooManySymlinks` on a cycle or when more than the configured
    /// number of symlinks are followed.
    pub fn walk(&self, path: &str, base: Option<&str>) -> Result<String> {
        let query = FileQuery::new(self.sys);
        let mut pending = expand_with(self.sys, path, base, true)?;
        let mut real = String::new();
        let mut visited: HashSet<String> = HashSet::new();

        while !pending.is_empty() {
            // Expanded paths start with a separator; the component runs to
            // the next one.
            let (name, rest) = match pending[1..].find(SEPARATOR) {
                Some(pos) => pending.split_at(pos + 1),
                None => (pending.as_str(), ""),
            };
            real = join(&[real.as_str(), name]);
            let rest = rest.to_string();

            if !query.is_symlink(&real)? {
                pending = rest;
                continue;
            }

            if !visited.insert(real.clone()) || visited.len() > self.max_symlink_depth {
                return Err(Error::TooManySymlinks { path: real });
            }

            let target = self.sys.readlink(&real).map_err(|e| Error::from_io(e, &real))?;
            log::debug!("following symlink {real} -> {target}");

            let next = if rest.is_empty() {
                target
            } else {
                join(&[target.as_str(), rest.as_str()])
            };
            pending = expand_with(self.sys, &next, Some(&dirname(&real)), false)?;
            real.clear();
        }

        Ok(real)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stat::mode::{S_IFDIR, S_IFLNK, S_IFREG};
    use crate::sys::{MockSyscalls, RawStat};
    use std::collections::HashMap;
    use std::io;

    fn stat_of(mode: u32) -> RawStat {
        RawStat {
            mode,
            ..RawStat::default()
        }
    }

    /// A mock filesystem: directories, regular files, and symlinks by
    /// absolute path.
    fn fake_fs(links: &[(&str, &str)], dirs: &[&str], files: &[&str]) -> MockSyscalls {
        let links: HashMap<String, String> = links
            .iter()
            .map(|(l, t)| ((*l).to_string(), (*t).to_string()))
            .collect();
        let dirs: Vec<String> = dirs.iter().map(|d| (*d).to_string()).collect();
        let files: Vec<String> = files.iter().map(|f| (*f).to_string()).collect();

        let kind_of = {
            let links = links.clone();
            move |path: &str| -> io::Result<RawStat> {
                if path == "/" || dirs.iter().any(|d| d == path) {
                    Ok(stat_of(S_IFDIR | 0o755))
                } else if links.contains_key(path) {
                    Ok(stat_of(S_IFLNK | 0o777))
                } else if files.iter().any(|f| f == path) {
                    Ok(stat_of(S_IFREG | 0o644))
                } else {
                    Err(io::Error::from_raw_os_error(libc::ENOENT))
                }
            }
        };

        let mut sys = MockSyscalls::new();
        let lstat_kind = kind_of.clone();
        sys.expect_lstat().returning(move |p| lstat_kind(p));
        // stat is only asked about resolved paths, which are never links
        sys.expect_stat().returning(move |p| kind_of(p));
        sys.expect_readlink().returning(move |p| {
            links
                .get(p)
                .cloned()
                .ok_or_else(|| io::Error::from_raw_os_error(libc::EINVAL))
        });
        sys.expect_current_dir().returning(|| Ok("/work".to_string()));
        sys.expect_home_dir().returning(|| Some("/home/me".to_string()));
        sys
    }

    #[test]
    fn test_plain_path_unchanged() {
        let sys = fake_fs(&[], &["/usr", "/usr/bin"], &["/usr/bin/env"]);
        let resolver = RealpathResolver::new(&sys);
        assert_eq!(resolver.realpath("/usr/bin/env", None).unwrap(), "/usr/bin/env");
        assert_eq!(resolver.realpath("/usr/./bin/../bin/env", None).unwrap(), "/usr/bin/env");
    }

    #[test]
    fn test_absolute_and_relative_links() {
        let sys = fake_fs(
            &[("/a/abs", "/b"), ("/a/rel", "../b/file")],
            &["/a", "/b"],
            &["/b/file"],
        );
        let resolver = RealpathResolver::new(&sys);
        assert_eq!(resolver.realpath("/a/abs/file", None).unwrap(), "/b/file");
        assert_eq!(resolver.realpath("/a/rel", None).unwrap(), "/b/file");
    }

    #[test]
    fn test_chained_links() {
        let sys = fake_fs(&[("/x", "/y"), ("/y", "/z")], &["/z"], &[]);
        let resolver = RealpathResolver::new(&sys);
        assert_eq!(resolver.realpath("/x", None).unwrap(), "/z");
    }

    #[test]
    fn test_cycle_is_too_many_symlinks() {
        let sys = fake_fs(&[("/a", "/b"), ("/b", "/a")], &[], &[]);
        let resolver = RealpathResolver::new(&sys);
        let err = resolver.realpath("/a", None).unwrap_err();
        assert!(matches!(err, Error::TooManySymlinks { .. }));
        assert!(matches!(
            resolver.realdirpath("/a/child", None).unwrap_err(),
            Error::TooManySymlinks { .. }
        ));
    }

    #[test]
    fn test_self_link_is_too_many_symlinks() {
        let sys = fake_fs(&[("/loop", "loop")], &[], &[]);
        let resolver = RealpathResolver::new(&sys);
        assert!(matches!(
            resolver.walk("/loop", None).unwrap_err(),
            Error::TooManySymlinks { .. }
        ));
    }

    #[test]
    fn test_depth_limit() {
        let sys = fake_fs(&[("/l1", "/l2"), ("/l2", "/l3"), ("/l3", "/end")], &["/end"], &[]);
        let shallow = RealpathResolver::new(&sys).with_max_symlink_depth(2);
        assert!(matches!(
            shallow.realpath("/l1", None).unwrap_err(),
            Error::TooManySymlinks { .. }
        ));
        let deep = RealpathResolver::new(&sys).with_max_symlink_depth(3);
        assert_eq!(deep.realpath("/l1", None).unwrap(), "/end");
    }

    #[test]
    fn test_missing_target() {
        let sys = fake_fs(&[("/dangling", "/nowhere/file")], &["/dir"], &[]);
        let resolver = RealpathResolver::new(&sys);

        let err = resolver.realpath("/dangling", None).unwrap_err();
        assert!(err.is_not_found());

        assert!(resolver.realdirpath("/dangling", None).unwrap_err().is_not_found());
        assert_eq!(resolver.realdirpath("/dir/new", None).unwrap(), "/dir/new");
    }

    #[test]
    fn test_relative_input_uses_base_or_cwd() {
        let sys = fake_fs(&[], &["/work", "/srv"], &["/work/f", "/srv/f"]);
        let resolver = RealpathResolver::new(&sys);
        assert_eq!(resolver.realpath("f", None).unwrap(), "/work/f");
        assert_eq!(resolver.realpath("f", Some("/srv")).unwrap(), "/srv/f");
    }

    #[test]
    fn test_link_target_tilde_is_literal() {
        let sys = fake_fs(&[("/d/l", "~")], &["/d"], &["/d/~"]);
        let resolver = RealpathResolver::new(&sys);
        assert_eq!(resolver.realpath("/d/l", None).unwrap(), "/d/~");
    }

    #[test]
    fn test_readlink_failure_propagates() {
        let mut sys = MockSyscalls::new();
        sys.expect_lstat().returning(|_| Ok(stat_of(S_IFLNK | 0o777)));
        sys.expect_readlink()
            .returning(|_| Err(io::Error::from_raw_os_error(libc::EACCES)));
        let resolver = RealpathResolver::new(&sys);
        assert!(resolver.walk("/x", None).unwrap_err().is_permission_denied());
    }

    #[test]
    fn test_nul_byte_rejected_before_any_call() {
        // no expectations: touching the filesystem would panic
        let sys = MockSyscalls::new();
        let resolver = RealpathResolver::new(&sys);
        let err = resolver.realpath("/tmp/a\0b", None).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
        assert!(err.is_input_error());
    }

    #[test]
    fn test_native_strategy() {
        let mut sys = MockSyscalls::new();
        sys.expect_realpath_native().returning(|_| Ok("/real/path".to_string()));
        sys.expect_stat().returning(|_| Ok(stat_of(S_IFREG)));
        let resolver = RealpathResolver::new(&sys).with_strategy(RealpathStrategy::Native);
        assert_eq!(resolver.realpath("/some/link", None).unwrap(), "/real/path");
    }

    #[test]
    fn test_native_falls_back_on_enosys() {
        let mut sys = fake_fs(&[("/x", "/y")], &["/y"], &[]);
        sys.expect_realpath_native()
            .times(1)
            .returning(|_| Err(io::Error::from_raw_os_error(libc::ENOSYS)));
        let resolver = RealpathResolver::new(&sys).with_strategy(RealpathStrategy::Native);
        assert_eq!(resolver.realpath("/x", None).unwrap(), "/y");
    }

    #[test]
    fn test_native_errors_are_classified() {
        let mut sys = MockSyscalls::new();
        sys.expect_realpath_native()
            .returning(|_| Err(io::Error::from_raw_os_error(libc::ELOOP)));
        let resolver = RealpathResolver::new(&sys).with_strategy(RealpathStrategy::Native);
        assert!(matches!(
            resolver.realpath("/loop", None).unwrap_err(),
            Error::TooManySymlinks { .. }
        ));
    }
}
