//! Single-call operations that change file metadata or directory entries.
//!
//! The list forms (`chmod`, `chown`, `utime`, `unlink`, ...) apply the same
//! change to every path in order, stop at the first failure, and return the
//! number of paths processed. Nothing is rolled back: paths before the
//! failing one stay changed.

use std::os::unix::io::RawFd;
use std::time::SystemTime;

use crate::error::{Error, Result};
use crate::stat::FileQuery;
use crate::sys::Syscalls;

/// Default permission bits for [`FileOps::mkfifo`].
pub const DEFAULT_FIFO_MODE: u32 = 0o666;

/// Clamp a caller-supplied mode to the 16-bit `mode_t` range.
///
/// Negative values and values above `0xffff` become `0` instead of being
/// truncated to their low bits.
///
/// # Examples
///
/// ```
/// use filecore::ops::clamp_mode;
///
/// assert_eq!(clamp_mode(0o644), 0o644);
/// assert_eq!(clamp_mode(-1), 0);
/// assert_eq!(clamp_mode(0x1_0000), 0);
/// ```
#[must_use]
pub fn clamp_mode(mode: i64) -> u32 {
    u32::try_from(mode)
        .ok()
        .filter(|m| *m <= 0xffff)
        .unwrap_or(0)
}

/// Metadata-mutating operations over a [`Syscalls`] implementation.
///
/// # Examples
///
/// ```no_run
/// use filecore::ops::FileOps;
/// use filecore::sys::PosixSyscalls;
///
/// let ops = FileOps::new(&PosixSyscalls);
/// let changed = ops.chmod(0o644, &["a.txt", "b.txt"])?;
/// assert_eq!(changed, 2);
/// # Ok::<(), filecore::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FileOps<'s, S: Syscalls + ?Sized> {
    sys: &'s S,
}

impl<'s, S: Syscalls + ?Sized> FileOps<'s, S> {
    /// Creates an operations façade over `sys`.
    pub const fn new(sys: &'s S) -> Self {
        Self { sys }
    }

    fn each<P: AsRef<str>>(
        &self,
        paths: &[P],
        op: &str,
        mut call: impl FnMut(&str) -> std::io::Result<()>,
    ) -> Result<usize> {
        for path in paths {
            let path = path.as_ref();
            log::trace!("{op} {path}");
            call(path).map_err(|e| Error::from_io(e, path))?;
        }
        Ok(paths.len())
    }

    /// Sets the permission bits of each path, following symlinks.
    ///
    /// `mode` is clamped with [`clamp_mode`].
    ///
    /// # Errors
    ///
    /// Returns the classified OS error for the first path that fails.
    pub fn chmod<P: AsRef<str>>(&self, mode: i64, paths: &[P]) -> Result<usize> {
        let mode = clamp_mode(mode);
        self.each(paths, "chmod", |path| self.sys.chmod(path, mode))
    }

    /// Sets the permission bits of each symlink itself.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedOperation` when the platform has no `lchmod`,
    /// otherwise the classified OS error for the first path that fails.
    pub fn lchmod<P: AsRef<str>>(&self, mode: i64, paths: &[P]) -> Result<usize> {
        if !self.sys.supports_lchmod() {
            return Err(Error::UnsupportedOperation {
                operation: "lchmod".to_string(),
            });
        }
        let mode = clamp_mode(mode);
        self.each(paths, "lchmod", |path| self.sys.lchmod(path, mode))
    }

    /// Changes owner and group of each path; `None` leaves that id alone.
    ///
    /// # Errors
    ///
    /// Returns the classified OS error for the first path that fails.
    pub fn chown<P: AsRef<str>>(
        &self,
        owner: Option<u32>,
        group: Option<u32>,
        paths: &[P],
    ) -> Result<usize> {
        self.each(paths, "chown", |path| self.sys.chown(path, owner, group))
    }

    /// Like [`chown`](Self::chown), but acts on symlinks themselves.
    ///
    /// # Errors
    ///
    /// Returns the classified OS error for the first path that fails.
    pub fn lchown<P: AsRef<str>>(
        &self,
        owner: Option<u32>,
        group: Option<u32>,
        paths: &[P],
    ) -> Result<usize> {
        self.each(paths, "lchown", |path| self.sys.lchown(path, owner, group))
    }

    /// Sets access and modification times, following symlinks.
    ///
    /// A `None` time means now; both share one clock reading.
    ///
    /// # Errors
    ///
    /// Returns the classified OS error for the first path that fails.
    pub fn utime<P: AsRef<str>>(
        &self,
        atime: Option<SystemTime>,
        mtime: Option<SystemTime>,
        paths: &[P],
    ) -> Result<usize> {
        let (atime, mtime) = resolve_times(atime, mtime);
        self.each(paths, "utime", |path| self.sys.utimes(path, atime, mtime))
    }

    /// Like [`utime`](Self::utime), but acts on symlinks themselves.
    ///
    /// # Errors
    ///
    /// Returns the classified OS error for the first path that fails.
    pub fn lutime<P: AsRef<str>>(
        &self,
        atime: Option<SystemTime>,
        mtime: Option<SystemTime>,
        paths: &[P],
    ) -> Result<usize> {
        let (atime, mtime) = resolve_times(atime, mtime);
        self.each(paths, "lutime", |path| self.sys.lutimes(path, atime, mtime))
    }

    /// Removes each path. Directories are not removed.
    ///
    /// # Errors
    ///
    /// Returns the classified OS error for the first path that fails.
    pub fn unlink<P: AsRef<str>>(&self, paths: &[P]) -> Result<usize> {
        self.each(paths, "unlink", |path| self.sys.unlink(path))
    }

    /// Creates a hard link `new` to `old`.
    ///
    /// # Errors
    ///
    /// Returns the classified OS error; the path reported is `new`.
    pub fn link(&self, old: &str, new: &str) -> Result<()> {
        self.sys.link(old, new).map_err(|e| Error::from_io(e, new))
    }

    /// Creates a symlink at `new` whose target is `old`, stored verbatim.
    ///
    /// # Errors
    ///
    /// Returns the classified OS error; the path reported is `new`.
    pub fn symlink(&self, old: &str, new: &str) -> Result<()> {
        self.sys.symlink(old, new).map_err(|e| Error::from_io(e, new))
    }

    /// Renames `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns the classified OS error; the path reported is `from`.
    pub fn rename(&self, from: &str, to: &str) -> Result<()> {
        self.sys.rename(from, to).map_err(|e| Error::from_io(e, from))
    }

    /// The target of a symlink, verbatim.
    ///
    /// # Errors
    ///
    /// Returns the classified OS error; `EINVAL` (as `System`) when the
    /// path is not a symlink.
    pub fn readlink(&self, path: &str) -> Result<String> {
        self.sys.readlink(path).map_err(|e| Error::from_io(e, path))
    }

    /// Sets the length of an existing file.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when nothing exists at `path`, otherwise the
    /// classified OS error.
    pub fn truncate(&self, path: &str, len: u64) -> Result<()> {
        if !FileQuery::new(self.sys).exists(path)? {
            return Err(Error::NotFound { path: path.into() });
        }
        self.sys.truncate(path, len).map_err(|e| Error::from_io(e, path))
    }

    /// Creates a named pipe with `mode` (default [`DEFAULT_FIFO_MODE`]),
    /// subject to the umask.
    ///
    /// # Errors
    ///
    /// Returns the classified OS error.
    pub fn mkfifo(&self, path: &str, mode: Option<u32>) -> Result<()> {
        let mode = mode.unwrap_or(DEFAULT_FIFO_MODE);
        self.sys.mkfifo(path, mode).map_err(|e| Error::from_io(e, path))
    }

    /// Reads the process umask, or sets it and returns the previous one.
    ///
    /// Reading is done by setting `0` and restoring the old value, so a
    /// concurrent file creation on another thread may observe the
    /// temporary mask.
    pub fn umask(&self, mask: Option<i64>) -> u32 {
        match mask {
            Some(mask) => self.sys.umask(clamp_mode(mask)),
            None => {
                let old = self.sys.umask(0);
                self.sys.umask(old);
                old
            }
        }
    }

    /// `chmod` on an open descriptor.
    ///
    /// # Errors
    ///
    /// Returns the classified OS error.
    pub fn fchmod(&self, fd: RawFd, mode: i64) -> Result<()> {
        self.sys
            .fchmod(fd, clamp_mode(mode))
            .map_err(|e| Error::from_io(e, &format!("fd {fd}")))
    }

    /// `chown` on an open descriptor.
    ///
    /// # Errors
    ///
    /// Returns the classified OS error.
    pub fn fchown(&self, fd: RawFd, owner: Option<u32>, group: Option<u32>) -> Result<()> {
        self.sys
            .fchown(fd, owner, group)
            .map_err(|e| Error::from_io(e, &format!("fd {fd}")))
    }

    /// Sets the length of an open file.
    ///
    /// # Errors
    ///
    /// Returns the classified OS error.
    pub fn ftruncate(&self, fd: RawFd, len: u64) -> Result<()> {
        self.sys
            .ftruncate(fd, len)
            .map_err(|e| Error::from_io(e, &format!("fd {fd}")))
    }
}

fn resolve_times(
    atime: Option<SystemTime>,
    mtime: Option<SystemTime>,
) -> (SystemTime, SystemTime) {
    let now = SystemTime::now();
    (atime.unwrap_or(now), mtime.unwrap_or(now))
}
