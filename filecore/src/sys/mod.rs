//! The seam between filecore and the operating system.
//!
//! Every call that touches the filesystem or process state goes through the
//! [`Syscalls`] trait. [`PosixSyscalls`] is the production implementation;
//! tests substitute a mock so that symlink cycles, permission failures, and
//! missing platform features can be staged without a real filesystem.

use std::io;
use std::os::unix::io::RawFd;
use std::time::SystemTime;

#[allow(unsafe_code)]
mod posix;

pub use posix::PosixSyscalls;

/// A raw `stat` result, as plain numbers.
///
/// Timestamps are `(seconds, nanoseconds)` since the Unix epoch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawStat {
    /// Device id.
    pub dev: u64,
    /// Inode number.
    pub ino: u64,
    /// File type and permission bits.
    pub mode: u32,
    /// Hard link count.
    pub nlink: u64,
    /// Owner user id.
    pub uid: u32,
    /// Owner group id.
    pub gid: u32,
    /// Device id for special files.
    pub rdev: u64,
    /// Size in bytes.
    pub size: u64,
    /// Preferred I/O block size.
    pub blksize: u64,
    /// 512-byte blocks allocated.
    pub blocks: u64,
    /// Last access.
    pub atime: (i64, i64),
    /// Last modification.
    pub mtime: (i64, i64),
    /// Last status change.
    pub ctime: (i64, i64),
}

/// Trait for the system calls filecore depends on.
///
/// Implementations report failures as `io::Error` values carrying the raw
/// OS error code; callers translate them with [`Error::from_io`].
///
/// [`Error::from_io`]: crate::Error::from_io
///
/// # Examples
///
/// ```
/// use filecore::sys::{PosixSyscalls, Syscalls};
///
/// let sys = PosixSyscalls;
/// let stat = sys.stat("/").unwrap();
/// assert_eq!(stat.mode & libc::S_IFMT as u32, libc::S_IFDIR as u32);
/// ```
#[cfg_attr(test, mockall::automock)]
pub trait Syscalls: Send + Sync {
    /// `stat(2)`, following symlinks.
    ///
    /// # Errors
    ///
    /// Returns the OS error.
    fn stat(&self, path: &str) -> io::Result<RawStat>;

    /// `lstat(2)`, not following a final symlink.
    ///
    /// # Errors
    ///
    /// Returns the OS error.
    fn lstat(&self, path: &str) -> io::Result<RawStat>;

    /// `fstat(2)` on an open descriptor.
    ///
    /// # Errors
    ///
    /// Returns the OS error.
    fn fstat(&self, fd: RawFd) -> io::Result<RawStat>;

    /// The target of a symlink, verbatim.
    ///
    /// # Errors
    ///
    /// Returns the OS error; `EINVAL` if `path` is not a symlink.
    fn readlink(&self, path: &str) -> io::Result<String>;

    /// The platform's own `realpath(3)`.
    ///
    /// # Errors
    ///
    /// Returns the OS error; `ENOSYS` when the platform has none.
    fn realpath_native(&self, path: &str) -> io::Result<String>;

    /// Sets permission bits, following symlinks.
    ///
    /// # Errors
    ///
    /// Returns the OS error.
    fn chmod(&self, path: &str, mode: u32) -> io::Result<()>;

    /// Sets permission bits on an open descriptor.
    ///
    /// # Errors
    ///
    /// Returns the OS error.
    fn fchmod(&self, fd: RawFd, mode: u32) -> io::Result<()>;

    /// Sets permission bits on a symlink itself.
    ///
    /// # Errors
    ///
    /// Returns the OS error; `ENOSYS` when unsupported.
    fn lchmod(&self, path: &str, mode: u32) -> io::Result<()>;

    /// Changes owner and group; `None` leaves a field unchanged.
    ///
    /// # Errors
    ///
    /// Returns the OS error.
    fn chown(&self, path: &str, owner: Option<u32>, group: Option<u32>) -> io::Result<()>;

    /// `chown` on an open descriptor.
    ///
    /// # Errors
    ///
    /// Returns the OS error.
    fn fchown(&self, fd: RawFd, owner: Option<u32>, group: Option<u32>) -> io::Result<()>;

    /// `chown` on a symlink itself.
    ///
    /// # Errors
    ///
    /// Returns the OS error.
    fn lchown(&self, path: &str, owner: Option<u32>, group: Option<u32>) -> io::Result<()>;

    /// Creates a hard link `new` to `old`.
    ///
    /// # Errors
    ///
    /// Returns the OS error.
    fn link(&self, old: &str, new: &str) -> io::Result<()>;

    /// Creates a symlink at `new` pointing to `old`.
    ///
    /// # Errors
    ///
    /// Returns the OS error.
    fn symlink(&self, old: &str, new: &str) -> io::Result<()>;

    /// Renames `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns the OS error.
    fn rename(&self, from: &str, to: &str) -> io::Result<()>;

    /// Removes a non-directory entry.
    ///
    /// # Errors
    ///
    /// Returns the OS error.
    fn unlink(&self, path: &str) -> io::Result<()>;

    /// Sets the length of an existing file.
    ///
    /// # Errors
    ///
    /// Returns the OS error.
    fn truncate(&self, path: &str, len: u64) -> io::Result<()>;

    /// Sets the length of an open file.
    ///
    /// # Errors
    ///
    /// Returns the OS error.
    fn ftruncate(&self, fd: RawFd, len: u64) -> io::Result<()>;

    /// Sets access and modification times, following symlinks.
    ///
    /// # Errors
    ///
    /// Returns the OS error.
    fn utimes(&self, path: &str, atime: SystemTime, mtime: SystemTime) -> io::Result<()>;

    /// Sets access and modification times on a symlink itself.
    ///
    /// # Errors
    ///
    /// Returns the OS error.
    fn lutimes(&self, path: &str, atime: SystemTime, mtime: SystemTime) -> io::Result<()>;

    /// Sets the process file mode creation mask and returns the old one.
    fn umask(&self, mask: u32) -> u32;

    /// Creates a named pipe.
    ///
    /// # Errors
    ///
    /// Returns the OS error.
    fn mkfifo(&self, path: &str, mode: u32) -> io::Result<()>;

    /// The working directory as a string.
    ///
    /// # Errors
    ///
    /// Returns the OS error, or `InvalidData` if it is not valid UTF-8.
    fn current_dir(&self) -> io::Result<String>;

    /// The user's home directory, if known.
    fn home_dir(&self) -> Option<String>;

    /// Effective user and group ids of the process.
    fn effective_ids(&self) -> (u32, u32);

    /// Whether `lchmod` can work on this platform.
    fn supports_lchmod(&self) -> bool;
}
