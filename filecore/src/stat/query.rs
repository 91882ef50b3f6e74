//! Filesystem queries by path or descriptor.

use std::io;
use std::os::unix::io::RawFd;
use std::time::SystemTime;

use super::mode::{self, FileKind};
use super::record::FileStat;
use crate::error::{Error, Result};
use crate::sys::Syscalls;

/// Answers metadata questions through a [`Syscalls`] implementation.
///
/// Predicates return `Ok(false)` (or `Ok(None)`) when the path does not
/// exist or a component of it is not a directory, and an error when the
/// question could not be answered for any other reason.
///
/// # Examples
///
/// ```
/// use filecore::stat::FileQuery;
/// use filecore::sys::PosixSyscalls;
///
/// let query = FileQuery::new(&PosixSyscalls);
/// assert!(query.is_directory("/").unwrap());
/// assert!(!query.exists("/no/such/path").unwrap());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FileQuery<'s, S: Syscalls + ?Sized> {
    sys: &'s S,
}

/// True for the errors that mean "there is nothing there".
fn is_absent(err: &io::Error) -> bool {
    matches!(err.raw_os_error(), Some(libc::ENOENT | libc::ENOTDIR))
        || (err.raw_os_error().is_none() && err.kind() == io::ErrorKind::NotFound)
}

impl<'s, S: Syscalls + ?Sized> FileQuery<'s, S> {
    /// Creates a query façade over `sys`.
    pub const fn new(sys: &'s S) -> Self {
        Self { sys }
    }

    /// `stat` the path, following symlinks.
    ///
    /// # Errors
    ///
    /// Returns the classified OS error, including `NotFound`.
    pub fn stat(&self, path: &str) -> Result<FileStat> {
        self.sys
            .stat(path)
            .map(|raw| FileStat::from_raw(&raw))
            .map_err(|e| Error::from_io(e, path))
    }

    /// `lstat` the path; a final symlink is described, not followed.
    ///
    /// # Errors
    ///
    /// Returns the classified OS error, including `NotFound`.
    pub fn lstat(&self, path: &str) -> Result<FileStat> {
        self.sys
            .lstat(path)
            .map(|raw| FileStat::from_raw(&raw))
            .map_err(|e| Error::from_io(e, path))
    }

    /// `fstat` an open descriptor.
    ///
    /// # Errors
    ///
    /// Returns the classified OS error (`EBADF` for a closed descriptor).
    pub fn fstat(&self, fd: RawFd) -> Result<FileStat> {
        self.sys
            .fstat(fd)
            .map(|raw| FileStat::from_raw(&raw))
            .map_err(|e| Error::from_io(e, &format!("fd {fd}")))
    }

    /// Like [`stat`](Self::stat)/[`lstat`](Self::lstat), but absence is
    /// `Ok(None)`.
    fn probe(&self, path: &str, follow: bool) -> Result<Option<FileStat>> {
        let raw = if follow {
            self.sys.stat(path)
        } else {
            self.sys.lstat(path)
        };
        match raw {
            Ok(raw) => Ok(Some(FileStat::from_raw(&raw))),
            Err(e) if is_absent(&e) => Ok(None),
            Err(e) => Err(Error::from_io(e, path)),
        }
    }

    fn test_mode(&self, path: &str, follow: bool, pred: fn(u32) -> bool) -> Result<bool> {
        Ok(self.probe(path, follow)?.is_some_and(|stat| pred(stat.mode)))
    }

    /// Anything exists at `path` (after following symlinks).
    ///
    /// # Errors
    ///
    /// Returns an error when existence cannot be determined.
    pub fn exists(&self, path: &str) -> Result<bool> {
        Ok(self.probe(path, true)?.is_some())
    }

    /// Regular file.
    ///
    /// # Errors
    ///
    /// Returns an error when the path cannot be examined.
    pub fn is_file(&self, path: &str) -> Result<bool> {
        self.test_mode(path, true, mode::is_file)
    }

    /// Directory.
    ///
    /// # Errors
    ///
    /// Returns an error when the path cannot be examined.
    pub fn is_directory(&self, path: &str) -> Result<bool> {
        self.test_mode(path, true, mode::is_directory)
    }

    /// The path itself is a symlink (not followed).
    ///
    /// # Errors
    ///
    /// Returns an error when the path cannot be examined.
    pub fn is_symlink(&self, path: &str) -> Result<bool> {
        self.test_mode(path, false, mode::is_symlink)
    }

    /// Socket.
    ///
    /// # Errors
    ///
    /// Returns an error when the path cannot be examined.
    pub fn is_socket(&self, path: &str) -> Result<bool> {
        self.test_mode(path, true, mode::is_socket)
    }

    /// Named pipe.
    ///
    /// # Errors
    ///
    /// Returns an error when the path cannot be examined.
    pub fn is_pipe(&self, path: &str) -> Result<bool> {
        self.test_mode(path, true, mode::is_pipe)
    }

    /// Block device.
    ///
    /// # Errors
    ///
    /// Returns an error when the path cannot be examined.
    pub fn is_blockdev(&self, path: &str) -> Result<bool> {
        self.test_mode(path, true, mode::is_blockdev)
    }

    /// Character device.
    ///
    /// # Errors
    ///
    /// Returns an error when the path cannot be examined.
    pub fn is_chardev(&self, path: &str) -> Result<bool> {
        self.test_mode(path, true, mode::is_chardev)
    }

    /// Set-user-id bit.
    ///
    /// # Errors
    ///
    /// Returns an error when the path cannot be examined.
    pub fn is_setuid(&self, path: &str) -> Result<bool> {
        self.test_mode(path, true, mode::is_setuid)
    }

    /// Set-group-id bit.
    ///
    /// # Errors
    ///
    /// Returns an error when the path cannot be examined.
    pub fn is_setgid(&self, path: &str) -> Result<bool> {
        self.test_mode(path, true, mode::is_setgid)
    }

    /// Sticky bit.
    ///
    /// # Errors
    ///
    /// Returns an error when the path cannot be examined.
    pub fn is_sticky(&self, path: &str) -> Result<bool> {
        self.test_mode(path, true, mode::is_sticky)
    }

    /// The access bits when others may read the path.
    ///
    /// # Errors
    ///
    /// Returns an error when the path cannot be examined.
    pub fn world_readable(&self, path: &str) -> Result<Option<u32>> {
        Ok(self.probe(path, true)?.and_then(|stat| mode::world_readable(stat.mode)))
    }

    /// The access bits when others may write the path.
    ///
    /// # Errors
    ///
    /// Returns an error when the path cannot be examined.
    pub fn world_writable(&self, path: &str) -> Result<Option<u32>> {
        Ok(self.probe(path, true)?.and_then(|stat| mode::world_writable(stat.mode)))
    }

    fn test_access(&self, path: &str, check: fn(&FileStat, u32, u32) -> bool) -> Result<bool> {
        self.test_access_with(path, true, check)
    }

    fn test_access_with(
        &self,
        path: &str,
        follow: bool,
        check: fn(&FileStat, u32, u32) -> bool,
    ) -> Result<bool> {
        let Some(stat) = self.probe(path, follow)? else {
            return Ok(false);
        };
        let (euid, egid) = self.sys.effective_ids();
        Ok(check(&stat, euid, egid))
    }

    /// Readable by the effective user.
    ///
    /// # Errors
    ///
    /// Returns an error when the path cannot be examined.
    pub fn is_readable(&self, path: &str) -> Result<bool> {
        self.test_access(path, FileStat::is_readable_by)
    }

    /// Writable by the effective user.
    ///
    /// # Errors
    ///
    /// Returns an error when the path cannot be examined.
    pub fn is_writable(&self, path: &str) -> Result<bool> {
        self.test_access(path, FileStat::is_writable_by)
    }

    /// Executable (or searchable) by the effective user.
    ///
    /// # Errors
    ///
    /// Returns an error when the path cannot be examined.
    pub fn is_executable(&self, path: &str) -> Result<bool> {
        self.test_access(path, FileStat::is_executable_by)
    }

    /// Owned by the effective user.
    ///
    /// # Errors
    ///
    /// Returns an error when the path cannot be examined.
    pub fn is_owned(&self, path: &str) -> Result<bool> {
        self.test_access(path, |stat, euid, _| stat.is_owned_by(euid))
    }

    /// Group matches the effective group. A symlink is judged by its own
    /// group, not its target's.
    ///
    /// # Errors
    ///
    /// Returns an error when the path cannot be examined.
    pub fn is_grpowned(&self, path: &str) -> Result<bool> {
        self.test_access_with(path, false, |stat, _, egid| stat.is_grpowned_by(egid))
    }

    /// Size in bytes.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the path is missing.
    pub fn size(&self, path: &str) -> Result<u64> {
        Ok(self.stat(path)?.size)
    }

    /// Size in bytes, or `None` when missing or empty.
    ///
    /// # Errors
    ///
    /// Returns an error when the path cannot be examined.
    pub fn nonzero_size(&self, path: &str) -> Result<Option<u64>> {
        Ok(self.probe(path, true)?.and_then(|stat| stat.nonzero_size()))
    }

    /// Exists and has size zero.
    ///
    /// # Errors
    ///
    /// Returns an error when the path cannot be examined.
    pub fn is_zero(&self, path: &str) -> Result<bool> {
        Ok(self.probe(path, true)?.is_some_and(|stat| stat.is_zero()))
    }

    /// Alias of [`is_zero`](Self::is_zero).
    ///
    /// # Errors
    ///
    /// Returns an error when the path cannot be examined.
    pub fn is_empty(&self, path: &str) -> Result<bool> {
        self.is_zero(path)
    }

    /// The entry type, without following a final symlink.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the path is missing.
    pub fn ftype(&self, path: &str) -> Result<FileKind> {
        Ok(self.lstat(path)?.kind)
    }

    /// Both paths name the same file.
    ///
    /// False when either is missing.
    ///
    /// # Errors
    ///
    /// Returns an error when either path cannot be examined.
    pub fn is_identical(&self, a: &str, b: &str) -> Result<bool> {
        let Some(first) = self.probe(a, true)? else {
            return Ok(false);
        };
        let Some(second) = self.probe(b, true)? else {
            return Ok(false);
        };
        Ok(first.same_file(&second))
    }

    /// Last access time.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the path is missing.
    pub fn atime(&self, path: &str) -> Result<SystemTime> {
        Ok(self.stat(path)?.atime)
    }

    /// Last modification time.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the path is missing.
    pub fn mtime(&self, path: &str) -> Result<SystemTime> {
        Ok(self.stat(path)?.mtime)
    }

    /// Last status change time.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the path is missing.
    pub fn ctime(&self, path: &str) -> Result<SystemTime> {
        Ok(self.stat(path)?.ctime)
    }

    /// The descriptor refers to a directory.
    ///
    /// # Errors
    ///
    /// Returns an error for an invalid descriptor.
    pub fn is_directory_fd(&self, fd: RawFd) -> Result<bool> {
        Ok(self.fstat(fd)?.is_directory())
    }

    /// Size of the file behind a descriptor.
    ///
    /// # Errors
    ///
    /// Returns an error for an invalid descriptor.
    pub fn size_fd(&self, fd: RawFd) -> Result<u64> {
        Ok(self.fstat(fd)?.size)
    }
}
