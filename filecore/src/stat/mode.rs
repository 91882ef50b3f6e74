//! File mode bits and the pure predicates over them.
//!
//! The values are the POSIX ones, which every supported platform shares, so
//! they are spelled out here rather than taken from `libc` (whose `mode_t`
//! width differs between targets).

use std::fmt;

/// Mask for the file type bits.
pub const S_IFMT: u32 = 0o170_000;
/// Socket.
pub const S_IFSOCK: u32 = 0o140_000;
/// Symbolic link.
pub const S_IFLNK: u32 = 0o120_000;
/// Regular file.
pub const S_IFREG: u32 = 0o100_000;
/// Block device.
pub const S_IFBLK: u32 = 0o060_000;
/// Directory.
pub const S_IFDIR: u32 = 0o040_000;
/// Character device.
pub const S_IFCHR: u32 = 0o020_000;
/// Named pipe.
pub const S_IFIFO: u32 = 0o010_000;

/// Set-user-id on execution.
pub const S_ISUID: u32 = 0o4000;
/// Set-group-id on execution.
pub const S_ISGID: u32 = 0o2000;
/// Sticky bit.
pub const S_ISVTX: u32 = 0o1000;

/// Owner read.
pub const S_IRUSR: u32 = 0o400;
/// Owner write.
pub const S_IWUSR: u32 = 0o200;
/// Owner execute.
pub const S_IXUSR: u32 = 0o100;
/// Group read.
pub const S_IRGRP: u32 = 0o040;
/// Group write.
pub const S_IWGRP: u32 = 0o020;
/// Group execute.
pub const S_IXGRP: u32 = 0o010;
/// Others read.
pub const S_IROTH: u32 = 0o004;
/// Others write.
pub const S_IWOTH: u32 = 0o002;
/// Others execute.
pub const S_IXOTH: u32 = 0o001;

/// Read, write, and execute bits for owner, group, and others.
pub const ACCESS_BITS: u32 = 0o777;
/// Access bits plus setuid, setgid, and sticky.
pub const PERMISSION_BITS: u32 = 0o7777;

/// The type of a filesystem entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    /// Regular file.
    Regular,
    /// Directory.
    Directory,
    /// Character device.
    CharDevice,
    /// Block device.
    BlockDevice,
    /// Named pipe.
    Fifo,
    /// Symbolic link.
    Symlink,
    /// Socket.
    Socket,
    /// Anything else.
    Unknown,
}

impl FileKind {
    /// Classifies the type bits of `mode`.
    ///
    /// # Examples
    ///
    /// ```
    /// use filecore::stat::mode::{FileKind, S_IFDIR};
    ///
    /// assert_eq!(FileKind::from_mode(S_IFDIR | 0o755), FileKind::Directory);
    /// assert_eq!(FileKind::from_mode(0), FileKind::Unknown);
    /// ```
    #[must_use]
    pub const fn from_mode(mode: u32) -> Self {
        match mode & S_IFMT {
            S_IFREG => Self::Regular,
            S_IFDIR => Self::Directory,
            S_IFCHR => Self::CharDevice,
            S_IFBLK => Self::BlockDevice,
            S_IFIFO => Self::Fifo,
            S_IFLNK => Self::Symlink,
            S_IFSOCK => Self::Socket,
            _ => Self::Unknown,
        }
    }

    /// The name reported by `ftype`.
    #[must_use]
    pub const fn ftype(self) -> &'static str {
        match self {
            Self::Regular => "file",
            Self::Directory => "directory",
            Self::CharDevice => "characterSpecial",
            Self::BlockDevice => "blockSpecial",
            Self::Fifo => "fifo",
            Self::Symlink => "link",
            Self::Socket => "socket",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ftype())
    }
}

const fn has_type(mode: u32, kind: u32) -> bool {
    mode & S_IFMT == kind
}

/// Regular file.
#[must_use]
pub const fn is_file(mode: u32) -> bool {
    has_type(mode, S_IFREG)
}

/// Directory.
#[must_use]
pub const fn is_directory(mode: u32) -> bool {
    has_type(mode, S_IFDIR)
}

/// Symbolic link (only meaningful for `lstat` results).
#[must_use]
pub const fn is_symlink(mode: u32) -> bool {
    has_type(mode, S_IFLNK)
}

/// Socket.
#[must_use]
pub const fn is_socket(mode: u32) -> bool {
    has_type(mode, S_IFSOCK)
}

/// Named pipe.
#[must_use]
pub const fn is_pipe(mode: u32) -> bool {
    has_type(mode, S_IFIFO)
}

/// Block device.
#[must_use]
pub const fn is_blockdev(mode: u32) -> bool {
    has_type(mode, S_IFBLK)
}

/// Character device.
#[must_use]
pub const fn is_chardev(mode: u32) -> bool {
    has_type(mode, S_IFCHR)
}

/// Set-user-id bit.
#[must_use]
pub const fn is_setuid(mode: u32) -> bool {
    mode & S_ISUID != 0
}

/// Set-group-id bit.
#[must_use]
pub const fn is_setgid(mode: u32) -> bool {
    mode & S_ISGID != 0
}

/// Sticky bit.
#[must_use]
pub const fn is_sticky(mode: u32) -> bool {
    mode & S_ISVTX != 0
}

/// The access bits if others may read, else `None`.
///
/// # Examples
///
/// ```
/// use filecore::stat::mode::{world_readable, S_IFREG};
///
/// assert_eq!(world_readable(S_IFREG | 0o644), Some(0o644));
/// assert_eq!(world_readable(S_IFREG | 0o640), None);
/// ```
#[must_use]
pub const fn world_readable(mode: u32) -> Option<u32> {
    if mode & S_IROTH != 0 {
        Some(mode & ACCESS_BITS)
    } else {
        None
    }
}

/// The access bits if others may write, else `None`.
#[must_use]
pub const fn world_writable(mode: u32) -> Option<u32> {
    if mode & S_IWOTH != 0 {
        Some(mode & ACCESS_BITS)
    } else {
        None
    }
}
