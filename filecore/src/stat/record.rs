//! The structured metadata record.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use super::mode::{self, FileKind};
use crate::sys::RawStat;

/// A point-in-time snapshot of one `stat` result.
///
/// Built fresh for each query and never cached; a later query may see
/// different values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStat {
    /// Device id.
    pub dev: u64,
    /// Inode number.
    pub ino: u64,
    /// Entry type, decoded from `mode`.
    pub kind: FileKind,
    /// Raw mode: type and permission bits.
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
    pub atime: SystemTime,
    /// Last modification.
    pub mtime: SystemTime,
    /// Last status change.
    pub ctime: SystemTime,
}

fn timestamp((secs, nanos): (i64, i64)) -> SystemTime {
    let nanos = Duration::from_nanos(nanos.clamp(0, 999_999_999).unsigned_abs());
    let whole = Duration::from_secs(secs.unsigned_abs());
    if secs >= 0 {
        UNIX_EPOCH + whole + nanos
    } else {
        UNIX_EPOCH - whole + nanos
    }
}

impl FileStat {
    /// Decodes a raw record.
    #[must_use]
    pub fn from_raw(raw: &RawStat) -> Self {
        Self {
            dev: raw.dev,
            ino: raw.ino,
            kind: FileKind::from_mode(raw.mode),
            mode: raw.mode,
            nlink: raw.nlink,
            uid: raw.uid,
            gid: raw.gid,
            rdev: raw.rdev,
            size: raw.size,
            blksize: raw.blksize,
            blocks: raw.blocks,
            atime: timestamp(raw.atime),
            mtime: timestamp(raw.mtime),
            ctime: timestamp(raw.ctime),
        }
    }

    /// Permission bits including setuid, setgid, and sticky.
    #[must_use]
    pub const fn permissions(&self) -> u32 {
        self.mode & mode::PERMISSION_BITS
    }

    /// Regular file.
    #[must_use]
    pub const fn is_file(&self) -> bool {
        mode::is_file(self.mode)
    }

    /// Directory.
    #[must_use]
    pub const fn is_directory(&self) -> bool {
        mode::is_directory(self.mode)
    }

    /// Symbolic link.
    #[must_use]
    pub const fn is_symlink(&self) -> bool {
        mode::is_symlink(self.mode)
    }

    /// True when the size is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.size == 0
    }

    /// The size, or `None` when it is zero.
    #[must_use]
    pub const fn nonzero_size(&self) -> Option<u64> {
        if self.size == 0 {
            None
        } else {
            Some(self.size)
        }
    }

    /// Owned by `euid`.
    #[must_use]
    pub const fn is_owned_by(&self, euid: u32) -> bool {
        self.uid == euid
    }

    /// Group-owned by `egid`.
    #[must_use]
    pub const fn is_grpowned_by(&self, egid: u32) -> bool {
        self.gid == egid
    }

    /// Picks the owner, group, or other bit that applies to the caller.
    const fn class_bit(&self, euid: u32, egid: u32, user: u32, group: u32, other: u32) -> bool {
        let bit = if self.uid == euid {
            user
        } else if self.gid == egid {
            group
        } else {
            other
        };
        self.mode & bit != 0
    }

    /// Readable by a process with the given effective ids. Root reads
    /// anything.
    ///
    /// # Examples
    ///
    /// ```
    /// use filecore::stat::FileStat;
    /// use filecore::sys::RawStat;
    ///
    /// let stat = FileStat::from_raw(&RawStat { mode: 0o100_640, uid: 10, gid: 20, ..RawStat::default() });
    /// assert!(stat.is_readable_by(10, 99));
    /// assert!(stat.is_readable_by(11, 20));
    /// assert!(!stat.is_readable_by(11, 21));
    /// assert!(stat.is_readable_by(0, 0));
    /// ```
    #[must_use]
    pub const fn is_readable_by(&self, euid: u32, egid: u32) -> bool {
        euid == 0 || self.class_bit(euid, egid, mode::S_IRUSR, mode::S_IRGRP, mode::S_IROTH)
    }

    /// Writable by a process with the given effective ids. Root writes
    /// anything.
    #[must_use]
    pub const fn is_writable_by(&self, euid: u32, egid: u32) -> bool {
        euid == 0 || self.class_bit(euid, egid, mode::S_IWUSR, mode::S_IWGRP, mode::S_IWOTH)
    }

    /// Executable by a process with the given effective ids.
    ///
    /// Root may execute when any execute bit is set, and always may search
    /// a directory.
    #[must_use]
    pub const fn is_executable_by(&self, euid: u32, egid: u32) -> bool {
        if euid == 0 {
            let any_x = mode::S_IXUSR | mode::S_IXGRP | mode::S_IXOTH;
            return self.mode & any_x != 0 || self.is_directory();
        }
        self.class_bit(euid, egid, mode::S_IXUSR, mode::S_IXGRP, mode::S_IXOTH)
    }

    /// Same device, inode, and kind.
    #[must_use]
    pub fn same_file(&self, other: &Self) -> bool {
        self.dev == other.dev && self.ino == other.ino && self.kind == other.kind
    }
}
