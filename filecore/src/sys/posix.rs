//! Production [`Syscalls`] implementation on top of `std::fs` and `libc`.

#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::unnecessary_cast,
    clippy::useless_conversion
)]

use std::env;
use std::ffi::CString;
use std::fs;
use std::io;
use std::mem;
use std::os::unix::fs::{MetadataExt, PermissionsExt};
use std::os::unix::io::RawFd;
use std::time::{SystemTime, UNIX_EPOCH};

use super::{RawStat, Syscalls};

/// Whether the target has a working `lchmod(2)`.
const HAS_LCHMOD: bool = cfg!(any(target_os = "macos", target_os = "freebsd"));

/// `uid_t`/`gid_t` value that tells `chown` to leave an id alone.
const UNCHANGED_ID: u32 = u32::MAX;

/// The real operating system.
///
/// Stateless; every call goes straight to the OS.
#[derive(Debug, Clone, Copy, Default)]
pub struct PosixSyscalls;

fn c_path(path: &str) -> io::Result<CString> {
    CString::new(path).map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "path contains NUL"))
}

fn check(res: libc::c_int) -> io::Result<()> {
    if res < 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(())
}

fn to_off(len: u64) -> io::Result<libc::off_t> {
    libc::off_t::try_from(len).map_err(|_| io::Error::from_raw_os_error(libc::EFBIG))
}

fn to_timespec(time: SystemTime) -> libc::timespec {
    let (secs, nanos) = match time.duration_since(UNIX_EPOCH) {
        Ok(after) => (after.as_secs() as i64, i64::from(after.subsec_nanos())),
        Err(before) => {
            let before = before.duration();
            let mut secs = -(before.as_secs() as i64);
            let mut nanos = i64::from(before.subsec_nanos());
            if nanos > 0 {
                secs -= 1;
                nanos = 1_000_000_000 - nanos;
            }
            (secs, nanos)
        }
    };
    libc::timespec {
        tv_sec: secs as libc::time_t,
        tv_nsec: nanos as _,
    }
}

fn from_metadata(meta: &fs::Metadata) -> RawStat {
    RawStat {
        dev: meta.dev(),
        ino: meta.ino(),
        mode: meta.mode(),
        nlink: meta.nlink(),
        uid: meta.uid(),
        gid: meta.gid(),
        rdev: meta.rdev(),
        size: meta.size(),
        blksize: meta.blksize(),
        blocks: meta.blocks(),
        atime: (meta.atime(), meta.atime_nsec()),
        mtime: (meta.mtime(), meta.mtime_nsec()),
        ctime: (meta.ctime(), meta.ctime_nsec()),
    }
}

fn from_libc(st: &libc::stat) -> RawStat {
    RawStat {
        dev: st.st_dev as u64,
        ino: st.st_ino as u64,
        mode: st.st_mode as u32,
        nlink: st.st_nlink as u64,
        uid: st.st_uid,
        gid: st.st_gid,
        rdev: st.st_rdev as u64,
        size: st.st_size as u64,
        blksize: st.st_blksize as u64,
        blocks: st.st_blocks as u64,
        atime: (st.st_atime as i64, st.st_atime_nsec as i64),
        mtime: (st.st_mtime as i64, st.st_mtime_nsec as i64),
        ctime: (st.st_ctime as i64, st.st_ctime_nsec as i64),
    }
}

fn into_utf8(path: std::path::PathBuf) -> io::Result<String> {
    path.into_os_string()
        .into_string()
        .map_err(|raw| io::Error::new(io::ErrorKind::InvalidData, format!("path is not valid UTF-8: {raw:?}")))
}

fn utimens(path: &str, atime: SystemTime, mtime: SystemTime, flags: libc::c_int) -> io::Result<()> {
    let cpath = c_path(path)?;
    let times = [to_timespec(atime), to_timespec(mtime)];
    check(unsafe { libc::utimensat(libc::AT_FDCWD, cpath.as_ptr(), times.as_ptr(), flags) })
}

impl Syscalls for PosixSyscalls {
    fn stat(&self, path: &str) -> io::Result<RawStat> {
        fs::metadata(path).map(|meta| from_metadata(&meta))
    }

    fn lstat(&self, path: &str) -> io::Result<RawStat> {
        fs::symlink_metadata(path).map(|meta| from_metadata(&meta))
    }

    fn fstat(&self, fd: RawFd) -> io::Result<RawStat> {
        let mut st = unsafe { mem::zeroed::<libc::stat>() };
        check(unsafe { libc::fstat(fd, &mut st) })?;
        Ok(from_libc(&st))
    }

    fn readlink(&self, path: &str) -> io::Result<String> {
        fs::read_link(path).and_then(into_utf8)
    }

    fn realpath_native(&self, path: &str) -> io::Result<String> {
        fs::canonicalize(path).and_then(into_utf8)
    }

    fn chmod(&self, path: &str, mode: u32) -> io::Result<()> {
        fs::set_permissions(path, fs::Permissions::from_mode(mode))
    }

    fn fchmod(&self, fd: RawFd, mode: u32) -> io::Result<()> {
        check(unsafe { libc::fchmod(fd, mode as libc::mode_t) })
    }

    #[cfg(any(target_os = "macos", target_os = "freebsd"))]
    fn lchmod(&self, path: &str, mode: u32) -> io::Result<()> {
        let cpath = c_path(path)?;
        check(unsafe { libc::lchmod(cpath.as_ptr(), mode as libc::mode_t) })
    }

    #[cfg(not(any(target_os = "macos", target_os = "freebsd")))]
    fn lchmod(&self, _path: &str, _mode: u32) -> io::Result<()> {
        Err(io::Error::from_raw_os_error(libc::ENOSYS))
    }

    fn chown(&self, path: &str, owner: Option<u32>, group: Option<u32>) -> io::Result<()> {
        std::os::unix::fs::chown(path, owner, group)
    }

    fn fchown(&self, fd: RawFd, owner: Option<u32>, group: Option<u32>) -> io::Result<()> {
        let uid = owner.unwrap_or(UNCHANGED_ID);
        let gid = group.unwrap_or(UNCHANGED_ID);
        check(unsafe { libc::fchown(fd, uid, gid) })
    }

    fn lchown(&self, path: &str, owner: Option<u32>, group: Option<u32>) -> io::Result<()> {
        std::os::unix::fs::lchown(path, owner, group)
    }

    fn link(&self, old: &str, new: &str) -> io::Result<()> {
        fs::hard_link(old, new)
    }

    fn symlink(&self, old: &str, new: &str) -> io::Result<()> {
        std::os::unix::fs::symlink(old, new)
    }

    fn rename(&self, from: &str, to: &str) -> io::Result<()> {
        fs::rename(from, to)
    }

    fn unlink(&self, path: &str) -> io::Result<()> {
        fs::remove_file(path)
    }

    fn truncate(&self, path: &str, len: u64) -> io::Result<()> {
        let cpath = c_path(path)?;
        let len = to_off(len)?;
        check(unsafe { libc::truncate(cpath.as_ptr(), len) })
    }

    fn ftruncate(&self, fd: RawFd, len: u64) -> io::Result<()> {
        let len = to_off(len)?;
        check(unsafe { libc::ftruncate(fd, len) })
    }

    fn utimes(&self, path: &str, atime: SystemTime, mtime: SystemTime) -> io::Result<()> {
        utimens(path, atime, mtime, 0)
    }

    fn lutimes(&self, path: &str, atime: SystemTime, mtime: SystemTime) -> io::Result<()> {
        utimens(path, atime, mtime, libc::AT_SYMLINK_NOFOLLOW)
    }

    fn umask(&self, mask: u32) -> u32 {
        unsafe { libc::umask(mask as libc::mode_t) as u32 }
    }

    fn mkfifo(&self, path: &str, mode: u32) -> io::Result<()> {
        let cpath = c_path(path)?;
        check(unsafe { libc::mkfifo(cpath.as_ptr(), mode as libc::mode_t) })
    }

    fn current_dir(&self) -> io::Result<String> {
        env::current_dir().and_then(into_utf8)
    }

    fn home_dir(&self) -> Option<String> {
        home::home_dir().and_then(|dir| dir.into_os_string().into_string().ok())
    }

    fn effective_ids(&self) -> (u32, u32) {
        unsafe { (libc::geteuid(), libc::getegid()) }
    }

    fn supports_lchmod(&self) -> bool {
        HAS_LCHMOD
    }
}
