//! Command to print the metadata record of a path.

use crate::error::CliError;
use crate::utils::{format_time, print_json, GlobalOptions, Session};
use clap::Args;
use filecore::config::OutputFormat;
use filecore::FileStat;
use serde::Serialize;

/// Print the metadata record of a path.
#[derive(Args)]
pub struct StatCommand {
    /// Path to inspect
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,

    /// Describe a final symlink itself instead of its target
    #[arg(long)]
    pub lstat: bool,
}

/// Serializable view of a [`FileStat`].
#[derive(Debug, Serialize)]
pub struct StatReport {
    pub path: String,
    pub ftype: &'static str,
    pub mode: String,
    pub permissions: String,
    pub dev: u64,
    pub ino: u64,
    pub nlink: u64,
    pub uid: u32,
    pub gid: u32,
    pub rdev: u64,
    pub size: u64,
    pub blksize: u64,
    pub blocks: u64,
    pub atime: String,
    pub mtime: String,
    pub ctime: String,
}

impl StatReport {
    pub fn new(path: &str, stat: &FileStat) -> Self {
        Self {
            path: path.to_string(),
            ftype: stat.kind.ftype(),
            mode: format!("{:o}", stat.mode),
            permissions: format!("{:04o}", stat.permissions()),
            dev: stat.dev,
            ino: stat.ino,
            nlink: stat.nlink,
            uid: stat.uid,
            gid: stat.gid,
            rdev: stat.rdev,
            size: stat.size,
            blksize: stat.blksize,
            blocks: stat.blocks,
            atime: format_time(stat.atime),
            mtime: format_time(stat.mtime),
            ctime: format_time(stat.ctime),
        }
    }

    fn print_human(&self) {
        println!("  Path: {}", self.path);
        println!("  Type: {}", self.ftype);
        println!("  Mode: {} ({})", self.mode, self.permissions);
        println!("  Size: {}  Blocks: {}  IO Block: {}", self.size, self.blocks, self.blksize);
        println!(
            "Device: {}  Inode: {}  Links: {}  Rdev: {}",
            self.dev, self.ino, self.nlink, self.rdev
        );
        println!("   Uid: {}  Gid: {}", self.uid, self.gid);
        println!("Access: {}", self.atime);
        println!("Modify: {}", self.mtime);
        println!("Change: {}", self.ctime);
    }
}

impl StatCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let session = Session::open(global)?;
        let query = session.fs.query();
        let stat = if self.lstat {
            query.lstat(&self.path)?
        } else {
            query.stat(&self.path)?
        };

        let report = StatReport::new(&self.path, &stat);
        match session.format {
            OutputFormat::Human => report.print_human(),
            OutputFormat::Json => print_json(&report)?,
        }
        Ok(())
    }
}
