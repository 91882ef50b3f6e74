//! Flag bits accepted by [`fnmatch`](super::fnmatch).

use std::fmt;

use bitflags::bitflags;

use crate::error::{Error, Result};

bitflags! {
    /// Matching options. Flags compose by union and never imply each other.
    ///
    /// Bits outside the named set are kept as given and ignored by the
    /// matcher.
    ///
    /// # Examples
    ///
    /// ```
    /// use filecore::GlobFlags;
    ///
    /// let flags = GlobFlags::PATHNAME | GlobFlags::DOTMATCH;
    /// assert_eq!(flags.bits(), 0x06);
    /// assert!(GlobFlags::SYSCASE.is_empty());
    /// ```
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct GlobFlags: u32 {
        /// Backslash is an ordinary character.
        const NOESCAPE = 0x01;
        /// Wildcards do not match `/`, and `**/` spans whole segments.
        const PATHNAME = 0x02;
        /// Wildcards may match a leading `.`.
        const DOTMATCH = 0x04;
        /// Case-insensitive matching.
        const CASEFOLD = 0x08;
        /// Enables `{a,b}` brace groups.
        const EXTGLOB = 0x10;
        /// Accepted for compatibility; has no effect on matching.
        const GLOB_NOSORT = 0x40;
        /// Case sensitivity of the host filesystem (none on POSIX).
        const SYSCASE = 0;

        const _ = !0;
    }
}

impl GlobFlags {
    pub(crate) fn escapes(self) -> bool {
        !self.contains(Self::NOESCAPE)
    }

    pub(crate) fn pathname(self) -> bool {
        self.contains(Self::PATHNAME)
    }

    pub(crate) fn dotmatch(self) -> bool {
        self.contains(Self::DOTMATCH)
    }

    pub(crate) fn casefold(self) -> bool {
        self.contains(Self::CASEFOLD)
    }

    /// Parses one flag name, with or without the `FNM_` prefix.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for an unknown name.
    ///
    /// # Examples
    ///
    /// ```
    /// use filecore::GlobFlags;
    ///
    /// assert_eq!(GlobFlags::parse_name("FNM_PATHNAME").unwrap(), GlobFlags::PATHNAME);
    /// assert_eq!(GlobFlags::parse_name("extglob").unwrap(), GlobFlags::EXTGLOB);
    /// assert!(GlobFlags::parse_name("FNM_BOGUS").is_err());
    /// ```
    pub fn parse_name(name: &str) -> Result<Self> {
        let upper = name.trim().to_ascii_uppercase();
        let bare = upper.strip_prefix("FNM_").unwrap_or(&upper);
        Self::from_name(bare).ok_or_else(|| Error::invalid(format!("unknown glob flag '{name}'")))
    }

    /// Parses a list of names separated by `,`, `|`, or whitespace.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for the first unknown name.
    ///
    /// # Examples
    ///
    /// ```
    /// use filecore::GlobFlags;
    ///
    /// let flags = GlobFlags::parse_list("pathname|dotmatch").unwrap();
    /// assert_eq!(flags, GlobFlags::PATHNAME | GlobFlags::DOTMATCH);
    /// assert!(GlobFlags::parse_list("").unwrap().is_empty());
    /// ```
    pub fn parse_list(list: &str) -> Result<Self> {
        list.split(|c: char| c == ',' || c == '|' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .try_fold(Self::empty(), |acc, part| Ok(acc | Self::parse_name(part)?))
    }

    /// Names of the set flags, in bit order, without the `FNM_` prefix.
    #[must_use]
    pub fn names(self) -> Vec<&'static str> {
        self.iter_names().map(|(name, _)| name).collect()
    }
}

impl fmt::Display for GlobFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("0");
        }
        let names = self.names();
        if names.is_empty() {
            return write!(f, "{:#x}", self.bits());
        }
        f.write_str(&names.join("|"))
    }
}
