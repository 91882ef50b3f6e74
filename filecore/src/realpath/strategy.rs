//! How `realpath` resolves symlinks.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Selects the resolution algorithm used by `realpath`.
///
/// # Examples
///
/// ```
/// use filecore::RealpathStrategy;
///
/// assert_eq!("native".parse::<RealpathStrategy>().unwrap(), RealpathStrategy::Native);
/// assert_eq!(RealpathStrategy::default(), RealpathStrategy::Walk);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RealpathStrategy {
    /// Component-by-component walk with cycle detection.
    #[default]
    Walk,
    /// The platform `realpath(3)`, falling back to the walk when absent.
    Native,
}

impl fmt::Display for RealpathStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Walk => write!(f, "walk"),
            Self::Native => write!(f, "native"),
        }
    }
}

impl FromStr for RealpathStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "walk" => Ok(Self::Walk),
            "native" => Ok(Self::Native),
            _ => Err(Error::invalid(format!(
                "unknown realpath strategy '{s}' (expected 'walk' or 'native')"
            ))),
        }
    }
}
