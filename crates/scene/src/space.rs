//! Coordinate spaces for transform operations.

use std::fmt;
use std::str::FromStr;

use playground_core::{Error, Result};

/// Frame of reference in which a translation or rotation is expressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Space {
    /// Relative to the transform's own right/up/forward axes.
    Local,
    /// The fixed global frame.
    World,
}

impl TryFrom<u32> for Space {
    type Error = Error;

    /// Decode a raw space value, `0` for local and `1` for world.
    fn try_from(value: u32) -> Result<Self> {
        match value {
            0 => Ok(Space::Local),
            1 => Ok(Space::World),
            other => Err(Error::InvalidArgument(format!("unsupported space value {other}"))),
        }
    }
}

impl FromStr for Space {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("local") {
            Ok(Space::Local)
        } else if s.eq_ignore_ascii_case("world") {
            Ok(Space::World)
        } else {
            Err(Error::InvalidArgument(format!("unsupported space '{s}'")))
        }
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Space::Local => f.write_str("local"),
            Space::World => f.write_str("world"),
        }
    }
}
