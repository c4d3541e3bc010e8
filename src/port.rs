//! TCP port type for server settings.

use std::fmt;
use std::str::FromStr;

use crate::constants::{MAX_PORT, MIN_PORT};
use crate::error::PortError;

/// A TCP port number in the range 1-65535.
///
/// # Examples
///
/// ```
/// use mail_address::Port;
///
/// let port = Port::new(993).unwrap();
/// assert_eq!(port.get(), 993);
///
/// assert!(Port::new(0).is_err());
/// assert!(Port::new(65536).is_err());
/// assert_eq!("587".parse::<Port>().unwrap().get(), 587);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Port(u16);

impl Port {
    /// Creates a port from a number.
    ///
    /// # Errors
    ///
    /// Returns `PortError::OutOfRange` if `value` is not within 1-65535.
    pub fn new(value: u32) -> Result<Self, PortError> {
        match u16::try_from(value) {
            Ok(port) if (MIN_PORT..=MAX_PORT).contains(&port) => Ok(Self(port)),
            _ => Err(PortError::OutOfRange {
                value: u64::from(value),
            }),
        }
    }

    /// Returns the port number.
    #[must_use]
    pub const fn get(self) -> u16 {
        self.0
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Port {
    type Err = PortError;

    /// Parses a decimal port number as entered by a user.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PortError::NotANumber {
                value: s.to_string(),
            });
        }

        // Only overflow can fail here
        let value = s.parse::<u64>().unwrap_or(u64::MAX);
        u32::try_from(value)
            .map_err(|_| PortError::OutOfRange { value })
            .and_then(Self::new)
    }
}

impl TryFrom<u32> for Port {
    type Error = PortError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Port> for u16 {
    fn from(port: Port) -> Self {
        port.0
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Port {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u16(self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Port {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = u32::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}
