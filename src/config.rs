use crate::error::{PixelveilError, Result};

/// Shuffle mode options
/// Decided once at pipeline entry; the two variants select two separate,
/// symmetric transform paths (see `pipeline`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShuffleMode {
    #[default]
    Enabled,
    Disabled,
}

impl ShuffleMode {
    /// Map a CLI-style "disable" flag onto a mode
    pub fn from_flag(no_shuffle: bool) -> Self {
        if no_shuffle {
            Self::Disabled
        } else {
            Self::Enabled
        }
    }
}

impl std::str::FromStr for ShuffleMode {
    type Err = PixelveilError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "on" | "shuffle" | "enabled" => Ok(Self::Enabled),
            "off" | "none" | "disabled" => Ok(Self::Disabled),
            _ => Err(PixelveilError::UnsupportedMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_enabled() {
        assert_eq!(ShuffleMode::default(), ShuffleMode::Enabled);
    }

    #[test]
    fn test_from_flag() {
        assert_eq!(ShuffleMode::from_flag(false), ShuffleMode::Enabled);
        assert_eq!(ShuffleMode::from_flag(true), ShuffleMode::Disabled);
    }

    #[test]
    fn test_parse() {
        assert_eq!("on".parse::<ShuffleMode>().unwrap(), ShuffleMode::Enabled);
        assert_eq!("OFF".parse::<ShuffleMode>().unwrap(), ShuffleMode::Disabled);
        assert!("sideways".parse::<ShuffleMode>().is_err());
    }
}
