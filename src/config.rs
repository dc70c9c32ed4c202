//! Generator configuration.

use crate::pulse::MAX_BUTTONS;

use thiserror::Error;

/// Construction-time configuration of the generator.
#[derive(Debug, Clone)]
pub struct Config {
    /// Size of the button alphabet of the device under test.
    pub buttons: usize,
    /// Length of the exhaustively enumerated initial frontier. The frontier
    /// holds `(buttons + 1)^initial_len` sequences, so keep this small.
    pub initial_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            buttons: 8,
            initial_len: 2,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("button alphabet size must be in 1..={max}, got {0}", max = MAX_BUTTONS)]
    AlphabetSize(usize),
    #[error("initial enumeration length must be non-zero")]
    InitialLen,
}

impl Config {
    pub fn check(&self) -> Result<(), ConfigError> {
        if self.buttons == 0 || self.buttons > MAX_BUTTONS {
            return Err(ConfigError::AlphabetSize(self.buttons));
        }
        if self.initial_len == 0 {
            return Err(ConfigError::InitialLen);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_alphabet() {
        let mut config = Config::default();
        config.buttons = 0;
        assert_eq!(config.check(), Err(ConfigError::AlphabetSize(0)));
        config.buttons = MAX_BUTTONS + 1;
        assert_eq!(
            config.check(),
            Err(ConfigError::AlphabetSize(MAX_BUTTONS + 1))
        );
        config.buttons = MAX_BUTTONS;
        assert_eq!(config.check(), Ok(()));
    }

    #[test]
    fn rejects_zero_initial_len() {
        let config = Config {
            buttons: 2,
            initial_len: 0,
        };
        assert_eq!(config.check(), Err(ConfigError::InitialLen));
    }
}
