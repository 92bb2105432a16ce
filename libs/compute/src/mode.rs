use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::ComputeError;

/// The transformations the compute service knows how to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    TranslateChinese,
    CorrectEnglish,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::TranslateChinese => "translate-zh",
            Mode::CorrectEnglish => "correct-en",
        }
    }

    /// Endpoint serving this mode, relative to the service base url.
    pub fn path(&self) -> &'static str {
        match self {
            Mode::TranslateChinese => "/translate/chinese",
            Mode::CorrectEnglish => "/correct/english",
        }
    }
}

impl FromStr for Mode {
    type Err = ComputeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "translate-zh" => Ok(Mode::TranslateChinese),
            "correct-en" => Ok(Mode::CorrectEnglish),
            other => Err(ComputeError::UnsupportedMode(other.to_string())),
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
