//! Container format value object

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::domain::error::ValidationError;

/// All symbolic container formats
pub const ALL_OUTPUT_FORMATS: &[OutputFormat] = &[
    OutputFormat::Default,
    OutputFormat::ThreeGp,
    OutputFormat::Mpeg4,
    OutputFormat::AmrNb,
    OutputFormat::AmrWb,
    OutputFormat::AacAdts,
    OutputFormat::Mpeg2Ts,
    OutputFormat::Webm,
];

/// Platform-neutral container format of the recorded file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    #[default]
    Default,
    ThreeGp,
    Mpeg4,
    AmrNb,
    AmrWb,
    AacAdts,
    Mpeg2Ts,
    Webm,
}

impl OutputFormat {
    /// Payload name of this format
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::ThreeGp => "3gp",
            Self::Mpeg4 => "mpeg4",
            Self::AmrNb => "amrnb",
            Self::AmrWb => "amrwb",
            Self::AacAdts => "aac_adts",
            Self::Mpeg2Ts => "mpeg2ts",
            Self::Webm => "webm",
        }
    }

    /// Upper-case symbolic name (`THREE_GP`, `MPEG2TS`, ...)
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Default => "DEFAULT",
            Self::ThreeGp => "THREE_GP",
            Self::Mpeg4 => "MPEG_4",
            Self::AmrNb => "AMR_NB",
            Self::AmrWb => "AMR_WB",
            Self::AacAdts => "AAC_ADTS",
            Self::Mpeg2Ts => "MPEG2TS",
            Self::Webm => "WEBM",
        }
    }

    pub(crate) fn expected() -> String {
        ALL_OUTPUT_FORMATS
            .iter()
            .map(|f| f.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for OutputFormat {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ALL_OUTPUT_FORMATS
            .iter()
            .copied()
            .find(|f| {
                f.as_str().eq_ignore_ascii_case(needle) || f.symbol().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| ValidationError::UnknownVariant {
                field: "outputFormat",
                value: s.to_string(),
                expected: Self::expected(),
            })
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for OutputFormat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
