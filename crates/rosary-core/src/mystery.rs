use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four themed groups of five mysteries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MysterySet {
    #[default]
    Joyful,
    Sorrowful,
    Glorious,
    Luminous,
}

impl MysterySet {
    pub const ALL: [MysterySet; 4] = [
        MysterySet::Joyful,
        MysterySet::Sorrowful,
        MysterySet::Glorious,
        MysterySet::Luminous,
    ];

    pub fn id(self) -> &'static str {
        match self {
            MysterySet::Joyful => "joyful",
            MysterySet::Sorrowful => "sorrowful",
            MysterySet::Glorious => "glorious",
            MysterySet::Luminous => "luminous",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            MysterySet::Joyful => "Joyful Mysteries",
            MysterySet::Sorrowful => "Sorrowful Mysteries",
            MysterySet::Glorious => "Glorious Mysteries",
            MysterySet::Luminous => "Luminous Mysteries",
        }
    }
}

impl fmt::Display for MysterySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMysterySet(pub String);

impl fmt::Display for UnknownMysterySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown mystery set `{}`", self.0)
    }
}

impl std::error::Error for UnknownMysterySet {}

impl FromStr for MysterySet {
    type Err = UnknownMysterySet;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MysterySet::ALL
            .into_iter()
            .find(|set| set.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownMysterySet(s.to_string()))
    }
}
