//! Step types that make up a prayer sequence.

use crate::mystery::MysterySet;
use serde::{Deserialize, Serialize};

/// Fixed prayers recited during the rosary. Keys match the content store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrayerId {
    SignOfCross,
    ApostlesCreed,
    OurFather,
    HailMary,
    GloryBe,
    FatimaPrayer,
    HailHolyQueen,
    FinalPrayer,
}

impl PrayerId {
    /// Short name shown next to the prayer type icon.
    pub fn indicator_name(self) -> &'static str {
        match self {
            PrayerId::SignOfCross => "Sign of the Cross",
            PrayerId::ApostlesCreed => "Apostles' Creed",
            PrayerId::OurFather => "Our Father",
            PrayerId::HailMary => "Hail Mary",
            PrayerId::GloryBe => "Glory Be",
            PrayerId::FatimaPrayer => "Fatima Prayer",
            PrayerId::HailHolyQueen => "Hail, Holy Queen",
            PrayerId::FinalPrayer => "Closing Prayer",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrayerStepKind {
    FixedPrayer {
        prayer: PrayerId,
    },
    /// `set` is the mystery set the sequence was built with.
    MysteryAnnouncement {
        set: MysterySet,
        mystery_index: usize,
    },
}

/// One element of a sequence. Two equal steps are still distinct by position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PrayerStep {
    pub kind: PrayerStepKind,
    /// 0 for opening prayers, 1..=N for decades, `None` for closing prayers.
    pub decade: Option<u32>,
}

impl PrayerStep {
    pub fn prayer(prayer: PrayerId, decade: Option<u32>) -> Self {
        Self {
            kind: PrayerStepKind::FixedPrayer { prayer },
            decade,
        }
    }

    pub fn announcement(set: MysterySet, mystery_index: usize, decade: u32) -> Self {
        Self {
            kind: PrayerStepKind::MysteryAnnouncement { set, mystery_index },
            decade: Some(decade),
        }
    }

    pub fn prayer_id(&self) -> Option<PrayerId> {
        match self.kind {
            PrayerStepKind::FixedPrayer { prayer } => Some(prayer),
            PrayerStepKind::MysteryAnnouncement { .. } => None,
        }
    }

    pub fn is_announcement(&self) -> bool {
        matches!(self.kind, PrayerStepKind::MysteryAnnouncement { .. })
    }

    pub fn indicator_name(&self) -> &'static str {
        match self.kind {
            PrayerStepKind::FixedPrayer { prayer } => prayer.indicator_name(),
            PrayerStepKind::MysteryAnnouncement { .. } => "Mystery",
        }
    }

    /// Progress heading for the block this step belongs to.
    pub fn section_label(&self) -> String {
        match self.decade {
            Some(0) => "Opening Prayers".to_string(),
            Some(n) => format!("{} Decade", ordinal_word(n)),
            None => "Closing Prayers".to_string(),
        }
    }
}

fn ordinal_word(n: u32) -> String {
    const WORDS: [&str; 10] = [
        "First", "Second", "Third", "Fourth", "Fifth", "Sixth", "Seventh", "Eighth", "Ninth",
        "Tenth",
    ];
    match WORDS.get(n as usize - 1) {
        Some(w) => (*w).to_string(),
        None => {
            let suffix = match (n % 10, n % 100) {
                (_, 11..=13) => "th",
                (1, _) => "st",
                (2, _) => "nd",
                (3, _) => "rd",
                _ => "th",
            };
            format!("{n}{suffix}")
        }
    }
}

/// Position of the cursor within a sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Progress {
    pub index: usize,
    pub total: usize,
}

impl Progress {
    /// Share of the sequence reached, counting the current step as done.
    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        (self.index + 1) as f32 / self.total as f32
    }

    pub fn label(&self) -> String {
        format!("Prayer {} of {}", self.index + 1, self.total)
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == self.total
    }
}
