//! Prayer and mystery text, keyed the same way the sequence refers to it.

use crate::error::Result;
use crate::mystery::MysterySet;
use crate::prayer::{PrayerId, PrayerStep, PrayerStepKind};
use fnv::FnvHashMap;
use serde::Deserialize;

static ENGLISH_JSON: &str = include_str!("../content/en.json");

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct PrayerText {
    pub title: String,
    pub instructions: String,
    pub body: String,
    #[serde(default)]
    pub duration_ms: Option<u64>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct MysteryText {
    pub title: String,
    pub description: String,
    pub fruits: String,
    #[serde(default)]
    pub scripture: Option<String>,
    #[serde(default)]
    pub duration_ms: Option<u64>,
}

/// Resolved text for a single step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StepContent<'a> {
    Prayer(&'a PrayerText),
    Mystery(&'a MysteryText),
}

impl StepContent<'_> {
    pub fn title(&self) -> &str {
        match self {
            StepContent::Prayer(p) => &p.title,
            StepContent::Mystery(m) => &m.title,
        }
    }

    pub fn duration_ms(&self) -> Option<u64> {
        match self {
            StepContent::Prayer(p) => p.duration_ms,
            StepContent::Mystery(m) => m.duration_ms,
        }
    }
}

pub trait ContentResolver {
    fn prayer(&self, id: PrayerId) -> Option<&PrayerText>;
    fn mystery(&self, set: MysterySet, index: usize) -> Option<&MysteryText>;

    /// Announcements resolve against the set recorded in the step.
    fn resolve(&self, step: &PrayerStep) -> Option<StepContent<'_>> {
        match step.kind {
            PrayerStepKind::FixedPrayer { prayer } => self.prayer(prayer).map(StepContent::Prayer),
            PrayerStepKind::MysteryAnnouncement { set, mystery_index } => self
                .mystery(set, mystery_index)
                .map(StepContent::Mystery),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct ContentStore {
    pub language: String,
    prayers: FnvHashMap<PrayerId, PrayerText>,
    mysteries: FnvHashMap<MysterySet, Vec<MysteryText>>,
}

impl ContentStore {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The bundled English texts.
    pub fn english() -> Result<Self> {
        let store = Self::from_json(ENGLISH_JSON)?;
        log::debug!(
            "[content] loaded {} prayers for '{}'",
            store.prayers.len(),
            store.language
        );
        Ok(store)
    }

    pub fn mysteries_in(&self, set: MysterySet) -> &[MysteryText] {
        self.mysteries.get(&set).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl ContentResolver for ContentStore {
    fn prayer(&self, id: PrayerId) -> Option<&PrayerText> {
        self.prayers.get(&id)
    }

    fn mystery(&self, set: MysterySet, index: usize) -> Option<&MysteryText> {
        self.mysteries.get(&set)?.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_store_parses_and_misses_gracefully() {
        let store = ContentStore::from_json(
            r#"{
                "language": "test",
                "prayers": { "hail_mary": { "title": "HM", "instructions": "say it", "body": "..." } },
                "mysteries": { "joyful": [ { "title": "A", "description": "d", "fruits": "f" } ] }
            }"#,
        )
        .unwrap();
        assert_eq!(store.prayer(PrayerId::HailMary).unwrap().title, "HM");
        assert!(store.prayer(PrayerId::GloryBe).is_none());
        assert!(store.mystery(MysterySet::Joyful, 0).unwrap().scripture.is_none());
        assert!(store.mystery(MysterySet::Joyful, 1).is_none());
        assert!(store.mysteries_in(MysterySet::Luminous).is_empty());
    }

    #[test]
    fn malformed_json_is_a_content_error() {
        let err = ContentStore::from_json("{ not json").unwrap_err();
        assert!(matches!(err, crate::RosaryError::Content(_)));
    }
}
