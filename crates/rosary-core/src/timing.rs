//! How long each step stays on screen before auto-advance.

use crate::constants::*;
use crate::content::{ContentResolver, ContentStore};
use crate::prayer::PrayerStep;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Supplies the auto-advance delay for a step. The session treats the result as opaque.
pub trait StepTiming {
    fn duration_for(&self, step: &PrayerStep) -> Duration;
}

impl<F> StepTiming for F
where
    F: Fn(&PrayerStep) -> Duration,
{
    fn duration_for(&self, step: &PrayerStep) -> Duration {
        self(step)
    }
}

/// Extra time given to mystery announcements for meditation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeditationLength {
    None,
    #[default]
    Short,
    Medium,
    Long,
}

impl MeditationLength {
    pub fn bonus(self) -> Duration {
        Duration::from_millis(match self {
            MeditationLength::None => MEDITATION_NONE_MS,
            MeditationLength::Short => MEDITATION_SHORT_MS,
            MeditationLength::Medium => MEDITATION_MEDIUM_MS,
            MeditationLength::Long => MEDITATION_LONG_MS,
        })
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Some(MeditationLength::None),
            "short" => Some(MeditationLength::Short),
            "medium" => Some(MeditationLength::Medium),
            "long" => Some(MeditationLength::Long),
            _ => None,
        }
    }
}

/// Durations from the content store, falling back to fixed defaults.
#[derive(Clone, Debug)]
pub struct ContentTiming {
    content: Option<Arc<ContentStore>>,
    meditation: MeditationLength,
    time_scale: f32,
}

impl ContentTiming {
    pub fn new(content: Arc<ContentStore>, meditation: MeditationLength) -> Self {
        Self {
            content: Some(content),
            meditation,
            time_scale: 1.0,
        }
    }

    /// Defaults only: 5 s per prayer, 15 s per mystery plus meditation.
    pub fn fallback(meditation: MeditationLength) -> Self {
        Self {
            content: None,
            meditation,
            time_scale: 1.0,
        }
    }

    pub fn meditation(&self) -> MeditationLength {
        self.meditation
    }

    pub fn set_meditation(&mut self, meditation: MeditationLength) {
        self.meditation = meditation;
    }

    /// Divides every duration by `scale`. Values below [`MIN_TIME_SCALE`] or non-finite are
    /// ignored.
    pub fn with_time_scale(mut self, scale: f32) -> Self {
        if scale.is_finite() && scale >= MIN_TIME_SCALE {
            self.time_scale = scale;
        } else {
            log::warn!("[timing] ignoring time scale {scale}");
        }
        self
    }
}

impl StepTiming for ContentTiming {
    fn duration_for(&self, step: &PrayerStep) -> Duration {
        let authored = self
            .content
            .as_deref()
            .and_then(|c| c.resolve(step))
            .and_then(|c| c.duration_ms());
        let base = match (authored, step.is_announcement()) {
            (Some(ms), _) => Duration::from_millis(ms),
            (None, false) => Duration::from_millis(DEFAULT_PRAYER_DURATION_MS),
            (None, true) => Duration::from_millis(DEFAULT_MYSTERY_DURATION_MS),
        };
        let total = if step.is_announcement() {
            base.saturating_add(self.meditation.bonus())
        } else {
            base
        };
        let longest = Duration::from_millis(MAX_STEP_DURATION_MS);
        if self.time_scale == 1.0 {
            return total.min(longest);
        }
        Duration::try_from_secs_f64(total.as_secs_f64() / f64::from(self.time_scale))
            .map_or(longest, |scaled| scaled.min(longest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mystery::MysterySet;
    use crate::prayer::PrayerId;

    #[test]
    fn fallback_durations() {
        let t = ContentTiming::fallback(MeditationLength::None);
        let prayer = PrayerStep::prayer(PrayerId::HailMary, Some(1));
        let mystery = PrayerStep::announcement(MysterySet::Joyful, 0, 1);
        assert_eq!(t.duration_for(&prayer), Duration::from_millis(5_000));
        assert_eq!(t.duration_for(&mystery), Duration::from_millis(15_000));
    }

    #[test]
    fn meditation_bonus_only_for_announcements() {
        let t = ContentTiming::fallback(MeditationLength::Long);
        let prayer = PrayerStep::prayer(PrayerId::GloryBe, Some(2));
        let mystery = PrayerStep::announcement(MysterySet::Sorrowful, 1, 2);
        assert_eq!(t.duration_for(&prayer), Duration::from_millis(5_000));
        assert_eq!(t.duration_for(&mystery), Duration::from_millis(30_000));
    }

    #[test]
    fn time_scale_shortens_and_rejects_nonsense() {
        let t = ContentTiming::fallback(MeditationLength::None).with_time_scale(10.0);
        let prayer = PrayerStep::prayer(PrayerId::OurFather, Some(0));
        assert_eq!(t.duration_for(&prayer), Duration::from_millis(500));
        let t = ContentTiming::fallback(MeditationLength::None).with_time_scale(0.0);
        assert_eq!(t.duration_for(&prayer), Duration::from_millis(5_000));
    }

    #[test]
    fn tiny_time_scale_is_ignored() {
        let prayer = PrayerStep::prayer(PrayerId::OurFather, Some(0));
        let t = ContentTiming::fallback(MeditationLength::Long).with_time_scale(1e-30);
        assert_eq!(t.duration_for(&prayer), Duration::from_millis(5_000));
        let t = ContentTiming::fallback(MeditationLength::None).with_time_scale(MIN_TIME_SCALE);
        let slowest = t.duration_for(&prayer);
        assert!(slowest > Duration::from_secs(499) && slowest < Duration::from_secs(501));
    }

    #[test]
    fn durations_are_capped() {
        let mystery = PrayerStep::announcement(MysterySet::Glorious, 0, 1);
        let t = ContentTiming::fallback(MeditationLength::Long).with_time_scale(0.25);
        // (15 s + 15 s) / 0.25
        assert_eq!(t.duration_for(&mystery), Duration::from_secs(120));
        let json = format!(
            r#"{{
                "language": "test",
                "prayers": {{ "glory_be": {{ "title": "GB", "instructions": "", "body": "", "duration_ms": {} }} }},
                "mysteries": {{}}
            }}"#,
            u64::MAX
        );
        let store = Arc::new(ContentStore::from_json(&json).unwrap());
        let t = ContentTiming::new(store, MeditationLength::None);
        let glory = PrayerStep::prayer(PrayerId::GloryBe, Some(1));
        assert_eq!(
            t.duration_for(&glory),
            Duration::from_millis(MAX_STEP_DURATION_MS)
        );
    }

    #[test]
    fn closures_are_timings() {
        let fixed = |_: &PrayerStep| Duration::from_millis(42);
        let step = PrayerStep::prayer(PrayerId::SignOfCross, Some(0));
        assert_eq!(fixed.duration_for(&step), Duration::from_millis(42));
    }

    #[test]
    fn meditation_parse() {
        assert_eq!(MeditationLength::parse("Medium"), Some(MeditationLength::Medium));
        assert_eq!(MeditationLength::parse("forever"), None);
    }
}
