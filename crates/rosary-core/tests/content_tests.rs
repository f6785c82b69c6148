// Tests for the bundled English content and content-driven timing.

use rosary_core::*;
use std::sync::Arc;
use std::time::Duration;

const ALL_PRAYERS: [PrayerId; 8] = [
    PrayerId::SignOfCross,
    PrayerId::ApostlesCreed,
    PrayerId::OurFather,
    PrayerId::HailMary,
    PrayerId::GloryBe,
    PrayerId::FatimaPrayer,
    PrayerId::HailHolyQueen,
    PrayerId::FinalPrayer,
];

#[test]
fn english_content_covers_every_prayer_and_mystery() {
    let store = ContentStore::english().unwrap();
    assert_eq!(store.language, "en");
    for id in ALL_PRAYERS {
        let text = store.prayer(id).unwrap_or_else(|| panic!("missing {id:?}"));
        assert!(!text.title.is_empty());
        assert!(!text.body.is_empty());
    }
    for set in MysterySet::ALL {
        let mysteries = store.mysteries_in(set);
        assert_eq!(mysteries.len(), 5, "{set}");
        assert!(mysteries.iter().all(|m| !m.title.is_empty()));
    }
}

#[test]
fn every_canonical_step_resolves() {
    let store = ContentStore::english().unwrap();
    for set in MysterySet::ALL {
        let seq = build_sequence(set, &RosaryStructure::canonical()).unwrap();
        for (i, step) in seq.iter().enumerate() {
            assert!(store.resolve(step).is_some(), "{set} step {i}");
        }
    }
}

#[test]
fn announcements_resolve_against_their_own_set() {
    let store = ContentStore::english().unwrap();
    let step = PrayerStep::announcement(MysterySet::Sorrowful, 2, 3);
    let expected = &store.mysteries_in(MysterySet::Sorrowful)[2].title;
    assert_eq!(store.resolve(&step).unwrap().title(), expected);
}

#[test]
fn english_durations_come_from_content() {
    let store = Arc::new(ContentStore::english().unwrap());
    let creed_ms = store.prayer(PrayerId::ApostlesCreed).unwrap().duration_ms.unwrap();
    let mystery_ms = store.mystery(MysterySet::Joyful, 0).unwrap().duration_ms.unwrap();

    let timing = ContentTiming::new(Arc::clone(&store), MeditationLength::Medium);
    let creed = PrayerStep::prayer(PrayerId::ApostlesCreed, Some(0));
    let announce = PrayerStep::announcement(MysterySet::Joyful, 0, 1);
    assert_eq!(timing.duration_for(&creed), Duration::from_millis(creed_ms));
    assert_eq!(
        timing.duration_for(&announce),
        Duration::from_millis(mystery_ms + 10_000)
    );
}

#[test]
fn decades_beyond_the_set_fall_back_to_default_timing() {
    let store = Arc::new(ContentStore::english().unwrap());
    let timing = ContentTiming::new(store, MeditationLength::None);
    let sixth = PrayerStep::announcement(MysterySet::Joyful, 5, 6);
    assert_eq!(timing.duration_for(&sixth), Duration::from_millis(15_000));
}
