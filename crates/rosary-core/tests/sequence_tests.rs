// Integration tests for sequence construction.

use rosary_core::*;

fn canonical(set: MysterySet) -> Sequence {
    build_sequence(set, &RosaryStructure::canonical()).expect("canonical structure builds")
}

fn prayer_at(seq: &Sequence, i: usize) -> Option<PrayerId> {
    seq.get(i).and_then(|s| s.prayer_id())
}

#[test]
fn canonical_sequence_has_80_steps() {
    let seq = canonical(MysterySet::Joyful);
    assert_eq!(seq.len(), 80);
    assert_eq!(seq.len(), RosaryStructure::canonical().step_count().unwrap());
}

#[test]
fn canonical_landmarks() {
    let seq = canonical(MysterySet::Sorrowful);
    assert_eq!(prayer_at(&seq, 0), Some(PrayerId::SignOfCross));
    assert_eq!(prayer_at(&seq, 1), Some(PrayerId::ApostlesCreed));
    assert_eq!(prayer_at(&seq, 2), Some(PrayerId::OurFather));
    for i in 3..6 {
        assert_eq!(prayer_at(&seq, i), Some(PrayerId::HailMary), "step {i}");
    }
    assert_eq!(prayer_at(&seq, 6), Some(PrayerId::GloryBe));
    assert_eq!(
        seq.get(7).map(|s| s.kind),
        Some(PrayerStepKind::MysteryAnnouncement {
            set: MysterySet::Sorrowful,
            mystery_index: 0
        })
    );
    assert_eq!(prayer_at(&seq, 8), Some(PrayerId::OurFather));
    for i in 9..19 {
        assert_eq!(prayer_at(&seq, i), Some(PrayerId::HailMary), "step {i}");
    }
    assert_eq!(prayer_at(&seq, 19), Some(PrayerId::GloryBe));
    assert_eq!(prayer_at(&seq, 20), Some(PrayerId::FatimaPrayer));
    assert_eq!(prayer_at(&seq, 77), Some(PrayerId::HailHolyQueen));
    assert_eq!(prayer_at(&seq, 78), Some(PrayerId::FinalPrayer));
    assert_eq!(prayer_at(&seq, 79), Some(PrayerId::SignOfCross));
    assert!(seq.get(80).is_none());
}

#[test]
fn each_decade_is_announced_in_order() {
    let seq = canonical(MysterySet::Glorious);
    let announced: Vec<(usize, usize)> = seq
        .iter()
        .enumerate()
        .filter_map(|(i, s)| match s.kind {
            PrayerStepKind::MysteryAnnouncement { mystery_index, .. } => Some((i, mystery_index)),
            _ => None,
        })
        .collect();
    assert_eq!(
        announced,
        vec![(7, 0), (21, 1), (35, 2), (49, 3), (63, 4)]
    );
}

#[test]
fn decade_numbers_label_blocks() {
    let seq = canonical(MysterySet::Joyful);
    assert!(seq.steps()[..7].iter().all(|s| s.decade == Some(0)));
    assert!(seq.steps()[7..21].iter().all(|s| s.decade == Some(1)));
    assert!(seq.steps()[63..77].iter().all(|s| s.decade == Some(5)));
    assert!(seq.steps()[77..].iter().all(|s| s.decade.is_none()));
    assert_eq!(seq.get(30).unwrap().section_label(), "Second Decade");
}

#[test]
fn hail_mary_counts_follow_structure() {
    let s = RosaryStructure::new(2, 4, 1);
    let seq = build_sequence(MysterySet::Luminous, &s).unwrap();
    assert_eq!(seq.len(), s.step_count().unwrap());
    let hail_marys = seq
        .iter()
        .filter(|st| st.prayer_id() == Some(PrayerId::HailMary))
        .count();
    assert_eq!(hail_marys, 1 + 2 * 4);
}

#[test]
fn empty_structure_keeps_fixed_prayers() {
    let seq = build_sequence(MysterySet::Joyful, &RosaryStructure::new(0, 0, 0)).unwrap();
    let ids: Vec<_> = seq.iter().filter_map(|s| s.prayer_id()).collect();
    assert_eq!(
        ids,
        vec![
            PrayerId::SignOfCross,
            PrayerId::ApostlesCreed,
            PrayerId::OurFather,
            PrayerId::GloryBe,
            PrayerId::HailHolyQueen,
            PrayerId::FinalPrayer,
            PrayerId::SignOfCross,
        ]
    );
}

#[test]
fn building_twice_gives_equal_sequences() {
    let a = canonical(MysterySet::Luminous);
    let b = canonical(MysterySet::Luminous);
    assert_eq!(a, b);
    assert_ne!(a, canonical(MysterySet::Joyful));
}

#[test]
fn negative_structure_is_rejected() {
    for s in [
        RosaryStructure::new(-1, 10, 3),
        RosaryStructure::new(5, -1, 3),
        RosaryStructure::new(5, 10, -1),
    ] {
        let err = build_sequence(MysterySet::Joyful, &s).unwrap_err();
        assert!(matches!(err, RosaryError::InvalidStructure { .. }), "{s:?}");
    }
}
