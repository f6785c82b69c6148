// Integration tests for the step-to-bead focus mapping.

use rosary_core::*;

fn canonical_plan() -> RosaryPlan {
    build_plan(
        MysterySet::Joyful,
        &RosaryStructure::canonical(),
        &BeadLayout::default(),
    )
    .unwrap()
}

#[test]
fn focus_map_is_index_aligned_for_many_structures() {
    let layout = BeadLayout::default();
    for decades in 0..7 {
        for per_decade in 0..12 {
            for opening in 0..4 {
                let s = RosaryStructure::new(decades, per_decade, opening);
                let seq = build_sequence(MysterySet::Joyful, &s).unwrap();
                let map = build_focus_map(&s, &layout).unwrap();
                assert_eq!(seq.len(), map.len(), "{s:?}");
            }
        }
    }
}

#[test]
fn announcement_and_our_father_share_the_large_bead() {
    let plan = canonical_plan();
    let map = plan.focus_map();
    assert_eq!(map.get(7), Some(FocusTarget::Bead(6)));
    assert_eq!(map.get(7), map.get(8));
}

#[test]
fn glory_be_and_fatima_stay_on_last_hail_mary() {
    let plan = canonical_plan();
    let map = plan.focus_map();
    let last_hail_mary = map.get(18);
    assert_eq!(last_hail_mary, Some(FocusTarget::Bead(16)));
    assert_eq!(map.get(19), last_hail_mary);
    assert_eq!(map.get(20), last_hail_mary);
}

#[test]
fn hail_marys_walk_consecutive_beads() {
    let plan = canonical_plan();
    let map = plan.focus_map();
    for (k, i) in (9..19).enumerate() {
        assert_eq!(map.get(i), Some(FocusTarget::Bead(7 + k)), "step {i}");
    }
    // second decade starts on the bead after the first decade's last Hail Mary
    assert_eq!(map.get(21), Some(FocusTarget::Bead(17)));
    assert_eq!(map.get(22), Some(FocusTarget::Bead(17)));
    assert_eq!(map.get(23), Some(FocusTarget::Bead(18)));
}

#[test]
fn opening_and_closing_targets() {
    let plan = canonical_plan();
    let map = plan.focus_map();
    assert_eq!(map.get(0), Some(FocusTarget::Overview));
    assert_eq!(map.get(1), Some(FocusTarget::Bead(0)));
    assert_eq!(map.get(2), Some(FocusTarget::Bead(1)));
    assert_eq!(map.get(3), Some(FocusTarget::Bead(2)));
    assert_eq!(map.get(5), Some(FocusTarget::Bead(4)));
    assert_eq!(map.get(6), Some(FocusTarget::Bead(5)));
    for i in 77..80 {
        assert_eq!(map.get(i), Some(FocusTarget::Overview), "step {i}");
    }
}

#[test]
fn every_bead_target_fits_the_layout_collection() {
    let s = RosaryStructure::canonical();
    let layout = BeadLayout::default();
    let count = layout.bead_count(&s).unwrap();
    let map = build_focus_map(&s, &layout).unwrap();
    let max = map.targets().iter().filter_map(|t| t.bead()).max().unwrap();
    assert_eq!(max, count - 1);
}

#[test]
fn gap_between_decades_shifts_following_decades() {
    let layout = BeadLayout {
        beads_between_decades: 1,
        ..BeadLayout::default()
    };
    let map = build_focus_map(&RosaryStructure::canonical(), &layout).unwrap();
    assert_eq!(map.get(7), Some(FocusTarget::Bead(6)));
    // first decade's Hail Marys end on 16, bead 17 is skipped
    assert_eq!(map.get(21), Some(FocusTarget::Bead(18)));
    assert_eq!(
        layout.bead_count(&RosaryStructure::canonical()).unwrap(),
        6 + 5 * 12 - 1
    );
}

#[test]
fn custom_stem_offsets_are_copied_verbatim() {
    let layout = BeadLayout {
        crucifix: 40,
        pendant_our_father: 41,
        pendant_first_hail_mary: 42,
        pendant_glory_be: 45,
        first_decade_bead: 0,
        beads_between_decades: 0,
    };
    let map = build_focus_map(&RosaryStructure::canonical(), &layout).unwrap();
    assert_eq!(map.get(1), Some(FocusTarget::Bead(40)));
    assert_eq!(map.get(4), Some(FocusTarget::Bead(43)));
    assert_eq!(map.get(6), Some(FocusTarget::Bead(45)));
    assert_eq!(map.get(7), Some(FocusTarget::Bead(0)));
}

#[test]
fn packed_layout_tracks_opening_hail_marys() {
    let s = RosaryStructure::new(1, 2, 5);
    let layout = BeadLayout::packed_for(&s).unwrap();
    let plan = build_plan(MysterySet::Joyful, &s, &layout).unwrap();
    // sign, creed, OF, 5 HM, GB, then the decade announcement
    assert_eq!(plan.focus_map().get(8), Some(FocusTarget::Bead(7)));
    assert_eq!(plan.focus_map().get(9), Some(FocusTarget::Bead(8)));
}
