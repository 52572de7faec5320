//! Rotation detector tests.

use bookclub_analytics::attribution::build_pick_sequence;
use bookclub_analytics::rotation::{analyze_rotation, segment_rotations, PatternTier, RotationBounds};
use bookclub_core::types::group::{BookRecord, GroupRoster, Member};
use bookclub_core::{BookId, MemberId};

fn roster(n: u64) -> GroupRoster {
    GroupRoster::new(
        (1..=n)
            .map(|i| Member { id: MemberId(i), username: format!("member_{i}") })
            .collect(),
        vec![],
    )
}

fn books(pickers: &[u64]) -> Vec<BookRecord> {
    pickers
        .iter()
        .enumerate()
        .map(|(i, &p)| BookRecord {
            id: BookId(i as u64 + 1),
            display_order: i as i64,
            picked_by: Some(MemberId(p)),
            is_collective_pick: false,
        })
        .collect()
}

fn ids(raw: &[u64]) -> Vec<MemberId> {
    raw.iter().copied().map(MemberId).collect()
}

#[test]
fn max_size_closes_rotation_for_empty_roster() {
    // No roster: min 3, max 2, so every rotation closes at two picks.
    let bounds = RotationBounds::for_member_count(0);
    let rotations = segment_rotations(&ids(&[1, 2, 3, 4, 5]), bounds);
    let lens: Vec<usize> = rotations.iter().map(|r| r.len()).collect();
    // The lone trailing pick folds into the second rotation.
    assert_eq!(lens, vec![2, 3]);
}

#[test]
fn coverage_is_zero_without_roster() {
    let seq = build_pick_sequence(&books(&[1, 2, 3, 1]));
    let analysis = analyze_rotation(&seq, &GroupRoster::default(), &[]);
    assert!(analysis.rotation_count > 0);
    assert!(analysis.rotations.iter().all(|r| r.coverage == 0.0));
    assert!(analysis.participation_stats.is_empty());
}

#[test]
fn partial_coverage_reports_non_participants() {
    // 6 members, only 1-3 ever pick.
    let seq = build_pick_sequence(&books(&[1, 2, 3, 1, 2, 3, 1, 2, 3]));
    let analysis = analyze_rotation(&seq, &roster(6), &[]);

    assert_eq!(analysis.bounds, RotationBounds { min_size: 3, max_size: 10 });
    assert_eq!(analysis.non_participating, ids(&[4, 5, 6]));
    for r in &analysis.rotations {
        assert!((r.coverage - 0.5).abs() < 1e-12);
    }
}

#[test]
fn interrupting_picker_still_forms_pattern() {
    // Four members; 1 keeps cutting in: [1,2,1] [3,1,4] [1,2,1] [3,1,4].
    let seq = build_pick_sequence(&books(&[1, 2, 1, 3, 1, 4, 1, 2, 1, 3, 1, 4]));
    let analysis = analyze_rotation(&seq, &roster(4), &[]);

    assert_eq!(analysis.rotation_count, 4);
    assert!((analysis.avg_balance - 5.0 / 6.0).abs() < 1e-9);
    assert!(analysis.has_pattern);
    assert_eq!(analysis.tier, PatternTier::FairlyStructured);
    assert_eq!(analysis.rotations.iter().filter(|r| r.is_clean).count(), 2);
}

#[test]
fn four_pick_rotations_have_no_triplets() {
    // 10 members: min 4, max 12. Three pickers hit the 70% mark after three
    // picks, but rotations only close once they reach four.
    let seq = build_pick_sequence(&books(&[1, 2, 3, 1, 2, 3, 1, 2]));
    let analysis = analyze_rotation(&seq, &roster(10), &[]);
    assert_eq!(analysis.rotation_count, 2);
    assert!(analysis.rotations.iter().all(|r| r.sub_patterns.triplets.is_empty()));
}

#[test]
fn analysis_serializes_with_stable_field_names() {
    let seq = build_pick_sequence(&books(&[1, 2, 3, 1, 2, 3]));
    let analysis = analyze_rotation(&seq, &roster(3), &[]);
    let json = serde_json::to_value(&analysis).unwrap();
    for field in ["has_pattern", "rotations", "rotation_count", "avg_balance", "avg_coverage", "non_participating", "message"] {
        assert!(json.get(field).is_some(), "missing {field}");
    }
    assert_eq!(json["tier"], "regular");
}
