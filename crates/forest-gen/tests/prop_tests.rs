//! Property-based tests for generation invariants using the `proptest` crate.

use proptest::prelude::*;

use forest_gen::{build_segment, place, trunk_steps};
use rand::rngs::StdRng;
use rand::SeedableRng;
use scene_kernel::SceneGraph;

/// Arbitrary valid placement range (min <= max).
fn arb_range() -> impl Strategy<Value = (f32, f32)> {
    (-100.0f32..100.0, 0.0f32..200.0).prop_map(|(min, span)| (min, min + span))
}

proptest! {
    #[test]
    fn placement_always_lands_inside_the_range(
        seed in any::<u64>(),
        (min, max) in arb_range(),
    ) {
        let mut scene = SceneGraph::new();
        let tree = scene.create_group("trunk0");
        let mut rng = StdRng::seed_from_u64(seed);
        place(&mut scene, &mut rng, tree, min, max).unwrap();
        let t = scene.translation(tree).unwrap();
        prop_assert!(min <= t.x && t.x <= max, "x={} outside [{}, {}]", t.x, min, max);
        prop_assert!(min <= t.z && t.z <= max, "z={} outside [{}, {}]", t.z, min, max);
        prop_assert_eq!(t.y, 0.0);
    }
}

proptest! {
    #[test]
    fn trunk_step_draw_is_always_in_bounds(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let steps = trunk_steps(&mut rng);
        prop_assert!((8..=12).contains(&steps));
    }
}

proptest! {
    // Segments are expensive; keep the case count modest.
    #![proptest_config(ProptestConfig::with_cases(32))]
    #[test]
    fn segment_pivot_list_tracks_step_count(
        seed in any::<u64>(),
        steps in 1u32..=12,
    ) {
        let mut scene = SceneGraph::new();
        let mut rng = StdRng::seed_from_u64(seed);
        let seg = build_segment(&mut scene, &mut rng, steps).unwrap();
        prop_assert_eq!(seg.pivots.len(), steps as usize);
        // Every pivot is a finite point.
        for p in &seg.pivots {
            prop_assert!(p.is_finite());
        }
    }
}
