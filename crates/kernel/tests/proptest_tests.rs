//! Property-based tests for row partitioning invariants using the `proptest` crate.

use std::collections::BTreeSet;

use proptest::prelude::*;

use knit_kernel::rows::{build_rows, classify_faces, order_rows};
use knit_kernel::{FaceId, Pattern, PatternConfig, RowPipeline, unpack_faces};
use knit_tessellation::tessellate_sphere;
use rand::SeedableRng;
use rand::rngs::StdRng;

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

/// One triangle with a flat edge: two corners at `base_y`, one at `apex_y`.
#[derive(Debug, Clone)]
struct FlatEdgeFace {
    base_y: i8,
    apex_y: i8,
    apex_slot: usize,
    xz: [(f32, f32); 3],
}

fn arb_face() -> impl Strategy<Value = FlatEdgeFace> {
    (
        -3i8..=3,
        -3i8..=3,
        0usize..3,
        prop::array::uniform3((-10.0f32..10.0, -10.0f32..10.0)),
    )
        .prop_map(|(base_y, apex_y, apex_slot, xz)| FlatEdgeFace {
            base_y,
            apex_y,
            apex_slot,
            xz,
        })
}

fn arb_mesh() -> impl Strategy<Value = Vec<FlatEdgeFace>> {
    prop::collection::vec(arb_face(), 1..40)
}

fn arb_pattern() -> impl Strategy<Value = Pattern> {
    prop_oneof![Just(Pattern::Increment), Just(Pattern::Decrement)]
}

fn to_positions(faces: &[FlatEdgeFace]) -> Vec<f32> {
    let mut positions = Vec::with_capacity(faces.len() * 9);
    for face in faces {
        for (slot, &(x, z)) in face.xz.iter().enumerate() {
            let y = if slot == face.apex_slot { face.apex_y } else { face.base_y };
            positions.extend_from_slice(&[x, y as f32, z]);
        }
    }
    positions
}

/// Expected row keys, computed directly from the face description.
fn expected_keys(faces: &[FlatEdgeFace], pattern: Pattern) -> (BTreeSet<(i8, i8, i8)>, usize) {
    let triples: Vec<(i8, i8, i8)> = faces
        .iter()
        .map(|f| (f.base_y, f.base_y.min(f.apex_y), f.base_y.max(f.apex_y)))
        .collect();
    let model_min = triples.iter().map(|t| t.1).min().unwrap();
    let model_max = triples.iter().map(|t| t.2).max().unwrap();

    let kept: Vec<(i8, i8, i8)> = triples
        .into_iter()
        .filter(|&(base, min, max)| match pattern {
            Pattern::Increment => min < base || max == model_max,
            Pattern::Decrement => max > base || min == model_min,
        })
        .collect();
    let count = kept.len();
    (kept.into_iter().collect(), count)
}

// ---------------------------------------------------------------------------
// 1. Row count equals the number of distinct kept elevation triples
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn row_count_matches_distinct_keys(faces in arb_mesh(), pattern in arb_pattern()) {
        let positions = to_positions(&faces);
        let config = PatternConfig::default().with_pattern(pattern);
        let result = RowPipeline::new(config)
            .run_with_rng(&positions, &mut StdRng::seed_from_u64(0))
            .unwrap();

        let mesh = unpack_faces(&positions, 3).unwrap();
        let c = classify_faces(&mesh, pattern).unwrap();
        let rows = build_rows(&c);

        let (keys, kept) = expected_keys(&faces, pattern);
        prop_assert_eq!(rows.len(), keys.len());
        prop_assert_eq!(rows.face_count(), kept);
        prop_assert_eq!(result.rows.len(), keys.len());
        prop_assert_eq!(result.colors.palette.len(), keys.len());
    }
}

// ---------------------------------------------------------------------------
// 2. Rows are monotonic in max_y along the pattern direction
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn rows_monotonic_in_max_y(faces in arb_mesh(), pattern in arb_pattern()) {
        let positions = to_positions(&faces);
        let mesh = unpack_faces(&positions, 3).unwrap();
        let c = classify_faces(&mesh, pattern).unwrap();
        let rows = build_rows(&c);

        for pair in rows.rows().windows(2) {
            let (a, b) = (pair[0].key.max_y, pair[1].key.max_y);
            match pattern {
                Pattern::Increment => prop_assert!(a <= b, "{} > {}", a, b),
                Pattern::Decrement => prop_assert!(a >= b, "{} < {}", a, b),
            }
        }
    }
}

// ---------------------------------------------------------------------------
// 3. Angular ordering is a permutation of each row
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn angular_sort_is_permutation(faces in arb_mesh(), pattern in arb_pattern()) {
        let positions = to_positions(&faces);
        let mesh = unpack_faces(&positions, 3).unwrap();
        let c = classify_faces(&mesh, pattern).unwrap();
        let unsorted = build_rows(&c);
        let mut sorted = unsorted.clone();
        order_rows(&mut sorted, &c);

        prop_assert_eq!(unsorted.len(), sorted.len());
        for (before, after) in unsorted.iter().zip(sorted.iter()) {
            prop_assert_eq!(before.key, after.key);
            prop_assert_eq!(before.faces.len(), after.faces.len());
            let a: BTreeSet<FaceId> = before.faces.iter().copied().collect();
            let b: BTreeSet<FaceId> = after.faces.iter().copied().collect();
            prop_assert_eq!(a, b);
        }
    }
}

// ---------------------------------------------------------------------------
// 4. Sphere meshes: one row per latitude band, one opening, one closing
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn sphere_rows_and_poles(
        radius in 0.5f32..50.0,
        meridians in 3usize..16,
        parallels in 2usize..10,
        pattern in arb_pattern(),
        seed in any::<u64>(),
    ) {
        let positions = tessellate_sphere(radius, meridians, parallels).to_non_indexed();
        let config = PatternConfig::default().with_pattern(pattern);
        let result = RowPipeline::new(config)
            .run_with_rng(&positions, &mut StdRng::seed_from_u64(seed))
            .unwrap();

        prop_assert_eq!(result.rows.len(), parallels);
        prop_assert_eq!(result.rows.iter().filter(|r| r.is_opening).count(), 1);
        prop_assert_eq!(result.rows.iter().filter(|r| r.is_closing).count(), 1);
        prop_assert_eq!(result.rows.opening_index(), Some(0));
        prop_assert_eq!(result.rows.closing_index(), Some(parallels - 1));
        prop_assert_eq!(result.rows.face_count(), meridians * parallels);

        let schema = &result.schema;
        prop_assert_eq!(schema.shifts.len(), parallels);
        prop_assert_eq!(schema.shifts[0], Some(1.0));
        prop_assert_eq!(*schema.shifts.last().unwrap(), Some(0.0));
        prop_assert!(result.warnings.is_empty());
        prop_assert_eq!(&schema.rows.last().unwrap().base_lengths, &vec![0.0]);
        prop_assert_eq!(schema.cast_on_stitches, meridians);
    }
}

// ---------------------------------------------------------------------------
// 5. Colors: buffer sized to the mesh, every face painted as one unit
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn faces_colored_as_units(
        meridians in 3usize..12,
        parallels in 2usize..8,
        pattern in arb_pattern(),
        seed in any::<u64>(),
    ) {
        let positions = tessellate_sphere(1.0, meridians, parallels).to_non_indexed();
        let config = PatternConfig::default().with_pattern(pattern);
        let result = RowPipeline::new(config)
            .run_with_rng(&positions, &mut StdRng::seed_from_u64(seed))
            .unwrap();

        prop_assert_eq!(result.colors.buffer.len(), result.mesh.vertex_count() * 3);
        prop_assert_eq!(result.colors.buffer.len(), positions.len());
        for (_, face) in result.mesh.iter() {
            let [a, b, c] = face.offsets().map(|o| result.colors.color_at(o));
            prop_assert_eq!(a, b);
            prop_assert_eq!(b, c);
        }
    }
}
