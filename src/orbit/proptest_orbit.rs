//! Property-based tests for orbit derivation and advancement using proptest.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;
use crate::test_utils::fixtures;

/// Optional approach distances in AU; `None` models a record without approach data.
fn distances() -> impl Strategy<Value = Vec<Option<f64>>> {
    prop::collection::vec(prop::option::weighted(0.8, 0.0f64..1.0), 0..60)
}

fn bodies_for(distances: &[Option<f64>]) -> Vec<NearEarthObject> {
    distances
        .iter()
        .enumerate()
        .map(|(i, d)| match d {
            Some(d) => fixtures::neo_at_distance(&i.to_string(), *d),
            None => fixtures::neo_without_approach(&i.to_string()),
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// One orbit per body, none inside the minimum radius.
    #[test]
    fn prop_one_orbit_per_body(distances in distances(), seed in any::<u64>()) {
        let bodies = bodies_for(&distances);
        let config = OrbitConfig::default();
        let orbits = derive_orbits(&bodies, &config, &mut StdRng::seed_from_u64(seed));

        prop_assert_eq!(orbits.len(), bodies.len());
        for orbit in &orbits {
            prop_assert!(orbit.radius >= config.min_radius);
            prop_assert!(orbit.speed > 0.0);
        }
    }

    /// Sorted by radius, neighbouring rings are at least `min_gap` apart.
    #[test]
    fn prop_min_gap_between_rings(distances in distances(), seed in any::<u64>()) {
        let bodies = bodies_for(&distances);
        let config = OrbitConfig::default();
        let orbits = derive_orbits(&bodies, &config, &mut StdRng::seed_from_u64(seed));

        let mut radii: Vec<f32> = orbits.iter().map(|o| o.radius).collect();
        radii.sort_by(f32::total_cmp);
        for pair in radii.windows(2) {
            prop_assert!(
                pair[1] - pair[0] >= config.min_gap - 1e-4,
                "rings {} and {} closer than {}", pair[0], pair[1], config.min_gap
            );
        }
    }

    /// Spacing only ever pushes a ring outward.
    #[test]
    fn prop_spacing_is_monotonic(radii in prop::collection::vec(7.0f32..28.0, 0..60)) {
        let mut spaced = radii.clone();
        space_radii(&mut spaced, 0.55);
        for (before, after) in radii.iter().zip(&spaced) {
            prop_assert!(after >= before);
        }

        let once = spaced.clone();
        space_radii(&mut spaced, 0.55);
        prop_assert_eq!(spaced, once);
    }

    /// Reversing the input reverses the radii: each orbit stays with its body.
    #[test]
    fn prop_orbits_follow_their_body(raw in prop::collection::vec(0.13f64..0.5, 1..40)) {
        let config = OrbitConfig::default();
        let mut seen = std::collections::HashSet::new();
        let distances: Vec<f64> = raw
            .into_iter()
            .filter(|d| seen.insert(config.radius_for_distance(*d).to_bits()))
            .collect();

        let forward = bodies_for(&distances.iter().copied().map(Some).collect::<Vec<_>>());
        let mut backward = forward.clone();
        backward.reverse();

        let a = derive_orbits(&forward, &config, &mut fixtures::rng());
        let b = derive_orbits(&backward, &config, &mut fixtures::rng());

        for (i, orbit) in a.iter().enumerate() {
            prop_assert_eq!(orbit.radius, b[b.len() - 1 - i].radius);
        }
    }

    /// A zero-length tick changes neither angles nor positions.
    #[test]
    fn prop_zero_dt_is_identity(distances in distances(), seed in any::<u64>()) {
        let bodies = bodies_for(&distances);
        let mut model = OrbitModel::from_bodies(
            &bodies,
            &OrbitConfig::default(),
            &mut StdRng::seed_from_u64(seed),
        );
        let before_orbits = model.orbits().to_vec();
        let before_positions = model.positions().to_vec();

        model.advance(0.0);

        prop_assert_eq!(model.orbits(), &before_orbits[..]);
        prop_assert_eq!(model.positions(), &before_positions[..]);
    }

    /// Two ticks of `t` land where one tick of `2t` does.
    #[test]
    fn prop_angle_increments_add_up(
        distances in distances(),
        seed in any::<u64>(),
        dt in 0.0f32..0.5,
    ) {
        let bodies = bodies_for(&distances);
        let mut twice = OrbitModel::from_bodies(
            &bodies,
            &OrbitConfig::default(),
            &mut StdRng::seed_from_u64(seed),
        );
        let mut once = twice.clone();

        twice.advance(dt);
        twice.advance(dt);
        once.advance(2.0 * dt);

        for (a, b) in twice.positions().iter().zip(once.positions()) {
            prop_assert!((*a - *b).length() < 1e-3, "{a} vs {b}");
        }
    }

    /// Advancing never changes the orbit's distance from the origin.
    #[test]
    fn prop_advance_keeps_radius(
        radius in 7.0f32..40.0,
        inclination in -0.5f32..0.5,
        node in 0.0f32..6.28,
        dt in 0.0f32..100.0,
    ) {
        let mut orbit = OrbitParameters {
            inclination,
            ascending_node: node,
            ..OrbitParameters::circular(radius, 0.3)
        };
        let position = orbit.step(dt);
        prop_assert!((position.length() - radius).abs() < 1e-3 * radius);
    }
}
