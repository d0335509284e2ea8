use itinerary_route::constructive::nearest_neighbor;
use itinerary_route::distance::{haversine_km, DistanceMatrix};
use itinerary_route::local_search::{default_max_passes, two_opt_improve};
use itinerary_route::models::{Coordinate, Stop};
use itinerary_route::optimize;
use proptest::prelude::*;

fn coordinate() -> impl Strategy<Value = Coordinate> {
    (-180.0..180.0f64, -85.0..85.0f64).prop_map(|(lng, lat)| Coordinate::new(lng, lat))
}

// Stops inside a regional bounding box, the usual shape of an itinerary.
fn stops(range: std::ops::Range<usize>) -> impl Strategy<Value = Vec<Stop>> {
    prop::collection::vec((-10.0..30.0f64, 35.0..60.0f64), range).prop_map(|points| {
        points
            .into_iter()
            .enumerate()
            .map(|(i, (lng, lat))| Stop::new(format!("s{i}"), format!("Stop {i}"), lng, lat))
            .collect()
    })
}

proptest! {
    #[test]
    fn distance_is_symmetric(a in coordinate(), b in coordinate()) {
        prop_assert!((haversine_km(a, b) - haversine_km(b, a)).abs() < 1e-6);
    }

    #[test]
    fn distance_to_self_is_zero(a in coordinate()) {
        prop_assert_eq!(haversine_km(a, a), 0.0);
    }

    #[test]
    fn optimized_order_is_anchored_permutation(stops in stops(2..30)) {
        let result = optimize(&stops).unwrap();

        let mut original = result.original_order.clone();
        let mut optimized = result.optimized_order.clone();
        prop_assert_eq!(optimized.first(), original.first());
        prop_assert_eq!(optimized.last(), original.last());

        original.sort();
        optimized.sort();
        prop_assert_eq!(original, optimized);
    }

    #[test]
    fn optimization_never_regresses(stops in stops(2..30)) {
        let result = optimize(&stops).unwrap();
        prop_assert!(result.optimized_distance <= result.original_distance);
        prop_assert!(result.report.optimized_km <= result.report.original_km);
        prop_assert!(result.report.saved_km >= 0);
        prop_assert!(result.report.saved_percent >= 0);
    }

    #[test]
    fn two_opt_is_idempotent(stops in stops(4..25)) {
        let dm = DistanceMatrix::from_stops(&stops);
        let n = stops.len();
        let start = nearest_neighbor(&(0..n).collect::<Vec<_>>(), &dm);
        let first = two_opt_improve(&start, &dm, default_max_passes(n));
        prop_assume!(first.converged);
        let second = two_opt_improve(&first.order, &dm, default_max_passes(n));
        prop_assert_eq!(second.order, first.order);
        prop_assert_eq!(second.moves, 0);
    }

    #[test]
    fn optimization_is_deterministic(stops in stops(2..20)) {
        let a = optimize(&stops).unwrap();
        let b = optimize(&stops).unwrap();
        prop_assert_eq!(a, b);
    }
}

#[test]
fn small_inputs_keep_caller_order() {
    let all = vec![
        Stop::new("a", "A", 0.0, 0.0),
        Stop::new("b", "B", 5.0, 5.0),
    ];
    let dm = DistanceMatrix::from_stops(&all);
    for order in [vec![], vec![0], vec![1, 0]] {
        assert_eq!(nearest_neighbor(&order, &dm), order);
        assert_eq!(two_opt_improve(&order, &dm, 4).order, order);
    }

    let result = optimize(&all).unwrap();
    assert_eq!(result.optimized_order, result.original_order);
}
