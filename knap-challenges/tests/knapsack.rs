use knap_challenges::knapsack::{Challenge, Instance, Selection, Track, MAX_EXHAUSTIVE_ITEMS};
use knap_challenges::KnapsackError;
use proptest::prelude::*;

fn classic() -> Challenge {
    Challenge::new(vec![2, 3, 4, 5], vec![3, 4, 5, 6], 5).unwrap()
}

#[test]
fn test_new_validates_inputs() {
    assert_eq!(
        Challenge::new(vec![1, 2, 3], vec![1, 2], 5),
        Err(KnapsackError::LengthMismatch {
            weights: 3,
            values: 2
        })
    );
    assert_eq!(
        Challenge::new(vec![1, 2, -3], vec![1, 2, 3], 5),
        Err(KnapsackError::NegativeWeight {
            index: 2,
            weight: -3
        })
    );
    assert_eq!(
        Challenge::new(vec![1], vec![-1], 5),
        Err(KnapsackError::NegativeValue {
            index: 0,
            value: -1
        })
    );
    assert_eq!(
        Challenge::new(vec![1, 1], vec![i64::MAX, i64::MAX], 5).map(|c| c.total_value()),
        Ok(2 * i64::MAX as u64)
    );
    assert_eq!(
        Challenge::new(vec![1, 1, 1], vec![i64::MAX, i64::MAX, 2], 5),
        Err(KnapsackError::ValueOverflow)
    );
}

#[test]
fn test_trivial_instances() {
    assert!(Challenge::new(vec![], vec![], 10).unwrap().is_trivial());
    assert!(Challenge::new(vec![1], vec![1], 0).unwrap().is_trivial());

    let negative = Challenge::new(vec![1], vec![1], -5).unwrap();
    assert_eq!(negative.capacity(), 0);
    assert!(negative.is_trivial());

    assert!(!classic().is_trivial());
}

#[test]
fn test_trivial_inputs_are_never_rejected() {
    for capacity in [10, 0, -3] {
        let challenge = Challenge::new(vec![], vec![3], capacity).unwrap();
        assert!(challenge.is_trivial());
        assert_eq!(challenge.num_items(), 0);

        let challenge = Challenge::new(vec![1, 2], vec![], capacity).unwrap();
        assert!(challenge.is_trivial());
        assert_eq!(challenge.num_items(), 0);
    }
    assert_eq!(
        Challenge::new(vec![1, 2], vec![3], 0).map(|c| c.num_items()),
        Ok(0)
    );
    assert_eq!(
        Challenge::new(vec![-1], vec![1], -2).map(|c| c.capacity()),
        Ok(0)
    );

    // Valid items are kept even when nothing fits.
    let zero_capacity = Challenge::new(vec![1, 2], vec![3, 4], 0).unwrap();
    assert_eq!(zero_capacity.num_items(), 2);
    assert!(zero_capacity.is_trivial());
}

#[test]
fn test_evaluate_selection() {
    let challenge = classic();
    assert_eq!(
        challenge.evaluate_selection(&Selection { items: vec![0, 1] }),
        Ok(7)
    );
    assert_eq!(challenge.evaluate_selection(&Selection::new()), Ok(0));
    assert_eq!(
        challenge.evaluate_selection(&Selection { items: vec![0, 0] }),
        Err(KnapsackError::DuplicateItem(0))
    );
    assert_eq!(
        challenge.evaluate_selection(&Selection { items: vec![4] }),
        Err(KnapsackError::ItemOutOfBounds {
            index: 4,
            num_items: 4
        })
    );
    assert_eq!(
        challenge.evaluate_selection(&Selection { items: vec![1, 2] }),
        Err(KnapsackError::OverCapacity {
            total_weight: 7,
            capacity: 5
        })
    );
}

#[test]
fn test_exhaustive_baseline() {
    let challenge = Challenge::new(vec![1, 3, 4], vec![1, 4, 5], 4).unwrap();
    let baseline = challenge.compute_exhaustive_baseline().unwrap();
    assert_eq!(challenge.evaluate_selection(&baseline), Ok(5));

    let challenge = Challenge::new(vec![10, 20, 30], vec![60, 100, 120], 50).unwrap();
    let baseline = challenge.compute_exhaustive_baseline().unwrap();
    assert_eq!(baseline.items, vec![1, 2]);

    let zero_capacity = Challenge::new(vec![0], vec![9], 0).unwrap();
    assert_eq!(zero_capacity.compute_exhaustive_baseline(), Ok(Selection::new()));

    let n = MAX_EXHAUSTIVE_ITEMS as i64 + 1;
    let too_big = Challenge::new(vec![1; n as usize], vec![1; n as usize], n).unwrap();
    assert_eq!(
        too_big.compute_exhaustive_baseline(),
        Err(KnapsackError::TooManyItems {
            num_items: n as usize,
            max: MAX_EXHAUSTIVE_ITEMS
        })
    );
}

#[test]
fn test_json_round_trip_validates() {
    let challenge: Challenge =
        serde_json::from_str(r#"{"weights":[1,2],"values":[3,4],"capacity":3}"#).unwrap();
    assert_eq!(challenge.num_items(), 2);
    assert_eq!(
        serde_json::to_value(&challenge).unwrap(),
        serde_json::json!({"weights": [1, 2], "values": [3, 4], "capacity": 3})
    );

    let err = serde_json::from_str::<Challenge>(r#"{"weights":[1,-2],"values":[3,4],"capacity":3}"#)
        .unwrap_err();
    assert!(err.to_string().contains("negative weight"));

    let instance: Instance = challenge.into();
    assert_eq!(instance.capacity, 3);
}

#[test]
fn test_track_string_form() {
    let track: Track = "n_items=10,budget=25".parse().unwrap();
    assert_eq!(
        track,
        Track {
            n_items: 10,
            budget: 25,
            ..Track::default()
        }
    );
    assert_eq!(track.to_string().parse::<Track>().unwrap(), track);

    assert!(matches!(
        "n_items=ten".parse::<Track>(),
        Err(KnapsackError::InvalidTrack(_))
    ));
    assert!(matches!(
        "colour=red".parse::<Track>(),
        Err(KnapsackError::InvalidTrack(_))
    ));
    assert!(matches!(
        "budget=101".parse::<Track>(),
        Err(KnapsackError::InvalidTrack(_))
    ));
    assert!(matches!(
        "max_weight=0".parse::<Track>(),
        Err(KnapsackError::InvalidTrack(_))
    ));
}

#[test]
fn test_generate_instance() {
    let track = Track {
        n_items: 40,
        max_weight: 20,
        max_value: 50,
        budget: 30,
    };
    let a = Challenge::generate_instance(&[7; 32], &track).unwrap();
    let b = Challenge::generate_instance(&[7; 32], &track).unwrap();
    let c = Challenge::generate_instance(&[8; 32], &track).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);

    assert_eq!(a.num_items(), 40);
    assert!(a.weights().iter().all(|&w| (1..=20).contains(&w)));
    assert!(a.values().iter().all(|&v| v <= 50));
    assert_eq!(a.capacity(), a.total_weight() * 30 / 100);
}

proptest! {
    #[test]
    fn prop_baseline_selection_is_feasible(
        items in prop::collection::vec((0i64..=20, 0i64..=50), 0..=10),
        capacity in 0i64..=60,
    ) {
        let (weights, values): (Vec<i64>, Vec<i64>) = items.into_iter().unzip();
        let challenge = Challenge::new(weights, values, capacity).unwrap();
        let baseline = challenge.compute_exhaustive_baseline().unwrap();
        let value = challenge.evaluate_selection(&baseline).unwrap();
        prop_assert!(value <= challenge.total_value());
    }
}
