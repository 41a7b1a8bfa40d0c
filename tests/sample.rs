use beacon_draw::{Error, ErrorKind, Seed, StreamGenerator, UniqueSampler, derive_seed, sample};

fn zero_entropy() -> String {
    "00".repeat(32)
}

#[test]
fn sample_matches_golden_set() {
    let seed = derive_seed(&zero_entropy(), "649").unwrap();

    assert_eq!(sample(&seed, 6, 1, 49).unwrap(), vec![14, 20, 24, 27, 31, 41]);
}

#[test]
fn sample_is_sorted_unique_and_in_range() {
    for k in 0u8..50 {
        let numbers = sample(&Seed::from([k; 32]), 10, 100, 140).unwrap();

        assert_eq!(numbers.len(), 10);
        assert!(numbers.windows(2).all(|w| w[0] < w[1]), "{numbers:?}");
        assert!(numbers.iter().all(|n| (100..=140).contains(n)));
    }
}

#[test]
fn full_range_returns_every_value() {
    let numbers = sample(&Seed::from([5u8; 32]), 20, 11, 30).unwrap();

    assert_eq!(numbers, (11..=30).collect::<Vec<_>>());
}

#[test]
fn zero_count_returns_empty_set() {
    assert!(sample(&Seed::from([5u8; 32]), 0, 1, 49).unwrap().is_empty());
}

#[test]
fn count_beyond_range_is_a_range_error() {
    let err = sample(&Seed::from([0u8; 32]), 10, 1, 5).unwrap_err();

    assert!(matches!(err, Error::RangeTooSmall { count: 10, available: 5 }));
    assert_eq!(err.kind(), ErrorKind::Range);
}

#[test]
fn inverted_bounds_are_rejected() {
    let err = sample(&Seed::from([0u8; 32]), 1, 10, 9).unwrap_err();

    assert!(matches!(err, Error::InvalidBounds { min: 10, max: 9 }));
    assert_eq!(err.kind(), ErrorKind::Range);
}

#[test]
fn upper_end_of_u32_is_reachable() {
    let numbers = sample(&Seed::from([1u8; 32]), 3, u32::MAX - 2, u32::MAX).unwrap();

    assert_eq!(numbers, vec![u32::MAX - 2, u32::MAX - 1, u32::MAX]);
}

#[test]
fn sampler_with_generator_matches_free_function() {
    let seed = Seed::from([0x42u8; 32]);
    let mut rng = StreamGenerator::new(&seed);

    assert_eq!(
        UniqueSampler::default().sample(&mut rng, 7, 1, 50).unwrap(),
        sample(&seed, 7, 1, 50).unwrap()
    );
}

#[test]
fn first_position_is_roughly_uniform() {
    let mut counts = [0u32; 4];

    for k in 0u32..4000 {
        let mut bytes = [0u8; 32];
        bytes[..4].copy_from_slice(&k.to_le_bytes());

        let mut rng = StreamGenerator::new(&Seed::from(bytes));
        let mut pool = [1u32, 2, 3, 4];
        for i in (1..pool.len()).rev() {
            let j = (rng.next_f64() * (i + 1) as f64).floor() as usize;
            pool.swap(i, j);
        }
        counts[(pool[0] - 1) as usize] += 1;
    }

    assert_eq!(counts.iter().sum::<u32>(), 4000);
    assert!(counts.iter().all(|&c| (900..1100).contains(&c)), "{counts:?}");
}

#[test]
fn single_draws_cover_the_range() {
    let mut seen = [false; 10];

    for k in 0u8..=255 {
        let numbers = sample(&Seed::from([k; 32]), 1, 0, 9).unwrap();
        seen[numbers[0] as usize] = true;
    }

    assert!(seen.iter().all(|&s| s));
}
