#[cfg(test)]
mod pivot_strategies {
    use std::env;
    use rand::prelude::SliceRandom;
    use rand::rngs::StdRng;
    use rand::{thread_rng, Rng, SeedableRng};
    use lazy_static::lazy_static;

    use quicksort_pivots::{duplicate, generate_random_list, PartitionScheme, QuickSorter, ALL_STRATEGIES};

    lazy_static! {
        static ref SEED: u64 = initialize_seed();
        static ref NUM_RUNS: usize = get_num_runs();
        static ref MAX_ELEMENTS: usize = get_max_elements();
    }

    fn verify_sorted(arr: &[i32]) {
        for i in 1..arr.len() {
            assert!(arr[i - 1] <= arr[i], "Array not sorted! {} (i={}) > {} (i={}). Seed: {}", arr[i - 1], i - 1, arr[i], i, *SEED);
        }
    }

    fn verify_permutation(original: &[i32], sorted: &[i32]) {
        let mut expected = original.to_vec();
        expected.sort_unstable();
        assert_eq!(expected, sorted, "Not a permutation of the input. Seed: {}", *SEED);
    }

    #[test]
    fn empty_and_single() {
        for strategy in ALL_STRATEGIES {
            let mut empty: Vec<i32> = vec![];
            QuickSorter::seeded(strategy, *SEED).sort(&mut empty);
            assert!(empty.is_empty());

            let mut single = vec![-7];
            QuickSorter::seeded(strategy, *SEED).sort(&mut single);
            assert_eq!(single, vec![-7]);
        }
    }

    #[test]
    fn small_shuffled() { // 8192 shuffled elements
        let mut arr: Vec<i32> = (1..=8192).collect();
        arr.shuffle(&mut StdRng::seed_from_u64(*SEED));
        for strategy in ALL_STRATEGIES {
            let mut copy = duplicate(&arr);
            QuickSorter::seeded(strategy, *SEED).sort(&mut copy);
            verify_sorted(&copy);
            assert_eq!(copy, (1..=8192).collect::<Vec<i32>>());
        }
    }

    #[test]
    fn already_sorted_is_unchanged() {
        let mut rng = StdRng::seed_from_u64(*SEED);
        let mut arr = generate_random_list(1500, &mut rng).unwrap();
        arr.sort_unstable();
        for strategy in ALL_STRATEGIES {
            let mut copy = duplicate(&arr);
            QuickSorter::seeded(strategy, *SEED).sort(&mut copy);
            assert_eq!(copy, arr, "{strategy} changed a sorted sequence");
        }
    }

    #[test]
    fn many_duplicates() {
        let mut rng = StdRng::seed_from_u64(*SEED);
        let arr: Vec<i32> = (0..3000).map(|_| rng.gen_range(-8..8)).collect();
        for scheme in [PartitionScheme::Relocate, PartitionScheme::Lomuto] {
            for strategy in ALL_STRATEGIES {
                let mut copy = duplicate(&arr);
                QuickSorter::seeded(strategy, *SEED).with_scheme(scheme).sort(&mut copy);
                verify_permutation(&arr, &copy);
            }
        }
    }

    #[test]
    fn strategies_agree_on_1000_elements() {
        let mut rng = StdRng::seed_from_u64(*SEED);
        let arr = generate_random_list(1000, &mut rng).unwrap();

        let results: Vec<Vec<i32>> = ALL_STRATEGIES
            .iter()
            .map(|&strategy| {
                let mut copy = duplicate(&arr);
                QuickSorter::seeded(strategy, rng.gen()).sort(&mut copy);
                copy
            })
            .collect();

        verify_sorted(&results[0]);
        verify_permutation(&arr, &results[0]);
        for pair in results.windows(2) {
            assert_eq!(pair[0], pair[1]);
        }
    }

    #[test]
    fn random_sizes() {
        let mut rng = StdRng::seed_from_u64(*SEED);
        for i in 0..*NUM_RUNS {
            let n = rng.gen_range(1..*MAX_ELEMENTS);
            println!("i={i}, n={n}");
            let mut list_rng = StdRng::seed_from_u64(*SEED + i as u64);
            let arr = generate_random_list(n as i64, &mut list_rng).unwrap();
            for strategy in ALL_STRATEGIES {
                let mut copy = duplicate(&arr);
                QuickSorter::seeded(strategy, *SEED + i as u64).sort(&mut copy);
                verify_sorted(&copy);
                verify_permutation(&arr, &copy);
            }
        }
    }

    fn initialize_seed() -> u64 {
        // Check for environment variables to control seed randomization
        let randomize_seed = env::var("RANDOMIZE_SEED")
            .map(|val| val == "true")
            .unwrap_or(false);

        if randomize_seed {
            println!("Randomizing seed");
            let seed: u64 = thread_rng().gen_range(0..u64::MAX / 2);
            println!("Seed: {}", seed);
            seed
        } else {
            let seed = env::var("SEED")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(12345); // Default seed
            println!("Seed: {}", seed);
            seed
        }
    }

    fn get_num_runs() -> usize {
        env::var("NUM_RUNS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(4)
    }

    fn get_max_elements() -> usize {
        env::var("MAX_ELEMENTS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(4096)
    }
}
