use quickcheck_macros::quickcheck;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use sort_visualizer::{
    bubble_sort, merge_sort, merge_sort_by_key, quick_sort, radix_sort, radix_sort_by_key,
};

const SEED: u64 = 12345;

fn is_sorted(values: &[i32]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

fn non_negative(values: &[i32]) -> Vec<i32> {
    values.iter().map(|v| v & i32::MAX).collect()
}

fn radix(values: &mut [i32]) {
    radix_sort(values).unwrap();
}

type Sorter = fn(&mut [i32]);

/// Every batch sort paired with its name. Callers feed radix non-negative input.
fn sorters() -> Vec<(&'static str, Sorter)> {
    vec![
        ("bubble", bubble_sort as Sorter),
        ("merge", merge_sort as Sorter),
        ("quick", quick_sort as Sorter),
        ("radix", radix as Sorter),
    ]
}

fn check_sorts(input: &[i32]) -> bool {
    sorters().into_iter().all(|(name, sort)| {
        let input = if name == "radix" {
            non_negative(input)
        } else {
            input.to_vec()
        };
        let mut expected = input.clone();
        expected.sort();
        let mut actual = input;
        sort(&mut actual);
        actual == expected
    })
}

#[quickcheck]
fn sorted_permutation_of_input(values: Vec<i32>) -> bool {
    check_sorts(&values)
}

#[quickcheck]
fn sorting_twice_changes_nothing(values: Vec<i32>) -> bool {
    sorters().into_iter().all(|(name, sort)| {
        let mut once = if name == "radix" {
            non_negative(&values)
        } else {
            values.clone()
        };
        sort(&mut once);
        let mut twice = once.clone();
        sort(&mut twice);
        once == twice && is_sorted(&once)
    })
}

#[quickcheck]
fn merge_sort_is_stable(keys: Vec<u8>) -> bool {
    let mut tagged: Vec<(u8, usize)> = keys.iter().copied().zip(0..).collect();
    merge_sort_by_key(&mut tagged, |t| t.0);
    tagged
        .windows(2)
        .all(|w| w[0].0 < w[1].0 || (w[0].0 == w[1].0 && w[0].1 < w[1].1))
}

#[quickcheck]
fn radix_sort_is_stable(keys: Vec<u16>) -> bool {
    let mut tagged: Vec<(u16, usize)> = keys.iter().copied().zip(0..).collect();
    radix_sort_by_key(&mut tagged, |t| t.0 as u32);
    tagged
        .windows(2)
        .all(|w| w[0].0 < w[1].0 || (w[0].0 == w[1].0 && w[0].1 < w[1].1))
}

#[test]
fn example_scenarios() {
    let mut values = vec![5, 3, 8, 3, 1];
    bubble_sort(&mut values);
    assert_eq!(values, vec![1, 3, 3, 5, 8]);

    let mut values = vec![5, 3, 8, 3, 1];
    merge_sort(&mut values);
    assert_eq!(values, vec![1, 3, 3, 5, 8]);

    let mut values = vec![170, 45, 75, 90, 802, 24, 2, 66];
    radix_sort(&mut values).unwrap();
    assert_eq!(values, vec![2, 24, 45, 66, 75, 90, 170, 802]);
}

#[test]
fn boundaries() {
    assert!(check_sorts(&[]));
    assert!(check_sorts(&[42]));
    assert!(check_sorts(&[7; 64]));
    assert!(check_sorts(&[i32::MIN, i32::MAX, 0, -1, 1]));
}

#[test]
fn seeded_random_arrays() {
    let mut rng = StdRng::seed_from_u64(SEED);
    for _ in 0..20 {
        let n = rng.gen_range(0..500);
        let values: Vec<i32> = (0..n).map(|_| rng.gen_range(0..=1000)).collect();
        assert!(check_sorts(&values), "failed on {:?}", values);
    }
}
