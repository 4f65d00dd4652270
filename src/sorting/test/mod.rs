//! Tests for the sort routines.

use super::code::SortFn;
use super::{Algorithm, Order};

/// Check that `result` is a sorted permutation of `input` under `order`.
pub fn check_sorted_permutation(input: &[i64], result: &[i64], order: Order) -> Result<(), String> {
    if input.len() != result.len() {
        return Err(format!(
            "length changed: {} -> {}",
            input.len(),
            result.len()
        ));
    }

    let mut a = input.to_vec();
    let mut b = result.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    if a != b {
        return Err("result is not a permutation of the input".to_string());
    }

    let monotonic = result.windows(2).all(|w| match order {
        Order::Ascending => w[0] <= w[1],
        Order::Descending => w[0] >= w[1],
    });
    if !monotonic {
        return Err(format!("result is not {} ordered: {:?}", order, result));
    }

    Ok(())
}

/// Run every algorithm over `inputs` in both orders
pub fn verify_all(inputs: &[Vec<i64>]) -> Result<(), String> {
    for algorithm in Algorithm::ALL {
        let sort: SortFn = algorithm.function();

        for input in inputs {
            for order in [Order::Ascending, Order::Descending] {
                let before = input.clone();
                let result = sort(input, order);

                if *input != before {
                    return Err(format!("{} mutated its input", algorithm));
                }
                check_sorted_permutation(input, &result, order)
                    .map_err(|e| format!("{} ({}): {}", algorithm, order, e))?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorting::code::*;
    use crate::sorting::precedes;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn fixtures() -> Vec<(&'static str, Vec<i64>)> {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        vec![
            ("empty", vec![]),
            ("single", vec![10]),
            ("small_unsorted", vec![5, 2, 8, 1, 9, 3]),
            ("medium_unsorted", vec![42, 11, 7, 99, 101, 15, 20, 77, 33, 6]),
            ("already_sorted", vec![1, 2, 3, 4, 5]),
            ("reverse_sorted", vec![5, 4, 3, 2, 1]),
            ("all_duplicates", vec![2, 2, 2, 2]),
            ("with_duplicates", vec![5, 2, 8, 2, 5, 1, 1, 8]),
            ("negatives", vec![-5, -10, 0, 5, -2]),
            ("extremes", vec![i64::MAX, i64::MIN, 0, i64::MIN, i64::MAX]),
            (
                "large_random",
                (0..1000).map(|_| rng.random_range(-10_000..=10_000)).collect(),
            ),
        ]
    }

    fn expected(input: &[i64], order: Order) -> Vec<i64> {
        let mut v = input.to_vec();
        match order {
            Order::Ascending => v.sort(),
            Order::Descending => v.sort_by(|a, b| b.cmp(a)),
        }
        v
    }

    #[test]
    fn test_precedes() {
        assert!(precedes(1, 2, Order::Ascending));
        assert!(!precedes(2, 1, Order::Ascending));
        assert!(!precedes(2, 2, Order::Ascending));
        assert!(precedes(2, 1, Order::Descending));
        assert!(!precedes(1, 2, Order::Descending));
        assert!(!precedes(2, 2, Order::Descending));
    }

    #[test]
    fn test_all_algorithms_all_cases() {
        for algorithm in Algorithm::ALL {
            for (name, input) in fixtures() {
                for order in [Order::Ascending, Order::Descending] {
                    let snapshot = input.clone();
                    let result = (algorithm.function())(&input, order);

                    assert_eq!(
                        result,
                        expected(&input, order),
                        "{} failed for {} in {} order",
                        algorithm,
                        name,
                        order
                    );
                    assert_eq!(input, snapshot, "{} mutated {}", algorithm, name);
                }
            }
        }
    }

    #[test]
    fn test_verify_all_fixtures() {
        let inputs: Vec<Vec<i64>> = fixtures().into_iter().map(|(_, v)| v).collect();
        verify_all(&inputs).expect("all algorithms should sort every fixture");
    }

    #[test]
    fn test_sorting_sorted_input_is_identity() {
        let asc: Vec<i64> = vec![-3, -1, 0, 0, 4, 9, 9, 12];
        let desc: Vec<i64> = asc.iter().rev().copied().collect();

        for algorithm in Algorithm::ALL {
            let sort = algorithm.function();
            assert_eq!(sort(&asc, Order::Ascending), asc, "{}", algorithm);
            assert_eq!(sort(&desc, Order::Descending), desc, "{}", algorithm);
        }
    }

    #[test]
    fn test_check_sorted_permutation_rejects_bad_output() {
        let input = [3, 1, 2];
        assert!(check_sorted_permutation(&input, &[1, 2, 3], Order::Ascending).is_ok());
        assert!(check_sorted_permutation(&input, &[1, 2], Order::Ascending).is_err());
        assert!(check_sorted_permutation(&input, &[1, 1, 3], Order::Ascending).is_err());
        assert!(check_sorted_permutation(&input, &[1, 3, 2], Order::Ascending).is_err());
        assert!(check_sorted_permutation(&input, &[3, 2, 1], Order::Descending).is_ok());
    }

    #[test]
    fn test_quick_sort_handles_long_presorted_input() {
        // Worst case for a last-element pivot; must not exhaust the stack
        let input: Vec<i64> = (0..5_000).collect();
        assert_eq!(quick_sort(&input, Order::Ascending), input);

        let reversed: Vec<i64> = input.iter().rev().copied().collect();
        assert_eq!(quick_sort(&input, Order::Descending), reversed);
    }

    #[test]
    fn test_partition_places_pivot() {
        let mut v = vec![5, 2, 8, 1, 9, 3];
        let p = crate::sorting::code::quick::partition(&mut v, Order::Ascending);

        assert_eq!(v[p], 3);
        assert!(v[..p].iter().all(|&x| x <= 3));
        assert!(v[p + 1..].iter().all(|&x| x > 3));

        let mut v = vec![5, 2, 8, 1, 9, 3];
        let p = crate::sorting::code::quick::partition(&mut v, Order::Descending);
        assert_eq!(p, 3);
        assert!(v[..p].iter().all(|&x| x >= 3));
    }

    #[test]
    fn test_merge_interleaves_runs() {
        let mut v = vec![1, 3, 3, 2, 3];
        let mut scratch = Vec::new();
        crate::sorting::code::merge::merge(&mut v, 3, Order::Ascending, &mut scratch);
        assert_eq!(v, vec![1, 2, 3, 3, 3]);

        let mut v = vec![4, 2, 5, 2];
        crate::sorting::code::merge::merge(&mut v, 2, Order::Descending, &mut scratch);
        assert_eq!(v, vec![5, 4, 2, 2]);
    }

    #[test]
    fn test_selection_sort_two_elements() {
        assert_eq!(selection_sort(&[2, 1], Order::Ascending), vec![1, 2]);
        assert_eq!(selection_sort(&[1, 2], Order::Descending), vec![2, 1]);
    }

    #[test]
    fn test_shell_sort_odd_lengths() {
        for len in [2usize, 3, 5, 9, 17] {
            let input: Vec<i64> = (0..len as i64).rev().collect();
            let result = shell_sort(&input, Order::Ascending);
            assert_eq!(result, expected(&input, Order::Ascending), "len {}", len);
        }
    }

    #[test]
    fn test_bubble_sort_extremes() {
        let input = [i64::MAX, -1, i64::MIN, 0];
        assert_eq!(
            bubble_sort(&input, Order::Ascending),
            vec![i64::MIN, -1, 0, i64::MAX]
        );
    }
}
