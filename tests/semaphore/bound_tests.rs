/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_concurrent::semaphore::CondvarSemaphore;
use prism3_concurrent::{
    Semaphore,
    SemaphoreParameters,
};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    TryWait,
    Post(i32),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![Just(Op::TryWait), (0..4i32).prop_map(Op::Post)]
}

/// Replays `ops` against a model count and checks every result and the
/// `0 <= count <= max` bound after each step.
fn check_model<R: prism3_concurrent::semaphore::RawSemaphore>(
    sem: &Semaphore<R>,
    initial: i32,
    max: i32,
    ops: &[Op],
) -> Result<(), TestCaseError> {
    let mut model = initial;
    for op in ops {
        match *op {
            Op::TryWait => match sem.try_wait() {
                Ok(count) => {
                    prop_assert!(model > 0);
                    model -= 1;
                    prop_assert_eq!(count, model);
                }
                Err(e) => {
                    prop_assert!(e.is_timeout());
                    prop_assert_eq!(model, 0);
                }
            },
            Op::Post(n) => match sem.post_count(n) {
                Ok(count) => {
                    prop_assert!(model + n <= max);
                    model += n;
                    prop_assert_eq!(count, model);
                }
                Err(e) => {
                    prop_assert!(e.is_overflow());
                    prop_assert!(model + n > max);
                }
            },
        }
        let count = sem.get_count();
        prop_assert_eq!(count, model);
        prop_assert!(0 <= count && count <= max);
    }
    Ok(())
}

proptest! {
    #[test]
    fn count_stays_within_bounds(
        (max, initial) in (1..8i32).prop_flat_map(|max| (Just(max), 0..=max)),
        ops in prop::collection::vec(op(), 0..40),
    ) {
        let params = SemaphoreParameters::new(initial).with_max_count(max);
        let sem = Semaphore::new(&params).unwrap();
        check_model(&sem, initial, max, &ops)?;
    }

    #[test]
    fn condvar_count_stays_within_bounds(
        (max, initial) in (1..8i32).prop_flat_map(|max| (Just(max), 0..=max)),
        ops in prop::collection::vec(op(), 0..40),
    ) {
        let params = SemaphoreParameters::new(initial).with_max_count(max);
        let sem: Semaphore<CondvarSemaphore> = Semaphore::with_raw(&params).unwrap();
        check_model(&sem, initial, max, &ops)?;
    }
}
