/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_concurrent::{
    AtomicInt32,
    AtomicInt64,
    AtomicUint64,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn set_value_conditional_swaps_iff_equal_32(
        initial in any::<i32>(),
        value in any::<i32>(),
        condition in any::<i32>(),
    ) {
        let atomic = AtomicInt32::new(initial);
        let swapped = atomic.set_value_conditional(value, condition);
        prop_assert_eq!(swapped, initial == condition);
        prop_assert_eq!(atomic.get_value(), if swapped { value } else { initial });
    }

    #[test]
    fn set_value_conditional_matching_condition_64(initial in any::<i64>(), value in any::<i64>()) {
        let atomic = AtomicInt64::new(initial);
        prop_assert!(atomic.set_value_conditional(value, initial));
        prop_assert_eq!(atomic.get_value(), value);
    }

    #[test]
    fn set_value_conditional_mismatch_leaves_value_64(
        initial in any::<u64>(),
        value in any::<u64>(),
        offset in 1..u64::MAX,
    ) {
        let atomic = AtomicUint64::new(initial);
        prop_assert!(!atomic.set_value_conditional(value, initial.wrapping_add(offset)));
        prop_assert_eq!(atomic.get_value(), initial);
    }

    #[test]
    fn add_matches_wrapping_arithmetic(initial in any::<i32>(), deltas in prop::collection::vec(any::<i32>(), 0..16)) {
        let atomic = AtomicInt32::new(initial);
        let mut expected = initial;
        for delta in deltas {
            expected = expected.wrapping_add(delta);
            prop_assert_eq!(atomic.add(delta), expected);
        }
        prop_assert_eq!(atomic.get_value(), expected);
    }
}
