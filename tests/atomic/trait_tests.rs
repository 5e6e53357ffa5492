/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_concurrent::{
    Atomic,
    AtomicInt32,
    AtomicInt64,
    AtomicInteger,
    AtomicUint32,
    AtomicUint64,
};

fn exercise_atomic<T: Atomic<Value = V>, V: Copy + PartialEq + std::fmt::Debug + From<u8>>(
    atomic: &T,
) {
    assert_eq!(atomic.set_value(V::from(42)), V::from(0));
    assert_eq!(atomic.get_value(), V::from(42));
    assert!(atomic.set_value_conditional(V::from(100), V::from(42)));
    assert!(!atomic.set_value_conditional(V::from(200), V::from(42)));
    assert_eq!(atomic.get_value(), V::from(100));
}

fn exercise_integer<T: AtomicInteger<Value = V>, V: Copy + PartialEq + std::fmt::Debug + From<u8>>(
    atomic: &T,
) {
    assert_eq!(atomic.increment(), V::from(1));
    assert_eq!(atomic.add(V::from(9)), V::from(10));
    assert_eq!(atomic.decrement(), V::from(9));
    assert_eq!(atomic.or(V::from(0b0110)), V::from(0b1111));
    assert_eq!(atomic.and(V::from(0b0011)), V::from(0b0011));
    assert_eq!(atomic.xor(V::from(0b0001)), V::from(0b0010));
}

#[test]
fn test_atomic_trait_all_widths() {
    exercise_atomic(&AtomicInt32::new(0));
    exercise_atomic(&AtomicUint32::new(0));
    exercise_atomic(&AtomicInt64::new(0));
    exercise_atomic(&AtomicUint64::new(0));
}

#[test]
fn test_atomic_integer_trait_all_widths() {
    exercise_integer(&AtomicInt32::new(0));
    exercise_integer(&AtomicUint32::new(0));
    exercise_integer(&AtomicInt64::new(0));
    exercise_integer(&AtomicUint64::new(0));
}

#[test]
fn test_trait_objects_by_width() {
    let counters: Vec<Box<dyn AtomicInteger<Value = i64>>> =
        vec![Box::new(AtomicInt64::new(5)), Box::new(AtomicInt64::new(-5))];
    for counter in &counters {
        counter.add(10);
    }
    let values: Vec<i64> = counters.iter().map(|c| c.get_value()).collect();
    assert_eq!(values, vec![15, 5]);
}
