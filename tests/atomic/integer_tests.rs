/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

test_atomic_integer!(AtomicInt32, i32, atomic_int32_tests);
test_atomic_integer!(AtomicUint32, u32, atomic_uint32_tests);
test_atomic_integer!(AtomicInt64, i64, atomic_int64_tests);
test_atomic_integer!(AtomicUint64, u64, atomic_uint64_tests);
