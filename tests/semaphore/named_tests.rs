/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_concurrent::{
    Semaphore,
    SemaphoreParameters,
};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn named(tag: &str, initial_count: i32, max_count: i32) -> SemaphoreParameters {
    SemaphoreParameters::new(initial_count)
        .with_max_count(max_count)
        .with_intra_process(false)
        .with_name(format!("prism3-named-{}-{}", tag, std::process::id()))
}

#[test]
fn test_token_posted_through_one_handle_taken_through_another() {
    let a = Semaphore::new(&named("handoff", 0, 10)).unwrap();
    let b = Semaphore::new(&named("handoff", 0, 10)).unwrap();

    assert_eq!(a.post().unwrap(), 1);
    assert_eq!(b.get_count(), 1);
    assert_eq!(b.try_wait().unwrap(), 0);
    assert_eq!(a.get_count(), 0);
    assert_eq!(b.get_count(), 0);
    assert!(a.try_wait().unwrap_err().is_timeout());
}

#[test]
fn test_second_handle_sees_existing_count() {
    let a = Semaphore::new(&named("existing", 2, 5)).unwrap();
    let b = Semaphore::new(&named("existing", 0, 5)).unwrap();
    assert_eq!(b.get_count(), 2);
    assert_eq!(b.wait().unwrap(), 1);
    assert_eq!(a.get_count(), 1);
}

#[test]
fn test_max_count_checked_against_shared_count() {
    let a = Semaphore::new(&named("bound", 2, 2)).unwrap();
    let b = Semaphore::new(&named("bound", 0, 2)).unwrap();
    assert!(b.post().unwrap_err().is_overflow());
    assert_eq!(a.try_wait().unwrap(), 1);
    assert_eq!(b.post().unwrap(), 2);
    assert_eq!(a.get_count(), 2);
}

#[test]
fn test_waiter_on_one_handle_released_by_other() {
    let a = Arc::new(Semaphore::new(&named("release", 0, 10)).unwrap());
    let b = Semaphore::new(&named("release", 0, 10)).unwrap();

    let waiter = {
        let a = a.clone();
        thread::spawn(move || a.wait_timeout(Duration::from_secs(5)))
    };
    thread::sleep(Duration::from_millis(30));
    b.post().unwrap();
    assert_eq!(waiter.join().unwrap().unwrap(), 0);
    assert_eq!(a.get_count(), 0);
    assert_eq!(b.get_count(), 0);
}

#[test]
fn test_leftover_tokens_discarded_after_creator_drops() {
    let params = named("stale", 0, 10);
    let sem = Semaphore::new(&params).unwrap();
    sem.post_count(3).unwrap();
    drop(sem);

    let reopened = Semaphore::new(&params).unwrap();
    assert_eq!(reopened.get_count(), 0);
    assert!(reopened.try_wait().unwrap_err().is_timeout());
}
