mod common;
use common::*;

#[test]
fn test_counted_loop() {
    assert_eq!(
        run_source(": c 10 0 do i loop ; c"),
        [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]
    );
}

#[test]
fn test_counted_loop_with_step() {
    assert_eq!(run_source(": c 10 0 do i 2 +loop ; c"), [0, 2, 4, 6, 8]);
}

#[test]
fn test_loop_from_nonzero_start() {
    assert_eq!(run_source(": c 7 3 do i loop ; c"), [3, 4, 5, 6]);
}

#[test]
fn test_loop_body_runs_at_least_once() {
    assert_eq!(run_source(": c 0 0 do i loop ; c"), [0]);
}

#[test]
fn test_loop_index_words() {
    assert_eq!(run_source(": c 6 4 do i i' loop ; c"), [4, 6, 5, 6]);
}

#[test]
fn test_nested_loops() {
    assert_eq!(
        run_source(": n 2 0 do 12 10 do j i loop loop ; n"),
        [0, 10, 0, 11, 1, 10, 1, 11]
    );
}

#[test]
fn test_loop_fills_the_data_stack_exactly() {
    // Ten values land on a ten-cell stack; the loop machinery itself
    // must not need a single cell of headroom above them.
    let mut runtime = boot_sized(": c 10 0 do i loop ; c", 1000, 10, 10).unwrap();
    assert_eq!(forth::mach::Event::Stopped, runtime.run(5000).unwrap());
    assert_eq!(runtime.data().ptr(), 9);
    assert_eq!(
        runtime.data().contents(),
        [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]
    );
}

#[test]
fn test_loop_leaves_the_return_stack_clean() {
    let mut runtime = boot(": c 5 0 do i drop loop ; c c").unwrap();
    assert_eq!(forth::mach::Event::Stopped, runtime.run(5000).unwrap());
    assert!(runtime.ret().is_empty());
    assert!(runtime.data().is_empty());
}

#[test]
fn test_loop_calling_a_word() {
    assert_eq!(
        run_source(": twice dup + ; : c 4 0 do i twice loop ; c"),
        [0, 2, 4, 6]
    );
}

#[test]
fn test_top_level_loop() {
    assert_eq!(run_source("3 0 do i loop"), [0, 1, 2]);
}
