use super::*;

#[test]
fn test_colon_definition() {
    assert_eq!(run(": double dup + ; 3 double"), [6]);
}

#[test]
fn test_if_else_then() {
    assert_eq!(run(": t 1 2 > if 7 else 8 then ; t"), [8]);
    assert_eq!(run(": t 2 1 > if 7 else 8 then ; t"), [7]);
}

#[test]
fn test_begin_until() {
    assert_eq!(run(": z 0 begin 1 + dup 3 = until ; z"), [3]);
}

#[test]
fn test_do_loop() {
    assert_eq!(run(": c 10 0 do i loop ; c"), [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
}

#[test]
fn test_do_plus_loop() {
    assert_eq!(run(": c 10 0 do i 2 +loop ; c"), [0, 2, 4, 6, 8]);
}

#[test]
fn test_variable() {
    assert_eq!(run("variable v 42 v ! v @"), [42]);
}

#[test]
fn test_nested_loops() {
    assert_eq!(
        run(": n 2 0 do 12 10 do j i loop loop ; n"),
        [0, 10, 0, 11, 1, 10, 1, 11]
    );
}

#[test]
fn test_loop_limit_word() {
    assert_eq!(run(": p 7 3 do i' loop ; p"), [7, 7, 7, 7]);
}

#[test]
fn test_not_is_bitwise() {
    assert_eq!(run("0 not"), [-1]);
    assert_eq!(run("-1 not"), [0]);
    assert_eq!(run("5 not"), [-6]);
}

#[test]
fn test_shadowing() {
    assert_eq!(run(": f 1 ; : f 2 ; f"), [2]);
}

#[test]
fn test_top_level_runs_after_definitions() {
    assert_eq!(run("1 2 : noise dup ; 3"), [1, 2, 3]);
}

#[test]
fn test_exit_ends_word_early() {
    assert_eq!(run(": f 1 exit 2 ; f"), [1]);
}

#[test]
fn test_return_stack_words() {
    assert_eq!(run("7 1 >r 2 r> + +"), [10]);
}

#[test]
fn test_empty_source_is_a_zero_step_run() {
    let mut runtime = boot("");
    assert_eq!(Event::Stopped, runtime.run(10).unwrap());
    assert_eq!(0, runtime.steps());
    assert!(runtime.data().is_empty());
}
