mod common;
use common::*;
use forth::lang::ErrorCode;
use forth::mach::Event;

#[test]
fn test_store_and_fetch() {
    assert_eq!(run_source("variable v 42 v ! v @"), [42]);
}

#[test]
fn test_fresh_variable_is_zero() {
    assert_eq!(run_source("variable v v @"), [0]);
}

#[test]
fn test_variables_are_independent() {
    assert_eq!(
        run_source("variable a variable b 1 a ! 2 b ! a @ b @"),
        [1, 2]
    );
}

#[test]
fn test_variable_used_inside_a_definition() {
    assert_eq!(
        run_source("variable n : bump n @ 1 + n ! ; bump bump bump n @"),
        [3]
    );
}

#[test]
fn test_restore_overwrites() {
    assert_eq!(run_source("variable v 1 v ! 2 v ! v @"), [2]);
}

#[test]
fn test_fetch_out_of_core_is_fatal() {
    let mut runtime = boot("5000 @").unwrap();
    let error = runtime.run(100).unwrap_err();
    assert!(error.is(ErrorCode::BadMemoryAccess));
}

#[test]
fn test_fetch_of_an_instruction_cell_is_fatal() {
    // Address 0 holds the first ROM name marker, not data.
    let mut runtime = boot("0 @").unwrap();
    let error = runtime.run(100).unwrap_err();
    assert!(error.is(ErrorCode::BadMemoryAccess));
}

#[test]
fn test_store_cannot_clobber_code() {
    let mut runtime = boot("9 1 !").unwrap();
    let error = runtime.run(100).unwrap_err();
    assert!(error.is(ErrorCode::BadMemoryAccess));
}

#[test]
fn test_variable_survives_between_fragments() {
    let mut runtime = boot("variable v 7 v ! v @ v @ +").unwrap();
    assert_eq!(Event::Stopped, runtime.run(100).unwrap());
    assert_eq!(runtime.data().contents(), [14]);
}
