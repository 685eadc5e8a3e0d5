use super::*;
use crate::lang::ErrorCode;
use crate::mach::{Cell, Opcode, Region};

#[test]
fn test_regions_have_independent_cursors() {
    let mut core = Core::new(100);
    assert_eq!(Region::Compiling, core.active());
    core.add_word(Cell::Int(1)).unwrap();
    core.interpreting();
    core.add_word(Cell::Int(2)).unwrap();
    core.add_word(Cell::Int(3)).unwrap();
    assert_eq!(1, core.here_com());
    assert_eq!(2, core.here_int());
    core.compiling();
    assert_eq!(1, core.here());
}

#[test]
fn test_find_word_prefers_the_newest() {
    let mut core = Core::new(100);
    core.add_word(Cell::Name("f".into())).unwrap();
    core.add_word(Cell::Inst(Opcode::Ret)).unwrap();
    core.add_word(Cell::Name("f".into())).unwrap();
    core.add_word(Cell::Inst(Opcode::Ret)).unwrap();
    assert_eq!(Some(2), core.find_word("f"));
    assert_eq!(None, core.find_word("g"));
}

#[test]
fn test_find_word_ignores_the_interpreting_region() {
    let mut core = Core::new(100);
    core.interpreting();
    core.add_word(Cell::Name("f".into())).unwrap();
    assert_eq!(None, core.find_word("f"));
}

#[test]
fn test_patch_rewrites_jump_arguments() {
    let mut core = Core::new(100);
    core.add_word(Cell::Inst(Opcode::Jumpz(-1))).unwrap();
    core.add_word(Cell::Inst(Opcode::Jump(-1))).unwrap();
    core.patch(0, 7).unwrap();
    core.patch(1, 9).unwrap();
    assert_eq!(core.cells()[0], Cell::Inst(Opcode::Jumpz(7)));
    assert_eq!(core.cells()[1], Cell::Inst(Opcode::Jump(9)));
}

#[test]
fn test_patch_refuses_non_jumps() {
    let mut core = Core::new(100);
    core.add_word(Cell::Inst(Opcode::Add)).unwrap();
    assert!(core.patch(0, 7).unwrap_err().is(ErrorCode::InternalError));
}

#[test]
fn test_interpreting_region_overflow() {
    let mut core = Core::new(1000);
    rom::install(&mut core).unwrap();
    let source = (0..101).map(|n| n.to_string()).collect::<Vec<_>>().join(" ");
    let error = compile(&mut core, &source).unwrap_err();
    assert!(error.is(ErrorCode::CoreOverflow));
}

#[test]
fn test_fetch_and_store_round_trip() {
    let mut core = Core::new(100);
    core.add_word(Cell::Int(5)).unwrap();
    assert_eq!(5, core.fetch(0).unwrap());
    core.store(0, 9).unwrap();
    assert_eq!(9, core.fetch(0).unwrap());
}

#[test]
fn test_fetch_out_of_range() {
    let core = Core::new(100);
    assert!(core.fetch(-1).unwrap_err().is(ErrorCode::BadMemoryAccess));
    assert!(core.fetch(100).unwrap_err().is(ErrorCode::BadMemoryAccess));
}
