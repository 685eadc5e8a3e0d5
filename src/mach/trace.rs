use super::{Address, Cell, Core, Int, Stack};
use std::rc::Rc;

/// ## Trace interface
///
/// The per-step, read-only snapshot the renderer consumes: the program
/// counter, both stacks, and the name and address range of the word
/// being executed. The renderer may compose these however it likes;
/// nothing here mutates machine state.

pub struct Trace<'a> {
    pub pctr: Address,
    /// Steps executed so far.
    pub step: usize,
    pub data: StackView<'a>,
    pub ret: StackView<'a>,
    pub word: Option<Span>,
    pub(super) core: &'a Core,
}

impl<'a> Trace<'a> {
    pub fn cell(&self, addr: Address) -> Option<&Cell> {
        self.core.cells().get(addr)
    }
}

/// One stack, as the head pointer plus the backing cells. A pointer of
/// -1 denotes empty; cells above the pointer are stale.
pub struct StackView<'a> {
    pub ptr: isize,
    pub cells: &'a [Int],
}

impl<'a> StackView<'a> {
    pub(super) fn new(stack: &'a Stack) -> StackView<'a> {
        StackView {
            ptr: stack.ptr(),
            cells: stack.cells(),
        }
    }
}

/// The word containing some address: its name and the address range of
/// its instructions.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub first: Address,
    pub last: Address,
    pub name: Rc<str>,
}

/// Walk backward from `pctr` to the nearest name marker, then forward
/// past the last consecutive instruction. `None` when `pctr` is not
/// inside a compiled word.
pub fn this_word(core: &Core, pctr: Address) -> Option<Span> {
    let cells = core.cells();
    match cells.get(pctr) {
        Some(Cell::Inst(_)) => {}
        _ => return None,
    }
    let mut marker = pctr;
    let name = loop {
        match &cells[marker] {
            Cell::Name(name) => break name.clone(),
            _ if marker == 0 => return None,
            _ => marker -= 1,
        }
    };
    let mut last = pctr;
    while let Some(Cell::Inst(_)) = cells.get(last + 1) {
        last += 1;
    }
    Some(Span {
        first: marker + 1,
        last,
        name,
    })
}
