use super::{Cell, Core, Opcode};
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Base ROM
///
/// A hand-assembled prelude of primitive words laid down at the start
/// of core memory before any user code compiles, so `find_word` sees
/// them and the `loop` expansions can call `[loop]` and `[+loop]`.
/// Each entry is a name marker, a body, and a closing `RET`.
///
/// The two loop helpers run against the return-stack-resident
/// limit/index pair left there by `do`. On entry the return stack
/// holds `limit index ret` and the data stack, for `[+loop]`, the
/// step. Both advance the index in place with `RLOOP` and leave the
/// continue flag on the return stack, where the `RJUMPZ` emitted
/// right after the call pops it. The data stack never carries loop
/// bookkeeping, so a counted loop can fill it to capacity with its
/// own values; `[+loop]` only touches it to consume the step.

pub fn install(core: &mut Core) -> Result<()> {
    core.compiling();
    for cell in image() {
        core.add_word(cell)?;
    }
    Ok(())
}

/// The ROM as cells, for installation and for integrity checks.
pub fn image() -> Vec<Cell> {
    use Opcode::*;
    let mut rom = Vec::new();
    word(&mut rom, "dup", &[Stk(0)]);
    word(&mut rom, "drop", &[Drop]);
    word(&mut rom, "swap", &[Swap]);
    word(&mut rom, "over", &[Stk(1)]);
    word(&mut rom, "@", &[Load]);
    word(&mut rom, "!", &[Store]);
    word(&mut rom, "+", &[Add]);
    word(&mut rom, "-", &[Sub]);
    word(&mut rom, "=", &[Equ]);
    word(&mut rom, ">", &[Gtr]);
    word(&mut rom, "<", &[Ltn]);
    word(&mut rom, "not", &[Not]);
    word(&mut rom, "and", &[And]);
    word(&mut rom, "or", &[Or]);
    // Loop words peek below their own return address: the index is one
    // deep, the limit two deep, the outer loop's index three deep.
    word(&mut rom, "i", &[Rstk(1)]);
    word(&mut rom, "i'", &[Rstk(2)]);
    word(&mut rom, "j", &[Rstk(3)]);
    // >r and r> tuck the moved value under the return address so the
    // closing RET still finds its way back.
    word(&mut rom, ">r", &[Str, Rswap]);
    word(&mut rom, "r>", &[Rswap, Rts]);
    word(
        &mut rom,
        "[loop]",
        &[
            Rloop,    // advance the frame, flag on top of the return stack
            Rswap,    // tuck the flag under the return address
        ],
    );
    // The step is folded into the index before RLOOP's fixed +1, so
    // the frame advances by the full step.
    word(
        &mut rom,
        "[+loop]",
        &[
            Const(1),
            Sub,      // step-1
            Rswap,    // expose the index under the return address
            Rts,
            Add,      // index+step-1
            Str,      // back on to the return stack
            Rswap,    // return address on top again
            Rloop,
            Rswap,
        ],
    );
    rom
}

fn word(rom: &mut Vec<Cell>, name: &str, body: &[Opcode]) {
    rom.push(Cell::Name(name.into()));
    rom.extend(body.iter().cloned().map(Cell::Inst));
    rom.push(Cell::Inst(Opcode::Ret));
}
