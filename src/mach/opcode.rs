use super::Int;

/// ## Virtual machine instruction set
///
/// The machine has no registers. Every instruction works on the data
/// stack, the return stack, or core memory, and carries at most one
/// integer argument.
///
/// For example: `: double dup + ;` compiles to `[Stk(0), Add, Ret]`
/// under the name marker `double`.
///
/// Comparison results use the Forth truth convention: -1 is true,
/// 0 is false.

#[derive(Clone, PartialEq)]
pub enum Opcode {
    // *** Data motion
    /// Push the argument on to the data stack.
    Const(Int),
    /// Push a copy of the data cell `k` below the top. `Stk(0)` is
    /// `dup`, `Stk(1)` is `over`.
    Stk(Int),
    /// Push a copy of the return cell `k` below the top.
    Rstk(Int),
    Drop,
    Rdrop,
    Swap,
    Rswap,
    /// Pop data, push on to return.
    Str,
    /// Pop return, push on to data.
    Rts,

    // *** Core memory
    /// Pop an address, push the cell stored there.
    Load,
    /// Pop an address, pop a value, store the value there.
    Store,

    // *** Arithmetic and logic
    Add,
    Sub,
    And,
    Or,
    /// Bitwise complement of the data top. `0 not` is -1 but
    /// `5 not` is -6, matching the machine this design descends from.
    Not,
    Equ,
    Gtr,
    Ltn,

    // *** Loop bookkeeping
    /// Advance the loop frame held on the return stack beneath its
    /// top cell: with `limit index top`, replace `index` with
    /// `index + 1` and push 0 while the new index is below the limit,
    /// -1 once it is not. The data stack is untouched, so a counted
    /// loop can fill it to capacity with its own values.
    Rloop,

    // *** Branch control
    Jump(Int),
    /// Pop a flag and branch when it is zero.
    Jumpz(Int),
    /// Pop a flag off the return stack and branch when it is zero.
    Rjumpz(Int),
    /// Push the program counter on to the return stack, then branch.
    Call(Int),
    /// Pop the return stack into the program counter. With an empty
    /// return stack this ends the run.
    Ret,
}

impl Opcode {
    /// Short mnemonic for disassembly. Never empty.
    pub fn mnemonic(&self) -> &'static str {
        use Opcode::*;
        match self {
            Const(_) => "CONST",
            Stk(_) => "STK",
            Rstk(_) => "RSTK",
            Drop => "DROP",
            Rdrop => "RDROP",
            Swap => "SWAP",
            Rswap => "RSWAP",
            Str => "STR",
            Rts => "RTS",
            Load => "LOAD",
            Store => "STORE",
            Add => "ADD",
            Sub => "SUB",
            And => "AND",
            Or => "OR",
            Not => "NOT",
            Equ => "EQU",
            Gtr => "GTR",
            Ltn => "LTN",
            Rloop => "RLOOP",
            Jump(_) => "JUMP",
            Jumpz(_) => "JUMPZ",
            Rjumpz(_) => "RJUMPZ",
            Call(_) => "CALL",
            Ret => "RET",
        }
    }

    /// The instruction argument, for the ones that carry one.
    pub fn arg(&self) -> Option<Int> {
        use Opcode::*;
        match self {
            Const(n) | Stk(n) | Rstk(n) | Jump(n) | Jumpz(n) | Rjumpz(n) | Call(n) => Some(*n),
            _ => None,
        }
    }
}

impl std::fmt::Debug for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.arg() {
            Some(n) => write!(f, "{} {}", self.mnemonic(), n),
            None => write!(f, "{}", self.mnemonic()),
        }
    }
}
