use super::{Address, Cell, Core, Int, Opcode};
use crate::error;
use crate::lang::{Error, Scanner, Token};
use log::debug;

type Result<T> = std::result::Result<T, Error>;

/// The synthetic word that receives the relocated top-level fragments;
/// execution starts at its first instruction.
pub const ENTRY_WORD: &str = "[entrypoint]";

/// Placeholder argument for a forward jump that has not been patched.
pub(super) const UNPATCHED: Int = -1;

/// Compile `source` into `core` and return the address of the first
/// instruction to execute. The base ROM must already be installed.
pub fn compile(core: &mut Core, source: &str) -> Result<Address> {
    Compiler::compile(core, source)
}

/// ## Compiler driver
///
/// One pass over the token stream. Integers become `CONST`, dictionary
/// words become `CALL`, everything else must be an immediate word that
/// runs compile-time logic. Colon definitions fill the compiling
/// region; top-level fragments fill the interpreting region, which is
/// spliced in under [`ENTRY_WORD`] at the end.

pub struct Compiler<'a> {
    pub(super) core: &'a mut Core,
    pub(super) scanner: Scanner<'a>,
    /// Scratch for forward and backward jump references. Each
    /// immediate word documents its net effect; anything left over at
    /// splice time is an unbalanced control structure.
    pub(super) marks: Vec<Address>,
}

impl<'a> Compiler<'a> {
    fn compile(core: &'a mut Core, source: &'a str) -> Result<Address> {
        let mut this = Compiler {
            core,
            scanner: Scanner::new(source),
            marks: Vec::new(),
        };
        this.core.interpreting();
        while let Some(token) = this.scanner.word() {
            this.interpret(token)?;
        }
        this.splice()
    }

    fn interpret(&mut self, token: Token) -> Result<()> {
        debug!("compile {} at {}", token, self.core.here());
        match token {
            Token::Integer(n) => self.emit(Opcode::Const(n)),
            Token::Word(name) => {
                if let Some(addr) = self.core.find_word(&name) {
                    self.emit(Opcode::Call(addr as Int + 1))
                } else {
                    self.immediate(&name)
                }
            }
        }
    }

    pub(super) fn emit(&mut self, op: Opcode) -> Result<()> {
        self.core.add_word(Cell::Inst(op))
    }

    /// The next token as a definition name.
    pub(super) fn name(&mut self) -> Result<String> {
        match self.scanner.word() {
            Some(Token::Word(name)) => Ok(name),
            Some(Token::Integer(n)) => Err(error!(SyntaxError; "{} IS NOT A NAME", n)),
            None => Err(error!(SyntaxError; "NAME EXPECTED")),
        }
    }

    pub(super) fn mark(&mut self) {
        self.marks.push(self.core.here());
    }

    pub(super) fn resolve(&mut self, word: &str) -> Result<Address> {
        match self.marks.pop() {
            Some(addr) => Ok(addr),
            None => Err(error!(UnbalancedControl, self.core.here(); "{}", word)),
        }
    }

    /// Close compilation: append the interpreting region to the
    /// compiling region as the body of [`ENTRY_WORD`], relocating its
    /// jump targets from interpreting-region offsets to their final
    /// addresses. Calls and memory references already hold
    /// compiling-region addresses and pass through untouched.
    fn splice(&mut self) -> Result<Address> {
        if !self.marks.is_empty() {
            return Err(error!(UnbalancedControl; "{} OPEN BRANCHES", self.marks.len()));
        }
        self.core.compiling();
        self.core.add_word(Cell::Name(ENTRY_WORD.into()))?;
        let base = self.core.here_com() as Int;
        for addr in 0..self.core.here_int() {
            let cell = match self.core.int_cell(addr) {
                Cell::Inst(Opcode::Jump(n)) => {
                    debug!("relocate JUMP {} -> {}", n, n + base);
                    Cell::Inst(Opcode::Jump(n + base))
                }
                Cell::Inst(Opcode::Jumpz(n)) => {
                    debug!("relocate JUMPZ {} -> {}", n, n + base);
                    Cell::Inst(Opcode::Jumpz(n + base))
                }
                Cell::Inst(Opcode::Rjumpz(n)) => {
                    debug!("relocate RJUMPZ {} -> {}", n, n + base);
                    Cell::Inst(Opcode::Rjumpz(n + base))
                }
                cell => cell.clone(),
            };
            self.core.add_word(cell)?;
        }
        self.emit(Opcode::Ret)?;
        match self.core.find_word(ENTRY_WORD) {
            Some(addr) => Ok(addr + 1),
            None => Err(error!(InternalError; "NO ENTRY WORD")),
        }
    }
}
