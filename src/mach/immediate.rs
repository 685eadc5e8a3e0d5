use super::compile::{Compiler, UNPATCHED};
use super::{Cell, Int, Opcode};
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Immediate words
///
/// Macros that run at compile time instead of compiling to a call.
/// Each may push or pop jump addresses on the compiler's mark stack to
/// patch forward references once their targets are known. Patching
/// rewrites the argument of an already-emitted jump.

impl<'a> Compiler<'a> {
    /// Dispatch a token that is neither a literal nor in the
    /// dictionary. Net effects on the mark stack, per word:
    /// `if` +1, `else` ±0, `then` -1, `begin` +1, `until` -1,
    /// `repeat` -1, `do` +1, `loop` and `+loop` -1.
    pub(super) fn immediate(&mut self, word: &str) -> Result<()> {
        match word {
            ":" => self.colon(),
            ";" => self.semicolon(),
            "exit" => self.exit(),
            "if" => self.r#if(),
            "else" => self.r#else(),
            "then" => self.then(),
            "begin" => self.begin(),
            "until" => self.until(),
            "repeat" => self.repeat(),
            "do" => self.r#do(),
            "loop" => self.r#loop(),
            "+loop" => self.plus_loop(),
            "variable" => self.variable(),
            _ => Err(error!(UnknownWord, self.core.here(); "{}", word)),
        }
    }

    /// Start a colon definition: read the name, emit its marker.
    fn colon(&mut self) -> Result<()> {
        self.core.compiling();
        let name = self.name()?;
        self.core.add_word(Cell::Name(name.into()))
    }

    fn semicolon(&mut self) -> Result<()> {
        self.emit(Opcode::Ret)?;
        self.core.interpreting();
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        self.emit(Opcode::Ret)
    }

    fn r#if(&mut self) -> Result<()> {
        self.mark();
        self.emit(Opcode::Jumpz(UNPATCHED))
    }

    fn r#else(&mut self) -> Result<()> {
        let taken = self.resolve("ELSE WITHOUT IF")?;
        self.mark();
        self.emit(Opcode::Jump(UNPATCHED))?;
        self.core.patch(taken, self.core.here() as Int)
    }

    fn then(&mut self) -> Result<()> {
        let slot = self.resolve("THEN WITHOUT IF")?;
        self.core.patch(slot, self.core.here() as Int)
    }

    fn begin(&mut self) -> Result<()> {
        self.mark();
        Ok(())
    }

    fn until(&mut self) -> Result<()> {
        let target = self.resolve("UNTIL WITHOUT BEGIN")?;
        self.emit(Opcode::Jumpz(target as Int))
    }

    fn repeat(&mut self) -> Result<()> {
        let target = self.resolve("REPEAT WITHOUT BEGIN")?;
        self.emit(Opcode::Jump(target as Int))
    }

    /// Move the limit/index pair on to the return stack and remember
    /// where the loop body starts.
    fn r#do(&mut self) -> Result<()> {
        self.emit(Opcode::Swap)?;
        self.emit(Opcode::Str)?;
        self.emit(Opcode::Str)?;
        self.mark();
        Ok(())
    }

    fn r#loop(&mut self) -> Result<()> {
        self.close_loop("[loop]", "LOOP WITHOUT DO")
    }

    fn plus_loop(&mut self) -> Result<()> {
        self.close_loop("[+loop]", "+LOOP WITHOUT DO")
    }

    /// Call the ROM helper that advances the index, branch back while
    /// the flag it leaves on the return stack reports more to do, then
    /// discard the spent limit/index pair.
    fn close_loop(&mut self, helper: &str, unbalanced: &str) -> Result<()> {
        let back = self.resolve(unbalanced)?;
        let addr = match self.core.find_word(helper) {
            Some(addr) => addr,
            None => return Err(error!(InternalError; "NO {} IN ROM", helper)),
        };
        self.emit(Opcode::Call(addr as Int + 1))?;
        self.emit(Opcode::Rjumpz(back as Int))?;
        self.emit(Opcode::Rdrop)?;
        self.emit(Opcode::Rdrop)
    }

    /// `variable x` compiles a word whose body pushes the address of
    /// the zero-initialised cell stored right behind its `RET`.
    fn variable(&mut self) -> Result<()> {
        self.core.compiling();
        let name = self.name()?;
        self.core.add_word(Cell::Name(name.into()))?;
        let slot = self.core.here() as Int + 2;
        self.emit(Opcode::Const(slot))?;
        self.emit(Opcode::Ret)?;
        self.core.add_word(Cell::Int(0))?;
        self.core.interpreting();
        Ok(())
    }
}
