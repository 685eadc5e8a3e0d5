use super::trace::{this_word, StackView, Trace};
use super::{Address, Cell, Core, Int, Opcode, Stack};
use crate::error;
use crate::lang::Error;
use log::trace;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, PartialEq)]
pub enum Event {
    Running,
    Stopped,
}

/// ## Runtime
///
/// A two-stack machine stepping through frozen core memory. Each step
/// reads the instruction under the program counter, advances the
/// counter, then executes. The run ends when a `RET` finds the return
/// stack empty: the entry word was entered without a caller, so its
/// final return is the sanctioned underflow that signals completion.
/// Every other overflow or underflow is a terminal error.

#[derive(Debug)]
pub struct Runtime {
    core: Core,
    data: Stack,
    ret: Stack,
    pctr: Address,
    steps: usize,
}

impl Runtime {
    pub fn new(core: Core, entry: Address, data_size: usize, return_size: usize) -> Runtime {
        Runtime {
            core,
            data: Stack::new("DATA", data_size),
            ret: Stack::new("RETURN", return_size),
            pctr: entry,
            steps: 0,
        }
    }

    /// Execute one instruction.
    pub fn step(&mut self) -> Result<Event> {
        let op = match self.core.get(self.pctr)? {
            Cell::Inst(op) => op.clone(),
            _ => return Err(error!(InternalError, self.pctr; "INVALID PC ADDRESS")),
        };
        trace!("step {} at {}: {}", self.steps, self.pctr, op);
        self.pctr += 1;
        use Opcode::*;
        match op {
            Const(n) => self.data.push(n)?,
            Stk(k) => {
                let val = self.data.peek(k)?;
                self.data.push(val)?;
            }
            Rstk(k) => {
                let val = self.ret.peek(k)?;
                self.data.push(val)?;
            }
            Drop => {
                self.data.pop()?;
            }
            Rdrop => {
                self.ret.pop()?;
            }
            Swap => self.data.swap()?,
            Rswap => self.ret.swap()?,
            Str => {
                let val = self.data.pop()?;
                self.ret.push(val)?;
            }
            Rts => {
                let val = self.ret.pop()?;
                self.data.push(val)?;
            }
            Load => {
                let addr = self.data.pop()?;
                let val = self.core.fetch(addr)?;
                self.data.push(val)?;
            }
            Store => {
                let addr = self.data.pop()?;
                let val = self.data.pop()?;
                self.core.store(addr, val)?;
            }
            Add => self.binary(|a, b| a.wrapping_add(b))?,
            Sub => self.binary(|a, b| a.wrapping_sub(b))?,
            And => self.binary(|a, b| a & b)?,
            Or => self.binary(|a, b| a | b)?,
            Not => {
                let val = self.data.pop()?;
                self.data.push(!val)?;
            }
            Equ => self.binary(|a, b| if a == b { -1 } else { 0 })?,
            Gtr => self.binary(|a, b| if a > b { -1 } else { 0 })?,
            Ltn => self.binary(|a, b| if a < b { -1 } else { 0 })?,
            Rloop => {
                let top = self.ret.pop()?;
                let index = self.ret.pop()?.wrapping_add(1);
                let limit = self.ret.peek(0)?;
                self.ret.push(index)?;
                self.ret.push(top)?;
                self.ret.push(if index < limit { 0 } else { -1 })?;
            }
            Jump(addr) => self.pctr = self.branch(addr)?,
            Jumpz(addr) => {
                if self.data.pop()? == 0 {
                    self.pctr = self.branch(addr)?;
                }
            }
            Rjumpz(addr) => {
                if self.ret.pop()? == 0 {
                    self.pctr = self.branch(addr)?;
                }
            }
            Call(addr) => {
                self.ret.push(self.pctr as Int)?;
                self.pctr = self.branch(addr)?;
            }
            Ret => {
                if self.ret.is_empty() {
                    // Park on the final RET; repeated steps stay halted.
                    self.pctr -= 1;
                    return Ok(Event::Stopped);
                }
                let addr = self.ret.pop()?;
                self.pctr = self.branch(addr)?;
            }
        }
        self.steps += 1;
        Ok(Event::Running)
    }

    /// Step up to `limit` times, stopping early on completion.
    pub fn run(&mut self, limit: usize) -> Result<Event> {
        for _ in 0..limit {
            if let Event::Stopped = self.step()? {
                return Ok(Event::Stopped);
            }
        }
        Ok(Event::Running)
    }

    /// Read-only snapshot for the renderer.
    pub fn trace(&self) -> Trace {
        Trace {
            pctr: self.pctr,
            step: self.steps,
            data: StackView::new(&self.data),
            ret: StackView::new(&self.ret),
            word: this_word(&self.core, self.pctr),
            core: &self.core,
        }
    }

    pub fn pctr(&self) -> Address {
        self.pctr
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn data(&self) -> &Stack {
        &self.data
    }

    pub fn ret(&self) -> &Stack {
        &self.ret
    }

    pub fn core(&self) -> &Core {
        &self.core
    }

    fn binary(&mut self, op: fn(Int, Int) -> Int) -> Result<()> {
        let rhs = self.data.pop()?;
        let lhs = self.data.pop()?;
        self.data.push(op(lhs, rhs))
    }

    fn branch(&self, addr: Int) -> Result<Address> {
        if addr < 0 || addr as usize >= self.core.cells().len() {
            return Err(error!(InternalError, self.pctr; "INVALID PC ADDRESS {}", addr));
        }
        Ok(addr as Address)
    }
}
