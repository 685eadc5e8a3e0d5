use super::{Address, Cell, Int, Opcode};
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// Cells in the interpreting region, the scratch buffer for top-level
/// fragments compiled outside any colon definition.
pub const INTERPRETING_SIZE: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Region {
    Compiling,
    Interpreting,
}

/// ## Core memory
///
/// An ordered sequence of cells holding the base ROM, every compiled
/// word, and variable slots. The dictionary is not a separate
/// structure: it is the `(name marker, instructions...)` runs embedded
/// in the compiling region, searched newest first so later definitions
/// shadow earlier ones.
///
/// During compilation exactly one of the two regions is active and
/// receives `add_word` emissions at its cursor. The interpreting
/// region is spliced into the compiling region when compilation ends.

#[derive(Debug)]
pub struct Core {
    com: Vec<Cell>,
    int: Vec<Cell>,
    here_com: Address,
    here_int: Address,
    active: Region,
}

impl Core {
    pub fn new(core_size: usize) -> Core {
        Core {
            com: vec![Cell::Int(0); core_size],
            int: vec![Cell::Int(0); INTERPRETING_SIZE],
            here_com: 0,
            here_int: 0,
            active: Region::Compiling,
        }
    }

    pub fn compiling(&mut self) {
        self.active = Region::Compiling;
    }

    pub fn interpreting(&mut self) {
        self.active = Region::Interpreting;
    }

    pub fn active(&self) -> Region {
        self.active
    }

    /// The active cursor: the address the next `add_word` will fill.
    pub fn here(&self) -> Address {
        match self.active {
            Region::Compiling => self.here_com,
            Region::Interpreting => self.here_int,
        }
    }

    pub fn here_com(&self) -> Address {
        self.here_com
    }

    pub fn here_int(&self) -> Address {
        self.here_int
    }

    /// Write one cell at the active cursor and advance it.
    pub fn add_word(&mut self, cell: Cell) -> Result<()> {
        let (cells, here) = match self.active {
            Region::Compiling => (&mut self.com, &mut self.here_com),
            Region::Interpreting => (&mut self.int, &mut self.here_int),
        };
        if *here >= cells.len() {
            return Err(error!(CoreOverflow, *here));
        }
        cells[*here] = cell;
        *here += 1;
        Ok(())
    }

    /// Rewrite the argument of an already-emitted jump in the active
    /// region. Forward references are emitted with a placeholder and
    /// patched here once the target is known.
    pub fn patch(&mut self, addr: Address, target: Int) -> Result<()> {
        let cells = match self.active {
            Region::Compiling => &mut self.com,
            Region::Interpreting => &mut self.int,
        };
        match cells.get_mut(addr) {
            Some(cell @ Cell::Inst(Opcode::Jump(_))) => *cell = Cell::Inst(Opcode::Jump(target)),
            Some(cell @ Cell::Inst(Opcode::Jumpz(_))) => *cell = Cell::Inst(Opcode::Jumpz(target)),
            _ => return Err(error!(InternalError, addr; "PATCH FAILURE")),
        }
        Ok(())
    }

    /// Scan the compiling region newest first for a name marker.
    /// Returns the marker's address; the word's first instruction is
    /// the next cell.
    pub fn find_word(&self, name: &str) -> Option<Address> {
        for addr in (0..self.here_com).rev() {
            if let Cell::Name(n) = &self.com[addr] {
                if n.as_ref() == name {
                    return Some(addr);
                }
            }
        }
        None
    }

    pub fn get(&self, addr: Address) -> Result<&Cell> {
        match self.com.get(addr) {
            Some(cell) => Ok(cell),
            None => Err(error!(BadMemoryAccess, addr)),
        }
    }

    /// `LOAD` semantics: the addressed cell must hold an integer.
    pub fn fetch(&self, addr: Int) -> Result<Int> {
        match self.com.get(self.check(addr)?) {
            Some(Cell::Int(n)) => Ok(*n),
            _ => Err(error!(BadMemoryAccess, addr as Address; "NOT A DATA CELL")),
        }
    }

    /// `STORE` semantics: only cells that already hold an integer may
    /// be written, so instructions and markers cannot be clobbered.
    pub fn store(&mut self, addr: Int, val: Int) -> Result<()> {
        let at = self.check(addr)?;
        match self.com.get_mut(at) {
            Some(cell @ Cell::Int(_)) => {
                *cell = Cell::Int(val);
                Ok(())
            }
            _ => Err(error!(BadMemoryAccess, at; "NOT A DATA CELL")),
        }
    }

    fn check(&self, addr: Int) -> Result<Address> {
        if addr < 0 || addr as usize >= self.com.len() {
            return Err(error!(BadMemoryAccess; "{}", addr));
        }
        Ok(addr as Address)
    }

    /// The compiling region, full length.
    pub fn cells(&self) -> &[Cell] {
        &self.com
    }

    pub(super) fn int_cell(&self, addr: Address) -> &Cell {
        &self.int[addr]
    }
}
