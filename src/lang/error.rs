#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    code: u16,
    addr: Option<usize>,
    detail: Option<String>,
}

#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::from_code($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $addr:expr) => {
        $crate::lang::Error::from_code($crate::lang::ErrorCode::$err).at_addr($addr)
    };
    ($err:ident, $addr:expr; $($fmt:tt)*) => {
        $crate::lang::Error::from_code($crate::lang::ErrorCode::$err)
            .at_addr($addr)
            .with_detail(format!($($fmt)*))
    };
    ($err:ident; $($fmt:tt)*) => {
        $crate::lang::Error::from_code($crate::lang::ErrorCode::$err)
            .with_detail(format!($($fmt)*))
    };
}

impl Error {
    pub fn from_code(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            addr: None,
            detail: None,
        }
    }

    pub fn at_addr(mut self, addr: usize) -> Error {
        self.addr = Some(addr);
        self
    }

    pub fn with_detail(mut self, detail: String) -> Error {
        self.detail = Some(detail);
        self
    }

    pub fn is(&self, code: ErrorCode) -> bool {
        self.code == code as u16
    }

    pub fn addr(&self) -> Option<usize> {
        self.addr
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(u16)]
pub enum ErrorCode {
    SyntaxError = 2,
    UnknownWord = 10,
    StackOverflow = 20,
    StackUnderflow = 21,
    CoreOverflow = 22,
    UnbalancedControl = 30,
    BadMemoryAccess = 40,
    InternalError = 51,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = match self.code {
            2 => "SYNTAX ERROR",
            10 => "UNKNOWN WORD",
            20 => "STACK OVERFLOW",
            21 => "STACK UNDERFLOW",
            22 => "CORE OVERFLOW",
            30 => "UNBALANCED CONTROL",
            40 => "BAD MEMORY ACCESS",
            51 => "INTERNAL ERROR",
            _ => "",
        };
        if s.is_empty() {
            write!(f, "PROGRAM ERROR {}", self.code)?;
        } else {
            write!(f, "{}", s)?;
        }
        if let Some(detail) = &self.detail {
            write!(f, ": {}", detail)?;
        }
        if let Some(addr) = self.addr {
            write!(f, " AT {}", addr)?;
        }
        Ok(())
    }
}
