#[derive(Clone)]
pub struct Error {
    code: u16,
    address: Option<usize>,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::code::Error::new($crate::code::ErrorCode::$err)
    };
    ($err:ident; $msg:expr) => {
        $crate::code::Error::new($crate::code::ErrorCode::$err).message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            address: None,
            message: String::new(),
        }
    }

    /// Records the program counter where the failure happened.
    pub fn at_address(self, address: usize) -> Error {
        debug_assert!(self.address.is_none());
        Error {
            address: Some(address),
            ..self
        }
    }

    pub fn message<S: Into<String>>(self, message: S) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            message: message.into(),
            ..self
        }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn is(&self, code: ErrorCode) -> bool {
        self.code == code as u16
    }
}

pub enum ErrorCode {
    FileUnreadable = 1,
    OddLength = 2,
    TooLarge = 3,
    InvalidOpcode = 11,
    InvalidOperand = 12,
    RegisterIndexOutOfRange = 13,
    InvalidAddress = 14,
    StackUnderflow = 15,
    DivisionByZero = 16,
    InputExhausted = 17,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            1 => "FILE UNREADABLE",
            2 => "ODD LENGTH",
            3 => "TOO LARGE",
            11 => "INVALID OPCODE",
            12 => "INVALID OPERAND",
            13 => "REGISTER INDEX OUT OF RANGE",
            14 => "INVALID ADDRESS",
            15 => "STACK UNDERFLOW",
            16 => "DIVISION BY ZERO",
            17 => "INPUT EXHAUSTED",
            _ => "",
        };
        let mut suffix = String::new();
        if let Some(address) = self.address {
            suffix.push_str(&format!(" AT {}", address));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        if code_str.is_empty() {
            write!(f, "MACHINE ERROR {}{}", self.code, suffix)
        } else {
            write!(f, "{}{}", code_str, suffix)
        }
    }
}
