use super::{Address, Memory, Word};
use crate::code::Error;
use crate::error;

type Result<T> = std::result::Result<T, Error>;

/// ## Virtual machine instruction set
///
/// Twenty-two opcodes numbered 0 through 21. An instruction is the
/// opcode word followed by zero to three operand words in source
/// order. Operand words are carried raw; the runtime resolves them
/// when the instruction executes.
///
/// For example: `[9, 32768, 4, 5]` decodes to `ADD(32768, 4, 5)`,
/// which stores 4+5 in register 0.

#[derive(Clone, Copy, PartialEq)]
pub enum Opcode {
    Halt,
    Set(Word, Word),
    Push(Word),
    Pop(Word),
    Eq(Word, Word, Word),
    Gt(Word, Word, Word),
    Jmp(Word),
    Jt(Word, Word),
    Jf(Word, Word),
    Add(Word, Word, Word),
    Mult(Word, Word, Word),
    Mod(Word, Word, Word),
    And(Word, Word, Word),
    Or(Word, Word, Word),
    Not(Word, Word),
    RMem(Word, Word),
    WMem(Word, Word),
    Call(Word),
    Ret,
    Out(Word),
    In(Word),
    Noop,
}

impl Opcode {
    /// Decodes the instruction at `pc`, fetching its operand words.
    pub fn decode(memory: &Memory, pc: Address) -> Result<Opcode> {
        use Opcode::*;
        let arg = |offset: Address| memory.read(pc + offset);
        Ok(match memory.read(pc)? {
            0 => Halt,
            1 => Set(arg(1)?, arg(2)?),
            2 => Push(arg(1)?),
            3 => Pop(arg(1)?),
            4 => Eq(arg(1)?, arg(2)?, arg(3)?),
            5 => Gt(arg(1)?, arg(2)?, arg(3)?),
            6 => Jmp(arg(1)?),
            7 => Jt(arg(1)?, arg(2)?),
            8 => Jf(arg(1)?, arg(2)?),
            9 => Add(arg(1)?, arg(2)?, arg(3)?),
            10 => Mult(arg(1)?, arg(2)?, arg(3)?),
            11 => Mod(arg(1)?, arg(2)?, arg(3)?),
            12 => And(arg(1)?, arg(2)?, arg(3)?),
            13 => Or(arg(1)?, arg(2)?, arg(3)?),
            14 => Not(arg(1)?, arg(2)?),
            15 => RMem(arg(1)?, arg(2)?),
            16 => WMem(arg(1)?, arg(2)?),
            17 => Call(arg(1)?),
            18 => Ret,
            19 => Out(arg(1)?),
            20 => In(arg(1)?),
            21 => Noop,
            _ => return Err(error!(InvalidOpcode)),
        })
    }

    /// Width in words: the opcode plus its operands.
    pub fn len(&self) -> Address {
        use Opcode::*;
        match self {
            Halt | Ret | Noop => 1,
            Push(_) | Pop(_) | Jmp(_) | Call(_) | Out(_) | In(_) => 2,
            Set(..) | Jt(..) | Jf(..) | Not(..) | RMem(..) | WMem(..) => 3,
            Eq(..) | Gt(..) | Add(..) | Mult(..) | Mod(..) | And(..) | Or(..) => 4,
        }
    }
}

impl std::fmt::Debug for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Opcode::*;
        match self {
            Halt => write!(f, "HALT"),
            Set(a, b) => write!(f, "SET({}, {})", a, b),
            Push(a) => write!(f, "PUSH({})", a),
            Pop(a) => write!(f, "POP({})", a),
            Eq(a, b, c) => write!(f, "EQ({}, {}, {})", a, b, c),
            Gt(a, b, c) => write!(f, "GT({}, {}, {})", a, b, c),
            Jmp(a) => write!(f, "JMP({})", a),
            Jt(a, b) => write!(f, "JT({}, {})", a, b),
            Jf(a, b) => write!(f, "JF({}, {})", a, b),
            Add(a, b, c) => write!(f, "ADD({}, {}, {})", a, b, c),
            Mult(a, b, c) => write!(f, "MULT({}, {}, {})", a, b, c),
            Mod(a, b, c) => write!(f, "MOD({}, {}, {})", a, b, c),
            And(a, b, c) => write!(f, "AND({}, {}, {})", a, b, c),
            Or(a, b, c) => write!(f, "OR({}, {}, {})", a, b, c),
            Not(a, b) => write!(f, "NOT({}, {})", a, b),
            RMem(a, b) => write!(f, "RMEM({}, {})", a, b),
            WMem(a, b) => write!(f, "WMEM({}, {})", a, b),
            Call(a) => write!(f, "CALL({})", a),
            Ret => write!(f, "RET"),
            Out(a) => write!(f, "OUT({})", a),
            In(a) => write!(f, "IN({})", a),
            Noop => write!(f, "NOOP"),
        }
    }
}
