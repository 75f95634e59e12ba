//! The agent instruction set.
//!
//! Five fixed, stateless operations, each identified by a single character
//! in the external parameter-file format.  The set is closed: programs are
//! validated against it at load time and never re-checked at runtime.
//! Execution semantics live with the interpreter in `petri-agent`; this
//! crate only defines the vocabulary.

use std::fmt;

/// One instruction in an agent program.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Instruction {
    /// Step one cell along the current heading, eating whatever ripe food
    /// is at the destination.
    Move,
    /// Scan the eight surrounding cells for ripe food and move onto the
    /// first one found.
    Eat,
    /// Rotate clockwise until the heading points at a food-bearing
    /// neighbor (at most a full revolution).
    Sniff,
    /// Rotate the heading 90° counterclockwise.
    TurnLeft,
    /// Rotate the heading 90° clockwise.
    TurnRight,
}

impl Instruction {
    /// Every instruction, in external-character order `i j w l p`.
    pub const ALL: [Instruction; 5] = [
        Instruction::Move,
        Instruction::Eat,
        Instruction::Sniff,
        Instruction::TurnLeft,
        Instruction::TurnRight,
    ];

    /// The instruction written as `c` in the external format, if any.
    pub fn from_char(c: char) -> Option<Instruction> {
        match c {
            'i' => Some(Instruction::Move),
            'j' => Some(Instruction::Eat),
            'w' => Some(Instruction::Sniff),
            'l' => Some(Instruction::TurnLeft),
            'p' => Some(Instruction::TurnRight),
            _ => None,
        }
    }

    /// The single character naming this instruction in the external format.
    #[inline]
    pub fn as_char(self) -> char {
        match self {
            Instruction::Move => 'i',
            Instruction::Eat => 'j',
            Instruction::Sniff => 'w',
            Instruction::TurnLeft => 'l',
            Instruction::TurnRight => 'p',
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Render a program as its external character string (e.g. `"iijw"`).
pub fn program_string(program: &[Instruction]) -> String {
    program.iter().map(|i| i.as_char()).collect()
}
