//src/bytecode/opcodes.rs

/// Opcode d'ouverture de boucle (`[`)
pub const OPEN_LOOP: u8 = 0x6;
/// Opcode de fermeture de boucle (`]`)
pub const CLOSE_LOOP: u8 = 0x7;

/// Représente les opcodes du jeu d'instructions (un byte par instruction)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    IncPtr = 0x0,  // >
    DecPtr = 0x1,  // <
    Inc = 0x2,     // +
    Dec = 0x3,     // -
    Output = 0x4,  // .
    Input = 0x5,   // ,
    OpenLoop = OPEN_LOOP,   // [
    CloseLoop = CLOSE_LOOP, // ]
}

impl Opcode {
    /// Convertit un byte en opcode
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0x0 => Some(Self::IncPtr),
            0x1 => Some(Self::DecPtr),
            0x2 => Some(Self::Inc),
            0x3 => Some(Self::Dec),
            0x4 => Some(Self::Output),
            0x5 => Some(Self::Input),
            OPEN_LOOP => Some(Self::OpenLoop),
            CLOSE_LOOP => Some(Self::CloseLoop),
            _ => None,
        }
    }

    /// Convertit un caractère du code source en opcode
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '>' => Some(Self::IncPtr),
            '<' => Some(Self::DecPtr),
            '+' => Some(Self::Inc),
            '-' => Some(Self::Dec),
            '.' => Some(Self::Output),
            ',' => Some(Self::Input),
            '[' => Some(Self::OpenLoop),
            ']' => Some(Self::CloseLoop),
            _ => None,
        }
    }

    pub fn to_char(&self) -> char {
        match self {
            Self::IncPtr => '>',
            Self::DecPtr => '<',
            Self::Inc => '+',
            Self::Dec => '-',
            Self::Output => '.',
            Self::Input => ',',
            Self::OpenLoop => '[',
            Self::CloseLoop => ']',
        }
    }

    pub fn encode(&self) -> u8 {
        *self as u8
    }

    /// Retourne la taille d'opcode en bytes
    pub fn size(&self) -> usize {
        1 //Tous les opcodes font 1 byte
    }

    /// Indique si l'opcode est une instruction de controle de flux
    pub fn is_branch(&self) -> bool {
        matches!(self, Self::OpenLoop | Self::CloseLoop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opcode_from_u8() {
        assert_eq!(Opcode::from_u8(0x0), Some(Opcode::IncPtr));
        assert_eq!(Opcode::from_u8(0x6), Some(Opcode::OpenLoop));
        assert_eq!(Opcode::from_u8(0x7), Some(Opcode::CloseLoop));

        // Test des valeurs invalides
        assert_eq!(Opcode::from_u8(0x8), None);
        assert_eq!(Opcode::from_u8(0xFF), None);
    }

    #[test]
    fn test_opcode_chars() {
        for c in "><+-.,[]".chars() {
            let op = Opcode::from_char(c).unwrap();
            assert_eq!(op.to_char(), c);
        }
        assert_eq!(Opcode::from_char('a'), None);
        assert_eq!(Opcode::from_char(' '), None);
    }

    #[test]
    fn test_opcode_is_branch() {
        assert!(Opcode::OpenLoop.is_branch());
        assert!(Opcode::CloseLoop.is_branch());

        // Instructions non-branchement
        assert!(!Opcode::Inc.is_branch());
        assert!(!Opcode::Output.is_branch());
        assert!(!Opcode::IncPtr.is_branch());
    }

    #[test]
    fn test_opcode_values() {
        assert_eq!(Opcode::OpenLoop.encode(), OPEN_LOOP);
        assert_eq!(Opcode::CloseLoop.encode(), CLOSE_LOOP);
        assert_eq!(Opcode::Input as u8, 0x5);
        assert_eq!(Opcode::Dec.size(), 1);
    }
}
