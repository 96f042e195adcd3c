use serde::{Deserialize, Serialize};

/// A single symbol of the fragment alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Nucleotide {
    /// Guanine
    G,
    /// Adenine
    A,
    /// Cytosine
    C,
    /// Thymine
    T,
}

impl Nucleotide {
    /// All symbols accepted in a fragment, in canonical G, A, C, T order
    pub const ALL: [Nucleotide; 4] = [Self::G, Self::A, Self::C, Self::T];

    /// Parse a nucleotide from its uppercase ASCII byte.
    ///
    /// Lowercase (soft-masked) bases are not accepted; loaders that want to
    /// accept them must upper-case first.
    #[must_use]
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'G' => Some(Self::G),
            b'A' => Some(Self::A),
            b'C' => Some(Self::C),
            b'T' => Some(Self::T),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_byte(self) -> u8 {
        match self {
            Self::G => b'G',
            Self::A => b'A',
            Self::C => b'C',
            Self::T => b'T',
        }
    }

    #[must_use]
    pub fn as_char(self) -> char {
        char::from(self.as_byte())
    }
}

impl TryFrom<char> for Nucleotide {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        u8::try_from(c)
            .ok()
            .and_then(Self::from_byte)
            .ok_or(c)
    }
}

impl std::fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_byte_accepts_alphabet() {
        for n in Nucleotide::ALL {
            assert_eq!(Nucleotide::from_byte(n.as_byte()), Some(n));
        }
    }

    #[test]
    fn test_from_byte_rejects_other_symbols() {
        assert_eq!(Nucleotide::from_byte(b'N'), None);
        assert_eq!(Nucleotide::from_byte(b'X'), None);
        assert_eq!(Nucleotide::from_byte(b'U'), None);
        // Case-sensitive
        assert_eq!(Nucleotide::from_byte(b'a'), None);
    }

    #[test]
    fn test_try_from_char() {
        assert_eq!(Nucleotide::try_from('C'), Ok(Nucleotide::C));
        assert_eq!(Nucleotide::try_from('é'), Err('é'));
    }
}
