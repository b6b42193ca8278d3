use std::error::Error;
use std::fmt;

/// Failures in the text codec: plain text that the game's character table
/// cannot represent, or stored bytes that map to no character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingError {
    UnsupportedCharacter {
        field: &'static str,
        character: char,
    },
    UnsupportedByte {
        field: &'static str,
        byte: u8,
    },
    /// Text longer than its fixed field width. Never silently truncated:
    /// overflow would corrupt the adjacent field.
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
    /// A composite field (favorite thing) is missing its literal token on
    /// decode.
    MissingToken {
        field: &'static str,
        token: &'static str,
    },
}

impl fmt::Display for EncodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::UnsupportedCharacter { field, character } => {
                write!(f, "{field}: character {character:?} not in character table")
            }
            Self::UnsupportedByte { field, byte } => {
                write!(f, "{field}: byte 0x{byte:02X} not in character table")
            }
            Self::TooLong { field, max, actual } => {
                write!(f, "{field}: encoded text is {actual} bytes, field holds {max}")
            }
            Self::MissingToken { field, token } => {
                write!(f, "{field}: stored text is missing the literal {token:?}")
            }
        }
    }
}

impl Error for EncodingError {}

/// Failures in the record layout: short buffers, enum bytes outside their
/// defined sets, and fixed-count fields with the wrong count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    TruncatedBuffer {
        field: &'static str,
        offset: usize,
        needed: usize,
        available: usize,
    },
    /// An enumerated byte field holds a value outside its defined set.
    /// Never clamped to a default: that would mask corrupt save data.
    InvalidEnumValue {
        field: &'static str,
        offset: usize,
        value: u8,
    },
    UnexpectedStatCount {
        expected: usize,
        actual: usize,
    },
    UnexpectedFlagCount {
        expected: usize,
        actual: usize,
    },
    LengthMismatch {
        context: &'static str,
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::TruncatedBuffer {
                field,
                offset,
                needed,
                available,
            } => write!(
                f,
                "{field}: buffer truncated at offset 0x{offset:X}: need {needed} bytes, {available} available"
            ),
            Self::InvalidEnumValue { field, offset, value } => write!(
                f,
                "{field}: invalid value {value} at offset 0x{offset:X}"
            ),
            Self::UnexpectedStatCount { expected, actual } => {
                write!(f, "stat block holds {actual} stats, expected exactly {expected}")
            }
            Self::UnexpectedFlagCount { expected, actual } => {
                write!(f, "event flag table holds {actual} flags, expected exactly {expected}")
            }
            Self::LengthMismatch {
                context,
                expected,
                actual,
            } => write!(f, "{context}: got {actual} bytes, expected {expected}"),
        }
    }
}

impl Error for LayoutError {}

/// Any failure while decoding or encoding a save record. Both directions are
/// all-or-nothing: a record that fails anywhere is rejected wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveError {
    Encoding(EncodingError),
    Layout(LayoutError),
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encoding(e) => write!(f, "text encoding: {e}"),
            Self::Layout(e) => write!(f, "record layout: {e}"),
        }
    }
}

impl Error for SaveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Encoding(e) => Some(e),
            Self::Layout(e) => Some(e),
        }
    }
}

impl From<EncodingError> for SaveError {
    fn from(e: EncodingError) -> Self {
        Self::Encoding(e)
    }
}

impl From<LayoutError> for SaveError {
    fn from(e: LayoutError) -> Self {
        Self::Layout(e)
    }
}
