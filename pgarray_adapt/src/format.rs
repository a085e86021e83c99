use derive_more::Display;

/// A wire format.
///
/// The discriminants are the format codes of the frontend/backend protocol.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub enum Format {
    /// The text format.
    #[display("text")]
    Text = 0,
    /// The binary format.
    #[display("binary")]
    Binary = 1,
}

impl Format {
    /// Both formats, text first.
    pub const ALL: [Self; 2] = [Self::Text, Self::Binary];

    /// Return the protocol format code.
    #[must_use]
    pub const fn code(self) -> i16 {
        self as i16
    }

    /// Return the format with the protocol format `code`, if any.
    #[must_use]
    pub const fn from_code(code: i16) -> Option<Self> {
        match code {
            0 => Some(Self::Text),
            1 => Some(Self::Binary),
            _ => None,
        }
    }
}
