//! Pad input alphabet.

use std::fmt;

/// Largest button alphabet the canonical one-character encoding supports.
pub const MAX_BUTTONS: usize = 26;

/// Index of a button in the externally-defined control-pad alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Button(pub u8);

/// One discrete input event: a button press or an explicit empty step.
///
/// The empty step is a real variant, not an absent value, so every pulse has
/// a canonical encoding and keys stay injective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pulse {
    Press(Button),
    NoInput,
}

impl Pulse {
    /// Canonical one-character encoding. Stripping the last character of a
    /// child key always yields the parent key.
    #[inline]
    pub fn encode(self) -> char {
        match self {
            Pulse::Press(Button(id)) => {
                debug_assert!((id as usize) < MAX_BUTTONS);
                (b'a' + id) as char
            }
            Pulse::NoInput => '.',
        }
    }
}

impl fmt::Display for Pulse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

/// All pulses available with a `buttons`-sized alphabet: each button press,
/// then the empty pulse last.
pub(crate) fn alphabet(buttons: usize) -> Vec<Pulse> {
    (0..buttons as u8)
        .map(|id| Pulse::Press(Button(id)))
        .chain(std::iter::once(Pulse::NoInput))
        .collect()
}
