use alloc::vec::Vec;
use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use crate::buffer::MString;
use crate::error::MStringError;

// Equality, ordering and hashing look at the content only, never at the capacity.

impl PartialEq for MString {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for MString {}

impl PartialOrd for MString {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MString {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl Hash for MString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl PartialEq<[u8]> for MString {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<&[u8]> for MString {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_bytes() == *other
    }
}

impl<const N: usize> PartialEq<&[u8; N]> for MString {
    fn eq(&self, other: &&[u8; N]) -> bool {
        self.as_bytes() == other.as_slice()
    }
}

impl PartialEq<str> for MString {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for MString {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl AsRef<[u8]> for MString {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Borrow<[u8]> for MString {
    fn borrow(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl TryFrom<&[u8]> for MString {
    type Error = MStringError;

    fn try_from(content: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(content)
    }
}

impl TryFrom<&str> for MString {
    type Error = MStringError;

    fn try_from(content: &str) -> Result<Self, Self::Error> {
        Self::from_bytes(content.as_bytes())
    }
}

impl From<MString> for Vec<u8> {
    fn from(string: MString) -> Self {
        string.into_bytes()
    }
}

impl fmt::Debug for MString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MString")
            .field("content", &format_args!("\"{}\"", self.as_bytes().escape_ascii()))
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}

/// Writes the content with non-printable and non-ASCII bytes escaped.
impl fmt::Display for MString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_bytes().escape_ascii())
    }
}

impl fmt::Write for MString {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s).map_err(|_| fmt::Error)
    }

    fn write_char(&mut self, c: char) -> fmt::Result {
        let mut encoded = [0u8; 4];
        self.append(c.encode_utf8(&mut encoded).as_bytes())
            .map_err(|_| fmt::Error)
    }
}
