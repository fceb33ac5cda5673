use core::iter::{FusedIterator, Rev};

use crate::buffer::MString;

/// Iterator over the bytes of an `MString`
///
/// This iterator implements `Clone` and can be walked from both ends.
#[derive(Clone, Debug)]
pub struct MStringIter<'a> {
    data: &'a [u8],
    front: usize,
    back: usize,
}

/// Reverse iterator over the bytes of an `MString`
pub type MStringRevIter<'a> = Rev<MStringIter<'a>>;

impl<'a> MStringIter<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            front: 0,
            back: data.len(),
        }
    }
}

impl Iterator for MStringIter<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let byte = self.data.get(self.front).copied();
        self.front += 1;
        byte
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for MStringIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.data.get(self.back).copied()
    }
}

impl ExactSizeIterator for MStringIter<'_> {}

impl FusedIterator for MStringIter<'_> {}

impl<'a> IntoIterator for &'a MString {
    type Item = u8;
    type IntoIter = MStringIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
