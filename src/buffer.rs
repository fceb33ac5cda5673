use alloc::vec::Vec;
use core::cmp::Ordering;
use core::ffi::CStr;
use core::mem;

use tracing::{trace, warn};

use crate::error::MStringError;
use crate::growth::next_capacity;
use crate::iter::{MStringIter, MStringRevIter};

/// Capacity of a freshly constructed empty string: room for the terminator only.
pub const INITIAL_CAPACITY: usize = 1;

/// A growable, heap-backed byte string with power-of-two capacity growth.
///
/// Capacity always counts one terminator slot: whenever `capacity() > 0`,
/// `capacity() > len()` and the byte right after the content is zero.
/// A string with capacity 0 owns no allocation.
#[derive(Clone, Default)]
pub struct MString {
    // storage.len() is the capacity, every byte of it initialized
    storage: Vec<u8>,
    len: usize,
}

impl MString {
    /// Creates an empty string with [`INITIAL_CAPACITY`].
    ///
    /// # Errors
    ///
    /// Returns `MStringError::AllocationFailed` if the initial allocation fails.
    pub fn new() -> Result<Self, MStringError> {
        let storage = allocate_zeroed(INITIAL_CAPACITY).map_err(|err| report(err, 0, 0))?;
        Ok(Self { storage, len: 0 })
    }

    /// Creates an empty string and reserves room for at least `capacity` bytes,
    /// rounded up to a power of two.
    ///
    /// # Errors
    ///
    /// Returns `MStringError::AllocationFailed` or `MStringError::CapacityOverflow`
    /// if the storage cannot be provided.
    pub fn with_capacity(capacity: usize) -> Result<Self, MStringError> {
        let mut string = Self::new()?;
        string.reserve(capacity)?;
        Ok(string)
    }

    /// Creates a string holding a copy of `content`.
    ///
    /// The capacity is exactly `content.len() + 1`.
    ///
    /// # Errors
    ///
    /// Returns `MStringError::AllocationFailed` if the allocation fails.
    pub fn from_bytes(content: &[u8]) -> Result<Self, MStringError> {
        let storage = allocate_exact(content).map_err(|err| report(err, 0, 0))?;
        Ok(Self {
            storage,
            len: content.len(),
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn report(&self, error: MStringError) -> MStringError {
        report(error, self.capacity(), self.len)
    }

    /// Reallocates the storage to the power of two covering `requested`.
    ///
    /// Does nothing if the current capacity already covers that power of two.
    /// On failure the storage is left untouched.
    fn grow_to_at_least(&mut self, requested: usize) -> Result<(), MStringError> {
        let target = next_capacity(requested)
            .ok_or_else(|| self.report(MStringError::CapacityOverflow { requested }))?;
        let current = self.capacity();
        if target <= current {
            return Ok(());
        }

        self.storage
            .try_reserve_exact(target - current)
            .map_err(|_| self.report(MStringError::AllocationFailed { requested: target }))?;
        self.storage.resize(target, 0);
        trace!(from = current, to = target, "grew mstring storage");
        Ok(())
    }

    /// Makes room for `additional` more content bytes plus the terminator.
    ///
    /// Returns the length the string will have once those bytes are written.
    fn ensure_room(&mut self, additional: usize) -> Result<usize, MStringError> {
        let Some(requested) = self
            .len
            .checked_add(additional)
            .and_then(|new_len| new_len.checked_add(1))
        else {
            return Err(self.report(MStringError::CapacityOverflow {
                requested: self.len.saturating_add(additional),
            }));
        };

        if requested >= self.capacity() {
            self.grow_to_at_least(requested)?;
        }
        Ok(requested - 1)
    }

    /// Ensures the capacity is at least the next power of two `>= size`.
    ///
    /// Never shrinks.
    ///
    /// # Errors
    ///
    /// Returns `MStringError::AllocationFailed` or `MStringError::CapacityOverflow`.
    /// The string is unchanged in that case.
    pub fn reserve(&mut self, size: usize) -> Result<(), MStringError> {
        self.grow_to_at_least(size)
    }

    /// Sets the length to `new_len`.
    ///
    /// Shrinking keeps the capacity. Growing zero-fills the newly exposed bytes.
    ///
    /// # Errors
    ///
    /// Returns `MStringError::AllocationFailed` or `MStringError::CapacityOverflow`
    /// if growing fails. The string is unchanged in that case.
    #[allow(clippy::indexing_slicing)] // new_len < capacity on every branch
    pub fn resize(&mut self, new_len: usize) -> Result<(), MStringError> {
        match new_len.cmp(&self.len) {
            Ordering::Less => {
                self.storage[new_len] = 0;
                self.len = new_len;
            }
            Ordering::Equal => {}
            Ordering::Greater => {
                let new_len = self.ensure_room(new_len - self.len)?;
                self.storage[self.len..=new_len].fill(0);
                self.len = new_len;
            }
        }
        Ok(())
    }

    /// Replaces the whole content with a copy of `content`.
    ///
    /// The new capacity is exactly `content.len() + 1`. Assigning empty content
    /// releases the storage, leaving both length and capacity at 0.
    ///
    /// # Errors
    ///
    /// Returns `MStringError::AllocationFailed` if the new storage cannot be
    /// allocated. The old content is kept in that case.
    pub fn assign(&mut self, content: &[u8]) -> Result<(), MStringError> {
        if content.is_empty() {
            self.release();
            return Ok(());
        }

        let storage = allocate_exact(content).map_err(|err| self.report(err))?;
        self.storage = storage;
        self.len = content.len();
        Ok(())
    }

    /// Appends one byte.
    ///
    /// # Errors
    ///
    /// Returns `MStringError::AllocationFailed` or `MStringError::CapacityOverflow`
    /// if the string has to grow and cannot. The string is unchanged in that case.
    #[allow(clippy::indexing_slicing)] // ensure_room guarantees new_len < capacity
    pub fn push(&mut self, byte: u8) -> Result<(), MStringError> {
        let new_len = self.ensure_room(1)?;
        self.storage[self.len] = byte;
        self.storage[new_len] = 0;
        self.len = new_len;
        Ok(())
    }

    /// Appends a copy of `content`.
    ///
    /// # Errors
    ///
    /// Returns `MStringError::AllocationFailed` or `MStringError::CapacityOverflow`
    /// if the string has to grow and cannot. The string is unchanged in that case.
    #[allow(clippy::indexing_slicing)] // ensure_room guarantees new_len < capacity
    pub fn append(&mut self, content: &[u8]) -> Result<(), MStringError> {
        if content.is_empty() {
            return Ok(());
        }

        let new_len = self.ensure_room(content.len())?;
        self.storage[self.len..new_len].copy_from_slice(content);
        self.storage[new_len] = 0;
        self.len = new_len;
        Ok(())
    }

    /// Appends the bytes of `content`.
    ///
    /// # Errors
    ///
    /// Same as [`MString::append`].
    pub fn push_str(&mut self, content: &str) -> Result<(), MStringError> {
        self.append(content.as_bytes())
    }

    /// Removes the last byte and returns it, or `None` if the string is empty.
    pub fn pop(&mut self) -> Option<u8> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        self.storage.get_mut(self.len).map(|last| mem::replace(last, 0))
    }

    /// Removes the last byte and returns it.
    ///
    /// # Errors
    ///
    /// Returns `MStringError::EmptyString` if the string is empty.
    pub fn try_pop(&mut self) -> Result<u8, MStringError> {
        self.pop().ok_or(MStringError::EmptyString)
    }

    /// Zero-fills the whole storage and sets the length to 0.
    ///
    /// The capacity is kept, so this costs O(capacity).
    pub fn clear(&mut self) {
        self.storage.fill(0);
        self.len = 0;
    }

    /// Frees the storage, leaving an empty string with capacity 0.
    ///
    /// Dropping the string does the same; calling this more than once is harmless.
    pub fn release(&mut self) {
        self.storage = Vec::new();
        self.len = 0;
    }

    /// Three-way ordinal comparison of the contents.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }

    /// Returns the offset of the first `byte` in the content.
    #[must_use]
    pub fn find_char(&self, byte: u8) -> Option<usize> {
        self.as_bytes().iter().position(|&b| b == byte)
    }

    /// Returns the offset of the first occurrence of `needle` in the content.
    ///
    /// An empty needle is found at offset 0.
    #[must_use]
    pub fn find(&self, needle: &[u8]) -> Option<usize> {
        if needle.is_empty() {
            return Some(0);
        }
        self.as_bytes()
            .windows(needle.len())
            .position(|window| window == needle)
    }

    #[must_use]
    pub fn contains(&self, needle: &[u8]) -> bool {
        self.find(needle).is_some()
    }

    /// Returns the byte at `index`, or `None` if `index >= len()`.
    #[must_use]
    pub fn at(&self, index: usize) -> Option<u8> {
        self.get(index).copied()
    }

    /// Returns the byte at `index`.
    ///
    /// # Errors
    ///
    /// Returns `MStringError::IndexOutOfBounds` if `index >= len()`.
    pub fn try_at(&self, index: usize) -> Result<u8, MStringError> {
        self.at(index).ok_or(MStringError::IndexOutOfBounds {
            index,
            length: self.len,
        })
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&u8> {
        self.as_bytes().get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut u8> {
        self.as_bytes_mut().get_mut(index)
    }

    #[must_use]
    pub fn front(&self) -> Option<&u8> {
        self.as_bytes().first()
    }

    pub fn front_mut(&mut self) -> Option<&mut u8> {
        self.as_bytes_mut().first_mut()
    }

    #[must_use]
    pub fn back(&self) -> Option<&u8> {
        self.as_bytes().last()
    }

    pub fn back_mut(&mut self) -> Option<&mut u8> {
        self.as_bytes_mut().last_mut()
    }

    /// First byte in reverse order, i.e. the last byte of the content.
    #[must_use]
    pub fn rfront(&self) -> Option<&u8> {
        self.back()
    }

    pub fn rfront_mut(&mut self) -> Option<&mut u8> {
        self.back_mut()
    }

    /// Last byte in reverse order, i.e. the first byte of the content.
    #[must_use]
    pub fn rback(&self) -> Option<&u8> {
        self.front()
    }

    pub fn rback_mut(&mut self) -> Option<&mut u8> {
        self.front_mut()
    }

    #[must_use]
    #[allow(clippy::indexing_slicing)] // len <= capacity
    pub fn as_bytes(&self) -> &[u8] {
        &self.storage[..self.len]
    }

    /// Mutable view of the content. The length cannot change through it.
    #[allow(clippy::indexing_slicing)] // len <= capacity
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.storage[..self.len]
    }

    /// Content followed by its zero terminator.
    #[must_use]
    #[allow(clippy::indexing_slicing)] // capacity > len whenever capacity > 0
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        if self.storage.is_empty() {
            return b"\0";
        }
        &self.storage[..=self.len]
    }

    /// Content as a C string, cut at the first zero byte.
    ///
    /// # Panics
    ///
    /// May panic if the terminator invariant is broken (internal validation failure).
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn as_c_str(&self) -> &CStr {
        CStr::from_bytes_until_nul(self.as_bytes_with_nul())
            .expect("Terminator written by every mutation")
    }

    /// Consumes the string and returns its content.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        let Self { mut storage, len } = self;
        storage.truncate(len);
        storage
    }

    /// Returns an iterator over the bytes of the content.
    #[must_use]
    pub fn iter(&self) -> MStringIter<'_> {
        MStringIter::new(self.as_bytes())
    }

    /// Returns an iterator over the bytes of the content, last byte first.
    #[must_use]
    pub fn iter_rev(&self) -> MStringRevIter<'_> {
        self.iter().rev()
    }
}

fn report(error: MStringError, capacity: usize, length: usize) -> MStringError {
    warn!(%error, capacity, length, "mstring storage request failed");
    error
}

fn allocate_zeroed(capacity: usize) -> Result<Vec<u8>, MStringError> {
    let mut storage = Vec::new();
    storage
        .try_reserve_exact(capacity)
        .map_err(|_| MStringError::AllocationFailed {
            requested: capacity,
        })?;
    storage.resize(capacity, 0);
    Ok(storage)
}

fn allocate_exact(content: &[u8]) -> Result<Vec<u8>, MStringError> {
    let requested = content
        .len()
        .checked_add(1)
        .ok_or(MStringError::CapacityOverflow {
            requested: content.len(),
        })?;

    let mut storage = Vec::new();
    storage
        .try_reserve_exact(requested)
        .map_err(|_| MStringError::AllocationFailed { requested })?;
    storage.extend_from_slice(content);
    storage.push(0);
    Ok(storage)
}
