#![no_std]

//! `MString`: a growable, heap-backed byte string.
//!
//! `MString` owns one contiguous block of bytes and tracks the logical length
//! separately from the allocated capacity. Appends grow the storage to the next
//! power of two, so a long sequence of appends costs amortized O(1) per byte.
//!
//! The content is a plain sequence of bytes. There is no encoding awareness and
//! comparison is ordinal.
//!
//! # Capacity Rules
//!
//! - `MString::new()`: length 0, capacity 1
//! - `MString::from_bytes(s)`: capacity exactly `s.len() + 1`
//! - `assign(s)`: capacity exactly `s.len() + 1`, or 0 when `s` is empty
//! - every other growth: the next power of two covering the new length plus one
//! - capacity never shrinks, except through `assign` and `release`
//!
//! The extra slot always holds a zero terminator, so the content can be viewed as
//! a C string without copying.
//!
//! ```
//! # use mstring::MString;
//! let mut s = MString::from_bytes(b"Hello").unwrap();
//! assert_eq!(s.len(), 5);
//! assert_eq!(s.capacity(), 6);
//!
//! s.push(b'!').unwrap();
//! assert_eq!(s.capacity(), 8);
//! assert_eq!(s, "Hello!");
//! assert_eq!(s.as_bytes_with_nul(), b"Hello!\0");
//! ```
//!
//! # Failure Handling
//!
//! Every operation that may allocate returns `Result<_, MStringError>`. A failed
//! operation leaves the string exactly as it was, and the failure is also emitted
//! as a `tracing` warning event.
//!
//! ```
//! # use mstring::{MString, MStringError};
//! let mut s = MString::from_bytes(b"abc").unwrap();
//!
//! assert_eq!(
//!     s.reserve(usize::MAX),
//!     Err(MStringError::CapacityOverflow { requested: usize::MAX })
//! );
//! assert_eq!(s, "abc");
//! assert_eq!(s.capacity(), 4);
//! ```
//!
//! # Access and Search
//!
//! Accessors are bounds-checked against the length and return `None` past the end.
//! Searches return `None` when nothing matches.
//!
//! ```
//! # use mstring::MString;
//! let s = MString::from_bytes(b"abcabc").unwrap();
//!
//! assert_eq!(s.at(1), Some(b'b'));
//! assert_eq!(s.at(6), None);
//! assert_eq!(s.front(), Some(&b'a'));
//! assert_eq!(s.back(), Some(&b'c'));
//!
//! assert_eq!(s.find_char(b'c'), Some(2));
//! assert_eq!(s.find(b"ca"), Some(2));
//! assert_eq!(s.find(b"x"), None);
//! ```
//!
//! # Iterator Support
//!
//! ```
//! # use mstring::MString;
//! let s = MString::from_bytes(b"abc").unwrap();
//!
//! let forward: Vec<u8> = s.iter().collect();
//! let backward: Vec<u8> = s.iter_rev().collect();
//! assert_eq!(forward, b"abc");
//! assert_eq!(backward, b"cba");
//!
//! for byte in &s {
//!     assert!(byte.is_ascii_lowercase());
//! }
//! ```
//!
//! ## `no_std` Compatibility
//!
//! The crate only needs `alloc`. Enable the optional `std` feature to forward
//! `std` support to the error and logging dependencies:
//! ```toml
//! [dependencies]
//! mstring = { version = "0.1", features = ["std"] }
//! ```

extern crate alloc;

mod buffer;
mod error;
mod growth;
mod impls;
mod iter;

// Re-export public types and constants
pub use buffer::{MString, INITIAL_CAPACITY};
pub use error::MStringError;
pub use iter::{MStringIter, MStringRevIter};
