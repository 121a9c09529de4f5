// ============================================================================
// Dynamic String
// Growable, exclusively owned byte buffer with exact-fit growth
// ============================================================================

use super::errors::{BufferError, BufferResult};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

/// Starting capacity of a freshly initialised buffer, terminator included.
pub const DEFAULT_CAPACITY: usize = 20;

/// Byte that marks the end of the meaningful content.
pub const TERMINATOR: u8 = 0;

/// Growable character buffer that all digit-string arithmetic writes through.
///
/// The buffer owns `capacity` bytes of storage, of which the first `length`
/// are meaningful. Every byte from `length` onward is [`TERMINATOR`], so
/// `capacity >= length + 1` always holds, including after a failed call.
///
/// # Growth policy
///
/// Capacity grows to exactly what the current write needs and is never
/// decreased. This keeps memory minimal for the batch-style writes the
/// arithmetic engine performs, but a loop of N single-byte appends past the
/// starting capacity costs N reallocations. Callers that build long texts one
/// byte at a time should call [`reserve_exact`](Self::reserve_exact) first.
///
/// # Example
/// ```
/// use decimal_strings::buffer::DynamicString;
///
/// let mut buf = DynamicString::init(Some("1234"))?;
/// buf.append_char(b'5')?.insert_text("0", 0)?;
/// assert_eq!(buf, "012345");
/// # Ok::<(), decimal_strings::buffer::BufferError>(())
/// ```
#[derive(Clone)]
pub struct DynamicString {
    /// Backing store; its length is the logical capacity
    content: Vec<u8>,
    /// Number of meaningful bytes, terminator excluded
    length: usize,
}

/// Cut `text` at its first terminator byte, if any.
fn until_terminator(text: &[u8]) -> &[u8] {
    match text.iter().position(|&b| b == TERMINATOR) {
        Some(end) => &text[..end],
        None => text,
    }
}

impl DynamicString {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create an empty buffer with [`DEFAULT_CAPACITY`].
    pub fn new() -> BufferResult<Self> {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a buffer with the default capacity holding `text` (or nothing).
    ///
    /// # Errors
    /// Returns `AllocationFailed` if the initial storage cannot be obtained.
    pub fn init(text: Option<&str>) -> BufferResult<Self> {
        let mut buffer = Self::new()?;
        buffer.set_text(text.unwrap_or(""))?;
        Ok(buffer)
    }

    /// Create an empty buffer with room for `capacity` bytes (at least one).
    pub fn with_capacity(capacity: usize) -> BufferResult<Self> {
        let capacity = capacity.max(1);
        let mut content = Vec::new();
        content
            .try_reserve_exact(capacity)
            .map_err(|_| BufferError::AllocationFailed {
                requested: capacity,
            })?;
        content.resize(capacity, TERMINATOR);
        Ok(Self { content, length: 0 })
    }

    /// Release the owned storage.
    ///
    /// Equivalent to dropping the buffer; spelled out for call sites that
    /// want the hand-off to be visible.
    pub fn release(self) {
        tracing::trace!(capacity = self.capacity(), "releasing buffer");
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of meaningful bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.length
    }

    /// Check if the buffer holds no text.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Total allocated slots, terminator included.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.content.len()
    }

    /// Meaningful content, terminator excluded.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.content[..self.length]
    }

    /// Content as text, replacing any invalid UTF-8 written through `set_char`.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.as_bytes())
    }

    // ========================================================================
    // Growth
    // ========================================================================

    /// Grow the store to exactly `capacity` bytes.
    ///
    /// Requests at or below the current capacity are a no-op; capacity never
    /// shrinks. Every other growth in this type goes through here.
    ///
    /// # Errors
    /// Returns `AllocationFailed` and leaves the buffer untouched if the
    /// allocator refuses.
    pub fn reserve_exact(&mut self, capacity: usize) -> BufferResult<&mut Self> {
        let current = self.capacity();
        if capacity <= current {
            return Ok(self);
        }

        if self.content.try_reserve_exact(capacity - current).is_err() {
            tracing::warn!(current, requested = capacity, "buffer growth failed");
            return Err(BufferError::AllocationFailed {
                requested: capacity,
            });
        }

        tracing::trace!(from = current, to = capacity, "growing buffer");
        self.content.resize(capacity, TERMINATOR);
        Ok(self)
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Replace all content with `text`.
    ///
    /// Capacity becomes `max(text.len() + 1, capacity)`. Text after an
    /// embedded terminator byte is ignored.
    ///
    /// # Errors
    /// Returns `AllocationFailed` with the previous content intact.
    pub fn set_text(&mut self, text: impl AsRef<[u8]>) -> BufferResult<&mut Self> {
        let text = until_terminator(text.as_ref());
        self.reserve_exact(text.len() + 1)?;

        self.content[..text.len()].copy_from_slice(text);
        if self.length > text.len() {
            self.content[text.len()..self.length].fill(TERMINATOR);
        }
        self.length = text.len();
        Ok(self)
    }

    /// Write a single byte at `pos`.
    ///
    /// - `pos < len`: overwrite in place; writing the terminator truncates
    ///   the buffer to `pos`.
    /// - `pos == len`: append, growing by exactly one slot when the buffer is
    ///   full. Appending the terminator is a no-op.
    /// - `pos > len`: rejected with `OutOfBounds`.
    pub fn set_char(&mut self, byte: u8, pos: usize) -> BufferResult<&mut Self> {
        match pos.cmp(&self.length) {
            Ordering::Less => {
                self.content[pos] = byte;
                if byte == TERMINATOR {
                    self.content[pos..self.length].fill(TERMINATOR);
                    self.length = pos;
                }
            },
            Ordering::Equal => {
                if byte == TERMINATOR {
                    return Ok(self);
                }
                if self.length + 1 == self.capacity() {
                    self.reserve_exact(self.capacity() + 1)?;
                }
                self.content[pos] = byte;
                self.length += 1;
            },
            Ordering::Greater => {
                tracing::warn!(
                    pos,
                    length = self.length,
                    byte,
                    "set_char position out of bounds"
                );
                return Err(BufferError::OutOfBounds {
                    pos,
                    length: self.length,
                });
            },
        }
        Ok(self)
    }

    /// Append a single byte; shorthand for `set_char(byte, len())`.
    #[inline]
    pub fn append_char(&mut self, byte: u8) -> BufferResult<&mut Self> {
        self.set_char(byte, self.length)
    }

    /// Splice `text` in at `pos`, shifting the tail right.
    ///
    /// # Errors
    /// - `EmptyInsert` if `text` is empty
    /// - `OutOfBounds` if `pos > len()`
    /// - `AllocationFailed` if the combined text does not fit and growth fails
    ///
    /// The buffer is unchanged in every error case.
    pub fn insert_text(&mut self, text: impl AsRef<[u8]>, pos: usize) -> BufferResult<&mut Self> {
        let text = until_terminator(text.as_ref());
        if text.is_empty() {
            tracing::warn!(pos, length = self.length, "refusing to insert empty text");
            return Err(BufferError::EmptyInsert);
        }
        if pos > self.length {
            tracing::warn!(pos, length = self.length, "insert position out of bounds");
            return Err(BufferError::OutOfBounds {
                pos,
                length: self.length,
            });
        }

        let new_length = self.length + text.len();
        self.reserve_exact(new_length + 1)?;

        self.content.copy_within(pos..self.length, pos + text.len());
        self.content[pos..pos + text.len()].copy_from_slice(text);
        self.length = new_length;
        Ok(self)
    }

    /// Drop all content, keeping the capacity.
    pub fn clear(&mut self) -> &mut Self {
        self.content[..self.length].fill(TERMINATOR);
        self.length = 0;
        self
    }

    /// Reverse the meaningful content in place.
    pub fn reverse(&mut self) -> &mut Self {
        self.content[..self.length].reverse();
        self
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl PartialEq for DynamicString {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for DynamicString {}

impl PartialEq<str> for DynamicString {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for DynamicString {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl AsRef<[u8]> for DynamicString {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Debug for DynamicString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DynamicString({:?}, len={}, capacity={})",
            self.to_string_lossy(),
            self.length,
            self.capacity()
        )
    }
}

impl fmt::Display for DynamicString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

// ============================================================================
// Tests
// ============================================================================
