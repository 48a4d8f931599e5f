//! Byte and UTF-8 storage for dynval-value
//!
//! [`ByteBuf`] wraps `bytes::Bytes`:
//! - Reference-counted storage
//! - Zero-copy cloning
//! - Hex and base64 encodings used by the ETV codec and the JSON bridge
//!
//! [`Utf8Buf`] is the same buffer with a validity guarantee.

use std::borrow::Cow;
use std::fmt;

use base64::Engine;
use bytes::Bytes;

/// Immutable binary payload
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByteBuf {
    inner: Bytes,
}

impl ByteBuf {
    /// Create from an owned vector
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            inner: Bytes::from(data),
        }
    }

    /// Create from a byte slice (allocates)
    pub fn from_slice(data: &[u8]) -> Self {
        Self {
            inner: Bytes::copy_from_slice(data),
        }
    }

    /// Wrap an existing `bytes::Bytes` without copying
    pub fn from_bytes(inner: Bytes) -> Self {
        Self { inner }
    }

    /// Decode from a hex string (either case)
    pub fn from_hex(encoded: &str) -> Result<Self, hex::FromHexError> {
        hex::decode(encoded).map(Self::new)
    }

    /// Lowercase hex encoding
    pub fn to_hex(&self) -> String {
        hex::encode(&self.inner)
    }

    /// Decode from standard base64
    pub fn from_base64(encoded: &str) -> Result<Self, base64::DecodeError> {
        base64::engine::general_purpose::STANDARD
            .decode(encoded)
            .map(Self::new)
    }

    /// Standard base64 encoding
    pub fn to_base64(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(&self.inner)
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.inner
    }

    /// Underlying shared buffer
    #[inline]
    pub fn as_bytes_buf(&self) -> &Bytes {
        &self.inner
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Concatenate with another buffer
    pub fn concat(&self, other: &ByteBuf) -> ByteBuf {
        let mut joined = Vec::with_capacity(self.len() + other.len());
        joined.extend_from_slice(&self.inner);
        joined.extend_from_slice(&other.inner);
        Self::new(joined)
    }

    /// The payload as text if it is valid UTF-8
    pub fn to_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.inner).ok()
    }

    /// Lossy UTF-8 decoding (invalid sequences become U+FFFD)
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.inner)
    }
}

impl From<Vec<u8>> for ByteBuf {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl From<&[u8]> for ByteBuf {
    fn from(data: &[u8]) -> Self {
        Self::from_slice(data)
    }
}

impl From<Bytes> for ByteBuf {
    fn from(inner: Bytes) -> Self {
        Self::from_bytes(inner)
    }
}

impl AsRef<[u8]> for ByteBuf {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

/// UTF-8 text stored in a [`ByteBuf`]
///
/// The only way in is through `&str`/`String`, so the payload is always valid
/// UTF-8 and [`Utf8Buf::as_str`] never fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Utf8Buf {
    buf: ByteBuf,
}

impl Utf8Buf {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            buf: ByteBuf::new(text.into().into_bytes()),
        }
    }

    /// Validate raw bytes as UTF-8
    pub fn from_utf8(buf: ByteBuf) -> Option<Self> {
        buf.to_str().is_some().then_some(Self { buf })
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        // Constructors only accept valid UTF-8.
        std::str::from_utf8(self.buf.as_slice()).unwrap_or_default()
    }

    /// Shared byte storage
    #[inline]
    pub fn as_byte_buf(&self) -> &ByteBuf {
        &self.buf
    }

    /// Length in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// UTF-16 code units of the text
    pub fn to_utf16(&self) -> Vec<u16> {
        self.as_str().encode_utf16().collect()
    }
}

impl fmt::Display for Utf8Buf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Utf8Buf {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Utf8Buf {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl AsRef<str> for Utf8Buf {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
