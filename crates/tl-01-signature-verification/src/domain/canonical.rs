//! # Canonical Encoding
//!
//! The byte layout signed by clients and re-derived by every replica.
//! Layout rules:
//!
//! - the payload starts with a length-prefixed domain tag, so a signature
//!   for one request kind is never valid for another
//! - byte strings are a `u64` big-endian length followed by the bytes
//! - integers are fixed-width big-endian
//! - an optional field is one presence byte (`0` absent, `1` present)
//!   followed by the value when present
//!
//! Field order is fixed by the caller's encoding function, never by a
//! serializer's map ordering.

/// Builder for canonical signing payloads.
#[derive(Debug, Clone)]
pub struct CanonicalEncoder {
    buf: Vec<u8>,
}

impl CanonicalEncoder {
    pub fn new(domain: &str) -> Self {
        Self {
            buf: Vec::with_capacity(128),
        }
        .str(domain)
    }

    pub fn bytes(mut self, value: &[u8]) -> Self {
        self.buf.extend_from_slice(&(value.len() as u64).to_be_bytes());
        self.buf.extend_from_slice(value);
        self
    }

    pub fn str(self, value: &str) -> Self {
        self.bytes(value.as_bytes())
    }

    pub fn u8(mut self, value: u8) -> Self {
        self.buf.push(value);
        self
    }

    pub fn u64(mut self, value: u64) -> Self {
        self.buf.extend_from_slice(&value.to_be_bytes());
        self
    }

    pub fn i64(mut self, value: i64) -> Self {
        self.buf.extend_from_slice(&value.to_be_bytes());
        self
    }

    pub fn optional<T>(self, value: Option<T>, encode: impl FnOnce(Self, T) -> Self) -> Self {
        match value {
            None => self.u8(0),
            Some(inner) => encode(self.u8(1), inner),
        }
    }

    pub fn finish(self) -> Vec<u8> {
        self.buf
    }
}
