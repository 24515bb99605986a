//! Write-side codec trait, borsh collection helpers and the
//! bounds-checked decoding cursor.

use solana_pubkey::Pubkey;

use crate::bytes;
use crate::discriminator::Discriminator;
use crate::error::CodecError;
use crate::filter::Filter;

/// Fixed borsh wire encoding of a value.
///
/// `write` places the encoding at `data[offset..]` and returns the number
/// of bytes written; `encoded_len` must equal that count exactly, so
/// builders can allocate payload buffers up front and fill them without
/// reallocation.
pub trait Codec {
    fn encoded_len(&self) -> usize;
    fn write(&self, data: &mut [u8], offset: usize) -> usize;
}

macro_rules! codec_fixed {
    ($ty:ty, $put:path, $width:expr) => {
        impl Codec for $ty {
            #[inline]
            fn encoded_len(&self) -> usize {
                $width
            }

            #[inline]
            fn write(&self, data: &mut [u8], offset: usize) -> usize {
                $put(data, offset, *self)
            }
        }
    };
}

codec_fixed!(u8, bytes::put_u8, 1);
codec_fixed!(i8, bytes::put_i8, 1);
codec_fixed!(bool, bytes::put_bool, 1);
codec_fixed!(u16, bytes::put_u16, 2);
codec_fixed!(i16, bytes::put_i16, 2);
codec_fixed!(u32, bytes::put_u32, 4);
codec_fixed!(i32, bytes::put_i32, 4);
codec_fixed!(u64, bytes::put_u64, 8);
codec_fixed!(i64, bytes::put_i64, 8);
codec_fixed!(u128, bytes::put_u128, 16);
codec_fixed!(i128, bytes::put_i128, 16);
codec_fixed!(f64, bytes::put_f64, 8);

impl Codec for Pubkey {
    #[inline]
    fn encoded_len(&self) -> usize {
        bytes::PUBKEY_BYTES
    }

    #[inline]
    fn write(&self, data: &mut [u8], offset: usize) -> usize {
        bytes::put_pubkey(data, offset, self)
    }
}

impl<const N: usize> Codec for [u8; N] {
    #[inline]
    fn encoded_len(&self) -> usize {
        N
    }

    #[inline]
    fn write(&self, data: &mut [u8], offset: usize) -> usize {
        bytes::put_array(data, offset, self)
    }
}

impl<const N: usize> Codec for [u64; N] {
    #[inline]
    fn encoded_len(&self) -> usize {
        N * 8
    }

    #[inline]
    fn write(&self, data: &mut [u8], offset: usize) -> usize {
        bytes::put_u64_array(data, offset, self)
    }
}

// ---------------------------------------------------------------------------
// Length-prefixed collections and optionals
// ---------------------------------------------------------------------------

/// Borsh vectors carry a 4-byte little-endian element count. An empty
/// vector still encodes its prefix, so no encoding is ever zero length.
pub const VECTOR_PREFIX: usize = 4;

pub fn len_byte_vector(value: &[u8]) -> usize {
    VECTOR_PREFIX + value.len()
}

pub fn write_byte_vector(value: &[u8], data: &mut [u8], offset: usize) -> usize {
    let mut i = offset;
    i += bytes::put_u32(data, i, value.len() as u32);
    data[i..i + value.len()].copy_from_slice(value);
    i += value.len();
    i - offset
}

pub fn len_vector<T: Codec>(items: &[T]) -> usize {
    VECTOR_PREFIX + items.iter().map(Codec::encoded_len).sum::<usize>()
}

pub fn write_vector<T: Codec>(items: &[T], data: &mut [u8], offset: usize) -> usize {
    let mut i = offset;
    i += bytes::put_u32(data, i, items.len() as u32);
    for item in items {
        i += item.write(data, i);
    }
    i - offset
}

/// Vectors of fixed-size arrays (Merkle proofs, hash lists) have a
/// closed-form length: prefix plus count times element width.
pub fn len_array_vector<const N: usize>(items: &[[u8; N]]) -> usize {
    VECTOR_PREFIX + items.len() * N
}

pub fn write_array_vector<const N: usize>(items: &[[u8; N]], data: &mut [u8], offset: usize) -> usize {
    let mut i = offset;
    i += bytes::put_u32(data, i, items.len() as u32);
    for item in items {
        i += bytes::put_array(data, i, item);
    }
    i - offset
}

/// Strings are byte vectors of their UTF-8 encoding.
pub fn len_string(value: &str) -> usize {
    VECTOR_PREFIX + value.len()
}

pub fn write_string(value: &str, data: &mut [u8], offset: usize) -> usize {
    write_byte_vector(value.as_bytes(), data, offset)
}

/// Optionals are a 1-byte presence flag, followed by the value only when
/// the flag is 1. An absent optional is exactly one byte.
pub fn len_option<T: Codec>(value: &Option<T>) -> usize {
    1 + value.as_ref().map_or(0, Codec::encoded_len)
}

pub fn write_option<T: Codec>(value: &Option<T>, data: &mut [u8], offset: usize) -> usize {
    match value {
        None => bytes::put_u8(data, offset, 0),
        Some(inner) => {
            let mut i = offset;
            i += bytes::put_u8(data, i, 1);
            i += inner.write(data, i);
            i - offset
        }
    }
}

// ---------------------------------------------------------------------------
// Decoding cursor
// ---------------------------------------------------------------------------

/// Advancing read cursor over an account or instruction buffer.
///
/// Every read checks the remaining window first and fails with
/// [`CodecError::Truncated`] instead of panicking, and variable-length
/// reads consume exactly the bytes their own length prefix declares.
pub struct Decoder<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Decoder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn with_offset(data: &'a [u8], offset: usize) -> Self {
        Self { data, pos: offset }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], CodecError> {
        match self.data.get(self.pos..self.pos + len) {
            Some(window) => {
                self.pos += len;
                Ok(window)
            }
            None => Err(CodecError::Truncated {
                offset: self.pos,
                needed: len,
                have: self.remaining(),
            }),
        }
    }

    pub fn skip(&mut self, len: usize) -> Result<(), CodecError> {
        self.take(len).map(|_| ())
    }

    /// Reads the 8-byte tag at the cursor and fails unless it matches.
    pub fn expect_discriminator(
        &mut self,
        expected: &Discriminator,
        kind: &'static str,
    ) -> Result<(), CodecError> {
        self.pos = expected.expect(self.data, self.pos, kind)?;
        Ok(())
    }

    pub fn u8(&mut self) -> Result<u8, CodecError> {
        Ok(self.take(1)?[0])
    }

    pub fn i8(&mut self) -> Result<i8, CodecError> {
        Ok(self.take(1)?[0] as i8)
    }

    pub fn bool(&mut self) -> Result<bool, CodecError> {
        Ok(self.u8()? == 1)
    }

    pub fn u16(&mut self) -> Result<u16, CodecError> {
        Ok(bytes::get_u16(self.take(2)?, 0))
    }

    pub fn i16(&mut self) -> Result<i16, CodecError> {
        Ok(bytes::get_i16(self.take(2)?, 0))
    }

    pub fn u32(&mut self) -> Result<u32, CodecError> {
        Ok(bytes::get_u32(self.take(4)?, 0))
    }

    pub fn i32(&mut self) -> Result<i32, CodecError> {
        Ok(bytes::get_i32(self.take(4)?, 0))
    }

    pub fn u64(&mut self) -> Result<u64, CodecError> {
        Ok(bytes::get_u64(self.take(8)?, 0))
    }

    pub fn i64(&mut self) -> Result<i64, CodecError> {
        Ok(bytes::get_i64(self.take(8)?, 0))
    }

    pub fn u128(&mut self) -> Result<u128, CodecError> {
        Ok(bytes::get_u128(self.take(16)?, 0))
    }

    pub fn i128(&mut self) -> Result<i128, CodecError> {
        Ok(bytes::get_i128(self.take(16)?, 0))
    }

    pub fn f64(&mut self) -> Result<f64, CodecError> {
        Ok(bytes::get_f64(self.take(8)?, 0))
    }

    pub fn pubkey(&mut self) -> Result<Pubkey, CodecError> {
        Ok(bytes::get_pubkey(self.take(bytes::PUBKEY_BYTES)?, 0))
    }

    pub fn array<const N: usize>(&mut self) -> Result<[u8; N], CodecError> {
        Ok(bytes::get_array::<N>(self.take(N)?, 0))
    }

    pub fn u64_array<const N: usize>(&mut self) -> Result<[u64; N], CodecError> {
        Ok(bytes::get_u64_array::<N>(self.take(N * 8)?, 0))
    }

    pub fn byte_vector(&mut self) -> Result<Vec<u8>, CodecError> {
        let len = self.u32()? as usize;
        Ok(self.take(len)?.to_vec())
    }

    pub fn array_vector<const N: usize>(&mut self) -> Result<Vec<[u8; N]>, CodecError> {
        let count = self.u32()? as usize;
        let mut out = Vec::with_capacity(count.min(self.remaining() / N.max(1)));
        for _ in 0..count {
            out.push(self.array::<N>()?);
        }
        Ok(out)
    }

    pub fn string(&mut self) -> Result<String, CodecError> {
        let start = self.pos;
        let raw = self.byte_vector()?;
        String::from_utf8(raw).map_err(|_| CodecError::InvalidUtf8 { offset: start })
    }

    /// Reads the 1-byte presence flag, then the value when present.
    pub fn option_with<T>(
        &mut self,
        read: impl FnOnce(&mut Self) -> Result<T, CodecError>,
    ) -> Result<Option<T>, CodecError> {
        if self.u8()? == 0 {
            Ok(None)
        } else {
            read(self).map(Some)
        }
    }

    pub fn option_u8(&mut self) -> Result<Option<u8>, CodecError> {
        self.option_with(Self::u8)
    }

    pub fn option_u16(&mut self) -> Result<Option<u16>, CodecError> {
        self.option_with(Self::u16)
    }

    pub fn option_u32(&mut self) -> Result<Option<u32>, CodecError> {
        self.option_with(Self::u32)
    }

    pub fn option_u64(&mut self) -> Result<Option<u64>, CodecError> {
        self.option_with(Self::u64)
    }

    pub fn option_f64(&mut self) -> Result<Option<f64>, CodecError> {
        self.option_with(Self::f64)
    }

    pub fn option_pubkey(&mut self) -> Result<Option<Pubkey>, CodecError> {
        self.option_with(Self::pubkey)
    }

    pub fn option_array<const N: usize>(&mut self) -> Result<Option<[u8; N]>, CodecError> {
        self.option_with(Self::array::<N>)
    }
}

// ---------------------------------------------------------------------------
// Account records
// ---------------------------------------------------------------------------

/// A fixed-layout program account behind an 8-byte discriminator.
///
/// `read` verifies the buffer length and the leading tag before touching
/// any field, so a wrong-kind or truncated account surfaces as an error
/// rather than garbage field values.
pub trait AccountSerde: Sized {
    /// Account type name, as published by the owning program.
    const KIND: &'static str;
    const DISCRIMINATOR: Discriminator;
    /// Total serialized size, discriminator included.
    const BYTES: usize;

    fn read(address: Option<Pubkey>, data: &[u8]) -> Result<Self, CodecError>;

    fn write(&self, data: &mut [u8], offset: usize) -> usize;

    /// Server-side filter matching exactly this account's size.
    fn size_filter() -> Filter {
        Filter::data_size(Self::BYTES as u64)
    }

    /// Server-side filter matching this account's discriminator.
    fn discriminator_filter() -> Filter {
        Filter::memcmp(0, Self::DISCRIMINATOR.as_ref())
    }
}
