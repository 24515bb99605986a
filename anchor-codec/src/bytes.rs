//! Little-endian primitive byte layout.
//!
//! Reads take `(data, offset)` and return the value; writes take
//! `(data, offset, value)` and return the number of bytes written so call
//! sites can advance a running offset. Offsets are trusted here: builders
//! allocate payload buffers to their exact encoded length up front, and
//! decode paths bounds-check through [`crate::codec::Decoder`] before
//! landing on these helpers.

use solana_pubkey::Pubkey;

pub const PUBKEY_BYTES: usize = 32;

macro_rules! le_impl {
    ($get:ident, $put:ident, $ty:ty, $width:expr) => {
        #[inline]
        pub fn $get(data: &[u8], offset: usize) -> $ty {
            let mut bytes = [0u8; $width];
            bytes.copy_from_slice(&data[offset..offset + $width]);
            <$ty>::from_le_bytes(bytes)
        }

        #[inline]
        pub fn $put(data: &mut [u8], offset: usize, value: $ty) -> usize {
            data[offset..offset + $width].copy_from_slice(&value.to_le_bytes());
            $width
        }
    };
}

le_impl!(get_u16, put_u16, u16, 2);
le_impl!(get_i16, put_i16, i16, 2);
le_impl!(get_u32, put_u32, u32, 4);
le_impl!(get_i32, put_i32, i32, 4);
le_impl!(get_u64, put_u64, u64, 8);
le_impl!(get_i64, put_i64, i64, 8);
le_impl!(get_u128, put_u128, u128, 16);
le_impl!(get_i128, put_i128, i128, 16);
le_impl!(get_f64, put_f64, f64, 8);

#[inline]
pub fn get_u8(data: &[u8], offset: usize) -> u8 {
    data[offset]
}

#[inline]
pub fn put_u8(data: &mut [u8], offset: usize, value: u8) -> usize {
    data[offset] = value;
    1
}

#[inline]
pub fn get_i8(data: &[u8], offset: usize) -> i8 {
    data[offset] as i8
}

#[inline]
pub fn put_i8(data: &mut [u8], offset: usize, value: i8) -> usize {
    data[offset] = value as u8;
    1
}

/// Borsh bools are a single byte, `1` for true.
#[inline]
pub fn get_bool(data: &[u8], offset: usize) -> bool {
    data[offset] == 1
}

#[inline]
pub fn put_bool(data: &mut [u8], offset: usize, value: bool) -> usize {
    data[offset] = u8::from(value);
    1
}

#[inline]
pub fn get_array<const N: usize>(data: &[u8], offset: usize) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&data[offset..offset + N]);
    out
}

#[inline]
pub fn put_array<const N: usize>(data: &mut [u8], offset: usize, value: &[u8; N]) -> usize {
    data[offset..offset + N].copy_from_slice(value);
    N
}

/// Public keys are 32 raw bytes, no tag and no length prefix.
#[inline]
pub fn get_pubkey(data: &[u8], offset: usize) -> Pubkey {
    Pubkey::new_from_array(get_array::<PUBKEY_BYTES>(data, offset))
}

#[inline]
pub fn put_pubkey(data: &mut [u8], offset: usize, value: &Pubkey) -> usize {
    data[offset..offset + PUBKEY_BYTES].copy_from_slice(value.as_ref());
    PUBKEY_BYTES
}

pub fn get_u64_array<const N: usize>(data: &[u8], offset: usize) -> [u64; N] {
    let mut out = [0u64; N];
    let mut i = offset;
    for slot in &mut out {
        *slot = get_u64(data, i);
        i += 8;
    }
    out
}

pub fn put_u64_array<const N: usize>(data: &mut [u8], offset: usize, value: &[u64; N]) -> usize {
    let mut i = offset;
    for v in value {
        i += put_u64(data, i, *v);
    }
    i - offset
}
