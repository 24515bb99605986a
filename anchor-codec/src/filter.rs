//! `getProgramAccounts` filter values.
//!
//! Serializes to the RPC wire shape: `{"dataSize": n}` for size filters
//! and `{"memcmp": {"offset": o, "bytes": "<base58>"}}` for byte-compare
//! filters. Account records expose offset constants so callers can build
//! memcmp filters against individual fields without decoding anything.

use serde::ser::{Serialize, SerializeMap, Serializer};
use solana_pubkey::Pubkey;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    DataSize(u64),
    Memcmp { offset: usize, bytes: Vec<u8> },
}

impl Filter {
    pub fn data_size(size: u64) -> Self {
        Self::DataSize(size)
    }

    pub fn memcmp(offset: usize, bytes: &[u8]) -> Self {
        Self::Memcmp {
            offset,
            bytes: bytes.to_vec(),
        }
    }

    pub fn memcmp_pubkey(offset: usize, key: &Pubkey) -> Self {
        Self::memcmp(offset, key.as_ref())
    }
}

impl Serialize for Filter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::DataSize(size) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("dataSize", size)?;
                map.end()
            }
            Self::Memcmp { offset, bytes } => {
                #[derive(serde::Serialize)]
                struct Memcmp<'a> {
                    offset: usize,
                    bytes: &'a str,
                }

                let encoded = bs58::encode(bytes).into_string();
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(
                    "memcmp",
                    &Memcmp {
                        offset: *offset,
                        bytes: &encoded,
                    },
                )?;
                map.end()
            }
        }
    }
}
