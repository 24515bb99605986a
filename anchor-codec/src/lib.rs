//! Client-side binary codec for Anchor programs.
//!
//! Everything an RPC client needs to talk to an Anchor program at the
//! byte level, without the program's source in the dependency tree:
//! - little-endian primitive layout and borsh collection encoding
//! - 8-byte account/instruction discriminators, checked on every decode
//! - account records with field offset constants and memcmp filters
//! - positional instruction builders with sentinel optional accounts
//! - program derived address recipes and program error tables
//!
//! Per-program bindings live under [`programs`]; the rest of the crate is
//! the generic layer they are written against.

pub mod bytes;
pub mod codec;
pub mod discriminator;
pub mod error;
pub mod filter;
pub mod instruction;
pub mod pda;
pub mod programs;

pub use codec::{AccountSerde, Codec, Decoder};
pub use discriminator::Discriminator;
pub use error::CodecError;
pub use filter::Filter;
pub use instruction::{
    build_instruction, create_read, create_read_only_signer, create_writable_signer, create_write,
    key_or_program,
};
pub use pda::{find_program_address, ProgramDerivedAddress};
