//! Per-program bindings.
//!
//! One module per bound program, each carrying the same surface:
//! instruction discriminators and builders, payload readers for
//! arg-carrying instructions, account records where the program
//! publishes fixed layouts, PDA recipes where it publishes seeds, and
//! the program's error code table.

pub mod alpha_vault;
pub mod autocrat;
pub mod glam;
pub mod jito_steward;
pub mod kamino_lend;
pub mod sb_on_demand;
