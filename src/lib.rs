//! A sparse vector: a fixed-length sequence over a numeric element type in
//! which only runs of explicitly present values are stored. Every other
//! position belongs to "the void" and transparently reads as zero.
//!
//! ## Key features:
//!
//! - **Canonical runs**: the stored runs are always sorted, non-empty and
//!   separated by at least one void cell; every mutation (`add_range`,
//!   `combine_range`, `set_at`, `unset_at`, `make_void`, `resize`) splices,
//!   splits and fuses runs to keep that form.
//!
//! - **Transparent iteration**: [`Cursor`] walks the dense logical
//!   sequence, synthesizing zeros across the void with an amortized O(1)
//!   step, while the run-level API ([`RunVec::runs`]) skips the void
//!   entirely.
//!
//! - **Move-in buffers**: `add_range_vec` and `append_vec` place a
//!   caller-supplied buffer directly into the vector, without copying,
//!   whenever the landing site is void.

use thiserror::Error;

mod cell;
mod cursor;
mod interval;
mod run;
mod table;
mod vector;

#[cfg(test)]
mod testutil;

pub use cell::{CellMut, CellRef};
pub use cursor::Cursor;
pub use interval::Interval;
pub use run::Run;
pub use vector::RunVec;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("index {index} out of range for sparse vector of size {len}")]
    OutOfRange { index: usize, len: usize },

    #[error("index {index} is in the void")]
    InVoid { index: usize },

    #[error("cursors belong to two different sparse vectors")]
    AlienCursor,
}
