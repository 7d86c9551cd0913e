//! Cell index boxes and state-array storage for freshet simulations.
//!
//! This crate defines the two storage-facing types the solver's per-cell
//! kernels operate on: [`CellBox`], an inclusive three-dimensional index
//! range over a structured block, and [`StateArray`], the flat
//! `(variable, k, j, i)` array holding conserved or primitive state.
//!
//! Arrays are owned by whoever builds the block; kernels borrow them for
//! the duration of a call. Iteration is `(k, j)`-plane-major with the `i`
//! index fastest, so inner loops run over contiguous rows.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod bounds;
pub mod error;

pub use array::{CellState, StateArray};
pub use bounds::CellBox;
pub use error::GridError;
