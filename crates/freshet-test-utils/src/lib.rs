//! Test fixtures for freshet development.
//!
//! Provides parameter-table presets and prefilled
//! [`StateArray`](freshet_grid::StateArray)s so conversion tests can focus
//! on the property under test instead of array plumbing.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{full_box, hydro_params, hydro_params_with_floor, smooth_conserved, zeroed};
