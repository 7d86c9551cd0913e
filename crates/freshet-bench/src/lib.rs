//! Benchmark profiles and utilities for the freshet solver.
//!
//! Provides a pre-built [`ReferenceBlock`] — an equation of state plus a
//! filled conserved/primitive array pair over a ghost-padded block — so
//! benches measure the conversion loops, not setup.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use freshet_core::VariableLayout;
use freshet_eos::IsothermalHydro;
use freshet_grid::{CellBox, StateArray};

/// Ghost-zone width on every face of the reference block.
pub const GHOST: usize = 2;

/// An equation of state with prefilled arrays over one block.
pub struct ReferenceBlock {
    /// The equation of state under test.
    pub eos: IsothermalHydro,
    /// Conserved state, smooth and strictly above the floor.
    pub cons: StateArray,
    /// Primitive state output buffer.
    pub prim: StateArray,
    /// Previous-primitive hint buffer (zeroed).
    pub prim_old: StateArray,
    /// The interior (ghost-excluded) index box.
    pub interior: CellBox,
}

/// Build a reference block profile: an `n^3` interior with [`GHOST`]-cell
/// padding and `nscalars` passive scalars.
///
/// The conserved density is a smooth field well above the floor, so
/// repeated conversions take the same (no-clamp) path every iteration.
pub fn reference_block(n: usize, nscalars: u32) -> ReferenceBlock {
    let layout = VariableLayout::new(nscalars);
    let total = n + 2 * GHOST;
    let eos = IsothermalHydro::new(1.0, 1e-10, layout).expect("valid bench parameters");

    let mut cons = StateArray::new(layout.nvar(), total, total, total)
        .expect("valid bench dimensions");
    cons.fill_with(|v, k, j, i| {
        let d = 1.0 + 0.0625 * (i as f64 + 2.0 * j as f64 + 3.0 * k as f64);
        match v {
            VariableLayout::DENSITY => d,
            v if v < VariableLayout::NDYN => 0.03125 * (i as f64 - j as f64 + v as f64),
            v => 0.125 * d / v as f64,
        }
    });
    let prim = StateArray::new(layout.nvar(), total, total, total)
        .expect("valid bench dimensions");
    let prim_old = prim.clone();

    let hi = GHOST + n - 1;
    let interior =
        CellBox::new(GHOST, hi, GHOST, hi, GHOST, hi).expect("interior bounds are valid");

    ReferenceBlock {
        eos,
        cons,
        prim,
        prim_old,
        interior,
    }
}
