//! Freshet: the equation-of-state conversion layer of a structured-grid
//! fluid dynamics solver.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the freshet sub-crates. For most users, adding `freshet` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use freshet::prelude::*;
//!
//! // One passive scalar rides along with the flow.
//! let layout = VariableLayout::new(1);
//!
//! // The isothermal sound speed is required configuration; the density
//! // floor is optional.
//! let mut params = ParameterTable::new();
//! params.set_real("hydro", "iso_sound_speed", 1.0);
//! params.set_real("hydro", "dfloor", 1e-8);
//! let eos = IsothermalHydro::from_parameters(&params, layout).unwrap();
//!
//! // Caller-owned state arrays over a 4x4x8 block.
//! let mut cons = StateArray::new(layout.nvar(), 4, 4, 8).unwrap();
//! cons.fill_with(|n, _, _, i| match n {
//!     0 => 1.0 + 0.1 * i as f64, // density
//!     1 => 0.5,                  // x1 momentum
//!     4 => 0.25,                 // scalar density
//!     _ => 0.0,
//! });
//! let mut prim = StateArray::new(layout.nvar(), 4, 4, 8).unwrap();
//! let prim_old = prim.clone();
//!
//! // Refresh primitives over the whole block before reconstruction.
//! let bounds = CellBox::new(0, 7, 0, 3, 0, 3).unwrap();
//! eos.conserved_to_primitive(&mut cons, &prim_old, &mut prim, bounds)
//!     .unwrap();
//!
//! assert_eq!(prim.at(0, 0, 0, 0), 1.0);
//! assert_eq!(prim.at(1, 0, 0, 0), 0.5);
//! assert_eq!(eos.sound_speed(&prim.cell_state(0, 0, 0)), 1.0);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `freshet-core` | Variable layout, parameter table, parameter errors |
//! | [`grid`] | `freshet-grid` | Cell index boxes and state-array storage |
//! | [`eos`] | `freshet-eos` | The `EquationOfState` trait and closures |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and parameter handling (`freshet-core`).
///
/// Contains the [`types::VariableLayout`] slot descriptor and the
/// [`types::ParameterTable`] configuration source.
pub use freshet_core as types;

/// Cell index boxes and state-array storage (`freshet-grid`).
///
/// Provides [`grid::CellBox`] and [`grid::StateArray`], the two types
/// every conversion call operates on.
pub use freshet_grid as grid;

/// Equation-of-state conversions (`freshet-eos`).
///
/// The [`eos::EquationOfState`] trait is the seam between the time
/// integrator and the reconstruction stage; [`eos::IsothermalHydro`] is
/// the constant-sound-speed closure.
pub use freshet_eos as eos;

/// Common imports for typical freshet usage.
///
/// ```rust
/// use freshet::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use freshet_core::{ParameterError, ParameterTable, VariableLayout};

    // Grid storage
    pub use freshet_grid::{CellBox, CellState, GridError, StateArray};

    // Equation of state
    pub use freshet_eos::{default_density_floor, EosError, EquationOfState, IsothermalHydro};
}
