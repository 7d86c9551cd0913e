//! Equation-of-state conversions between conserved and primitive state.
//!
//! The time integrator advances conserved variables (density, momentum,
//! passive-scalar densities); reconstruction and the Riemann solver
//! consume primitive variables (density, velocity, scalar concentrations).
//! This crate defines the [`EquationOfState`] trait bridging the two and
//! the [`IsothermalHydro`] closure, which enforces the density floor —
//! the admissibility invariant the rest of the solver leans on.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod eos;
pub mod error;
pub mod isothermal;

pub use eos::EquationOfState;
pub use error::EosError;
pub use isothermal::{default_density_floor, IsothermalHydro};
