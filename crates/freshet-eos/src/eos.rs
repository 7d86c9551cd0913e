//! The [`EquationOfState`] capability trait.
//!
//! Equation-of-state variants differ in their physical closure (isothermal,
//! adiabatic, magnetized), not in their calling convention. The trait pins
//! down the four entry points the integrator and the reconstruction stage
//! use, so a block holds one `Box<dyn EquationOfState>` and the rest of
//! the solver never branches on the closure.

use crate::error::EosError;
use freshet_core::VariableLayout;
use freshet_grid::{CellBox, StateArray};

/// Bidirectional mapping between conserved and primitive state.
///
/// # Contract
///
/// - Conversions MUST be deterministic and per-cell independent: no cell's
///   result may depend on another cell's intermediate value, so inner
///   loops stay safe to vectorize and blocks stay safe to process in
///   parallel.
/// - `&self` — implementations are stateless per call; persistent state is
///   limited to configuration fixed at construction.
/// - Implementations borrow the caller's arrays for the duration of one
///   call and never allocate, suspend, or retain them.
/// - Calls operate on exactly the inclusive index box supplied; cells
///   outside the box MUST NOT be read or written.
///
/// # Object safety
///
/// This trait is object-safe; a block stores its equation of state as
/// `Box<dyn EquationOfState>`.
pub trait EquationOfState: Send + 'static {
    /// The variable layout shared by every array this object converts.
    fn layout(&self) -> VariableLayout;

    /// The configured density floor.
    fn density_floor(&self) -> f64;

    /// Derive primitive variables from conserved variables over `bounds`,
    /// applying the density floor.
    ///
    /// The floor is written back into `cons` in place: the conserved array
    /// is mutated as a documented side effect so that conserved and
    /// primitive density stay consistent. Momentum is never modified;
    /// where the floor engages, velocity comes from dividing the original
    /// momentum by the floored density. Sub-floor (including negative)
    /// densities are corrected silently — no error, no logging.
    ///
    /// `prim_old` is the previous primitive state, supplied as a hint or
    /// fallback for closures that need an iterative inversion; variants
    /// with a closed-form inversion accept and ignore it.
    ///
    /// # Errors
    ///
    /// [`EosError::Domain`] when an array's variable count does not match
    /// the layout or its extents do not contain `bounds`. Checked once per
    /// call, before any cell is touched.
    fn conserved_to_primitive(
        &self,
        cons: &mut StateArray,
        prim_old: &StateArray,
        prim: &mut StateArray,
        bounds: CellBox,
    ) -> Result<(), EosError>;

    /// Derive conserved variables from primitive variables over `bounds`.
    ///
    /// No floor is applied: primitives are assumed admissible on entry,
    /// either fresh from [`conserved_to_primitive`](Self::conserved_to_primitive)
    /// or floored by [`apply_primitive_floors`](Self::apply_primitive_floors).
    ///
    /// # Errors
    ///
    /// [`EosError::Domain`], as for the forward conversion.
    fn primitive_to_conserved(
        &self,
        prim: &StateArray,
        cons: &mut StateArray,
        bounds: CellBox,
    ) -> Result<(), EosError>;

    /// Enforce the density floor on a single primitive state at
    /// `(k, j, i)`, as reconstruction produces left/right interface states
    /// that may undershoot.
    ///
    /// Clamps only the density slot; velocity and scalar concentrations
    /// are untouched. Idempotent.
    fn apply_primitive_floors(&self, prim: &mut StateArray, k: usize, j: usize, i: usize);

    /// The sound speed for the given per-cell primitive state vector.
    ///
    /// Variants with a spatially constant sound speed ignore `state`; it
    /// is part of the shared signature so wavespeed estimation code is
    /// identical across closures.
    fn sound_speed(&self, state: &[f64]) -> f64;
}
