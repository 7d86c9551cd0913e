//! Isothermal hydrodynamics equation of state.
//!
//! With a constant sound speed there is no energy equation, so both
//! conversion directions are closed-form and purely local: density copies
//! across, momentum and velocity differ by a factor of density, and
//! passive scalars convert between scalar density and concentration with
//! the same factor.

use crate::eos::EquationOfState;
use crate::error::EosError;
use freshet_core::{ParameterTable, VariableLayout};
use freshet_grid::{CellBox, StateArray};

/// Default density floor when `hydro/dfloor` is not configured:
/// `sqrt(1024 * FLT_MIN)`, about `3.5e-18`.
///
/// Uses the smallest normal positive single-precision value regardless of
/// the `f64` storage width, keeping the floor physically negligible while
/// staying far above the subnormal range where reciprocals degrade.
pub fn default_density_floor() -> f64 {
    (1024.0 * f32::MIN_POSITIVE as f64).sqrt()
}

/// Equation of state for isothermal hydrodynamics.
///
/// Holds the two configuration scalars fixed for the lifetime of the
/// owning block: the isothermal sound speed (required) and the density
/// floor (optional, defaulting to [`default_density_floor`]). One
/// instance serves one block; conversions borrow the block's arrays per
/// call and retain nothing.
///
/// # Examples
///
/// ```
/// use freshet_core::{ParameterTable, VariableLayout};
/// use freshet_eos::{EquationOfState, IsothermalHydro};
///
/// let mut params = ParameterTable::new();
/// params.set_real("hydro", "iso_sound_speed", 0.5);
///
/// let eos = IsothermalHydro::from_parameters(&params, VariableLayout::new(0)).unwrap();
/// assert_eq!(eos.sound_speed(&[1.0, 0.0, 0.0, 0.0]), 0.5);
/// ```
#[derive(Clone, Debug)]
pub struct IsothermalHydro {
    layout: VariableLayout,
    iso_sound_speed: f64,
    density_floor: f64,
}

impl IsothermalHydro {
    /// Construct from the `hydro` section of a parameter table.
    ///
    /// `iso_sound_speed` is required; a missing or malformed entry aborts
    /// construction. `dfloor` is optional and defaults to
    /// [`default_density_floor`].
    ///
    /// # Errors
    ///
    /// [`EosError::Parameter`] on lookup failure, or the validation
    /// errors of [`new`](Self::new).
    pub fn from_parameters(
        params: &ParameterTable,
        layout: VariableLayout,
    ) -> Result<Self, EosError> {
        let iso_sound_speed = params.get_real("hydro", "iso_sound_speed")?;
        let density_floor = params.get_real_or("hydro", "dfloor", default_density_floor())?;
        Self::new(iso_sound_speed, density_floor, layout)
    }

    /// Construct from explicit values.
    ///
    /// # Errors
    ///
    /// [`EosError::InvalidSoundSpeed`] unless the sound speed is finite
    /// and positive; [`EosError::InvalidDensityFloor`] unless the floor
    /// is finite and positive. A non-positive floor would void the
    /// guarantee that inverse density is always finite.
    pub fn new(
        iso_sound_speed: f64,
        density_floor: f64,
        layout: VariableLayout,
    ) -> Result<Self, EosError> {
        if !iso_sound_speed.is_finite() || iso_sound_speed <= 0.0 {
            return Err(EosError::InvalidSoundSpeed {
                value: iso_sound_speed,
            });
        }
        if !density_floor.is_finite() || density_floor <= 0.0 {
            return Err(EosError::InvalidDensityFloor {
                value: density_floor,
            });
        }
        Ok(Self {
            layout,
            iso_sound_speed,
            density_floor,
        })
    }

    /// The configured isothermal sound speed.
    pub fn iso_sound_speed(&self) -> f64 {
        self.iso_sound_speed
    }

    /// Validate one array against the layout and the requested box.
    fn check_block(
        &self,
        name: &'static str,
        array: &StateArray,
        bounds: &CellBox,
    ) -> Result<(), EosError> {
        if array.nvar() != self.layout.nvar() {
            return Err(EosError::Domain {
                reason: format!(
                    "{name} array has {} variables, layout requires {}",
                    array.nvar(),
                    self.layout.nvar()
                ),
            });
        }
        if !array.contains(bounds) {
            return Err(EosError::Domain {
                reason: format!(
                    "{name} array extent {}x{}x{} does not contain bounds \
                     [{},{}]x[{},{}]x[{},{}]",
                    array.nx3(),
                    array.nx2(),
                    array.nx1(),
                    bounds.kl(),
                    bounds.ku(),
                    bounds.jl(),
                    bounds.ju(),
                    bounds.il(),
                    bounds.iu()
                ),
            });
        }
        Ok(())
    }
}

impl EquationOfState for IsothermalHydro {
    fn layout(&self) -> VariableLayout {
        self.layout
    }

    fn density_floor(&self) -> f64 {
        self.density_floor
    }

    fn conserved_to_primitive(
        &self,
        cons: &mut StateArray,
        prim_old: &StateArray,
        prim: &mut StateArray,
        bounds: CellBox,
    ) -> Result<(), EosError> {
        self.check_block("conserved", cons, &bounds)?;
        // The hint is validated with its peers but otherwise unused: the
        // isothermal inversion is closed-form.
        self.check_block("previous primitive", prim_old, &bounds)?;
        self.check_block("primitive", prim, &bounds)?;

        const DEN: usize = VariableLayout::DENSITY;
        for (k, j) in bounds.planes() {
            // Floor the stored conserved density in place. Intentional
            // aliasing: the conserved array is the authoritative density
            // record and must agree with what reconstruction reads from
            // `prim`. Momentum stays untouched.
            {
                let den = cons.row_mut(DEN, k, j);
                for i in bounds.i_range() {
                    let d = den[i];
                    den[i] = if d > self.density_floor {
                        d
                    } else {
                        self.density_floor
                    };
                }
            }
            for i in bounds.i_range() {
                let d = cons.at(DEN, k, j, i);
                let di = 1.0 / d;
                *prim.at_mut(DEN, k, j, i) = d;
                for m in self.layout.momentum_slots() {
                    *prim.at_mut(m, k, j, i) = cons.at(m, k, j, i) * di;
                }
                for s in self.layout.scalar_slots() {
                    *prim.at_mut(s, k, j, i) = cons.at(s, k, j, i) * di;
                }
            }
        }
        Ok(())
    }

    fn primitive_to_conserved(
        &self,
        prim: &StateArray,
        cons: &mut StateArray,
        bounds: CellBox,
    ) -> Result<(), EosError> {
        self.check_block("primitive", prim, &bounds)?;
        self.check_block("conserved", cons, &bounds)?;

        const DEN: usize = VariableLayout::DENSITY;
        for (k, j) in bounds.planes() {
            for i in bounds.i_range() {
                let d = prim.at(DEN, k, j, i);
                *cons.at_mut(DEN, k, j, i) = d;
                for m in self.layout.momentum_slots() {
                    *cons.at_mut(m, k, j, i) = prim.at(m, k, j, i) * d;
                }
                for s in self.layout.scalar_slots() {
                    *cons.at_mut(s, k, j, i) = prim.at(s, k, j, i) * d;
                }
            }
        }
        Ok(())
    }

    fn apply_primitive_floors(&self, prim: &mut StateArray, k: usize, j: usize, i: usize) {
        let d = prim.at_mut(VariableLayout::DENSITY, k, j, i);
        *d = if *d > self.density_floor {
            *d
        } else {
            self.density_floor
        };
    }

    fn sound_speed(&self, _state: &[f64]) -> f64 {
        self.iso_sound_speed
    }
}
