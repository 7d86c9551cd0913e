//! Parameter and state-array fixtures.

use freshet_core::{ParameterTable, VariableLayout};
use freshet_grid::{CellBox, StateArray};

/// A parameter table whose `hydro` section carries only the required
/// isothermal sound speed.
pub fn hydro_params(iso_sound_speed: f64) -> ParameterTable {
    let mut params = ParameterTable::new();
    params.set_real("hydro", "iso_sound_speed", iso_sound_speed);
    params
}

/// A parameter table with both the sound speed and an explicit floor.
pub fn hydro_params_with_floor(iso_sound_speed: f64, dfloor: f64) -> ParameterTable {
    let mut params = hydro_params(iso_sound_speed);
    params.set_real("hydro", "dfloor", dfloor);
    params
}

/// A zero-filled state array sized for `layout` over the given block.
pub fn zeroed(layout: VariableLayout, nx3: usize, nx2: usize, nx1: usize) -> StateArray {
    StateArray::new(layout.nvar(), nx3, nx2, nx1).expect("fixture dimensions are valid")
}

/// A conserved-state array with a smooth, strictly positive density field,
/// varying momenta, and scalar densities below the local density.
///
/// All coefficients are dyadic so fixture values are exact in `f64`.
pub fn smooth_conserved(
    layout: VariableLayout,
    nx3: usize,
    nx2: usize,
    nx1: usize,
) -> StateArray {
    let mut array = zeroed(layout, nx3, nx2, nx1);
    array.fill_with(|n, k, j, i| {
        let d = 1.0 + 0.0625 * (i as f64 + 2.0 * j as f64 + 3.0 * k as f64);
        match n {
            VariableLayout::DENSITY => d,
            n if n < VariableLayout::NDYN => 0.03125 * (i as f64 - j as f64 + n as f64),
            n => 0.125 * d / n as f64,
        }
    });
    array
}

/// The box covering an array's entire extent.
pub fn full_box(array: &StateArray) -> CellBox {
    CellBox::new(
        0,
        array.nx1() - 1,
        0,
        array.nx2() - 1,
        0,
        array.nx3() - 1,
    )
    .expect("full extent is a valid box")
}
