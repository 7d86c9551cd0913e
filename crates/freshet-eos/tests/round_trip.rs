//! Block-scale consistency checks across the conversion entry points.

use freshet_core::VariableLayout;
use freshet_eos::{EquationOfState, IsothermalHydro};
use freshet_grid::CellBox;
use freshet_test_utils::{full_box, hydro_params_with_floor, smooth_conserved, zeroed};

const NX3: usize = 4;
const NX2: usize = 6;
const NX1: usize = 8;

fn block_eos(nscalars: u32) -> IsothermalHydro {
    let params = hydro_params_with_floor(1.2, 1e-10);
    IsothermalHydro::from_parameters(&params, VariableLayout::new(nscalars)).unwrap()
}

fn assert_close(got: f64, want: f64, context: &str) {
    let tol = want.abs().max(1e-300) * 1e-12;
    assert!(
        (got - want).abs() <= tol,
        "{context}: got {got}, want {want}"
    );
}

#[test]
fn full_block_round_trip_is_stable() {
    // After one conserved->primitive pass (floors applied), the pair of
    // conversions must be a fixed point of the primitive state.
    let eos = block_eos(2);
    let layout = VariableLayout::new(2);
    let mut cons = smooth_conserved(layout, NX3, NX2, NX1);
    let mut prim = zeroed(layout, NX3, NX2, NX1);
    let prim_old = zeroed(layout, NX3, NX2, NX1);
    let bounds = full_box(&cons);
    eos.conserved_to_primitive(&mut cons, &prim_old, &mut prim, bounds)
        .unwrap();

    let mut cons_back = zeroed(layout, NX3, NX2, NX1);
    let mut prim_back = zeroed(layout, NX3, NX2, NX1);
    eos.primitive_to_conserved(&prim, &mut cons_back, bounds)
        .unwrap();
    eos.conserved_to_primitive(&mut cons_back, &prim_old, &mut prim_back, bounds)
        .unwrap();

    for n in 0..layout.nvar() {
        for k in 0..NX3 {
            for j in 0..NX2 {
                for i in 0..NX1 {
                    assert_close(
                        prim_back.at(n, k, j, i),
                        prim.at(n, k, j, i),
                        &format!("variable {n} at ({k},{j},{i})"),
                    );
                }
            }
        }
    }
}

#[test]
fn conserved_scalar_density_survives_round_trip() {
    let eos = block_eos(3);
    let layout = VariableLayout::new(3);
    let mut cons = smooth_conserved(layout, NX3, NX2, NX1);
    let reference = cons.clone();
    let mut prim = zeroed(layout, NX3, NX2, NX1);
    let prim_old = zeroed(layout, NX3, NX2, NX1);
    let bounds = full_box(&cons);

    eos.conserved_to_primitive(&mut cons, &prim_old, &mut prim, bounds)
        .unwrap();
    let mut cons_back = zeroed(layout, NX3, NX2, NX1);
    eos.primitive_to_conserved(&prim, &mut cons_back, bounds)
        .unwrap();

    // The fixture density is everywhere above the floor, so scalar
    // densities come back to their original values.
    for n in layout.scalar_slots() {
        for k in 0..NX3 {
            for j in 0..NX2 {
                for i in 0..NX1 {
                    assert_close(
                        cons_back.at(n, k, j, i),
                        reference.at(n, k, j, i),
                        &format!("scalar {n} at ({k},{j},{i})"),
                    );
                }
            }
        }
    }
}

#[test]
fn strip_conversion_matches_full_block_conversion() {
    // Reconstruction converts one interface strip at a time; the result on
    // those cells must be bit-identical to a whole-block conversion.
    let eos = block_eos(1);
    let layout = VariableLayout::new(1);
    let cons0 = smooth_conserved(layout, NX3, NX2, NX1);
    let prim_old = zeroed(layout, NX3, NX2, NX1);

    let mut cons_full = cons0.clone();
    let mut prim_full = zeroed(layout, NX3, NX2, NX1);
    eos.conserved_to_primitive(&mut cons_full, &prim_old, &mut prim_full, full_box(&cons0))
        .unwrap();

    let strip = CellBox::new(1, NX1 - 2, 3, 3, 2, 2).unwrap();
    let mut cons_strip = cons0.clone();
    let mut prim_strip = zeroed(layout, NX3, NX2, NX1);
    eos.conserved_to_primitive(&mut cons_strip, &prim_old, &mut prim_strip, strip)
        .unwrap();

    for n in 0..layout.nvar() {
        for (k, j) in strip.planes() {
            for i in strip.i_range() {
                assert_eq!(
                    prim_strip.at(n, k, j, i),
                    prim_full.at(n, k, j, i),
                    "variable {n} at ({k},{j},{i})"
                );
            }
        }
    }
}
