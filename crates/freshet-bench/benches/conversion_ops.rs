//! Criterion micro-benchmarks for the equation-of-state conversion loops.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use freshet_bench::{reference_block, GHOST};
use freshet_eos::EquationOfState;
use freshet_grid::CellBox;

/// Benchmark: conserved -> primitive over a 32^3 interior, two scalars.
fn bench_conserved_to_primitive(c: &mut Criterion) {
    let mut block = reference_block(32, 2);
    c.bench_function("conserved_to_primitive_32c_s2", |b| {
        b.iter(|| {
            block
                .eos
                .conserved_to_primitive(
                    &mut block.cons,
                    &block.prim_old,
                    &mut block.prim,
                    block.interior,
                )
                .unwrap();
            black_box(block.prim.at(0, GHOST, GHOST, GHOST));
        });
    });
}

/// Benchmark: primitive -> conserved over the same interior.
fn bench_primitive_to_conserved(c: &mut Criterion) {
    let mut block = reference_block(32, 2);
    block
        .eos
        .conserved_to_primitive(
            &mut block.cons,
            &block.prim_old,
            &mut block.prim,
            block.interior,
        )
        .unwrap();
    c.bench_function("primitive_to_conserved_32c_s2", |b| {
        b.iter(|| {
            block
                .eos
                .primitive_to_conserved(&block.prim, &mut block.cons, block.interior)
                .unwrap();
            black_box(block.cons.at(0, GHOST, GHOST, GHOST));
        });
    });
}

/// Benchmark: converting one reconstruction strip (a single `(k, j)` row).
fn bench_strip_conversion(c: &mut Criterion) {
    let mut block = reference_block(32, 2);
    let strip = CellBox::new(
        block.interior.il(),
        block.interior.iu(),
        GHOST,
        GHOST,
        GHOST,
        GHOST,
    )
    .unwrap();
    c.bench_function("conserved_to_primitive_strip_32", |b| {
        b.iter(|| {
            block
                .eos
                .conserved_to_primitive(&mut block.cons, &block.prim_old, &mut block.prim, strip)
                .unwrap();
            black_box(block.prim.at(0, GHOST, GHOST, GHOST));
        });
    });
}

/// Benchmark: single-cell floor application across one row of interface
/// states.
fn bench_apply_primitive_floors(c: &mut Criterion) {
    let mut block = reference_block(32, 2);
    let (il, iu) = (block.interior.il(), block.interior.iu());
    c.bench_function("apply_primitive_floors_row_32", |b| {
        b.iter(|| {
            for i in il..=iu {
                block
                    .eos
                    .apply_primitive_floors(&mut block.prim, GHOST, GHOST, i);
            }
            black_box(block.prim.at(0, GHOST, GHOST, il));
        });
    });
}

criterion_group!(
    benches,
    bench_conserved_to_primitive,
    bench_primitive_to_conserved,
    bench_strip_conversion,
    bench_apply_primitive_floors,
);
criterion_main!(benches);
