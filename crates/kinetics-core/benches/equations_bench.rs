use criterion::{criterion_group, criterion_main, Criterion};
use kinetics_core::diffusion::{clamp_diffusion, log_diffusion};
use kinetics_core::reaction::{product_inhibition_equation, simple_equation};
use kinetics_core::stoich::{bind_group, Role, StoichRef};
use kinetics_types::factor::Factor;
use std::hint::black_box;

const HALF: Factor = Factor::new(1, 2);

fn bench_reactions(c: &mut Criterion) {
    let mut substrates = [50.0, 40.0, 30.0];
    let mut products = [0.0, 0.0];
    let s_factors = [Factor::ONE, Factor::whole(2), HALF];
    let p_factors = [Factor::ONE, Factor::ONE];

    c.bench_function("simple_equation_3x2", |b| {
        b.iter(|| {
            simple_equation(
                black_box(1e-3),
                bind_group(&mut substrates, s_factors, Role::Substrate),
                bind_group(&mut products, p_factors, Role::Product),
            )
        })
    });

    c.bench_function("product_inhibition_equation_3x2", |b| {
        b.iter(|| {
            product_inhibition_equation(
                black_box(1e-3),
                bind_group(&mut substrates, s_factors, Role::Substrate),
                bind_group(&mut products, p_factors, Role::Product),
            )
        })
    });
}

fn bench_diffusion_sweep(c: &mut Criterion) {
    // Chain of 64 compartments, neighbour exchange per step.
    let n = 64;
    let volumes: Vec<f64> = (0..n).map(|i| 1.0 + 0.1 * i as f64).collect();

    let mut group = c.benchmark_group("diffusion_chain_64");

    group.bench_function("clamp_sweep", |b| {
        let mut conc: Vec<f64> = (0..n).map(|i| if i == 0 { 100.0 } else { 0.0 }).collect();
        b.iter(|| {
            for i in 0..n - 1 {
                let (left, right) = conc.split_at_mut(i + 1);
                clamp_diffusion(
                    0.05,
                    StoichRef::substrate(&mut left[i], Factor::ONE),
                    StoichRef::substrate(&mut right[0], Factor::ONE),
                    volumes[i],
                    volumes[i + 1],
                );
            }
            black_box(conc[n - 1]);
        })
    });

    group.bench_function("log_sweep", |b| {
        let mut conc: Vec<f64> = (0..n).map(|i| if i == 0 { 100.0 } else { 0.0 }).collect();
        b.iter(|| {
            for i in 0..n - 1 {
                let (left, right) = conc.split_at_mut(i + 1);
                log_diffusion(
                    0.05,
                    StoichRef::substrate(&mut left[i], Factor::ONE),
                    StoichRef::substrate(&mut right[0], HALF),
                    volumes[i],
                    volumes[i + 1],
                );
            }
            black_box(conc[n - 1]);
        })
    });

    group.finish();
}

criterion_group!(benches, bench_reactions, bench_diffusion_sweep);
criterion_main!(benches);
