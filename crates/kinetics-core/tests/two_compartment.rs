// ─────────────────────────────────────────────────────────────────────
// SCPN Kinetics Core — Two-Compartment Host Integration Test
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Drives the configured channels from `configs/two_compartment.json`
//! against host-owned arrays for a number of steps.

use kinetics_core::stepping::{diffuse, react};
use kinetics_types::config::KineticsConfig;
use std::path::PathBuf;

fn load() -> KineticsConfig {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("configs")
        .join("two_compartment.json");
    let cfg = KineticsConfig::from_file(&path.to_string_lossy()).unwrap();
    cfg.validate().unwrap();
    cfg
}

/// Host layout: one cytosol compartment with [glucose, atp] -> [g6p, adp],
/// plus an outer compartment holding glucose only.
#[test]
fn test_glucose_uptake_and_phosphorylation() {
    let cfg = load();
    let hexokinase = &cfg.reactions[0];
    let membrane = &cfg.diffusions[0];

    let mut outside_glucose = 40.0;
    let mut substrates = [0.0, 5.0]; // glucose, atp
    let mut products = [0.0, 0.0]; // g6p, adp

    let total = |outside: f64, s: &[f64; 2], p: &[f64; 2]| outside + s[0] + p[0];
    let initial = total(outside_glucose, &substrates, &products);

    for _ in 0..200 {
        diffuse(membrane, &mut substrates[0], &mut outside_glucose);
        react(hexokinase, &mut substrates, &mut products).unwrap();
    }

    // Carbon is conserved across uptake and phosphorylation.
    let carbon = total(outside_glucose, &substrates, &products);
    assert!((carbon - initial).abs() < 1e-9, "carbon drifted: {carbon}");
    // Phosphate moves from ATP to ADP one for one.
    assert!((substrates[1] + products[1] - 5.0).abs() < 1e-9);
    assert!(products[0] > 0.0);
    assert!(substrates.iter().all(|&v| v >= 0.0));
}

#[test]
fn test_log_exchange_keeps_dimer_bookkeeping() {
    let cfg = load();
    let exchange = &cfg.diffusions[1];

    let mut monomer = 0.0;
    let mut dimer = 10.0;
    for _ in 0..50 {
        diffuse(exchange, &mut monomer, &mut dimer);
    }
    // factor_a / factor_b = 2: b loses two units per unit gained by a.
    assert!((2.0 * monomer + dimer - 10.0).abs() < 1e-9);
    assert!(monomer > 0.0);
}

#[test]
fn test_inhibited_reaction_slows_down() {
    let cfg = load();
    let aldolase = &cfg.reactions[1];

    let mut s = [20.0];
    let mut p = [0.0];
    let mut last_step = f64::INFINITY;
    for _ in 0..10 {
        let before = p[0];
        react(aldolase, &mut s, &mut p).unwrap();
        let step = p[0] - before;
        assert!(step < last_step, "step {step} did not shrink below {last_step}");
        last_step = step;
    }
}
