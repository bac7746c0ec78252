// ─────────────────────────────────────────────────────────────────────
// SCPN Kinetics Core — Diffusion Equations
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Two-compartment exchange of one species, possibly in two molecular forms.
//!
//! `a` lives in a compartment of `volume_a`, `b` in `volume_b`. Flux runs
//! down the concentration gradient `b/volume_b - a/volume_a`. Whatever is
//! added to `a` is removed from `b` scaled by `factor_a / factor_b`, so
//! `Δa * ratio == -Δb` after every call.

use crate::stoich::StoichRef;

/// Gradient `conc_b - conc_a` and exchange ratio `factor_a / factor_b`.
#[inline]
fn gradient(a: &StoichRef<'_>, b: &StoichRef<'_>, volume_a: f64, volume_b: f64) -> (f64, f64) {
    debug_assert!(volume_a > 0.0, "volume_a must be > 0, got {volume_a}");
    debug_assert!(volume_b > 0.0, "volume_b must be > 0, got {volume_b}");
    let conc_a = a.value() / volume_a;
    let conc_b = b.value() / volume_b;
    (conc_b - conc_a, a.factor().ratio(b.factor()))
}

/// Linear (Fickian) transfer: `change = rate * diff * volume_a`.
///
/// Unbounded per step; a large `rate` overshoots equilibrium. Choosing a
/// stable rate for the step size is up to the host.
pub fn clamp_diffusion(
    rate: f64,
    mut a: StoichRef<'_>,
    mut b: StoichRef<'_>,
    volume_a: f64,
    volume_b: f64,
) {
    debug_assert!(rate >= 0.0, "diffusion rate must be >= 0, got {rate}");
    let (diff, ratio) = gradient(&a, &b, volume_a, volume_b);
    let change = rate * diff * volume_a;
    log::trace!("clamp diffusion step: diff = {diff:e}, change = {change:e}");
    a.add(change);
    b.add(-change * ratio);
}

/// Saturating transfer: `change = rate * diff / (rate + |diff|) * volume_a`.
///
/// `|change|` stays below `rate * volume_a` and approaches it as the
/// gradient grows. Zero gradient gives exactly zero change.
pub fn log_diffusion(
    rate: f64,
    mut a: StoichRef<'_>,
    mut b: StoichRef<'_>,
    volume_a: f64,
    volume_b: f64,
) {
    debug_assert!(rate >= 0.0, "diffusion rate must be >= 0, got {rate}");
    let (diff, ratio) = gradient(&a, &b, volume_a, volume_b);
    let change = (rate * diff) / (rate + diff.abs()) * volume_a;
    log::trace!("log diffusion step: diff = {diff:e}, change = {change:e}");
    a.add(change);
    b.add(-change * ratio);
}
