// ─────────────────────────────────────────────────────────────────────
// SCPN Kinetics Core — Reaction Equations
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Saturating single-step reaction laws.
//!
//! Both laws take the scarcest substrate as the limiting value and
//! normalize by the largest substrate factor:
//!
//! `change = rate * s_min / ((rate + s_min [+ Σ products]) * max_factor(S))`
//!
//! then move `change * factor` out of every substrate and into every
//! product. No clamping is applied: a negative `s_min` yields a negative
//! change and the reaction runs backwards for that step.

use crate::group::{apply_all, debug_assert_role, max_factor, min, sum};
use crate::stoich::{Group, Role};

/// Rate of change for the unsaturated single-substrate-limited law.
pub fn simple_change<const S: usize>(rate: f64, substrates: &Group<'_, S>) -> f64 {
    let substrate_val = min(substrates);
    (rate * substrate_val) / ((rate + substrate_val) * max_factor(substrates))
}

/// Rate of change with accumulated product in the denominator.
pub fn product_inhibition_change<const S: usize, const P: usize>(
    rate: f64,
    substrates: &Group<'_, S>,
    products: &Group<'_, P>,
) -> f64 {
    let substrate_val = min(substrates);
    let divisor = rate + substrate_val + sum(products);
    (rate * substrate_val) / (divisor * max_factor(substrates))
}

/// One step of the simple saturating law.
pub fn simple_equation<const S: usize, const P: usize>(
    rate: f64,
    mut substrates: Group<'_, S>,
    mut products: Group<'_, P>,
) {
    debug_assert!(rate >= 0.0, "reaction rate must be >= 0, got {rate}");
    debug_assert_sides(&substrates, &products);
    let change = simple_change(rate, &substrates);
    trace_change("simple", change);
    apply_all(&mut substrates, change);
    apply_all(&mut products, change);
}

/// One step of the product-inhibited saturating law.
pub fn product_inhibition_equation<const S: usize, const P: usize>(
    rate: f64,
    mut substrates: Group<'_, S>,
    mut products: Group<'_, P>,
) {
    debug_assert!(rate >= 0.0, "reaction rate must be >= 0, got {rate}");
    debug_assert_sides(&substrates, &products);
    let change = product_inhibition_change(rate, &substrates, &products);
    trace_change("product_inhibition", change);
    apply_all(&mut substrates, change);
    apply_all(&mut products, change);
}

#[inline]
fn debug_assert_sides<const S: usize, const P: usize>(
    substrates: &Group<'_, S>,
    products: &Group<'_, P>,
) {
    debug_assert_role(substrates, Role::Substrate);
    debug_assert_role(products, Role::Product);
}

#[inline]
fn trace_change(law: &str, change: f64) {
    if change < 0.0 {
        log::debug!("{law} reaction inverted: change = {change:e}");
    } else {
        log::trace!("{law} reaction step: change = {change:e}");
    }
}
