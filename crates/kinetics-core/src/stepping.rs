// ─────────────────────────────────────────────────────────────────────
// SCPN Kinetics Core — Configured Stepping
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Apply configured reaction and diffusion channels to host arrays.
//!
//! The only runtime check here is that the configured factor count matches
//! the arity of the storage the host binds. Rates and volumes are taken as
//! given; run `KineticsConfig::validate` once after loading.

use crate::diffusion::{clamp_diffusion, log_diffusion};
use crate::reaction::{product_inhibition_equation, simple_equation};
use crate::stoich::{bind_group, Role, StoichRef};
use kinetics_types::config::{DiffusionLaw, DiffusionParams, RateLaw, ReactionParams};
use kinetics_types::error::{KineticsError, KineticsResult};
use kinetics_types::factor::Factor;

/// One step of a configured reaction over `S` substrates and `P` products.
pub fn react<const S: usize, const P: usize>(
    params: &ReactionParams,
    substrates: &mut [f64; S],
    products: &mut [f64; P],
) -> KineticsResult<()> {
    let substrate_factors = fixed_factors::<S>(&params.name, &params.substrates)?;
    let product_factors = fixed_factors::<P>(&params.name, &params.products)?;
    let s = bind_group(substrates, substrate_factors, Role::Substrate);
    let p = bind_group(products, product_factors, Role::Product);
    match params.law {
        RateLaw::Simple => simple_equation(params.rate, s, p),
        RateLaw::ProductInhibition => product_inhibition_equation(params.rate, s, p),
    }
    Ok(())
}

/// One step of a configured diffusion channel between `a` and `b`.
pub fn diffuse(params: &DiffusionParams, a: &mut f64, b: &mut f64) {
    let a = StoichRef::substrate(a, params.factor_a);
    let b = StoichRef::substrate(b, params.factor_b);
    let (volume_a, volume_b) = (params.volume_a, params.volume_b);
    match params.law {
        DiffusionLaw::Clamp => clamp_diffusion(params.rate, a, b, volume_a, volume_b),
        DiffusionLaw::Log => log_diffusion(params.rate, a, b, volume_a, volume_b),
    }
}

fn fixed_factors<const N: usize>(name: &str, factors: &[Factor]) -> KineticsResult<[Factor; N]> {
    <[Factor; N]>::try_from(factors).map_err(|_| KineticsError::ArityMismatch {
        name: name.to_string(),
        expected: factors.len(),
        actual: N,
    })
}
