// ─────────────────────────────────────────────────────────────────────
// SCPN Kinetics Core — Stoichiometric Reference
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Non-owning handles that bind a stoichiometric factor to a host scalar.
//!
//! References are cheap stack values: build them right before an equation
//! call over whatever storage the host is stepping, and let the call consume
//! them.

use kinetics_types::factor::Factor;

/// Which side of a reaction a quantity sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Consumed by the forward reaction.
    Substrate,
    /// Produced by the forward reaction.
    Product,
}

/// A host-owned scalar weighted by a stoichiometric factor.
#[derive(Debug)]
pub struct StoichRef<'a> {
    destination: &'a mut f64,
    factor: Factor,
    role: Role,
}

/// Fixed-arity, ordered group of references taking part in one call.
pub type Group<'a, const N: usize> = [StoichRef<'a>; N];

impl<'a> StoichRef<'a> {
    pub fn new(destination: &'a mut f64, factor: Factor, role: Role) -> Self {
        StoichRef {
            destination,
            factor,
            role,
        }
    }

    pub fn substrate(destination: &'a mut f64, factor: Factor) -> Self {
        Self::new(destination, factor, Role::Substrate)
    }

    pub fn product(destination: &'a mut f64, factor: Factor) -> Self {
        Self::new(destination, factor, Role::Product)
    }

    #[inline]
    pub fn factor(&self) -> Factor {
        self.factor
    }

    #[inline]
    pub fn role(&self) -> Role {
        self.role
    }

    /// Current value of the bound host scalar.
    #[inline]
    pub fn value(&self) -> f64 {
        *self.destination
    }

    #[inline]
    pub fn add(&mut self, delta: f64) {
        *self.destination += delta;
    }
}

/// Bind every element of a contiguous host array, in order, with the
/// matching factor and a shared role.
pub fn bind_group<'a, const N: usize>(
    values: &'a mut [f64; N],
    factors: [Factor; N],
    role: Role,
) -> Group<'a, N> {
    let mut factors = factors.into_iter();
    values.each_mut().map(|destination| {
        let factor = factors.next().unwrap_or_default();
        StoichRef::new(destination, factor, role)
    })
}
