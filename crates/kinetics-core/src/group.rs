// ─────────────────────────────────────────────────────────────────────
// SCPN Kinetics Core — Group Reductions
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Reductions and batch mutators over fixed-arity reference groups.
//!
//! Groups must be non-empty for `min` and `max_factor`. That is a caller
//! contract, asserted in debug builds only.

use crate::stoich::{Group, Role};

/// Product of the current values.
pub fn product<const N: usize>(group: &Group<'_, N>) -> f64 {
    group.iter().map(|r| r.value()).product()
}

/// Sum of the current values.
pub fn sum<const N: usize>(group: &Group<'_, N>) -> f64 {
    group.iter().map(|r| r.value()).sum()
}

/// Smallest current value. Left-to-right scan; an equal value never
/// replaces the earlier candidate.
pub fn min<const N: usize>(group: &Group<'_, N>) -> f64 {
    debug_assert!(N > 0, "min requires a non-empty group");
    let mut lowest = group[0].value();
    for r in &group[1..] {
        let v = r.value();
        if v < lowest {
            lowest = v;
        }
    }
    lowest
}

/// Largest stoichiometric factor. Depends only on the factors, never on
/// the bound values.
pub fn max_factor<const N: usize>(group: &Group<'_, N>) -> f64 {
    debug_assert!(N > 0, "max_factor requires a non-empty group");
    group
        .iter()
        .map(|r| r.factor().value())
        .fold(f64::NEG_INFINITY, f64::max)
}

/// `destination[i] -= rate * factor[i]` for every member.
pub fn decrease_all<const N: usize>(group: &mut Group<'_, N>, rate: f64) {
    for r in group.iter_mut() {
        let delta = rate * r.factor().value();
        r.add(-delta);
    }
}

/// `destination[i] += rate * factor[i]` for every member.
pub fn increase_all<const N: usize>(group: &mut Group<'_, N>, rate: f64) {
    for r in group.iter_mut() {
        let delta = rate * r.factor().value();
        r.add(delta);
    }
}

/// Role-directed update: a substrate group goes through `decrease_all`,
/// a product group through `increase_all`. The first member's role
/// decides; groups are expected to carry a single role.
pub fn apply_all<const N: usize>(group: &mut Group<'_, N>, rate: f64) {
    let Some(role) = group.first().map(|r| r.role()) else {
        return;
    };
    debug_assert_role(group, role);
    match role {
        Role::Substrate => decrease_all(group, rate),
        Role::Product => increase_all(group, rate),
    }
}

/// Debug-only check that every member of `group` carries `role`.
#[inline]
pub fn debug_assert_role<const N: usize>(group: &Group<'_, N>, role: Role) {
    debug_assert!(
        group.iter().all(|r| r.role() == role),
        "expected a {role:?} group, found roles {:?}",
        group.iter().map(|r| r.role()).collect::<Vec<_>>()
    );
}
