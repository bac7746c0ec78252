// ─────────────────────────────────────────────────────────────────────
// SCPN Kinetics Core — Kinetics Core
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Reaction and diffusion kinetics over host-owned quantities.
//!
//! The host keeps the concentrations; each step it binds the participating
//! scalars as [`stoich::StoichRef`]s with their stoichiometric factors and
//! calls one equation, which reads every member once, computes a single
//! change and writes every member in place.
//!
//! ```
//! use kinetics_core::reaction::simple_equation;
//! use kinetics_core::stoich::StoichRef;
//! use kinetics_types::factor::Factor;
//!
//! let (mut glucose, mut g6p) = (10.0, 0.0);
//! simple_equation(
//!     1.0,
//!     [StoichRef::substrate(&mut glucose, Factor::ONE)],
//!     [StoichRef::product(&mut g6p, Factor::ONE)],
//! );
//! assert!((g6p - 10.0 / 11.0).abs() < 1e-12);
//! ```
//!
//! Preconditions (non-empty groups, non-negative rates, positive volumes)
//! are not checked at runtime. Debug builds assert them.

pub mod diffusion;
pub mod group;
pub mod reaction;
pub mod stepping;
pub mod stoich;
