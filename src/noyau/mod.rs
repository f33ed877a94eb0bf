//! Noyau bi-pile
//!
//! Organisation interne :
//! - erreurs.rs    : erreurs typées (repliées en rejet unique en frontière)
//! - validation.rs : contrôle de forme avant toute évaluation
//! - jetons.rs     : tokenisation (littéraux, opérateurs, parenthèses)
//! - eval.rs       : évaluation à deux piles (nombres / opérations)
//! - format.rs     : plafond exact à 4 décimales + rendu texte

pub mod erreurs;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod validation;

#[cfg(test)]
mod tests_calculs;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use eval::{evaluer_detaille, evaluer_expression};
