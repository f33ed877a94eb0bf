//! Calculatrice bi-pile
//!
//! Le noyau évalue une expression arithmétique texte (chiffres, point
//! décimal, `+ - * /`, parenthèses) et rend soit un résultat formaté
//! (plafond exact à 4 décimales), soit un signal de rejet unique.
//!
//! - `noyau` : validation -> jetons -> évaluation à deux piles -> format
//! - `app`   : calculatrice egui (natif + web) par-dessus le noyau

pub mod app;
pub mod noyau;

// API publique minimale
pub use noyau::{evaluer_detaille, evaluer_expression};
