// src/noyau/erreurs.rs

use thiserror::Error;

/// Échecs internes du noyau.
///
/// Les variantes restent distinctes pour les tests et l'affichage UI,
/// mais la frontière publique (`evaluer_expression`) les replie toutes
/// en un même `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurEval {
    /// Entrée vide, parenthèses déséquilibrées, forme refusée par la
    /// validation, ou piles incohérentes en cours d'évaluation.
    #[error("expression invalide")]
    ExpressionInvalide,

    /// Littéral numérique illisible (ex: deux points dans un même nombre).
    #[error("nombre illisible: {0}")]
    NombreIllisible(String),

    #[error("division par zéro")]
    DivisionParZero,

    /// Résultat hors du domaine fini de f64 (dépassement).
    #[error("résultat non fini")]
    ResultatNonFini,
}
