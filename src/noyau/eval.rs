//! Noyau — évaluation à deux piles (pipeline réel)
//!
//! validation -> tokenize -> piles (nombres / opérations) -> format
//!
//! Discipline des piles:
//! - un nombre s'empile sur `nombres`
//! - '(' s'empile sur `operations` sans priorité
//! - ')' déclenche un run de réduction jusqu'à la '(' correspondante
//! - un opérateur réduit UNE étape puis retente, tant que le sommet est un
//!   opérateur au moins aussi prioritaire (boucle explicite, pas de
//!   récursion: une longue chaîne "1+1+1+..." reste en pile constante)
//!
//! Les deux piles sont locales à l'appel: rien ne survit entre deux
//! évaluations indépendantes.

use num_traits::Zero;

use super::erreurs::ErreurEval;
use super::format::format_resultat;
use super::jetons::{tokenize, Tok};
use super::validation::est_valide;

/// Priorité fixe: '+','-' => 1 ; '*','/' => 2 ; 0 pour tout le reste.
fn priorite(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        _ => 0,
    }
}

/// Applique un opérateur binaire. `y` est l'opérande DROIT (empilé en dernier).
fn appliquer(op: Tok, x: f64, y: f64) -> Result<f64, ErreurEval> {
    match op {
        Tok::Plus => Ok(x + y),
        Tok::Minus => Ok(x - y),
        Tok::Star => Ok(x * y),
        Tok::Slash => {
            // couvre +0.0 et -0.0
            if y.is_zero() {
                return Err(ErreurEval::DivisionParZero);
            }
            Ok(x / y)
        }
        _ => Err(ErreurEval::ExpressionInvalide),
    }
}

/// Une étape de réduction: dépile l'opérateur du sommet et ses deux
/// opérandes (droit d'abord), empile le résultat.
fn reduire_une_fois(
    operations: &mut Vec<Tok>,
    nombres: &mut Vec<f64>,
) -> Result<(), ErreurEval> {
    let op = operations.pop().ok_or(ErreurEval::ExpressionInvalide)?;
    let y = nombres.pop().ok_or(ErreurEval::ExpressionInvalide)?;
    let x = nombres.pop().ok_or(ErreurEval::ExpressionInvalide)?;
    nombres.push(appliquer(op, x, y)?);
    Ok(())
}

/// Run de réduction: réduit jusqu'à pile vide ou '(' au sommet.
fn reduire_pile(operations: &mut Vec<Tok>, nombres: &mut Vec<f64>) -> Result<(), ErreurEval> {
    while let Some(haut) = operations.last() {
        if matches!(haut, Tok::LPar) {
            break;
        }
        reduire_une_fois(operations, nombres)?;
    }
    Ok(())
}

/// Évalue une expression validée et rend la valeur f64 brute.
///
/// Les erreurs restent typées ici; c'est `evaluer_expression` qui les
/// replie en un signal de rejet unique.
pub fn evaluer_valeur(expression: &str) -> Result<f64, ErreurEval> {
    if !est_valide(expression) {
        return Err(ErreurEval::ExpressionInvalide);
    }

    let jetons = tokenize(expression)?;

    let mut operations: Vec<Tok> = Vec::new();
    let mut nombres: Vec<f64> = Vec::new();

    for jeton in jetons {
        match jeton {
            Tok::Num(v) => nombres.push(v),

            Tok::LPar => operations.push(jeton),

            Tok::RPar => {
                reduire_pile(&mut operations, &mut nombres)?;
                // la '(' appariée est jetée, sans effet sur `nombres`
                match operations.pop() {
                    Some(Tok::LPar) => {}
                    _ => return Err(ErreurEval::ExpressionInvalide),
                }
            }

            _ => {
                // opérateur: réduire une fois puis retenter le même jeton
                while let Some(haut) = operations.last() {
                    if matches!(haut, Tok::LPar) || priorite(haut) < priorite(&jeton) {
                        break;
                    }
                    reduire_une_fois(&mut operations, &mut nombres)?;
                }
                operations.push(jeton);
            }
        }
    }

    // run final: vide toute la pile (pas de '(' restante si équilibrée)
    reduire_pile(&mut operations, &mut nombres)?;
    if !operations.is_empty() {
        return Err(ErreurEval::ExpressionInvalide);
    }

    // Si la validation (volontairement laxiste) a laissé passer plusieurs
    // valeurs ("(2)(3)"), la dernière empilée gagne.
    nombres.pop().ok_or(ErreurEval::ExpressionInvalide)
}

/// Pipeline complet avec erreur typée (UI + tests).
pub fn evaluer_detaille(expression: &str) -> Result<String, ErreurEval> {
    let valeur = evaluer_valeur(expression)?;
    format_resultat(valeur)
}

/// API publique: résultat formaté, ou `None` — signal de rejet unique,
/// quel que soit le genre d'échec (forme, littéral, division par zéro).
pub fn evaluer_expression(expression: &str) -> Option<String> {
    evaluer_detaille(expression).ok()
}
