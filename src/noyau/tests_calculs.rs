//! Tests de calcul (campagne) : pipeline complet, du texte au rendu final.
//!
//! Couvre :
//! - priorités + associativité gauche
//! - parenthèses (substitution avant réduction externe)
//! - contrat de rendu (plafond 4 décimales, zéros retirés)
//! - table des rejets (forme, littéral, division par zéro)
//! - frontière publique: tous les échecs se replient en None
//! - lenience assumée de la validation (dernier empilé gagne)

use super::erreurs::ErreurEval;
use super::{evaluer_detaille, evaluer_expression};

fn ok(expr: &str) -> String {
    evaluer_expression(expr).unwrap_or_else(|| panic!("rejet inattendu pour {expr:?}"))
}

fn rejet(expr: &str) {
    assert_eq!(
        evaluer_expression(expr),
        None,
        "attendu un rejet pour {expr:?}"
    );
}

/* ------------------------ Priorités / associativité ------------------------ */

#[test]
fn calc_priorites() {
    assert_eq!(ok("2+3*4"), "14");
    assert_eq!(ok("2*3+4"), "10");
    assert_eq!(ok("1+2/2"), "2");
}

#[test]
fn calc_associativite_gauche() {
    // (10-2)-3 = 5, pas 10-(2-3) = 11
    assert_eq!(ok("10-2-3"), "5");
    assert_eq!(ok("100/10/5"), "2");
}

#[test]
fn calc_parentheses() {
    assert_eq!(ok("(1+2)*3"), "9");
    assert_eq!(ok("2*(1+3)/(2-1)"), "8");
}

#[test]
fn calc_exemple_complet() {
    // 1+38=39 ; 39*4.5=175.5 ; 1/2=0.5 ; 175.5-0.5=175
    assert_eq!(ok("(1 + 38) * 4.5 - 1 / 2"), "175");
}

/* ------------------------ Contrat de rendu ------------------------ */

#[test]
fn rendu_plafond_4_decimales() {
    assert_eq!(ok("1.00005+0"), "1.0001");
    assert_eq!(ok("1/3"), ".3334");
    assert_eq!(ok("0.1+0.2"), ".3001");
}

#[test]
fn rendu_valeurs_exactes_inchangees() {
    assert_eq!(ok("2.5+0"), "2.5");
    assert_eq!(ok("3.0+0"), "3");
    assert_eq!(ok("7/2"), "3.5");
}

#[test]
fn rendu_fraction_sans_zero_de_tete() {
    assert_eq!(ok("1/2"), ".5");
    assert_eq!(ok("0-1/2"), "-.5");
}

/* ------------------------ Table des rejets ------------------------ */

#[test]
fn rejet_entree_vide_ou_blanche() {
    rejet("");
    rejet("   ");
}

#[test]
fn rejet_parentheses_desequilibrees() {
    rejet("(1+2");
    rejet("1+2)");
}

#[test]
fn rejet_division_par_zero() {
    rejet("5/0");
    rejet("4/(3-3)");
    rejet("1/(0.5-0.5)");
}

#[test]
fn rejet_formes_et_litteraux() {
    rejet("1++2");
    rejet("1.2.3");
    rejet("+5");
    rejet("2+a");
}

/* ------------------------ Frontière publique ------------------------ */

#[test]
fn erreurs_typees_en_interne_rejet_unique_en_frontiere() {
    // en interne les genres restent distincts...
    assert_eq!(
        evaluer_detaille("5/0"),
        Err(ErreurEval::DivisionParZero)
    );
    assert_eq!(
        evaluer_detaille("(1+2"),
        Err(ErreurEval::ExpressionInvalide)
    );
    assert_eq!(
        evaluer_detaille("1.2.3"),
        Err(ErreurEval::NombreIllisible("1.2.3".to_string()))
    );

    // ...mais la frontière publique ne montre qu'un seul signal
    assert_eq!(evaluer_expression("5/0"), None);
    assert_eq!(evaluer_expression("(1+2"), None);
    assert_eq!(evaluer_expression("1.2.3"), None);
}

/* ------------------------ Lenience assumée ------------------------ */

#[test]
fn lenience_dernier_empile_gagne() {
    // la validation laisse passer ces formes; l'évaluateur garde la
    // dernière valeur produite (pas de multiplication implicite)
    assert_eq!(ok("(2)(3)"), "3");
    assert_eq!(ok("1(2+3)"), "5");
}

#[test]
fn lenience_parentheses_vides_rejetees_a_l_evaluation() {
    rejet("()");
}

/* ------------------------ Indépendance des appels ------------------------ */

#[test]
fn appels_successifs_sans_fuite() {
    rejet("5/0");
    assert_eq!(ok("2+2"), "4");
    rejet("(((");
    assert_eq!(ok("2+2"), "4");
    assert_eq!(ok("2+2"), "4");
}
