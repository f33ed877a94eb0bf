//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - on accepte les erreurs attendues (division par zéro sur expressions
//!   bien formées; rejet quelconque sur soupe de caractères)
//! - invariants clés : jamais de panique; même entrée => même sortie;
//!   parenthéser l'expression entière ne change rien

use std::time::{Duration, Instant};

use super::evaluer_detaille;
use super::evaluer_expression;
use crate::noyau::erreurs::ErreurEval;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_atome(rng: &mut Rng) -> String {
    // petits entiers, plus quelques décimaux; 0 inclus (utile pour
    // provoquer des divisions par zéro)
    if rng.coin() {
        format!("{}", rng.pick(10))
    } else {
        format!("{}.{}", rng.pick(10), rng.pick(10))
    }
}

fn gen_operateur(rng: &mut Rng) -> char {
    match rng.pick(4) {
        0 => '+',
        1 => '-',
        2 => '*',
        _ => '/',
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_atome(rng);
    }

    match rng.pick(4) {
        0 => gen_atome(rng),
        1 => format!(
            "({}{}{})",
            gen_expr(rng, depth - 1),
            gen_operateur(rng),
            gen_expr(rng, depth - 1)
        ),
        _ => format!(
            "{}{}{}",
            gen_atome(rng),
            gen_operateur(rng),
            gen_expr(rng, depth - 1)
        ),
    }
}

fn gen_soupe(rng: &mut Rng) -> String {
    const CHARSET: &[u8] = b"0123456789.+-*/() abc";
    let longueur = 1 + rng.pick(40) as usize;
    (0..longueur)
        .map(|_| CHARSET[rng.pick(CHARSET.len() as u32) as usize] as char)
        .collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_expressions_bien_formees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // Même seed => mêmes expressions => mêmes sorties (déterminisme)
    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;

    for _ in 0..200 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);

        match evaluer_detaille(&expr) {
            Ok(texte) => {
                assert!(!texte.is_empty(), "sortie vide pour {expr:?}");
                seen_ok += 1;

                // parenthéser l'expression entière ne change rien
                let emballee = format!("({expr})");
                assert_eq!(
                    evaluer_expression(&emballee).as_deref(),
                    Some(texte.as_str()),
                    "expr={expr:?}"
                );
            }
            // seule faute légitime sur une expression bien formée
            Err(ErreurEval::DivisionParZero) => {}
            Err(e) => panic!("erreur non attendue: expr={expr:?} err={e}"),
        }

        // même entrée => même sortie
        assert_eq!(
            evaluer_expression(&expr),
            evaluer_expression(&expr),
            "non-déterminisme sur {expr:?}"
        );
    }

    assert!(seen_ok > 50, "trop peu de succès: {seen_ok}");
}

#[test]
fn fuzz_safe_soupe_de_caracteres_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..300 {
        budget(t0, max);

        let soupe = gen_soupe(&mut rng);

        // succès ou rejet, peu importe: jamais de panique, et déterministe
        let a = evaluer_expression(&soupe);
        let b = evaluer_expression(&soupe);
        assert_eq!(a, b, "non-déterminisme sur {soupe:?}");
    }
}

#[test]
fn fuzz_safe_chaine_plate_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // longue chaîne d'opérateurs de même priorité: la boucle
    // “réduire puis retenter” doit rester en pile constante
    let mut expr = String::from("1");
    for _ in 0..799 {
        expr.push_str("+1");
    }
    budget(t0, max);

    assert_eq!(evaluer_expression(&expr).as_deref(), Some("800"));
}

#[test]
fn fuzz_safe_imbrication_profonde() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let profondeur = 400;
    let expr = format!("{}{}{}", "(".repeat(profondeur), "2+3", ")".repeat(profondeur));
    budget(t0, max);

    assert_eq!(evaluer_expression(&expr).as_deref(), Some("5"));
}
