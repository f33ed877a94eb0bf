// src/noyau/format.rs
//
// Rendu du résultat: plafond à 4 décimales, EXACT.
//
// Règle: la valeur affichée est le plus petit nombre à 4 décimales qui soit
// ≥ à la valeur représentée (plafond; donc troncature vers zéro pour les
// négatifs). Le plafond est calculé en entier scalé (BigInt), jamais en
// flottant, sur la représentation décimale la plus courte qui retombe
// exactement sur la valeur f64 (celle du Display de Rust).
//
// Rendu:
// - séparateur '.' ASCII, jamais de convention régionale
// - zéros finaux de la fraction retirés; point omis si valeur entière
// - partie entière nulle => zéro de tête omis (".5", "-.25"); zéro => "0"
// - pas de signe '+', pas de séparateur de milliers, pas de notation
//   scientifique

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

use super::erreurs::ErreurEval;

/// Nombre maximal de chiffres après le point.
pub const DECIMALES_MAX: usize = 4;

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Formate une valeur finie sous le contrat de plafond à 4 décimales.
/// Une valeur non finie (dépassement f64) est un rejet, pas un résultat.
pub fn format_resultat(valeur: f64) -> Result<String, ErreurEval> {
    if !valeur.is_finite() {
        return Err(ErreurEval::ResultatNonFini);
    }

    // Display de f64 = décimal le plus court qui retombe sur `valeur`,
    // sans exposant. C'est cette représentation qu'on plafonne.
    let texte = format!("{valeur}");
    let rationnel = decimal_en_rationnel(&texte);
    let plafonne = plafonner_echelle(&rationnel, DECIMALES_MAX);
    Ok(echelle_vers_decimal(plafonne, DECIMALES_MAX))
}

/// "-12.345" (signe optionnel, point optionnel) -> rationnel exact.
/// L'entrée vient du Display de f64: uniquement des chiffres ASCII.
fn decimal_en_rationnel(texte: &str) -> BigRational {
    let (negatif, corps) = match texte.strip_prefix('-') {
        Some(reste) => (true, reste),
        None => (false, texte),
    };

    let (entier, frac) = match corps.split_once('.') {
        Some((e, f)) => (e, f),
        None => (corps, ""),
    };

    let mut numerateur = BigInt::zero();
    for c in entier.chars().chain(frac.chars()) {
        numerateur = numerateur * 10u32 + u32::from(c as u8 - b'0');
    }
    if negatif {
        numerateur = -numerateur;
    }

    BigRational::new(numerateur, pow10(frac.len()))
}

/// plafond(r * 10^decimales) en entier.
/// Le dénominateur d'un BigRational est toujours > 0, donc le quotient
/// tronqué remonte de 1 exactement quand le reste est > 0.
fn plafonner_echelle(r: &BigRational, decimales: usize) -> BigInt {
    let numerateur = r.numer() * pow10(decimales);
    let denominateur = r.denom();

    let quotient = &numerateur / denominateur;
    let reste = &numerateur % denominateur;

    if reste.is_positive() {
        quotient + 1u32
    } else {
        quotient
    }
}

/// Convertit un entier “scalé” (×10^decimales) en texte décimal final.
fn echelle_vers_decimal(mut plafonne: BigInt, decimales: usize) -> String {
    let negatif = plafonne.is_negative();
    if negatif {
        plafonne = -plafonne;
    }

    let echelle = pow10(decimales);
    let partie_entiere = &plafonne / &echelle;
    let partie_frac = &plafonne % &echelle;

    let mut frac = partie_frac.to_str_radix(10);
    while frac.len() < decimales {
        frac.insert(0, '0');
    }
    while frac.ends_with('0') {
        frac.pop();
    }

    let mut texte = String::new();
    if negatif {
        texte.push('-');
    }
    if partie_entiere.is_zero() && !frac.is_empty() {
        // partie entière nulle avec fraction: zéro de tête omis (".5")
    } else {
        texte.push_str(&partie_entiere.to_string());
    }
    if !frac.is_empty() {
        texte.push('.');
        texte.push_str(&frac);
    }
    texte
}
