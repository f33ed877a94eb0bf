// src/noyau/validation.rs
//
// Contrôle de forme AVANT toute évaluation.
//
// Trois barrières, dans l'ordre:
// - entrée vide (ou blanche) => refus
// - parenthèses déséquilibrées => refus
// - forme acceptée, une fois parenthèses ET espaces retirés:
//     [chiffres]? ( opérateur chiffres+ | '.' chiffres+ )*
//
// NOTE: cette forme est volontairement PLUS FAIBLE que la grammaire réelle.
// Elle ne revérifie ni l'adjacence une fois les parenthèses retirées
// (ex: "(2)(3)" passe), ni l'unicité du point décimal ("1.2.3" passe).
// Le vrai tri est fait par le scanner et l'évaluateur.

/// Prédicat pur: l'expression mérite-t-elle une tentative d'évaluation ?
pub fn est_valide(expression: &str) -> bool {
    if expression.trim().is_empty() {
        return false;
    }
    if !parentheses_equilibrees(expression) {
        return false;
    }
    forme_acceptee(expression)
}

/// Balayage gauche-droite: profondeur +1 sur '(', -1 sur ')'.
/// Refus si une ')' arrive sans '(' ouvrante, ou s'il reste des '(' à la fin.
fn parentheses_equilibrees(expression: &str) -> bool {
    let mut profondeur: i64 = 0;

    for c in expression.chars() {
        match c {
            '(' => profondeur += 1,
            ')' => {
                profondeur -= 1;
                if profondeur < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }

    profondeur == 0
}

fn est_operateur(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/')
}

/// Forme acceptée, sur la chaîne débarrassée des parenthèses et des espaces.
fn forme_acceptee(expression: &str) -> bool {
    let chars: Vec<char> = expression
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '(' && *c != ')')
        .collect();

    let n = chars.len();
    let mut i: usize = 0;

    // run initial de chiffres (optionnel)
    while i < n && chars[i].is_ascii_digit() {
        i += 1;
    }

    loop {
        if i < n && est_operateur(chars[i]) {
            // opérateur suivi d'au moins un chiffre
            i += 1;
            if !(i < n && chars[i].is_ascii_digit()) {
                return false;
            }
            while i < n && chars[i].is_ascii_digit() {
                i += 1;
            }
            // partie fractionnaire optionnelle
            if i < n && chars[i] == '.' {
                i += 1;
                if !(i < n && chars[i].is_ascii_digit()) {
                    return false;
                }
                while i < n && chars[i].is_ascii_digit() {
                    i += 1;
                }
            }
        } else if i < n && chars[i] == '.' {
            // fraction sans opérateur devant (".5", et aussi "1.2.3")
            i += 1;
            if !(i < n && chars[i].is_ascii_digit()) {
                return false;
            }
            while i < n && chars[i].is_ascii_digit() {
                i += 1;
            }
        } else {
            break;
        }
    }

    i == n
}
