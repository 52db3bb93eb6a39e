// src/noyau/format.rs

use super::arrondi::ModeArrondi;
use super::decimal::Decimal;

/* ------------------------ Valeur finale (entier) ------------------------ */

/// Arrondit le résultat brut à l’entier selon `mode` et le rend en texte.
///
/// Totale et pure : le résultat brut n’est pas modifié, on peut donc
/// recalculer l’affichage dans un autre mode sans relancer l’évaluation.
/// Pas de ".0", pas de séparateur de milliers, "-0" devient "0".
pub fn formater_final(valeur: &Decimal, mode: ModeArrondi) -> String {
    let entier = valeur.quantifier(0, mode);
    // Display de Decimal n’émet jamais de signe pour une mantisse nulle
    entier.to_string()
}

/* ------------------------ Valeur brute (lisible) ------------------------ */

/// Affichage du résultat brut :
/// - milliers séparés par une espace
/// - zéros non significatifs retirés, au moins une décimale (1 000 000.0)
pub fn formater_brut(valeur: &Decimal) -> String {
    let (int_part, frac) = valeur.parties();

    let frac = frac.trim_end_matches('0');
    let frac = if frac.is_empty() { "0" } else { frac };

    let signe = if valeur.is_negative() { "-" } else { "" };
    format!("{signe}{}.{frac}", grouper_milliers(&int_part.to_string()))
}

fn grouper_milliers(chiffres: &str) -> String {
    let n = chiffres.len();
    let mut out = String::with_capacity(n + n / 3);
    for (i, c) in chiffres.chars().enumerate() {
        if i > 0 && (n - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}
