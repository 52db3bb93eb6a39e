// src/noyau/lecture.rs
//
// Lecture d’un champ de saisie -> Decimal exact.
// - espaces autour ignorés
// - espaces internes = séparateurs de milliers (structure vérifiée)
// - ',' ou '.' comme séparateur décimal (un seul)
// - exposant (e/E) refusé, quelle que soit la grandeur
// - la limite 10^12 n’est PAS vérifiée ici (c’est le rôle de l’évaluateur)

use num_bigint::BigInt;

use super::decimal::Decimal;
use super::erreur::{ErreurCalcul, MotifSaisie, Resultat};

/// Que faire d’un champ vide (ou d’un séparateur seul) ?
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PolitiqueVide {
    /// Champ vide = erreur de saisie.
    #[default]
    Erreur,
    /// Champ vide = 0.
    Zero,
}

/// Lecture stricte : un champ vide est une erreur.
pub fn normaliser(texte: &str) -> Resultat<Decimal> {
    normaliser_avec(texte, PolitiqueVide::Erreur)
}

pub fn normaliser_avec(texte: &str, politique: PolitiqueVide) -> Resultat<Decimal> {
    let err = |motif| ErreurCalcul::saisie(texte, motif);

    let t = texte.trim();

    // 1) exposant : refusé avant toute autre analyse (message précis)
    if t.chars().any(|c| c == 'e' || c == 'E') {
        return Err(err(MotifSaisie::Exposant));
    }

    // 2) virgule -> point, puis alphabet autorisé
    let t: String = t.chars().map(|c| if c == ',' { '.' } else { c }).collect();
    if let Some(c) = t
        .chars()
        .find(|c| !(c.is_ascii_digit() || matches!(c, '+' | '-' | '.') || c.is_whitespace()))
    {
        return Err(err(MotifSaisie::CaractereInvalide(c)));
    }

    // 3) vide ou séparateur seul (signé ou non)
    let compact: String = t.chars().filter(|c| !c.is_whitespace()).collect();
    let sans_signe = t.strip_prefix(&['+', '-'][..]).unwrap_or(t.as_str());
    if compact.is_empty() || sans_signe == "." {
        return match politique {
            PolitiqueVide::Zero => Ok(Decimal::zero()),
            PolitiqueVide::Erreur => Err(err(MotifSaisie::Vide)),
        };
    }

    // 4) signe : une seule fois, en tête, collé aux chiffres
    let (negatif, corps) = match t.chars().next() {
        Some('-') => (true, &t[1..]),
        Some('+') => (false, &t[1..]),
        _ => (false, t.as_str()),
    };
    if corps.starts_with(char::is_whitespace) || corps.contains(&['+', '-'][..]) {
        return Err(err(MotifSaisie::Signe));
    }

    // 5) séparateur décimal
    let mut morceaux = corps.split('.');
    let partie_entiere = morceaux.next().unwrap_or("");
    let partie_frac = morceaux.next().unwrap_or("");
    if morceaux.next().is_some() {
        return Err(err(MotifSaisie::SeparateursMultiples));
    }

    // 6) groupement des milliers (partie entière seulement)
    if partie_frac.contains(char::is_whitespace) {
        return Err(err(MotifSaisie::Groupement));
    }
    let chiffres_entiers = lire_groupes(partie_entiere).ok_or_else(|| err(MotifSaisie::Groupement))?;

    // 7) mantisse + échelle
    let mut chiffres = chiffres_entiers;
    chiffres.push_str(partie_frac);
    if chiffres.is_empty() {
        return Err(err(MotifSaisie::SansChiffre));
    }

    let echelle = u32::try_from(partie_frac.len())
        .map_err(|_| ErreurCalcul::Precision("trop de décimales".into()))?;
    let mut mantisse = BigInt::parse_bytes(chiffres.as_bytes(), 10)
        .ok_or_else(|| err(MotifSaisie::SansChiffre))?;
    if negatif {
        mantisse = -mantisse;
    }

    let valeur = Decimal::new(mantisse, echelle);
    tracing::trace!(texte, %valeur, "saisie normalisée");
    Ok(valeur)
}

/// Partie entière -> chiffres seuls.
/// Sans espace : n’importe quelle longueur (même vide, ex: ".5").
/// Avec espaces : groupe de tête 1 à 3 chiffres, puis groupes de 3 exactement.
fn lire_groupes(partie: &str) -> Option<String> {
    if !partie.contains(char::is_whitespace) {
        return Some(partie.to_string());
    }

    let mut groupes = partie.split(char::is_whitespace);
    let tete = groupes.next()?;
    if tete.is_empty() || tete.len() > 3 {
        return None;
    }

    let mut out = tete.to_string();
    for g in groupes {
        if g.len() != 3 {
            return None;
        }
        out.push_str(g);
    }
    Some(out)
}
