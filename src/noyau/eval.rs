//! Noyau — évaluation (forme fixe à 4 nombres / 3 opérateurs)
//!
//! n1 op1 (n2 op2 n3) op3 n4
//!
//! 1) le bloc entre parenthèses est toujours calculé en premier
//! 2) si op3 est prioritaire (× ÷) et op1 ne l’est pas (+ −) : n1 op1 (mid op3 n4)
//! 3) sinon, de gauche à droite : (n1 op1 mid) op3 n4
//!
//! Chaque étape binaire est arrondie à 10 décimales (demi s’éloigne de zéro,
//! quel que soit le mode final) puis bornée par ±10^12.

use super::arrondi::ModeArrondi;
use super::decimal::Decimal;
use super::erreur::{ErreurCalcul, Resultat};
use super::jetons::Operateur;

/// Borne (en valeur absolue) de tout résultat intermédiaire ou final.
pub const LIMITE: i64 = 1_000_000_000_000;

/// Décimales conservées après chaque opération binaire.
pub const ECHELLE_INTERMEDIAIRE: u32 = 10;

/// Arrondi des étapes intermédiaires (fixe, indépendant du mode final).
const ARRONDI_INTERMEDIAIRE: ModeArrondi = ModeArrondi::Math;

/// Une demande de calcul : construite, évaluée, jetée. Jamais modifiée.
///
/// Les opérateurs restent des jetons bruts : un jeton inconnu est signalé par
/// l’évaluateur (`OperateurInconnu`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EtatCalcul {
    nombres: [Decimal; 4],
    operateurs: [char; 3],
    mode: ModeArrondi,
}

impl EtatCalcul {
    pub fn new(nombres: [Decimal; 4], operateurs: [char; 3], mode: ModeArrondi) -> Self {
        Self {
            nombres,
            operateurs,
            mode,
        }
    }

    pub fn nombres(&self) -> &[Decimal; 4] {
        &self.nombres
    }

    pub fn operateurs(&self) -> [char; 3] {
        self.operateurs
    }

    /// Mode d’arrondi final (utilisé par le formatage, pas par l’évaluation).
    pub fn mode(&self) -> ModeArrondi {
        self.mode
    }
}

impl Operateur {
    /// Une étape binaire complète : opération exacte, arrondi à 10 décimales,
    /// contrôle de la limite.
    pub fn appliquer(self, gauche: &Decimal, droite: &Decimal) -> Resultat<Decimal> {
        let brut = match self {
            Operateur::Plus => gauche + droite,
            Operateur::Moins => gauche - droite,
            Operateur::Fois => gauche.multiplier(droite).ok_or_else(|| {
                ErreurCalcul::Precision("produit non représentable (échelle)".into())
            })?,
            Operateur::Divise => {
                if droite.is_zero() {
                    return Err(ErreurCalcul::DivisionParZero);
                }
                // quotient exact arrondi directement à l’échelle intermédiaire
                gauche
                    .diviser(droite, ECHELLE_INTERMEDIAIRE, ARRONDI_INTERMEDIAIRE)
                    .ok_or(ErreurCalcul::DivisionParZero)?
            }
        };

        let valeur = brut.quantifier(ECHELLE_INTERMEDIAIRE, ARRONDI_INTERMEDIAIRE);
        if valeur.abs() > Decimal::entier(LIMITE) {
            tracing::warn!(%gauche, op = %self, %droite, %valeur, "dépassement de la limite");
            return Err(ErreurCalcul::Depassement {
                valeur: valeur.to_string(),
            });
        }

        tracing::debug!(%gauche, op = %self, %droite, %valeur, "étape");
        Ok(valeur)
    }
}

/// Étape binaire sur un jeton brut.
pub fn appliquer_op(gauche: &Decimal, op: char, droite: &Decimal) -> Resultat<Decimal> {
    Operateur::try_from(op)?.appliquer(gauche, droite)
}

/// API publique : évalue l’état et retourne le résultat brut (10 décimales).
///
/// Pure et déterministe : même état => même résultat (ou même erreur).
pub fn evaluer(etat: &EtatCalcul) -> Resultat<Decimal> {
    let [n1, n2, n3, n4] = &etat.nombres;
    let [op1, op2, op3] = etat.operateurs;

    // 1) bloc entre parenthèses
    let mid = appliquer_op(n2, op2, n3)?;

    // 2) classes de priorité des opérateurs extérieurs
    let o1 = Operateur::try_from(op1)?;
    let o3 = Operateur::try_from(op3)?;

    // 3) / 4)
    if o3.est_prioritaire() && !o1.est_prioritaire() {
        tracing::trace!(op1 = %o1, op3 = %o3, "associativité à droite");
        let droite = o3.appliquer(&mid, n4)?;
        o1.appliquer(n1, &droite)
    } else {
        tracing::trace!(op1 = %o1, op3 = %o3, "associativité à gauche");
        let gauche = o1.appliquer(n1, &mid)?;
        o3.appliquer(&gauche, n4)
    }
}
