// src/noyau/erreur.rs
//
// Erreurs du noyau (une seule énumération, messages affichables tels quels).
// - Saisie           : texte numérique mal formé (l’utilisateur corrige)
// - DivisionParZero  : diviseur exactement nul à l’une des trois étapes
// - Depassement      : |résultat| > limite (10^12) à l’une des trois étapes
// - OperateurInconnu : jeton hors {+, −, ×, ÷} => défaut de l’appelant
// - Precision        : filet de sécurité (arithmétique non représentable)

use thiserror::Error;

/// Raison précise d’un refus de saisie.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MotifSaisie {
    Vide,
    Exposant,
    CaractereInvalide(char),
    SeparateursMultiples,
    Groupement,
    Signe,
    SansChiffre,
}

impl std::fmt::Display for MotifSaisie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MotifSaisie::Vide => write!(f, "champ vide"),
            MotifSaisie::Exposant => write!(f, "notation exponentielle interdite"),
            MotifSaisie::CaractereInvalide(c) => write!(f, "caractère inattendu: '{c}'"),
            MotifSaisie::SeparateursMultiples => write!(f, "trop de séparateurs décimaux"),
            MotifSaisie::Groupement => write!(f, "groupement des milliers incorrect"),
            MotifSaisie::Signe => write!(f, "signe mal placé"),
            MotifSaisie::SansChiffre => write!(f, "aucun chiffre"),
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ErreurCalcul {
    #[error("nombre invalide '{texte}': {motif}")]
    Saisie { texte: String, motif: MotifSaisie },

    #[error("division par zéro")]
    DivisionParZero,

    /// `valeur` : le résultat (déjà arrondi) qui a franchi la limite.
    #[error("dépassement: {valeur} sort de la plage autorisée (±1 000 000 000 000)")]
    Depassement { valeur: String },

    #[error("opérateur inconnu: '{0}'")]
    OperateurInconnu(char),

    #[error("précision insuffisante: {0}")]
    Precision(String),
}

impl ErreurCalcul {
    pub(crate) fn saisie(texte: &str, motif: MotifSaisie) -> Self {
        ErreurCalcul::Saisie {
            texte: texte.to_string(),
            motif,
        }
    }

    /// Vrai si l’erreur trahit un contrat d’appel violé (pas une faute de l’utilisateur).
    pub fn est_defaut_programme(&self) -> bool {
        matches!(self, ErreurCalcul::OperateurInconnu(_))
    }
}

pub type Resultat<T, E = ErreurCalcul> = std::result::Result<T, E>;
