//! Noyau décimal à virgule fixe
//!
//! Organisation interne :
//! - decimal.rs : Decimal exact (BigInt scalé) + quantification
//! - arrondi.rs : modes d’arrondi (Math / Bancaire / Troncature)
//! - jetons.rs  : opérateurs + − × ÷ et leur priorité
//! - lecture.rs : saisie texte -> Decimal (virgule, milliers, exposant refusé)
//! - eval.rs    : n1 op1 (n2 op2 n3) op3 n4, arrondi 10 décimales, limite 10^12
//! - format.rs  : affichage final (entier) + affichage brut
//! - erreur.rs  : ErreurCalcul

pub mod arrondi;
pub mod decimal;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod lecture;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use arrondi::ModeArrondi;
pub use decimal::Decimal;
pub use erreur::{ErreurCalcul, MotifSaisie, Resultat};
pub use eval::{evaluer, EtatCalcul, ECHELLE_INTERMEDIAIRE, LIMITE};
pub use format::{formater_brut, formater_final};
pub use jetons::Operateur;
pub use lecture::{normaliser, normaliser_avec, PolitiqueVide};
