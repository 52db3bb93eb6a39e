//! Calculatrice décimale à virgule fixe.
//!
//! Trois fonctions pures forment toute l’interface du noyau :
//! [`noyau::normaliser`], [`noyau::evaluer`], [`noyau::formater_final`].

pub mod noyau;
