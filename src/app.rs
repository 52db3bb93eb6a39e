// src/app.rs
//
// Calculatrice décimale — module App (racine)
// -------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc + Reglages (pour main.rs: use app::{AppCalc, Reglages};)
//
// Le noyau (src/noyau) ne dépend jamais de ce module.

pub mod etat;
pub mod vue;

// Ré-export pratique
pub use etat::{AppCalc, Reglages};
