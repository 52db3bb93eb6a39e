//! src/app/etat.rs
//!
//! État de la session de calcul (sans rendu).
//!
//! Rôle : contenir les saisies brutes (4 nombres, 3 opérateurs), les réglages,
//! et le dernier résultat brut ; offrir l’action “calculer” et la relecture du brut
//! dans un autre mode.
//!
//! Contrats :
//! - Le calcul passe entièrement par le noyau (normaliser -> evaluer -> formater).
//! - Afficher un autre mode ne relance PAS l’évaluation : seul l’arrondi final est refait.
//! - Échec = aucun résultat partiel (brut effacé).

use calculatrice_decimale::noyau::{
    evaluer, formater_brut, formater_final, normaliser_avec, Decimal, EtatCalcul, ModeArrondi,
    Operateur, PolitiqueVide,
};

/// Paramètres choisis par l’utilisateur.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reglages {
    pub mode: ModeArrondi,
    pub politique_vide: PolitiqueVide,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- saisies ---
    pub saisies: [String; 4],
    pub operateurs: [char; 3],

    // --- paramètres ---
    pub reglages: Reglages,

    // --- sorties ---
    pub brut: Option<Decimal>, // résultat brut (10 décimales), gardé pour re-arrondir
    pub affichage_brut: String,
    pub resultat: String, // valeur finale (entier) dans le mode courant
    pub erreur: String,
}

impl AppCalc {
    pub fn new(saisies: [String; 4], operateurs: [char; 3], reglages: Reglages) -> Self {
        Self {
            saisies,
            operateurs,
            reglages,
            brut: None,
            affichage_brut: String::new(),
            resultat: String::new(),
            erreur: String::new(),
        }
    }

    /* ------------------------ Actions ------------------------ */

    /// “=” : lit les quatre champs, évalue, formate.
    pub fn calculer(&mut self) {
        let mut nombres: [Decimal; 4] = Default::default();
        for (i, texte) in self.saisies.iter().enumerate() {
            match normaliser_avec(texte, self.reglages.politique_vide) {
                Ok(d) => nombres[i] = d,
                Err(e) => {
                    self.set_erreur(format!("Nombre {} : {e}", i + 1));
                    return;
                }
            }
        }

        // un opérateur inconnu ici est une faute de saisie, pas un défaut du noyau
        for (i, &c) in self.operateurs.iter().enumerate() {
            if let Err(e) = Operateur::try_from(c) {
                self.set_erreur(format!("Opérateur {} : {e}", i + 1));
                return;
            }
        }

        let etat = EtatCalcul::new(nombres, self.operateurs, self.reglages.mode);
        match evaluer(&etat) {
            Ok(brut) => self.set_resultats(brut),
            Err(e) => {
                tracing::debug!(erreur = %e, "évaluation refusée");
                self.set_erreur(e.to_string());
            }
        }
    }

    /// Valeur finale du dernier brut dans un mode quelconque, sans recalcul.
    pub fn resultat_dans(&self, mode: ModeArrondi) -> Option<String> {
        self.brut.as_ref().map(|b| formater_final(b, mode))
    }

    pub fn a_echoue(&self) -> bool {
        !self.erreur.is_empty()
    }

    /* ------------------------ Utilitaires ------------------------ */

    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.brut = None;
        self.affichage_brut.clear();
        self.resultat.clear();
    }

    fn set_resultats(&mut self, brut: Decimal) {
        self.erreur.clear();
        self.affichage_brut = formater_brut(&brut);
        self.resultat = formater_final(&brut, self.reglages.mode);
        self.brut = Some(brut);
    }
}
