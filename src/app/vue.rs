// src/app/vue.rs
//
// Vue texte (terminal)
// --------------------
// Rendu de AppCalc en lignes prêtes à imprimer :
// - expression telle qu’évaluée : n1 op1 (n2 op2 n3) op3 n4
// - résultat brut (milliers groupés)
// - valeur finale dans le mode courant, ou dans les trois modes
//
// Aucun calcul ici : seulement de la mise en forme de l’état.

use calculatrice_decimale::noyau::{ModeArrondi, Operateur};

use super::etat::AppCalc;

impl AppCalc {
    /// Expression avec le bloc prioritaire entre parenthèses.
    pub fn expression(&self) -> String {
        let [n1, n2, n3, n4] = &self.saisies;
        let [o1, o2, o3] = self.operateurs.map(symbole);
        format!(
            "{} {o1} ({} {o2} {}) {o3} {}",
            n1.trim(),
            n2.trim(),
            n3.trim(),
            n4.trim()
        )
    }

    /// Lignes de sortie (stdout). En cas d’erreur : vide (voir `rendu_erreur`).
    pub fn rendu(&self, tous_modes: bool) -> Vec<String> {
        if self.a_echoue() {
            return Vec::new();
        }

        let mut lignes = vec![
            format!("Expression : {}", self.expression()),
            format!("Brut       : {}", self.affichage_brut),
        ];

        if tous_modes {
            for mode in ModeArrondi::TOUS {
                if let Some(v) = self.resultat_dans(mode) {
                    lignes.push(format!("{:<11}: {v}", format!("Arrondi {}", initiale(mode))));
                }
            }
        } else {
            lignes.push(format!("Résultat ({}) : {}", self.reglages.mode, self.resultat));
        }
        lignes
    }

    /// Ligne d’erreur (stderr), si l’évaluation a échoué.
    pub fn rendu_erreur(&self) -> Option<String> {
        self.a_echoue().then(|| format!("Erreur : {}", self.erreur))
    }
}

/// Symbole “joli” si le jeton est connu, sinon le jeton tel quel.
fn symbole(c: char) -> char {
    Operateur::try_from(c).map(Operateur::symbole).unwrap_or(c)
}

fn initiale(mode: ModeArrondi) -> &'static str {
    match mode {
        ModeArrondi::Math => "M",
        ModeArrondi::Bancaire => "B",
        ModeArrondi::Troncature => "T",
    }
}
