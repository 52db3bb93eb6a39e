// src/main.rs
//
// Calculatrice décimale — point d’entrée (ligne de commande)
// ----------------------------------------------------------
// But:
// - Lire n1 op1 n2 op2 n3 op3 n4 + réglages (clap)
// - Journalisation vers stderr (RUST_LOG, défaut "warn")
// - Calcul via AppCalc (app/etat.rs), rendu via app/vue.rs
//
// Code de sortie : 0 succès, 1 erreur de calcul/saisie, 2 usage (clap).

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use calculatrice_decimale::noyau::{ModeArrondi, PolitiqueVide};

mod app;

use app::{AppCalc, Reglages};

/// Calculatrice décimale exacte : n1 op1 (n2 op2 n3) op3 n4
///
/// Le bloc (n2 op2 n3) est toujours calculé en premier. Chaque étape est
/// arrondie à 10 décimales et bornée par ±10^12.
/// Pour un opérande commençant par '-' (hors nombre simple), placer `--` avant les termes.
#[derive(Parser, Debug)]
#[command(name = "calculatrice_decimale", version)]
struct Opts {
    /// Mode d’arrondi final : math | bancaire | troncature
    #[arg(short, long, default_value = "math")]
    arrondi: ModeArrondi,

    /// Un champ vide (ou un séparateur seul) vaut 0 au lieu d’être une erreur
    #[arg(long)]
    vide_zero: bool,

    /// Affiche la valeur finale dans les trois modes d’arrondi
    #[arg(long)]
    tous_modes: bool,

    /// N1 OP1 N2 OP2 N3 OP3 N4 (opérateurs : + - − * × / ÷)
    #[arg(
        num_args = 7,
        required = true,
        allow_hyphen_values = true,
        allow_negative_numbers = true,
        value_names = ["N1", "OP1", "N2", "OP2", "N3", "OP3", "N4"]
    )]
    termes: Vec<String>,
}

fn installer_journal() {
    let filtre = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filtre)
        .with_writer(std::io::stderr)
        .init();
}

/// Un opérateur tient en un seul caractère (espaces autour ignorés).
/// Sa validité est vérifiée plus loin, par le calcul.
fn jeton(terme: &str) -> Result<char, String> {
    let mut chars = terme.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        (None, _) => Err("opérateur manquant".into()),
        (Some(_), Some(_)) => Err(format!("un seul caractère attendu, reçu '{}'", terme.trim())),
    }
}

/// Sépare les 7 termes en 4 saisies + 3 jetons d’opérateur.
fn decouper(termes: &[String]) -> Result<([String; 4], [char; 3]), String> {
    let [n1, o1, n2, o2, n3, o3, n4] = termes else {
        return Err(format!("7 termes attendus, {} reçus", termes.len()));
    };

    let mut ops = ['+'; 3];
    for (i, o) in [o1, o2, o3].into_iter().enumerate() {
        ops[i] = jeton(o).map_err(|msg| format!("Opérateur {} : {msg}", i + 1))?;
    }

    let nombres = [n1.clone(), n2.clone(), n3.clone(), n4.clone()];
    Ok((nombres, ops))
}

fn main() -> ExitCode {
    let opts = Opts::parse();
    installer_journal();

    let (saisies, operateurs) = match decouper(&opts.termes) {
        Ok(v) => v,
        Err(msg) => {
            eprintln!("Erreur : {msg}");
            return ExitCode::FAILURE;
        }
    };

    let reglages = Reglages {
        mode: opts.arrondi,
        politique_vide: if opts.vide_zero {
            PolitiqueVide::Zero
        } else {
            PolitiqueVide::Erreur
        },
    };
    tracing::debug!(?reglages, ?saisies, ?operateurs, "calcul demandé");

    let mut app = AppCalc::new(saisies, operateurs, reglages);
    app.calculer();

    if let Some(msg) = app.rendu_erreur() {
        eprintln!("{msg}");
        return ExitCode::FAILURE;
    }

    for ligne in app.rendu(opts.tous_modes) {
        println!("{ligne}");
    }
    ExitCode::SUCCESS
}
