// src/noyau/arrondi.rs
//
// Règles d’arrondi (ensemble fermé) + arrondi exact d’un quotient d’entiers.
// Aucun flottant : tout passe par BigInt (quotient + reste).

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

/// Mode d’arrondi final (et règle utilisée pour les quantifications).
///
/// Trois cas exactement : tout `match` dessus doit rester exhaustif.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ModeArrondi {
    /// Demi s’éloigne de zéro : 2.5 -> 3, -2.5 -> -3.
    #[default]
    Math,
    /// Demi vers le pair : 2.5 -> 2, 3.5 -> 4, -2.5 -> -2.
    Bancaire,
    /// Vers zéro : 2.9 -> 2, -2.9 -> -2 (jamais floor).
    Troncature,
}

impl ModeArrondi {
    pub const TOUS: [ModeArrondi; 3] = [
        ModeArrondi::Math,
        ModeArrondi::Bancaire,
        ModeArrondi::Troncature,
    ];

    pub fn nom(self) -> &'static str {
        match self {
            ModeArrondi::Math => "math",
            ModeArrondi::Bancaire => "bancaire",
            ModeArrondi::Troncature => "troncature",
        }
    }
}

impl fmt::Display for ModeArrondi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.nom())
    }
}

impl FromStr for ModeArrondi {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "math" | "mathematique" | "mathématique" => Ok(ModeArrondi::Math),
            "bancaire" | "bankers" | "comptable" => Ok(ModeArrondi::Bancaire),
            "troncature" | "truncate" => Ok(ModeArrondi::Troncature),
            autre => Err(format!("mode d’arrondi inconnu: '{autre}'")),
        }
    }
}

/* ------------------------ Outils entiers ------------------------ */

pub(crate) fn pow10(n: u32) -> BigInt {
    BigInt::from(10).pow(n)
}

/// Arrondit `num / den` à l’entier selon `mode`. `den` ne doit pas être nul.
pub(crate) fn arrondir_quotient(num: &BigInt, den: &BigInt, mode: ModeArrondi) -> BigInt {
    debug_assert!(!den.is_zero(), "dénominateur nul");

    // dénominateur positif : le signe du résultat est celui de num
    let (num, den) = if den.is_negative() {
        (-num, -den)
    } else {
        (num.clone(), den.clone())
    };

    // division tronquée : reste du signe de num
    let q = &num / &den;
    let r = &num % &den;
    if r.is_zero() {
        return q;
    }

    let negatif = num.is_negative();
    let eloigne = |q: BigInt| if negatif { q - 1 } else { q + 1 };

    // position du reste par rapport à la moitié
    let demi = (r.abs() * 2u32).cmp(&den);

    match mode {
        ModeArrondi::Troncature => q,
        ModeArrondi::Math => {
            if demi == Ordering::Less {
                q
            } else {
                eloigne(q)
            }
        }
        ModeArrondi::Bancaire => match demi {
            Ordering::Less => q,
            Ordering::Greater => eloigne(q),
            Ordering::Equal => {
                if (&q % 2u32).is_zero() {
                    q
                } else {
                    eloigne(q)
                }
            }
        },
    }
}

/// r -> entier “scalé” = arrondi(r * 10^echelle) selon `mode`.
pub(crate) fn arrondir_rationnel(r: &BigRational, echelle: u32, mode: ModeArrondi) -> BigInt {
    let num = r.numer() * pow10(echelle);
    arrondir_quotient(&num, r.denom(), mode)
}
