// src/noyau/decimal.rs
//
// Décimal exact à virgule fixe : valeur = mantisse × 10^-echelle.
// - mantisse : BigInt signé (magnitude non bornée)
// - echelle  : nombre de chiffres après la virgule
//
// +, −, × sont exacts (aucune perte). ÷ passe par un rationnel exact puis
// un arrondi explicite à l’échelle demandée : aucune erreur n’est introduite
// avant les arrondis voulus par l’appelant.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Neg, Sub};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

use super::arrondi::{arrondir_quotient, arrondir_rationnel, pow10, ModeArrondi};

/// Valeur par défaut : 0 (échelle 0).
#[derive(Clone, Debug, Default)]
pub struct Decimal {
    mantisse: BigInt,
    echelle: u32,
}

impl Decimal {
    pub fn new(mantisse: BigInt, echelle: u32) -> Self {
        Self { mantisse, echelle }
    }

    pub fn zero() -> Self {
        Self::new(BigInt::zero(), 0)
    }

    pub fn entier(n: i64) -> Self {
        Self::new(BigInt::from(n), 0)
    }

    pub fn echelle(&self) -> u32 {
        self.echelle
    }

    pub fn is_zero(&self) -> bool {
        self.mantisse.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.mantisse.is_negative()
    }

    pub fn abs(&self) -> Decimal {
        Self::new(self.mantisse.abs(), self.echelle)
    }

    /// Valeur exacte sous forme de rationnel.
    pub fn en_rationnel(&self) -> BigRational {
        BigRational::new(self.mantisse.clone(), pow10(self.echelle))
    }

    /// Rationnel -> décimal à `echelle` chiffres, arrondi selon `mode`.
    pub fn depuis_rationnel(r: &BigRational, echelle: u32, mode: ModeArrondi) -> Decimal {
        Self::new(arrondir_rationnel(r, echelle, mode), echelle)
    }

    /// Même valeur, exprimée à une échelle plus grande (exact).
    fn etendre(&self, echelle: u32) -> BigInt {
        debug_assert!(echelle >= self.echelle);
        &self.mantisse * pow10(echelle - self.echelle)
    }

    /// Quantification : ramène la valeur à `echelle` chiffres après la virgule.
    /// Agrandir l’échelle est exact ; la réduire arrondit selon `mode`.
    pub fn quantifier(&self, echelle: u32, mode: ModeArrondi) -> Decimal {
        match echelle.cmp(&self.echelle) {
            Ordering::Equal => self.clone(),
            Ordering::Greater => Self::new(self.etendre(echelle), echelle),
            Ordering::Less => {
                let diviseur = pow10(self.echelle - echelle);
                Self::new(arrondir_quotient(&self.mantisse, &diviseur, mode), echelle)
            }
        }
    }

    /// Produit exact : les échelles s’additionnent.
    /// `None` si l’échelle du produit déborde `u32`.
    pub fn multiplier(&self, rhs: &Decimal) -> Option<Decimal> {
        let echelle = self.echelle.checked_add(rhs.echelle)?;
        Some(Self::new(&self.mantisse * &rhs.mantisse, echelle))
    }

    /// Division arrondie à `echelle` chiffres. `None` si le diviseur est nul.
    pub fn diviser(&self, diviseur: &Decimal, echelle: u32, mode: ModeArrondi) -> Option<Decimal> {
        if diviseur.is_zero() {
            return None;
        }
        let q = self.en_rationnel() / diviseur.en_rationnel();
        Some(Self::depuis_rationnel(&q, echelle, mode))
    }

    /// Partie entière + chiffres après la virgule (sur `echelle` chiffres), sans signe.
    pub(crate) fn parties(&self) -> (BigInt, String) {
        let m = self.mantisse.abs();
        if self.echelle == 0 {
            return (m, String::new());
        }
        let scale = pow10(self.echelle);
        let int_part = &m / &scale;
        let frac_part = &m % &scale;

        let mut frac = frac_part.to_str_radix(10);
        while frac.len() < self.echelle as usize {
            frac.insert(0, '0');
        }
        (int_part, frac)
    }
}

/* ------------------------ Égalité / ordre numériques ------------------------ */

fn aligner(a: &Decimal, b: &Decimal) -> (BigInt, BigInt) {
    let e = a.echelle.max(b.echelle);
    (a.etendre(e), b.etendre(e))
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.echelle == other.echelle {
            return self.mantisse.cmp(&other.mantisse);
        }
        let (a, b) = aligner(self, other);
        a.cmp(&b)
    }
}

/* ------------------------ Arithmétique exacte ------------------------ */

impl Add for &Decimal {
    type Output = Decimal;

    fn add(self, rhs: &Decimal) -> Decimal {
        let (a, b) = aligner(self, rhs);
        Decimal::new(a + b, self.echelle.max(rhs.echelle))
    }
}

impl Sub for &Decimal {
    type Output = Decimal;

    fn sub(self, rhs: &Decimal) -> Decimal {
        let (a, b) = aligner(self, rhs);
        Decimal::new(a - b, self.echelle.max(rhs.echelle))
    }
}

impl Neg for &Decimal {
    type Output = Decimal;

    fn neg(self) -> Decimal {
        Decimal::new(-&self.mantisse, self.echelle)
    }
}

/// Forme canonique à l’échelle courante : "-12.3400", "0", "5.0".
impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (int_part, frac) = self.parties();
        let signe = if self.is_negative() { "-" } else { "" };
        if frac.is_empty() {
            write!(f, "{signe}{int_part}")
        } else {
            write!(f, "{signe}{int_part}.{frac}")
        }
    }
}
