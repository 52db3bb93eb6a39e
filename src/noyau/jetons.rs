// src/noyau/jetons.rs
//
// Jetons d’opérateurs : + − × ÷ (ensemble fermé).
// Les graphies ASCII (- * /) sont acceptées en plus des symboles.

use std::fmt;

use super::erreur::ErreurCalcul;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    /// × et ÷ sont prioritaires sur + et −.
    pub fn est_prioritaire(self) -> bool {
        matches!(self, Operateur::Fois | Operateur::Divise)
    }

    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '−',
            Operateur::Fois => '×',
            Operateur::Divise => '÷',
        }
    }
}

impl TryFrom<char> for Operateur {
    type Error = ErreurCalcul;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '+' => Ok(Operateur::Plus),
            '-' | '−' => Ok(Operateur::Moins),
            '*' | '×' => Ok(Operateur::Fois),
            '/' | '÷' => Ok(Operateur::Divise),
            autre => Err(ErreurCalcul::OperateurInconnu(autre)),
        }
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}
