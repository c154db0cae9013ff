// src/noyau/fraction.rs
//
// Fraction exacte (rationnel toujours réduit).
// Invariants, garantis à la construction (donc hérités par + - * /) :
// - dénominateur > 0
// - pgcd(|num|, den) = 1
// - le signe est porté par le numérateur

use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use super::erreur::ErreurCalcul;
use super::jetons::parser_entier;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fraction(BigRational);

impl Fraction {
    /// Construit n/d réduit. Erreur si d = 0.
    pub fn new(numerateur: BigInt, denominateur: BigInt) -> Result<Self, ErreurCalcul> {
        if denominateur.is_zero() {
            return Err(ErreurCalcul::division_par_zero("Denominator cannot be zero."));
        }
        // BigRational::new réduit et remet le signe au numérateur.
        Ok(Self(BigRational::new(numerateur, denominateur)))
    }

    pub fn numer(&self) -> &BigInt {
        self.0.numer()
    }

    pub fn denom(&self) -> &BigInt {
        self.0.denom()
    }

    pub fn ajouter(&self, autre: &Fraction) -> Fraction {
        Fraction(&self.0 + &autre.0)
    }

    pub fn soustraire(&self, autre: &Fraction) -> Fraction {
        Fraction(&self.0 - &autre.0)
    }

    pub fn multiplier(&self, autre: &Fraction) -> Fraction {
        Fraction(&self.0 * &autre.0)
    }

    /// a/b ÷ c/d = (a·d)/(b·c) : le zéro remonte de la construction.
    pub fn diviser(&self, autre: &Fraction) -> Result<Fraction, ErreurCalcul> {
        Fraction::new(self.numer() * autre.denom(), self.denom() * autre.numer())
    }
}

/// Forme "n/d" (un seul "/", deux entiers décimaux).
impl FromStr for Fraction {
    type Err = ErreurCalcul;

    fn from_str(texte: &str) -> Result<Self, Self::Err> {
        let invalide = || ErreurCalcul::format_invalide("Invalid fraction format. Example: 1/2");

        let (n, d) = texte.split_once('/').ok_or_else(invalide)?;
        if d.contains('/') {
            return Err(invalide());
        }

        let n = parser_entier(n, 10).ok_or_else(invalide)?;
        let d = parser_entier(d, 10).ok_or_else(invalide)?;
        Fraction::new(n, d)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.numer();
        let d = self.denom();
        if d.is_one() {
            write!(f, "{n}")
        } else {
            write!(f, "{n}/{d}")
        }
    }
}
