// src/noyau/decimal.rs
//
// Décimal à précision arbitraire : mantisse BigInt + échelle signée.
// - valeur = mantisse × 10^(-échelle)
// - l’exposant lu ("1e3") reste dans l’échelle : jamais déplié dans la mantisse
// - + - * % : exacts (alignement seulement au calcul)
// - division : échelle imposée, arrondi half-up (égalité => on s’éloigne de zéro)
// - rendu : échelle >= 0 en notation simple, avec exactement `échelle` chiffres
//   après le point ; échelle < 0 en notation scientifique ("1E+3", "0E+20000000")

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{Float, Signed, Zero};

use super::erreur::ErreurCalcul;

#[derive(Clone, Debug)]
pub struct Decimal {
    mantisse: BigInt,
    echelle: i64,
}

/* ------------------------ Helpers entiers ------------------------ */

fn pow10(n: u64) -> BigInt {
    let n = usize::try_from(n).unwrap_or(usize::MAX);
    num_traits::pow(BigInt::from(10), n)
}

/// n / d arrondi half-up (d != 0).
fn diviser_half_up(n: &BigInt, d: &BigInt) -> BigInt {
    let (q, r) = n.div_rem(d);
    if r.abs() * 2u32 < d.abs() {
        return q;
    }
    if n.is_negative() != d.is_negative() {
        q - 1u32
    } else {
        q + 1u32
    }
}

/// Mantisse “scalée” (échelle >= 0) -> texte décimal sans exposant.
fn vers_texte(mantisse: &BigInt, echelle: u64) -> String {
    let neg = mantisse.is_negative();
    let abs = mantisse.abs();

    if echelle == 0 {
        return if neg { format!("-{abs}") } else { format!("{abs}") };
    }

    let scale = pow10(echelle);
    let int_part = &abs / &scale;
    let frac_part = &abs % &scale;

    let mut frac = frac_part.to_str_radix(10);
    while (frac.len() as u64) < echelle {
        frac.insert(0, '0');
    }

    if neg {
        format!("-{int_part}.{frac}")
    } else {
        format!("{int_part}.{frac}")
    }
}

/// Mantisse d’échelle négative -> "c.cccE+n".
fn vers_scientifique(mantisse: &BigInt, echelle: i64) -> String {
    let chiffres = mantisse.abs().to_str_radix(10);
    let exposant = chiffres.len() as i64 - 1 - echelle;
    let signe = if mantisse.is_negative() { "-" } else { "" };

    let (tete, queue) = chiffres.split_at(1);
    if queue.is_empty() {
        format!("{signe}{tete}E+{exposant}")
    } else {
        format!("{signe}{tete}.{queue}E+{exposant}")
    }
}

/* ------------------------ Décimal ------------------------ */

impl Decimal {
    pub fn new(mantisse: BigInt, echelle: i64) -> Self {
        Self { mantisse, echelle }
    }

    pub fn from_entier(n: BigInt) -> Self {
        Self::new(n, 0)
    }

    pub fn un() -> Self {
        Self::from_entier(BigInt::from(1))
    }

    #[cfg(test)]
    pub fn echelle(&self) -> i64 {
        self.echelle
    }

    pub fn is_zero(&self) -> bool {
        self.mantisse.is_zero()
    }

    /// Mantisse ramenée à une échelle plus grande (ou égale).
    fn aligner(&self, echelle: i64) -> BigInt {
        debug_assert!(echelle >= self.echelle);
        let k = (echelle - self.echelle).unsigned_abs();
        if k == 0 {
            return self.mantisse.clone();
        }
        &self.mantisse * pow10(k)
    }

    /// Position du premier chiffre significatif (10^grandeur <= |v| < 10^(grandeur+1)).
    fn grandeur(&self) -> i64 {
        self.mantisse.abs().to_str_radix(10).len() as i64 - 1 - self.echelle
    }

    pub fn ajouter(&self, autre: &Decimal) -> Decimal {
        let e = self.echelle.max(autre.echelle);
        Decimal::new(self.aligner(e) + autre.aligner(e), e)
    }

    pub fn soustraire(&self, autre: &Decimal) -> Decimal {
        let e = self.echelle.max(autre.echelle);
        Decimal::new(self.aligner(e) - autre.aligner(e), e)
    }

    pub fn multiplier(&self, autre: &Decimal) -> Decimal {
        Decimal::new(
            &self.mantisse * &autre.mantisse,
            self.echelle + autre.echelle,
        )
    }

    /// Quotient à `echelle` chiffres, half-up. None si diviseur nul.
    pub fn diviser(&self, autre: &Decimal, echelle: u32) -> Option<Decimal> {
        if autre.is_zero() {
            return None;
        }

        // q = (a.m / 10^a.e) / (b.m / 10^b.e) * 10^e
        let k = i64::from(echelle) + autre.echelle - self.echelle;
        let (n, d) = if k >= 0 {
            (&self.mantisse * pow10(k.unsigned_abs()), autre.mantisse.clone())
        } else {
            (self.mantisse.clone(), &autre.mantisse * pow10(k.unsigned_abs()))
        };

        Some(Decimal::new(diviser_half_up(&n, &d), i64::from(echelle)))
    }

    /// Reste tronqué (signe du dividende). None si diviseur nul.
    pub fn reste(&self, autre: &Decimal) -> Option<Decimal> {
        if autre.is_zero() {
            return None;
        }
        let e = self.echelle.max(autre.echelle);
        Some(Decimal::new(self.aligner(e) % autre.aligner(e), e))
    }

    /// Change d’échelle, arrondi half-up si on perd des chiffres.
    pub fn arrondir(&self, echelle: u32) -> Decimal {
        let cible = i64::from(echelle);
        if cible >= self.echelle {
            return Decimal::new(self.aligner(cible), cible);
        }
        let d = pow10((self.echelle - cible).unsigned_abs());
        Decimal::new(diviser_half_up(&self.mantisse, &d), cible)
    }

    /// Partie entière (troncature vers zéro).
    pub fn tronquer(&self) -> BigInt {
        if self.echelle <= 0 {
            self.aligner(0)
        } else {
            &self.mantisse / pow10(self.echelle.unsigned_abs())
        }
    }

    /// Ordre numérique, sans aligner quand signes ou grandeurs diffèrent.
    pub fn comparer(&self, autre: &Decimal) -> Ordering {
        let (sa, sb) = (self.mantisse.sign(), autre.mantisse.sign());
        if sa != sb {
            return sa.cmp(&sb);
        }
        if sa == Sign::NoSign {
            return Ordering::Equal;
        }

        let ordre = self.grandeur().cmp(&autre.grandeur());
        if ordre != Ordering::Equal {
            return if sa == Sign::Minus { ordre.reverse() } else { ordre };
        }

        let e = self.echelle.max(autre.echelle);
        self.aligner(e).cmp(&autre.aligner(e))
    }

    /// Conversion flottante (infini si hors plage).
    pub fn vers_f64(&self) -> f64 {
        // La forme texte est exacte : on laisse le parseur flottant arrondir.
        self.to_string().parse::<f64>().unwrap_or(f64::NAN)
    }

    /// Valeur exacte d’un f64 fini (m·2^e écrit en base 10). None si infini / NaN.
    pub fn depuis_f64(x: f64) -> Option<Decimal> {
        if !x.is_finite() {
            return None;
        }

        let (mut m, mut e, signe) = Float::integer_decode(x);
        if m == 0 {
            return Some(Decimal::from_entier(BigInt::zero()));
        }
        // forme minimale : on retire les facteurs 2 de la mantisse
        while m & 1 == 0 && e < 0 {
            m >>= 1;
            e += 1;
        }

        let mut mantisse = BigInt::from(m);
        if signe < 0 {
            mantisse = -mantisse;
        }

        if e >= 0 {
            return Some(Decimal::from_entier(mantisse << (e as usize)));
        }

        // m / 2^k = m·5^k / 10^k
        let k = u32::from(e.unsigned_abs());
        Some(Decimal::new(mantisse * BigInt::from(5).pow(k), i64::from(k)))
    }
}

/* ------------------------ Lecture / affichage ------------------------ */

/// Syntaxe : [+-]? chiffres [. chiffres] ([eE] [+-]? chiffres)?
/// (au moins un chiffre dans la partie "chiffres [. chiffres]").
impl FromStr for Decimal {
    type Err = ErreurCalcul;

    fn from_str(texte: &str) -> Result<Self, Self::Err> {
        let invalide = || ErreurCalcul::format_invalide("Invalid input format.");

        let (negatif, reste) = match texte.as_bytes().first() {
            Some(b'-') => (true, &texte[1..]),
            Some(b'+') => (false, &texte[1..]),
            _ => (false, texte),
        };

        let (corps, exposant) = match reste.find(|c: char| c == 'e' || c == 'E') {
            Some(i) => (&reste[..i], Some(&reste[i + 1..])),
            None => (reste, None),
        };

        let (entiere, fraction) = corps.split_once('.').unwrap_or((corps, ""));
        let que_des_chiffres = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if entiere.is_empty() && fraction.is_empty() {
            return Err(invalide());
        }
        if !que_des_chiffres(entiere) || !que_des_chiffres(fraction) {
            return Err(invalide());
        }

        let exposant = match exposant {
            Some(e) => i64::from(e.parse::<i32>().map_err(|_| invalide())?),
            None => 0,
        };

        let mut mantisse: BigInt = format!("{entiere}{fraction}")
            .parse()
            .map_err(|_| invalide())?;
        if negatif {
            mantisse = -mantisse;
        }

        Ok(Decimal::new(mantisse, fraction.len() as i64 - exposant))
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.echelle < 0 {
            f.write_str(&vers_scientifique(&self.mantisse, self.echelle))
        } else {
            f.write_str(&vers_texte(&self.mantisse, self.echelle.unsigned_abs()))
        }
    }
}
