// src/noyau/calcul.rs
//
// Un calcul par famille d’opération.
// Chaque fonction reçoit les jetons déjà classés et rend le texte du résultat
// (sans le préfixe "Result: "), ou une ErreurCalcul.

use std::cmp::Ordering;

use log::debug;
use num_bigint::BigInt;
use num_traits::{One, Signed, ToPrimitive};

use super::decimal::Decimal;
use super::erreur::ErreurCalcul;
use super::fraction::Fraction;
use super::jetons::parser_entier;

/// Échelle fixe de la division décimale et du logarithme.
const ECHELLE_RESULTAT: u32 = 2;

/// Échelle intermédiaire du quotient ln(N)/ln(B).
const ECHELLE_LOG: u32 = 10;

/// Garde-fous optionnels (aucun par défaut).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Limites {
    pub max_exposant: Option<u32>,
    pub max_factorielle: Option<u64>,
}

/* ------------------------ Arithmétique décimale ------------------------ */

/// "a OP b" avec OP ∈ { + - * / % ^ }.
pub fn arithmetique_decimale(jetons: &[String], limites: &Limites) -> Result<String, ErreurCalcul> {
    let [gauche, op, droite] = jetons else {
        return Err(ErreurCalcul::format_invalide("Invalid input format. Example: 2 + 2"));
    };

    let a: Decimal = gauche.parse()?;
    let b: Decimal = droite.parse()?;

    let r = match op.as_str() {
        "+" => a.ajouter(&b),
        "-" => a.soustraire(&b),
        "*" => a.multiplier(&b),
        "/" => a.diviser(&b, ECHELLE_RESULTAT).ok_or_else(|| {
            ErreurCalcul::division_par_zero("Division by zero is not allowed.")
        })?,
        "%" => a
            .reste(&b)
            .ok_or_else(|| ErreurCalcul::division_par_zero("Modulo by zero is not allowed."))?,
        "^" => {
            let exposant = exposant_entier(&b)?;
            return puissance(&a.tronquer(), &exposant, limites).map(|p| p.to_string());
        }
        _ => return Err(ErreurCalcul::domaine("Unsupported operator. Please try again.")),
    };

    Ok(r.to_string())
}

/* ------------------------ Puissance ------------------------ */

/// Partie entière de l’exposant. Hors plage i32 => refus avant tout dépliage ("2 ^ 1e20000000").
fn exposant_entier(b: &Decimal) -> Result<BigInt, ErreurCalcul> {
    let borne_haute = Decimal::from_entier(BigInt::from(i64::from(i32::MAX) + 1));
    let borne_basse = Decimal::from_entier(BigInt::from(i64::from(i32::MIN) - 1));
    if b.comparer(&borne_haute) != Ordering::Less || b.comparer(&borne_basse) != Ordering::Greater {
        return Err(ErreurCalcul::depassement("Exponent too large."));
    }
    Ok(b.tronquer())
}

/// base^exposant exact. L’exposant doit tenir sur un i32 signé, puis être >= 0.
pub fn puissance(base: &BigInt, exposant: &BigInt, limites: &Limites) -> Result<BigInt, ErreurCalcul> {
    let trop_grand = || ErreurCalcul::depassement("Exponent too large.");

    let exp = exposant.to_i32().ok_or_else(trop_grand)?;
    if exp < 0 {
        return Err(ErreurCalcul::domaine("Negative exponents are not supported."));
    }

    let exp = exp.unsigned_abs();
    if limites.max_exposant.is_some_and(|max| exp > max) {
        return Err(trop_grand());
    }

    Ok(base.pow(exp))
}

/* ------------------------ Factorielle ------------------------ */

/// "n !"
pub fn factorielle(jetons: &[String], limites: &Limites) -> Result<String, ErreurCalcul> {
    let n = jetons
        .first()
        .and_then(|j| parser_entier(j, 10))
        .ok_or_else(|| {
            ErreurCalcul::format_invalide("Invalid input for factorial. Only integers are allowed.")
        })?;

    if n.is_negative() {
        return Err(ErreurCalcul::domaine("Factorial is not defined for negative numbers."));
    }
    if let Some(max) = limites.max_factorielle {
        if n > BigInt::from(max) {
            return Err(ErreurCalcul::domaine("Factorial input exceeds the configured limit."));
        }
    }

    Ok(factorielle_de(&n).to_string())
}

/// 2·3·…·n (produit vide = 1 pour n ∈ {0, 1}).
pub fn factorielle_de(n: &BigInt) -> BigInt {
    let mut acc = BigInt::one();
    let mut i = BigInt::from(2);
    while &i <= n {
        acc *= &i;
        i += 1u32;
    }
    acc
}

/* ------------------------ Conversion de base ------------------------ */

/// "valeur base F to T", F et T dans 2..=36.
pub fn conversion_base(jetons: &[String]) -> Result<String, ErreurCalcul> {
    let [valeur, mot_base, de, mot_to, vers] = jetons else {
        return Err(forme_base_invalide());
    };
    if mot_base != "base" || mot_to != "to" {
        return Err(forme_base_invalide());
    }

    let de = lire_base(de)?;
    let vers = lire_base(vers)?;

    let n = parser_entier(valeur, de).ok_or_else(|| {
        ErreurCalcul::format_invalide(format!("Invalid number for base {de}: {valeur}"))
    })?;

    debug!("conversion base {de} -> {vers} ({} bits)", n.bits());
    Ok(n.to_str_radix(vers))
}

fn forme_base_invalide() -> ErreurCalcul {
    ErreurCalcul::format_invalide(
        "Invalid input format for base conversion. Example: 1010 base 2 to 10",
    )
}

fn lire_base(jeton: &str) -> Result<u32, ErreurCalcul> {
    jeton
        .parse::<u32>()
        .ok()
        .filter(|b| (2..=36).contains(b))
        .ok_or_else(|| ErreurCalcul::format_invalide(format!("Invalid base: {jeton} (expected 2 to 36)")))
}

/* ------------------------ Logarithme ------------------------ */

/// "log B N" = ln(N) / ln(B), arrondi à 2 chiffres.
pub fn logarithme(jetons: &[String]) -> Result<String, ErreurCalcul> {
    let [_, base, nombre] = jetons else {
        return Err(ErreurCalcul::format_invalide(
            "Invalid input format for logarithm. Example: log 2 1024",
        ));
    };

    let b: Decimal = base.parse()?;
    let n: Decimal = nombre.parse()?;

    Ok(logarithme_de(&b, &n)?.to_string())
}

/// Passe par les flottants (précision limitée à celle de ln en f64).
pub fn logarithme_de(base: &Decimal, nombre: &Decimal) -> Result<Decimal, ErreurCalcul> {
    let un = Decimal::un();
    if nombre.comparer(&un) != Ordering::Greater || base.comparer(&un) != Ordering::Greater {
        return Err(ErreurCalcul::domaine("Logarithm is defined for values greater than 1."));
    }

    let hors_plage = || ErreurCalcul::depassement("Logarithm argument is out of floating-point range.");
    let ln_base = Decimal::depuis_f64(base.vers_f64().ln()).ok_or_else(hors_plage)?;
    let ln_nombre = Decimal::depuis_f64(nombre.vers_f64().ln()).ok_or_else(hors_plage)?;

    // base très proche de 1 : ln(base) s’arrondit à 0 en f64
    let quotient = ln_nombre
        .diviser(&ln_base, ECHELLE_LOG)
        .ok_or_else(|| ErreurCalcul::division_par_zero("Division by zero."))?;

    Ok(quotient.arrondir(ECHELLE_RESULTAT))
}

/* ------------------------ Fractions ------------------------ */

/// "a/b OP c/d" avec OP ∈ { + - * / }.
pub fn arithmetique_fraction(jetons: &[String]) -> Result<String, ErreurCalcul> {
    let [gauche, op, droite] = jetons else {
        return Err(ErreurCalcul::format_invalide(
            "Invalid input format for fractions. Example: 1/2 + 2/3",
        ));
    };

    let a: Fraction = gauche.parse()?;
    let b: Fraction = droite.parse()?;

    let r = match op.as_str() {
        "+" => a.ajouter(&b),
        "-" => a.soustraire(&b),
        "*" => a.multiplier(&b),
        "/" => a.diviser(&b)?,
        _ => return Err(ErreurCalcul::domaine("Unsupported operator for fractions.")),
    };

    Ok(r.to_string())
}
