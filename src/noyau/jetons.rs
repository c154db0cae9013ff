// src/noyau/jetons.rs
//
// Découpage d’une ligne en jetons.
// - "!" est séparé de ce qui le précède : "5!" -> "5 !"
// - les jetons sont séparés par des blancs (un ou plusieurs)
// - entiers stricts : signe optionnel puis chiffres de la base, rien d’autre

use num_bigint::BigInt;

/// Insère un espace devant chaque "!" (factorielle collée : "5!").
pub fn normaliser(ligne: &str) -> String {
    ligne.replace('!', " !")
}

pub fn decouper(ligne: &str) -> Vec<String> {
    ligne.split_whitespace().map(str::to_owned).collect()
}

/// Lit un entier en base `base` (2..=36).
///
/// Refuse tout ce qui n’est pas : [+-]? chiffre+ (pas de "_", pas d’espaces).
/// Les lettres sont acceptées en minuscules comme en majuscules.
pub fn parser_entier(texte: &str, base: u32) -> Option<BigInt> {
    if !(2..=36).contains(&base) {
        return None;
    }

    let (negatif, chiffres) = match texte.as_bytes().first() {
        Some(b'-') => (true, &texte[1..]),
        Some(b'+') => (false, &texte[1..]),
        _ => (false, texte),
    };

    if chiffres.is_empty() || !chiffres.chars().all(|c| c.is_digit(base)) {
        return None;
    }

    let n = BigInt::parse_bytes(chiffres.as_bytes(), base)?;
    Some(if negatif { -n } else { n })
}
