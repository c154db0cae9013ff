//! Noyau — évaluation d’une ligne
//!
//! ligne -> classement (famille) -> calcul de la famille -> texte
//!
//! Fonction pure : aucun état entre deux lignes.

use log::debug;

use super::calcul::{
    arithmetique_decimale, arithmetique_fraction, conversion_base, factorielle, logarithme,
    Limites,
};
use super::classement::{classer, Famille};
use super::erreur::ErreurCalcul;

/// API publique : évalue une ligne et rend la valeur (sans préfixe) ou l’erreur.
pub fn evaluer_ligne(ligne: &str, limites: &Limites) -> Result<String, ErreurCalcul> {
    let demande = classer(ligne.trim())?;
    debug!("{:?} <- {:?}", demande.famille, demande.jetons);

    let jetons = &demande.jetons;
    match demande.famille {
        Famille::Fraction => arithmetique_fraction(jetons),
        Famille::Factorielle => factorielle(jetons, limites),
        Famille::Logarithme => logarithme(jetons),
        Famille::ConversionBase => conversion_base(jetons),
        Famille::Decimale => arithmetique_decimale(jetons, limites),
    }
}

pub const PREFIXE_RESULTAT: &str = "Result:";
pub const PREFIXE_ERREUR: &str = "Error:";

/// "Result: v" ou "Error: msg".
pub fn formater(issue: &Result<String, ErreurCalcul>) -> String {
    match issue {
        Ok(v) => format!("{PREFIXE_RESULTAT} {v}"),
        Err(e) => format!("{PREFIXE_ERREUR} {e}"),
    }
}

/// (ligne) -> sortie avec les limites par défaut, sans garde-fou.
#[cfg(test)]
pub fn repondre(ligne: &str) -> String {
    formater(&evaluer_ligne(ligne, &Limites::default()))
}
