//! Noyau de la calculatrice (sans dépendance vers le shell)
//!
//! Organisation interne :
//! - erreur.rs     : taxonomie des erreurs (format, division par zéro, domaine, dépassement)
//! - jetons.rs     : normalisation "!" + découpage + entiers stricts en base 2..=36
//! - decimal.rs    : décimal à précision arbitraire (mantisse BigInt + échelle signée)
//! - fraction.rs   : fraction exacte toujours réduite
//! - classement.rs : chaîne ordonnée de prédicats -> famille d’opération
//! - calcul.rs     : un calcul par famille
//! - eval.rs       : ligne -> "Result: ..." / "Error: ..."

pub mod calcul;
pub mod classement;
pub mod decimal;
pub mod erreur;
pub mod eval;
pub mod fraction;
pub mod jetons;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use calcul::Limites;
pub use erreur::ErreurCalcul;
pub use eval::{evaluer_ligne, formater, PREFIXE_ERREUR, PREFIXE_RESULTAT};
