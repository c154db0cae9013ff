// src/noyau/erreur.rs
//
// Taxonomie des erreurs du noyau.
// - FormatInvalide : forme de la ligne (nb de jetons, nombre illisible, mot-clé manquant)
// - DivisionParZero : diviseur / dénominateur nul
// - Domaine        : factorielle négative, exposant négatif, log <= 1, opérateur inconnu
// - Depassement    : exposant hors de la plage machine
// - Interne        : panique rattrapée par le shell
//
// Chaque variante porte le message montré à l’utilisateur (après "Error: ").

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErreurCalcul {
    FormatInvalide(String),
    DivisionParZero(String),
    Domaine(String),
    Depassement(String),
    Interne(String),
}

impl ErreurCalcul {
    pub fn format_invalide(msg: impl Into<String>) -> Self {
        Self::FormatInvalide(msg.into())
    }

    pub fn division_par_zero(msg: impl Into<String>) -> Self {
        Self::DivisionParZero(msg.into())
    }

    pub fn domaine(msg: impl Into<String>) -> Self {
        Self::Domaine(msg.into())
    }

    pub fn depassement(msg: impl Into<String>) -> Self {
        Self::Depassement(msg.into())
    }

    pub fn interne(msg: impl Into<String>) -> Self {
        Self::Interne(msg.into())
    }

    pub fn message(&self) -> &str {
        match self {
            Self::FormatInvalide(m)
            | Self::DivisionParZero(m)
            | Self::Domaine(m)
            | Self::Depassement(m)
            | Self::Interne(m) => m,
        }
    }
}

impl fmt::Display for ErreurCalcul {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ErreurCalcul {}
