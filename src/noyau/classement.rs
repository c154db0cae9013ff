// src/noyau/classement.rs
//
// Classement d’une ligne en famille d’opération.
//
// Chaîne ordonnée, le premier test qui répond gagne :
//   1. "/" présent + un opérateur (+ - * /)
//      + un jeton de forme "a/b"              -> fraction
//   2. moins de 2 jetons                      -> erreur
//   3. "n !"                                  -> factorielle
//   4. premier jeton "log"                    -> logarithme
//   5. " base " et " to " dans la ligne       -> conversion de base
//   6. pas exactement 3 jetons                -> erreur
//   7. sinon                                  -> arithmétique décimale
//
// Tests structurels, pas grammaticaux. Un "/" seul entre blancs est l’opérateur
// de division décimale : "3 / 4" reste décimal, "3/4 + 1" part en fraction.

use super::erreur::ErreurCalcul;
use super::jetons::{decouper, normaliser};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Famille {
    Fraction,
    Factorielle,
    Logarithme,
    ConversionBase,
    Decimale,
}

/// Ligne normalisée + ses jetons.
#[derive(Clone, Debug)]
pub struct Ligne {
    pub texte: String,
    pub jetons: Vec<String>,
}

impl Ligne {
    pub fn new(brute: &str) -> Self {
        let texte = normaliser(brute);
        let jetons = decouper(&texte);
        Self { texte, jetons }
    }
}

/// Ligne classée, prête pour le calcul.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Demande {
    pub famille: Famille,
    pub jetons: Vec<String>,
}

/* ------------------------ Prédicats ------------------------ */

pub fn est_fraction(l: &Ligne) -> bool {
    l.texte.contains('/')
        && l.texte.contains(|c: char| matches!(c, '+' | '-' | '*' | '/'))
        && l.jetons.iter().any(|j| j.contains('/') && j != "/")
}

pub fn trop_court(l: &Ligne) -> bool {
    l.jetons.len() < 2
}

pub fn est_factorielle(l: &Ligne) -> bool {
    l.jetons.len() == 2 && l.jetons[1] == "!"
}

pub fn est_logarithme(l: &Ligne) -> bool {
    l.jetons.first().is_some_and(|j| j == "log")
}

pub fn est_conversion_base(l: &Ligne) -> bool {
    l.texte.contains(" base ") && l.texte.contains(" to ")
}

pub fn pas_trois_jetons(l: &Ligne) -> bool {
    l.jetons.len() != 3
}

fn toujours(_: &Ligne) -> bool {
    true
}

/* ------------------------ Chaîne ordonnée ------------------------ */

enum Etape {
    Famille(Famille, fn(&Ligne) -> bool),
    Garde(fn(&Ligne) -> bool, &'static str),
}

const ETAPES: [Etape; 7] = [
    Etape::Famille(Famille::Fraction, est_fraction),
    Etape::Garde(trop_court, "Invalid input format."),
    Etape::Famille(Famille::Factorielle, est_factorielle),
    Etape::Famille(Famille::Logarithme, est_logarithme),
    Etape::Famille(Famille::ConversionBase, est_conversion_base),
    Etape::Garde(pas_trois_jetons, "Invalid input format. Example: 2 + 2"),
    Etape::Famille(Famille::Decimale, toujours),
];

pub fn classer(brute: &str) -> Result<Demande, ErreurCalcul> {
    let ligne = Ligne::new(brute);

    for etape in &ETAPES {
        match etape {
            Etape::Famille(famille, test) if test(&ligne) => {
                return Ok(Demande {
                    famille: *famille,
                    jetons: ligne.jetons,
                });
            }
            Etape::Garde(test, msg) if test(&ligne) => {
                return Err(ErreurCalcul::format_invalide(*msg));
            }
            _ => {}
        }
    }

    // la dernière étape accepte tout
    Err(ErreurCalcul::format_invalide("Invalid input format."))
}
