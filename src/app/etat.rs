//! src/app/etat.rs
//!
//! État de session (sans affichage, sans lecture clavier).
//!
//! Rôle : garder les réglages, le drapeau de sortie et quelques compteurs,
//! et transformer une ligne en `Sortie`. Le calcul lui-même vit dans le noyau.
//!
//! Contrats :
//! - Aucune valeur ne passe d’un calcul au suivant.
//! - Une panique pendant un calcul est rattrapée ici (filet de sécurité) :
//!   la session continue avec "Error: unexpected failure."

use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;

use log::warn;

use crate::noyau::{evaluer_ligne, formater, ErreurCalcul, Limites};

/// Fichier d’historique par défaut (répertoire courant).
pub const HISTORIQUE_DEFAUT: &str = ".calculatrice_history";

/// Mot-clé de sortie (insensible à la casse).
const MOT_SORTIE: &str = "exit";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reglages {
    pub historique: Option<PathBuf>,
    pub couleur: bool,
    pub limites: Limites,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            historique: Some(PathBuf::from(HISTORIQUE_DEFAUT)),
            couleur: true,
            limites: Limites::default(),
        }
    }
}

/// Ce que la vue doit afficher pour une ligne.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Sortie {
    Quitter,
    Reponse(Result<String, ErreurCalcul>),
}

impl Sortie {
    /// Texte brut, tel que rendu par le noyau.
    pub fn texte(&self) -> String {
        match self {
            Sortie::Quitter => "Exiting...".to_string(),
            Sortie::Reponse(issue) => formater(issue),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Session {
    pub reglages: Reglages,
    pub termine: bool,
    pub evaluees: usize,
    pub echecs: usize,
}

impl Session {
    pub fn new(reglages: Reglages) -> Self {
        Self {
            reglages,
            ..Self::default()
        }
    }

    /// Une ligne -> une sortie.
    pub fn traiter(&mut self, ligne: &str) -> Sortie {
        let ligne = ligne.trim();
        if ligne.eq_ignore_ascii_case(MOT_SORTIE) {
            self.termine = true;
            return Sortie::Quitter;
        }

        self.evaluees += 1;
        let limites = &self.reglages.limites;
        let issue = panic::catch_unwind(AssertUnwindSafe(|| evaluer_ligne(ligne, limites)));

        let issue = issue.unwrap_or_else(|_| {
            warn!("panique rattrapée pendant l’évaluation de {ligne:?}");
            Err(ErreurCalcul::interne("unexpected failure."))
        });
        if issue.is_err() {
            self.echecs += 1;
        }
        Sortie::Reponse(issue)
    }
}
