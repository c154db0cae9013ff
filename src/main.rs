// src/main.rs
//
// Calculatrice grands nombres — point d’entrée terminal
// -----------------------------------------------------
// - Journal : env_logger (RUST_LOG, "warn" par défaut)
// - Réglages : clap (historique, couleur, garde-fous optionnels)
// - Boucle  : app::lancer

use std::path::PathBuf;

use clap::Parser;

mod app;
mod noyau;

use app::etat::HISTORIQUE_DEFAUT;
use app::Reglages;
use noyau::Limites;

/// Calculatrice en précision arbitraire : entiers, décimaux, factorielle,
/// puissance, changement de base, logarithme, fractions exactes.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Fichier d’historique
    #[arg(long, value_name = "CHEMIN", default_value = HISTORIQUE_DEFAUT)]
    historique: PathBuf,

    /// Ne lit ni n’écrit d’historique
    #[arg(long)]
    sans_historique: bool,

    /// Désactive les couleurs
    #[arg(long)]
    sans_couleur: bool,

    /// Exposant maximal accepté par "^"
    #[arg(long, value_name = "N")]
    max_exposant: Option<u32>,

    /// Entrée maximale acceptée par "!"
    #[arg(long, value_name = "N")]
    max_factorielle: Option<u64>,
}

impl Args {
    fn reglages(self) -> Reglages {
        Reglages {
            historique: (!self.sans_historique).then_some(self.historique),
            couleur: !self.sans_couleur,
            limites: Limites {
                max_exposant: self.max_exposant,
                max_factorielle: self.max_factorielle,
            },
        }
    }
}

fn main() -> rustyline::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let reglages = Args::parse().reglages();
    if !reglages.couleur {
        colored::control::set_override(false);
    }
    log::debug!("réglages: {reglages:?}");

    app::lancer(reglages)
}
