// src/app.rs
//
// Shell interactif (boucle lire -> évaluer -> afficher)
// -----------------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Lire les lignes au clavier (rustyline : édition + historique)
// - Passer chaque ligne à la Session, afficher la Sortie
//
// La boucle ne garde aucun état de calcul : seulement le drapeau de sortie.

pub mod etat;
pub mod vue;

pub use etat::{Reglages, Session};

use log::{debug, info, warn};
use rustyline::error::ReadlineError;
use rustyline::Editor;

use etat::Sortie;

pub fn lancer(reglages: Reglages) -> rustyline::Result<()> {
    let config = rustyline::Config::builder().auto_add_history(true).build();
    let mut rl = Editor::<()>::with_config(config)?;

    let historique = reglages.historique.clone();
    if let Some(chemin) = &historique {
        match rl.load_history(chemin) {
            Ok(()) => info!("historique chargé depuis {}", chemin.display()),
            Err(e) => info!("pas d’historique lu ({}): {e}", chemin.display()),
        }
    }

    vue::afficher_banniere();
    let mut session = Session::new(reglages);
    info!("session démarrée");

    while !session.termine {
        match rl.readline(vue::INVITE) {
            Ok(ligne) => vue::afficher(&session.traiter(&ligne)),
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                vue::afficher(&Sortie::Quitter);
                break;
            }
            Err(err) => {
                warn!("lecture impossible: {err:?}");
                return Err(err);
            }
        }
    }

    if let Some(chemin) = &historique {
        if let Err(e) = rl.save_history(chemin) {
            warn!("historique non sauvegardé ({}): {e}", chemin.display());
        }
    }

    debug!(
        "session terminée : {} ligne(s) évaluée(s), {} en erreur",
        session.evaluees, session.echecs
    );
    Ok(())
}
