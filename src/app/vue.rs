// src/app/vue.rs
//
// Vue terminal
// ------------
// - bannière d’accueil + invite
// - "Result:" en vert, "Error:" en rouge (colored respecte NO_COLOR)
// - le texte non coloré est exactement celui du noyau

use colored::Colorize;

use super::etat::Sortie;
use crate::noyau::{PREFIXE_ERREUR, PREFIXE_RESULTAT};

pub const INVITE: &str = "Enter calculation: ";

const BANNIERE: [&str; 3] = [
    "Welcome to the Arbitrary Precision Integer Calculator!",
    "Supported operations: +, -, *, /, %, ^, !, base, log, fractions",
    "Type 'exit' to quit.",
];

pub fn afficher_banniere() {
    for ligne in BANNIERE {
        println!("{ligne}");
    }
}

/// Rendu d’une sortie (préfixe coloré si la couleur est active).
pub fn rendre(sortie: &Sortie) -> String {
    match sortie {
        Sortie::Quitter => sortie.texte(),
        Sortie::Reponse(Ok(v)) => format!("{} {v}", PREFIXE_RESULTAT.bright_green().bold()),
        Sortie::Reponse(Err(e)) => format!("{} {e}", PREFIXE_ERREUR.red().bold()),
    }
}

pub fn afficher(sortie: &Sortie) {
    println!("{}", rendre(sortie));
}
