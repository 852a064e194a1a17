// src/main.rs
//
// Calculatrice de session — point d'entrée terminal
// -------------------------------------------------
// But:
// - Construire la Session sur stdin/stdout verrouillés
// - Dérouler la boucle jusqu'au choix 0 (ou fin d'entrée)
//
// IMPORTANT (structure projet):
// - La boucle vit dans src/session/terminal.rs, le moteur dans src/moteur/
// - Ici: point d'entrée seulement

use std::io;

use anyhow::Context;

mod moteur;
mod session;

use session::Session;

fn main() -> anyhow::Result<()> {
    let entree = io::stdin();
    let sortie = io::stdout();

    Session::nouvelle(entree.lock(), sortie.lock())
        .executer()
        .context("entrée/sortie terminal")
}
