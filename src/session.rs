// src/session.rs
//
// Contrôleur de session (racine)
// ------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + terminal.rs)
// - Ré-exporter Session (pour main.rs: use crate::session::Session;)
//
// Découpage:
// - etat.rs     : interprétation pure des saisies (choix de menu, opérandes)
// - terminal.rs : la boucle lecture-évaluation-affichage elle-même

pub mod etat;
pub mod terminal;

// Ré-export pratique : `use crate::session::Session;`
pub use terminal::Session;
