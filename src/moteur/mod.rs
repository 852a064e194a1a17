//! Moteur arithmétique
//!
//! Organisation interne :
//! - operations.rs : Calculatrice (les sept opérations + journal)
//! - historique.rs : journal ordonné de la session
//! - format.rs     : rendu des équations à deux décimales
//! - erreur.rs     : erreurs domaine (ErreurCalcul)

pub mod erreur;
pub mod format;
pub mod historique;
pub mod operations;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use erreur::ErreurCalcul;
pub use operations::Calculatrice;
