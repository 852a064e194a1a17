// src/moteur/operations.rs
//
// Les sept opérations arithmétiques, couplées à l'historique.
//
// Contrat observable (voulu, pas accidentel) : tout appel qui aboutit
// dépose exactement UN enregistrement formaté dans l'historique ;
// un appel qui échoue (division par zéro, racine négative) n'en
// dépose AUCUN.

use super::erreur::ErreurCalcul;
use super::format;
use super::historique::Historique;

/// Moteur arithmétique + journal de session.
#[derive(Clone, Debug, Default)]
pub struct Calculatrice {
    historique: Historique,
}

impl Calculatrice {
    pub fn nouvelle() -> Self {
        Self::default()
    }

    /* ------------------------ Opérations ------------------------ */

    pub fn additionner(&mut self, a: f64, b: f64) -> f64 {
        let r = a + b;
        self.historique.ajouter(format::equation_binaire(a, '+', b, r));
        r
    }

    pub fn soustraire(&mut self, a: f64, b: f64) -> f64 {
        let r = a - b;
        self.historique.ajouter(format::equation_binaire(a, '-', b, r));
        r
    }

    pub fn multiplier(&mut self, a: f64, b: f64) -> f64 {
        let r = a * b;
        self.historique.ajouter(format::equation_binaire(a, '*', b, r));
        r
    }

    /// Division. Échoue si le diviseur vaut zéro (sinon on laisserait
    /// fuir ±inf dans l'historique).
    pub fn diviser(&mut self, a: f64, b: f64) -> Result<f64, ErreurCalcul> {
        if b == 0.0 {
            return Err(ErreurCalcul::DivisionParZero);
        }
        let r = a / b;
        self.historique.ajouter(format::equation_binaire(a, '/', b, r));
        Ok(r)
    }

    /// Puissance, sémantique IEEE 754 brute : base négative avec
    /// exposant fractionnaire donne NaN, comme `f64::powf`.
    pub fn puissance(&mut self, base: f64, exposant: f64) -> f64 {
        let r = base.powf(exposant);
        self.historique
            .ajouter(format::equation_binaire(base, '^', exposant, r));
        r
    }

    /// Racine carrée. Échoue sur radicande strictement négatif.
    pub fn racine_carree(&mut self, a: f64) -> Result<f64, ErreurCalcul> {
        if a < 0.0 {
            return Err(ErreurCalcul::RacineNegative);
        }
        let r = a.sqrt();
        self.historique.ajouter(format::equation_racine(a, r));
        Ok(r)
    }

    pub fn pourcentage(&mut self, nombre: f64, pourcent: f64) -> f64 {
        let r = nombre * pourcent / 100.0;
        self.historique
            .ajouter(format::equation_pourcentage(nombre, pourcent, r));
        r
    }

    /* ------------------------ Historique ------------------------ */

    pub fn historique(&self) -> &Historique {
        &self.historique
    }

    pub fn effacer_historique(&mut self) {
        self.historique.effacer();
    }
}
