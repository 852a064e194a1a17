//! src/session/etat.rs
//!
//! Interprétation des saisies (sans E/S, sans moteur).
//!
//! Rôle : transformer une ligne brute du terminal en choix de menu ou
//! en opérande, de façon pure et testable. La boucle (terminal.rs)
//! décide seule de re-demander en cas d'échec.
//!
//! Contrats :
//! - Choix : exactement UN caractère '0'..='9' après trim, sinon refus.
//! - Opérande : trim puis parse f64, sinon refus.
//! - Aucun effet de bord ici.

/// Les dix entrées du menu, une par chiffre accepté.
///
/// Le parse produit directement cette énumération : la branche
/// "opération inconnue" de l'aiguillage n'existe donc pas, elle est
/// rendue impossible par construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Choix {
    Quitter,            // 0
    Additionner,        // 1
    Soustraire,         // 2
    Multiplier,         // 3
    Diviser,            // 4
    Puissance,          // 5
    RacineCarree,       // 6
    Pourcentage,        // 7
    AfficherHistorique, // 8
    EffacerHistorique,  // 9
}

impl Choix {
    /// Interprète une ligne de menu. Refuse tout sauf un unique
    /// chiffre (espaces autour tolérés, comme pour les opérandes).
    pub fn depuis_saisie(ligne: &str) -> Option<Choix> {
        let s = ligne.trim();
        let mut chars = s.chars();
        let c = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        match c {
            '0' => Some(Choix::Quitter),
            '1' => Some(Choix::Additionner),
            '2' => Some(Choix::Soustraire),
            '3' => Some(Choix::Multiplier),
            '4' => Some(Choix::Diviser),
            '5' => Some(Choix::Puissance),
            '6' => Some(Choix::RacineCarree),
            '7' => Some(Choix::Pourcentage),
            '8' => Some(Choix::AfficherHistorique),
            '9' => Some(Choix::EffacerHistorique),
            _ => None,
        }
    }
}

/// Interprète une ligne comme opérande (f64, espaces autour tolérés).
pub fn interpreter_nombre(ligne: &str) -> Option<f64> {
    ligne.trim().parse::<f64>().ok()
}
