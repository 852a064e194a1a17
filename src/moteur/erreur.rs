// src/moteur/erreur.rs

use thiserror::Error;

/// Erreurs domaine du moteur.
///
/// Les deux seuls échecs possibles d'un calcul. Tout le reste
/// (saisie invalide, chiffre de menu hors plage) est géré en amont
/// par la session et ne passe jamais par ce type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    /// diviser(a, b) avec b == 0.
    #[error("division par zéro")]
    DivisionParZero,

    /// racine_carree(a) avec a < 0.
    #[error("racine carrée d'un nombre négatif")]
    RacineNegative,
}

#[cfg(test)]
mod tests {
    use super::ErreurCalcul;

    #[test]
    fn messages_lisibles() {
        assert_eq!(
            ErreurCalcul::DivisionParZero.to_string(),
            "division par zéro"
        );
        assert_eq!(
            ErreurCalcul::RacineNegative.to_string(),
            "racine carrée d'un nombre négatif"
        );
    }
}
