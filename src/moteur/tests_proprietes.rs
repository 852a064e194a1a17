//! Campagne de propriétés sur le moteur.
//!
//! But : vérifier les contrats "∀ a, b finis" sans grille de cas manuelle.
//! - opérandes bornés (pas de ±inf, pas de NaN en entrée) : les contrats
//!   du moteur sont énoncés sur des flottants finis ;
//! - chaque propriété couvre à la fois la valeur retournée ET l'effet
//!   sur l'historique (un enregistrement par succès, zéro par échec).

use proptest::prelude::*;

use super::erreur::ErreurCalcul;
use super::operations::Calculatrice;

/// Opérande fini et raisonnable (le formatage à deux décimales reste lisible).
fn operande() -> impl Strategy<Value = f64> {
    -1.0e9_f64..1.0e9_f64
}

proptest! {
    #[test]
    fn additionner_vaut_somme(a in operande(), b in operande()) {
        let mut calc = Calculatrice::nouvelle();
        prop_assert_eq!(calc.additionner(a, b), a + b);
        prop_assert_eq!(calc.historique().entrees().len(), 1);
    }

    #[test]
    fn soustraire_vaut_difference(a in operande(), b in operande()) {
        let mut calc = Calculatrice::nouvelle();
        prop_assert_eq!(calc.soustraire(a, b), a - b);
        prop_assert_eq!(calc.historique().entrees().len(), 1);
    }

    #[test]
    fn multiplier_vaut_produit(a in operande(), b in operande()) {
        let mut calc = Calculatrice::nouvelle();
        prop_assert_eq!(calc.multiplier(a, b), a * b);
        prop_assert_eq!(calc.historique().entrees().len(), 1);
    }

    #[test]
    fn diviser_non_nul_vaut_quotient(a in operande(), b in operande()) {
        prop_assume!(b != 0.0);
        let mut calc = Calculatrice::nouvelle();
        prop_assert_eq!(calc.diviser(a, b), Ok(a / b));
        prop_assert_eq!(calc.historique().entrees().len(), 1);
    }

    #[test]
    fn diviser_par_zero_echoue_toujours(a in operande()) {
        let mut calc = Calculatrice::nouvelle();
        prop_assert_eq!(calc.diviser(a, 0.0), Err(ErreurCalcul::DivisionParZero));
        prop_assert!(calc.historique().est_vide());
    }

    #[test]
    fn racine_negative_echoue_toujours(a in -1.0e9_f64..-f64::MIN_POSITIVE) {
        let mut calc = Calculatrice::nouvelle();
        prop_assert_eq!(
            calc.racine_carree(a),
            Err(ErreurCalcul::RacineNegative)
        );
        prop_assert!(calc.historique().est_vide());
    }

    #[test]
    fn racine_positive_est_positive(a in 0.0_f64..1.0e9_f64) {
        let mut calc = Calculatrice::nouvelle();
        let r = calc.racine_carree(a).unwrap();
        prop_assert!(r >= 0.0);
        prop_assert_eq!(calc.historique().entrees().len(), 1);
    }

    #[test]
    fn pourcentage_de_zero_vaut_zero(p in operande()) {
        let mut calc = Calculatrice::nouvelle();
        prop_assert_eq!(calc.pourcentage(0.0, p), 0.0);
    }

    #[test]
    fn historique_numerote_dans_l_ordre(valeurs in prop::collection::vec(operande(), 1..8)) {
        let mut calc = Calculatrice::nouvelle();
        for &v in &valeurs {
            calc.additionner(v, 1.0);
        }
        prop_assert_eq!(calc.historique().entrees().len(), valeurs.len());
        // chaque enregistrement i correspond bien à la i-ème opération
        for (entree, &v) in calc.historique().entrees().iter().zip(&valeurs) {
            let prefixe = format!("{v:.2} + ");
            prop_assert!(entree.starts_with(&prefixe));
        }
    }

    #[test]
    fn effacer_puis_afficher_toujours_vide(valeurs in prop::collection::vec(operande(), 0..8)) {
        let mut calc = Calculatrice::nouvelle();
        for &v in &valeurs {
            calc.multiplier(v, 2.0);
        }
        calc.effacer_historique();
        prop_assert!(calc.historique().est_vide());
        calc.effacer_historique();
        prop_assert!(calc.historique().est_vide());
    }
}
