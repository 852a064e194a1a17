// src/moteur/historique.rs

/// Journal ordonné des opérations de la session.
///
/// Contrats :
/// - ordre d'insertion préservé (affichage numéroté à partir de 1) ;
/// - ajout seulement, jusqu'à `effacer()` ;
/// - possédé par l'instance de calculatrice, jamais global.
#[derive(Clone, Debug, Default)]
pub struct Historique {
    entrees: Vec<String>,
}

impl Historique {
    pub fn est_vide(&self) -> bool {
        self.entrees.is_empty()
    }

    /// Dépose un enregistrement (déjà formaté) en fin de journal.
    pub fn ajouter(&mut self, entree: String) {
        self.entrees.push(entree);
    }

    /// Remet le journal à zéro. Idempotent.
    pub fn effacer(&mut self) {
        self.entrees.clear();
    }

    /// Les enregistrements, dans l'ordre d'insertion.
    pub fn entrees(&self) -> &[String] {
        &self.entrees
    }
}
