// src/moteur/format.rs
//
// Rendu des équations à deux décimales.
//
// Un seul endroit décide de la forme "2.00 + 3.00 = 5.00" :
// le moteur s'en sert pour l'historique, la session pour l'affichage
// du résultat. Les deux ne peuvent donc pas diverger.

/// Équation binaire : "a op b = r" (op ∈ + - * / ^).
pub fn equation_binaire(a: f64, op: char, b: f64, r: f64) -> String {
    format!("{a:.2} {op} {b:.2} = {r:.2}")
}

/// Racine carrée : "√a = r".
pub fn equation_racine(a: f64, r: f64) -> String {
    format!("√{a:.2} = {r:.2}")
}

/// Pourcentage : "p% de n = r".
pub fn equation_pourcentage(nombre: f64, pourcent: f64, r: f64) -> String {
    format!("{pourcent:.2}% de {nombre:.2} = {r:.2}")
}
