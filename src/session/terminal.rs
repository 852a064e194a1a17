// src/session/terminal.rs
//
// Boucle terminal (lecture-évaluation-affichage)
// ----------------------------------------------
// Objectifs :
// - Même machine à états à chaque tour : menu -> choix -> opérandes
//   -> calcul -> résultat -> pause Entrée.
// - Saisie invalide (chiffre de menu, opérande) : message + nouvelle
//   invite, sans limite de tentatives, sans récursion.
// - Erreur domaine (division par zéro, racine négative) : message,
//   AUCUNE écriture dans l'historique, retour au menu.
// - Fin d'entrée (Ctrl-D, script épuisé) : arrêt propre n'importe où.
//
// La boucle est générique sur BufRead/Write : les tests la pilotent
// avec des transcriptions en mémoire, main.rs avec stdin/stdout.

use std::io::{self, BufRead, Write};

use crate::moteur::{format, Calculatrice};

use super::etat::{interpreter_nombre, Choix};

const BIENVENUE: &str = "Bienvenue dans la calculatrice !";
const AU_REVOIR: &str = "Au revoir !";

const MENU: &str = "\
\n=== CALCULATRICE ===
1. Addition (+)
2. Soustraction (-)
3. Multiplication (*)
4. Division (/)
5. Puissance (^)
6. Racine carrée (√)
7. Pourcentage (%)
8. Afficher l'historique
9. Effacer l'historique
0. Quitter
====================";

const INVITE_MENU: &str = "Choisissez une opération (1-9, 0 pour quitter) : ";
const ERREUR_MENU: &str = "Erreur : entrez un chiffre de 0 à 9";
const ERREUR_NOMBRE: &str = "Erreur : entrez un nombre valide";

const INVITE_PREMIER: &str = "Entrez le premier nombre : ";
const INVITE_DEUXIEME: &str = "Entrez le deuxième nombre : ";

/// Issue d'un tour de boucle.
enum Suite {
    Continuer,
    Quitter,
    FinEntree,
}

/// Contrôleur de session : la calculatrice (et donc l'historique),
/// plus les deux extrémités du terminal.
pub struct Session<E, S> {
    calc: Calculatrice,
    entree: E,
    sortie: S,
}

impl<E: BufRead, S: Write> Session<E, S> {
    pub fn nouvelle(entree: E, sortie: S) -> Self {
        Self {
            calc: Calculatrice::nouvelle(),
            entree,
            sortie,
        }
    }

    /// Boucle principale. Ne se termine que par le choix 0 ou la fin
    /// de l'entrée ; les erreurs d'E/S réelles remontent à l'appelant.
    pub fn executer(&mut self) -> io::Result<()> {
        writeln!(self.sortie, "{BIENVENUE}")?;

        loop {
            writeln!(self.sortie, "{MENU}")?;

            let Some(choix) = self.lire_choix()? else {
                break;
            };

            match self.traiter(choix)? {
                Suite::Quitter => {
                    writeln!(self.sortie, "{AU_REVOIR}")?;
                    break;
                }
                Suite::FinEntree => break,
                Suite::Continuer => {
                    if !self.attendre_entree()? {
                        break;
                    }
                }
            }
        }

        Ok(())
    }

    /* ------------------------ Aiguillage ------------------------ */

    fn traiter(&mut self, choix: Choix) -> io::Result<Suite> {
        match choix {
            Choix::Quitter => return Ok(Suite::Quitter),

            Choix::Additionner => {
                let Some((a, b)) = self.lire_deux(INVITE_PREMIER, INVITE_DEUXIEME)? else {
                    return Ok(Suite::FinEntree);
                };
                let r = self.calc.additionner(a, b);
                self.afficher_resultat(&format::equation_binaire(a, '+', b, r))?;
            }

            Choix::Soustraire => {
                let Some((a, b)) = self.lire_deux(INVITE_PREMIER, INVITE_DEUXIEME)? else {
                    return Ok(Suite::FinEntree);
                };
                let r = self.calc.soustraire(a, b);
                self.afficher_resultat(&format::equation_binaire(a, '-', b, r))?;
            }

            Choix::Multiplier => {
                let Some((a, b)) = self.lire_deux(INVITE_PREMIER, INVITE_DEUXIEME)? else {
                    return Ok(Suite::FinEntree);
                };
                let r = self.calc.multiplier(a, b);
                self.afficher_resultat(&format::equation_binaire(a, '*', b, r))?;
            }

            Choix::Diviser => {
                let Some((a, b)) =
                    self.lire_deux("Entrez le dividende : ", "Entrez le diviseur : ")?
                else {
                    return Ok(Suite::FinEntree);
                };
                match self.calc.diviser(a, b) {
                    Ok(r) => self.afficher_resultat(&format::equation_binaire(a, '/', b, r))?,
                    Err(e) => writeln!(self.sortie, "Erreur : {e}")?,
                }
            }

            Choix::Puissance => {
                let Some((base, exposant)) =
                    self.lire_deux("Entrez la base : ", "Entrez l'exposant : ")?
                else {
                    return Ok(Suite::FinEntree);
                };
                let r = self.calc.puissance(base, exposant);
                self.afficher_resultat(&format::equation_binaire(base, '^', exposant, r))?;
            }

            Choix::RacineCarree => {
                let Some(a) = self.lire_nombre("Entrez le nombre : ")? else {
                    return Ok(Suite::FinEntree);
                };
                match self.calc.racine_carree(a) {
                    Ok(r) => self.afficher_resultat(&format::equation_racine(a, r))?,
                    Err(e) => writeln!(self.sortie, "Erreur : {e}")?,
                }
            }

            Choix::Pourcentage => {
                let Some((nombre, pourcent)) =
                    self.lire_deux("Entrez le nombre : ", "Entrez le pourcentage : ")?
                else {
                    return Ok(Suite::FinEntree);
                };
                let r = self.calc.pourcentage(nombre, pourcent);
                self.afficher_resultat(&format::equation_pourcentage(nombre, pourcent, r))?;
            }

            Choix::AfficherHistorique => self.afficher_historique()?,

            Choix::EffacerHistorique => {
                self.calc.effacer_historique();
                writeln!(self.sortie, "Historique effacé")?;
            }
        }

        Ok(Suite::Continuer)
    }

    /* ------------------------ Affichage ------------------------ */

    fn afficher_resultat(&mut self, equation: &str) -> io::Result<()> {
        writeln!(self.sortie, "Résultat : {equation}")
    }

    fn afficher_historique(&mut self) -> io::Result<()> {
        if self.calc.historique().est_vide() {
            writeln!(self.sortie, "L'historique des opérations est vide")?;
            return Ok(());
        }

        writeln!(self.sortie, "\n--- Historique des opérations ---")?;
        for (i, entree) in self.calc.historique().entrees().iter().enumerate() {
            writeln!(self.sortie, "{}. {}", i + 1, entree)?;
        }
        writeln!(self.sortie, "---------------------------------")?;
        Ok(())
    }

    /* ------------------------ Lecture ------------------------ */

    /// Une ligne brute ; None en fin d'entrée.
    fn lire_ligne(&mut self) -> io::Result<Option<String>> {
        let mut ligne = String::new();
        let octets = self.entree.read_line(&mut ligne)?;
        if octets == 0 {
            return Ok(None);
        }
        Ok(Some(ligne))
    }

    /// Choix de menu : invite + nouvelle tentative tant que la saisie
    /// n'est pas un unique chiffre 0-9. None en fin d'entrée.
    fn lire_choix(&mut self) -> io::Result<Option<Choix>> {
        loop {
            write!(self.sortie, "{INVITE_MENU}")?;
            self.sortie.flush()?;

            let Some(ligne) = self.lire_ligne()? else {
                return Ok(None);
            };
            match Choix::depuis_saisie(&ligne) {
                Some(choix) => return Ok(Some(choix)),
                None => writeln!(self.sortie, "{ERREUR_MENU}")?,
            }
        }
    }

    /// Opérande : invite + nouvelle tentative tant que la saisie ne se
    /// lit pas comme un f64. None en fin d'entrée.
    fn lire_nombre(&mut self, invite: &str) -> io::Result<Option<f64>> {
        loop {
            write!(self.sortie, "{invite}")?;
            self.sortie.flush()?;

            let Some(ligne) = self.lire_ligne()? else {
                return Ok(None);
            };
            match interpreter_nombre(&ligne) {
                Some(nombre) => return Ok(Some(nombre)),
                None => writeln!(self.sortie, "{ERREUR_NOMBRE}")?,
            }
        }
    }

    fn lire_deux(&mut self, invite_a: &str, invite_b: &str) -> io::Result<Option<(f64, f64)>> {
        let Some(a) = self.lire_nombre(invite_a)? else {
            return Ok(None);
        };
        let Some(b) = self.lire_nombre(invite_b)? else {
            return Ok(None);
        };
        Ok(Some((a, b)))
    }

    /// Pause volontaire : le prochain menu n'emporte pas le résultat
    /// hors de l'écran. false en fin d'entrée.
    fn attendre_entree(&mut self) -> io::Result<bool> {
        write!(self.sortie, "\nAppuyez sur Entrée pour continuer...")?;
        self.sortie.flush()?;
        Ok(self.lire_ligne()?.is_some())
    }
}
