//! src/noyau/moteur.rs
//!
//! Moteur d’expression : le tampon de saisie et ses opérations.
//!
//! Contrats :
//! - Le tampon n’est modifié que par les méthodes ci-dessous.
//! - Au plus un `.` par nombre ; jamais deux opérateurs en fin de tampon.
//! - Après `calculer_resultat` : soit le texte du résultat arrondi, soit un tampon vide
//!   avec "Error" à l’écran, puis retour à "0" après le délai (rappel non annulable).
//! - L’écran est mis à jour après chaque mutation, et une fois à la construction.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, warn};

use super::eval::eval_expression;
use super::format::format_nombre;
use super::jetons::{est_autorise, est_operateur};
use super::minuteur::Minuteur;

/// Texte affiché pendant le flash d’erreur.
pub const TEXTE_ERREUR: &str = "Error";

/// Rendu du tampon vide.
pub const TEXTE_VIDE: &str = "0";

lazy_static! {
    /// Nombre en cours : suite finale de chiffres et de points (éventuellement vide).
    static ref NOMBRE_EN_COURS: Regex = Regex::new(r"[0-9.]*$").unwrap();

    /// Dernier nombre non vide en fin de tampon (cible du pourcentage).
    static ref NOMBRE_FINAL: Regex = Regex::new(r"[0-9]*\.?[0-9]+$").unwrap();
}

/// Collaborateur d’affichage : reçoit le texte complet à montrer.
pub trait Ecran {
    fn afficher(&mut self, texte: &str);
}

/// Réglages du moteur.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reglages {
    /// Durée du flash "Error" avant retour à l’affichage du tampon.
    pub delai_erreur_ms: f64,
    /// Décimales gardées sur un résultat.
    pub decimales: u32,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            delai_erreur_ms: 900.0,
            decimales: 10,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Etat {
    Edition,
    FlashErreur,
}

#[derive(Debug)]
pub struct MoteurExpression<E: Ecran> {
    tampon: String,
    ecran: E,
    etat: Etat,
    reglages: Reglages,
    minuteur: Minuteur,
}

impl<E: Ecran> MoteurExpression<E> {
    pub fn new(ecran: E) -> Self {
        Self::avec_reglages(ecran, Reglages::default())
    }

    pub fn avec_reglages(ecran: E, reglages: Reglages) -> Self {
        let mut m = Self {
            tampon: String::new(),
            ecran,
            etat: Etat::Edition,
            reglages,
            minuteur: Minuteur::default(),
        };
        m.rafraichir();
        m
    }

    pub fn tampon(&self) -> &str {
        &self.tampon
    }

    pub fn etat(&self) -> Etat {
        self.etat
    }

    pub fn ecran(&self) -> &E {
        &self.ecran
    }

    /* ------------------------ Saisie ------------------------ */

    /// Ajoute un caractère en appliquant les règles de saisie :
    /// - `.` : refusé si le nombre en cours en a déjà un ; précédé de `0` si rien avant
    /// - opérateur : seul `-` peut ouvrir ; un opérateur final est remplacé
    /// - chiffres, parenthèses, espace : ajoutés tels quels
    /// - tout autre caractère est ignoré
    pub fn ajouter_caractere(&mut self, ch: char) {
        if ch == '.' {
            let deja_decimal = NOMBRE_EN_COURS
                .find(&self.tampon)
                .is_some_and(|m| m.as_str().contains('.'));
            if deja_decimal {
                return;
            }
            if self.tampon.is_empty() || self.finit_par_operateur() {
                self.tampon.push('0');
            }
            self.tampon.push('.');
        } else if est_operateur(ch) {
            if self.tampon.is_empty() && ch != '-' {
                return;
            }
            if self.finit_par_operateur() {
                self.tampon.pop();
            }
            self.tampon.push(ch);
        } else if est_autorise(ch) {
            self.tampon.push(ch);
        } else {
            debug!(?ch, "caractère ignoré");
            return;
        }

        debug!(?ch, tampon = %self.tampon, "ajout");
        self.rafraichir();
    }

    /// C : tampon vide, écran à "0".
    pub fn effacer(&mut self) {
        self.tampon.clear();
        debug!("effacement");
        self.rafraichir();
    }

    /// DEL : retire le dernier caractère (rien à faire sur un tampon vide).
    pub fn supprimer_dernier(&mut self) {
        if self.tampon.pop().is_none() {
            return;
        }
        debug!(tampon = %self.tampon, "suppression");
        self.rafraichir();
    }

    /// % : le dernier nombre est divisé par 100, sur place.
    pub fn appliquer_pourcentage(&mut self) {
        let Some(m) = NOMBRE_FINAL.find(&self.tampon) else {
            return;
        };
        let debut = m.start();
        let Ok(v) = m.as_str().parse::<f64>() else {
            return;
        };

        let remplacement = format_nombre(v / 100.0);
        self.tampon.replace_range(debut.., &remplacement);
        debug!(tampon = %self.tampon, "pourcentage");
        self.rafraichir();
    }

    /* ------------------------ Évaluation ------------------------ */

    /// = : évalue le tampon.
    ///
    /// Les opérateurs finaux sont retirés d’abord. En cas d’échec (caractère invalide,
    /// syntaxe, résultat non fini), l’expression est jetée et l’écran passe en flash d’erreur.
    pub fn calculer_resultat(&mut self) {
        if self.tampon.is_empty() {
            return;
        }

        while self.finit_par_operateur() {
            self.tampon.pop();
        }
        if self.tampon.is_empty() {
            self.rafraichir();
            return;
        }

        match eval_expression(&self.tampon, self.reglages.decimales) {
            Ok(v) => {
                let texte = format_nombre(v);
                debug!(expression = %self.tampon, resultat = %texte, "évaluation");
                self.tampon = texte;
                self.rafraichir();
            }
            Err(e) => {
                warn!(expression = %self.tampon, erreur = %e, "évaluation refusée");
                self.tampon.clear();
                self.ecran.afficher(TEXTE_ERREUR);
                self.etat = Etat::FlashErreur;
                self.minuteur.armer(self.reglages.delai_erreur_ms);
            }
        }
    }

    /* ------------------------ Temps ------------------------ */

    /// Fait avancer le temps ; chaque rappel échu ré-affiche le tampon courant.
    pub fn avancer(&mut self, dt_ms: f64) {
        let echus = self.minuteur.avancer(dt_ms);
        for _ in 0..echus {
            self.rafraichir();
        }
    }

    /// Temps (ms) avant le prochain rappel, s’il y en a un.
    pub fn prochain_rappel_ms(&self) -> Option<f64> {
        self.minuteur.prochaine_echeance()
    }

    /* ------------------------ Interne ------------------------ */

    fn finit_par_operateur(&self) -> bool {
        self.tampon.ends_with(est_operateur)
    }

    fn rafraichir(&mut self) {
        let texte = if self.tampon.is_empty() {
            TEXTE_VIDE
        } else {
            self.tampon.as_str()
        };
        self.ecran.afficher(texte);
        self.etat = Etat::Edition;
    }
}
