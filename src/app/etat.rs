//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : porter le moteur d’expression, l’écran texte qu’il alimente,
//! et l’horloge qui fait partir le retour après un flash d’erreur.
//!
//! Contrats :
//! - Aucune évaluation ici : tout passe par le moteur (noyau).
//! - Le temps vient de l’appelant (egui), jamais d’une horloge système.

use crate::noyau::moteur::{Ecran, Etat, MoteurExpression, Reglages};

use super::routage::Commande;

/// Écran de l’app : le dernier texte reçu du moteur.
#[derive(Clone, Debug, Default)]
pub struct TexteEcran {
    pub texte: String,
}

impl Ecran for TexteEcran {
    fn afficher(&mut self, texte: &str) {
        self.texte.clear();
        self.texte.push_str(texte);
    }
}

#[derive(Debug)]
pub struct AppCalc {
    moteur: MoteurExpression<TexteEcran>,

    // Dernier instant vu (secondes, horloge egui) pour calculer le temps écoulé.
    dernier_temps: Option<f64>,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(Reglages::default())
    }
}

impl AppCalc {
    pub fn new(reglages: Reglages) -> Self {
        Self {
            moteur: MoteurExpression::avec_reglages(TexteEcran::default(), reglages),
            dernier_temps: None,
        }
    }

    pub fn appliquer(&mut self, cmd: Commande) {
        cmd.appliquer(&mut self.moteur);
    }

    /// Texte à montrer à l’écran.
    pub fn affichage(&self) -> &str {
        &self.moteur.ecran().texte
    }

    /// Expression en cours (vide pendant un flash d’erreur).
    pub fn expression(&self) -> &str {
        self.moteur.tampon()
    }

    pub fn en_erreur(&self) -> bool {
        self.moteur.etat() == Etat::FlashErreur
    }

    /// Fait avancer le moteur jusqu’à `maintenant` (secondes).
    pub fn tic(&mut self, maintenant: f64) {
        if let Some(avant) = self.dernier_temps {
            self.moteur.avancer((maintenant - avant) * 1000.0);
        }
        self.dernier_temps = Some(maintenant);
    }

    /// Délai (ms) avant le prochain rappel, pour planifier un rafraîchissement.
    pub fn prochain_rappel_ms(&self) -> Option<f64> {
        self.moteur.prochain_rappel_ms()
    }
}
