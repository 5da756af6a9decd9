// src/noyau/minuteur.rs
//
// Rappels différés, pilotés par le temps écoulé (ms) que fournit l’appelant.
// Pas d’horloge interne : même comportement en natif, en wasm et en test.
//
// Contrat :
// - un rappel armé n’est jamais annulé
// - plusieurs rappels armés partent chacun une fois, dans l’ordre de leurs échéances

#[derive(Clone, Debug, Default)]
pub struct Minuteur {
    /// Temps restant (ms) de chaque rappel en attente.
    restants: Vec<f64>,
}

impl Minuteur {
    /// Programme un rappel dans `delai_ms` (négatif ou non fini : immédiat).
    pub fn armer(&mut self, delai_ms: f64) {
        let delai = if delai_ms.is_finite() {
            delai_ms.max(0.0)
        } else {
            0.0
        };
        self.restants.push(delai);
    }

    /// Fait avancer le temps de `dt_ms` ; renvoie le nombre de rappels échus.
    pub fn avancer(&mut self, dt_ms: f64) -> usize {
        if self.restants.is_empty() {
            return 0;
        }
        let dt = dt_ms.max(0.0);
        for r in &mut self.restants {
            *r -= dt;
        }
        let avant = self.restants.len();
        self.restants.retain(|r| *r > 0.0);
        avant - self.restants.len()
    }

    /// Délai avant le prochain rappel (pour demander un rafraîchissement à temps).
    pub fn prochaine_echeance(&self) -> Option<f64> {
        self.restants.iter().copied().reduce(f64::min)
    }
}
