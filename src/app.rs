// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + routage.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Ordre d’une frame : horloge (retour après "Error") -> clavier -> dessin -> replanification.

pub mod etat;
pub mod routage;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use std::time::Duration;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let (maintenant, evenements) = ctx.input(|i| (i.time, i.events.clone()));

        self.tic(maintenant);
        self.router_clavier(&evenements);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });

        // Sans entrée, egui ne redessine pas : on se réveille pour le retour à "0".
        if let Some(ms) = self.prochain_rappel_ms() {
            if let Ok(d) = Duration::try_from_secs_f64(ms.max(0.0) / 1000.0) {
                ctx.request_repaint_after(d);
            }
        }
    }
}
