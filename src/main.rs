// src/main.rs
//
// Calculatrice — point d’entrée NATIF + WEB (WASM)
// ------------------------------------------------
// - NATIF (Linux/Windows/macOS) : options clap + journal tracing + eframe::run_native
// - WEB  (wasm32)              : eframe::WebRunner sur <canvas id="the_canvas_id"> (voir index.html)

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;
mod noyau;

use app::AppCalc;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
mod natif {
    use clap::Parser;
    use tracing_subscriber::EnvFilter;

    use crate::noyau::moteur::Reglages;

    #[derive(Parser, Debug)]
    #[command(version, about = "Calculatrice (natif)")]
    pub struct Options {
        /// Durée du flash "Error" (ms)
        #[arg(long, default_value_t = Reglages::default().delai_erreur_ms, value_parser = delai_valide)]
        pub delai_erreur_ms: f64,

        /// Décimales gardées sur un résultat
        #[arg(long, default_value_t = Reglages::default().decimales)]
        pub decimales: u32,

        /// Filtre du journal (ignoré si RUST_LOG est défini)
        #[arg(long, default_value = "info")]
        pub journal: String,
    }

    impl Options {
        pub fn reglages(&self) -> Reglages {
            Reglages {
                delai_erreur_ms: self.delai_erreur_ms,
                decimales: self.decimales,
            }
        }
    }

    /// Délai fini et positif, sinon refus au lancement.
    fn delai_valide(s: &str) -> Result<f64, String> {
        let ms: f64 = s.parse().map_err(|e| format!("{e}"))?;
        if ms.is_finite() && ms >= 0.0 {
            Ok(ms)
        } else {
            Err(format!("délai invalide: {s} (nombre fini ≥ 0 attendu)"))
        }
    }

    pub fn installer_journal(filtre: &str) {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filtre));
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use clap::Parser;

    let options = natif::Options::parse();
    natif::installer_journal(&options.journal);

    let reglages = options.reglages();
    tracing::info!(?reglages, "démarrage");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([320.0, 520.0])
            .with_min_inner_size([300.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        native_options,
        Box::new(move |_cc| Ok(Box::new(AppCalc::new(reglages)))),
    )
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    /// - Fixe le titre de l’onglet (document.title)
    /// - Récupère le <canvas id="the_canvas_id">
    /// - Démarre eframe WebRunner dessus
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        tracing::info!("démarrage (web)");

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
