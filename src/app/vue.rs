// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Écran : une ligne, grosse police monospace, alignée à droite ("Error" en couleur d’erreur)
// - Pavé : C DEL % / | 7 8 9 * | 4 5 6 - | 1 2 3 + | ( 0 . ) | =
// - Clavier : événements egui -> routage::depuis_touche
//
// Note :
// - Les caractères arrivent en Event::Text, les touches nommées (Enter, Backspace, Escape)
//   en Event::Key. On ne route les Event::Key que pour les noms longs, sinon "=" partirait deux fois.

use eframe::egui;

use super::etat::AppCalc;
use super::routage::{depuis_clic, depuis_touche, ActionNommee, Clic};

const TAILLE_BOUTON: [f32; 2] = [64.0, 48.0];

const PAVE: [[(&str, Clic); 4]; 5] = [
    [
        ("C", Clic::Action(ActionNommee::Effacer)),
        ("DEL", Clic::Action(ActionNommee::Supprimer)),
        ("%", Clic::Action(ActionNommee::Pourcentage)),
        ("/", Clic::Valeur('/')),
    ],
    [
        ("7", Clic::Valeur('7')),
        ("8", Clic::Valeur('8')),
        ("9", Clic::Valeur('9')),
        ("*", Clic::Valeur('*')),
    ],
    [
        ("4", Clic::Valeur('4')),
        ("5", Clic::Valeur('5')),
        ("6", Clic::Valeur('6')),
        ("-", Clic::Valeur('-')),
    ],
    [
        ("1", Clic::Valeur('1')),
        ("2", Clic::Valeur('2')),
        ("3", Clic::Valeur('3')),
        ("+", Clic::Valeur('+')),
    ],
    [
        ("(", Clic::Valeur('(')),
        ("0", Clic::Valeur('0')),
        (".", Clic::Valeur('.')),
        (")", Clic::Valeur(')')),
    ],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading(crate::TITRE_APP);
        ui.add_space(6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);

        self.ui_pave(ui);
    }

    /// Route les événements clavier de la frame vers le moteur.
    pub fn router_clavier(&mut self, evenements: &[egui::Event]) {
        for ev in evenements {
            match ev {
                egui::Event::Text(t) => {
                    for c in t.chars() {
                        let mut buf = [0u8; 4];
                        if let Some(cmd) = depuis_touche(c.encode_utf8(&mut buf)) {
                            self.appliquer(cmd);
                        }
                    }
                }
                egui::Event::Key {
                    key, pressed: true, ..
                } => {
                    let nom = key.name();
                    if nom.chars().count() > 1 {
                        if let Some(cmd) = depuis_touche(nom) {
                            self.appliquer(cmd);
                        }
                    }
                }
                _ => {}
            }
        }
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        let couleur = if self.en_erreur() {
            ui.visuals().error_fg_color
        } else {
            ui.visuals().strong_text_color()
        };
        let texte = egui::RichText::new(self.affichage())
            .monospace()
            .size(34.0)
            .color(couleur);
        let expression = self.expression().to_string();

        // Affichage lecture seule, cadre visuel via Frame.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(texte)
                        .on_hover_text(format!("expression : {expression}"));
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for rangee in PAVE {
                    for (label, clic) in rangee {
                        self.bouton(ui, label, clic);
                    }
                    ui.end_row();
                }
            });

        ui.add_space(6.0);

        let largeur = TAILLE_BOUTON[0] * 4.0 + 6.0 * 3.0;
        self.bouton_taille(
            ui,
            [largeur, TAILLE_BOUTON[1]],
            "=",
            Clic::Action(ActionNommee::Egal),
        );
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, clic: Clic) {
        self.bouton_taille(ui, TAILLE_BOUTON, label, clic);
    }

    fn bouton_taille(&mut self, ui: &mut egui::Ui, taille: [f32; 2], label: &str, clic: Clic) {
        let resp = ui.add_sized(
            taille,
            egui::Button::new(egui::RichText::new(label).size(22.0)),
        );
        if resp.clicked() {
            self.appliquer(depuis_clic(clic));
        }
    }
}
