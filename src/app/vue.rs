// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Affichage : expression (petite, atténuée) + résultat (grand, rouge si erreur)
// - Indicateur mémoire seulement si mémoire ≠ 0
// - Boutons : produisent des `Touche`, exactement comme le clavier (app.rs)

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::touches::{Constante, Fonction, Operateur, Touche};

const MEMOIRE: [Touche; 6] = [
    Touche::MemoireEfface,
    Touche::MemoireRappel,
    Touche::MemoirePlus,
    Touche::MemoireMoins,
    Touche::ToutEffacer,
    Touche::Effacer,
];

const FONCTIONS: [Touche; 6] = [
    Touche::Fonction(Fonction::Sin),
    Touche::Fonction(Fonction::Cos),
    Touche::Fonction(Fonction::Tan),
    Touche::Fonction(Fonction::Log),
    Touche::Fonction(Fonction::Log10),
    Touche::Fonction(Fonction::Racine),
];

const SYMBOLES: [Touche; 6] = [
    Touche::Constante(Constante::Pi),
    Touche::Constante(Constante::E),
    Touche::Carre,
    Touche::Operateur(Operateur::Puissance),
    Touche::ParOuvrante,
    Touche::ParFermante,
];

/// Pavé 4×4 : chiffres + opérateurs + "=".
const PAVE: [[Touche; 4]; 4] = [
    [
        Touche::Chiffre(7),
        Touche::Chiffre(8),
        Touche::Chiffre(9),
        Touche::Operateur(Operateur::Divise),
    ],
    [
        Touche::Chiffre(4),
        Touche::Chiffre(5),
        Touche::Chiffre(6),
        Touche::Operateur(Operateur::Fois),
    ],
    [
        Touche::Chiffre(1),
        Touche::Chiffre(2),
        Touche::Chiffre(3),
        Touche::Operateur(Operateur::Moins),
    ],
    [
        Touche::Chiffre(0),
        Touche::Point,
        Touche::Egal,
        Touche::Operateur(Operateur::Plus),
    ],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice scientifique");
        ui.add_space(6.0);

        self.ui_affichage(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        // Clics collectés puis appliqués après le dessin (une transition par clic).
        let mut clics = Vec::new();
        Self::ui_touches(ui, &mut clics);
        self.envoyer_tout(clics);
    }

    fn ui_affichage(&self, ui: &mut egui::Ui) {
        let etat = &self.etat;

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    // Expression brute : petite, atténuée
                    let expression = if etat.expression.is_empty() {
                        " "
                    } else {
                        etat.expression.as_str()
                    };
                    ui.label(
                        egui::RichText::new(expression)
                            .monospace()
                            .size(16.0)
                            .color(ui.visuals().weak_text_color()),
                    );

                    // Résultat : grand, rouge si erreur
                    let couleur = if etat.erreur {
                        ui.visuals().error_fg_color
                    } else {
                        ui.visuals().strong_text_color()
                    };
                    ui.label(
                        egui::RichText::new(&etat.resultat)
                            .monospace()
                            .size(36.0)
                            .color(couleur),
                    );

                    if let Some(m) = etat.memoire_affichee() {
                        ui.label(egui::RichText::new(format!("M = {m}")).small());
                    }
                });
            });
    }

    fn ui_touches(ui: &mut egui::Ui, clics: &mut Vec<Touche>) {
        egui::Grid::new("touches_scientifiques")
            .num_columns(6)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for rangee in [&MEMOIRE, &FONCTIONS, &SYMBOLES] {
                    for t in rangee {
                        Self::bouton(ui, *t, [64.0, 32.0], clics);
                    }
                    ui.end_row();
                }
            });

        ui.add_space(8.0);

        egui::Grid::new("pave_numerique")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for rangee in &PAVE {
                    for t in rangee {
                        Self::bouton(ui, *t, [99.0, 44.0], clics);
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(ui: &mut egui::Ui, touche: Touche, taille: [f32; 2], clics: &mut Vec<Touche>) {
        let libelle = egui::RichText::new(touche.libelle()).size(18.0);
        let resp = ui.add_sized(taille, egui::Button::new(libelle));
        if resp.clicked() {
            clics.push(touche);
        }
    }
}
