// src/app.rs
//
// Module App (racine)
// -------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
// - Traduire le clavier en `Touche` (même chemin que les boutons)
//
// Clavier reconnu : chiffres, + - * /, ., ( ), Enter/=, Backspace, Escape/c.
// Le reste n’est pas traité.

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use crate::noyau::Touche;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Clavier d’abord (ordre de frappe conservé), puis la vue.
        let touches: Vec<Touche> =
            ctx.input(|i| i.events.iter().filter_map(touche_clavier).collect());
        self.envoyer_tout(touches);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}

/// Événement egui -> touche logique.
/// Texte tapé : un seul caractère reconnu. Touches nommées : Enter, Backspace, Escape.
fn touche_clavier(ev: &egui::Event) -> Option<Touche> {
    match ev {
        egui::Event::Text(t) => {
            let mut chars = t.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Touche::depuis_caractere(c),
                _ => None,
            }
        }
        egui::Event::Key {
            key, pressed: true, ..
        } => match key {
            egui::Key::Enter => Some(Touche::Egal),
            egui::Key::Backspace => Some(Touche::Effacer),
            egui::Key::Escape => Some(Touche::ToutEffacer),
            _ => None,
        },
        _ => None,
    }
}
