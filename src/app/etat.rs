//! src/app/etat.rs
//!
//! État UI (sans vue, sans règles d’édition).
//!
//! Rôle : porter l’état de la calculatrice entre deux frames et y appliquer
//! les touches reçues (clavier ou boutons) via la transition pure du noyau.
//!
//! Contrats :
//! - Aucune règle d’édition ici (tout passe par `EtatCalc::appliquer`).
//! - Une touche = une transition, dans l’ordre de réception.

use crate::noyau::{EtatCalc, Touche};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    pub etat: EtatCalc,
}

impl AppCalc {
    /// Applique une touche : ancien état + touche -> nouvel état.
    pub fn envoyer(&mut self, touche: Touche) {
        let etat = std::mem::take(&mut self.etat).appliquer(touche);

        tracing::debug!(
            ?touche,
            expression = %etat.expression,
            resultat = %etat.resultat,
            erreur = etat.erreur,
            "touche appliquée"
        );

        self.etat = etat;
    }

    /// Plusieurs touches, dans l’ordre.
    pub fn envoyer_tout(&mut self, touches: impl IntoIterator<Item = Touche>) {
        for t in touches {
            self.envoyer(t);
        }
    }
}
