//! src/noyau/editeur.rs
//!
//! Éditeur d’expression : état + transitions pures.
//!
//! Contrats :
//! - `appliquer(état, touche) -> état` : aucune erreur remontée à l’appelant.
//! - Après chaque touche, `resultat` = évaluation de `expression` ("0" si vide).
//! - `erreur` <=> `resultat == "Error"`.
//! - `memoire` survit à C ; seule MC la remet à zéro.

use super::eval::{evaluer, evaluer_valeur};
use super::format::{formater, ERREUR};
use super::touches::{Fonction, Operateur, Touche};

#[derive(Clone, Debug, PartialEq)]
pub struct EtatCalc {
    pub expression: String,
    pub resultat: String,
    pub memoire: f64,
    pub erreur: bool,
}

impl Default for EtatCalc {
    fn default() -> Self {
        Self {
            expression: String::new(),
            resultat: "0".to_string(),
            memoire: 0.0,
            erreur: false,
        }
    }
}

impl EtatCalc {
    /// Transition : ancien état + touche -> nouvel état.
    pub fn appliquer(mut self, touche: Touche) -> Self {
        match touche {
            Touche::Chiffre(d) if d <= 9 => self.expression.push(char::from(b'0' + d)),
            Touche::Chiffre(_) => return self,
            Touche::Point => self.ajouter_point(),
            Touche::Operateur(op) => self.ajouter_operateur(op),
            Touche::Fonction(f) => {
                self.expression.push_str(f.glyphe());
                self.expression.push('(');
            }
            Touche::Constante(c) => self.expression.push(c.glyphe()),
            Touche::Carre => self.expression.push('²'),
            Touche::ParOuvrante => self.expression.push('('),
            Touche::ParFermante => self.fermer_parenthese(),
            Touche::Egal => {
                // "=" sur une erreur : on garde l’expression telle quelle
                if self.erreur || self.expression.trim().is_empty() {
                    return self;
                }
                self.expression = vers_expression(&self.resultat);
            }
            Touche::Effacer => self.effacer_dernier(),
            Touche::ToutEffacer => self.expression.clear(),
            Touche::MemoirePlus => self.cumuler_memoire(1.0),
            Touche::MemoireMoins => self.cumuler_memoire(-1.0),
            Touche::MemoireRappel => self.rappeler_memoire(),
            Touche::MemoireEfface => self.memoire = 0.0,
        }

        self.reevaluer();
        self
    }

    /// Indicateur mémoire : None si la mémoire vaut 0.
    pub fn memoire_affichee(&self) -> Option<String> {
        (self.memoire != 0.0).then(|| formater(self.memoire))
    }

    fn reevaluer(&mut self) {
        self.resultat = evaluer(&self.expression);
        self.erreur = self.resultat == ERREUR;
    }

    fn dernier(&self) -> Option<char> {
        self.expression.chars().last()
    }

    fn ajouter_point(&mut self) {
        if segment_numerique(&self.expression).contains('.') {
            return;
        }
        match self.dernier() {
            Some(c) if c.is_ascii_digit() => self.expression.push('.'),
            None | Some('(') => self.expression.push_str("0."),
            Some(c) if est_operateur(c) => self.expression.push_str("0."),
            // après ')', π, e, ² : pas de nombre à prolonger
            Some(_) => {}
        }
    }

    /// Opérateur après opérateur : remplacement.
    /// En tête (ou après '(') : seul '−' est accepté.
    fn ajouter_operateur(&mut self, op: Operateur) {
        let mut base = self.expression.len();
        if let Some(c) = self.dernier().filter(|c| est_operateur(*c)) {
            base -= c.len_utf8();
        }

        let ouvrant = matches!(self.expression[..base].chars().last(), None | Some('('));
        if ouvrant && op != Operateur::Moins {
            return;
        }

        self.expression.truncate(base);
        self.expression.push(op.glyphe());
    }

    fn fermer_parenthese(&mut self) {
        let ouvertes = self.expression.matches('(').count();
        let fermees = self.expression.matches(')').count();
        if ouvertes <= fermees {
            return;
        }
        match self.dernier() {
            Some('(') => {}
            Some(c) if est_operateur(c) => {}
            _ => self.expression.push(')'),
        }
    }

    /// Retire le dernier glyphe ; "sin(", "log10(", "√(" … partent d’un bloc.
    fn effacer_dernier(&mut self) {
        for f in Fonction::TOUTES {
            let motif = format!("{}(", f.glyphe());
            if self.expression.ends_with(&motif) {
                let n = self.expression.len() - motif.len();
                self.expression.truncate(n);
                return;
            }
        }
        self.expression.pop();
    }

    /// M+ / M− : valeur courante (non arrondie) ajoutée à la mémoire.
    fn cumuler_memoire(&mut self, signe: f64) {
        if self.erreur || self.expression.trim().is_empty() {
            return;
        }
        let Ok(v) = evaluer_valeur(&self.expression) else {
            return;
        };
        let cumul = self.memoire + signe * v;
        if cumul.is_finite() {
            self.memoire = cumul;
            tracing::debug!(memoire = self.memoire, "mémoire mise à jour");
        }
    }

    /// MR : remplace le nombre en cours de saisie par la mémoire.
    fn rappeler_memoire(&mut self) {
        let n = self.expression.len() - segment_numerique(&self.expression).len();
        self.expression.truncate(n);

        let texte = vers_expression(&formater(self.memoire));
        if self.memoire < 0.0 || texte.contains('×') {
            self.expression.push('(');
            self.expression.push_str(&texte);
            self.expression.push(')');
        } else {
            self.expression.push_str(&texte);
        }
    }
}

fn est_operateur(c: char) -> bool {
    Operateur::depuis_glyphe(c).is_some()
}

/// Nombre en cours de saisie : chiffres et points en fin d’expression.
fn segment_numerique(expression: &str) -> &str {
    let debut = expression
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit() || *c == '.')
        .last()
        .map_or(expression.len(), |(i, _)| i);
    &expression[debut..]
}

/// Résultat formaté -> texte d’expression ré-évaluable.
/// "-3" -> "−3" ; "1.000000e+10" -> "1.000000×10^10" ; "1.5e-7" -> "1.5×10^(−7)".
fn vers_expression(resultat: &str) -> String {
    let signe = |s: &str| match s.strip_prefix('-') {
        Some(reste) => format!("−{reste}"),
        None => s.to_string(),
    };

    let Some((mantisse, exposant)) = resultat.split_once('e') else {
        return signe(resultat);
    };
    match exposant.parse::<i32>() {
        Ok(k) if k < 0 => format!("{}×10^(−{})", signe(mantisse), -k),
        Ok(k) => format!("{}×10^{k}", signe(mantisse)),
        Err(_) => signe(resultat),
    }
}
