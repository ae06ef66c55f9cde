//! Noyau — adaptateur d’évaluation
//!
//! expression affichée -> jetons -> syntaxe ASCII -> meval -> f64 -> texte
//!
//! Seule frontière d’erreur du système : tout échec (tokenisation, parse,
//! symbole inconnu, valeur non finie) devient "Error" et ne remonte jamais.

use super::erreur::EchecEvaluation;
use super::format::{formater, ERREUR};
use super::jetons::traduire;

/// API publique : texte affichable pour une expression (jamais d’erreur).
pub fn evaluer(expression: &str) -> String {
    if expression.trim().is_empty() {
        return "0".to_string();
    }

    match evaluer_valeur(expression) {
        Ok(v) => formater(v),
        Err(e) => {
            tracing::debug!(expression, erreur = %e, "évaluation en échec");
            ERREUR.to_string()
        }
    }
}

/// Valeur numérique finie de l’expression affichée.
pub fn evaluer_valeur(expression: &str) -> Result<f64, EchecEvaluation> {
    let syntaxe = traduire(expression)?;
    let expr: meval::Expr = syntaxe.parse()?;
    let v = expr.eval_with_context(contexte())?;

    if !v.is_finite() {
        return Err(EchecEvaluation::NonFini);
    }
    Ok(v)
}

/// Contexte meval : fonctions intégrées (sin, cos, tan, sqrt, pi, e, …)
/// + log (népérien) et log10.
fn contexte() -> meval::Context<'static> {
    let mut ctx = meval::Context::new();
    ctx.func("log", f64::ln).func("log10", f64::log10);
    ctx
}
