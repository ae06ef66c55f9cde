//! Noyau de la calculatrice scientifique
//!
//! Organisation interne :
//! - touches.rs  : événement d’entrée unique (clavier + boutons)
//! - editeur.rs  : état + transitions pures (règles d’insertion)
//! - jetons.rs   : glyphes affichés -> syntaxe évaluateur
//! - eval.rs     : adaptateur meval (seule frontière d’erreur)
//! - format.rs   : affichage fixe / exponentiel
//! - erreur.rs   : échec d’évaluation

pub mod editeur;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod touches;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use editeur::EtatCalc;
pub use touches::Touche;
