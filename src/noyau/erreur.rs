// src/noyau/erreur.rs
//
// Échec d’évaluation : seule famille d’erreur du noyau.
// Ne sort jamais de l’adaptateur (eval.rs) : convertie en "Error" à l’affichage.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EchecEvaluation {
    #[error("caractère inattendu: '{0}'")]
    CaractereInattendu(char),

    #[error("nombre mal formé: {0}")]
    NombreInvalide(String),

    #[error("jeton mal placé: {0}")]
    JetonMalPlace(String),

    #[error("évaluateur: {0}")]
    Evaluateur(String),

    #[error("résultat non fini")]
    NonFini,
}

impl From<meval::Error> for EchecEvaluation {
    fn from(e: meval::Error) -> Self {
        EchecEvaluation::Evaluateur(e.to_string())
    }
}
