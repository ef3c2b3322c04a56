// src/noyau/erreur.rs
//
// Erreurs du noyau.
// Deux familles seulement :
// - expression malformée (structure : parenthèses, opérandes, pile finale)
// - format numérique (le texte d’un nombre ne se lit pas en f64)
//
// Les cas numériques (division par zéro, dépassement) ne sont PAS des erreurs :
// ils sortent en inf / NaN.

use std::num::ParseFloatError;

use thiserror::Error;

/// Famille d’une erreur d’évaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Categorie {
    ExpressionMalformee,
    FormatNumerique,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvaluationError {
    #[error("expression vide")]
    ExpressionVide,

    #[error("parenthèses déséquilibrées")]
    ParenthesesDesequilibrees,

    #[error("opérande manquant pour '{operateur}'")]
    OperandeManquant { operateur: char },

    #[error("expression invalide : {restantes} valeurs restent sur la pile")]
    ValeursEnTrop { restantes: usize },

    #[error("nombre invalide : {texte:?}")]
    NombreInvalide {
        texte: String,
        #[source]
        source: ParseFloatError,
    },
}

impl EvaluationError {
    pub fn categorie(&self) -> Categorie {
        match self {
            Self::NombreInvalide { .. } => Categorie::FormatNumerique,
            Self::ExpressionVide
            | Self::ParenthesesDesequilibrees
            | Self::OperandeManquant { .. }
            | Self::ValeursEnTrop { .. } => Categorie::ExpressionMalformee,
        }
    }
}
