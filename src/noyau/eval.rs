//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN (shunting-yard) -> réduction f64 -> affichage canonique
//!
//! Fonction pure : aucun état entre deux appels, la même entrée donne toujours
//! la même sortie.

use super::erreur::EvaluationError;
use super::format::format_nombre;
use super::jetons::{format_tokens, tokenize};
use super::rpn::{eval_rpn, to_rpn};

#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

/// Résultat complet : valeur affichable + démarche (jetons, RPN).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Evaluation {
    pub texte: String,
    pub demarche: Demarche,
}

/// API publique : évalue une expression et retourne sa forme décimale canonique.
pub fn eval_expression(expr_str: &str) -> Result<String, EvaluationError> {
    eval_expression_detaillee(expr_str).map(|e| e.texte)
}

/// Comme `eval_expression`, avec la démarche pour le panneau d’explication.
pub fn eval_expression_detaillee(expr_str: &str) -> Result<Evaluation, EvaluationError> {
    // 1) Jetons
    let jetons = tokenize(expr_str);
    let jetons_txt = format_tokens(&jetons, " ");
    log::debug!("jetons: [{jetons_txt}]");

    // 2) RPN
    let rpn = to_rpn(&jetons)?;
    let rpn_txt = format_tokens(&rpn, " ");
    log::debug!("rpn: [{rpn_txt}]");

    // 3) Réduction
    let valeur = eval_rpn(&rpn)?;

    Ok(Evaluation {
        texte: format_nombre(valeur),
        demarche: Demarche {
            jetons: jetons_txt,
            rpn: rpn_txt,
        },
    })
}
