//! Noyau de calcul (sans UI)
//!
//! Organisation interne :
//! - jetons.rs  : tokenisation (texte brut des nombres conservé)
//! - rpn.rs     : shunting-yard + réduction de la RPN en f64
//! - format.rs  : affichage canonique d’un f64
//! - erreur.rs  : erreurs typées (expression malformée / format numérique)
//! - eval.rs    : pipeline complet

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;

#[cfg(test)]
mod tests_calculs;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::EvaluationError;
pub use eval::{eval_expression, eval_expression_detaillee};
