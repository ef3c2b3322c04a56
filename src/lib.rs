//! Calculatrice : noyau de calcul (tokenisation, shunting-yard, réduction RPN)
//! et application egui (natif + web) qui le pilote.
//!
//! Le noyau ne dépend d’aucune UI :
//!
//! ```
//! use calculatrice_rpn::noyau::eval_expression;
//!
//! assert_eq!(eval_expression("2+3*4").as_deref(), Ok("14"));
//! assert!(eval_expression("(2+3").is_err());
//! ```

pub mod app;
pub mod noyau;

pub use noyau::{eval_expression, EvaluationError};
