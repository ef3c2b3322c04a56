// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis réduire la RPN sur une pile de f64
//
// Règles:
// - Les cinq opérateurs binaires sont associatifs à gauche : à précédence égale,
//   le plus ancien sort d’abord ("10-2-3" => "10 2 - 3 -").
// - Moins unaire:
//    - si '-' arrive quand on n’attend PAS une valeur, il devient Tok::Neg
//      (précédence 3, à droite) : "-5+3" => "5 neg 3 +", "2*-3" => "2 3 neg *"
// - Parenthèses déséquilibrées : erreur explicite, dans les deux sens.

use super::erreur::EvaluationError;
use super::jetons::{Associativite, Operateur, Tok};

const PRECEDENCE_NEG: u8 = 3;

/// Précédence d’un élément de la pile d’opérateurs (None pour '(').
fn precedence_pile(t: &Tok) -> Option<u8> {
    match t {
        Tok::Op(op) => Some(op.precedence()),
        Tok::Neg => Some(PRECEDENCE_NEG),
        _ => None,
    }
}

/// Dépile vers la sortie tant que le sommet doit passer avant l’opérateur entrant.
fn depile_selon(ops: &mut Vec<Tok>, out: &mut Vec<Tok>, prec: u8, assoc: Associativite) {
    while let Some(p_top) = ops.last().and_then(precedence_pile) {
        let doit_pop = match assoc {
            Associativite::Gauche => p_top >= prec,
            Associativite::Droite => p_top > prec,
        };
        if !doit_pop {
            break;
        }
        if let Some(top) = ops.pop() {
            out.push(top);
        }
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num("2"), Op(+), Num("3"), Op(*), Num("4")]
///   rpn:    [Num("2"), Num("3"), Num("4"), Op(*), Op(+)]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, EvaluationError> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    // “valeur” = un nombre ou une parenthèse fermée.
    // Sert à détecter le moins unaire.
    let mut prev_was_value = false;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => {
                out.push(tok);
                prev_was_value = true;
            }

            Tok::Op(Operateur::Moins) if !prev_was_value => {
                depile_selon(&mut ops, &mut out, PRECEDENCE_NEG, Associativite::Droite);
                ops.push(Tok::Neg);
            }

            Tok::Op(op) => {
                depile_selon(&mut ops, &mut out, op.precedence(), op.associativite());
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::LPar => {
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::RPar => {
                // dépile jusqu’à '(' ; pile vide avant => ')' orpheline
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(top) => out.push(top),
                        None => return Err(EvaluationError::ParenthesesDesequilibrees),
                    }
                }
                prev_was_value = true;
            }

            // Neg n’existe pas en entrée infixe (tokenize ne le produit jamais),
            // on le traite comme un moins préfixe.
            Tok::Neg => {
                ops.push(Tok::Neg);
                prev_was_value = false;
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(EvaluationError::ParenthesesDesequilibrees);
        }
        out.push(op);
    }

    Ok(out)
}

/// Lit le texte d’un nombre en f64 (échec => erreur de format numérique).
fn lit_nombre(texte: &str) -> Result<f64, EvaluationError> {
    texte
        .parse::<f64>()
        .map_err(|source| EvaluationError::NombreInvalide {
            texte: texte.to_string(),
            source,
        })
}

/// Réduit une RPN en une valeur.
///
/// - Num  : lu en f64 puis empilé
/// - Op   : b = pop, a = pop, push(a OP b)
/// - Neg  : x = pop, push(-x)
/// À la fin, la pile doit contenir exactement une valeur.
pub fn eval_rpn(rpn: &[Tok]) -> Result<f64, EvaluationError> {
    let mut st: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match tok {
            Tok::Num(texte) => st.push(lit_nombre(texte)?),

            Tok::Op(op) => {
                let manque = || EvaluationError::OperandeManquant {
                    operateur: op.symbole(),
                };
                let b = st.pop().ok_or_else(manque)?;
                let a = st.pop().ok_or_else(manque)?;
                st.push(op.applique(a, b));
            }

            Tok::Neg => {
                let x = st
                    .pop()
                    .ok_or(EvaluationError::OperandeManquant { operateur: '-' })?;
                st.push(-x);
            }

            Tok::LPar | Tok::RPar => return Err(EvaluationError::ParenthesesDesequilibrees),
        }
    }

    match st.as_slice() {
        [v] => Ok(*v),
        [] => Err(EvaluationError::ExpressionVide),
        reste => Err(EvaluationError::ValeursEnTrop {
            restantes: reste.len(),
        }),
    }
}
