//! Tests “béton” sur le pipeline complet : précédence, associativité,
//! parenthèses, cas IEEE, erreurs.

use pretty_assertions::assert_eq;

use super::erreur::{Categorie, EvaluationError};
use super::eval_expression;

fn ok(s: &str) -> String {
    eval_expression(s).unwrap_or_else(|e| panic!("eval_expression({s:?}) erreur: {e}"))
}

fn err(s: &str) -> EvaluationError {
    match eval_expression(s) {
        Ok(v) => panic!("eval_expression({s:?}) aurait dû échouer, obtenu {v:?}"),
        Err(e) => e,
    }
}

#[test]
fn precedence() {
    assert_eq!(ok("2+3*4"), "14");
    assert_eq!(ok("2*3+4"), "10");
    assert_eq!(ok("1+6/3-2"), "1");
}

#[test]
fn associativite_gauche() {
    assert_eq!(ok("10-2-3"), "5");
    assert_eq!(ok("100/10/5"), "2");
    assert_eq!(ok("20%7%4"), "2");
}

#[test]
fn parentheses_prioritaires() {
    assert_eq!(ok("(2+3)*4"), "20");
    assert_eq!(ok("10-(2-3)"), "11");
    assert_eq!(ok("((1+1))*((2))"), "4");
}

#[test]
fn modulo_et_division() {
    assert_eq!(ok("10%3"), "1");
    assert_eq!(ok("7/2"), "3.5");
    assert_eq!(ok("1/4"), "0.25");
}

#[test]
fn division_par_zero_sans_erreur() {
    assert_eq!(ok("5/0"), "Infinity");
    assert_eq!(ok("-5/0"), "-Infinity");
    assert_eq!(ok("5%0"), "NaN");
}

#[test]
fn signe_bascule() {
    assert_eq!(ok("-5+3"), "-2");
    assert_eq!(ok("-(2+3)*4"), "-20");
}

#[test]
fn decimaux() {
    assert_eq!(ok("0.1+0.2"), "0.30000000000000004");
    assert_eq!(ok("2.5*4"), "10");
}

#[test]
fn espaces_ignores() {
    assert_eq!(ok(" 2 + 3 * 4 "), "14");
}

#[test]
fn entrees_malformees() {
    for s in ["", "+", "(2+3", "2+3)", "*5", "5-", "()", "1 2", "Error"] {
        let e = err(s);
        assert_eq!(e.categorie(), Categorie::ExpressionMalformee, "entrée {s:?}");
    }
}

#[test]
fn format_numerique() {
    for s in ["1.2.3", "1..2+3", "."] {
        let e = err(s);
        assert_eq!(e.categorie(), Categorie::FormatNumerique, "entrée {s:?}");
    }
}

#[test]
fn idempotence() {
    for s in ["2+3*4", "7/2", "5/0", "(2+3", "1.2.3", "-5+3"] {
        assert_eq!(eval_expression(s), eval_expression(s), "entrée {s:?}");
    }
}
