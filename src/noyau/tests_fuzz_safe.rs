//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : jamais de panique, toute erreur tombe dans une des deux familles
//! - oracle : sur une expression totalement parenthésée, le résultat est celui
//!   du calcul f64 direct

use std::time::{Duration, Instant};

use super::erreur::Categorie;
use super::eval_expression;
use super::format::format_nombre;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération ------------------------ */

/// Les caractères que les boutons peuvent produire (+ un intrus).
const ALPHABET: &[char] = &[
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '.', '+', '-', '*', '/', '%', '(', ')', ' ',
    'E',
];

fn gen_bruit(rng: &mut Rng, len: usize) -> String {
    (0..len)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

/// Expression totalement parenthésée + sa valeur calculée directement.
fn gen_expr(rng: &mut Rng, depth: usize) -> (String, f64) {
    if depth == 0 || rng.pick(4) == 0 {
        let n = rng.pick(50);
        return if rng.pick(3) == 0 {
            let d = rng.pick(100);
            let s = format!("{n}.{d:02}");
            let v = s.parse::<f64>().unwrap();
            (s, v)
        } else {
            (n.to_string(), n as f64)
        };
    }

    let (a, va) = gen_expr(rng, depth - 1);
    let (b, vb) = gen_expr(rng, depth - 1);
    match rng.pick(5) {
        0 => (format!("({a}+{b})"), va + vb),
        1 => (format!("({a}-{b})"), va - vb),
        2 => (format!("({a}*{b})"), va * vb),
        3 => (format!("({a}/{b})"), va / vb),
        _ => (format!("({a}%{b})"), va % vb),
    }
}

/* ------------------------ Helper somme balancée anti pile ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_bruit_jamais_de_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(1000);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_malformee = 0usize;
    let mut seen_format = 0usize;

    for _ in 0..2000 {
        budget(t0, max);

        let len = 1 + rng.pick(12) as usize;
        let expr = gen_bruit(&mut rng, len);

        let r1 = eval_expression(&expr);
        // même entrée => même sortie
        assert_eq!(r1, eval_expression(&expr), "non déterministe: {expr:?}");

        match r1 {
            Ok(_) => seen_ok += 1,
            Err(e) => match e.categorie() {
                Categorie::ExpressionMalformee => seen_malformee += 1,
                Categorie::FormatNumerique => seen_format += 1,
            },
        }
    }

    // On veut voir un mix, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 0, "aucun succès");
    assert!(seen_malformee > 0, "aucune expression malformée vue");
    assert!(seen_format > 0, "aucun nombre invalide vu");
}

#[test]
fn fuzz_safe_oracle_f64() {
    let t0 = Instant::now();
    let max = Duration::from_millis(1000);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..300 {
        budget(t0, max);

        let (expr, attendu) = gen_expr(&mut rng, 4);
        let obtenu =
            eval_expression(&expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
        assert_eq!(obtenu, format_nombre(attendu), "expr={expr:?}");
    }
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(1000);

    let expr = somme_balancee("0.5", 800);
    let res = eval_expression(&expr).unwrap_or_else(|e| panic!("err: {e}"));
    budget(t0, max);

    // 800*0.5 = 400
    assert_eq!(res, "400");
}

#[test]
fn fuzz_safe_imbrication_profonde() {
    let profondeur = 5000;
    let expr = format!("{}7{}", "(".repeat(profondeur), ")".repeat(profondeur));
    assert_eq!(eval_expression(&expr).as_deref(), Ok("7"));

    let bancale = format!("{}7{}", "(".repeat(profondeur), ")".repeat(profondeur - 1));
    assert!(eval_expression(&bancale).is_err());
}
