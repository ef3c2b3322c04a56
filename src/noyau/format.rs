// src/noyau/format.rs
//
// Affichage d’un f64 sous forme décimale canonique.
// - chiffres : plus courte écriture qui relit la même valeur (Display de f64)
// - valeurs spéciales écrites comme dans un navigateur : Infinity, -Infinity, NaN
// - -0 s’affiche 0
// - notation exponentielle hors de [1e-6, 1e21) : 1e+21, 1.5e-7

const SEUIL_EXP_HAUT: f64 = 1e21;
const SEUIL_EXP_BAS: f64 = 1e-6;

pub fn format_nombre(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if x == 0.0 {
        return "0".to_string();
    }

    let abs = x.abs();
    if abs >= SEUIL_EXP_HAUT || abs < SEUIL_EXP_BAS {
        format_exposant(x)
    } else {
        format!("{x}")
    }
}

/// "1e21" -> "1e+21" ; "1.5e-7" reste tel quel.
fn format_exposant(x: f64) -> String {
    let brut = format!("{x:e}");
    match brut.split_once('e') {
        Some((mantisse, exp)) if !exp.starts_with('-') => format!("{mantisse}e+{exp}"),
        _ => brut,
    }
}
