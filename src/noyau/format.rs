// src/noyau/format.rs
//
// Forme texte des nombres (celle qui retourne dans le tampon) + arrondi d’affichage.

/// Texte d’un nombre, règles du navigateur :
/// - chiffres les plus courts qui relisent la même valeur
/// - `-0` s’écrit `0`
/// - notation exponentielle si |x| ≥ 1e21 (`1e+21`) ou 0 < |x| < 1e-6 (`1e-7`)
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

    let a = x.abs();
    if !(1e-6..1e21).contains(&a) {
        return format_exposant(x);
    }

    format!("{x}")
}

/// "1.5e21" -> "1.5e+21" ; "5e-7" inchangé.
fn format_exposant(x: f64) -> String {
    let s = format!("{x:e}");
    match s.split_once('e') {
        Some((mantisse, exp)) if !exp.starts_with('-') => format!("{mantisse}e+{exp}"),
        _ => s,
    }
}

/// Arrondi à `decimales` chiffres après la virgule, demi-valeur loin de zéro.
///
/// Si la mise à l’échelle déborde, la valeur est rendue telle quelle
/// (jamais d’infini créé par l’arrondi).
pub fn arrondir(x: f64, decimales: u32) -> f64 {
    let echelle = 10f64.powi(decimales as i32);
    let s = x * echelle;
    if !s.is_finite() {
        return x;
    }
    let r = s.round() / echelle;
    // -0.0000000000001 arrondi donne -0 : on le normalise
    if r == 0.0 {
        0.0
    } else {
        r
    }
}
