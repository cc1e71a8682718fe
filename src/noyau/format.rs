// src/noyau/format.rs

/// Affichage d’un résultat f64.
///
/// - entier exact : sans partie décimale ("14", pas "14.0")
/// - sinon : représentation la plus courte qui relit la même valeur
/// - non fini : "∞", "-∞", "NaN"
/// - très grand ou très petit : notation exposant ("1e300", "2.5e-9")
/// - "-0" est affiché "0"
pub fn format_resultat(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v.is_sign_positive() { "∞" } else { "-∞" }.to_string();
    }
    if v == 0.0 {
        return "0".to_string();
    }
    let abs = v.abs();
    if !(EXPOSANT_MIN..EXPOSANT_MAX).contains(&abs) {
        return format!("{v:e}");
    }
    format!("{v}")
}

// Au-delà, `{v}` écrit tous les chiffres (301 pour 1e300).
const EXPOSANT_MAX: f64 = 1e16;
const EXPOSANT_MIN: f64 = 1e-6;
