// src/noyau/format.rs
//
// Affichage d’un résultat numérique.
// - non fini                         -> "Error"
// - |v| >= 1e10 ou 0 < |v| < 1e-6    -> exponentielle, 6 décimales ("1.000000e+10")
// - sinon                            -> fixe, 10 chiffres significatifs, zéros finaux retirés

/// Texte sentinelle d’échec (affichage + état).
pub const ERREUR: &str = "Error";

/// Au-delà : notation exponentielle.
const SEUIL_HAUT: f64 = 1e10;

/// En deçà (hors zéro) : notation exponentielle.
const SEUIL_BAS: f64 = 1e-6;

const CHIFFRES_SIGNIFICATIFS: i32 = 10;

const DECIMALES_EXPO: usize = 6;

pub fn formater(valeur: f64) -> String {
    if !valeur.is_finite() {
        return ERREUR.to_string();
    }
    if valeur == 0.0 {
        // couvre aussi -0.0
        return "0".to_string();
    }

    // seuils testés après arrondi : 9999999999.5 s’affiche déjà 1e10
    let a = arrondi_significatif(valeur).abs();
    if a >= SEUIL_HAUT || a < SEUIL_BAS {
        formater_expo(valeur)
    } else {
        formater_fixe(valeur)
    }
}

/// Valeur arrondie à CHIFFRES_SIGNIFICATIFS chiffres.
fn arrondi_significatif(valeur: f64) -> f64 {
    let precision = (CHIFFRES_SIGNIFICATIFS - 1) as usize;
    format!("{:.*e}", precision, valeur)
        .parse()
        .unwrap_or(valeur)
}

/// Mantisse à 6 décimales, exposant signé (+/-) sans zéros de tête.
fn formater_expo(valeur: f64) -> String {
    let brut = format!("{:.*e}", DECIMALES_EXPO, valeur);
    match brut.split_once('e') {
        Some((mantisse, exposant)) if exposant.starts_with('-') => {
            format!("{mantisse}e{exposant}")
        }
        Some((mantisse, exposant)) => format!("{mantisse}e+{exposant}"),
        None => brut,
    }
}

fn formater_fixe(valeur: f64) -> String {
    // ordre de grandeur : 0 pour [1, 10), -3 pour [0.001, 0.01), ...
    let ordre = valeur.abs().log10().floor() as i32;
    let decimales = (CHIFFRES_SIGNIFICATIFS - 1 - ordre).max(0) as usize;

    let texte = format!("{:.*}", decimales, valeur);
    let texte = if texte.contains('.') {
        texte.trim_end_matches('0').trim_end_matches('.')
    } else {
        texte.as_str()
    };

    // un arrondi vers zéro peut laisser "-0"
    if texte == "-0" {
        "0".to_string()
    } else {
        texte.to_string()
    }
}
