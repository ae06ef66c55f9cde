//! Tests scientifiques (campagne) : propriétés observables du noyau.
//!
//! - arithmétique infixe : comparée à un calcul Rust direct
//! - seuils fixe / exponentiel
//! - règles d’édition (point, collision d’opérateurs, C, "=" sur erreur)

use super::editeur::EtatCalc;
use super::eval::{evaluer, evaluer_valeur};
use super::format::{formater, ERREUR};
use super::touches::{Operateur, Touche};

fn taper(texte: &str) -> EtatCalc {
    texte.chars().fold(EtatCalc::default(), |e, c| {
        let t = Touche::depuis_caractere(c).unwrap_or_else(|| panic!("touche {c:?}"));
        e.appliquer(t)
    })
}

fn assert_valeur(expr: &str, attendu: f64) {
    let v = evaluer_valeur(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
    assert!(
        (v - attendu).abs() <= 1e-9 * attendu.abs().max(1.0),
        "expr={expr:?} v={v} attendu={attendu}"
    );
}

/* ------------------------ Arithmétique infixe ------------------------ */

#[test]
fn sci_infixe_priorites() {
    assert_eq!(evaluer("2+3×4"), "14");
    assert_valeur("2+3×4", 2.0 + 3.0 * 4.0);
    assert_valeur("(2+3)×4", (2.0 + 3.0) * 4.0);
    assert_valeur("8÷2÷2", 8.0 / 2.0 / 2.0);
    assert_valeur("8−2−3", 8.0 - 2.0 - 3.0);
    assert_valeur("1+2×(3−4)÷5", 1.0 + 2.0 * (3.0 - 4.0) / 5.0);
    assert_valeur("((1+2)×(3+4))÷7", ((1.0 + 2.0) * (3.0 + 4.0)) / 7.0);
}

#[test]
fn sci_infixe_depuis_le_clavier() {
    // même chemin que l’utilisateur : caractères -> touches -> éditeur
    let cas: [(&str, f64); 4] = [
        ("12*(3+4)", 12.0 * (3.0 + 4.0)),
        ("100/8-2.5", 100.0 / 8.0 - 2.5),
        ("(1.5+2.5)*(2-0.5)", (1.5 + 2.5) * (2.0 - 0.5)),
        ("9/3*3", 9.0 / 3.0 * 3.0),
    ];
    for (texte, attendu) in cas {
        let e = taper(texte);
        assert!(!e.erreur, "texte={texte:?} expr={:?}", e.expression);
        assert_eq!(e.resultat, formater(attendu), "texte={texte:?}");
    }
}

/* ------------------------ Seuils d’affichage ------------------------ */

#[test]
fn sci_seuils_fixe_exponentiel() {
    assert!(!formater(9_999_999_999.0).contains('e'));
    assert!(formater(10_000_000_000.0).contains('e'));
    assert!(formater(0.000_000_1).contains('e'));
    assert!(!formater(0.001).contains('e'));
    assert!(formater(-10_000_000_000.0).starts_with("-1.000000e+"));
}

/* ------------------------ Règles d’édition ------------------------ */

#[test]
fn sci_point_unique_par_segment() {
    let e = taper("3.");
    assert_eq!(e.expression, "3.");
    assert_eq!(e.clone().appliquer(Touche::Point).expression, "3.");

    // nouveau segment après un opérateur : point accepté
    assert_eq!(taper("3.5+1.").expression, "3.5+1.");
}

#[test]
fn sci_collision_operateurs() {
    let e = taper("5+").appliquer(Touche::Operateur(Operateur::Fois));
    assert_eq!(e.expression, "5×");
}

#[test]
fn sci_tout_effacer() {
    let e = taper("6*7")
        .appliquer(Touche::MemoirePlus)
        .appliquer(Touche::ToutEffacer);
    assert_eq!(e.expression, "");
    assert_eq!(e.resultat, "0");
    assert!(!e.erreur);
    assert_eq!(e.memoire, 42.0);
}

#[test]
fn sci_division_par_zero() {
    let e = taper("5/0");
    assert_eq!(e.expression, "5÷0");
    assert_eq!(e.resultat, ERREUR);
    assert!(e.erreur);

    let e = e.appliquer(Touche::Egal);
    assert_eq!(e.expression, "5÷0");

    // l’expression reste éditable
    let e = e.appliquer(Touche::Effacer).appliquer(Touche::Chiffre(2));
    assert_eq!(e.expression, "5÷2");
    assert_eq!(e.resultat, "2.5");
    assert!(!e.erreur);
}
