//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler l’éditeur avec des suites de touches aléatoires.
//! - RNG déterministe (seed fixe)
//! - longueur de séquence bornée
//! - budget temps global
//! - invariants vérifiés après CHAQUE touche :
//!   erreur <=> resultat == "Error", resultat == evaluer(expression), mémoire finie

use std::time::{Duration, Instant};

use super::editeur::EtatCalc;
use super::eval::evaluer;
use super::format::ERREUR;
use super::touches::{Constante, Fonction, Operateur, Touche};

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

/* ------------------------ Génération de touches ------------------------ */

fn gen_touche(rng: &mut Rng) -> Touche {
    // chiffres plus fréquents : expressions plus souvent valides
    match rng.pick(20) {
        0..=7 => Touche::Chiffre(rng.pick(10) as u8),
        8 => Touche::Point,
        9 | 10 => Touche::Operateur(Operateur::TOUS[rng.pick(5) as usize]),
        11 => Touche::Fonction(Fonction::TOUTES[rng.pick(6) as usize]),
        12 => Touche::Constante(if rng.pick(2) == 0 {
            Constante::Pi
        } else {
            Constante::E
        }),
        13 => Touche::Carre,
        14 => Touche::ParOuvrante,
        15 => Touche::ParFermante,
        16 => Touche::Egal,
        17 => Touche::Effacer,
        18 => match rng.pick(4) {
            0 => Touche::MemoirePlus,
            1 => Touche::MemoireMoins,
            2 => Touche::MemoireRappel,
            _ => Touche::MemoireEfface,
        },
        _ => Touche::ToutEffacer,
    }
}

fn check_invariants(e: &EtatCalc, trace: &[Touche]) {
    assert_eq!(
        e.erreur,
        e.resultat == ERREUR,
        "erreur <=> \"Error\" violé, trace={trace:?}"
    );
    assert_eq!(
        e.resultat,
        evaluer(&e.expression),
        "resultat périmé pour {:?}, trace={trace:?}",
        e.expression
    );
    assert!(e.memoire.is_finite(), "mémoire non finie, trace={trace:?}");
    if e.expression.is_empty() {
        assert_eq!(e.resultat, "0");
    }
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn fuzz_invariants_etat() {
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(0xC0FFEE);

    for _ in 0..300 {
        budget(start, max);

        let mut e = EtatCalc::default();
        let mut trace = Vec::new();
        let n = 1 + rng.pick(40);

        for _ in 0..n {
            let t = gen_touche(&mut rng);
            trace.push(t);
            e = e.appliquer(t);
            check_invariants(&e, &trace);
        }
    }
}

#[test]
fn fuzz_egal_sur_erreur_sans_effet() {
    let mut rng = Rng::new(42);

    for _ in 0..300 {
        let mut e = EtatCalc::default();
        for _ in 0..(1 + rng.pick(25)) {
            e = e.appliquer(gen_touche(&mut rng));
        }
        if e.erreur {
            let avant = e.clone();
            assert_eq!(e.appliquer(Touche::Egal), avant);
        }
    }
}

#[test]
fn fuzz_tout_effacer_preserve_memoire() {
    let mut rng = Rng::new(7);

    for _ in 0..300 {
        let mut e = EtatCalc::default();
        for _ in 0..(1 + rng.pick(25)) {
            e = e.appliquer(gen_touche(&mut rng));
        }
        let memoire = e.memoire;
        let e = e.appliquer(Touche::ToutEffacer);
        assert_eq!(e.expression, "");
        assert_eq!(e.resultat, "0");
        assert!(!e.erreur);
        assert_eq!(e.memoire, memoire);
    }
}

#[test]
fn fuzz_deterministe() {
    let jouer = |seed: u64| {
        let mut rng = Rng::new(seed);
        (0..60).fold(EtatCalc::default(), |e, _| e.appliquer(gen_touche(&mut rng)))
    };
    assert_eq!(jouer(123), jouer(123));
}
