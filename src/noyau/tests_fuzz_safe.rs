//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le moteur avec des séquences de touches sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueur de séquence bornée
//! - budget temps global
//! - invariants vérifiés après CHAQUE opération

use std::time::{Duration, Instant};

use super::eval::eval_expression;
use super::format::format_nombre;
use super::jetons::est_operateur;
use super::moteur::{Ecran, Etat, MoteurExpression, TEXTE_ERREUR, TEXTE_VIDE};

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

/* ------------------------ Écran espion ------------------------ */

#[derive(Default)]
struct Espion {
    dernier: String,
    appels: usize,
}

impl Ecran for Espion {
    fn afficher(&mut self, texte: &str) {
        self.dernier = texte.to_string();
        self.appels += 1;
    }
}

/* ------------------------ Invariants ------------------------ */

/// Nombre en cours : suite finale de chiffres et de points.
fn nombre_en_cours(tampon: &str) -> &str {
    let garde = tampon.trim_end_matches(|c: char| c.is_ascii_digit() || c == '.');
    &tampon[garde.len()..]
}

fn check_invariants(m: &MoteurExpression<Espion>, ctx: &str) {
    let t = m.tampon();

    // jamais deux opérateurs en fin de tampon
    let mut fin = t.chars().rev();
    if let (Some(a), Some(b)) = (fin.next(), fin.next()) {
        assert!(
            !(est_operateur(a) && est_operateur(b)),
            "deux opérateurs finaux: {t:?} ({ctx})"
        );
    }

    // au plus un point par nombre
    let n = nombre_en_cours(t);
    assert!(
        n.matches('.').count() <= 1,
        "deux points dans {n:?} ({ctx})"
    );

    // l’écran montre le tampon, "0", ou "Error" pendant le flash
    let ecran = m.ecran().dernier.as_str();
    match m.etat() {
        Etat::FlashErreur => {
            assert_eq!(ecran, TEXTE_ERREUR, "({ctx})");
            assert!(t.is_empty(), "tampon non vide en flash ({ctx})");
        }
        Etat::Edition if t.is_empty() => assert_eq!(ecran, TEXTE_VIDE, "({ctx})"),
        Etat::Edition => assert_eq!(ecran, t, "({ctx})"),
    }
}

const TOUCHES: &[char] = &[
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '.', '+', '-', '*', '/', '(', ')',
];

#[test]
fn fuzz_sequences_de_touches() {
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(0xC0FFEE);

    for essai in 0..400 {
        budget(start, max);
        let mut m = MoteurExpression::new(Espion::default());

        for pas in 0..60 {
            let ctx = format!("essai={essai} pas={pas} tampon={:?}", m.tampon());
            match rng.pick(20) {
                0 => m.effacer(),
                1 => m.supprimer_dernier(),
                2 => m.appliquer_pourcentage(),
                3 => {
                    let avant = m.tampon().trim_end_matches(est_operateur).to_string();
                    m.calculer_resultat();
                    check_resultat(&avant, &m, &ctx);
                }
                4 => m.avancer(f64::from(rng.pick(1200))),
                _ => {
                    let c = TOUCHES[rng.pick(TOUCHES.len() as u32) as usize];
                    m.ajouter_caractere(c);
                }
            }
            check_invariants(&m, &ctx);
        }
    }
}

/// Le résultat affiché est celui de l’évaluateur, ou bien un flash d’erreur.
fn check_resultat(avant: &str, m: &MoteurExpression<Espion>, ctx: &str) {
    if avant.is_empty() {
        assert!(m.tampon().is_empty(), "({ctx})");
        return;
    }
    match eval_expression(avant, 10) {
        Ok(v) => {
            assert!(v.is_finite(), "({ctx})");
            assert_eq!(m.tampon(), format_nombre(v), "({ctx})");
            assert_eq!(m.etat(), Etat::Edition, "({ctx})");
        }
        Err(_) => {
            assert_eq!(m.etat(), Etat::FlashErreur, "({ctx})");
            assert!(m.tampon().is_empty(), "({ctx})");
        }
    }
}

#[test]
fn fuzz_deterministe() {
    // même seed => même suite d’affichages
    fn rejouer(seed: u64) -> (String, usize) {
        let mut rng = Rng::new(seed);
        let mut m = MoteurExpression::new(Espion::default());
        for _ in 0..500 {
            match rng.pick(10) {
                0 => m.calculer_resultat(),
                1 => m.avancer(300.0),
                _ => m.ajouter_caractere(TOUCHES[rng.pick(TOUCHES.len() as u32) as usize]),
            }
        }
        (m.ecran().dernier.clone(), m.ecran().appels)
    }
    assert_eq!(rejouer(42), rejouer(42));
}

#[test]
fn flash_toujours_suivi_du_retour() {
    let start = Instant::now();
    let max = Duration::from_secs(2);
    let mut m = MoteurExpression::new(Espion::default());

    for expr in ["1/0", "0/0", "(1", "1)", "()", "2(3)", "(1+2)(3)", ")("] {
        budget(start, max);
        for c in expr.chars() {
            m.ajouter_caractere(c);
        }
        m.calculer_resultat();
        assert_eq!(m.etat(), Etat::FlashErreur, "expr={expr:?}");
        m.avancer(900.0);
        assert_eq!(m.etat(), Etat::Edition, "expr={expr:?}");
        assert_eq!(m.ecran().dernier, TEXTE_VIDE, "expr={expr:?}");
    }
}
