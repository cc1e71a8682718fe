//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueur bornée
//! - budget temps global
//! - toute erreur doit être classée : jamais d’erreur interne, jamais de panique

use std::time::{Duration, Instant};

use super::erreur::ErreurCalcul;
use super::{eval_detaillee, eval_expression};

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

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération ------------------------ */

// Alphabet accepté, pondéré vers les chiffres, + quelques intrus.
const ALPHABET: &[char] = &[
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '.', '.', '+', '-', '*', '/', '(', ')',
    '(', ')', ' ', ' ', '\t', 'a', ',', '^', 'é',
];

fn gen_chaine(rng: &mut Rng, max_len: u32) -> String {
    let n = rng.pick(max_len + 1);
    (0..n)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
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
fn fuzz_safe_jamais_interne_et_deterministe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xBADC0DE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..2000 {
        budget(t0, max);

        let expr = gen_chaine(&mut rng, 12);
        let r = eval_expression(&expr);

        // même entrée => même sortie (NaN compris)
        let r2 = eval_expression(&expr);
        match (&r, &r2) {
            (Ok(a), Ok(b)) => assert_eq!(a.to_bits(), b.to_bits(), "expr={expr:?}"),
            _ => assert_eq!(r, r2, "expr={expr:?}"),
        }

        match r {
            Ok(_) => seen_ok += 1,
            Err(e) => {
                assert!(!e.est_interne(), "erreur interne: expr={expr:?} err={e}");
                seen_err += 1;
            }
        }
    }

    assert!(seen_ok > 0, "aucun succès: fuzz trop “sauvage”");
    assert!(seen_err > 0, "aucune erreur vue");
}

#[test]
fn fuzz_safe_intrus_toujours_refuse() {
    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..300 {
        let base = gen_chaine(&mut rng, 8);
        let expr = format!("{base}a");
        // 'a' n’est jamais accepté : erreur garantie (caractère ou avant lui)
        assert!(eval_expression(&expr).is_err(), "expr={expr:?}");
    }
}

#[test]
fn fuzz_safe_detaillee_coherente() {
    let mut rng = Rng::new(0xFACADE_u64);

    for _ in 0..300 {
        let expr = gen_chaine(&mut rng, 10);
        let a = eval_expression(&expr);
        let b = eval_detaillee(&expr).map(|ev| ev.valeur);
        match (&a, &b) {
            (Ok(x), Ok(y)) => assert_eq!(x.to_bits(), y.to_bits(), "expr={expr:?}"),
            _ => assert_eq!(a, b, "expr={expr:?}"),
        }
    }
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let expr = somme_balancee("0.5", 800);
    let v = eval_expression(&expr).unwrap_or_else(|e| panic!("err: {e}"));
    budget(t0, max);

    // 800 * 0.5 = 400
    assert_eq!(v, 400.0);
}

#[test]
fn fuzz_safe_longue_chaine_plate() {
    let expr = vec!["1"; 5000].join(" + ");
    assert_eq!(eval_expression(&expr), Ok(5000.0));

    let expr = format!("{}1{}", "(".repeat(2000), ")".repeat(2000));
    assert_eq!(eval_expression(&expr), Ok(1.0));

    let expr = format!("{}1{}", "(".repeat(2000), ")".repeat(1999));
    assert_eq!(
        eval_expression(&expr),
        Err(ErreurCalcul::ParenthesesNonAppariees)
    );
}
