//! Tests de propriétés : invariants des fractions + robustesse du classement.
//!
//! - RNG déterministe (seed fixe)
//! - budget temps global (anti-gel)
//! - invariant clé : toute ligne donne "Result: ..." ou "Error: ...", jamais de panique

use std::cmp::Ordering;
use std::time::{Duration, Instant};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use super::decimal::Decimal;
use super::erreur::ErreurCalcul;
use super::fraction::Fraction;
use super::eval::repondre;

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
    /// Entier dans [-max, max].
    fn entier(&mut self, max: u32) -> i64 {
        i64::from(self.pick(2 * max + 1)) - i64::from(max)
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Générateurs ------------------------ */

fn gen_fraction(rng: &mut Rng) -> Fraction {
    let n = rng.entier(1000);
    let mut d = rng.entier(1000);
    if d == 0 {
        d = 1;
    }
    Fraction::new(BigInt::from(n), BigInt::from(d))
        .unwrap_or_else(|e| panic!("fraction {n}/{d}: {e}"))
}

fn assert_reduite(f: &Fraction) {
    assert!(f.denom().is_positive(), "dénominateur non positif: {f}");
    assert!(
        f.numer().gcd(f.denom()).is_one(),
        "fraction non réduite: {f}"
    );
}

const JETONS: [&str; 22] = [
    "1", "0", "-3", "2.5", "1/2", "0/1", "7/0", "!", "+", "-", "*", "/", "%", "^", "log",
    "base", "to", "16", "ff", "x", "1e3", ".",
];

fn gen_ligne(rng: &mut Rng) -> String {
    let n = 1 + rng.pick(5) as usize;
    (0..n)
        .map(|_| JETONS[rng.pick(JETONS.len() as u32) as usize])
        .collect::<Vec<_>>()
        .join(" ")
}

/* ------------------------ Fractions ------------------------ */

#[test]
fn prop_fraction_aller_retour() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);
    let mut rng = Rng::new(0xF4AC_u64);

    for _ in 0..500 {
        budget(t0, max);

        let f = gen_fraction(&mut rng);
        assert_reduite(&f);

        // "n" seul n’est pas une forme "a/b" : on ne relit que les vraies fractions
        if f.denom().is_one() {
            continue;
        }
        let texte = f.to_string();
        let relue: Fraction = texte
            .parse()
            .unwrap_or_else(|e| panic!("relecture de {texte:?}: {e}"));
        assert_eq!(relue.to_string(), texte);
    }
}

#[test]
fn prop_operations_restent_reduites() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);
    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..500 {
        budget(t0, max);

        let a = gen_fraction(&mut rng);
        let b = gen_fraction(&mut rng);

        let somme = a.ajouter(&b);
        assert_reduite(&somme);
        let produit_denoms = a.denom() * b.denom();
        assert!(
            (&produit_denoms % somme.denom()).is_zero(),
            "{a} + {b} = {somme} : dénominateur ne divise pas {produit_denoms}"
        );

        assert_reduite(&a.soustraire(&b));
        assert_reduite(&a.multiplier(&b));

        match a.diviser(&b) {
            Ok(q) => {
                assert!(!b.numer().is_zero());
                assert_reduite(&q);
                // (a / b) * b = a
                assert_eq!(q.multiplier(&b), a);
            }
            Err(e) => {
                assert!(b.numer().is_zero(), "{a} / {b}: {e}");
                assert!(matches!(e, ErreurCalcul::DivisionParZero(_)));
            }
        }
    }
}

#[test]
fn prop_division_par_zero_fraction() {
    let mut rng = Rng::new(0x0_u64);

    for _ in 0..100 {
        let a = gen_fraction(&mut rng);
        let mut k = rng.entier(50);
        if k == 0 {
            k = -1;
        }
        let zero = Fraction::new(BigInt::zero(), BigInt::from(k))
            .unwrap_or_else(|e| panic!("0/{k}: {e}"));

        let e = a.diviser(&zero).unwrap_err();
        assert!(matches!(e, ErreurCalcul::DivisionParZero(_)), "{a} / 0/{k}");
    }
}

/* ------------------------ Décimaux ------------------------ */

#[test]
fn prop_decimal_addition_reversible() {
    let mut rng = Rng::new(0xDEC_u64);

    for _ in 0..300 {
        let a = Decimal::new(BigInt::from(rng.entier(100_000)), rng.entier(6));
        let b = Decimal::new(BigInt::from(rng.entier(100_000)), rng.entier(6));

        let retour = a.ajouter(&b).soustraire(&b);
        assert_eq!(retour.comparer(&a), Ordering::Equal, "({a} + {b}) - {b}");

        if let Some(q) = a.diviser(&b, 2) {
            assert_eq!(q.echelle(), 2, "{a} / {b} = {q}");
        } else {
            assert!(b.is_zero());
        }
    }
}

#[test]
fn exposants_geants_sans_depliage() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let cas = [
        ("1e20000000 * 0", "Result: 0E+20000000"),
        ("-2.5e999999999 * 4", "Result: -1.00E+1000000000"),
        ("1e2000000000 * 1e-2000000000", "Result: 1"),
        ("2 ^ 1e20000000", "Error: Exponent too large."),
        ("log 1e20000000 1e40000000", "Error: Logarithm argument is out of floating-point range."),
    ];
    for (ligne, attendu) in cas {
        assert_eq!(repondre(ligne), attendu, "ligne={ligne:?}");
        budget(t0, max);
    }
}

/* ------------------------ Lignes aléatoires ------------------------ */

#[test]
fn prop_lignes_jamais_de_panique() {
    let t0 = Instant::now();
    let max = Duration::from_secs(3);
    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut vu_ok = 0usize;
    let mut vu_err = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let ligne = gen_ligne(&mut rng);
        let sortie = repondre(&ligne);

        // déterminisme
        assert_eq!(sortie, repondre(&ligne), "ligne={ligne:?}");

        if sortie.starts_with("Result: ") {
            vu_ok += 1;
        } else {
            assert!(
                sortie.starts_with("Error: "),
                "sortie inattendue: ligne={ligne:?} sortie={sortie:?}"
            );
            vu_err += 1;
        }
    }

    // un mix des deux, sinon le balayage ne couvre rien
    assert!(vu_ok > 0, "aucun succès");
    assert!(vu_err > 0, "aucune erreur");
}
