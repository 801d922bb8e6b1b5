//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler conversion + évaluation sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : pour une expression totalement parenthésée,
//!   évaluer(postfixe) == évaluer(préfixe) == valeur calculée directement

use std::time::{Duration, Instant};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

use super::conversion::{convertir, infix_to_postfix, infix_to_prefix};
use super::erreur::ErreurNotation;
use super::eval::{eval_postfix, eval_postfix_exact, eval_prefix, eval_prefix_exact};
use super::jetons::{classer, Symbole};
use super::operandes::ValeursOperandes;
use super::reglages::{Reglages, Sens};

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

/* ------------------------ Génération (texte + valeur directe) ------------------------ */

/// Expression infixe + sa valeur calculée sans passer par les notations.
/// None = division par zéro quelque part (l’évaluateur doit le signaler).
struct Genere {
    texte: String,
    exact: Option<BigRational>,
    entier: Option<BigInt>,
}

fn gen_atome(rng: &mut Rng) -> Genere {
    let d = rng.pick(10);
    Genere {
        texte: d.to_string(),
        exact: Some(BigRational::from_integer(BigInt::from(d))),
        entier: Some(BigInt::from(d)),
    }
}

fn gen_puissance(rng: &mut Rng) -> Genere {
    // base chiffre, exposant 0..=3 : reste petit
    let b = rng.pick(10);
    let e = rng.pick(4);
    let v = BigInt::from(b).pow(e);
    Genere {
        texte: format!("({b}^{e})"),
        exact: Some(BigRational::from_integer(v.clone())),
        entier: Some(v),
    }
}

fn combiner(op: char, a: Genere, b: Genere) -> Genere {
    let texte = format!("({}{op}{})", a.texte, b.texte);

    let exact = match (a.exact, b.exact) {
        (Some(x), Some(y)) => match op {
            '+' => Some(x + y),
            '-' => Some(x - y),
            '*' => Some(x * y),
            _ => (!y.is_zero()).then(|| x / y),
        },
        _ => None,
    };

    let entier = match (a.entier, b.entier) {
        (Some(x), Some(y)) => match op {
            '+' => Some(x + y),
            '-' => Some(x - y),
            '*' => Some(x * y),
            // BigInt : division tronquée vers zéro
            _ => (!y.is_zero()).then(|| x / y),
        },
        _ => None,
    };

    Genere {
        texte,
        exact,
        entier,
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> Genere {
    if depth == 0 {
        return gen_atome(rng);
    }

    match rng.pick(7) {
        0 => gen_atome(rng),
        1 => gen_puissance(rng),
        k => {
            let op = ['+', '-', '*', '/', '+'][(k - 2) as usize];
            let a = gen_expr(rng, depth - 1);
            let b = gen_expr(rng, depth - 1);
            combiner(op, a, b)
        }
    }
}

fn operandes(s: &str) -> String {
    s.chars()
        .filter(|&c| matches!(classer(c), Symbole::Operande(_)))
        .collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_postfixe_prefixe_valeur_directe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_div0 = 0usize;

    for _ in 0..150 {
        budget(t0, max);

        let g = gen_expr(&mut rng, 4);

        let post = infix_to_postfix(&g.texte).unwrap_or_else(|e| panic!("{:?}: {e}", g.texte));
        let pre = infix_to_prefix(&g.texte).unwrap_or_else(|e| panic!("{:?}: {e}", g.texte));
        assert!(post.est_fiable(), "{:?} => {:?}", g.texte, post.avertissements);
        assert!(pre.est_fiable(), "{:?} => {:?}", g.texte, pre.avertissements);

        let chiffres = ValeursOperandes::default();

        let ex_post = eval_postfix_exact(&post.sortie, &mut chiffres.clone());
        let ex_pre = eval_prefix_exact(&pre.sortie, &mut chiffres.clone());
        let en_post = eval_postfix(&post.sortie, &mut chiffres.clone());
        let en_pre = eval_prefix(&pre.sortie, &mut chiffres.clone());

        match g.exact {
            Some(v) => {
                assert_eq!(ex_post, Ok(v.clone()), "postfixe {:?}", post.sortie);
                assert_eq!(ex_pre, Ok(v), "préfixe {:?}", pre.sortie);
                seen_ok += 1;
            }
            None => {
                assert_eq!(ex_post, Err(ErreurNotation::DivisionParZero), "{:?}", g.texte);
                assert_eq!(ex_pre, Err(ErreurNotation::DivisionParZero), "{:?}", g.texte);
                seen_div0 += 1;
            }
        }

        match g.entier {
            Some(v) => {
                assert_eq!(en_post, Ok(v.clone()), "postfixe {:?}", post.sortie);
                assert_eq!(en_pre, Ok(v), "préfixe {:?}", pre.sortie);
            }
            None => {
                assert_eq!(en_post, Err(ErreurNotation::DivisionParZero));
                assert_eq!(en_pre, Err(ErreurNotation::DivisionParZero));
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 30, "trop peu de succès: {seen_ok}");
    assert!(seen_div0 > 0, "aucune division par zéro vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_entrees_quelconques_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    const ALPHABET: [char; 14] = [
        'a', 'b', 'x', '7', '+', '-', '*', '/', '^', '(', ')', ' ', '%', 'é',
    ];

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..300 {
        budget(t0, max);

        let n = rng.pick(24) as usize;
        let expr: String = (0..n)
            .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
            .collect();

        for sens in [Sens::Postfixe, Sens::Prefixe] {
            let conv = convertir(&expr, sens, &Reglages::default())
                .unwrap_or_else(|e| panic!("{expr:?} {sens:?}: {e}"));

            // les opérandes gardent leur ordre, dans les deux notations
            assert_eq!(operandes(&conv.sortie), operandes(&expr), "{expr:?} {sens:?}");

            // rien d’ignoré ne ressort
            assert!(
                !conv.sortie.contains([' ', '%', 'é']),
                "{expr:?} => {:?}",
                conv.sortie
            );

            // sans avertissement, aucune parenthèse ne ressort
            if conv.est_fiable() {
                assert!(!conv.sortie.contains(['(', ')']), "{expr:?}");
            }
        }
    }
}

#[test]
fn fuzz_safe_imbrication_contre_capacite() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let imbrique = |n: usize| format!("{}a{}", "(".repeat(n), ")".repeat(n));

    // capacité par défaut : 100
    let ok = infix_to_postfix(&imbrique(100)).unwrap();
    assert_eq!(ok.sortie, "a");
    let ok = infix_to_prefix(&imbrique(100)).unwrap();
    assert_eq!(ok.sortie, "a");

    assert_eq!(
        infix_to_postfix(&imbrique(101)),
        Err(ErreurNotation::DebordementPile { capacite: 100 })
    );
    assert_eq!(
        infix_to_prefix(&imbrique(5000)),
        Err(ErreurNotation::DebordementPile { capacite: 100 })
    );

    budget(t0, max);
}
