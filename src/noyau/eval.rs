//! Noyau — évaluation postfixe / préfixe
//!
//! Pile d’opérandes (valeurs), une valeur par occurrence d’opérande demandée à la
//! source ; chaque opérateur consomme deux valeurs et empile le résultat.
//! À la fin, il doit rester exactement une valeur.
//!
//! Deux arithmétiques :
//! - entière (`BigInt`) : division tronquée vers zéro, exposant entier ≥ 0
//! - exacte (`BigRational`) : division exacte, exposant entier de signe quelconque

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

use super::erreur::{mal_formee, ErreurNotation, Resultat};
use super::jetons::{classer, Op, Symbole};
use super::operandes::SourceOperandes;
use super::pile::Pile;
use super::reglages::{Reglages, Sens};

/// Garde-fou : taille (en bits) maximale d’un résultat de puissance.
const BITS_MAX_PUISSANCE: u64 = 1 << 20;

/// Arithmétique utilisée par l’évaluateur.
pub trait Nombre: Sized {
    fn depuis_entier(n: BigInt) -> Self;
    fn appliquer(op: Op, a: Self, b: Self) -> Resultat<Self>;
}

impl Nombre for BigInt {
    fn depuis_entier(n: BigInt) -> Self {
        n
    }

    fn appliquer(op: Op, a: Self, b: Self) -> Resultat<Self> {
        Ok(match op {
            Op::Plus => a + b,
            Op::Minus => a - b,
            Op::Star => a * b,
            Op::Slash => {
                if b.is_zero() {
                    return Err(ErreurNotation::DivisionParZero);
                }
                // tronquée vers zéro (comme une division d’entiers machine)
                a / b
            }
            Op::Caret => {
                if b.is_negative() {
                    return Err(ErreurNotation::ExposantInvalide(format!(
                        "exposant négatif {b} en arithmétique entière"
                    )));
                }
                let n = exposant_borne(&b, a.bits())?;
                a.pow(n)
            }
        })
    }
}

impl Nombre for BigRational {
    fn depuis_entier(n: BigInt) -> Self {
        BigRational::from_integer(n)
    }

    fn appliquer(op: Op, a: Self, b: Self) -> Resultat<Self> {
        Ok(match op {
            Op::Plus => a + b,
            Op::Minus => a - b,
            Op::Star => a * b,
            Op::Slash => {
                if b.is_zero() {
                    return Err(ErreurNotation::DivisionParZero);
                }
                a / b
            }
            Op::Caret => {
                if !b.denom().is_one() {
                    return Err(ErreurNotation::ExposantInvalide(format!(
                        "exposant non entier {b}"
                    )));
                }
                let e = b.numer();
                let n = exposant_borne(&e.abs(), a.numer().bits() + a.denom().bits())?;

                let p = BigRational::new(a.numer().pow(n), a.denom().pow(n));
                if e.is_negative() {
                    // 0^-n
                    if p.is_zero() {
                        return Err(ErreurNotation::DivisionParZero);
                    }
                    p.recip()
                } else {
                    p
                }
            }
        })
    }
}

/// Exposant ≥ 0 converti en u32, refusé si le résultat serait démesuré.
fn exposant_borne(e: &BigInt, bits_base: u64) -> Resultat<u32> {
    let n = e
        .to_u32()
        .ok_or_else(|| ErreurNotation::ExposantInvalide(format!("exposant trop grand : {e}")))?;

    if bits_base.saturating_mul(u64::from(n)) > BITS_MAX_PUISSANCE {
        return Err(ErreurNotation::ExposantInvalide(format!(
            "résultat trop grand (exposant {n})"
        )));
    }
    Ok(n)
}

/// API publique : évalue une expression postfixe en entiers.
///
/// Exemple: "34+" avec les chiffres littéraux => 7
pub fn eval_postfix<S: SourceOperandes>(expression: &str, source: &mut S) -> Resultat<BigInt> {
    evaluer(expression, Sens::Postfixe, source, &Reglages::default())
}

pub fn eval_prefix<S: SourceOperandes>(expression: &str, source: &mut S) -> Resultat<BigInt> {
    evaluer(expression, Sens::Prefixe, source, &Reglages::default())
}

pub fn eval_postfix_exact<S: SourceOperandes>(
    expression: &str,
    source: &mut S,
) -> Resultat<BigRational> {
    evaluer(expression, Sens::Postfixe, source, &Reglages::default())
}

pub fn eval_prefix_exact<S: SourceOperandes>(
    expression: &str,
    source: &mut S,
) -> Resultat<BigRational> {
    evaluer(expression, Sens::Prefixe, source, &Reglages::default())
}

/// Évaluation générique.
///
/// Préfixe : balayage droite -> gauche ; à chaque opérateur le premier dépilé
/// est l’opérande de GAUCHE (l’inverse du postfixe).
pub fn evaluer<N: Nombre, S: SourceOperandes>(
    expression: &str,
    sens: Sens,
    source: &mut S,
    reglages: &Reglages,
) -> Resultat<N> {
    log::debug!("évaluation {sens:?} de {expression:?}");

    let mut symboles: Vec<(usize, char)> = expression.chars().enumerate().collect();
    if sens == Sens::Prefixe {
        symboles.reverse();
    }

    let mut pile: Pile<N> = Pile::new(reglages.capacite);

    for (position, c) in symboles {
        match classer(c) {
            Symbole::Operande(x) => {
                let v = source
                    .valeur(x)
                    .ok_or(ErreurNotation::OperandeSansValeur(x))?;
                log::trace!("opérande '{x}' = {v}");
                pile.push(N::depuis_entier(v))?;
            }

            Symbole::Operateur(op) => {
                let premier = pile.pop_ou_erreur()?;
                let second = pile.pop_ou_erreur()?;
                let (a, b) = match sens {
                    Sens::Postfixe => (second, premier),
                    Sens::Prefixe => (premier, second),
                };
                pile.push(N::appliquer(op, a, b)?)?;
            }

            Symbole::LPar | Symbole::RPar => {
                return mal_formee(format!(
                    "parenthèse '{c}' en position {position} (notation sans parenthèses)"
                ));
            }

            Symbole::Inconnu(x) => {
                return mal_formee(format!("caractère inattendu '{x}' en position {position}"));
            }
        }
    }

    match pile.len() {
        0 => mal_formee("expression vide"),
        1 => pile.pop_ou_erreur(),
        n => mal_formee(format!("{n} valeurs restantes, opérateur manquant")),
    }
}
