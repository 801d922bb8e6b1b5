//! Noyau — pipeline complet (appelé par l’UI)
//!
//! infixe -> postfixe + préfixe (avec démarche) -> évaluation des deux sorties
//! (entière + exacte) avec les valeurs d’opérandes fournies.
//!
//! Une sortie non fiable (avertissements) n’est pas évaluée : le résultat
//! serait celui d’une expression que l’utilisateur n’a pas écrite.

use num_bigint::BigInt;
use num_rational::BigRational;

use super::conversion::{convertir, Conversion};
use super::erreur::{mal_formee, Resultat};
use super::eval::evaluer;
use super::format::{format_avertissements, format_etapes};
use super::operandes::ValeursOperandes;
use super::reglages::{Reglages, Sens};

/// Valeurs d’une sortie (postfixe ou préfixe).
#[derive(Clone, Debug, PartialEq)]
pub struct Valeurs {
    pub entier: Resultat<BigInt>,
    pub exact: Resultat<BigRational>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Rapport {
    pub postfixe: Conversion,
    pub prefixe: Conversion,
    /// None si la conversion n’est pas fiable.
    pub valeurs_postfixe: Option<Valeurs>,
    pub valeurs_prefixe: Option<Valeurs>,
}

impl Rapport {
    pub fn demarche_postfixe(&self) -> String {
        format_etapes(&self.postfixe)
    }

    pub fn demarche_prefixe(&self) -> String {
        format_etapes(&self.prefixe)
    }

    /// Avertissements des deux chemins, sans doublon.
    pub fn avertissements(&self) -> String {
        let mut tous = self.postfixe.avertissements.clone();
        for a in &self.prefixe.avertissements {
            if !tous.contains(a) {
                tous.push(a.clone());
            }
        }
        format_avertissements(&tous)
    }
}

/// API publique : convertit dans les deux notations puis évalue.
///
/// Erreur seulement si l’entrée est vide ou si la pile déborde.
pub fn traiter_expression(
    expression: &str,
    valeurs: &ValeursOperandes,
    reglages: &Reglages,
) -> Resultat<Rapport> {
    if expression.is_empty() {
        return mal_formee("entrée vide");
    }

    let postfixe = convertir(expression, Sens::Postfixe, reglages)?;
    let prefixe = convertir(expression, Sens::Prefixe, reglages)?;

    let valeurs_postfixe = evaluer_si_fiable(&postfixe, valeurs, reglages);
    let valeurs_prefixe = evaluer_si_fiable(&prefixe, valeurs, reglages);

    Ok(Rapport {
        postfixe,
        prefixe,
        valeurs_postfixe,
        valeurs_prefixe,
    })
}

fn evaluer_si_fiable(
    conv: &Conversion,
    valeurs: &ValeursOperandes,
    reglages: &Reglages,
) -> Option<Valeurs> {
    if !conv.est_fiable() {
        log::debug!("sortie {:?} non fiable : pas d’évaluation", conv.sens);
        return None;
    }

    // une copie par évaluation : la source est `&mut`
    let entier = evaluer(&conv.sortie, conv.sens, &mut valeurs.clone(), reglages);
    let exact = evaluer(&conv.sortie, conv.sens, &mut valeurs.clone(), reglages);
    Some(Valeurs { entier, exact })
}
