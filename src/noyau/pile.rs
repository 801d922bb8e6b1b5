// src/noyau/pile.rs
//
// Pile bornée générique (LIFO).
// - une seule abstraction pour les symboles (conversion) et les valeurs (évaluation)
// - capacité fixe : un empilement au-delà renvoie une erreur, le contenu reste intact
// - pop/peek sur pile vide => None (sentinelle définie, jamais de comportement indéfini)

use super::erreur::{ErreurNotation, Resultat};

#[derive(Clone, Debug)]
pub struct Pile<T> {
    elements: Vec<T>,
    capacite: usize,
}

impl<T> Pile<T> {
    pub fn new(capacite: usize) -> Self {
        Self {
            // pas de pré-allocation énorme si la capacité est grande
            elements: Vec::with_capacity(capacite.min(64)),
            capacite,
        }
    }

    /// Empile `x` au sommet.
    ///
    /// Pile pleine => `DebordementPile` ; `x` est abandonné, le reste ne bouge pas.
    pub fn push(&mut self, x: T) -> Resultat<()> {
        if self.elements.len() >= self.capacite {
            log::warn!("débordement de pile (capacité {})", self.capacite);
            return Err(ErreurNotation::DebordementPile {
                capacite: self.capacite,
            });
        }
        self.elements.push(x);
        Ok(())
    }

    pub fn pop(&mut self) -> Option<T> {
        self.elements.pop()
    }

    pub fn peek(&self) -> Option<&T> {
        self.elements.last()
    }

    /// Comme `pop`, mais une pile vide est une erreur (évaluation).
    pub fn pop_ou_erreur(&mut self) -> Resultat<T> {
        self.elements.pop().ok_or(ErreurNotation::PileVide)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn capacite(&self) -> usize {
        self.capacite
    }

    /// Contenu du fond vers le sommet (pour la démarche).
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }
}
