//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état du convertisseur (entrée, valeurs d’opérandes, sorties,
//! avertissements, erreur, réglages, démarche) et les actions simples (C/CLR/AC).
//! Les sorties arrivent toutes faites du noyau (`traiter_expression`) ; ici on ne
//! fait que les ranger en texte.

use convertisseur_notation::noyau::demarche::{Rapport, Valeurs};
use convertisseur_notation::noyau::reglages::{Mode, Reglages};

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub postfixe: String,
    pub prefixe: String,
}

#[derive(Clone, Debug)]
pub struct AppNotation {
    // --- entrées utilisateur ---
    pub entree: String,
    /// "a=3, b=-4" : valeurs des opérandes pour l’évaluation
    pub valeurs: String,

    // --- sorties ---
    pub postfixe: String,
    pub prefixe: String,
    pub valeur_postfixe: String,
    pub valeur_prefixe: String,
    pub avertissements: String,
    pub erreur: String,

    pub demarche: Demarche,

    // --- paramètres ---
    pub reglages: Reglages,

    // --- UX ---
    pub focus_entree: bool,
}

impl Default for AppNotation {
    fn default() -> Self {
        Self {
            entree: String::new(),
            valeurs: String::new(),
            postfixe: String::new(),
            prefixe: String::new(),
            valeur_postfixe: String::new(),
            valeur_prefixe: String::new(),
            avertissements: String::new(),
            erreur: String::new(),
            demarche: Demarche::default(),
            reglages: Reglages::default(),
            focus_entree: true,
        }
    }
}

impl AppNotation {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrées + résultats + réglages par défaut).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.valeurs.clear();
        self.clear_resultats();
        self.reglages = Reglages::default();
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée.
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer sorties + erreur + démarche (sans toucher aux entrées).
    pub fn clear_resultats(&mut self) {
        self.postfixe.clear();
        self.prefixe.clear();
        self.valeur_postfixe.clear();
        self.valeur_prefixe.clear();
        self.avertissements.clear();
        self.erreur.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Erreur : on efface tout ce qui en dépend (sorties non fiables).
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.clear_resultats();
        self.erreur = msg.into();
        log::debug!("erreur affichée : {}", self.erreur);
    }

    /// Dépose un rapport complet du noyau.
    pub fn set_rapport(&mut self, r: &Rapport) {
        self.clear_resultats();

        self.postfixe = r.postfixe.sortie.clone();
        self.prefixe = r.prefixe.sortie.clone();
        self.valeur_postfixe = texte_valeurs(r.valeurs_postfixe.as_ref());
        self.valeur_prefixe = texte_valeurs(r.valeurs_prefixe.as_ref());
        self.avertissements = r.avertissements();
        self.demarche = Demarche {
            postfixe: r.demarche_postfixe(),
            prefixe: r.demarche_prefixe(),
        };
    }

    pub fn set_capacite(&mut self, capacite: usize) {
        self.reglages.set_capacite(capacite);
        self.focus_entree = true;
    }

    pub fn set_mode_standard(&mut self, standard: bool) {
        self.reglages.mode = if standard {
            Mode::Standard
        } else {
            Mode::Historique
        };
        self.focus_entree = true;
    }
}

/// "entier : 0   exact : 2/3" ; erreurs d’évaluation en clair.
fn texte_valeurs(v: Option<&Valeurs>) -> String {
    let Some(v) = v else {
        return "non évaluée (sortie non fiable)".to_string();
    };

    let entier = match &v.entier {
        Ok(n) => n.to_string(),
        Err(e) => e.to_string(),
    };
    let exact = match &v.exact {
        Ok(q) => q.to_string(),
        Err(e) => e.to_string(),
    };

    if entier == exact {
        entier
    } else {
        format!("entier : {entier}   exact : {exact}")
    }
}
