//! Réglages d’une conversion : capacité de la pile + règle d’associativité.

use super::jetons::Op;

/// Capacité par défaut de la pile d’opérateurs.
pub const CAPACITE_DEFAUT: usize = 100;

/// Garde-fou : on borne la capacité (anti-abus).
pub const CAPACITE_MAX: usize = 10_000;

/// Sens du balayage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sens {
    /// gauche → droite (postfixe)
    Postfixe,
    /// droite → gauche sur l’entrée inversée (préfixe)
    Prefixe,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Associativite {
    Gauche,
    Droite,
}

/// Règle de départage à précédence égale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Comportement historique, asymétrique :
    /// - postfixe : tout regroupe à gauche (`^` compris) : a^b^c => ab^c^
    /// - préfixe  : tout regroupe à droite                : a^b^c => ^a^bc
    #[default]
    Historique,
    /// + - * / à gauche, ^ à droite, sur les deux chemins.
    Standard,
}

impl Mode {
    pub fn associativite(self, op: Op, sens: Sens) -> Associativite {
        match self {
            Mode::Historique => match sens {
                Sens::Postfixe => Associativite::Gauche,
                Sens::Prefixe => Associativite::Droite,
            },
            Mode::Standard => {
                if op == Op::Caret {
                    Associativite::Droite
                } else {
                    Associativite::Gauche
                }
            }
        }
    }

    /// À précédence égale, faut-il sortir l’opérateur du sommet ?
    ///
    /// Postfixe : oui si l’opérateur regroupe à gauche.
    /// Préfixe (balayage inversé) : oui si l’opérateur regroupe à droite.
    pub fn depile_a_egalite(self, op: Op, sens: Sens) -> bool {
        let a = self.associativite(op, sens);
        match sens {
            Sens::Postfixe => a == Associativite::Gauche,
            Sens::Prefixe => a == Associativite::Droite,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reglages {
    pub capacite: usize,
    pub mode: Mode,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            capacite: CAPACITE_DEFAUT,
            mode: Mode::Historique,
        }
    }
}

impl Reglages {
    pub fn standard() -> Self {
        Self {
            mode: Mode::Standard,
            ..Self::default()
        }
    }

    /// Garde-fou : capacité dans [1, CAPACITE_MAX].
    pub fn set_capacite(&mut self, capacite: usize) {
        self.capacite = capacite.clamp(1, CAPACITE_MAX);
    }
}
