//! Erreurs (fatales à l’appel en cours) et avertissements (entrée mal formée,
//! conversion quand même produite).

use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ErreurNotation {
    /// Pile pleine : l’élément n’a pas été empilé.
    #[error("débordement de pile (capacité {capacite})")]
    DebordementPile { capacite: usize },

    /// Opérateur sans assez d’opérandes.
    #[error("pile vide : opérande manquant")]
    PileVide,

    #[error("expression mal formée : {0}")]
    ExpressionMalFormee(String),

    #[error("division par zéro")]
    DivisionParZero,

    #[error("aucune valeur pour l’opérande '{0}'")]
    OperandeSansValeur(char),

    #[error("exposant invalide : {0}")]
    ExposantInvalide(String),

    /// Texte "symbole = valeur" illisible (saisie des valeurs d’opérandes).
    #[error("affectation invalide : {0}")]
    AffectationInvalide(String),
}

pub type Resultat<T> = Result<T, ErreurNotation>;

pub(crate) fn mal_formee<T, S: Into<String>>(msg: S) -> Resultat<T> {
    Err(ErreurNotation::ExpressionMalFormee(msg.into()))
}

/// Défaut d’entrée toléré : la sortie existe mais n’est pas fiable.
///
/// Toujours exprimé en termes d’expression d’origine, même pour le chemin
/// préfixe (qui balaie l’entrée inversée). Positions = indices de caractère.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Avertissement {
    /// `(` jamais fermée : elle est recopiée telle quelle en sortie.
    ParentheseNonFermee,
    /// `)` sans `(` correspondante.
    ParentheseOrpheline,
    /// Caractère ni opérande, ni opérateur, ni parenthèse : ignoré.
    CaractereIgnore { caractere: char, position: usize },
    /// Deux opérandes collés : pas de jeton multi-caractères ("12" = '1','2').
    OperandesAdjacents { position: usize },
}

impl fmt::Display for Avertissement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Avertissement::ParentheseNonFermee => write!(f, "parenthèse non fermée"),
            Avertissement::ParentheseOrpheline => write!(f, "parenthèse fermante orpheline"),
            Avertissement::CaractereIgnore {
                caractere,
                position,
            } => write!(f, "caractère ignoré '{caractere}' (position {position})"),
            Avertissement::OperandesAdjacents { position } => {
                write!(f, "opérandes adjacents (position {position}) : symboles d’un caractère seulement")
            }
        }
    }
}
