// src/noyau/conversion.rs
//
// Shunting-yard : infixe -> postfixe / préfixe
// Objectif:
// - Un seul balayage, une pile d’opérateurs/parenthèses locale à l’appel
// - Postfixe : balayage gauche -> droite
// - Préfixe  : balayage de l’entrée inversée, rôles de '(' et ')' échangés,
//              puis inversion de la sortie
//
// Règles:
// - Opérande : sortie directe
// - Ouvrante : empilée
// - Fermante : dépile jusqu’à l’ouvrante (jetée). Pile vidée sans ouvrante => avertissement
// - Opérateur : dépile tant que le sommet est un opérateur plus prioritaire
//   (ou de même rang si le mode le demande), puis empile
// - Fin : vidage complet, ouvrantes restantes comprises (recopiées telles quelles)
//
// NOTE:
// - Entrée mal formée => sortie quand même, avec avertissements (pas d’erreur)
// - Seul le débordement de pile est une erreur

use std::fmt;

use super::erreur::{Avertissement, Resultat};
use super::jetons::{classer, est_operateur, precedence, Symbole};
use super::pile::Pile;
use super::reglages::{Reglages, Sens};

/// Ce que le balayage a fait d’un symbole.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Geste {
    Ecrit,
    Empile,
    FermeGroupe,
    Ignore,
    Vidage,
}

impl Geste {
    pub fn libelle(self) -> &'static str {
        match self {
            Geste::Ecrit => "écrit",
            Geste::Empile => "empile",
            Geste::FermeGroupe => "ferme",
            Geste::Ignore => "ignoré",
            Geste::Vidage => "vidage",
        }
    }
}

/// Une ligne de démarche : état après traitement d’un symbole.
///
/// Pour le préfixe, `sortie` est la sortie du balayage inversé (avant inversion finale).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Etape {
    /// None pour le vidage final.
    pub symbole: Option<char>,
    pub geste: Geste,
    pub pile: String,
    pub sortie: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conversion {
    pub sens: Sens,
    pub sortie: String,
    pub avertissements: Vec<Avertissement>,
    pub etapes: Vec<Etape>,
}

impl Conversion {
    /// false dès qu’un défaut d’entrée a été toléré.
    pub fn est_fiable(&self) -> bool {
        self.avertissements.is_empty()
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sortie)
    }
}

/// Infixe -> postfixe, réglages par défaut.
///
/// Exemple: "a+b*c" => "abc*+"
pub fn infix_to_postfix(expression: &str) -> Resultat<Conversion> {
    convertir(expression, Sens::Postfixe, &Reglages::default())
}

/// Infixe -> préfixe, réglages par défaut.
///
/// Exemple: "a+b*c" => "+a*bc"
pub fn infix_to_prefix(expression: &str) -> Resultat<Conversion> {
    convertir(expression, Sens::Prefixe, &Reglages::default())
}

pub fn convertir(expression: &str, sens: Sens, reglages: &Reglages) -> Resultat<Conversion> {
    log::debug!(
        "conversion {sens:?} de {expression:?} (capacité {}, mode {:?})",
        reglages.capacite,
        reglages.mode
    );

    // (position d’origine, caractère), dans l’ordre du balayage
    let mut symboles: Vec<(usize, char)> = expression.chars().enumerate().collect();
    if sens == Sens::Prefixe {
        symboles.reverse();
    }

    let mut conv = balayer(&symboles, sens, reglages)?;

    if sens == Sens::Prefixe {
        conv.sortie = conv.sortie.chars().rev().collect();
    }

    for a in &conv.avertissements {
        log::warn!("{expression:?} : {a}");
    }
    log::debug!("résultat {sens:?} : {:?}", conv.sortie);

    Ok(conv)
}

fn balayer(symboles: &[(usize, char)], sens: Sens, reglages: &Reglages) -> Resultat<Conversion> {
    // Préfixe : on lit à l’envers, donc ')' ouvre et '(' ferme.
    let (ouvrante, fermante) = match sens {
        Sens::Postfixe => ('(', ')'),
        Sens::Prefixe => (')', '('),
    };

    let mut pile: Pile<char> = Pile::new(reglages.capacite);
    let mut sortie = String::with_capacity(symboles.len());
    let mut avertissements = Vec::new();
    let mut etapes = Vec::with_capacity(symboles.len() + 1);

    // Sert à repérer les opérandes multi-caractères ("12", "ab").
    let mut prev_was_operande = false;

    for &(position, c) in symboles {
        let geste = match classer(c) {
            Symbole::Operande(x) => {
                if prev_was_operande {
                    avertissements.push(Avertissement::OperandesAdjacents { position });
                }
                sortie.push(x);
                prev_was_operande = true;
                Geste::Ecrit
            }

            Symbole::LPar | Symbole::RPar if c == ouvrante => {
                pile.push(c)?;
                prev_was_operande = false;
                Geste::Empile
            }

            Symbole::LPar | Symbole::RPar => {
                debug_assert_eq!(c, fermante);

                // dépile jusqu’à l’ouvrante
                let mut trouvee = false;
                while let Some(top) = pile.pop() {
                    if top == ouvrante {
                        trouvee = true;
                        break;
                    }
                    sortie.push(top);
                }

                if !trouvee {
                    avertissements.push(parenthese_sans_partenaire(c));
                }

                prev_was_operande = false;
                Geste::FermeGroupe
            }

            Symbole::Operateur(op) => {
                // dépile tant que:
                // - on n’est pas bloqué par une ouvrante (ou pile vide)
                // - et la précédence/associativité exige de sortir l’opérateur du haut
                let p_tok = precedence(c);
                while let Some(&top) = pile.peek() {
                    if !est_operateur(top) {
                        break;
                    }

                    let p_top = precedence(top);
                    let doit_pop = p_top > p_tok
                        || (p_top == p_tok && reglages.mode.depile_a_egalite(op, sens));

                    if !doit_pop {
                        break;
                    }
                    pile.pop();
                    sortie.push(top);
                }

                pile.push(c)?;
                prev_was_operande = false;
                Geste::Empile
            }

            Symbole::Inconnu(x) => {
                avertissements.push(Avertissement::CaractereIgnore {
                    caractere: x,
                    position,
                });
                Geste::Ignore
            }
        };

        let etape = Etape {
            symbole: Some(c),
            geste,
            pile: pile.iter().collect(),
            sortie: sortie.clone(),
        };
        log::trace!("{etape:?}");
        etapes.push(etape);
    }

    // vide la pile (une ouvrante restante est recopiée telle quelle)
    let mut ouvrantes_restantes = 0usize;
    while let Some(top) = pile.pop() {
        if top == ouvrante {
            ouvrantes_restantes += 1;
        }
        sortie.push(top);
    }
    if ouvrantes_restantes > 0 {
        // en termes d’entrée d’origine : '(' non fermée (postfixe) ou ')' orpheline (préfixe)
        let a = match sens {
            Sens::Postfixe => Avertissement::ParentheseNonFermee,
            Sens::Prefixe => Avertissement::ParentheseOrpheline,
        };
        for _ in 0..ouvrantes_restantes {
            avertissements.push(a.clone());
        }
    }

    etapes.push(Etape {
        symbole: None,
        geste: Geste::Vidage,
        pile: String::new(),
        sortie: sortie.clone(),
    });

    Ok(Conversion {
        sens,
        sortie,
        avertissements,
        etapes,
    })
}

/// Une fermante qui ne trouve pas son ouvrante, dite en termes d’entrée d’origine.
fn parenthese_sans_partenaire(c: char) -> Avertissement {
    if c == ')' {
        Avertissement::ParentheseOrpheline
    } else {
        // préfixe : '(' lue comme fermante sans ')' en attente
        Avertissement::ParentheseNonFermee
    }
}
