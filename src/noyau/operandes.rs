//! Sources de valeurs pour les opérandes (un symbole => un entier).
//!
//! L’évaluation demande une valeur à chaque occurrence d’opérande ; c’est la
//! source qui décide (table saisie dans l’UI, chiffres littéraux, closure…).

use std::collections::BTreeMap;

use num_bigint::BigInt;

use super::erreur::{ErreurNotation, Resultat};

pub trait SourceOperandes {
    /// None => pas de valeur pour ce symbole (erreur `OperandeSansValeur`).
    fn valeur(&mut self, symbole: char) -> Option<BigInt>;
}

impl<F> SourceOperandes for F
where
    F: FnMut(char) -> Option<BigInt>,
{
    fn valeur(&mut self, symbole: char) -> Option<BigInt> {
        self(symbole)
    }
}

/// Table symbole => valeur.
///
/// Un chiffre absent de la table vaut sa valeur littérale ('7' => 7), donc
/// `ValeursOperandes::default()` suffit pour "34+".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValeursOperandes {
    table: BTreeMap<char, BigInt>,
}

impl ValeursOperandes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn definir(&mut self, symbole: char, valeur: impl Into<BigInt>) {
        self.table.insert(symbole, valeur.into());
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Lit "a=3, b=-4; x = 12" (séparateurs ',' ';' ou fin de ligne).
    pub fn analyser(texte: &str) -> Resultat<Self> {
        let mut out = Self::new();

        for morceau in texte.split([',', ';', '\n']) {
            let morceau = morceau.trim();
            if morceau.is_empty() {
                continue;
            }

            let (gauche, droite) = morceau
                .split_once('=')
                .ok_or_else(|| affectation(format!("'=' manquant dans {morceau:?}")))?;

            let mut chars = gauche.trim().chars();
            let symbole = match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_alphanumeric() => c,
                _ => {
                    return Err(affectation(format!(
                        "symbole d’un caractère attendu, trouvé {:?}",
                        gauche.trim()
                    )))
                }
            };

            let droite = droite.trim();
            let valeur = BigInt::parse_bytes(droite.as_bytes(), 10)
                .ok_or_else(|| affectation(format!("entier attendu pour '{symbole}', trouvé {droite:?}")))?;

            out.table.insert(symbole, valeur);
        }

        Ok(out)
    }

    /// Forme texte stable (ordre des symboles), relisible par `analyser`.
    pub fn format(&self) -> String {
        self.table
            .iter()
            .map(|(s, v)| format!("{s}={v}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl SourceOperandes for ValeursOperandes {
    fn valeur(&mut self, symbole: char) -> Option<BigInt> {
        self.table
            .get(&symbole)
            .cloned()
            .or_else(|| symbole.to_digit(10).map(BigInt::from))
    }
}

fn affectation(msg: String) -> ErreurNotation {
    ErreurNotation::AffectationInvalide(msg)
}
