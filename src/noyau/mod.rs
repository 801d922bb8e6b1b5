//! Noyau notation (sans UI, sans état global)
//!
//! Organisation interne :
//! - pile.rs       : pile bornée générique
//! - jetons.rs     : classification des symboles + précédence
//! - reglages.rs   : capacité + règle d’associativité
//! - conversion.rs : shunting-yard infixe -> postfixe / préfixe (+ démarche)
//! - operandes.rs  : sources de valeurs d’opérandes
//! - eval.rs       : évaluation postfixe / préfixe (entière ou exacte)
//! - format.rs     : démarche / avertissements en texte
//! - demarche.rs   : pipeline complet pour l’UI
//! - erreur.rs     : erreurs + avertissements

pub mod conversion;
pub mod demarche;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod operandes;
pub mod pile;
pub mod reglages;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use conversion::{convertir, infix_to_postfix, infix_to_prefix, Conversion};
pub use demarche::{traiter_expression, Rapport};
pub use erreur::{Avertissement, ErreurNotation, Resultat};
pub use eval::{eval_postfix, eval_postfix_exact, eval_prefix, eval_prefix_exact, evaluer};
pub use operandes::{SourceOperandes, ValeursOperandes};
pub use reglages::{Mode, Reglages, Sens};
