//! Convertisseur de notation
//!
//! Infixe -> postfixe / préfixe (shunting-yard, une pile locale par appel),
//! puis évaluation des sorties avec des valeurs d’opérandes fournies.
//!
//! ```text
//! "a+b*c"   => postfixe "abc*+"  préfixe "+a*bc"
//! "(a+b)*c" => postfixe "ab+c*"  préfixe "*+abc"
//! ```

pub mod noyau;

pub use noyau::{
    eval_postfix, eval_prefix, infix_to_postfix, infix_to_prefix, Conversion, ErreurNotation,
    Reglages, ValeursOperandes,
};
