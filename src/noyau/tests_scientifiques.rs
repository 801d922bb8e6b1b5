//! Tests scientifiques (campagne) : comportements attendus, octet par octet.
//!
//! - conversions de référence (précédence, parenthèses, associativité)
//! - asymétrie historique de `^` (postfixe à gauche, préfixe à droite), et sa
//!   version unifiée en mode standard
//! - entrées mal formées : sortie définie + avertissements, jamais de panique
//! - bornes de pile

use pretty_assertions::assert_eq;

use super::conversion::{convertir, infix_to_postfix, infix_to_prefix};
use super::erreur::{Avertissement, ErreurNotation};
use super::eval::eval_postfix;
use super::operandes::ValeursOperandes;
use super::pile::Pile;
use super::reglages::{Mode, Reglages, Sens};
use num_bigint::BigInt;

fn post(expr: &str) -> String {
    infix_to_postfix(expr)
        .unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
        .sortie
}

fn pre(expr: &str) -> String {
    infix_to_prefix(expr)
        .unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
        .sortie
}

fn avec_mode(expr: &str, sens: Sens, mode: Mode) -> String {
    let r = Reglages {
        mode,
        ..Reglages::default()
    };
    convertir(expr, sens, &r)
        .unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
        .sortie
}

/* ------------------------ Conversions de référence ------------------------ */

#[test]
fn sci_table_de_reference() {
    // (infixe, postfixe, préfixe) : sans égalité de précédence ambiguë
    let table = [
        ("a", "a", "a"),
        ("a+b", "ab+", "+ab"),
        ("a+b*c", "abc*+", "+a*bc"),
        ("(a+b)*c", "ab+c*", "*+abc"),
        ("a*b+c", "ab*c+", "+*abc"),
        ("a+b*c^d", "abcd^*+", "+a*b^cd"),
        ("(a+b)*(c-d)", "ab+cd-*", "*+ab-cd"),
        ("((a))", "a", "a"),
        ("x^(y+z)", "xyz+^", "^x+yz"),
        ("3*(4+5)", "345+*", "*3+45"),
    ];

    for (infixe, attendu_post, attendu_pre) in table {
        assert_eq!(post(infixe), attendu_post, "postfixe de {infixe:?}");
        assert_eq!(pre(infixe), attendu_pre, "préfixe de {infixe:?}");
    }
}

/* ------------------------ Associativité ------------------------ */

#[test]
fn sci_puissance_asymetrie_historique() {
    // comportement actuel, affirmé tel quel
    assert_eq!(post("a^b^c"), "ab^c^");
    assert_eq!(pre("a^b^c"), "^a^bc");
}

#[test]
fn sci_mode_standard() {
    let table = [
        ("a^b^c", "abc^^", "^a^bc"),
        ("a-b-c", "ab-c-", "--abc"),
        ("a/b/c", "ab/c/", "//abc"),
        ("a-b+c", "ab-c+", "+-abc"),
        ("a^b^c^d", "abcd^^^", "^a^b^cd"),
    ];
    for (infixe, attendu_post, attendu_pre) in table {
        assert_eq!(
            avec_mode(infixe, Sens::Postfixe, Mode::Standard),
            attendu_post,
            "postfixe de {infixe:?}"
        );
        assert_eq!(
            avec_mode(infixe, Sens::Prefixe, Mode::Standard),
            attendu_pre,
            "préfixe de {infixe:?}"
        );
    }
}

#[test]
fn sci_modes_identiques_sans_egalite() {
    // les modes ne diffèrent que sur les égalités de précédence
    for infixe in ["a+b*c", "(a+b)*c", "a*(b-c)^d", "((a+b))"] {
        for sens in [Sens::Postfixe, Sens::Prefixe] {
            assert_eq!(
                avec_mode(infixe, sens, Mode::Historique),
                avec_mode(infixe, sens, Mode::Standard),
                "{infixe:?} {sens:?}"
            );
        }
    }
}

/* ------------------------ Entrées mal formées ------------------------ */

#[test]
fn sci_parenthese_non_fermee_octets_exacts() {
    let c = infix_to_postfix("(a+b").unwrap();
    assert_eq!(c.sortie.as_bytes(), b"ab+(");
    assert_eq!(c.avertissements, vec![Avertissement::ParentheseNonFermee]);

    let c = infix_to_prefix("(a+b").unwrap();
    assert_eq!(c.sortie.as_bytes(), b"+ab");
    assert_eq!(c.avertissements, vec![Avertissement::ParentheseNonFermee]);
}

#[test]
fn sci_mal_formees_sans_panique() {
    for expr in ["", ")", "(", "+", "a+", "+a", "ab", "((", "))a((", "a b", "*/^"] {
        let p = infix_to_postfix(expr);
        let q = infix_to_prefix(expr);
        assert!(p.is_ok() && q.is_ok(), "expr={expr:?}");
    }

    // opérateurs seuls : recopiés, la conversion ne vérifie pas l’arité
    assert_eq!(post("*/^"), "*^/");
}

/* ------------------------ Bornes de pile ------------------------ */

#[test]
fn sci_capacite_plus_un() {
    let mut p = Pile::new(5);
    for c in "+-*/^".chars() {
        p.push(c).unwrap();
    }
    assert_eq!(
        p.push('('),
        Err(ErreurNotation::DebordementPile { capacite: 5 })
    );
    let contenu: String = p.iter().collect();
    assert_eq!(contenu, "+-*/^");
}

#[test]
fn sci_capacite_conversion_croissante() {
    // précédences croissantes : tout s’empile
    let r = Reglages {
        capacite: 3,
        ..Reglages::default()
    };
    assert_eq!(convertir("a+b*c^d", Sens::Postfixe, &r).unwrap().sortie, "abcd^*+");
    assert_eq!(
        convertir("a+b*c^(d)", Sens::Postfixe, &r),
        Err(ErreurNotation::DebordementPile { capacite: 3 })
    );
}

/* ------------------------ Conversion puis évaluation ------------------------ */

#[test]
fn sci_conversion_puis_evaluation() {
    let mut v = ValeursOperandes::new();
    v.definir('a', 2);
    v.definir('b', 3);
    v.definir('c', 4);

    // 2 + 3*4 = 14 ; (2+3)*4 = 20 ; (2^3)^4 = 4096 (postfixe historique)
    let table = [("a+b*c", 14), ("(a+b)*c", 20), ("a^b^c", 4096)];
    for (infixe, attendu) in table {
        let p = post(infixe);
        assert_eq!(
            eval_postfix(&p, &mut v.clone()),
            Ok(BigInt::from(attendu)),
            "{infixe:?} => {p:?}"
        );
    }
}
