// src/noyau/jetons.rs
//
// Classification caractère par caractère.
// Pas de tokenisation : un symbole = un caractère (pas de nombres multi-chiffres,
// pas d’espaces significatifs).

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Minus,
    Star,
    Slash,
    Caret, // ^
}

impl Op {
    pub fn depuis_char(c: char) -> Option<Op> {
        match c {
            '+' => Some(Op::Plus),
            '-' => Some(Op::Minus),
            '*' => Some(Op::Star),
            '/' => Some(Op::Slash),
            '^' => Some(Op::Caret),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Op::Plus => '+',
            Op::Minus => '-',
            Op::Star => '*',
            Op::Slash => '/',
            Op::Caret => '^',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Symbole {
    Operande(char),
    Operateur(Op),
    LPar,
    RPar,
    Inconnu(char),
}

pub fn classer(c: char) -> Symbole {
    if c.is_ascii_alphanumeric() {
        return Symbole::Operande(c);
    }
    match c {
        '(' => Symbole::LPar,
        ')' => Symbole::RPar,
        _ => match Op::depuis_char(c) {
            Some(op) => Symbole::Operateur(op),
            None => Symbole::Inconnu(c),
        },
    }
}

/// Rang de précédence ; 0 = "pas un opérateur".
pub fn precedence(c: char) -> u8 {
    match c {
        '^' => 3,
        '*' | '/' => 2,
        '+' | '-' => 1,
        _ => 0,
    }
}

pub fn est_operateur(c: char) -> bool {
    Op::depuis_char(c).is_some()
}
