// src/noyau/format.rs
//
// Affichage texte de la démarche (une ligne par symbole balayé) et des avertissements.
// Colonnes alignées pour un rendu monospace.

use super::conversion::{Conversion, Etape};
use super::erreur::Avertissement;
use super::reglages::Sens;

pub fn format_etape(e: &Etape) -> String {
    let symbole = match e.symbole {
        Some(c) => format!("'{c}'"),
        None => "fin".to_string(),
    };
    let pile = if e.pile.is_empty() { "∅" } else { e.pile.as_str() };
    format!(
        "{symbole:<5} {:<7} pile: {pile:<12} sortie: {}",
        e.geste.libelle(),
        e.sortie
    )
}

/// Démarche complète d’une conversion.
pub fn format_etapes(conv: &Conversion) -> String {
    let mut out = String::new();
    if conv.sens == Sens::Prefixe {
        out.push_str("(balayage de l’entrée inversée ; sortie inversée à la fin)\n");
    }
    for (i, e) in conv.etapes.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format_etape(e));
    }
    if conv.sens == Sens::Prefixe {
        out.push_str(&format!("\ninversion   sortie: {}", conv.sortie));
    }
    out
}

pub fn format_avertissements(avertissements: &[Avertissement]) -> String {
    avertissements
        .iter()
        .map(|a| format!("⚠ {a}"))
        .collect::<Vec<_>>()
        .join("\n")
}
