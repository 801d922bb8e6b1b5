// src/main.rs
//
// Convertisseur de notation — point d’entrée NATIF
// ------------------------------------------------
// - eframe::run_native + NativeOptions
// - journalisation : env_logger (niveau via RUST_LOG, ex: RUST_LOG=convertisseur_notation=debug)
//
// IMPORTANT (structure projet):
// - `impl eframe::App for AppNotation` vit dans src/app.rs
// - le noyau (conversion / évaluation) est dans la bibliothèque (src/noyau)

use eframe::egui;

mod app;

use app::AppNotation;

/// Titre unique de la fenêtre.
const TITRE_APP: &str = "Convertisseur de notation";

fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("démarrage de « {TITRE_APP} »");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([560.0, 760.0])
            .with_min_inner_size([440.0, 620.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(|_cc| Ok(Box::<AppNotation>::default())),
    )
}
