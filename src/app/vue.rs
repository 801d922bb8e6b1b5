// src/app/vue.rs
//
// Vue (UI egui)
// -------------
// Objectifs :
// - Clavier : Enter convertit (quand le champ est focus)
// - Boutons : symboles d’un caractère (opérandes, opérateurs, parenthèses)
// - Valeurs d’opérandes saisies en texte ("a=3, b=-4") : remplacent l’invite
//   "valeur de a ?" de l’ancien programme console
//
// Note :
// - pas d’espaces automatiques : l’espace est un caractère ignoré (avertissement)

use eframe::egui;

use convertisseur_notation::noyau::operandes::ValeursOperandes;
use convertisseur_notation::noyau::reglages::{Mode, CAPACITE_MAX};
use convertisseur_notation::noyau::traiter_expression;

use super::etat::AppNotation;

impl AppNotation {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Convertisseur de notation");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultats(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Infixe :");

        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: a+b*c, (a+b)*c, a^b^c")
                .id_salt("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.convertir_via_noyau();
        }

        ui.add_space(4.0);
        ui.label("Valeurs des opérandes :");
        ui.add(
            egui::TextEdit::singleline(&mut self.valeurs)
                .desired_width(ui.available_width())
                .hint_text("a=3, b=-4 (un chiffre vaut sa valeur)")
                .id_salt("valeurs_edit")
                .code_editor(),
        );

        ui.add_space(6.0);

        // Actions + réglages
        ui.horizontal(|ui| {
            // Contrat: C = entrée seulement ; CLR = résultats seulement ; AC = tout
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(
                ui,
                "CLR",
                "Efface sorties + erreur + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);

            ui.separator();

            ui.label("Pile :");
            let mut cap = self.reglages.capacite as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut cap)
                    .speed(1)
                    .range(1..=CAPACITE_MAX as u32)
                    .suffix(" places"),
            );
            if resp.changed() {
                self.set_capacite(cap as usize);
            }

            let mut standard = self.reglages.mode == Mode::Standard;
            let resp = ui
                .checkbox(&mut standard, "^ à droite partout")
                .on_hover_text("Décoché : comportement historique (postfixe à gauche, préfixe à droite)");
            if resp.changed() {
                self.set_mode_standard(standard);
            }
        });

        ui.add_space(8.0);

        ui.horizontal_wrapped(|ui| {
            for s in ["(", ")", "+", "-", "*", "/", "^"] {
                self.bouton_insert(ui, s);
            }

            ui.separator();

            for s in ["a", "b", "c", "x", "y"] {
                self.bouton_insert(ui, s);
            }

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 32.0], egui::Button::new("="));
            if eq.clicked() {
                self.convertir_via_noyau();
            }
        });

        ui.add_space(8.0);

        self.ui_pave_numerique(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in [["7", "8", "9"], ["4", "5", "6"], ["1", "2", "3"]] {
                    for s in ligne {
                        self.bouton_insert(ui, s);
                    }
                    ui.end_row();
                }
                self.bouton_insert(ui, "0");
                self.bouton_action(ui, "DEL", "Efface le dernier symbole", Action::Backspace);
                ui.end_row();
            });
    }

    fn ui_resultats(&mut self, ui: &mut egui::Ui) {
        ui.label("Postfixe :");
        Self::champ_monospace(ui, "postfixe_out", &self.postfixe, 1);
        ui.label("Valeur (postfixe) :");
        Self::champ_monospace(ui, "valeur_postfixe_out", &self.valeur_postfixe, 1);

        ui.add_space(6.0);

        ui.label("Préfixe :");
        Self::champ_monospace(ui, "prefixe_out", &self.prefixe, 1);
        ui.label("Valeur (préfixe) :");
        Self::champ_monospace(ui, "valeur_prefixe_out", &self.valeur_prefixe, 1);

        if !self.avertissements.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().warn_fg_color, &self.avertissements);
        }
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                ui.label("Postfixe :");
                Self::champ_monospace(ui, "demarche_postfixe", &self.demarche.postfixe, 4);
                ui.add_space(4.0);
                ui.label("Préfixe :");
                Self::champ_monospace(ui, "demarche_prefixe", &self.demarche.prefixe, 4);
            });
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // lecture seule, cadre visuel via Frame + Label monospace
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => {
                    self.entree.pop();
                }
            }
            self.focus_entree = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, symbole: &str) {
        let resp = ui.add_sized([40.0, 28.0], egui::Button::new(symbole));
        if resp.clicked() {
            self.entree.push_str(symbole);
            self.focus_entree = true;
        }
    }

    /// Convertit via le noyau, puis dépose sorties/valeurs/démarche dans l’état UI.
    fn convertir_via_noyau(&mut self) {
        self.focus_entree = true;

        let valeurs = match ValeursOperandes::analyser(&self.valeurs) {
            Ok(v) => v,
            Err(e) => {
                self.set_erreur(e.to_string());
                return;
            }
        };

        match traiter_expression(&self.entree, &valeurs, &self.reglages) {
            Ok(rapport) => self.set_rapport(&rapport),
            Err(e) => self.set_erreur(e.to_string()),
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
    Backspace,
}
