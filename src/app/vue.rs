// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - La vue ne modifie jamais l’état directement : chaque clic / touche devient
//   un Message, appliqué par AppCalc::appliquer
// - Clavier : chiffres / opérateurs / parenthèses tapés, Enter évalue,
//   Backspace efface, Escape = "C"

use eframe::egui;

use super::etat::{AppCalc, Message};

/// Pavé (disposition d’origine, 4 colonnes).
const PAVE: [[&str; 4]; 5] = [
    ["C", "()", "%", "/"],
    ["7", "8", "9", "*"],
    ["4", "5", "6", "-"],
    ["1", "2", "3", "+"],
    ["+/-", "0", ".", "="],
];

const TAILLE_BOUTON: [f32; 2] = [64.0, 48.0];

/// Traduit le libellé d’un bouton en message.
pub fn message_bouton(label: &str) -> Option<Message> {
    match label {
        "C" => Some(Message::Effacer),
        "()" => Some(Message::Parentheses),
        "+/-" => Some(Message::BasculerSigne),
        "=" => Some(Message::Egal),
        _ => {
            let mut chars = label.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if est_char_saisie(c) => Some(Message::Inserer(c)),
                _ => None,
            }
        }
    }
}

/// Caractères qu’un bouton ou le clavier peut ajouter à l’entrée.
fn est_char_saisie(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | '*' | '/' | '%' | '(' | ')')
}

/// Traduit les événements clavier de la frame en messages.
///
/// `widget_focus` : un widget a le focus clavier ; egui lui donne Enter
/// (clic sur le bouton focalisé), on ne l’interprète donc pas comme "=".
pub fn messages_clavier(events: &[egui::Event], widget_focus: bool) -> Vec<Message> {
    let mut out = Vec::new();
    for ev in events {
        match ev {
            egui::Event::Text(t) => {
                for c in t.chars() {
                    if c == '=' {
                        out.push(Message::Egal);
                    } else if est_char_saisie(c) {
                        out.push(Message::Inserer(c));
                    }
                }
            }
            egui::Event::Key {
                key, pressed: true, ..
            } => match key {
                egui::Key::Enter if !widget_focus => out.push(Message::Egal),
                egui::Key::Backspace => out.push(Message::Retour),
                egui::Key::Escape => out.push(Message::Effacer),
                _ => {}
            },
            _ => {}
        }
    }
    out
}

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculator");
                ui.add_space(6.0);

                self.ui_afficheur(ui);

                ui.add_space(8.0);

                self.ui_pave(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_afficheur(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                let texte = egui::RichText::new(self.affichage()).monospace().size(24.0);
                if self.en_erreur() {
                    ui.label(texte.color(ui.visuals().error_fg_color));
                } else {
                    ui.label(texte);
                }

                // résultat seulement s’il existe
                if !self.resultat.is_empty() {
                    ui.label(
                        egui::RichText::new(format!("= {}", self.resultat))
                            .monospace()
                            .size(18.0)
                            .strong(),
                    );
                }
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for rangee in PAVE {
                    for label in rangee {
                        let resp = ui.add_sized(TAILLE_BOUTON, egui::Button::new(label));
                        if resp.clicked() {
                            // pas de focus résiduel : Enter doit rester "="
                            resp.surrender_focus();
                            if let Some(msg) = message_bouton(label) {
                                self.appliquer(msg);
                            }
                        }
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &self.demarche.rpn);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.monospace(contenu);
                });
            });
    }
}
