// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Champ d’entrée : Enter évalue (quand le champ a le focus)
// - Bouton « Calculer » + pavé numérique (focus redonné après clic)
// - Résultat + démarche (jetons, RPN)
// - Erreur : fenêtre centrée avec « OK » (équivalent boîte de message)

use eframe::egui;
use tracing::{error, info, warn};

use super::etat::AppCalc;
use crate::noyau::{eval_detaillee, format_resultat, operateurs::est_operateur};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice");
        ui.add_space(6.0);

        self.ui_entree(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_resultat(ui);

        ui.add_space(8.0);
        self.ui_demarche(ui);

        self.ui_boite_erreur(ui.ctx());
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: (2 + 3) * 4")
                .id_salt("entree_edit")
                .code_editor(),
        );

        // Pas de focus volé tant que la boîte d’erreur est ouverte.
        if self.focus_entree && self.erreur.is_none() {
            resp.request_focus();
            self.focus_entree = false;
        }

        // Enter : TextEdit singleline perd le focus sur Enter, d’où lost_focus().
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.lost_focus() && enter {
            self.eval_via_noyau();
        }

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            let calc = ui.add_sized([96.0, 30.0], egui::Button::new("Calculer"));
            if calc.clicked() {
                self.eval_via_noyau();
            }

            ui.separator();

            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);
            self.bouton_action(ui, "DEL", "Efface le dernier symbole", Action::Backspace);
        });

        ui.add_space(8.0);
        self.ui_pave_numerique(ui);
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_insert(ui, "7", InsertKind::Digit);
                self.bouton_insert(ui, "8", InsertKind::Digit);
                self.bouton_insert(ui, "9", InsertKind::Digit);
                self.bouton_insert(ui, "/", InsertKind::Op);
                ui.end_row();

                self.bouton_insert(ui, "4", InsertKind::Digit);
                self.bouton_insert(ui, "5", InsertKind::Digit);
                self.bouton_insert(ui, "6", InsertKind::Digit);
                self.bouton_insert(ui, "*", InsertKind::Op);
                ui.end_row();

                self.bouton_insert(ui, "1", InsertKind::Digit);
                self.bouton_insert(ui, "2", InsertKind::Digit);
                self.bouton_insert(ui, "3", InsertKind::Digit);
                self.bouton_insert(ui, "-", InsertKind::Op);
                ui.end_row();

                self.bouton_insert(ui, "0", InsertKind::Digit);
                self.bouton_insert(ui, ".", InsertKind::Digit);
                self.bouton_insert(ui, "(", InsertKind::OpenParen);
                self.bouton_insert(ui, "+", InsertKind::Op);
                ui.end_row();

                self.bouton_insert(ui, ")", InsertKind::CloseParen);
                ui.end_row();
            });
    }

    fn ui_resultat(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Résultat :");
            ui.monospace(&self.resultat);
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

    fn ui_boite_erreur(&mut self, ctx: &egui::Context) {
        let Some(msg) = self.erreur.clone() else {
            return;
        };

        let mut ok = false;
        egui::Window::new("Erreur")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.colored_label(ui.visuals().error_fg_color, msg);
                ui.add_space(6.0);
                ok = ui.button("OK").clicked();
            });

        let echap = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if ok || echap {
            self.fermer_erreur();
        }
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => self.backspace_entree(),
            }
            self.focus_entree = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str, kind: InsertKind) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(label));
        if resp.clicked() {
            self.inserer(label, kind);
        }
    }

    /// Insertion depuis le pavé, avec espacement automatique autour des opérateurs.
    fn inserer(&mut self, to_insert: &str, kind: InsertKind) {
        match kind {
            InsertKind::CloseParen => {
                self.trim_fin();
                self.entree.push_str(to_insert);
            }
            InsertKind::OpenParen => {
                let last = self.entree.chars().rev().find(|c| !c.is_whitespace());
                if matches!(last, Some(c) if c.is_ascii_digit() || c == ')') {
                    self.entree.push(' ');
                }
                self.entree.push_str(to_insert);
            }
            InsertKind::Op => {
                self.trim_fin();
                if !self.entree.is_empty() {
                    self.entree.push(' ');
                }
                self.entree.push_str(to_insert);
                self.entree.push(' ');
            }
            InsertKind::Digit => {
                // chiffres: pas d’espaces auto
                self.entree.push_str(to_insert);
            }
        }

        self.focus_entree = true;
    }

    /// Backspace : un symbole, espaces d’encadrement compris (" + " part d’un coup).
    fn backspace_entree(&mut self) {
        self.trim_fin();
        let dernier_op = self
            .entree
            .chars()
            .last()
            .is_some_and(|c| est_operateur(c.encode_utf8(&mut [0u8; 4])));
        self.entree.pop();
        if dernier_op {
            self.trim_fin();
        }
    }

    fn trim_fin(&mut self) {
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
    }

    /// Évalue l’expression via le noyau, puis dépose résultat/démarche (ou erreur) dans l’état UI.
    fn eval_via_noyau(&mut self) {
        match eval_detaillee(&self.entree) {
            Ok(ev) => {
                let txt = format_resultat(ev.valeur);
                info!(expression = %self.entree, resultat = %txt, "calcul");
                self.set_resultat(txt, ev.demarche);
            }
            Err(e) => {
                if e.est_interne() {
                    error!(expression = %self.entree, erreur = %e, "faute interne du noyau");
                } else {
                    warn!(expression = %self.entree, erreur = %e, "saisie refusée");
                }
                self.set_erreur(&e);
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ResetTotal,
    Backspace,
}

#[derive(Clone, Copy, Debug)]
enum InsertKind {
    Digit,
    Op,
    OpenParen,
    CloseParen,
}
