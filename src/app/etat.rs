//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, erreur, démarche)
//! et offrir des opérations simples (C/AC/OK) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de parsing).
//! - Actions déterministes, sans effet de bord caché.

use crate::noyau::{Demarche, ErreurCalcul};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String,
    pub demarche: Demarche,

    // Message de la boîte d’erreur ; Some => fenêtre ouverte jusqu’à « OK ».
    pub erreur: Option<String>,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl AppCalc {
    pub fn new() -> Self {
        Self {
            // au lancement, on veut pouvoir taper tout de suite
            focus_entree: true,
            ..Default::default()
        }
    }

    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale.
    pub fn reset_total(&mut self) {
        *self = Self::new();
    }

    /// C : effacer seulement l’entrée (sans toucher au résultat).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// OK de la boîte d’erreur.
    pub fn fermer_erreur(&mut self) {
        self.erreur = None;
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// On CONSERVE `resultat` (dernier résultat) ; la démarche, elle, n’est plus fiable.
    pub fn set_erreur(&mut self, e: &ErreurCalcul) {
        self.erreur = Some(message_utilisateur(e));
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat (texte déjà formaté) + démarche.
    pub fn set_resultat(&mut self, resultat: impl Into<String>, demarche: Demarche) {
        self.erreur = None;
        self.resultat = resultat.into();
        self.demarche = demarche;
        self.focus_entree = true;
    }
}

/// Message affiché pour chaque genre d’erreur du noyau.
///
/// Division par zéro : message dédié. Saisie mal formée : « format invalide »
/// suivi du détail. Erreur interne : détail brut, jamais avalé.
pub fn message_utilisateur(e: &ErreurCalcul) -> String {
    match e {
        ErreurCalcul::DivisionParZero => "Erreur : division par zéro.".to_string(),
        ErreurCalcul::Interne(_) => format!("Erreur : {e}"),
        ErreurCalcul::CaractereInvalide { .. }
        | ErreurCalcul::ParenthesesNonAppariees
        | ErreurCalcul::OperandesInsuffisantes { .. }
        | ErreurCalcul::NombreInvalide(_)
        | ErreurCalcul::ExpressionMalformee { .. } => {
            format!("Erreur : format invalide ({e}).")
        }
    }
}
