//! Noyau — erreurs classées
//!
//! Chaque échec du pipeline (jetons -> RPN -> valeur) est détecté à son point
//! d’origine et remonte tel quel à l’appelant via `?`. Aucune valeur par défaut.

use thiserror::Error;

use super::operateurs::Operateur;

/// Résultat du noyau.
pub type Resultat<T> = std::result::Result<T, ErreurCalcul>;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ErreurCalcul {
    /// Caractère hors alphabet (chiffres, '.', opérateurs, parenthèses, espaces).
    #[error("caractère inattendu: '{caractere}' (position {position})")]
    CaractereInvalide { caractere: char, position: usize },

    /// '(' jamais fermée ou ')' sans ouvrante.
    #[error("parenthèses non appariées")]
    ParenthesesNonAppariees,

    /// Opérande droit de '/' exactement égal à 0.0.
    #[error("division par zéro")]
    DivisionParZero,

    /// Opérateur évalué avec moins de deux valeurs sur la pile.
    #[error("opérandes insuffisants pour '{operateur}'")]
    OperandesInsuffisantes { operateur: Operateur },

    /// Texte d’un jeton nombre non convertible en f64 (ex: "1.2.3", ".").
    #[error("nombre invalide: {0:?}")]
    NombreInvalide(String),

    /// Évaluation terminée avec 0 ou plusieurs valeurs résiduelles.
    #[error("expression invalide ({valeurs} valeur(s) restante(s))")]
    ExpressionMalformee { valeurs: usize },

    /// Invariant interne violé : c’est un bug, pas une faute de saisie.
    #[error("erreur interne: {0}")]
    Interne(String),
}

impl ErreurCalcul {
    /// Vrai pour une faute interne (bug), faux pour une saisie invalide.
    pub fn est_interne(&self) -> bool {
        matches!(self, Self::Interne(_))
    }
}
