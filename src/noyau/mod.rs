//! Noyau de calcul (f64)
//!
//! Organisation interne :
//! - operateurs.rs : registre + - * / (priorité, associativité, fonction)
//! - jetons.rs     : tokenisation
//! - rpn.rs        : shunting-yard + évaluation de la RPN
//! - erreur.rs     : erreurs classées
//! - format.rs     : affichage du résultat
//! - eval.rs       : pipeline complet

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod operateurs;
pub mod rpn;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErreurCalcul;
pub use eval::{eval_detaillee, eval_expression, Demarche};
pub use format::format_resultat;
