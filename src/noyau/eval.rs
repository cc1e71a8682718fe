//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN (shunting-yard) -> pile de valeurs -> f64
//!
//! Sans état : chaque appel alloue ses jetons et ses piles, rien n’est partagé
//! entre deux appels (hors table constante des opérateurs).

use tracing::debug;

use super::erreur::Resultat;
use super::jetons::{format_tokens, tokenize, Tok};
use super::rpn::{eval_rpn, to_rpn};

/// Démarche affichable : jetons + RPN, en texte.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub valeur: f64,
    pub demarche: Demarche,
}

/// Pipeline commun : jetons, RPN, valeur. Les deux API publiques passent ici.
fn pipeline(expr_str: &str) -> Resultat<(Vec<Tok>, Vec<Tok>, f64)> {
    let jetons = tokenize(expr_str)?;
    let rpn = to_rpn(&jetons)?;
    let valeur = eval_rpn(&rpn)?;
    debug!(expression = expr_str, valeur, "évaluée");
    Ok((jetons, rpn, valeur))
}

/// API publique : évalue une expression infixe et retourne sa valeur f64.
/// Ne met pas la démarche en texte.
pub fn eval_expression(expr_str: &str) -> Resultat<f64> {
    pipeline(expr_str).map(|(_, _, valeur)| valeur)
}

/// Comme `eval_expression`, avec en plus la démarche (jetons, RPN).
pub fn eval_detaillee(expr_str: &str) -> Resultat<Evaluation> {
    let (jetons, rpn, valeur) = pipeline(expr_str)?;
    Ok(Evaluation {
        valeur,
        demarche: Demarche {
            jetons: format_tokens(&jetons),
            rpn: format_tokens(&rpn),
        },
    })
}
