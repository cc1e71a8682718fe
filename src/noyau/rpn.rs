// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur f64
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis évaluer la RPN avec une pile de valeurs
//
// Règles:
// - pas de moins unaire : "-5" donne "5 -", qui échoue faute d’opérandes
// - toute erreur interrompt immédiatement (pas de résultat partiel)

use tracing::trace;

use super::erreur::{ErreurCalcul, Resultat};
use super::jetons::Tok;
use super::operateurs::{Associativite, FicheOperateur};

/// Faut-il sortir `haut` (sommet de pile) avant d’empiler `op` ?
fn doit_depiler(op: &FicheOperateur, haut: &FicheOperateur) -> bool {
    match op.associativite {
        Associativite::Gauche => op.priorite <= haut.priorite,
        Associativite::Droite => op.priorite < haut.priorite,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(2), Op(+), Num(3), Op(*), Num(4)]
///   rpn:    [Num(2), Num(3), Num(4), Op(*), Op(+)]
pub fn to_rpn(tokens: &[Tok]) -> Resultat<Vec<Tok>> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => out.push(tok),

            Tok::Op(op) => {
                // dépile tant que le sommet est un opérateur qui lie au moins aussi fort
                while let Some(&Tok::Op(haut)) = ops.last() {
                    if !doit_depiler(op.fiche(), haut.fiche()) {
                        break;
                    }
                    trace!(%haut, avant = %op, "dépile");
                    ops.pop();
                    out.push(Tok::Op(haut));
                }
                ops.push(Tok::Op(op));
            }

            Tok::LPar => ops.push(tok),

            Tok::RPar => loop {
                match ops.pop() {
                    Some(Tok::LPar) => break,
                    Some(haut) => out.push(haut),
                    None => return Err(ErreurCalcul::ParenthesesNonAppariees),
                }
            },
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar | Tok::RPar) {
            return Err(ErreurCalcul::ParenthesesNonAppariees);
        }
        out.push(op);
    }

    Ok(out)
}

/// Évalue une RPN.
///
/// Le sommet est l’opérande DROIT : "8 3 -" vaut 5.
pub fn eval_rpn(rpn: &[Tok]) -> Resultat<f64> {
    let mut st: Vec<f64> = Vec::new();

    for tok in rpn {
        match tok {
            Tok::Num(texte) => {
                let v = texte
                    .parse::<f64>()
                    .map_err(|_| ErreurCalcul::NombreInvalide(texte.clone()))?;
                st.push(v);
            }

            Tok::Op(op) => {
                // b d’abord (sommet), puis a
                let (Some(b), Some(a)) = (st.pop(), st.pop()) else {
                    return Err(ErreurCalcul::OperandesInsuffisantes { operateur: *op });
                };

                let r = op.appliquer(a, b)?;
                trace!(a, %op, b, r, "applique");
                st.push(r);
            }

            // to_rpn ne sort jamais de parenthèse
            Tok::LPar | Tok::RPar => {
                return Err(ErreurCalcul::Interne(
                    "parenthèse inattendue en RPN".into(),
                ))
            }
        }
    }

    match st.as_slice() {
        [v] => Ok(*v),
        _ => Err(ErreurCalcul::ExpressionMalformee { valeurs: st.len() }),
    }
}
