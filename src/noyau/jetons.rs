// src/noyau/jetons.rs

use super::erreur::{ErreurCalcul, Resultat};
use super::operateurs::Operateur;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    // texte brut du nombre, converti en f64 seulement à l’évaluation
    Num(String),
    Op(Operateur),

    LPar,
    RPar,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux [0-9.]+ (le nombre de '.' n’est PAS vérifié ici,
///   "1.2.3" échouera à la conversion)
/// - opérateurs + - * /
/// - parenthèses ( )
/// - espaces ignorés entre les jetons
pub fn tokenize(s: &str) -> Resultat<Vec<Tok>> {
    let mut out = Vec::new();
    let mut nombre = String::new();

    for (position, c) in s.chars().enumerate() {
        if c.is_ascii_digit() || c == '.' {
            nombre.push(c);
            continue;
        }

        if !nombre.is_empty() {
            out.push(Tok::Num(std::mem::take(&mut nombre)));
        }

        match c {
            '(' => out.push(Tok::LPar),
            ')' => out.push(Tok::RPar),
            _ if c.is_whitespace() => {}
            _ => match Operateur::depuis_symbole(c) {
                Some(op) => out.push(Tok::Op(op)),
                None => {
                    return Err(ErreurCalcul::CaractereInvalide {
                        caractere: c,
                        position,
                    })
                }
            },
        }
    }

    if !nombre.is_empty() {
        out.push(Tok::Num(nombre));
    }

    Ok(out)
}

/// Format utilitaire (debug/“démarche”) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let out: Vec<String> = tokens
        .iter()
        .map(|t| match t {
            Tok::Num(n) => n.clone(),
            Tok::Op(op) => op.to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        })
        .collect();
    out.join(" ")
}
