// src/noyau/operateurs.rs
//
// Registre des opérateurs binaires (+ - * /).
// Ensemble fermé : un enum + une table constante, rien de mutable.

use std::fmt;

use super::erreur::{ErreurCalcul, Resultat};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Associativite {
    Gauche,
    Droite,
}

/// Métadonnées d’un opérateur : symbole, priorité (plus haut = lie plus fort),
/// associativité, fonction binaire (peut échouer).
#[derive(Debug)]
pub struct FicheOperateur {
    pub symbole: char,
    pub priorite: u8,
    pub associativite: Associativite,
    pub appliquer: fn(f64, f64) -> Resultat<f64>,
}

impl FicheOperateur {
    pub fn est_associatif_gauche(&self) -> bool {
        self.associativite == Associativite::Gauche
    }
}

fn plus(a: f64, b: f64) -> Resultat<f64> {
    Ok(a + b)
}

fn moins(a: f64, b: f64) -> Resultat<f64> {
    Ok(a - b)
}

fn fois(a: f64, b: f64) -> Resultat<f64> {
    Ok(a * b)
}

fn divise(a: f64, b: f64) -> Resultat<f64> {
    // zéro exact seulement (égalité flottante : -0.0 compris)
    if b == 0.0 {
        return Err(ErreurCalcul::DivisionParZero);
    }
    Ok(a / b)
}

/// Table unique, indexée dans l’ordre de l’enum.
static TABLE: [FicheOperateur; 4] = [
    FicheOperateur {
        symbole: '+',
        priorite: 1,
        associativite: Associativite::Gauche,
        appliquer: plus,
    },
    FicheOperateur {
        symbole: '-',
        priorite: 1,
        associativite: Associativite::Gauche,
        appliquer: moins,
    },
    FicheOperateur {
        symbole: '*',
        priorite: 2,
        associativite: Associativite::Gauche,
        appliquer: fois,
    },
    FicheOperateur {
        symbole: '/',
        priorite: 2,
        associativite: Associativite::Gauche,
        appliquer: divise,
    },
];

impl Operateur {
    pub const TOUS: [Operateur; 4] = [
        Operateur::Plus,
        Operateur::Moins,
        Operateur::Fois,
        Operateur::Divise,
    ];

    pub fn depuis_symbole(c: char) -> Option<Operateur> {
        match c {
            '+' => Some(Operateur::Plus),
            '-' => Some(Operateur::Moins),
            '*' => Some(Operateur::Fois),
            '/' => Some(Operateur::Divise),
            _ => None,
        }
    }

    /// Fiche de l’opérateur. La précondition « symbole valide » est portée
    /// par le type : on ne peut pas demander la fiche d’un non-opérateur.
    pub fn fiche(self) -> &'static FicheOperateur {
        &TABLE[self as usize]
    }

    pub fn symbole(self) -> char {
        self.fiche().symbole
    }

    pub fn priorite(self) -> u8 {
        self.fiche().priorite
    }

    pub fn appliquer(self, a: f64, b: f64) -> Resultat<f64> {
        (self.fiche().appliquer)(a, b)
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}

/// Vrai ssi `symbole` est exactement "+", "-", "*" ou "/".
pub fn est_operateur(symbole: &str) -> bool {
    recherche(symbole).is_some()
}

/// Recherche par texte : un seul caractère, et seulement un opérateur connu.
pub fn recherche(symbole: &str) -> Option<&'static FicheOperateur> {
    let mut it = symbole.chars();
    match (it.next(), it.next()) {
        (Some(c), None) => Operateur::depuis_symbole(c).map(Operateur::fiche),
        _ => None,
    }
}
