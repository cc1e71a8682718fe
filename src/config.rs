// src/config.rs
//
// Options de ligne de commande (natif).
// Sans expression : on ouvre la fenêtre ; avec : calcul direct dans le terminal.

use clap::Parser;

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(version, about = "Calculatrice : + - * / et parenthèses (shunting-yard)", long_about = None)]
pub struct Config {
    /// Expression à évaluer sans ouvrir de fenêtre (ex: "(2 + 3) * 4")
    pub expression: Option<String>,

    /// Affiche aussi les jetons et la RPN
    #[arg(short, long)]
    pub demarche: bool,

    /// Filtre de journalisation (syntaxe RUST_LOG), ignoré si RUST_LOG est défini
    #[arg(long, default_value = "warn")]
    pub log: String,
}
