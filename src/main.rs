// src/main.rs
//
// Calculatrice — point d’entrée NATIF + WEB (WASM)
// ------------------------------------------------
// - NATIF : options clap ; avec une expression => calcul dans le terminal,
//           sinon eframe::run_native
// - WEB   : eframe::WebRunner + WebOptions + <canvas>
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;
#[cfg(not(target_arch = "wasm32"))]
mod config;
mod noyau;

use app::AppCalc;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use clap::Parser;
    use std::process::ExitCode;

    let config = config::Config::parse();
    installer_journal(&config.log);

    if let Some(expression) = config.expression.as_deref() {
        return calcul_terminal(expression, config.demarche);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([400.0, 420.0])
            .with_min_inner_size([320.0, 360.0]),
        ..Default::default()
    };

    let r = eframe::run_native(
        TITRE_APP,
        options,
        Box::new(|_cc| Ok(Box::new(AppCalc::new()))),
    );

    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(erreur = %e, "fenêtre impossible à ouvrir");
            ExitCode::FAILURE
        }
    }
}

/// Journal sur stderr : RUST_LOG prioritaire, sinon le filtre `--log`.
#[cfg(not(target_arch = "wasm32"))]
fn installer_journal(filtre: &str) {
    use tracing_subscriber::EnvFilter;

    let (filter, refus) = match EnvFilter::try_from_default_env() {
        Ok(f) => (f, None),
        Err(_) => filtre_ou_defaut(filtre),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    // après l’installation, sinon le message serait perdu
    if let Some(e) = refus {
        tracing::warn!(filtre, erreur = %e, "filtre --log invalide, repli sur \"{FILTRE_DEFAUT}\"");
    }
}

#[cfg(not(target_arch = "wasm32"))]
const FILTRE_DEFAUT: &str = "warn";

/// Filtre `--log` ; une directive mal formée retombe sur `warn` et l’erreur est rendue.
#[cfg(not(target_arch = "wasm32"))]
fn filtre_ou_defaut(
    filtre: &str,
) -> (
    tracing_subscriber::EnvFilter,
    Option<tracing_subscriber::filter::ParseError>,
) {
    use tracing_subscriber::EnvFilter;

    match EnvFilter::try_new(filtre) {
        Ok(f) => (f, None),
        Err(e) => (EnvFilter::new(FILTRE_DEFAUT), Some(e)),
    }
}

/// Mode terminal : résultat sur stdout (code 0) ou message sur stderr (code 1).
#[cfg(not(target_arch = "wasm32"))]
fn calcul_terminal(expression: &str, demarche: bool) -> std::process::ExitCode {
    use std::process::ExitCode;

    let r = if demarche {
        noyau::eval_detaillee(expression).map(|ev| {
            println!("Jetons : {}", ev.demarche.jetons);
            println!("RPN    : {}", ev.demarche.rpn);
            ev.valeur
        })
    } else {
        noyau::eval_expression(expression)
    };

    match r {
        Ok(v) => {
            println!("{}", noyau::format_resultat(v));
            ExitCode::SUCCESS
        }
        Err(e) => {
            if e.est_interne() {
                tracing::error!(expression, erreur = %e, "faute interne du noyau");
            }
            eprintln!("{}", app::message_utilisateur(&e));
            ExitCode::FAILURE
        }
    }
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let canvas: HtmlCanvasElement = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::new(AppCalc::new()))),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
