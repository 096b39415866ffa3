#![forbid(unsafe_code)]

use anyhow::Result;
use log::info;
use poem::listener::TcpListener;

// Mock Utilities
use crate::soap::consulta_route;
use crate::utils::config::{init_log, MockConfig};
use crate::utils::errors::Errors;

// Modules
mod soap;
mod utils;

// ***************************************************************************
//                                Constants
// ***************************************************************************
const SERVER_NAME : &str = "DgiiSoapMock"; // for poem logging

// From cargo.toml.
const MOCK_VERSION: Option<&str> = option_env!("CARGO_PKG_VERSION");

// ---------------------------------------------------------------------------
// main:
// ---------------------------------------------------------------------------
#[tokio::main]
async fn main() -> Result<()> {
    // --------------- Initialize Mock ----------------
    // Configure our log.
    init_log()?;

    // The configuration is fixed at compile time and never changes.
    let cfg = MockConfig::new();
    info!("{}", Errors::InputParms(format!("{:#?}", cfg)));
    info!("*** Running dgii_soap_mock={}", MOCK_VERSION.unwrap_or("unknown"));
    print_banner(&cfg);

    // ------------------ Main Loop -------------------
    let addr = cfg.bind_addr();
    let app = consulta_route(cfg);
    poem::Server::new(TcpListener::bind(addr))
        .name(SERVER_NAME)
        .run(app)
        .await
        .map_err(Errors::from)?;
    Ok(())
}

// ***************************************************************************
//                             Private Functions
// ***************************************************************************
// ---------------------------------------------------------------------------
// print_banner:
// ---------------------------------------------------------------------------
fn print_banner(cfg: &MockConfig) {
    let rule = "-".repeat(50);
    println!("{}", rule);
    println!("Iniciando DGII SOAP Mock Server...");
    println!("Endpoint del Mock: {}", cfg.endpoint_url());
    println!("RNC de Éxito: {} -> Retornará {}", cfg.dataset.rnc_cedula, cfg.dataset.nombre);
    println!("Cualquier otro RNC -> Retornará Código {} (Error)", cfg.not_found_code);
    println!("{}", rule);
}
