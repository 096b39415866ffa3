#![forbid(unsafe_code)]

use anyhow::{Result, anyhow};
use log::{info, LevelFilter};
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::path::Path;

use crate::utils::errors::Errors;

// ***************************************************************************
//                                Constants
// ***************************************************************************
// Logging.  The configuration file is looked up relative to the working directory.
const LOG4RS_CONFIG_FILE   : &str = "log4rs.yml";
const DEFAULT_LOG_PATTERN  : &str = "{d(%Y-%m-%d %H:%M:%S)} {h({l})} {t} - {m}{n}";

// Networking.
const DEFAULT_HTTP_ADDR    : &str = "0.0.0.0";
const DEFAULT_HTTP_PORT    : u16  = 5000;
const ENDPOINT_PATH        : &str = "/ServicioConsulta.asmx";

// XML namespaces.
pub const NAMESPACE_TEM     : &str = "http://tempuri.org/";
pub const NAMESPACE_SOAPENV : &str = "http://schemas.xmlsoap.org/soap/envelope/";

// Mock data.
const RNC_EXITOSO          : &str = "40225511704";
const NOMBRE_CONTRIBUYENTE : &str = "PABLO FERRERAS";
const CODIGO_NO_ENCONTRADO : &str = "1";

// ***************************************************************************
//                               Config Structs
// ***************************************************************************
// ---------------------------------------------------------------------------
// MockDataset:
// ---------------------------------------------------------------------------
/// The single taxpayer the mock knows about.  Every other identifier is
/// treated as not found.
#[derive(Debug, Clone)]
pub struct MockDataset {
    pub rnc_cedula: String,
    pub nombre: String,
}

impl MockDataset {
    /// Exact, case-sensitive match on the identifier.
    pub fn lookup(&self, rnc_cedula: &str) -> Option<&str> {
        if self.rnc_cedula == rnc_cedula {Some(&self.nombre)} else {None}
    }
}

impl Default for MockDataset {
    fn default() -> Self {
        Self {
            rnc_cedula: RNC_EXITOSO.to_string(),
            nombre: NOMBRE_CONTRIBUYENTE.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// MockConfig:
// ---------------------------------------------------------------------------
/// Immutable runtime configuration, built once in main and attached to the
/// route as request data.
#[derive(Debug, Clone)]
pub struct MockConfig {
    pub http_addr: String,
    pub http_port: u16,
    pub endpoint_path: String,
    pub tem_namespace: String,
    pub soapenv_namespace: String,
    pub dataset: MockDataset,
    pub not_found_code: String,
}

impl MockConfig {
    pub fn new() -> Self {
        MockConfig::default()
    }

    /// The address the listener binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.http_addr, self.http_port)
    }

    /// The full endpoint URL for display purposes.
    pub fn endpoint_url(&self) -> String {
        format!("http://{}{}", self.bind_addr(), self.endpoint_path)
    }
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            http_addr: DEFAULT_HTTP_ADDR.to_string(),
            http_port: DEFAULT_HTTP_PORT,
            endpoint_path: ENDPOINT_PATH.to_string(),
            tem_namespace: NAMESPACE_TEM.to_string(),
            soapenv_namespace: NAMESPACE_SOAPENV.to_string(),
            dataset: MockDataset::default(),
            not_found_code: CODIGO_NO_ENCONTRADO.to_string(),
        }
    }
}

// ***************************************************************************
//                               Log Functions
// ***************************************************************************
// ---------------------------------------------------------------------------
// init_log:
// ---------------------------------------------------------------------------
/** Initialize log4rs logging.  A log4rs.yml file in the working directory
 * takes precedence; without one, info level records go to the console.
 */
pub fn init_log() -> Result<()> {
    if Path::new(LOG4RS_CONFIG_FILE).is_file() {
        if let Err(e) = log4rs::init_file(LOG4RS_CONFIG_FILE, Default::default()) {
            let msg = format!("{}\n   {}", Errors::Log4rsInitialization(LOG4RS_CONFIG_FILE.to_string()), e);
            return Result::Err(anyhow!(msg));
        }
        info!("Log4rs initialized using: {}", LOG4RS_CONFIG_FILE);
        return Ok(());
    }

    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(DEFAULT_LOG_PATTERN)))
        .build();
    let logconfig = LogConfig::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(LevelFilter::Info))
        .map_err(|e| anyhow!(Errors::Log4rsInitialization(e.to_string())))?;
    log4rs::init_config(logconfig)
        .map_err(|e| anyhow!(Errors::Log4rsInitialization(e.to_string())))?;
    info!("Log4rs initialized with the default console configuration.");
    Ok(())
}
