#![forbid(unsafe_code)]

use poem::http::StatusCode;
use poem::web::Data;
use poem::{handler, Request, Response};
use log::{error, info, warn};

use crate::soap::extractor::extract_rnc_cedula;
use crate::soap::templates::{error_response, success_response};
use crate::utils::config::MockConfig;
use crate::utils::errors::Errors;
use crate::utils::mock_utils::{debug_request, timestamp_hms};

// ***************************************************************************
//                                Constants
// ***************************************************************************
const CONTENT_TYPE_XML  : &str = "text/xml";
const MSG_XML_INVALIDO  : &str = "Error: Cuerpo XML de la solicitud inválido.";
const MSG_RNC_AUSENTE   : &str = "Error: RNC_CEDULA no encontrado en el body SOAP.";
const MSG_ERROR_INTERNO : &str = "Error interno del servidor mock.";

// ------------------- HTTP Status Codes -------------------
fn make_http_200(soap: String) -> Response {
    make_response(StatusCode::OK, soap)
}
fn make_http_400(msg: &str) -> Response {
    make_response(StatusCode::BAD_REQUEST, msg.to_string())
}
pub fn make_http_500() -> Response {
    make_response(StatusCode::INTERNAL_SERVER_ERROR, MSG_ERROR_INTERNO.to_string())
}
fn make_response(status: StatusCode, body: String) -> Response {
    Response::builder()
        .status(status)
        .content_type(CONTENT_TYPE_XML)
        .body(body)
}

// ***************************************************************************
//                          DatosDelContribuyente
// ***************************************************************************
// ---------------------------------------------------------------------------
// datos_del_contribuyente:
// ---------------------------------------------------------------------------
/** The one mocked operation.  Lookup misses are business outcomes and still
 * return 200; only unusable requests get 4xx and internal failures 500.
 */
#[handler]
pub async fn datos_del_contribuyente(http_req: &Request, Data(cfg): Data<&MockConfig>,
                                     body: poem::Result<Vec<u8>>) -> Response {
    let body = match body {
        Ok(b) => b,
        Err(e) => {
            let e = Errors::Unhandled(e.to_string());
            error!("{}", e);
            return make_http_500();
        }
    };
    debug_request(http_req, &body);

    match process(cfg, &body) {
        Ok(soap) => make_http_200(soap),
        Err(Errors::XmlParse(e)) => {
            warn!("{}", Errors::XmlParse(e));
            make_http_400(MSG_XML_INVALIDO)
        },
        Err(Errors::MissingField(field)) => {
            error!("Error: {} no encontrado en el body SOAP.", field);
            make_http_400(MSG_RNC_AUSENTE)
        },
        Err(e) => {
            error!("{}", Errors::Unhandled(e.to_string()));
            make_http_500()
        },
    }
}

// ***************************************************************************
//                             Private Functions
// ***************************************************************************
// ---------------------------------------------------------------------------
// process:
// ---------------------------------------------------------------------------
/** Extract the identifier, look it up and render the matching envelope. */
fn process(cfg: &MockConfig, body: &[u8]) -> Result<String, Errors> {
    let rnc_cedula = extract_rnc_cedula(body, &cfg.tem_namespace)?;
    info!("[{}] Petición recibida para RNC/CÉDULA: {}", timestamp_hms(), rnc_cedula);

    let soap = match cfg.dataset.lookup(&rnc_cedula) {
        Some(nombre) => success_response(&cfg.soapenv_namespace, &cfg.tem_namespace, &rnc_cedula, nombre),
        None => error_response(&cfg.soapenv_namespace, &cfg.tem_namespace, &rnc_cedula, &cfg.not_found_code),
    };
    Ok(soap)
}
