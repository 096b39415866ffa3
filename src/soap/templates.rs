#![forbid(unsafe_code)]

use quick_xml::escape::escape;

// ***************************************************************************
//                          SOAP Response Templates
// ***************************************************************************
// Both variants share one envelope: soapenv and tem are declared on the root,
// the header is empty and the result carries three tem:string slots
// (identifier, name, code).

// ---------------------------------------------------------------------------
// success_response:
// ---------------------------------------------------------------------------
/** Envelope for a known taxpayer.  The code slot is "1", the same value the
 * not-found variant carries; the real service's success code is unconfirmed.
 */
pub fn success_response(soapenv_ns: &str, tem_ns: &str, rnc_cedula: &str, nombre: &str) -> String {
    datos_del_contribuyente_envelope(soapenv_ns, tem_ns, rnc_cedula, nombre, "1")
}

// ---------------------------------------------------------------------------
// error_response:
// ---------------------------------------------------------------------------
/** Envelope for an unknown taxpayer: empty name slot plus the error code. */
pub fn error_response(soapenv_ns: &str, tem_ns: &str, rnc_cedula: &str, code: &str) -> String {
    datos_del_contribuyente_envelope(soapenv_ns, tem_ns, rnc_cedula, "", code)
}

// ***************************************************************************
//                             Private Functions
// ***************************************************************************
fn datos_del_contribuyente_envelope(soapenv_ns: &str, tem_ns: &str, rnc_cedula: &str,
                                    nombre: &str, code: &str) -> String {
    format!(
r#"<soapenv:Envelope xmlns:soapenv="{}" xmlns:tem="{}">
   <soapenv:Header/>
   <soapenv:Body>
      <tem:DatosDelContribuyenteResponse>
         <tem:DatosDelContribuyenteResult>
            <tem:string>{}</tem:string>
            <tem:string>{}</tem:string>
            <tem:string>{}</tem:string>
         </tem:DatosDelContribuyenteResult>
      </tem:DatosDelContribuyenteResponse>
   </soapenv:Body>
</soapenv:Envelope>
"#,
        escape_xml(soapenv_ns), escape_xml(tem_ns),
        escape_xml(rnc_cedula), escape_xml(nombre), escape_xml(code))
}

// Values came out of a parsed document, so markup characters must be
// re-escaped to keep the response well-formed.
fn escape_xml(s: &str) -> String {
    escape(s).into_owned()
}
