#![forbid(unsafe_code)]

use roxmltree::{Document, Node, ParsingOptions};

use crate::utils::errors::Errors;

/// Local name of the element carrying the taxpayer identifier.
pub const RNC_CEDULA_TAG: &str = "RNC_Cedula";

// ---------------------------------------------------------------------------
// extract_rnc_cedula:
// ---------------------------------------------------------------------------
/** Find the first {namespace}RNC_Cedula element anywhere in the document and
 * return its trimmed text.  The prefix the client used does not matter, only
 * the namespace it resolves to.  Documents may carry a DTD.
 *
 * Bodies that aren't UTF-8 or well-formed XML yield Errors::XmlParse.  A
 * missing element, or one with blank text, yields Errors::MissingField.
 */
pub fn extract_rnc_cedula(body: &[u8], namespace: &str) -> Result<String, Errors> {
    let text = std::str::from_utf8(body).map_err(|e| Errors::XmlParse(e.to_string()))?;
    let opts = ParsingOptions { allow_dtd: true, ..ParsingOptions::default() };
    let doc = Document::parse_with_options(text, opts).map_err(|e| Errors::XmlParse(e.to_string()))?;

    let value = doc
        .descendants()
        .find(|n| n.has_tag_name((namespace, RNC_CEDULA_TAG)))
        .map(leading_text)
        .unwrap_or_default();

    let value = value.trim();
    if value.is_empty() {
        return Err(Errors::MissingField(RNC_CEDULA_TAG.to_string()));
    }
    Ok(value.to_string())
}

// ---------------------------------------------------------------------------
// leading_text:
// ---------------------------------------------------------------------------
/** Character data ahead of the element's first child element.  Comments and
 * processing instructions split the text but don't end it.
 */
fn leading_text(node: Node) -> String {
    node.children()
        .take_while(|c| !c.is_element())
        .filter(|c| c.is_text())
        .filter_map(|c| c.text())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::extract_rnc_cedula;
    use crate::utils::errors::Errors;

    const NS: &str = "http://tempuri.org/";

    fn envelope(inner: &str) -> String {
        format!(
            r#"<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/" xmlns:tem="http://tempuri.org/">
   <soapenv:Header/>
   <soapenv:Body>
      <tem:DatosDelContribuyente>{}</tem:DatosDelContribuyente>
   </soapenv:Body>
</soapenv:Envelope>"#,
            inner
        )
    }

    #[test]
    fn extracts_and_trims() {
        let xml = envelope("<tem:RNC_Cedula>\n  40225511704 \n</tem:RNC_Cedula>");
        assert_eq!(extract_rnc_cedula(xml.as_bytes(), NS).unwrap(), "40225511704");
    }

    #[test]
    fn prefix_does_not_matter() {
        let xml = r#"<e:Envelope xmlns:e="http://schemas.xmlsoap.org/soap/envelope/"><e:Body>
            <x:DatosDelContribuyente xmlns:x="http://tempuri.org/"><x:RNC_Cedula>123</x:RNC_Cedula></x:DatosDelContribuyente>
            </e:Body></e:Envelope>"#;
        assert_eq!(extract_rnc_cedula(xml.as_bytes(), NS).unwrap(), "123");

        let xml = r#"<Envelope><Body><RNC_Cedula xmlns="http://tempuri.org/">456</RNC_Cedula></Body></Envelope>"#;
        assert_eq!(extract_rnc_cedula(xml.as_bytes(), NS).unwrap(), "456");
    }

    #[test]
    fn first_match_wins() {
        let xml = envelope("<tem:RNC_Cedula>111</tem:RNC_Cedula><tem:RNC_Cedula>222</tem:RNC_Cedula>");
        assert_eq!(extract_rnc_cedula(xml.as_bytes(), NS).unwrap(), "111");
    }

    #[test]
    fn wrong_namespace_is_missing() {
        let xml = r#"<a:Envelope xmlns:a="urn:other"><a:RNC_Cedula>40225511704</a:RNC_Cedula></a:Envelope>"#;
        assert!(matches!(extract_rnc_cedula(xml.as_bytes(), NS), Err(Errors::MissingField(_))));

        let xml = "<Envelope><RNC_Cedula>40225511704</RNC_Cedula></Envelope>";
        assert!(matches!(extract_rnc_cedula(xml.as_bytes(), NS), Err(Errors::MissingField(_))));
    }

    #[test]
    fn blank_is_missing() {
        for inner in ["<tem:RNC_Cedula>   </tem:RNC_Cedula>", "<tem:RNC_Cedula/>", "<tem:Other>x</tem:Other>"] {
            let xml = envelope(inner);
            assert!(matches!(extract_rnc_cedula(xml.as_bytes(), NS), Err(Errors::MissingField(_))), "{}", inner);
        }
    }

    #[test]
    fn comments_do_not_split_the_value() {
        let xml = envelope("<tem:RNC_Cedula><!-- c -->40225511704</tem:RNC_Cedula>");
        assert_eq!(extract_rnc_cedula(xml.as_bytes(), NS).unwrap(), "40225511704");

        let xml = envelope("<tem:RNC_Cedula>4022<!-- c --><?pi x?>5511704</tem:RNC_Cedula>");
        assert_eq!(extract_rnc_cedula(xml.as_bytes(), NS).unwrap(), "40225511704");
    }

    #[test]
    fn text_stops_at_child_element() {
        let xml = envelope("<tem:RNC_Cedula> 123 <tem:x>456</tem:x>789</tem:RNC_Cedula>");
        assert_eq!(extract_rnc_cedula(xml.as_bytes(), NS).unwrap(), "123");

        let xml = envelope("<tem:RNC_Cedula><tem:x>456</tem:x></tem:RNC_Cedula>");
        assert!(matches!(extract_rnc_cedula(xml.as_bytes(), NS), Err(Errors::MissingField(_))));
    }

    #[test]
    fn doctype_is_accepted() {
        let xml = format!(r#"<?xml version="1.0"?><!DOCTYPE soapenv:Envelope>{}"#,
                          envelope("<tem:RNC_Cedula>40225511704</tem:RNC_Cedula>"));
        assert_eq!(extract_rnc_cedula(xml.as_bytes(), NS).unwrap(), "40225511704");
    }

    #[test]
    fn malformed_is_parse_error() {
        assert!(matches!(extract_rnc_cedula(b"<not-xml", NS), Err(Errors::XmlParse(_))));
        assert!(matches!(extract_rnc_cedula(b"", NS), Err(Errors::XmlParse(_))));
        assert!(matches!(extract_rnc_cedula(&[0x3c, 0xff, 0xfe, 0x3e], NS), Err(Errors::XmlParse(_))));
    }
}
