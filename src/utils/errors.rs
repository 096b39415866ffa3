#![forbid(unsafe_code)]

use thiserror::Error;

/// Error enumerates the errors returned by this application.
#[derive(Error, Debug)]
pub enum Errors {
    /// Mock configuration logging.
    #[error("dgii_soap_mock configuration:\n{}", .0)]
    InputParms(String),

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    /// Inaccessible or invalid logger configuration.
    #[error("Unable to initialize Log4rs logging: {}", .0)]
    Log4rsInitialization(String),

    /// The request body is not well-formed XML (or not UTF-8).
    #[error("Invalid XML request body: {}", .0)]
    XmlParse(String),

    /// The request is well-formed but the lookup field is absent or blank.
    #[error("Required field {} not found in the SOAP body", .0)]
    MissingField(String),

    /// Anything else that went wrong while handling a request.
    #[error("Unexpected mock server failure: {}", .0)]
    Unhandled(String),
}

#[cfg(test)]
mod tests {
    use super::Errors;

    #[test]
    fn display_names_the_field() {
        let e = Errors::MissingField("RNC_Cedula".to_string());
        assert_eq!(e.to_string(), "Required field RNC_Cedula not found in the SOAP body");
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let e: Errors = io.into();
        assert!(matches!(e, Errors::IOError(_)));
        assert_eq!(e.to_string(), "boom");
    }
}
