//! Error types for ribbon loading and report assembly
//!
//! All errors carry an error code for categorization.
//!
//! # Error Codes
//!
//! Error codes follow the pattern: `E<category><number>`
//!
//! Categories:
//! - **E1xxx**: I/O and archive errors
//! - **E2xxx**: XML parsing and structure errors
//! - **E3xxx**: Resolution errors
//! - **E4xxx**: Output errors
//!
//! ## Error Codes
//!
//! - `E1001`: I/O error
//! - `E1002`: ZIP archive format error
//! - `E1003`: Missing required file in archive
//! - `E2001`: XML parsing error
//! - `E2002`: XML attribute error
//! - `E2003`: Invalid XML structure
//! - `E3001`: JavaScript function parameter without a `Value` attribute
//! - `E4001`: No free output file name

use std::io;
use thiserror::Error;

/// Result type for ribbon operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading a ribbon and building its report
#[derive(Error, Debug)]
pub enum Error {
    /// IO error occurred while reading input or writing output
    ///
    /// **Error Code**: E1001
    #[error("[E1001] I/O error: {0}")]
    Io(#[from] io::Error),

    /// ZIP archive error
    ///
    /// **Error Code**: E1002
    ///
    /// **Common Causes**:
    /// - The input is raw XML rather than the compressed ribbon archive
    /// - Truncated download
    #[error("[E1002] ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Missing required file in the ribbon archive
    ///
    /// **Error Code**: E1003
    #[error("[E1003] Missing required file: {0}")]
    MissingFile(String),

    /// XML parsing error
    ///
    /// **Error Code**: E2001
    ///
    /// **Common Causes**:
    /// - Malformed XML syntax
    /// - Mismatched or unclosed tags
    #[error("[E2001] XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// XML attribute error
    ///
    /// **Error Code**: E2002
    ///
    /// **Common Causes**:
    /// - Unquoted attribute value
    /// - Duplicate attribute
    #[error("[E2002] XML attribute error: {0}")]
    XmlAttr(String),

    /// Invalid XML structure
    ///
    /// **Error Code**: E2003
    ///
    /// **Common Causes**:
    /// - Empty document
    /// - Elements left open at end of input
    /// - Names or values that are not valid UTF-8
    #[error("[E2003] Invalid XML structure: {0}")]
    InvalidXml(String),

    /// A `JavaScriptFunction` parameter has no `Value` attribute
    ///
    /// **Error Code**: E3001
    ///
    /// Only raised under [`ParameterPolicy::Strict`](crate::ParameterPolicy::Strict).
    /// Use [`ParameterPolicy::Lenient`](crate::ParameterPolicy::Lenient) to skip
    /// such parameters with a warning instead.
    #[error(
        "[E3001] Parameter '<{parameter}>' of function '{function}' in command '{command}' \
         is missing its 'Value' attribute"
    )]
    MissingParameterValue {
        /// Command definition id
        command: String,
        /// `FunctionName` of the enclosing JavaScript function
        function: String,
        /// Element name of the parameter
        parameter: String,
    },

    /// Every candidate output file name is already taken
    ///
    /// **Error Code**: E4001
    #[error("[E4001] No free output file name: {0}")]
    OutputExhausted(String),
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::XmlAttr(format!("Attribute parsing failed: {}", err))
    }
}

impl From<quick_xml::escape::EscapeError> for Error {
    fn from(err: quick_xml::escape::EscapeError) -> Self {
        Error::InvalidXml(format!("Invalid character reference: {}", err))
    }
}

impl Error {
    /// Create an InvalidXml error with element context
    ///
    /// # Example
    /// ```ignore
    /// Error::invalid_xml_element("Button", "name is not valid UTF-8")
    /// ```
    pub fn invalid_xml_element(element: &str, message: &str) -> Self {
        Error::InvalidXml(format!("Element '<{}>': {}", element, message))
    }

    /// Create a MissingParameterValue error
    pub fn missing_parameter_value(command: &str, function: &str, parameter: &str) -> Self {
        Error::MissingParameterValue {
            command: command.to_string(),
            function: function.to_string(),
            parameter: parameter.to_string(),
        }
    }

    /// The `Exxxx` code of this error
    pub fn code(&self) -> &'static str {
        match self {
            Error::Io(_) => "E1001",
            Error::Zip(_) => "E1002",
            Error::MissingFile(_) => "E1003",
            Error::Xml(_) => "E2001",
            Error::XmlAttr(_) => "E2002",
            Error::InvalidXml(_) => "E2003",
            Error::MissingParameterValue { .. } => "E3001",
            Error::OutputExhausted(_) => "E4001",
        }
    }
}
