//! # ribbonview
//!
//! Turns a ribbon definition (the XML describing an application's toolbar
//! buttons, their commands, and the enable/display rules attached to them)
//! into a readable report.
//!
//! ## Pipeline
//!
//! 1. [`archive`] extracts `RibbonXml.xml` from a compressed ribbon export
//! 2. [`parser`] loads the XML into a [`RibbonDocument`] with id-keyed indexes
//! 3. [`Resolver`] pairs each `<Button>` with its command and rule definitions
//! 4. [`Report`] assembles one [`ReportSection`] per button
//! 5. a [`ReportRenderer`] such as [`TextRenderer`] writes the result out
//!
//! ## Example
//!
//! ```
//! use ribbonview::{Report, ResolverConfig, TextRenderer};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let xml = r#"<RibbonDiffXml>
//!   <Button Id="B1" Command="C1"/>
//!   <CommandDefinition Id="C1">
//!     <Actions>
//!       <JavaScriptFunction FunctionName="F" Library="L"><Param Value="5"/></JavaScriptFunction>
//!     </Actions>
//!   </CommandDefinition>
//! </RibbonDiffXml>"#;
//!
//! let report = Report::from_xml(xml, "account Ribbon Buttons", ResolverConfig::new())?;
//! let text = TextRenderer::new().render_to_string(&report)?;
//! assert!(text.contains("-- Param: 5"));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod archive;
pub mod error;
pub mod model;
pub mod output;
pub mod parser;
pub mod render;
pub mod report;
pub mod resolver;

pub use error::{Error, Result};
pub use model::{
    ActionParameter, ButtonDefinition, CommandDefinition, JavaScriptAction, JavaScriptFunction,
    ParameterPolicy, RawParameter, ResolutionWarning, ResolvedButton, ResolvedCommand,
    ResolverConfig, RibbonDocument, RuleAttribute, RuleDefinition, RuleKind,
};
pub use render::{ReportRenderer, TextRenderer};
pub use report::{Report, ReportEntry, ReportLine, ReportSection, SectionKind};
pub use resolver::Resolver;

use std::io::{Read, Seek};

impl RibbonDocument {
    /// Parse ribbon XML
    pub fn from_xml(xml: &str) -> Result<Self> {
        parser::parse_ribbon_xml(xml)
    }

    /// Parse the ribbon XML stored in a compressed ribbon archive
    ///
    /// # Example
    ///
    /// ```no_run
    /// use ribbonview::RibbonDocument;
    /// use std::fs::File;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let file = File::open("account_ribbon.zip")?;
    /// let doc = RibbonDocument::from_archive(file)?;
    /// println!("{} buttons", doc.buttons.len());
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_archive<R: Read + Seek>(reader: R) -> Result<Self> {
        let xml = archive::RibbonArchive::open(reader)?.ribbon_xml()?;
        parser::parse_ribbon_xml(&xml)
    }

    /// Parse either a compressed ribbon archive or raw ribbon XML
    ///
    /// The format is detected from the leading bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if archive::looks_like_archive(bytes) {
            return Self::from_xml(&archive::extract_ribbon_xml(bytes)?);
        }
        let xml = std::str::from_utf8(bytes).map_err(|e| Error::InvalidXml(e.to_string()))?;
        Self::from_xml(xml)
    }

    /// Lazily resolve every button against this document
    pub fn resolve(&self, config: ResolverConfig) -> Resolver<'_> {
        Resolver::new(self, config)
    }
}

impl Report {
    /// Parse ribbon XML and assemble its report in one step
    pub fn from_xml(xml: &str, title: impl Into<String>, config: ResolverConfig) -> Result<Self> {
        let document = RibbonDocument::from_xml(xml)?;
        Report::build(&document, config, title)
    }
}
