//! Compressed ribbon archive handling
//!
//! A ribbon export is a ZIP archive with the ribbon XML stored under
//! [`RIBBON_XML_PATH`]. The bytes themselves come from the retrieval service,
//! which is outside this crate.

use crate::error::{Error, Result};
use std::io::{Read, Seek};
use zip::ZipArchive;

/// Path of the ribbon XML inside the archive
pub const RIBBON_XML_PATH: &str = "RibbonXml.xml";

/// Local file header signature that starts every ZIP archive
const ZIP_SIGNATURE: &[u8] = b"PK\x03\x04";

/// An opened ribbon archive
pub struct RibbonArchive<R: Read> {
    archive: ZipArchive<R>,
}

impl<R: Read + Seek> RibbonArchive<R> {
    /// Open a ribbon archive from a reader
    pub fn open(reader: R) -> Result<Self> {
        let archive = ZipArchive::new(reader)?;
        Ok(Self { archive })
    }

    /// Read the ribbon XML entry
    pub fn ribbon_xml(&mut self) -> Result<String> {
        self.get_file(RIBBON_XML_PATH)
    }

    /// Get a file from the archive as a string
    pub fn get_file(&mut self, name: &str) -> Result<String> {
        let mut file = self
            .archive
            .by_name(name)
            .map_err(|_| Error::MissingFile(name.to_string()))?;
        let mut content = String::new();
        file.read_to_string(&mut content)?;
        Ok(content)
    }
}

/// Whether `bytes` start like a ZIP archive rather than raw XML
pub fn looks_like_archive(bytes: &[u8]) -> bool {
    bytes.starts_with(ZIP_SIGNATURE)
}

/// Extract the ribbon XML from the bytes of a compressed ribbon export
pub fn extract_ribbon_xml(bytes: &[u8]) -> Result<String> {
    RibbonArchive::open(std::io::Cursor::new(bytes))?.ribbon_xml()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use zip::ZipWriter;
    use zip::write::SimpleFileOptions;

    fn archive_with(entries: &[(&str, &str)]) -> Vec<u8> {
        let mut buffer = Vec::new();
        let mut zip = ZipWriter::new(Cursor::new(&mut buffer));
        let options = SimpleFileOptions::default();
        for (name, content) in entries {
            zip.start_file(*name, options).unwrap();
            zip.write_all(content.as_bytes()).unwrap();
        }
        zip.finish().unwrap();
        buffer
    }

    #[test]
    fn test_extract_ribbon_xml() {
        let bytes = archive_with(&[(RIBBON_XML_PATH, "<RibbonDefinitions/>")]);
        assert!(looks_like_archive(&bytes));
        assert_eq!(extract_ribbon_xml(&bytes).unwrap(), "<RibbonDefinitions/>");
    }

    #[test]
    fn test_missing_ribbon_entry() {
        let bytes = archive_with(&[("Other.xml", "<a/>")]);
        let err = extract_ribbon_xml(&bytes).unwrap_err();
        assert!(matches!(err, Error::MissingFile(ref name) if name == RIBBON_XML_PATH));
    }

    #[test]
    fn test_ribbon_entry_among_others() {
        let bytes = archive_with(&[("extra.txt", "x"), (RIBBON_XML_PATH, "<a/>")]);
        let mut archive = RibbonArchive::open(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.ribbon_xml().unwrap(), "<a/>");
        assert_eq!(archive.get_file("extra.txt").unwrap(), "x");
    }

    #[test]
    fn test_raw_xml_is_not_an_archive() {
        let xml = b"<RibbonDiffXml/>";
        assert!(!looks_like_archive(xml));
        assert!(matches!(extract_ribbon_xml(xml), Err(Error::Zip(_))));
    }
}
