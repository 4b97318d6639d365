//! Identifier schemes supported by the classifier
//!
//! The set is closed and follows the DataCite `relatedIdentifierType`
//! vocabulary. Display and parse use the DataCite spellings, so `arXiv`
//! and `w3id` keep their mixed case.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Scheme of a persistent identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum IdentifierType {
    /// Digital Object Identifier
    #[serde(rename = "DOI")]
    Doi,
    /// Any web address no other scheme claims
    #[serde(rename = "URL")]
    Url,
    /// Handle System identifier
    Handle,
    /// International Generic Sample Number
    #[serde(rename = "IGSN")]
    Igsn,
    /// Uniform Resource Name
    #[serde(rename = "URN")]
    Urn,
    /// International Standard Book Number
    #[serde(rename = "ISBN")]
    Isbn,
    /// Electronic (or print) ISSN
    #[serde(rename = "EISSN")]
    Eissn,
    /// Linking ISSN
    #[serde(rename = "LISSN")]
    Lissn,
    /// Persistent URL
    #[serde(rename = "PURL")]
    Purl,
    /// W3C permanent identifier
    #[serde(rename = "w3id")]
    W3id,
    /// Archival Resource Key
    #[serde(rename = "ARK")]
    Ark,
    /// arXiv preprint identifier
    #[serde(rename = "arXiv")]
    Arxiv,
    /// NASA ADS bibcode
    #[serde(rename = "bibcode")]
    Bibcode,
    /// European Article Number (GTIN-13)
    #[serde(rename = "EAN13")]
    Ean13,
    /// International Standard Text Code
    #[serde(rename = "ISTC")]
    Istc,
    /// Life Science Identifier
    #[serde(rename = "LSID")]
    Lsid,
    /// PubMed identifier
    #[serde(rename = "PMID")]
    Pmid,
    /// Research Resource Identifier
    #[serde(rename = "RRID")]
    Rrid,
    /// Universal Product Code
    #[serde(rename = "UPC")]
    Upc,
    /// China Science and Technology Resource identifier
    #[serde(rename = "CSTR")]
    Cstr,
}

impl IdentifierType {
    /// Get all identifier types
    pub fn all() -> &'static [IdentifierType] {
        &[
            IdentifierType::Doi,
            IdentifierType::Url,
            IdentifierType::Handle,
            IdentifierType::Igsn,
            IdentifierType::Urn,
            IdentifierType::Isbn,
            IdentifierType::Eissn,
            IdentifierType::Lissn,
            IdentifierType::Purl,
            IdentifierType::W3id,
            IdentifierType::Ark,
            IdentifierType::Arxiv,
            IdentifierType::Bibcode,
            IdentifierType::Ean13,
            IdentifierType::Istc,
            IdentifierType::Lsid,
            IdentifierType::Pmid,
            IdentifierType::Rrid,
            IdentifierType::Upc,
            IdentifierType::Cstr,
        ]
    }

    /// DataCite spelling of the scheme
    pub fn as_str(self) -> &'static str {
        match self {
            IdentifierType::Doi => "DOI",
            IdentifierType::Url => "URL",
            IdentifierType::Handle => "Handle",
            IdentifierType::Igsn => "IGSN",
            IdentifierType::Urn => "URN",
            IdentifierType::Isbn => "ISBN",
            IdentifierType::Eissn => "EISSN",
            IdentifierType::Lissn => "LISSN",
            IdentifierType::Purl => "PURL",
            IdentifierType::W3id => "w3id",
            IdentifierType::Ark => "ARK",
            IdentifierType::Arxiv => "arXiv",
            IdentifierType::Bibcode => "bibcode",
            IdentifierType::Ean13 => "EAN13",
            IdentifierType::Istc => "ISTC",
            IdentifierType::Lsid => "LSID",
            IdentifierType::Pmid => "PMID",
            IdentifierType::Rrid => "RRID",
            IdentifierType::Upc => "UPC",
            IdentifierType::Cstr => "CSTR",
        }
    }
}

impl fmt::Display for IdentifierType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no supported identifier type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported identifier type: {input:?}")]
pub struct ParseIdentifierTypeError {
    pub input: String,
}

impl FromStr for IdentifierType {
    type Err = ParseIdentifierTypeError;

    /// Case-insensitive match against the DataCite spellings
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        IdentifierType::all()
            .iter()
            .copied()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseIdentifierTypeError {
                input: s.to_string(),
            })
    }
}
