//! Duplicate detection for related identifiers
//!
//! Two entries collide when they share the identifier type, the relation type
//! and the normalized identifier compared without regard to case. The same
//! work may be related more than once under different relations.

use curate_identifiers::{normalize, IdentifierType};

use crate::record::RelatedIdentifierRecord;
use crate::relation::RelationType;

/// Equality key for duplicate detection
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DuplicateKey {
    pub kind: IdentifierType,
    pub relation: RelationType,
    /// Normalized and lower-cased identifier
    pub canonical: String,
}

impl DuplicateKey {
    pub fn new(identifier: &str, kind: IdentifierType, relation: RelationType) -> Self {
        DuplicateKey {
            kind,
            relation,
            canonical: normalize(identifier, kind).to_lowercase(),
        }
    }
}

/// Check whether an identifier is already present in `existing`
///
/// # Examples
/// ```
/// use curate_identifiers::IdentifierType;
/// use curate_relations::{is_duplicate, RelatedIdentifierRecord, RelationType};
///
/// let existing = vec![RelatedIdentifierRecord::new(
///     "10.5880/GFZ.1.1",
///     IdentifierType::Doi,
///     RelationType::Cites,
///     0,
/// )];
/// assert!(is_duplicate(
///     "https://doi.org/10.5880/GFZ.1.1",
///     IdentifierType::Doi,
///     RelationType::Cites,
///     &existing,
/// ));
/// assert!(!is_duplicate(
///     "10.5880/GFZ.1.1",
///     IdentifierType::Doi,
///     RelationType::References,
///     &existing,
/// ));
/// ```
pub fn is_duplicate(
    identifier: &str,
    identifier_type: IdentifierType,
    relation_type: RelationType,
    existing: &[RelatedIdentifierRecord],
) -> bool {
    let key = DuplicateKey::new(identifier, identifier_type, relation_type);
    existing.iter().any(|record| record.duplicate_key() == key)
}
