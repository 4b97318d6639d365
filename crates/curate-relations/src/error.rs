//! Error types for curate-relations

use curate_identifiers::IdentifierType;
use thiserror::Error;

use crate::relation::RelationType;

/// Why a single related identifier was not added
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddError {
    /// Nothing left after trimming
    #[error("Identifier is empty")]
    EmptyIdentifier,

    #[error("Relation type is required")]
    MissingRelationType,

    /// Same identifier, type and relation already present
    #[error("{identifier} is already listed as {identifier_type} with relation {relation_type}")]
    Duplicate {
        identifier: String,
        identifier_type: IdentifierType,
        relation_type: RelationType,
    },
}
