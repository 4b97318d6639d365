//! DataCite relation types
//!
//! How the described resource relates to a related identifier. The set is
//! the `relationType` vocabulary of DataCite Metadata Schema 4.6 and is
//! independent of the identifier scheme.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Semantic link between the described resource and a related one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RelationType {
    IsCitedBy,
    Cites,
    IsSupplementTo,
    IsSupplementedBy,
    IsContinuedBy,
    Continues,
    IsDescribedBy,
    Describes,
    HasMetadata,
    IsMetadataFor,
    HasVersion,
    IsVersionOf,
    IsNewVersionOf,
    IsPreviousVersionOf,
    IsPartOf,
    HasPart,
    IsPublishedIn,
    IsReferencedBy,
    References,
    IsDocumentedBy,
    Documents,
    IsCompiledBy,
    Compiles,
    IsVariantFormOf,
    IsOriginalFormOf,
    IsIdenticalTo,
    IsReviewedBy,
    Reviews,
    IsDerivedFrom,
    IsSourceOf,
    IsRequiredBy,
    Requires,
    IsObsoletedBy,
    Obsoletes,
    IsCollectedBy,
    Collects,
    HasTranslation,
    IsTranslationOf,
}

impl RelationType {
    /// Get all relation types
    pub fn all() -> &'static [RelationType] {
        use RelationType::*;
        &[
            IsCitedBy,
            Cites,
            IsSupplementTo,
            IsSupplementedBy,
            IsContinuedBy,
            Continues,
            IsDescribedBy,
            Describes,
            HasMetadata,
            IsMetadataFor,
            HasVersion,
            IsVersionOf,
            IsNewVersionOf,
            IsPreviousVersionOf,
            IsPartOf,
            HasPart,
            IsPublishedIn,
            IsReferencedBy,
            References,
            IsDocumentedBy,
            Documents,
            IsCompiledBy,
            Compiles,
            IsVariantFormOf,
            IsOriginalFormOf,
            IsIdenticalTo,
            IsReviewedBy,
            Reviews,
            IsDerivedFrom,
            IsSourceOf,
            IsRequiredBy,
            Requires,
            IsObsoletedBy,
            Obsoletes,
            IsCollectedBy,
            Collects,
            HasTranslation,
            IsTranslationOf,
        ]
    }

    pub fn as_str(self) -> &'static str {
        use RelationType::*;
        match self {
            IsCitedBy => "IsCitedBy",
            Cites => "Cites",
            IsSupplementTo => "IsSupplementTo",
            IsSupplementedBy => "IsSupplementedBy",
            IsContinuedBy => "IsContinuedBy",
            Continues => "Continues",
            IsDescribedBy => "IsDescribedBy",
            Describes => "Describes",
            HasMetadata => "HasMetadata",
            IsMetadataFor => "IsMetadataFor",
            HasVersion => "HasVersion",
            IsVersionOf => "IsVersionOf",
            IsNewVersionOf => "IsNewVersionOf",
            IsPreviousVersionOf => "IsPreviousVersionOf",
            IsPartOf => "IsPartOf",
            HasPart => "HasPart",
            IsPublishedIn => "IsPublishedIn",
            IsReferencedBy => "IsReferencedBy",
            References => "References",
            IsDocumentedBy => "IsDocumentedBy",
            Documents => "Documents",
            IsCompiledBy => "IsCompiledBy",
            Compiles => "Compiles",
            IsVariantFormOf => "IsVariantFormOf",
            IsOriginalFormOf => "IsOriginalFormOf",
            IsIdenticalTo => "IsIdenticalTo",
            IsReviewedBy => "IsReviewedBy",
            Reviews => "Reviews",
            IsDerivedFrom => "IsDerivedFrom",
            IsSourceOf => "IsSourceOf",
            IsRequiredBy => "IsRequiredBy",
            Requires => "Requires",
            IsObsoletedBy => "IsObsoletedBy",
            Obsoletes => "Obsoletes",
            IsCollectedBy => "IsCollectedBy",
            Collects => "Collects",
            HasTranslation => "HasTranslation",
            IsTranslationOf => "IsTranslationOf",
        }
    }

    /// The relation seen from the related resource's side
    ///
    /// `IsPublishedIn` has no counterpart in the vocabulary.
    pub fn inverse(self) -> Option<RelationType> {
        use RelationType::*;
        let inverse = match self {
            IsCitedBy => Cites,
            Cites => IsCitedBy,
            IsSupplementTo => IsSupplementedBy,
            IsSupplementedBy => IsSupplementTo,
            IsContinuedBy => Continues,
            Continues => IsContinuedBy,
            IsDescribedBy => Describes,
            Describes => IsDescribedBy,
            HasMetadata => IsMetadataFor,
            IsMetadataFor => HasMetadata,
            HasVersion => IsVersionOf,
            IsVersionOf => HasVersion,
            IsNewVersionOf => IsPreviousVersionOf,
            IsPreviousVersionOf => IsNewVersionOf,
            IsPartOf => HasPart,
            HasPart => IsPartOf,
            IsPublishedIn => return None,
            IsReferencedBy => References,
            References => IsReferencedBy,
            IsDocumentedBy => Documents,
            Documents => IsDocumentedBy,
            IsCompiledBy => Compiles,
            Compiles => IsCompiledBy,
            IsVariantFormOf => IsOriginalFormOf,
            IsOriginalFormOf => IsVariantFormOf,
            IsIdenticalTo => IsIdenticalTo,
            IsReviewedBy => Reviews,
            Reviews => IsReviewedBy,
            IsDerivedFrom => IsSourceOf,
            IsSourceOf => IsDerivedFrom,
            IsRequiredBy => Requires,
            Requires => IsRequiredBy,
            IsObsoletedBy => Obsoletes,
            Obsoletes => IsObsoletedBy,
            IsCollectedBy => Collects,
            Collects => IsCollectedBy,
            HasTranslation => IsTranslationOf,
            IsTranslationOf => HasTranslation,
        };
        Some(inverse)
    }
}

impl fmt::Display for RelationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no DataCite relation type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported relation type: {input:?}")]
pub struct ParseRelationTypeError {
    pub input: String,
}

impl FromStr for RelationType {
    type Err = ParseRelationTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        RelationType::all()
            .iter()
            .copied()
            .find(|relation| relation.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseRelationTypeError {
                input: s.to_string(),
            })
    }
}
