//! Related identifiers of a described resource
//!
//! Builds on `curate-identifiers` to manage the ordered list of related
//! identifiers a cataloger attaches to a record:
//! - DataCite relation types
//! - single adds with type detection and duplicate rejection
//! - bulk CSV import with per-row errors and duplicate skipping
//! - user configuration loaded from TOML

pub mod config;
pub mod duplicates;
pub mod error;
pub mod import;
pub mod record;
pub mod relation;

pub use config::{ConfigError, CurateConfig, ImportConfig, NoticeConfig};
pub use duplicates::{is_duplicate, DuplicateKey};
pub use error::AddError;
pub use import::{import_csv, ImportError, ImportReport, RowError, RowIssue, SkippedDuplicates};
pub use record::{RelatedIdentifierDraft, RelatedIdentifierRecord, RelatedIdentifiers, TransientNotice};
pub use relation::{ParseRelationTypeError, RelationType};

pub use curate_identifiers::{detect, normalize, IdentifierType};
