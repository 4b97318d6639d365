//! Related identifier records and the ordered list that owns them

use std::collections::BTreeMap;
use std::io::Read;
use std::time::{Duration, Instant};

use curate_identifiers::{detect, IdentifierType};
use serde::{Deserialize, Serialize};

use crate::config::{CurateConfig, ImportConfig};
use crate::duplicates::{is_duplicate, DuplicateKey};
use crate::error::AddError;
use crate::import::{self, ImportError, ImportReport};
use crate::relation::RelationType;

/// One link from the described resource to a related identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedIdentifierRecord {
    pub identifier: String,
    pub identifier_type: IdentifierType,
    pub relation_type: RelationType,
    /// Zero-based index within the owning list
    #[serde(default)]
    pub position: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_title: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub related_metadata: BTreeMap<String, serde_json::Value>,
}

impl RelatedIdentifierRecord {
    pub fn new(
        identifier: impl Into<String>,
        identifier_type: IdentifierType,
        relation_type: RelationType,
        position: usize,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            identifier_type,
            relation_type,
            position,
            related_title: None,
            related_metadata: BTreeMap::new(),
        }
    }

    pub fn duplicate_key(&self) -> DuplicateKey {
        DuplicateKey::new(&self.identifier, self.identifier_type, self.relation_type)
    }
}

/// Input of the add flows
///
/// Leaving `identifier_type` empty asks for detection; setting it is the
/// manual override of the advanced form.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedIdentifierDraft {
    pub identifier: String,
    #[serde(default)]
    pub identifier_type: Option<IdentifierType>,
    pub relation_type: Option<RelationType>,
    #[serde(default)]
    pub related_title: Option<String>,
    #[serde(default)]
    pub related_metadata: BTreeMap<String, serde_json::Value>,
}

impl RelatedIdentifierDraft {
    pub fn new(identifier: impl Into<String>, relation_type: RelationType) -> Self {
        Self {
            identifier: identifier.into(),
            relation_type: Some(relation_type),
            ..Self::default()
        }
    }

    pub fn with_type(mut self, identifier_type: IdentifierType) -> Self {
        self.identifier_type = Some(identifier_type);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.related_title = Some(title.into());
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.related_metadata.insert(key.into(), value);
        self
    }
}

/// Short-lived message shown after a rejected add
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransientNotice {
    pub message: String,
    pub expires_at: Instant,
}

impl TransientNotice {
    pub fn is_live(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

/// Ordered related identifiers of one resource
///
/// Positions are always `0..len` in list order.
#[derive(Debug, Clone)]
pub struct RelatedIdentifiers {
    records: Vec<RelatedIdentifierRecord>,
    notice: Option<TransientNotice>,
    notice_ttl: Duration,
}

impl Default for RelatedIdentifiers {
    fn default() -> Self {
        Self::new()
    }
}

impl RelatedIdentifiers {
    pub fn new() -> Self {
        Self::with_config(&CurateConfig::default())
    }

    pub fn with_config(config: &CurateConfig) -> Self {
        Self {
            records: Vec::new(),
            notice: None,
            notice_ttl: config.notices.duplicate_ttl(),
        }
    }

    /// Adopt existing records, renumbering positions densely in the given order
    pub fn from_records(records: Vec<RelatedIdentifierRecord>) -> Self {
        Self::from_records_with_config(records, &CurateConfig::default())
    }

    pub fn from_records_with_config(
        records: Vec<RelatedIdentifierRecord>,
        config: &CurateConfig,
    ) -> Self {
        let mut list = Self::with_config(config);
        list.records = records;
        list.renumber(0);
        list
    }

    pub fn records(&self) -> &[RelatedIdentifierRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<RelatedIdentifierRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&RelatedIdentifierRecord> {
        self.records.get(position)
    }

    /// Add one identifier, detecting its type unless the draft overrides it
    pub fn add(&mut self, draft: RelatedIdentifierDraft) -> Result<&RelatedIdentifierRecord, AddError> {
        self.add_at(draft, Instant::now())
    }

    /// Add with detection and no title or metadata
    pub fn quick_add(
        &mut self,
        identifier: &str,
        relation_type: RelationType,
    ) -> Result<&RelatedIdentifierRecord, AddError> {
        self.add(RelatedIdentifierDraft::new(identifier, relation_type))
    }

    /// [`add`](Self::add) with an explicit clock, for the notice deadline
    pub fn add_at(
        &mut self,
        draft: RelatedIdentifierDraft,
        now: Instant,
    ) -> Result<&RelatedIdentifierRecord, AddError> {
        let identifier = draft.identifier.trim();
        if identifier.is_empty() {
            return Err(AddError::EmptyIdentifier);
        }
        let relation_type = draft.relation_type.ok_or(AddError::MissingRelationType)?;
        let identifier_type = draft.identifier_type.unwrap_or_else(|| detect(identifier));

        if is_duplicate(identifier, identifier_type, relation_type, &self.records) {
            let err = AddError::Duplicate {
                identifier: identifier.to_string(),
                identifier_type,
                relation_type,
            };
            tracing::debug!(%identifier, %identifier_type, %relation_type, "Rejected duplicate");
            self.notice = Some(TransientNotice {
                message: err.to_string(),
                expires_at: now + self.notice_ttl,
            });
            return Err(err);
        }

        let position = self.records.len();
        self.records.push(RelatedIdentifierRecord {
            identifier: identifier.to_string(),
            identifier_type,
            relation_type,
            position,
            related_title: draft.related_title.filter(|title| !title.trim().is_empty()),
            related_metadata: draft.related_metadata,
        });
        Ok(&self.records[position])
    }

    /// Remove the record at `position` and close the gap
    pub fn remove(&mut self, position: usize) -> Option<RelatedIdentifierRecord> {
        if position >= self.records.len() {
            return None;
        }
        let removed = self.records.remove(position);
        self.renumber(position);
        Some(removed)
    }

    /// The duplicate notice while it is live; an expired one is dropped
    pub fn active_notice(&mut self, now: Instant) -> Option<&TransientNotice> {
        if self.notice.as_ref().is_some_and(|notice| !notice.is_live(now)) {
            self.notice = None;
        }
        self.notice.as_ref()
    }

    /// Bulk import rows from CSV, appending the accepted ones
    pub fn import_csv<R: Read>(
        &mut self,
        reader: R,
        config: &ImportConfig,
    ) -> Result<ImportReport, ImportError> {
        let report = import::import_csv(reader, &self.records, config)?;
        self.records.extend(report.accepted.iter().cloned());
        Ok(report)
    }

    fn renumber(&mut self, from: usize) {
        for (position, record) in self.records.iter_mut().enumerate().skip(from) {
            record.position = position;
        }
    }
}
