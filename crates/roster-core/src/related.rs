//! Insert shapes for the five related-record collections, the nested-write
//! payload, and the per-collection count summary.
//!
//! All five collections link to their parent through `user_id` and are
//! removed by the store's cascade rule when the parent is deleted. The
//! workflow only ever creates and counts them, so no read-back row types
//! exist here.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ─── Documents ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
  IdentityCard,
  Contract,
  Other,
}

/// A file attached to a user, stored by reference only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDocument {
  pub kind: DocumentKind,
  pub url:  String,
}

// ─── Comments & history ──────────────────────────────────────────────────────

/// A free-text note on a user, written by another user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewComment {
  pub author_id: Uuid,
  pub message:   String,
}

/// An audit-trail entry on a user, written by another user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewHistoryEntry {
  pub author_id: Uuid,
  pub message:   String,
}

// ─── Time off & absences ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOffKind {
  PaidTimeOff,
  UnpaidTimeOff,
  SickLeave,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTimeOffPeriod {
  pub start_date:     NaiveDate,
  pub end_date:       NaiveDate,
  pub kind:           TimeOffKind,
  pub number_of_days: u32,
  /// First day of the month the period accrues against.
  pub month:          NaiveDate,
  pub comment:        String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAbsenceReason {
  pub reason:       String,
  pub absence_date: NaiveDate,
}

// ─── Nested-write payload ────────────────────────────────────────────────────

/// Child rows created together with a new user in a single transaction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewRelatedRecords {
  pub documents:        Vec<NewDocument>,
  pub comments:         Vec<NewComment>,
  pub histories:        Vec<NewHistoryEntry>,
  pub time_off_periods: Vec<NewTimeOffPeriod>,
  pub absence_reasons:  Vec<NewAbsenceReason>,
}

impl NewRelatedRecords {
  /// Per-collection sizes of this payload.
  pub fn counts(&self) -> RelatedCounts {
    RelatedCounts {
      documents:        self.documents.len() as u64,
      comments:         self.comments.len() as u64,
      histories:        self.histories.len() as u64,
      time_off_periods: self.time_off_periods.len() as u64,
      absence_reasons:  self.absence_reasons.len() as u64,
    }
  }
}

// ─── Count summary ───────────────────────────────────────────────────────────

/// Per-collection row counts scoped to one user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedCounts {
  pub documents:        u64,
  pub comments:         u64,
  pub histories:        u64,
  pub time_off_periods: u64,
  pub absence_reasons:  u64,
}

impl RelatedCounts {
  pub fn is_zero(&self) -> bool {
    *self == Self::default()
  }
}

impl fmt::Display for RelatedCounts {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "documents: {}, comments: {}, histories: {}, time-off periods: {}, \
       absence reasons: {}",
      self.documents,
      self.comments,
      self.histories,
      self.time_off_periods,
      self.absence_reasons,
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn counts_reflect_payload_sizes() {
    let related = NewRelatedRecords {
      documents: vec![
        NewDocument {
          kind: DocumentKind::IdentityCard,
          url:  "https://example.com/id.jpg".into(),
        },
        NewDocument {
          kind: DocumentKind::Contract,
          url:  "https://example.com/contract.pdf".into(),
        },
      ],
      comments: vec![NewComment {
        author_id: Uuid::new_v4(),
        message:   "note".into(),
      }],
      ..Default::default()
    };

    let counts = related.counts();
    assert_eq!(counts.documents, 2);
    assert_eq!(counts.comments, 1);
    assert_eq!(counts.histories, 0);
    assert!(!counts.is_zero());
    assert!(RelatedCounts::default().is_zero());
  }
}
