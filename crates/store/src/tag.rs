//! Registered-tag records.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Hardware variant of a programmed tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TagType {
    /// Standard NTAG 424 DNA
    #[serde(rename = "DNA")]
    Dna,
    /// NTAG 424 DNA TagTamper
    #[serde(rename = "DNA_TAGTAMPER")]
    DnaTagTamper,
}

impl TagType {
    /// Parse the wire representation (`"DNA"` or `"DNA_TAGTAMPER"`).
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "DNA" => Some(Self::Dna),
            "DNA_TAGTAMPER" => Some(Self::DnaTagTamper),
            _ => None,
        }
    }

    /// The wire representation of this variant.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dna => "DNA",
            Self::DnaTagTamper => "DNA_TAGTAMPER",
        }
    }
}

impl fmt::Display for TagType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tag registration about to be persisted.
///
/// Field names follow the database columns, so the struct serializes
/// straight into a PostgREST insert payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTag {
    /// Tag UID as hex, upper-cased before insert
    pub tag_uid: String,
    /// Hardware variant
    pub tag_type: TagType,
    /// URL the tag redirects to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    /// Access-rights byte as two hex digits
    pub access_rights: String,
    /// Derivation-key byte as two hex digits
    pub derivation_key: String,
    /// Whether TagTamper status mirroring was enabled
    pub tt_status_mirroring: bool,
    /// Free-form operator notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A persisted tag registration.
///
/// Created once after physical programming succeeds and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgrammedTag {
    /// Row identifier assigned by the database
    pub id: i64,
    /// Tag UID as upper-case hex
    pub tag_uid: String,
    /// Hardware variant
    pub tag_type: TagType,
    /// URL the tag redirects to
    pub redirect_url: Option<String>,
    /// Access-rights byte as two hex digits
    pub access_rights: String,
    /// Derivation-key byte as two hex digits
    pub derivation_key: String,
    /// Whether TagTamper status mirroring was enabled
    pub tt_status_mirroring: bool,
    /// Free-form operator notes
    pub notes: Option<String>,
    /// Registration time assigned by the database
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_type_parse() {
        assert_eq!(TagType::parse("DNA"), Some(TagType::Dna));
        assert_eq!(TagType::parse("DNA_TAGTAMPER"), Some(TagType::DnaTagTamper));
        assert_eq!(TagType::parse("dna"), None);
        assert_eq!(TagType::parse("NTAG424"), None);
    }

    #[test]
    fn test_new_tag_serializes_to_insert_payload() {
        let tag = NewTag {
            tag_uid: "04A5B6C7D8E9F0".to_string(),
            tag_type: TagType::Dna,
            redirect_url: Some("https://adaki.example/t".to_string()),
            access_rights: "0F".to_string(),
            derivation_key: "0F".to_string(),
            tt_status_mirroring: false,
            notes: None,
        };

        let value = serde_json::to_value(&tag).unwrap();
        assert_eq!(value["tag_uid"], "04A5B6C7D8E9F0");
        assert_eq!(value["tag_type"], "DNA");
        assert_eq!(value["redirect_url"], "https://adaki.example/t");
        // Absent optionals stay out of the payload so the database keeps
        // its column defaults
        assert!(value.get("notes").is_none());
    }

    #[test]
    fn test_programmed_tag_deserializes_database_row() {
        let row = serde_json::json!({
            "id": 12,
            "tag_uid": "04A5B6C7D8E9F0",
            "tag_type": "DNA_TAGTAMPER",
            "redirect_url": "https://adaki.example/t",
            "access_rights": "0F",
            "derivation_key": "0F",
            "tt_status_mirroring": true,
            "notes": null,
            "created_at": "2026-03-01T12:30:00+00:00"
        });

        let tag: ProgrammedTag = serde_json::from_value(row).unwrap();
        assert_eq!(tag.id, 12);
        assert_eq!(tag.tag_type, TagType::DnaTagTamper);
        assert!(tag.tt_status_mirroring);
        assert_eq!(tag.notes, None);
        assert_eq!(tag.created_at.to_rfc3339(), "2026-03-01T12:30:00+00:00");
    }
}
