//! Typed ARC front matter and the published index shape.
//!
//! Field order in these structs is the order keys appear in `arcs.json`, so
//! reordering them changes the published artifact.
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Id reserved for the formatting template (`arc-0000`).
pub const TEMPLATE_ID: u32 = 0;

/// Published index keyed by ARC id; serializes in ascending id order.
pub type ArcIndex = BTreeMap<u32, ArcDocument>;

/// Classification an ARC is filed under.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Protocol,
    Network,
    Application,
    Meta,
}

impl Topic {
    pub const ALL: [Topic; 4] = [
        Topic::Protocol,
        Topic::Network,
        Topic::Application,
        Topic::Meta,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Protocol => "Protocol",
            Topic::Network => "Network",
            Topic::Application => "Application",
            Topic::Meta => "Meta",
        }
    }

    /// Exact, case-sensitive lookup by name.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|topic| topic.as_str() == value)
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle stage of an ARC.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Draft,
    Active,
    Withdrawn,
    Accepted,
    Final,
    Deprecated,
    Living,
}

impl Status {
    pub const ALL: [Status; 7] = [
        Status::Draft,
        Status::Active,
        Status::Withdrawn,
        Status::Accepted,
        Status::Final,
        Status::Deprecated,
        Status::Living,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Draft => "Draft",
            Status::Active => "Active",
            Status::Withdrawn => "Withdrawn",
            Status::Accepted => "Accepted",
            Status::Final => "Final",
            Status::Deprecated => "Deprecated",
            Status::Living => "Living",
        }
    }

    /// Exact, case-sensitive lookup by name.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated front matter for one ARC.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ArcMetadata {
    pub arc: u32,
    pub title: String,
    pub authors: String,
    pub discussion: String,
    pub topic: Topic,
    pub status: Status,
    pub created: String,
    /// Front-matter keys outside the required set, published verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// A validated ARC: front matter plus the markdown body.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ArcDocument {
    pub metadata: ArcMetadata,
    pub content: String,
}
