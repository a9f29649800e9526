use serde::{Deserialize, Serialize};

/// Normalized reference item used to fill selectors
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct LookupItem {
    pub id: i64,
    pub description: String,
}

/// Item as the backend sends it (`typeId`/`typeDescription`, `locationId`/..., `statusId`/...).
/// Mongo bookkeeping fields (`_id`, `__v`) are ignored.
#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct RawLookupItem {
    #[serde(alias = "typeId", alias = "locationId", alias = "statusId")]
    pub id: i64,
    #[serde(
        alias = "typeDescription",
        alias = "locationDescription",
        alias = "statusDescription"
    )]
    pub description: String,
}

impl From<RawLookupItem> for LookupItem {
    fn from(raw: RawLookupItem) -> Self {
        Self {
            id: raw.id,
            description: raw.description,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum LookupKind {
    Types,
    Locations,
    Statuses,
}

impl LookupKind {
    pub const ALL: [LookupKind; 3] = [LookupKind::Types, LookupKind::Locations, LookupKind::Statuses];

    pub fn endpoint(self) -> &'static str {
        match self {
            LookupKind::Types => "/types",
            LookupKind::Locations => "/locations",
            LookupKind::Statuses => "/statuses",
        }
    }

    pub fn failure_message(self) -> &'static str {
        match self {
            LookupKind::Types => "Failed to fetch property types",
            LookupKind::Locations => "Failed to fetch locations",
            LookupKind::Statuses => "Failed to fetch statuses",
        }
    }
}
