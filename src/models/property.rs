use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ClientError, ClientResult};

/// Nested `{id, description}` reference inside a Property.
/// Also accepts the backend's raw `locationId`/`locationDescription` style keys.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LookupRef {
    #[serde(alias = "typeId", alias = "locationId", alias = "statusId")]
    pub id: i64,
    #[serde(
        alias = "typeDescription",
        alias = "locationDescription",
        alias = "statusDescription"
    )]
    pub description: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub property_id: i64,
    pub property_title: String,
    pub property_slug: String,
    pub property_location: LookupRef,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub property_description: String,
    pub property_price: f64,
    pub property_type: LookupRef,
    pub property_status: LookupRef,
    pub property_area: f64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub property_image_path: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub created_at: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub updated_at: String,
}

/// Optional text the backend may send as `null`
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_items: u32,
    pub items_per_page: u32,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

/// `content` of `GET /properties/paginated`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct PaginatedProperties {
    pub data: Vec<Property>,
    pub pagination: PaginationInfo,
}

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct DeleteResult {
    pub deleted: bool,
}

#[derive(Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_id: Option<i64>,
}

impl SearchFilters {
    /// True when at least one filter key is set
    pub fn is_active(&self) -> bool {
        self.location_id.is_some() || self.status_id.is_some() || self.type_id.is_some()
    }

    /// Query parameters for the set keys only
    pub fn to_query(&self) -> Vec<(String, String)> {
        [
            ("locationId", self.location_id),
            ("statusId", self.status_id),
            ("typeId", self.type_id),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key.to_string(), v.to_string())))
        .collect()
    }
}

/// Image attached to a create call, sent as the `image` multipart part
#[derive(Clone, PartialEq, Debug)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Payload of `POST /properties` (and the text fields of `create-with-image`).
/// Lookup references are sent as plain ids.
#[derive(Clone, PartialEq, Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreatePropertyData {
    pub property_title: String,
    pub property_slug: String,
    pub property_location: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_description: Option<String>,
    pub property_price: f64,
    pub property_type: i64,
    pub property_status: i64,
    pub property_area: f64,
    #[serde(skip)]
    pub image: Option<ImageUpload>,
}

impl CreatePropertyData {
    /// Fills the slug from the title when it was left blank
    pub fn with_generated_slug(mut self) -> Self {
        if self.property_slug.trim().is_empty() {
            self.property_slug = slugify(&self.property_title);
        }
        self
    }

    pub fn validate(&self) -> ClientResult<()> {
        let rule = |ok: bool, message: &str| {
            if ok {
                Ok(())
            } else {
                Err(ClientError::Validation(message.to_string()))
            }
        };
        rule(!self.property_title.trim().is_empty(), "Property title is required")?;
        rule(!self.property_slug.trim().is_empty(), "Property slug is required")?;
        rule(self.property_location != 0, "Please select a location")?;
        rule(self.property_type != 0, "Please select a property type")?;
        rule(self.property_status != 0, "Please select a property status")?;
        validate_positive(self.property_price, "Property price must be greater than 0")?;
        validate_positive(self.property_area, "Property area must be greater than 0")
    }

    /// Text parts of the multipart form, in submission order
    pub fn form_fields(&self) -> Vec<(String, String)> {
        let mut fields = vec![
            ("propertyTitle".to_string(), self.property_title.clone()),
            ("propertySlug".to_string(), self.property_slug.clone()),
            ("propertyLocation".to_string(), self.property_location.to_string()),
        ];
        if let Some(description) = &self.property_description {
            fields.push(("propertyDescription".to_string(), description.clone()));
        }
        fields.extend([
            ("propertyPrice".to_string(), self.property_price.to_string()),
            ("propertyType".to_string(), self.property_type.to_string()),
            ("propertyStatus".to_string(), self.property_status.to_string()),
            ("propertyArea".to_string(), self.property_area.to_string()),
        ]);
        fields
    }
}

/// Partial payload of `PUT /properties/:id`
#[derive(Clone, PartialEq, Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePropertyData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_location: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_type: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_status: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_area: Option<f64>,
}

impl UpdatePropertyData {
    /// Only the fields being changed are checked
    pub fn validate(&self) -> ClientResult<()> {
        if let Some(price) = self.property_price {
            validate_positive(price, "Property price must be greater than 0")?;
        }
        if let Some(area) = self.property_area {
            validate_positive(area, "Property area must be greater than 0")?;
        }
        if matches!(&self.property_title, Some(title) if title.trim().is_empty()) {
            return Err(ClientError::Validation("Property title is required".into()));
        }
        Ok(())
    }
}

fn validate_positive(value: f64, message: &str) -> ClientResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ClientError::Validation(message.to_string()))
    }
}

/// URL slug from a title: lowercase, only `[a-z0-9-]`, single dashes between words.
pub fn slugify(title: &str) -> String {
    let cleaned: String = title
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() || *c == '-')
        .collect();

    cleaned
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_create() -> CreatePropertyData {
        CreatePropertyData {
            property_title: "Sea View Villa".into(),
            property_slug: "sea-view-villa".into(),
            property_location: 1,
            property_description: None,
            property_price: 250_000.0,
            property_type: 2,
            property_status: 3,
            property_area: 1800.0,
            image: None,
        }
    }

    #[test]
    fn property_accepts_raw_lookup_keys() {
        let property: Property = serde_json::from_value(json!({
            "propertyId": 4,
            "propertyTitle": "Loft",
            "propertySlug": "loft",
            "propertyLocation": {"locationId": 1, "locationDescription": "Kandy"},
            "propertyDescription": "Top floor",
            "propertyPrice": 120000,
            "propertyType": {"id": 2, "description": "Apartment"},
            "propertyStatus": {"statusId": 1, "statusDescription": "For Rent"},
            "propertyArea": 90.5,
            "propertyImagePath": "/uploads/loft.jpg",
            "createdAt": "2025-01-02T10:00:00.000Z",
            "updatedAt": "2025-01-02T10:00:00.000Z"
        }))
        .unwrap();

        assert_eq!(property.property_location.description, "Kandy");
        assert_eq!(property.property_type.id, 2);
        assert_eq!(property.property_status.description, "For Rent");
        assert_eq!(property.property_price, 120000.0);
    }

    #[test]
    fn null_optional_text_reads_as_empty() {
        let property: Property = serde_json::from_value(json!({
            "propertyId": 5,
            "propertyTitle": "Plot",
            "propertySlug": "plot",
            "propertyLocation": {"id": 1, "description": "Galle"},
            "propertyDescription": null,
            "propertyPrice": 40000,
            "propertyType": {"id": 3, "description": "Land"},
            "propertyStatus": {"id": 1, "description": "For Sale"},
            "propertyArea": 2000,
            "propertyImagePath": null,
            "createdAt": null
        }))
        .unwrap();

        assert_eq!(property.property_description, "");
        assert_eq!(property.property_image_path, "");
        assert_eq!(property.created_at, "");
        assert_eq!(property.updated_at, "");
    }

    #[test]
    fn filters_only_emit_set_keys() {
        let filters = SearchFilters {
            location_id: Some(3),
            type_id: Some(1),
            ..Default::default()
        };
        assert!(filters.is_active());
        assert_eq!(
            filters.to_query(),
            vec![
                ("locationId".to_string(), "3".to_string()),
                ("typeId".to_string(), "1".to_string())
            ]
        );
        assert!(!SearchFilters::default().is_active());
    }

    #[test]
    fn create_validation_rejects_non_positive_numbers() {
        assert!(valid_create().validate().is_ok());

        let zero_price = CreatePropertyData { property_price: 0.0, ..valid_create() };
        assert_eq!(
            zero_price.validate().unwrap_err(),
            ClientError::Validation("Property price must be greater than 0".into())
        );

        let negative_area = CreatePropertyData { property_area: -5.0, ..valid_create() };
        assert_eq!(
            negative_area.validate().unwrap_err().to_string(),
            "Property area must be greater than 0"
        );

        let nan_price = CreatePropertyData { property_price: f64::NAN, ..valid_create() };
        assert!(nan_price.validate().is_err());

        let no_location = CreatePropertyData { property_location: 0, ..valid_create() };
        assert_eq!(no_location.validate().unwrap_err().to_string(), "Please select a location");
    }

    #[test]
    fn create_payload_uses_backend_field_names() {
        let value = serde_json::to_value(valid_create()).unwrap();
        assert_eq!(value["propertyTitle"], "Sea View Villa");
        assert_eq!(value["propertyLocation"], 1);
        assert!(value.get("propertyDescription").is_none());
        assert!(value.get("image").is_none());
    }

    #[test]
    fn update_validation_checks_only_present_fields() {
        assert!(UpdatePropertyData::default().validate().is_ok());
        let update = UpdatePropertyData { property_area: Some(0.0), ..Default::default() };
        assert!(update.validate().unwrap_err().is_validation());
    }

    #[test]
    fn slug_generation() {
        assert_eq!(slugify("Sea View Villa"), "sea-view-villa");
        assert_eq!(slugify("  3-Bed  House, Kandy!! "), "3-bed-house-kandy");
        assert_eq!(slugify("a -- b"), "a-b");
        let data = CreatePropertyData {
            property_slug: String::new(),
            property_title: "Hill Top Bungalow".into(),
            ..valid_create()
        }
        .with_generated_slug();
        assert_eq!(data.property_slug, "hill-top-bungalow");
    }
}
