use crate::error::ClientResult;
use crate::models::{
    ApiEnvelope, CreatePropertyData, DeleteResult, PaginatedProperties, Property, SearchFilters,
    UpdatePropertyData,
};
use crate::services::api_client::{ApiClient, FilePart, MultipartForm};

const PROPERTIES: &str = "/properties";
const PAGINATED: &str = "/properties/paginated";
const CREATE_WITH_IMAGE: &str = "/properties/create-with-image";

/// Property endpoints. Every call validates the envelope; none touches a store.
#[derive(Clone)]
pub struct PropertyService {
    api: ApiClient,
}

impl PropertyService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn get_all(&self) -> ClientResult<Vec<Property>> {
        let envelope: ApiEnvelope<Vec<Property>> = self.api.get(PROPERTIES, Vec::new()).await?;
        envelope.into_content("Failed to fetch properties")
    }

    pub async fn get_by_id(&self, id: i64) -> ClientResult<Property> {
        let endpoint = format!("{}/{}", PROPERTIES, id);
        let envelope: ApiEnvelope<Property> = self.api.get(&endpoint, Vec::new()).await?;
        envelope.into_content("Failed to fetch property")
    }

    pub async fn get_paginated(&self, page: u32, limit: u32) -> ClientResult<PaginatedProperties> {
        self.fetch_page(page, limit, &SearchFilters::default()).await
    }

    /// Paginated endpoint with `locationId`/`statusId`/`typeId` added for the set filters
    pub async fn search(
        &self,
        page: u32,
        limit: u32,
        filters: &SearchFilters,
    ) -> ClientResult<PaginatedProperties> {
        self.fetch_page(page, limit, filters).await
    }

    async fn fetch_page(
        &self,
        page: u32,
        limit: u32,
        filters: &SearchFilters,
    ) -> ClientResult<PaginatedProperties> {
        let mut query = vec![
            ("page".to_string(), page.to_string()),
            ("limit".to_string(), limit.to_string()),
        ];
        query.extend(filters.to_query());

        let envelope: ApiEnvelope<PaginatedProperties> = self.api.get(PAGINATED, query).await?;
        envelope.into_content("Failed to fetch properties")
    }

    /// JSON create, or multipart `create-with-image` when an image is attached.
    /// Callers validate first; this only talks to the backend.
    pub async fn create(&self, data: &CreatePropertyData) -> ClientResult<Property> {
        let envelope: ApiEnvelope<Property> = match &data.image {
            Some(image) => {
                let form = MultipartForm {
                    fields: data.form_fields(),
                    file: Some(FilePart {
                        field: "image".to_string(),
                        file_name: image.file_name.clone(),
                        mime_type: image.mime_type.clone(),
                        bytes: image.bytes.clone(),
                    }),
                };
                self.api.post_multipart(CREATE_WITH_IMAGE, form).await?
            }
            None => self.api.post(PROPERTIES, data).await?,
        };
        envelope.into_content("Failed to create property")
    }

    pub async fn update(&self, id: i64, data: &UpdatePropertyData) -> ClientResult<Property> {
        let endpoint = format!("{}/{}", PROPERTIES, id);
        let envelope: ApiEnvelope<Property> = self.api.put(&endpoint, data).await?;
        envelope.into_content("Failed to update property")
    }

    pub async fn delete(&self, id: i64) -> ClientResult<bool> {
        let endpoint = format!("{}/{}", PROPERTIES, id);
        let envelope: ApiEnvelope<DeleteResult> = self.api.delete(&endpoint).await?;
        envelope
            .into_content("Failed to delete property")
            .map(|result| result.deleted)
    }
}
