#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use admin::shared::api_client::{ApiError, ResourceService};
use contracts::domain::a001_property::{Property, PropertyStatus};
use contracts::domain::common::ResourceId;
use contracts::shared::list::{ListQuery, ListResponse};

pub fn property(name: &str, status: PropertyStatus) -> Property {
    Property {
        id: ResourceId::new_v4(),
        name: name.to_string(),
        property_type: None,
        property_type_name: Some("Hotel".to_string()),
        property_category: None,
        property_category_name: None,
        address: None,
        rating: Some(4.0),
        total_reviews: 10,
        status,
        check_in_time: None,
        check_out_time: None,
        created_at: chrono::Utc::now(),
        updated_at: None,
    }
}

/// `paris` объектов в Париже и `other` в других городах
pub fn catalogue(paris: usize, other: usize) -> Vec<Property> {
    let mut rows: Vec<Property> = (1..=paris)
        .map(|i| property(&format!("Hotel Paris {}", i), PropertyStatus::Active))
        .collect();
    rows.extend((1..=other).map(|i| property(&format!("Hotel Lyon {}", i), PropertyStatus::Pending)));
    rows
}

/// Сервер с фиксированным размером страницы и поиском по подстроке имени
pub struct FakeApi {
    rows: Vec<Property>,
    page_size: usize,
    queries: Mutex<Vec<ListQuery>>,
    failures: Mutex<VecDeque<ApiError>>,
}

impl FakeApi {
    pub fn new(rows: Vec<Property>, page_size: usize) -> Self {
        Self {
            rows,
            page_size,
            queries: Mutex::new(Vec::new()),
            failures: Mutex::new(VecDeque::new()),
        }
    }

    pub fn fail_next(&self, error: ApiError) {
        self.failures.lock().unwrap().push_back(error);
    }

    pub fn queries(&self) -> Vec<ListQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl ResourceService<Property> for FakeApi {
    async fn get_all(&self, query: &ListQuery) -> Result<ListResponse<Property>, ApiError> {
        self.queries.lock().unwrap().push(query.clone());
        if let Some(error) = self.failures.lock().unwrap().pop_front() {
            return Err(error);
        }
        let matching: Vec<&Property> = self
            .rows
            .iter()
            .filter(|p| match &query.search {
                Some(term) => p.name.contains(term.as_str()),
                None => true,
            })
            .collect();
        let start = (query.page as usize - 1) * self.page_size;
        let results = matching
            .iter()
            .skip(start)
            .take(self.page_size)
            .map(|p| (*p).clone())
            .collect();
        Ok(ListResponse::new(results, matching.len()))
    }

    async fn get_by_id(&self, id: &str) -> Result<Property, ApiError> {
        self.rows
            .iter()
            .find(|p| p.id.as_string() == id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound {
                resource: "property".to_string(),
                id: id.to_string(),
            })
    }

    async fn create(&self, _body: &serde_json::Value) -> Result<Property, ApiError> {
        Err(ApiError::Http {
            status: 405,
            body: "read-only".to_string(),
        })
    }

    async fn update(&self, _id: &str, _body: &serde_json::Value) -> Result<Property, ApiError> {
        Err(ApiError::Http {
            status: 405,
            body: "read-only".to_string(),
        })
    }

    async fn delete(&self, _id: &str) -> Result<(), ApiError> {
        Err(ApiError::Http {
            status: 405,
            body: "read-only".to_string(),
        })
    }
}
