//! In-memory service used by the unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use contracts::domain::common::{ApiResource, ResourceId};
use contracts::shared::list::{ListQuery, ListResponse};
use contracts::shared::stats::StatValue;
use serde::{Deserialize, Serialize};

use super::api_client::{ApiError, ResourceService};
use super::filter_state::Dimension;
use super::list_pipeline::ListResource;
use super::stats::count_where;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Widget {
    pub id: ResourceId,
    pub name: String,
    pub color: String,
}

impl Widget {
    pub fn many(n: usize) -> Vec<Widget> {
        const COLORS: [&str; 3] = ["red", "green", "blue"];
        (1..=n)
            .map(|i| Widget {
                id: ResourceId::new_v4(),
                name: format!("widget-{}", i),
                color: COLORS[i % COLORS.len()].to_string(),
            })
            .collect()
    }
}

impl ApiResource for Widget {
    fn id(&self) -> ResourceId {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn resource_index() -> &'static str {
        "t001"
    }

    fn collection_name() -> &'static str {
        "widget"
    }

    fn endpoint() -> &'static str {
        "/api/widgets/"
    }

    fn element_name() -> &'static str {
        "Widget"
    }

    fn list_name() -> &'static str {
        "Widgets"
    }
}

fn color(w: &Widget) -> Option<String> {
    Some(w.color.clone())
}

static WIDGET_DIMENSIONS: [Dimension<Widget>; 1] = [Dimension {
    key: "color",
    label: "Color",
    extract: color,
}];

pub struct WidgetList;

impl ListResource for WidgetList {
    type Entity = Widget;

    const KEY: &'static str = "widgets";
    const LOAD_ERROR: &'static str = "Failed to load widgets";
    const ROUTE: &'static str = "/widgets";

    fn dimensions() -> &'static [Dimension<Widget>] {
        &WIDGET_DIMENSIONS
    }

    fn statistics(items: &[Widget], total_count: usize) -> Vec<StatValue> {
        vec![
            StatValue::integer("total", "Total", total_count),
            StatValue::integer("red", "Red", count_where(items, |w| w.color == "red")),
        ]
    }

    fn columns() -> &'static [&'static str] {
        &["Name", "Color"]
    }

    fn row(w: &Widget) -> Vec<String> {
        vec![w.name.clone(), w.color.clone()]
    }
}

/// Сервис поверх вектора; можно задать задержку или ошибку следующего запроса
pub struct MockService {
    rows: Mutex<Vec<Widget>>,
    page_size: usize,
    queries: Mutex<Vec<ListQuery>>,
    failures: Mutex<VecDeque<ApiError>>,
    delays: Mutex<VecDeque<Duration>>,
}

impl MockService {
    pub fn with_rows(rows: Vec<Widget>, page_size: usize) -> Self {
        Self {
            rows: Mutex::new(rows),
            page_size,
            queries: Mutex::new(Vec::new()),
            failures: Mutex::new(VecDeque::new()),
            delays: Mutex::new(VecDeque::new()),
        }
    }

    pub fn queries(&self) -> Vec<ListQuery> {
        self.queries.lock().unwrap().clone()
    }

    pub fn fail_next(&self, error: ApiError) {
        self.failures.lock().unwrap().push_back(error);
    }

    pub fn delay_next(&self, delay: Duration) {
        self.delays.lock().unwrap().push_back(delay);
    }

    async fn script(&self) -> Result<(), ApiError> {
        let delay = self.delays.lock().unwrap().pop_front();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        let failure = self.failures.lock().unwrap().pop_front();
        match failure {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ResourceService<Widget> for MockService {
    async fn get_all(&self, query: &ListQuery) -> Result<ListResponse<Widget>, ApiError> {
        self.queries.lock().unwrap().push(query.clone());
        let matching: Vec<Widget> = {
            let rows = self.rows.lock().unwrap();
            rows.iter()
                .filter(|w| match &query.search {
                    Some(term) => w.name.contains(term.as_str()),
                    None => true,
                })
                .cloned()
                .collect()
        };
        self.script().await?;

        let start = (query.page as usize - 1) * self.page_size;
        let results = matching
            .iter()
            .skip(start)
            .take(self.page_size)
            .cloned()
            .collect();
        Ok(ListResponse::new(results, matching.len()))
    }

    async fn get_by_id(&self, id: &str) -> Result<Widget, ApiError> {
        self.script().await?;
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|w| w.id.as_string() == id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound {
                resource: "widget".to_string(),
                id: id.to_string(),
            })
    }

    async fn create(&self, body: &serde_json::Value) -> Result<Widget, ApiError> {
        self.script().await?;
        let widget: Widget =
            serde_json::from_value(body.clone()).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.rows.lock().unwrap().push(widget.clone());
        Ok(widget)
    }

    async fn update(&self, id: &str, _body: &serde_json::Value) -> Result<Widget, ApiError> {
        self.get_by_id(id).await
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.script().await?;
        self.rows.lock().unwrap().retain(|w| w.id.as_string() != id);
        Ok(())
    }
}
