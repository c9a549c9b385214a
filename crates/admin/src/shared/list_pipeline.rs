//! List screen data pipeline: fetch, paginate, filter, aggregate.
//!
//! One `ListPipeline` per list screen. The pipeline owns the session state
//! (page cursor, search term, filters, last good page) and talks to the API
//! only through `ResourceService`.
//!
//! Fetches are tagged with a per-slot sequence number. A response is applied
//! only if no newer request was issued for the same slot (current page or the
//! statistics snapshot), so the last issued request always wins.
//!
//! The statistics snapshot is page 1 of the unfiltered collection, fetched
//! whenever page 1 is loaded without a search term. It is not a global
//! aggregate: collections larger than one server page are summarised from
//! their first page only.

use std::marker::PhantomData;
use std::sync::{Arc, Mutex, MutexGuard};

use contracts::domain::common::ApiResource;
use contracts::shared::list::{normalize_search, ListQuery};
use contracts::shared::stats::StatValue;
use serde::de::DeserializeOwned;

use super::api_client::{ApiError, ResourceService};
use super::filter_state::{Dimension, FilterError, FilterState, FilterValue};
use super::notify::{Notification, Notifier};
use super::pagination::Pagination;

// ============================================================================
// Resource binding
// ============================================================================

/// Привязка ресурса к экрану списка
pub trait ListResource: Send + Sync + 'static {
    type Entity: ApiResource + DeserializeOwned + Clone + Send + Sync + 'static;

    /// Имя ресурса в CLI (`flights`, `cruise-ships`, ...)
    const KEY: &'static str;
    /// Текст уведомления при ошибке загрузки списка
    const LOAD_ERROR: &'static str;
    /// Маршрут экрана списка (куда возвращает экран деталей)
    const ROUTE: &'static str;

    fn title() -> &'static str {
        Self::Entity::list_name()
    }

    fn endpoint() -> &'static str {
        Self::Entity::endpoint()
    }

    fn dimensions() -> &'static [Dimension<Self::Entity>];

    /// Карточки статистики
    ///
    /// `total_count` идет только в карточку "Total" (при поиске это `count` сервера);
    /// доли и средние считаются по `items`.
    fn statistics(items: &[Self::Entity], total_count: usize) -> Vec<StatValue>;

    fn columns() -> &'static [&'static str];

    fn row(entity: &Self::Entity) -> Vec<String>;
}

// ============================================================================
// View model
// ============================================================================

/// Пустое состояние списка
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// Данных нет вообще
    NoData,
    /// Есть поиск или фильтры, но ничего не подходит (предлагается сбросить фильтры)
    NoMatches,
}

/// Снимок состояния для отрисовки
#[derive(Debug, Clone)]
pub struct ListView<E> {
    pub items: Vec<E>,
    pub pagination: Pagination,
    pub stats: Vec<StatValue>,
    pub loading: bool,
    pub filters_active: bool,
    pub active_filters: Vec<(&'static str, String)>,
    pub search: Option<String>,
    pub empty_state: Option<EmptyState>,
    pub last_error: Option<ApiError>,
}

// ============================================================================
// State
// ============================================================================

struct State<E: 'static> {
    /// Последняя успешно полученная страница (без клиентских фильтров)
    items: Vec<E>,
    /// Первая страница без поиска, источник статистики
    snapshot: Vec<E>,
    pagination: Pagination,
    search: Option<String>,
    filters: FilterState<E>,
    page_seq: u64,
    snapshot_seq: u64,
    page_loading: bool,
    snapshot_loading: bool,
    last_error: Option<ApiError>,
}

pub struct ListPipeline<R: ListResource> {
    service: Arc<dyn ResourceService<R::Entity>>,
    notifier: Arc<dyn Notifier>,
    state: Mutex<State<R::Entity>>,
    _resource: PhantomData<fn() -> R>,
}

impl<R: ListResource> ListPipeline<R> {
    pub fn new(service: Arc<dyn ResourceService<R::Entity>>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            service,
            notifier,
            state: Mutex::new(State {
                items: Vec::new(),
                snapshot: Vec::new(),
                pagination: Pagination::default(),
                search: None,
                filters: FilterState::new(R::dimensions()),
                page_seq: 0,
                snapshot_seq: 0,
                page_loading: false,
                snapshot_loading: false,
                last_error: None,
            }),
            _resource: PhantomData,
        }
    }

    fn lock(&self) -> MutexGuard<'_, State<R::Entity>> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn notify_load_error(&self, error: &ApiError) {
        tracing::warn!("{}: {}", R::LOAD_ERROR, error);
        self.notifier
            .notify(Notification::error("Error", R::LOAD_ERROR));
    }

    // ------------------------------------------------------------------
    // Fetching
    // ------------------------------------------------------------------

    /// Загрузить текущую страницу с текущим поиском
    ///
    /// Возвращает `true`, если ответ был применен (успех последнего запроса).
    pub async fn load(&self) -> bool {
        let (seq, query) = {
            let mut st = self.lock();
            st.page_seq += 1;
            st.page_loading = true;
            let query = ListQuery::page(st.pagination.current_page).with_search(st.search.as_deref());
            (st.page_seq, query)
        };

        tracing::debug!("{} load #{}: {:?}", R::KEY, seq, query);
        let result = self.service.get_all(&query).await;

        let fetch_snapshot = {
            let mut st = self.lock();
            if seq != st.page_seq {
                tracing::debug!(
                    "{}: discarding stale page response #{} (latest #{})",
                    R::KEY,
                    seq,
                    st.page_seq
                );
                return false;
            }
            st.page_loading = false;

            match result {
                Ok(page) => {
                    tracing::info!(
                        "{}: page {} loaded ({} of {})",
                        R::KEY,
                        query.page,
                        page.results.len(),
                        page.count
                    );
                    st.pagination.observe(page.count, page.results.len());
                    st.items = page.results;
                    st.last_error = None;
                    query.page == 1 && query.search.is_none()
                }
                Err(error) => {
                    st.last_error = Some(error.clone());
                    drop(st);
                    self.notify_load_error(&error);
                    return false;
                }
            }
        };

        if fetch_snapshot {
            self.load_snapshot().await;
        }
        true
    }

    async fn load_snapshot(&self) -> bool {
        let seq = {
            let mut st = self.lock();
            st.snapshot_seq += 1;
            st.snapshot_loading = true;
            st.snapshot_seq
        };

        let result = self.service.get_all(&ListQuery::page(1)).await;

        let mut st = self.lock();
        if seq != st.snapshot_seq {
            tracing::debug!("{}: discarding stale snapshot response #{}", R::KEY, seq);
            return false;
        }
        st.snapshot_loading = false;

        match result {
            Ok(page) => {
                tracing::debug!("{}: statistics snapshot of {} rows", R::KEY, page.results.len());
                st.snapshot = page.results;
                true
            }
            Err(error) => {
                st.last_error = Some(error.clone());
                drop(st);
                self.notify_load_error(&error);
                false
            }
        }
    }

    /// Новый поисковый запрос: сброс на первую страницу и загрузка
    pub async fn search(&self, term: Option<&str>) -> bool {
        {
            let mut st = self.lock();
            st.search = normalize_search(term);
            st.pagination.reset();
        }
        self.load().await
    }

    /// Следующая страница; на последней странице ничего не делает
    pub async fn next_page(&self) -> bool {
        let moved = self.lock().pagination.next_page();
        if moved {
            self.load().await;
        }
        moved
    }

    pub async fn prev_page(&self) -> bool {
        let moved = self.lock().pagination.prev_page();
        if moved {
            self.load().await;
        }
        moved
    }

    pub async fn go_to(&self, page: u32) -> bool {
        let moved = self.lock().pagination.go_to(page);
        if moved {
            self.load().await;
        }
        moved
    }

    pub async fn refresh(&self) -> bool {
        self.load().await
    }

    /// Удалить запись и перезагрузить текущую страницу
    pub async fn delete(&self, id: &str) -> bool {
        let element = R::Entity::element_name();
        match self.service.delete(id).await {
            Ok(()) => {
                tracing::info!("{}: deleted {}", R::KEY, id);
                self.notifier.notify(Notification::success(
                    "Deleted",
                    format!("{} deleted", element),
                ));
                self.refresh().await;
                true
            }
            Err(error) => {
                tracing::warn!("{}: delete {} failed: {}", R::KEY, id, error);
                self.notifier.notify(Notification::error(
                    "Error",
                    format!("Failed to delete {}", element.to_lowercase()),
                ));
                false
            }
        }
    }

    // ------------------------------------------------------------------
    // Client-side filters
    // ------------------------------------------------------------------

    pub fn set_filter(&self, key: &str, value: impl Into<FilterValue>) -> Result<(), FilterError> {
        self.lock().filters.set_filter(key, value)
    }

    pub fn clear_filters(&self) {
        self.lock().filters.clear_all();
    }

    /// Значения для выпадающего списка измерения (по текущей странице)
    pub fn filter_options(&self, key: &str) -> Result<Vec<String>, FilterError> {
        let st = self.lock();
        st.filters.options(&st.items, key)
    }

    // ------------------------------------------------------------------
    // View
    // ------------------------------------------------------------------

    pub fn pagination(&self) -> Pagination {
        self.lock().pagination
    }

    pub fn is_loading(&self) -> bool {
        let st = self.lock();
        st.page_loading || st.snapshot_loading
    }

    pub fn view(&self) -> ListView<R::Entity> {
        let st = self.lock();
        let items = st.filters.apply(&st.items);
        let filters_active = st.filters.is_active();
        let searching = st.search.is_some();
        let loading = st.page_loading || st.snapshot_loading;

        let stats = if !searching && !filters_active && !st.snapshot.is_empty() {
            R::statistics(&st.snapshot, st.snapshot.len())
        } else if !filters_active {
            // поиск выполняет сервер: страница не отфильтрована на клиенте
            R::statistics(&items, st.pagination.total_count)
        } else {
            R::statistics(&items, items.len())
        };

        let empty_state = if loading || !items.is_empty() {
            None
        } else if searching || filters_active {
            Some(EmptyState::NoMatches)
        } else {
            Some(EmptyState::NoData)
        };

        ListView {
            items,
            pagination: st.pagination,
            stats,
            loading,
            filters_active,
            active_filters: st
                .filters
                .active()
                .into_iter()
                .map(|(k, v)| (k, v.to_string()))
                .collect(),
            search: st.search.clone(),
            empty_state,
            last_error: st.last_error.clone(),
        }
    }
}
