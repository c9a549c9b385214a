use contracts::domain::common::ApiResource;

use super::api_client::{ApiError, ResourceService};
use super::list_pipeline::ListResource;
use super::notify::{Notification, Notifier};

/// Результат загрузки экрана деталей
#[derive(Debug, Clone, PartialEq)]
pub enum DetailOutcome<E> {
    Loaded(E),
    /// Загрузка не удалась: экран закрывается, возврат к списку
    Redirect { route: &'static str },
}

impl<E> DetailOutcome<E> {
    pub fn loaded(self) -> Option<E> {
        match self {
            DetailOutcome::Loaded(e) => Some(e),
            DetailOutcome::Redirect { .. } => None,
        }
    }
}

/// Загрузить запись по id
///
/// Любая ошибка (включая 404) фатальна для экрана: одно уведомление и редирект
/// на маршрут списка.
pub async fn load_detail<R: ListResource>(
    service: &dyn ResourceService<R::Entity>,
    notifier: &dyn Notifier,
    id: &str,
) -> DetailOutcome<R::Entity> {
    let element = R::Entity::element_name();
    match service.get_by_id(id).await {
        Ok(entity) => {
            tracing::info!("{} {} loaded: {}", element, id, entity.display_name());
            DetailOutcome::Loaded(entity)
        }
        Err(error) => {
            tracing::warn!("{} {} failed to load: {}", element, id, error);
            let description = match &error {
                ApiError::NotFound { .. } => format!("{} not found", element),
                _ => format!("Failed to load {}", element.to_lowercase()),
            };
            notifier.notify(Notification::error("Error", description));
            DetailOutcome::Redirect { route: R::ROUTE }
        }
    }
}
