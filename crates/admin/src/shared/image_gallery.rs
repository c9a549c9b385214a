//! Image gallery of one owner record (car, cruise, airport, ...).

use std::sync::Arc;

use contracts::domain::common::ResourceId;
use contracts::shared::images::{
    ImageOwner, ImagePatch, ImageRecord, NewImage, PrimaryMarker, GALLERY_IMAGE_TYPE,
    MAIN_IMAGE_TYPE,
};
use futures::future::join_all;

use super::api_client::ImageService;
use super::notify::{Notification, Notifier};

pub struct ImageGallery {
    owner: ImageOwner,
    service: Arc<dyn ImageService>,
    notifier: Arc<dyn Notifier>,
    images: Vec<ImageRecord>,
}

impl ImageGallery {
    pub fn new(owner: ImageOwner, service: Arc<dyn ImageService>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            owner,
            service,
            notifier,
            images: Vec::new(),
        }
    }

    pub fn owner(&self) -> &ImageOwner {
        &self.owner
    }

    fn marker(&self) -> PrimaryMarker {
        self.owner.primary_marker()
    }

    /// Все изображения в порядке отображения
    pub fn images(&self) -> &[ImageRecord] {
        &self.images
    }

    pub fn primary(&self) -> Option<&ImageRecord> {
        let marker = self.marker();
        self.images.iter().find(|i| i.is_primary_for(marker))
    }

    /// Все, кроме главного изображения
    pub fn gallery(&self) -> Vec<&ImageRecord> {
        let primary_id = self.primary().map(|i| i.id);
        self.images
            .iter()
            .filter(|i| Some(i.id) != primary_id)
            .collect()
    }

    fn fail(&self, description: &str, error: &dyn std::fmt::Display) {
        tracing::warn!("{} ({} {}): {}", description, self.owner.kind(), self.owner.id(), error);
        self.notifier.notify(Notification::error("Error", description));
    }

    /// Загрузить изображения; при ошибке остаются прежние
    pub async fn load(&mut self) -> bool {
        match self.service.list(&self.owner).await {
            Ok(mut images) => {
                images.sort_by(|a, b| {
                    a.display_order
                        .cmp(&b.display_order)
                        .then(a.created_at.cmp(&b.created_at))
                });
                tracing::debug!("{} images loaded for {} {}", images.len(), self.owner.kind(), self.owner.id());
                self.images = images;
                true
            }
            Err(e) => {
                self.fail("Failed to load images", &e);
                false
            }
        }
    }

    /// Добавить изображение по URL; первое изображение становится главным
    pub async fn add(&mut self, image_url: &str, image_type: Option<&str>, alt_text: Option<&str>) -> bool {
        let image_url = image_url.trim();
        if image_url.is_empty() {
            self.notifier
                .notify(Notification::error("Error", "Please enter an image URL"));
            return false;
        }

        let first = self.images.is_empty();
        let requested_type = image_type
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(GALLERY_IMAGE_TYPE);
        let image_type = match self.marker() {
            PrimaryMarker::MainType if first => MAIN_IMAGE_TYPE,
            _ => requested_type,
        };

        let new_image = NewImage {
            image_url: image_url.to_string(),
            image_type: image_type.to_string(),
            alt_text: alt_text.map(str::trim).filter(|a| !a.is_empty()).map(str::to_string),
            display_order: self.images.len() as i32,
            is_primary: first,
        };

        match self.service.create(&self.owner, &new_image).await {
            Ok(created) => {
                self.images.push(created);
                self.notifier
                    .notify(Notification::success("Success", "Image added"));
                true
            }
            Err(e) => {
                self.fail("Failed to add image", &e);
                false
            }
        }
    }

    /// Сделать изображение главным
    ///
    /// Все PATCH-запросы отправляются одновременно. Локальное состояние меняется
    /// только если все запросы успешны.
    pub async fn set_primary(&mut self, id: &ResourceId) -> bool {
        if !self.images.iter().any(|i| &i.id == id) {
            self.fail("Failed to set primary image", &format!("image {} not in gallery", id));
            return false;
        }

        let marker = self.marker();
        let mut patches: Vec<(ResourceId, ImagePatch)> = self
            .images
            .iter()
            .filter(|i| i.is_primary_for(marker) && &i.id != id)
            .map(|i| (i.id, ImagePatch::primary(marker, false)))
            .collect();
        patches.push((*id, ImagePatch::primary(marker, true)));

        let owner = self.owner;
        let service = self.service.clone();
        let results = join_all(
            patches
                .iter()
                .map(|(image_id, patch)| service.update(image_id, &owner, patch)),
        )
        .await;

        if let Some(error) = results.into_iter().find_map(Result::err) {
            self.fail("Failed to set primary image", &error);
            return false;
        }

        for (image_id, patch) in &patches {
            if let Some(image) = self.images.iter_mut().find(|i| &i.id == image_id) {
                patch.apply_to(image);
            }
        }
        self.notifier
            .notify(Notification::success("Success", "Primary image updated"));
        true
    }

    pub async fn remove(&mut self, id: &ResourceId) -> bool {
        match self.service.delete(id, &self.owner).await {
            Ok(()) => {
                self.images.retain(|i| &i.id != id);
                self.notifier
                    .notify(Notification::success("Success", "Image deleted"));
                true
            }
            Err(e) => {
                self.fail("Failed to delete image", &e);
                false
            }
        }
    }
}
