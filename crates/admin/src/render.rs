//! Plain-text rendering of list, detail and gallery screens.

use std::fmt::Write as _;

use contracts::domain::common::ApiResource;
use contracts::shared::images::ImageRecord;

use crate::domain::ResourceInfo;
use crate::shared::format::{format_datetime, format_stat, or_dash};
use crate::shared::image_gallery::ImageGallery;
use crate::shared::list_pipeline::{EmptyState, ListResource, ListView};
use crate::shared::notify::{Notification, Severity};

/// Таблица с выравниванием колонок по самому длинному значению
pub fn table(columns: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = columns.iter().map(|c| c.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    let line = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, w)| format!("{:<width$}", cell, width = *w))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = String::new();
    let _ = writeln!(out, "{}", line(columns.to_vec()));
    let _ = writeln!(
        out,
        "{}",
        widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().join("  ")
    );
    for row in rows {
        let _ = writeln!(out, "{}", line(row.iter().map(String::as_str).collect()));
    }
    out
}

pub fn render_list<R: ListResource>(view: &ListView<R::Entity>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", R::title());
    if let Some(search) = &view.search {
        let _ = writeln!(out, "Search: \"{}\"", search);
    }
    if view.filters_active {
        let filters: Vec<String> = view
            .active_filters
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect();
        let _ = writeln!(out, "Filters: {}", filters.join(", "));
    }
    out.push('\n');

    for stat in &view.stats {
        let _ = write!(out, "[{}: {}", stat.label, format_stat(stat));
        if let Some(hint) = &stat.hint {
            let _ = write!(out, " ({})", hint);
        }
        out.push_str("]  ");
    }
    out.push_str("\n\n");

    if view.loading {
        out.push_str("Loading...\n");
    }

    match view.empty_state {
        Some(EmptyState::NoData) => {
            let _ = writeln!(out, "No {} yet.", R::title().to_lowercase());
        }
        Some(EmptyState::NoMatches) => {
            out.push_str("No results match the current search or filters. Clear filters to see all rows.\n");
        }
        None => {
            let mut columns = vec!["ID"];
            columns.extend_from_slice(R::columns());
            let rows: Vec<Vec<String>> = view
                .items
                .iter()
                .map(|e| {
                    let mut row = vec![e.id().as_string()];
                    row.extend(R::row(e));
                    row
                })
                .collect();
            out.push_str(&table(&columns, &rows));
        }
    }

    let p = &view.pagination;
    let _ = writeln!(
        out,
        "\nPage {} of {} ({} total){}{}",
        p.current_page,
        p.total_pages,
        p.total_count,
        if p.has_prev() { "  < prev" } else { "" },
        if p.has_next() { "  next >" } else { "" },
    );
    out
}

pub fn render_detail<R: ListResource>(entity: &R::Entity) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}: {}", R::Entity::element_name(), entity.display_name());
    let _ = writeln!(out, "{:<14}{}", "ID", entity.id());
    for (label, value) in R::columns().iter().zip(R::row(entity)) {
        let _ = writeln!(out, "{:<14}{}", label, value);
    }
    out
}

fn image_row(image: &ImageRecord) -> Vec<String> {
    vec![
        image.id.as_string(),
        image.display_order.to_string(),
        image.image_type.clone(),
        or_dash(image.alt_text.as_deref()),
        image.image_url.clone(),
        format_datetime(&image.created_at),
    ]
}

pub fn render_gallery(gallery: &ImageGallery) -> String {
    let owner = gallery.owner();
    let mut out = String::new();
    let _ = writeln!(out, "Images of {} {}", owner.kind(), owner.id());

    match gallery.primary() {
        Some(primary) => {
            let _ = writeln!(out, "Primary: {}", primary.image_url);
        }
        None => out.push_str("Primary: -\n"),
    }

    let rows: Vec<Vec<String>> = gallery.gallery().into_iter().map(image_row).collect();
    if rows.is_empty() && gallery.images().is_empty() {
        out.push_str("No images.\n");
    } else {
        out.push_str(&table(&["ID", "Order", "Type", "Alt", "URL", "Added"], &rows));
    }
    out
}

pub fn render_resources(resources: &[ResourceInfo]) -> String {
    let rows: Vec<Vec<String>> = resources
        .iter()
        .map(|r| {
            vec![
                r.key.to_string(),
                r.title.to_string(),
                r.endpoint.to_string(),
                r.dimensions.join(", "),
            ]
        })
        .collect();
    table(&["Key", "Title", "Endpoint", "Filters"], &rows)
}

pub fn render_notifications(notifications: &[Notification]) -> String {
    let mut out = String::new();
    for n in notifications {
        let marker = match n.severity {
            Severity::Error => "!",
            Severity::Success => "+",
            Severity::Info => "i",
        };
        let _ = writeln!(out, "[{}] {}: {}", marker, n.title, n.description);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_alignment() {
        let rendered = table(
            &["Code", "Name"],
            &[
                vec!["AF".to_string(), "Air France".to_string()],
                vec!["JL".to_string(), "Japan Airlines".to_string()],
            ],
        );
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Code  Name");
        assert_eq!(lines[1], "----  --------------");
        assert_eq!(lines[3], "JL    Japan Airlines");
    }

    #[test]
    fn test_render_notifications() {
        let out = render_notifications(&[Notification::error("Error", "Failed to load flights")]);
        assert_eq!(out, "[!] Error: Failed to load flights\n");
    }
}
