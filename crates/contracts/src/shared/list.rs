use serde::{Deserialize, Serialize};

/// Страница списка в формате API (`count`/`next`/`previous`/`results`)
///
/// `count` это общее число записей под поиск, а не длина `results`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

impl<T> Default for ListResponse<T> {
    fn default() -> Self {
        Self {
            count: 0,
            next: None,
            previous: None,
            results: Vec::new(),
        }
    }
}

impl<T> ListResponse<T> {
    /// Страница без ссылок next/previous (удобно для фикстур)
    pub fn new(results: Vec<T>, count: usize) -> Self {
        Self {
            count,
            next: None,
            previous: None,
            results,
        }
    }
}

/// Запрос страницы списка
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListQuery {
    /// Номер страницы, начиная с 1
    pub page: u32,
    /// Свободный текст поиска (передается серверу)
    #[serde(default)]
    pub search: Option<String>,
    /// Дополнительные параметры (например, `property=<id>`)
    #[serde(default)]
    pub params: Vec<(String, String)>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::page(1)
    }
}

impl ListQuery {
    pub fn page(page: u32) -> Self {
        Self {
            page: page.max(1),
            search: None,
            params: Vec::new(),
        }
    }

    /// Пустая или пробельная строка означает "без поиска"
    pub fn with_search(mut self, search: Option<&str>) -> Self {
        self.search = normalize_search(search);
        self
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Пары query-параметров в порядке: page, search, остальные
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![("page".to_string(), self.page.to_string())];
        if let Some(search) = &self.search {
            pairs.push(("search".to_string(), search.clone()));
        }
        pairs.extend(self.params.iter().cloned());
        pairs
    }
}

/// Нормализация поисковой строки: trim, пустая строка -> None
pub fn normalize_search(search: Option<&str>) -> Option<String> {
    search
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_response_tolerates_missing_fields() {
        let page: ListResponse<u32> = serde_json::from_str("{}").unwrap();
        assert_eq!(page.count, 0);
        assert!(page.results.is_empty());

        let page: ListResponse<u32> =
            serde_json::from_str(r#"{"count": 37, "next": "http://x/?page=2", "results": [1, 2]}"#)
                .unwrap();
        assert_eq!(page.count, 37);
        assert_eq!(page.results, vec![1, 2]);
    }

    #[test]
    fn test_query_pairs_order() {
        let q = ListQuery::page(2)
            .with_search(Some("  Paris "))
            .with_param("property", "abc");
        assert_eq!(
            q.to_query_pairs(),
            vec![
                ("page".to_string(), "2".to_string()),
                ("search".to_string(), "Paris".to_string()),
                ("property".to_string(), "abc".to_string()),
            ]
        );
    }

    #[test]
    fn test_blank_search_is_absent() {
        let q = ListQuery::page(0).with_search(Some("   "));
        assert_eq!(q.page, 1);
        assert!(q.search.is_none());
        assert_eq!(q.to_query_pairs().len(), 1);
    }
}
