// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::{DiscogsError, Result};
use crate::json::{DiscogsUrl, Fields, JsonObject};
use serde::Serialize;
use serde_json::Value;

/// One page of a paginated collection.
///
/// `pagination` is kept exactly as the API returned it; the accessors below
/// are conveniences over its well-known keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub pagination: JsonObject,
    pub items: Vec<T>,
}

impl<T> Page<T> {
    /// Decode a collection response. The first of `list_keys` present in
    /// `object` supplies the items; every item must be a JSON object.
    pub fn from_json(
        object: &JsonObject,
        list_keys: &[&'static str],
        decode: impl Fn(&JsonObject) -> T,
    ) -> Result<Self> {
        let pagination = match object.get("pagination") {
            Some(Value::Object(pagination)) => pagination.clone(),
            Some(_) => return Err(DiscogsError::InvalidField("pagination")),
            None => return Err(DiscogsError::MissingField("pagination")),
        };

        let (key, raw_items) = list_keys
            .iter()
            .find_map(|key| object.get(*key).map(|value| (*key, value)))
            .ok_or(DiscogsError::MissingField(
                list_keys.first().copied().unwrap_or("items"),
            ))?;
        let raw_items = raw_items
            .as_array()
            .ok_or(DiscogsError::InvalidField(key))?;

        let items = raw_items
            .iter()
            .map(|item| {
                item.as_object()
                    .map(&decode)
                    .ok_or(DiscogsError::InvalidField(key))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { pagination, items })
    }

    pub fn page(&self) -> Option<u32> {
        Fields::new(&self.pagination).u32("page")
    }

    pub fn pages(&self) -> Option<u32> {
        Fields::new(&self.pagination).u32("pages")
    }

    pub fn per_page(&self) -> Option<u32> {
        Fields::new(&self.pagination).u32("per_page")
    }

    /// Total number of items across all pages.
    pub fn total_items(&self) -> Option<u64> {
        Fields::new(&self.pagination).u64("items")
    }

    pub fn next_url(&self) -> Option<DiscogsUrl> {
        self.pagination
            .get("urls")
            .and_then(Value::as_object)
            .and_then(|urls| Fields::new(urls).url("next"))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    fn title(obj: &JsonObject) -> Option<String> {
        Fields::new(obj).string("title")
    }

    #[test]
    fn reads_pagination_helpers() {
        let response = object(json!({
            "pagination": {
                "page": 2,
                "pages": 30,
                "per_page": 3,
                "items": 89,
                "urls": {
                    "first": "https://api.discogs.com/artists/1/releases?page=1&per_page=3",
                    "next": "https://api.discogs.com/artists/1/releases?page=3&per_page=3"
                }
            },
            "releases": [{"title": "a"}, {"title": "b"}]
        }));

        let page = Page::from_json(&response, &["releases"], title).unwrap();
        assert_eq!(page.page(), Some(2));
        assert_eq!(page.pages(), Some(30));
        assert_eq!(page.per_page(), Some(3));
        assert_eq!(page.total_items(), Some(89));
        assert_eq!(
            page.next_url().unwrap().url().query(),
            Some("page=3&per_page=3")
        );
        assert_eq!(page.len(), 2);
    }

    #[test]
    fn falls_back_to_later_list_keys() {
        let response = object(json!({
            "pagination": {},
            "releases": [{"title": "only"}]
        }));

        let page = Page::from_json(&response, &["versions", "releases"], title).unwrap();
        assert_eq!(page.items, vec![Some("only".to_string())]);
        assert_eq!(page.page(), None);
        assert_eq!(page.next_url(), None);
    }

    #[test]
    fn missing_keys_are_decode_errors() {
        let no_pagination = object(json!({"releases": []}));
        assert!(matches!(
            Page::from_json(&no_pagination, &["releases"], title),
            Err(DiscogsError::MissingField("pagination"))
        ));

        let no_list = object(json!({"pagination": {}}));
        assert!(matches!(
            Page::from_json(&no_list, &["releases"], title),
            Err(DiscogsError::MissingField("releases"))
        ));
    }

    #[test]
    fn non_object_items_are_rejected() {
        let response = object(json!({
            "pagination": {},
            "releases": [{"title": "fine"}, 42]
        }));
        assert!(matches!(
            Page::from_json(&response, &["releases"], title),
            Err(DiscogsError::InvalidField("releases"))
        ));

        let wrong_pagination = object(json!({"pagination": [], "releases": []}));
        assert!(matches!(
            Page::from_json(&wrong_pagination, &["releases"], title),
            Err(DiscogsError::InvalidField("pagination"))
        ));
    }
}
