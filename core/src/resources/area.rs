//! Hierarchical area masters: large, middle and small areas.
//!
//! The upstream documents caps on repeated codes (3 large areas, 5 middle
//! or small areas) and silently ignores the excess. The client sends every
//! code it was given.

use crate::client::{Resource, ResourceClient};
use crate::query::{FilterSet, FilterValue};
use crate::types::{LargeArea, MiddleArea, SmallArea};

fn extend<I, S>(target: &mut Vec<String>, codes: I)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    target.extend(codes.into_iter().map(Into::into));
}

/// Large areas (`large_area/v1`).
#[derive(Debug, Clone, Copy)]
pub struct LargeAreaApi;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LargeAreaFilters {
    pub large_area: Vec<String>,
    pub keyword: Option<String>,
}

impl FilterSet for LargeAreaFilters {
    fn fields(&self) -> Vec<(&'static str, FilterValue)> {
        vec![
            ("large_area", FilterValue::list(&self.large_area)),
            ("keyword", FilterValue::text(self.keyword.as_deref())),
        ]
    }
}

impl Resource for LargeAreaApi {
    const PATH: &'static str = "large_area";
    const PAYLOAD_FIELD: &'static str = "large_area";
    type Filters = LargeAreaFilters;
    type Record = LargeArea;
}

impl<T> ResourceClient<LargeAreaApi, T> {
    /// Append large area codes (exact match).
    pub fn large_area<I, S>(&mut self, codes: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend(&mut self.filters.large_area, codes);
        self
    }

    /// Large area name, partial match.
    pub fn keyword(&mut self, keyword: impl Into<String>) -> &mut Self {
        self.filters.keyword = Some(keyword.into());
        self
    }
}

/// Middle areas (`middle_area/v1`).
#[derive(Debug, Clone, Copy)]
pub struct MiddleAreaApi;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MiddleAreaFilters {
    pub middle_area: Vec<String>,
    pub large_area: Vec<String>,
    pub keyword: Option<String>,
    pub start: Option<u32>,
    pub count: Option<u32>,
}

impl FilterSet for MiddleAreaFilters {
    fn fields(&self) -> Vec<(&'static str, FilterValue)> {
        vec![
            ("middle_area", FilterValue::list(&self.middle_area)),
            ("large_area", FilterValue::list(&self.large_area)),
            ("keyword", FilterValue::text(self.keyword.as_deref())),
            ("start", FilterValue::scalar(self.start)),
            ("count", FilterValue::scalar(self.count)),
        ]
    }
}

impl Resource for MiddleAreaApi {
    const PATH: &'static str = "middle_area";
    const PAYLOAD_FIELD: &'static str = "middle_area";
    type Filters = MiddleAreaFilters;
    type Record = MiddleArea;
}

impl<T> ResourceClient<MiddleAreaApi, T> {
    /// Append middle area codes (exact match).
    pub fn middle_area<I, S>(&mut self, codes: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend(&mut self.filters.middle_area, codes);
        self
    }

    /// Append large area codes (exact match).
    pub fn large_area<I, S>(&mut self, codes: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend(&mut self.filters.large_area, codes);
        self
    }

    pub fn keyword(&mut self, keyword: impl Into<String>) -> &mut Self {
        self.filters.keyword = Some(keyword.into());
        self
    }

    /// 1-based offset of the first returned record.
    pub fn start(&mut self, start: u32) -> &mut Self {
        self.filters.start = Some(start);
        self
    }

    pub fn count(&mut self, count: u32) -> &mut Self {
        self.filters.count = Some(count);
        self
    }
}

/// Small areas (`small_area/v1`).
#[derive(Debug, Clone, Copy)]
pub struct SmallAreaApi;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SmallAreaFilters {
    pub middle_area: Vec<String>,
    pub small_area: Vec<String>,
    pub keyword: Option<String>,
    pub start: Option<u32>,
    pub count: Option<u32>,
}

impl FilterSet for SmallAreaFilters {
    fn fields(&self) -> Vec<(&'static str, FilterValue)> {
        vec![
            ("middle_area", FilterValue::list(&self.middle_area)),
            ("small_area", FilterValue::list(&self.small_area)),
            ("keyword", FilterValue::text(self.keyword.as_deref())),
            ("start", FilterValue::scalar(self.start)),
            ("count", FilterValue::scalar(self.count)),
        ]
    }
}

impl Resource for SmallAreaApi {
    const PATH: &'static str = "small_area";
    const PAYLOAD_FIELD: &'static str = "small_area";
    type Filters = SmallAreaFilters;
    type Record = SmallArea;
}

impl<T> ResourceClient<SmallAreaApi, T> {
    /// Append small area codes (exact match).
    pub fn small_area<I, S>(&mut self, codes: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend(&mut self.filters.small_area, codes);
        self
    }

    /// Append middle area codes (exact match).
    pub fn middle_area<I, S>(&mut self, codes: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend(&mut self.filters.middle_area, codes);
        self
    }

    pub fn keyword(&mut self, keyword: impl Into<String>) -> &mut Self {
        self.filters.keyword = Some(keyword.into());
        self
    }

    pub fn start(&mut self, start: u32) -> &mut Self {
        self.filters.start = Some(start);
        self
    }

    pub fn count(&mut self, count: u32) -> &mut Self {
        self.filters.count = Some(count);
        self
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::ClientConfig;
    use crate::credentials::Credentials;

    fn client<R: Resource>() -> ResourceClient<R, ()> {
        let config = ClientConfig::new("http://h", Credentials::with_key("k").unwrap());
        ResourceClient::new(config, Arc::new(()))
    }

    #[test]
    fn codes_beyond_documented_cap_are_still_sent() {
        let mut c = client::<LargeAreaApi>();
        c.large_area(["Z011", "Z012", "Z013", "Z014"]);
        assert_eq!(c.query().get("large_area"), Some("Z011,Z012,Z013,Z014"));
    }

    #[test]
    fn middle_area_paging() {
        let mut c = client::<MiddleAreaApi>();
        c.large_area(["Z011"]).start(1).count(20);
        let query = c.query();
        let pairs: Vec<(&str, &str)> = query.iter().collect();
        assert_eq!(pairs, vec![("large_area", "Z011"), ("start", "1"), ("count", "20")]);
    }

    #[test]
    fn small_area_order_follows_declaration() {
        let mut c = client::<SmallAreaApi>();
        c.small_area(["X001"]).middle_area(["Y005"]).keyword("銀座");
        let keys: Vec<String> = c.query().iter().map(|(k, _)| k.to_string()).collect();
        assert_eq!(keys, vec!["middle_area", "small_area", "keyword"]);
    }
}
