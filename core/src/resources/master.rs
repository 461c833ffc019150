//! Flat master-data resources: budget, credit card, genre, service areas
//! and specials.

use crate::client::{Resource, ResourceClient};
use crate::query::{FilterSet, FilterValue, NoFilters};
use crate::types::{MasterRecord, ServiceArea, Special};

/// Dinner budget ranges (`budget/v1`).
#[derive(Debug, Clone, Copy)]
pub struct BudgetApi;

impl Resource for BudgetApi {
    const PATH: &'static str = "budget";
    const PAYLOAD_FIELD: &'static str = "budget";
    type Filters = NoFilters;
    type Record = MasterRecord;
}

/// Accepted credit cards (`credit_card/v1`).
#[derive(Debug, Clone, Copy)]
pub struct CreditCardApi;

impl Resource for CreditCardApi {
    const PATH: &'static str = "credit_card";
    const PAYLOAD_FIELD: &'static str = "credit_card";
    type Filters = NoFilters;
    type Record = MasterRecord;
}

/// Large service areas (`large_service_area/v1`).
#[derive(Debug, Clone, Copy)]
pub struct LargeServiceAreaApi;

impl Resource for LargeServiceAreaApi {
    const PATH: &'static str = "large_service_area";
    const PAYLOAD_FIELD: &'static str = "large_service_area";
    type Filters = NoFilters;
    type Record = MasterRecord;
}

/// Service areas (`service_area/v1`).
#[derive(Debug, Clone, Copy)]
pub struct ServiceAreaApi;

impl Resource for ServiceAreaApi {
    const PATH: &'static str = "service_area";
    const PAYLOAD_FIELD: &'static str = "service_area";
    type Filters = NoFilters;
    type Record = ServiceArea;
}

/// Cuisine genres (`genre/v1`).
#[derive(Debug, Clone, Copy)]
pub struct GenreApi;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenreFilters {
    pub code: Vec<String>,
    pub keyword: Option<String>,
}

impl FilterSet for GenreFilters {
    fn fields(&self) -> Vec<(&'static str, FilterValue)> {
        vec![
            ("code", FilterValue::list(&self.code)),
            ("keyword", FilterValue::text(self.keyword.as_deref())),
        ]
    }
}

impl Resource for GenreApi {
    const PATH: &'static str = "genre";
    const PAYLOAD_FIELD: &'static str = "genre";
    type Filters = GenreFilters;
    type Record = MasterRecord;
}

impl<T> ResourceClient<GenreApi, T> {
    /// Append genre codes (exact match).
    pub fn code<I, S>(&mut self, codes: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filters.code.extend(codes.into_iter().map(Into::into));
        self
    }

    /// Genre name, partial match.
    pub fn keyword(&mut self, keyword: impl Into<String>) -> &mut Self {
        self.filters.keyword = Some(keyword.into());
        self
    }
}

/// Special feature categories (`special_category/v1`).
#[derive(Debug, Clone, Copy)]
pub struct SpecialCategoryApi;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecialCategoryFilters {
    pub special_category: Vec<String>,
}

impl FilterSet for SpecialCategoryFilters {
    fn fields(&self) -> Vec<(&'static str, FilterValue)> {
        vec![("special_category", FilterValue::list(&self.special_category))]
    }
}

impl Resource for SpecialCategoryApi {
    const PATH: &'static str = "special_category";
    const PAYLOAD_FIELD: &'static str = "special_category";
    type Filters = SpecialCategoryFilters;
    type Record = MasterRecord;
}

impl<T> ResourceClient<SpecialCategoryApi, T> {
    /// Append one special category code (exact match).
    pub fn special_category(&mut self, code: impl Into<String>) -> &mut Self {
        self.filters.special_category.push(code.into());
        self
    }
}

/// Special features (`special/v1`).
#[derive(Debug, Clone, Copy)]
pub struct SpecialApi;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecialFilters {
    pub special: Vec<String>,
    pub special_category: Vec<String>,
}

impl FilterSet for SpecialFilters {
    fn fields(&self) -> Vec<(&'static str, FilterValue)> {
        vec![
            ("special", FilterValue::list(&self.special)),
            ("special_category", FilterValue::list(&self.special_category)),
        ]
    }
}

impl Resource for SpecialApi {
    const PATH: &'static str = "special";
    const PAYLOAD_FIELD: &'static str = "special";
    type Filters = SpecialFilters;
    type Record = Special;
}

impl<T> ResourceClient<SpecialApi, T> {
    /// Append one special code (exact match).
    pub fn special(&mut self, code: impl Into<String>) -> &mut Self {
        self.filters.special.push(code.into());
        self
    }

    /// Append one special category code (exact match).
    pub fn special_category(&mut self, code: impl Into<String>) -> &mut Self {
        self.filters.special_category.push(code.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::format_params;

    #[test]
    fn genre_filters_in_declared_order() {
        let filters = GenreFilters {
            code: vec!["G001".into(), "G002".into()],
            keyword: Some("バー".into()),
        };
        let query = format_params(&filters);
        let pairs: Vec<(&str, &str)> = query.iter().collect();
        assert_eq!(pairs, vec![("code", "G001,G002"), ("keyword", "バー")]);
    }

    #[test]
    fn special_filters_skip_empty_lists() {
        let filters = SpecialFilters {
            special: Vec::new(),
            special_category: vec!["SPA0".into()],
        };
        let query = format_params(&filters);
        assert_eq!(query.get("special"), None);
        assert_eq!(query.get("special_category"), Some("SPA0"));
    }
}
