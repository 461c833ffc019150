//! Shop-name search (`shop/v1`): look a shop up by name, reading or phone
//! number.

use crate::client::{Resource, ResourceClient};
use crate::query::{FilterSet, FilterValue};
use crate::types::ShopSummary;

#[derive(Debug, Clone, Copy)]
pub struct ShopApi;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShopFilters {
    pub keyword: Vec<String>,
    pub tel: Option<String>,
    pub start: Option<u32>,
    pub count: Option<u32>,
}

impl FilterSet for ShopFilters {
    fn fields(&self) -> Vec<(&'static str, FilterValue)> {
        vec![
            ("keyword", FilterValue::list(&self.keyword)),
            ("tel", FilterValue::text(self.tel.as_deref())),
            ("start", FilterValue::scalar(self.start)),
            ("count", FilterValue::scalar(self.count)),
        ]
    }
}

impl Resource for ShopApi {
    const PATH: &'static str = "shop";
    const PAYLOAD_FIELD: &'static str = "shop";
    type Filters = ShopFilters;
    type Record = ShopSummary;
}

impl<T> ResourceClient<ShopApi, T> {
    /// Append one keyword; matched against name, reading and address.
    pub fn keyword(&mut self, keyword: impl Into<String>) -> &mut Self {
        self.filters.keyword.push(keyword.into());
        self
    }

    /// Phone number, digits only.
    pub fn tel(&mut self, tel: impl Into<String>) -> &mut Self {
        self.filters.tel = Some(tel.into());
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
