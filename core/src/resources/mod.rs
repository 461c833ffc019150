//! The twelve upstream resources.
//!
//! Each resource is a marker type implementing [`Resource`]; its builder
//! methods are inherent methods on `ResourceClient<ThatApi, T>`. The
//! factories on [`HotPepper`] hand out fresh clients.

mod area;
mod gourmet;
mod master;
mod shop;

pub use area::{LargeAreaApi, LargeAreaFilters, MiddleAreaApi, MiddleAreaFilters, SmallAreaApi, SmallAreaFilters};
pub use gourmet::{Datum, GourmetApi, GourmetFilters, GourmetType, SearchRange, SortOrder};
pub use master::{
    BudgetApi, CreditCardApi, GenreApi, GenreFilters, LargeServiceAreaApi, ServiceAreaApi,
    SpecialApi, SpecialCategoryApi, SpecialCategoryFilters, SpecialFilters,
};
pub use shop::{ShopApi, ShopFilters};

use crate::client::{HotPepper, ResourceClient};

pub type BudgetClient<T> = ResourceClient<BudgetApi, T>;
pub type CreditCardClient<T> = ResourceClient<CreditCardApi, T>;
pub type GenreClient<T> = ResourceClient<GenreApi, T>;
pub type GourmetClient<T> = ResourceClient<GourmetApi, T>;
pub type LargeAreaClient<T> = ResourceClient<LargeAreaApi, T>;
pub type LargeServiceAreaClient<T> = ResourceClient<LargeServiceAreaApi, T>;
pub type MiddleAreaClient<T> = ResourceClient<MiddleAreaApi, T>;
pub type ServiceAreaClient<T> = ResourceClient<ServiceAreaApi, T>;
pub type ShopClient<T> = ResourceClient<ShopApi, T>;
pub type SmallAreaClient<T> = ResourceClient<SmallAreaApi, T>;
pub type SpecialClient<T> = ResourceClient<SpecialApi, T>;
pub type SpecialCategoryClient<T> = ResourceClient<SpecialCategoryApi, T>;

impl<T> HotPepper<T> {
    /// Dinner budget master.
    pub fn budget(&self) -> BudgetClient<T> {
        self.client()
    }

    pub fn credit_card(&self) -> CreditCardClient<T> {
        self.client()
    }

    pub fn genre(&self) -> GenreClient<T> {
        self.client()
    }

    /// Restaurant search.
    pub fn gourmet(&self) -> GourmetClient<T> {
        self.client()
    }

    pub fn large_area(&self) -> LargeAreaClient<T> {
        self.client()
    }

    pub fn large_service_area(&self) -> LargeServiceAreaClient<T> {
        self.client()
    }

    pub fn middle_area(&self) -> MiddleAreaClient<T> {
        self.client()
    }

    pub fn service_area(&self) -> ServiceAreaClient<T> {
        self.client()
    }

    /// Shop-name search, for lookups by name or phone number.
    pub fn shop(&self) -> ShopClient<T> {
        self.client()
    }

    pub fn small_area(&self) -> SmallAreaClient<T> {
        self.client()
    }

    pub fn special(&self) -> SpecialClient<T> {
        self.client()
    }

    pub fn special_category(&self) -> SpecialCategoryClient<T> {
        self.client()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Resource;
    use crate::config::ClientConfig;
    use crate::credentials::Credentials;

    fn hp() -> HotPepper<()> {
        let creds = Credentials::with_key("k").unwrap();
        HotPepper::new(ClientConfig::new("http://h/hotpepper", creds), ())
    }

    #[test]
    fn every_factory_targets_its_path() {
        let hp = hp();
        let urls = [
            hp.budget().url(),
            hp.credit_card().url(),
            hp.genre().url(),
            hp.gourmet().url(),
            hp.large_area().url(),
            hp.large_service_area().url(),
            hp.middle_area().url(),
            hp.service_area().url(),
            hp.shop().url(),
            hp.small_area().url(),
            hp.special().url(),
            hp.special_category().url(),
        ];
        let paths: Vec<&str> = urls
            .iter()
            .map(|u| {
                u.strip_prefix("http://h/hotpepper/")
                    .and_then(|rest| rest.strip_suffix("/v1"))
                    .unwrap()
            })
            .collect();
        assert_eq!(
            paths,
            vec![
                "budget",
                "credit_card",
                "genre",
                "gourmet",
                "large_area",
                "large_service_area",
                "middle_area",
                "service_area",
                "shop",
                "small_area",
                "special",
                "special_category",
            ]
        );
    }

    #[test]
    fn payload_fields() {
        assert_eq!(<GourmetApi as Resource>::PAYLOAD_FIELD, "shop");
        assert_eq!(<ShopApi as Resource>::PAYLOAD_FIELD, "shop");
        assert_eq!(<CreditCardApi as Resource>::PAYLOAD_FIELD, "credit_card");
        assert_eq!(<SmallAreaApi as Resource>::PAYLOAD_FIELD, "small_area");
    }
}
