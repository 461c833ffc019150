//! Gourmet search (`gourmet/v1`), the restaurant search proper.
//!
//! # Design
//! The upstream picks the record shape from the request's `type` parameter
//! (lite, normal, special, credit card, or special plus credit card) but
//! does not echo it back. After a successful classification every returned
//! shop is stamped with a `type` tag derived from the request's own filter,
//! `normal` when unset, so callers can tell which fields to expect.

use std::fmt;

use serde_json::Value;

use crate::client::{Resource, ResourceClient};
use crate::query::{FilterSet, FilterValue};
use crate::types::{GourmetShop, ShopType};

/// Geodetic system of `lat`/`lng`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Datum {
    World,
    Tokyo,
}

impl fmt::Display for Datum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Datum::World => "world",
            Datum::Tokyo => "tokyo",
        })
    }
}

/// Result ordering (`order`). Ignored by the upstream for location searches,
/// which always sort by distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    NameKana = 1,
    GenreCode = 2,
    SmallAreaCode = 3,
    Recommended = 4,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as u8)
    }
}

/// Search radius around `lat`/`lng` (`range`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchRange {
    Within300m = 1,
    Within500m = 2,
    Within1000m = 3,
    Within2000m = 4,
    Within3000m = 5,
}

impl fmt::Display for SearchRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as u8)
    }
}

/// Output type requested through `type`. Unset means the normal output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GourmetType {
    Lite,
    CreditCard,
    Special,
    SpecialCreditCard,
}

impl GourmetType {
    /// Tag stamped on every returned shop.
    pub fn shop_type(self) -> ShopType {
        match self {
            GourmetType::Lite => ShopType::Lite,
            GourmetType::CreditCard => ShopType::CreditCard,
            GourmetType::Special => ShopType::Special,
            GourmetType::SpecialCreditCard => ShopType::SpecialCreditCard,
        }
    }
}

impl fmt::Display for GourmetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GourmetType::Lite => "lite",
            GourmetType::CreditCard => "credit_card",
            GourmetType::Special => "special",
            GourmetType::SpecialCreditCard => "special+credit_card",
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GourmetApi;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GourmetFilters {
    pub address: Option<String>,
    pub band: Option<bool>,
    pub barrier_free: Option<bool>,
    pub budget: Vec<String>,
    pub card: Option<bool>,
    pub charter: Option<bool>,
    pub child: Option<bool>,
    pub cocktail: Option<bool>,
    pub count: Option<u32>,
    pub course: Option<bool>,
    pub credit_card: Vec<String>,
    pub datum: Option<Datum>,
    pub english: Option<bool>,
    pub equipment: Option<bool>,
    pub free_drink: Option<bool>,
    pub free_food: Option<bool>,
    pub genre: Vec<String>,
    pub horigotatsu: Option<bool>,
    pub id: Vec<String>,
    pub karaoke: Option<bool>,
    pub keyword: Vec<String>,
    pub ktai: Option<bool>,
    pub ktai_coupon: Option<bool>,
    pub large_area: Vec<String>,
    pub large_service_area: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub lunch: Option<bool>,
    pub middle_area: Vec<String>,
    pub midnight: Option<bool>,
    pub midnight_meal: Option<bool>,
    pub name: Vec<String>,
    pub name_any: Vec<String>,
    pub name_kana: Vec<String>,
    pub night_view: Option<bool>,
    pub non_smoking: Option<bool>,
    pub open_air: Option<bool>,
    pub order: Option<SortOrder>,
    pub parking: Option<bool>,
    pub party_capacity: Option<u32>,
    pub pet: Option<bool>,
    pub private_room: Option<bool>,
    pub range: Option<SearchRange>,
    pub sake: Option<bool>,
    pub service_area: Vec<String>,
    pub shochu: Option<bool>,
    pub show: Option<bool>,
    pub small_area: Vec<String>,
    pub sommelier: Option<bool>,
    pub special: Vec<String>,
    pub special_category: Vec<String>,
    pub special_category_or: Vec<String>,
    pub special_or: Vec<String>,
    pub start: Option<u32>,
    pub tatami: Option<bool>,
    pub tel: Option<String>,
    pub tv: Option<bool>,
    pub output_type: Option<GourmetType>,
    pub wedding: Option<bool>,
    pub wifi: Option<bool>,
    pub wine: Option<bool>,
}

impl FilterSet for GourmetFilters {
    fn fields(&self) -> Vec<(&'static str, FilterValue)> {
        use FilterValue as V;
        vec![
            ("address", V::text(self.address.as_deref())),
            ("band", V::flag(self.band)),
            ("barrier_free", V::flag(self.barrier_free)),
            ("budget", V::list(&self.budget)),
            ("card", V::flag(self.card)),
            ("charter", V::flag(self.charter)),
            ("child", V::flag(self.child)),
            ("cocktail", V::flag(self.cocktail)),
            ("count", V::scalar(self.count)),
            ("course", V::flag(self.course)),
            ("credit_card", V::list(&self.credit_card)),
            ("datum", V::scalar(self.datum)),
            ("english", V::flag(self.english)),
            ("equipment", V::flag(self.equipment)),
            ("free_drink", V::flag(self.free_drink)),
            ("free_food", V::flag(self.free_food)),
            ("genre", V::list(&self.genre)),
            ("horigotatsu", V::flag(self.horigotatsu)),
            ("id", V::list(&self.id)),
            ("karaoke", V::flag(self.karaoke)),
            ("keyword", V::list(&self.keyword)),
            ("ktai", V::flag(self.ktai)),
            ("ktai_coupon", V::flag(self.ktai_coupon)),
            ("large_area", V::list(&self.large_area)),
            ("large_service_area", V::text(self.large_service_area.as_deref())),
            ("lat", V::scalar(self.lat)),
            ("lng", V::scalar(self.lng)),
            ("lunch", V::flag(self.lunch)),
            ("middle_area", V::list(&self.middle_area)),
            ("midnight", V::flag(self.midnight)),
            ("midnight_meal", V::flag(self.midnight_meal)),
            ("name", V::list(&self.name)),
            ("name_any", V::list(&self.name_any)),
            ("name_kana", V::list(&self.name_kana)),
            ("night_view", V::flag(self.night_view)),
            ("non_smoking", V::flag(self.non_smoking)),
            ("open_air", V::flag(self.open_air)),
            ("order", V::scalar(self.order)),
            ("parking", V::flag(self.parking)),
            ("party_capacity", V::scalar(self.party_capacity)),
            ("pet", V::flag(self.pet)),
            ("private_room", V::flag(self.private_room)),
            ("range", V::scalar(self.range)),
            ("sake", V::flag(self.sake)),
            ("service_area", V::list(&self.service_area)),
            ("shochu", V::flag(self.shochu)),
            ("show", V::flag(self.show)),
            ("small_area", V::list(&self.small_area)),
            ("sommelier", V::flag(self.sommelier)),
            ("special", V::list(&self.special)),
            ("special_category", V::list(&self.special_category)),
            ("special_category_or", V::list(&self.special_category_or)),
            ("special_or", V::list(&self.special_or)),
            ("start", V::scalar(self.start)),
            ("tatami", V::flag(self.tatami)),
            ("tel", V::text(self.tel.as_deref())),
            ("tv", V::flag(self.tv)),
            ("type", V::scalar(self.output_type)),
            ("wedding", V::flag(self.wedding)),
            ("wifi", V::flag(self.wifi)),
            ("wine", V::flag(self.wine)),
        ]
    }
}

impl Resource for GourmetApi {
    const PATH: &'static str = "gourmet";
    const PAYLOAD_FIELD: &'static str = "shop";
    type Filters = GourmetFilters;
    type Record = GourmetShop;

    fn post_process(filters: &GourmetFilters, raw: &mut Value) {
        let tag = filters
            .output_type
            .map(GourmetType::shop_type)
            .unwrap_or_default()
            .as_str();
        let Some(shops) = raw.pointer_mut("/results/shop").and_then(Value::as_array_mut) else {
            return;
        };
        for shop in shops.iter_mut().filter_map(Value::as_object_mut) {
            shop.insert("type".to_string(), Value::from(tag));
        }
    }
}

/// Setters for `Option<bool>` narrowing flags.
macro_rules! flag_setters {
    ($($(#[$doc:meta])* $field:ident;)*) => {
        $(
            $(#[$doc])*
            pub fn $field(&mut self, on: bool) -> &mut Self {
                self.filters.$field = Some(on);
                self
            }
        )*
    };
}

/// Setters appending to `Vec<String>` code lists.
macro_rules! list_appenders {
    ($($(#[$doc:meta])* $field:ident;)*) => {
        $(
            $(#[$doc])*
            pub fn $field<I, S>(&mut self, values: I) -> &mut Self
            where
                I: IntoIterator<Item = S>,
                S: Into<String>,
            {
                self.filters.$field.extend(values.into_iter().map(Into::into));
                self
            }
        )*
    };
}

impl<T> ResourceClient<GourmetApi, T> {
    list_appenders! {
        /// Budget codes from the budget master (up to 2 honored upstream).
        budget;
        /// Credit card codes from the credit card master.
        credit_card;
        /// Genre codes (up to 2 honored upstream).
        genre;
        /// Shop ids, e.g. `J001234567` (up to 20 honored upstream).
        id;
        /// Free keywords, AND-matched against name, reading, address,
        /// station, genre and catch copy.
        keyword;
        /// Large area codes (up to 3 honored upstream).
        large_area;
        middle_area;
        /// Shop names, partial match against name and reading.
        name;
        /// Shop names, OR-matched.
        name_any;
        /// Shop name readings.
        name_kana;
        service_area;
        small_area;
        /// Special codes, AND-matched.
        special;
        /// Special category codes, AND-matched.
        special_category;
        /// Special category codes, OR-matched.
        special_category_or;
        /// Special codes, OR-matched.
        special_or;
    }

    flag_setters! {
        band;
        barrier_free;
        /// Accepts credit cards.
        card;
        charter;
        child;
        cocktail;
        course;
        english;
        equipment;
        free_drink;
        free_food;
        horigotatsu;
        karaoke;
        ktai;
        ktai_coupon;
        lunch;
        /// Open after 23:00.
        midnight;
        /// Serves food after 23:00.
        midnight_meal;
        night_view;
        non_smoking;
        open_air;
        parking;
        pet;
        private_room;
        sake;
        shochu;
        show;
        sommelier;
        tatami;
        tv;
        wedding;
        wifi;
        wine;
    }

    pub fn address(&mut self, address: impl Into<String>) -> &mut Self {
        self.filters.address = Some(address.into());
        self
    }

    pub fn large_service_area(&mut self, code: impl Into<String>) -> &mut Self {
        self.filters.large_service_area = Some(code.into());
        self
    }

    pub fn tel(&mut self, tel: impl Into<String>) -> &mut Self {
        self.filters.tel = Some(tel.into());
        self
    }

    pub fn lat(&mut self, lat: f64) -> &mut Self {
        self.filters.lat = Some(lat);
        self
    }

    pub fn lng(&mut self, lng: f64) -> &mut Self {
        self.filters.lng = Some(lng);
        self
    }

    /// Shorthand for [`lat`](Self::lat) plus [`lng`](Self::lng).
    pub fn location(&mut self, lat: f64, lng: f64) -> &mut Self {
        self.lat(lat).lng(lng)
    }

    pub fn range(&mut self, range: SearchRange) -> &mut Self {
        self.filters.range = Some(range);
        self
    }

    pub fn datum(&mut self, datum: Datum) -> &mut Self {
        self.filters.datum = Some(datum);
        self
    }

    pub fn order(&mut self, order: SortOrder) -> &mut Self {
        self.filters.order = Some(order);
        self
    }

    pub fn party_capacity(&mut self, capacity: u32) -> &mut Self {
        self.filters.party_capacity = Some(capacity);
        self
    }

    /// Output type; also decides the tag stamped on returned shops.
    pub fn output_type(&mut self, output_type: GourmetType) -> &mut Self {
        self.filters.output_type = Some(output_type);
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
