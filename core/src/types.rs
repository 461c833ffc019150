//! Record DTOs returned by the resources.
//!
//! # Design
//! Master-data records share the `{code, name}` pair and nest their parent
//! areas. Gourmet shops always carry the lite field set; everything the
//! normal, special and credit-card output types add is optional, so one
//! struct decodes every variant. The variant itself is recorded in
//! `shop_type`, stamped from the request (see `resources::gourmet`).

use serde::{Deserialize, Serialize};

/// `{code, name}` pair used by every master-data resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasterRecord {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceArea {
    pub code: String,
    pub name: String,
    pub large_service_area: MasterRecord,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LargeArea {
    pub code: String,
    pub name: String,
    pub service_area: MasterRecord,
    pub large_service_area: MasterRecord,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MiddleArea {
    pub code: String,
    pub name: String,
    pub large_area: MasterRecord,
    pub service_area: MasterRecord,
    pub large_service_area: MasterRecord,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmallArea {
    pub code: String,
    pub name: String,
    pub middle_area: MasterRecord,
    pub large_area: MasterRecord,
    pub service_area: MasterRecord,
    pub large_service_area: MasterRecord,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Special {
    pub code: String,
    pub name: String,
    pub special_category: MasterRecord,
}

/// Record of the shop-name search resource (`shop/v1`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub name_kana: String,
    pub address: String,
    pub genre: ShopGenreName,
    pub urls: ShopUrls,
    /// `1` when the shop has a detail page, `0` otherwise. Sent as a number
    /// or a numeric string.
    #[serde(default, deserialize_with = "crate::de::optional_number")]
    pub desc: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopGenreName {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopUrls {
    pub pc: String,
}

/// Output variant a gourmet record was requested as.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShopType {
    #[serde(rename = "lite")]
    Lite,
    #[default]
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "special")]
    Special,
    #[serde(rename = "creditCard")]
    CreditCard,
    #[serde(rename = "special+credit_card")]
    SpecialCreditCard,
}

impl ShopType {
    pub fn as_str(self) -> &'static str {
        match self {
            ShopType::Lite => "lite",
            ShopType::Normal => "normal",
            ShopType::Special => "special",
            ShopType::CreditCard => "creditCard",
            ShopType::SpecialCreditCard => "special+credit_card",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GourmetGenre {
    #[serde(default)]
    pub code: Option<String>,
    pub name: String,
    #[serde(default)]
    pub catch: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopBudget {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub average: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoSizes {
    pub l: String,
    #[serde(default)]
    pub m: Option<String>,
    pub s: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub pc: PhotoSizes,
    #[serde(default)]
    pub mobile: Option<PhotoSizes>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CouponUrls {
    pub pc: String,
    pub sp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopSpecial {
    pub code: String,
    pub name: String,
    pub special_category: MasterRecord,
    #[serde(default)]
    pub title: String,
}

/// Record of the gourmet search resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GourmetShop {
    pub id: String,
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub access: String,
    #[serde(default)]
    pub catch: String,
    pub genre: GourmetGenre,
    #[serde(deserialize_with = "crate::de::number")]
    pub lat: f64,
    #[serde(deserialize_with = "crate::de::number")]
    pub lng: f64,
    pub photo: Photo,
    pub urls: ShopUrls,
    #[serde(rename = "type", default)]
    pub shop_type: ShopType,

    #[serde(default)]
    pub name_kana: Option<String>,
    #[serde(default)]
    pub logo_image: Option<String>,
    #[serde(default)]
    pub station_name: Option<String>,
    #[serde(default)]
    pub mobile_access: Option<String>,
    #[serde(default)]
    pub open: Option<String>,
    #[serde(default)]
    pub close: Option<String>,
    #[serde(default)]
    pub budget: Option<ShopBudget>,
    #[serde(default)]
    pub budget_memo: Option<String>,
    #[serde(default, deserialize_with = "crate::de::optional_number")]
    pub capacity: Option<u32>,
    #[serde(default, deserialize_with = "crate::de::optional_number")]
    pub party_capacity: Option<u32>,
    #[serde(default)]
    pub sub_genre: Option<MasterRecord>,
    #[serde(default)]
    pub large_service_area: Option<MasterRecord>,
    #[serde(default)]
    pub service_area: Option<MasterRecord>,
    #[serde(default)]
    pub large_area: Option<MasterRecord>,
    #[serde(default)]
    pub middle_area: Option<MasterRecord>,
    #[serde(default)]
    pub small_area: Option<MasterRecord>,
    #[serde(default)]
    pub coupon_urls: Option<CouponUrls>,
    #[serde(default)]
    pub other_memo: Option<String>,
    #[serde(default)]
    pub shop_detail_memo: Option<String>,

    // Facility descriptions, free text as sent by the upstream.
    #[serde(default)]
    pub wifi: Option<String>,
    #[serde(default)]
    pub course: Option<String>,
    #[serde(default)]
    pub free_drink: Option<String>,
    #[serde(default)]
    pub free_food: Option<String>,
    #[serde(default)]
    pub private_room: Option<String>,
    #[serde(default)]
    pub horigotatsu: Option<String>,
    #[serde(default)]
    pub tatami: Option<String>,
    #[serde(default)]
    pub card: Option<String>,
    #[serde(default)]
    pub non_smoking: Option<String>,
    #[serde(default)]
    pub charter: Option<String>,
    #[serde(default)]
    pub parking: Option<String>,
    #[serde(default)]
    pub barrier_free: Option<String>,
    #[serde(default)]
    pub show: Option<String>,
    #[serde(default)]
    pub karaoke: Option<String>,
    #[serde(default)]
    pub band: Option<String>,
    #[serde(default)]
    pub tv: Option<String>,
    #[serde(default)]
    pub english: Option<String>,
    #[serde(default)]
    pub pet: Option<String>,
    #[serde(default)]
    pub child: Option<String>,
    #[serde(default)]
    pub lunch: Option<String>,
    #[serde(default)]
    pub midnight: Option<String>,
    #[serde(default)]
    pub wedding: Option<String>,
    #[serde(default)]
    pub open_air: Option<String>,
    #[serde(default)]
    pub equipment: Option<String>,
    #[serde(default)]
    pub sommelier: Option<String>,
    #[serde(default)]
    pub ktai: Option<String>,
    #[serde(default, deserialize_with = "crate::de::optional_number")]
    pub ktai_coupon: Option<u32>,

    #[serde(default)]
    pub special: Option<ShopSpecial>,
    #[serde(default)]
    pub credit_card: Option<MasterRecord>,
}
