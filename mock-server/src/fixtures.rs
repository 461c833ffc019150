//! Canned master data and shops served by the mock.

use serde_json::{json, Value};

pub fn budgets() -> Vec<Value> {
    vec![
        json!({"code": "B009", "name": "～500円"}),
        json!({"code": "B010", "name": "501～1000円"}),
        json!({"code": "B011", "name": "1001～1500円"}),
        json!({"code": "B001", "name": "1501～2000円"}),
        json!({"code": "B002", "name": "2001～3000円"}),
        json!({"code": "B003", "name": "3001～4000円"}),
    ]
}

pub fn credit_cards() -> Vec<Value> {
    vec![
        json!({"code": "c01", "name": "JCB"}),
        json!({"code": "c02", "name": "VISA"}),
        json!({"code": "c03", "name": "マスター"}),
        json!({"code": "c04", "name": "アメックス"}),
    ]
}

pub fn genres() -> Vec<Value> {
    vec![
        json!({"code": "G001", "name": "居酒屋"}),
        json!({"code": "G002", "name": "ダイニングバー・バル"}),
        json!({"code": "G004", "name": "和食"}),
        json!({"code": "G013", "name": "ラーメン"}),
        json!({"code": "G014", "name": "カフェ・スイーツ"}),
    ]
}

fn lsa_kanto() -> Value {
    json!({"code": "SS10", "name": "関東"})
}

fn lsa_kansai() -> Value {
    json!({"code": "SS40", "name": "関西"})
}

pub fn large_service_areas() -> Vec<Value> {
    vec![lsa_kanto(), lsa_kansai()]
}

fn sa_tokyo() -> Value {
    json!({"code": "SA11", "name": "東京"})
}

fn sa_osaka() -> Value {
    json!({"code": "SA23", "name": "大阪"})
}

pub fn service_areas() -> Vec<Value> {
    vec![
        json!({"code": "SA11", "name": "東京", "large_service_area": lsa_kanto()}),
        json!({"code": "SA23", "name": "大阪", "large_service_area": lsa_kansai()}),
    ]
}

fn la_tokyo() -> Value {
    json!({"code": "Z011", "name": "東京"})
}

fn la_osaka() -> Value {
    json!({"code": "Z023", "name": "大阪"})
}

pub fn large_areas() -> Vec<Value> {
    vec![
        json!({"code": "Z011", "name": "東京", "service_area": sa_tokyo(), "large_service_area": lsa_kanto()}),
        json!({"code": "Z023", "name": "大阪", "service_area": sa_osaka(), "large_service_area": lsa_kansai()}),
    ]
}

fn ma_ginza() -> Value {
    json!({"code": "Y005", "name": "銀座・有楽町・新橋・築地・月島"})
}

fn ma_shibuya() -> Value {
    json!({"code": "Y030", "name": "渋谷"})
}

fn ma_umeda() -> Value {
    json!({"code": "Y300", "name": "梅田"})
}

pub fn middle_areas() -> Vec<Value> {
    let tokyo = |ma: Value| {
        let mut v = ma;
        v["large_area"] = la_tokyo();
        v["service_area"] = sa_tokyo();
        v["large_service_area"] = lsa_kanto();
        v
    };
    let mut umeda = ma_umeda();
    umeda["large_area"] = la_osaka();
    umeda["service_area"] = sa_osaka();
    umeda["large_service_area"] = lsa_kansai();
    vec![tokyo(ma_ginza()), tokyo(ma_shibuya()), umeda]
}

pub fn small_areas() -> Vec<Value> {
    let small = |code: &str, name: &str, ma: Value| {
        json!({
            "code": code,
            "name": name,
            "middle_area": ma,
            "large_area": la_tokyo(),
            "service_area": sa_tokyo(),
            "large_service_area": lsa_kanto()
        })
    };
    vec![
        small("X010", "銀座", ma_ginza()),
        small("X011", "有楽町・日比谷", ma_ginza()),
        small("XA4Q", "渋谷駅東口", ma_shibuya()),
    ]
}

fn sc_party() -> Value {
    json!({"code": "SPD8", "name": "宴会・飲み会"})
}

pub fn special_categories() -> Vec<Value> {
    vec![sc_party(), json!({"code": "SPA0", "name": "ランチ"})]
}

pub fn specials() -> Vec<Value> {
    vec![
        json!({"code": "LJ0001", "name": "飲み放題付きコース", "special_category": sc_party()}),
        json!({"code": "LJ0002", "name": "個室で宴会", "special_category": sc_party()}),
    ]
}

/// Gourmet shops in the normal output shape, plus the special and credit
/// card blocks the mock attaches when those output types are requested.
pub fn shops() -> Vec<Value> {
    vec![
        shop(ShopSeed {
            id: "J000000001",
            name: "麺屋 渋谷本店",
            name_kana: "めんや しぶやほんてん",
            address: "東京都渋谷区道玄坂1-1-1",
            tel: "0312345678",
            genre: ("G013", "ラーメン"),
            budget: ("B009", "～500円"),
            middle_area: ma_shibuya(),
            small_area: json!({"code": "XA4Q", "name": "渋谷駅東口"}),
            lat: 35.658_034,
            lng: 139.701_636,
            lunch: true,
            wifi: false,
        }),
        shop(ShopSeed {
            id: "J000000002",
            name: "銀座 和食 しずく",
            name_kana: "ぎんざ わしょく しずく",
            address: "東京都中央区銀座4-1-1",
            tel: "0398765432",
            genre: ("G004", "和食"),
            budget: ("B003", "3001～4000円"),
            middle_area: ma_ginza(),
            small_area: json!({"code": "X010", "name": "銀座"}),
            lat: 35.671_989,
            lng: 139.763_965,
            lunch: false,
            wifi: true,
        }),
        shop(ShopSeed {
            id: "J000000003",
            name: "渋谷ラーメン酒場",
            name_kana: "しぶやらーめんさかば",
            address: "東京都渋谷区宇田川町2-2",
            tel: "0311112222",
            genre: ("G001", "居酒屋"),
            budget: ("B010", "501～1000円"),
            middle_area: ma_shibuya(),
            small_area: json!({"code": "XA4Q", "name": "渋谷駅東口"}),
            lat: 35.661_234,
            lng: 139.698_765,
            lunch: true,
            wifi: true,
        }),
    ]
}

struct ShopSeed {
    id: &'static str,
    name: &'static str,
    name_kana: &'static str,
    address: &'static str,
    tel: &'static str,
    genre: (&'static str, &'static str),
    budget: (&'static str, &'static str),
    middle_area: Value,
    small_area: Value,
    lat: f64,
    lng: f64,
    lunch: bool,
    wifi: bool,
}

fn yes_no(b: bool) -> &'static str {
    if b {
        "あり"
    } else {
        "なし"
    }
}

fn shop(seed: ShopSeed) -> Value {
    let url = format!("https://www.hotpepper.jp/str{}/", seed.id);
    json!({
        "id": seed.id,
        "name": seed.name,
        "name_kana": seed.name_kana,
        "address": seed.address,
        "tel": seed.tel,
        "station_name": "渋谷",
        "access": "駅から徒歩3分",
        "mobile_access": "駅から3分",
        "catch": "お気軽にどうぞ",
        "logo_image": "https://imgfp.hotp.jp/logo.jpg",
        "genre": {"code": seed.genre.0, "name": seed.genre.1, "catch": "自慢の一品"},
        "sub_genre": {"code": "G001", "name": "居酒屋"},
        "budget": {"code": seed.budget.0, "name": seed.budget.1, "average": "900円"},
        "budget_memo": "",
        "large_service_area": lsa_kanto(),
        "service_area": sa_tokyo(),
        "large_area": la_tokyo(),
        "middle_area": seed.middle_area,
        "small_area": seed.small_area,
        // The upstream sends coordinates as numbers and capacities as
        // either numbers or strings; the mock mixes both on purpose.
        "lat": seed.lat,
        "lng": seed.lng,
        "capacity": "30",
        "party_capacity": 20,
        "open": "月～日: 11:00～23:00",
        "close": "不定休",
        "photo": {
            "pc": {"l": "https://imgfp.hotp.jp/l.jpg", "m": "https://imgfp.hotp.jp/m.jpg", "s": "https://imgfp.hotp.jp/s.jpg"},
            "mobile": {"l": "https://imgfp.hotp.jp/ml.jpg", "s": "https://imgfp.hotp.jp/ms.jpg"}
        },
        "urls": {"pc": url},
        "coupon_urls": {"pc": format!("{url}map/"), "sp": format!("{url}scoupon/")},
        "lunch": yes_no(seed.lunch),
        "wifi": yes_no(seed.wifi),
        "card": "利用可",
        "non_smoking": "全面禁煙",
        "private_room": "なし",
        "free_drink": "なし",
        "free_food": "なし",
        "midnight": "営業していない",
        "ktai_coupon": 1,
        "other_memo": "",
        "shop_detail_memo": "",
        "special": {
            "code": "LJ0001",
            "name": "飲み放題付きコース",
            "title": "2時間飲み放題",
            "special_category": sc_party()
        },
        "credit_card": {"code": "c02", "name": "VISA"}
    })
}

/// Fields the upstream keeps for `type=lite`.
pub const LITE_FIELDS: &[&str] = &[
    "id", "name", "address", "access", "catch", "genre", "lat", "lng", "photo", "urls",
];
