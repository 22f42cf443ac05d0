//! Fixed business settings applied to every listing
//!
//! These values are seller policy, not record attributes: payment method,
//! return policy, bidder restrictions and the enabled shipping services.

/// Affirmative cell value
pub const YES: &str = "はい";

/// Negative cell value
pub const NO: &str = "いいえ";

/// Column → fixed value
pub const BUSINESS_CONSTANTS: &[(&str, &str)] = &[
    ("商品発送元の市区町村", ""),
    ("代金支払い", "先払い"),
    ("Yahoo!かんたん決済", YES),
    ("かんたん取引", YES),
    ("商品代引", NO),
    ("返品の可否", "返品不可"),
    ("入札者評価制限", YES),
    ("悪い評価の割合での制限", YES),
    ("入札者認証制限", NO),
    ("値下げ交渉", NO),
    ("おすすめコレクション", ""),
    ("ネコポス", NO),
    ("ネコ宅急便コンパクト", NO),
    ("ネコ宅急便", NO),
    ("ゆうパケット", YES),
    ("ゆうパック", NO),
    ("ゆうパケットポストmini", NO),
    ("ゆうパケットプラス", NO),
    ("受け取り後決済サービス", NO),
    ("海外発送", NO),
];

/// Renders a flag as はい / いいえ
pub fn yes_no(flag: bool) -> &'static str {
    if flag {
        YES
    } else {
        NO
    }
}

/// Looks up the fixed value for a column
pub fn business_constant(key: &str) -> Option<&'static str> {
    BUSINESS_CONSTANTS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
}
