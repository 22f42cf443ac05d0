//! Column layout of the Yahoo! Auctions bulk-listing CSV
//!
//! Order defines the column order of every row. Columns the mapper has no
//! value for stay empty.

/// Default ordered header list
pub const AUCTION_HEADERS: &[&str] = &[
    "カテゴリ",
    "タイトル",
    "説明",
    "開始価格",
    "即決価格",
    "個数",
    "開催期間",
    "終了時間",
    "画像1",
    "画像1コメント",
    "画像2",
    "画像2コメント",
    "画像3",
    "画像3コメント",
    "画像4",
    "画像4コメント",
    "画像5",
    "画像5コメント",
    "画像6",
    "画像6コメント",
    "画像7",
    "画像7コメント",
    "画像8",
    "画像8コメント",
    "画像9",
    "画像9コメント",
    "画像10",
    "画像10コメント",
    "商品発送元の都道府県",
    "商品発送元の市区町村",
    "送料負担",
    "代金支払い",
    "Yahoo!かんたん決済",
    "かんたん取引",
    "商品代引",
    "商品の状態",
    "商品の状態備考",
    "返品の可否",
    "返品の可否備考",
    "入札者評価制限",
    "悪い評価の割合での制限",
    "入札者認証制限",
    "自動延長",
    "早期終了",
    "値下げ交渉",
    "自動再出品",
    "自動値下げ",
    "最低落札価格",
    "チャリティー",
    "注目のオークション",
    "太字テキスト",
    "背景色",
    "目立ちアイコン",
    "贈答品アイコン",
    "おすすめコレクション",
    "送料固定",
    "ネコポス",
    "ネコ宅急便コンパクト",
    "ネコ宅急便",
    "ゆうパケット",
    "ゆうパック",
    "ゆうパケットポストmini",
    "ゆうパケットプラス",
    "発送までの日数",
    "受け取り後決済サービス",
    "海外発送",
];
