//! User-facing texts of the in-stock alert.

/// Headline of the alert
pub const IN_STOCK_HEADLINE: &str = "商品在庫あります！";

/// Label in front of the product page link
pub const PRODUCT_PAGE_LABEL: &str = "商品ページ";

/// Text of the clickable product page link
pub const PRODUCT_PAGE_LINK_TEXT: &str = "こちらをクリック";

/// Result of a run that found the product unavailable
pub const OUT_OF_STOCK_RESULT: &str = "商品は在庫切れです。通知は送信されませんでした。";

/// Plain-text summary sent and returned when the product is available
pub fn in_stock_summary(target_url: &str) -> String {
    format!("{}\n{}: {}", IN_STOCK_HEADLINE, PRODUCT_PAGE_LABEL, target_url)
}
