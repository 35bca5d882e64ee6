//! Add-to-cart button inspection.
//!
//! The storefront exposes two independent out-of-stock signals on the
//! add-to-cart button: a non-empty `disabled` attribute and a "Sold out"
//! label nested inside the button. Either one marks the product as
//! unavailable.

use crate::error::{AppError, AppResult};
use scraper::{ElementRef, Html, Selector};

/// The add-to-cart control
pub const ADD_TO_CART_SELECTOR: &str = r#"button[name="add"]"#;

/// Text-bearing label nested in the control
pub const LABEL_SELECTOR: &str = "span";

/// Label content marking an unavailable product, compared uppercased
const SOLD_OUT_MARKER: &str = "SOLD OUT";

/// Signals read from a single product page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockSignals {
    /// Whether an add-to-cart control was found at all
    pub button_found: bool,
    /// The control carries a non-empty `disabled` attribute
    pub disabled: bool,
    /// Text of the first non-blank label inside the control, empty when absent
    pub label: String,
}

impl StockSignals {
    /// Whether the label reads "sold out" in any letter case
    pub fn sold_out_label(&self) -> bool {
        self.label.to_uppercase().contains(SOLD_OUT_MARKER)
    }

    /// Purchasable only when neither signal is raised
    pub fn in_stock(&self) -> bool {
        !self.disabled && !self.sold_out_label()
    }
}

/// Returns the first element of `document` matching `selector`
pub fn find_first_matching_element<'a>(
    document: &'a Html,
    selector: &Selector,
) -> Option<ElementRef<'a>> {
    document.select(selector).next()
}

/// Returns the raw value of `name` on `element`, if the attribute exists
pub fn attribute<'a>(element: ElementRef<'a>, name: &str) -> Option<&'a str> {
    element.value().attr(name)
}

/// Compiled selectors for the add-to-cart heuristic
#[derive(Debug, Clone)]
pub struct StockDetector {
    button: Selector,
    label: Selector,
}

impl StockDetector {
    pub fn new() -> AppResult<Self> {
        Ok(Self {
            button: compile(ADD_TO_CART_SELECTOR)?,
            label: compile(LABEL_SELECTOR)?,
        })
    }

    /// Parses `html` and reads the stock signals from it
    pub fn detect_html(&self, html: &str) -> StockSignals {
        let document = Html::parse_document(html);
        self.detect(&document)
    }

    /// Reads the stock signals from a parsed document
    ///
    /// A missing control yields default (negative) signals.
    pub fn detect(&self, document: &Html) -> StockSignals {
        let Some(button) = find_first_matching_element(document, &self.button) else {
            return StockSignals::default();
        };

        // A bare `<button disabled>` has an empty value and counts as enabled
        let disabled = attribute(button, "disabled").is_some_and(|value| !value.is_empty());

        // Icon spans carry no text; skip them to reach the visible label
        let label = button
            .select(&self.label)
            .map(|span| span.text().collect::<String>())
            .find(|text| !text.trim().is_empty())
            .unwrap_or_default();

        StockSignals {
            button_found: true,
            disabled,
            label,
        }
    }
}

fn compile(selector: &str) -> AppResult<Selector> {
    Selector::parse(selector)
        .map_err(|e| AppError::parse(format!("invalid selector '{}': {:?}", selector, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn page(button: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html>
  <head><title>Tee</title></head>
  <body>
    <form action="/cart/add" method="post">
      {}
    </form>
  </body>
</html>"#,
            button
        )
    }

    fn detect(html: &str) -> StockSignals {
        StockDetector::new().unwrap().detect_html(html)
    }

    #[test]
    fn test_enabled_button_is_in_stock() {
        let signals = detect(&page(
            r#"<button type="submit" name="add"><span>Add to cart</span></button>"#,
        ));
        assert!(signals.button_found);
        assert!(!signals.disabled);
        assert_eq!(signals.label, "Add to cart");
        assert!(signals.in_stock());
    }

    #[test]
    fn test_disabled_button_is_out_of_stock() {
        let signals = detect(&page(
            r#"<button type="submit" name="add" disabled="disabled"><span>Add to cart</span></button>"#,
        ));
        assert!(signals.disabled);
        assert!(!signals.in_stock());
    }

    #[test]
    fn test_sold_out_label_is_out_of_stock() {
        let signals = detect(&page(
            r#"<button type="submit" name="add"><span>
                Sold out
            </span></button>"#,
        ));
        assert!(!signals.disabled);
        assert!(signals.sold_out_label());
        assert!(!signals.in_stock());
    }

    #[test]
    fn test_missing_button_is_in_stock() {
        let signals = detect(&page(r#"<p>Coming soon</p>"#));
        assert!(!signals.button_found);
        assert!(signals.in_stock());
    }

    #[test]
    fn test_empty_disabled_attribute_counts_as_enabled() {
        let signals = detect(&page(r#"<button name="add" disabled><span>Add</span></button>"#));
        assert!(!signals.disabled);
        assert!(signals.in_stock());
    }

    #[test]
    fn test_only_first_button_is_inspected() {
        let signals = detect(&page(
            r#"<button name="add"><span>Add to cart</span></button>
               <button name="add" disabled="disabled"><span>Sold out</span></button>"#,
        ));
        assert!(signals.in_stock());
    }

    #[test]
    fn test_only_first_label_is_read() {
        let signals = detect(&page(
            r#"<button name="add"><span>Add to cart</span><span>Sold out</span></button>"#,
        ));
        assert_eq!(signals.label, "Add to cart");
        assert!(signals.in_stock());
    }

    #[test]
    fn test_empty_icon_span_is_skipped() {
        let signals = detect(&page(
            r#"<button name="add"><span class="icon"></span><span>Sold out</span></button>"#,
        ));
        assert_eq!(signals.label, "Sold out");
        assert!(!signals.in_stock());

        let signals = detect(&page(
            r#"<button name="add"><span> </span><span>Add to cart</span></button>"#,
        ));
        assert_eq!(signals.label, "Add to cart");
        assert!(signals.in_stock());
    }

    #[test]
    fn test_other_buttons_are_ignored() {
        let signals = detect(&page(
            r#"<button name="checkout" disabled="disabled"><span>Sold out</span></button>"#,
        ));
        assert!(!signals.button_found);
        assert!(signals.in_stock());
    }

    #[test]
    fn test_button_without_label() {
        let signals = detect(&page(r#"<button name="add">Sold out</button>"#));
        assert!(signals.label.is_empty());
        assert!(signals.in_stock());
    }

    #[test]
    fn test_accessors() {
        let document = Html::parse_document(&page(r#"<button name="add" data-variant="42">Add</button>"#));
        let selector = Selector::parse(ADD_TO_CART_SELECTOR).unwrap();
        let button = find_first_matching_element(&document, &selector).unwrap();
        assert_eq!(attribute(button, "data-variant"), Some("42"));
        assert_eq!(attribute(button, "disabled"), None);
    }

    fn random_case(text: &str, mask: &[bool]) -> String {
        text.chars()
            .zip(mask.iter().cycle())
            .map(|(c, upper)| {
                if *upper {
                    c.to_ascii_uppercase()
                } else {
                    c.to_ascii_lowercase()
                }
            })
            .collect()
    }

    proptest! {
        #[test]
        fn property_non_empty_disabled_is_out_of_stock(
            value in "[a-z0-9]{1,12}",
            label in "[A-Za-z ]{0,20}",
        ) {
            let html = page(&format!(
                r#"<button name="add" disabled="{}"><span>{}</span></button>"#,
                value, label
            ));
            prop_assert!(!detect(&html).in_stock());
        }

        #[test]
        fn property_sold_out_in_any_case_is_out_of_stock(
            mask in proptest::collection::vec(any::<bool>(), 8),
            prefix in "[A-Za-z ]{0,10}",
            suffix in "[A-Za-z ]{0,10}",
        ) {
            let label = format!("{}{}{}", prefix, random_case("sold out", &mask), suffix);
            let html = page(&format!(r#"<button name="add"><span>{}</span></button>"#, label));
            let signals = detect(&html);
            prop_assert!(!signals.disabled);
            prop_assert!(!signals.in_stock());
        }

        #[test]
        fn property_enabled_without_marker_is_in_stock(label in "[A-Za-z ]{0,30}") {
            prop_assume!(!label.to_uppercase().contains(SOLD_OUT_MARKER));
            let html = page(&format!(r#"<button name="add"><span>{}</span></button>"#, label));
            prop_assert!(detect(&html).in_stock());
        }

        #[test]
        fn property_absent_button_is_in_stock(body in "[A-Za-z ]{0,40}") {
            let html = format!("<html><body><p>{}</p></body></html>", body);
            prop_assert!(detect(&html).in_stock());
        }
    }
}
