//! Card extraction from listing page markup
//!
//! A qualifying card is a flipcard div containing a profile button whose
//! label text includes "Athlete Profile". Cards without that label are
//! skipped; cards without a name span get a placeholder name instead of
//! being dropped.

use crate::records::ListingEntry;
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Structural class signature of one athlete card
const CARD_SELECTOR: &str = "div.c-listing-athlete-flipcard";

/// Profile link button within a card
const LINK_SELECTOR: &str = "a.e-button--black";

/// Label span inside the profile button
const LABEL_SELECTOR: &str = "span.e-button__text";

/// Athlete name span within a card
const NAME_SELECTOR: &str = "span.c-listing-athlete__name";

/// Label text that disambiguates the profile link from other card buttons
const PROFILE_LABEL: &str = "Athlete Profile";

/// Name used when a card carries no name span
const PLACEHOLDER_NAME: &str = "Unknown";

/// Extracts listing entries from one page of listing markup
///
/// Relative profile hrefs are resolved against `endpoint`. Parse problems
/// never propagate: a malformed card is skipped (no profile link) or
/// degraded (placeholder name), and the rest of the page is still used.
///
/// # Arguments
///
/// * `html` - The page markup
/// * `endpoint` - The listing endpoint, used as the base for relative links
///
/// # Returns
///
/// All qualifying entries on the page, in document order
pub fn parse_cards(html: &str, endpoint: &Url) -> Vec<ListingEntry> {
    let document = Html::parse_document(html);

    let Ok(card_selector) = Selector::parse(CARD_SELECTOR) else {
        return Vec::new();
    };

    let mut entries = Vec::new();
    for card in document.select(&card_selector) {
        if let Some(entry) = parse_card(card, endpoint) {
            entries.push(entry);
        }
    }

    entries
}

/// Extracts one entry from a card element, or None if it has no qualifying
/// profile link
fn parse_card(card: ElementRef, endpoint: &Url) -> Option<ListingEntry> {
    let link_selector = Selector::parse(LINK_SELECTOR).ok()?;
    let label_selector = Selector::parse(LABEL_SELECTOR).ok()?;
    let name_selector = Selector::parse(NAME_SELECTOR).ok()?;

    let link = card.select(&link_selector).find(|link| {
        link.select(&label_selector)
            .any(|label| element_text(label).contains(PROFILE_LABEL))
    })?;

    let href = link.value().attr("href")?;
    let primary_url = resolve_href(href, endpoint)?;

    let name = card
        .select(&name_selector)
        .next()
        .map(element_text)
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| PLACEHOLDER_NAME.to_string());

    Some(ListingEntry { name, primary_url })
}

/// Collects and trims the text content of an element
fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Resolves a card href against the listing endpoint origin
fn resolve_href(href: &str, endpoint: &Url) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }

    endpoint.join(href).ok().map(|url| url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint() -> Url {
        Url::parse("https://listing.example/athletes/all").unwrap()
    }

    fn card(name_span: &str, href: &str, label: &str) -> String {
        format!(
            r#"<div class="c-listing-athlete-flipcard">
                {name_span}
                <a class="e-button--black" href="{href}">
                    <span class="e-button__text">{label}</span>
                </a>
            </div>"#
        )
    }

    #[test]
    fn test_extract_qualifying_card() {
        let html = card(
            r#"<span class="c-listing-athlete__name">Alpha Fighter</span>"#,
            "/athlete/alpha-fighter",
            "Athlete Profile",
        );
        let entries = parse_cards(&html, &endpoint());

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "Alpha Fighter");
        assert_eq!(
            entries[0].primary_url,
            "https://listing.example/athlete/alpha-fighter"
        );
    }

    #[test]
    fn test_absolute_href_kept_as_is() {
        let html = card(
            r#"<span class="c-listing-athlete__name">Alpha Fighter</span>"#,
            "https://other.example/athlete/alpha",
            "Athlete Profile",
        );
        let entries = parse_cards(&html, &endpoint());

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].primary_url, "https://other.example/athlete/alpha");
    }

    #[test]
    fn test_card_without_profile_label_is_skipped() {
        let html = card(
            r#"<span class="c-listing-athlete__name">Alpha Fighter</span>"#,
            "/tickets/event-1",
            "Buy Tickets",
        );
        let entries = parse_cards(&html, &endpoint());
        assert!(entries.is_empty());
    }

    #[test]
    fn test_missing_name_yields_placeholder() {
        let html = card("", "/athlete/mystery", "Athlete Profile");
        let entries = parse_cards(&html, &endpoint());

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "Unknown");
    }

    #[test]
    fn test_name_whitespace_is_trimmed() {
        let html = card(
            r#"<span class="c-listing-athlete__name">  Alpha Fighter  </span>"#,
            "/athlete/alpha",
            "Athlete Profile",
        );
        let entries = parse_cards(&html, &endpoint());
        assert_eq!(entries[0].name, "Alpha Fighter");
    }

    #[test]
    fn test_label_match_is_substring() {
        let html = card(
            r#"<span class="c-listing-athlete__name">Alpha Fighter</span>"#,
            "/athlete/alpha",
            "View Athlete Profile Now",
        );
        let entries = parse_cards(&html, &endpoint());
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_multiple_cards_in_document_order() {
        let html = format!(
            "{}{}",
            card(
                r#"<span class="c-listing-athlete__name">Alpha Fighter</span>"#,
                "/athlete/alpha",
                "Athlete Profile",
            ),
            card(
                r#"<span class="c-listing-athlete__name">Beta Fighter</span>"#,
                "/athlete/beta",
                "Athlete Profile",
            )
        );
        let entries = parse_cards(&html, &endpoint());

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "Alpha Fighter");
        assert_eq!(entries[1].name, "Beta Fighter");
    }

    #[test]
    fn test_page_without_cards() {
        let html = "<html><body><p>No athletes here</p></body></html>";
        assert!(parse_cards(html, &endpoint()).is_empty());
    }

    #[test]
    fn test_card_without_href_is_skipped() {
        let html = r#"<div class="c-listing-athlete-flipcard">
            <a class="e-button--black">
                <span class="e-button__text">Athlete Profile</span>
            </a>
        </div>"#;
        assert!(parse_cards(html, &endpoint()).is_empty());
    }
}
