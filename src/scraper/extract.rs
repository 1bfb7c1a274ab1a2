// extract.rs
use crate::scraper::models::ListingRecord;
use crate::scraper::ScraperError;
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// CSS selectors describing where listing data lives on a results page.
#[derive(Debug, Clone)]
pub struct SelectorConfig {
    pub card: String,
    pub fields: Vec<(String, String)>,
    pub next_page: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        let fields = [
            ("property_type", "div.property-type-class"),
            ("land_size", "div.land-size-class"),
            ("rooms", "div.rooms-class"),
            ("parking_spaces", "div.parking-spaces-class"),
            ("building_size", "div.building-size-class"),
            ("num_bedrooms", "div.bedrooms-class"),
            ("num_bathrooms", "div.bathrooms-class"),
            ("address", "div.address-class"),
            ("price", "span.price-class"),
        ];

        Self {
            card: "div.component_property-card".to_string(),
            fields: fields
                .iter()
                .map(|(f, s)| (f.to_string(), s.to_string()))
                .collect(),
            next_page: r#"a[rel="next"]"#.to_string(),
        }
    }
}

/// Compiled form of [`SelectorConfig`].
#[derive(Debug, Clone)]
pub struct ListingSelectors {
    card: Selector,
    fields: Vec<(String, Selector)>,
    next_page: Selector,
}

impl ListingSelectors {
    pub fn compile(config: &SelectorConfig) -> Result<Self, ScraperError> {
        let mut fields = Vec::with_capacity(config.fields.len());
        for (field, css) in &config.fields {
            if !ListingRecord::default().set(field, String::new()) {
                return Err(ScraperError::Config(format!("unknown listing field '{field}'")));
            }
            fields.push((field.clone(), parse_selector(css)?));
        }

        Ok(Self {
            card: parse_selector(&config.card)?,
            fields,
            next_page: parse_selector(&config.next_page)?,
        })
    }

    /// Every listing card on the page, in document order.
    pub fn extract_listings(&self, html: &str) -> Vec<ListingRecord> {
        let document = Html::parse_document(html);
        document
            .select(&self.card)
            .map(|card| self.parse_card(card))
            .collect()
    }

    /// Absolute URL of the page's "next" control, if it has one.
    pub fn next_page_url(&self, html: &str, current: &Url) -> Option<Url> {
        let document = Html::parse_document(html);
        let href = document
            .select(&self.next_page)
            .find_map(|a| a.value().attr("href"))?
            .trim();

        if href.is_empty() || href == "#" {
            return None;
        }
        current.join(href).ok()
    }

    fn parse_card(&self, card: ElementRef<'_>) -> ListingRecord {
        let mut record = ListingRecord::default();
        for (field, selector) in &self.fields {
            let text = card
                .select(selector)
                .next()
                .map(element_text)
                .unwrap_or_default();
            record.set(field, text);
        }
        record
    }
}

fn parse_selector(css: &str) -> Result<Selector, ScraperError> {
    Selector::parse(css).map_err(|e| ScraperError::Selector {
        selector: css.to_string(),
        reason: e.to_string(),
    })
}

fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
          <div class="component_property-card">
            <div class="property-type-class"> House </div>
            <div class="land-size-class">120 m²</div>
            <div class="rooms-class">3</div>
            <div class="address-class">
              <span>Calle 5</span>
              <span>Tijuana</span>
            </div>
            <span class="price-class">$2,500,000 MXN</span>
          </div>
          <div class="component_property-card">
            <div class="property-type-class">Apartment</div>
            <div class="bedrooms-class">2</div>
            <div class="bathrooms-class">1</div>
          </div>
          <nav><a rel="next" href="/international/mx/tijuana-baja-california/p2">Next</a></nav>
        </body></html>
    "#;

    fn selectors() -> ListingSelectors {
        ListingSelectors::compile(&SelectorConfig::default()).unwrap()
    }

    #[test]
    fn extracts_cards_in_document_order() {
        let listings = selectors().extract_listings(PAGE);
        assert_eq!(listings.len(), 2);

        let first = &listings[0];
        assert_eq!(first.property_type, "House");
        assert_eq!(first.land_size, "120 m²");
        assert_eq!(first.rooms, "3");
        assert_eq!(first.address, "Calle 5 Tijuana");
        assert_eq!(first.price, "$2,500,000 MXN");
        assert_eq!(first.parking_spaces, "");

        let second = &listings[1];
        assert_eq!(second.property_type, "Apartment");
        assert_eq!(second.num_bedrooms, "2");
        assert_eq!(second.num_bathrooms, "1");
        assert_eq!(second.price, "");
    }

    #[test]
    fn page_without_cards_yields_nothing() {
        assert!(selectors()
            .extract_listings("<html><body><p>No results</p></body></html>")
            .is_empty());
    }

    #[test]
    fn resolves_next_link_against_current_page() {
        let current =
            Url::parse("https://www.realtor.com/international/mx/tijuana-baja-california/p1")
                .unwrap();
        let next = selectors().next_page_url(PAGE, &current).unwrap();
        assert_eq!(
            next.as_str(),
            "https://www.realtor.com/international/mx/tijuana-baja-california/p2"
        );
    }

    #[test]
    fn missing_or_placeholder_next_link_means_last_page() {
        let current = Url::parse("https://example.com/p9").unwrap();
        let s = selectors();
        assert_eq!(s.next_page_url("<a href=\"/p10\">10</a>", &current), None);
        assert_eq!(s.next_page_url("<a rel=\"next\" href=\"#\">Next</a>", &current), None);
    }

    #[test]
    fn invalid_selector_is_reported() {
        let config = SelectorConfig {
            card: "div[".to_string(),
            ..SelectorConfig::default()
        };
        assert!(matches!(
            ListingSelectors::compile(&config),
            Err(ScraperError::Selector { .. })
        ));
    }

    #[test]
    fn unknown_field_is_a_config_error() {
        let mut config = SelectorConfig::default();
        config.fields.push(("pool".to_string(), "div.pool".to_string()));
        assert!(matches!(
            ListingSelectors::compile(&config),
            Err(ScraperError::Config(_))
        ));
    }
}
