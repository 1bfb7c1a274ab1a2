use serde::Serialize;

// ListingRecord
//  ├── address
//  ├── property_type
//  ├── parking_spaces
//  ├── land_size
//  ├── building_size
//  ├── rooms            (static pages only)
//  ├── num_bedrooms     (session pages only)
//  ├── num_bathrooms    (session pages only)
//  └── price

/// One property card as scraped. Every field is the trimmed text of the
/// matching element, or empty when the card has no such element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ListingRecord {
    pub address: String,
    pub property_type: String,
    pub parking_spaces: String,
    pub land_size: String,
    pub building_size: String,
    pub rooms: String,
    pub num_bedrooms: String,
    pub num_bathrooms: String,
    pub price: String,
}

impl ListingRecord {
    /// Value of a field by its snake_case name.
    pub fn get(&self, field: &str) -> Option<&str> {
        let value = match field {
            "address" => &self.address,
            "property_type" => &self.property_type,
            "parking_spaces" => &self.parking_spaces,
            "land_size" => &self.land_size,
            "building_size" => &self.building_size,
            "rooms" => &self.rooms,
            "num_bedrooms" => &self.num_bedrooms,
            "num_bathrooms" => &self.num_bathrooms,
            "price" => &self.price,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// Returns false when `field` is not a listing field.
    pub fn set(&mut self, field: &str, value: String) -> bool {
        let slot = match field {
            "address" => &mut self.address,
            "property_type" => &mut self.property_type,
            "parking_spaces" => &mut self.parking_spaces,
            "land_size" => &mut self.land_size,
            "building_size" => &mut self.building_size,
            "rooms" => &mut self.rooms,
            "num_bedrooms" => &mut self.num_bedrooms,
            "num_bathrooms" => &mut self.num_bathrooms,
            "price" => &mut self.price,
            _ => return false,
        };
        *slot = value;
        true
    }
}

/// Listings extracted from one page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageBatch {
    pub page: usize,
    pub url: String,
    pub listings: Vec<ListingRecord>,
}
