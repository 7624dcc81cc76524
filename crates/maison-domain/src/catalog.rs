//! Read-only room records supplied by the hotel's catalog.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single bookable room type as published on the rooms page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoomCatalogEntry {
    pub id: String,
    pub slug: String,
    pub name: String,
    /// Maximum number of guests (adults and children) the room sleeps.
    pub capacity: u8,
    /// Floor area in square metres.
    pub size: u16,
    pub tagline: String,
    pub image: String,
    #[serde(default)]
    pub features: Vec<String>,
    /// Starting rate per night in whole currency units, when published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nightly_rate: Option<u32>,
}

impl RoomCatalogEntry {
    pub fn new(
        id: impl Into<String>,
        slug: impl Into<String>,
        name: impl Into<String>,
        capacity: u8,
        size: u16,
    ) -> Self {
        Self {
            id: id.into(),
            slug: slug.into(),
            name: name.into(),
            capacity,
            size,
            tagline: String::new(),
            image: String::new(),
            features: Vec::new(),
            nightly_rate: None,
        }
    }

    pub fn with_tagline(mut self, tagline: impl Into<String>) -> Self {
        self.tagline = tagline.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_nightly_rate(mut self, rate: u32) -> Self {
        self.nightly_rate = Some(rate);
        self
    }

    /// Returns true when the room sleeps a party of `guests`.
    pub fn fits(&self, guests: u8) -> bool {
        guests <= self.capacity
    }

}

impl fmt::Display for RoomCatalogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} m², up to {} guests)",
            self.name, self.size, self.capacity
        )
    }
}

/// Ordered, immutable list of rooms offered by the hotel.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct RoomCatalog {
    rooms: Vec<RoomCatalogEntry>,
}

impl RoomCatalog {
    pub fn new(rooms: Vec<RoomCatalogEntry>) -> Self {
        Self { rooms }
    }

    /// Built-in catalog mirroring the rooms page of the website.
    pub fn seed() -> Self {
        Self::new(vec![
            RoomCatalogEntry::new("classic-double", "classic-double", "Classic Double", 2, 22)
                .with_tagline("Quiet comfort overlooking the courtyard")
                .with_image("rooms/classic-double.jpg")
                .with_features(["Queen bed", "Rain shower", "Courtyard view"])
                .with_nightly_rate(145),
            RoomCatalogEntry::new("deluxe-double", "deluxe-double", "Deluxe Double", 2, 28)
                .with_tagline("Generous light and a reading corner")
                .with_image("rooms/deluxe-double.jpg")
                .with_features(["King bed", "Freestanding bath", "Garden view"])
                .with_nightly_rate(185),
            RoomCatalogEntry::new("junior-suite", "junior-suite", "Junior Suite", 3, 38)
                .with_tagline("A separate lounge for slow mornings")
                .with_image("rooms/junior-suite.jpg")
                .with_features(["King bed", "Sofa bed", "Balcony", "Espresso machine"])
                .with_nightly_rate(240),
            RoomCatalogEntry::new("garden-suite", "garden-suite", "Garden Suite", 4, 46)
                .with_tagline("Private terrace opening onto the garden")
                .with_image("rooms/garden-suite.jpg")
                .with_features(["King bed", "Private terrace", "Walk-in shower"])
                .with_nightly_rate(290),
            RoomCatalogEntry::new("family-loft", "family-loft", "Family Loft", 6, 58)
                .with_tagline("Two levels under the old roof beams")
                .with_image("rooms/family-loft.jpg")
                .with_features(["King bed", "Two single beds", "Sofa bed", "Kitchenette"])
                .with_nightly_rate(320),
            RoomCatalogEntry::new("rooftop-suite", "rooftop-suite", "Rooftop Suite", 4, 64)
                .with_tagline("Panoramic views across the old town")
                .with_image("rooms/rooftop-suite.jpg")
                .with_features(["King bed", "Roof terrace", "Soaking tub", "Butler service"])
                .with_nightly_rate(450),
        ])
    }

    pub fn entries(&self) -> &[RoomCatalogEntry] {
        &self.rooms
    }

    pub fn iter(&self) -> impl Iterator<Item = &RoomCatalogEntry> {
        self.rooms.iter()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Exact lookup by canonical id.
    pub fn get(&self, id: &str) -> Option<&RoomCatalogEntry> {
        self.rooms.iter().find(|room| room.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Lookup by id or slug, ignoring ASCII case and surrounding whitespace.
    /// An id match wins over a slug match.
    pub fn resolve(&self, key: &str) -> Option<&RoomCatalogEntry> {
        let key = key.trim();
        if key.is_empty() {
            return None;
        }
        self.rooms
            .iter()
            .find(|room| room.id.eq_ignore_ascii_case(key))
            .or_else(|| {
                self.rooms
                    .iter()
                    .find(|room| room.slug.eq_ignore_ascii_case(key))
            })
    }

    /// Rooms whose capacity covers a party of `guests`, in catalog order.
    pub fn fitting(&self, guests: u8) -> impl Iterator<Item = &RoomCatalogEntry> {
        self.rooms.iter().filter(move |room| room.fits(guests))
    }
}

impl<'a> IntoIterator for &'a RoomCatalog {
    type Item = &'a RoomCatalogEntry;
    type IntoIter = std::slice::Iter<'a, RoomCatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.rooms.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_catalog_has_unique_ids() {
        let catalog = RoomCatalog::seed();
        let mut ids: Vec<&str> = catalog.iter().map(|room| room.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn resolve_accepts_slug_and_ignores_case() {
        let catalog = RoomCatalog::new(vec![RoomCatalogEntry::new(
            "r-7",
            "garden-suite",
            "Garden Suite",
            4,
            46,
        )]);

        assert_eq!(catalog.resolve("GARDEN-SUITE").map(|r| r.id.as_str()), Some("r-7"));
        assert_eq!(catalog.resolve(" r-7 ").map(|r| r.id.as_str()), Some("r-7"));
        assert!(catalog.resolve("").is_none());
        assert!(catalog.get("garden-suite").is_none());
    }

    #[test]
    fn resolve_prefers_id_over_another_rooms_slug() {
        let catalog = RoomCatalog::new(vec![
            RoomCatalogEntry::new("b-1", "loft", "Loft", 2, 30),
            RoomCatalogEntry::new("loft", "the-loft", "The Loft", 4, 45),
        ]);
        assert_eq!(catalog.resolve("loft").map(|r| r.id.as_str()), Some("loft"));
        assert_eq!(catalog.resolve("the-loft").map(|r| r.id.as_str()), Some("loft"));
        assert_eq!(catalog.resolve("b-1").map(|r| r.id.as_str()), Some("b-1"));
    }

    #[test]
    fn fitting_filters_by_capacity() {
        let catalog = RoomCatalog::seed();
        let large: Vec<&str> = catalog.fitting(5).map(|room| room.id.as_str()).collect();
        assert_eq!(large, vec!["family-loft"]);
        assert_eq!(catalog.fitting(1).count(), catalog.len());
    }

    #[test]
    fn catalog_deserializes_from_plain_array() {
        let json = r#"[{"id":"a","slug":"a","name":"A","capacity":2,"size":20,
            "tagline":"t","image":"a.jpg"}]"#;
        let catalog: RoomCatalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.len(), 1);
        let room = &catalog.entries()[0];
        assert!(room.features.is_empty());
        assert_eq!(room.nightly_rate, None);
    }
}
