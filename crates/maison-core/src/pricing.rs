use maison_domain::RoomCatalogEntry;

/// Indicative stay price: the room's nightly rate times the night count.
///
/// `None` when the room publishes no rate or the stay has no nights yet.
pub fn estimate_total(room: &RoomCatalogEntry, nights: u32) -> Option<u64> {
    if nights == 0 {
        return None;
    }
    room.nightly_rate
        .map(|rate| u64::from(rate).saturating_mul(u64::from(nights)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimate_multiplies_rate_by_nights() {
        let room = RoomCatalogEntry::new("a", "a", "A", 2, 20).with_nightly_rate(145);
        assert_eq!(estimate_total(&room, 3), Some(435));
        assert_eq!(estimate_total(&room, 0), None);
    }

    #[test]
    fn unpriced_rooms_have_no_estimate() {
        let room = RoomCatalogEntry::new("a", "a", "A", 2, 20);
        assert_eq!(estimate_total(&room, 3), None);
    }
}
