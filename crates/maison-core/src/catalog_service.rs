use std::collections::HashSet;

use maison_domain::RoomCatalog;

use crate::CoreError;

pub struct CatalogService;

impl CatalogService {
    /// Rejects catalogs the booking wizard cannot work with: no rooms, blank
    /// ids or slugs, rooms that sleep nobody, or lookup keys that collide.
    /// Ids and slugs share one case-insensitive namespace, so a slug may only
    /// repeat its own room's id.
    pub fn validate(catalog: &RoomCatalog) -> Result<(), CoreError> {
        if catalog.is_empty() {
            return Err(CoreError::InvalidCatalog("catalog has no rooms".into()));
        }

        let mut keys = HashSet::new();
        for (index, room) in catalog.iter().enumerate() {
            if room.id.trim().is_empty() {
                return Err(CoreError::InvalidCatalog(format!(
                    "room #{} has an empty id",
                    index + 1
                )));
            }
            if room.slug.trim().is_empty() {
                return Err(CoreError::InvalidCatalog(format!(
                    "room `{}` has an empty slug",
                    room.id
                )));
            }
            if room.capacity == 0 {
                return Err(CoreError::InvalidCatalog(format!(
                    "room `{}` has zero capacity",
                    room.id
                )));
            }
            let id = room.id.to_ascii_lowercase();
            let slug = room.slug.to_ascii_lowercase();
            if !keys.insert(id.clone()) {
                return Err(CoreError::InvalidCatalog(format!(
                    "duplicate room id `{}`",
                    room.id
                )));
            }
            if slug != id && !keys.insert(slug) {
                return Err(CoreError::InvalidCatalog(format!(
                    "room `{}` has slug `{}`, already used as another room's id or slug",
                    room.id, room.slug
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use maison_domain::RoomCatalogEntry;

    use super::*;

    #[test]
    fn seed_catalog_is_valid() {
        CatalogService::validate(&RoomCatalog::seed()).expect("seed catalog");
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let err = CatalogService::validate(&RoomCatalog::default()).unwrap_err();
        assert!(matches!(err, CoreError::InvalidCatalog(_)));
    }

    #[test]
    fn duplicate_ids_are_rejected_case_insensitively() {
        let catalog = RoomCatalog::new(vec![
            RoomCatalogEntry::new("Loft", "loft", "Loft", 2, 30),
            RoomCatalogEntry::new("loft", "loft-2", "Loft Two", 2, 30),
        ]);
        let err = CatalogService::validate(&catalog).unwrap_err();
        assert!(err.to_string().contains("duplicate room id"));
    }

    #[test]
    fn slug_matching_another_rooms_id_is_rejected() {
        let catalog = RoomCatalog::new(vec![
            RoomCatalogEntry::new("b-1", "loft", "Loft", 2, 30),
            RoomCatalogEntry::new("loft", "the-loft", "The Loft", 4, 45),
        ]);
        let err = CatalogService::validate(&catalog).unwrap_err();
        assert!(err.to_string().contains("duplicate room id `loft`"));

        let reversed = RoomCatalog::new(vec![
            RoomCatalogEntry::new("loft", "the-loft", "The Loft", 4, 45),
            RoomCatalogEntry::new("b-1", "LOFT", "Loft", 2, 30),
        ]);
        let err = CatalogService::validate(&reversed).unwrap_err();
        assert!(err.to_string().contains("slug `LOFT`"));
    }

    #[test]
    fn slug_equal_to_own_id_is_accepted() {
        let catalog = RoomCatalog::new(vec![
            RoomCatalogEntry::new("loft", "Loft", "Loft", 2, 30),
            RoomCatalogEntry::new("suite", "suite", "Suite", 2, 30),
        ]);
        assert!(CatalogService::validate(&catalog).is_ok());
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let catalog = RoomCatalog::new(vec![RoomCatalogEntry::new("a", "a", "A", 0, 10)]);
        assert!(CatalogService::validate(&catalog).is_err());
    }
}
