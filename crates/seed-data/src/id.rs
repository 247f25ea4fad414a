//! Opaque identifier generation for seeded rows.

use uuid::Uuid;

/// Generates a fresh opaque identifier.
///
/// Identifiers are UUID v4 values rendered without hyphens, giving a 32
/// character lowercase hex string that is URL-safe and collision-resistant at
/// seeding scale.
pub fn generate() -> String {
    Uuid::new_v4().simple().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let ids: std::collections::HashSet<_> = (0..100).map(|_| generate()).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_id_shape() {
        let id = generate();
        assert_eq!(id.len(), 32);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
