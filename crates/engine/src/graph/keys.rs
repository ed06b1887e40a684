//! Key construction and parsing for charge graph storage.
//!
//! Adjacency records are hash records keyed `charges:{point_id}` whose
//! fields are neighbor ids. Selling points live under `sellingPoint:{id}`.

use chargegraph_core::{GraphError, GraphResult, PointId};

/// Prefix shared by every adjacency record.
pub const CHARGE_PREFIX: &str = "charges:";

/// Prefix shared by every selling point record.
pub const POINT_PREFIX: &str = "sellingPoint:";

// --- Adjacency keys ---

/// Key for a point's adjacency record: `charges:{id}`
pub fn adjacency_key(id: PointId) -> String {
    format!("{}{}", CHARGE_PREFIX, id)
}

/// Parse an adjacency key back into its point id.
pub fn parse_adjacency_key(key: &str) -> Option<PointId> {
    key.strip_prefix(CHARGE_PREFIX)?.parse().ok()
}

/// Field name for a neighbor inside an adjacency record.
pub fn neighbor_field(neighbor: PointId) -> String {
    neighbor.to_string()
}

/// Parse a neighbor field. A malformed field means the record is corrupt.
pub fn parse_neighbor_field(key: &str, field: &str) -> GraphResult<PointId> {
    field.parse().map_err(|_| {
        GraphError::serialization(format!(
            "adjacency record '{}' has a non-numeric neighbor '{}'",
            key, field
        ))
    })
}

// --- Selling point keys ---

/// Key for a selling point: `sellingPoint:{id}`
pub fn point_key(id: PointId) -> String {
    format!("{}{}", POINT_PREFIX, id)
}

/// Parse a selling point key back into its id.
pub fn parse_point_key(key: &str) -> Option<PointId> {
    key.strip_prefix(POINT_PREFIX)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacency_key_roundtrip() {
        assert_eq!(adjacency_key(42), "charges:42");
        assert_eq!(parse_adjacency_key("charges:42"), Some(42));
    }

    #[test]
    fn parse_adjacency_key_rejects_foreign_keys() {
        assert_eq!(parse_adjacency_key("sellingPoint:42"), None);
        assert_eq!(parse_adjacency_key("charges:abc"), None);
        assert_eq!(parse_adjacency_key("charges:"), None);
    }

    #[test]
    fn point_key_format() {
        assert_eq!(point_key(3), "sellingPoint:3");
        assert_eq!(parse_point_key("sellingPoint:3"), Some(3));
        assert_eq!(parse_point_key("charges:3"), None);
    }

    #[test]
    fn neighbor_field_parse_errors_are_serialization() {
        assert_eq!(parse_neighbor_field("charges:1", "7").unwrap(), 7);
        let err = parse_neighbor_field("charges:1", "x").unwrap_err();
        assert!(matches!(err, GraphError::Serialization { .. }));
    }

    #[test]
    fn prefixes_do_not_overlap() {
        assert!(!adjacency_key(1).starts_with(POINT_PREFIX));
        assert!(!point_key(1).starts_with(CHARGE_PREFIX));
    }
}
