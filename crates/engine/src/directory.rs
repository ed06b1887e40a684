//! Selling point directory
//!
//! The graph engine only needs two questions answered about a point: does
//! it exist, and what is it called. [`NodeDirectory`] is that seam.
//! [`SellingPointDirectory`] is a stateless facade that answers it from the
//! same backend the charges live in, and also owns point CRUD.
//!
//! Points are JSON records under `sellingPoint:{id}` with an optional
//! lease. Removing a point never touches charges that reference it;
//! graph readers drop neighbors that no longer resolve.

use std::sync::Arc;
use std::time::Duration;

use chargegraph_core::{
    validate_point_id, EntityRef, GraphError, GraphResult, PointId, SellingPoint,
};
use chargegraph_storage::KvBackend;

use crate::graph::keys;

/// Read-only view of the selling points used by the graph engine.
pub trait NodeDirectory: Send + Sync {
    /// Whether `id` is a known selling point.
    fn exists(&self, id: PointId) -> GraphResult<bool>;

    /// Display name of `id`, or `None` if it is unknown.
    fn resolve(&self, id: PointId) -> GraphResult<Option<String>>;
}

/// Backend-backed selling point directory.
///
/// Clone is cheap (just an Arc clone). Multiple instances sharing the same
/// backend see the same data.
#[derive(Clone)]
pub struct SellingPointDirectory {
    backend: Arc<dyn KvBackend>,
    lease: Option<Duration>,
}

impl SellingPointDirectory {
    /// Create a directory whose records are renewed for `lease` on write.
    pub fn new(backend: Arc<dyn KvBackend>, lease: Option<Duration>) -> Self {
        Self { backend, lease }
    }

    fn write(&self, point: &SellingPoint) -> GraphResult<()> {
        let json = serde_json::to_string(point)?;
        self.backend.put(&keys::point_key(point.id), &json, self.lease)
    }

    /// Replace every selling point with `points`.
    pub fn initialize(&self, points: &[SellingPoint]) -> GraphResult<()> {
        for point in points {
            point.validate()?;
        }
        let removed = self.clear()?;
        for point in points {
            self.write(point)?;
        }
        tracing::info!(
            target: "chargegraph::directory",
            loaded = points.len(),
            removed,
            "selling point directory initialized"
        );
        Ok(())
    }

    /// Every selling point, sorted by id.
    pub fn find_all(&self) -> GraphResult<Vec<SellingPoint>> {
        let record_keys = self.backend.scan_prefix(keys::POINT_PREFIX)?;
        let mut points = Vec::with_capacity(record_keys.len());
        for key in record_keys {
            if keys::parse_point_key(&key).is_none() {
                continue;
            }
            // may expire between scan and read
            if let Some(json) = self.backend.get(&key)? {
                points.push(serde_json::from_str::<SellingPoint>(&json)?);
            }
        }
        points.sort_by_key(|p| p.id);
        Ok(points)
    }

    /// Look up a selling point.
    pub fn find_by_id(&self, id: PointId) -> GraphResult<Option<SellingPoint>> {
        match self.backend.get(&keys::point_key(id))? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// Look up a selling point, failing with `NotFound`.
    pub fn get(&self, id: PointId) -> GraphResult<SellingPoint> {
        self.find_by_id(id)?
            .ok_or_else(|| GraphError::not_found(EntityRef::selling_point(id)))
    }

    /// Add a new selling point. Fails if the id is taken.
    pub fn create(&self, point: SellingPoint) -> GraphResult<SellingPoint> {
        point.validate()?;
        if self.backend.contains(&keys::point_key(point.id))? {
            return Err(GraphError::invalid_input(format!(
                "A selling point with id {} already exists",
                point.id
            )));
        }
        self.write(&point)?;
        tracing::info!(target: "chargegraph::directory", id = point.id, name = %point.name, "selling point created");
        Ok(point)
    }

    /// Rename an existing selling point. The stored id is always `id`.
    pub fn update(&self, id: PointId, name: &str) -> GraphResult<SellingPoint> {
        let updated = SellingPoint::new(id, name)?;
        if !self.backend.contains(&keys::point_key(id))? {
            return Err(GraphError::not_found(EntityRef::selling_point(id)));
        }
        self.write(&updated)?;
        tracing::info!(target: "chargegraph::directory", id, name = %updated.name, "selling point updated");
        Ok(updated)
    }

    /// Remove a selling point.
    pub fn delete(&self, id: PointId) -> GraphResult<()> {
        validate_point_id(id)?;
        if !self.backend.delete(&keys::point_key(id))? {
            return Err(GraphError::not_found(EntityRef::selling_point(id)));
        }
        tracing::info!(target: "chargegraph::directory", id, "selling point deleted");
        Ok(())
    }

    fn clear(&self) -> GraphResult<usize> {
        let mut removed = 0;
        for key in self.backend.scan_prefix(keys::POINT_PREFIX)? {
            if self.backend.delete(&key)? {
                removed += 1;
            }
        }
        if removed > 0 {
            tracing::warn!(target: "chargegraph::directory", removed, "selling point directory cleared");
        }
        Ok(removed)
    }
}

impl NodeDirectory for SellingPointDirectory {
    fn exists(&self, id: PointId) -> GraphResult<bool> {
        self.backend.contains(&keys::point_key(id))
    }

    fn resolve(&self, id: PointId) -> GraphResult<Option<String>> {
        Ok(self.find_by_id(id)?.map(|p| p.name))
    }
}

impl std::fmt::Debug for SellingPointDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SellingPointDirectory")
            .field("lease", &self.lease)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chargegraph_storage::{ManualClock, ShardedStore};

    fn setup() -> (Arc<ManualClock>, SellingPointDirectory) {
        let clock = Arc::new(ManualClock::new(0));
        let backend = Arc::new(ShardedStore::with_clock(clock.clone()));
        let dir = SellingPointDirectory::new(backend, Some(Duration::from_secs(3600)));
        (clock, dir)
    }

    fn point(id: PointId, name: &str) -> SellingPoint {
        SellingPoint::new(id, name).unwrap()
    }

    #[test]
    fn create_and_find() {
        let (_clock, dir) = setup();
        dir.create(point(1, "CABA")).unwrap();
        assert_eq!(dir.find_by_id(1).unwrap(), Some(point(1, "CABA")));
        assert!(dir.exists(1).unwrap());
        assert_eq!(dir.resolve(1).unwrap().as_deref(), Some("CABA"));
    }

    #[test]
    fn create_duplicate_is_invalid_input() {
        let (_clock, dir) = setup();
        dir.create(point(1, "CABA")).unwrap();
        let err = dir.create(point(1, "Other")).unwrap_err();
        assert!(matches!(err, GraphError::InvalidInput { .. }));
        assert_eq!(dir.resolve(1).unwrap().as_deref(), Some("CABA"));
    }

    #[test]
    fn update_missing_is_not_found() {
        let (_clock, dir) = setup();
        let err = dir.update(5, "Nowhere").unwrap_err();
        assert!(matches!(err, GraphError::NotFound { .. }));
    }

    #[test]
    fn update_renames() {
        let (_clock, dir) = setup();
        dir.create(point(2, "GBA_1")).unwrap();
        let updated = dir.update(2, "  GBA Norte ").unwrap();
        assert_eq!(updated, point(2, "GBA Norte"));
        assert_eq!(dir.get(2).unwrap().name, "GBA Norte");
    }

    #[test]
    fn delete_then_missing() {
        let (_clock, dir) = setup();
        dir.create(point(3, "GBA_2")).unwrap();
        dir.delete(3).unwrap();
        assert!(!dir.exists(3).unwrap());
        assert!(matches!(
            dir.delete(3).unwrap_err(),
            GraphError::NotFound { .. }
        ));
    }

    #[test]
    fn find_all_is_sorted_by_id() {
        let (_clock, dir) = setup();
        for (id, name) in [(10, "Catamarca"), (2, "GBA_1"), (5, "Córdoba")] {
            dir.create(point(id, name)).unwrap();
        }
        let ids: Vec<_> = dir.find_all().unwrap().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 5, 10]);
    }

    #[test]
    fn initialize_replaces_everything() {
        let (_clock, dir) = setup();
        dir.create(point(99, "Old")).unwrap();
        dir.initialize(&[point(1, "CABA"), point(2, "GBA_1")]).unwrap();
        assert!(!dir.exists(99).unwrap());
        assert_eq!(dir.find_all().unwrap().len(), 2);
    }

    #[test]
    fn initialize_rejects_invalid_point_before_clearing() {
        let (_clock, dir) = setup();
        dir.create(point(1, "CABA")).unwrap();
        let bad = SellingPoint {
            id: 0,
            name: "Zero".to_string(),
        };
        assert!(dir.initialize(&[bad]).is_err());
        assert!(dir.exists(1).unwrap());
    }

    #[test]
    fn records_expire_with_lease() {
        let (clock, dir) = setup();
        dir.create(point(1, "CABA")).unwrap();
        clock.advance(Duration::from_secs(3600));
        assert!(!dir.exists(1).unwrap());
        assert!(dir.resolve(1).unwrap().is_none());
    }
}
