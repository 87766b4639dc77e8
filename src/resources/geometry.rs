use glam::{Mat4, Vec3};
use smallvec::SmallVec;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl BoundingBox {
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    #[must_use]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoundingSphere {
    pub center: Vec3,
    pub radius: f32,
}

impl BoundingSphere {
    /// Transforms the sphere into another space. The radius is scaled by the
    /// largest axis scale so the result still encloses the original volume.
    #[must_use]
    pub fn transform(&self, matrix: &Mat4) -> Self {
        let center = matrix.transform_point3(self.center);
        let max_scale = matrix
            .x_axis
            .truncate()
            .length_squared()
            .max(matrix.y_axis.truncate().length_squared())
            .max(matrix.z_axis.truncate().length_squared())
            .sqrt();

        Self {
            center,
            radius: self.radius * max_scale,
        }
    }
}

/// A draw range of a geometry rendered with one of the mesh's materials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeometryGroup {
    pub start: u32,
    pub count: u32,
    pub material_index: usize,
}

impl GeometryGroup {
    #[must_use]
    pub fn new(start: u32, count: u32, material_index: usize) -> Self {
        Self { start, count, material_index }
    }
}

/// CPU-side geometry description.
///
/// Only the data the renderer core reasons about is kept here: vertex
/// positions (for bounding volumes), draw groups for multi-material meshes and
/// the number of morph attributes.
#[derive(Debug, Clone)]
pub struct Geometry {
    positions: Vec<Vec3>,
    groups: SmallVec<[GeometryGroup; 4]>,

    /// Number of morph target attributes attached to the geometry.
    pub morph_target_count: u32,

    bounding_box: Option<BoundingBox>,
    bounding_sphere: Option<BoundingSphere>,
}

impl Default for Geometry {
    fn default() -> Self {
        Self::new()
    }
}

impl Geometry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            positions: Vec::new(),
            groups: SmallVec::new(),
            morph_target_count: 0,
            bounding_box: None,
            bounding_sphere: None,
        }
    }

    /// Creates a geometry from vertex positions and computes its bounds.
    #[must_use]
    pub fn from_positions(positions: Vec<Vec3>) -> Self {
        let mut geometry = Self::new();
        geometry.set_positions(positions);
        geometry
    }

    /// Replaces vertex positions and recomputes the bounding volumes.
    pub fn set_positions(&mut self, positions: Vec<Vec3>) {
        self.positions = positions;
        self.compute_bounding_volume();
    }

    #[inline]
    #[must_use]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn add_group(&mut self, start: u32, count: u32, material_index: usize) {
        self.groups.push(GeometryGroup::new(start, count, material_index));
    }

    pub fn clear_groups(&mut self) {
        self.groups.clear();
    }

    #[inline]
    #[must_use]
    pub fn groups(&self) -> &[GeometryGroup] {
        &self.groups
    }

    #[inline]
    #[must_use]
    pub fn has_morph_targets(&self) -> bool {
        self.morph_target_count > 0
    }

    #[inline]
    #[must_use]
    pub fn bounding_box(&self) -> Option<&BoundingBox> {
        self.bounding_box.as_ref()
    }

    #[inline]
    #[must_use]
    pub fn bounding_sphere(&self) -> Option<&BoundingSphere> {
        self.bounding_sphere.as_ref()
    }

    /// Computes the AABB, then a sphere centered on the AABB center that
    /// encloses every position.
    pub fn compute_bounding_volume(&mut self) {
        if self.positions.is_empty() {
            self.bounding_box = None;
            self.bounding_sphere = None;
            return;
        }

        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);
        for p in &self.positions {
            min = min.min(*p);
            max = max.max(*p);
        }

        let bounds = BoundingBox { min, max };
        let center = bounds.center();
        let max_dist_sq = self
            .positions
            .iter()
            .map(|p| p.distance_squared(center))
            .fold(0.0_f32, f32::max);

        self.bounding_box = Some(bounds);
        self.bounding_sphere = Some(BoundingSphere {
            center,
            radius: max_dist_sq.sqrt(),
        });
    }
}
