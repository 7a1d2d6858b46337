//! Scene geometry for visual inspection of one case.
//!
//! A `Scene` is backend-agnostic: it lists the segments and markers to draw and the axis bounds to
//! draw them in. Turning it into pixels is the renderer's job.

use crate::case::TestCase;
use crate::result::IntersectionResult;
use crate::vec3::Vec3;

/// Ray extension per unit of the box's largest dimension.
pub const EXTENSION_FACTOR: f64 = 1.5;
/// Upper bound on the ray extension multiplier.
pub const MAX_EXTENSION: f64 = 20.0;
/// Padding added to the axis bounds on every side.
pub const BOUNDS_PADDING: f64 = 1.0;

/// Pairs of `TestCase::box_corners` indices forming the wireframe.
const BOX_EDGES: [(usize, usize); 12] = [
    // bottom face (z = min)
    (0, 1),
    (2, 3),
    (0, 2),
    (1, 3),
    // top face (z = max)
    (4, 5),
    (6, 7),
    (4, 6),
    (5, 7),
    // verticals
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Vec3,
    pub to: Vec3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    RayBegin,
    RayEnd,
    Intersection,
}

impl MarkerKind {
    /// Legend label.
    pub fn label(&self) -> &'static str {
        match self {
            MarkerKind::RayBegin => "Beg",
            MarkerKind::RayEnd => "End",
            MarkerKind::Intersection => "AtP",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub kind: MarkerKind,
    pub at: Vec3,
}

/// Axis-aligned plot bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    /// Degenerate bounds holding a single point.
    pub fn point(p: Vec3) -> Bounds {
        Bounds { min: p, max: p }
    }

    /// Grow to hold `p`.
    pub fn include(&mut self, p: Vec3) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// Copy grown by `padding` on every side.
    pub fn padded(&self, padding: f64) -> Bounds {
        Bounds {
            min: self.min - Vec3::splat(padding),
            max: self.max + Vec3::splat(padding),
        }
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// All eight corners, min first and max last.
    pub fn corners(&self) -> [Vec3; 8] {
        let (l, u) = (self.min, self.max);
        [
            Vec3::new(l.x, l.y, l.z),
            Vec3::new(u.x, l.y, l.z),
            Vec3::new(l.x, u.y, l.z),
            Vec3::new(u.x, u.y, l.z),
            Vec3::new(l.x, l.y, u.z),
            Vec3::new(u.x, l.y, u.z),
            Vec3::new(l.x, u.y, u.z),
            Vec3::new(u.x, u.y, u.z),
        ]
    }
}

/// Everything needed to draw one case.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Window or document title, normally the case file name.
    pub title: String,
    pub box_edges: Vec<Segment>,
    /// Ray segment, extended past both endpoints.
    pub ray: Segment,
    pub markers: Vec<Marker>,
    pub bounds: Bounds,
}

impl Scene {
    /// Lay out the scene for `case` and the routine's reported `result`.
    ///
    /// ## Notes
    /// - The ray is drawn from `begin - d*k` to `end + d*k` with `d = end - begin` (or `+X` when the
    ///   endpoints coincide) and `k = min(1.5 * largest box dimension, 20)`.
    /// - The intersection marker is only present for `Hit`.
    pub fn build(case: &TestCase, result: &IntersectionResult) -> Scene {
        let corners = case.box_corners();
        let box_edges = BOX_EDGES
            .iter()
            .map(|&(a, b)| Segment {
                from: corners[a],
                to: corners[b],
            })
            .collect();

        let ray = extend_ray(case);

        let mut markers = vec![
            Marker {
                kind: MarkerKind::RayBegin,
                at: case.ray_begin,
            },
            Marker {
                kind: MarkerKind::RayEnd,
                at: case.ray_end,
            },
        ];
        let hit = result.point();
        if let Some(at) = hit {
            markers.push(Marker {
                kind: MarkerKind::Intersection,
                at,
            });
        }

        let mut bounds = Bounds::point(ray.from);
        for p in [ray.to, case.box_min, case.box_max].into_iter().chain(hit) {
            bounds.include(p);
        }
        let bounds = bounds.padded(BOUNDS_PADDING);

        Scene {
            title: case.name.clone(),
            box_edges,
            ray,
            markers,
            bounds,
        }
    }

    pub fn marker(&self, kind: MarkerKind) -> Option<&Marker> {
        self.markers.iter().find(|m| m.kind == kind)
    }
}

fn extend_ray(case: &TestCase) -> Segment {
    let mut direction = case.ray_end - case.ray_begin;
    if direction.length() == 0.0 {
        direction = Vec3::UNIT_X;
    }

    let largest = case.box_size().max_component();
    let k = (largest * EXTENSION_FACTOR).min(MAX_EXTENSION);

    Segment {
        from: case.ray_begin - direction * k,
        to: case.ray_end + direction * k,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::catalogue;

    fn center_case() -> TestCase {
        catalogue().remove(0)
    }

    #[test]
    fn test_twelve_edges_with_axis_aligned_segments() {
        let scene = Scene::build(&center_case(), &IntersectionResult::NoHit);
        assert_eq!(scene.box_edges.len(), 12);
        for edge in &scene.box_edges {
            let delta = edge.to - edge.from;
            let changed = [delta.x, delta.y, delta.z].iter().filter(|d| **d != 0.0).count();
            assert_eq!(changed, 1, "edge {edge:?} must run along one axis");
        }
    }

    #[test]
    fn test_ray_extension() {
        // box (0.5..2) → largest dimension 1.5 → k = 2.25, d = (1,1,1)
        let scene = Scene::build(&center_case(), &IntersectionResult::NoHit);
        assert!(scene.ray.from.approx_eq(&Vec3::splat(-2.25), 1e-12));
        assert!(scene.ray.to.approx_eq(&Vec3::splat(3.25), 1e-12));
    }

    #[test]
    fn test_ray_extension_is_capped() {
        let case = TestCase::new(1, "big", [0.0; 3], [1.0, 0.0, 0.0], [-50.0; 3], [50.0; 3]);
        let scene = Scene::build(&case, &IntersectionResult::NoHit);
        assert_eq!(scene.ray.from, Vec3::new(-MAX_EXTENSION, 0.0, 0.0));
        assert_eq!(scene.ray.to, Vec3::new(1.0 + MAX_EXTENSION, 0.0, 0.0));
    }

    #[test]
    fn test_degenerate_ray_uses_x_direction() {
        let case = TestCase::new(1, "point", [1.0; 3], [1.0; 3], [0.0; 3], [2.0; 3]);
        let scene = Scene::build(&case, &IntersectionResult::NoHit);
        assert_eq!(scene.ray.from, Vec3::new(-2.0, 1.0, 1.0));
        assert_eq!(scene.ray.to, Vec3::new(4.0, 1.0, 1.0));
    }

    #[test]
    fn test_intersection_marker_only_on_hit() {
        let case = center_case();
        let no_hit = Scene::build(&case, &IntersectionResult::NoHit);
        assert_eq!(no_hit.markers.len(), 2);
        assert!(no_hit.marker(MarkerKind::Intersection).is_none());

        let malformed = IntersectionResult::Malformed {
            raw: "x".into(),
            error: "bad".into(),
        };
        assert_eq!(Scene::build(&case, &malformed).markers.len(), 2);

        let hit = Scene::build(&case, &IntersectionResult::Hit(Vec3::splat(0.5)));
        assert_eq!(hit.markers.len(), 3);
        assert_eq!(hit.marker(MarkerKind::Intersection).map(|m| m.at), Some(Vec3::splat(0.5)));
        assert_eq!(hit.marker(MarkerKind::RayBegin).map(|m| m.at), Some(case.ray_begin));
        assert_eq!(hit.marker(MarkerKind::RayEnd).map(|m| m.at), Some(case.ray_end));
    }

    #[test]
    fn test_bounds_are_padded_by_one() {
        let scene = Scene::build(&center_case(), &IntersectionResult::NoHit);
        assert!(scene.bounds.min.approx_eq(&Vec3::splat(-3.25), 1e-12));
        assert!(scene.bounds.max.approx_eq(&Vec3::splat(4.25), 1e-12));
    }

    #[test]
    fn test_bounds_include_far_intersection_point() {
        let far = Vec3::new(100.0, 0.0, 0.0);
        let scene = Scene::build(&center_case(), &IntersectionResult::Hit(far));
        assert_eq!(scene.bounds.max.x, 101.0);
    }

    #[test]
    fn test_title_is_case_name() {
        let mut case = center_case();
        case.name = "01.in".into();
        assert_eq!(Scene::build(&case, &IntersectionResult::NoHit).title, "01.in");
    }
}
