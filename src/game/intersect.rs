use cgmath::prelude::*;
use cgmath::{Point3, Vector3, Zero};
use crate::game::raycast::Ray;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoxHit {
    /// Outward normal of the struck face, always an axis unit vector.
    pub normal: Vector3<f32>,
    pub point: Point3<f32>,
    pub distance: f32,
}

/// Slab test of `ray` against the box centered on `center` with full
/// extent `size`.
///
/// Zero direction components are not special-cased: the divisions produce
/// infinities and the ordinary comparisons reject or accept them. The face is
/// picked by comparing the entry point against the box bounds axis by axis,
/// with later axes overriding earlier ones, so a hit on an edge or corner
/// reports the Z face first, then Y, then X.
///
/// Hits farther than `max_distance` from the ray origin are discarded.
pub fn intersect_box(
    ray: &Ray,
    center: Point3<f32>,
    size: Vector3<f32>,
    max_distance: f32,
) -> Option<BoxHit> {
    let min = center - size * 0.5;
    let max = center + size * 0.5;
    let origin = ray.origin;
    let dir = ray.direction;

    let mut tmin = (min.x - origin.x) / dir.x;
    let mut tmax = (max.x - origin.x) / dir.x;
    if tmin > tmax {
        std::mem::swap(&mut tmin, &mut tmax);
    }
    let mut entry_axis = 0;

    let mut tymin = (min.y - origin.y) / dir.y;
    let mut tymax = (max.y - origin.y) / dir.y;
    if tymin > tymax {
        std::mem::swap(&mut tymin, &mut tymax);
    }

    if tymin > tmin {
        tmin = tymin;
        entry_axis = 1;
    }
    if tymax < tmax {
        tmax = tymax;
    }
    if tmin > tmax {
        return None;
    }

    let mut tzmin = (min.z - origin.z) / dir.z;
    let mut tzmax = (max.z - origin.z) / dir.z;
    if tzmin > tzmax {
        std::mem::swap(&mut tzmin, &mut tzmax);
    }

    if tzmin > tmin {
        tmin = tzmin;
        entry_axis = 2;
    }
    if tzmax < tmax {
        tmax = tzmax;
    }
    if tmin > tmax {
        return None;
    }

    let point = ray.at(tmin);
    let normal = face_normal(point, min, max).unwrap_or_else(|| entry_normal(entry_axis, dir));

    let distance = (point - origin).magnitude();
    // Also rejects NaN, which shows up when the origin sits exactly on a
    // slab plane the ray runs parallel to.
    if !(distance <= max_distance) {
        return None;
    }

    Some(BoxHit {
        normal,
        point,
        distance,
    })
}

fn face_normal(point: Point3<f32>, min: Point3<f32>, max: Point3<f32>) -> Option<Vector3<f32>> {
    let mut normal = None;

    if point.x == min.x {
        normal = Some(-Vector3::unit_x());
    }
    if point.x == max.x {
        normal = Some(Vector3::unit_x());
    }

    if point.y == min.y {
        normal = Some(-Vector3::unit_y());
    }
    if point.y == max.y {
        normal = Some(Vector3::unit_y());
    }

    if point.z == min.z {
        normal = Some(-Vector3::unit_z());
    }
    if point.z == max.z {
        normal = Some(Vector3::unit_z());
    }

    normal
}

// Rounding can leave the entry point a hair off the face plane. The face
// then follows from the slab the ray entered last: it faces the ray.
fn entry_normal(axis: usize, dir: Vector3<f32>) -> Vector3<f32> {
    let mut normal = Vector3::zero();
    normal[axis] = if dir[axis] > 0.0 { -1.0 } else { 1.0 };
    normal
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit() -> Vector3<f32> {
        Vector3::new(1.0, 1.0, 1.0)
    }

    fn ray(origin: (f32, f32, f32), dir: (f32, f32, f32)) -> Ray {
        Ray::new(Point3::new(origin.0, origin.1, origin.2), Vector3::new(dir.0, dir.1, dir.2))
    }

    fn is_axis_unit(v: Vector3<f32>) -> bool {
        let components = [v.x.abs(), v.y.abs(), v.z.abs()];
        components.iter().filter(|c| **c == 1.0).count() == 1
            && components.iter().filter(|c| **c == 0.0).count() == 2
    }

    #[test]
    fn straight_down_hits_the_top_face() {
        let hit = intersect_box(
            &ray((5.0, 9.55, 5.0), (0.0, -1.0, 0.0)),
            Point3::new(5.0, 9.0, 5.0),
            unit(),
            0.1,
        )
        .unwrap();

        assert_eq!(hit.normal, Vector3::unit_y());
        assert_eq!(hit.point.y, 9.5);
        assert!(hit.distance < 0.1);
    }

    #[test]
    fn hits_beyond_max_distance_are_rejected() {
        let r = ray((5.0, 9.55, 5.0), (0.0, -1.0, 0.0));
        // The cell below is 1.05 away.
        assert!(intersect_box(&r, Point3::new(5.0, 8.0, 5.0), unit(), 0.1).is_none());
        assert!(intersect_box(&r, Point3::new(5.0, 8.0, 5.0), unit(), 2.0).is_some());
    }

    #[test]
    fn zero_component_off_the_slab_misses() {
        // Parallel to x and outside the box's x slab.
        let r = ray((10.0, 0.0, 0.0), (0.0, 0.0, 1.0));
        assert!(intersect_box(&r, Point3::new(0.0, 0.0, 5.0), unit(), 100.0).is_none());
    }

    #[test]
    fn zero_components_inside_the_slab_hit() {
        let r = ray((0.0, 0.0, 0.0), (0.0, 0.0, 1.0));
        let hit = intersect_box(&r, Point3::new(0.0, 0.0, 2.0), unit(), 10.0).unwrap();

        assert_eq!(hit.normal, -Vector3::unit_z());
        assert_eq!(hit.distance, 1.5);
    }

    #[test]
    fn boxes_behind_the_origin_are_kept_out_by_reach() {
        let r = ray((0.0, 0.0, 0.0), (0.0, 0.0, -1.0));
        let center = Point3::new(0.0, 0.0, 5.0);

        assert!(intersect_box(&r, center, unit(), 1.0).is_none());
        let hit = intersect_box(&r, center, unit(), 100.0).unwrap();
        assert_eq!(hit.distance, 5.5);
    }

    #[test]
    fn origin_inside_the_box_does_not_panic() {
        let directions = [
            (0.0, 0.0, 1.0),
            (0.0, -1.0, 0.0),
            (1.0, 1.0, 1.0),
            (1e-30, 0.0, -1.0),
            (-1e-7, 1e-7, 1.0),
        ];

        for dir in directions {
            let r = ray((0.1, 0.2, -0.1), dir);
            if let Some(hit) = intersect_box(&r, Point3::new(0.0, 0.0, 0.0), unit(), 10.0) {
                assert!(is_axis_unit(hit.normal));
            }
        }
    }

    #[test]
    fn origin_on_a_parallel_slab_plane_is_rejected() {
        // x sits on the shared face of two cells, dir.x == 0 gives 0/0.
        let r = ray((5.5, 9.55, 5.0), (0.0, -1.0, 0.0));
        let hit = intersect_box(&r, Point3::new(6.0, 9.0, 5.0), unit(), 0.1);
        assert!(hit.map_or(true, |h| h.distance.is_finite()));
    }

    #[test]
    fn edge_hits_prefer_the_later_axis() {
        // Lands exactly on the top-back edge of the box. Left unnormalized
        // so the entry point is exact.
        let r = Ray {
            origin: Point3::new(0.0, 1.0, 1.0),
            direction: Vector3::new(0.0, -1.0, -1.0),
        };
        let hit = intersect_box(&r, Point3::new(0.0, 0.0, 0.0), unit(), 10.0).unwrap();

        assert_eq!(hit.point, Point3::new(0.0, 0.5, 0.5));
        assert_eq!(hit.normal, Vector3::unit_z());
    }

    #[test]
    fn reported_face_matches_the_entry_point() {
        let center = Point3::new(2.0, -1.0, 3.0);
        let eye = Point3::new(-1.3, 2.7, -0.4);

        // Aim at a lattice of points spread over the box.
        for i in 0..5 {
            for j in 0..5 {
                for k in 0..5 {
                    let target = center
                        + Vector3::new(
                            -0.45 + 0.225 * i as f32,
                            -0.45 + 0.225 * j as f32,
                            -0.45 + 0.225 * k as f32,
                        );
                    let r = Ray::new(eye, target - eye);
                    assert!(r.direction.x != 0.0 && r.direction.y != 0.0 && r.direction.z != 0.0);

                    let hit = intersect_box(&r, center, unit(), 100.0).unwrap();
                    assert!(is_axis_unit(hit.normal), "{:?}", hit.normal);

                    // The entry point lies on the plane of the reported face
                    // and the face looks back at the ray.
                    let plane = center + hit.normal * 0.5;
                    let offset = (hit.point - plane).dot(hit.normal);
                    assert!(offset.abs() < 1e-4, "{:?} off {:?}", hit.point, hit.normal);
                    assert!(hit.normal.dot(r.direction) < 0.0);
                }
            }
        }
    }
}
