use karst_geom::{Mat4, Vec3};

fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}
fn vapprox(a: Vec3, b: Vec3, eps: f32) -> bool {
    approx(a.x, b.x, eps) && approx(a.y, b.y, eps) && approx(a.z, b.z, eps)
}

#[test]
fn identity_leaves_points_alone() {
    let p = Vec3::new(1.5, -2.0, 7.25);
    assert_eq!(Mat4::IDENTITY.transform_point(p), p);
}

#[test]
fn translation_offsets_points() {
    let m = Mat4::from_translation(Vec3::new(3.0, -1.0, 0.5));
    let p = m.transform_point(Vec3::new(1.0, 1.0, 1.0));
    assert!(vapprox(p, Vec3::new(4.0, 0.0, 1.5), 1e-6));
}

#[test]
fn yaw_quarter_turn_maps_x_to_z() {
    let m = Mat4::from_rotation_y(90.0);
    let p = m.transform_point(Vec3::new(1.0, 0.0, 0.0));
    assert!(vapprox(p, Vec3::new(0.0, 0.0, 1.0), 1e-6));
    // Y is preserved
    let q = m.transform_point(Vec3::new(0.0, 5.0, 0.0));
    assert!(vapprox(q, Vec3::new(0.0, 5.0, 0.0), 1e-6));
}

#[test]
fn compose_applies_rightmost_first() {
    let rot = Mat4::from_rotation_y(90.0);
    let tr = Mat4::from_translation(Vec3::new(10.0, 0.0, 0.0));
    // tr * rot: rotate first, then translate.
    let p = (tr * rot).transform_point(Vec3::new(1.0, 0.0, 0.0));
    assert!(vapprox(p, Vec3::new(10.0, 0.0, 1.0), 1e-6));
}
