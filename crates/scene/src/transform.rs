//! Transform component for scene objects.
//!
//! This module provides the [`Transform`] struct for representing position,
//! rotation, and scale of scene objects, together with the local and world
//! space operations controllers use to move them around.
//!
//! Axis convention: `+X` is right, `+Y` is up and `+Z` is forward.
//!
//! # Example
//!
//! ```
//! use playground_scene::{Space, Transform};
//! use glam::Vec3;
//!
//! let mut t = Transform::new();
//!
//! // Turn 90 degrees to the right, then step forward along the new heading
//! t.rotate(Vec3::new(0.0, 90.0, 0.0), Space::Local);
//! t.translate(Vec3::new(0.0, 0.0, 2.0), Space::Local);
//!
//! assert!((t.local_position() - Vec3::new(2.0, 0.0, 0.0)).length() < 0.001);
//! ```

use glam::{EulerRot, Mat3, Mat4, Quat, Vec3};
use playground_core::{Error, Result};

use crate::space::Space;

/// Up direction of the world frame, the usual `up` argument to
/// [`Transform::look_at`].
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Lengths below this are treated as zero by [`Transform::look_at`].
const DEGENERATE_EPSILON: f32 = 1e-6;

/// Determinants below this make a matrix count as singular.
const SINGULAR_EPSILON: f32 = 1e-6;

/// Build a rotation from Euler angles in degrees.
///
/// Rotations compose as `Z * Y * X`, so `x` (pitch) is applied first, then
/// `y` (yaw), then `z` (roll).
pub fn quat_from_euler_degrees(degrees: Vec3) -> Quat {
    Quat::from_euler(
        EulerRot::ZYX,
        degrees.z.to_radians(),
        degrees.y.to_radians(),
        degrees.x.to_radians(),
    )
}

/// A transform representing position, rotation, and scale.
///
/// Points are scaled, then rotated, then translated when going from local to
/// world space. The rotation is expected to stay unit length; setters store
/// what they are given, while [`rotate`](Self::rotate) and
/// [`look_at`](Self::look_at) always leave a normalized quaternion behind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    position: Vec3,
    rotation: Quat,
    scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Create a new transform at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transform with the given position.
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Create a transform with the given rotation.
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Create a transform with the given scale.
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn local_position(&self) -> Vec3 {
        self.position
    }

    pub fn local_rotation(&self) -> Quat {
        self.rotation
    }

    pub fn local_scale(&self) -> Vec3 {
        self.scale
    }

    pub fn set_local_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Overwrite the rotation.
    ///
    /// The quaternion is stored as is; callers are responsible for passing a
    /// unit quaternion.
    pub fn set_local_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
    }

    /// Overwrite the scale. Zero components make the transform singular.
    pub fn set_local_scale(&mut self, scale: Vec3) {
        self.scale = scale;
    }

    /// Get the forward direction vector.
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    /// Get the up direction vector.
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Get the right direction vector.
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Euler angles of the current rotation in degrees, in the order used by
    /// [`quat_from_euler_degrees`].
    pub fn euler_degrees(&self) -> Vec3 {
        let (z, y, x) = self.rotation.to_euler(EulerRot::ZYX);
        Vec3::new(x.to_degrees(), y.to_degrees(), z.to_degrees())
    }

    /// Get the local-to-world matrix, `T * R * S`.
    pub fn local_to_world_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    /// Get the world-to-local matrix.
    ///
    /// This is the general inverse of
    /// [`local_to_world_matrix`](Self::local_to_world_matrix). It is not
    /// checked: a zero scale component yields non-finite values. Use
    /// [`try_world_to_local_matrix`](Self::try_world_to_local_matrix) when the
    /// scale is not known to be well formed.
    pub fn world_to_local_matrix(&self) -> Mat4 {
        self.local_to_world_matrix().inverse()
    }

    /// Get the world-to-local matrix, failing if the transform is singular.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateInput`] when the determinant of the
    /// local-to-world matrix is (nearly) zero.
    pub fn try_world_to_local_matrix(&self) -> Result<Mat4> {
        let model = self.local_to_world_matrix();
        let det = model.determinant();
        if !det.is_finite() || det.abs() < SINGULAR_EPSILON {
            return Err(Error::DegenerateInput(format!(
                "transform with scale {} is not invertible",
                self.scale
            )));
        }
        Ok(model.inverse())
    }

    /// Get the normal matrix (inverse transpose of the local-to-world matrix).
    ///
    /// The normal matrix is used for transforming normal vectors correctly
    /// when the model matrix contains non-uniform scaling.
    ///
    /// # Non-invertible transforms
    ///
    /// If the transform is not invertible (e.g., contains zero scale),
    /// the identity matrix is returned as a fallback to avoid NaN/Inf values.
    pub fn normal_matrix(&self) -> Mat4 {
        match self.try_world_to_local_matrix() {
            Ok(inverse) => inverse.transpose(),
            Err(_) => Mat4::IDENTITY,
        }
    }

    /// Move the transform by `delta`.
    ///
    /// In [`Space::Local`] the components of `delta` are distances along
    /// [`right`](Self::right), [`up`](Self::up) and
    /// [`forward`](Self::forward). In [`Space::World`] `delta` is added to the
    /// position directly.
    pub fn translate(&mut self, delta: Vec3, space: Space) {
        match space {
            Space::Local => {
                self.position +=
                    self.right() * delta.x + self.up() * delta.y + self.forward() * delta.z;
            }
            Space::World => self.position += delta,
        }
    }

    /// Rotate the transform by Euler angles given in degrees.
    ///
    /// In [`Space::Local`] the rotation is applied about the transform's own
    /// axes (`rotation * q`); in [`Space::World`] it is applied about the
    /// fixed world axes (`q * rotation`). The result is renormalized so
    /// repeated calls do not drift away from unit length.
    pub fn rotate(&mut self, euler_degrees: Vec3, space: Space) {
        let delta = quat_from_euler_degrees(euler_degrees);
        let rotation = match space {
            Space::Local => self.rotation * delta,
            Space::World => delta * self.rotation,
        };
        self.rotation = rotation.normalize();
    }

    /// Orient the transform so that its forward axis points at `target`.
    ///
    /// `up` is a hint for the up direction; the resulting up axis is the
    /// closest direction to it perpendicular to the new forward axis.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateInput`], leaving the transform unchanged,
    /// if `target` coincides with the position or `up` is zero or parallel to
    /// the view direction.
    pub fn look_at(&mut self, target: Vec3, up: Vec3) -> Result<()> {
        let to_target = target - self.position;
        if to_target.length() < DEGENERATE_EPSILON {
            return Err(Error::DegenerateInput(format!(
                "look_at target {target} coincides with position {}",
                self.position
            )));
        }
        let forward = to_target.normalize();

        let right = up.cross(forward);
        if right.length() < DEGENERATE_EPSILON * up.length().max(1.0) {
            return Err(Error::DegenerateInput(format!(
                "look_at up vector {up} is parallel to view direction {forward}"
            )));
        }
        let right = right.normalize();
        let up = forward.cross(right);

        let basis = Mat3::from_cols(right, up, forward);
        self.rotation = Quat::from_mat3(&basis).normalize();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn approx_eq_vec3(a: Vec3, b: Vec3) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
    }

    #[test]
    fn test_transform_default() {
        let t = Transform::default();
        assert_eq!(t.local_position(), Vec3::ZERO);
        assert_eq!(t.local_rotation(), Quat::IDENTITY);
        assert_eq!(t.local_scale(), Vec3::ONE);
        assert_eq!(t.local_to_world_matrix(), Mat4::IDENTITY);
        assert_eq!(t.world_to_local_matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn test_transform_builder() {
        let t = Transform::new()
            .with_position(Vec3::new(1.0, 2.0, 3.0))
            .with_scale(Vec3::splat(2.0));

        assert_eq!(t.local_position(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(t.local_scale(), Vec3::splat(2.0));
    }

    #[test]
    fn test_setters_overwrite() {
        let mut t = Transform::new();
        t.set_local_position(Vec3::new(-1.0, 0.5, 4.0));
        t.set_local_scale(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(t.local_position(), Vec3::new(-1.0, 0.5, 4.0));
        assert_eq!(t.local_scale(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_set_local_rotation_is_stored_verbatim() {
        let mut t = Transform::new();
        let raw = Quat::from_xyzw(0.0, 2.0, 0.0, 2.0);
        t.set_local_rotation(raw);
        assert_eq!(t.local_rotation(), raw);
    }

    #[test]
    fn test_direction_vectors() {
        let t = Transform::default();

        // Default orientation: +Z forward, +X right, +Y up
        assert_eq!(t.forward(), Vec3::Z);
        assert_eq!(t.right(), Vec3::X);
        assert_eq!(t.up(), Vec3::Y);
    }

    #[test]
    fn test_matrix_applies_scale_rotation_translation_in_order() {
        let t = Transform::new()
            .with_position(Vec3::new(10.0, 0.0, 0.0))
            .with_rotation(Quat::from_rotation_y(std::f32::consts::FRAC_PI_2))
            .with_scale(Vec3::splat(2.0));

        // (1,0,0) -> scaled (2,0,0) -> rotated (0,0,-2) -> translated (10,0,-2)
        let p = t.local_to_world_matrix().transform_point3(Vec3::X);
        assert!(approx_eq_vec3(p, Vec3::new(10.0, 0.0, -2.0)));
    }

    #[test]
    fn test_round_trip_is_identity() {
        // (position, euler degrees, scale)
        let cases: [([f32; 3], [f32; 3], [f32; 3]); 5] = [
            ([0.0; 3], [0.0; 3], [1.0; 3]),
            ([3.0, -7.0, 12.5], [30.0, -60.0, 15.0], [0.5, 2.0, 3.0]),
            ([1.0, 2.0, -3.0], [-45.0, 120.0, 10.0], [1e-2, 1e-2, 1e-2]),
            ([2.0, -1.0, 0.5], [80.0, -170.0, 5.0], [1e-2, 5.0, 1.0]),
            ([-20.0, 4.0, 9.0], [0.0, 90.0, 0.0], [4.0, 4.0, 0.25]),
        ];

        for (position, angles, scale) in cases {
            let t = Transform::new()
                .with_position(Vec3::from(position))
                .with_rotation(quat_from_euler_degrees(Vec3::from(angles)))
                .with_scale(Vec3::from(scale));

            let product = t.local_to_world_matrix() * t.world_to_local_matrix();
            assert!(
                product.abs_diff_eq(Mat4::IDENTITY, EPSILON),
                "scale {:?} gave {:?}",
                scale,
                product
            );
        }
    }

    #[test]
    fn test_try_world_to_local_matrix() {
        let t = Transform::new().with_scale(Vec3::new(1.0, 2.0, 4.0));
        let inverse = t.try_world_to_local_matrix().unwrap();
        assert!(inverse.abs_diff_eq(t.world_to_local_matrix(), 1e-6));

        let singular = Transform::new().with_scale(Vec3::new(1.0, 0.0, 1.0));
        assert!(matches!(
            singular.try_world_to_local_matrix(),
            Err(Error::DegenerateInput(_))
        ));
    }

    #[test]
    fn test_normal_matrix_identity() {
        let t = Transform::default();
        assert_eq!(t.normal_matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn test_normal_matrix_with_scale() {
        let t = Transform::new().with_scale(Vec3::new(1.0, 2.0, 1.0));
        let expected = t.local_to_world_matrix().inverse().transpose();
        assert!(t.normal_matrix().abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn test_normal_matrix_non_invertible() {
        // Zero scale makes the transform non-invertible
        let t = Transform::new().with_scale(Vec3::ZERO);
        let normal = t.normal_matrix();

        // Should return identity matrix as fallback, not NaN
        assert_eq!(normal, Mat4::IDENTITY);
        assert!(normal.is_finite());
    }

    #[test]
    fn test_translate_local_at_identity() {
        let mut t = Transform::new();
        t.translate(Vec3::new(5.0, 3.0, 1.0), Space::Local);

        assert_eq!(t.local_position(), Vec3::new(5.0, 3.0, 1.0));
        assert_eq!(
            t.local_to_world_matrix().w_axis,
            glam::Vec4::new(5.0, 3.0, 1.0, 1.0)
        );
    }

    #[test]
    fn test_translate_world_ignores_rotation() {
        let mut t = Transform::new().with_rotation(Quat::from_rotation_y(1.0));
        t.translate(Vec3::new(1.0, 2.0, 3.0), Space::World);
        assert_eq!(t.local_position(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_rotate_local_45_about_y() {
        let mut t = Transform::new();
        t.rotate(Vec3::new(0.0, 45.0, 0.0), Space::Local);

        let q = t.local_rotation();
        assert!(approx_eq(q.w, 0.924), "w = {}", q.w);
        assert!(approx_eq(q.x, 0.0));
        assert!(approx_eq(q.y, 0.383), "y = {}", q.y);
        assert!(approx_eq(q.z, 0.0));

        assert!(
            approx_eq_vec3(t.right(), Vec3::new(0.707, 0.0, -0.707)),
            "right = {:?}",
            t.right()
        );
        assert!(
            approx_eq_vec3(t.forward(), Vec3::new(0.707, 0.0, 0.707)),
            "forward = {:?}",
            t.forward()
        );
    }

    #[test]
    fn test_translate_then_rotate_keeps_position() {
        let mut t = Transform::new();
        t.translate(Vec3::new(5.0, 3.0, 1.0), Space::Local);
        t.rotate(Vec3::new(0.0, 45.0, 0.0), Space::Local);
        let expected = Vec3::new(5.0, 3.0, 1.0);
        assert!(approx_eq_vec3(t.local_position(), expected));
    }

    #[test]
    fn test_rotate_then_translate_uses_rotated_axes() {
        let mut t = Transform::new();
        t.rotate(Vec3::new(0.0, 45.0, 0.0), Space::Local);
        t.translate(Vec3::new(5.0, 3.0, 1.0), Space::Local);
        let expected = Vec3::new(4.243, 3.0, -2.828);
        assert!(
            approx_eq_vec3(t.local_position(), expected),
            "got {:?}",
            t.local_position()
        );
    }

    #[test]
    fn test_rotate_world_premultiplies() {
        // Pitch 90 degrees so forward points down, then yaw about world Y:
        // forward stays pointing down.
        let mut world = Transform::new();
        world.rotate(Vec3::new(90.0, 0.0, 0.0), Space::Local);
        world.rotate(Vec3::new(0.0, 90.0, 0.0), Space::World);
        assert!(
            approx_eq_vec3(world.forward(), Vec3::NEG_Y),
            "got {:?}",
            world.forward()
        );

        // The same yaw in local space turns about the pitched Y axis instead.
        let mut local = Transform::new();
        local.rotate(Vec3::new(90.0, 0.0, 0.0), Space::Local);
        local.rotate(Vec3::new(0.0, 90.0, 0.0), Space::Local);
        assert!(
            approx_eq_vec3(local.forward(), Vec3::X),
            "got {:?}",
            local.forward()
        );
    }

    #[test]
    fn test_rotate_spaces_agree_at_identity() {
        let mut local = Transform::new();
        let mut world = Transform::new();
        local.rotate(Vec3::new(10.0, 20.0, 30.0), Space::Local);
        world.rotate(Vec3::new(10.0, 20.0, 30.0), Space::World);
        let (a, b) = (local.local_rotation(), world.local_rotation());
        assert!(a.abs_diff_eq(b, 1e-6));
    }

    #[test]
    fn test_rotate_stays_normalized() {
        let mut t = Transform::new();
        for _ in 0..10_000 {
            t.rotate(Vec3::new(0.37, 1.1, -0.53), Space::Local);
        }
        assert!(approx_eq(t.local_rotation().length(), 1.0));
    }

    #[test]
    fn test_euler_degrees_round_trip() {
        let angles = Vec3::new(20.0, -35.0, 10.0);
        let t = Transform::new().with_rotation(quat_from_euler_degrees(angles));
        assert!(
            approx_eq_vec3(t.euler_degrees(), angles),
            "got {:?}",
            t.euler_degrees()
        );
    }

    #[test]
    fn test_look_at_points_forward_at_target() {
        let mut t = Transform::new().with_position(Vec3::new(1.0, 2.0, 3.0));
        let target = Vec3::new(-4.0, 0.5, 8.0);
        t.look_at(target, WORLD_UP).unwrap();

        let expected = (target - t.local_position()).normalize();
        assert!(
            approx_eq_vec3(t.forward(), expected),
            "got {:?}",
            t.forward()
        );
        assert!(approx_eq(t.local_rotation().length(), 1.0));

        // No roll: right stays horizontal
        assert!(approx_eq(t.right().y, 0.0));
        assert!(t.up().y > 0.0);
    }

    #[test]
    fn test_look_at_along_forward_is_identity() {
        let mut t = Transform::new();
        t.look_at(Vec3::new(0.0, 0.0, 5.0), WORLD_UP).unwrap();
        assert!(t.local_rotation().abs_diff_eq(Quat::IDENTITY, 1e-6));
    }

    #[test]
    fn test_look_at_target_at_position_fails() {
        let mut t = Transform::new().with_position(Vec3::new(1.0, 1.0, 1.0));
        let before = t;
        let result = t.look_at(Vec3::new(1.0, 1.0, 1.0), WORLD_UP);
        assert!(matches!(result, Err(Error::DegenerateInput(_))));
        assert_eq!(t, before);
    }

    #[test]
    fn test_look_at_parallel_up_fails() {
        let mut t = Transform::new();
        let before = t;
        let result = t.look_at(Vec3::new(0.0, 10.0, 0.0), WORLD_UP);
        assert!(matches!(result, Err(Error::DegenerateInput(_))));
        assert_eq!(t, before);

        let result = t.look_at(Vec3::new(0.0, 0.0, 1.0), Vec3::ZERO);
        assert!(matches!(result, Err(Error::DegenerateInput(_))));
    }
}
