//! Camera controllers driven by input events.

use glam::Vec3;
use playground_core::Result;
use playground_platform::{Action, InputListener, ModifiersState, MouseButton};

use crate::space::Space;
use crate::transform::{Transform, WORLD_UP, quat_from_euler_degrees};

/// Orbits a transform around a fixed center point.
///
/// Dragging with the left mouse button swings the transform around the
/// center, scrolling moves it closer or further away. The transform always
/// faces the center.
#[derive(Clone, Debug)]
pub struct SphericalController {
    center: Vec3,
    distance: f32,
    /// Pitch, yaw and roll in degrees.
    angles: Vec3,
    speed: f32,
    cursor: (f64, f64),
    dragging: bool,
}

impl SphericalController {
    /// Degrees of rotation per pixel dragged, per unit of distance.
    pub const DEFAULT_SPEED: f32 = 0.1;
    /// Closest the transform may get to the center.
    pub const MIN_DISTANCE: f32 = 0.1;
    /// Pitch limit in degrees, short of the poles where `look_at` degenerates.
    pub const MAX_PITCH: f32 = 89.0;

    /// Aim `transform` at `center` and start orbiting from where it stands.
    ///
    /// # Errors
    ///
    /// Fails with [`playground_core::Error::DegenerateInput`] if the
    /// transform sits on `center` or directly above or below it.
    pub fn new(transform: &mut Transform, center: Vec3) -> Result<Self> {
        transform.look_at(center, WORLD_UP)?;
        let distance = center.distance(transform.local_position());
        let angles = transform.euler_degrees();
        tracing::debug!(
            "Spherical controller around {} at distance {}",
            center,
            distance
        );
        Ok(Self {
            center,
            distance,
            angles,
            speed: Self::DEFAULT_SPEED,
            cursor: (0.0, 0.0),
            dragging: false,
        })
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Current pitch, yaw and roll in degrees.
    pub fn angles(&self) -> Vec3 {
        self.angles
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Swing the transform around the center by a cursor movement in pixels.
    fn orbit(&mut self, dx: f32, dy: f32, transform: &mut Transform) -> Result<()> {
        let mut angles = self.angles + Vec3::new(dy, dx, 0.0) * self.speed * self.distance;
        angles.x = angles.x.clamp(-Self::MAX_PITCH, Self::MAX_PITCH);

        // Work on a copy so a failure leaves the caller's transform alone.
        let mut next = *transform;
        let to_center = Vec3::new(0.0, 0.0, self.distance);
        next.translate(to_center, Space::Local);
        next.set_local_rotation(quat_from_euler_degrees(angles));
        next.translate(-to_center, Space::Local);
        next.look_at(self.center, WORLD_UP)?;

        *transform = next;
        self.angles = angles;
        Ok(())
    }

    /// Move along the view axis; positive `amount` moves away from the center.
    fn zoom(&mut self, amount: f32, transform: &mut Transform) {
        let distance = (self.distance + amount).max(Self::MIN_DISTANCE);
        let step = distance - self.distance;
        transform.translate(Vec3::new(0.0, 0.0, -step), Space::Local);
        self.distance = distance;
    }
}

impl InputListener<Transform> for SphericalController {
    fn mouse_button_event(
        &mut self,
        button: MouseButton,
        action: Action,
        _modifiers: ModifiersState,
        _transform: &mut Transform,
    ) {
        if button != MouseButton::Left {
            return;
        }
        self.dragging = action.is_down();
    }

    fn mouse_move_event(&mut self, x: f64, y: f64, transform: &mut Transform) {
        let (last_x, last_y) = self.cursor;
        self.cursor = (x, y);
        if !self.dragging {
            return;
        }

        if let Err(e) = self.orbit((x - last_x) as f32, (y - last_y) as f32, transform) {
            tracing::warn!("Orbit skipped: {}", e);
        }
    }

    fn scroll_event(&mut self, _x: f64, y: f64, transform: &mut Transform) {
        self.zoom(y as f32, transform);
    }
}
