//! Perspective camera with a lazily computed projection matrix.

use std::cell::Cell;

use glam::Mat4;
use playground_core::{Error, Result};

use crate::transform::Transform;

/// Projection parameters of a [`Camera`].
///
/// The field of view is vertical and expressed in degrees; it is converted to
/// radians only when the projection matrix is built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraSettings {
    pub fov_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            fov_degrees: 45.0,
            aspect: 4.0 / 3.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl CameraSettings {
    pub fn with_fov(mut self, fov_degrees: f32) -> Self {
        self.fov_degrees = fov_degrees;
        self
    }

    pub fn with_aspect(mut self, aspect: f32) -> Self {
        self.aspect = aspect;
        self
    }

    pub fn with_clipping_planes(mut self, near: f32, far: f32) -> Self {
        self.near = near;
        self.far = far;
        self
    }

    /// Check that the settings describe a usable perspective frustum.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if any value is not finite, the field of
    /// view is outside `(0, 180)` degrees, the aspect ratio or near plane is
    /// not positive, or the far plane does not lie beyond the near plane.
    pub fn validate(&self) -> Result<()> {
        let CameraSettings {
            fov_degrees,
            aspect,
            near,
            far,
        } = *self;
        let values = [fov_degrees, aspect, near, far];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(Error::Config(format!("camera settings must be finite: {self:?}")));
        }
        if fov_degrees <= 0.0 || fov_degrees >= 180.0 {
            return Err(Error::Config(format!(
                "field of view must be within (0, 180) degrees, got {fov_degrees}"
            )));
        }
        if aspect <= 0.0 {
            return Err(Error::Config(format!("aspect ratio must be positive, got {aspect}")));
        }
        if near <= 0.0 {
            return Err(Error::Config(format!("near plane must be positive, got {near}")));
        }
        if far <= near {
            return Err(Error::Config(format!(
                "far plane ({far}) must lie beyond near plane ({near})"
            )));
        }
        Ok(())
    }
}

/// A camera for rendering the scene.
///
/// The camera owns its [`Transform`]. The projection matrix is cached: every
/// setter marks it dirty and the next call to [`projection`](Self::projection)
/// rebuilds it once.
///
/// # Example
///
/// ```
/// use playground_scene::Camera;
///
/// let mut camera = Camera::new();
/// camera.set_aspect(16.0 / 9.0);
///
/// let first = camera.projection();
/// let second = camera.projection();
/// assert_eq!(first, second);
/// assert_eq!(camera.projection_builds(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Camera {
    transform: Transform,
    settings: CameraSettings,
    projection: Cell<Mat4>,
    dirty: Cell<bool>,
    projection_builds: Cell<u64>,
}

impl Default for Camera {
    fn default() -> Self {
        Self::with_settings_unchecked(CameraSettings::default())
    }
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a camera from validated settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `settings` fail [`CameraSettings::validate`].
    pub fn from_settings(settings: CameraSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self::with_settings_unchecked(settings))
    }

    fn with_settings_unchecked(settings: CameraSettings) -> Self {
        Self {
            transform: Transform::default(),
            settings,
            projection: Cell::new(Mat4::IDENTITY),
            dirty: Cell::new(true),
            projection_builds: Cell::new(0),
        }
    }

    /// Set the vertical field of view in degrees.
    pub fn set_fov(&mut self, fov_degrees: f32) {
        self.settings.fov_degrees = fov_degrees;
        self.flag_dirty();
    }

    /// Vertical field of view in degrees.
    pub fn fov(&self) -> f32 {
        self.settings.fov_degrees
    }

    /// Update the aspect ratio (width / height).
    pub fn set_aspect(&mut self, aspect: f32) {
        self.settings.aspect = aspect;
        self.flag_dirty();
    }

    pub fn aspect(&self) -> f32 {
        self.settings.aspect
    }

    /// Set the near and far clipping plane distances.
    pub fn set_clipping_planes(&mut self, near: f32, far: f32) {
        self.settings.near = near;
        self.settings.far = far;
        self.flag_dirty();
    }

    pub fn near_plane(&self) -> f32 {
        self.settings.near
    }

    pub fn far_plane(&self) -> f32 {
        self.settings.far
    }

    /// Current projection parameters.
    pub fn settings(&self) -> CameraSettings {
        self.settings
    }

    /// Whether the next [`projection`](Self::projection) call will rebuild
    /// the matrix.
    pub fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    /// How many times the projection matrix has been rebuilt.
    pub fn projection_builds(&self) -> u64 {
        self.projection_builds.get()
    }

    /// Get the projection matrix (OpenGL clip space, right-handed).
    ///
    /// The matrix is rebuilt only if a setter has been called since the last
    /// call; otherwise the cached matrix is returned unchanged.
    pub fn projection(&self) -> Mat4 {
        if self.dirty.get() {
            let CameraSettings {
                fov_degrees,
                aspect,
                near,
                far,
            } = self.settings;
            self.projection.set(Mat4::perspective_rh_gl(
                fov_degrees.to_radians(),
                aspect,
                near,
                far,
            ));
            self.dirty.set(false);
            self.projection_builds.set(self.projection_builds.get() + 1);
            tracing::trace!(
                "Rebuilt projection: fov={}deg aspect={} near={} far={}",
                fov_degrees,
                aspect,
                near,
                far
            );
        }
        self.projection.get()
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Mutable access to the camera's transform, for controllers.
    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    /// Get the view matrix (world to camera-local space).
    pub fn view_matrix(&self) -> Mat4 {
        self.transform.world_to_local_matrix()
    }

    /// Get the view-projection matrix.
    pub fn view_projection(&self) -> Mat4 {
        self.projection() * self.view_matrix()
    }

    /// Combined matrix for drawing an object placed by `model`.
    pub fn model_view_projection(&self, model: &Transform) -> Mat4 {
        self.view_projection() * model.local_to_world_matrix()
    }

    fn flag_dirty(&mut self) {
        self.dirty.set(true);
    }
}
