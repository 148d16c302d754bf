use glam::{Mat4, Vec3};

/// Angular speed per pixel of drag (radians).
pub const ROTATION_SPEED: f32 = 0.005;
/// World units per pixel of pan drag, scaled by distance.
pub const PAN_SPEED: f32 = 0.001;
/// World units stepped along the view ray per wheel notch.
pub const ZOOM_STEP: f32 = 0.1;
/// Keep-away from the poles so the view never flips.
pub const POLAR_LIMIT: f32 = 0.1;

const NEAR_PLANE: f32 = 0.1;
const FAR_PLANE: f32 = 1000.0;

/// A saved camera pose used for the home/reset position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub eye: Vec3,
    pub target: Vec3,
}

/// Orbit camera: spherical coordinates around a target point.
///
/// `polar` is measured from +Y (0 = straight down from above), `azimuth`
/// around Y. Zoom moves along the view ray by changing `radius`.
pub struct OrbitCamera {
    pub radius: f32,
    pub polar: f32,
    pub azimuth: f32,
    pub target: Vec3,
    /// Vertical field of view (radians)
    pub fov: f32,
    pub min_radius: f32,
    pub max_radius: f32,
    home: CameraPose,
}

impl OrbitCamera {
    pub fn new(eye: Vec3, target: Vec3, min_radius: f32, max_radius: f32) -> Self {
        let mut camera = Self {
            radius: 1.0,
            polar: std::f32::consts::FRAC_PI_2,
            azimuth: 0.0,
            target,
            fov: 75.0_f32.to_radians(),
            min_radius,
            max_radius,
            home: CameraPose { eye, target },
        };
        camera.look_from(eye, target);
        camera
    }

    /// The camera preset each product profile starts with.
    pub fn for_profile(profile: shared::Profile) -> Self {
        match profile {
            shared::Profile::Vessel => {
                Self::new(Vec3::new(15.0, 10.0, 15.0), Vec3::ZERO, 2.0, 100.0)
            }
            shared::Profile::Vehicle => {
                Self::new(Vec3::new(10.0, 8.0, 10.0), Vec3::new(0.0, 1.0, 0.0), 5.0, 50.0)
            }
        }
    }

    /// Place the camera at `eye` looking at `target`, recomputing the
    /// spherical coordinates.
    pub fn look_from(&mut self, eye: Vec3, target: Vec3) {
        self.target = target;
        let offset = eye - target;
        self.radius = offset.length().clamp(self.min_radius, self.max_radius);
        if self.radius > 0.0 {
            self.polar = (offset.y / offset.length())
                .clamp(-1.0, 1.0)
                .acos()
                .clamp(POLAR_LIMIT, std::f32::consts::PI - POLAR_LIMIT);
        }
        self.azimuth = offset.x.atan2(offset.z);
    }

    /// Rotate around the target by a pixel delta.
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.azimuth -= dx * ROTATION_SPEED;
        self.polar = (self.polar - dy * ROTATION_SPEED)
            .clamp(POLAR_LIMIT, std::f32::consts::PI - POLAR_LIMIT);
    }

    /// Slide the target in the view plane by a pixel delta.
    pub fn pan(&mut self, dx: f32, dy: f32) {
        let factor = self.radius * PAN_SPEED;
        let right = self.right_vector();
        let up = self.up_vector();
        self.target += right * (-dx * factor) + up * (dy * factor);
    }

    /// Dolly toward/away from the target by a fixed step per notch.
    /// `notches > 0` zooms in.
    pub fn zoom(&mut self, notches: f32) {
        self.radius =
            (self.radius - notches * ZOOM_STEP).clamp(self.min_radius, self.max_radius);
    }

    /// Return to the pose the camera was constructed with.
    pub fn reset(&mut self) {
        let home = self.home;
        self.look_from(home.eye, home.target);
    }

    /// Camera position in world space.
    pub fn eye_position(&self) -> Vec3 {
        let sp = self.polar.sin();
        self.target
            + self.radius
                * Vec3::new(sp * self.azimuth.sin(), self.polar.cos(), sp * self.azimuth.cos())
    }

    /// View matrix (world -> camera)
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye_position(), self.target, Vec3::Y)
    }

    /// Projection matrix (camera -> clip)
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov, aspect, NEAR_PLANE, FAR_PLANE)
    }

    /// Combined view-projection matrix
    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }

    fn right_vector(&self) -> Vec3 {
        let fwd = (self.target - self.eye_position()).normalize_or_zero();
        fwd.cross(Vec3::Y).normalize_or_zero()
    }

    fn up_vector(&self) -> Vec3 {
        let fwd = (self.target - self.eye_position()).normalize_or_zero();
        let right = self.right_vector();
        right.cross(fwd).normalize_or_zero()
    }
}

/// Tracks an active pointer drag over the viewport and converts pointer
/// deltas into camera motion. Orbits by default, pans while the pan
/// modifier (shift) is held.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragTracker {
    #[default]
    Idle,
    Dragging {
        last_x: f32,
        last_y: f32,
    },
}

impl DragTracker {
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        *self = DragTracker::Dragging { last_x: x, last_y: y };
    }

    /// Feed a pointer position. Moves the camera only while a drag is
    /// active; returns whether the camera changed.
    pub fn pointer_move(
        &mut self,
        x: f32,
        y: f32,
        pan_modifier: bool,
        camera: &mut OrbitCamera,
    ) -> bool {
        let DragTracker::Dragging { last_x, last_y } = *self else {
            return false;
        };
        let dx = x - last_x;
        let dy = y - last_y;
        *self = DragTracker::Dragging { last_x: x, last_y: y };
        if dx == 0.0 && dy == 0.0 {
            return false;
        }
        if pan_modifier {
            camera.pan(dx, dy);
        } else {
            camera.orbit(dx, dy);
        }
        true
    }

    pub fn pointer_up(&mut self) {
        *self = DragTracker::Idle;
    }

    /// Abandon the drag without applying further motion (pointer left the
    /// viewport, window lost focus).
    pub fn cancel(&mut self) {
        *self = DragTracker::Idle;
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragTracker::Dragging { .. })
    }
}
