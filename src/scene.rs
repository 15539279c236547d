//! Static scene layout
//!
//! Placement of the props around the paddle: table, net, ball, table lines,
//! camera and lights. Everything is derived from the table bounds so a
//! renderer can build the scene without its own magic numbers.

use glam::{Mat4, Vec3};

use crate::config::BoundsConfig;
use crate::consts::{PADDLE_MESH_SCALE, PADDLE_REST_CLEARANCE};

/// Net height above the table top
pub const NET_HEIGHT: f32 = 0.285;
/// Net thickness along the table length
pub const NET_DEPTH: f32 = 0.0285;
pub const BALL_RADIUS: f32 = 0.1425;
/// Lines float just above the table top to avoid z-fighting
pub const LINE_LIFT: f32 = 0.00142;
/// Paddle spawn distance in front of the player's table edge
pub const PADDLE_EDGE_INSET: f32 = 0.285;

pub const BACKGROUND_COLOR: u32 = 0x87CEEB;

/// Axis-aligned box prop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxProp {
    pub center: Vec3,
    /// Full extents (width, height, length)
    pub size: Vec3,
}

/// Line segment on the table top
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineProp {
    pub start: Vec3,
    pub end: Vec3,
}

/// Right-handed perspective camera
#[derive(Debug, Clone, PartialEq)]
pub struct CameraRig {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl CameraRig {
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lighting {
    pub ambient_intensity: f32,
    pub directional_intensity: f32,
    pub directional_position: Vec3,
}

/// Complete static layout
#[derive(Debug, Clone, PartialEq)]
pub struct SceneLayout {
    pub table: BoxProp,
    pub net: BoxProp,
    pub ball_center: Vec3,
    pub ball_radius: f32,
    /// Centre line followed by the two side lines
    pub lines: [LineProp; 3],
    pub camera: CameraRig,
    pub lighting: Lighting,
    /// Where the paddle mesh sits before the first input
    pub paddle_spawn: Vec3,
    pub paddle_scale: f32,
    pub background: u32,
}

impl SceneLayout {
    pub fn new(bounds: &BoundsConfig) -> Self {
        let w = bounds.table_width;
        let l = bounds.table_length;
        let h = bounds.table_height;
        let line_y = h + LINE_LIFT;

        let line = |x: f32| LineProp {
            start: Vec3::new(x, line_y, -l / 2.0),
            end: Vec3::new(x, line_y, l / 2.0),
        };

        Self {
            table: BoxProp {
                center: Vec3::ZERO,
                size: Vec3::new(w, h, l),
            },
            net: BoxProp {
                center: Vec3::new(0.0, h + NET_HEIGHT / 2.0, 0.0),
                size: Vec3::new(w, NET_HEIGHT, NET_DEPTH),
            },
            ball_center: Vec3::new(0.0, h + BALL_RADIUS, 0.0),
            ball_radius: BALL_RADIUS,
            lines: [line(0.0), line(-w / 2.0), line(w / 2.0)],
            camera: CameraRig {
                eye: Vec3::new(0.0, w, -l),
                target: Vec3::ZERO,
                up: Vec3::Y,
                aspect: bounds.game_width as f32 / bounds.game_height.max(1) as f32,
                fovy_radians: 45f32.to_radians(),
                znear: 0.1,
                zfar: 1000.0,
            },
            lighting: Lighting {
                ambient_intensity: 0.6,
                directional_intensity: 0.8,
                directional_position: Vec3::new(0.0, 2.5 * w, 1.25 * w),
            },
            paddle_spawn: Vec3::new(0.0, h / 2.0 + PADDLE_REST_CLEARANCE, -l / 2.0 + PADDLE_EDGE_INSET),
            paddle_scale: PADDLE_MESH_SCALE,
            background: BACKGROUND_COLOR,
        }
    }

    /// Combined view-projection for the scene camera
    pub fn view_projection(&self) -> Mat4 {
        self.camera.projection_matrix() * self.camera.view_matrix()
    }
}
