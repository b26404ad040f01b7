use std::cell::RefCell;
use std::rc::Rc;

use framing_core::{
    shared_camera, AnimateOptions, Camera, CameraController, CameraState, CoordinateConverter,
    Easing, FollowConfig, LayoutInfo, LayoutState, SharedCamera, DEFAULT_CAMERA_Z, DEFAULT_FOV_DEGREES,
    DEFAULT_PRESET,
};
use glam::{Vec2, Vec3};
use instant::Instant;
use winit::{
    dpi::{LogicalSize, PhysicalSize},
    event::{ElementState, Event, KeyEvent, MouseButton, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::{Key, NamedKey},
    window::{Window, WindowBuilder},
};

const TITLE: &str = "Safe-area framing (native)";
const ORBIT_RADIUS: f32 = 4.0;
const ORBIT_SPEED: f32 = 0.6; // radians per second
const MARKER_PADDING: f32 = 0.25;

const PRESET_KEYS: [(&str, &str); 5] = [
    ("1", DEFAULT_PRESET),
    ("2", "overview"),
    ("3", "closeup"),
    ("4", "side"),
    ("5", "top"),
];

/// Plays the render/resize driver: forwards viewport changes to the layout
/// and ticks the camera controller once per frame.
struct Driver {
    camera: SharedCamera,
    layout: LayoutState,
    converter: CoordinateConverter,
    controller: CameraController,
    target: Rc<RefCell<Vec3>>,
    marker: Vec3,
    cursor: Vec2,
    size: PhysicalSize<u32>,
    last_frame: Instant,
    elapsed: f32,
    shown_state: Option<CameraState>,
}

impl Driver {
    fn new(size: PhysicalSize<u32>) -> Self {
        let aspect = size.width.max(1) as f32 / size.height.max(1) as f32;
        let camera = shared_camera(Camera::new(
            Vec3::new(0.0, 0.0, DEFAULT_CAMERA_Z),
            DEFAULT_FOV_DEGREES,
            aspect,
        ));
        let mut layout = LayoutState::new(camera.clone());
        layout.add_listener(|info| {
            for strip in &info.decoration_areas {
                log::debug!(
                    "[decor] {:?} world=[{:.2}, {:.2}]",
                    strip.side,
                    strip.world_left,
                    strip.world_right
                );
            }
        });
        let converter = CoordinateConverter::new(camera.clone());
        let mut controller = CameraController::new(camera.clone());
        if let Err(e) = controller.apply_preset(DEFAULT_PRESET) {
            log::error!("default preset missing: {e}");
        }
        let mut driver = Self {
            camera,
            layout,
            converter,
            controller,
            target: Rc::new(RefCell::new(Vec3::ZERO)),
            marker: Vec3::ZERO,
            cursor: Vec2::ZERO,
            size,
            last_frame: Instant::now(),
            elapsed: 0.0,
            shown_state: None,
        };
        driver.resize(size);
        driver
    }

    fn resize(&mut self, size: PhysicalSize<u32>) {
        self.size = size;
        let (w, h) = (size.width.max(1) as f32, size.height.max(1) as f32);
        self.camera.borrow_mut().set_aspect(w / h);
        let info = self.layout.update(w, h);
        self.converter.update_safe_area(info.safe_area);
        if self.controller.state() == CameraState::Idle {
            self.adjust_for_layout(&info);
        }
        self.converter.clamp_to_safe_area(&mut self.marker, MARKER_PADDING);
    }

    // Moving the camera changes the frustum depth, so the layout is
    // recomputed from the new pose before anyone reads it.
    fn adjust_for_layout(&mut self, info: &LayoutInfo) {
        if let Err(e) = self.controller.adjust_for_layout(info, DEFAULT_PRESET) {
            log::debug!("[native] layout adjust skipped: {e}");
            return;
        }
        let (w, h) = (self.size.width.max(1) as f32, self.size.height.max(1) as f32);
        let info = self.layout.update(w, h);
        self.converter.update_safe_area(info.safe_area);
    }

    fn frame(&mut self, window: &Window) {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.elapsed += dt;

        let angle = self.elapsed * ORBIT_SPEED;
        *self.target.borrow_mut() =
            Vec3::new(angle.cos() * ORBIT_RADIUS, 0.0, angle.sin() * ORBIT_RADIUS);

        self.controller.advance_tweens(dt);
        self.controller.update(dt);

        let state = self.controller.state();
        if self.shown_state != Some(state) {
            self.shown_state = Some(state);
            window.set_title(&format!("{TITLE} [{state:?}]"));
        }
    }

    fn click(&mut self) {
        let (w, h) = (self.size.width.max(1) as f32, self.size.height.max(1) as f32);
        match self
            .converter
            .screen_to_safe_area_relative(self.cursor.x, self.cursor.y, w, h)
        {
            Some(rel) => {
                let depth = self.layout.target_z();
                self.converter
                    .position_in_safe_area(&mut self.marker, rel.x, rel.y, depth);
                let ahead = self
                    .converter
                    .safe_area_relative_to_camera(rel.x, rel.y, DEFAULT_CAMERA_Z);
                log::info!(
                    "[pointer] rel=({:.2},{:.2}) world=({:.2},{:.2},{:.2}) camera-space=({:.2},{:.2},{:.2})",
                    rel.x, rel.y,
                    self.marker.x, self.marker.y, self.marker.z,
                    ahead.x, ahead.y, ahead.z
                );
            }
            None => log::info!("[pointer] outside safe area"),
        }
    }

    fn key(&mut self, key: &str) {
        if let Some((_, preset)) = PRESET_KEYS.iter().find(|(k, _)| *k == key) {
            if let Err(e) = self.controller.apply_preset(preset) {
                log::debug!("[native] preset key ignored: {e}");
            }
            return;
        }
        match key {
            "c" => self
                .controller
                .cut_to(Vec3::new(6.0, 4.0, 6.0), Vec3::ZERO, true),
            "a" => self.controller.animate_to(
                Vec3::new(-6.0, 3.0, 8.0),
                Vec3::new(0.0, 0.5, 0.0),
                AnimateOptions::new(1.5)
                    .with_easing(Easing::CubicInOut)
                    .saving_state()
                    .on_complete(|| log::info!("[camera] animation complete")),
            ),
            "r" => {
                if let Err(e) = self.controller.return_to_saved(AnimateOptions::new(1.0)) {
                    log::debug!("[native] return ignored: {e}");
                }
            }
            "f" => {
                if self.controller.is_following() {
                    self.controller.stop_follow();
                } else {
                    self.controller
                        .start_follow(self.target.clone(), FollowConfig::default());
                }
            }
            "s" => self.controller.shake(0.3, 0.5, true),
            "z" => self.controller.zoom_punch(45.0, 0.6),
            "l" => {
                if let Some(info) = self.layout.current_layout().cloned() {
                    self.adjust_for_layout(&info);
                }
            }
            _ => {}
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(TITLE)
        .with_inner_size(LogicalSize::new(1280.0, 720.0))
        .build(&event_loop)?;

    let mut driver = Driver::new(window.inner_size());
    log::info!("[native] keys: 1-5 presets, c cut, a animate, r return, f follow, s shake, z zoom, l relayout");

    event_loop.run(move |event, elwt| {
        elwt.set_control_flow(ControlFlow::Poll);
        match event {
            Event::WindowEvent {
                event: WindowEvent::Resized(size),
                ..
            } => driver.resize(size),
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => elwt.exit(),
            Event::WindowEvent {
                event: WindowEvent::CursorMoved { position, .. },
                ..
            } => driver.cursor = Vec2::new(position.x as f32, position.y as f32),
            Event::WindowEvent {
                event:
                    WindowEvent::MouseInput {
                        state: ElementState::Pressed,
                        button: MouseButton::Left,
                        ..
                    },
                ..
            } => driver.click(),
            Event::WindowEvent {
                event:
                    WindowEvent::KeyboardInput {
                        event:
                            KeyEvent {
                                logical_key,
                                state: ElementState::Pressed,
                                ..
                            },
                        ..
                    },
                ..
            } => match logical_key {
                Key::Named(NamedKey::Escape) => elwt.exit(),
                Key::Character(c) => driver.key(c.as_str()),
                _ => {}
            },
            Event::AboutToWait => driver.frame(&window),
            _ => {}
        }
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use framing_core::{compute_safe_area, FrustumParams};

    #[test]
    fn portrait_resize_publishes_layout_for_adjusted_camera() {
        let mut driver = Driver::new(PhysicalSize::new(1280, 720));
        driver.resize(PhysicalSize::new(500, 1000));

        let expected = compute_safe_area(
            0.5,
            FrustumParams::from_camera(&driver.camera.borrow()),
            driver.layout.target_z(),
        );
        assert!(driver.camera.borrow().position.z > DEFAULT_CAMERA_Z);
        assert_eq!(driver.layout.current_layout().unwrap().safe_area, expected);
        assert_eq!(*driver.converter.safe_area(), expected);
    }
}
