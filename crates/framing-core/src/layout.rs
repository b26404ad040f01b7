//! Live layout state.
//!
//! [`LayoutState`] recomputes the safe area and the decoration strips around
//! it whenever the viewport changes and pushes the new [`LayoutInfo`] to every
//! registered listener. Listeners are kept in a hash map, so notification
//! order is unspecified.

use crate::camera::SharedCamera;
use crate::constants::DEFAULT_TARGET_Z;
use crate::geometry::{compute_safe_area, is_portrait, FrustumParams, SafeAreaBounds};
use fnv::FnvHashMap;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutMode {
    Portrait,
    Landscape,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecorationSide {
    Left,
    Right,
}

/// Margin strip outside the safe area, only present in landscape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecorationArea {
    pub side: DecorationSide,
    /// Normalized horizontal span.
    pub left: f32,
    pub right: f32,
    /// World-space horizontal span at the layout's depth plane.
    pub world_left: f32,
    pub world_right: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LayoutInfo {
    pub mode: LayoutMode,
    pub screen_aspect: f32,
    pub safe_area: SafeAreaBounds,
    pub decoration_areas: SmallVec<[DecorationArea; 2]>,
}

impl LayoutInfo {
    pub fn is_portrait(&self) -> bool {
        self.mode == LayoutMode::Portrait
    }

    pub fn decoration(&self, side: DecorationSide) -> Option<&DecorationArea> {
        self.decoration_areas.iter().find(|d| d.side == side)
    }
}

/// Handle returned by [`LayoutState::add_listener`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type LayoutListener = Box<dyn FnMut(&LayoutInfo)>;

pub struct LayoutState {
    camera: SharedCamera,
    target_z: f32,
    current: Option<LayoutInfo>,
    listeners: FnvHashMap<ListenerId, LayoutListener>,
    next_listener: u64,
}

impl LayoutState {
    pub fn new(camera: SharedCamera) -> Self {
        Self {
            camera,
            target_z: DEFAULT_TARGET_Z,
            current: None,
            listeners: FnvHashMap::default(),
            next_listener: 0,
        }
    }

    /// Recompute the layout for a new viewport size and notify listeners.
    ///
    /// Listeners are re-notified even when the size did not change.
    pub fn update(&mut self, screen_width: f32, screen_height: f32) -> LayoutInfo {
        let screen_aspect = screen_width / screen_height;
        let mode = if is_portrait(screen_aspect) {
            LayoutMode::Portrait
        } else {
            LayoutMode::Landscape
        };
        let frustum = FrustumParams::from_camera(&self.camera.borrow());
        let safe_area = compute_safe_area(screen_aspect, frustum, self.target_z);
        let decoration_areas = match mode {
            LayoutMode::Portrait => SmallVec::new(),
            LayoutMode::Landscape => decoration_strips(&safe_area),
        };

        let info = LayoutInfo {
            mode,
            screen_aspect,
            safe_area,
            decoration_areas,
        };
        if self.current.as_ref().map(|c| c.mode) != Some(mode) {
            log::info!(
                "[layout] {:?} {}x{} aspect={:.3} safe=[{:.3}, {:.3}]",
                mode,
                screen_width,
                screen_height,
                screen_aspect,
                safe_area.left,
                safe_area.right
            );
        }
        self.current = Some(info.clone());
        for listener in self.listeners.values_mut() {
            listener(&info);
        }
        info
    }

    pub fn add_listener(&mut self, listener: impl FnMut(&LayoutInfo) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.insert(id, Box::new(listener));
        id
    }

    /// Returns `false` when `id` was not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(&id).is_some()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// `None` until the first [`update`](Self::update).
    pub fn current_layout(&self) -> Option<&LayoutInfo> {
        self.current.as_ref()
    }

    /// Depth plane used by subsequent updates; the current layout is kept.
    pub fn set_target_z(&mut self, z: f32) {
        self.target_z = z;
    }

    pub fn target_z(&self) -> f32 {
        self.target_z
    }
}

// Strips are as wide as the safe area itself in world units, tiled outward.
fn decoration_strips(safe_area: &SafeAreaBounds) -> SmallVec<[DecorationArea; 2]> {
    let wb = &safe_area.world_bounds;
    let mut strips = SmallVec::new();
    strips.push(DecorationArea {
        side: DecorationSide::Left,
        left: 0.0,
        right: safe_area.left,
        world_left: wb.left - wb.width,
        world_right: wb.left,
    });
    strips.push(DecorationArea {
        side: DecorationSide::Right,
        left: safe_area.right,
        right: 1.0,
        world_left: wb.right,
        world_right: wb.right + wb.width,
    });
    strips
}
