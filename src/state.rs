//! The mutable dashboard data model.
//!
//! [`DashboardState`] is a single aggregate owned by the hosting
//! application and mutated on one thread only: by the host's setter calls
//! and by [`BlinkController`](crate::blink::BlinkController) ticks. Every
//! setter performs an unconditional assignment and raises the
//! redraw-needed flag; there is no validation or clamping — the contract
//! is "renders whatever is given", and out-of-range values simply produce
//! extrapolated geometry downstream.
//!
//! The two blinker icon flags (`icon1`/`icon3`) are derived state: only
//! the blink controller writes them, once per tick. The middle icon flag
//! is independently settable by the host.

/// Direction-of-travel selector for the middle status icon.
///
/// Only consulted when the warning flag is clear; warning has priority.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum DriveMode {
    #[default]
    Driving,
    Reverse,
}

/// Blinker side selector for [`DashboardState::set_blinker_enabled`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Side {
    Left,
    Right,
}

/// Mutable dashboard state. Created once at startup with everything
/// zeroed/false, mutated for the life of the process, never persisted.
#[derive(Clone, Debug, Default)]
pub struct DashboardState {
    left_value: f32,
    right_value: f32,
    center_value: f32,

    motor_temp: f32,
    battery_temp: f32,

    blinker_left: bool,
    blinker_right: bool,

    // Derived by the blink controller, never set directly by the host.
    icon1_visible: bool,
    icon3_visible: bool,

    icon2_visible: bool,

    drive_mode: DriveMode,
    warning: bool,
    charging: bool,

    needs_redraw: bool,
}

impl DashboardState {
    /// Fresh state: all values zero, all flags false, no redraw pending.
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Setters (unconditional assignment + redraw signal)
    // -------------------------------------------------------------------------

    /// Set the left gauge value (nominally 0..=100, not enforced).
    pub fn set_left_value(&mut self, value: f32) {
        self.left_value = value;
        self.needs_redraw = true;
    }

    /// Set the right gauge value (nominally 0..=100, not enforced).
    pub fn set_right_value(&mut self, value: f32) {
        self.right_value = value;
        self.needs_redraw = true;
    }

    /// Set the central percentage readout (also drives the charging ring).
    pub fn set_center_value(&mut self, value: f32) {
        self.center_value = value;
        self.needs_redraw = true;
    }

    /// Set both temperature readouts at once.
    pub fn set_temp_values(&mut self, motor: f32, battery: f32) {
        self.motor_temp = motor;
        self.battery_temp = battery;
        self.needs_redraw = true;
    }

    /// Show or hide the middle status icon, independent of blink logic.
    pub fn set_middle_icon_visible(&mut self, visible: bool) {
        self.icon2_visible = visible;
        self.needs_redraw = true;
    }

    /// Switch between the normal page and the charging page. Takes effect
    /// on the next frame; there is no transition.
    pub fn set_charging_mode(&mut self, charging: bool) {
        self.charging = charging;
        self.needs_redraw = true;
    }

    /// Enable or disable one blinker. Visibility itself is driven by the
    /// blink controller on its next tick.
    pub fn set_blinker_enabled(&mut self, side: Side, enabled: bool) {
        match side {
            Side::Left => self.blinker_left = enabled,
            Side::Right => self.blinker_right = enabled,
        }
        self.needs_redraw = true;
    }

    /// Select the drive-mode glyph shown when no warning is active.
    pub fn set_drive_mode(&mut self, mode: DriveMode) {
        self.drive_mode = mode;
        self.needs_redraw = true;
    }

    /// Raise or clear the warning flag; overrides the drive-mode glyph.
    pub fn set_warning_state(&mut self, warning: bool) {
        self.warning = warning;
        self.needs_redraw = true;
    }

    /// Write the derived blinker visibility flags. Called by the blink
    /// controller only, exactly once per tick.
    pub(crate) fn apply_blink(&mut self, left_visible: bool, right_visible: bool) {
        self.icon1_visible = left_visible;
        self.icon3_visible = right_visible;
        self.needs_redraw = true;
    }

    // -------------------------------------------------------------------------
    // Redraw signal
    // -------------------------------------------------------------------------

    /// Whether a mutation has happened since the last frame was taken.
    pub const fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Consume the redraw flag. The host calls this once per scheduled
    /// redraw and renders if it returns true.
    pub const fn take_redraw(&mut self) -> bool {
        let dirty = self.needs_redraw;
        self.needs_redraw = false;
        dirty
    }

    // -------------------------------------------------------------------------
    // Read access for the renderer
    // -------------------------------------------------------------------------

    pub const fn left_value(&self) -> f32 {
        self.left_value
    }

    pub const fn right_value(&self) -> f32 {
        self.right_value
    }

    pub const fn center_value(&self) -> f32 {
        self.center_value
    }

    pub const fn motor_temp(&self) -> f32 {
        self.motor_temp
    }

    pub const fn battery_temp(&self) -> f32 {
        self.battery_temp
    }

    pub const fn blinker_enabled(&self, side: Side) -> bool {
        match side {
            Side::Left => self.blinker_left,
            Side::Right => self.blinker_right,
        }
    }

    pub const fn icon1_visible(&self) -> bool {
        self.icon1_visible
    }

    pub const fn icon2_visible(&self) -> bool {
        self.icon2_visible
    }

    pub const fn icon3_visible(&self) -> bool {
        self.icon3_visible
    }

    pub const fn drive_mode(&self) -> DriveMode {
        self.drive_mode
    }

    pub const fn warning_state(&self) -> bool {
        self.warning
    }

    pub const fn charging_mode(&self) -> bool {
        self.charging
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
