use std::collections::HashSet;
use winit::event::{DeviceEvent, ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::controller::{Button, Controller};

/// Adapter that bridges Winit events to the Controller trait
///
/// Keys are tracked as held state for per-frame polling. Pointer events are
/// turned into absolute cursor positions and handed back to the caller, which
/// forwards them to the camera immediately.
#[derive(Debug, Clone)]
pub struct WinitController {
    /// Currently pressed buttons
    pressed_keys: HashSet<Button>,
    /// All pressed buttons as a vec (for efficient get_down_keys)
    pressed_vec: Vec<Button>,
    /// Take pointer positions from raw device motion instead of the OS cursor
    cursor_grabbed: bool,
    /// Integrated raw motion, used while the cursor is grabbed
    virtual_cursor: (f64, f64),
}

impl WinitController {
    /// Create a controller with no pressed keys and the virtual cursor at `origin`
    pub fn new(origin: (f64, f64), cursor_grabbed: bool) -> Self {
        Self {
            pressed_keys: HashSet::new(),
            pressed_vec: Vec::new(),
            cursor_grabbed,
            virtual_cursor: origin,
        }
    }

    pub fn cursor_grabbed(&self) -> bool {
        self.cursor_grabbed
    }

    /// Switch pointer source, e.g. when the platform refuses a cursor grab
    pub fn set_cursor_grabbed(&mut self, grabbed: bool) {
        self.cursor_grabbed = grabbed;
    }

    /// Process a window event.
    ///
    /// Returns the new absolute pointer position when the event moved the
    /// OS cursor and the cursor is not grabbed.
    pub fn process_event(&mut self, event: &WindowEvent) -> Option<(f64, f64)> {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    if let Some(button) = Self::keycode_to_button(keycode) {
                        self.set_state(button, event.state);
                    }
                }
                None
            }
            WindowEvent::CursorMoved { position, .. } if !self.cursor_grabbed => {
                Some((position.x, position.y))
            }
            WindowEvent::Focused(false) => {
                // Releases are not delivered once focus is gone
                self.release_all();
                None
            }
            _ => None,
        }
    }

    /// Process a raw device event.
    ///
    /// While the cursor is grabbed the OS cursor no longer moves, so raw
    /// motion is accumulated into an unbounded virtual position instead.
    pub fn process_device_event(&mut self, event: &DeviceEvent) -> Option<(f64, f64)> {
        match event {
            DeviceEvent::MouseMotion { delta } if self.cursor_grabbed => {
                Some(self.move_virtual_cursor(delta.0, delta.1))
            }
            _ => None,
        }
    }

    /// Offset the virtual cursor and return its new position
    pub fn move_virtual_cursor(&mut self, dx: f64, dy: f64) -> (f64, f64) {
        self.virtual_cursor.0 += dx;
        self.virtual_cursor.1 += dy;
        self.virtual_cursor
    }

    pub fn virtual_cursor(&self) -> (f64, f64) {
        self.virtual_cursor
    }

    pub fn press(&mut self, button: Button) {
        if self.pressed_keys.insert(button) {
            self.pressed_vec.push(button);
        }
    }

    pub fn release(&mut self, button: Button) {
        if self.pressed_keys.remove(&button) {
            self.pressed_vec.retain(|&b| b != button);
        }
    }

    pub fn release_all(&mut self) {
        self.pressed_keys.clear();
        self.pressed_vec.clear();
    }

    fn set_state(&mut self, button: Button, state: ElementState) {
        match state {
            ElementState::Pressed => self.press(button),
            ElementState::Released => self.release(button),
        }
    }

    /// Map Winit KeyCode to Button
    fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::KeyW => Some(Button::Forward),
            KeyCode::KeyS => Some(Button::Backward),
            KeyCode::KeyA => Some(Button::Left),
            KeyCode::KeyD => Some(Button::Right),
            KeyCode::Escape => Some(Button::Exit),
            _ => None,
        }
    }
}

impl Controller for WinitController {
    fn is_down(&self, button: Button) -> bool {
        self.pressed_keys.contains(&button)
    }

    fn get_down_keys(&self) -> &[Button] {
        &self.pressed_vec
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // KeyEvent and DeviceId cannot be built outside winit, so key handling is
    // exercised through press/release and keycode_to_button.

    #[test]
    fn test_new_controller_empty() {
        let controller = WinitController::new((400.0, 300.0), true);
        assert!(!controller.is_down(Button::Forward));
        assert!(controller.get_down_keys().is_empty());
        assert_eq!(controller.virtual_cursor(), (400.0, 300.0));
        assert!(controller.cursor_grabbed());
    }

    #[test]
    fn test_press_release() {
        let mut controller = WinitController::new((0.0, 0.0), false);
        controller.press(Button::Forward);
        controller.press(Button::Forward);
        controller.press(Button::Left);
        assert_eq!(controller.get_down_keys(), &[Button::Forward, Button::Left]);

        controller.release(Button::Forward);
        assert!(!controller.is_down(Button::Forward));
        assert!(controller.is_down(Button::Left));

        controller.release_all();
        assert!(controller.get_down_keys().is_empty());
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(WinitController::keycode_to_button(KeyCode::KeyW), Some(Button::Forward));
        assert_eq!(WinitController::keycode_to_button(KeyCode::KeyS), Some(Button::Backward));
        assert_eq!(WinitController::keycode_to_button(KeyCode::KeyA), Some(Button::Left));
        assert_eq!(WinitController::keycode_to_button(KeyCode::KeyD), Some(Button::Right));
        assert_eq!(WinitController::keycode_to_button(KeyCode::Escape), Some(Button::Exit));
        assert_eq!(WinitController::keycode_to_button(KeyCode::KeyQ), None);
    }

    #[test]
    fn test_virtual_cursor_accumulates() {
        let mut controller = WinitController::new((400.0, 300.0), true);
        assert_eq!(controller.move_virtual_cursor(10.0, -5.0), (410.0, 295.0));
        assert_eq!(controller.move_virtual_cursor(-1000.0, 0.0), (-590.0, 295.0));
    }

    #[test]
    fn test_device_motion_only_when_grabbed() {
        let motion = DeviceEvent::MouseMotion { delta: (3.0, 4.0) };

        let mut grabbed = WinitController::new((0.0, 0.0), true);
        assert_eq!(grabbed.process_device_event(&motion), Some((3.0, 4.0)));

        let mut free = WinitController::new((0.0, 0.0), false);
        assert_eq!(free.process_device_event(&motion), None);
        assert_eq!(free.virtual_cursor(), (0.0, 0.0));
    }

    #[test]
    fn test_focus_loss_releases_keys() {
        let mut controller = WinitController::new((0.0, 0.0), true);
        controller.press(Button::Right);
        assert_eq!(controller.process_event(&WindowEvent::Focused(false)), None);
        assert!(!controller.is_down(Button::Right));
    }
}
