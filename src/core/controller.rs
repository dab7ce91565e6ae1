/// Logical input button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Forward,
    Backward,
    Left,
    Right,
    Exit,
}

impl Button {
    /// Buttons polled by the camera each frame, in application order
    pub const MOVEMENT: [Button; 4] = [Button::Forward, Button::Backward, Button::Left, Button::Right];
}

/// Controller - answers "is this button held right now"
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;

    /// Get all currently pressed buttons
    fn get_down_keys(&self) -> &[Button];
}
