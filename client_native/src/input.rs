use game_core::SteerCommand;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Map a key transition to a paddle command.
///
/// Releasing any bound key halts the paddle, even when the opposite
/// direction is still held down.
pub fn steer_for(code: KeyCode, state: ElementState) -> Option<SteerCommand> {
    match (code, state) {
        (KeyCode::ArrowUp | KeyCode::KeyW, ElementState::Pressed) => Some(SteerCommand::Up),
        (KeyCode::ArrowDown | KeyCode::KeyS, ElementState::Pressed) => Some(SteerCommand::Down),
        (
            KeyCode::ArrowUp | KeyCode::KeyW | KeyCode::ArrowDown | KeyCode::KeyS,
            ElementState::Released,
        ) => Some(SteerCommand::Stop),
        _ => None,
    }
}
