use crate::core::view::ViewCommand;
use winit::keyboard::KeyCode;

/// Maps a physical key to its explorer command. Unbound keys are ignored.
#[must_use]
pub fn decode_key(key_code: KeyCode) -> Option<ViewCommand> {
    let command = match key_code {
        KeyCode::ArrowLeft => ViewCommand::PanLeft,
        KeyCode::ArrowRight => ViewCommand::PanRight,
        KeyCode::ArrowUp => ViewCommand::PanUp,
        KeyCode::ArrowDown => ViewCommand::PanDown,
        KeyCode::Period => ViewCommand::ZoomIn,
        KeyCode::Comma => ViewCommand::ZoomOut,
        KeyCode::KeyK => ViewCommand::HueDown,
        KeyCode::KeyL => ViewCommand::HueUp,
        KeyCode::KeyF => ViewCommand::PanStepXDown,
        KeyCode::KeyR => ViewCommand::PanStepXUp,
        KeyCode::KeyG => ViewCommand::PanStepYDown,
        KeyCode::KeyT => ViewCommand::PanStepYUp,
        KeyCode::KeyJ => ViewCommand::IterationsDown,
        KeyCode::KeyU => ViewCommand::IterationsUp,
        KeyCode::KeyI => ViewCommand::SaturationDown,
        KeyCode::KeyO => ViewCommand::SaturationUp,
        KeyCode::KeyY => ViewCommand::AccuracyUp,
        KeyCode::KeyH => ViewCommand::AccuracyDown,
        KeyCode::KeyP => ViewCommand::Save,
        KeyCode::KeyC => ViewCommand::Reset,
        KeyCode::KeyZ => ViewCommand::ToggleOverlay,
        _ => return None,
    };

    Some(command)
}
