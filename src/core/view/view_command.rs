use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// A discrete user command against the explorer's view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewCommand {
    PanLeft,
    PanRight,
    PanUp,
    PanDown,
    ZoomIn,
    ZoomOut,
    HueUp,
    HueDown,
    PanStepXUp,
    PanStepXDown,
    PanStepYUp,
    PanStepYDown,
    IterationsUp,
    IterationsDown,
    SaturationUp,
    SaturationDown,
    AccuracyUp,
    AccuracyDown,
    Save,
    Reset,
    ToggleOverlay,
}

impl ViewCommand {
    pub const ALL: &'static [Self] = &[
        Self::PanLeft,
        Self::PanRight,
        Self::PanUp,
        Self::PanDown,
        Self::ZoomIn,
        Self::ZoomOut,
        Self::HueUp,
        Self::HueDown,
        Self::PanStepXUp,
        Self::PanStepXDown,
        Self::PanStepYUp,
        Self::PanStepYDown,
        Self::IterationsUp,
        Self::IterationsDown,
        Self::SaturationUp,
        Self::SaturationDown,
        Self::AccuracyUp,
        Self::AccuracyDown,
        Self::Save,
        Self::Reset,
        Self::ToggleOverlay,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PanLeft => "pan-left",
            Self::PanRight => "pan-right",
            Self::PanUp => "pan-up",
            Self::PanDown => "pan-down",
            Self::ZoomIn => "zoom-in",
            Self::ZoomOut => "zoom-out",
            Self::HueUp => "hue-up",
            Self::HueDown => "hue-down",
            Self::PanStepXUp => "pan-step-x-up",
            Self::PanStepXDown => "pan-step-x-down",
            Self::PanStepYUp => "pan-step-y-up",
            Self::PanStepYDown => "pan-step-y-down",
            Self::IterationsUp => "iterations-up",
            Self::IterationsDown => "iterations-down",
            Self::SaturationUp => "saturation-up",
            Self::SaturationDown => "saturation-down",
            Self::AccuracyUp => "accuracy-up",
            Self::AccuracyDown => "accuracy-down",
            Self::Save => "save",
            Self::Reset => "reset",
            Self::ToggleOverlay => "toggle-overlay",
        }
    }

    /// Whether the pixels change after this command.
    ///
    /// Pan-step adjustments and the overlay toggle only change what the overlay
    /// shows; save reads the existing frame.
    #[must_use]
    pub const fn requires_render(self) -> bool {
        !matches!(
            self,
            Self::PanStepXUp
                | Self::PanStepXDown
                | Self::PanStepYUp
                | Self::PanStepYDown
                | Self::Save
                | Self::ToggleOverlay
        )
    }
}

impl fmt::Display for ViewCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseViewCommandError {
    pub name: String,
}

impl fmt::Display for ParseViewCommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown view command: {}", self.name)
    }
}

impl Error for ParseViewCommandError {}

impl FromStr for ViewCommand {
    type Err = ParseViewCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();

        Self::ALL
            .iter()
            .copied()
            .find(|command| command.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseViewCommandError {
                name: name.to_string(),
            })
    }
}
