use crate::core::view::ViewState;
use std::fmt;

/// The status lines drawn over the fractal while the overlay is visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayText {
    lines: Vec<String>,
}

impl OverlayText {
    #[must_use]
    pub fn from_state(state: &ViewState) -> Self {
        let bounds = state.plane_bounds();

        let lines = vec![
            format!(
                "cxMin: {}  cxMax: {}  cyMin: {}i  cyMax: {}i",
                bounds.cx_min(),
                bounds.cx_max(),
                bounds.cy_min(),
                bounds.cy_max()
            ),
            format!(
                "Horizontal step: {}  Vertical step: {}",
                state.horizontal_step(),
                state.vertical_step()
            ),
            format!(
                "Iterations: {}  Accuracy: {}",
                state.max_iterations(),
                state.escape_radius_squared()
            ),
            format!(
                "Hue: {}  Saturation: {}",
                state.hue_offset(),
                state.saturation()
            ),
            format!("Zoom level: {}", state.zoom_level()),
        ];

        Self { lines }
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl fmt::Display for OverlayText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::view::ViewCommand;

    #[test]
    fn test_default_state_lines() {
        let overlay = OverlayText::from_state(&ViewState::default());

        assert_eq!(
            overlay.lines(),
            &[
                "cxMin: -2.5  cxMax: 2.5  cyMin: -2.5i  cyMax: 2.5i".to_string(),
                "Horizontal step: 0.1  Vertical step: 0.1".to_string(),
                "Iterations: 50  Accuracy: 4".to_string(),
                "Hue: 1  Saturation: 0.65".to_string(),
                "Zoom level: 1".to_string(),
            ]
        );
    }

    #[test]
    fn test_zoom_is_reported_as_reciprocal_scale() {
        let mut state = ViewState::default();
        state.apply(ViewCommand::ZoomIn);

        let overlay = OverlayText::from_state(&state);

        assert_eq!(overlay.lines()[4], "Zoom level: 0.5");
        assert_eq!(
            overlay.lines()[0],
            "cxMin: -1.25  cxMax: 1.25  cyMin: -1.25i  cyMax: 1.25i"
        );
    }

    #[test]
    fn test_display_joins_lines() {
        let overlay = OverlayText::from_state(&ViewState::default());

        assert_eq!(overlay.to_string().lines().count(), 5);
    }
}
