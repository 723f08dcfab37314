use crate::core::data::colour::Colour;

fn channel(value: f32) -> u8 {
    (value * 255.0 + 0.5) as u8
}

/// Converts hue/saturation/brightness to RGB.
///
/// Hue has period 1.0 and wraps, so `1.25` and `-0.75` both select the same
/// colour as `0.25`. Arithmetic is single precision and each channel is
/// rounded half-up, matching the java.awt conversion bit for bit.
#[must_use]
pub fn hsb_to_rgb(hue: f32, saturation: f32, brightness: f32) -> Colour {
    if saturation == 0.0 {
        let grey = channel(brightness);
        return Colour { r: grey, g: grey, b: grey };
    }

    let sector_position = (hue - hue.floor()) * 6.0;
    let fraction = sector_position - sector_position.floor();
    let p = brightness * (1.0 - saturation);
    let q = brightness * (1.0 - saturation * fraction);
    let t = brightness * (1.0 - saturation * (1.0 - fraction));

    let (r, g, b) = match sector_position as u32 {
        0 => (brightness, t, p),
        1 => (q, brightness, p),
        2 => (p, brightness, t),
        3 => (p, q, brightness),
        4 => (t, p, brightness),
        5 => (brightness, p, q),
        _ => return Colour::BLACK,
    };

    Colour {
        r: channel(r),
        g: channel(g),
        b: channel(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_hues_at_full_saturation() {
        assert_eq!(hsb_to_rgb(0.0, 1.0, 1.0), Colour { r: 255, g: 0, b: 0 });
        assert_eq!(hsb_to_rgb(1.0 / 3.0, 1.0, 1.0), Colour { r: 0, g: 255, b: 0 });
        assert_eq!(hsb_to_rgb(2.0 / 3.0, 1.0, 1.0), Colour { r: 0, g: 0, b: 255 });
    }

    #[test]
    fn test_zero_saturation_is_grey() {
        assert_eq!(hsb_to_rgb(0.42, 0.0, 1.0), Colour { r: 255, g: 255, b: 255 });
        assert_eq!(hsb_to_rgb(0.42, 0.0, 0.5), Colour { r: 128, g: 128, b: 128 });
    }

    #[test]
    fn test_hue_wraps_with_period_one() {
        assert_eq!(hsb_to_rgb(1.25, 0.65, 1.0), hsb_to_rgb(0.25, 0.65, 1.0));
        assert_eq!(hsb_to_rgb(-0.75, 0.65, 1.0), hsb_to_rgb(0.25, 0.65, 1.0));
        assert_eq!(hsb_to_rgb(1.0, 0.65, 1.0), hsb_to_rgb(0.0, 0.65, 1.0));
    }

    #[test]
    fn test_default_saturation_at_hue_zero() {
        // p = 1 - 0.65 = 0.35, 0.35 * 255 + 0.5 = 89.75
        assert_eq!(hsb_to_rgb(0.0, 0.65, 1.0), Colour { r: 255, g: 89, b: 89 });
    }

    #[test]
    fn test_yellow_sector_boundary() {
        assert_eq!(hsb_to_rgb(1.0 / 6.0, 1.0, 1.0), Colour { r: 255, g: 255, b: 0 });
    }

    #[test]
    fn test_zero_brightness_is_black() {
        assert_eq!(hsb_to_rgb(0.3, 0.8, 0.0), Colour::BLACK);
    }
}
