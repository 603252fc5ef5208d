// SPDX-License-Identifier: MPL-2.0
//! Static design tokens for toast rendering.
//!
//! # Organization
//!
//! - **Palette**: category colors
//! - **Opacity**: standardized opacity levels
//! - **Spacing**: spacing scale (8px grid)
//! - **Sizing**: component sizes
//! - **Typography**: font size scale
//! - **Border**: border width and radius
//! - **Shadow**: shadow definitions
//!
//! Theming beyond these static definitions is out of scope; the category
//! colors are fixed so toasts read the same way in every host application.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    // Category backgrounds
    pub const PRIMARY_BG: Color = Color::from_rgb(0.200, 0.478, 0.718); // #337AB7
    pub const SUCCESS_BG: Color = Color::from_rgb(0.875, 0.941, 0.847); // #DFF0D8
    pub const INFO_BG: Color = Color::from_rgb(0.851, 0.929, 0.969); // #D9EDF7
    pub const WARNING_BG: Color = Color::from_rgb(0.988, 0.973, 0.890); // #FCF8E3
    pub const DANGER_BG: Color = Color::from_rgb(0.949, 0.871, 0.871); // #F2DEDE

    // Category accents (border and glyph)
    pub const PRIMARY_ACCENT: Color = Color::from_rgb(0.157, 0.376, 0.565); // #286090
    pub const SUCCESS_ACCENT: Color = Color::from_rgb(0.235, 0.463, 0.239); // #3C763D
    pub const INFO_ACCENT: Color = Color::from_rgb(0.192, 0.439, 0.561); // #31708F
    pub const WARNING_ACCENT: Color = Color::from_rgb(0.541, 0.427, 0.231); // #8A6D3B
    pub const DANGER_ACCENT: Color = Color::from_rgb(0.663, 0.267, 0.259); // #A94442
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Toast card width when anchored to a corner.
    pub const TOAST_WIDTH: f32 = 320.0;

    /// Toast card height.
    pub const TOAST_HEIGHT: f32 = 40.0;

    /// Width of the close button hit area.
    pub const CLOSE_BUTTON_WIDTH: f32 = 20.0;

    /// Horizontal margin around the stack for banner (top/bottom) anchors.
    pub const STACK_SIDE_MARGIN: f32 = 50.0;

    /// Vertical margin between the stack and the window edge.
    pub const STACK_EDGE_MARGIN: f32 = 10.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Standard message text.
    pub const BODY: f32 = 15.0;

    /// Category glyph in front of the message.
    pub const GLYPH: f32 = 16.0;

    /// Close button cross.
    pub const CLOSE: f32 = 13.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Accent border around the toast card.
    pub const WIDTH_MD: f32 = 2.0;

    /// Toast corner radius.
    pub const RADIUS: f32 = 5.0;

    /// Close button hover radius.
    pub const RADIUS_SM: f32 = 4.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XXS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_SUBTLE < opacity::OVERLAY_MEDIUM);

    // Sizing validation
    assert!(sizing::TOAST_WIDTH > sizing::TOAST_HEIGHT);
    assert!(sizing::CLOSE_BUTTON_WIDTH < sizing::TOAST_HEIGHT);

    // Typography validation
    assert!(typography::GLYPH > typography::CLOSE);

    // Color validation
    assert!(palette::PRIMARY_BG.r >= 0.0 && palette::PRIMARY_BG.r <= 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::XS, spacing::XXS * 2.0);
        assert_eq!(spacing::MD, spacing::XS * 2.0);
    }

    #[test]
    fn category_backgrounds_are_light_except_primary() {
        // Pastel backgrounds keep dark text readable
        for bg in [
            palette::SUCCESS_BG,
            palette::INFO_BG,
            palette::WARNING_BG,
            palette::DANGER_BG,
        ] {
            assert!(bg.r > 0.8 || bg.g > 0.8 || bg.b > 0.8);
        }
        assert!(palette::PRIMARY_BG.r < 0.5);
    }
}
