// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Colors and measurements shared by the demo host and the player overlay.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale

## Examples

```
use draggable_player::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let surface = Color {
    a: opacity::OPAQUE,
    ..palette::GRAY_900
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Brand colors (blue scale)
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9); // Primary blue

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const MD: f32 = 16.0; // 2 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Height of one row in the host list behind the player.
    pub const HOST_ROW_HEIGHT: f32 = 56.0;

    /// Height reserved below the player surface for controls and status.
    pub const CONTROLS_HEIGHT: f32 = 88.0;

    /// Thickness of the progress strip drawn along the player's bottom edge.
    pub const PROGRESS_STRIP: f32 = 4.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Caption - Badges, timestamps, small info
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::MD > spacing::XS);

    assert!(opacity::OPAQUE == 1.0);

    assert!(sizing::CONTROLS_HEIGHT > sizing::HOST_ROW_HEIGHT);
    assert!(typography::BODY > typography::CAPTION);
};
