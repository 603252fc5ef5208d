// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::Length;
    use iced_toasts::style::{border, palette, sizing, spacing, typography};
    use iced_toasts::{Category, Config, Effect, Manager, Notification, Toast};
    use std::time::{Duration, Instant};

    #[test]
    fn toast_views_compile() {
        // Smoke-test that the view functions build an element tree
        let mut manager = Manager::new();
        let now = Instant::now();
        manager.push(Notification::success("saved"), now);

        let record = manager.active().next().expect("record present");
        let _ = Toast::view(record, manager.opacity(record, now), Length::Fill);
        let _ = Toast::view_overlay(&manager, now);
    }

    #[test]
    fn empty_overlay_compiles() {
        let manager = Manager::new();
        let _ = Toast::view_overlay(&manager, Instant::now());
    }

    #[test]
    fn every_category_renders() {
        let mut manager = Manager::with_config(Config {
            max_visible: Some(Category::ALL.len()),
            ..Config::default()
        });
        let now = Instant::now();
        for category in Category::ALL {
            manager.push(Notification::new(category, category.to_string()), now);
        }

        assert_eq!(manager.active_count(), Category::ALL.len());
        let _ = Toast::view_overlay(&manager, now);
    }

    #[test]
    fn design_tokens_are_accessible() {
        // Palette
        let _ = palette::PRIMARY_BG;
        let _ = palette::WHITE;

        // Spacing
        let _ = spacing::MD;

        // Sizing
        let _ = sizing::TOAST_HEIGHT;

        // Typography
        let _ = typography::BODY;

        // Border
        let _ = border::RADIUS;
    }

    #[test]
    fn category_palette_is_coherent() {
        for category in Category::ALL {
            assert_ne!(category.background(), category.accent());
            assert_ne!(category.background(), category.text_color());
        }

        assert_eq!(Category::Primary.background(), palette::PRIMARY_BG);
        assert_eq!(Category::Danger.accent(), palette::DANGER_ACCENT);
    }

    #[test]
    fn category_glyphs_are_distinct() {
        let mut seen = Vec::new();
        for category in Category::ALL {
            let glyph = category.glyph();
            assert!(!seen.contains(&glyph), "{category} reuses a glyph");
            seen.push(glyph);
        }
    }

    #[test]
    fn opacity_stays_in_unit_range_through_lifecycle() {
        let mut manager = Manager::with_config(Config {
            entry_effect: Some(Effect::Fade),
            entry_duration_ms: Some(100),
            ..Config::default()
        });
        let t0 = Instant::now();
        manager.push(Notification::info("fading in"), t0);

        let record = manager.active().next().expect("record present");
        for ms in [0u64, 50, 100, 500] {
            let opacity = manager.opacity(record, t0 + Duration::from_millis(ms));
            assert!(
                (0.0..=1.0).contains(&opacity),
                "opacity {opacity} at {ms} ms"
            );
        }
    }
}
