use egui::{Color32, FontId, Rounding, Stroke, TextStyle, Visuals};

use crate::face_image::FaceStyle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(not(target_arch = "wasm32"), derive(clap::ValueEnum))]
pub enum ThemePreference {
    /// Follow the light/dark setting of the platform.
    #[default]
    System,
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: Color32,
    pub on_primary: Color32,
    pub secondary: Color32,
    pub tertiary: Color32,
    pub background: Color32,
    pub surface: Color32,
    pub on_surface: Color32,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        primary: Color32::from_rgb(0x66, 0x50, 0xa4),
        on_primary: Color32::WHITE,
        secondary: Color32::from_rgb(0x62, 0x5b, 0x71),
        tertiary: Color32::from_rgb(0x7d, 0x52, 0x60),
        background: Color32::from_rgb(0xff, 0xfb, 0xfe),
        surface: Color32::from_rgb(0xff, 0xfb, 0xfe),
        on_surface: Color32::from_rgb(0x1c, 0x1b, 0x1f),
    };

    pub const DARK: Palette = Palette {
        primary: Color32::from_rgb(0xd0, 0xbc, 0xff),
        on_primary: Color32::from_rgb(0x38, 0x1e, 0x72),
        secondary: Color32::from_rgb(0xcc, 0xc2, 0xdc),
        tertiary: Color32::from_rgb(0xef, 0xb8, 0xc8),
        background: Color32::from_rgb(0x1c, 0x1b, 0x1f),
        surface: Color32::from_rgb(0x1c, 0x1b, 0x1f),
        on_surface: Color32::from_rgb(0xe6, 0xe1, 0xe5),
    };
}

pub struct Theme {
    preference: ThemePreference,
    applied: Option<bool>,
}

impl Theme {
    pub fn new(preference: ThemePreference) -> Self {
        Self {
            preference,
            applied: None,
        }
    }

    /// Whether to draw dark, given what the platform currently asks for.
    pub fn is_dark(&self, system_dark: bool) -> bool {
        match self.preference {
            ThemePreference::System => system_dark,
            ThemePreference::Light => false,
            ThemePreference::Dark => true,
        }
    }

    pub fn palette(dark: bool) -> &'static Palette {
        if dark {
            &Palette::DARK
        } else {
            &Palette::LIGHT
        }
    }

    /// Installs the palette into `ctx`. Only touches the style when the mode changes.
    pub fn apply(&mut self, ctx: &egui::Context) {
        // With `System`, eframe swaps in default visuals when the platform theme flips.
        let dark = self.is_dark(ctx.style().visuals.dark_mode);
        if self.applied == Some(dark) && ctx.style().visuals == visuals(dark) {
            return;
        }

        tracing::debug!(dark, "applying theme");
        ctx.style_mut(|style| {
            style.visuals = visuals(dark);
            style
                .text_styles
                .insert(TextStyle::Button, FontId::proportional(16.0));
            style.spacing.button_padding = egui::vec2(24.0, 10.0);
        });
        self.applied = Some(dark);
    }

    pub fn face_style(dark: bool) -> FaceStyle {
        let palette = Self::palette(dark);
        FaceStyle {
            body: Color32::WHITE,
            outline: Stroke::new(3.0, palette.secondary),
            pip: palette.tertiary,
        }
    }
}

pub fn visuals(dark: bool) -> Visuals {
    let palette = Theme::palette(dark);
    let mut visuals = if dark {
        Visuals::dark()
    } else {
        Visuals::light()
    };

    visuals.panel_fill = palette.background;
    visuals.window_fill = palette.surface;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.on_surface);
    visuals.selection.bg_fill = palette.primary;

    let rounding = Rounding::same(20.0);
    let widgets = &mut visuals.widgets;
    for (state, fill) in [
        (&mut widgets.inactive, palette.primary),
        (&mut widgets.hovered, palette.primary.gamma_multiply(0.9)),
        (&mut widgets.active, palette.primary.gamma_multiply(0.8)),
    ] {
        state.bg_fill = fill;
        state.weak_bg_fill = fill;
        state.fg_stroke = Stroke::new(1.0, palette.on_primary);
        state.rounding = rounding;
    }

    visuals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preference_overrides_system() {
        assert!(Theme::new(ThemePreference::System).is_dark(true));
        assert!(!Theme::new(ThemePreference::System).is_dark(false));
        assert!(!Theme::new(ThemePreference::Light).is_dark(true));
        assert!(Theme::new(ThemePreference::Dark).is_dark(false));
    }

    #[test]
    fn visuals_follow_palette() {
        let light = visuals(false);
        assert!(!light.dark_mode);
        assert_eq!(light.panel_fill, Palette::LIGHT.background);
        assert_eq!(light.widgets.inactive.weak_bg_fill, Palette::LIGHT.primary);

        let dark = visuals(true);
        assert!(dark.dark_mode);
        assert_eq!(dark.panel_fill, Palette::DARK.background);
    }

    #[test]
    fn apply_installs_style() {
        let ctx = egui::Context::default();
        let mut theme = Theme::new(ThemePreference::Dark);
        theme.apply(&ctx);
        assert!(ctx.style().visuals.dark_mode);
        assert_eq!(ctx.style().visuals.panel_fill, Palette::DARK.background);
        assert_eq!(
            ctx.style().text_styles[&TextStyle::Button],
            FontId::proportional(16.0)
        );
    }
}
