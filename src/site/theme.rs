//! CSS custom properties generated from the theme settings.

use std::fmt::Write;

use crate::models::{PaletteColor, ThemeSettings, SHADES};

/// Keep admin-entered font values inside their declaration.
fn css_value(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '<' | '>' | '{' | '}' | ';'))
        .collect()
}

fn shade_vars(css: &mut String, name: &str, color: PaletteColor, shades: &[u16]) {
    for shade in shades {
        let _ = writeln!(css, "  --color-{}-{}: {};", name, shade, color.hex(*shade));
    }
}

/// Stylesheet for the `<style>` block of every page.
pub fn theme_css(theme: &ThemeSettings) -> String {
    let mut css = String::from(":root {\n");
    shade_vars(&mut css, "primary", theme.primary_color, &SHADES);
    shade_vars(&mut css, "accent", theme.accent_color, &SHADES);
    shade_vars(&mut css, "gray", PaletteColor::Gray, &SHADES);
    shade_vars(&mut css, "red", PaletteColor::Red, &[50, 400, 500, 600]);
    shade_vars(&mut css, "green", PaletteColor::Green, &[400, 600]);
    css.push_str("  --color-white: #ffffff;\n  --color-black: #000000;\n");
    css.push_str("  --color-text-default: var(--color-gray-900);\n");
    css.push_str("  --color-bg-default: var(--color-gray-50);\n}\n");
    css.push_str(
        "html.dark {\n  --color-text-default: var(--color-gray-100);\n  --color-bg-default: var(--color-gray-900);\n}\n",
    );

    let _ = writeln!(
        css,
        "body {{ font-family: {}; background-color: var(--color-bg-default); color: var(--color-text-default); }}",
        css_value(&theme.font_family_body)
    );
    let _ = writeln!(
        css,
        "h1, h2, h3, h4, h5, h6 {{ font-family: {}; }}",
        css_value(&theme.font_family_heading)
    );

    css.push_str(concat!(
        ".primary-bg { background-color: var(--color-primary-600); color: var(--color-white); }\n",
        ".primary-hover-bg:hover { background-color: var(--color-primary-700); }\n",
        ".primary-text { color: var(--color-primary-600); }\n",
        "html.dark .primary-text { color: var(--color-primary-400); }\n",
        ".accent-bg { background-color: var(--color-accent-600); color: var(--color-white); }\n",
        ".accent-text { color: var(--color-accent-600); }\n",
        "html.dark .accent-text { color: var(--color-accent-400); }\n",
        ".error-text { color: var(--color-red-600); }\n",
        ".success-text { color: var(--color-green-600); }\n",
        ".card { background: var(--color-white); border-radius: 0.5rem; padding: 1rem; }\n",
        "html.dark .card { background: var(--color-gray-800); }\n",
    ));
    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::default_admin_settings;

    #[test]
    fn test_css_uses_palette_and_fonts() {
        let theme = default_admin_settings().theme;
        let css = theme_css(&theme);

        assert!(css.contains("--color-primary-600: #2563eb;"));
        assert!(css.contains("--color-accent-600: #0d9488;"));
        assert!(css.contains("font-family: 'Playfair Display', serif;"));
    }

    #[test]
    fn test_font_values_cannot_break_out() {
        let mut theme = default_admin_settings().theme;
        theme.font_family_body = "x; } </style><script>".to_string();
        let css = theme_css(&theme);
        assert!(!css.contains("</style>"));
        assert!(css.contains("font-family: x  /stylescript;"));
    }
}
