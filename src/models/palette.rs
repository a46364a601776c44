//! Fixed color palette used by the theme settings.

use serde::{Deserialize, Serialize};

/// Shade steps available for every palette color.
pub const SHADES: [u16; 10] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900];

/// A named palette color. Serialized as its lowercase name (`"blue"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteColor {
    Blue,
    Indigo,
    Purple,
    Pink,
    Red,
    Orange,
    Yellow,
    Green,
    Teal,
    Cyan,
    Gray,
}

impl PaletteColor {
    /// Colors offered for the primary and accent theme slots.
    pub const THEME_CHOICES: [PaletteColor; 10] = [
        PaletteColor::Blue,
        PaletteColor::Indigo,
        PaletteColor::Purple,
        PaletteColor::Pink,
        PaletteColor::Red,
        PaletteColor::Orange,
        PaletteColor::Yellow,
        PaletteColor::Green,
        PaletteColor::Teal,
        PaletteColor::Cyan,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaletteColor::Blue => "blue",
            PaletteColor::Indigo => "indigo",
            PaletteColor::Purple => "purple",
            PaletteColor::Pink => "pink",
            PaletteColor::Red => "red",
            PaletteColor::Orange => "orange",
            PaletteColor::Yellow => "yellow",
            PaletteColor::Green => "green",
            PaletteColor::Teal => "teal",
            PaletteColor::Cyan => "cyan",
            PaletteColor::Gray => "gray",
        }
    }

    /// Display label, e.g. `Blue`.
    pub fn label(&self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
            None => String::new(),
        }
    }

    /// Hex values for shades 50 through 900, in [`SHADES`] order.
    fn hexes(&self) -> [&'static str; 10] {
        match self {
            PaletteColor::Blue => [
                "#eff6ff", "#dbeafe", "#bfdbfe", "#93c5fd", "#60a5fa", "#3b82f6", "#2563eb",
                "#1d4ed8", "#1e40af", "#1e3a8a",
            ],
            PaletteColor::Indigo => [
                "#eef2ff", "#e0e7ff", "#c7d2fe", "#a5b4fc", "#818cf8", "#6366f1", "#4f46e5",
                "#4338ca", "#3730a3", "#312e81",
            ],
            PaletteColor::Purple => [
                "#f5f3ff", "#ede9fe", "#ddd6fe", "#c4b5fd", "#a78bfa", "#8b5cf6", "#7c3aed",
                "#6d28d9", "#5b21b6", "#4c1d95",
            ],
            PaletteColor::Pink => [
                "#fdf2f8", "#fce7f3", "#fbcfe8", "#f9a8d4", "#f472b6", "#ec4899", "#db2777",
                "#be185d", "#9d174d", "#831843",
            ],
            PaletteColor::Red => [
                "#fef2f2", "#fee2e2", "#fecaca", "#fca5a5", "#f87171", "#ef4444", "#dc2626",
                "#b91c1c", "#991b1b", "#7f1d1d",
            ],
            PaletteColor::Orange => [
                "#fff7ed", "#ffedd5", "#fed7aa", "#fdba74", "#fb923c", "#f97316", "#ea580c",
                "#c2410c", "#9a3412", "#7c2d12",
            ],
            PaletteColor::Yellow => [
                "#fffbeb", "#fef3c7", "#fde68a", "#fcd34d", "#fbbf24", "#f59e0b", "#d97706",
                "#b45309", "#92400e", "#78350f",
            ],
            PaletteColor::Green => [
                "#f0fdf4", "#dcfce7", "#bbf7d0", "#86efad", "#4ade80", "#22c55e", "#16a34a",
                "#15803d", "#166534", "#14532d",
            ],
            PaletteColor::Teal => [
                "#f0fdfa", "#ccfbf1", "#99f6e4", "#5eead4", "#2dd4bf", "#14b8a6", "#0d9488",
                "#0f766e", "#115e59", "#134e4a",
            ],
            PaletteColor::Cyan => [
                "#ecfeff", "#cffafe", "#a5f3fc", "#67e8f9", "#22d3ee", "#06b6d4", "#0891b2",
                "#0e7490", "#155e75", "#164e63",
            ],
            PaletteColor::Gray => [
                "#f9fafb", "#f3f4f6", "#e5e7eb", "#d1d5db", "#9ca3af", "#6b7280", "#4b5563",
                "#374151", "#1f2937", "#111827",
            ],
        }
    }

    /// Hex value of `shade`, or black for shades outside the palette.
    pub fn hex(&self, shade: u16) -> &'static str {
        SHADES
            .iter()
            .position(|s| *s == shade)
            .map(|index| self.hexes()[index])
            .unwrap_or("#000000")
    }
}

impl std::fmt::Display for PaletteColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
