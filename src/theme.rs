pub const FONT: &str = "'Inter', 'Segoe UI', system-ui, sans-serif";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub text_dim: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
    pub danger: &'static str,
    pub success: &'static str,
    pub info: &'static str,
}

pub const LIGHT: Palette = Palette {
    background: "#ffffff",
    surface: "#f3f4f6",
    text: "#111827",
    text_dim: "#4b5563",
    border: "#d1d5db",
    accent: "#2563eb",
    danger: "#dc2626",
    success: "#16a34a",
    info: "#3b82f6",
};

pub const DARK: Palette = Palette {
    background: "#1f2937",
    surface: "#111827",
    text: "#f9fafb",
    text_dim: "#9ca3af",
    border: "#374151",
    accent: "#3b82f6",
    danger: "#ef4444",
    success: "#22c55e",
    info: "#60a5fa",
};

pub fn palette(dark: bool) -> Palette {
    if dark {
        DARK
    } else {
        LIGHT
    }
}

impl Palette {
    pub fn input_style(&self) -> String {
        format!(
            "padding: 8px; border: 1px solid {}; border-radius: 4px; background: {}; color: {}; \
             font-family: inherit; box-sizing: border-box;",
            self.border, self.surface, self.text
        )
    }

    pub fn button_style(&self, color: &str) -> String {
        format!(
            "padding: 6px 14px; border: none; border-radius: 4px; background: {}; color: #ffffff; \
             cursor: pointer; font-family: inherit;",
            color
        )
    }
}
