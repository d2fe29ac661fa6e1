//! PAN-OS tag palette codes to display names.
//!
//! The device stores tag colors as palette indices (`color1` .. `color42`);
//! the parameter sheets show the human name. `color18` is not assigned by
//! the platform and is intentionally absent.

const TAG_COLORS: &[(&str, &str)] = &[
    ("color1", "Red"),
    ("color2", "Green"),
    ("color3", "Blue"),
    ("color4", "Yellow"),
    ("color5", "Copper"),
    ("color6", "Orange"),
    ("color7", "Purple"),
    ("color8", "Gray"),
    ("color9", "Light Green"),
    ("color10", "Cyan"),
    ("color11", "Light Gray"),
    ("color12", "Blue Gray"),
    ("color13", "Lime"),
    ("color14", "Black"),
    ("color15", "Gold"),
    ("color16", "Brown"),
    ("color17", "Olive"),
    ("color19", "Maroon"),
    ("color20", "Red-Orange"),
    ("color21", "Yellow-Orange"),
    ("color22", "Forest Green"),
    ("color23", "Turquoise Blue"),
    ("color24", "Azure Blue"),
    ("color25", "Cerulean Blue"),
    ("color26", "Midnight Blue"),
    ("color27", "Medium Blue"),
    ("color28", "Cobalt Blue"),
    ("color29", "Violet Blue"),
    ("color30", "Blue Violet"),
    ("color31", "Medium Violet"),
    ("color32", "Medium Rose"),
    ("color33", "Lavender"),
    ("color34", "Orchid"),
    ("color35", "Thistle"),
    ("color36", "Peach"),
    ("color37", "Salmon"),
    ("color38", "Magenta"),
    ("color39", "Red Violet"),
    ("color40", "Mahogany"),
    ("color41", "Burnt Sienna"),
    ("color42", "Chestnut"),
];

/// Translate a palette code to its display name; unmapped codes pass through.
pub fn color_name(code: &str) -> &str {
    TAG_COLORS
        .iter()
        .find(|(key, _)| *key == code)
        .map(|(_, name)| *name)
        .unwrap_or(code)
}

#[cfg(test)]
mod tests {
    use super::color_name;

    #[test]
    fn known_codes_translate() {
        assert_eq!(color_name("color1"), "Red");
        assert_eq!(color_name("color13"), "Lime");
        assert_eq!(color_name("color42"), "Chestnut");
    }

    #[test]
    fn unknown_codes_pass_through() {
        assert_eq!(color_name("color18"), "color18");
        assert_eq!(color_name("magenta-ish"), "magenta-ish");
        assert_eq!(color_name(""), "");
    }
}
