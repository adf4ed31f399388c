#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Default,
    Green,
    Blue,
    Amber,
}

impl Theme {
    pub const ALL: [Theme; 4] = [Theme::Default, Theme::Green, Theme::Blue, Theme::Amber];

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Default => "default",
            Theme::Green => "green",
            Theme::Blue => "blue",
            Theme::Amber => "amber",
        }
    }

    /// Tailwind text color class applied to the terminal root.
    pub fn css_class(self) -> &'static str {
        match self {
            Theme::Default => "text-white",
            Theme::Green => "text-green-400",
            Theme::Blue => "text-blue-400",
            Theme::Amber => "text-amber-400",
        }
    }

    pub fn parse(name: &str) -> Option<Theme> {
        let name = name.to_lowercase();
        Theme::ALL.into_iter().find(|t| t.as_str() == name)
    }

    pub fn names() -> String {
        Theme::ALL
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_only_known_themes() {
        assert_eq!(Theme::parse("green"), Some(Theme::Green));
        assert_eq!(Theme::parse("AMBER"), Some(Theme::Amber));
        assert_eq!(Theme::parse("purple"), None);
        assert_eq!(Theme::parse(""), None);
        assert_eq!(Theme::names(), "default, green, blue, amber");
        assert_eq!(Theme::default().css_class(), "text-white");
    }
}
