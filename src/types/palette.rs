//! The fixed palette of recognized fill colours.
//!
//! Draw operations only accept these nine colours; anything else is
//! rejected with `ColourUnknown` before a single pixel is written.
//! Membership is exact component-wise equality, not a range check.

use super::Colour;

/// The recognized colours, in listing order.
pub const PALETTE: [(&str, Colour); 9] = [
    ("red", Colour::RED),
    ("green", Colour::GREEN),
    ("blue", Colour::BLUE),
    ("yellow", Colour::YELLOW),
    ("orange", Colour::ORANGE),
    ("purple", Colour::PURPLE),
    ("brown", Colour::BROWN),
    ("black", Colour::BLACK),
    ("white", Colour::WHITE),
];

/// Check whether a colour is one of the recognized palette entries.
pub fn is_known(colour: Colour) -> bool {
    PALETTE.iter().any(|&(_, c)| c == colour)
}

/// Look up a palette colour by name.
pub fn lookup(name: &str) -> Option<Colour> {
    PALETTE
        .iter()
        .find(|&&(n, _)| n == name)
        .map(|&(_, c)| c)
}

/// Return the palette name of a colour, if it has one.
pub fn name_of(colour: Colour) -> Option<&'static str> {
    PALETTE
        .iter()
        .find(|&&(_, c)| c == colour)
        .map(|&(n, _)| n)
}

/// Iterate over the palette names in listing order.
pub fn names() -> impl Iterator<Item = &'static str> {
    PALETTE.iter().map(|&(n, _)| n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_entries_known() {
        for (name, colour) in PALETTE {
            assert!(is_known(colour), "{} should be known", name);
        }
    }

    #[test]
    fn test_unknown_colour_rejected() {
        assert!(!is_known(Colour::rgb(102, 102, 102)));
        assert!(!is_known(Colour::rgb(255, 1, 0)));
        assert!(!is_known(Colour::rgb(254, 255, 255)));
    }

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(lookup("red"), Some(Colour::RED));
        assert_eq!(lookup("orange"), Some(Colour::rgb(255, 164, 0)));
        assert_eq!(lookup("brown"), Some(Colour::rgb(165, 42, 42)));
        assert_eq!(lookup("grey"), None);
        // Names are case-sensitive
        assert_eq!(lookup("Red"), None);
    }

    #[test]
    fn test_name_of() {
        assert_eq!(name_of(Colour::PURPLE), Some("purple"));
        assert_eq!(name_of(Colour::rgb(102, 102, 102)), None);
    }

    #[test]
    fn test_names_order() {
        let names: Vec<_> = names().collect();
        assert_eq!(names.len(), 9);
        assert_eq!(names[0], "red");
        assert_eq!(names[8], "white");
    }
}
