//! Display-layer helpers for slot-assignment tokens.
//!
//! The engine works in plain integer component indices; the letter alphabet
//! `x, y, z, w` and the bracketed `[i]` spelling for wider attributes are a
//! display concern handled here.

/// Ordered component letters for the first four components.
const COMPONENT_LETTERS: [char; 4] = ['x', 'y', 'z', 'w'];

/// Sentinel token emitted for a collapsed folder UI element.
///
/// A sentinel entry is skipped entirely during mapping resolution and does
/// not consume a destination slot.
pub const FOLDER_SENTINEL: &str = "0";

/// Returns the display label for a component index.
///
/// Components 0..4 map to `x`, `y`, `z`, `w`; wider indices use the
/// bracketed spelling, e.g. `[4]`.
pub fn component_label(index: usize) -> String {
    match COMPONENT_LETTERS.get(index) {
        Some(letter) => letter.to_string(),
        None => format!("[{}]", index),
    }
}

/// Parses a component spelled as a letter or a literal integer index.
pub fn parse_component(text: &str) -> Option<usize> {
    let text = text.trim();
    if text.len() == 1 {
        let letter = text.chars().next()?.to_ascii_lowercase();
        if let Some(index) = COMPONENT_LETTERS.iter().position(|&c| c == letter) {
            return Some(index);
        }
    }
    text.parse().ok()
}

/// Formats a slot-assignment token for an attribute component.
///
/// Components 0..4 use the dotted letter form (`P.x`); wider components use
/// the bracketed form (`weights[4]`).
pub fn slot_token(name: &str, component: usize) -> String {
    if component < COMPONENT_LETTERS.len() {
        format!("{}.{}", name, component_label(component))
    } else {
        format!("{}{}", name, component_label(component))
    }
}

/// Returns true for a well-formed attribute name.
///
/// Names follow the host convention: a letter or underscore followed by
/// letters, digits, or underscores.
pub fn is_valid_attribute_name(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Parses a slot-assignment token into `(attribute_name, component_index)`.
///
/// Accepted forms: `name` (component 0), `name.x` / `name.y` / `name.z` /
/// `name.w`, `name.<int>`, and `name[<int>]`. Returns `None` for blank or
/// malformed tokens; resolution against live attributes happens downstream.
pub fn parse_slot_token(token: &str) -> Option<(&str, usize)> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }

    if let Some(rest) = token.strip_suffix(']') {
        let (name, index) = rest.split_once('[')?;
        if !is_valid_attribute_name(name) {
            return None;
        }
        let component: usize = index.trim().parse().ok()?;
        return Some((name, component));
    }

    if let Some((name, component)) = token.rsplit_once('.') {
        if !is_valid_attribute_name(name) {
            return None;
        }
        return Some((name, parse_component(component)?));
    }

    if !is_valid_attribute_name(token) {
        return None;
    }
    Some((token, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_labels() {
        assert_eq!(component_label(0), "x");
        assert_eq!(component_label(1), "y");
        assert_eq!(component_label(2), "z");
        assert_eq!(component_label(3), "w");
        assert_eq!(component_label(4), "[4]");
        assert_eq!(component_label(11), "[11]");
    }

    #[test]
    fn test_parse_component_letters() {
        assert_eq!(parse_component("x"), Some(0));
        assert_eq!(parse_component("y"), Some(1));
        assert_eq!(parse_component("z"), Some(2));
        assert_eq!(parse_component("w"), Some(3));
        assert_eq!(parse_component("W"), Some(3));
    }

    #[test]
    fn test_parse_component_indices() {
        assert_eq!(parse_component("0"), Some(0));
        assert_eq!(parse_component("7"), Some(7));
        assert_eq!(parse_component("q"), None);
        assert_eq!(parse_component(""), None);
    }

    #[test]
    fn test_slot_token_round_trip() {
        assert_eq!(slot_token("P", 0), "P.x");
        assert_eq!(slot_token("Cd", 3), "Cd.w");
        assert_eq!(slot_token("weights", 5), "weights[5]");

        assert_eq!(parse_slot_token("P.x"), Some(("P", 0)));
        assert_eq!(parse_slot_token("Cd.w"), Some(("Cd", 3)));
        assert_eq!(parse_slot_token("weights[5]"), Some(("weights", 5)));
    }

    #[test]
    fn test_parse_slot_token_bare_name() {
        assert_eq!(parse_slot_token("pscale"), Some(("pscale", 0)));
        assert_eq!(parse_slot_token("  pscale  "), Some(("pscale", 0)));
    }

    #[test]
    fn test_parse_slot_token_integer_component() {
        assert_eq!(parse_slot_token("uv.1"), Some(("uv", 1)));
        assert_eq!(parse_slot_token("big.9"), Some(("big", 9)));
    }

    #[test]
    fn test_parse_slot_token_rejects_malformed() {
        assert_eq!(parse_slot_token(""), None);
        assert_eq!(parse_slot_token("   "), None);
        assert_eq!(parse_slot_token("P."), None);
        assert_eq!(parse_slot_token(".x"), None);
        assert_eq!(parse_slot_token("P.q"), None);
        assert_eq!(parse_slot_token("[3]"), None);
        assert_eq!(parse_slot_token("name[x]"), None);
        assert_eq!(parse_slot_token("@@bad@@"), None);
        assert_eq!(parse_slot_token("3dname.x"), None);
    }

    #[test]
    fn test_attribute_name_validity() {
        assert!(is_valid_attribute_name("P"));
        assert!(is_valid_attribute_name("_rest"));
        assert!(is_valid_attribute_name("uv2"));
        assert!(!is_valid_attribute_name(""));
        assert!(!is_valid_attribute_name("2uv"));
        assert!(!is_valid_attribute_name("a-b"));
    }
}
