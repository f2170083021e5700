//! Decoding of user-input routing codes.
//!
//! Groups labelled `UIN` do not name a physical block themselves; each of
//! their channels points into the `/config/userrout/in` table, whose entries
//! are codes in one flat numbering of every selectable source.

/// Width of each source band in code order.
const BANDS: [(&str, u32); 5] = [
    ("Local", 32),
    ("AES50-A", 48),
    ("AES50-B", 48),
    ("Card In", 32),
    ("Aux In", 6),
];

/// Decodes a user-input code into a source name.
///
/// Codes count up through the bands in order (local, AES50 A, AES50 B,
/// card, aux) and each band restarts its own numbering at 1. The first code
/// after the aux band is the internal talkback mic, everything later is
/// external talkback.
///
/// # Examples
///
/// ```
/// use scenesheet::routing::user_input::decode_user_input;
///
/// assert_eq!(decode_user_input(0), "Off");
/// assert_eq!(decode_user_input(5), "Local 5");
/// assert_eq!(decode_user_input(33), "AES50-A 1");
/// assert_eq!(decode_user_input(167), "Talkback Int");
/// ```
pub fn decode_user_input(code: u32) -> String {
    if code == 0 {
        return "Off".to_string();
    }

    let mut remaining = code;
    for (name, width) in BANDS {
        if remaining <= width {
            return format!("{} {}", name, remaining);
        }
        remaining -= width;
    }

    if remaining == 1 {
        "Talkback Int".to_string()
    } else {
        "Talkback Ext".to_string()
    }
}
