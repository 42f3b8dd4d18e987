//! Mascot substitution for joke text.

/// Mascot used when the caller does not pick one.
pub const DEFAULT_MASCOT: &str = "Meow Norris";

/// Mascot served by the dedicated `/jokes/woof` routes.
pub const WOOF_MASCOT: &str = "Woof Norris";

const TITLE_CASE: &str = "Chuck Norris";
const LOWER_CASE: &str = "chuck norris";
const UPPER_CASE: &str = "CHUCK NORRIS";

/// Replace the three literal casings of "Chuck Norris" with `mascot`.
///
/// Each casing maps to the matching casing of the mascot name. Mixed casings
/// such as "Chuck norris" are left as they are.
pub fn transform(text: &str, mascot: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    text.replace(TITLE_CASE, mascot)
        .replace(LOWER_CASE, &mascot.to_lowercase())
        .replace(UPPER_CASE, &mascot.to_uppercase())
}
