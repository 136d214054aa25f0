use regex::Regex;

pub fn matches_pattern(value: &str, pattern: &Regex) -> bool {
    pattern.is_match(value)
}
