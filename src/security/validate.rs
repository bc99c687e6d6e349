/// Validate an optional text field with a max length (empty is OK).
/// Length is counted in characters, so accented copy is not penalized.
pub fn validate_optional(value: &str, field_name: &str, max_len: usize) -> Option<String> {
    let trimmed = value.trim();
    if !trimmed.is_empty() && trimmed.chars().count() > max_len {
        return Some(format!("{field_name} debe tener como máximo {max_len} caracteres"));
    }
    None
}
