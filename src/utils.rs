const MASK: &str = "...";

/// Formats every T as `...`. Used to keep secrets out of [`Debug`] output.
pub fn mask_fmt<T>(_: &T, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    f.write_str(MASK)
}
