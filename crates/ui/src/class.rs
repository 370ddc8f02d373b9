/// Joins the non-empty class fragments with single spaces.
///
/// ```
/// # use folio_ui::cn;
/// let open = false;
/// assert_eq!(cn(["w-6 h-0.5", if open { "opacity-0" } else { "" }]), "w-6 h-0.5");
/// ```
pub fn cn<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    let mut out = String::new();
    for part in parts.into_iter().map(str::trim).filter(|p| !p.is_empty()) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(part);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::cn;

    #[test]
    fn skips_blank_fragments() {
        assert_eq!(cn(["a", "", "  ", " b "]), "a b");
        assert_eq!(cn([]), "");
    }
}
