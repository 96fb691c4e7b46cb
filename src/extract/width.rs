/// Force a line to an exact width in characters.
///
/// Longer lines are hard-truncated with no ellipsis; shorter lines are
/// right-padded with spaces. Width is counted in Unicode scalar values,
/// so multi-byte characters count as one.
pub fn fit_width(line: &str, width: usize) -> String {
    let mut fitted: String = line.chars().take(width).collect();
    let count = fitted.chars().count();
    if count < width {
        fitted.extend(std::iter::repeat(' ').take(width - count));
    }
    fitted
}
