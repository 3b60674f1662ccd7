/// Computes the arithmetic mean of a series of values. Returns `None` for
/// empty input.
pub fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        return None;
    }
    Some(sum / count as f64)
}
