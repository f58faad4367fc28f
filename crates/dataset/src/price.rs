//! Price sanitation.

/// Treat placeholder prices as missing.
///
/// Sellers often enter a repeated digit (`1111111`, `0`) instead of a real
/// price. A price whose integer part, written out in full, is a single
/// repeated character becomes `None`; missing and non-finite prices stay
/// `None`. Prices outside the `i64` range are judged on their exact digits.
pub fn sanitize_price(price: Option<f64>) -> Option<f64> {
    let price = price.filter(|p| p.is_finite())?;
    // `+ 0.0` turns -0.0 into 0.0
    let digits = format!("{:.0}", price.trunc() + 0.0);
    let mut chars = digits.chars();
    let first = chars.next()?;
    if chars.all(|c| c == first) {
        None
    } else {
        Some(price)
    }
}
