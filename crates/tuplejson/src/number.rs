//! Finite float rendering in shortest round-trip form.

/// Appends the shortest decimal literal that parses back to `value`.
/// Non-finite values are routed to their string form before this point.
pub(crate) fn write_f64(out: &mut String, value: f64) {
    debug_assert!(value.is_finite(), "write_f64 called with non-finite value");
    let mut buf = ryu::Buffer::new();
    out.push_str(buf.format_finite(value));
}

pub(crate) fn write_f32(out: &mut String, value: f32) {
    debug_assert!(value.is_finite(), "write_f32 called with non-finite value");
    let mut buf = ryu::Buffer::new();
    out.push_str(buf.format_finite(value));
}
