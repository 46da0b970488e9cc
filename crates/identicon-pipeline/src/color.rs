//! Color selection: the first three digest bytes become the fill color.

use crate::types::{HashBytes, Rgb};

/// Pick the fill color from the leading digest bytes.
///
/// Bytes 0, 1 and 2 become red, green and blue. The digest itself is
/// untouched; the grid builder still reads all of it.
#[must_use]
pub const fn select_color(hash: &HashBytes) -> Rgb {
    let bytes = hash.as_bytes();
    Rgb::new(bytes[0], bytes[1], bytes[2])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DIGEST_LEN;

    #[test]
    fn color_is_first_three_bytes() {
        let hash = HashBytes::new([
            20, 196, 176, 107, 130, 78, 197, 147, 35, 147, 98, 81, 127, 83, 139, 41,
        ]);
        assert_eq!(select_color(&hash), Rgb::new(20, 196, 176));
    }

    #[test]
    fn trailing_bytes_do_not_affect_color() {
        let mut a = [0u8; DIGEST_LEN];
        let mut b = [0xffu8; DIGEST_LEN];
        a[..3].copy_from_slice(&[9, 8, 7]);
        b[..3].copy_from_slice(&[9, 8, 7]);
        assert_eq!(
            select_color(&HashBytes::new(a)),
            select_color(&HashBytes::new(b)),
        );
    }
}
