//! 32-bit pixel channel reordering.
//!
//! The renderer and the engine disagree on channel order at two stages.
//! Incoming bytes get [`inbound_word`] as soon as they are copied out of the
//! callback, and the finished bitmap gets [`swap_alpha`] before it is handed
//! to the caller. Words are read and written little-endian, which is the
//! byte order the renderer platform hands over.
//!
//! The two transforms are mutual inverses, so a buffer that passes through
//! both stages comes out byte-identical to what the renderer produced.

/// Reorder one pixel read as bytes `B0 B1 B2 B3` into
/// `B0 << 24 | B3 << 16 | B2 << 8 | B1`.
#[inline]
pub fn inbound_word(bytes: [u8; 4]) -> u32 {
    let [b0, b1, b2, b3] = bytes;
    (b0 as u32) << 24 | (b3 as u32) << 16 | (b2 as u32) << 8 | b1 as u32
}

/// ARGB -> RGBA: move the alpha byte from the top of the word to the bottom.
#[inline]
pub fn swap_alpha(value: u32) -> u32 {
    ((value << 8) & 0xffff_ff00) | ((value >> 24) & 0x0000_00ff)
}

/// Apply [`inbound_word`] to every pixel of `buffer` in place.
///
/// Trailing bytes that do not form a whole pixel are left untouched.
pub fn convert_inbound(buffer: &mut [u8]) {
    for pixel in buffer.chunks_exact_mut(4) {
        let word = inbound_word([pixel[0], pixel[1], pixel[2], pixel[3]]);
        pixel.copy_from_slice(&word.to_le_bytes());
    }
}

/// Apply [`swap_alpha`] to every pixel of `buffer` in place.
pub fn swap_alpha_channel(buffer: &mut [u8]) {
    for pixel in buffer.chunks_exact_mut(4) {
        let word = u32::from_le_bytes([pixel[0], pixel[1], pixel[2], pixel[3]]);
        pixel.copy_from_slice(&swap_alpha(word).to_le_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_alpha_bit_pattern() {
        assert_eq!(swap_alpha(0x1234_5678), 0x3456_7812);
        assert_eq!(swap_alpha(0xff00_0000), 0x0000_00ff);
    }

    #[test]
    fn test_inbound_word_bit_pattern() {
        assert_eq!(inbound_word([0x12, 0x34, 0x56, 0x78]), 0x1278_5634);
        assert_eq!(inbound_word([0xff, 0x00, 0x00, 0x00]), 0xff00_0000);
    }

    #[test]
    fn test_high_bytes_do_not_sign_extend() {
        assert_eq!(inbound_word([0x80, 0x90, 0xa0, 0xb0]), 0x80b0_a090);
    }

    #[test]
    fn test_inbound_then_swap_restores_bytes() {
        let original: Vec<u8> = vec![
            0x12, 0x34, 0x56, 0x78, //
            0xff, 0x00, 0x80, 0x7f, //
            0x01, 0xfe, 0xaa, 0x55, //
        ];
        let mut buffer = original.clone();
        convert_inbound(&mut buffer);
        assert_ne!(buffer, original);
        swap_alpha_channel(&mut buffer);
        assert_eq!(buffer, original);
    }

    #[test]
    fn test_swap_then_inbound_restores_bytes() {
        let original: Vec<u8> = (0u8..32).map(|i| i.wrapping_mul(37)).collect();
        let mut buffer = original.clone();
        swap_alpha_channel(&mut buffer);
        convert_inbound(&mut buffer);
        assert_eq!(buffer, original);
    }

    #[test]
    fn test_zero_is_fixed_point() {
        let mut buffer = vec![0u8; 16];
        convert_inbound(&mut buffer);
        assert!(buffer.iter().all(|&b| b == 0));
        swap_alpha_channel(&mut buffer);
        assert!(buffer.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_swap_alpha_channel_layout() {
        // 0x12345678 stored little-endian becomes 0x34567812 stored little-endian.
        let mut buffer = 0x1234_5678u32.to_le_bytes().to_vec();
        swap_alpha_channel(&mut buffer);
        assert_eq!(u32::from_le_bytes(buffer.try_into().unwrap()), 0x3456_7812);
    }
}
