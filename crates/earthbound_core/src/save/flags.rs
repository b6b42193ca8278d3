//! Event-flag bit packing.
//!
//! Flags are stored eight to a byte in sequence order, bit 0 (least
//! significant) holding the first flag of each group. A trailing partial
//! group zero-fills the unused high bits. The transform knows nothing about
//! what any flag means.

/// Pack an ordered flag sequence into `ceil(len / 8)` bytes.
pub fn pack_event_flags(flags: &[bool]) -> Vec<u8> {
    let mut out = Vec::with_capacity(flags.len().div_ceil(8));
    for group in flags.chunks(8) {
        let mut byte = 0u8;
        for (bit_position, &flag) in group.iter().enumerate() {
            byte += (flag as u8) << bit_position;
        }
        out.push(byte);
    }
    out
}

/// Unpack `count` flags from packed bytes, ignoring padding bits beyond
/// `count` in the final byte.
pub fn unpack_event_flags(bytes: &[u8], count: usize) -> Vec<bool> {
    let mut out = Vec::with_capacity(count);
    for index in 0..count {
        let byte = bytes[index / 8];
        out.push((byte >> (index % 8)) & 1 == 1);
    }
    out
}
