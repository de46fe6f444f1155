/// Index one step forward from `index`, wrapping from the last position back
/// to 0. Returns [`None`] for an empty sequence.
#[inline]
pub(crate) fn step_forward(index: usize, len: usize) -> Option<usize> {
    if len == 0 {
        None
    } else if index == len - 1 {
        Some(0)
    } else {
        // An index past the end (the sequence shrank since the last read)
        // still just increments; the next read resets it.
        Some(index.saturating_add(1))
    }
}

/// Index one step backward from `index`, wrapping from 0 to the last
/// position. Returns [`None`] for an empty sequence.
#[inline]
pub(crate) fn step_backward(index: usize, len: usize) -> Option<usize> {
    if len == 0 {
        None
    } else if index == 0 {
        Some(len - 1)
    } else {
        Some(index - 1)
    }
}

/// Offsets an in-bounds `index` by `offset` steps in either direction,
/// wrapping around `len` as many times as needed.
#[inline]
pub(crate) fn mod_cycle_offset(index: usize, len: usize, offset: usize, forward: bool) -> Option<usize> {
    debug_assert!((len > 0 && index < len) || len == 0);

    // An empty sequence can never have a valid index.
    if len == 0 {
        return None;
    }

    // NOTE: Reducing the offset first avoids overflow in `(a + b) % n`.
    let mod_offset = offset % len;

    if mod_offset == 0 {
        return Some(index);
    }

    let b = if forward {
        mod_offset
    } else {
        // Stepping `n` backward is stepping `len - n` forward.
        len - mod_offset
    };

    let z = len - index;

    let d = if b >= z { b - z } else { index + b };
    debug_assert!(d < len);

    Some(d)
}
