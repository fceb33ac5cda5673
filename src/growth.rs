/// Rounds `requested` up to the nearest power of two.
///
/// Smears the highest set bit of `requested - 1` into every lower bit and adds one.
/// A request of 0 stays 0, meaning no growth is needed.
///
/// Returns `None` when the result does not fit in `usize`.
pub(crate) fn next_capacity(requested: usize) -> Option<usize> {
    if requested == 0 {
        return Some(0);
    }

    let mut sz = requested - 1;
    sz |= sz >> 1;
    sz |= sz >> 2;
    sz |= sz >> 4;
    sz |= sz >> 8;
    #[cfg(not(target_pointer_width = "16"))]
    {
        sz |= sz >> 16;
    }
    #[cfg(target_pointer_width = "64")]
    {
        sz |= sz >> 32;
    }

    sz.checked_add(1)
}
