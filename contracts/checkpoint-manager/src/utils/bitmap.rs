/// Validators selected by a submission bitmap
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    /// Selected validator indices, ascending
    pub indices: Vec<usize>,
    /// Number of set bits past the end of the committee
    pub ignored: usize,
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// `selected_indices` decodes a byte-packed bitmap against a committee of `committee_size`.
///
/// Bit `i` is bit `i % 8` (LSB first) of byte `i / 8`. A short bitmap leaves the missing
/// high bits unset. Only the bytes covering the committee are walked bit by bit.
pub fn selected_indices(bitmap: &[u8], committee_size: usize) -> Selection {
    let covered = committee_size.div_ceil(8).min(bitmap.len());
    let (head, tail) = bitmap.split_at(covered);

    let mut selection = Selection {
        indices: Vec::with_capacity(committee_size.min(covered * 8)),
        ignored: tail.iter().map(|byte| byte.count_ones() as usize).sum(),
    };
    for (byte_index, byte) in head.iter().enumerate() {
        for bit in 0..8 {
            if byte & (1 << bit) == 0 {
                continue;
            }
            let index = byte_index * 8 + bit;
            if index < committee_size {
                selection.indices.push(index);
            } else {
                selection.ignored += 1;
            }
        }
    }
    selection
}
