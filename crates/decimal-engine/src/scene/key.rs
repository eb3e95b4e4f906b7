use super::ZIndex;

/// Paint order of a draw item: back-to-front by `z`, then by the order it
/// was pushed. The derived ordering compares fields in declaration order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SortKey {
    pub z: ZIndex,
    pub order: u32,
}

impl SortKey {
    #[inline]
    pub const fn new(z: ZIndex, order: u32) -> Self {
        Self { z, order }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_wins_over_push_order() {
        let early_on_top = SortKey::new(ZIndex(2), 0);
        let late_below = SortKey::new(ZIndex(1), 9);
        assert!(late_below < early_on_top);
        assert!(SortKey::new(ZIndex(1), 3) < SortKey::new(ZIndex(1), 4));
    }
}
