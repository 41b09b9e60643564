use std::collections::HashSet;

use crate::product::Product;

/// Identity of a variant: same title, capacity and colour means the same
/// product, whichever page it appeared on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct VariantKey {
    title: String,
    capacity_mb: u64,
    color: String,
}

impl VariantKey {
    fn of(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            capacity_mb: product.capacity_mb,
            color: product.color.clone(),
        }
    }
}

/// Run-wide seen-set over variant identities.
#[derive(Default)]
pub struct SeenProducts {
    keys: HashSet<VariantKey>,
}

impl SeenProducts {
    pub fn new() -> Self {
        Self::default()
    }

    /// True exactly when this variant has not been seen before; the call
    /// records it either way.
    pub fn accept(&mut self, product: &Product) -> bool {
        self.keys.insert(VariantKey::of(product))
    }
}
