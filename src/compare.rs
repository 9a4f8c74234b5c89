use {
    crate::object::{PricedObject, ERR_OUT_OF_STOCK},
    std::cmp::Ordering,
};

/// Orders two objects by single-unit price, cheapest first.
///
/// An object that is out of stock takes part as [`ERR_OUT_OF_STOCK`], so
/// unsellable stock sorts ahead of everything with a real price. Prices are
/// compared with [`f64::total_cmp`], which is a total order.
pub fn compare_by_price(a: &PricedObject<'_>, b: &PricedObject<'_>) -> Ordering {
    let a = a.price().unwrap_or(ERR_OUT_OF_STOCK);
    let b = b.price().unwrap_or(ERR_OUT_OF_STOCK);
    a.total_cmp(&b)
}

/// Orders two objects by quantity on hand, scarcest first.
pub fn compare_by_quantity(a: &PricedObject<'_>, b: &PricedObject<'_>) -> Ordering {
    a.quantity().cmp(&b.quantity())
}
