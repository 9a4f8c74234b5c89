use {crate::error::OutOfStock, either::Either, std::iter};

/// Multiplier applied to every unit after the first in a bulk purchase.
///
/// Exactly representable in binary floating point, so the bulk totals in
/// the tests below are bit-exact.
pub const BULK_DISCOUNT: f64 = 0.75;

/// Numeric stand-in for the price of an object with nothing left to sell.
///
/// [`PricedObject::price`] reports out of stock as a proper error; this
/// constant is what the error maps to where prices deliberately stay plain
/// numbers: ordering by price and the aggregate statistics. Negative, so
/// unsellable stock sorts ahead of every real price.
pub const ERR_OUT_OF_STOCK: f64 = -1.0;

/// A stock item: a quantity on hand, a display name and a pricing rule.
///
/// The pricing rules form a closed set of variants dispatched statically;
/// a new way of pricing is a new variant, not a table patched at run time.
/// The name is borrowed for `'life`: an object never outlives the string
/// it displays, and copying an object never copies the string.
#[derive(Debug, Clone, Copy)]
pub enum PricedObject<'life> {
    /// Unit price fixed no matter the remaining quantity.
    Static {
        quantity: u32,
        name: &'life str,
        price: f64,
    },
    /// Unit price follows the remaining quantity: `base * quantity ^ factor`.
    Dynamic {
        quantity: u32,
        name: &'life str,
        base: f64,
        factor: f64,
    },
}

impl<'life> PricedObject<'life> {
    /// Creates a fixed-price object.
    pub fn new_static(quantity: u32, name: &'life str, price: f64) -> Self {
        Self::Static {
            quantity,
            name,
            price,
        }
    }

    /// Creates a quantity-scaled object priced `base * quantity ^ factor`.
    pub fn new_dynamic(quantity: u32, name: &'life str, base: f64, factor: f64) -> Self {
        Self::Dynamic {
            quantity,
            name,
            base,
            factor,
        }
    }

    /// Gets the number of units on hand.
    pub fn quantity(&self) -> u32 {
        match *self {
            Self::Static { quantity, .. } | Self::Dynamic { quantity, .. } => quantity,
        }
    }

    /// Gets the display name.
    pub fn name(&self) -> &'life str {
        match *self {
            Self::Static { name, .. } | Self::Dynamic { name, .. } => name,
        }
    }

    /// Computes the price of one unit at the current quantity.
    ///
    /// # Errors
    /// [`OutOfStock`] if the quantity is zero.
    pub fn price(&self) -> Result<f64, OutOfStock> {
        match *self {
            Self::Static { quantity: 0, .. } | Self::Dynamic { quantity: 0, .. } => Err(OutOfStock),
            Self::Static { price, .. } => Ok(price),
            Self::Dynamic {
                quantity,
                base,
                factor,
                ..
            } => Ok(base * f64::from(quantity).powf(factor)),
        }
    }

    /// Computes the total price of buying `n` units in one go: the first
    /// unit at full price, every further unit multiplied by
    /// [`BULK_DISCOUNT`].
    ///
    /// A [`Dynamic`](Self::Dynamic) object reprices each unit as if the
    /// ones before it had already been sold, so unit `k` is priced with
    /// `quantity - k + 1` units remaining. The countdown runs on a local
    /// counter; the object itself is never written to.
    ///
    /// # Errors
    /// [`OutOfStock`] if `n` exceeds the quantity on hand. Buying `n == 0`
    /// units costs `0.0`, even out of stock.
    pub fn bulk_price(&self, n: u32) -> Result<f64, OutOfStock> {
        if n > self.quantity() {
            return Err(OutOfStock);
        }
        let total = self
            .unit_prices(n)
            .enumerate()
            .map(|(unit, price)| {
                if unit == 0 {
                    price
                } else {
                    price * BULK_DISCOUNT
                }
            })
            .sum();
        Ok(total)
    }

    /// Full (undiscounted) price of each of the first `n` units, sold one
    /// after another. Callers must make sure `n <= quantity`.
    fn unit_prices(&self, n: u32) -> impl Iterator<Item = f64> {
        match *self {
            Self::Static { price, .. } => Either::Left(iter::repeat(price).take(n as usize)),
            Self::Dynamic {
                quantity,
                base,
                factor,
                ..
            } => Either::Right((0..n).map(move |sold| base * f64::from(quantity - sold).powf(factor))),
        }
    }
}
