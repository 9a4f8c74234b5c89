use crate::{
    error::EmptyList,
    object::{PricedObject, ERR_OUT_OF_STOCK},
    List,
};

/// Aggregate price figures gathered in one pass over a list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceStats {
    /// Highest single-unit price on the list.
    pub max: f64,
    /// Lowest single-unit price on the list.
    pub min: f64,
    /// Arithmetic mean over every node.
    pub avg: f64,
}

/// Computes the maximum, minimum and average single-unit price over a list,
/// front to back in a single pass.
///
/// Out-of-stock objects are not skipped: their price takes part as
/// [`ERR_OUT_OF_STOCK`], so a list holding unsellable stock reports a
/// negative minimum.
///
/// # Errors
/// [`EmptyList`] if the list has no nodes.
pub fn max_min_avg_price(list: &List<&PricedObject<'_>>) -> Result<PriceStats, EmptyList> {
    let mut prices = list
        .iter()
        .map(|obj| obj.price().unwrap_or(ERR_OUT_OF_STOCK));
    let first = prices.next().ok_or(EmptyList)?;

    let (mut max, mut min, mut sum) = (first, first, first);
    let mut count = 1usize;
    for price in prices {
        max = max.max(price);
        min = min.min(price);
        sum += price;
        count += 1;
    }
    Ok(PriceStats {
        max,
        min,
        avg: sum / count as f64,
    })
}

#[cfg(test)]
mod tests {
    use {super::*, crate::list};

    #[test]
    fn figures_over_a_small_shelf() {
        let a = PricedObject::new_static(1, "a", 1.0);
        let b = PricedObject::new_static(1, "b", 5.0);
        let c = PricedObject::new_static(1, "c", 3.0);
        let shelf = list![&a, &b, &c];
        let stats = max_min_avg_price(&shelf).unwrap();
        assert_eq!(stats.max, 5.0);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.avg, 3.0);
    }

    #[test]
    fn single_object_is_its_own_max_min_and_avg() {
        let only = PricedObject::new_dynamic(2, "only", 1.5, 1.0);
        let shelf = list![&only];
        assert_eq!(
            max_min_avg_price(&shelf),
            Ok(PriceStats {
                max: 3.0,
                min: 3.0,
                avg: 3.0,
            })
        );
    }

    #[test]
    fn empty_list_is_an_error() {
        let shelf: List<&PricedObject<'_>> = list![];
        assert_eq!(max_min_avg_price(&shelf), Err(EmptyList));
    }

    #[test]
    fn out_of_stock_takes_part_as_the_sentinel() {
        let a = PricedObject::new_static(1, "a", 2.0);
        let b = PricedObject::new_static(1, "b", 4.0);
        let gone = PricedObject::new_static(0, "gone", 9.0);
        let shelf = list![&a, &b, &gone];
        let stats = max_min_avg_price(&shelf).unwrap();
        assert_eq!(stats.max, 4.0);
        assert_eq!(stats.min, ERR_OUT_OF_STOCK);
        assert_eq!(stats.avg, (2.0 + 4.0 + ERR_OUT_OF_STOCK) / 3.0);
    }
}
