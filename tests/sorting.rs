use {
    pricelist::{
        compare_by_price, compare_by_quantity, list, max_min_avg_price, merge, merge_sort, split,
        List, PricedObject, BULK_DISCOUNT, ERR_OUT_OF_STOCK,
    },
    rand::{rngs::SmallRng, Rng, SeedableRng},
};

fn random_list(rng: &mut SmallRng, len: usize) -> List<u32> {
    (0..len).map(|_| rng.gen_range(0..1_000)).collect()
}

#[test]
fn merge_sort_matches_the_vec_oracle() {
    let mut rng = SmallRng::seed_from_u64(12345);
    for len in [0, 1, 2, 3, 10, 64, 257] {
        let mut list = random_list(&mut rng, len);
        let mut expected: Vec<u32> = list.iter().copied().collect();
        expected.sort_unstable();

        merge_sort(&mut list, Ord::cmp);
        assert_eq!(list.len(), len);
        assert_eq!(list.into_iter().collect::<Vec<u32>>(), expected);
    }
}

#[test]
fn merge_empties_the_source_and_keeps_every_node() {
    let mut rng = SmallRng::seed_from_u64(99999);
    for (la, lb) in [(0, 5), (5, 0), (7, 7), (33, 20)] {
        let mut a = random_list(&mut rng, la);
        let mut b = random_list(&mut rng, lb);
        merge_sort(&mut a, Ord::cmp);
        merge_sort(&mut b, Ord::cmp);

        let mut expected: Vec<u32> = a.iter().chain(b.iter()).copied().collect();
        expected.sort_unstable();

        merge(&mut a, &mut b, Ord::cmp);
        assert!(b.is_empty());
        assert_eq!(a.len(), la + lb);
        // Merging from the drained list again changes nothing.
        merge(&mut a, &mut b, Ord::cmp);
        assert_eq!(a.into_iter().collect::<Vec<u32>>(), expected);
    }
}

#[test]
fn split_then_merge_round_trips() {
    let mut rng = SmallRng::seed_from_u64(7);
    for len in [0, 1, 2, 9, 50] {
        let mut list = random_list(&mut rng, len);
        merge_sort(&mut list, Ord::cmp);
        let expected: Vec<u32> = list.iter().copied().collect();

        let mut front = split(&mut list);
        assert_eq!(front.len(), len / 2);
        assert_eq!(list.len(), len - len / 2);
        merge(&mut list, &mut front, Ord::cmp);
        assert_eq!(list.into_iter().collect::<Vec<u32>>(), expected);
    }
}

#[test]
fn a_shelf_of_objects_sorts_prices_and_aggregates() {
    let inventory = [
        PricedObject::new_static(5, "apple", 10.0),
        PricedObject::new_dynamic(3, "pear", 2.0, 1.0),
        PricedObject::new_static(0, "melon", 25.0),
        PricedObject::new_dynamic(4, "fig", 1.0, 2.0),
        PricedObject::new_static(8, "plum", 4.5),
    ];
    let mut shelf: List<&PricedObject<'_>> = inventory.iter().collect();

    // Cheapest first; the out-of-stock melon sorts in as the sentinel.
    merge_sort(&mut shelf, |a, b| compare_by_price(a, b));
    let names: Vec<&str> = shelf.iter().map(|obj| obj.name()).collect();
    assert_eq!(names, &["melon", "plum", "pear", "apple", "fig"]);

    // Scarcest first.
    merge_sort(&mut shelf, |a, b| compare_by_quantity(a, b));
    let quantities: Vec<u32> = shelf.iter().map(|obj| obj.quantity()).collect();
    assert_eq!(quantities, &[0, 3, 4, 5, 8]);
    assert_eq!(shelf.len(), inventory.len());

    let stats = max_min_avg_price(&shelf).unwrap();
    assert_eq!(stats.max, 16.0);
    assert_eq!(stats.min, ERR_OUT_OF_STOCK);
    assert_eq!(stats.avg, (-1.0 + 6.0 + 16.0 + 10.0 + 4.5) / 5.0);

    let total_units = shelf.fold(0u32, |obj, acc| acc + obj.quantity());
    assert_eq!(total_units, 20);

    // Bulk pricing reads the shelf without disturbing it.
    let apple = shelf.iter().find(|obj| obj.name() == "apple").unwrap();
    assert_eq!(apple.bulk_price(3), Ok(10.0 + 2.0 * 10.0 * BULK_DISCOUNT));
    assert_eq!(shelf.len(), inventory.len());
}

#[test]
fn an_empty_shelf_has_no_statistics() {
    let shelf: List<&PricedObject<'_>> = list![];
    assert!(max_min_avg_price(&shelf).is_err());
}
