use {crate::List, std::cmp::Ordering};

/// Merges `src` into `dst`, keeping `dst` sorted. `src` is drained and left
/// empty, ready for reuse.
///
/// Both lists must already be sorted under `compare` (`Ordering::Less`
/// first). The merge is one forward pass over each list and moves nodes by
/// relinking them; no value is cloned or dropped. An element of `src` that
/// compares equal to one of `dst` lands next to it, with no promise made
/// about which side.
pub fn merge<T, F>(dst: &mut List<T>, src: &mut List<T>, mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut resident = dst.cursor();
    let mut incoming = src.cursor();
    while !incoming.at_end() {
        let insert_here = match (incoming.peek(), resident.peek()) {
            (Some(new), Some(old)) => compare(new, old) != Ordering::Greater,
            // `dst` is exhausted; whatever remains of `src` appends in order.
            _ => true,
        };
        if insert_here {
            if let Some(node) = incoming.remove() {
                resident.insert_before(node);
            }
        } else {
            resident.advance();
        }
    }
}

/// Unlinks the first `len / 2` nodes of `list` and returns them as a new
/// list, preserving their order.
///
/// A list of zero or one elements loses nothing.
pub fn split<T>(list: &mut List<T>) -> List<T> {
    let half = list.len() / 2;
    let mut front = List::new();
    let mut take = list.cursor();
    let mut put = front.cursor();
    for _ in 0..half {
        if let Some(node) = take.remove() {
            put.insert_before(node);
        }
    }
    front
}

/// Sorts `list` under `compare` with a recursive merge sort.
///
/// Nodes are relinked, never copied, so sorting a `List<&T>` reorders
/// references without touching what they point at. The sort is not stable:
/// elements that compare equal can come out in either order.
pub fn merge_sort<T, F>(list: &mut List<T>, mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort(list, &mut compare);
}

// Recursion body. Taking `&mut F` keeps every level at the same
// monomorphization instead of nesting `&mut &mut F` types without bound.
fn sort<T, F>(list: &mut List<T>, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    // Base case. A list of zero or one elements is sorted, by definition.
    if list.len() <= 1 {
        return;
    }

    // Recursive case. Divide the list into two halves, sort each, then
    // merge the front half back in.
    let mut front = split(list);
    sort(list, compare);
    sort(&mut front, compare);
    merge(list, &mut front, compare);
}
