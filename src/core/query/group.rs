use std::collections::{BTreeMap, BTreeSet};

/// Fold `(key, value)` pairs into a map of sets. A key only appears once it
/// has received a value, so the result never holds an empty set.
pub fn group_into_sets<K, V, I>(pairs: I) -> BTreeMap<K, BTreeSet<V>>
where
    K: Ord,
    V: Ord,
    I: IntoIterator<Item = (K, V)>,
{
    let mut groups: BTreeMap<K, BTreeSet<V>> = BTreeMap::new();
    for (key, value) in pairs {
        match groups.get_mut(&key) {
            Some(set) => {
                set.insert(value);
            }
            None => {
                groups.insert(key, BTreeSet::from([value]));
            }
        }
    }
    groups
}
