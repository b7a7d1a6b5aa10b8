//! `Clonable` impls for primitives and std containers.
//!
//! Primitives return a copy of themselves. Containers rebuild themselves by
//! cloning every element (and every key) through `Clonable`, so a deep clone
//! reaches all the way down. Smart pointers allocate a new pointer around a
//! cloned pointee; share the original pointer with `#[clone(strategy = shallow)]`
//! instead.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};
use std::rc::Rc;
use std::sync::Arc;

use crate::Clonable;

macro_rules! impl_copy_clonable {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Clonable for $ty {
                #[inline]
                fn clone(&self) -> Self {
                    *self
                }
            }
        )*
    };
}

impl_copy_clonable!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, bool, char, ()
);

impl Clonable for String {
    fn clone(&self) -> Self {
        self.as_str().to_owned()
    }
}

impl<T: Clonable> Clonable for Option<T> {
    fn clone(&self) -> Self {
        self.as_ref().map(Clonable::clone)
    }
}

impl<T: Clonable> Clonable for Box<T> {
    fn clone(&self) -> Self {
        Box::new(Clonable::clone(&**self))
    }
}

impl<T: Clonable> Clonable for Rc<T> {
    fn clone(&self) -> Self {
        Rc::new(Clonable::clone(&**self))
    }
}

impl<T: Clonable> Clonable for Arc<T> {
    fn clone(&self) -> Self {
        Arc::new(Clonable::clone(&**self))
    }
}

impl<T: Clonable> Clonable for Vec<T> {
    fn clone(&self) -> Self {
        self.iter().map(Clonable::clone).collect()
    }
}

impl<T: Clonable> Clonable for VecDeque<T> {
    fn clone(&self) -> Self {
        self.iter().map(Clonable::clone).collect()
    }
}

impl<T: Clonable, const N: usize> Clonable for [T; N] {
    fn clone(&self) -> Self {
        std::array::from_fn(|i| Clonable::clone(&self[i]))
    }
}

impl<T, S> Clonable for HashSet<T, S>
where
    T: Clonable + Eq + Hash,
    S: BuildHasher + Clone,
{
    fn clone(&self) -> Self {
        let mut out = HashSet::with_capacity_and_hasher(self.len(), Clone::clone(self.hasher()));
        out.extend(self.iter().map(Clonable::clone));
        out
    }
}

impl<T: Clonable + Ord> Clonable for BTreeSet<T> {
    fn clone(&self) -> Self {
        self.iter().map(Clonable::clone).collect()
    }
}

impl<K, V, S> Clonable for HashMap<K, V, S>
where
    K: Clonable + Eq + Hash,
    V: Clonable,
    S: BuildHasher + Clone,
{
    fn clone(&self) -> Self {
        let mut out = HashMap::with_capacity_and_hasher(self.len(), Clone::clone(self.hasher()));
        out.extend(self.iter().map(|(k, v)| (Clonable::clone(k), Clonable::clone(v))));
        out
    }
}

impl<K: Clonable + Ord, V: Clonable> Clonable for BTreeMap<K, V> {
    fn clone(&self) -> Self {
        self.iter().map(|(k, v)| (Clonable::clone(k), Clonable::clone(v))).collect()
    }
}

#[cfg(feature = "indexmap")]
impl<K, V, S> Clonable for indexmap::IndexMap<K, V, S>
where
    K: Clonable + Eq + Hash,
    V: Clonable,
    S: BuildHasher + Clone,
{
    fn clone(&self) -> Self {
        let mut out =
            indexmap::IndexMap::with_capacity_and_hasher(self.len(), Clone::clone(self.hasher()));
        out.extend(self.iter().map(|(k, v)| (Clonable::clone(k), Clonable::clone(v))));
        out
    }
}

#[cfg(feature = "indexmap")]
impl<T, S> Clonable for indexmap::IndexSet<T, S>
where
    T: Clonable + Eq + Hash,
    S: BuildHasher + Clone,
{
    fn clone(&self) -> Self {
        let mut out =
            indexmap::IndexSet::with_capacity_and_hasher(self.len(), Clone::clone(self.hasher()));
        out.extend(self.iter().map(Clonable::clone));
        out
    }
}

macro_rules! impl_tuple_clonable {
    ($($name:ident)+) => {
        impl<$($name: Clonable),+> Clonable for ($($name,)+) {
            #[allow(non_snake_case)]
            fn clone(&self) -> Self {
                let ($($name,)+) = self;
                ($(Clonable::clone($name),)+)
            }
        }
    };
}

impl_tuple_clonable!(A);
impl_tuple_clonable!(A B);
impl_tuple_clonable!(A B C);
impl_tuple_clonable!(A B C D);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitives_return_themselves() {
        assert_eq!(Clonable::clone(&42u32), 42);
        assert_eq!(Clonable::clone(&-7i64), -7);
        assert_eq!(Clonable::clone(&1.5f64), 1.5);
        assert!(Clonable::clone(&true));
        assert_eq!(Clonable::clone(&'x'), 'x');
        assert_eq!(Clonable::clone(&String::from("Xiaoli")), "Xiaoli");
    }

    #[test]
    fn option_propagates_absence() {
        let none: Option<String> = None;
        assert_eq!(Clonable::clone(&none), None);
        assert_eq!(Clonable::clone(&Some(String::from("a"))), Some(String::from("a")));
    }

    #[test]
    fn rc_is_reallocated() {
        let original = Rc::new(String::from("shared"));
        let copy = Clonable::clone(&original);
        assert_eq!(*original, *copy);
        assert!(!Rc::ptr_eq(&original, &copy));
        assert_eq!(Rc::strong_count(&original), 1);
    }

    #[test]
    fn arc_and_box_are_reallocated() {
        let arc = Arc::new(vec![1u8, 2, 3]);
        let arc_copy = Clonable::clone(&arc);
        assert!(!Arc::ptr_eq(&arc, &arc_copy));
        assert_eq!(*arc, *arc_copy);

        let boxed = Box::new(5u16);
        assert_eq!(*Clonable::clone(&boxed), 5);
    }

    #[test]
    fn nested_containers_recurse() {
        let inner = Rc::new(1u32);
        let v = vec![Clone::clone(&inner), Clone::clone(&inner)];
        let copy = Clonable::clone(&v);
        assert_eq!(copy.len(), 2);
        assert!(copy.iter().all(|rc| !Rc::ptr_eq(rc, &inner)));
        assert_eq!(Rc::strong_count(&inner), 3);
    }

    #[test]
    fn maps_and_sets_clone_keys_and_values() {
        let mut map = HashMap::new();
        map.insert(String::from("a"), vec![1i32]);
        map.insert(String::from("b"), vec![2, 3]);
        assert_eq!(Clonable::clone(&map), map);

        let tree: BTreeMap<u8, Option<String>> = [(1, None), (2, Some("x".into()))].into();
        assert_eq!(Clonable::clone(&tree), tree);

        let set: HashSet<i32> = [1, 2, 3].into();
        assert_eq!(Clonable::clone(&set), set);

        let ordered: BTreeSet<char> = ['c', 'a'].into();
        assert_eq!(Clonable::clone(&ordered), ordered);

        let deque: VecDeque<u8> = [3, 2, 1].into();
        assert_eq!(Clonable::clone(&deque), deque);
    }

    #[cfg(feature = "indexmap")]
    #[test]
    fn index_collections_keep_insertion_order() {
        use indexmap::{IndexMap, IndexSet};

        let mut map = IndexMap::new();
        map.insert(String::from("zeta"), Rc::new(26u8));
        map.insert(String::from("alpha"), Rc::new(1u8));
        let copy = Clonable::clone(&map);
        assert_eq!(copy.keys().collect::<Vec<_>>(), ["zeta", "alpha"]);
        assert!(!Rc::ptr_eq(&copy["alpha"], &map["alpha"]));

        let set: IndexSet<char> = ['q', 'b', 'x'].into_iter().collect();
        assert_eq!(Clonable::clone(&set).into_iter().collect::<String>(), "qbx");
    }

    #[test]
    fn arrays_and_tuples() {
        let arr = [String::from("x"), String::from("y")];
        assert_eq!(Clonable::clone(&arr), arr);

        let tuple = (1u8, String::from("two"), Some(3.0f32), 'f');
        assert_eq!(Clonable::clone(&tuple), tuple);
    }
}
