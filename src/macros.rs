// Code coverage doesn't pick up doc tests, duplicate these down here
// just to make sure no obvious regressions happen.
//
// `$make` builds the element for a given seed, so the same suite runs over
// `Copy` and heap-owning element types.
#[cfg(test)]
macro_rules! public_api_tests {
    ($elem:ty, $make:expr) => {
        use crate::array::GrowableArray;

        fn item(seed: usize) -> $elem {
            ($make)(seed)
        }

        fn items(seeds: std::ops::Range<usize>) -> Vec<$elem> {
            seeds.map(item).collect()
        }

        #[test]
        fn len() {
            let array: GrowableArray<$elem> = items(0..10).into();
            assert_eq!(array.len(), 10);
        }

        #[test]
        fn is_empty() {
            let mut array: GrowableArray<$elem> = GrowableArray::new();
            assert!(array.is_empty());
            array.add(item(0));
            assert!(!array.is_empty());
        }

        #[test]
        fn first_and_last() {
            let array: GrowableArray<$elem> = items(0..5).into();
            assert_eq!(array.first(), Some(&item(0)));
            assert_eq!(array.last(), Some(&item(4)));

            let empty: GrowableArray<$elem> = GrowableArray::new();
            assert!(empty.first().is_none());
            assert!(empty.last().is_none());
        }

        #[test]
        fn add() {
            let mut array = GrowableArray::with_capacity(0);
            for seed in 0..20 {
                array.add(item(seed));
            }
            assert_eq!(array, items(0..20));
            assert_eq!(array.capacity(), 32);
        }

        #[test]
        fn add_range() {
            let mut array: GrowableArray<$elem> = items(0..3).into();
            array.add_range(items(3..6)).unwrap();
            assert_eq!(array, items(0..6));
            assert_eq!(array.capacity(), 6);
        }

        #[test]
        fn remove() {
            let mut array: GrowableArray<$elem> = items(0..5).into();
            assert!(array.remove(0));
            assert!(array.remove(2));
            assert_eq!(array, vec![item(1), item(2), item(4)]);
            assert_eq!(array.capacity(), 5);
        }

        #[test]
        fn insert() {
            let mut array: GrowableArray<$elem> = items(0..3).into();
            array.insert(0, item(100)).unwrap();
            array.insert(4, item(200)).unwrap();
            assert_eq!(
                array,
                vec![item(100), item(0), item(1), item(2), item(200)]
            );
        }

        #[test]
        fn get() {
            let array: GrowableArray<$elem> = items(0..5).into();
            assert_eq!(array.get(3), Ok(&item(3)));
            assert!(array.get(1000).is_err());
        }

        #[test]
        fn set() {
            let mut array: GrowableArray<$elem> = items(0..5).into();
            assert_eq!(array.set(2, item(9)), Ok(item(2)));
            assert_eq!(array[2], item(9));
        }

        #[test]
        fn as_mut_slice() {
            let mut array: GrowableArray<$elem> = items(0..3).into();
            array.add(item(3));
            array.as_mut_slice().swap(0, 3);
            assert_eq!(array.as_mut_slice().len(), 4);
            assert_eq!(array, vec![item(3), item(1), item(2), item(0)]);
        }

        #[test]
        fn as_ref() {
            let array: GrowableArray<$elem> = items(0..3).into();
            let slice: &[$elem] = array.as_ref();
            assert_eq!(slice, items(0..3).as_slice());
        }

        #[test]
        fn iter() {
            let array: GrowableArray<$elem> = items(0..5).into();
            assert_eq!(array.iter().cloned().collect::<Vec<_>>(), items(0..5));
            assert_eq!(array.iter().rev().next(), Some(&item(4)));
        }

        #[test]
        fn extend() {
            let mut array: GrowableArray<$elem> = items(0..3).into();
            array.extend(items(3..6));
            assert_eq!(array, items(0..6));
            assert_eq!(array.capacity(), 6);
        }

        #[test]
        fn equality() {
            let left: GrowableArray<$elem> = items(0..4).into();
            let right: GrowableArray<$elem> = items(0..4).into_iter().collect();
            assert_eq!(left, right);
            assert_eq!(left, items(0..4).as_slice());
        }
    };
}

macro_rules! impl_iter {
    () => {
        #[inline(always)]
        fn next(&mut self) -> Option<Self::Item> {
            self.0.next()
        }

        #[inline(always)]
        fn size_hint(&self) -> (usize, Option<usize>) {
            self.0.size_hint()
        }

        #[inline(always)]
        fn fold<B, F>(self, init: B, f: F) -> B
        where
            Self: Sized,
            F: FnMut(B, Self::Item) -> B,
        {
            self.0.fold(init, f)
        }
    };
}
