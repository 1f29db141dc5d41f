use proptest::prelude::*;

use super::*;

// Generate arbitrary sequence of manipulations to both a vector and an array
// Apply those manipulations in order, then check that the state of both is the same
// If the state of the resulting is the same AND the invariants of the array hold, we're good
#[derive(Debug, Clone)]
enum Action {
    Add(usize),
    AddRange(Vec<usize>),
    Extend(Vec<usize>),
    Remove(usize),
    Insert(usize, usize),
    Set(usize, usize),
}

impl Action {
    fn act_on_vector(self, mut vec: Vec<usize>) -> Vec<usize> {
        match self {
            Action::Add(value) => {
                vec.push(value);
                vec
            }
            Action::AddRange(mut right) | Action::Extend(mut right) => {
                vec.append(&mut right);
                vec
            }
            Action::Remove(index) => {
                if index < vec.len() {
                    vec.remove(index);
                } else if index == vec.len() {
                    vec.pop();
                }
                vec
            }
            Action::Insert(index, value) => {
                if index <= vec.len() {
                    vec.insert(index, value);
                }
                vec
            }
            Action::Set(index, value) => {
                if let Some(slot) = vec.get_mut(index) {
                    *slot = value;
                }
                vec
            }
        }
    }

    fn act_on_array(self, mut array: GrowableArray<usize>) -> GrowableArray<usize> {
        match self {
            Action::Add(value) => array.add(value),
            Action::AddRange(right) => {
                let was_empty = right.is_empty();
                assert_eq!(array.add_range(right).is_err(), was_empty);
            }
            Action::Extend(right) => array.extend(right),
            Action::Remove(index) => {
                let expected = !array.is_empty() && index <= array.len();
                assert_eq!(array.remove(index), expected);
            }
            Action::Insert(index, value) => {
                let expected = index <= array.len();
                assert_eq!(array.insert(index, value).is_ok(), expected);
            }
            Action::Set(index, value) => {
                if index < array.len() {
                    array.set(index, value).unwrap();
                }
            }
        }
        array
    }
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        any::<usize>().prop_map(Action::Add),
        prop::collection::vec(0..100usize, 0..20).prop_map(Action::AddRange),
        prop::collection::vec(0..100usize, 0..20).prop_map(Action::Extend),
        (0..40usize).prop_map(Action::Remove),
        (0..40usize, any::<usize>()).prop_map(|(index, value)| Action::Insert(index, value)),
        (0..40usize, any::<usize>()).prop_map(|(index, value)| Action::Set(index, value)),
    ]
}

fn actions_strategy() -> impl Strategy<Value = Vec<Action>> {
    prop::collection::vec(action_strategy(), 0..50)
}

fn vec_strategy() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0..10000usize, 0..64)
}

fn doubling_capacity(initial: usize, needed: usize) -> usize {
    let mut capacity = initial;
    while capacity < needed {
        capacity = if capacity == 0 { 1 } else { capacity * 2 };
    }
    capacity
}

proptest! {
    #[test]
    fn actions_match_vec_model(initial in vec_strategy(), actions in actions_strategy()) {
        let mut vec = initial.clone();
        let mut array: GrowableArray<usize> = initial.into();

        for action in actions {
            let capacity = array.capacity();

            vec = action.clone().act_on_vector(vec);
            array = action.act_on_array(array);

            array.assert_invariants();
            array.assert_spare_slots_default();
            prop_assert!(array.capacity() >= capacity, "capacity shrank");
            prop_assert_eq!(array.as_slice(), vec.as_slice());
        }
    }

    #[test]
    fn add_follows_doubling_policy(initial in 0..16usize, count in 0..200usize) {
        let mut array = GrowableArray::with_capacity(initial);
        for value in 0..count {
            array.add(value);
        }

        prop_assert_eq!(array.capacity(), doubling_capacity(initial, count));
        prop_assert!(array.iter().copied().eq(0..count));
    }

    #[test]
    fn add_range_fits_exactly(initial in vec_strategy(), spare in 0..8usize, right in vec_strategy()) {
        prop_assume!(!right.is_empty());

        let mut array = GrowableArray::with_capacity(initial.len() + spare);
        array.extend(initial.iter().copied());
        array.add_range(right.clone()).unwrap();

        let needed = initial.len() + right.len();
        prop_assert_eq!(array.capacity(), (initial.len() + spare).max(needed));
        prop_assert_eq!(array.len(), needed);
        prop_assert!(array.iter().eq(initial.iter().chain(right.iter())));
    }

    #[test]
    fn insert_grows_only_when_full(initial in vec_strategy(), index in 0..64usize, value in any::<usize>()) {
        let index = index.min(initial.len());
        let mut array: GrowableArray<usize> = initial.clone().into();
        array.insert(index, value).unwrap();

        prop_assert_eq!(array.capacity(), initial.len() + 1);
        prop_assert_eq!(array[index], value);
        prop_assert_eq!(&array.as_slice()[..index], &initial[..index]);
        prop_assert_eq!(&array.as_slice()[index + 1..], &initial[index..]);
    }

    #[test]
    fn remove_resets_vacated_slot(initial in vec_strategy(), index in 0..64usize) {
        prop_assume!(!initial.is_empty());

        let index = index.min(initial.len() - 1);
        let mut array: GrowableArray<usize> = initial.clone().into();
        prop_assert!(array.remove(index));

        prop_assert_eq!(array.capacity(), initial.len());
        prop_assert_eq!(array.spare_capacity(), &[0usize][..]);
        prop_assert_eq!(array.len(), initial.len() - 1);
    }

    #[test]
    fn iteration_is_repeatable(initial in vec_strategy()) {
        let array: GrowableArray<usize> = initial.into();
        prop_assert!(array.iter().eq(array.iter()));
        prop_assert_eq!(array.iter().len(), array.len());
    }
}
