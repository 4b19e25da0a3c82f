//! Property tests for broadcast ordering and the listener name index.
//!
//! Drives the registry through arbitrary interleavings of named
//! registrations (overwrite mode), anonymous registrations, and
//! destructions, against a naive ordered-list reference model.

use std::sync::{Arc, Mutex};

use proptest::prelude::*;

use herald::{BoundArgs, ConflictAction, EventRegistry, Listener};

const NAME_POOL: [&str; 4] = ["alpha", "beta", "gamma", "delta"];

#[derive(Debug, Clone)]
enum Op {
    RegisterNamed(usize),
    RegisterAnonymous,
    DestroyNamed(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..NAME_POOL.len()).prop_map(Op::RegisterNamed),
        Just(Op::RegisterAnonymous),
        (0..NAME_POOL.len()).prop_map(Op::DestroyNamed),
    ]
}

fn tagged(fired: &Arc<Mutex<Vec<u64>>>, tag: u64) -> impl Fn(Option<&u64>, &BoundArgs) -> herald::CallbackResult + Send + Sync + 'static {
    let sink = Arc::clone(fired);
    move |_payload: Option<&u64>, _args: &BoundArgs| {
        sink.lock().unwrap().push(tag);
        Ok(())
    }
}

proptest! {
    #[test]
    fn broadcast_order_matches_surviving_insertion_order(
        ops in prop::collection::vec(op_strategy(), 0..40)
    ) {
        let mut registry = EventRegistry::<u64>::new();
        let fired: Arc<Mutex<Vec<u64>>> = Arc::new(Mutex::new(Vec::new()));

        // Reference model: (name slot or None, tag) in surviving insertion order.
        let mut model: Vec<(Option<usize>, u64)> = Vec::new();

        for (tag, op) in ops.iter().enumerate() {
            let tag = tag as u64;
            match op {
                Op::RegisterNamed(slot) => {
                    let listener = Listener::named(NAME_POOL[*slot], tagged(&fired, tag));
                    registry
                        .register_listener("topic", listener, ConflictAction::Overwrite)
                        .unwrap();
                    model.retain(|(name, _)| *name != Some(*slot));
                    model.push((Some(*slot), tag));
                }
                Op::RegisterAnonymous => {
                    let listener = Listener::anonymous(tagged(&fired, tag));
                    registry
                        .register_listener("topic", listener, ConflictAction::Reject)
                        .unwrap();
                    model.push((None, tag));
                }
                Op::DestroyNamed(slot) => {
                    let existed = model.iter().any(|(name, _)| *name == Some(*slot));
                    let result = registry.destroy_listener("topic", NAME_POOL[*slot]);
                    prop_assert_eq!(result.is_ok(), existed);
                    model.retain(|(name, _)| *name != Some(*slot));
                }
            }
        }

        registry.send_messages("topic", None).unwrap();
        let fired_tags = fired.lock().unwrap().clone();
        let expected: Vec<u64> = model.iter().map(|(_, tag)| *tag).collect();
        prop_assert_eq!(fired_tags, expected);

        // The name index never disagrees with a linear scan of the model.
        let named_in_order: Vec<&str> = model
            .iter()
            .filter_map(|(slot, _)| slot.map(|s| NAME_POOL[s]))
            .collect();
        prop_assert_eq!(registry.listener_names("topic"), named_in_order);
        for (slot, name) in NAME_POOL.iter().enumerate() {
            let in_model = model.iter().any(|(s, _)| *s == Some(slot));
            prop_assert_eq!(registry.has_listener("topic", name), in_model);
        }
    }

    #[test]
    fn reject_policy_always_retains_first_registration(
        slot in 0..NAME_POOL.len(),
        attempts in 1usize..5
    ) {
        let mut registry = EventRegistry::<u64>::new();
        let fired: Arc<Mutex<Vec<u64>>> = Arc::new(Mutex::new(Vec::new()));

        registry
            .register_listener("topic", Listener::named(NAME_POOL[slot], tagged(&fired, 0)), ConflictAction::Reject)
            .unwrap();
        for attempt in 0..attempts {
            let listener = Listener::named(NAME_POOL[slot], tagged(&fired, attempt as u64 + 1));
            prop_assert!(registry
                .register_listener("topic", listener, ConflictAction::Reject)
                .is_err());
        }

        prop_assert_eq!(registry.listener_count("topic"), 1);
        registry.send_messages("topic", None).unwrap();
        prop_assert_eq!(fired.lock().unwrap().clone(), vec![0]);
    }
}
