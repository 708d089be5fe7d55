use warren_core::{TickContext, WorldMut, WorldView};
use warren_hsm::{And, Not, Transition};

#[derive(Default)]
struct World;

impl WorldView for World {
    type Agent = u64;
}

impl WorldMut for World {}

fn ctx() -> TickContext {
    TickContext {
        turn: 0,
        dt_seconds: 0.0,
        seed: 0,
    }
}

fn lit(value: bool) -> Box<dyn Transition<World>> {
    Box::new(move |_: &TickContext, _: u64, _: &World| value)
}

#[test]
fn and_follows_the_truth_table() {
    let world = World;
    assert!(And::new(lit(true), lit(true)).ready(&ctx(), 1, &world));
    assert!(!And::new(lit(true), lit(false)).ready(&ctx(), 1, &world));
    assert!(!And::new(lit(false), lit(true)).ready(&ctx(), 1, &world));
    assert!(!And::new(lit(false), lit(false)).ready(&ctx(), 1, &world));
}

#[test]
fn not_negates_and_composes() {
    let world = World;
    assert!(!Not::new(lit(true)).ready(&ctx(), 1, &world));
    assert!(Not::new(lit(false)).ready(&ctx(), 1, &world));

    let tree = Not::new(Box::new(And::new(lit(true), lit(false))));
    assert!(tree.ready(&ctx(), 1, &world));
}

#[test]
fn guards_are_reusable_across_many_evaluations() {
    let world = World;
    let tree = And::new(Box::new(Not::new(lit(false))), lit(true));
    for _ in 0..100 {
        assert!(tree.ready(&ctx(), 1, &world));
    }
}

#[test]
fn and_evaluates_both_children() {
    use std::cell::Cell;
    use std::rc::Rc;

    let hits: Rc<Cell<u32>> = Rc::default();
    let counting = |value: bool, hits: Rc<Cell<u32>>| -> Box<dyn Transition<World>> {
        Box::new(move |_: &TickContext, _: u64, _: &World| {
            hits.set(hits.get() + 1);
            value
        })
    };

    let tree = And::new(
        counting(false, hits.clone()),
        counting(true, hits.clone()),
    );
    assert!(!tree.ready(&ctx(), 1, &World));
    // No short-circuit: both guards ran.
    assert_eq!(hits.get(), 2);
}
