mod common;

use std::collections::BTreeMap;

use common::{ctx, Ent, SimWorld};
use warren_bt::{BtNode, BtPolicy, Selector, Sequence};
use warren_core::{plan_all, Action, BbKey, Blackboard, Brain, GridPos, Tag};
use warren_tactics::{
    Check, EnemyNear, FindByTag, FindEnemy, FindWaypoint, MoveToPos, MoveToTarget, PatrolAnchor,
};

const ATTACK_TARGET: BbKey<u64> = BbKey::named("attack_enemy");
const PICKUP_TARGET: BbKey<u64> = BbKey::named("pickup_entity");
const NEXT_WAYPOINT: BbKey<u64> = BbKey::named("next_waypoint");
const PATROL_POS: BbKey<GridPos> = BbKey::named("patrol_pos");

/// Chase when an enemy is in range, otherwise patrol — the minotaur tree.
fn chase_or_patrol(range: f32, leash: f32) -> Box<dyn BtNode<SimWorld>> {
    Box::new(Selector::new(vec![
        Box::new(Sequence::new(vec![
            Box::new(FindEnemy::new(ATTACK_TARGET, range)),
            Box::new(MoveToTarget::new(ATTACK_TARGET)),
        ])),
        Box::new(PatrolAnchor::new(leash, PATROL_POS)),
    ]))
}

#[test]
fn an_enemy_in_range_draws_a_step_toward_it() {
    let mut world = SimWorld::open(12, 12);
    let minotaur = world.spawn(1, Ent::at(5, 5).team(1));
    world.spawn(2, Ent::at(7, 6).team(0));

    let mut brains = vec![Brain::new(minotaur, Box::new(BtPolicy::new(chase_or_patrol(3.0, 2.0))))];
    plan_all(&ctx(0), &mut world, &mut brains);

    assert_eq!(world.action(minotaur), Action::Right);
    // The discovery leaf published the target for its sibling.
    assert_eq!(brains[0].blackboard.get(ATTACK_TARGET).copied(), Some(2));
}

#[test]
fn with_no_enemy_in_range_the_selector_falls_through_to_patrol() {
    let mut world = SimWorld::open(20, 20);
    let minotaur = world.spawn(1, Ent::at(10, 10).team(1));
    world.spawn(2, Ent::at(0, 0).team(0)); // far outside the 3.0 range

    let mut brains = vec![Brain::new(minotaur, Box::new(BtPolicy::new(chase_or_patrol(3.0, 2.0))))];

    // First walk anchors the patrol at the current position; inside the
    // leash the agent wanders one of the four moves.
    plan_all(&ctx(0), &mut world, &mut brains);
    assert_eq!(
        brains[0].blackboard.get(PATROL_POS).copied(),
        Some(GridPos::new(10, 10))
    );
    assert!(Action::MOVES.contains(&world.action(minotaur)));

    // Over many turns the wander covers all four directions roughly
    // evenly.
    let mut counts: BTreeMap<Action, u32> = BTreeMap::new();
    for turn in 1..=400 {
        plan_all(&ctx(turn), &mut world, &mut brains);
        *counts.entry(world.action(minotaur)).or_insert(0) += 1;
    }
    assert_eq!(counts.len(), 4);
    for (&action, &count) in &counts {
        assert!(count > 50, "{action:?} drawn only {count} times in 400");
    }
}

#[test]
fn patrol_recovers_toward_a_drifted_anchor() {
    let mut world = SimWorld::open(20, 20);
    let minotaur = world.spawn(1, Ent::at(10, 10).team(1));

    let mut brains = vec![Brain::new(minotaur, Box::new(BtPolicy::new(chase_or_patrol(3.0, 2.0))))];
    plan_all(&ctx(0), &mut world, &mut brains);

    // Drag the agent away from its anchored home; the next walk steps
    // straight back.
    world.ents.get_mut(&minotaur).unwrap().pos = GridPos::new(16, 10);
    plan_all(&ctx(1), &mut world, &mut brains);
    assert_eq!(world.action(minotaur), Action::Left);
}

#[test]
fn collector_loots_then_turns_on_remaining_enemies() {
    // The collector tree: fight adjacent threats, else gather pickups,
    // else hunt whatever is left, whatever the distance.
    let tree: Box<dyn BtNode<SimWorld>> = Box::new(Selector::new(vec![
        Box::new(Sequence::new(vec![
            Box::new(FindEnemy::new(ATTACK_TARGET, 2.0)),
            Box::new(MoveToTarget::new(ATTACK_TARGET)),
        ])),
        Box::new(Sequence::new(vec![
            Box::new(FindByTag::new(PICKUP_TARGET, Tag::Chest, None)),
            Box::new(MoveToTarget::new(PICKUP_TARGET)),
        ])),
        Box::new(Sequence::new(vec![
            Box::new(FindEnemy::new(ATTACK_TARGET, None)),
            Box::new(MoveToTarget::new(ATTACK_TARGET)),
        ])),
    ]));

    let mut world = SimWorld::open(16, 16);
    let collector = world.spawn(1, Ent::at(8, 8).team(0));
    world.spawn(2, Ent::at(14, 8).team(1)); // too far to threaten
    let loot = world.spawn(3, Ent::at(8, 11).chest(3, 0));

    let mut brains = vec![Brain::new(collector, Box::new(BtPolicy::new(tree)))];
    plan_all(&ctx(0), &mut world, &mut brains);
    // Loot first: the chest is the nearest concern.
    assert_eq!(world.action(collector), Action::Down);

    // Loot gone: the distant enemy becomes the fallback target.
    world.ents.remove(&loot);
    plan_all(&ctx(1), &mut world, &mut brains);
    assert_eq!(world.action(collector), Action::Right);
}

#[test]
fn guard_walks_its_waypoint_ring() {
    let mut world = SimWorld::open(12, 12);
    let guard = world.spawn(1, Ent::at(0, 0).team(0));
    let w1 = world.spawn(10, Ent::at(2, 0).waypoint_to(11));
    let w2 = world.spawn(11, Ent::at(2, 2).waypoint_to(10));

    let tree: Box<dyn BtNode<SimWorld>> = Box::new(Sequence::new(vec![
        Box::new(FindWaypoint::new(NEXT_WAYPOINT, w1)),
        Box::new(MoveToTarget::new(NEXT_WAYPOINT)),
    ]));
    let mut brains = vec![Brain::new(guard, Box::new(BtPolicy::new(tree)))];

    // March to the first waypoint.
    for turn in 0..2 {
        plan_all(&ctx(turn), &mut world, &mut brains);
        assert_eq!(world.action(guard), Action::Right);
        let pos = world.ents[&guard].pos;
        world.ents.get_mut(&guard).unwrap().pos = Action::Right.apply(pos);
    }

    // Standing on it, the tracker advances to the next link.
    plan_all(&ctx(2), &mut world, &mut brains);
    assert_eq!(brains[0].blackboard.get(NEXT_WAYPOINT).copied(), Some(w2));
    assert_eq!(world.action(guard), Action::Down);
}

#[test]
fn move_leaf_fails_without_its_key_and_the_walk_reports_it() {
    let mut world = SimWorld::open(8, 8);
    let loner = world.spawn(1, Ent::at(4, 4).team(1));

    let mut orphan_move = MoveToTarget::new(ATTACK_TARGET);
    let mut bb = Blackboard::new();
    assert_eq!(
        orphan_move.tick(&ctx(0), loner, &mut world, &mut bb),
        warren_bt::BtStatus::Failure
    );
    assert_eq!(world.action(loner), Action::Nop);
}

#[test]
fn move_to_pos_steps_toward_a_published_position() {
    let mut world = SimWorld::open(8, 8);
    let runner = world.spawn(1, Ent::at(1, 1).team(0));

    let mut bb = Blackboard::new();
    bb.insert(PATROL_POS, GridPos::new(1, 6));
    let mut node = MoveToPos::new(PATROL_POS);
    assert_eq!(
        node.tick(&ctx(0), runner, &mut world, &mut bb),
        warren_bt::BtStatus::Success
    );
    assert_eq!(world.action(runner), Action::Down);
}

#[test]
fn check_bridges_predicates_into_the_tree() {
    let mut world = SimWorld::open(8, 8);
    let watcher = world.spawn(1, Ent::at(4, 4).team(1));
    world.spawn(2, Ent::at(5, 4).team(0));

    let mut node: Check<SimWorld> = Check::new(Box::new(EnemyNear::new(2.0)));
    let mut bb = Blackboard::new();
    assert_eq!(
        node.tick(&ctx(0), watcher, &mut world, &mut bb),
        warren_bt::BtStatus::Success
    );
}
