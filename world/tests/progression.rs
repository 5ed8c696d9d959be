use reverse_brainrot_core::{
    level_for, Affordability, BadgeRank, ClaimRejection, Command, Event, Level,
    PENALTY_RESET_TICKS,
};
use reverse_brainrot_world::{apply, query, World};

fn run(world: &mut World, commands: &[Command]) -> Vec<Event> {
    let mut events = Vec::new();
    for command in commands {
        apply(world, *command, &mut events);
    }
    events
}

fn ticks(world: &mut World, count: usize) -> Vec<Event> {
    run(world, &vec![Command::Tick; count])
}

fn next_random(state: u64) -> u64 {
    state
        .wrapping_mul(6_364_136_223_846_793_005)
        .wrapping_add(1_442_695_040_888_963_407)
}

#[test]
fn ten_focused_ticks_reach_level_two_with_level_one_coins() {
    let mut world = World::new();

    let events = ticks(&mut world, 10);

    assert_eq!(query::xp(&world), 50);
    assert_eq!(query::coins(&world), 10, "coins accrue at the pre-tick level");
    assert_eq!(query::level(&world), Level::new(2));
    assert_eq!(
        events.last(),
        Some(&Event::LevelChanged {
            from: Level::new(1),
            to: Level::new(2),
        }),
        "level should change exactly on the tenth tick",
    );
}

#[test]
fn penalty_tick_drops_level_below_threshold() {
    let mut world = World::new();
    let _ = ticks(&mut world, 10);
    let _ = run(&mut world, &[Command::ActivationChanged { active: false }]);

    let _ = ticks(&mut world, 1);

    assert_eq!(query::xp(&world), 40);
    assert_eq!(query::penalty_streak(&world), 1);
    assert_eq!(query::level(&world), Level::new(1));
    assert_eq!(query::coins(&world), 10);
}

#[test]
fn claim_buys_copper_then_refuses_bronze() {
    let mut world = World::new();
    let _ = ticks(&mut world, 10);

    let first = run(&mut world, &[Command::ClaimReward]);
    assert_eq!(
        first,
        vec![Event::BadgeClaimed {
            rank: BadgeRank::new(1),
            cost: 10,
            remaining: 0,
        }]
    );
    assert_eq!(query::coins(&world), 0);
    assert_eq!(query::badge_rank(&world), BadgeRank::new(1));

    let second = run(&mut world, &[Command::ClaimReward]);
    assert_eq!(
        second,
        vec![Event::RewardClaimRejected {
            reason: ClaimRejection::InsufficientCoins {
                required: 25,
                available: 0,
            },
        }]
    );
    assert_eq!(query::badge_rank(&world), BadgeRank::new(1));
    assert_eq!(
        query::affordability(&world),
        Affordability::Available {
            rank: BadgeRank::new(2),
            name: "Bronze",
            cost: 25,
            affordable: false,
        }
    );
}

#[test]
fn repeated_claim_after_exhausting_affordability_changes_nothing() {
    let mut world = World::new();
    let _ = ticks(&mut world, 10);
    let _ = run(&mut world, &[Command::ClaimReward]);
    let after_first = query::snapshot(&world);

    let _ = run(&mut world, &[Command::ClaimReward]);

    assert_eq!(query::snapshot(&world), after_first);
}

#[test]
fn penalty_streak_wraps_on_fifth_unfocused_tick() {
    let mut world = World::new();
    let _ = run(&mut world, &[Command::ActivationChanged { active: false }]);

    for expected in 1..PENALTY_RESET_TICKS {
        let _ = ticks(&mut world, 1);
        assert_eq!(query::penalty_streak(&world), expected);
    }

    let events = ticks(&mut world, 1);
    assert_eq!(query::penalty_streak(&world), 0);
    assert!(events.contains(&Event::PenaltyStreakReset));
}

#[test]
fn blur_then_refocus_without_ticks_only_flips_focus() {
    let mut world = World::new();
    let _ = ticks(&mut world, 3);
    let before = query::snapshot(&world);

    let _ = run(&mut world, &[Command::ActivationChanged { active: false }]);
    assert!(!query::is_focused(&world));
    let events = run(&mut world, &[Command::ActivationChanged { active: true }]);
    assert!(query::is_focused(&world));

    assert_eq!(events, vec![Event::FocusChanged { focused: true }]);
    assert_eq!(query::snapshot(&world), before);
}

#[test]
fn refocus_mid_streak_resets_streak_and_resumes_rewards() {
    let mut world = World::new();
    let _ = ticks(&mut world, 20);
    let _ = run(&mut world, &[Command::ActivationChanged { active: false }]);
    let _ = ticks(&mut world, 3);
    assert_eq!(query::penalty_streak(&world), 3);

    let _ = run(&mut world, &[Command::ActivationChanged { active: true }]);
    assert_eq!(query::penalty_streak(&world), 0);

    let xp_before = query::xp(&world);
    let events = ticks(&mut world, 1);
    assert!(
        !events
            .iter()
            .any(|event| matches!(event, Event::PenaltyApplied { .. })),
        "no penalty tick may follow a processed refocus",
    );
    assert_eq!(query::xp(&world), xp_before + 5);
}

#[test]
fn xp_never_drops_below_zero() {
    let mut world = World::new();
    let _ = run(&mut world, &[Command::ActivationChanged { active: false }]);

    let events = ticks(&mut world, 3);

    assert_eq!(query::xp(&world), 0);
    assert!(events.iter().all(|event| match event {
        Event::PenaltyApplied { xp_lost, total, .. } => *xp_lost == 0 && *total == 0,
        _ => true,
    }));
}

#[test]
fn ladder_exhausts_and_reports_max_tier() {
    let mut world = World::new();
    let _ = ticks(&mut world, 500);

    for rank in 1..=7 {
        let _ = run(&mut world, &[Command::ClaimReward]);
        assert_eq!(query::badge_rank(&world), BadgeRank::new(rank));
    }

    let snapshot = query::snapshot(&world);
    assert_eq!(snapshot.badge_name, "Emerald");
    assert_eq!(snapshot.next_badge_name, None);
    assert_eq!(snapshot.next_badge_cost, None);
    assert!(!snapshot.can_claim_next);

    let coins = query::coins(&world);
    let events = run(&mut world, &[Command::ClaimReward]);
    assert_eq!(
        events,
        vec![Event::RewardClaimRejected {
            reason: ClaimRejection::MaxTierReached,
        }]
    );
    assert_eq!(query::coins(&world), coins);
}

#[test]
fn pet_evolves_when_level_three_is_reached() {
    let mut world = World::new();

    let events = ticks(&mut world, 24);

    assert_eq!(query::level(&world), Level::new(3));
    assert_eq!(query::pet_stage(&world).name, "Hatchling");
    assert!(events.iter().any(|event| matches!(
        event,
        Event::PetEvolved { from, to } if from.name == "Baby" && to.name == "Hatchling"
    )));
}

#[test]
fn invariants_hold_across_arbitrary_command_streams() {
    let mut world = World::new();
    let mut state = 0x5eed_u64;
    let mut last_rank = query::badge_rank(&world);

    for _ in 0..5_000 {
        state = next_random(state);
        let command = match (state >> 33) % 10 {
            0 => Command::ActivationChanged { active: false },
            1 => Command::ActivationChanged { active: true },
            2 => Command::ClaimReward,
            _ => Command::Tick,
        };
        let _ = run(&mut world, &[command]);

        let snapshot = query::snapshot(&world);
        assert_eq!(snapshot.level, level_for(snapshot.xp));
        assert!(snapshot.badge_rank >= last_rank, "badge rank decreased");
        assert!(snapshot.badge_rank.tier().is_some(), "badge rank out of range");
        assert!(snapshot.penalty_streak < PENALTY_RESET_TICKS);
        if snapshot.focused {
            assert_eq!(snapshot.penalty_streak, 0);
        }
        last_rank = snapshot.badge_rank;
    }
}
