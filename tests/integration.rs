// SPDX-License-Identifier: MPL-2.0
use iced_snackbar::clock::ManualClock;
use iced_snackbar::config::{self, Config};
use iced_snackbar::manager::{Manager, Message};
use iced_snackbar::queue::NodePhase;
use iced_snackbar::snack::{default_alignment, Alignment, Snack};
use iced_snackbar::surface::HeadlessSurface;
use tempfile::tempdir;

fn manager_with_clock() -> (Manager, ManualClock) {
    let clock = ManualClock::new();
    let manager = Manager::new()
        .with_clock(clock.clone())
        .with_surface(HeadlessSurface::new());
    (manager, clock)
}

fn advance(manager: &mut Manager, clock: &ManualClock, secs: f64) {
    clock.advance_secs(secs);
    manager.handle_message(&Message::Tick);
}

fn messages(manager: &Manager, alignment: Alignment) -> Vec<String> {
    manager
        .snacks(alignment)
        .into_iter()
        .map(|snack| snack.message().to_string())
        .collect()
}

fn assert_links(manager: &Manager, alignment: Alignment) {
    if let Some(queue) = manager.queue(alignment) {
        assert!(queue.links_consistent(), "broken links in {alignment:?} queue");
    }
}

#[test]
fn duplicate_is_promoted_to_the_growing_edge() {
    for alignment in Alignment::ALL {
        let (mut manager, _) = manager_with_clock();
        for message in ["E1", "E2", "E3"] {
            manager.add(Snack::new(message).with_alignment(alignment));
        }
        assert_eq!(messages(&manager, alignment), ["E1", "E2", "E3"]);

        manager.add(Snack::new("E1").with_alignment(alignment).with_duration(9.0));
        assert_eq!(messages(&manager, alignment), ["E2", "E3", "E1"]);
        assert_eq!(manager.snacks(alignment)[2].duration(), 9.0);
        assert_links(&manager, alignment);
    }
}

#[test]
fn reuse_identifier_collides_across_content() {
    let (mut manager, _) = manager_with_clock();
    manager.add(Snack::new("Uploading 10%").with_reuse_identifier("upload").with_alignment(Alignment::Top));
    manager.add(Snack::new("Other").with_alignment(Alignment::Top));
    manager.add(Snack::new("Uploading 50%").with_reuse_identifier("upload").with_alignment(Alignment::Top));
    assert_eq!(messages(&manager, Alignment::Top), ["Other", "Uploading 50%"]);
}

#[test]
fn alignment_groups_never_mix() {
    let (mut manager, _) = manager_with_clock();
    manager.add(Snack::new("top").with_alignment(Alignment::Top));
    manager.add(Snack::new("bottom").with_alignment(Alignment::Bottom));

    assert_eq!(messages(&manager, Alignment::Top), ["top"]);
    assert_eq!(messages(&manager, Alignment::Bottom), ["bottom"]);
}

#[test]
fn snack_is_dismissed_automatically() {
    let (mut manager, clock) = manager_with_clock();
    manager.add(Snack::new("brief").with_alignment(Alignment::Bottom).with_duration(1.0));
    assert!(manager.is_container_present(Alignment::Bottom));

    advance(&mut manager, &clock, 0.5);
    advance(&mut manager, &clock, 1.0);
    assert!(manager.snacks(Alignment::Bottom).is_empty());

    advance(&mut manager, &clock, 0.5);
    assert!(!manager.is_container_present(Alignment::Bottom));
}

#[test]
fn zero_and_nan_durations_stay_until_removed() {
    let (mut manager, clock) = manager_with_clock();
    let zero = Snack::new("zero").with_alignment(Alignment::Top).with_duration(0.0);
    let nan = Snack::new("nan").with_alignment(Alignment::Top).with_duration(f64::NAN);
    manager.add(zero.clone());
    manager.add(nan.clone());

    for _ in 0..10 {
        advance(&mut manager, &clock, 60.0);
    }
    assert_eq!(messages(&manager, Alignment::Top), ["zero", "nan"]);

    manager.remove(&zero);
    manager.remove(&nan);
    assert!(manager.snacks(Alignment::Top).is_empty());
}

#[test]
fn removing_twice_is_harmless() {
    let (mut manager, _) = manager_with_clock();
    let snack = Snack::new("once").with_alignment(Alignment::Top);
    manager.add(snack.clone());
    assert!(manager.remove(&snack));
    assert!(!manager.remove(&snack));
}

#[test]
fn removing_the_last_snack_tears_the_container_down() {
    let (mut manager, clock) = manager_with_clock();
    let first = Snack::new("first").with_alignment(Alignment::Top);
    let second = Snack::new("second").with_alignment(Alignment::Top);
    manager.add(first.clone());
    manager.add(second.clone());

    manager.remove(&first);
    advance(&mut manager, &clock, 1.0);
    assert!(manager.is_container_present(Alignment::Top));

    manager.remove(&second);
    assert!(manager.is_container_present(Alignment::Top));
    let frames = manager.frames(Alignment::Top);
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].phase, NodePhase::AnimatingOut);

    advance(&mut manager, &clock, 1.0);
    assert!(!manager.is_container_present(Alignment::Top));
    assert!(manager.frames(Alignment::Top).is_empty());
}

#[test]
fn links_survive_mixed_operations() {
    let (mut manager, clock) = manager_with_clock();
    let names = ["a", "b", "c", "d", "e"];
    for (step, name) in names.iter().cycle().take(40).enumerate() {
        for alignment in Alignment::ALL {
            let snack = Snack::new(*name).with_alignment(alignment);
            if step % 3 == 2 {
                manager.remove(&snack);
            } else {
                manager.add(snack);
            }
            assert_links(&manager, alignment);
        }
        if step % 4 == 0 {
            advance(&mut manager, &clock, 0.2);
        }
    }
}

#[test]
fn dismiss_message_removes_the_snack() {
    let (mut manager, _) = manager_with_clock();
    let snack = Snack::new("close me").with_alignment(Alignment::Bottom);
    manager.add(snack.clone());
    manager.handle_message(&Message::Dismiss {
        alignment: Alignment::Bottom,
        identity: snack.identity(),
    });
    assert!(manager.snacks(Alignment::Bottom).is_empty());
}

#[test]
fn configuration_round_trips_through_a_file() {
    let dir = tempdir().expect("failed to create temporary directory");
    let mut config = Config::default();
    config.appearance.inter_item_spacing = 24.0;
    config.accessibility.reduce_motion = true;
    config::save_with_override(&config, Some(dir.path().to_path_buf()))
        .expect("failed to save config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded, config);

    let manager = Manager::from_config(&loaded);
    assert!(manager.is_reduce_motion_enabled());
    assert_eq!(manager.appearance().inter_item_spacing, 24.0);
}

// The only test touching the process-wide default alignment.
#[test]
fn default_alignment_applies_to_snacks_built_afterwards() {
    let before = Snack::new("before");
    Manager::set_default_alignment(Alignment::Bottom);
    let after = Snack::new("after");
    Manager::set_default_alignment(Alignment::Top);

    assert_eq!(before.alignment(), Alignment::Top);
    assert_eq!(after.alignment(), Alignment::Bottom);
    assert_eq!(default_alignment(), Alignment::Top);
}
