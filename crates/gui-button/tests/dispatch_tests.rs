//! Integration tests for button interaction and command dispatch.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use gui_button::prelude::*;
use gui_button::style::Error;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("gui_button=trace,gui_button_style=trace")
        .with_test_writer()
        .try_init();
}

/// Executor that records every command it receives.
#[derive(Default)]
struct Recorder {
    commands: Vec<&'static str>,
}

impl CommandExecutor<&'static str> for Recorder {
    fn execute(&mut self, command: &&'static str) {
        self.commands.push(*command);
    }
}

fn run(events: &[PointerEvent]) -> (RenderedButton<&'static str, &'static str>, Recorder) {
    init_tracing();
    let mut recorder = Recorder::default();
    let mut button = bind("Run", "(run-script)");
    button.handle_events(events.iter().copied(), &mut recorder);
    (button, recorder)
}

#[test]
fn test_enter_hovers_without_dispatch() {
    let (button, recorder) = run(&[PointerEvent::Enter]);

    assert_eq!(button.state(), InteractionState::Hovering);
    assert_eq!(button.rendered(), resolve(VisualState::Hover, &"Run"));
    assert!(recorder.commands.is_empty());
}

#[test]
fn test_press_activates_without_dispatch() {
    let (button, recorder) = run(&[PointerEvent::Enter, PointerEvent::PressOrDrag]);

    assert_eq!(button.state(), InteractionState::Activating);
    assert_eq!(button.rendered(), resolve(VisualState::Pressed, &"Run"));
    assert!(recorder.commands.is_empty());
}

#[test]
fn test_click_dispatches_once_and_settles() {
    let (button, recorder) = run(&[
        PointerEvent::Enter,
        PointerEvent::PressOrDrag,
        PointerEvent::Release,
    ]);

    assert_eq!(button.state(), InteractionState::Idle);
    assert_eq!(button.rendered(), resolve(VisualState::Normal, &"Run"));
    assert_eq!(recorder.commands, ["(run-script)"]);
}

#[test]
fn test_release_outside_still_dispatches() {
    let (button, recorder) = run(&[
        PointerEvent::Enter,
        PointerEvent::PressOrDrag,
        PointerEvent::Leave,
        PointerEvent::Release,
    ]);

    assert_eq!(button.state(), InteractionState::Idle);
    assert_eq!(button.visual_state(), VisualState::Normal);
    assert_eq!(recorder.commands, ["(run-script)"]);
}

#[test]
fn test_hover_then_leave_dispatches_nothing() {
    let (button, recorder) = run(&[PointerEvent::Enter, PointerEvent::Leave]);

    assert_eq!(button.state(), InteractionState::Idle);
    assert!(recorder.commands.is_empty());
}

#[test]
fn test_invalid_state_renders_nothing() {
    init_tracing();
    let resolver = StyleResolver::classic();

    let err = resolver.resolve_named("disabled", "Run").unwrap_err();

    assert!(matches!(err, Error::InvalidState { ref name } if name == "disabled"));
    assert!(err.is_precondition_violation());
}

/// Every event sequence of at most `max_len` events.
fn all_sequences(max_len: usize) -> Vec<Vec<PointerEvent>> {
    let mut sequences = vec![Vec::new()];
    let mut frontier = vec![Vec::new()];
    for _ in 0..max_len {
        let mut next = Vec::new();
        for prefix in &frontier {
            for event in PointerEvent::ALL {
                let mut sequence: Vec<PointerEvent> = prefix.clone();
                sequence.push(event);
                next.push(sequence);
            }
        }
        sequences.extend(next.iter().cloned());
        frontier = next;
    }
    sequences
}

#[test]
fn test_dispatch_count_matches_activations_for_all_sequences() {
    for events in all_sequences(6) {
        let mut dispatched = 0_usize;
        let mut button = bind((), ());
        let mut expected_state = InteractionState::Idle;
        let mut activations = 0_usize;

        for &event in &events {
            let transition = button.handle_event(event, &mut |_: &()| dispatched += 1);
            expected_state = expected_state.on_event(event).to;

            assert_eq!(transition.to, expected_state, "{events:?}");
            if transition.is_activation() {
                activations += 1;
            }
        }

        assert_eq!(button.state(), expected_state, "{events:?}");
        assert_eq!(dispatched, activations, "{events:?}");
        assert_eq!(button.activations() as usize, activations, "{events:?}");
        assert_eq!(
            button.rendered(),
            resolve(expected_state.visual_state(), &()),
            "{events:?}"
        );
    }
}

/// Deterministic xorshift stream of events.
fn event_stream(mut seed: u64) -> impl Iterator<Item = PointerEvent> {
    std::iter::from_fn(move || {
        seed ^= seed << 13;
        seed ^= seed >> 7;
        seed ^= seed << 17;
        Some(PointerEvent::ALL[(seed % 4) as usize])
    })
}

#[test]
fn test_long_sequences_follow_transition_table() {
    for seed in 1..=2000_u64 {
        let mut dispatched = 0_u64;
        let mut button = bind("Long", ());
        let mut expected = InteractionState::Idle;
        let mut completed = 0_u64;

        for event in event_stream(seed).take(40) {
            let before = expected;
            expected = expected.on_event(event).to;
            if before == InteractionState::Activating && expected == InteractionState::Idle {
                completed += 1;
            }

            button.handle_event(event, &mut |_: &()| dispatched += 1);

            assert_eq!(button.state(), expected, "seed {seed}");
            assert_eq!(
                button.rendered(),
                resolve(expected.visual_state(), &"Long"),
                "seed {seed}"
            );
            assert_eq!(dispatched, completed, "seed {seed}");
        }
        assert_eq!(button.activations(), completed, "seed {seed}");
    }
}

#[test]
fn test_style_log_targets_are_shared() {
    assert_eq!(
        gui_button::logging::targets::RESOLVE,
        gui_button::style::logging::targets::RESOLVE
    );
    assert_eq!(
        gui_button::logging::targets::THEME,
        gui_button::style::logging::targets::THEME
    );
}

#[test]
fn test_instances_are_isolated() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut sink = {
        let log = Rc::clone(&log);
        move |cmd: &u32| log.borrow_mut().push(*cmd)
    };

    let mut first = bind("A", 1_u32);
    let mut second = bind("B", 2_u32);

    first.handle_event(PointerEvent::Enter, &mut sink);
    second.handle_event(PointerEvent::Enter, &mut sink);
    first.handle_event(PointerEvent::PressOrDrag, &mut sink);
    second.handle_event(PointerEvent::Leave, &mut sink);
    first.handle_event(PointerEvent::Release, &mut sink);

    assert_eq!(first.state(), InteractionState::Idle);
    assert_eq!(second.state(), InteractionState::Idle);
    assert_eq!(*log.borrow(), vec![1]);
    assert!(Arc::ptr_eq(first.resolver().theme(), second.resolver().theme()));
}

#[test]
fn test_custom_theme_is_used_for_rendering() {
    let theme = ButtonTheme::from_toml_str("[contour]\nrecolor = \"#c06060\"\n").unwrap();
    let mut button = ButtonSpec::new("Stop", "(stop)").bind(StyleResolver::new(Arc::new(theme)));

    button.handle_event(PointerEvent::Enter, &mut |_: &&str| {});

    assert_eq!(
        button.rendered().contour().and_then(|c| c.recolor),
        Some(Color::from_rgb8(0xC0, 0x60, 0x60))
    );
}

#[test]
fn test_host_tags_drive_the_button() {
    let (mut executor, commands) = QueuedExecutor::channel();
    let mut button = bind("Go", "(go)");

    let events = ["mouse-over", "drag", "mouse-out", "release", "keypress"]
        .into_iter()
        .filter_map(PointerEvent::from_tag);
    let dispatched = button.handle_events(events, &mut executor);

    assert_eq!(dispatched, 1);
    assert_eq!(commands.try_iter().collect::<Vec<_>>(), vec!["(go)"]);
}

#[test]
fn test_markup_follows_interaction() {
    let mut button = bind("Go", ());
    let mut painter = MarkupPainter::new();

    assert!(button.rendered().paint(&mut painter).starts_with("<with|ornament-corner|50%"));

    button.handle_event(PointerEvent::Enter, &mut |_: &()| {});
    let hover = button.rendered().paint(&mut painter);
    assert!(hover.starts_with("<with|shadow-recolor|#6060c0|<drop-contour|"));
    assert!(hover.contains("<ornament|Go>"));
}

#[test]
fn test_action_button_construct() {
    assert_eq!(ACTION_BUTTON.name, "action-button");
    assert_eq!(ACTION_BUTTON.arity, 2);
    assert_eq!(ACTION_BUTTON.accessible, 0);
    assert!(ACTION_BUTTON.is_opaque_for_editing());
}
