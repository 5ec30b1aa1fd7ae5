//! Integration tests: construction, on/off, colour setters and brightness
//! stepping, checked against the recorded channel writes.

use crate::mock_hw::{BLUE_PIN, ChannelCall, GREEN_PIN, RED_PIN, make_light};

use rgb_light::{LightState, NamedColour};

// ── Construction ──────────────────────────────────────────────

#[test]
fn construction_configures_each_channel_once_in_order() {
    let light = make_light();
    assert_eq!(
        light.port().calls,
        vec![
            ChannelCall::Configure(RED_PIN),
            ChannelCall::Configure(GREEN_PIN),
            ChannelCall::Configure(BLUE_PIN),
        ]
    );
    assert_eq!(light.colour(), (255, 255, 255));
}

// ── On / off ──────────────────────────────────────────────────

#[test]
fn turn_on_writes_pwm_levels() {
    let mut light = make_light();
    light.set_colour(10, 20, 30);
    let mark = light.port().calls.len();

    light.turn_on();

    assert_eq!(
        &light.port().calls[mark..],
        &[
            ChannelCall::Level { channel: RED_PIN, level: 10 },
            ChannelCall::Level { channel: GREEN_PIN, level: 20 },
            ChannelCall::Level { channel: BLUE_PIN, level: 30 },
        ]
    );
}

#[test]
fn turn_off_writes_binary_low() {
    let mut light = make_light();
    light.turn_on();
    let mark = light.port().calls.len();

    light.turn_off();

    assert_eq!(
        &light.port().calls[mark..],
        &[
            ChannelCall::Binary { channel: RED_PIN, high: false },
            ChannelCall::Binary { channel: GREEN_PIN, high: false },
            ChannelCall::Binary { channel: BLUE_PIN, high: false },
        ]
    );
    assert_eq!(light.port().outputs(), (0, 0, 0));
    assert_eq!(light.state(), LightState::Dark);
}

#[test]
fn on_and_off_are_idempotent() {
    let mut light = make_light();
    light.set_named_colour(NamedColour::Green);
    light.turn_on();
    light.turn_on();
    assert_eq!(light.port().outputs(), (0, 255, 0));

    light.turn_off();
    light.turn_off();
    assert_eq!(light.port().outputs(), (0, 0, 0));
    assert_eq!(light.colour(), (0, 255, 0));
}

#[test]
fn red_survives_off_on_cycle() {
    let mut light = make_light();
    light.set_named_colour(NamedColour::Red);
    let lit = light.port().outputs();

    light.turn_off();
    light.turn_on();

    assert_eq!(lit, (255, 0, 0));
    assert_eq!(light.port().outputs(), lit);
    assert!(light.is_lit());
}

// ── Colour setters ────────────────────────────────────────────

#[test]
fn named_colour_sets_then_lights() {
    let mut light = make_light();
    light.turn_off();
    light.set_named_colour(NamedColour::Blue);
    assert_eq!(light.colour(), (0, 0, 255));
    assert_eq!(light.port().outputs(), (0, 0, 255));
    assert_eq!(light.state(), LightState::Lit);
}

#[test]
fn unknown_preset_index_writes_nothing() {
    let mut light = make_light();
    light.set_named_colour(NamedColour::Green);
    let mark = light.port().calls.len();

    light.set_colour_index(7);

    assert_eq!(light.port().calls.len(), mark);
    assert_eq!(light.colour(), (0, 255, 0));
}

#[test]
fn preset_indices_follow_declaration_order() {
    let mut light = make_light();
    let expected = [(255, 0, 0), (0, 255, 0), (0, 0, 255), (255, 255, 255)];
    for (index, rgb) in expected.into_iter().enumerate() {
        light.set_colour_index(index as u8);
        assert_eq!(light.port().outputs(), rgb);
    }
}

#[test]
fn raw_colour_is_written_verbatim() {
    let mut light = make_light();
    light.set_colour(1, 128, 254);
    assert_eq!(light.port().outputs(), (1, 128, 254));
}

// ── Brightness ────────────────────────────────────────────────

#[test]
fn increase_from_full_white_stays_saturated() {
    let mut light = make_light();
    light.increase_brightness();
    assert_eq!(light.colour(), (255, 255, 255));
    assert_eq!(light.port().outputs(), (255, 255, 255));
}

#[test]
fn increase_never_lights_a_dark_channel() {
    let mut light = make_light();
    light.set_colour(0, 0, 0);
    light.increase_brightness();
    assert_eq!(light.colour(), (0, 0, 0));
}

#[test]
fn increase_clamps_at_255_boundary() {
    let mut light = make_light();
    light.set_colour(230, 231, 250);
    light.increase_brightness();
    assert_eq!(light.colour(), (255, 255, 255));
}

#[test]
fn ten_decreases_from_white_reach_floor() {
    let mut light = make_light();
    for _ in 0..10 {
        light.decrease_brightness();
    }
    assert_eq!(light.colour(), (5, 5, 5));

    for _ in 0..5 {
        light.decrease_brightness();
    }
    assert_eq!(light.colour(), (5, 5, 5));
    assert_eq!(light.port().outputs(), (5, 5, 5));
}

#[test]
fn decrease_clamps_at_floor_boundary() {
    let mut light = make_light();
    light.set_colour(5, 29, 30);
    light.decrease_brightness();
    assert_eq!(light.colour(), (5, 5, 5));
}

#[test]
fn decrease_keeps_dark_channels_dark() {
    let mut light = make_light();
    light.set_named_colour(NamedColour::Red);
    light.decrease_brightness();
    assert_eq!(light.colour(), (230, 0, 0));
}

#[test]
fn brightness_step_relights_a_dark_light() {
    let mut light = make_light();
    light.set_colour(100, 100, 100);
    light.turn_off();
    light.increase_brightness();
    assert_eq!(light.port().outputs(), (125, 125, 125));
    assert!(light.is_lit());
}
