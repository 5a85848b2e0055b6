#![allow(dead_code)]

use std::pin::pin;
use std::task::{Context, Poll, Waker};
use std::time::Duration as StdDuration;

use status_strip::color::{OFF, Rgb, SELECTION, rgb_from_u32};
use status_strip::{
    BlinkConfig, BoxEntry, BoxId, Duration, Instant, LightStrip, OutputDriver, SelectionChannel,
    StaticBoxLayout, StripConfig,
};

pub const MAX_LIGHTS: usize = 16;
pub const EVENTS: usize = 4;

pub const BLUE: Rgb = rgb_from_u32(0x00_00_FF);

pub const BOXES: &[BoxEntry<'static>] = &[
    BoxEntry {
        id: BoxId(1),
        lights: &[2],
        color: Some(BLUE),
    },
    BoxEntry {
        id: BoxId(2),
        lights: &[0, 3],
        color: None,
    },
    BoxEntry {
        id: BoxId(3),
        lights: &[1, 99],
        color: Some(BLUE),
    },
    BoxEntry {
        id: BoxId(4),
        lights: &[
            1, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 2,
        ],
        color: Some(BLUE),
    },
];

pub type TestStrip<'a> = LightStrip<'a, RecordingDriver, StaticBoxLayout<'static>, MAX_LIGHTS, EVENTS>;

/// Driver that keeps every frame it was asked to show
#[derive(Debug, Default)]
pub struct RecordingDriver {
    pub light_count: Option<usize>,
    pub brightness: Vec<u8>,
    pub frames: Vec<Vec<Rgb>>,
}

impl RecordingDriver {
    pub fn last_frame(&self) -> &[Rgb] {
        self.frames.last().map(Vec::as_slice).unwrap_or_default()
    }
}

impl OutputDriver for RecordingDriver {
    fn init(&mut self, light_count: usize) {
        self.light_count = Some(light_count);
    }

    fn set_brightness(&mut self, brightness: u8) {
        self.brightness.push(brightness);
    }

    fn write(&mut self, colors: &[Rgb]) {
        self.frames.push(colors.to_vec());
    }
}

pub fn config(light_count: usize) -> StripConfig {
    StripConfig {
        light_count,
        default_brightness: 50,
        max_brightness: 200,
        blink: BlinkConfig {
            count: 3,
            period: Duration::from_millis(100),
        },
        selection_color: SELECTION,
    }
}

pub fn strip(channel: &SelectionChannel<EVENTS>, light_count: usize) -> TestStrip<'_> {
    LightStrip::new(
        RecordingDriver::default(),
        config(light_count),
        StaticBoxLayout::new(BOXES),
        channel.subscriber(),
    )
    .expect("valid strip config")
}

pub fn at(ms: u64) -> Instant {
    Instant::from_millis(ms)
}

pub fn dark(light_count: usize) -> Vec<Rgb> {
    vec![OFF; light_count]
}

/// Number of times the lamp went from dark to lit across `frames`
pub fn on_phases(frames: &[Vec<Rgb>], index: usize, initially_lit: bool) -> usize {
    let mut lit = initially_lit;
    let mut phases = 0;
    for frame in frames {
        let now_lit = frame[index] != OFF;
        if now_lit && !lit {
            phases += 1;
        }
        lit = now_lit;
    }
    phases
}

/// Indices of the lit lamps of a frame
pub fn lit_lamps(frame: &[Rgb]) -> Vec<usize> {
    frame
        .iter()
        .enumerate()
        .filter(|(_, color)| **color != OFF)
        .map(|(index, _)| index)
        .collect()
}

/// Poll a future to completion, sleeping between polls
pub fn block_on<F: Future>(future: F) -> F::Output {
    let mut future = pin!(future);
    let mut context = Context::from_waker(Waker::noop());
    loop {
        if let Poll::Ready(output) = future.as_mut().poll(&mut context) {
            return output;
        }
        std::thread::sleep(StdDuration::from_millis(1));
    }
}
