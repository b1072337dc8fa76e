//! CLI tool for scrollframe - simulates scroll playback and outputs JSON
//!
//! Usage:
//!   scrollframe_cli [options] <offset>...
//!
//! Options:
//!   --frames N            frame count (default 200)
//!   --frame-size WxH      decoded frame size (default 1920x1080)
//!   --viewport WxH[@DPR]  canvas box size (default 1280x720@1)
//!   --section TOP:HEIGHT  driving section geometry (default 0:3000)
//!   -o FILE               write JSON to FILE instead of stdout
//!
//! Every offset is ticked in order through a player with all frames loaded,
//! so the output shows which frame is on screen after each scroll position
//! and where it is drawn.

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::io::{self, Write};

use serde::Serialize;
use scrollframe::render::RecordingSurface;
use scrollframe::{
    cover_fit, FrameStore, LocatorScheme, Placement, ReadinessPolicy, ScrollSample,
    SequencePlayer, TickOutcome, Viewport,
};

const USAGE: &str = "Usage: scrollframe_cli [--frames N] [--frame-size WxH] \
[--viewport WxH[@DPR]] [--section TOP:HEIGHT] [-o output.json] <offset>...";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Step {
    scroll_offset: f64,
    progress: f64,
    frame_index: usize,
    locator: String,
    redrawn: bool,
    placement: Option<Placement>,
}

struct Options {
    frames: usize,
    frame_size: (u32, u32),
    viewport: (f64, f64, f64),
    section: (f64, f64),
    output: Option<String>,
    offsets: Vec<f64>,
}

fn fail(message: &str) -> ! {
    eprintln!("{}", message);
    eprintln!("{}", USAGE);
    std::process::exit(1);
}

fn parse_pair<T: std::str::FromStr>(value: &str, sep: char) -> Option<(T, T)> {
    let (a, b) = value.split_once(sep)?;
    Some((a.trim().parse().ok()?, b.trim().parse().ok()?))
}

fn parse_args(args: &[String]) -> Options {
    let mut opts = Options {
        frames: 200,
        frame_size: (1920, 1080),
        viewport: (1280.0, 720.0, 1.0),
        section: (0.0, 3000.0),
        output: None,
        offsets: Vec::new(),
    };

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        let mut value = || {
            iter.next()
                .cloned()
                .unwrap_or_else(|| fail(&format!("Missing value for {}", arg)))
        };
        match arg.as_str() {
            "--frames" => {
                opts.frames = value()
                    .parse()
                    .unwrap_or_else(|_| fail("--frames expects a positive integer"));
            }
            "--frame-size" => {
                opts.frame_size = parse_pair(&value(), 'x')
                    .unwrap_or_else(|| fail("--frame-size expects WxH"));
            }
            "--viewport" => {
                let raw = value();
                let (size, dpr) = match raw.split_once('@') {
                    Some((size, dpr)) => (size.to_string(), dpr.parse().ok()),
                    None => (raw.clone(), Some(1.0)),
                };
                let (w, h) = parse_pair::<f64>(&size, 'x')
                    .unwrap_or_else(|| fail("--viewport expects WxH[@DPR]"));
                let dpr = dpr.unwrap_or_else(|| fail("--viewport DPR must be a number"));
                opts.viewport = (w, h, dpr);
            }
            "--section" => {
                opts.section = parse_pair(&value(), ':')
                    .unwrap_or_else(|| fail("--section expects TOP:HEIGHT"));
            }
            "-o" => opts.output = Some(value()),
            other => match other.parse::<f64>() {
                Ok(offset) => opts.offsets.push(offset),
                Err(_) => fail(&format!("Unknown argument: {}", other)),
            },
        }
    }

    if opts.frames == 0 {
        fail("--frames must be at least 1");
    }
    if opts.offsets.is_empty() {
        fail("No scroll offsets given");
    }
    opts
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let opts = parse_args(&args);

    let (vw, vh, dpr) = opts.viewport;
    let (fw, fh) = opts.frame_size;
    let store = FrameStore::from_scheme(
        &LocatorScheme::default(),
        opts.frames,
        ReadinessPolicy::AllFrames,
    );
    let mut player = SequencePlayer::new(store, RecordingSurface::new(), Viewport::with_size(vw, vh, dpr));
    for index in 0..opts.frames {
        player.frame_loaded(index, fw, fh);
    }

    let base = ScrollSample {
        section_top: opts.section.0,
        section_height: opts.section.1,
        viewport_height: vh,
        scroll_offset: 0.0,
    };

    let steps: Vec<Step> = opts
        .offsets
        .iter()
        .map(|&offset| {
            let sample = base.at_offset(offset);
            let outcome = player.tick(&sample);
            let frame_index = player.current_frame();
            Step {
                scroll_offset: offset,
                progress: sample.progress().value(),
                frame_index,
                locator: player
                    .store()
                    .get(frame_index)
                    .map(|f| f.locator.clone())
                    .unwrap_or_default(),
                redrawn: matches!(outcome, TickOutcome::Drawn(_)),
                placement: cover_fit(fw, fh, player.renderer().viewport()),
            }
        })
        .collect();

    // Serialize to JSON
    let json = match serde_json::to_string_pretty(&steps) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error serializing JSON: {}", e);
            std::process::exit(1);
        }
    };

    // Output
    match opts.output {
        Some(path) => {
            if let Err(e) = fs::write(&path, &json) {
                eprintln!("Error writing {}: {}", path, e);
                std::process::exit(1);
            }
            eprintln!("Written: {}", path);
        }
        None => {
            io::stdout().write_all(json.as_bytes()).unwrap();
            println!();
        }
    }
}
