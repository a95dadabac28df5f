// Copyright 2026 the Headsign Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animates a route's headsign text across the simulated LED matrix.
//!
//! Renders one full marquee sweep of `SOURCE - DESTINATION` to the
//! terminal, ticking at the board rate for the configured scroll speed.

use std::io::{self, Write};
use std::thread;

use headsign_compose::{PlaceholderPattern, compose};
use headsign_config::{Route, ScrollSpeed};
use headsign_matrix::{Frame, ScrollState, frame_interval};

fn main() -> io::Result<()> {
    let route = Route {
        route_number: "300".to_string(),
        source: "UPPAL".to_string(),
        destination: "MEHDIPATNAM".to_string(),
        ..Route::default()
    };
    let text = compose(PlaceholderPattern::SourceDestination, &route);
    let speed = ScrollSpeed::new(8);
    let mut scroll = ScrollState::for_text(&text);

    print!("\x1b[2J");
    loop {
        let frame = Frame::render_window(&text, scroll.offset());
        print!("\x1b[H{} @ {:>3}\n{}", text, scroll.offset(), frame.to_ascii());
        io::stdout().flush()?;
        thread::sleep(frame_interval(speed));
        if scroll.advance() == 0 {
            break;
        }
    }
    Ok(())
}
