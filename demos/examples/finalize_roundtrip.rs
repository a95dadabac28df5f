// Copyright 2026 the Headsign Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Walks a route configuration from draft to exported artifact without
//! touching the network: the preview glyph table stands in for the
//! rasterization service.

use chrono::Local;
use headsign_assemble::{Assembler, BitmapRasterizer, RasterBitmap, RasterRequest, ServiceError};
use headsign_compose::{PlaceholderPattern, prefill};
use headsign_config::{DraftConfig, Language, Route, ScreenKind, SlotAddress, TextSlot};
use headsign_export::{ExportError, config_json, export_file_name};
use headsign_matrix::{GLYPH_SIZE, glyph};

/// Rasterizes with the preview font instead of a remote service.
struct GlyphStrip;

impl BitmapRasterizer for GlyphStrip {
    fn rasterize(&self, request: &RasterRequest<'_>) -> Result<RasterBitmap, ServiceError> {
        let chars: Vec<char> = request.text.chars().collect();
        let width = chars.len() * GLYPH_SIZE;
        let mut pixels = vec![0_u32; width * GLYPH_SIZE];
        for (cell, c) in chars.iter().enumerate() {
            for (y, row) in glyph(*c).iter().enumerate() {
                for x in 0..GLYPH_SIZE {
                    if (row >> (GLYPH_SIZE - 1 - x)) & 1 == 1 {
                        pixels[y * width + cell * GLYPH_SIZE + x] = 1;
                    }
                }
            }
        }
        Ok(RasterBitmap {
            bitmap: pixels,
            width: width as u32,
            height: GLYPH_SIZE as u32,
        })
    }
}

fn main() -> Result<(), ExportError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let route = Route {
        route_number: "300".to_string(),
        source: "UPPAL".to_string(),
        destination: "MEHDIPATNAM".to_string(),
        ..Route::default()
    };
    let mut draft = DraftConfig::new(route, Language::En);
    draft.select_language(Language::Hi);

    // English comes from the placeholder patterns, Hindi from the operator.
    let front_side = SlotAddress::new(ScreenKind::Front, TextSlot::SideText);
    let front_text = SlotAddress::new(ScreenKind::Front, TextSlot::Text);
    prefill(&mut draft, front_side, Language::En, PlaceholderPattern::RouteNumber);
    prefill(&mut draft, front_text, Language::En, PlaceholderPattern::SourceDestination);
    draft.set_translation(front_side, Language::Hi, "300");
    draft.set_translation(front_text, Language::Hi, "उप्पल - मेहदीपटनम");

    let resolved = Assembler::new(GlyphStrip).finalize(&draft.to_config());
    println!(
        "finalized: fully rasterized = {}, fallbacks = {}",
        resolved.is_fully_rasterized(),
        resolved.fallbacks().len()
    );

    let name = export_file_name(
        &resolved.config().route.route_number,
        Local::now().date_naive(),
    );
    println!("artifact {name}:");
    println!("{}", config_json(resolved.config())?);
    Ok(())
}
