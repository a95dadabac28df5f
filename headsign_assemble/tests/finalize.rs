// Copyright 2026 the Headsign Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Finalization against stand-in rasterization services: fan-out, merge
//! order, and per-pair degradation.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use headsign_assemble::{
    Assembler, BitmapRasterizer, RASTER_GLYPH_SIZE, RasterBitmap, RasterRequest, ServiceError,
};
use headsign_config::{
    BitmapRecord, DraftConfig, Language, Route, ScreenKind, SlotAddress, TextSlot,
};

/// Renders each character as one pixel holding the requested glyph size,
/// so assertions can tell which request produced a record.
struct Ruler;

impl BitmapRasterizer for Ruler {
    fn rasterize(&self, request: &RasterRequest<'_>) -> Result<RasterBitmap, ServiceError> {
        let count = request.text.chars().count();
        Ok(RasterBitmap {
            bitmap: vec![request.size; count],
            width: u32::try_from(count).unwrap(),
            height: 1,
        })
    }
}

/// Refuses every request.
struct Offline;

impl BitmapRasterizer for Offline {
    fn rasterize(&self, _: &RasterRequest<'_>) -> Result<RasterBitmap, ServiceError> {
        Err(ServiceError::Transport("connection refused".to_string()))
    }
}

/// Fails requests for one specific string, succeeds for the rest.
struct Flaky(&'static str);

impl BitmapRasterizer for Flaky {
    fn rasterize(&self, request: &RasterRequest<'_>) -> Result<RasterBitmap, ServiceError> {
        if request.text == self.0 {
            return Err(ServiceError::Status(502));
        }
        Ruler.rasterize(request)
    }
}

/// Counts requests through a shared counter while answering like
/// [`Ruler`].
struct Counting(Arc<AtomicUsize>);

impl BitmapRasterizer for Counting {
    fn rasterize(&self, request: &RasterRequest<'_>) -> Result<RasterBitmap, ServiceError> {
        self.0.fetch_add(1, Ordering::SeqCst);
        Ruler.rasterize(request)
    }
}

/// Records every request into a shared log.
struct Probe(Arc<Mutex<Vec<(String, String, u32)>>>);

impl BitmapRasterizer for Probe {
    fn rasterize(&self, request: &RasterRequest<'_>) -> Result<RasterBitmap, ServiceError> {
        self.0.lock().unwrap().push((
            request.text.to_string(),
            request.font_file.to_string(),
            request.size,
        ));
        Ruler.rasterize(request)
    }
}

/// A bilingual draft with both front slots populated.
fn uppal_draft() -> DraftConfig {
    let route = Route {
        route_number: "300".to_string(),
        source: "UPPAL".to_string(),
        destination: "MEHDIPATNAM".to_string(),
        ..Route::default()
    };
    let mut draft = DraftConfig::new(route, Language::En);
    draft.select_language(Language::Hi);
    draft.set_translation(front(TextSlot::SideText), Language::En, "300");
    draft.set_translation(front(TextSlot::SideText), Language::Hi, "300");
    draft.set_translation(front(TextSlot::Text), Language::En, "UPPAL");
    draft.set_translation(front(TextSlot::Text), Language::Hi, "उप्पल");
    draft
}

fn front(slot: TextSlot) -> SlotAddress {
    SlotAddress::new(ScreenKind::Front, slot)
}

#[test]
fn finalize_populates_every_nonempty_pair() {
    let config = uppal_draft().to_config();
    let resolved = Assembler::new(Ruler).finalize(&config);

    assert!(resolved.is_fully_rasterized(), "every request succeeded");
    let slot = resolved
        .config()
        .screens()
        .slot(front(TextSlot::Text))
        .unwrap();
    assert_eq!(slot.bitmaps.len(), 2, "both languages were rasterized");
    let record = &slot.bitmaps[&Language::En];
    assert_eq!(record.width, 5, "UPPAL is five glyphs wide");
    assert_eq!(record.height, 1, "ruler strips are one pixel tall");
    assert_eq!(
        record.bitmap, "16,16,16,16,16",
        "pixels are stored comma-joined"
    );
}

#[test]
fn requests_carry_the_language_font_and_board_glyph_size() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let resolved = Assembler::new(Probe(Arc::clone(&log))).finalize(&uppal_draft().to_config());
    assert!(resolved.is_fully_rasterized(), "the probe answers every request");

    let seen = log.lock().unwrap();
    assert_eq!(seen.len(), 4, "one request per populated pair");
    for (text, _, size) in seen.iter() {
        assert_eq!(
            *size, RASTER_GLYPH_SIZE,
            "{text} was requested at the board glyph size"
        );
    }
    let devanagari = seen
        .iter()
        .find(|(text, _, _)| text == "उप्पल")
        .unwrap();
    assert_eq!(
        devanagari.1,
        Language::Hi.font_file(),
        "Hindi text rides with the Devanagari font file"
    );
    let latin = seen.iter().find(|(text, _, _)| text == "UPPAL").unwrap();
    assert_eq!(
        latin.1,
        Language::En.font_file(),
        "English text rides with the Latin font file"
    );
}

#[test]
fn offline_service_degrades_every_pair_to_fallback() {
    let config = uppal_draft().to_config();
    let resolved = Assembler::new(Offline).finalize(&config);

    assert!(
        !resolved.is_fully_rasterized(),
        "no request can have succeeded"
    );
    assert_eq!(
        resolved.fallbacks(),
        [
            (front(TextSlot::SideText), Language::En),
            (front(TextSlot::SideText), Language::Hi),
            (front(TextSlot::Text), Language::En),
            (front(TextSlot::Text), Language::Hi),
        ],
        "every populated pair degraded, in slot order"
    );
    let slot = resolved
        .config()
        .screens()
        .slot(front(TextSlot::Text))
        .unwrap();
    assert_eq!(
        slot.bitmaps[&Language::Hi],
        BitmapRecord::fallback("उप्पल"),
        "the fallback record echoes the original text"
    );
    assert!(
        slot.bitmaps[&Language::Hi].is_fallback(),
        "zero dimensions mark the record degraded"
    );
}

#[test]
fn flaky_service_degrades_only_the_failing_pair() {
    let config = uppal_draft().to_config();
    let resolved = Assembler::new(Flaky("उप्पल")).finalize(&config);

    assert_eq!(
        resolved.fallbacks(),
        [(front(TextSlot::Text), Language::Hi)],
        "only the refused string degraded"
    );
    let slot = resolved
        .config()
        .screens()
        .slot(front(TextSlot::Text))
        .unwrap();
    assert_eq!(
        slot.bitmaps[&Language::En].bitmap, "16,16,16,16,16",
        "the sibling language still rasterized"
    );
    assert_eq!(
        slot.bitmaps[&Language::Hi].width,
        0,
        "the refused pair fell back"
    );
}

#[test]
fn empty_translations_issue_no_requests() {
    let route = Route {
        route_number: "47L".to_string(),
        ..Route::default()
    };
    let mut draft = DraftConfig::new(route, Language::En);
    draft.select_language(Language::Te);
    draft.set_translation(front(TextSlot::Text), Language::En, "SECUNDERABAD");
    // Telugu stays empty everywhere.

    let calls = Arc::new(AtomicUsize::new(0));
    let resolved = Assembler::new(Counting(Arc::clone(&calls))).finalize(&draft.to_config());

    assert_eq!(
        calls.load(Ordering::SeqCst),
        1,
        "one request for the one populated pair"
    );
    let slot = resolved
        .config()
        .screens()
        .slot(front(TextSlot::Text))
        .unwrap();
    assert_eq!(slot.bitmaps.len(), 1, "only the populated language resolved");
    assert!(
        !slot.bitmaps.contains_key(&Language::Te),
        "no record is invented for an empty translation"
    );
}

#[test]
fn finalize_leaves_the_input_untouched() {
    let config = uppal_draft().to_config();
    let before = config.clone();

    let resolved = Assembler::new(Ruler).finalize(&config);

    assert_eq!(config, before, "finalize works on a deep copy");
    assert!(
        config
            .screens()
            .slot(front(TextSlot::Text))
            .unwrap()
            .bitmaps
            .is_empty(),
        "the draft's record still has no bitmaps"
    );
    assert!(
        !resolved
            .config()
            .screens()
            .slot(front(TextSlot::Text))
            .unwrap()
            .bitmaps
            .is_empty(),
        "the resolved record does"
    );
}

#[test]
fn a_small_pool_still_resolves_every_pair() {
    let mut draft = uppal_draft();
    for kind in ScreenKind::ALL {
        let slots: Vec<TextSlot> = draft
            .screens()
            .get(kind)
            .slots()
            .map(|(slot, _)| slot)
            .collect();
        for slot in slots {
            let addr = SlotAddress::new(kind, slot);
            draft.set_translation(addr, Language::En, "DILSUKHNAGAR");
            draft.set_translation(addr, Language::Hi, "दिलसुखनगर");
        }
    }

    let calls = Arc::new(AtomicUsize::new(0));
    let resolved = Assembler::new(Counting(Arc::clone(&calls)))
        .with_workers(2)
        .finalize(&draft.to_config());

    assert!(resolved.is_fully_rasterized(), "all pairs came back");
    // Front two + side single + rear three + internal single slots, in two
    // languages each.
    assert_eq!(
        calls.load(Ordering::SeqCst),
        14,
        "one request per populated pair"
    );
    let resolved_pairs = resolved
        .config()
        .screens()
        .slots()
        .map(|(_, slot)| slot.bitmaps.len())
        .sum::<usize>();
    assert_eq!(resolved_pairs, 14, "one record per populated pair");
}
