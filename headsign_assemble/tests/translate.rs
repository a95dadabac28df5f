// Copyright 2026 the Headsign Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bulk translation semantics: what gets filled, what gets skipped, and
//! how failures degrade.

use std::sync::atomic::{AtomicUsize, Ordering};

use headsign_assemble::{ServiceError, Translator, fill_translations};
use headsign_config::{DraftConfig, Language, Route, ScreenKind, SlotAddress, TextSlot};

/// Tags the input with the target language code, so assertions can see
/// which call produced a value.
struct Tagging;

impl Translator for Tagging {
    fn translate(
        &self,
        text: &str,
        _source: Language,
        target: Language,
    ) -> Result<String, ServiceError> {
        Ok(format!("{text}:{}", target.code()))
    }
}

/// Refuses every call.
struct Refusing;

impl Translator for Refusing {
    fn translate(&self, _: &str, _: Language, _: Language) -> Result<String, ServiceError> {
        Err(ServiceError::Status(503))
    }
}

/// Counts calls while answering like [`Tagging`].
struct Counting(AtomicUsize);

impl Translator for Counting {
    fn translate(
        &self,
        text: &str,
        source: Language,
        target: Language,
    ) -> Result<String, ServiceError> {
        self.0.fetch_add(1, Ordering::SeqCst);
        Tagging.translate(text, source, target)
    }
}

fn front_text() -> SlotAddress {
    SlotAddress::new(ScreenKind::Front, TextSlot::Text)
}

fn trilingual_draft() -> DraftConfig {
    let route = Route {
        route_number: "218".to_string(),
        ..Route::default()
    };
    let mut draft = DraftConfig::new(route, Language::En);
    draft.select_language(Language::Hi);
    draft.select_language(Language::Te);
    draft
}

#[test]
fn fills_every_empty_target_from_english() {
    let mut draft = trilingual_draft();
    draft.set_translation(front_text(), Language::En, "UPPAL");

    let filled = fill_translations(&mut draft, &Tagging);

    assert_eq!(filled, 2, "Hindi and Telugu were filled");
    let slot = draft.screens().slot(front_text()).unwrap();
    assert_eq!(
        slot.translation(Language::Hi),
        Some("UPPAL:hi"),
        "Hindi came from the translator"
    );
    assert_eq!(
        slot.translation(Language::Te),
        Some("UPPAL:te"),
        "Telugu came from the translator"
    );
    assert_eq!(
        slot.translation(Language::En),
        Some("UPPAL"),
        "the English source is untouched"
    );
}

#[test]
fn hand_typed_translations_are_left_alone() {
    let mut draft = trilingual_draft();
    draft.set_translation(front_text(), Language::En, "UPPAL");
    draft.set_translation(front_text(), Language::Hi, "उप्पल");

    let calls = Counting(AtomicUsize::new(0));
    let filled = fill_translations(&mut draft, &calls);

    assert_eq!(filled, 1, "only the empty Telugu slot was filled");
    assert_eq!(
        calls.0.load(Ordering::SeqCst),
        1,
        "no call was made for the hand-typed Hindi"
    );
    let slot = draft.screens().slot(front_text()).unwrap();
    assert_eq!(
        slot.translation(Language::Hi),
        Some("उप्पल"),
        "the operator's Hindi survives"
    );
}

#[test]
fn numeric_text_is_copied_without_a_service_call() {
    let mut draft = trilingual_draft();
    draft.set_translation(
        SlotAddress::new(ScreenKind::Front, TextSlot::SideText),
        Language::En,
        "218",
    );

    let calls = Counting(AtomicUsize::new(0));
    let filled = fill_translations(&mut draft, &calls);

    assert_eq!(filled, 2, "both targets were filled");
    assert_eq!(
        calls.0.load(Ordering::SeqCst),
        0,
        "numerals never reach the service"
    );
    let slot = draft
        .screens()
        .slot(SlotAddress::new(ScreenKind::Front, TextSlot::SideText))
        .unwrap();
    assert_eq!(
        slot.translation(Language::Hi),
        Some("218"),
        "numerals are copied verbatim"
    );
}

#[test]
fn failed_calls_degrade_to_the_english_text() {
    let mut draft = trilingual_draft();
    draft.set_translation(front_text(), Language::En, "UPPAL");

    let filled = fill_translations(&mut draft, &Refusing);

    assert_eq!(filled, 2, "degraded fills still count");
    let slot = draft.screens().slot(front_text()).unwrap();
    assert_eq!(
        slot.translation(Language::Hi),
        Some("UPPAL"),
        "a refused call falls back to the source text"
    );
    assert_eq!(
        slot.translation(Language::Te),
        Some("UPPAL"),
        "every refused target falls back independently"
    );
}

#[test]
fn empty_sources_fill_nothing() {
    let mut draft = trilingual_draft();

    let calls = Counting(AtomicUsize::new(0));
    let filled = fill_translations(&mut draft, &calls);

    assert_eq!(filled, 0, "nothing to translate");
    assert_eq!(
        calls.0.load(Ordering::SeqCst),
        0,
        "no calls for empty sources"
    );
}

#[test]
fn english_is_never_a_target() {
    let mut draft = trilingual_draft();
    draft.set_translation(front_text(), Language::En, "UPPAL");

    fill_translations(&mut draft, &Tagging);

    let slot = draft.screens().slot(front_text()).unwrap();
    assert_eq!(
        slot.translation(Language::En),
        Some("UPPAL"),
        "English keeps the typed text rather than a tagged copy"
    );
}
