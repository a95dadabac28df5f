// Copyright 2026 the Headsign Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bulk translation of a draft's English text into the other selected
//! languages.

use headsign_config::{DraftConfig, Language, SlotAddress};
use log::warn;

use crate::services::Translator;

/// Fills every empty non-English translation from the slot's English text.
///
/// For each slot with non-empty English text, every other selected
/// language whose translation is still empty gets one translation call;
/// translations the operator already typed are left alone. Purely numeric
/// text (route numbers) is copied verbatim without a service call, and a
/// failed call degrades to the English text so the draft never loses a
/// slot over a flaky service.
///
/// Returns the number of `(slot, language)` pairs that were filled in.
pub fn fill_translations<T: Translator + ?Sized>(draft: &mut DraftConfig, translator: &T) -> usize {
    let sources: Vec<(SlotAddress, String)> = draft
        .screens()
        .slots()
        .map(|(addr, slot)| {
            let english = slot.translation(Language::En).unwrap_or_default();
            (addr, english.to_string())
        })
        .collect();
    let targets: Vec<Language> = draft.languages().languages().to_vec();

    let mut filled = 0;
    for (addr, source) in sources {
        if source.is_empty() {
            continue;
        }
        for target in targets.iter().copied() {
            if target == Language::En {
                continue;
            }
            let untouched = draft
                .screens()
                .slot(addr)
                .and_then(|slot| slot.translation(target))
                .is_some_and(str::is_empty);
            if !untouched {
                continue;
            }
            let text = if is_numeric(&source) {
                source.clone()
            } else {
                match translator.translate(&source, Language::En, target) {
                    Ok(text) => text,
                    Err(err) => {
                        warn!("translation to {target} failed for {addr}: {err}");
                        source.clone()
                    }
                }
            };
            if draft.set_translation(addr, target, &text) {
                filled += 1;
            }
        }
    }
    filled
}

/// Route numbers and other numerals read the same in every script.
fn is_numeric(text: &str) -> bool {
    text.trim().parse::<f64>().is_ok()
}
