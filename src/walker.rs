//! Recursive translation of JSON document trees.

use serde_json::Value;

use crate::translator::{TranslationBackend, Translator};

/// Return a structurally identical value with every string leaf translated.
///
/// Object keys and their order are preserved, array order and length are
/// preserved, and non-string scalars pass through unchanged. Translation
/// failures are absorbed inside the [`Translator`], so one bad leaf never
/// blocks its siblings.
pub fn translate_value<B: TranslationBackend>(value: &Value, translator: &Translator<B>) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, value)| (key.clone(), translate_value(value, translator)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| translate_value(item, translator))
                .collect(),
        ),
        Value::String(text) => Value::String(translator.translate(text)),
        other => other.clone(),
    }
}
