use serde_json::{Map, Value};

use crate::errors::CoreError;

/// Keys under which the source nests its useful object.
const WRAPPER_KEYS: &[&str] = &["result", "resultado", "data", "dados"];
/// Keys that may carry the DAS guide list.
const GUIDE_KEYS: &[&str] = &["guias", "das", "debitos"];
/// Keys that may carry the DASN declaration list.
const DECLARATION_KEYS: &[&str] = &["declaracoes", "dasn"];

/// Guide and declaration rows located inside a raw fiscal payload, still in
/// source form.
#[derive(Debug, Clone, Default)]
pub struct FiscalPayload {
    pub guides: Vec<Value>,
    pub declarations: Vec<Value>,
}

type ShapeMatcher = fn(&Value) -> Option<FiscalPayload>;

/// Shape matchers tried in order; the first match wins.
const SHAPE_MATCHERS: &[ShapeMatcher] = &[match_bare, match_wrapped, match_wrapper_array];

/// Locates the guide and declaration lists under the known nesting variants:
/// the bare result object, a single wrapper object, or an array of wrappers.
/// Fails with a descriptive error when no variant recognizes the payload.
pub fn locate(raw: &Value) -> Result<FiscalPayload, CoreError> {
    SHAPE_MATCHERS
        .iter()
        .find_map(|matcher| matcher(raw))
        .ok_or_else(|| {
            CoreError::MalformedFiscalPayload(
                "no recognizable guide or declaration structure".to_string(),
            )
        })
}

fn match_bare(value: &Value) -> Option<FiscalPayload> {
    let object = value.as_object()?;
    let guides = first_list(object, GUIDE_KEYS);
    let declarations = first_list(object, DECLARATION_KEYS);
    if guides.is_none() && declarations.is_none() {
        return None;
    }
    Some(FiscalPayload {
        guides: guides.unwrap_or_default(),
        declarations: declarations.unwrap_or_default(),
    })
}

fn match_wrapped(value: &Value) -> Option<FiscalPayload> {
    let object = value.as_object()?;
    WRAPPER_KEYS
        .iter()
        .filter_map(|key| object.get(*key))
        .find_map(match_bare)
}

fn match_wrapper_array(value: &Value) -> Option<FiscalPayload> {
    value
        .as_array()?
        .iter()
        .find_map(|element| match_bare(element).or_else(|| match_wrapped(element)))
}

fn first_list(object: &Map<String, Value>, keys: &[&str]) -> Option<Vec<Value>> {
    keys.iter()
        .filter_map(|key| object.get(*key))
        .find_map(|value| value.as_array().cloned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn locates_bare_result() {
        let raw = json!({ "guias": [{ "total": "10,00" }], "declaracoes": [] });
        let payload = locate(&raw).expect("bare shape");
        assert_eq!(payload.guides.len(), 1);
        assert!(payload.declarations.is_empty());
    }

    #[test]
    fn locates_single_wrapper() {
        let raw = json!({ "result": { "das": [], "dasn": [{ "ano": 2023 }] } });
        let payload = locate(&raw).expect("wrapped shape");
        assert_eq!(payload.declarations.len(), 1);
    }

    #[test]
    fn locates_first_matching_array_element() {
        let raw = json!([
            { "status": "ok" },
            { "result": { "guias": [{ "total": "10,00" }] } }
        ]);
        let payload = locate(&raw).expect("array shape");
        assert_eq!(payload.guides.len(), 1);
    }

    #[test]
    fn unrecognized_shape_fails() {
        let raw = json!({ "unrelated": true });
        let err = locate(&raw).expect_err("must not match");
        assert!(matches!(err, CoreError::MalformedFiscalPayload(_)));
    }
}
