use augur_core::{AugurError, Capability};

/// Final error for a routed call that produced no value.
///
/// No connector offered `capability` gives `Unsupported`. Otherwise the
/// collected errors are inspected: when every one is a timeout the call timed
/// out as a whole, when every one is a miss it reports `NotFound(what)`, and
/// anything else is returned as `AllProvidersFailed`.
pub fn collapse_errors(
    capability: Capability,
    attempted_any: bool,
    errors: Vec<AugurError>,
    not_found_what: Option<String>,
) -> AugurError {
    if !attempted_any {
        return AugurError::unsupported(capability.as_str());
    }
    let every = |pred: fn(&AugurError) -> bool| !errors.is_empty() && errors.iter().all(pred);

    if every(|e| matches!(e, AugurError::ProviderTimeout { .. })) {
        return AugurError::AllProvidersTimedOut {
            capability: capability.to_string(),
        };
    }
    match not_found_what {
        Some(what) if every(|e| matches!(e, AugurError::NotFound { .. })) => {
            AugurError::not_found(what)
        }
        _ => AugurError::AllProvidersFailed(errors),
    }
}
