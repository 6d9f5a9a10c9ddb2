//! The native (browser-level) validation channel.
//!
//! Form managers can mirror field errors into the platform's own validity
//! UI. [`NativeValidation`] abstracts that channel and
//! [`validate_fields_natively`] pushes an [`ErrorMap`] through it for every
//! registered field.

use tracing::trace;

use crate::field_error::ErrorMap;
use crate::resolver::ResolverOptions;

/// A sink for per-field custom validity messages.
///
/// An empty message marks the field valid.
pub trait NativeValidation: Send + Sync {
    /// Sets the custom validity message shown for `field`.
    fn set_custom_validity(&self, field: &str, message: &str);

    /// Asks the channel to display `field`'s current validity.
    fn report_validity(&self, field: &str);
}

/// Sets and reports native validity for every field registered in `options`.
///
/// Each field gets the message of its entry in `errors`, or an empty message
/// when it has none, so passing an empty map clears all native errors.
/// Does nothing when `options` carries no native channel.
pub fn validate_fields_natively(errors: &ErrorMap, options: &ResolverOptions) {
    let Some(native) = options.native.as_deref() else {
        return;
    };

    for field in &options.fields {
        let message = errors
            .get(field.as_str())
            .map(|error| error.message.as_str())
            .unwrap_or("");
        trace!(field = %field, validity = message, "setting native validity");
        native.set_custom_validity(field, message);
        native.report_validity(field);
    }
}
