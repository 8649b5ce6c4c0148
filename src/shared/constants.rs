/// Cache-Control value for every rendered page and fragment
pub const NO_STORE: &str = "no-store, no-cache, must-revalidate";

// =============================================================================
// PAYMENT SDK
// =============================================================================

/// Hosted checkout script, loaded client-side on the storefront
pub const PAYMENT_SCRIPT_URL: &str = "https://app.sandbox.midtrans.com/snap/snap.js";

/// DOM id of the injected script element; the loader skips injection when present
pub const PAYMENT_SCRIPT_ELEMENT_ID: &str = "payment-sdk";
