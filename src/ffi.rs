//! C-compatible interface.
//!
//! One entry point takes a null-terminated JSON request and returns a
//! null-terminated JSON response (see [`crate::api`]). Returned strings are
//! allocated by Rust and must be released with [`itinerary_free_string`].

use std::ffi::{CStr, CString};
use std::ptr;

use libc::c_char;

use crate::api;
use crate::optimizer::RouteOptimizer;

/// Optimizes the stop order described by `request_json`.
///
/// Returns NULL only if `request_json` is NULL. Invalid UTF-8 and malformed
/// requests produce a failure response.
///
/// # Safety
///
/// `request_json` must be NULL or point to a valid null-terminated string.
#[no_mangle]
pub unsafe extern "C" fn itinerary_optimize_json(request_json: *const c_char) -> *mut c_char {
    if request_json.is_null() {
        return ptr::null_mut();
    }

    let body = match CStr::from_ptr(request_json).to_str() {
        Ok(s) => s,
        Err(_) => {
            let failure = r#"{"success":false,"error":"request is not valid UTF-8"}"#;
            return into_c_string(failure.to_string());
        }
    };

    into_c_string(api::handle_json(body, &RouteOptimizer::default()))
}

/// Frees a string returned by this library.
///
/// # Safety
///
/// `s` must be NULL or a pointer previously returned by this library that
/// has not been freed yet.
#[no_mangle]
pub unsafe extern "C" fn itinerary_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

// JSON output never contains interior NULs, but fall back to an empty string
// rather than panic across the boundary.
fn into_c_string(s: String) -> *mut c_char {
    CString::new(s).unwrap_or_default().into_raw()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(request: &str) -> String {
        let input = CString::new(request).expect("no interior NUL");
        unsafe {
            let out = itinerary_optimize_json(input.as_ptr());
            assert!(!out.is_null());
            let text = CStr::from_ptr(out).to_str().expect("utf-8").to_string();
            itinerary_free_string(out);
            text
        }
    }

    #[test]
    fn test_ffi_success() {
        let out = call(
            r#"{"stops":[
                {"id":"a","name":"A","coordinates":[0,0]},
                {"id":"b","name":"B","coordinates":[1,0]}
            ]}"#,
        );
        assert!(out.contains(r#""success":true"#));
        assert!(out.contains(r#""optimizedOrder":["a","b"]"#));
    }

    #[test]
    fn test_ffi_failure() {
        let out = call("{}");
        assert!(out.contains(r#""success":false"#));
    }

    #[test]
    fn test_ffi_null() {
        unsafe {
            assert!(itinerary_optimize_json(ptr::null()).is_null());
            itinerary_free_string(ptr::null_mut());
        }
    }
}
