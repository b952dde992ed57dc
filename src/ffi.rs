//! FFI interface for C/C++ callers
//!
//! Results cross the boundary as JSON strings owned by Rust.

use std::ffi::{c_char, CStr, CString};
use std::ptr;

use serde::Serialize;

use crate::config::{ExtractorConfig, DEFAULT_CONFIG};
use crate::extractors::MetaImages;
use crate::pipeline::{extract_product_images, PageSnapshot};

/// Result struct returned to C/C++
/// Both pointers are owned by Rust and must be freed via free_extraction_result
#[repr(C)]
pub struct ExtractionResultFFI {
    /// JSON-serialized result (null-terminated)
    pub json_ptr: *mut c_char,
    /// Error message if extraction failed (null-terminated), or null on success
    pub error_ptr: *mut c_char,
}

/// Extract product images from a page.
///
/// # Arguments
/// * `html_ptr` - Pointer to HTML content (UTF-8, not necessarily null-terminated)
/// * `html_len` - Length of HTML content in bytes
/// * `source_url` - Page URL (null-terminated), used for site strategy selection
/// * `config_toml` - Optional TOML configuration (null-terminated), or null for defaults
///
/// # Safety
/// - `html_ptr` must point to valid memory of at least `html_len` bytes
/// - `source_url` must be a valid null-terminated C string
/// - `config_toml` must be null or a valid null-terminated C string
/// - Caller must free the result via `free_extraction_result`
#[no_mangle]
pub unsafe extern "C" fn extract_product_images_ffi(
    html_ptr: *const c_char,
    html_len: usize,
    source_url: *const c_char,
    config_toml: *const c_char,
) -> ExtractionResultFFI {
    let html = match read_html(html_ptr, html_len) {
        Ok(html) => html,
        Err(msg) => return make_error_result(msg),
    };

    let source_url = match read_cstr(source_url) {
        Some(Ok(s)) => s,
        Some(Err(_)) => return make_error_result("Invalid UTF-8 in source URL"),
        None => return make_error_result("Source URL is null"),
    };

    let custom_config;
    let config: &ExtractorConfig = match read_cstr(config_toml) {
        None => &*DEFAULT_CONFIG,
        Some(Err(_)) => return make_error_result("Invalid UTF-8 in configuration"),
        Some(Ok(toml)) => match ExtractorConfig::from_toml_str(toml) {
            Ok(c) => {
                custom_config = c;
                &custom_config
            }
            Err(e) => return make_error_result(&e.to_string()),
        },
    };

    let page = PageSnapshot::new(source_url, html);
    to_json_result(&extract_product_images(&page, config))
}

/// Read OpenGraph/Twitter/microdata image metadata from HTML (convenience function)
///
/// # Safety
/// Same as extract_product_images_ffi
#[no_mangle]
pub unsafe extern "C" fn extract_meta_images_ffi(
    html_ptr: *const c_char,
    html_len: usize,
) -> ExtractionResultFFI {
    let html = match read_html(html_ptr, html_len) {
        Ok(html) => html,
        Err(msg) => return make_error_result(msg),
    };

    to_json_result(&MetaImages::from_html(&html))
}

/// Free an ExtractionResultFFI returned by this module
///
/// # Safety
/// - `result` must have been returned by one of the `*_ffi` functions
/// - Must only be called once per result
#[no_mangle]
pub unsafe extern "C" fn free_extraction_result(result: ExtractionResultFFI) {
    if !result.json_ptr.is_null() {
        drop(CString::from_raw(result.json_ptr));
    }
    if !result.error_ptr.is_null() {
        drop(CString::from_raw(result.error_ptr));
    }
}

unsafe fn read_html(html_ptr: *const c_char, html_len: usize) -> Result<String, &'static str> {
    if html_ptr.is_null() || html_len == 0 {
        return Ok(String::new());
    }
    let slice = std::slice::from_raw_parts(html_ptr as *const u8, html_len);
    std::str::from_utf8(slice)
        .map(str::to_string)
        .map_err(|_| "Invalid UTF-8 in HTML content")
}

unsafe fn read_cstr<'a>(ptr: *const c_char) -> Option<Result<&'a str, std::str::Utf8Error>> {
    if ptr.is_null() {
        None
    } else {
        Some(CStr::from_ptr(ptr).to_str())
    }
}

fn to_json_result<T: Serialize>(value: &T) -> ExtractionResultFFI {
    match serde_json::to_string(value) {
        Ok(json) => match CString::new(json) {
            Ok(cstr) => ExtractionResultFFI {
                json_ptr: cstr.into_raw(),
                error_ptr: ptr::null_mut(),
            },
            Err(_) => make_error_result("Result JSON contains null bytes"),
        },
        Err(e) => make_error_result(&format!("Failed to serialize result: {}", e)),
    }
}

// Helper to create error result
fn make_error_result(msg: &str) -> ExtractionResultFFI {
    let error_cstr = CString::new(msg).unwrap_or_else(|_| CString::from(c"Unknown error"));
    ExtractionResultFFI {
        json_ptr: ptr::null_mut(),
        error_ptr: error_cstr.into_raw(),
    }
}
