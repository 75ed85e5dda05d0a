//! tree-sitter external scanner ABI
//!
//! The generated parser of a grammar named `COBOL` looks up five C symbols for its external
//! scanner. They wrap a boxed [Scanner] and adapt the runtime's `TSLexer` to the [Lexer]
//! contract. The payload pointer is the box; the runtime calls these functions from one
//! thread at a time per payload.

#![allow(non_snake_case)]

use crate::scanner::common::Lexer;
use crate::scanner::mode::FormatMode;
use crate::scanner::token::{TokenKind, TokenKindSet};
use crate::scanner::Scanner;
use std::ffi::{c_char, c_uint, c_void};

/// Mirror of the runtime's `TSLexer`, up to the last member the scanner reads.
#[repr(C)]
pub struct TSLexer {
    pub lookahead: i32,
    pub result_symbol: u16,
    pub advance: unsafe extern "C" fn(*mut TSLexer, bool),
    pub mark_end: unsafe extern "C" fn(*mut TSLexer),
    pub get_column: unsafe extern "C" fn(*mut TSLexer) -> u32,
    pub is_at_included_range_start: unsafe extern "C" fn(*const TSLexer) -> bool,
    pub eof: unsafe extern "C" fn(*const TSLexer) -> bool,
}

/// [Lexer] over a runtime lexer pointer, valid for one scan call.
struct RuntimeLexer {
    raw: *mut TSLexer,
}

impl Lexer for RuntimeLexer {
    fn lookahead(&self) -> Option<char> {
        // SAFETY: the runtime keeps the lexer alive and unaliased for the whole scan call.
        let at_eof = unsafe { ((*self.raw).eof)(self.raw) };
        if at_eof {
            return None;
        }
        // SAFETY: as above.
        let lookahead = unsafe { (*self.raw).lookahead };
        u32::try_from(lookahead)
            .ok()
            .filter(|&c| c != 0)
            .and_then(char::from_u32)
    }

    fn column(&self) -> u32 {
        // SAFETY: as in `lookahead`.
        unsafe { ((*self.raw).get_column)(self.raw) }
    }

    fn advance(&mut self, skip: bool) {
        // SAFETY: as in `lookahead`.
        unsafe { ((*self.raw).advance)(self.raw, skip) }
    }

    fn mark_end(&mut self) {
        // SAFETY: as in `lookahead`.
        unsafe { ((*self.raw).mark_end)(self.raw) }
    }

    fn set_result(&mut self, kind: TokenKind) {
        // SAFETY: as in `lookahead`.
        unsafe { (*self.raw).result_symbol = kind.index() as u16 }
    }
}

#[no_mangle]
pub extern "C" fn tree_sitter_COBOL_external_scanner_create() -> *mut c_void {
    Box::into_raw(Box::new(Scanner::new())).cast()
}

/// # Safety
///
/// `payload` must be null or a pointer returned by the create function, not yet destroyed.
#[no_mangle]
pub unsafe extern "C" fn tree_sitter_COBOL_external_scanner_destroy(payload: *mut c_void) {
    if payload.is_null() {
        return;
    }
    // SAFETY: the pointer came from `Box::into_raw` in the create function.
    drop(unsafe { Box::from_raw(payload.cast::<Scanner>()) });
}

/// # Safety
///
/// `payload` must be a live scanner, `lexer` a valid runtime lexer and `valid_symbols` an
/// array with one entry per external token.
#[no_mangle]
pub unsafe extern "C" fn tree_sitter_COBOL_external_scanner_scan(
    payload: *mut c_void,
    lexer: *mut TSLexer,
    valid_symbols: *const bool,
) -> bool {
    if payload.is_null() || lexer.is_null() || valid_symbols.is_null() {
        return false;
    }
    // SAFETY: guaranteed by the caller.
    let scanner = unsafe { &mut *payload.cast::<Scanner>() };
    // SAFETY: the runtime passes one flag per external token.
    let valid = unsafe { std::slice::from_raw_parts(valid_symbols, TokenKind::COUNT) };
    let admissible = TokenKindSet::from_valid_symbols(valid);
    scanner.scan(&mut RuntimeLexer { raw: lexer }, &admissible)
}

/// # Safety
///
/// `payload` must be null or a live scanner; `buffer` must hold at least one byte.
#[no_mangle]
pub unsafe extern "C" fn tree_sitter_COBOL_external_scanner_serialize(
    payload: *mut c_void,
    buffer: *mut c_char,
) -> c_uint {
    if payload.is_null() || buffer.is_null() {
        return 0;
    }
    // SAFETY: guaranteed by the caller.
    let scanner = unsafe { &*payload.cast::<Scanner>() };
    // SAFETY: the runtime's serialization buffer is far larger than the state.
    let target =
        unsafe { std::slice::from_raw_parts_mut(buffer.cast::<u8>(), FormatMode::SERIALIZED_LEN) };
    scanner.serialize_into(target) as c_uint
}

/// # Safety
///
/// `payload` must be null or a live scanner; `buffer` must hold `length` bytes.
#[no_mangle]
pub unsafe extern "C" fn tree_sitter_COBOL_external_scanner_deserialize(
    payload: *mut c_void,
    buffer: *const c_char,
    length: c_uint,
) {
    if payload.is_null() || buffer.is_null() || length == 0 {
        return;
    }
    // SAFETY: guaranteed by the caller.
    let scanner = unsafe { &mut *payload.cast::<Scanner>() };
    // SAFETY: guaranteed by the caller.
    let state = unsafe { std::slice::from_raw_parts(buffer.cast::<u8>(), length as usize) };
    scanner.deserialize(state);
}
