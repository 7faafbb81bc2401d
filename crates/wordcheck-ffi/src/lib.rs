// FFI functions are inherently unsafe; callers must ensure pointer validity.
// Safety contracts are documented per-function in the public API comments.
#![allow(clippy::missing_safety_doc)]

// wordcheck-ffi: C-compatible FFI layer for the Dictionary facade.
//
// Exposes a stable C ABI usable from any language with C FFI support.
//
// Memory management rules:
// - Opaque `Dictionary` pointer: created by `wordcheck_dictionary_new`,
//   destroyed by `wordcheck_dictionary_close` (which also drains and joins
//   the worker thread).
// - All input strings are UTF-8 encoded, null-terminated C strings.
// - The misspelling callback receives a null-terminated string that is only
//   valid for the duration of the call; it is invoked from the worker
//   thread, not the thread that called `wordcheck_check`.

use std::ffi::{CStr, CString, c_char, c_int};

use wordcheck::Dictionary;

/// Callback invoked once per misspelled word, in document order, with the
/// word already lowercased. Invoked from the dictionary's worker thread.
pub type WordcheckCallback = unsafe extern "C" fn(misspelled: *const c_char);

// ── Lifecycle ───────────────────────────────────────────────────

/// Create a new, empty dictionary and start its worker thread.
///
/// Returns an opaque pointer on success, NULL if the worker thread could
/// not be created.
#[unsafe(no_mangle)]
pub extern "C" fn wordcheck_dictionary_new() -> *mut Dictionary {
    match Dictionary::new() {
        Ok(dict) => Box::into_raw(Box::new(dict)),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Close and free a dictionary created by `wordcheck_dictionary_new`.
///
/// Blocks until every pending task has executed and the worker thread has
/// exited. The handle is invalid afterwards. A NULL handle is tolerated.
/// Returns 0 on success.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn wordcheck_dictionary_close(dict: *mut Dictionary) -> c_int {
    if !dict.is_null() {
        // Drop runs close(): shutdown is enqueued and the worker joined.
        drop(unsafe { Box::from_raw(dict) });
    }
    0
}

// ── Operations ──────────────────────────────────────────────────

/// Add a word to the dictionary.
///
/// The word must consist only of bytes in {A-Z, a-z, 0-9, 0x80-0xFF};
/// uppercase ASCII letters are folded to lowercase. Duplicates are accepted
/// silently. Returns 0 if the word was accepted, -1 on invalid arguments or
/// an invalid word.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn wordcheck_add_word(
    dict: *const Dictionary,
    word: *const c_char,
) -> c_int {
    let Some(dict) = (unsafe { dict.as_ref() }) else {
        return -1;
    };
    let Some(word) = cstr_to_str(word) else {
        return -1;
    };
    match dict.add_word(word) {
        Ok(()) => 0,
        Err(_) => -1,
    }
}

/// Spell-check a text.
///
/// Every byte outside {A-Z, a-z, 0-9, 0x80-0xFF} is a word delimiter. For
/// each token absent from the dictionary, `callback` is invoked with the
/// lowercased token, in document order, duplicates included. The call
/// returns once the task is enqueued; callbacks fire later, from the
/// worker thread. Use `wordcheck_flush` or `wordcheck_dictionary_close` to
/// await them. Returns 0 on success, -1 on invalid arguments.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn wordcheck_check(
    dict: *const Dictionary,
    text: *const c_char,
    callback: Option<WordcheckCallback>,
) -> c_int {
    let Some(dict) = (unsafe { dict.as_ref() }) else {
        return -1;
    };
    let Some(text) = cstr_to_str(text) else {
        return -1;
    };
    let Some(callback) = callback else {
        return -1;
    };

    let result = dict.check(text, move |word| {
        // Tokens contain no interior NUL: 0x00 is a delimiter byte.
        if let Ok(c_word) = CString::new(word) {
            unsafe { callback(c_word.as_ptr()) };
        }
    });
    match result {
        Ok(()) => 0,
        Err(_) => -1,
    }
}

/// Block until every task enqueued before this call has been executed.
/// Returns 0 on success, -1 on invalid arguments.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn wordcheck_flush(dict: *const Dictionary) -> c_int {
    let Some(dict) = (unsafe { dict.as_ref() }) else {
        return -1;
    };
    match dict.flush() {
        Ok(()) => 0,
        Err(_) => -1,
    }
}

// ── Helpers ─────────────────────────────────────────────────────

fn cstr_to_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(ptr) }.to_str().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // A C-style callback target: collected words land in a global, since an
    // extern "C" fn cannot capture environment.
    static SEEN: Mutex<Vec<String>> = Mutex::new(Vec::new());

    unsafe extern "C" fn record(word: *const c_char) {
        let word = unsafe { CStr::from_ptr(word) }.to_string_lossy().into_owned();
        SEEN.lock().unwrap().push(word);
    }

    #[test]
    fn lifecycle_add_check_close() {
        SEEN.lock().unwrap().clear();

        let dict = wordcheck_dictionary_new();
        assert!(!dict.is_null());

        let hello = CString::new("hello").unwrap();
        assert_eq!(unsafe { wordcheck_add_word(dict, hello.as_ptr()) }, 0);

        let text = CString::new("hello wrold").unwrap();
        assert_eq!(unsafe { wordcheck_check(dict, text.as_ptr(), Some(record)) }, 0);
        assert_eq!(unsafe { wordcheck_flush(dict) }, 0);
        assert_eq!(*SEEN.lock().unwrap(), ["wrold"]);

        assert_eq!(unsafe { wordcheck_dictionary_close(dict) }, 0);
    }

    #[test]
    fn invalid_word_returns_error() {
        let dict = wordcheck_dictionary_new();
        let bad = CString::new("foo!bar").unwrap();
        assert_eq!(unsafe { wordcheck_add_word(dict, bad.as_ptr()) }, -1);
        assert_eq!(unsafe { wordcheck_dictionary_close(dict) }, 0);
    }

    #[test]
    fn null_arguments_are_rejected() {
        let dict = wordcheck_dictionary_new();
        let word = CString::new("ok").unwrap();

        assert_eq!(
            unsafe { wordcheck_add_word(std::ptr::null(), word.as_ptr()) },
            -1
        );
        assert_eq!(unsafe { wordcheck_add_word(dict, std::ptr::null()) }, -1);
        assert_eq!(
            unsafe { wordcheck_check(dict, std::ptr::null(), Some(record)) },
            -1
        );
        assert_eq!(unsafe { wordcheck_check(dict, word.as_ptr(), None) }, -1);
        assert_eq!(unsafe { wordcheck_flush(std::ptr::null()) }, -1);

        assert_eq!(unsafe { wordcheck_dictionary_close(dict) }, 0);
    }

    #[test]
    fn close_tolerates_null() {
        assert_eq!(unsafe { wordcheck_dictionary_close(std::ptr::null_mut()) }, 0);
    }
}
