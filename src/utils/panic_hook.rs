use std::any::Any;
use std::panic;
use leptos::logging::log;

/// Best-effort text of a panic payload.
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic".to_string()
    }
}

/// True for the RefCell panics raised when a signal is written while it is being read.
pub fn is_signal_borrow_panic(message: &str) -> bool {
    message.contains("BorrowMutError") || message.contains("already borrowed")
}

/// Sets up a panic hook that reports to the browser console and adds context
/// for the reactive-state panics the review widget can hit.
pub fn set_custom_panic_hook() {
    panic::set_hook(Box::new(move |panic_info| {
        // Full message and stack trace in the console
        console_error_panic_hook::hook(panic_info);

        let message = panic_message(panic_info.payload());
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_else(|| "unknown location".to_string());

        log!("[PANIC] Review widget panicked at {}: {}", location, message);

        if is_signal_borrow_panic(&message) {
            log!("[PANIC] The review board signal was updated while it was being read.");
            log!("[PANIC] Check for board.update(..) called inside board.with(..).");
        }
    }));
}

/// Call from the hydrate/csr entry points before mounting.
pub fn init() {
    log!("[PANIC_HOOK] Setting up custom panic hook");
    set_custom_panic_hook();
    log!("[PANIC_HOOK] Custom panic hook set up successfully");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panic_message_from_payloads() {
        let owned: Box<dyn Any + Send> = Box::new(String::from("index out of bounds"));
        assert_eq!(panic_message(owned.as_ref()), "index out of bounds");

        let literal: Box<dyn Any + Send> = Box::new("boom");
        assert_eq!(panic_message(literal.as_ref()), "boom");

        let other: Box<dyn Any + Send> = Box::new(42_u32);
        assert_eq!(panic_message(other.as_ref()), "Unknown panic");
    }

    #[test]
    fn test_signal_borrow_panics_are_recognised() {
        assert!(is_signal_borrow_panic("already borrowed: BorrowMutError"));
        assert!(is_signal_borrow_panic("RefCell already borrowed"));
        assert!(!is_signal_borrow_panic("called `Option::unwrap()` on a `None` value"));
    }
}
