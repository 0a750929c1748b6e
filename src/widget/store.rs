//! The bound storage handle.
//!
//! The widget reads its serialized value from, and syncs it back to, a
//! host-owned store. On the web that store is the form's `<textarea>`;
//! tests and CLI hosts use an in-memory store.

/// Host-owned storage for the serialized value.
pub trait ValueStore {
    /// Current stored value.
    fn read(&self) -> String;
    /// Replace the stored value.
    fn write(&mut self, value: &str);
}

/// In-memory store for tests and non-DOM hosts.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: String,
}

impl MemoryStore {
    #[must_use]
    pub fn new(initial: impl Into<String>) -> Self {
        MemoryStore {
            value: initial.into(),
        }
    }

    /// Direct view of the stored value (host side of the contract).
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Host-side replacement of the stored value (e.g. before a reload).
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }
}

impl ValueStore for MemoryStore {
    fn read(&self) -> String {
        self.value.clone()
    }

    fn write(&mut self, value: &str) {
        self.value = value.to_string();
    }
}

/// Store backed by a form `<textarea>` (wasm32 only).
#[cfg(target_arch = "wasm32")]
pub struct TextAreaStore {
    element: web_sys::HtmlTextAreaElement,
}

#[cfg(target_arch = "wasm32")]
impl TextAreaStore {
    #[must_use]
    pub fn new(element: web_sys::HtmlTextAreaElement) -> Self {
        TextAreaStore { element }
    }
}

#[cfg(target_arch = "wasm32")]
impl ValueStore for TextAreaStore {
    fn read(&self) -> String {
        self.element.value()
    }

    fn write(&mut self, value: &str) {
        self.element.set_value(value);
    }
}
