use std::cell::RefCell;
use std::rc::Rc;

/// localStorage key holding the session token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Durable home for the session token.
///
/// Implementations never fail loudly: a storage backend that is missing or
/// refuses writes simply behaves as if nothing was persisted.
pub trait TokenStorage {
    fn load(&self) -> Option<String>;
    fn store(&self, token: &str);
    fn clear(&self);
}

#[cfg(target_arch = "wasm32")]
pub fn window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

#[cfg(target_arch = "wasm32")]
pub fn local_storage() -> Result<web_sys::Storage, String> {
    window()?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}

/// Browser `localStorage`. Outside the browser there is nothing durable to
/// talk to, so every call degrades to "nothing stored".
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTokenStorage;

#[cfg(target_arch = "wasm32")]
impl TokenStorage for LocalTokenStorage {
    fn load(&self) -> Option<String> {
        match local_storage() {
            Ok(storage) => storage.get_item(ACCESS_TOKEN_KEY).ok().flatten(),
            Err(err) => {
                log::warn!("Session token not restored: {}", err);
                None
            }
        }
    }

    fn store(&self, token: &str) {
        let result = local_storage().and_then(|storage| {
            storage
                .set_item(ACCESS_TOKEN_KEY, token)
                .map_err(|_| "Failed to write token".to_string())
        });
        if let Err(err) = result {
            log::warn!("Session token not persisted: {}", err);
        }
    }

    fn clear(&self) {
        if let Ok(storage) = local_storage() {
            let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl TokenStorage for LocalTokenStorage {
    fn load(&self) -> Option<String> {
        None
    }

    fn store(&self, _token: &str) {}

    fn clear(&self) {}
}

/// In-process storage. Shared clones see the same slot, which lets tests
/// simulate a page reload by building a second store over the same memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStorage {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryTokenStorage {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(token.into()))),
        }
    }

    pub fn snapshot(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl TokenStorage for MemoryTokenStorage {
    fn load(&self) -> Option<String> {
        self.snapshot()
    }

    fn store(&self, token: &str) {
        *self.slot.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        self.slot.borrow_mut().take();
    }
}

pub fn browser_token_storage() -> Rc<dyn TokenStorage> {
    Rc::new(LocalTokenStorage)
}
