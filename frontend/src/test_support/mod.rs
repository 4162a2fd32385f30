//! Shared fixtures for host-side tests.

pub mod fixtures {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::router::Navigator;
    use crate::session::{Session, SessionStore};

    /// In-memory [`SessionStore`] standing in for browser localStorage.
    #[derive(Default)]
    pub struct MemoryStore {
        session: RefCell<Option<Session>>,
        locale: RefCell<Option<String>>,
    }

    impl MemoryStore {
        pub fn empty() -> Rc<Self> {
            Rc::new(Self::default())
        }

        pub fn with_session(session: Session) -> Rc<Self> {
            Rc::new(Self {
                session: RefCell::new(Some(session)),
                locale: RefCell::new(None),
            })
        }

        pub fn with_locale(locale: &str) -> Rc<Self> {
            Rc::new(Self {
                session: RefCell::new(None),
                locale: RefCell::new(Some(locale.to_string())),
            })
        }
    }

    impl SessionStore for MemoryStore {
        fn load_session(&self) -> Option<Session> {
            self.session.borrow().clone()
        }

        fn save_session(&self, session: &Session) {
            *self.session.borrow_mut() = Some(session.clone());
        }

        fn clear_session(&self) {
            *self.session.borrow_mut() = None;
        }

        fn locale(&self) -> Option<String> {
            self.locale.borrow().clone()
        }

        fn set_locale(&self, locale: &str) {
            *self.locale.borrow_mut() = Some(locale.to_string());
        }
    }

    /// [`Navigator`] that records redirects instead of touching a window.
    pub struct RecordingNavigator {
        path: RefCell<String>,
        redirects: RefCell<Vec<String>>,
    }

    impl RecordingNavigator {
        pub fn at(path: &str) -> Rc<Self> {
            Rc::new(Self {
                path: RefCell::new(path.to_string()),
                redirects: RefCell::new(Vec::new()),
            })
        }

        pub fn redirects(&self) -> Vec<String> {
            self.redirects.borrow().clone()
        }
    }

    impl Navigator for RecordingNavigator {
        fn current_path(&self) -> Option<String> {
            Some(self.path.borrow().clone())
        }

        fn redirect_to(&self, path: &str) {
            self.redirects.borrow_mut().push(path.to_string());
            *self.path.borrow_mut() = path.to_string();
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod ssr {
    use leptos::IntoView;

    /// Render a view to HTML on the host, with resource loading suppressed
    /// so views holding `create_local_resource` render synchronously.
    pub fn render_to_string<F, V>(f: F) -> String
    where
        F: FnOnce() -> V + 'static,
        V: IntoView,
    {
        leptos_reactive::suppress_resource_load(true);
        let html = leptos::ssr::render_to_string(f).to_string();
        leptos_reactive::suppress_resource_load(false);
        html
    }
}
